use std::borrow::Cow;

use crate::ReadError;

/// Supplies the raw records of the two lookup tables. Each call yields the complete, finite
/// sequence of rows of one table, header excluded.
pub trait RowSource {
    fn muscle_rows(&self) -> Result<Vec<Row>, ReadError>;
    fn exercise_rows(&self) -> Result<Vec<Row>, ReadError>;
}

/// One record of a table as an ordered list of string fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Position of the record in its source, used in warnings.
    pub number: usize,
    fields: Vec<String>,
    undecodable: bool,
}

impl Row {
    pub fn new<S: Into<String>>(number: usize, fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            number,
            fields: fields.into_iter().map(Into::into).collect(),
            undecodable: false,
        }
    }

    /// Creates a row from raw fields. Invalid UTF-8 is replaced and marks the row as
    /// undecodable.
    pub fn from_bytes<'a>(number: usize, fields: impl IntoIterator<Item = &'a [u8]>) -> Self {
        let mut undecodable = false;
        let fields = fields
            .into_iter()
            .map(|field| {
                let text = String::from_utf8_lossy(field);
                undecodable |= matches!(text, Cow::Owned(_));
                text.into_owned()
            })
            .collect();
        Self {
            number,
            fields,
            undecodable,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if all fields are empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.trim().is_empty())
    }

    #[must_use]
    pub fn is_undecodable(&self) -> bool {
        self.undecodable
    }

    /// Returns the whitespace-trimmed field at `index`.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|f| f.trim())
    }
}
