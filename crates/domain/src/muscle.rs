use std::{borrow::Borrow, str::FromStr};

use derive_more::{Deref, Display};

use crate::{DataIntegrityWarning, Row, Table};

#[derive(Deref, Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MuscleID(u32);

impl From<u32> for MuscleID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Deref, Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeadTypeID(u32);

impl From<u32> for HeadTypeID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Deref, Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UniqueHeadID(u32);

impl From<u32> for UniqueHeadID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Coarse anatomical category, e.g. "Chest" or "Upper Arms".
#[derive(Display, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MuscleGroup(String);

impl From<&str> for MuscleGroup {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl AsRef<str> for MuscleGroup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MuscleGroup {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Name of the node of a muscle head in the 3D asset.
#[derive(Display, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MeshName(String);

impl From<&str> for MeshName {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl AsRef<str> for MeshName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MeshName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One anatomical head of a muscle as listed in the muscle correlation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleRecord {
    pub muscle_id: MuscleID,
    pub muscle_name: String,
    pub muscle_group: MuscleGroup,
    pub muscle_group_id: Option<u32>,
    pub head_type: String,
    pub head_type_id: HeadTypeID,
    pub unique_head: String,
    pub unique_head_id: UniqueHeadID,
    pub chirality: String,
    pub mesh_name: MeshName,
}

mod column {
    pub const MUSCLE_NAME: usize = 0;
    pub const MUSCLE_ID: usize = 1;
    pub const MUSCLE_GROUP: usize = 4;
    pub const MUSCLE_GROUP_ID: usize = 5;
    pub const HEAD_TYPE: usize = 6;
    pub const HEAD_TYPE_ID: usize = 7;
    pub const UNIQUE_HEAD: usize = 8;
    pub const UNIQUE_HEAD_ID: usize = 9;
    pub const CHIRALITY: usize = 10;
    pub const MESH_NAME: usize = 11;
    pub const COUNT: usize = 12;
}

impl MuscleRecord {
    pub fn from_row(row: &Row) -> Result<Self, DataIntegrityWarning> {
        if row.len() < column::COUNT {
            return Err(DataIntegrityWarning::ColumnCount {
                table: Table::MuscleCorrelations,
                row: row.number,
                expected: column::COUNT,
                found: row.len(),
            });
        }

        if row.is_undecodable() {
            return Err(DataIntegrityWarning::Undecodable {
                table: Table::MuscleCorrelations,
                row: row.number,
            });
        }

        let muscle_name = non_empty(row, column::MUSCLE_NAME, "muscle name")?.to_string();
        let muscle_group = non_empty(row, column::MUSCLE_GROUP, "muscle group")?;
        let mesh_name = non_empty(row, column::MESH_NAME, "mesh reference name")?;
        let muscle_group_id = match text(row, column::MUSCLE_GROUP_ID) {
            "" => None,
            _ => Some(number::<u32>(row, column::MUSCLE_GROUP_ID, "muscle group ID")?),
        };

        Ok(Self {
            muscle_id: number::<u32>(row, column::MUSCLE_ID, "muscle ID")?.into(),
            muscle_name,
            muscle_group: MuscleGroup::from(muscle_group),
            muscle_group_id,
            head_type: text(row, column::HEAD_TYPE).to_string(),
            head_type_id: number::<u32>(row, column::HEAD_TYPE_ID, "head type ID")?.into(),
            unique_head: text(row, column::UNIQUE_HEAD).to_string(),
            unique_head_id: number::<u32>(row, column::UNIQUE_HEAD_ID, "unique head ID")?.into(),
            chirality: text(row, column::CHIRALITY).to_string(),
            mesh_name: MeshName::from(mesh_name),
        })
    }
}

fn text(row: &Row, index: usize) -> &str {
    row.field(index).unwrap_or_default()
}

fn non_empty<'a>(
    row: &'a Row,
    index: usize,
    column: &'static str,
) -> Result<&'a str, DataIntegrityWarning> {
    match text(row, index) {
        "" => Err(invalid(row, index, column)),
        value => Ok(value),
    }
}

fn number<T: FromStr>(
    row: &Row,
    index: usize,
    column: &'static str,
) -> Result<T, DataIntegrityWarning> {
    text(row, index)
        .parse::<T>()
        .map_err(|_| invalid(row, index, column))
}

fn invalid(row: &Row, index: usize, column: &'static str) -> DataIntegrityWarning {
    DataIntegrityWarning::InvalidField {
        table: Table::MuscleCorrelations,
        row: row.number,
        column,
        value: text(row, index).to_string(),
    }
}
