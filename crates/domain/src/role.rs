use std::slice::Iter;

use log::debug;
use strum::{AsRefStr, Display};

use crate::{Color, MuscleID, Property};

/// How a muscle participates in an exercise. The declaration order is the order of
/// specificity, most specific first.
#[derive(AsRefStr, Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[strum(serialize_all = "kebab-case")]
pub enum MuscleRole {
    Target,
    Synergist,
    DynamicStabilizer,
    Stabilizer,
    AntagonistStabilizer,
}

impl MuscleRole {
    /// Roles consulted, in order, when determining the muscle groups of an exercise.
    pub const RESOLUTION_ORDER: [MuscleRole; 3] = [
        MuscleRole::Target,
        MuscleRole::Synergist,
        MuscleRole::Stabilizer,
    ];

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            MuscleRole::Target => Color::Red,
            MuscleRole::Synergist => Color::Pink,
            MuscleRole::DynamicStabilizer => Color::Orange,
            MuscleRole::Stabilizer => Color::Yellow,
            MuscleRole::AntagonistStabilizer => Color::Cyan,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Property for MuscleRole {
    fn iter() -> Iter<'static, MuscleRole> {
        static ROLES: [MuscleRole; 5] = [
            MuscleRole::Target,
            MuscleRole::Synergist,
            MuscleRole::DynamicStabilizer,
            MuscleRole::Stabilizer,
            MuscleRole::AntagonistStabilizer,
        ];
        ROLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleRole::Target => "Target",
            MuscleRole::Synergist => "Synergist",
            MuscleRole::DynamicStabilizer => "Dynamic Stabilizer",
            MuscleRole::Stabilizer => "Stabilizer",
            MuscleRole::AntagonistStabilizer => "Antagonist Stabilizer",
        }
    }
}

/// Textual encoding of a muscle ID list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ListEncoding {
    /// `[12] [13]`
    #[default]
    Bracketed,
    /// `12,13` or `[12],[13]`
    Comma,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedMuscleIDs {
    pub ids: Vec<MuscleID>,
    /// Tokens that are not valid muscle IDs.
    pub invalid: Vec<String>,
    pub encoding: ListEncoding,
}

/// Parses a muscle ID list in either the bracketed or the comma-separated encoding.
///
/// A field containing a comma is read as comma-separated, everything else as bracketed. Tokens
/// are stripped of whitespace and brackets. Empty tokens are ignored, tokens that are not
/// unsigned integers are collected in `invalid`.
#[must_use]
pub fn parse_muscle_ids(field: &str) -> ParsedMuscleIDs {
    let inner = field.trim().trim_matches(['[', ']', ' ']);
    let encoding = if inner.contains(',') {
        ListEncoding::Comma
    } else {
        ListEncoding::Bracketed
    };
    let separator = match encoding {
        ListEncoding::Bracketed => ']',
        ListEncoding::Comma => ',',
    };

    let mut parsed = ParsedMuscleIDs {
        encoding,
        ..ParsedMuscleIDs::default()
    };

    for token in inner
        .split(separator)
        .map(|t| t.trim_matches(|c: char| c.is_whitespace() || c == '[' || c == ']'))
        .filter(|t| !t.is_empty())
    {
        match token.parse::<u32>() {
            Ok(id) => parsed.ids.push(id.into()),
            Err(err) => {
                debug!("ignoring invalid muscle ID \"{token}\": {err}");
                parsed.invalid.push(token.to_string());
            }
        }
    }

    parsed
}

#[must_use]
pub fn format_muscle_ids(ids: &[MuscleID], encoding: ListEncoding) -> String {
    match encoding {
        ListEncoding::Bracketed => ids
            .iter()
            .map(|id| format!("[{id}]"))
            .collect::<Vec<_>>()
            .join(" "),
        ListEncoding::Comma => ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn ids(ids: &[u32]) -> Vec<MuscleID> {
        ids.iter().copied().map(MuscleID::from).collect()
    }

    #[rstest]
    #[case::empty("", &[], ListEncoding::Bracketed)]
    #[case::only_brackets("[ ]", &[], ListEncoding::Bracketed)]
    #[case::single("[12]", &[12], ListEncoding::Bracketed)]
    #[case::bracketed("[12] [13]", &[12, 13], ListEncoding::Bracketed)]
    #[case::bracketed_padded("  [12] [ 13 ] [7]  ", &[12, 13, 7], ListEncoding::Bracketed)]
    #[case::bracketed_adjacent("[12][13]", &[12, 13], ListEncoding::Bracketed)]
    #[case::bare("12", &[12], ListEncoding::Bracketed)]
    #[case::comma("12,13", &[12, 13], ListEncoding::Comma)]
    #[case::comma_enclosed("[12, 13]", &[12, 13], ListEncoding::Comma)]
    #[case::comma_bracketed_tokens("[12],[13]", &[12, 13], ListEncoding::Comma)]
    #[case::comma_empty_token("12,,13,", &[12, 13], ListEncoding::Comma)]
    #[case::zero("[0]", &[0], ListEncoding::Bracketed)]
    #[case::duplicates("[5] [5]", &[5, 5], ListEncoding::Bracketed)]
    fn test_parse_muscle_ids(
        #[case] field: &str,
        #[case] expected: &[u32],
        #[case] encoding: ListEncoding,
    ) {
        assert_eq!(
            parse_muscle_ids(field),
            ParsedMuscleIDs {
                ids: ids(expected),
                invalid: vec![],
                encoding,
            }
        );
    }

    #[rstest]
    #[case::word("[12] [abc] [13]", &[12, 13], &["abc"])]
    #[case::negative("[-1] [4]", &[4], &["-1"])]
    #[case::decimal("1.5, 2", &[2], &["1.5"])]
    #[case::all_invalid("[x] [y]", &[], &["x", "y"])]
    fn test_parse_muscle_ids_invalid_tokens(
        #[case] field: &str,
        #[case] expected: &[u32],
        #[case] invalid: &[&str],
    ) {
        let parsed = parse_muscle_ids(field);

        assert_eq!(parsed.ids, ids(expected));
        assert_eq!(parsed.invalid, invalid);
    }

    #[rstest]
    #[case("[12] [13] [7]")]
    #[case("[12]")]
    #[case("12, 13, 7")]
    #[case("[12],[13]")]
    #[case("[1] [x] [3]")]
    #[case("")]
    fn test_parse_format_idempotent(#[case] field: &str) {
        let parsed = parse_muscle_ids(field);
        let reparsed = parse_muscle_ids(&format_muscle_ids(&parsed.ids, parsed.encoding));

        assert_eq!(reparsed.ids, parsed.ids);
        assert!(reparsed.invalid.is_empty());
    }

    #[rstest]
    #[case(&[12, 13], ListEncoding::Bracketed, "[12] [13]")]
    #[case(&[12, 13], ListEncoding::Comma, "12,13")]
    #[case(&[], ListEncoding::Comma, "")]
    fn test_format_muscle_ids(
        #[case] input: &[u32],
        #[case] encoding: ListEncoding,
        #[case] expected: &str,
    ) {
        assert_eq!(format_muscle_ids(&ids(input), encoding), expected);
    }

    #[test]
    fn test_muscle_role_iter_ordered_by_specificity() {
        let roles = MuscleRole::iter().copied().collect::<Vec<_>>();
        let mut sorted = roles.clone();
        sorted.sort();

        assert_eq!(roles, sorted);
        assert_eq!(roles.len(), 5);
    }

    #[test]
    fn test_muscle_role_name() {
        let mut names = HashSet::new();

        for role in MuscleRole::iter() {
            let name = role.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_muscle_role_color() {
        let colors = MuscleRole::iter()
            .map(|r| r.color())
            .collect::<HashSet<_>>();

        assert_eq!(colors.len(), 5);
    }

    #[rstest]
    #[case(MuscleRole::Target, "target")]
    #[case(MuscleRole::DynamicStabilizer, "dynamic-stabilizer")]
    #[case(MuscleRole::AntagonistStabilizer, "antagonist-stabilizer")]
    fn test_muscle_role_display(#[case] role: MuscleRole, #[case] expected: &str) {
        assert_eq!(role.to_string(), expected);
        assert_eq!(role.as_ref(), expected);
    }
}
