use std::collections::{BTreeMap, BTreeSet};

use strum::{AsRefStr, Display};

use crate::{ExerciseRecord, MeshName, MuscleCorrelationIndex, MuscleGroup, MuscleRole, Property};

#[derive(AsRefStr, Display, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Red,
    Pink,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Indigo,
    Purple,
    Brown,
    Gray,
    White,
}

/// Colors of the muscle groups in the exercise browser.
#[must_use]
pub fn default_group_colors() -> BTreeMap<MuscleGroup, Color> {
    [
        ("Neck", Color::Red),
        ("Shoulders", Color::Green),
        ("Upper Arms", Color::Blue),
        ("Forearms", Color::Orange),
        ("Back", Color::Purple),
        ("Chest", Color::Yellow),
        ("Waist", Color::Brown),
        ("Hips", Color::Pink),
        ("Thighs", Color::Indigo),
        ("Calves", Color::Cyan),
    ]
    .into_iter()
    .map(|(group, color)| (MuscleGroup::from(group), color))
    .collect()
}

/// A set of meshes to be drawn in one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight<K, C> {
    pub key: K,
    pub color: C,
    pub meshes: BTreeSet<MeshName>,
}

/// Meshes of the muscles of one exercise, one entry per role in order of specificity. Each mesh
/// is part of at most one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleHighlights(Vec<Highlight<MuscleRole, Color>>);

impl RoleHighlights {
    #[must_use]
    pub fn meshes(&self, role: MuscleRole) -> &BTreeSet<MeshName> {
        &self.0[role.index()].meshes
    }

    #[must_use]
    pub fn color_of(&self, mesh_name: &str) -> Option<Color> {
        self.0
            .iter()
            .find(|h| h.meshes.contains(mesh_name))
            .map(|h| h.color)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|h| h.meshes.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Highlight<MuscleRole, Color>> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Highlight<MuscleRole, Color>> {
        self.0
    }
}

/// Determines the meshes to highlight for each role of an exercise.
///
/// A mesh reachable through several roles is only assigned to the most specific one.
#[must_use]
pub fn exercise_highlights(
    exercise: &ExerciseRecord,
    index: &MuscleCorrelationIndex,
) -> RoleHighlights {
    let mut assigned = BTreeSet::new();

    RoleHighlights(
        MuscleRole::iter()
            .map(|role| {
                let meshes = index
                    .mesh_names_for_muscle_ids(exercise.muscles.get(*role))
                    .into_iter()
                    .filter(|m| assigned.insert(m.clone()))
                    .collect();
                Highlight {
                    key: *role,
                    color: role.color(),
                    meshes,
                }
            })
            .collect(),
    )
}

/// Determines the meshes to highlight for the active muscle groups.
///
/// Groups without an entry in `colors` are drawn in `fallback`. Repeated groups are ignored and
/// a mesh is only assigned to the first group containing it.
#[must_use]
pub fn group_highlights<C: Clone>(
    groups: &[MuscleGroup],
    index: &MuscleCorrelationIndex,
    colors: &BTreeMap<MuscleGroup, C>,
    fallback: &C,
) -> Vec<Highlight<MuscleGroup, C>> {
    let mut seen = BTreeSet::new();
    let mut assigned = BTreeSet::new();

    groups
        .iter()
        .filter(|group| seen.insert(*group))
        .map(|group| Highlight {
            key: group.clone(),
            color: colors.get(group).unwrap_or(fallback).clone(),
            meshes: index
                .mesh_names_for_group(group.as_ref())
                .into_iter()
                .filter(|m| assigned.insert(m.clone()))
                .collect(),
        })
        .collect()
}
