use crate::{ExerciseRecord, MuscleCorrelationIndex, MuscleGroup, MuscleRole};

/// Determines the muscle groups trained by an exercise.
///
/// The groups of the target muscles are used if any can be resolved, otherwise those of the
/// synergists and then those of the stabilizers. The groups are returned in order of first
/// appearance. An empty result means that the exercise has no known muscle group.
#[must_use]
pub fn resolve_groups(
    exercise: &ExerciseRecord,
    index: &MuscleCorrelationIndex,
) -> Vec<MuscleGroup> {
    MuscleRole::RESOLUTION_ORDER
        .iter()
        .map(|role| groups_of_role(exercise, *role, index))
        .find(|groups| !groups.is_empty())
        .unwrap_or_default()
}

fn groups_of_role(
    exercise: &ExerciseRecord,
    role: MuscleRole,
    index: &MuscleCorrelationIndex,
) -> Vec<MuscleGroup> {
    let mut groups: Vec<MuscleGroup> = vec![];
    for group in exercise
        .muscles
        .get(role)
        .iter()
        .filter_map(|id| index.group_for(*id))
    {
        if !groups.contains(group) {
            groups.push(group.clone());
        }
    }
    groups
}
