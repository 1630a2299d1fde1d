use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{debug, warn};

use crate::{
    DataIntegrityWarning, LoadError, MeshName, MuscleGroup, MuscleID, MuscleRecord, Row, Table,
};

/// Lookup tables over the muscle correlation table.
///
/// The index is immutable once built and can be shared between threads without
/// synchronization.
#[derive(Debug, Clone)]
pub struct MuscleCorrelationIndex {
    records: Vec<MuscleRecord>,
    group_by_muscle_id: HashMap<MuscleID, MuscleGroup>,
    mesh_names_by_group: BTreeMap<MuscleGroup, BTreeSet<MeshName>>,
    mesh_names_by_muscle_id: HashMap<MuscleID, BTreeSet<MeshName>>,
    record_by_mesh_name: HashMap<MeshName, usize>,
    warnings: Vec<DataIntegrityWarning>,
}

impl MuscleCorrelationIndex {
    /// Builds the index from the rows of the muscle correlation table.
    ///
    /// Malformed rows are skipped and recorded as warnings. Blank rows are ignored.
    pub fn build(rows: impl IntoIterator<Item = Row>) -> Result<Self, LoadError> {
        let mut records = vec![];
        let mut warnings = vec![];
        let mut row_count = 0;

        for row in rows {
            if row.is_blank() {
                continue;
            }
            row_count += 1;
            match MuscleRecord::from_row(&row) {
                Ok(record) => records.push(record),
                Err(warning) => {
                    warn!("skipping row: {warning}");
                    warnings.push(warning);
                }
            }
        }

        if row_count == 0 {
            return Err(LoadError::Empty(Table::MuscleCorrelations));
        }

        Self::from_parts(records, warnings)
    }

    pub fn from_records(records: impl IntoIterator<Item = MuscleRecord>) -> Result<Self, LoadError> {
        Self::from_parts(records, vec![])
    }

    fn from_parts(
        records: impl IntoIterator<Item = MuscleRecord>,
        warnings: Vec<DataIntegrityWarning>,
    ) -> Result<Self, LoadError> {
        let mut index = Self {
            records: vec![],
            group_by_muscle_id: HashMap::new(),
            mesh_names_by_group: BTreeMap::new(),
            mesh_names_by_muscle_id: HashMap::new(),
            record_by_mesh_name: HashMap::new(),
            warnings,
        };

        for record in records {
            index.insert(record);
        }

        if index.records.is_empty() {
            return Err(LoadError::NoValidRows(Table::MuscleCorrelations));
        }

        debug!(
            "indexed {} muscle heads in {} groups",
            index.records.len(),
            index.mesh_names_by_group.len()
        );

        Ok(index)
    }

    fn insert(&mut self, record: MuscleRecord) {
        if let Some(first) = self
            .record_by_mesh_name
            .get(&record.mesh_name)
            .map(|position| &self.records[*position])
        {
            if first.unique_head_id != record.unique_head_id {
                let warning = DataIntegrityWarning::DuplicateMeshName {
                    mesh_name: record.mesh_name.clone(),
                    first: first.unique_head_id,
                    second: record.unique_head_id,
                };
                warn!("skipping muscle head: {warning}");
                self.warnings.push(warning);
                return;
            }
        }

        if let Some(previous) = self
            .group_by_muscle_id
            .insert(record.muscle_id, record.muscle_group.clone())
        {
            if previous != record.muscle_group {
                let warning = DataIntegrityWarning::InconsistentGroup {
                    muscle_id: record.muscle_id,
                    previous,
                    current: record.muscle_group.clone(),
                };
                warn!("{warning}");
                self.warnings.push(warning);
            }
        }

        self.mesh_names_by_group
            .entry(record.muscle_group.clone())
            .or_default()
            .insert(record.mesh_name.clone());
        self.mesh_names_by_muscle_id
            .entry(record.muscle_id)
            .or_default()
            .insert(record.mesh_name.clone());
        self.record_by_mesh_name
            .entry(record.mesh_name.clone())
            .or_insert(self.records.len());
        self.records.push(record);
    }

    #[must_use]
    pub fn group_for(&self, muscle_id: MuscleID) -> Option<&MuscleGroup> {
        let group = self.group_by_muscle_id.get(&muscle_id);
        if group.is_none() {
            debug!("unknown muscle ID {muscle_id}");
        }
        group
    }

    #[must_use]
    pub fn mesh_names_for_group(&self, group: &str) -> BTreeSet<MeshName> {
        if let Some(mesh_names) = self.mesh_names_by_group.get(group) {
            mesh_names.clone()
        } else {
            debug!("unknown muscle group \"{group}\"");
            BTreeSet::new()
        }
    }

    /// Returns the union of the mesh names of all given muscles. Unknown IDs are ignored.
    #[must_use]
    pub fn mesh_names_for_muscle_ids(&self, muscle_ids: &[MuscleID]) -> BTreeSet<MeshName> {
        muscle_ids
            .iter()
            .filter_map(|id| {
                let mesh_names = self.mesh_names_by_muscle_id.get(id);
                if mesh_names.is_none() {
                    debug!("unknown muscle ID {id}");
                }
                mesh_names
            })
            .flatten()
            .cloned()
            .collect()
    }

    /// Identifies the muscle head shown by a node of the 3D asset.
    #[must_use]
    pub fn muscle_for_mesh(&self, mesh_name: &str) -> Option<&MuscleRecord> {
        self.record_by_mesh_name
            .get(mesh_name)
            .map(|position| &self.records[*position])
    }

    /// Returns all known muscle groups in alphabetical order.
    pub fn groups(&self) -> impl Iterator<Item = &MuscleGroup> {
        self.mesh_names_by_group.keys()
    }

    #[must_use]
    pub fn records(&self) -> &[MuscleRecord] {
        &self.records
    }

    #[must_use]
    pub fn warnings(&self) -> &[DataIntegrityWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
