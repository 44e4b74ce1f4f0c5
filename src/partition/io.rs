use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::partition::Partition;

impl Partition {
    /// Load an assignment file: a JSON object mapping unit id to district label.
    pub fn read_from_json(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read assignment file: {}", path.display()))?;

        serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse assignment file: {}", path.display()))
    }

    /// Write the assignments as a JSON object file.
    pub fn write_to_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self).context("Failed to serialize assignments")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write assignment file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::unit::UnitId;

    use super::*;

    #[test]
    fn file_round_trip() {
        let partition = Partition::from_assignments([
            (UnitId::new("a"), 3),
            (UnitId::new("b"), 17),
        ]);

        let path = std::env::temp_dir().join("beatline-assignments-test.json");
        partition.write_to_json(&path).unwrap();
        let back = Partition::read_from_json(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(back, partition);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Partition::read_from_json(Path::new("/nonexistent/assignments.json")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read assignment file"));
    }
}
