use std::path::Path;

use log::debug;

use super::error::Error;
use crate::model::record::CompositionRecord;

/// Loads a composition table from a CSV file.
///
/// The file must carry a header row; the first three fields of every
/// record are taken positionally as (id, composition, target). Field
/// values are read verbatim with no missing-value token substitution,
/// so a material whose formula is literally the string "NaN" survives
/// loading intact.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<CompositionRecord>, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::missing_file(path));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() < 3 {
            return Err(Error::table(
                row,
                format!(
                    "expected at least 3 fields (id, composition, target), found {}",
                    record.len()
                ),
            ));
        }
        let target = record[2].trim().parse::<f64>().map_err(|_| {
            Error::table(row, format!("target '{}' is not a number", &record[2]))
        })?;
        records.push(CompositionRecord::new(&record[0], &record[1], target));
    }

    debug!(
        "loaded {} composition records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_id_composition_target_rows() {
        let (_dir, path) = write_csv(
            "material_id,composition,target\n\
             mp-1,Fe2O3,1.5\n\
             mp-2,LiFeO2,-0.25\n",
        );
        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "mp-1");
        assert_eq!(records[0].composition, "Fe2O3");
        assert_eq!(records[0].target, 1.5);
        assert_eq!(records[1].target, -0.25);
    }

    #[test]
    fn nan_composition_string_survives_loading() {
        // "NaN" is a valid sodium-nitrogen formula, not a missing value.
        let (_dir, path) = write_csv("id,composition,target\nmp-3,NaN,0.1\n");
        let records = load_records(&path).unwrap();
        assert_eq!(records[0].composition, "NaN");
    }

    #[test]
    fn rejects_non_numeric_target() {
        let (_dir, path) = write_csv("id,composition,target\nmp-1,Fe2O3,high\n");
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, Error::Table { row: 0, .. }));
        assert!(err.to_string().contains("'high'"));
    }

    #[test]
    fn rejects_short_rows() {
        let (_dir, path) = write_csv("id,composition\nmp-1,Fe2O3\n");
        let result = load_records(&path);
        assert!(matches!(result, Err(Error::Table { .. }) | Err(Error::Csv { .. })));
    }

    #[test]
    fn fails_eagerly_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let result = load_records(&path);
        assert!(matches!(result, Err(Error::MissingFile { .. })));
    }
}
