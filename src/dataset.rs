use std::path::Path;

use anyhow::Context;

use crate::models::Dataset;

/// Load the survey CSV into memory. A missing file or an unparseable row is
/// fatal here; per-cell problems (blank or non-numeric values) are left for
/// the aggregator to skip.
pub fn load_csv(path: &Path) -> anyhow::Result<Dataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .context("dataset has no header row")?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.with_context(|| format!("bad row in {}", path.display()))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(Dataset::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("habit-survey-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_headers_and_rows() {
        let path = write_fixture(
            "load.csv",
            "country,gender,drinks_per_week,smokes_per_day\nNorway,Female,4.5,0\nChile,Male,7,12\n",
        );
        let dataset = load_csv(&path).unwrap();
        assert_eq!(
            dataset.columns(),
            &["country", "gender", "drinks_per_week", "smokes_per_day"]
        );
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[1][0], "Chile");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("habit-survey-does-not-exist.csv");
        assert!(load_csv(&path).is_err());
    }

    #[test]
    fn blank_cells_are_not_an_error() {
        let path = write_fixture(
            "blanks.csv",
            "country,drinks_per_week\nNorway,\n,3.0\n",
        );
        let dataset = load_csv(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        std::fs::remove_file(path).unwrap();
    }
}
