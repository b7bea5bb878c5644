//! Package input files.
//!
//! Two formats are accepted, chosen by file extension:
//! - `.jsonl`: one `{"workout_type": ..., "data": [...]}` object per line
//! - `.csv`: headerless rows of `CODE,reading,reading,...`
//!
//! Unlike the reference list in [`crate::default_packages`], input files are
//! untrusted; any malformed line fails the whole load with its line number.

use crate::{Error, Package, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Load packages from a file, dispatching on its extension
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let file = File::open(path)?;
    let packages = match extension.as_deref() {
        Some("jsonl") => read_jsonl(BufReader::new(file))?,
        Some("csv") => read_csv(file)?,
        _ => {
            return Err(Error::Input(format!(
                "Unsupported input format for {:?} (expected .jsonl or .csv)",
                path
            )))
        }
    };

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

/// Read JSON Lines packages, skipping blank lines
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<Package>> {
    let mut packages = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        let package = serde_json::from_str::<Package>(&line).map_err(|e| {
            Error::Input(format!("Failed to parse package at line {}: {}", line_num + 1, e))
        })?;
        packages.push(package);
    }

    Ok(packages)
}

/// Read headerless CSV packages with a variable number of readings
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Package>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut packages = Vec::new();

    for (row_num, record_result) in csv_reader.records().enumerate() {
        let record = record_result?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(row_num as u64 + 1);

        let mut fields = record.iter();
        let workout_type = match fields.next() {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => {
                return Err(Error::Input(format!(
                    "Missing workout type at line {}",
                    line
                )))
            }
        };

        let data = fields
            .map(|field| {
                field.parse::<f64>().map_err(|e| {
                    Error::Input(format!(
                        "Invalid reading {:?} at line {}: {}",
                        field, line, e
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        packages.push(Package { workout_type, data });
    }

    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_jsonl() {
        let input = r#"{"workout_type":"SWM","data":[720,1,80,25,40]}

{"workout_type":"RUN","data":[1500,1,75]}
"#;
        let packages = read_jsonl(input.as_bytes()).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].workout_type, "SWM");
        assert_eq!(packages[1].data, vec![1500.0, 1.0, 75.0]);
    }

    #[test]
    fn test_read_jsonl_reports_line() {
        let input = "{\"workout_type\":\"RUN\",\"data\":[1500,1,75]}\nnot json\n";
        let err = read_jsonl(input.as_bytes()).unwrap_err();
        match err {
            Error::Input(msg) => assert!(msg.contains("line 2"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_csv_flexible_rows() {
        let input = "SWM,720,1,80,25,40\nRUN, 1500, 1, 75\nWLK,9000,1,75,180\n";
        let packages = read_csv(input.as_bytes()).unwrap();
        assert_eq!(packages.len(), 3);
        assert_eq!(packages[1], Package::new("RUN", vec![1500.0, 1.0, 75.0]));
        assert_eq!(packages[2].data.len(), 4);
    }

    #[test]
    fn test_read_csv_bad_reading() {
        let input = "RUN,1500,one,75\n";
        let err = read_csv(input.as_bytes()).unwrap_err();
        match err {
            Error::Input(msg) => {
                assert!(msg.contains("\"one\""), "{msg}");
                assert!(msg.contains("line 1"), "{msg}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_packages_by_extension() {
        let temp_dir = tempfile::tempdir().unwrap();

        let csv_path = temp_dir.path().join("packages.csv");
        fs::write(&csv_path, "RUN,1500,1,75\n").unwrap();
        assert_eq!(load_packages(&csv_path).unwrap().len(), 1);

        let jsonl_path = temp_dir.path().join("packages.JSONL");
        fs::write(&jsonl_path, "{\"workout_type\":\"RUN\",\"data\":[1500,1,75]}\n").unwrap();
        assert_eq!(load_packages(&jsonl_path).unwrap().len(), 1);
    }

    #[test]
    fn test_load_packages_rejects_unknown_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.txt");
        fs::write(&path, "RUN,1500,1,75\n").unwrap();

        assert!(matches!(load_packages(&path), Err(Error::Input(_))));
    }

    #[test]
    fn test_load_packages_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.csv");

        assert!(matches!(load_packages(&path), Err(Error::Io(_))));
    }
}
