use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

const CITY_SUFFIX: &str = ", kreisfreie Stadt";
const LANDKREIS_MARKER: &str = ", Landkreis";

/// Errors raised while extracting district names from the input CSV.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read district CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("column '{column}' not found in district CSV")]
    MissingColumn { column: String },
}

/// Normalize one raw district label into the canonical naming scheme.
///
/// Independent cities lose their ", kreisfreie Stadt" qualifier. Rural
/// districts are rewritten from the ", Landkreis" suffix form to the
/// "Landkreis " prefix form. The Landkreis check runs on the value *after*
/// the city suffix is stripped, so labels carrying both markers are
/// transformed in sequence. Anything else passes through unchanged.
pub fn normalize_label(raw: &str) -> String {
    let value = raw.replace(CITY_SUFFIX, "");
    if value.contains(LANDKREIS_MARKER) {
        format!("Landkreis {}", value.replace(LANDKREIS_MARKER, "").trim())
    } else {
        value
    }
}

/// Read the named column from a CSV file and return the sorted, deduplicated
/// list of normalized district names.
pub fn extract_unique_districts(
    csv_path: &Path,
    district_column: &str,
) -> Result<Vec<String>, ExtractError> {
    let mut reader = csv::Reader::from_path(csv_path)?;

    let column_index = reader
        .headers()?
        .iter()
        .position(|h| h == district_column)
        .ok_or_else(|| ExtractError::MissingColumn {
            column: district_column.to_string(),
        })?;

    let mut districts = BTreeSet::new();

    for record in reader.records() {
        let record = record?;
        let Some(value) = record.get(column_index) else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }
        districts.insert(normalize_label(value));
    }

    let districts: Vec<String> = districts.into_iter().collect();
    println!("Extracted {} unique district names", districts.len());

    Ok(districts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_city_suffix_is_stripped() {
        assert_eq!(normalize_label("München, kreisfreie Stadt"), "München");
        assert_eq!(normalize_label("Augsburg, kreisfreie Stadt"), "Augsburg");
    }

    #[test]
    fn test_landkreis_suffix_becomes_prefix() {
        assert_eq!(
            normalize_label("Starnberg, Landkreis"),
            "Landkreis Starnberg"
        );
        assert_eq!(
            normalize_label("Bad Tölz-Wolfratshausen, Landkreis"),
            "Landkreis Bad Tölz-Wolfratshausen"
        );
    }

    #[test]
    fn test_canonical_names_pass_through() {
        assert_eq!(normalize_label("München"), "München");
        assert_eq!(normalize_label("Landkreis Starnberg"), "Landkreis Starnberg");
    }

    #[test]
    fn test_both_markers_are_applied_in_sequence() {
        // City suffix is stripped first; the Landkreis rule then fires on
        // the post-strip value.
        assert_eq!(
            normalize_label("Hof, Landkreis, kreisfreie Stadt"),
            "Landkreis Hof"
        );
    }

    #[test]
    fn test_extraction_dedupes_and_sorts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "district,population").unwrap();
        writeln!(file, "\"Starnberg, Landkreis\",100").unwrap();
        writeln!(file, "\"München, kreisfreie Stadt\",200").unwrap();
        writeln!(file, "\"Starnberg, Landkreis\",300").unwrap();
        writeln!(file, "Ansbach,400").unwrap();
        writeln!(file, ",500").unwrap();
        file.flush().unwrap();

        let districts = extract_unique_districts(file.path(), "district").unwrap();
        assert_eq!(districts, vec!["Ansbach", "Landkreis Starnberg", "München"]);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,population").unwrap();
        writeln!(file, "Ansbach,400").unwrap();
        file.flush().unwrap();

        let err = extract_unique_districts(file.path(), "district").unwrap_err();
        assert!(matches!(err, ExtractError::MissingColumn { .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = extract_unique_districts(Path::new("/nonexistent/districts.csv"), "district");
        assert!(err.is_err());
    }
}
