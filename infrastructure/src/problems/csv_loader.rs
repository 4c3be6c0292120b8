//! CSV problem loading
//!
//! Problem files are two-column CSV without a header row: prompt first,
//! expected answer second. Extra columns are ignored so a file can carry
//! notes in a third column.
//!
//! ```csv
//! 2+2,4
//! capital of France,Paris
//! ```

use csv::ReaderBuilder;
use drill_domain::{DomainError, Problem, ProblemSet};
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a problem file
///
/// All of these are fatal at the boundary: the session never starts
/// without a valid problem set.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read problem file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: expected at least 2 columns, found {found}")]
    MissingColumns { row: usize, found: usize },

    #[error("Row {row}: {source}")]
    InvalidProblem {
        row: usize,
        #[source]
        source: DomainError,
    },
}

/// Loads problem sets from two-column CSV files
pub struct CsvProblemLoader;

impl CsvProblemLoader {
    /// Load a problem set from a file path
    pub fn load(path: impl AsRef<Path>) -> Result<ProblemSet, LoadError> {
        let path = path.as_ref();
        debug!("Loading problems from {}", path.display());
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        Self::collect(reader)
    }

    /// Load a problem set from any reader (used by tests)
    pub fn load_from_reader<R: Read>(source: R) -> Result<ProblemSet, LoadError> {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);
        Self::collect(reader)
    }

    fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<ProblemSet, LoadError> {
        let mut problems = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row = index + 1;

            let (Some(prompt), Some(expected)) = (record.get(0), record.get(1)) else {
                return Err(LoadError::MissingColumns {
                    row,
                    found: record.len(),
                });
            };

            let problem = Problem::new(prompt, expected)
                .map_err(|source| LoadError::InvalidProblem { row, source })?;
            problems.push(problem);
        }

        debug!("Loaded {} problems", problems.len());
        Ok(ProblemSet::new(problems))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_two_column_file() {
        let csv = "2+2,4\ncapital of France,Paris\n";
        let set = CsvProblemLoader::load_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0].prompt(), "2+2");
        assert_eq!(set.as_slice()[0].expected(), "4");
        assert_eq!(set.as_slice()[1].expected(), "Paris");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "2+2,4,easy one\n";
        let set = CsvProblemLoader::load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0].expected(), "4");
    }

    #[test]
    fn test_quoted_prompt_with_comma() {
        let csv = "\"capital of France, in Europe\",Paris\n";
        let set = CsvProblemLoader::load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            set.as_slice()[0].prompt(),
            "capital of France, in Europe"
        );
    }

    #[test]
    fn test_missing_answer_column_rejected() {
        let csv = "2+2,4\nonly a prompt\n";
        let err = CsvProblemLoader::load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumns { row: 2, found: 1 }
        ));
    }

    #[test]
    fn test_blank_answer_rejected() {
        let csv = "2+2,  \n";
        let err = CsvProblemLoader::load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidProblem { row: 1, .. }));
    }

    #[test]
    fn test_empty_file_yields_empty_set() {
        let set = CsvProblemLoader::load_from_reader("".as_bytes()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = CsvProblemLoader::load("/nonexistent/problems.csv").unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }
}
