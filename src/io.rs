//! Flat text snapshots: one row per line, whitespace-separated 0/1 cells.

use std::{fs, path::Path};

use thiserror::Error;

use crate::Matrix;

/// Failures while reading or decoding a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Underlying filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A cell token did not parse as a small integer.
    #[error("line {line}: invalid cell value {token:?}")]
    InvalidCell {
        /// 1-indexed line in the snapshot.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A row had a different width than the first one.
    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        /// 1-indexed line in the snapshot.
        line: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// The snapshot contained no rows at all.
    #[error("snapshot is empty")]
    Empty,
}

/// Decodes a snapshot into a dense matrix. Blank lines are skipped.
pub fn parse_matrix(text: &str) -> Result<Matrix, SnapshotError> {
    let mut matrix = Matrix::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<u8>().map_err(|_| SnapshotError::InvalidCell {
                    line: line_number,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        if let Some(first) = matrix.first() {
            if row.len() != first.len() {
                return Err(SnapshotError::RaggedRow {
                    line: line_number,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        matrix.push(row);
    }
    if matrix.is_empty() {
        return Err(SnapshotError::Empty);
    }
    Ok(matrix)
}

/// Encodes a matrix in the snapshot format, trailing newline included.
pub fn format_matrix(matrix: &Matrix) -> String {
    let mut result = String::new();
    for row in matrix {
        let cells: Vec<String> = row.iter().map(u8::to_string).collect();
        result.push_str(&cells.join(" "));
        result.push('\n');
    }
    result
}

/// Reads and decodes the snapshot at `path`.
pub fn load_matrix(path: &Path) -> Result<Matrix, SnapshotError> {
    parse_matrix(&fs::read_to_string(path)?)
}

/// Encodes `matrix` and writes it to `path`.
pub fn save_matrix(path: &Path, matrix: &Matrix) -> Result<(), SnapshotError> {
    fs::write(path, format_matrix(matrix))?;
    Ok(())
}

#[test]
fn test_parse_matrix() {
    let matrix = parse_matrix("0 1 0\n1 1 0\n\n0 0 1\n").unwrap();
    assert_eq!(
        matrix,
        vec![vec![0, 1, 0], vec![1, 1, 0], vec![0, 0, 1]]
    );
}

#[test]
fn test_parse_rejects_bad_cell() {
    assert!(matches!(
        parse_matrix("0 1\nx 0\n"),
        Err(SnapshotError::InvalidCell { line: 2, .. })
    ));
}

#[test]
fn test_parse_rejects_ragged_row() {
    assert!(matches!(
        parse_matrix("0 1 0\n1 1\n"),
        Err(SnapshotError::RaggedRow {
            line: 2,
            expected: 3,
            found: 2,
        })
    ));
}

#[test]
fn test_parse_rejects_empty() {
    assert!(matches!(parse_matrix("\n  \n"), Err(SnapshotError::Empty)));
}

#[test]
fn test_format_round_trip() {
    let matrix = vec![vec![1, 0, 1], vec![0, 0, 0]];
    let text = format_matrix(&matrix);
    assert_eq!(text, "1 0 1\n0 0 0\n");
    assert_eq!(parse_matrix(&text).unwrap(), matrix);
}
