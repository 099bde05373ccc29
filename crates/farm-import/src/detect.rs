//! Header-row inference over a raw cell grid.
//!
//! Real order sheets from non-technical senders carry titles, dates and
//! merged-cell decorations above the actual header, and the header wording
//! itself varies. Instead of assuming a fixed offset, every early row is
//! scored by how many semantic fields its cells recognize; the best-scoring
//! row that names at least a name or phone column becomes the header.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::ImportError;
use crate::keywords::{Field, KeywordTable};

/// Header rows are assumed to appear early; scanning stops after this many
/// rows to bound cost on large sheets.
pub const SCAN_LIMIT: usize = 20;

/// Literal text produced when a missing numeric cell is stringified
/// upstream. Treated as empty everywhere, never as data.
pub const NAN_SENTINEL: &str = "nan";

/// Immutable result of header detection: the header row index and the
/// field-to-column mapping built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub row: usize,
    columns: BTreeMap<Field, usize>,
}

impl HeaderMatch {
    #[must_use]
    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    #[must_use]
    pub fn mapped_fields(&self) -> usize {
        self.columns.len()
    }
}

/// Strips all whitespace (including newlines) and lowercases, so that
/// `"받는 분\n성함"` and `"받는분성함"` compare equal.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// True when a trimmed cell is the stringified-missing-value artifact.
pub(crate) fn is_nan_sentinel(trimmed: &str) -> bool {
    trimmed.eq_ignore_ascii_case(NAN_SENTINEL)
}

/// Locates the most plausible header row within the first [`SCAN_LIMIT`]
/// rows of the grid.
///
/// Each row is scored by the number of semantic fields whose synonyms appear
/// in its cells (first matching cell wins per field, fields tried in
/// [`Field::PRIORITY`] order). A row replaces the running best only when its
/// score is strictly greater and its mapping contains `Name` or `Phone`, so
/// equal-scoring later rows never displace an earlier winner.
pub fn detect_header(grid: &[Vec<String>], keywords: &KeywordTable) -> Result<HeaderMatch, ImportError> {
    let mut best: Option<HeaderMatch> = None;
    let mut best_matches = 0usize;

    for (row_idx, row) in grid.iter().take(SCAN_LIMIT).enumerate() {
        let mut mapping: BTreeMap<Field, usize> = BTreeMap::new();
        let mut matches = 0usize;

        for (col_idx, cell) in row.iter().enumerate() {
            let clean = normalize_cell(cell);
            if clean.is_empty() || clean == NAN_SENTINEL {
                continue;
            }
            for (field, synonyms) in keywords.iter() {
                if mapping.contains_key(&field) {
                    continue;
                }
                if synonyms.iter().any(|s| clean.contains(s)) {
                    trace!(row = row_idx, column = col_idx, field = field.as_str(), "header cell matched");
                    mapping.insert(field, col_idx);
                    matches += 1;
                }
            }
        }

        let anchored = mapping.contains_key(&Field::Name) || mapping.contains_key(&Field::Phone);
        if matches > best_matches && anchored {
            debug!(row = row_idx, matches, "new best header candidate");
            best_matches = matches;
            best = Some(HeaderMatch {
                row: row_idx,
                columns: mapping,
            });
        }
    }

    best.ok_or(ImportError::HeaderNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn finds_header_below_title_rows() {
        let grid = grid(&[
            &["주문서", "", ""],
            &["", "", ""],
            &["이름", "연락처", "수량"],
            &["홍길동", "010-1111-2222", "2"],
        ]);
        let header = detect_header(&grid, &KeywordTable::default()).unwrap();
        assert_eq!(header.row, 2);
        assert_eq!(header.column(Field::Name), Some(0));
        assert_eq!(header.column(Field::Phone), Some(1));
        assert_eq!(header.column(Field::Qty), Some(2));
    }

    #[test]
    fn earlier_row_wins_ties() {
        // Both rows map name and phone; the later one must not displace it.
        let grid = grid(&[
            &["받는분", "연락처"],
            &["수령인", "전화번호"],
        ]);
        let header = detect_header(&grid, &KeywordTable::default()).unwrap();
        assert_eq!(header.row, 0);
    }

    #[test]
    fn rejects_rows_without_name_or_phone() {
        // Address/qty/memo alone never qualify as a header.
        let grid = grid(&[&["주소", "수량", "메모"]]);
        assert!(matches!(
            detect_header(&grid, &KeywordTable::default()),
            Err(ImportError::HeaderNotFound)
        ));
    }

    #[test]
    fn ignores_rows_past_scan_limit() {
        let mut rows: Vec<Vec<String>> = (0..SCAN_LIMIT)
            .map(|_| vec![String::new(), String::new()])
            .collect();
        rows.push(vec!["이름".to_string(), "전화".to_string()]);
        assert!(matches!(
            detect_header(&rows, &KeywordTable::default()),
            Err(ImportError::HeaderNotFound)
        ));
    }

    #[test]
    fn normalizes_spacing_and_case_in_header_cells() {
        let grid = grid(&[&["받는 분\n성함", "H. P 번호"]]);
        let header = detect_header(&grid, &KeywordTable::default()).unwrap();
        assert_eq!(header.column(Field::Name), Some(0));
        assert_eq!(header.column(Field::Phone), Some(1));
    }

    #[test]
    fn nan_cells_never_match() {
        let grid = grid(&[&["NaN", "nan"]]);
        assert!(detect_header(&grid, &KeywordTable::default()).is_err());
    }

    #[test]
    fn field_already_matched_keeps_first_column() {
        // Two name-like cells: the first column claims the name field.
        let grid = grid(&[&["이름", "고객명", "전화"]]);
        let header = detect_header(&grid, &KeywordTable::default()).unwrap();
        assert_eq!(header.column(Field::Name), Some(0));
        assert_eq!(header.column(Field::Phone), Some(2));
    }
}
