//! Record extraction from the rows beneath a detected header.

use tracing::debug;

use farm_model::Customer;

use crate::detect::{HeaderMatch, detect_header, is_nan_sentinel};
use crate::error::ImportError;
use crate::keywords::{Field, KeywordTable};

/// Runs the full import: header inference followed by row extraction.
///
/// Either yields the complete candidate list or an error; there is no
/// partial success. The caller owns duplicate suppression and persistence.
pub fn import_records(
    grid: &[Vec<String>],
    keywords: &KeywordTable,
) -> Result<Vec<Customer>, ImportError> {
    let header = detect_header(grid, keywords)?;
    let records = extract_records(grid, &header);
    if records.is_empty() {
        return Err(ImportError::NoDataExtracted);
    }
    debug!(
        header_row = header.row,
        records = records.len(),
        "import extracted records"
    );
    Ok(records)
}

/// Builds one record per usable row strictly below the header, preserving
/// input order.
///
/// A row without a non-empty name is silently omitted; that is expected for
/// spacer and total rows, not an error. Per-field parsing degrades to a
/// documented default instead of failing the run.
pub fn extract_records(grid: &[Vec<String>], header: &HeaderMatch) -> Vec<Customer> {
    let mut records = Vec::new();
    for row in grid.iter().skip(header.row + 1) {
        let Some(name) = read_name(row, header) else {
            continue;
        };
        let phone = read_text(row, header, Field::Phone);
        let address = read_text(row, header, Field::Address);
        let memo = read_text(row, header, Field::Memo);
        let qty = read_qty(row, header);
        let Ok(record) = Customer::new(name, phone, address, qty, memo) else {
            continue;
        };
        records.push(record);
    }
    records
}

fn cell<'a>(row: &'a [String], header: &HeaderMatch, field: Field) -> Option<&'a str> {
    let idx = header.column(field)?;
    row.get(idx).map(String::as_str)
}

fn read_name(row: &[String], header: &HeaderMatch) -> Option<String> {
    let raw = cell(row, header, Field::Name)?.trim();
    if raw.is_empty() || is_nan_sentinel(raw) {
        return None;
    }
    Some(raw.to_string())
}

/// Mapped text fields read as trimmed strings with the `"nan"` sentinel
/// replaced by empty; unmapped fields default to empty.
fn read_text(row: &[String], header: &HeaderMatch, field: Field) -> String {
    match cell(row, header, field) {
        Some(raw) => {
            let trimmed = raw.trim();
            if is_nan_sentinel(trimmed) {
                String::new()
            } else {
                trimmed.to_string()
            }
        }
        None => String::new(),
    }
}

/// Quantity cells are parsed as floats then truncated, since exports often
/// stringify counts as `"3.0"`. Anything unparsable, negative, or unmapped
/// falls back to 1.
fn read_qty(row: &[String], header: &HeaderMatch) -> u32 {
    match cell(row, header, Field::Qty) {
        Some(raw) => match raw.trim().parse::<f64>() {
            // qty is unsigned; a negative count clamps to zero (unordered).
            Ok(value) if value.is_finite() => value.trunc().max(0.0) as u32,
            _ => 1,
        },
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    fn header_for(rows: &[Vec<String>]) -> HeaderMatch {
        detect_header(rows, &KeywordTable::default()).expect("header")
    }

    #[test]
    fn skips_rows_with_blank_or_nan_name() {
        let grid = grid(&[
            &["이름", "수량"],
            &["홍길동", "2"],
            &["   ", "3"],
            &["nan", "4"],
            &["김영희", "1"],
        ]);
        let records = extract_records(&grid, &header_for(&grid));
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["홍길동", "김영희"]);
    }

    #[test]
    fn qty_parses_float_strings() {
        let grid = grid(&[&["이름", "수량"], &["홍길동", "3.0"]]);
        let records = extract_records(&grid, &header_for(&grid));
        assert_eq!(records[0].qty, 3);
        assert!(records[0].ordered);
    }

    #[test]
    fn qty_defaults_to_one_on_parse_failure() {
        let grid = grid(&[&["이름", "수량"], &["홍길동", "nan"], &["김영희", "두개"]]);
        let records = extract_records(&grid, &header_for(&grid));
        assert_eq!(records[0].qty, 1);
        assert_eq!(records[1].qty, 1);
    }

    #[test]
    fn qty_defaults_to_one_when_unmapped() {
        let grid = grid(&[&["이름", "연락처"], &["홍길동", "010-1111-2222"]]);
        let records = extract_records(&grid, &header_for(&grid));
        assert_eq!(records[0].qty, 1);
        assert!(records[0].ordered);
    }

    #[test]
    fn nan_text_cells_become_empty() {
        let grid = grid(&[
            &["이름", "연락처", "주소", "메모"],
            &["홍길동", "nan", "NaN ", "부재시문앞"],
        ]);
        let records = extract_records(&grid, &header_for(&grid));
        assert_eq!(records[0].phone, "");
        assert_eq!(records[0].address, "");
        assert_eq!(records[0].memo, "부재시문앞");
    }

    #[test]
    fn short_rows_are_tolerated() {
        let grid = grid(&[&["이름", "연락처", "수량"], &["홍길동"]]);
        let records = extract_records(&grid, &header_for(&grid));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].phone, "");
        assert_eq!(records[0].qty, 1);
    }

    #[test]
    fn sender_fields_start_empty() {
        let grid = grid(&[&["이름"], &["홍길동"]]);
        let records = extract_records(&grid, &header_for(&grid));
        assert_eq!(records[0].sender_name, "");
        assert_eq!(records[0].sender_phone, "");
        assert_eq!(records[0].sender_addr, "");
    }
}
