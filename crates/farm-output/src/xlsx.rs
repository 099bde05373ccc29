//! Label spreadsheet writing.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::labels::{LABEL_COLUMNS, LabelRow};

/// Writes the label rows as an `.xlsx` file with a bold header row.
pub fn write_labels_xlsx(rows: &[LabelRow], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header_format = Format::new().set_bold();

    for (col, title) in LABEL_COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .context("write label header")?;
    }
    for (idx, row) in rows.iter().enumerate() {
        let r = (idx + 1) as u32;
        sheet.write_string(r, 0, &row.sender_name).context("write label row")?;
        sheet.write_string(r, 1, &row.sender_phone).context("write label row")?;
        sheet.write_string(r, 2, &row.sender_addr).context("write label row")?;
        sheet.write_string(r, 3, &row.name).context("write label row")?;
        sheet.write_string(r, 4, &row.phone).context("write label row")?;
        sheet.write_string(r, 5, &row.address).context("write label row")?;
        sheet.write_number(r, 6, f64::from(row.qty)).context("write label row")?;
        sheet.write_string(r, 7, &row.memo).context("write label row")?;
    }

    workbook
        .save(path)
        .with_context(|| format!("save labels: {}", path.display()))?;
    info!(labels = rows.len(), path = %path.display(), "wrote label spreadsheet");
    Ok(())
}
