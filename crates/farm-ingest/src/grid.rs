use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use tracing::debug;

use farm_import::ImportError;

/// Reads a tabular file into a headerless cell grid.
///
/// Dispatches on the file extension: `.csv` through the csv reader,
/// `.xlsx`/`.xls`/`.xlsm` through calamine. Decode failures collapse into
/// [`ImportError::Parse`] so callers report one message and allow a retry
/// with a different file.
pub fn read_grid(path: &Path) -> Result<Vec<Vec<String>>, ImportError> {
    read_grid_inner(path).map_err(|error| ImportError::Parse(format!("{error:#}")))
}

fn read_grid_inner(path: &Path) -> Result<Vec<Vec<String>>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    let grid = match extension.as_str() {
        "csv" => read_grid_from_csv(path)?,
        "xlsx" | "xls" | "xlsm" => read_grid_from_workbook(path)?,
        other => bail!("unsupported file type: .{other}"),
    };
    debug!(rows = grid.len(), path = %path.display(), "decoded cell grid");
    Ok(grid)
}

/// Reads a CSV file with no header assumption and ragged rows allowed.
pub fn read_grid_from_csv(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        rows.push(record.iter().map(|cell| cell.trim_matches('\u{feff}').to_string()).collect());
    }
    Ok(rows)
}

/// Reads the first worksheet of a spreadsheet file.
pub fn read_grid_from_workbook(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("open workbook: {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no worksheets")?
        .with_context(|| format!("read first worksheet: {}", path.display()))?;
    let rows = range
        .rows()
        .map(|row| row.iter().map(stringify_cell).collect())
        .collect();
    Ok(rows)
}

/// Renders one spreadsheet cell as text.
///
/// Missing and error cells become empty strings rather than a stringified
/// placeholder; the importer additionally tolerates a literal `"nan"` for
/// grids produced by other converters.
fn stringify_cell(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        other => other.to_string(),
    }
}
