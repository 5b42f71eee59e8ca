use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::models::SdgTable;
use crate::Error;

/// Load the wide SDG export at `path`, drop the named metadata columns, and
/// pivot so that time periods become rows and the values of `entity_column`
/// become the output columns.
pub fn load_sdg_table(
    path: impl AsRef<Path>,
    drop_columns: &[&str],
    entity_column: &str,
) -> Result<SdgTable, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::IO(format!("{}: {}", path.display(), e)))?;

    let table = pivot(file, drop_columns, entity_column)?;
    info!(
        "Loaded {} entities over {} periods from {}",
        table.entities().len(),
        table.periods().len(),
        path.display()
    );

    Ok(table)
}

/// Parse and pivot a wide CSV export from any reader.
///
/// Every column in `drop_columns` must be present in the header, as must
/// `entity_column`; the remaining headers are taken as period labels. Cells
/// that are empty or non-numeric become `None`.
pub fn pivot(
    reader: impl Read,
    drop_columns: &[&str],
    entity_column: &str,
) -> Result<SdgTable, Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    for column in drop_columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(Error::MissingColumn((*column).to_string()));
        }
    }

    let entity_idx = headers
        .iter()
        .position(|h| h == entity_column)
        .ok_or_else(|| Error::MissingColumn(entity_column.to_string()))?;

    // Positions of the period columns that survive the drop.
    let mut period_indices = Vec::new();
    let mut periods = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if idx == entity_idx || drop_columns.contains(&header) {
            continue;
        }
        period_indices.push(idx);
        periods.push(header.to_string());
    }

    let mut entities = Vec::new();
    let mut columns: HashMap<String, Vec<Option<f64>>> = HashMap::new();

    for record in csv_reader.records() {
        let record = record?;
        let entity = record
            .get(entity_idx)
            .map(|s| s.trim())
            .unwrap_or_default()
            .to_string();
        if entity.is_empty() {
            continue;
        }

        let cells: Vec<Option<f64>> = period_indices
            .iter()
            .map(|&idx| parse_cell(record.get(idx)))
            .collect();

        // Last row wins on duplicate entity names
        if !columns.contains_key(&entity) {
            entities.push(entity.clone());
        }
        columns.insert(entity, cells);
    }

    Ok(SdgTable::new(periods, entities, columns))
}

fn parse_cell(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
}
