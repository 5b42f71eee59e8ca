use std::collections::HashMap;

use crate::stats::{fit_trendline, TrendFit};
use crate::Error;

/// The pivoted SDG table: one row per period (year label), one column per
/// entity (country). Cells are optional since not every entity reports every
/// period. Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SdgTable {
    periods: Vec<String>,
    entities: Vec<String>,
    columns: HashMap<String, Vec<Option<f64>>>,
}

impl SdgTable {
    pub fn new(
        periods: Vec<String>,
        entities: Vec<String>,
        columns: HashMap<String, Vec<Option<f64>>>,
    ) -> Self {
        Self {
            periods,
            entities,
            columns,
        }
    }

    /// Period labels, in file order.
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    /// Entity names, in file order.
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.columns.contains_key(entity)
    }

    pub fn column(&self, entity: &str) -> Result<&[Option<f64>], Error> {
        self.columns
            .get(entity)
            .map(|v| v.as_slice())
            .ok_or_else(|| Error::MissingColumn(entity.to_string()))
    }

    /// Number of observations present for an entity.
    pub fn observation_count(&self, entity: &str) -> Result<usize, Error> {
        Ok(self.column(entity)?.iter().flatten().count())
    }

    /// Paired (timestamp, value) series for an entity. Period labels are
    /// parsed as numbers for the X axis; periods without an observation are
    /// skipped. Lookup is case-sensitive.
    pub fn series(&self, entity: &str) -> Result<(Vec<f64>, Vec<f64>), Error> {
        let column = self.column(entity)?;

        let mut timestamps = Vec::new();
        let mut values = Vec::new();
        for (period, cell) in self.periods.iter().zip(column) {
            if let Some(value) = cell {
                let timestamp = period.trim().parse::<f64>().map_err(|_| {
                    Error::Other(format!("Period label {:?} is not numeric", period))
                })?;
                timestamps.push(timestamp);
                values.push(*value);
            }
        }

        Ok((timestamps, values))
    }

    /// Ordinary least squares trendline of an entity's series.
    pub fn trendline(&self, entity: &str) -> Result<TrendFit, Error> {
        let (timestamps, values) = self.series(entity)?;
        fit_trendline(&timestamps, &values)
    }
}
