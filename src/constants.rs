use lazy_static::lazy_static;

lazy_static! {
    /// Metadata columns of the UN SDG wide export that carry no time series
    /// data and are dropped before the pivot.
    pub static ref SDG_DROP_COLUMNS: Vec<&'static str> = vec![
        "Goal",
        "Target",
        "Indicator",
        "SeriesCode",
        "SeriesDescription",
        "GeoAreaCode",
        "Reporting Type",
        "Sex",
        "Units",
    ];
}

/// Column whose values become the output columns after the pivot.
pub const ENTITY_COLUMN: &str = "GeoAreaName";

pub const DEFAULT_DATA_PATH: &str = "data/SG_GEN_PARL.csv";
