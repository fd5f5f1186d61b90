//! Dashboard pipeline: load -> normalize -> aggregate, once per session or reload.

use crate::config::DashboardConfig;
use crate::data::{DataLoader, LoaderError, TypeNormalizer};
use crate::stats::DashboardData;
use polars::prelude::PolarsError;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("Failed to transform data: {0}")]
    Transform(#[from] PolarsError),
}

/// Run one full pass over the configured input files.
pub fn run(config: &DashboardConfig) -> Result<DashboardData, PipelineError> {
    info!(
        hour_csv = %config.hour_csv.display(),
        day_csv = %config.day_csv.display(),
        "running dashboard pipeline"
    );

    let raw = DataLoader::load_tables(&config.hour_csv, &config.day_csv)?;
    let (tables, alignment) = TypeNormalizer::normalize_tables(raw, config.daily_date_source)?;
    let data = DashboardData::compute(&tables, alignment)?;

    info!(
        hourly_rows = data.hourly_overview.rows,
        daily_rows = data.daily_overview.rows,
        "dashboard data ready"
    );
    Ok(data)
}
