//! CSV Data Loader Module
//! Reads the hourly and daily rental files into Polars DataFrames.

use super::schema::{TableSchema, DAILY_SCHEMA, HOURLY_SCHEMA};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },
}

/// The two raw tables of the bike-sharing dataset.
#[derive(Debug, Clone)]
pub struct BikeTables {
    pub hourly: DataFrame,
    pub daily: DataFrame,
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file and check it carries every column of `schema`.
    pub fn load_csv(path: &Path, schema: &TableSchema) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        Self::check_columns(&df, schema)?;

        debug!(
            table = schema.name,
            rows = df.height(),
            columns = df.width(),
            "loaded csv"
        );
        Ok(df)
    }

    /// Load both tables. Either file failing aborts the whole load.
    pub fn load_tables(hour_csv: &Path, day_csv: &Path) -> Result<BikeTables, LoaderError> {
        let hourly = Self::load_csv(hour_csv, &HOURLY_SCHEMA)?;
        let daily = Self::load_csv(day_csv, &DAILY_SCHEMA)?;

        info!(
            hourly_rows = hourly.height(),
            daily_rows = daily.height(),
            "loaded bike sharing tables"
        );
        Ok(BikeTables { hourly, daily })
    }

    fn check_columns(df: &DataFrame, schema: &TableSchema) -> Result<(), LoaderError> {
        let present: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        match schema
            .required_columns()
            .into_iter()
            .find(|required| !present.iter().any(|p| p == required))
        {
            Some(column) => Err(LoaderError::MissingColumn {
                table: schema.name.to_string(),
                column: column.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HOUR_CSV: &str = "\
instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,cnt
1,2011-01-01,1,0,1,0,0,6,0,1,16
2,2011-01-01,1,0,1,1,0,6,0,1,40
";

    #[test]
    fn test_load_csv_reads_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hour.csv");
        fs::write(&path, HOUR_CSV).unwrap();

        let df = DataLoader::load_csv(&path, &HOURLY_SCHEMA).unwrap();
        assert_eq!(df.height(), 2);
        assert!(df.column("cnt").is_ok());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = DataLoader::load_csv(&dir.path().join("nope.csv"), &HOURLY_SCHEMA).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("day.csv");
        fs::write(&path, "dteday,season,cnt\n2011-01-01,1,985\n").unwrap();

        let err = DataLoader::load_csv(&path, &DAILY_SCHEMA).unwrap_err();
        match err {
            LoaderError::MissingColumn { table, column } => {
                assert_eq!(table, "day");
                assert_eq!(column, "yr");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
