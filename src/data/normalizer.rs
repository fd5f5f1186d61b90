//! Type Normalizer Module
//! Recasts raw CSV columns to their semantic types (date, categorical code, boolean).

use super::loader::BikeTables;
use super::schema::{TableSchema, DAILY_SCHEMA, DATE_FORMAT, DTEDAY, HOURLY_SCHEMA};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Physical type of the categorical columns: small fixed integer domains.
pub const CATEGORY_DTYPE: DataType = DataType::UInt8;

/// Where the daily table takes its `dteday` column from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSource {
    /// Parse the daily table's own date column.
    #[default]
    Own,
    /// Take the first N dates of the hourly table, row by row.
    Hourly,
}

/// How the daily dates compare with the hourly-derived ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateAlignment {
    pub source: DateSource,
    pub mismatched_rows: usize,
}

/// Handles column typing for the bike-sharing tables.
pub struct TypeNormalizer;

impl TypeNormalizer {
    /// Normalize one table. Columns already of their target type are left alone,
    /// so normalizing twice yields the same table as normalizing once.
    ///
    /// Values that cannot be coerced become null; nothing is range-checked.
    pub fn normalize(df: DataFrame, schema: &TableSchema) -> PolarsResult<DataFrame> {
        let mut exprs: Vec<Expr> = Vec::new();

        match df.column(schema.date)?.dtype() {
            DataType::Date => {}
            DataType::String => exprs.push(col(schema.date).str().to_date(StrptimeOptions {
                format: Some(DATE_FORMAT.into()),
                strict: false,
                ..Default::default()
            })),
            _ => exprs.push(col(schema.date).cast(DataType::Date)),
        }

        for name in schema.categorical {
            if df.column(name)?.dtype() != &CATEGORY_DTYPE {
                exprs.push(col(*name).cast(CATEGORY_DTYPE));
            }
        }

        for name in schema.boolean {
            if df.column(name)?.dtype() != &DataType::Boolean {
                exprs.push(
                    col(*name)
                        .cast(DataType::Int64)
                        .neq(lit(0i64))
                        .alias(*name),
                );
            }
        }

        if exprs.is_empty() {
            return Ok(df);
        }

        debug!(table = schema.name, columns = exprs.len(), "normalizing columns");
        df.lazy().with_columns(exprs).collect()
    }

    /// Normalize both tables and settle the daily date column.
    pub fn normalize_tables(
        tables: BikeTables,
        source: DateSource,
    ) -> PolarsResult<(BikeTables, DateAlignment)> {
        let hourly = Self::normalize(tables.hourly, &HOURLY_SCHEMA)?;
        let mut daily = Self::normalize(tables.daily, &DAILY_SCHEMA)?;

        let derived = Self::hourly_derived_dates(&hourly, daily.height())?;
        let own = daily.column(DTEDAY)?.as_materialized_series().clone();
        let mismatched_rows = Self::count_date_mismatches(&own, &derived)?;

        if mismatched_rows > 0 {
            warn!(
                mismatched_rows,
                ?source,
                "daily dates differ from the hourly-derived dates; joins on dteday depend on the chosen source"
            );
        }

        if source == DateSource::Hourly {
            daily.with_column(derived)?;
        }

        Ok((
            BikeTables { hourly, daily },
            DateAlignment {
                source,
                mismatched_rows,
            },
        ))
    }

    /// The first `len` hourly dates, padded with nulls when the hourly table is shorter.
    pub fn hourly_derived_dates(hourly: &DataFrame, len: usize) -> PolarsResult<Series> {
        let mut dates = hourly
            .column(DTEDAY)?
            .as_materialized_series()
            .head(Some(len));

        if dates.len() < len {
            let padding = Series::full_null(DTEDAY.into(), len - dates.len(), dates.dtype());
            dates.append(&padding)?;
        }
        Ok(dates)
    }

    /// Number of rows where two date columns disagree (null vs value counts as a mismatch).
    pub fn count_date_mismatches(left: &Series, right: &Series) -> PolarsResult<usize> {
        let left = left.cast(&DataType::Int32)?;
        let right = right.cast(&DataType::Int32)?;

        Ok(left
            .i32()?
            .into_iter()
            .zip(right.i32()?.into_iter())
            .filter(|(l, r)| l != r)
            .count())
    }
}
