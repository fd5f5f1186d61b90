//! Dashboard Summary Module
//! Everything one pipeline pass computes for the presenters.

use super::aggregator::{AggregateTable, Aggregator, CategoryMean, WeatherSeries, NULL_KEY};
use super::calculator::{HolidayComparison, StatsCalculator};
use crate::data::labels::{holiday_key_label, season_key_label};
use crate::data::schema::{CNT, DTEDAY, HOLIDAY, HR, MNTH, SEASON, WEATHERSIT, WEEKDAY};
use crate::data::{BikeTables, DateAlignment};
use polars::prelude::*;
use tracing::info;

/// Size, date span and rental total of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOverview {
    pub name: String,
    pub rows: usize,
    pub first_date: String,
    pub last_date: String,
    pub total_rentals: i64,
}

impl TableOverview {
    pub fn from_frame(name: &str, df: &DataFrame) -> PolarsResult<Self> {
        let summary = df
            .clone()
            .lazy()
            .select([
                col(DTEDAY).min().cast(DataType::String).alias("first"),
                col(DTEDAY).max().cast(DataType::String).alias("last"),
                col(CNT).sum().cast(DataType::Int64).alias("total"),
            ])
            .collect()?;

        let date_at = |name: &str| -> PolarsResult<String> {
            Ok(summary
                .column(name)?
                .str()?
                .get(0)
                .unwrap_or(NULL_KEY)
                .to_string())
        };

        Ok(Self {
            name: name.to_string(),
            rows: df.height(),
            first_date: date_at("first")?,
            last_date: date_at("last")?,
            total_rentals: summary.column("total")?.i64()?.get(0).unwrap_or(0),
        })
    }
}

/// The full product of one load -> normalize -> aggregate pass.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub hourly_overview: TableOverview,
    pub daily_overview: TableOverview,
    pub date_alignment: DateAlignment,

    pub hourly_stats: AggregateTable,
    pub seasonal_stats: AggregateTable,
    pub weekday_stats: AggregateTable,
    pub monthly_stats: AggregateTable,

    pub holiday_usage: Vec<CategoryMean>,
    pub season_usage: Vec<CategoryMean>,
    pub hour_weather: Vec<WeatherSeries>,
    pub holiday_comparison: HolidayComparison,
}

impl DashboardData {
    /// Compute every table and chart series from normalized tables.
    pub fn compute(tables: &BikeTables, date_alignment: DateAlignment) -> PolarsResult<Self> {
        let hourly = &tables.hourly;

        let hourly_stats = Aggregator::aggregate(hourly, HR, CNT)?;
        info!("Hourly rentals stats sorted by average rentals:\n{}", hourly_stats.frame);
        let seasonal_stats = Aggregator::aggregate(hourly, SEASON, CNT)?;
        info!("Seasonal rentals stats sorted by average rentals:\n{}", seasonal_stats.frame);
        let weekday_stats = Aggregator::aggregate(hourly, WEEKDAY, CNT)?;
        info!("Weekday rentals stats sorted by average rentals:\n{}", weekday_stats.frame);
        let monthly_stats = Aggregator::aggregate(hourly, MNTH, CNT)?;
        info!("Monthly rentals stats sorted by average rentals:\n{}", monthly_stats.frame);

        let holiday_usage = Aggregator::mean_by(hourly, HOLIDAY, CNT, holiday_key_label)?;
        for usage in &holiday_usage {
            info!(category = %usage.label, average = usage.mean, "average bike usage");
        }
        let season_usage = Aggregator::mean_by(hourly, SEASON, CNT, season_key_label)?;
        let pairs = Aggregator::mean_by_pair(hourly, HR, WEATHERSIT, CNT)?;
        let hour_weather = Aggregator::hour_weather_series(&pairs);

        let holiday_comparison = StatsCalculator::compare_holiday_usage(hourly)?;
        info!(
            working_day_mean = holiday_comparison.working_day_mean,
            holiday_mean = holiday_comparison.holiday_mean,
            p_value = holiday_comparison.p_value,
            "working day vs holiday t-test"
        );

        Ok(Self {
            hourly_overview: TableOverview::from_frame("hour", hourly)?,
            daily_overview: TableOverview::from_frame("day", &tables.daily)?,
            date_alignment,
            hourly_stats,
            seasonal_stats,
            weekday_stats,
            monthly_stats,
            holiday_usage,
            season_usage,
            hour_weather,
            holiday_comparison,
        })
    }

    /// The four single-key tables in display order.
    pub fn aggregate_tables(&self) -> [&AggregateTable; 4] {
        [
            &self.hourly_stats,
            &self.seasonal_stats,
            &self.weekday_stats,
            &self.monthly_stats,
        ]
    }
}
