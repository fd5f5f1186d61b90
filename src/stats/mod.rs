//! Stats module - grouped summaries and significance testing

mod aggregator;
mod calculator;
mod summary;

pub use aggregator::{
    AggregateRow, AggregateTable, Aggregator, CategoryMean, PairMean, WeatherSeries,
    AVERAGE_RENTALS, NULL_KEY, TOTAL_RENTALS,
};
pub use calculator::{GroupMoments, HolidayComparison, StatsCalculator, SIGNIFICANCE_THRESHOLD};
pub use summary::{DashboardData, TableOverview};
