//! Aggregation Module
//! Group-by summaries (sum and mean of a value column) behind every table and chart.

use crate::data::labels::WeatherSituation;
use polars::prelude::*;
use std::collections::BTreeMap;

pub const TOTAL_RENTALS: &str = "total_rentals";
pub const AVERAGE_RENTALS: &str = "average_rentals";

/// Rendered in place of a null group key.
pub const NULL_KEY: &str = "-";

/// One row of a grouped summary.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub key: String,
    pub total_rentals: i64,
    pub average_rentals: f64,
}

/// Grouped summary, sorted by average descending.
#[derive(Debug, Clone)]
pub struct AggregateTable {
    pub group_key: String,
    pub frame: DataFrame,
    pub rows: Vec<AggregateRow>,
}

impl AggregateTable {
    /// Sum of `total_rentals` over all rows.
    pub fn grand_total(&self) -> i64 {
        self.rows.iter().map(|r| r.total_rentals).sum()
    }
}

/// Mean of the value column for one category, with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMean {
    pub key: String,
    pub label: String,
    pub mean: f64,
}

/// Mean of the value column for one pair of keys.
#[derive(Debug, Clone, PartialEq)]
pub struct PairMean {
    pub first: String,
    pub second: String,
    pub mean: f64,
}

/// Average usage per hour under one weather situation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSeries {
    pub key: String,
    pub label: String,
    /// (hour, mean) in ascending hour order
    pub points: Vec<(f64, f64)>,
}

/// Grouping operations over the normalized tables.
pub struct Aggregator;

impl Aggregator {
    /// Sum and mean of `value_column` per `group_key`, sorted by mean descending.
    /// Equal means keep ascending key order.
    pub fn aggregate(
        df: &DataFrame,
        group_key: &str,
        value_column: &str,
    ) -> PolarsResult<AggregateTable> {
        let frame = df
            .clone()
            .lazy()
            .group_by([col(group_key)])
            .agg([
                col(value_column).sum().alias(TOTAL_RENTALS),
                col(value_column).mean().alias(AVERAGE_RENTALS),
            ])
            .sort(
                [AVERAGE_RENTALS, group_key],
                SortMultipleOptions::default().with_order_descending_multi([true, false]),
            )
            .collect()?;

        let keys = key_strings(frame.column(group_key)?)?;
        let totals = frame.column(TOTAL_RENTALS)?.cast(&DataType::Int64)?;
        let averages = frame.column(AVERAGE_RENTALS)?.cast(&DataType::Float64)?;

        let rows = keys
            .into_iter()
            .zip(totals.i64()?.into_iter())
            .zip(averages.f64()?.into_iter())
            .map(|((key, total), average)| AggregateRow {
                key,
                total_rentals: total.unwrap_or(0),
                average_rentals: average.unwrap_or(f64::NAN),
            })
            .collect();

        Ok(AggregateTable {
            group_key: group_key.to_string(),
            frame,
            rows,
        })
    }

    /// Mean of `value_column` per `key`, in ascending key order.
    pub fn mean_by(
        df: &DataFrame,
        key: &str,
        value_column: &str,
        label: impl Fn(&str) -> String,
    ) -> PolarsResult<Vec<CategoryMean>> {
        let frame = df
            .clone()
            .lazy()
            .group_by([col(key)])
            .agg([col(value_column).mean()])
            .sort([key], SortMultipleOptions::default())
            .collect()?;

        let keys = key_strings(frame.column(key)?)?;
        let means = frame.column(value_column)?.cast(&DataType::Float64)?;

        Ok(keys
            .into_iter()
            .zip(means.f64()?.into_iter())
            .map(|(key, mean)| CategoryMean {
                label: label(&key),
                key,
                mean: mean.unwrap_or(f64::NAN),
            })
            .collect())
    }

    /// Mean of `value_column` per (`first`, `second`) pair, in ascending key order.
    pub fn mean_by_pair(
        df: &DataFrame,
        first: &str,
        second: &str,
        value_column: &str,
    ) -> PolarsResult<Vec<PairMean>> {
        let frame = df
            .clone()
            .lazy()
            .group_by([col(first), col(second)])
            .agg([col(value_column).mean()])
            .sort([first, second], SortMultipleOptions::default())
            .collect()?;

        let firsts = key_strings(frame.column(first)?)?;
        let seconds = key_strings(frame.column(second)?)?;
        let means = frame.column(value_column)?.cast(&DataType::Float64)?;

        Ok(firsts
            .into_iter()
            .zip(seconds)
            .zip(means.f64()?.into_iter())
            .map(|((first, second), mean)| PairMean {
                first,
                second,
                mean: mean.unwrap_or(f64::NAN),
            })
            .collect())
    }

    /// Fold (hour, weather) means into one series per weather situation.
    /// Pairs whose hour is not numeric are skipped.
    pub fn hour_weather_series(pairs: &[PairMean]) -> Vec<WeatherSeries> {
        let mut by_weather: BTreeMap<String, Vec<(f64, f64)>> = BTreeMap::new();

        for pair in pairs {
            if let Ok(hour) = pair.first.parse::<f64>() {
                by_weather
                    .entry(pair.second.clone())
                    .or_default()
                    .push((hour, pair.mean));
            }
        }

        by_weather
            .into_iter()
            .map(|(key, mut points)| {
                points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
                let label = key
                    .parse::<u8>()
                    .ok()
                    .and_then(WeatherSituation::from_code)
                    .map(|w| w.label().to_string())
                    .unwrap_or_else(|| key.clone());
                WeatherSeries { key, label, points }
            })
            .collect()
    }
}

/// Render a key column as strings ("3", "true", ...), nulls as [`NULL_KEY`].
fn key_strings(column: &Column) -> PolarsResult<Vec<String>> {
    let keys = column.cast(&DataType::String)?;
    Ok(keys
        .str()?
        .into_iter()
        .map(|k| k.map(str::to_string).unwrap_or_else(|| NULL_KEY.to_string()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::labels::holiday_key_label;
    use crate::data::schema::HOURLY_SCHEMA;
    use crate::data::TypeNormalizer;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn frame(hours: Vec<i64>, counts: Vec<i64>) -> DataFrame {
        df!("hr" => hours, "cnt" => counts).unwrap()
    }

    #[test]
    fn test_two_rows_same_hour() {
        let df = frame(vec![0, 0], vec![10, 20]);
        let table = Aggregator::aggregate(&df, "hr", "cnt").unwrap();

        assert_eq!(
            table.rows,
            vec![AggregateRow {
                key: "0".to_string(),
                total_rentals: 30,
                average_rentals: 15.0,
            }]
        );
    }

    #[test]
    fn test_sorted_by_mean_descending() {
        let df = frame(vec![0, 1, 1, 2, 3], vec![5, 40, 60, 20, 100]);
        let table = Aggregator::aggregate(&df, "hr", "cnt").unwrap();

        let keys: Vec<&str> = table.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["3", "1", "2", "0"]);
        assert_eq!(table.grand_total(), 225);
        assert_eq!(table.rows.first().map(|r| r.key.as_str()), Some("3"));
    }

    #[test]
    fn test_ties_keep_key_order() {
        let df = frame(vec![5, 2, 9, 2], vec![10, 10, 10, 10]);
        let table = Aggregator::aggregate(&df, "hr", "cnt").unwrap();

        let keys: Vec<&str> = table.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["2", "5", "9"]);
    }

    #[test]
    fn test_holiday_means_are_labeled() {
        let df = df!(
            "holiday" => [false, true, false, true],
            "cnt" => [200i64, 100, 300, 50]
        )
        .unwrap();
        let usage = Aggregator::mean_by(&df, "holiday", "cnt", holiday_key_label).unwrap();

        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].label, "Working Day");
        assert_eq!(usage[0].mean, 250.0);
        assert_eq!(usage[1].label, "Holiday");
        assert_eq!(usage[1].mean, 75.0);
    }

    #[test]
    fn test_holiday_codes_normalize_into_two_categories() {
        let raw = df!(
            "dteday" => ["2011-01-01", "2011-01-01", "2011-01-17"],
            "season" => [1i64, 1, 1],
            "yr" => [0i64, 0, 0],
            "mnth" => [1i64, 1, 1],
            "hr" => [0i64, 1, 0],
            "holiday" => [0i64, 0, 1],
            "weekday" => [6i64, 6, 1],
            "workingday" => [0i64, 0, 0],
            "weathersit" => [1i64, 1, 2],
            "cnt" => [16i64, 40, 17]
        )
        .unwrap();
        let df = TypeNormalizer::normalize(raw, &HOURLY_SCHEMA).unwrap();
        let usage = Aggregator::mean_by(&df, "holiday", "cnt", holiday_key_label).unwrap();

        let labels: Vec<&str> = usage.iter().map(|u| u.label.as_str()).collect();
        assert_eq!(labels, vec!["Working Day", "Holiday"]);
    }

    #[test]
    fn test_hour_weather_series() {
        let df = df!(
            "hr" => [1u8, 0, 0, 1, 0],
            "weathersit" => [1u8, 1, 1, 3, 3],
            "cnt" => [30i64, 10, 20, 4, 2]
        )
        .unwrap();
        let pairs = Aggregator::mean_by_pair(&df, "hr", "weathersit", "cnt").unwrap();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].first, "0");
        assert_eq!(pairs[0].second, "1");
        assert_eq!(pairs[0].mean, 15.0);

        let series = Aggregator::hour_weather_series(&pairs);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, WeatherSituation::Clear.label());
        assert_eq!(series[0].points, vec![(0.0, 15.0), (1.0, 30.0)]);
        assert_eq!(series[1].label, WeatherSituation::LightPrecipitation.label());
        assert_eq!(series[1].points, vec![(0.0, 2.0), (1.0, 4.0)]);
    }

    proptest! {
        #[test]
        fn prop_totals_sum_to_source(rows in prop::collection::vec((0i64..24, 0i64..1000), 1..200)) {
            let (hours, counts): (Vec<i64>, Vec<i64>) = rows.into_iter().unzip();
            let expected: i64 = counts.iter().sum();
            let table = Aggregator::aggregate(&frame(hours, counts), "hr", "cnt").unwrap();
            prop_assert_eq!(table.grand_total(), expected);
        }

        #[test]
        fn prop_rows_sorted_by_average(rows in prop::collection::vec((0i64..24, 0i64..1000), 1..200)) {
            let (hours, counts): (Vec<i64>, Vec<i64>) = rows.into_iter().unzip();
            let table = Aggregator::aggregate(&frame(hours, counts), "hr", "cnt").unwrap();
            for pair in table.rows.windows(2) {
                prop_assert!(pair[0].average_rentals >= pair[1].average_rentals);
            }
        }
    }
}
