//! Dashboard text: titles, section headings and the written conclusions.

use crate::stats::{CategoryMean, DashboardData, HolidayComparison, WeatherSeries};

pub const DASHBOARD_TITLE: &str = "Bike Sharing Dataset";
pub const DASHBOARD_DESCRIPTION: &str =
    "This dashboard presents an analysis of the Bike Sharing Dataset: hourly and daily rental records grouped by time, season and weather.";

pub const TAB_PRELIMINARY: &str = "Tab 1";
pub const TAB_EXPLANATORY: &str = "Tab 2";

pub const PRELIMINARY_HEADER: &str = "Preliminary Analysis";
pub const EXPLANATORY_HEADER: &str = "Explanatory Data Analysis";
pub const OVERVIEW_HEADER: &str = "Dataset Overview";

pub const HOURLY_STATS_TITLE: &str = "Bike Usage Statistics per Hour";
pub const SEASONAL_STATS_TITLE: &str = "Bike Usage Statistics per Season";
pub const WEEKDAY_STATS_TITLE: &str = "Bike Usage Statistics per Day of the Week";
pub const MONTHLY_STATS_TITLE: &str = "Bike Usage Statistics per Month";

/// Titles of the four aggregate tables, in display order.
pub const AGGREGATE_TITLES: [&str; 4] = [
    HOURLY_STATS_TITLE,
    SEASONAL_STATS_TITLE,
    WEEKDAY_STATS_TITLE,
    MONTHLY_STATS_TITLE,
];

pub const HOLIDAY_CHART_HEADER: &str = "Average Bike Usage on Working Days and Holidays";
pub const HOLIDAY_CHART_TITLE: &str = "Average Bike Usage";
pub const HOLIDAY_CHART_X: &str = "Category";

pub const SEASON_CHART_HEADER: &str = "Average Bike Usage by Season";
pub const SEASON_CHART_TITLE: &str = "Average Bike Usage by Season";
pub const SEASON_CHART_X: &str = "Season";

pub const WEATHER_CHART_HEADER: &str = "Average Bike Usage by Hour and Weather";
pub const WEATHER_CHART_TITLE: &str = "Average Bike Usage by Hour and Weather";
pub const WEATHER_CHART_X: &str = "Hour";
pub const WEATHER_LEGEND_TITLE: &str = "Weather";

pub const USAGE_AXIS: &str = "Average Bike Usage";

pub const CONCLUSION_HEADER: &str = "Conclusion";
pub const CONCLUSION_INTRO: &str = "Based on the analysis, we conclude that:";

/// One written finding of the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conclusion {
    pub title: &'static str,
    pub body: &'static str,
}

pub const CONCLUSIONS: [Conclusion; 3] = [
    Conclusion {
        title: "Bike Usage by Day Type",
        body: "Average bike usage is higher on working days than on holidays. \
               Bikes tend to be used for everyday activities such as commuting to work or school.",
    },
    Conclusion {
        title: "Bike Usage by Season",
        body: "Average bike usage peaks in fall, while the lowest usage is recorded in winter. \
               Seasonal weather and environment influence how willing and comfortable people are to ride.",
    },
    Conclusion {
        title: "Bike Usage by Time and Weather",
        body: "Usage is highest in the late afternoon under clear skies and lowest in the early \
               morning hours during bad weather such as heavy rain. Time of day and weather strongly \
               affect the decision to use a bike for transport.",
    },
];

/// Figures from the computed data behind each conclusion, in the same order.
/// Figures without data behind them are left out.
pub fn supporting_figures(data: &DashboardData) -> Vec<String> {
    let mut figures = vec![holiday_figure(&data.holiday_comparison)];
    figures.extend(season_figure(&data.season_usage));
    figures.extend(hour_weather_figure(&data.hour_weather));
    figures
}

fn holiday_figure(cmp: &HolidayComparison) -> String {
    format!(
        "Working days average {:.1} rentals per hour against {:.1} on holidays; {} are busier (Welch t-test p = {:.4}, {}).",
        cmp.working_day_mean,
        cmp.holiday_mean,
        if cmp.working_days_busier() {
            "working days"
        } else {
            "holidays"
        },
        cmp.p_value,
        if cmp.is_significant {
            "significant"
        } else {
            "not significant"
        }
    )
}

fn season_figure(usage: &[CategoryMean]) -> Option<String> {
    let high = usage.iter().max_by(|a, b| a.mean.total_cmp(&b.mean))?;
    let low = usage.iter().min_by(|a, b| a.mean.total_cmp(&b.mean))?;
    Some(format!(
        "Highest seasonal average: {} ({:.1}); lowest: {} ({:.1}).",
        high.label, high.mean, low.label, low.mean
    ))
}

fn hour_weather_figure(series: &[WeatherSeries]) -> Option<String> {
    let points = series
        .iter()
        .flat_map(|s| s.points.iter().map(move |&(hour, mean)| (s, hour, mean)));
    let (high_s, high_h, high_m) = points.clone().max_by(|a, b| a.2.total_cmp(&b.2))?;
    let (low_s, low_h, low_m) = points.min_by(|a, b| a.2.total_cmp(&b.2))?;
    Some(format!(
        "Busiest: hour {:.0} with {} ({:.1}); quietest: hour {:.0} with {} ({:.1}).",
        high_h, high_s.label, high_m, low_h, low_s.label, low_m
    ))
}
