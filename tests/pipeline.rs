// Integration tests: CSV files on disk -> pipeline -> dashboard data -> browser report

use bikeshare_dashboard::config::DashboardConfig;
use bikeshare_dashboard::data::labels::{HOLIDAY_LABEL, WORKING_DAY_LABEL};
use bikeshare_dashboard::data::DateSource;
use bikeshare_dashboard::narrative::{
    supporting_figures, DASHBOARD_TITLE, HOLIDAY_CHART_TITLE, SEASON_CHART_TITLE,
    WEATHER_CHART_TITLE,
};
use bikeshare_dashboard::pipeline::{self, PipelineError};
use bikeshare_dashboard::report::{HtmlReportGenerator, REPORT_FILE_NAME};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HOUR_CSV: &str = "\
instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,cnt
1,2011-01-01,1,0,1,0,0,6,0,1,0.24,10
2,2011-01-01,1,0,1,1,0,6,0,1,0.22,20
3,2011-01-01,1,0,1,2,0,6,0,2,0.22,30
4,2011-07-04,3,0,7,0,1,1,0,1,0.70,40
5,2011-07-04,3,0,7,1,1,1,0,2,0.70,50
6,2011-07-04,3,0,7,2,1,1,0,3,0.68,60
7,2011-07-05,3,0,7,0,0,2,1,1,0.66,70
8,2011-07-05,3,0,7,1,0,2,1,1,0.66,80
";

const DAY_CSV: &str = "\
instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,cnt
1,2011-01-01,1,0,1,0,6,0,2,0.34,60
2,2011-07-04,3,0,7,1,1,0,3,0.70,150
3,2011-07-05,3,0,7,0,2,1,1,0.66,150
";

fn write_fixture(dir: &Path) -> DashboardConfig {
    let hour_csv = dir.join("hour.csv");
    let day_csv = dir.join("day.csv");
    fs::write(&hour_csv, HOUR_CSV).unwrap();
    fs::write(&day_csv, DAY_CSV).unwrap();

    DashboardConfig {
        hour_csv,
        day_csv,
        logo: dir.join("bicycle.png"),
        daily_date_source: DateSource::Own,
    }
}

#[test]
fn test_pipeline_totals_match_input() {
    let dir = TempDir::new().unwrap();
    let data = pipeline::run(&write_fixture(dir.path())).unwrap();

    assert_eq!(data.hourly_overview.rows, 8);
    assert_eq!(data.hourly_overview.total_rentals, 360);
    assert_eq!(data.daily_overview.rows, 3);
    assert_eq!(data.daily_overview.total_rentals, 360);
    assert_eq!(data.hourly_overview.first_date, "2011-01-01");
    assert_eq!(data.hourly_overview.last_date, "2011-07-05");

    for table in data.aggregate_tables() {
        assert_eq!(table.grand_total(), 360, "grand total of {}", table.group_key);
        assert!(
            table
                .rows
                .windows(2)
                .all(|w| w[0].average_rentals >= w[1].average_rentals),
            "{} not sorted by average",
            table.group_key
        );
    }
}

#[test]
fn test_pipeline_seasonal_and_holiday_usage() {
    let dir = TempDir::new().unwrap();
    let data = pipeline::run(&write_fixture(dir.path())).unwrap();

    let seasonal: Vec<(&str, i64)> = data
        .seasonal_stats
        .rows
        .iter()
        .map(|r| (r.key.as_str(), r.total_rentals))
        .collect();
    assert_eq!(seasonal, vec![("3", 300), ("1", 60)]);

    let seasons: Vec<&str> = data.season_usage.iter().map(|u| u.label.as_str()).collect();
    assert_eq!(seasons, vec!["Spring", "Fall"]);

    let holiday: Vec<(&str, f64)> = data
        .holiday_usage
        .iter()
        .map(|u| (u.label.as_str(), u.mean))
        .collect();
    assert_eq!(holiday, vec![(WORKING_DAY_LABEL, 42.0), (HOLIDAY_LABEL, 50.0)]);

    assert_eq!(data.holiday_comparison.holiday_count, 3);
    assert_eq!(data.holiday_comparison.working_day_count, 5);
}

#[test]
fn test_pipeline_hour_weather_series() {
    let dir = TempDir::new().unwrap();
    let data = pipeline::run(&write_fixture(dir.path())).unwrap();

    let keys: Vec<&str> = data.hour_weather.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["1", "2", "3"]);

    let clear = &data.hour_weather[0];
    assert_eq!(clear.points, vec![(0.0, 40.0), (1.0, 50.0)]);
    assert_eq!(data.hour_weather[2].points, vec![(2.0, 60.0)]);
}

#[test]
fn test_pipeline_flags_shifted_daily_dates() {
    // Row-by-row the daily table lines up with hourly rows 1..=3, which all fall on 2011-01-01
    let dir = TempDir::new().unwrap();
    let data = pipeline::run(&write_fixture(dir.path())).unwrap();

    assert_eq!(data.date_alignment.source, DateSource::Own);
    assert_eq!(data.date_alignment.mismatched_rows, 2);
    assert_eq!(data.daily_overview.last_date, "2011-07-05");
}

#[test]
fn test_pipeline_hourly_date_source() {
    let dir = TempDir::new().unwrap();
    let mut config = write_fixture(dir.path());
    config.daily_date_source = DateSource::Hourly;
    let data = pipeline::run(&config).unwrap();

    assert_eq!(data.date_alignment.source, DateSource::Hourly);
    assert_eq!(data.date_alignment.mismatched_rows, 2);
    assert_eq!(data.daily_overview.first_date, "2011-01-01");
    assert_eq!(data.daily_overview.last_date, "2011-01-01");
}

#[test]
fn test_pipeline_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut config = write_fixture(dir.path());
    config.day_csv = dir.path().join("missing.csv");

    let result = pipeline::run(&config);
    assert!(matches!(result, Err(PipelineError::Load(_))));
}

#[test]
fn test_report_written_without_logo() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(dir.path());
    let data = pipeline::run(&config).unwrap();

    let output = dir.path().join("out").join(REPORT_FILE_NAME);
    let path = HtmlReportGenerator::write_report(&data, &output, &config.logo).unwrap();
    assert_eq!(path, output);

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(DASHBOARD_TITLE));
    assert!(html.contains(HOLIDAY_CHART_TITLE));
    assert!(html.contains(SEASON_CHART_TITLE));
    assert!(html.contains(WEATHER_CHART_TITLE));
    assert!(html.contains("<svg"));
    assert!(!html.contains("<img"));
    assert_eq!(html.matches("<tr><th>total</th><th>360</th>").count(), 4);
}

#[test]
fn test_report_copies_logo() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(dir.path());
    fs::write(&config.logo, b"not really a png").unwrap();
    let data = pipeline::run(&config).unwrap();

    let output = dir.path().join("out").join(REPORT_FILE_NAME);
    let path = HtmlReportGenerator::write_report(&data, &output, &config.logo).unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<img src=\"bicycle.png\""));
    assert!(dir.path().join("out").join("bicycle.png").is_file());
}

#[test]
fn test_report_next_to_logo_keeps_logo_intact() {
    // Logo and report share a directory, but the logo is reached through another spelling of the path
    let dir = TempDir::new().unwrap();
    let mut config = write_fixture(dir.path());
    let logo_bytes = b"png payload!";
    fs::write(dir.path().join("bicycle.png"), logo_bytes).unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    config.logo = dir.path().join("assets").join("..").join("bicycle.png");
    let data = pipeline::run(&config).unwrap();

    let output = dir.path().join(REPORT_FILE_NAME);
    HtmlReportGenerator::write_report(&data, &output, &config.logo).unwrap();

    assert_eq!(fs::read(dir.path().join("bicycle.png")).unwrap(), logo_bytes.to_vec());
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<img src=\"bicycle.png\""));
}

#[test]
fn test_supporting_figures_follow_data() {
    let dir = TempDir::new().unwrap();
    let mut data = pipeline::run(&write_fixture(dir.path())).unwrap();

    let figures = supporting_figures(&data);
    assert_eq!(figures.len(), 3);
    assert!(figures[0].contains("Working days average 42.0"));
    assert!(figures[0].contains("holidays are busier"));
    assert_eq!(
        figures[1],
        "Highest seasonal average: Fall (60.0); lowest: Spring (20.0)."
    );
    assert!(figures[2].starts_with("Busiest: hour 2 with Light Snow"));
    assert!(figures[2].contains("(60.0); quietest: hour 2 with Mist + Cloudy"));
    assert!(figures[2].ends_with("(30.0)."));

    data.season_usage.clear();
    data.hour_weather.clear();
    assert_eq!(supporting_figures(&data).len(), 1);
}
