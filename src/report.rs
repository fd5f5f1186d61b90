//! HTML Report Generator Module
//! Generates the browser version of the dashboard: sidebar, two tabs, tables and SVG charts.
//!
//! The page is a single HTML file; tabs switch with CSS only, charts are inline SVG.
//! The logo is copied next to the page and referenced by file name.

use crate::charts::{BarPalette, StaticChartRenderer};
use crate::narrative::*;
use crate::stats::{AggregateTable, DashboardData, TableOverview, AVERAGE_RENTALS, TOTAL_RENTALS};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Default file name offered in the save dialog.
pub const REPORT_FILE_NAME: &str = "bike_sharing_dashboard.html";

/// Chart sizes in pixels, matching the proportions of the dashboard figures
const HOLIDAY_CHART_SIZE: (u32, u32) = (800, 600);
const SEASON_CHART_SIZE: (u32, u32) = (1000, 600);
const WEATHER_CHART_SIZE: (u32, u32) = (1500, 900);

const STYLE: &str = "\
body{margin:0;font-family:sans-serif;display:flex;color:#262730}\
aside{width:260px;min-height:100vh;background:#f0f2f6;padding:24px;box-sizing:border-box}\
main{flex:1;padding:24px 48px;max-width:1600px}\
input[name=tabs]{display:none}\
label.tab{display:inline-block;padding:8px 16px;cursor:pointer;border-bottom:2px solid transparent}\
#tab1:checked+label,#tab2:checked+label{border-bottom-color:#ff4b4b;color:#ff4b4b}\
.panel{display:none;padding-top:16px}\
#tab1:checked~#panel1,#tab2:checked~#panel2{display:block}\
table{border-collapse:collapse;margin-bottom:24px}\
th,td{border:1px solid #ddd;padding:4px 12px;text-align:right}\
th{background:#fafafa}\
.note{color:#9c0006}\
svg{max-width:100%;height:auto}";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render chart: {0}")]
    Chart(String),
}

/// HTML generator for the dashboard report
pub struct HtmlReportGenerator;

impl HtmlReportGenerator {
    /// Build the complete page. `logo_src` is the image reference for the sidebar, if any.
    pub fn generate_html(
        data: &DashboardData,
        logo_src: Option<&str>,
    ) -> Result<String, ReportError> {
        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>",
            escape_html(DASHBOARD_TITLE),
            STYLE
        );

        html.push_str(&Self::sidebar_html(logo_src));

        html.push_str("<main>");
        let _ = write!(
            html,
            "<input type=\"radio\" name=\"tabs\" id=\"tab1\" checked><label class=\"tab\" for=\"tab1\">{}</label>\
             <input type=\"radio\" name=\"tabs\" id=\"tab2\"><label class=\"tab\" for=\"tab2\">{}</label>",
            escape_html(TAB_PRELIMINARY),
            escape_html(TAB_EXPLANATORY)
        );
        html.push_str(&Self::preliminary_panel_html(data));
        html.push_str(&Self::explanatory_panel_html(data)?);
        html.push_str("</main></body></html>");

        Ok(html)
    }

    /// Write the page to `output_path`, copying the logo alongside when it exists.
    pub fn write_report(
        data: &DashboardData,
        output_path: &Path,
        logo: &Path,
    ) -> Result<PathBuf, ReportError> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let logo_src = Self::copy_logo(output_path, logo);
        let html = Self::generate_html(data, logo_src.as_deref())?;
        fs::write(output_path, html)?;

        info!(path = %output_path.display(), "dashboard report written");
        Ok(output_path.to_path_buf())
    }

    fn copy_logo(output_path: &Path, logo: &Path) -> Option<String> {
        let file_name = logo.file_name()?.to_string_lossy().to_string();
        if !logo.is_file() {
            warn!(path = %logo.display(), "logo not found, report renders without it");
            return None;
        }

        let target = output_path
            .parent()
            .map(|p| p.join(&file_name))
            .unwrap_or_else(|| PathBuf::from(&file_name));

        if !Self::same_file(logo, &target) {
            if let Err(e) = fs::copy(logo, &target) {
                warn!(error = %e, "failed to copy logo next to report");
                return None;
            }
        }
        Some(file_name)
    }

    /// Whether two paths resolve to the same existing file; `fs::copy` onto itself truncates.
    fn same_file(a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    fn sidebar_html(logo_src: Option<&str>) -> String {
        let mut html = String::from("<aside>");
        if let Some(src) = logo_src {
            let _ = write!(html, "<img src=\"{}\" width=\"100\" alt=\"logo\">", escape_html(src));
        }
        let _ = write!(
            html,
            "<h1>{}</h1><p>{}</p></aside>",
            escape_html(DASHBOARD_TITLE),
            escape_html(DASHBOARD_DESCRIPTION)
        );
        html
    }

    fn preliminary_panel_html(data: &DashboardData) -> String {
        let mut html = String::from("<section id=\"panel1\" class=\"panel\">");
        let _ = write!(html, "<h2>{}</h2>", escape_html(PRELIMINARY_HEADER));

        let _ = write!(html, "<h3>{}</h3>", escape_html(OVERVIEW_HEADER));
        html.push_str(&Self::overview_table_html(&[
            &data.hourly_overview,
            &data.daily_overview,
        ]));
        if data.date_alignment.mismatched_rows > 0 {
            let _ = write!(
                html,
                "<p class=\"note\">{} daily rows carry a different date than the hourly-derived dates (daily date source: {:?}).</p>",
                data.date_alignment.mismatched_rows, data.date_alignment.source
            );
        }

        for (title, table) in AGGREGATE_TITLES.iter().zip(data.aggregate_tables()) {
            let _ = write!(html, "<h3>{}</h3>", escape_html(title));
            html.push_str(&Self::aggregate_table_html(table));
        }

        html.push_str("</section>");
        html
    }

    fn explanatory_panel_html(data: &DashboardData) -> Result<String, ReportError> {
        let chart = |result: crate::charts::RenderResult| {
            result.map_err(|e| ReportError::Chart(e.to_string()))
        };

        let mut html = String::from("<section id=\"panel2\" class=\"panel\">");
        let _ = write!(html, "<h2>{}</h2>", escape_html(EXPLANATORY_HEADER));

        let _ = write!(html, "<h3>{}</h3>", escape_html(HOLIDAY_CHART_HEADER));
        html.push_str(&chart(StaticChartRenderer::render_category_bars(
            HOLIDAY_CHART_TITLE,
            HOLIDAY_CHART_X,
            &data.holiday_usage,
            BarPalette::Pastel,
            HOLIDAY_CHART_SIZE,
        ))?);

        let _ = write!(html, "<h3>{}</h3>", escape_html(SEASON_CHART_HEADER));
        html.push_str(&chart(StaticChartRenderer::render_category_bars(
            SEASON_CHART_TITLE,
            SEASON_CHART_X,
            &data.season_usage,
            BarPalette::Set2,
            SEASON_CHART_SIZE,
        ))?);

        let _ = write!(html, "<h3>{}</h3>", escape_html(WEATHER_CHART_HEADER));
        html.push_str(&chart(StaticChartRenderer::render_hour_weather(
            WEATHER_CHART_TITLE,
            &data.hour_weather,
            WEATHER_CHART_SIZE,
        ))?);
        let _ = write!(
            html,
            "<p><strong>{}</strong></p><ul>",
            escape_html(WEATHER_LEGEND_TITLE)
        );
        for series in &data.hour_weather {
            let _ = write!(
                html,
                "<li>{}: {}</li>",
                escape_html(&series.key),
                escape_html(&series.label)
            );
        }
        html.push_str("</ul>");

        let _ = write!(
            html,
            "<h3>{}</h3><p>{}</p><ol>",
            escape_html(CONCLUSION_HEADER),
            escape_html(CONCLUSION_INTRO)
        );
        for (conclusion, figure) in CONCLUSIONS.iter().zip(
            supporting_figures(data)
                .into_iter()
                .map(Some)
                .chain(std::iter::repeat(None)),
        ) {
            let _ = write!(
                html,
                "<li><strong>{}:</strong> {}",
                escape_html(conclusion.title),
                escape_html(conclusion.body)
            );
            if let Some(figure) = figure {
                let _ = write!(html, "<br><em>{}</em>", escape_html(&figure));
            }
            html.push_str("</li>");
        }
        html.push_str("</ol></section>");

        Ok(html)
    }

    fn overview_table_html(overviews: &[&TableOverview]) -> String {
        let mut html = String::from(
            "<table><tr><th>table</th><th>rows</th><th>first date</th><th>last date</th><th>total rentals</th></tr>",
        );
        for o in overviews {
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&o.name),
                o.rows,
                escape_html(&o.first_date),
                escape_html(&o.last_date),
                o.total_rentals
            );
        }
        html.push_str("</table>");
        html
    }

    fn aggregate_table_html(table: &AggregateTable) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<table><tr><th>{}</th><th>{}</th><th>{}</th></tr>",
            escape_html(&table.group_key),
            TOTAL_RENTALS,
            AVERAGE_RENTALS
        );
        for row in &table.rows {
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{:.6}</td></tr>",
                escape_html(&row.key),
                row.total_rentals,
                row.average_rentals
            );
        }
        let _ = write!(
            html,
            "<tr><th>total</th><th>{}</th><th></th></tr></table>",
            table.grand_total()
        );
        html
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Mist + Cloudy"), "Mist + Cloudy");
        assert_eq!(
            escape_html("<a href=\"x\">&</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }
}
