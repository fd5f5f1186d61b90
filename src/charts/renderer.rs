//! Static Chart Renderer
//! Renders the dashboard charts to SVG with plotters, for the browser report.
//!
//! Charts:
//! 1. Bar chart: average usage per category (working day vs holiday, season)
//! 2. Line chart: average usage by hour, one series per weather situation

use super::palette::{series_color, BarPalette, Rgb};
use super::plotter::ChartPlotter;
use crate::narrative::{USAGE_AXIS, WEATHER_CHART_X};
use crate::stats::{CategoryMean, WeatherSeries};
use plotters::prelude::*;

pub type RenderResult = Result<String, Box<dyn std::error::Error>>;

const GRID: RGBColor = RGBColor(220, 220, 220);

fn rgb((r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render a bar chart with one bar per category; y runs from 0 to max + headroom.
    pub fn render_category_bars(
        title: &str,
        x_label: &str,
        usage: &[CategoryMean],
        palette: BarPalette,
        size: (u32, u32),
    ) -> RenderResult {
        let labels: Vec<String> = usage.iter().map(|u| u.label.clone()).collect();
        let y_max = ChartPlotter::y_limit(usage.iter().map(|u| u.mean));
        let n = usage.len().max(1) as u32;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 24))
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(70)
                .build_cartesian_2d((0u32..n).into_segmented(), 0f64..y_max)?;

            let label_of = |value: &SegmentValue<u32>| match value {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                    labels.get(*i as usize).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            };

            chart
                .configure_mesh()
                .disable_x_mesh()
                .light_line_style(GRID)
                .x_desc(x_label)
                .y_desc(USAGE_AXIS)
                .x_label_formatter(&label_of)
                .draw()?;

            chart.draw_series(
                Histogram::vertical(&chart)
                    .style_func(|value, _| {
                        let idx = match value {
                            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => *i as usize,
                            SegmentValue::Last => 0,
                        };
                        rgb(palette.color(idx)).filled()
                    })
                    .margin(30)
                    .data(usage.iter().enumerate().map(|(i, u)| (i as u32, u.mean))),
            )?;

            root.present()?;
        }
        Ok(svg)
    }

    /// Render average usage by hour with one marked line per weather situation.
    pub fn render_hour_weather(
        title: &str,
        series: &[WeatherSeries],
        size: (u32, u32),
    ) -> RenderResult {
        let y_max = ChartPlotter::y_limit(
            series
                .iter()
                .flat_map(|s| s.points.iter().map(|&(_, mean)| mean)),
        );

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 28))
                .margin(20)
                .x_label_area_size(45)
                .y_label_area_size(70)
                .build_cartesian_2d(0f64..23f64, 0f64..y_max)?;

            chart
                .configure_mesh()
                .light_line_style(GRID)
                .x_labels(24)
                .x_label_formatter(&|x| format!("{:.0}", x))
                .x_desc(WEATHER_CHART_X)
                .y_desc(USAGE_AXIS)
                .draw()?;

            for (i, s) in series.iter().enumerate() {
                let color = rgb(series_color(i));

                chart
                    .draw_series(LineSeries::new(
                        s.points.iter().copied(),
                        color.stroke_width(2),
                    ))?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });

                chart.draw_series(
                    s.points
                        .iter()
                        .map(|&point| Circle::new(point, 4, color.filled())),
                )?;
            }

            if !series.is_empty() {
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .background_style(WHITE.mix(0.85))
                    .border_style(BLACK)
                    .draw()?;
            }

            root.present()?;
        }
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage() -> Vec<CategoryMean> {
        vec![
            CategoryMean {
                key: "false".to_string(),
                label: "Working Day".to_string(),
                mean: 190.3,
            },
            CategoryMean {
                key: "true".to_string(),
                label: "Holiday".to_string(),
                mean: 156.9,
            },
        ]
    }

    #[test]
    fn test_bar_chart_svg() {
        let svg = StaticChartRenderer::render_category_bars(
            "Average Bike Usage",
            "Category",
            &usage(),
            BarPalette::Pastel,
            (640, 480),
        )
        .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Average Bike Usage"));
        assert!(svg.contains("Working Day"));
        assert!(svg.contains("Holiday"));
    }

    #[test]
    fn test_line_chart_svg() {
        let series = vec![WeatherSeries {
            key: "1".to_string(),
            label: "Clear, Few clouds, Partly cloudy".to_string(),
            points: vec![(0.0, 40.0), (1.0, 30.0), (17.0, 480.0)],
        }];
        let svg =
            StaticChartRenderer::render_hour_weather("By Hour", &series, (900, 540)).unwrap();

        assert!(svg.contains("By Hour"));
        assert!(svg.contains("Clear, Few clouds, Partly cloudy"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn test_empty_series_still_renders() {
        let svg = StaticChartRenderer::render_hour_weather("Empty", &[], (400, 300)).unwrap();
        assert!(svg.contains("Empty"));
    }
}
