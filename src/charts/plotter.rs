//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use super::palette::{series_color, BarPalette, Rgb};
use crate::narrative::{USAGE_AXIS, WEATHER_CHART_X};
use crate::stats::{CategoryMean, WeatherSeries};
use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

/// Headroom added above the tallest bar, in rentals.
pub const Y_HEADROOM: f64 = 10.0;

fn color32((r, g, b): Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Upper bound of the y axis: tallest value plus headroom.
    pub fn y_limit(values: impl IntoIterator<Item = f64>) -> f64 {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
            + Y_HEADROOM
    }

    /// Draw one bar per category, each in its own palette color.
    pub fn draw_category_bars(
        ui: &mut egui::Ui,
        id: &str,
        x_label: &str,
        usage: &[CategoryMean],
        palette: BarPalette,
    ) {
        let labels: Vec<String> = usage.iter().map(|u| u.label.clone()).collect();
        let y_max = Self::y_limit(usage.iter().map(|u| u.mean));

        Plot::new(id)
            .height(300.0)
            .allow_scroll(false)
            .x_axis_label(x_label)
            .y_axis_label(USAGE_AXIS)
            .include_y(0.0)
            .include_y(y_max)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = usage
                    .iter()
                    .enumerate()
                    .map(|(i, u)| {
                        Bar::new(i as f64, u.mean)
                            .name(&u.label)
                            .width(0.6)
                            .fill(color32(palette.color(i)))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(x_label));
            });
    }

    /// Draw average usage by hour, one line with markers per weather situation.
    pub fn draw_hour_weather_lines(ui: &mut egui::Ui, series: &[WeatherSeries]) {
        Plot::new("hour_weather")
            .height(420.0)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label(WEATHER_CHART_X)
            .y_axis_label(USAGE_AXIS)
            .include_x(0.0)
            .include_x(23.0)
            .include_y(0.0)
            .show(ui, |plot_ui| {
                for (i, s) in series.iter().enumerate() {
                    let color = color32(series_color(i));
                    let points: Vec<[f64; 2]> = s.points.iter().map(|&(x, y)| [x, y]).collect();

                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(points.iter().copied()))
                            .color(color)
                            .width(2.0)
                            .name(&s.label),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(points.iter().copied()))
                            .radius(3.5)
                            .color(color)
                            .name(&s.label),
                    );
                }
            });
    }
}
