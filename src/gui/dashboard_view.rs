//! Dashboard View Widget
//! Central panel with the two tabs: preliminary tables and explanatory charts.

use crate::charts::{BarPalette, ChartPlotter};
use crate::narrative::*;
use crate::stats::{AggregateTable, DashboardData, TableOverview, AVERAGE_RENTALS, TOTAL_RENTALS};
use egui::{Color32, RichText, ScrollArea};

/// Which tab is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Preliminary,
    Explanatory,
}

/// Scrollable two-tab view over the computed dashboard data.
#[derive(Default)]
pub struct DashboardView {
    pub tab: Tab,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the tab bar and the selected tab
    pub fn show(&mut self, ui: &mut egui::Ui, data: Option<&DashboardData>) {
        ui.horizontal(|ui| {
            ui.selectable_value(
                &mut self.tab,
                Tab::Preliminary,
                RichText::new(TAB_PRELIMINARY).size(15.0),
            );
            ui.selectable_value(
                &mut self.tab,
                Tab::Explanatory,
                RichText::new(TAB_EXPLANATORY).size(15.0),
            );
        });
        ui.separator();

        let Some(data) = data else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.tab {
                Tab::Preliminary => Self::show_preliminary(ui, data),
                Tab::Explanatory => Self::show_explanatory(ui, data),
            });
    }

    fn show_preliminary(ui: &mut egui::Ui, data: &DashboardData) {
        ui.heading(PRELIMINARY_HEADER);
        ui.add_space(10.0);

        ui.label(RichText::new(OVERVIEW_HEADER).size(16.0).strong());
        Self::draw_overview_table(ui, &[&data.hourly_overview, &data.daily_overview]);
        if data.date_alignment.mismatched_rows > 0 {
            ui.label(
                RichText::new(format!(
                    "⚠ {} daily rows carry a different date than the hourly-derived dates (daily date source: {:?})",
                    data.date_alignment.mismatched_rows, data.date_alignment.source
                ))
                .size(12.0)
                .color(Color32::from_rgb(220, 53, 69)),
            );
        }
        ui.add_space(15.0);

        for (title, table) in AGGREGATE_TITLES.iter().zip(data.aggregate_tables()) {
            ui.label(RichText::new(*title).size(16.0).strong());
            ui.add_space(5.0);
            Self::draw_aggregate_table(ui, table);
            ui.add_space(15.0);
        }
    }

    fn show_explanatory(ui: &mut egui::Ui, data: &DashboardData) {
        ui.heading(EXPLANATORY_HEADER);
        ui.add_space(10.0);

        ui.label(RichText::new(HOLIDAY_CHART_HEADER).size(16.0).strong());
        ChartPlotter::draw_category_bars(
            ui,
            "holiday_usage",
            HOLIDAY_CHART_X,
            &data.holiday_usage,
            BarPalette::Pastel,
        );
        ui.add_space(15.0);

        ui.label(RichText::new(SEASON_CHART_HEADER).size(16.0).strong());
        ChartPlotter::draw_category_bars(
            ui,
            "season_usage",
            SEASON_CHART_X,
            &data.season_usage,
            BarPalette::Set2,
        );
        ui.add_space(15.0);

        ui.label(RichText::new(WEATHER_CHART_HEADER).size(16.0).strong());
        ui.label(RichText::new(WEATHER_LEGEND_TITLE).size(12.0).color(Color32::GRAY));
        ChartPlotter::draw_hour_weather_lines(ui, &data.hour_weather);
        ui.add_space(15.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new(CONCLUSION_HEADER).size(16.0).strong());
                ui.add_space(5.0);
                ui.label(CONCLUSION_INTRO);
                ui.add_space(5.0);

                let figures = supporting_figures(data);
                for (i, conclusion) in CONCLUSIONS.iter().enumerate() {
                    ui.label(
                        RichText::new(format!("{}. {}", i + 1, conclusion.title)).strong(),
                    );
                    ui.label(conclusion.body);
                    if let Some(figure) = figures.get(i) {
                        ui.label(RichText::new(figure).italics().color(Color32::GRAY));
                    }
                    ui.add_space(8.0);
                }
            });
    }

    /// Draw row count, date span and rental total of each table
    fn draw_overview_table(ui: &mut egui::Ui, overviews: &[&TableOverview]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("overview_table")
                    .striped(true)
                    .min_col_width(80.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["table", "rows", "first date", "last date", "total rentals"] {
                            ui.label(RichText::new(header).strong().size(12.0));
                        }
                        ui.end_row();

                        for o in overviews {
                            ui.label(RichText::new(&o.name).size(12.0));
                            ui.label(RichText::new(o.rows.to_string()).size(12.0));
                            ui.label(RichText::new(&o.first_date).size(12.0));
                            ui.label(RichText::new(&o.last_date).size(12.0));
                            ui.label(RichText::new(o.total_rentals.to_string()).size(12.0));
                            ui.end_row();
                        }
                    });
            });
    }

    /// Draw one grouped summary table
    fn draw_aggregate_table(ui: &mut egui::Ui, table: &AggregateTable) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(format!("aggregate_table_{}", table.group_key))
                    .striped(true)
                    .min_col_width(90.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new(&table.group_key).strong().size(12.0));
                        ui.label(RichText::new(TOTAL_RENTALS).strong().size(12.0));
                        ui.label(RichText::new(AVERAGE_RENTALS).strong().size(12.0));
                        ui.end_row();

                        for row in &table.rows {
                            ui.label(RichText::new(&row.key).size(12.0));
                            ui.label(RichText::new(row.total_rentals.to_string()).size(12.0));
                            ui.label(
                                RichText::new(format!("{:.6}", row.average_rentals)).size(12.0),
                            );
                            ui.end_row();
                        }

                        ui.label(RichText::new("total").strong().size(12.0));
                        ui.label(
                            RichText::new(table.grand_total().to_string()).strong().size(12.0),
                        );
                        ui.end_row();
                    });
            });
    }
}
