//! Bike Sharing Dashboard Main Application
//! Main window with sidebar and the two-tab dashboard view.

use crate::config::DashboardConfig;
use crate::gui::{DashboardView, Sidebar, SidebarAction};
use crate::pipeline;
use crate::report::{HtmlReportGenerator, REPORT_FILE_NAME};
use crate::stats::DashboardData;
use egui::SidePanel;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use tracing::{error, info};

/// Status text when the load thread ends without reporting back (e.g. it panicked).
const LOAD_THREAD_STOPPED: &str = "data loading stopped unexpectedly";

/// Pipeline result from background thread
#[derive(Debug)]
enum LoadResult {
    Complete(Box<DashboardData>),
    Error(String),
}

/// Background load state after one poll.
#[derive(Debug)]
enum LoadPoll {
    Pending,
    Finished(LoadResult),
}

/// Poll the load channel without blocking. A sender dropped without a result counts as an error.
fn poll_load(rx: &Receiver<LoadResult>) -> LoadPoll {
    match rx.try_recv() {
        Ok(result) => LoadPoll::Finished(result),
        Err(TryRecvError::Empty) => LoadPoll::Pending,
        Err(TryRecvError::Disconnected) => {
            error!("dashboard load thread ended without a result");
            LoadPoll::Finished(LoadResult::Error(LOAD_THREAD_STOPPED.to_string()))
        }
    }
}

/// Main application window.
pub struct BikeShareApp {
    config: DashboardConfig,
    sidebar: Sidebar,
    view: DashboardView,
    data: Option<DashboardData>,

    // Async pipeline run
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl BikeShareApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let logo = Sidebar::load_logo(&cc.egui_ctx, &config.logo);
        let mut app = Self {
            config,
            sidebar: Sidebar::new(logo),
            view: DashboardView::new(),
            data: None,
            load_rx: None,
            is_loading: false,
        };
        app.start_load();
        app
    }

    /// Run the whole pipeline again in a background thread. Nothing is reused from a previous run.
    fn start_load(&mut self) {
        if self.is_loading {
            return;
        }

        self.data = None;
        self.sidebar.export_enabled = false;
        self.sidebar.set_status("Loading data...");
        self.is_loading = true;
        self.sidebar.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        let config = self.config.clone();

        thread::spawn(move || {
            let result = match pipeline::run(&config) {
                Ok(data) => LoadResult::Complete(Box::new(data)),
                Err(e) => {
                    error!(error = %e, "dashboard pipeline failed");
                    LoadResult::Error(e.to_string())
                }
            };
            let _ = tx.send(result);
        });
    }

    /// Check for pipeline results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        let result = match poll_load(&rx) {
            LoadPoll::Pending => {
                self.load_rx = Some(rx);
                return;
            }
            LoadPoll::Finished(result) => result,
        };

        match result {
            LoadResult::Complete(data) => {
                self.sidebar.set_status(&format!(
                    "Complete! {} hourly rows, {} daily rows",
                    data.hourly_overview.rows, data.daily_overview.rows
                ));
                self.sidebar.export_enabled = true;
                self.data = Some(*data);
            }
            LoadResult::Error(error) => {
                self.sidebar.set_status(&format!("Error: {}", error));
            }
        }
        self.is_loading = false;
        self.sidebar.is_loading = false;
    }

    /// Write the browser report and open it with the system browser
    fn handle_open_in_browser(&mut self) {
        let Some(data) = &self.data else {
            self.sidebar.set_status("No data to export");
            return;
        };

        let output_path = match rfd::FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name(REPORT_FILE_NAME)
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        self.sidebar.set_status("Rendering report...");

        match HtmlReportGenerator::write_report(data, &output_path, &self.config.logo) {
            Ok(path) => {
                info!(path = %path.display(), "opening report in browser");
                match open::that(&path) {
                    Ok(()) => self
                        .sidebar
                        .set_status(&format!("Report opened: {}", path.display())),
                    Err(e) => self
                        .sidebar
                        .set_status(&format!("Error opening browser: {}", e)),
                }
            }
            Err(e) => {
                error!(error = %e, "report export failed");
                self.sidebar.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for BikeShareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Sidebar
        SidePanel::left("sidebar")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| match self.sidebar.show(ui) {
                    SidebarAction::Reload => self.start_load(),
                    SidebarAction::OpenInBrowser => self.handle_open_in_browser(),
                    SidebarAction::None => {}
                });
            });

        // Central panel - Dashboard tabs
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.show(ui, self.data.as_ref());
        });
    }
}
