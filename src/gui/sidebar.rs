//! Sidebar Widget
//! Left side panel with logo, title, description, status and actions.

use crate::narrative::{DASHBOARD_DESCRIPTION, DASHBOARD_TITLE};
use egui::{Color32, RichText, TextureHandle};
use std::path::Path;
use tracing::warn;

/// Display width of the logo in points.
const LOGO_WIDTH: f32 = 100.0;

/// Left side panel of the dashboard.
pub struct Sidebar {
    pub logo: Option<TextureHandle>,
    pub status: String,
    pub is_loading: bool,
    pub export_enabled: bool,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            logo: None,
            status: "Ready".to_string(),
            is_loading: false,
            export_enabled: false,
        }
    }
}

impl Sidebar {
    pub fn new(logo: Option<TextureHandle>) -> Self {
        Self {
            logo,
            ..Self::default()
        }
    }

    /// Load the branding image into a texture. A missing or unreadable image is not fatal.
    pub fn load_logo(ctx: &egui::Context, path: &Path) -> Option<TextureHandle> {
        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                Some(ctx.load_texture("logo", color_image, egui::TextureOptions::default()))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load logo");
                None
            }
        }
    }

    /// Draw the sidebar
    pub fn show(&mut self, ui: &mut egui::Ui) -> SidebarAction {
        let mut action = SidebarAction::None;

        ui.add_space(10.0);
        if let Some(logo) = &self.logo {
            ui.add(egui::Image::new(logo).max_width(LOGO_WIDTH));
            ui.add_space(10.0);
        }

        ui.label(RichText::new(DASHBOARD_TITLE).size(22.0).strong());
        ui.add_space(8.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(DASHBOARD_DESCRIPTION).size(13.0));
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(!self.is_loading, |ui| {
                let button = egui::Button::new(RichText::new("⟳ Reload").size(15.0))
                    .min_size(egui::vec2(180.0, 32.0));
                if ui.add(button).clicked() {
                    action = SidebarAction::Reload;
                }
            });

            ui.add_space(8.0);

            ui.add_enabled_ui(self.export_enabled && !self.is_loading, |ui| {
                let button = egui::Button::new(RichText::new("🌐 Open in Browser").size(14.0))
                    .min_size(egui::vec2(180.0, 30.0));
                if ui.add(button).clicked() {
                    action = SidebarAction::OpenInBrowser;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.horizontal(|ui| {
            if self.is_loading {
                ui.spinner();
            }
            let status_color = if self.status.contains("Error") {
                Color32::from_rgb(220, 53, 69)
            } else if self.status.contains("Complete") {
                Color32::from_rgb(40, 167, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        });

        action
    }

    /// Set status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by the sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    Reload,
    OpenInBrowser,
}
