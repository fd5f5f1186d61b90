//! Charts module - Chart rendering

mod palette;
mod plotter;
mod renderer;

pub use palette::BarPalette;
pub use plotter::{ChartPlotter, Y_HEADROOM};
pub use renderer::{RenderResult, StaticChartRenderer};
