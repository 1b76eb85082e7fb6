//! Charts module - bar layout and rendering

mod color;
mod layout;
mod plotter;
mod renderer;

pub use color::SeriesColor;
pub use layout::{BarChart, ChartRenderer};
pub use plotter::ChartPlotter;
pub use renderer::{ExportFormat, StaticChartRenderer};
