//! Data module - compiled-in frame time table

mod dataset;
mod table;

pub use dataset::FrameTimeDataset;
pub use table::FrameTimeTable;
