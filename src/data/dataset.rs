//! Reference Dataset
//! Average frame times measured for ten cloud volumes with three phase
//! functions.

use crate::charts::SeriesColor;
use crate::data::FrameTimeTable;

pub const PHASE_FUNCTIONS: [&str; 3] = ["Rayleigh", "Henyey-Greenstein", "Cornette-Shanks"];

/// Frame times in ms; rows are cloud datasets, columns follow [`PHASE_FUNCTIONS`].
const REFERENCE_FRAME_TIMES: [[f64; 3]; 10] = [
    [20.0, 20.1, 19.0],
    [21.0, 20.0, 18.0],
    [19.0, 18.0, 20.0],
    [20.0, 21.0, 19.0],
    [22.0, 21.0, 20.0],
    [20.0, 20.0, 19.0],
    [20.0, 21.0, 19.0],
    [19.0, 20.0, 19.0],
    [21.0, 20.0, 18.0],
    [20.0, 21.0, 20.0],
];

/// Everything the renderer needs besides its configuration.
#[derive(Debug, Clone)]
pub struct FrameTimeDataset {
    pub table: FrameTimeTable,
    pub categories: Vec<String>,
    pub colors: Vec<SeriesColor>,
}

impl FrameTimeDataset {
    pub fn reference() -> Self {
        Self {
            table: FrameTimeTable::from_rows(&REFERENCE_FRAME_TIMES),
            categories: PHASE_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
            colors: vec![SeriesColor::RED, SeriesColor::GREEN, SeriesColor::BLUE],
        }
    }
}
