#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod centerline;
mod error;
mod lanes;
mod render;
mod traces;
mod trajectory;
mod validate;

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

pub use self::centerline::{centerline_path, CenterlineTable};
pub use self::error::PlotError;
pub use self::lanes::{discover_lanes, LaneColumns};
pub use self::render::{build_plot, plot_vehicles, AxisBounds};
pub use self::traces::{lane_series, palette_color, vehicle_series, LaneSeries, VehicleSeries};
pub use self::trajectory::{Dataset, TrajectoryRecord};
pub use self::validate::{check_not_empty, VehicleSelection};

/// One recorded observation session
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct RunID(pub i64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct VehicleID(pub i64);

impl fmt::Display for RunID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for VehicleID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where inputs are read from and the plot is written to
#[derive(Clone, Debug)]
pub struct Paths {
    pub trajectories: PathBuf,
    /// Holds one geometry file per run
    pub centerlines: PathBuf,
    /// Overwritten by every successful plot
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            trajectories: PathBuf::from("TGSIM_Stationary.csv"),
            centerlines: PathBuf::from("Centerline"),
            output: PathBuf::from("Stationary_Simplified_plot.html"),
        }
    }
}
