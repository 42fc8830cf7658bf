use anyhow::Result;

use crate::{discover_lanes, CenterlineTable, TrajectoryRecord, VehicleID};

pub const LANE_COLOR: &str = "#D3D3D3";
pub const LANE_WIDTH: f64 = 1.5;

/// One lane centerline, with missing points already removed
#[derive(Clone, Debug, PartialEq)]
pub struct LaneSeries {
    pub lane: String,
    pub points: Vec<(f64, f64)>,
}

impl LaneSeries {
    pub fn name(&self) -> String {
        format!("Lane {}", self.lane)
    }

    /// Where the lane's label goes
    pub fn end(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }
}

/// All samples of one selected vehicle
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleSeries {
    pub vehicle: VehicleID,
    pub color: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// One entry per point
    pub hover: Vec<String>,
}

impl VehicleSeries {
    pub fn name(&self) -> String {
        format!("Vehicle {}", self.vehicle)
    }
}

/// Only the discovered lane columns have to be numeric.
pub fn lane_series(table: &CenterlineTable) -> Result<Vec<LaneSeries>> {
    let mut results = Vec::new();
    for lane in discover_lanes(table.columns()) {
        results.push(LaneSeries {
            points: table.points(&lane.x_column, &lane.y_column)?,
            lane: lane.lane,
        });
    }
    Ok(results)
}

/// Colors follow the order of `vehicles`, not the IDs themselves.
pub fn vehicle_series(records: &[&TrajectoryRecord], vehicles: &[VehicleID]) -> Vec<VehicleSeries> {
    let mut results = Vec::new();
    for (idx, vehicle) in vehicles.iter().enumerate() {
        let mut series = VehicleSeries {
            vehicle: *vehicle,
            color: palette_color(idx),
            xs: Vec::new(),
            ys: Vec::new(),
            hover: Vec::new(),
        };
        for rec in records.iter().filter(|rec| rec.vehicle == *vehicle) {
            series.xs.push(rec.x);
            series.ys.push(rec.y);
            series.hover.push(hover_text(rec));
        }
        results.push(series);
    }
    results
}

/// Cycles through the 10 categorical colors
pub fn palette_color(idx: usize) -> String {
    let color = colorous::CATEGORY10[idx % colorous::CATEGORY10.len()];
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

// Missing values show up as "nan"
fn hover_text(rec: &TrajectoryRecord) -> String {
    format!(
        "ID: {}<br>Time: {}s<br>Lane: {}<br>Speed: {} m/s<br>Accel: {} m/s²",
        rec.vehicle,
        or_nan(rec.time, |x| format!("{x:?}")),
        or_nan(rec.lane, |x| (x as i64).to_string()),
        or_nan(rec.speed, |x| format!("{x:.2}")),
        or_nan(rec.acceleration, |x| format!("{x:.2}")),
    )
}

fn or_nan<F: Fn(f64) -> String>(x: f64, fmt: F) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else {
        fmt(x)
    }
}
