use std::path::PathBuf;

use plotly::common::{Font, HoverInfo, Line, Marker, Mode, Position, Title};
use plotly::layout::themes::PLOTLY_WHITE;
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

use crate::traces::{LANE_COLOR, LANE_WIDTH};
use crate::{
    check_not_empty, lane_series, vehicle_series, CenterlineTable, Dataset, LaneSeries, Paths,
    PlotError, RunID, TrajectoryRecord, VehicleSelection, VehicleSeries,
};

/// Both axes start at 0 and end at the furthest point of the whole run. Missing positions are
/// skipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl AxisBounds {
    /// None if there are no records
    pub fn for_run(records: &[&TrajectoryRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self {
            max_x: records.iter().map(|rec| rec.x).fold(f64::MIN, f64::max),
            max_y: records.iter().map(|rec| rec.y).fold(f64::MIN, f64::max),
        })
    }
}

/// Checks the request, then writes the plot to `paths.output`. Nothing is written if anything
/// fails.
pub fn plot_vehicles(
    dataset: &Dataset,
    paths: &Paths,
    run: RunID,
    input: &str,
) -> Result<PathBuf, PlotError> {
    check_not_empty(input)?;

    let records = dataset.records_for_run(run);
    let bounds = AxisBounds::for_run(&records).ok_or(PlotError::NoDataForRun(run))?;

    let known = dataset.vehicles_in_run(run);
    let vehicles = VehicleSelection::parse(input, &known).into_result(run)?;
    debug!("Plotting {} vehicles from run {run}", vehicles.len());

    let table = CenterlineTable::load_for_run(&paths.centerlines, run)?;
    let lanes = lane_series(&table)?;
    let vehicles = vehicle_series(&records, &vehicles);

    let plot = build_plot(run, &lanes, &vehicles, bounds);
    fs_err::write(&paths.output, plot.to_html()).map_err(anyhow::Error::from)?;
    info!(
        "Wrote {} lanes and {} vehicles for run {run} to {}",
        lanes.len(),
        vehicles.len(),
        paths.output.display()
    );
    Ok(paths.output.clone())
}

/// Lanes are drawn first, so vehicles end up on top.
pub fn build_plot(
    run: RunID,
    lanes: &[LaneSeries],
    vehicles: &[VehicleSeries],
    bounds: AxisBounds,
) -> Plot {
    let mut plot = Plot::new();

    for lane in lanes {
        let name = lane.name();
        let (xs, ys): (Vec<f64>, Vec<f64>) = lane.points.iter().copied().unzip();
        plot.add_trace(
            Scatter::new(xs, ys)
                .mode(Mode::Lines)
                .line(Line::new().color(LANE_COLOR).width(LANE_WIDTH))
                .name(&name),
        );

        if let Some((x, y)) = lane.end() {
            plot.add_trace(
                Scatter::new(vec![x], vec![y])
                    .mode(Mode::Text)
                    .text_array(vec![name])
                    .text_position(Position::TopCenter)
                    .text_font(Font::new().color("black").size(10))
                    .show_legend(false),
            );
        }
    }

    for vehicle in vehicles {
        plot.add_trace(
            Scatter::new(vehicle.xs.clone(), vehicle.ys.clone())
                .mode(Mode::Markers)
                .name(&vehicle.name())
                .marker(Marker::new().size(5).color(vehicle.color.clone()))
                .text_array(vehicle.hover.clone())
                .hover_info(HoverInfo::Text),
        );
    }

    plot.set_layout(
        Layout::new()
            .title(Title::new(&format!("Run {run} Trajectories")))
            .x_axis(
                Axis::new()
                    .title(Title::new("X"))
                    .range(vec![0.0, bounds.max_x]),
            )
            .y_axis(
                Axis::new()
                    .title(Title::new("Y"))
                    .range(vec![0.0, bounds.max_y]),
            )
            .template(&*PLOTLY_WHITE),
    );
    plot
}
