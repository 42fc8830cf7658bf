use std::path::PathBuf;

use crate::RunID;

/// Everything that can stop a plot request. The caller decides how to show it.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("No vehicle IDs provided.")]
    NoVehicleIds,
    #[error("{}", describe_bad_ids(.run, .malformed, .not_found))]
    BadVehicleIds {
        run: RunID,
        /// Tokens that aren't made of digits, verbatim
        malformed: Vec<String>,
        /// Numeric tokens without any rows in the run, verbatim
        not_found: Vec<String>,
    },
    #[error("No data for Run {0}.")]
    NoDataForRun(RunID),
    #[error("Missing centerline: {}", .0.display())]
    MissingCenterline(PathBuf),
    #[error(transparent)]
    Load(#[from] anyhow::Error),
}

fn describe_bad_ids(run: &RunID, malformed: &[String], not_found: &[String]) -> String {
    let mut lines = Vec::new();
    if !malformed.is_empty() {
        lines.push(format!(
            "❌ Invalid format (not numeric): {}",
            malformed.join(", ")
        ));
    }
    if !not_found.is_empty() {
        lines.push(format!("❌ Not found in Run {run}: {}", not_found.join(", ")));
    }
    lines.join("\n")
}
