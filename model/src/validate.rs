use std::collections::BTreeSet;

use crate::{PlotError, RunID, VehicleID};

/// A comma-separated list of vehicle IDs, sorted into three disjoint buckets
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VehicleSelection {
    /// In the order the user typed them
    pub valid: Vec<VehicleID>,
    pub malformed: Vec<String>,
    pub not_found: Vec<String>,
}

impl VehicleSelection {
    /// Every trimmed token lands in exactly one bucket. Empty tokens, like from a trailing comma,
    /// are malformed.
    pub fn parse(input: &str, known: &BTreeSet<VehicleID>) -> Self {
        let mut selection = Self::default();
        for token in input.split(',') {
            let token = token.trim();
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                selection.malformed.push(token.to_string());
                continue;
            }
            // All digits but too big for an ID can't match anything
            match token.parse::<i64>() {
                Ok(id) if known.contains(&VehicleID(id)) => selection.valid.push(VehicleID(id)),
                _ => selection.not_found.push(token.to_string()),
            }
        }
        selection
    }

    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty() && self.not_found.is_empty()
    }

    pub fn into_result(self, run: RunID) -> Result<Vec<VehicleID>, PlotError> {
        if !self.is_clean() {
            return Err(PlotError::BadVehicleIds {
                run,
                malformed: self.malformed,
                not_found: self.not_found,
            });
        }
        Ok(self.valid)
    }
}

pub fn check_not_empty(input: &str) -> Result<(), PlotError> {
    if input.trim().is_empty() {
        return Err(PlotError::NoVehicleIds);
    }
    Ok(())
}
