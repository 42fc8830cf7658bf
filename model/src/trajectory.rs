use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};

use crate::{RunID, VehicleID};

/// One sample of one vehicle in one run
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrajectoryRecord {
    #[serde(rename = "run_index")]
    pub run: RunID,
    #[serde(rename = "id")]
    pub vehicle: VehicleID,
    // Measurements may be blank; those become NaN
    /// Seconds
    #[serde(deserialize_with = "nan_if_missing")]
    pub time: f64,
    #[serde(rename = "xloc_kf", deserialize_with = "nan_if_missing")]
    pub x: f64,
    #[serde(rename = "yloc_kf", deserialize_with = "nan_if_missing")]
    pub y: f64,
    #[serde(rename = "lane_kf", deserialize_with = "nan_if_missing")]
    pub lane: f64,
    #[serde(rename = "speed_kf", deserialize_with = "nan_if_missing")]
    pub speed: f64,
    #[serde(rename = "acceleration_kf", deserialize_with = "nan_if_missing")]
    pub acceleration: f64,
}

fn nan_if_missing<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
}

/// Every trajectory record, loaded once and never modified
pub struct Dataset {
    records: Vec<TrajectoryRecord>,
}

impl Dataset {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = fs_err::File::open(path)?;
        let dataset =
            Self::from_reader(file).with_context(|| format!("loading {}", path.display()))?;
        info!(
            "Loaded {} trajectory records across {} runs from {}",
            dataset.records.len(),
            dataset.runs().len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut records = Vec::new();
        for rec in csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader)
            .deserialize()
        {
            let rec: TrajectoryRecord = rec?;
            records.push(rec);
        }
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<TrajectoryRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted and deduplicated
    pub fn runs(&self) -> Vec<RunID> {
        self.records
            .iter()
            .map(|rec| rec.run)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn records_for_run(&self, run: RunID) -> Vec<&TrajectoryRecord> {
        self.records.iter().filter(|rec| rec.run == run).collect()
    }

    pub fn vehicles_in_run(&self, run: RunID) -> BTreeSet<VehicleID> {
        self.records
            .iter()
            .filter(|rec| rec.run == run)
            .map(|rec| rec.vehicle)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
run_index,id,time,xloc_kf,yloc_kf,lane_kf,speed_kf,acceleration_kf,extra
2,5,0.0,1.0,2.0,1.0,10.0,0.5,ignored
1,10,0.0,3.0,4.0,2.0,11.0,0.1,ignored
1,10,0.1,3.5,4.0,2.0,11.2,0.2,ignored
1,20,0.0,8.0,1.0,3.0,9.0,-0.3,ignored
";

    #[test]
    fn runs_are_sorted_and_distinct() {
        let dataset = Dataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(dataset.runs(), vec![RunID(1), RunID(2)]);
    }

    #[test]
    fn filters_by_run() {
        let dataset = Dataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(dataset.records_for_run(RunID(1)).len(), 3);
        assert!(dataset.records_for_run(RunID(7)).is_empty());
        assert_eq!(
            dataset.vehicles_in_run(RunID(1)).into_iter().collect::<Vec<_>>(),
            vec![VehicleID(10), VehicleID(20)]
        );
    }

    #[test]
    fn blank_measurements_are_nan() {
        let csv = "\
run_index,id,time,xloc_kf,yloc_kf,lane_kf,speed_kf,acceleration_kf
1,10,0.0,1,1,1,1,
1,10,0.1,,2,,NaN,0.3
";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        let records = dataset.records_for_run(RunID(1));
        assert_eq!(records.len(), 2);
        assert!(records[0].acceleration.is_nan());
        assert_eq!(records[0].speed, 1.0);
        assert!(records[1].x.is_nan());
        assert!(records[1].lane.is_nan());
        assert!(records[1].speed.is_nan());
        assert_eq!(records[1].y, 2.0);
    }

    #[test]
    fn malformed_rows_fail() {
        let bad = "run_index,id,time,xloc_kf,yloc_kf,lane_kf,speed_kf,acceleration_kf\n1,x,0,0,0,0,0,0\n";
        assert!(Dataset::from_reader(bad.as_bytes()).is_err());
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(dir.path().join("nope.csv")).err().unwrap();
        assert!(format!("{err:#}").contains("nope.csv"));
    }
}
