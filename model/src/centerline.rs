use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{PlotError, RunID};

pub fn centerline_path(folder: &Path, run: RunID) -> PathBuf {
    folder.join(format!("I-90-stationary-Run_{run}-geometry-with-ramps.csv"))
}

/// Lane geometry for one run. Columns hold x or y coordinates of one lane; lanes can have
/// different lengths, so any cell may be missing. Cells stay as text until a lane is asked for,
/// so columns that aren't lane coordinates can hold anything.
pub struct CenterlineTable {
    columns: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl CenterlineTable {
    pub fn load_for_run(folder: &Path, run: RunID) -> Result<Self, PlotError> {
        let path = centerline_path(folder, run);
        if !path.exists() {
            return Err(PlotError::MissingCenterline(path));
        }
        let file = fs_err::File::open(&path).map_err(anyhow::Error::from)?;
        let table =
            Self::from_reader(file).with_context(|| format!("reading {}", path.display()))?;
        debug!(
            "Read {} rows of centerline geometry from {}",
            table.rows.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);
        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|col| col.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for rec in reader.records() {
            rows.push(rec?);
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The (x, y) points from two columns, skipping rows where either value is missing. Empty if
    /// a column doesn't exist. Fails if either column has a cell that isn't a number.
    pub fn points(&self, x_column: &str, y_column: &str) -> Result<Vec<(f64, f64)>> {
        let (Some(x_idx), Some(y_idx)) = (self.column_idx(x_column), self.column_idx(y_column))
        else {
            return Ok(Vec::new());
        };
        let mut points = Vec::new();
        for (idx, rec) in self.rows.iter().enumerate() {
            let x = parse_cell(rec.get(x_idx).unwrap_or(""))
                .with_context(|| format!("row {}, column {x_column}", idx + 1))?;
            let y = parse_cell(rec.get(y_idx).unwrap_or(""))
                .with_context(|| format!("row {}, column {y_column}", idx + 1))?;
            if let (Some(x), Some(y)) = (x, y) {
                points.push((x, y));
            }
        }
        Ok(points)
    }

    fn column_idx(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col == name)
    }
}

fn parse_cell(raw: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "NA" || raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| anyhow!("{raw:?} isn't a number"))?;
    Ok(Some(value).filter(|x| !x.is_nan()))
}
