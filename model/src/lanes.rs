/// The two columns holding one lane's centerline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaneColumns {
    pub lane: String,
    pub x_column: String,
    pub y_column: String,
}

/// Finds every lane in a centerline table by its `x_<lane>` / `y_<lane>` column pair, in column
/// order. The lane is whatever follows the first underscore, up to the next one. Columns without
/// a partner are skipped.
pub fn discover_lanes(columns: &[String]) -> Vec<LaneColumns> {
    let mut lanes: Vec<LaneColumns> = Vec::new();
    for column in columns {
        let Some(rest) = column.strip_prefix("x_") else {
            continue;
        };
        let lane = rest.split('_').next().unwrap_or(rest);
        if lanes.iter().any(|l| l.lane == lane) {
            continue;
        }

        let x_column = format!("x_{lane}");
        let y_column = format!("y_{lane}");
        if !columns.contains(&x_column) || !columns.contains(&y_column) {
            warn!("Centerline column {column} has no {x_column} / {y_column} pair, skipping");
            continue;
        }
        lanes.push(LaneColumns {
            lane: lane.to_string(),
            x_column,
            y_column,
        });
    }
    lanes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn pairs_in_column_order() {
        let lanes = discover_lanes(&cols(&["x_2", "y_2", "x_1", "y_1", "time"]));
        assert_eq!(
            lanes,
            vec![
                LaneColumns {
                    lane: "2".to_string(),
                    x_column: "x_2".to_string(),
                    y_column: "y_2".to_string(),
                },
                LaneColumns {
                    lane: "1".to_string(),
                    x_column: "x_1".to_string(),
                    y_column: "y_1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn unpaired_columns_are_skipped() {
        let lanes = discover_lanes(&cols(&["x_1", "y_1", "x_2", "y_3", "x_"]));
        assert_eq!(lanes.len(), 1);
        assert_eq!(lanes[0].lane, "1");
    }

    #[test]
    fn suffixed_columns_map_to_the_base_lane() {
        let lanes = discover_lanes(&cols(&["x_4_ramp", "x_4", "y_4", "x_5_ramp"]));
        assert_eq!(lanes.len(), 1);
        assert_eq!(lanes[0].x_column, "x_4");
        assert_eq!(lanes[0].y_column, "y_4");
    }

    #[test]
    fn non_numeric_lanes_work() {
        let lanes = discover_lanes(&cols(&["x_on-ramp", "y_on-ramp"]));
        assert_eq!(lanes[0].lane, "on-ramp");
    }
}
