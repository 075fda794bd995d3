//! Descriptive Statistics over Feature Columns

use crate::features::FeatureRow;
use serde::Serialize;

/// Descriptive statistics for one feature column, ignoring missing entries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Number of present values
    pub count: usize,
    /// Number of missing values
    pub missing: usize,
    /// Mean value
    pub mean: f64,
    /// Standard deviation (population)
    pub std_dev: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
}

impl ColumnSummary {
    /// Compute statistics from a column with optional entries
    pub fn compute(values: &[Option<f64>]) -> Self {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let missing = values.len() - present.len();

        if present.is_empty() {
            return Self {
                missing,
                ..Self::default()
            };
        }

        let n = present.len() as f64;
        let mean = present.iter().sum::<f64>() / n;
        let min = present.iter().cloned().fold(f64::MAX, f64::min);
        let max = present.iter().cloned().fold(f64::MIN, f64::max);

        let variance = present.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

        Self {
            count: present.len(),
            missing,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }
}

/// Column summaries for a batch of feature rows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureColumns {
    #[serde(rename = "FMeanE.mean")]
    pub mean_energy: ColumnSummary,
    #[serde(rename = "FSumAbsX.mean")]
    pub sum_abs_x: ColumnSummary,
    #[serde(rename = "FSumAbsY.mean")]
    pub sum_abs_y: ColumnSummary,
    #[serde(rename = "FSumAbsZ.mean")]
    pub sum_abs_z: ColumnSummary,
}

impl FeatureColumns {
    pub fn from_rows(rows: &[FeatureRow]) -> Self {
        let column = |f: fn(&FeatureRow) -> Option<f64>| -> ColumnSummary {
            let values: Vec<Option<f64>> = rows.iter().map(f).collect();
            ColumnSummary::compute(&values)
        };

        Self {
            mean_energy: column(FeatureRow::mean_energy),
            sum_abs_x: column(FeatureRow::sum_abs_x),
            sum_abs_y: column(FeatureRow::sum_abs_y),
            sum_abs_z: column(FeatureRow::sum_abs_z),
        }
    }
}
