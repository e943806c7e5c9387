//! Turns a validated plot command plus the dataset into renderable data.

use crate::command::{PlotCommand, PlotKind};
use crate::dataset::{ColumnError, Table};

#[derive(Debug, Clone)]
pub struct ChartData {
    pub command: PlotCommand,
    /// Paired numeric points, used by line and scatter charts.
    pub points: Vec<(f64, f64)>,
    /// Label/height pairs, used by bar charts.
    pub bars: Vec<(String, u64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl ChartData {
    pub fn from_table(table: &Table, command: PlotCommand) -> Result<Self, ColumnError> {
        match command.kind {
            PlotKind::Bar => {
                let labels = table.column(&command.x_column)?;
                let values = table.numeric_column(&command.y_column)?;
                // BarChart heights are unsigned; negative values clamp to zero.
                let bars = labels
                    .iter()
                    .zip(&values)
                    .map(|(label, v)| ((*label).to_string(), v.max(0.0).round() as u64))
                    .collect::<Vec<_>>();
                let y_bounds = value_bounds(&values);
                let x_bounds = [0.0, bars.len() as f64];
                Ok(Self { command, points: Vec::new(), bars, x_bounds, y_bounds })
            }
            PlotKind::Line | PlotKind::Scatter => {
                let xs = table.numeric_column(&command.x_column)?;
                let ys = table.numeric_column(&command.y_column)?;
                let x_bounds = value_bounds(&xs);
                let y_bounds = value_bounds(&ys);
                let points = xs.into_iter().zip(ys).collect();
                Ok(Self { command, points, bars: Vec::new(), x_bounds, y_bounds })
            }
        }
    }

    pub fn title(&self) -> String {
        format!(
            "{}: {} vs {}",
            self.command.kind, self.command.x_column, self.command.y_column
        )
    }

    /// One-line answer recorded in the interaction log for a plot request.
    pub fn summary(&self) -> String {
        let rows = if self.points.is_empty() { self.bars.len() } else { self.points.len() };
        format!(
            "Rendered {} plot of {} vs {} ({} rows).",
            self.command.kind, self.command.x_column, self.command.y_column, rows
        )
    }
}

fn value_bounds(values: &[f64]) -> [f64; 2] {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    if (hi - lo).abs() < f64::EPSILON {
        return [lo - 1.0, hi + 1.0];
    }
    let pad = (hi - lo) * 0.05;
    [lo - pad, hi + pad]
}
