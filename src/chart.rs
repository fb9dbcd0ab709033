//! Bar-chart rendering for category spending totals

use std::collections::BTreeMap;
use std::path::Path;

use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::errors::Error;

/// Output bitmap dimensions in pixels
const CHART_SIZE: (u32, u32) = (960, 720);

/// Renders category spending totals as a bar chart written to `path` as PNG.
///
/// Consumes the mapping produced by
/// [`RecordStore::total_expenses`](crate::types::RecordStore::total_expenses);
/// rendering never touches the record store itself. An empty mapping renders
/// an empty set of axes rather than failing.
///
/// # Errors
/// [`Error::Chart`] if the bitmap backend cannot draw or write the file.
pub fn render_expenses_chart(
    totals: &BTreeMap<String, Decimal>,
    path: &Path,
) -> Result<(), Error> {
    let categories: Vec<&str> = totals.keys().map(String::as_str).collect();
    let values: Vec<f64> = totals
        .values()
        .map(|amount| amount.to_f64().unwrap_or(0.0))
        .collect();
    let max_value = values.iter().copied().fold(0.0_f64, f64::max).max(1.0);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Expenses by Category", ("sans-serif", 40))
        .x_label_area_size(120)
        .y_label_area_size(80)
        .margin(20)
        .build_cartesian_2d(0.0..categories.len().max(1) as f64, 0.0..max_value * 1.1)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc("Category")
        .y_desc("Spending ($)")
        .x_labels(categories.len().max(1))
        .x_label_formatter(&|x| {
            categories
                .get(x.floor() as usize)
                .map(|category| category.to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(values.iter().enumerate().map(|(index, &value)| {
            Rectangle::new(
                [(index as f64 + 0.1, 0.0), (index as f64 + 0.9, value)],
                BLUE.filled(),
            )
        }))
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}

fn chart_error(err: impl std::fmt::Display) -> Error {
    Error::Chart(err.to_string())
}
