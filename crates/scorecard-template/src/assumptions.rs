//! Assumptions sheet: the month's planning inputs
//!
//! Every other sheet reads from column B here, so row positions are part of
//! the cross-sheet contract.

use scorecard_core::{ColumnSpec, Result, Sheet, StyleId};

pub(crate) fn build() -> Result<Sheet> {
    let mut sheet = Sheet::new("Assumptions");
    sheet.set_value("A1", "March Scorecard – Assumptions", StyleId::Title)?;

    let items: [(u32, &str, Option<f64>, StyleId); 12] = [
        (3, "March Overhead", Some(560_000.0), StyleId::Currency),
        (4, "March CM Target", Some(296_000.0), StyleId::Currency),
        (5, "Working Days in March", Some(22.0), StyleId::Int),
        (6, "Field Headcount", Some(38.0), StyleId::Int),
        (7, "Hours per Day", Some(10.0), StyleId::Int),
        (9, "UMB/D&B Revenue Minimum", Some(165_000.0), StyleId::Currency),
        (10, "UMB/D&B CM %", Some(0.65), StyleId::Percent),
        (
            11,
            "Sod Consumption Forecast (sq ft)",
            Some(921_000.0),
            StyleId::Int,
        ),
        (12, "Sod Margin Delta", Some(0.0), StyleId::Percent),
        (13, "AR Days Plan", None, StyleId::Int),
        (14, "Warranty Unbillable Material Target", None, StyleId::Currency),
        (
            15,
            "Warranty Unbillable Labor Hours Target",
            None,
            StyleId::Int,
        ),
    ];

    for (row, label, value, style) in items {
        sheet.set_value(&format!("A{}", row), label, StyleId::Label)?;
        match value {
            Some(n) => sheet.set_value(&format!("B{}", row), n, style)?,
            // Left for manual entry
            None => sheet.set_blank(&format!("B{}", row), StyleId::Input)?,
        }
    }

    sheet.set_value("A8", "Capacity Hours", StyleId::Label)?;
    sheet.set_formula("B8", "B6*B5*B7", StyleId::Input)?;

    sheet.set_value("A17", "Notes", StyleId::Label)?;
    sheet.set_value(
        "A18",
        "Sod Margin Delta allowed examples: 0.00, 0.05, 0.20",
        StyleId::Wrap,
    )?;
    sheet.set_value(
        "A19",
        "Headcount variance = projected average headcount - forecast headcount",
        StyleId::Wrap,
    )?;

    sheet.set_columns(vec![ColumnSpec::single(0, 48.0), ColumnSpec::single(1, 22.0)]);
    Ok(sheet)
}
