//! Capacity sheet: available vs required vs actual labor hours

use scorecard_core::{CellRange, ColumnSpec, ConditionalFormat, Result, Sheet, StyleId};

pub(crate) fn build() -> Result<Sheet> {
    let mut sheet = Sheet::new("Capacity");
    sheet.set_value("A1", "Capacity Overview", StyleId::Title)?;

    sheet.set_value("A3", "Available Capacity Hours", StyleId::Label)?;
    sheet.set_formula("B3", "Assumptions!B8", StyleId::Int)?;

    sheet.set_value("A4", "Required Hours", StyleId::Label)?;
    sheet.set_formula("B4", "Forecast!E8", StyleId::Int)?;

    sheet.set_value("A5", "Actual Hours Worked", StyleId::Label)?;
    sheet.set_formula("B5", "SUM(Daily_Inputs!I4:I35)", StyleId::Int)?;

    sheet.set_value("A6", "Remaining Capacity", StyleId::Label)?;
    sheet.set_formula("B6", "B3-B5", StyleId::Int)?;

    sheet.set_value("A7", "Utilization %", StyleId::Label)?;
    sheet.set_formula("B7", "IFERROR(B5/B3,0)", StyleId::Percent)?;

    // Flag utilization running hot
    sheet.add_conditional_format(
        ConditionalFormat::cell_is_greater_than("0.95").with_range(CellRange::parse("B7")?),
    );

    sheet.set_columns(vec![ColumnSpec::single(0, 32.0), ColumnSpec::single(1, 20.0)]);
    Ok(sheet)
}
