//! Scorecard sheet: the executive view
//!
//! Each metric row wires a forecast figure, the month-to-date actual from
//! Daily_Inputs, a per-day average, a projected month-end value, and the
//! variance against forecast. The per-day averages divide by
//! `Daily_Inputs!N2` (distinct days entered), not by elapsed calendar days.

use scorecard_core::{
    CellRange, ColumnSpec, ConditionalFormat, PageSetup, Result, Sheet, StyleId,
};

const HEADERS: [&str; 6] = [
    "Metric",
    "March Forecast",
    "MTD Actual",
    "Avg per Day",
    "Projected Month",
    "Variance vs Forecast",
];

const METRICS: [&str; 11] = [
    "Revenue D&B/UMB",
    "Revenue LD",
    "Revenue Production",
    "CM D&B/UMB",
    "CM LD",
    "CM Production",
    "Headcount",
    "Labor Utilization %",
    "AR Days to Pay (Plan vs Actual)",
    "Warranty Unbillable Material",
    "Warranty Unbillable Labor",
];

/// Rows 4-9: (row, forecast ref, Daily_Inputs MTD column)
const FLOW_METRICS: [(u32, &str, char); 6] = [
    (4, "Forecast!B6", 'D'),
    (5, "Forecast!B5", 'C'),
    (6, "Forecast!B4", 'B'),
    (7, "Forecast!D6", 'G'),
    (8, "Forecast!D5", 'F'),
    (9, "Forecast!D4", 'E'),
];

pub(crate) fn build() -> Result<Sheet> {
    let mut sheet = Sheet::new("Scorecard");
    sheet.set_value("A1", "March Scorecard (Executive View)", StyleId::Title)?;
    sheet.set_value("A2", "Revenue = Completed and Billed Only", StyleId::Label)?;

    for (col, header) in ["A", "B", "C", "D", "E", "F"].iter().zip(HEADERS) {
        sheet.set_value(&format!("{}3", col), header, StyleId::Header)?;
    }
    for (i, metric) in METRICS.iter().enumerate() {
        sheet.set_value(&format!("A{}", i as u32 + 4), *metric, StyleId::Label)?;
    }

    // Revenue and CM rows: sum the month, average over days entered, project
    for (row, forecast_ref, input_col) in FLOW_METRICS {
        sheet.set_formula(&format!("B{}", row), forecast_ref, StyleId::Currency)?;
        sheet.set_formula(
            &format!("C{}", row),
            &format!("SUM(Daily_Inputs!{col}4:{col}35)", col = input_col),
            StyleId::Currency,
        )?;
        sheet.set_formula(
            &format!("D{}", row),
            &format!("IFERROR(C{}/Daily_Inputs!N2,0)", row),
            StyleId::Currency,
        )?;
        sheet.set_formula(
            &format!("E{}", row),
            &format!("D{}*Assumptions!B5", row),
            StyleId::Currency,
        )?;
        sheet.set_formula(
            &format!("F{}", row),
            &format!("E{}-B{}", row, row),
            StyleId::Currency,
        )?;
    }

    // Headcount: average over days with entries, no projection scaling
    sheet.set_formula("B10", "Assumptions!B6", StyleId::Int)?;
    sheet.set_formula(
        "C10",
        "IFERROR(AVERAGEIFS(Daily_Inputs!H4:H35,Daily_Inputs!A4:A35,\"<>\"),0)",
        StyleId::Int,
    )?;
    sheet.set_formula("D10", "C10", StyleId::Int)?;
    sheet.set_formula("E10", "C10", StyleId::Int)?;
    sheet.set_formula("F10", "E10-B10", StyleId::Int)?;

    // Labor utilization: hours worked over available capacity
    sheet.set_formula(
        "B11",
        "IFERROR(Forecast!E8/Assumptions!B8,0)",
        StyleId::Percent,
    )?;
    sheet.set_formula(
        "C11",
        "IFERROR(SUM(Daily_Inputs!I4:I35)/(C10*Assumptions!B7*Daily_Inputs!N2),0)",
        StyleId::Percent,
    )?;
    sheet.set_formula("D11", "C11", StyleId::Percent)?;
    sheet.set_formula("E11", "C11", StyleId::Percent)?;
    sheet.set_formula("F11", "E11-B11", StyleId::Percent)?;

    // AR days: actual is entered by hand, variance only once both sides exist
    sheet.set_formula("B12", "Assumptions!B13", StyleId::Int)?;
    sheet.set_blank("C12", StyleId::Input)?;
    sheet.set_blank("D12", StyleId::Text)?;
    sheet.set_blank("E12", StyleId::Text)?;
    sheet.set_formula(
        "F12",
        "IF(B12=\"\",\"\",IF(C12=\"\",\"\",C12-B12))",
        StyleId::Int,
    )?;

    // Warranty unbillables: projected like revenue, variance only when targeted
    sheet.set_formula("B13", "Assumptions!B14", StyleId::Currency)?;
    sheet.set_formula("C13", "SUM(Daily_Inputs!J4:J35)", StyleId::Currency)?;
    sheet.set_formula("D13", "IFERROR(C13/Daily_Inputs!N2,0)", StyleId::Currency)?;
    sheet.set_formula("E13", "D13*Assumptions!B5", StyleId::Currency)?;
    sheet.set_formula("F13", "IF(B13=\"\",\"\",E13-B13)", StyleId::Currency)?;

    sheet.set_formula("B14", "Assumptions!B15", StyleId::Int)?;
    sheet.set_formula("C14", "SUM(Daily_Inputs!K4:K35)", StyleId::Int)?;
    sheet.set_formula("D14", "IFERROR(C14/Daily_Inputs!N2,0)", StyleId::Int)?;
    sheet.set_formula("E14", "D14*Assumptions!B5", StyleId::Int)?;
    sheet.set_formula("F14", "IF(B14=\"\",\"\",E14-B14)", StyleId::Int)?;

    sheet.add_conditional_format(
        ConditionalFormat::cell_is_less_than("0")
            .with_range(CellRange::parse("F4:F11")?)
            .with_range(CellRange::parse("F13:F14")?)
            .with_priority(1),
    );
    sheet.add_conditional_format(
        ConditionalFormat::expression("AND($B12<>\"\",$C12<>\"\",$C12>$B12)")
            .with_range(CellRange::parse("C12")?)
            .with_priority(2),
    );
    sheet.add_conditional_format(
        ConditionalFormat::expression("AND($B13<>\"\",$E13>$B13)")
            .with_range(CellRange::parse("E13:E14")?)
            .with_priority(3),
    );

    sheet.set_columns(vec![ColumnSpec::single(0, 38.0), ColumnSpec::new(1, 5, 18.0)]);
    sheet.freeze(1, 3);
    sheet.set_page_setup(PageSetup::landscape_fit_width());

    Ok(sheet)
}
