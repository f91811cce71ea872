//! Forecast sheet: revenue and contribution-margin plan by category

use scorecard_core::{CellRange, ColumnSpec, Result, Sheet, StyleId, Table};

const HEADERS: [&str; 6] = [
    "Category",
    "March Revenue Forecast",
    "CM %",
    "CM $ (calculated)",
    "Required Labor Hours",
    "Notes",
];

pub(crate) fn build() -> Result<Sheet> {
    let mut sheet = Sheet::new("Forecast");
    sheet.set_value("A1", "March Forecast", StyleId::Title)?;

    for (col, header) in ["A", "B", "C", "D", "E", "F"].iter().zip(HEADERS) {
        sheet.set_value(&format!("{}3", col), header, StyleId::Header)?;
    }

    for (row, category) in [(4, "Production"), (5, "LD"), (6, "UMB/D&B")] {
        sheet.set_value(&format!("A{}", row), category, StyleId::Text)?;
        sheet.set_value(&format!("B{}", row), 0, StyleId::Currency)?;
        sheet.set_value(&format!("C{}", row), 0, StyleId::Percent)?;
        sheet.set_formula(
            &format!("D{}", row),
            &format!("B{}*C{}", row, row),
            StyleId::Currency,
        )?;
        sheet.set_value(&format!("E{}", row), 0, StyleId::Int)?;
        sheet.set_blank(&format!("F{}", row), StyleId::Wrap)?;
    }

    // UMB/D&B is contractual: seeded from the assumptions rather than entered
    sheet.set_formula("B6", "Assumptions!B9", StyleId::Currency)?;
    sheet.set_formula("C6", "Assumptions!B10", StyleId::Percent)?;

    sheet.set_value("A8", "Totals", StyleId::Total)?;
    sheet.set_formula("B8", "SUM(B4:B6)", StyleId::Total)?;
    sheet.set_formula("D8", "SUM(D4:D6)", StyleId::Total)?;
    sheet.set_formula("E8", "SUM(E4:E6)", StyleId::Total)?;

    sheet.set_columns(vec![
        ColumnSpec::single(0, 18.0),
        ColumnSpec::single(1, 20.0),
        ColumnSpec::single(2, 10.0),
        ColumnSpec::single(3, 16.0),
        ColumnSpec::single(4, 20.0),
        ColumnSpec::single(5, 26.0),
    ]);
    sheet.freeze(0, 3);
    sheet.bind_table(Table::new(
        2,
        "tblForecast",
        CellRange::parse("A3:F6")?,
        HEADERS.iter().map(|s| s.to_string()).collect(),
    )?);

    Ok(sheet)
}
