//! Cashflow sheet: four weekly columns chained through ending cash

use scorecard_core::{CellRange, ColumnSpec, Result, Sheet, StyleId, Table};

const HEADERS: [&str; 8] = [
    "Week",
    "Beginning Cash",
    "Revenue Collected",
    "Overhead Allocation",
    "Payroll Placeholder",
    "Equipment Proceeds",
    "Bowman Cash",
    "Ending Cash",
];

pub(crate) fn build() -> Result<Sheet> {
    let mut sheet = Sheet::new("Cashflow");
    sheet.set_value("A1", "Weekly Cashflow - March", StyleId::Title)?;

    for (col, header) in ["A", "B", "C", "D", "E", "F", "G", "H"].iter().zip(HEADERS) {
        sheet.set_value(&format!("{}3", col), header, StyleId::Header)?;
    }

    for (week, row) in (4u32..=7).enumerate() {
        sheet.set_value(&format!("A{}", row), format!("Week {}", week + 1), StyleId::Text)?;

        // Week 1 starts from zero; later weeks carry the prior ending balance
        if row == 4 {
            sheet.set_value("B4", 0, StyleId::Currency)?;
        } else {
            sheet.set_formula(&format!("B{}", row), &format!("H{}", row - 1), StyleId::Currency)?;
        }

        // Collections assume the projected month lands evenly across weeks
        sheet.set_formula(
            &format!("C{}", row),
            "(Scorecard!E4+Scorecard!E5+Scorecard!E6)/4",
            StyleId::Currency,
        )?;
        sheet.set_formula(&format!("D{}", row), "Assumptions!B3/4", StyleId::Currency)?;
        sheet.set_value(&format!("E{}", row), 0, StyleId::Currency)?;
        sheet.set_value(&format!("F{}", row), 0, StyleId::Currency)?;
        sheet.set_value(&format!("G{}", row), 0, StyleId::Currency)?;
        sheet.set_formula(
            &format!("H{}", row),
            &format!("B{r}+C{r}-D{r}-E{r}+F{r}+G{r}", r = row),
            StyleId::Currency,
        )?;
    }

    sheet.set_value("A10", "Scenario Placeholders", StyleId::Label)?;
    sheet.set_value("A11", "Base Case", StyleId::Label)?;
    sheet.set_value("A12", "Conservative Case", StyleId::Label)?;
    sheet.set_value("A13", "Stress Case", StyleId::Label)?;

    sheet.set_columns(vec![ColumnSpec::single(0, 14.0), ColumnSpec::new(1, 7, 18.0)]);
    sheet.bind_table(Table::new(
        3,
        "tblCashflow",
        CellRange::parse("A3:H7")?,
        HEADERS.iter().map(|s| s.to_string()).collect(),
    )?);

    Ok(sheet)
}
