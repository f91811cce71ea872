//! Daily_Inputs sheet: the manual entry grid
//!
//! Rows 4-35 are pre-styled blank entry rows matching the bound table's
//! range. Hidden column M flags the first occurrence of each date and N2
//! counts the distinct days entered; the Scorecard sheet divides MTD sums
//! by N2 to get per-day averages.

use scorecard_core::{CellAddress, CellRange, ColumnSpec, Result, Sheet, StyleId, Table};

use crate::DAILY_INPUT_COLUMNS;

/// First entry row (below the header)
const FIRST_ENTRY_ROW: u32 = 4;
/// Last entry row, inclusive
const LAST_ENTRY_ROW: u32 = 35;

/// Entry-cell styles, one per column A-K
const ENTRY_STYLES: [StyleId; 11] = [
    StyleId::Date,
    StyleId::Currency,
    StyleId::Currency,
    StyleId::Currency,
    StyleId::Currency,
    StyleId::Currency,
    StyleId::Currency,
    StyleId::Int,
    StyleId::Int,
    StyleId::Currency,
    StyleId::Int,
];

pub(crate) fn build() -> Result<Sheet> {
    let mut sheet = Sheet::new("Daily_Inputs");
    sheet.set_value("A1", "Daily Inputs (enter daily results)", StyleId::Title)?;

    for (i, header) in DAILY_INPUT_COLUMNS.iter().enumerate() {
        let addr = format!("{}3", CellAddress::column_to_letters(i as u16));
        sheet.set_value(&addr, *header, StyleId::Header)?;
    }

    for row in FIRST_ENTRY_ROW..=LAST_ENTRY_ROW {
        for (i, style) in ENTRY_STYLES.iter().enumerate() {
            let addr = format!("{}{}", CellAddress::column_to_letters(i as u16), row);
            sheet.set_blank(&addr, *style)?;
        }
        // 1 the first time a date appears, 0 on repeats, blank until entered
        sheet.set_formula(
            &format!("M{}", row),
            &format!(
                "IF(A{row}=\"\",\"\",IF(COUNTIF($A$4:A{row},A{row})=1,1,0))",
                row = row
            ),
            StyleId::Int,
        )?;
    }

    sheet.set_formula(
        "N2",
        &format!("SUM(M{}:M{})", FIRST_ENTRY_ROW, LAST_ENTRY_ROW),
        StyleId::Int,
    )?;

    sheet.set_columns(vec![
        ColumnSpec::single(0, 12.0),
        ColumnSpec::new(1, 3, 16.0),
        ColumnSpec::new(4, 6, 14.0),
        ColumnSpec::new(7, 8, 12.0),
        ColumnSpec::new(9, 10, 24.0),
        ColumnSpec::new(12, 13, 12.0).hidden(),
    ]);
    sheet.freeze(1, 3);
    sheet.bind_table(Table::new(
        1,
        "tblDailyInputs",
        CellRange::parse("A3:K35")?,
        DAILY_INPUT_COLUMNS.iter().map(|s| s.to_string()).collect(),
    )?);

    Ok(sheet)
}
