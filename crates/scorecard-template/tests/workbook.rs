//! End-to-end checks of the scorecard layout and the package built from it.

use std::io::{Cursor, Read};

use pretty_assertions::assert_eq;
use scorecard_core::{CellValue, Workbook};
use scorecard_csv::{CsvWriteOptions, TemplateWriter};
use scorecard_template::{
    verify_sheet_references, workbook, AR_DETAIL_COLUMNS, DAILY_INPUT_COLUMNS,
};
use scorecard_xlsx::XlsxWriter;

fn built() -> Workbook {
    workbook().unwrap()
}

fn package_bytes(wb: &Workbook) -> Vec<u8> {
    let mut buf = Vec::new();
    XlsxWriter::write(wb, Cursor::new(&mut buf)).unwrap();
    buf
}

#[test]
fn test_sheet_list_and_order() {
    let wb = built();
    let names: Vec<&str> = wb.sheets().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec![
            "Assumptions",
            "Forecast",
            "Daily_Inputs",
            "Scorecard",
            "Capacity",
            "Cashflow"
        ]
    );
}

#[test]
fn test_every_cross_sheet_reference_resolves() {
    let wb = built();
    assert_eq!(verify_sheet_references(&wb), Vec::<String>::new());
}

#[test]
fn test_forecast_totals_row() {
    let wb = built();
    let forecast = wb.sheet_by_name("Forecast").unwrap();

    let total = forecast.cell("B8").unwrap().unwrap();
    assert_eq!(total.value.formula_text(), Some("SUM(B4:B6)"));
    assert_eq!(
        forecast.cell("D8").unwrap().unwrap().value.formula_text(),
        Some("SUM(D4:D6)")
    );
    assert_eq!(
        forecast.cell("E8").unwrap().unwrap().value.formula_text(),
        Some("SUM(E4:E6)")
    );
}

#[test]
fn test_table_headers_match_sheet_cells() {
    let wb = built();
    assert_eq!(wb.tables().count(), 3);

    for (sheet_idx, table) in wb.tables() {
        let sheet = wb.sheet(sheet_idx).unwrap();
        let start = table.range().start;
        for (i, column) in table.columns().iter().enumerate() {
            let cell = sheet
                .cell_at(start.row, start.col + i as u16)
                .unwrap_or_else(|| {
                    panic!("{}: missing header cell for '{}'", table.name(), column)
                });
            assert_eq!(
                cell.value,
                CellValue::String(column.clone()),
                "header mismatch in table {}",
                table.name()
            );
        }
    }
}

#[test]
fn test_daily_inputs_entry_rows_match_table_range() {
    let wb = built();
    let sheet = wb.sheet_by_name("Daily_Inputs").unwrap();
    let table = sheet.table().unwrap();

    assert_eq!(table.range().to_string(), "A3:K35");
    assert_eq!(table.columns().len(), 11);

    // Body rows of the table (below the header) are pre-styled blanks
    let body_rows = table.range().height() - 1;
    assert_eq!(body_rows, 32);
    for row in table.range().start.row + 1..=table.range().end.row {
        for col in table.range().start.col..=table.range().end.col {
            let cell = sheet
                .cell_at(row, col)
                .unwrap_or_else(|| panic!("missing entry cell at row {} col {}", row, col));
            assert!(cell.value.is_empty(), "entry cell should be blank");
        }
    }

    // The distinct-day counter covers exactly the entry rows
    assert_eq!(
        sheet.cell("N2").unwrap().unwrap().value.formula_text(),
        Some("SUM(M4:M35)")
    );
}

#[test]
fn test_scorecard_wiring() {
    let wb = built();
    let scorecard = wb.sheet_by_name("Scorecard").unwrap();

    assert_eq!(
        scorecard.cell("B4").unwrap().unwrap().value.formula_text(),
        Some("Forecast!B6")
    );
    assert_eq!(
        scorecard.cell("C4").unwrap().unwrap().value.formula_text(),
        Some("SUM(Daily_Inputs!D4:D35)")
    );
    assert_eq!(
        scorecard.cell("E4").unwrap().unwrap().value.formula_text(),
        Some("D4*Assumptions!B5")
    );

    let rules = scorecard.conditional_formats();
    assert_eq!(rules.len(), 3);
    assert_eq!(rules[0].sqref(), "F4:F11 F13:F14");
    assert_eq!(rules[1].sqref(), "C12");
    assert_eq!(rules[2].sqref(), "E13:E14");

    assert!(scorecard.page_setup().is_some());
    let names: Vec<&str> = wb.defined_names().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["_xlnm.Print_Area", "_xlnm.Print_Titles"]);
    assert!(wb
        .defined_names()
        .iter()
        .all(|n| n.local_sheet_id == wb.sheet_index("Scorecard")));
}

#[test]
fn test_package_contains_all_parts() {
    let bytes = package_bytes(&built());
    let archive = zip::ZipArchive::new(Cursor::new(&bytes[..])).unwrap();

    // 5 bookkeeping parts + 6 worksheets + 3 sheet rels + 3 tables
    assert_eq!(archive.len(), 17);

    let names: Vec<&str> = archive.file_names().collect();
    for expected in [
        "[Content_Types].xml",
        "_rels/.rels",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/styles.xml",
        "xl/worksheets/sheet1.xml",
        "xl/worksheets/sheet6.xml",
        "xl/worksheets/_rels/sheet2.xml.rels",
        "xl/worksheets/_rels/sheet3.xml.rels",
        "xl/worksheets/_rels/sheet6.xml.rels",
        "xl/tables/table1.xml",
        "xl/tables/table2.xml",
        "xl/tables/table3.xml",
    ] {
        assert!(names.contains(&expected), "missing part {}", expected);
    }
}

#[test]
fn test_package_manifest_matches_parts() {
    let bytes = package_bytes(&built());
    let mut archive = zip::ZipArchive::new(Cursor::new(&bytes[..])).unwrap();

    let mut types = String::new();
    archive
        .by_name("[Content_Types].xml")
        .unwrap()
        .read_to_string(&mut types)
        .unwrap();

    // Workbook + styles + 6 worksheets + 3 tables
    assert_eq!(types.matches("<Override ").count(), 11);
    for i in 1..=6 {
        assert!(types.contains(&format!("/xl/worksheets/sheet{}.xml", i)));
    }
    for i in 1..=3 {
        assert!(types.contains(&format!("/xl/tables/table{}.xml", i)));
    }
}

#[test]
fn test_regeneration_is_byte_identical() {
    let first = package_bytes(&built());
    let second = package_bytes(&built());
    assert_eq!(first, second);
}

#[test]
fn test_csv_templates_are_header_only() {
    let mut daily = Vec::new();
    TemplateWriter::write(&mut daily, &DAILY_INPUT_COLUMNS, &CsvWriteOptions::default()).unwrap();
    let daily = String::from_utf8(daily).unwrap();
    assert_eq!(daily.lines().count(), 1);
    assert_eq!(daily.trim_end().split(',').count(), 11);
    assert!(daily.starts_with("Date,Revenue_Production,"));
    assert!(daily.trim_end().ends_with("Warranty_Unbillable_Labor_Hours"));

    let mut ar = Vec::new();
    TemplateWriter::write(&mut ar, &AR_DETAIL_COLUMNS, &CsvWriteOptions::default()).unwrap();
    let ar = String::from_utf8(ar).unwrap();
    assert_eq!(ar.lines().count(), 1);
    assert_eq!(ar.trim_end().split(',').count(), 10);
    assert_eq!(
        ar.trim_end(),
        "Invoice_Number,Customer,Invoice_Date,Due_Date,Amount,Amount_Collected,Balance_Remaining,Days_Outstanding,Status,Notes"
    );
}
