//! # scorecard-template
//!
//! The hardcoded layout of the March scorecard workbook: six sheets of
//! labels, constants, and cross-sheet formulas, plus the header lists for
//! the two flat entry templates.
//!
//! Sheet names and the cell ranges formulas read are a fixed contract
//! between sheets. The layouts below keep that contract in one crate;
//! [`verify_sheet_references`] lets tests prove no formula points at a
//! sheet that does not exist.

use std::collections::BTreeSet;

use scorecard_core::{Result, Workbook};

mod assumptions;
mod capacity;
mod cashflow;
mod daily_inputs;
mod forecast;
mod scorecard;

/// Output file name for the workbook
pub const WORKBOOK_FILE: &str = "March_Scorecard_Template.xlsx";
/// Output file name for the daily-inputs CSV template
pub const DAILY_INPUTS_FILE: &str = "Daily_Inputs_Template.csv";
/// Output file name for the AR-detail CSV template
pub const AR_DETAIL_FILE: &str = "AR_Detail_Template.csv";

/// Entry columns of the Daily_Inputs sheet and its CSV template
pub const DAILY_INPUT_COLUMNS: [&str; 11] = [
    "Date",
    "Revenue_Production",
    "Revenue_LD",
    "Revenue_UMB_D_B",
    "CM_Production",
    "CM_LD",
    "CM_UMB_D_B",
    "Headcount_Field",
    "Hours_Worked",
    "Warranty_Unbillable_Material",
    "Warranty_Unbillable_Labor_Hours",
];

/// Columns of the AR-detail CSV template
pub const AR_DETAIL_COLUMNS: [&str; 10] = [
    "Invoice_Number",
    "Customer",
    "Invoice_Date",
    "Due_Date",
    "Amount",
    "Amount_Collected",
    "Balance_Remaining",
    "Days_Outstanding",
    "Status",
    "Notes",
];

/// Assemble the six-sheet scorecard workbook
///
/// Sheet order matters: workbook relationship ids and the defined-name
/// scope below are derived from it.
pub fn workbook() -> Result<Workbook> {
    let mut wb = Workbook::new();
    wb.add_sheet(assumptions::build()?)?;
    wb.add_sheet(forecast::build()?)?;
    wb.add_sheet(daily_inputs::build()?)?;
    let scorecard_idx = wb.add_sheet(scorecard::build()?)?;
    wb.add_sheet(capacity::build()?)?;
    wb.add_sheet(cashflow::build()?)?;

    // Executive view prints as one landscape page with the header row repeated
    wb.define_name_for_sheet("_xlnm.Print_Area", "Scorecard!$A$1:$F$14", scorecard_idx)?;
    wb.define_name_for_sheet("_xlnm.Print_Titles", "Scorecard!$3:$3", scorecard_idx)?;

    Ok(wb)
}

/// Collect cross-sheet references that do not name a sheet in the workbook
///
/// Returns the distinct dangling sheet names; empty means every reference
/// resolves. The XLSX format accepts dangling references silently, so this
/// is the only place they can be caught.
pub fn verify_sheet_references(workbook: &Workbook) -> Vec<String> {
    let mut dangling = BTreeSet::new();
    for sheet in workbook.sheets() {
        for formula in sheet.formulas() {
            for name in referenced_sheets(formula) {
                if workbook.sheet_by_name(&name).is_none() {
                    dangling.insert(name);
                }
            }
        }
    }
    dangling.into_iter().collect()
}

/// Sheet names appearing before `!` in a formula
fn referenced_sheets(formula: &str) -> Vec<String> {
    let bytes = formula.as_bytes();
    let mut names = Vec::new();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'!' {
            continue;
        }
        let mut start = i;
        while start > 0 {
            let prev = bytes[start - 1];
            if prev.is_ascii_alphanumeric() || prev == b'_' || prev == b'.' {
                start -= 1;
            } else {
                break;
            }
        }
        if start < i {
            names.push(formula[start..i].to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_referenced_sheets_extraction() {
        assert_eq!(
            referenced_sheets("IFERROR(C4/Daily_Inputs!N2,0)"),
            vec!["Daily_Inputs"]
        );
        assert_eq!(
            referenced_sheets("(Scorecard!E4+Scorecard!E5+Scorecard!E6)/4"),
            vec!["Scorecard", "Scorecard", "Scorecard"]
        );
        assert!(referenced_sheets("SUM(B4:B6)").is_empty());
    }

    #[test]
    fn test_dangling_reference_detected() {
        let mut sheet = scorecard_core::Sheet::new("Only");
        sheet
            .set_formula("A1", "Missing!B2", scorecard_core::StyleId::Int)
            .unwrap();
        let mut wb = Workbook::new();
        wb.add_sheet(sheet).unwrap();

        assert_eq!(verify_sheet_references(&wb), vec!["Missing".to_string()]);
    }
}
