//! XLSX package writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use log::debug;
use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;

use crate::error::{XlsxError, XlsxResult};
use crate::styles::{DEFAULT_TABLE_STYLE, STYLES_XML};
use scorecard_core::{CellValue, Sheet, Table, Workbook};

/// XLSX package writer
///
/// All parts are derived from the one `Workbook`, so the manifest, the
/// relationship files, and the table parts always agree with the worksheets
/// actually written.
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook to a writer
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<()> {
        if workbook.sheet_count() == 0 {
            return Err(XlsxError::InvalidWorkbook("workbook has no sheets".into()));
        }

        let mut zip = zip::ZipWriter::new(writer);

        Self::write_content_types(&mut zip, workbook)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip, workbook)?;
        Self::write_workbook_rels(&mut zip, workbook)?;
        Self::write_styles_xml(&mut zip)?;

        for (i, sheet) in workbook.sheets().enumerate() {
            Self::write_worksheet(&mut zip, sheet, i)?;
            if sheet.table().is_some() {
                Self::write_worksheet_rels(&mut zip, sheet, i)?;
            }
        }

        for (_, table) in workbook.tables() {
            Self::write_table(&mut zip, table)?;
        }

        debug!(
            "wrote package: {} worksheet parts, {} table parts",
            workbook.sheet_count(),
            workbook.tables().count()
        );

        zip.finish()?;
        Ok(())
    }

    // A fixed modification time keeps regenerated archives byte-identical.
    fn part_options() -> SimpleFileOptions {
        SimpleFileOptions::default().last_modified_time(zip::DateTime::default())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        zip.start_file("[Content_Types].xml", Self::part_options())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        for (_, table) in workbook.tables() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/tables/table{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.table+xml"/>"#,
                table.id()
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        zip.start_file("_rels/.rels", Self::part_options())?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        zip.start_file("xl/workbook.xml", Self::part_options())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in workbook.sheets().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(sheet.name()),
                i + 1,
                i + 1
            ));
        }

        content.push_str("\n    </sheets>");

        if !workbook.defined_names().is_empty() {
            content.push_str("\n    <definedNames>");
            for name in workbook.defined_names() {
                let scope = name
                    .local_sheet_id
                    .map_or(String::new(), |id| format!(r#" localSheetId="{}""#, id));
                content.push_str(&format!(
                    r#"
        <definedName name="{}"{}>{}</definedName>"#,
                    escape(&name.name),
                    scope,
                    escape(&name.refers_to)
                ));
            }
            content.push_str("\n    </definedNames>");
        }

        content.push_str("\n</workbook>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        zip.start_file("xl/_rels/workbook.xml.rels", Self::part_options())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        let styles_rid = workbook.sheet_count() + 1;
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
            styles_rid
        ));

        content.push_str("\n</Relationships>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles_xml<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        zip.start_file("xl/styles.xml", Self::part_options())?;
        zip.write_all(STYLES_XML.as_bytes())?;
        Ok(())
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet: &Sheet,
        index: usize,
    ) -> XlsxResult<()> {
        zip.start_file(
            format!("xl/worksheets/sheet{}.xml", index + 1),
            Self::part_options(),
        )?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        if let Some(freeze) = sheet.freeze_panes() {
            content.push_str(&format!(
                r#"
    <sheetViews>
        <sheetView workbookViewId="0">
            <pane xSplit="{}" ySplit="{}" topLeftCell="{}" activePane="bottomRight" state="frozen"/>
            <selection pane="bottomRight"/>
        </sheetView>
    </sheetViews>"#,
                freeze.x_split,
                freeze.y_split,
                freeze.top_left.to_a1_string()
            ));
        }

        if !sheet.columns().is_empty() {
            content.push_str("\n    <cols>");
            for spec in sheet.columns() {
                let hidden = if spec.hidden { r#" hidden="1""# } else { "" };
                content.push_str(&format!(
                    r#"
        <col min="{}" max="{}" width="{}" customWidth="1"{}/>"#,
                    spec.min + 1,
                    spec.max + 1,
                    spec.width,
                    hidden
                ));
            }
            content.push_str("\n    </cols>");
        }

        content.push_str("\n    <sheetData>");
        for (row, cells) in sheet.rows() {
            content.push_str(&format!("\n        <row r=\"{}\">", row + 1));
            for (col, cell) in cells.cells() {
                Self::write_cell(&mut content, row, col, cell);
            }
            content.push_str("</row>");
        }
        content.push_str("\n    </sheetData>");

        for rule in sheet.conditional_formats() {
            if rule.ranges.is_empty() {
                continue;
            }
            content.push_str(&format!(
                "\n    <conditionalFormatting sqref=\"{}\">",
                rule.sqref()
            ));
            match &rule.rule {
                scorecard_core::CfRule::CellIs { operator, formula } => {
                    content.push_str(&format!(
                        "\n        <cfRule type=\"cellIs\" dxfId=\"{}\" priority=\"{}\" operator=\"{}\"><formula>{}</formula></cfRule>",
                        rule.dxf_id,
                        rule.priority.max(1),
                        operator.xlsx_operator(),
                        escape(formula)
                    ));
                }
                scorecard_core::CfRule::Expression { formula } => {
                    content.push_str(&format!(
                        "\n        <cfRule type=\"expression\" dxfId=\"{}\" priority=\"{}\"><formula>{}</formula></cfRule>",
                        rule.dxf_id,
                        rule.priority.max(1),
                        escape(formula)
                    ));
                }
            }
            content.push_str("\n    </conditionalFormatting>");
        }

        if let Some(setup) = sheet.page_setup() {
            let m = &setup.margins;
            content.push_str(&format!(
                r#"
    <printOptions horizontalCentered="0" verticalCentered="0"/>
    <pageMargins left="{}" right="{}" top="{}" bottom="{}" header="{}" footer="{}"/>
    <pageSetup orientation="{}" fitToWidth="{}" fitToHeight="{}"/>"#,
                m.left,
                m.right,
                m.top,
                m.bottom,
                m.header,
                m.footer,
                setup.orientation.xlsx_name(),
                setup.fit_to_width,
                setup.fit_to_height
            ));
        }

        if sheet.table().is_some() {
            content.push_str(
                r#"
    <tableParts count="1">
        <tablePart r:id="rId1"/>
    </tableParts>"#,
            );
        }

        content.push_str("\n</worksheet>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_cell(content: &mut String, row: u32, col: u16, cell: &scorecard_core::Cell) {
        let cell_ref = scorecard_core::CellAddress::new(row, col).to_a1_string();
        let style_attr = if cell.style.is_default() {
            String::new()
        } else {
            format!(" s=\"{}\"", cell.style.xf_index())
        };

        match &cell.value {
            CellValue::Number(n) => {
                content.push_str(&format!(
                    "<c r=\"{}\"{}><v>{}</v></c>",
                    cell_ref, style_attr, n
                ));
            }
            CellValue::String(s) => {
                content.push_str(&format!(
                    "<c r=\"{}\"{} t=\"inlineStr\"><is><t>{}</t></is></c>",
                    cell_ref,
                    style_attr,
                    escape(s.as_str())
                ));
            }
            // The placeholder <v>0</v> makes consumers recalculate on open
            CellValue::Formula(text) => {
                content.push_str(&format!(
                    "<c r=\"{}\"{}><f>{}</f><v>0</v></c>",
                    cell_ref,
                    style_attr,
                    escape(text)
                ));
            }
            CellValue::Empty => {
                // Style-only cells keep entry rows pre-formatted
                if !cell.style.is_default() {
                    content.push_str(&format!("<c r=\"{}\"{}/>", cell_ref, style_attr));
                }
            }
        }
    }

    /// Relationship file binding a sheet to its table part
    fn write_worksheet_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet: &Sheet,
        index: usize,
    ) -> XlsxResult<()> {
        let table = sheet
            .table()
            .ok_or_else(|| XlsxError::InvalidWorkbook("sheet has no table".into()))?;

        zip.start_file(
            format!("xl/worksheets/_rels/sheet{}.xml.rels", index + 1),
            Self::part_options(),
        )?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/table" Target="../tables/table{}.xml"/>
</Relationships>"#,
            table.id()
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_table<W: Write + Seek>(zip: &mut zip::ZipWriter<W>, table: &Table) -> XlsxResult<()> {
        zip.start_file(
            format!("xl/tables/table{}.xml", table.id()),
            Self::part_options(),
        )?;

        let mut content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<table xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" id="{id}" name="{name}" displayName="{name}" ref="{range}" totalsRowShown="0">
    <autoFilter ref="{range}"/>
    <tableColumns count="{count}">"#,
            id = table.id(),
            name = escape(table.name()),
            range = table.range(),
            count = table.columns().len()
        );

        for (i, column) in table.columns().iter().enumerate() {
            content.push_str(&format!(
                r#"
        <tableColumn id="{}" name="{}"/>"#,
                i + 1,
                escape(column)
            ));
        }

        content.push_str(&format!(
            r#"
    </tableColumns>
    <tableStyleInfo name="{}" showFirstColumn="0" showLastColumn="0" showRowStripes="1" showColumnStripes="0"/>
</table>"#,
            DEFAULT_TABLE_STYLE
        ));

        zip.write_all(content.as_bytes())?;
        Ok(())
    }
}
