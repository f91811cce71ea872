//! Scorecard template generator
//!
//! Writes the March scorecard workbook and the two flat entry templates
//! into the output directory. Running it twice produces identical bytes.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use scorecard_csv::{CsvWriteOptions, TemplateWriter};
use scorecard_template::{
    verify_sheet_references, workbook, AR_DETAIL_COLUMNS, AR_DETAIL_FILE, DAILY_INPUTS_FILE,
    DAILY_INPUT_COLUMNS, WORKBOOK_FILE,
};
use scorecard_xlsx::XlsxWriter;

#[derive(Parser)]
#[command(name = "scorecard-gen")]
#[command(author, version, about = "Generate the March scorecard templates")]
struct Cli {
    /// Directory the templates are written into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create '{}'", cli.out_dir.display()))?;

    let wb = workbook().context("Failed to assemble workbook")?;

    let dangling = verify_sheet_references(&wb);
    if !dangling.is_empty() {
        bail!("Formulas reference missing sheets: {}", dangling.join(", "));
    }

    let workbook_path = cli.out_dir.join(WORKBOOK_FILE);
    XlsxWriter::write_file(&wb, &workbook_path)
        .with_context(|| format!("Failed to write '{}'", workbook_path.display()))?;

    let options = CsvWriteOptions::default();
    let daily_path = cli.out_dir.join(DAILY_INPUTS_FILE);
    TemplateWriter::write_file(&daily_path, &DAILY_INPUT_COLUMNS, &options)
        .with_context(|| format!("Failed to write '{}'", daily_path.display()))?;

    let ar_path = cli.out_dir.join(AR_DETAIL_FILE);
    TemplateWriter::write_file(&ar_path, &AR_DETAIL_COLUMNS, &options)
        .with_context(|| format!("Failed to write '{}'", ar_path.display()))?;

    println!("Generated {}", workbook_path.display());
    println!("Generated {}", daily_path.display());
    println!("Generated {}", ar_path.display());

    Ok(())
}
