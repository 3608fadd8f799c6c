use anyhow::{Context, Result};
use std::path::Path;

use crate::models::{plain_amount, Transaction};

pub(crate) const CSV_HEADER: [&str; 4] = ["Date", "Description", "Category", "Amount"];

/// Render transactions as CSV in list order. Amounts are plain numbers; free
/// text is quoted only when it contains a delimiter, quote or line break.
pub(crate) fn to_csv_string(transactions: &[Transaction]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    write_rows(&mut writer, transactions)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}

/// Write the export to `path`, returning the number of data rows.
pub(crate) fn write_csv(path: &Path, transactions: &[Transaction]) -> Result<usize> {
    let csv = to_csv_string(transactions)?;
    std::fs::write(path, csv)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    log::info!("exported {} transactions to {}", transactions.len(), path.display());
    Ok(transactions.len())
}

fn write_rows<W: std::io::Write>(writer: &mut csv::Writer<W>, transactions: &[Transaction]) -> Result<()> {
    writer.write_record(CSV_HEADER)?;
    for txn in transactions {
        writer.write_record([
            txn.date.as_str(),
            txn.description.as_str(),
            txn.category.as_str(),
            plain_amount(txn.amount).as_str(),
        ])?;
    }
    Ok(())
}
