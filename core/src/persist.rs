use crate::CollectedRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write `records` as a JSON array pretty-printed with four-space indentation.
pub fn save_records<P: AsRef<Path>>(path: P, records: &[CollectedRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }
    let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(f);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    records.serialize(&mut ser)?;
    out.flush()?;
    tracing::info!(path = %path.display(), records = records.len(), "saved collected records");
    Ok(())
}

pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<CollectedRecord>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let records: Vec<CollectedRecord> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(records)
}
