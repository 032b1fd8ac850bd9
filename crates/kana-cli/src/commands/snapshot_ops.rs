//! Record romanizations of a reading list as JSONL and compare later runs
//! against it, so table edits show up as explicit diffs.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;

use serde::{Deserialize, Serialize};

use kana_engine::RomajiTable;

/// A single snapshot entry (one per kana input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub kana: String,
    pub romaji: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("bad JSONL at line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub same: usize,
    /// (kana, baseline first result, current first result)
    pub changed: Vec<(String, String, String)>,
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl SnapshotDiff {
    pub fn is_clean(&self) -> bool {
        self.changed.is_empty() && self.removed.is_empty()
    }
}

/// One kana string per line; blank lines and `#` comments are skipped.
pub fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>, SnapshotError> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

pub fn snapshot_entry(table: &RomajiTable, kana: &str, limit: usize) -> SnapshotEntry {
    SnapshotEntry {
        kana: kana.to_string(),
        romaji: table.convert_bounded(kana, limit),
    }
}

pub fn write_snapshot<W: Write>(
    table: &RomajiTable,
    inputs: &[String],
    limit: usize,
    writer: W,
) -> Result<(), SnapshotError> {
    let mut writer = BufWriter::new(writer);
    for kana in inputs {
        let entry = snapshot_entry(table, kana, limit);
        let line = serde_json::to_string(&entry).map_err(io::Error::from)?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn parse_baseline(content: &str) -> Result<HashMap<String, SnapshotEntry>, SnapshotError> {
    let mut baseline = HashMap::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry: SnapshotEntry =
            serde_json::from_str(line).map_err(|source| SnapshotError::Json {
                line: i + 1,
                source,
            })?;
        baseline.insert(entry.kana.clone(), entry);
    }
    Ok(baseline)
}

pub fn diff_snapshot(
    table: &RomajiTable,
    inputs: &[String],
    baseline: &HashMap<String, SnapshotEntry>,
    limit: usize,
) -> SnapshotDiff {
    let mut diff = SnapshotDiff::default();
    for kana in inputs {
        let current = snapshot_entry(table, kana, limit);
        let first = |e: &SnapshotEntry| e.romaji.first().cloned().unwrap_or_default();
        match baseline.get(kana) {
            Some(base) if base.romaji == current.romaji => diff.same += 1,
            Some(base) => diff
                .changed
                .push((kana.clone(), first(base), first(&current))),
            None => diff.added.push(kana.clone()),
        }
    }

    let input_set: HashSet<&str> = inputs.iter().map(String::as_str).collect();
    let mut removed: Vec<String> = baseline
        .keys()
        .filter(|k| !input_set.contains(k.as_str()))
        .cloned()
        .collect();
    removed.sort();
    diff.removed = removed;
    diff
}

fn open_inputs(input_file: &str) -> Vec<String> {
    let file = die!(
        fs::File::open(input_file),
        "Failed to open input file {input_file}: {}"
    );
    die!(read_inputs(BufReader::new(file)), "Failed to read inputs: {}")
}

pub fn snapshot_cmd(input_file: &str, output_file: &str, limit: usize) {
    let inputs = open_inputs(input_file);
    let file = die!(
        fs::File::create(output_file),
        "Failed to create output file {output_file}: {}"
    );
    die!(
        write_snapshot(RomajiTable::global(), &inputs, limit, file),
        "Failed to write snapshot: {}"
    );
    eprintln!(
        "Snapshot written: {} inputs -> {}",
        inputs.len(),
        output_file
    );
}

pub fn diff_snapshot_cmd(input_file: &str, baseline_file: &str, limit: usize) {
    let inputs = open_inputs(input_file);
    let content = die!(
        fs::read_to_string(baseline_file),
        "Failed to read baseline file {baseline_file}: {}"
    );
    let baseline = die!(parse_baseline(&content), "Failed to parse baseline: {}");
    let diff = diff_snapshot(RomajiTable::global(), &inputs, &baseline, limit);

    for (kana, base, curr) in &diff.changed {
        if base != curr {
            println!("  CHANGED: {kana} -> {curr} (was: {base})");
        } else {
            println!("  changed: {kana} -> {curr} (same #1, later results differ)");
        }
    }
    for kana in &diff.added {
        println!("  NEW:     {kana}");
    }
    for kana in &diff.removed {
        println!("  REMOVED: {kana}");
    }

    println!();
    println!("=== Summary ===");
    println!("  Total:    {}", inputs.len());
    println!("  Same:     {}", diff.same);
    println!("  Changed:  {}", diff.changed.len());
    println!("  New:      {}", diff.added.len());
    println!("  Removed:  {}", diff.removed.len());

    if !diff.is_clean() {
        process::exit(1);
    }
}
