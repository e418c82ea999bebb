use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keywalk::analyzer::PatternGroup;
use keywalk::batch::FingerprintTally;
use keywalk::consts::META_TOTAL_EFFORT;
use keywalk::encoder::Fingerprint;
use keywalk::engine::WalkTrace;
use keywalk::ingest::IngestSummary;
use keywalk::store::StoredFingerprint;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: &[usize]) {
    for &i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn pattern_groups(groups: &[PatternGroup]) {
    if groups.is_empty() {
        println!("\nNo keyboard walks found.");
        return;
    }
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Fingerprint").fg(Color::Cyan),
        Cell::new("Size"),
        Cell::new("Passwords"),
    ]);
    for (i, group) in groups.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(group.fingerprint.as_str()).fg(Color::Cyan),
            Cell::new(group.passwords.len()),
            Cell::new(group.passwords.join(", ")),
        ]);
    }
    align_right(&mut table, &[0, 2]);
    println!("\nPattern groups\n{}", table);
}

pub fn trace(password: &str, trace: &WalkTrace) {
    let mut table = new_table();
    table.set_header(vec!["Step", "Action", "Effort"]);
    for (i, step) in trace.path.iter().enumerate() {
        let effort = step
            .meta(META_TOTAL_EFFORT)
            .map(|v| v.to_string())
            .unwrap_or_default();
        table.add_row(vec![Cell::new(i + 1), Cell::new(step), Cell::new(effort)]);
    }
    align_right(&mut table, &[0, 2]);
    println!("\nWalk of {:?}\n{}", password, table);
    println!(
        "glyphs {}  ->  fingerprint {}  ({} redundant moves removed)",
        trace.encoded.glyphs, trace.encoded.fingerprint, trace.encoded.redundant_moves
    );
}

pub fn ingest_summary(summary: &IngestSummary) {
    let mut table = new_table();
    table.set_header(vec!["Files", "Processed", "Skipped", "Read", "Analyzed", "Fingerprints"]);
    table.add_row(vec![
        Cell::new(summary.files_seen),
        Cell::new(summary.files_processed),
        Cell::new(summary.files_skipped).fg(Color::Yellow),
        Cell::new(summary.passwords_read),
        Cell::new(summary.passwords_analyzed),
        Cell::new(summary.distinct_fingerprints).fg(Color::Cyan),
    ]);
    println!("\nIngest summary\n{}", table);
}

fn ranked(title: &str, rows: impl Iterator<Item = (String, u64, String)>) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Fingerprint").fg(Color::Cyan),
        Cell::new("Count").fg(Color::Green),
        Cell::new("Example"),
    ]);
    for (i, (fingerprint, count, example)) in rows.enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(fingerprint).fg(Color::Cyan),
            Cell::new(count).fg(Color::Green),
            Cell::new(example),
        ]);
    }
    align_right(&mut table, &[0, 2]);
    println!("\n{}\n{}", title, table);
}

pub fn tallies(entries: &[(Fingerprint, FingerprintTally)]) {
    ranked(
        "Most frequent walks in this run",
        entries
            .iter()
            .map(|(fp, t)| (fp.to_string(), t.count, t.example.clone())),
    );
}

pub fn store_top(entries: &[StoredFingerprint]) {
    ranked(
        "Most frequent walks",
        entries
            .iter()
            .map(|e| (e.fingerprint.to_string(), e.count, e.example.clone())),
    );
}
