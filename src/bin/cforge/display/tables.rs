use std::io::{self, Write};

use compo_forge::{CompositionProfile, CompositionSample, Fold, Network};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();
const MAX_ROWS: usize = 12;

pub fn print_profile_summary(profile: &CompositionProfile, network: &Network, folds: &[Fold]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let tracked = profile.isotopes().filter(|iso| network.contains(iso)).count();
    let mut rows = vec![
        ("Rows", profile.row_count().to_string()),
        ("Profile Fields", profile.isotope_count().to_string()),
        ("Network Size", network.len().to_string()),
        ("Zero-filled", network.len().saturating_sub(tracked).to_string()),
        ("Folded", folds.len().to_string()),
    ];
    if let Some(heaviest) = network.heaviest() {
        rows.push(("Heaviest", heaviest.to_string()));
    }

    print_kv_table(&mut out, "Profile Summary", &rows);
}

/// Mass fractions of one sample, largest first.
pub fn print_composition(title: &str, sample: &CompositionSample) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut sorted: Vec<(&str, f64)> = sample.iter().filter(|(_, x)| *x > 0.0).collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

    print_fraction_table(&mut out, title, &sorted);
}

fn print_fraction_table(out: &mut impl Write, title: &str, data: &[(&str, f64)]) {
    let name_w = 8usize;
    let value_w = 10usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + value_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let name_line = "─".repeat(name_w + 2);
    let value_line = "─".repeat(value_w + 2);
    let dist_line = "─".repeat(dist_w + 2);

    let _ = writeln!(out, "{INDENT}┌─ {} ─┐", truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{INDENT}┌{name_line}┬{value_line}┬{dist_line}┐");
    let _ = writeln!(
        out,
        "{INDENT}│ {:<name_w$} │ {:>value_w$} │ {:<dist_w$} │",
        "Isotope", "X", "Share"
    );
    let _ = writeln!(out, "{INDENT}├{name_line}┼{value_line}┼{dist_line}┤");

    for (name, fraction) in data.iter().take(MAX_ROWS) {
        let pct = fraction * 100.0;
        let cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>value_w$.3e} │ {:<dist_w$} │",
            truncate(name, name_w),
            fraction,
            cell
        );
    }

    if data.len() > MAX_ROWS {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>value_w$} │ {:<dist_w$} │",
            "...",
            "...",
            format!("({} more isotopes)", data.len() - MAX_ROWS)
        );
    }

    let _ = writeln!(out, "{INDENT}└{name_line}┴{value_line}┴{dist_line}┘");
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let key_line = "─".repeat(key_w + 2);
    let val_line = "─".repeat(val_w + 2);

    let _ = writeln!(out, "{INDENT}┌─ {} ─┐", truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{INDENT}┌{key_line}┬{val_line}┐");
    let _ = writeln!(out, "{INDENT}│ {:<key_w$} │ {:>val_w$} │", "Metric", "Value");
    let _ = writeln!(out, "{INDENT}├{key_line}┼{val_line}┤");
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w)
        );
    }
    let _ = writeln!(out, "{INDENT}└{key_line}┴{val_line}┘");
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
