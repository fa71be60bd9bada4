use std::collections::HashMap;
use std::io::{self, Write};

use carbon_forge::{BuiltModel, Element, Structure, StructureKind};

use crate::util::convert::periodicity_label;
use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_structure_info(model: &BuiltModel) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    print_kv_table(&mut out, "Structure Summary", &summary_rows(model));
}

fn summary_rows(model: &BuiltModel) -> Vec<(&'static str, String)> {
    let s = &model.structure;
    let slice = if s.kind.is_tube() { "ring" } else { "row" };

    let mut rows = vec![
        ("Structure", s.kind.to_string()),
        (
            "Lattice",
            format!(
                "{} {slice}s × {} atoms",
                s.lattice_atom_count.checked_div(s.ring_size).unwrap_or(0),
                s.ring_size
            ),
        ),
        ("Total Atoms", s.atom_count().to_string()),
        ("Border Atoms", s.added_atom_count().to_string()),
    ];

    if let Some(conn) = &model.connectivity {
        rows.push(("Total Bonds", conn.bond_count().to_string()));
        if !conn.periodic_bonds.is_empty() {
            rows.push(("Periodic Bonds", conn.periodic_bonds.len().to_string()));
        }
    }

    match (s.kind, s.extent.x) {
        (StructureKind::Graphite, Some(width)) => {
            rows.push(("Size (Å)", format!("{:.2} × {:.2}", width, s.extent.y)));
        }
        _ => rows.push(("Length (Å)", format!("{:.2}", s.extent.y))),
    }
    if let Some(d) = s.diameter {
        rows.push(("Diameter (Å)", format!("{:.3}", d)));
    }
    rows.push(("Periodicity", periodicity_label(s.periodicity).to_string()));
    rows.push(("Net Charge (e)", format!("{:+.3}", s.total_charge())));

    rows
}

pub fn print_element_distribution(structure: &Structure) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let data = element_counts(structure);
    print_distribution_table(&mut out, "Element Distribution", &data, structure.atom_count());
}

fn element_counts(structure: &Structure) -> Vec<(String, usize)> {
    let mut counts: HashMap<Element, usize> = HashMap::new();
    for atom in &structure.atoms {
        *counts.entry(atom.element).or_insert(0) += 1;
    }

    let mut sorted: Vec<_> = counts
        .into_iter()
        .map(|(e, c)| (e.symbol().to_string(), c))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let rule = |l: &str, m: &str, r: &str| {
        format!(
            "{INDENT}{l}{}{m}{}{m}{}{r}",
            "─".repeat(name_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(dist_w + 2)
        )
    };

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        "Element", "Count", "Distribution"
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (name, count) in data {
        let pct = if total == 0 {
            0.0
        } else {
            (*count as f64 / total as f64) * 100.0
        };
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            truncate(name, name_w),
            count,
            dist_cell
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let rule = |l: &str, m: &str, r: &str| {
        format!(
            "{INDENT}{l}{}{m}{}{r}",
            "─".repeat(key_w + 2),
            "─".repeat(val_w + 2)
        )
    };

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
        "Metric", "Value"
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w)
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = (((pct / 100.0) * max_width as f64).round() as usize).min(max_width);
    let empty = max_width - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
