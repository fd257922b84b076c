use std::io::{self, Write};

use molgeom::Molecule;

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_ROWS: usize = 15;

pub fn print_molecule_info(out: &mut impl Write, molecule: &Molecule) -> io::Result<()> {
    let topology = molecule.topology();
    let name = if molecule.name().is_empty() {
        "(unnamed)"
    } else {
        molecule.name()
    };

    let rows = vec![
        ("Molecule", name.to_string()),
        ("Atoms", molecule.atom_count().to_string()),
        ("Elements", molecule.registry().element_count().to_string()),
        ("Atom Pairs", molecule.pair_count().to_string()),
        ("Bond Types", topology.type_count().to_string()),
        ("Typed Pairs", topology.enumerated_bonds().to_string()),
    ];

    print_kv_table(out, "Molecule Summary", &rows)
}

pub fn print_element_distribution(out: &mut impl Write, molecule: &Molecule) -> io::Result<()> {
    let registry = molecule.registry();
    let total = registry.atom_count();

    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    writeln!(out, "{}┌─ Element Distribution ─┐", INDENT)?;
    rule(out, '┌', '┬', '┐', &[name_w, count_w, dist_w])?;
    writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Element", "Count", "Distribution",
    )?;
    rule(out, '├', '┼', '┤', &[name_w, count_w, dist_w])?;

    for (id, symbol) in registry.element_names().iter().enumerate().take(MAX_ROWS) {
        let count = registry.count_per_element()[id];
        let pct = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        let cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(symbol, name_w),
            count,
            cell,
        )?;
    }

    if registry.element_count() > MAX_ROWS {
        writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            "...",
            "...",
            format!("({} more elements)", registry.element_count() - MAX_ROWS),
        )?;
    }

    rule(out, '└', '┴', '┘', &[name_w, count_w, dist_w])
}

pub fn print_bond_types(out: &mut impl Write, molecule: &Molecule) -> io::Result<()> {
    let registry = molecule.registry();
    let topology = molecule.topology();

    let type_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let pairs_w = SAFE_TABLE_WIDTH.saturating_sub(type_w + count_w + sep_overhead);

    writeln!(out, "{}┌─ Bond Types ─┐", INDENT)?;
    rule(out, '┌', '┬', '┐', &[type_w, count_w, pairs_w])?;
    writeln!(
        out,
        "{}│ {:<type_w$} │ {:>count_w$} │ {:<pairs_w$} │",
        INDENT, "Type", "Pairs", "Atoms",
    )?;
    rule(out, '├', '┼', '┤', &[type_w, count_w, pairs_w])?;

    for (bond_type, count, pairs) in topology.iter().take(MAX_ROWS) {
        let listed = pairs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            out,
            "{}│ {:<type_w$} │ {:>count_w$} │ {:<pairs_w$} │",
            INDENT,
            truncate(&bond_type.label(registry), type_w),
            count,
            truncate(&listed, pairs_w),
        )?;
    }

    if topology.type_count() > MAX_ROWS {
        writeln!(
            out,
            "{}│ {:<type_w$} │ {:>count_w$} │ {:<pairs_w$} │",
            INDENT,
            "...",
            "...",
            format!("({} more types)", topology.type_count() - MAX_ROWS),
        )?;
    }

    rule(out, '└', '┴', '┘', &[type_w, count_w, pairs_w])
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) -> io::Result<()> {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    )?;
    rule(out, '┌', '┬', '┐', &[key_w, val_w])?;
    writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Metric", "Value",
    )?;
    rule(out, '├', '┼', '┤', &[key_w, val_w])?;

    for (key, val) in rows {
        writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        )?;
    }

    rule(out, '└', '┴', '┘', &[key_w, val_w])
}

fn rule(
    out: &mut impl Write,
    left: char,
    mid: char,
    right: char,
    widths: &[usize],
) -> io::Result<()> {
    let cells: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    writeln!(
        out,
        "{}{}{}{}",
        INDENT,
        left,
        cells.join(&mid.to_string()),
        right
    )
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
