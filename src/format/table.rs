use crate::cutlist::CutListItem;

use super::UnitFormatter;

const GAP: &str = "   ";

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Renders rows under a `=` header rule with `-` rules between rows.
///
/// Cells may span several lines; every line of a row is padded to the
/// column width.
fn render(header: &[String], align: &[Align], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            for line in cell.lines() {
                *width = (*width).max(line.chars().count());
            }
        }
    }
    let rule_width = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);

    let mut out = Vec::new();
    push_row(&mut out, header, align, &widths);
    out.push("=".repeat(rule_width));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push("-".repeat(rule_width));
        }
        push_row(&mut out, row, align, &widths);
    }
    out.join("\n")
}

fn push_row(out: &mut Vec<String>, cells: &[String], align: &[Align], widths: &[usize]) {
    let split: Vec<Vec<&str>> = cells.iter().map(|c| c.lines().collect()).collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(0).max(1);
    for line in 0..height {
        let text: Vec<String> = split
            .iter()
            .zip(widths)
            .zip(align)
            .map(|((cell, &w), a)| {
                let s = cell.get(line).copied().unwrap_or("");
                match a {
                    Align::Left => format!("{s:<w$}"),
                    Align::Right => format!("{s:>w$}"),
                }
            })
            .collect();
        out.push(text.join(GAP).trim_end().to_string());
    }
}

pub(super) fn format(items: &[&CutListItem], units: &UnitFormatter) -> String {
    let u = units.symbol();
    let header = vec![
        "count".to_string(),
        "material".to_string(),
        format!("length ({u})"),
        format!("width ({u})"),
        format!("height ({u})"),
        "names".to_string(),
    ];
    let align = [
        Align::Right,
        Align::Left,
        Align::Right,
        Align::Right,
        Align::Right,
        Align::Left,
    ];
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let d = item.dimensions();
            vec![
                item.count().to_string(),
                item.material_name().unwrap_or_default().to_string(),
                units.format(d.length),
                units.format(d.width),
                units.format(d.height),
                item.names().join("\n"),
            ]
        })
        .collect();
    render(&header, &align, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_line_cells_are_padded() {
        let header = vec!["n".to_string(), "names".to_string()];
        let rows = vec![
            vec!["2".to_string(), "a\nbb".to_string()],
            vec!["10".to_string(), "c".to_string()],
        ];
        let text = render(&header, &[Align::Right, Align::Left], &rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [" n   names", "==========", " 2   a", "     bb", "----------", "10   c"]
        );
    }
}
