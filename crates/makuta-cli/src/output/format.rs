#[derive(Debug, Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub align: Align,
}

const GAP: &str = "  ";
const INDENT: &str = "  ";

/// Renders a plain two-space-gapped table. Column widths are the maximum of
/// the header and every cell, so output stays stable across terminals.
pub fn render_table(columns: &[Column], rows: &[Vec<String>]) -> Vec<String> {
    let widths = column_widths(columns, rows);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad(column.name, *width, column.align))
        .collect();
    lines.push(format!("{INDENT}{}", header.join(GAP).trim_end()));

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(index, (column, width))| {
                let cell = row.get(index).map(String::as_str).unwrap_or("");
                pad(cell, *width, column.align)
            })
            .collect();
        lines.push(format!("{INDENT}{}", cells.join(GAP).trim_end()));
    }

    lines
}

pub fn key_value_lines(entries: &[(&str, String)]) -> Vec<String> {
    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count() + 1)
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|(label, value)| {
            let padded = pad(&format!("{label}:"), label_width, Align::Left);
            format!("{INDENT}{padded}{GAP}{value}")
        })
        .collect()
}

fn column_widths(columns: &[Column], rows: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let cells = rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            cells.max(column.name.chars().count())
        })
        .collect()
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let fill = " ".repeat(width - len);
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{Align, Column, key_value_lines, render_table};

    #[test]
    fn table_pads_columns_to_widest_cell() {
        let columns = [
            Column {
                name: "Type",
                align: Align::Left,
            },
            Column {
                name: "Montant",
                align: Align::Right,
            },
        ];
        let rows = vec![
            vec!["Retrait".to_string(), "-$50.00".to_string()],
            vec!["Achat".to_string(), "-$1,200.00".to_string()],
        ];

        let lines = render_table(&columns, &rows);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  Type        Montant");
        assert_eq!(lines[1], "  Retrait     -$50.00");
        assert_eq!(lines[2], "  Achat    -$1,200.00");
    }

    #[test]
    fn table_tolerates_short_rows() {
        let columns = [
            Column {
                name: "A",
                align: Align::Left,
            },
            Column {
                name: "B",
                align: Align::Left,
            },
        ];
        let rows = vec![vec!["only".to_string()]];
        let lines = render_table(&columns, &rows);
        assert_eq!(lines[1], "  only");
    }

    #[test]
    fn key_values_align_on_the_longest_label() {
        let lines = key_value_lines(&[
            ("Balance", "$125.40".to_string()),
            ("Total earned", "$500.00".to_string()),
        ]);
        assert_eq!(lines[0], "  Balance:       $125.40");
        assert_eq!(lines[1], "  Total earned:  $500.00");
    }
}
