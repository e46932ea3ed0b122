/// Fixed-width text table for uniform rows.
///
/// Each column is as wide as the larger of its header label and its widest
/// cell; cells are left-justified and joined by `" | "`, with a dashed
/// separator as long as the rendered header line.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add one row. Rows are expected to have one cell per header.
    pub fn push_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.headers.len());
        self.rows.push(cells);
    }

    /// Render the table, or a single no-records notice when it is empty.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "No records found".to_string();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let header = pad_line(&self.headers, &widths);
        let mut out = String::new();
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(header.len()));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&pad_line(row, &widths));
        }
        out
    }
}

fn pad_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_renders_the_notice_only() {
        let table = Table::new(&["id", "name"]);
        assert_eq!(table.render(), "No records found");
    }

    #[test]
    fn columns_are_padded_to_the_widest_cell() {
        let mut table = Table::new(&["id", "name"]);
        table.push_row(vec!["1".to_string(), "Ana".to_string()]);
        table.push_row(vec!["12".to_string(), "Bo".to_string()]);
        assert_eq!(
            table.render(),
            "id | name\n---------\n1  | Ana \n12 | Bo  "
        );
    }

    #[test]
    fn header_width_wins_over_narrow_cells() {
        let mut table = Table::new(&["identifier", "n"]);
        table.push_row(vec!["7".to_string(), "x".to_string()]);
        let rendered = table.render();
        let mut lines = rendered.lines();
        let header = lines.next().unwrap();
        let separator = lines.next().unwrap();
        let row = lines.next().unwrap();
        assert_eq!(header, "identifier | n");
        assert_eq!(separator.len(), header.len());
        assert!(separator.chars().all(|c| c == '-'));
        assert_eq!(row, "7          | x");
    }
}
