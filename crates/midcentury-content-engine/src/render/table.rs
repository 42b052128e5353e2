/// Table rows reconciled to a single column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub width: usize,
}

impl TableGrid {
    /// Builds a grid as wide as the header row, or as the widest body row when
    /// there are no headers. Short rows are padded with empty cells and long
    /// rows truncated; mismatches are a content issue, not an error.
    pub fn reconcile(headers: &[String], rows: &[Vec<String>]) -> Self {
        let width = if headers.is_empty() {
            rows.iter().map(Vec::len).max().unwrap_or(0)
        } else {
            headers.len()
        };

        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != width {
                    log::debug!(
                        "Table row {i} has {} cells, reconciling to {width}",
                        row.len()
                    );
                }
                let mut cells: Vec<String> = row.iter().take(width).cloned().collect();
                cells.resize(width, String::new());
                cells
            })
            .collect();

        Self {
            headers: headers.to_vec(),
            rows,
            width,
        }
    }
}
