//! Side-by-side column layout
//!
//! Text is wrapped and padded as plain text first; styling is applied to
//! whole padded cells so ANSI codes never affect alignment.

use colored::Colorize;

/// Narrowest column before the layout stops shrinking
pub const MIN_COLUMN_WIDTH: usize = 20;

const SEPARATOR: &str = " │ ";

/// How a cell is styled once padded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Title,
    Dim,
    Failed,
}

impl CellStyle {
    fn paint(self, cell: &str) -> String {
        match self {
            CellStyle::Plain => cell.to_string(),
            CellStyle::Title => cell.yellow().bold().to_string(),
            CellStyle::Dim => cell.dimmed().to_string(),
            CellStyle::Failed => cell.red().to_string(),
        }
    }
}

/// One column: a few styled header lines and a wrapped body
#[derive(Debug, Clone)]
pub struct Column {
    pub header: Vec<(String, CellStyle)>,
    pub body: String,
    pub body_style: CellStyle,
}

/// Width of each column when `count` columns share `total_width`
pub fn column_width(total_width: usize, count: usize) -> usize {
    if count == 0 {
        return total_width;
    }
    let separators = SEPARATOR.chars().count() * (count - 1);
    (total_width.saturating_sub(separators) / count).max(MIN_COLUMN_WIDTH)
}

/// Greedy word wrap on character counts. Paragraph breaks are kept and words
/// longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed > width && current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        lines.push(current);
    }

    // Drop trailing blank lines
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

fn pad(line: &str, width: usize) -> String {
    let len = line.chars().count();
    format!("{}{}", line, " ".repeat(width.saturating_sub(len)))
}

/// Render columns side by side within `total_width`
pub fn render(columns: &[Column], total_width: usize) -> String {
    let width = column_width(total_width, columns.len());

    let cells: Vec<Vec<(String, CellStyle)>> = columns
        .iter()
        .map(|column| {
            let mut cells: Vec<(String, CellStyle)> = Vec::new();
            for (text, style) in &column.header {
                cells.extend(wrap(text, width).into_iter().map(|l| (l, *style)));
            }
            cells.push(("─".repeat(width), CellStyle::Dim));
            cells.extend(
                wrap(&column.body, width)
                    .into_iter()
                    .map(|l| (l, column.body_style)),
            );
            cells
        })
        .collect();

    let rows = cells.iter().map(Vec::len).max().unwrap_or(0);
    let mut output = String::new();
    for row in 0..rows {
        let line: Vec<String> = cells
            .iter()
            .map(|column| match column.get(row) {
                Some((text, style)) => style.paint(&pad(text, width)),
                None => pad("", width),
            })
            .collect();
        output.push_str(line.join(SEPARATOR).trim_end());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("a firewall filters traffic between networks", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "a firewall filters traffic between networks");
    }

    #[test]
    fn test_wrap_keeps_paragraphs_and_splits_long_words() {
        let lines = wrap("first\n\nsecond abcdefghijkl", 5);
        assert_eq!(lines, vec!["first", "", "secon", "d", "abcde", "fghij", "kl"]);
    }

    #[test]
    fn test_column_width() {
        assert_eq!(column_width(120, 3), 38);
        assert_eq!(column_width(30, 3), MIN_COLUMN_WIDTH);
    }

    #[test]
    fn test_render_aligns_uneven_columns() {
        colored::control::set_override(false);
        let columns = vec![
            Column {
                header: vec![("GPT".to_string(), CellStyle::Title)],
                body: "short".to_string(),
                body_style: CellStyle::Plain,
            },
            Column {
                header: vec![("Grok".to_string(), CellStyle::Title)],
                body: "a much longer answer that wraps over several lines".to_string(),
                body_style: CellStyle::Plain,
            },
        ];
        let output = render(&columns, 50);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines.len() > 3);
        assert!(lines[0].starts_with("GPT"));
        assert!(lines[0].contains(" │ Grok"));
        // Every row keeps the separator at the same position
        let sep_at = |l: &str| l.chars().position(|c| c == '│');
        let first = sep_at(lines[0]);
        assert_eq!(first, Some(24));
        assert!(lines.iter().all(|l| sep_at(l) == first));
    }
}
