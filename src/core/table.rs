//! Plain ASCII table rendering for the console reports.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Right,
}

pub struct AsciiTable<'a> {
    title: Option<&'a str>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    justify: Vec<Justify>,
}

impl<'a> AsciiTable<'a> {
    pub fn new(header: Vec<String>) -> Self {
        let justify = vec![Justify::Left; header.len()];
        Self {
            title: None,
            header,
            rows: Vec::new(),
            justify,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn justify(mut self, column: usize, justify: Justify) -> Self {
        if let Some(slot) = self.justify.get_mut(column) {
            *slot = justify;
        }
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|cell| width(cell)).collect();
        for row in &self.rows {
            for (column, cell) in row.iter().enumerate() {
                if column < widths.len() {
                    widths[column] = widths[column].max(width(cell));
                }
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let border = border_line(&widths);

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.top_border(&border));
        lines.push(self.render_row(&self.header, &widths));
        lines.push(border.clone());
        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }
        lines.push(border);

        lines.join("\n")
    }

    // The title overwrites the start of the top border when it fits.
    fn top_border(&self, border: &str) -> String {
        match self.title {
            Some(title) if width(title) + 2 <= width(border) => {
                let rest: String = border.chars().skip(width(title) + 1).collect();
                format!("+{}{}", title, rest)
            }
            _ => border.to_string(),
        }
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(column, &column_width)| {
                let cell = row.get(column).map(String::as_str).unwrap_or("");
                let pad = " ".repeat(column_width - width(cell));
                match self.justify[column] {
                    Justify::Left => format!(" {}{} ", cell, pad),
                    Justify::Right => format!(" {}{} ", pad, cell),
                }
            })
            .collect();
        format!("|{}|", cells.join("|"))
    }
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AsciiTable<'static> {
        let mut table = AsciiTable::new(vec!["lang".to_string(), "n".to_string()])
            .justify(1, Justify::Right);
        table.push_row(vec!["Go".to_string(), "7".to_string()]);
        table.push_row(vec!["Python".to_string(), "123".to_string()]);
        table
    }

    #[test]
    fn test_render_without_title() {
        let expected = [
            "+--------+-----+",
            "| lang   |   n |",
            "+--------+-----+",
            "| Go     |   7 |",
            "| Python | 123 |",
            "+--------+-----+",
        ]
        .join("\n");

        assert_eq!(sample().render(), expected);
    }

    #[test]
    fn test_title_is_embedded_in_top_border() {
        let rendered = sample().title("Jobs").render();
        let first_line = rendered.lines().next().unwrap();

        assert_eq!(first_line, "+Jobs----+-----+");
    }

    #[test]
    fn test_title_too_long_is_dropped() {
        let rendered = sample().title("A very long title here").render();
        let first_line = rendered.lines().next().unwrap();

        assert_eq!(first_line, "+--------+-----+");
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let mut table = AsciiTable::new(vec!["Язык".to_string()]);
        table.push_row(vec!["C#".to_string()]);
        let rendered = table.render();

        assert!(rendered.starts_with("+------+"));
        assert!(rendered.contains("| Язык |"));
        assert!(rendered.contains("| C#   |"));
    }
}
