//! Plain-terminal output for one-shot mode and --show-data.

use owo_colors::OwoColorize;
use termimad::MadSkin;
use unicode_width::UnicodeWidthStr;

use crate::dataset::Table;

const MAX_COLUMN_WIDTH: usize = 24;

pub struct MarkdownPrinter {
    pub skin: MadSkin,
}

impl Default for MarkdownPrinter {
    fn default() -> Self {
        Self { skin: MadSkin::default() }
    }
}

impl MarkdownPrinter {
    pub fn print(&self, text: &str) {
        self.skin.print_text(text);
        println!();
    }
}

pub fn print_answer(answer: &str, markdown: bool) {
    if markdown {
        MarkdownPrinter::default().print(answer);
    } else {
        println!("{}", answer.cyan());
    }
}

pub fn print_error(message: &str) {
    eprintln!("{}", format!("An error occurred: {}", message).red());
}

/// Aligned dump of the dataset for --show-data.
pub fn print_table(table: &Table) {
    let widths = column_widths(table);

    let header = table
        .headers()
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.yellow().bold());

    for row in table.rows() {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(cell, *w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }
    println!("{} rows", table.row_count());
}

fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers().iter().map(|h| h.width()).collect();
    for row in table.rows() {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.width()).min(MAX_COLUMN_WIDTH);
        }
    }
    widths
}

fn pad(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.to_string().width();
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
