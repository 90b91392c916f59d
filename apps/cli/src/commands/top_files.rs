use std::io::{BufRead, Write};

use console::style;
use fsinv_common::InventoryError;
use fsinv_domain::{format_size, TopFileEntry};
use fsinv_scanner::normalize_path;

use crate::session::{Session, Step};

const CHART_WIDTH: usize = 40;

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn largest_files(&mut self) -> Result<Step, InventoryError> {
        let Some(path) = self.prompt("Enter path to search in: ")? else {
            return Ok(Step::InputClosed);
        };
        let root = normalize_path(&path);

        let progress = self.observer("Sizing files")?;
        let top = self.inventory.largest_files(&root, progress.as_ref())?;

        writeln!(self.out, "\n")?;
        if top.is_empty() {
            writeln!(self.out, "No files under {}", style(root.display()).blue())?;
            return Ok(Step::Done);
        }
        writeln!(
            self.out,
            "{} largest files under {}:",
            top.len(),
            style(root.display()).blue()
        )?;
        write!(self.out, "{}", render_chart(&top, CHART_WIDTH))?;
        Ok(Step::Done)
    }
}

/// Horizontal bar chart, bars scaled to the largest entry.
pub fn render_chart(entries: &[TopFileEntry], width: usize) -> String {
    let max = entries.iter().map(|e| e.size).max().unwrap_or(0);
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let filled = if max == 0 {
            0
        } else {
            ((entry.size as u128 * width as u128 + max as u128 - 1) / max as u128) as usize
        };
        out.push_str(&format!(
            "{:>2}. {}{} {:>11}  {}\n",
            i + 1,
            style("█".repeat(filled)).magenta(),
            " ".repeat(width - filled),
            format_size(entry.size),
            entry.path
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, size: u64) -> TopFileEntry {
        TopFileEntry {
            path: path.to_string(),
            size,
        }
    }

    #[test]
    fn test_chart_scales_to_largest() {
        console::set_colors_enabled(false);
        let chart = render_chart(&[entry("/big", 2048), entry("/half", 1024), entry("/tiny", 1)], 10);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" 1. ██████████ "));
        assert!(lines[0].ends_with("2.00 KB  /big"));
        assert!(lines[1].starts_with(" 2. █████      "));
        // Non-empty files always get at least one cell.
        assert!(lines[2].starts_with(" 3. █         "));
        assert!(lines[2].ends_with("1 B  /tiny"));
    }

    #[test]
    fn test_chart_of_empty_files() {
        console::set_colors_enabled(false);
        let chart = render_chart(&[entry("/empty", 0)], 4);
        assert_eq!(chart, " 1.              0 B  /empty\n");
    }
}
