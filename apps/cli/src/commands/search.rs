use std::io::{BufRead, Write};

use console::style;
use fsinv_common::InventoryError;
use fsinv_scanner::normalize_path;

use crate::session::{Session, Step};

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn name_search(&mut self) -> Result<Step, InventoryError> {
        let Some(needle) = self.prompt("Enter part of the file name to search for: ")? else {
            return Ok(Step::InputClosed);
        };
        let Some(path) = self.prompt("Enter path to search in: ")? else {
            return Ok(Step::InputClosed);
        };
        let root = normalize_path(&path);

        let progress = self.observer(&format!("Searching for files named '*{}*'", needle))?;
        let matches = self.inventory.find_by_name(&root, &needle, progress.as_ref())?;

        writeln!(self.out, "\n")?;
        for path in &matches {
            writeln!(self.out, "{}", path)?;
        }
        writeln!(
            self.out,
            "Files matching {} under {}: {}",
            style(&needle).green().bold(),
            style(root.display()).blue(),
            style(matches.len()).magenta().bold()
        )?;
        Ok(Step::Done)
    }
}
