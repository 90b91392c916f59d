use std::io::{BufRead, Write};

use console::style;
use fsinv_common::InventoryError;
use fsinv_domain::AggregateStat;
use fsinv_scanner::normalize_path;

use crate::session::{Session, Step};

const EXTENSION_PROMPT: &str = "Enter file extension to search for (e.g. '.pdf'): ";

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn extension_global(&mut self) -> Result<Step, InventoryError> {
        let Some(suffix) = self.prompt(EXTENSION_PROMPT)? else {
            return Ok(Step::InputClosed);
        };
        let progress = self.observer(&format!("Searching for files with extension '{}'", suffix))?;
        let stat = self.inventory.extension_stats_global(&suffix, progress.as_ref())?;
        self.print_extension_stat(&suffix, "OS", &stat)?;
        Ok(Step::Done)
    }

    pub(crate) fn extension_in_path(&mut self) -> Result<Step, InventoryError> {
        writeln!(self.out)?;
        let Some(suffix) = self.prompt(EXTENSION_PROMPT)? else {
            return Ok(Step::InputClosed);
        };
        let Some(path) = self.prompt("Enter path to search in: ")? else {
            return Ok(Step::InputClosed);
        };
        let root = normalize_path(&path);

        let progress = self.observer(&format!("Searching for files with extension '{}'", suffix))?;
        let stat = self.inventory.extension_stats(&root, &suffix, progress.as_ref())?;
        let place = style(root.display()).blue().to_string();
        self.print_extension_stat(&suffix, &place, &stat)?;
        Ok(Step::Done)
    }

    fn print_extension_stat(
        &mut self,
        suffix: &str,
        place: &str,
        stat: &AggregateStat,
    ) -> Result<(), InventoryError> {
        let suffix = style(suffix).green().bold();
        writeln!(self.out, "\n")?;
        writeln!(
            self.out,
            "Count of {} files on {}: {}",
            suffix,
            place,
            style(stat.count).magenta().bold()
        )?;
        writeln!(
            self.out,
            "Allocated space for {} files on {}: {}",
            suffix,
            place,
            style(stat.readable_size()).magenta().bold()
        )?;
        Ok(())
    }
}
