use std::io::{BufRead, Write};

use console::style;
use fsinv_common::InventoryError;

use crate::session::{Session, Step};

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn total_stats(&mut self) -> Result<Step, InventoryError> {
        let progress = self.observer("Calculating total file size")?;
        let stat = self.inventory.total_stats_global(progress.as_ref())?;

        writeln!(self.out, "\n")?;
        writeln!(self.out, "Total count of files: {}", style(stat.count).green())?;
        writeln!(self.out, "Total size of files: {}", style(stat.readable_size()).green())?;
        Ok(Step::Done)
    }
}
