use std::io::{BufRead, Write};

use console::style;
use fsinv_common::InventoryError;
use fsinv_scanner::{Inventory, NoProgress, ProgressObserver};

use crate::menu::{render_menu, Choice};
use crate::progress_bar::BarProgress;

/// How a command left the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Done,
    /// Input ended at one of the command's prompts.
    InputClosed,
}

/// One interactive run of the menu loop over arbitrary input/output.
pub struct Session<R, W> {
    pub(crate) input: R,
    pub(crate) out: W,
    pub(crate) inventory: Inventory,
    show_progress: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, inventory: Inventory) -> Self {
        Self {
            input,
            out,
            inventory,
            show_progress: true,
        }
    }

    /// Turns the terminal progress bars off (e.g. when output is captured).
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<(), InventoryError> {
        writeln!(
            self.out,
            "\nRunning on OS: {} ({})",
            style(std::env::consts::OS).cyan(),
            std::env::consts::ARCH
        )?;

        loop {
            write!(self.out, "{}", render_menu())?;
            let Some(line) = self.prompt("Enter your choice (1-6): ")? else {
                // End of input behaves like "exit".
                break;
            };

            let result = match Choice::parse(&line) {
                Some(Choice::TotalStats) => self.total_stats(),
                Some(Choice::ExtensionGlobal) => self.extension_global(),
                Some(Choice::ExtensionInPath) => self.extension_in_path(),
                Some(Choice::NameSearch) => self.name_search(),
                Some(Choice::LargestFiles) => self.largest_files(),
                Some(Choice::Exit) => break,
                None => {
                    writeln!(self.out, "Invalid choice. Please enter a number between 1 and 6.")?;
                    continue;
                }
            };

            match result {
                Ok(Step::Done) => {}
                // End of input behaves like "exit" inside commands too.
                Ok(Step::InputClosed) => break,
                Err(InventoryError::Io(e)) => return Err(InventoryError::Io(e)),
                Err(e) => {
                    log::debug!("query failed: {:?}", e);
                    writeln!(self.out, "\n{}", style(format!("Error: {}", e)).red().bold())?;
                }
            }
        }

        writeln!(self.out, "\n{}", style("Exiting program...").red().bold())?;
        Ok(())
    }

    /// Prints `label` and reads one line. `None` on end of input.
    pub(crate) fn prompt(&mut self, label: &str) -> Result<Option<String>, InventoryError> {
        write!(self.out, "{}", style(label).yellow().bold())?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub(crate) fn observer(
        &mut self,
        description: &str,
    ) -> Result<Box<dyn ProgressObserver>, InventoryError> {
        writeln!(
            self.out,
            "{}",
            style("\nCounting files, this may take a while depending on the path ...").red()
        )?;
        if self.show_progress {
            Ok(Box::new(BarProgress::new(description)))
        } else {
            Ok(Box::new(NoProgress))
        }
    }
}
