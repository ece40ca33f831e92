use std::io::{BufRead, Write};

use anyhow::Result;

use crate::command::Command;
use crate::shapes::Shape;
use crate::store::CircularList;

/// Applies a command stream to the figure catalogue. Owns the catalogue
/// for its whole lifetime.
pub struct App {
    figures: CircularList<Shape>,
}

impl App {
    pub fn new() -> Self {
        Self {
            figures: CircularList::new(),
        }
    }

    /// Reads commands line by line until the stream is exhausted.
    ///
    /// Bad lines are reported and skipped; only I/O failures end the run
    /// early.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(cmd) => self.apply(cmd, &mut out)?,
                Err(e) => log::error!("{}; skipping `{}`", e, line.trim()),
            }
        }
        Ok(())
    }

    fn apply(&mut self, cmd: Command, out: &mut impl Write) -> Result<()> {
        match cmd {
            Command::Add(shape) => self.figures.append(shape),
            Command::Rem(Some(pred)) => {
                let removed = self.figures.remove_matching(|s| s.matches(&pred));
                log::debug!("`{}` removed {} figure(s)", pred, removed);
            }
            // a condition that didn't parse selects nothing
            Command::Rem(None) => {}
            Command::Print => self.print(out)?,
        }
        Ok(())
    }

    /// Writes every figure in insertion order, then a blank separator
    /// line. Writes nothing at all when the catalogue is empty.
    fn print(&self, out: &mut impl Write) -> Result<()> {
        if self.figures.is_empty() {
            return Ok(());
        }
        for shape in &self.figures {
            writeln!(out, "{}", shape)?;
        }
        writeln!(out)?;
        Ok(())
    }

    pub fn figures(&self) -> &CircularList<Shape> {
        &self.figures
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
