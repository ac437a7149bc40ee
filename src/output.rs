use std::io::{self, Write};

use crate::app::{ProgressEvent, ProgressSink, Summary};

/// Plain console reporter. The summary is deliberately human-readable, not
/// machine-parseable; failed slugs are listed as paths for manual follow-up.
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn print_summary(summary: &Summary) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", "=".repeat(50))?;
        writeln!(stdout, "Done.")?;
        writeln!(stdout, "  Downloaded:  {}", summary.retrieved.len())?;
        writeln!(stdout, "  Skipped:     {}", summary.already_present.len())?;
        writeln!(stdout, "  Failed:      {}", summary.unresolved.len())?;

        if !summary.unresolved.is_empty() {
            writeln!(stdout, "\nFailed games (add .swf files manually):")?;
            for slug in &summary.unresolved {
                writeln!(stdout, "  games/{slug}.swf")?;
            }
        }
        Ok(())
    }
}

impl ProgressSink for ConsoleOutput {
    fn event(&self, event: ProgressEvent) {
        println!("  {}", event.message);
    }
}

/// Sink that swallows everything; used by tests.
pub struct SilentOutput;

impl ProgressSink for SilentOutput {
    fn event(&self, _event: ProgressEvent) {}
}
