use std::io::{self, BufRead, Write};
use tickpad::confirm::Confirm;
use tracing::warn;

/// Asks on stdout and reads one line from stdin. Anything but `y`/`yes` declines.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N]: ", prompt);
        if let Err(e) = io::stdout().flush() {
            warn!(error = %e, "could not flush prompt");
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(_) => is_yes(&input),
            Err(e) => {
                warn!(error = %e, "could not read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
