//! Operator console
//!
//! Blocking line reads and colored announcements. Setup code only talks to the
//! [`Console`] trait so tests can script the operator.

use colored::{Color, Colorize};
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Show `text` and read one line, trimmed. EOF reads as an empty line.
    fn prompt(&mut self, text: &str) -> String;

    /// Print a colored title followed by plain content
    fn announce(&mut self, title: &str, color: Color, content: &str);
}

/// Console on the process's stdin/stdout
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, text: &str) -> String {
        print!("{}", text);
        if let Err(e) = io::stdout().flush() {
            log::warn!("Failed to flush stdout: {}", e);
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => {
                // Keep the transcript readable when input is piped
                println!();
                log::debug!("stdin closed while prompting: {}", text.trim());
                String::new()
            }
            Ok(_) => line.trim().to_string(),
            Err(e) => {
                log::warn!("Failed to read from stdin: {}", e);
                String::new()
            }
        }
    }

    fn announce(&mut self, title: &str, color: Color, content: &str) {
        if content.is_empty() {
            println!("{}", title.color(color));
        } else {
            println!("{} {}", title.color(color), content);
        }
    }
}
