//! Plain-text result printer.

use owo_colors::OwoColorize;

use crate::config::Config;

pub struct TextPrinter {
    pub color: Option<&'static str>,
}

impl TextPrinter {
    /// Printer honoring DEFAULT_COLOR, or uncolored when disabled.
    pub fn from_config(cfg: &Config, no_color: bool) -> Self {
        if no_color {
            return Self { color: None };
        }
        let color = match cfg.get("DEFAULT_COLOR").as_deref() {
            Some("green") => Some("green"),
            Some("cyan") => Some("cyan"),
            Some("magenta") => Some("magenta"),
            Some("yellow") => Some("yellow"),
            _ => None,
        };
        Self { color }
    }

    pub fn print(&self, text: &str) {
        match self.color {
            Some("green") => println!("{}", text.green()),
            Some("cyan") => println!("{}", text.cyan()),
            Some("magenta") => println!("{}", text.magenta()),
            Some("yellow") => println!("{}", text.yellow()),
            _ => println!("{}", text),
        }
    }
}
