use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// ANSI styling for status labels, or plain text when disabled
#[derive(Debug, Clone, Copy)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn error(&self, label: &str) -> String {
        self.paint(RED, label)
    }

    pub fn success(&self, label: &str) -> String {
        self.paint(GREEN, label)
    }

    pub fn info(&self, label: &str) -> String {
        self.paint(CYAN, label)
    }

    fn paint(&self, code: &str, label: &str) -> String {
        if self.enabled {
            format!("{code}{label}{RESET}")
        } else {
            label.to_string()
        }
    }
}

pub fn should_use_colors(force_color: bool, no_color: bool) -> bool {
    // Priority: --no-color > --color > NO_COLOR env > TTY detection
    if no_color {
        return false;
    }
    if force_color {
        return true;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_colors_are_plain() {
        let colors = Colors::new(false);
        assert_eq!(colors.error("Error:"), "Error:");
        assert_eq!(colors.info("Up to date:"), "Up to date:");
    }

    #[test]
    fn test_enabled_colors_wrap_label() {
        let colors = Colors::new(true);
        assert_eq!(colors.success("Wrote:"), "\x1b[32mWrote:\x1b[0m");
        assert_eq!(colors.error("Error:"), "\x1b[31mError:\x1b[0m");
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_colors(true, true));
        assert!(should_use_colors(true, false));
    }
}
