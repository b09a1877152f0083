//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Style a report label for terminal output.
#[must_use]
pub fn styled_label(name: &str) -> String {
    if is_color_disabled() {
        name.to_string()
    } else {
        style(name).bold().cyan().to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_label_keeps_text() {
        let label = styled_label("Mean");
        assert!(label.contains("Mean"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("test error");
    }

    #[test]
    fn print_warning_does_not_panic() {
        print_warning("");
    }
}
