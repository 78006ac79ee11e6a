//! Terminal styling for diagnostics.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Format an error line for stderr.
#[must_use]
pub fn error_line(text: &str) -> String {
    if is_color_disabled() {
        format!("Error: {text}")
    } else {
        format!("{} {text}", style("Error:").red().bold().for_stderr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_contains_message() {
        assert!(error_line("index must be a positive integer")
            .ends_with("index must be a positive integer"));
    }
}
