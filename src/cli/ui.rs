use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const WINDOW_TITLE: &str = "Конвертер валют";
pub const GREETING: &str = "ДОБРО ПОЖАЛОВАТЬ В КОНВЕРТЕР ВАЛЮТ! (КУРС ПО НБУ)";

const BANNER_WIDTH: usize = 49;
const REPORT_WIDTH: usize = 70;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Error,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold(),
        StyleType::Error => style(text).red(),
    };
    styled.to_string()
}

/// Separator framing the greeting banner.
pub fn banner_separator() -> String {
    "-".repeat(BANNER_WIDTH)
}

/// Separator framing each rate report.
pub fn report_separator() -> String {
    "-".repeat(REPORT_WIDTH)
}

/// Sets the terminal window title, if stdout is a terminal.
pub fn set_window_title() {
    let term = Term::stdout();
    if term.is_term() {
        term.set_title(WINDOW_TITLE);
    }
}

/// Creates a spinner shown on stderr while a request is in flight.
///
/// indicatif hides the spinner when stderr is not a terminal.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_have_fixed_width() {
        assert_eq!(banner_separator().chars().count(), 49);
        assert_eq!(report_separator().chars().count(), 70);
        assert!(report_separator().chars().all(|c| c == '-'));
    }

    #[test]
    fn test_style_text_keeps_content() {
        for style_type in [StyleType::Title, StyleType::Error] {
            assert!(style_text("27.5", style_type).contains("27.5"));
        }
    }
}
