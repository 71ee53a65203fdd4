//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};

use bodycomp_core::Verdict;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::good(),
            Self::Warn => Style::new().yellow(),
            Self::Err => styles::bad(),
        }
    }
}

/// Arrow shown next to a delta.
pub fn trend_symbol(delta: Option<f64>, unicode: bool) -> &'static str {
    match delta {
        Some(d) if d > 0.0 => {
            if unicode {
                "\u{2191}"
            } else {
                "^"
            }
        }
        Some(d) if d < 0.0 => {
            if unicode {
                "\u{2193}"
            } else {
                "v"
            }
        }
        _ => "",
    }
}

/// Style for a delta verdict.
pub fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Good => styles::good(),
        Verdict::Bad => styles::bad(),
        Verdict::Neutral => styles::dim(),
    }
}

pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn good() -> Style {
        Style::new().green()
    }

    pub fn bad() -> Style {
        Style::new().red()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
