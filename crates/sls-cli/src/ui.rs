use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

/// ANSI color for a message or cell tone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tone {
    Good,
    Caution,
    Bad,
}

impl Tone {
    const fn code(self) -> &'static str {
        match self {
            Self::Good => "32",
            Self::Caution => "33",
            Self::Bad => "31",
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let table_color = match flags.color {
        ColorMode::Always => flags.format == OutputFormat::Table,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty
                && flags.format == OutputFormat::Table
                && !flags.quiet
                && std::env::var_os("NO_COLOR").is_none()
        }
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
    })
}

/// Wrap `text` in the tone's color when `enabled`.
#[must_use]
pub fn paint(text: &str, tone: Tone, enabled: bool) -> String {
    if enabled {
        format!("\u{1b}[{}m{text}\u{1b}[0m", tone.code())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_is_plain_when_disabled() {
        assert_eq!(paint("ok", Tone::Good, false), "ok");
    }

    #[test]
    fn paint_wraps_in_ansi_codes() {
        assert_eq!(paint("no", Tone::Bad, true), "\u{1b}[31mno\u{1b}[0m");
    }
}
