//! UI context for environment detection and configuration.

use std::io::{self, IsTerminal};

use crate::helpers::OutputFormat;

use super::mode::OutputMode;

const FALLBACK_WIDTH: usize = 80;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

/// What we know about the stream being written to.
#[derive(Debug, Clone, Copy)]
struct Terminal {
    is_tty: bool,
    dumb: bool,
    no_color_env: bool,
    width: Option<usize>,
}

impl Terminal {
    fn detect(is_tty: bool, fd: i32) -> Self {
        Self {
            is_tty,
            dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            width: columns_env().or_else(|| if is_tty { ioctl_width(fd) } else { None }),
        }
    }
}

impl UiContext {
    /// Context for command output on stdout.
    ///
    /// `json_flag` and `format` come from the command; `no_color_flag`
    /// and `ascii_flag` are the global `--no-color` and `--ascii`.
    pub fn from_env(
        json_flag: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let term = Terminal::detect(io::stdout().is_terminal(), 1);
        Self::resolve(term, json_flag, format, no_color_flag, ascii_flag)
    }

    /// Context for error reports, which go to stderr.
    pub fn for_stderr(no_color_flag: bool, ascii_flag: bool) -> Self {
        let term = Terminal::detect(io::stderr().is_terminal(), 2);
        Self::resolve(term, false, None, no_color_flag, ascii_flag)
    }

    fn resolve(
        term: Terminal,
        json_flag: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self {
            color: term.is_tty && !term.dumb && !term.no_color_env && !no_color_flag,
            unicode: !ascii_flag,
            width: term.width.unwrap_or(FALLBACK_WIDTH),
            mode: OutputMode::resolve(json_flag, format, term.is_tty, term.dumb),
        }
    }
}

fn columns_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
}

#[cfg(unix)]
fn ioctl_width(fd: i32) -> Option<usize> {
    let mut winsize = std::mem::MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ only writes into the provided winsize struct.
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
    if result != 0 {
        return None;
    }
    // SAFETY: ioctl returned success, so winsize was initialized.
    let ws = unsafe { winsize.assume_init() };
    (ws.ws_col > 0).then_some(ws.ws_col as usize)
}

#[cfg(not(unix))]
fn ioctl_width(_fd: i32) -> Option<usize> {
    None
}
