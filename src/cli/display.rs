// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the gleaner CLI.
//!
//! Posts and donors are drawn inside 80-column boxes. Colors come from the
//! OneDark or One Light palette, picked by `GLEANER_THEME`, then `COLORFGBG`,
//! then the macOS appearance setting, falling back to dark. Callers ask for a
//! [`Role`] (a handle, a match, a dollar figure) and never for a raw color.
//!
//! `NO_COLOR` or a non-TTY stdout turns all styling off; matches are then
//! shown in `[brackets]`.

use gleaner::records::PostKind;
use gleaner::search::Highlighter;
use std::sync::OnceLock;

/// Inner width of every box, border characters excluded.
pub const BOX_WIDTH: usize = 80;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// `GLEANER_THEME=light|dark` (or `l`/`d`).
    fn from_override(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" | "l" => Some(Theme::Light),
            "dark" | "d" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`). ANSI backgrounds
    /// 7 and 9-15 are light; 8 is dark gray.
    fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        Some(if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark })
    }

    #[cfg(target_os = "macos")]
    fn from_system() -> Option<Self> {
        let output = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .ok()?;
        // The key only exists in dark mode
        let dark = String::from_utf8_lossy(&output.stdout).contains("Dark");
        Some(if dark || !output.status.success() { Theme::Dark } else { Theme::Light })
    }

    #[cfg(not(target_os = "macos"))]
    fn from_system() -> Option<Self> {
        None
    }

    fn detect() -> Self {
        std::env::var("GLEANER_THEME")
            .ok()
            .and_then(|v| Theme::from_override(&v))
            .or_else(|| {
                std::env::var("COLORFGBG")
                    .ok()
                    .and_then(|v| Theme::from_colorfgbg(&v))
            })
            .or_else(Theme::from_system)
            .unwrap_or(Theme::Dark)
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

pub fn theme() -> Theme {
    *THEME.get_or_init(Theme::detect)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (OneDark / One Light, true color)
// ═══════════════════════════════════════════════════════════════════════════

/// What a piece of output is, rather than which color it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Border,
    Label,
    Handle,
    Match,
    Money,
    BigMoney,
    Muted,
    Ok,
    Warn,
    Error,
    Post,
    Reply,
    Repost,
}

type Rgb = (u8, u8, u8);

struct Palette {
    red: Rgb,
    green: Rgb,
    yellow: Rgb,
    blue: Rgb,
    magenta: Rgb,
    cyan: Rgb,
    gray: Rgb,
    bright_green: Rgb,
    bright_yellow: Rgb,
}

const ONE_DARK: Palette = Palette {
    red: (224, 108, 117),
    green: (152, 195, 121),
    yellow: (229, 192, 123),
    blue: (97, 175, 239),
    magenta: (198, 120, 221),
    cyan: (86, 182, 194),
    gray: (92, 99, 112),
    bright_green: (166, 226, 46),
    bright_yellow: (255, 215, 0),
};

const ONE_LIGHT: Palette = Palette {
    red: (228, 86, 73),
    green: (80, 161, 79),
    yellow: (193, 132, 1),
    blue: (64, 120, 242),
    magenta: (166, 38, 164),
    cyan: (1, 132, 188),
    gray: (160, 161, 167),
    bright_green: (68, 140, 39),
    bright_yellow: (152, 104, 1),
};

impl Palette {
    fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &ONE_DARK,
            Theme::Light => &ONE_LIGHT,
        }
    }

    fn rgb(&self, role: Role) -> Rgb {
        match role {
            Role::Border | Role::Muted => self.gray,
            Role::Label | Role::Handle => self.cyan,
            Role::Match | Role::Warn => self.yellow,
            Role::Money | Role::Ok | Role::Repost => self.green,
            Role::BigMoney => self.bright_green,
            Role::Error => self.red,
            Role::Post => self.blue,
            Role::Reply => self.magenta,
        }
    }
}

/// Foreground escape for `role` in the current theme.
pub fn fg(role: Role) -> String {
    let (r, g, b) = Palette::for_theme(theme()).rgb(role);
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// `text` in the role's color, plain when colors are off.
pub fn paint(role: Role, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", fg(role), text, RESET)
    } else {
        text.to_string()
    }
}

pub fn paint_bold(role: Role, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", BOLD, fg(role), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ANSI codes excluded.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Greedy word wrap on visible width. Words longer than `width` get a line
/// of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = visible_len(word);
            if len > 0 && len + 1 + word_len > width {
                lines.push(std::mem::take(&mut line));
                len = 0;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            line.push_str(word);
            len += word_len;
        }
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = fg(Role::Border);
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Wrapped, indented paragraph inside the box.
pub fn paragraph(text: &str) {
    for line in wrap(text, BOX_WIDTH - 4) {
        row(&format!("  {}", line));
    }
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = fg(Role::Border);
    let colored_label = paint_bold(Role::Label, label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section divider: ├──────────────────┤
pub fn section_mid() {
    let border = fg(Role::Border);
    println!("{}├{}┤{}", border, "─".repeat(BOX_WIDTH), RESET);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = fg(Role::Border);
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded post kind badge
pub fn kind_badge(kind: PostKind) -> String {
    if !use_colors() {
        return format!("[{}]", kind);
    }
    let role = match kind {
        PostKind::Post => Role::Post,
        PostKind::Reply => Role::Reply,
        PostKind::Repost => Role::Repost,
    };
    paint(role, &format!("[{}]", kind))
}

/// Dollar figure, brighter as it grows.
pub fn amount_colored(text: &str, amount: f64) -> String {
    let role = if amount > 500.0 {
        Role::BigMoney
    } else if amount > 100.0 {
        Role::Money
    } else {
        Role::Muted
    };
    paint_bold(role, text)
}

/// `text` with matches in bold yellow, or `[bracketed]` without colors.
pub fn terminal_highlight(text: &str, highlighter: &Highlighter) -> String {
    let colors = use_colors();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in highlighter.source_ranges(text) {
        out.push_str(&text[cursor..range.start]);
        if colors {
            out.push_str(&paint_bold(Role::Match, &text[range.clone()]));
        } else {
            out.push('[');
            out.push_str(&text[range.clone()]);
            out.push(']');
        }
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

pub fn success(message: &str) {
    eprintln!("{} {}", paint_bold(Role::Ok, "✓"), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", paint(Role::Warn, "⚠️"), message);
}

pub fn failure(message: &str) {
    eprintln!("{} {}", paint_bold(Role::Error, "❌"), message);
}

pub fn dim(text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", DIM, text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
