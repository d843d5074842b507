//! Display sanitization for notebook text.
//!
//! Cell sources and comment lines come from an arbitrary file on disk. They
//! are drawn straight into the terminal buffer, so escape sequences and
//! control characters must not survive: a stray `ESC [2J` in a cell would
//! otherwise rewrite the screen.

use std::borrow::Cow;
use std::iter::{self, Peekable};

const ESC: char = '\x1b';
const BEL: char = '\x07';
const TAB_WIDTH: usize = 4;

/// Sanitize notebook text for terminal display.
///
/// Strips ANSI escape sequences (CSI, OSC, and two-byte forms), C0/C1
/// control characters and DEL. Keeps `\n`, drops `\r` (so CRLF sources
/// render as plain lines) and expands `\t` to spaces.
///
/// ```
/// use nbdeck_types::sanitize_display_text;
///
/// assert_eq!(sanitize_display_text("df.head()"), "df.head()");
/// assert_eq!(sanitize_display_text("a\x1b[31mb\r\n"), "ab\n");
/// ```
#[must_use]
pub fn sanitize_display_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(needs_rewrite) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ESC => skip_escape(&mut chars),
            '\u{009b}' => skip_csi(&mut chars),
            '\n' => out.push('\n'),
            '\t' => out.extend(iter::repeat_n(' ', TAB_WIDTH)),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn needs_rewrite(c: char) -> bool {
    c != '\n' && c.is_control()
}

fn skip_escape<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    match chars.peek() {
        Some('[') => {
            chars.next();
            skip_csi(chars);
        }
        Some(']' | 'P' | '^' | '_') => {
            chars.next();
            // Runs until BEL or ST (ESC \).
            while let Some(c) = chars.next() {
                if c == BEL {
                    break;
                }
                if c == ESC && chars.peek() == Some(&'\\') {
                    chars.next();
                    break;
                }
            }
        }
        Some('(' | ')' | '*' | '+' | '#') => {
            chars.next();
            chars.next();
        }
        Some(_) => {
            chars.next();
        }
        None => {}
    }
}

fn skip_csi<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(&c) = chars.peek() {
        if ('\x40'..='\x7e').contains(&c) {
            chars.next();
            return;
        }
        if ('\x20'..='\x3f').contains(&c) {
            chars.next();
        } else {
            return;
        }
    }
}
