//! # Text Counting
//!
//! Line, word, byte, and character counting over an input document,
//! modeled after the POSIX `wc` utility. Independent of the JSON
//! validator; the `count` subcommand is its only consumer.

/// Tallies for a single input document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    /// Number of lines
    pub lines: u64,
    /// Number of words, where a word is a maximal run of alphanumeric
    /// characters
    pub words: u64,
    /// Number of raw bytes
    pub bytes: u64,
    /// Number of characters
    pub chars: u64,
    /// Number of alphanumeric characters
    pub alnum: u64,
}

/// Which count columns to print, mirroring the `-l -w -c -m -u` flags.
#[derive(Debug, Default, Clone, Copy)]
pub struct Selection {
    /// Line count column
    pub lines: bool,
    /// Word count column
    pub words: bool,
    /// Byte count column
    pub bytes: bool,
    /// Character count column
    pub chars: bool,
    /// Alphanumeric-only count column
    pub alnum: bool,
}

impl Selection {
    /// With no explicit column flags, fall back to lines, words, and
    /// bytes. The alphanumeric column alone does not suppress the default
    /// set.
    #[must_use]
    pub fn or_default(self) -> Self {
        if self.lines || self.words || self.bytes || self.chars {
            self
        } else {
            Self {
                lines: true,
                words: true,
                bytes: true,
                ..self
            }
        }
    }
}

/// Count lines, words, bytes, and characters in `input`.
///
/// The byte count always reflects the raw input; invalid UTF-8 sequences
/// are replaced before the character-level counts are taken.
#[must_use]
pub fn scan(input: &[u8]) -> Counts {
    let text = String::from_utf8_lossy(input);
    Counts {
        lines: text.lines().count() as u64,
        words: text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .count() as u64,
        bytes: input.len() as u64,
        chars: text.chars().count() as u64,
        alnum: text.chars().filter(|c| c.is_alphanumeric()).count() as u64,
    }
}

/// Render the selected columns right-aligned to width 8 in the fixed
/// order lines, words, bytes, chars, alnum, followed by the input name
/// when counting a file, with leading whitespace stripped.
#[must_use]
pub fn format_row(
    counts: &Counts,
    selection: Selection,
    name: Option<&str>,
) -> String {
    let columns = [
        (selection.lines, counts.lines),
        (selection.words, counts.words),
        (selection.bytes, counts.bytes),
        (selection.chars, counts.chars),
        (selection.alnum, counts.alnum),
    ];

    let mut row = String::new();
    for (enabled, value) in columns {
        if enabled {
            row.push_str(&format!("{value:8}"));
        }
    }
    if let Some(name) = name {
        row.push(' ');
        row.push_str(name);
    }

    row.trim_start().to_string()
}
