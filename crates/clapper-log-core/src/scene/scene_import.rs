//! Line-oriented parsing of pasted or uploaded scene schedules.
//!
//! Accepted line shapes (leading `s` optional and case-insensitive, separator
//! `-` or `ー` optional):
//!
//! ```text
//! 03 - Kitchen argument
//! s04ー Rooftop
//! 05~08 - Montage
//! ```
//!
//! A line whose title would be empty is skipped, as is anything else.

use crate::scene::SceneId;

/// One parsed schedule entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedScene {
    /// Sequential code, `sNN`.
    pub code: String,
    /// Free-text scene title.
    pub title: String,
}

impl ImportedScene {
    /// Pool display id for this entry.
    pub fn scene_id(&self) -> SceneId {
        SceneId::new(format!("{} {}", self.code, self.title))
    }
}

/// Parse raw multi-line text into a batch of `{code, title}` entries.
pub fn parse_scene_list(raw: &str) -> Vec<ImportedScene> {
    let mut scenes = Vec::new();

    for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let Some((start, rest)) = take_code(line) else {
            continue;
        };

        if let Some(after_tilde) = rest.strip_prefix('~')
            && let Some((end, rest)) = take_code(after_tilde)
            && let Some(title) = take_title(rest)
        {
            for number in start..=end {
                scenes.push(ImportedScene {
                    code: SceneId::sequential(number).to_string(),
                    title: title.to_string(),
                });
            }
            continue;
        }

        if let Some(title) = take_title(rest) {
            scenes.push(ImportedScene {
                code: SceneId::sequential(start).to_string(),
                title: title.to_string(),
            });
        }
    }

    scenes
}

/// Read an optional `s`/`S` followed by exactly two digits.
fn take_code(input: &str) -> Option<(u32, &str)> {
    let input = input
        .strip_prefix('s')
        .or_else(|| input.strip_prefix('S'))
        .unwrap_or(input);

    let digits = input.get(..2)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let number = digits.parse().ok()?;
    Some((number, &input[2..]))
}

/// Skip whitespace and one optional separator; the remainder must be non-empty.
///
/// A separator with nothing after it is the title itself, so `03 -` keeps a
/// scene titled `-` rather than losing the line.
fn take_title(input: &str) -> Option<&str> {
    let input = input.trim_start();
    let after_separator = input
        .strip_prefix('-')
        .or_else(|| input.strip_prefix('ー'))
        .map(str::trim_start);

    match after_separator {
        Some(title) if !title.is_empty() => Some(title),
        _ if !input.is_empty() => Some(input),
        _ => None,
    }
}
