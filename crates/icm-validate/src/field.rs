//! The unit of matching and validation.

use icm_model::{FieldError, FieldKind, Note};
use serde::Serialize;

/// Byte range of a matched value within the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A field already processed within the current pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub kind: FieldKind,
    pub value: String,
    /// Length and character class are correct. Says nothing about lookups.
    pub well_formed: bool,
}

/// Siblings resolved before the current field, most recent first.
pub type Siblings<'s> = &'s [Resolved];

pub fn sibling<'s>(siblings: Siblings<'s>, kind: FieldKind) -> Option<&'s Resolved> {
    siblings.iter().find(|resolved| resolved.kind == kind)
}

/// Outcome of a field's semantic check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCheck {
    pub error: Option<FieldError>,
    pub notes: Vec<Note>,
}

impl FieldCheck {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failed(error: FieldError) -> Self {
        Self {
            error: Some(error),
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }
}

pub trait Field {
    fn kind(&self) -> FieldKind;

    fn expected_len(&self) -> usize {
        self.kind().expected_len()
    }

    /// Locates the field's value in `text` starting at byte `from`.
    fn find(&self, text: &str, from: usize) -> Option<Span> {
        scan(text, from, self.kind())
    }

    fn validate(&self, value: &str, siblings: Siblings<'_>) -> FieldCheck;
}

/// Skips separator characters, then takes up to `kind.expected_len()`
/// characters of the field's class. `None` if not a single one matches.
pub fn scan(text: &str, from: usize, kind: FieldKind) -> Option<Span> {
    let rest = text.get(from..)?;
    let skipped = rest
        .find(|c: char| c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    let start = from + skipped;
    let class = kind.char_class();
    let taken: usize = text[start..]
        .chars()
        .take(kind.expected_len())
        .take_while(|&c| class.matches(c))
        .map(char::len_utf8)
        .sum();
    (taken > 0).then_some(Span {
        start,
        end: start + taken,
    })
}

/// Format error when `value` does not have the length and character class
/// of `kind`.
pub fn check_format(kind: FieldKind, value: &str) -> Option<FieldError> {
    let class = kind.char_class();
    let well_formed =
        value.chars().count() == kind.expected_len() && value.chars().all(|c| class.matches(c));
    (!well_formed).then(|| FieldError::Format {
        kind,
        found: value.to_string(),
    })
}
