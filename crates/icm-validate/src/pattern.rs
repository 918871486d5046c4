//! Accepted input shapes.

use std::fmt;

use icm_model::{Decoders, FieldKind};
use serde::Serialize;

use crate::field::{Field, Span};
use crate::fields::field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    ContainerCodeWithSizeType,
    ContainerCode,
    OwnerAndCategory,
    Owner,
    SizeType,
}

impl PatternKind {
    /// Priority order used when no pattern is forced.
    pub const CANONICAL: [PatternKind; 5] = [
        Self::ContainerCodeWithSizeType,
        Self::ContainerCode,
        Self::OwnerAndCategory,
        Self::Owner,
        Self::SizeType,
    ];

    pub const fn field_kinds(self) -> &'static [FieldKind] {
        use FieldKind::{
            CheckDigit, EquipmentCategory, HeightWidth, Length, Owner, Serial, TypeGroup,
        };
        match self {
            Self::ContainerCodeWithSizeType => &[
                Owner,
                EquipmentCategory,
                Serial,
                CheckDigit,
                Length,
                HeightWidth,
                TypeGroup,
            ],
            Self::ContainerCode => &[Owner, EquipmentCategory, Serial, CheckDigit],
            Self::OwnerAndCategory => &[Owner, EquipmentCategory],
            Self::Owner => &[Owner],
            Self::SizeType => &[Length, HeightWidth, TypeGroup],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ContainerCodeWithSizeType => "container code with size and type",
            Self::ContainerCode => "container code",
            Self::OwnerAndCategory => "owner code and equipment category id",
            Self::Owner => "owner code",
            Self::SizeType => "size and type",
        }
    }

    pub fn build<'a>(self, decoders: Decoders<'a>) -> Pattern<'a> {
        Pattern::new(
            self,
            self.field_kinds()
                .iter()
                .map(|&kind| field(kind, decoders))
                .collect(),
        )
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered fields making up one accepted shape.
pub struct Pattern<'a> {
    kind: PatternKind,
    fields: Vec<Box<dyn Field + 'a>>,
}

impl<'a> Pattern<'a> {
    pub fn new(kind: PatternKind, fields: Vec<Box<dyn Field + 'a>>) -> Self {
        Self { kind, fields }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn fields(&self) -> &[Box<dyn Field + 'a>] {
        &self.fields
    }

    /// Greedy left-to-right match: each field searches the text left over
    /// by the fields before it. A field that finds nothing consumes nothing.
    pub fn match_spans(&self, text: &str) -> Vec<Option<Span>> {
        self.walk(text).0
    }

    /// Every field matched exactly its expected length.
    pub fn fully_matches(&self, text: &str) -> bool {
        self.fields
            .iter()
            .zip(self.match_spans(text))
            .all(|(field, span)| span.is_some_and(|span| span.len() == field.expected_len()))
    }

    /// Text after the last matched field, starting at its first letter or
    /// digit. `None` when only separators are left.
    pub fn trailing_text<'t>(&self, text: &'t str) -> Option<&'t str> {
        let (_, consumed) = self.walk(text);
        let rest = text[consumed..]
            .trim_start_matches(|c: char| !c.is_ascii_alphanumeric())
            .trim_end();
        (!rest.is_empty()).then_some(rest)
    }

    fn walk(&self, text: &str) -> (Vec<Option<Span>>, usize) {
        let mut cursor = 0;
        let spans = self
            .fields
            .iter()
            .map(|field| {
                let span = field.find(text, cursor);
                if let Some(span) = span {
                    cursor = span.end;
                }
                span
            })
            .collect();
        (spans, cursor)
    }
}

impl fmt::Debug for Pattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("kind", &self.kind)
            .field(
                "fields",
                &self.fields.iter().map(|field| field.kind()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// The five shapes in priority order: full code with size/type, full code,
/// owner and category, owner alone, size/type alone.
pub fn canonical_patterns(decoders: Decoders<'_>) -> Vec<Pattern<'_>> {
    PatternKind::CANONICAL
        .iter()
        .map(|kind| kind.build(decoders))
        .collect()
}
