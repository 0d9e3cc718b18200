//! Rich reporting of parser recoveries with [`miette`].
//!
//! Only available with the `diag` feature.
//!
//! ```
//! let src = "\\frac{a}{b} + \\foo";
//! let (_, notes) = mathbox::math::parse_with_notes(src);
//! let diags = mathbox::math::diag::diagnostics(src, &notes);
//! assert_eq!(diags.len(), 1);
//! ```
use core::fmt;

use super::Note;

/// A parser note bundled with its source, reportable through [`miette`]
#[derive(Debug, Clone)]
pub struct Diagnostic {
    note: Note,
    source: String,
}

impl Diagnostic {
    pub fn new(note: Note, source: impl Into<String>) -> Self {
        Diagnostic {
            note,
            source: source.into(),
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }
}

/// Build a diagnostic for each note
pub fn diagnostics(source: &str, notes: &[Note]) -> Vec<Diagnostic> {
    notes
        .iter()
        .map(|n| Diagnostic::new(n.clone(), source))
        .collect()
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.note.kind)
    }
}

impl std::error::Error for Diagnostic {}

impl miette::Diagnostic for Diagnostic {
    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Warning)
    }

    fn labels<'a>(&'a self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + 'a>> {
        let (start, end) = self.note.span;
        let start = start.min(self.source.len());
        let len = end.min(self.source.len()).saturating_sub(start);
        let labeled_span =
            miette::LabeledSpan::new(Some(self.note.kind.to_string()), start, len);
        Some(Box::new(std::iter::once(labeled_span)))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source as &dyn miette::SourceCode)
    }
}
