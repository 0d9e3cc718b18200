//! Math markup: tokenizer, syntax tree and parser.
//!
//! The markup is a small LaTeX-like language:
//! groups `{...}`, scripts `^` and `_`, commands such as `\frac{a}{b}`, `\sqrt{x}`,
//! placeholders (`\box`, `\widebox`, `\gap`), grids (`\pmatrix{...}`, `\bmatrix{...}`,
//! `\table{...}` with `&` and `\\` separators), `\mat` and the symbols of [`symbols::lookup`].
//!
//! Parsing never fails. Malformed input is recovered and each recovery is recorded as a [`Note`].
use core::fmt;

pub mod ast;
#[cfg(feature = "diag")]
pub mod diag;
pub mod lex;
mod parse;
pub mod symbols;

pub use ast::{AtomType, MatrixDelim, Node, PlaceholderStyle};
pub use parse::{MAX_NESTING, parse, parse_with_notes};

/// Position into an input string
pub type Pos = usize;

/// Byte span into an input string
/// (first pos, one past last pos)
pub type Span = (Pos, Pos);

/// A recovery performed by the parser
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub span: Span,
    pub kind: NoteKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NoteKind {
    /// Command not in the symbol table, rendered as its literal name
    UnknownCommand(String),
    /// Script without a preceding node, dropped
    OrphanScript,
    /// Command or script without its argument
    MissingArgument(String),
    /// `}` without a matching `{`, skipped
    UnmatchedClose,
    /// `{` never closed, the group ends at the end of input
    UnclosedGroup,
    /// Bracket without a matching counterpart, rendered as a plain atom
    UnbalancedBracket(char),
    /// Row break outside of a grid, skipped
    StrayRowBreak,
    /// Construct nested deeper than [`MAX_NESTING`], flattened or dropped
    TooDeep,
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteKind::UnknownCommand(name) => {
                write!(f, "unknown command \\{}, rendered as text", name)
            }
            NoteKind::OrphanScript => write!(f, "script without base, dropped"),
            NoteKind::MissingArgument(what) => write!(f, "missing argument for {}", what),
            NoteKind::UnmatchedClose => write!(f, "unmatched closing brace, skipped"),
            NoteKind::UnclosedGroup => write!(f, "unclosed group"),
            NoteKind::UnbalancedBracket(c) => write!(f, "unbalanced bracket '{}'", c),
            NoteKind::StrayRowBreak => write!(f, "row break outside of a grid, skipped"),
            NoteKind::TooDeep => write!(f, "nesting deeper than {} levels, flattened", MAX_NESTING),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}: {}", self.span.0, self.span.1, self.kind)
    }
}
