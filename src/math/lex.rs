use std::iter::FusedIterator;

use super::{Pos, Span};
use crate::input::Cursor;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Backslash followed by a run of ASCII letters
    Command(String),
    /// Escaped double backslash
    RowBreak,
    BraceOpen,
    BraceClose,
    /// `^`
    Sup,
    /// `_`
    Sub,
    /// Any other character
    Char(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token(pub Span, pub TokenKind);

impl Token {
    pub fn span(&self) -> Span {
        self.0
    }

    pub fn kind(&self) -> &TokenKind {
        &self.1
    }
}

/// Tokenize `input`. Never fails: whitespace and dangling backslashes are skipped.
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(Cursor::new(input.chars())).collect()
}

#[derive(Debug, Clone)]
pub struct Tokenizer<I> {
    cursor: Cursor<I>,
}

impl<I> Tokenizer<I> {
    pub(crate) fn new(cursor: Cursor<I>) -> Tokenizer<I> {
        Tokenizer { cursor }
    }
}

impl<I> Iterator for Tokenizer<I>
where
    I: Iterator<Item = char> + Clone,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            while self.cursor.first().is_some_and(char::is_whitespace) {
                self.cursor.next();
            }
            let pos = self.cursor.pos();
            let c = self.cursor.next()?;
            if let Some(kind) = self.token_kind(c, pos) {
                let end = self.cursor.pos();
                return Some(Token((pos, end), kind));
            }
        }
    }
}

impl<I> FusedIterator for Tokenizer<I> where I: FusedIterator<Item = char> + Clone {}

impl<I> Tokenizer<I>
where
    I: Iterator<Item = char> + Clone,
{
    fn token_kind(&mut self, c: char, pos: Pos) -> Option<TokenKind> {
        match c {
            '\\' => self.escape(pos),
            '^' => Some(TokenKind::Sup),
            '_' => Some(TokenKind::Sub),
            '{' => Some(TokenKind::BraceOpen),
            '}' => Some(TokenKind::BraceClose),
            c => Some(TokenKind::Char(c)),
        }
    }

    fn escape(&mut self, pos: Pos) -> Option<TokenKind> {
        match self.cursor.first() {
            Some('\\') => {
                self.cursor.next();
                Some(TokenKind::RowBreak)
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let mut word = String::new();
                self.cursor.eat_while(|c| c.is_ascii_alphabetic(), &mut word);
                Some(TokenKind::Command(word))
            }
            _ => {
                log::debug!("skipping lone backslash at {}", pos);
                None
            }
        }
    }
}
