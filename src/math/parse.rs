use super::ast::{AtomType, MatrixDelim, Node, PlaceholderStyle};
use super::lex::{self, Token, TokenKind};
use super::{Note, NoteKind, Span, symbols};

pub const BOX_WIDTH_FACTOR: f32 = 1.0;
pub const WIDEBOX_WIDTH_FACTOR: f32 = 2.2;
pub const GAP_WIDTH_FACTOR: f32 = 1.5;

/// Deepest nesting of groups, arguments, brackets and grids.
/// Deeper constructs are flattened into the enclosing level.
pub const MAX_NESTING: usize = 32;

/// Parse a markup string into a sequence of nodes
pub fn parse(input: &str) -> Vec<Node> {
    parse_with_notes(input).0
}

/// Parse a markup string, also returning the recoveries performed on the way
pub fn parse_with_notes(input: &str) -> (Vec<Node>, Vec<Note>) {
    let tokens = lex::tokenize(input);
    let mut parser = Parser::default();
    let mut cursor = TokenCursor::new(&tokens);
    let nodes = parser.parse_level(&mut cursor);
    (nodes, parser.notes)
}

/// Cursor over a token slice.
/// Sub-spans (bracket content, grid cells) are parsed with their own cursor.
#[derive(Debug, Clone)]
struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    fn rest(&self) -> &'a [Token] {
        &self.tokens[self.pos..]
    }

    fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.tokens.len());
    }
}

#[derive(Debug, Default)]
struct Parser {
    notes: Vec<Note>,
    depth: usize,
}

impl Parser {
    fn note(&mut self, span: Span, kind: NoteKind) {
        log::debug!("parse recovery at {}..{}: {}", span.0, span.1, kind);
        self.notes.push(Note { span, kind });
    }

    fn too_deep(&self) -> bool {
        self.depth >= MAX_NESTING
    }

    /// Run `f` one nesting level deeper
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    /// Parse a whole token slice. Unmatched closing braces are skipped.
    fn parse_level(&mut self, cur: &mut TokenCursor) -> Vec<Node> {
        let mut nodes = Vec::new();
        loop {
            self.parse_seq(cur, &mut nodes);
            match cur.next() {
                Some(tok) => self.note(tok.span(), NoteKind::UnmatchedClose),
                None => break,
            }
        }
        nodes
    }

    /// Parse nodes until a closing brace (not consumed) or the end of input
    fn parse_seq(&mut self, cur: &mut TokenCursor, nodes: &mut Vec<Node>) {
        while let Some(tok) = cur.peek() {
            match tok.kind() {
                TokenKind::BraceClose => break,
                TokenKind::Sup | TokenKind::Sub => {
                    let is_sup = matches!(tok.kind(), TokenKind::Sup);
                    cur.next();
                    let Some(script) = self.parse_atom(cur) else {
                        self.note(tok.span(), NoteKind::MissingArgument("script".into()));
                        continue;
                    };
                    match nodes.pop() {
                        Some(base)
                            if self.depth + 1 + base.depth().max(script.depth()) > MAX_NESTING =>
                        {
                            self.note(tok.span(), NoteKind::TooDeep);
                            nodes.push(base);
                        }
                        Some(base) => nodes.push(attach_script(base, script, is_sup)),
                        None => self.note(tok.span(), NoteKind::OrphanScript),
                    }
                }
                TokenKind::RowBreak => {
                    cur.next();
                    self.note(tok.span(), NoteKind::StrayRowBreak);
                }
                TokenKind::Char(c) if symbols::closing_bracket(*c).is_some() => {
                    cur.next();
                    let node = self.parse_bracket(cur, tok, *c);
                    nodes.push(node);
                }
                _ => {
                    if let Some(node) = self.parse_atom(cur) {
                        nodes.push(node);
                    }
                }
            }
        }
    }

    /// Parse a single token or a braced group.
    /// Returns `None` without consuming anything if the next token can't start a node.
    fn parse_atom(&mut self, cur: &mut TokenCursor) -> Option<Node> {
        let tok = cur.peek()?;
        let node = match tok.kind() {
            TokenKind::BraceOpen => {
                cur.next();
                if self.too_deep() {
                    self.note(tok.span(), NoteKind::TooDeep);
                    return Some(Node::Group(Vec::new()));
                }
                self.nested(|p| p.parse_group(cur, tok.span()))
            }
            TokenKind::Command(name) => {
                cur.next();
                self.parse_command(cur, tok.span(), name)
            }
            TokenKind::Char(c) => {
                cur.next();
                let (ch, atom) = symbols::literal(*c);
                Node::Char {
                    ch,
                    atom,
                    upright: false,
                }
            }
            TokenKind::BraceClose | TokenKind::Sup | TokenKind::Sub | TokenKind::RowBreak => {
                return None;
            }
        };
        Some(node)
    }

    fn parse_group(&mut self, cur: &mut TokenCursor, open: Span) -> Node {
        let mut children = Vec::new();
        self.parse_seq(cur, &mut children);
        if cur.next().is_none() {
            self.note(open, NoteKind::UnclosedGroup);
        }
        Node::Group(children)
    }

    fn required_argument(&mut self, cur: &mut TokenCursor, span: Span, name: &str) -> Node {
        if self.too_deep() {
            // the argument tokens are parsed as siblings
            self.note(span, NoteKind::TooDeep);
            return Node::Group(Vec::new());
        }
        match self.nested(|p| p.parse_atom(cur)) {
            Some(node) => node,
            None => {
                self.note(span, NoteKind::MissingArgument(name.to_string()));
                Node::Group(Vec::new())
            }
        }
    }

    fn parse_command(&mut self, cur: &mut TokenCursor, span: Span, name: &str) -> Node {
        match name {
            "frac" => {
                let num = self.required_argument(cur, span, name);
                let den = self.required_argument(cur, span, name);
                Node::Frac {
                    num: Box::new(num),
                    den: Box::new(den),
                }
            }
            "sqrt" => Node::Sqrt(Box::new(self.required_argument(cur, span, name))),
            "box" => placeholder(BOX_WIDTH_FACTOR, PlaceholderStyle::Bordered),
            "widebox" => placeholder(WIDEBOX_WIDTH_FACTOR, PlaceholderStyle::Bordered),
            "gap" => placeholder(GAP_WIDTH_FACTOR, PlaceholderStyle::Underline),
            "pmatrix" => Node::Matrix {
                delim: MatrixDelim::Paren,
                rows: self.parse_grid(cur, span, name),
            },
            "bmatrix" => Node::Matrix {
                delim: MatrixDelim::Bracket,
                rows: self.parse_grid(cur, span, name),
            },
            "table" => Node::Table {
                rows: self.parse_grid(cur, span, name),
            },
            "mat" => {
                let cell = || Node::Group(vec![placeholder(BOX_WIDTH_FACTOR, PlaceholderStyle::Bordered)]);
                Node::Matrix {
                    delim: MatrixDelim::Paren,
                    rows: vec![vec![cell(), cell()], vec![cell(), cell()]],
                }
            }
            _ => match symbols::lookup(name) {
                Some((ch, atom)) => Node::Char {
                    ch,
                    atom,
                    upright: true,
                },
                None => {
                    self.note(span, NoteKind::UnknownCommand(name.to_string()));
                    Node::Group(
                        name.chars()
                            .map(|ch| Node::Char {
                                ch,
                                atom: AtomType::Ord,
                                upright: true,
                            })
                            .collect(),
                    )
                }
            },
        }
    }

    /// Read a braced group and split it into rows and cells.
    /// Ragged rows are padded with empty cells.
    fn parse_grid(&mut self, cur: &mut TokenCursor, span: Span, name: &str) -> Vec<Vec<Node>> {
        if !matches!(cur.peek().map(Token::kind), Some(TokenKind::BraceOpen)) {
            self.note(span, NoteKind::MissingArgument(name.to_string()));
            return Vec::new();
        }
        if self.too_deep() {
            self.note(span, NoteKind::TooDeep);
            return Vec::new();
        }
        cur.next();
        let rest = cur.rest();
        let body = match group_end(rest) {
            Some(end) => {
                cur.advance(end + 1);
                &rest[..end]
            }
            None => {
                self.note(span, NoteKind::UnclosedGroup);
                cur.advance(rest.len());
                rest
            }
        };

        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut start = 0;
        let mut depth = 0usize;
        for (i, tok) in body.iter().enumerate() {
            match tok.kind() {
                TokenKind::BraceOpen => depth += 1,
                TokenKind::BraceClose => depth = depth.saturating_sub(1),
                TokenKind::Char('&') if depth == 0 => {
                    row.push(self.parse_cell(&body[start..i]));
                    start = i + 1;
                }
                TokenKind::RowBreak if depth == 0 => {
                    row.push(self.parse_cell(&body[start..i]));
                    rows.push(std::mem::take(&mut row));
                    start = i + 1;
                }
                _ => {}
            }
        }
        let last = &body[start..];
        if !last.is_empty() || !row.is_empty() {
            row.push(self.parse_cell(last));
            rows.push(row);
        }

        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize_with(cols, || Node::Group(Vec::new()));
        }
        rows
    }

    fn parse_cell(&mut self, tokens: &[Token]) -> Node {
        let mut cur = TokenCursor::new(tokens);
        Node::Group(self.nested(|p| p.parse_level(&mut cur)))
    }

    /// Balanced scan: the bracket content up to the matching bracket becomes a delimited node.
    fn parse_bracket(&mut self, cur: &mut TokenCursor, tok: &Token, open: char) -> Node {
        let close = symbols::closing_bracket(open).unwrap_or(open);
        let rest = cur.rest();
        let matched = if self.too_deep() {
            self.note(tok.span(), NoteKind::TooDeep);
            None
        } else {
            bracket_match(rest, open, close)
        };
        match matched {
            Some(end) => {
                cur.advance(end + 1);
                let mut inner = TokenCursor::new(&rest[..end]);
                let children = self.nested(|p| p.parse_level(&mut inner));
                Node::Delim {
                    open,
                    close,
                    children,
                }
            }
            None => {
                if !self.too_deep() {
                    self.note(tok.span(), NoteKind::UnbalancedBracket(open));
                }
                Node::Char {
                    ch: open,
                    atom: AtomType::Open,
                    upright: false,
                }
            }
        }
    }
}

fn placeholder(width_factor: f32, style: PlaceholderStyle) -> Node {
    Node::Placeholder {
        width_factor,
        style,
    }
}

fn attach_script(base: Node, script: Node, is_sup: bool) -> Node {
    match (base, is_sup) {
        (Node::Sub { base, sub }, true) => Node::SupSub {
            base,
            sup: Box::new(script),
            sub,
        },
        (Node::Sup { base, sup }, false) => Node::SupSub {
            base,
            sup,
            sub: Box::new(script),
        },
        (base, true) => Node::Sup {
            base: Box::new(base),
            sup: Box::new(script),
        },
        (base, false) => Node::Sub {
            base: Box::new(base),
            sub: Box::new(script),
        },
    }
}

/// Index of the brace closing the current group
fn group_end(tokens: &[Token]) -> Option<usize> {
    let mut depth = 0usize;
    for (i, tok) in tokens.iter().enumerate() {
        match tok.kind() {
            TokenKind::BraceOpen => depth += 1,
            TokenKind::BraceClose if depth == 0 => return Some(i),
            TokenKind::BraceClose => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Index of the bracket matching an already consumed `open`.
/// Only brackets of the same kind are counted, through the whole remaining stream.
fn bracket_match(tokens: &[Token], open: char, close: char) -> Option<usize> {
    let mut nested = 0usize;
    for (i, tok) in tokens.iter().enumerate() {
        match tok.kind() {
            TokenKind::Char(c) if *c == open => nested += 1,
            TokenKind::Char(c) if *c == close => {
                if nested == 0 {
                    return Some(i);
                }
                nested -= 1;
            }
            _ => {}
        }
    }
    None
}
