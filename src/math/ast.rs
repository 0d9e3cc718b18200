/// Spacing class of a math atom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomType {
    /// Ordinary symbol (letters, digits, groups)
    Ord,
    /// Binary operator
    Bin,
    /// Relation
    Rel,
    /// Opening bracket
    Open,
    /// Closing bracket
    Close,
    /// Punctuation
    Punct,
    /// Inner formula (e.g. ellipsis)
    Inner,
    /// Large operator
    Op,
    /// Placeholder box
    Box,
    /// Cell separator
    Sep,
}

/// Visual style of a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// Rectangle outline
    Bordered,
    /// Single line along the bottom edge
    Underline,
}

/// Brackets around a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixDelim {
    Paren,
    Bracket,
}

impl MatrixDelim {
    pub const fn chars(&self) -> (char, char) {
        match self {
            MatrixDelim::Paren => ('(', ')'),
            MatrixDelim::Bracket => ('[', ']'),
        }
    }
}

/// A node of the parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Char {
        ch: char,
        atom: AtomType,
        /// Never italicized, even in math mode
        upright: bool,
    },
    Group(Vec<Node>),
    Frac {
        num: Box<Node>,
        den: Box<Node>,
    },
    Sqrt(Box<Node>),
    Sup {
        base: Box<Node>,
        sup: Box<Node>,
    },
    Sub {
        base: Box<Node>,
        sub: Box<Node>,
    },
    SupSub {
        base: Box<Node>,
        sup: Box<Node>,
        sub: Box<Node>,
    },
    /// Content enclosed by a pair of balanced brackets
    Delim {
        open: char,
        close: char,
        children: Vec<Node>,
    },
    Placeholder {
        width_factor: f32,
        style: PlaceholderStyle,
    },
    /// Grid of cells wrapped in brackets. Each cell is a [`Node::Group`].
    Matrix {
        delim: MatrixDelim,
        rows: Vec<Vec<Node>>,
    },
    /// Grid of cells with borders. Each cell is a [`Node::Group`].
    Table {
        rows: Vec<Vec<Node>>,
    },
}

impl Node {
    pub fn ord(ch: char) -> Node {
        Node::Char {
            ch,
            atom: AtomType::Ord,
            upright: false,
        }
    }

    /// The spacing class of this node
    pub fn atom(&self) -> AtomType {
        match self {
            Node::Char { atom, .. } => *atom,
            Node::Sup { base, .. } | Node::Sub { base, .. } | Node::SupSub { base, .. } => {
                base.atom()
            }
            Node::Placeholder { .. } => AtomType::Box,
            Node::Group(..)
            | Node::Frac { .. }
            | Node::Sqrt(..)
            | Node::Delim { .. }
            | Node::Matrix { .. }
            | Node::Table { .. } => AtomType::Ord,
        }
    }

    /// Nesting depth of the tree rooted at this node. Leaves have depth 1.
    pub fn depth(&self) -> usize {
        1 + match self {
            Node::Char { .. } | Node::Placeholder { .. } => 0,
            Node::Group(children) | Node::Delim { children, .. } => max_depth(children.iter()),
            Node::Frac { num, den } => num.depth().max(den.depth()),
            Node::Sqrt(child) => child.depth(),
            Node::Sup { base, sup } => base.depth().max(sup.depth()),
            Node::Sub { base, sub } => base.depth().max(sub.depth()),
            Node::SupSub { base, sup, sub } => base.depth().max(sup.depth()).max(sub.depth()),
            Node::Matrix { rows, .. } | Node::Table { rows } => max_depth(rows.iter().flatten()),
        }
    }
}

fn max_depth<'a>(nodes: impl Iterator<Item = &'a Node>) -> usize {
    nodes.map(Node::depth).max().unwrap_or(0)
}
