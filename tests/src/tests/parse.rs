use mathbox::math::lex::{self, TokenKind};
use mathbox::math::{AtomType, Node, NoteKind, parse, parse_with_notes};

fn atoms(nodes: &[Node]) -> Vec<AtomType> {
    nodes.iter().map(Node::atom).collect()
}

#[test]
fn atom_sequence_of_a_plus_b_equals_c() {
    let nodes = parse("a+b=c");
    assert_eq!(
        atoms(&nodes),
        vec![
            AtomType::Ord,
            AtomType::Bin,
            AtomType::Ord,
            AtomType::Rel,
            AtomType::Ord
        ]
    );
}

#[test]
fn whitespace_is_not_significant() {
    assert_eq!(parse("a + b"), parse("a+b"));
    assert_eq!(parse(" \\frac { 1 } { 2 } "), parse("\\frac{1}{2}"));
}

#[test]
fn tokens_of_a_grid() {
    let kinds: Vec<TokenKind> = lex::tokenize("\\pmatrix{a&b\\\\c&d}")
        .into_iter()
        .map(|t| t.kind().clone())
        .collect();
    assert_eq!(kinds[0], TokenKind::Command("pmatrix".into()));
    assert_eq!(kinds[1], TokenKind::BraceOpen);
    assert!(kinds.contains(&TokenKind::RowBreak));
    assert_eq!(kinds.last(), Some(&TokenKind::BraceClose));
}

#[test]
fn mat_is_a_fixed_grid_of_boxes() {
    let nodes = parse("\\mat{ignored}");
    let Node::Matrix { rows, .. } = &nodes[0] else {
        panic!("expected a matrix");
    };
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.len() == 2));
}

#[test]
fn recoveries_are_reported() {
    let (nodes, notes) = parse_with_notes("^x + \\foo} (a");
    assert!(!nodes.is_empty());
    let kinds: Vec<&NoteKind> = notes.iter().map(|n| &n.kind).collect();
    assert!(kinds.contains(&&NoteKind::OrphanScript));
    assert!(kinds.contains(&&NoteKind::UnknownCommand("foo".into())));
    assert!(kinds.contains(&&NoteKind::UnmatchedClose));
    assert!(kinds.contains(&&NoteKind::UnbalancedBracket('(')));
}

#[test]
fn clean_markup_has_no_notes() {
    let (_, notes) = parse_with_notes("\\sqrt{\\frac{x^2_i}{[a, b]}} \\leq \\pmatrix{1 & 2}");
    assert!(notes.is_empty(), "{:?}", notes);
}
