use mathbox::layout::delim::{self, DELIMITER_ASSEMBLY_THRESHOLD, DelimLayout};
use mathbox::layout::grid::{self, GridParams};
use mathbox::layout::{Composite, Extent};
use mathbox::{Boxed, MathBox, Metrics};

use crate::layout;

/// Single top-level item of a laid out formula
fn single(b: &MathBox) -> &Composite {
    let list = b.as_composite().expect("formula should be a list");
    assert_eq!(list.children.len(), 1);
    list.children[0]
        .node
        .as_composite()
        .expect("item should be composite")
}

#[test]
fn glue_in_a_plus_b_equals_c() {
    let b = layout("a+b=c", 40.0);
    let list = b.as_composite().unwrap();
    let gaps: Vec<f32> = list
        .children
        .windows(2)
        .map(|w| w[1].dx - (w[0].dx + w[0].node.width()))
        .collect();
    let expected = [4.6, 4.6, 10.0, 10.0];
    for (g, e) in gaps.iter().zip(expected) {
        assert!((g - e).abs() < 1e-4, "gap {} expected {}", g, e);
    }
}

#[test]
fn minus_is_a_binary_operator() {
    let b = layout("a-b", 40.0);
    let list = b.as_composite().unwrap();
    let minus = list.children[1].node.as_glyph().unwrap();
    assert_eq!(minus.ch, '\u{2212}');
    let gap = list.children[1].dx - list.children[0].node.width();
    assert!((gap - 4.6).abs() < 1e-4);
}

#[test]
fn scripts_never_collide() {
    let m = Metrics::default();
    let fs = 30.0;
    for markup in [
        "x^2_3",
        "x_3^2",
        "x^{\\frac{a}{b}}_{\\frac{c}{d}}",
        "{\\frac{a}{b}}^n_k",
        "\\sqrt{x}^2_{i+1}",
    ] {
        let formula = layout(markup, fs);
        let scripted = single(&formula);
        let sup = &scripted.children[1];
        let sub = &scripted.children[2];
        let sup_bottom = sup.dy + sup.node.descent();
        let sub_top = sub.dy - sub.node.ascent();
        let gap = sub_top - sup_bottom;
        assert!(
            gap >= m.sup_sub_gap_min * fs - 1e-3,
            "{}: gap {} below minimum",
            markup,
            gap
        );
    }
}

#[test]
fn colliding_scripts_are_pushed_exactly_to_the_minimum() {
    let m = Metrics::default();
    let fs = 30.0;
    let formula = layout("x^2_3", fs);
    let scripted = single(&formula);
    let sup = &scripted.children[1];
    let sub = &scripted.children[2];
    let gap = (sub.dy - sub.node.ascent()) - (sup.dy + sup.node.descent());
    assert!((gap - m.sup_sub_gap_min * fs).abs() < 1e-3);
}

#[test]
fn scripts_share_horizontal_offset() {
    let formula = layout("x^{abc}_k", 20.0);
    let scripted = single(&formula);
    assert_eq!(scripted.children[1].dx, scripted.children[2].dx);
    assert!(scripted.children[1].dx > scripted.children[0].node.width());
}

#[test]
fn equal_fraction_parts_are_centered() {
    let formula = layout("\\frac{ab}{cd}", 40.0);
    let frac = single(&formula);
    let center = frac.extent.width / 2.0;
    let num = &frac.children[0];
    let den = &frac.children[1];
    assert!((num.node.width() - den.node.width()).abs() < 1e-4);
    assert!((num.dx + num.node.width() / 2.0 - center).abs() < 1e-4);
    assert!((den.dx + den.node.width() / 2.0 - center).abs() < 1e-4);
    assert!(num.dy < 0.0 && den.dy > 0.0);
}

#[test]
fn fraction_rule_sits_on_the_axis() {
    let m = Metrics::default();
    let fs = 40.0;
    let formula = layout("\\frac{1}{2}", fs);
    let frac = single(&formula);
    let MathBox::Rule(rule) = &frac.children[2].node else {
        panic!("expected the rule last");
    };
    let rule_center = frac.children[2].dy - rule.extent.height() / 2.0;
    assert!((rule_center + m.axis_height * fs).abs() < 1e-4);
}

#[test]
fn delimiter_threshold() {
    let fs = 20.0;
    let below = delim::assemble(DELIMITER_ASSEMBLY_THRESHOLD - 0.01, fs);
    let above = delim::assemble(DELIMITER_ASSEMBLY_THRESHOLD + 0.01, fs);
    assert!(matches!(below, DelimLayout::Single { .. }));
    let DelimLayout::Assembly {
        top,
        middle,
        bottom,
    } = above
    else {
        panic!("expected an assembly above the threshold");
    };
    assert_eq!(top.top, 0.0);
    assert!((bottom.bottom() - (DELIMITER_ASSEMBLY_THRESHOLD + 0.01)).abs() < 1e-4);
    // one unit of overlap at each seam
    assert!((top.bottom() - middle.top - 1.0).abs() < 1e-4);
    assert!((middle.bottom() - bottom.top - 1.0).abs() < 1e-4);
}

#[test]
fn tall_brackets_are_assembled() {
    let formula = layout("(x)", 20.0);
    let small = single(&formula);
    let MathBox::Stretched(open) = &small.children[0].node else {
        panic!("expected a delimiter");
    };
    assert_eq!(open.pieces.len(), 1);

    let formula = layout("(\\frac{\\frac{a}{b}}{\\frac{c}{d}})", 20.0);
    let tall = single(&formula);
    let MathBox::Stretched(open) = &tall.children[0].node else {
        panic!("expected a delimiter");
    };
    assert_eq!(open.pieces.len(), 3);
    assert_eq!(open.pieces[0].ch, '\u{239B}');
    let content = &tall.children[1].node;
    assert!(open.extent.height() >= content.height() * Metrics::default().delim_factor - 1e-3);
}

#[test]
fn table_layout_2x2() {
    let params = GridParams {
        col_gap: 8.0,
        row_gap: 4.0,
        min_row_ascent: 0.0,
        min_row_descent: 0.0,
        padding: 5.0,
    };
    let cells = vec![
        vec![Extent::new(10.0, 5.0, 1.0), Extent::new(3.0, 5.0, 1.0)],
        vec![Extent::new(4.0, 5.0, 1.0), Extent::new(12.0, 5.0, 1.0)],
    ];
    let grid = grid::layout(&cells, &params);
    assert_eq!(grid.col_widths, vec![10.0, 12.0]);
    assert_eq!(grid.width, 10.0 + 12.0 + 8.0 + 2.0 * 5.0);
}

#[test]
fn table_box_has_frame_and_cells() {
    let formula = layout("\\table{1 & 2 \\\\ 3 & 4}", 20.0);
    let table = single(&formula);
    let MathBox::Frame(frame) = &table.children[0].node else {
        panic!("expected the frame first");
    };
    // one vertical and one horizontal grid line
    assert_eq!(frame.lines.len(), 2);
    assert_eq!(table.children.len(), 5);
    assert!((frame.border.width() - table.extent.width).abs() < 1e-4);
}

#[test]
fn matrix_brackets() {
    let formula = layout("\\bmatrix{1 & 0 \\\\ 0 & 1}", 20.0);
    let b = single(&formula);
    let MathBox::Stretched(open) = &b.children[0].node else {
        panic!("expected a delimiter");
    };
    let MathBox::Stretched(close) = &b.children[2].node else {
        panic!("expected a delimiter");
    };
    let first = |s: &mathbox::layout::Stretched| s.pieces[0].ch;
    assert!(matches!(first(open), '[' | '\u{23A1}'));
    assert!(matches!(first(close), ']' | '\u{23A4}'));
}

#[test]
fn radical_width_adds_up() {
    let formula = layout("\\sqrt{abc}", 30.0);
    let b = single(&formula);
    let content = &b.children[1];
    assert!((b.extent.width - (content.dx + content.node.width())).abs() < 1e-3);
    assert!(b.extent.ascent > content.node.ascent());
}

#[test]
fn malformed_markup_degrades() {
    for markup in [
        "}", "{", "^", "_x", "\\frac", "\\frac{a}", "(", ")", "[(])", "\\unknown", "a\\\\b",
        "\\pmatrix", "\\table{", "\\sqrt", "x^", "{{{}}", "\\",
    ] {
        let b = layout(markup, 16.0);
        assert!(b.width().is_finite(), "{}", markup);
        assert!(b.ascent().is_finite(), "{}", markup);
        assert!(b.descent().is_finite(), "{}", markup);
    }
}

#[test]
fn deeply_nested_markup_degrades() {
    for markup in [
        "{".repeat(100_000),
        "\\sqrt{".repeat(1_000) + "x",
        "x".to_string() + &"^{2".repeat(1_000),
    ] {
        let b = layout(&markup, 16.0);
        assert!(b.width().is_finite());
        assert!(b.ascent().is_finite());
        assert!(b.descent().is_finite());
    }
}
