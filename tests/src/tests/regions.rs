use mathbox::geom::Point;
use mathbox::math::PlaceholderStyle;
use mathbox::render::{Primitive, Recorder, RegionKind};
use mathbox::style::PlaceholderOverride;
use mathbox::surd::Generator;
use mathbox::{Boxed, MathBox, StyleContext, Typesetter, color};

const MARKUP: &str = "\\frac{\\box}{\\gap} + \\sqrt{\\widebox} = \\bmatrix{\\box & 1 \\\\ 2 & \\box}";

#[test]
fn query_matches_render_walk() {
    let generator = Generator::new();
    let ts = Typesetter::new(&generator);
    let style = StyleContext::new(24.0);
    let b = ts.layout(MARKUP, &style);
    let origin = Point::from_xy(15.0, 80.0);

    let queried = b.placeholder_regions(origin);
    assert_eq!(queried.len(), 5);

    let mut rec = Recorder::new();
    b.render(&mut rec, origin, &style);
    let hits: Vec<_> = rec.regions().filter(|r| r.kind == RegionKind::Hit).collect();
    let crops: Vec<_> = rec
        .regions()
        .filter(|r| r.kind == RegionKind::Crop)
        .collect();
    assert_eq!(hits.len(), queried.len());

    for (i, q) in queried.iter().enumerate() {
        assert_eq!(q.index, i);
        assert_eq!(hits[i].index, i);
        assert_eq!(hits[i].rect, q.hit);
        assert_eq!(crops[i].rect, q.crop);
        // hit region is oversized around the tight box
        assert!(q.hit.left() < q.crop.left());
        assert!(q.hit.right() > q.crop.right());
        assert!(q.hit.top() < q.crop.top());
        assert!(q.hit.bottom() > q.crop.bottom());
    }
}

#[test]
fn regions_follow_the_origin() {
    let b = crate::layout("x + \\box", 20.0);
    let a = b.placeholder_regions(Point::zero());
    let moved = b.placeholder_regions(Point::from_xy(7.0, 11.0));
    assert!((moved[0].crop.left() - a[0].crop.left() - 7.0).abs() < 1e-4);
    assert!((moved[0].crop.top() - a[0].crop.top() - 11.0).abs() < 1e-4);
    // placeholder sits after the glyphs on the baseline
    assert!(a[0].crop.left() > 0.0);
    assert!(a[0].crop.top() < 0.0 && a[0].crop.bottom() > 0.0);
}

#[test]
fn override_changes_one_instance() {
    let generator = Generator::new();
    let ts = Typesetter::new(&generator);
    let plain = StyleContext::new(24.0);
    let styled = plain.clone().with_override(
        3,
        PlaceholderOverride::default()
            .with_style(PlaceholderStyle::Underline)
            .with_color(color::BLUE),
    );

    let a = ts.layout(MARKUP, &plain);
    let b = ts.layout(MARKUP, &styled);
    assert_eq!(a.width(), b.width());

    let mut rec = Recorder::new();
    b.render(&mut rec, Point::zero(), &styled);
    let blue_lines = rec
        .primitives()
        .iter()
        .filter(|p| matches!(p, Primitive::Line { stroke, .. } if stroke.color == color::BLUE))
        .count();
    assert_eq!(blue_lines, 1);

    let mut styles = Vec::new();
    b.visit(Point::zero(), &mut |node, _| {
        if let MathBox::Placeholder(p) = node {
            styles.push(p.style);
        }
    });
    assert_eq!(
        styles,
        vec![
            PlaceholderStyle::Bordered,
            PlaceholderStyle::Underline,
            PlaceholderStyle::Bordered,
            PlaceholderStyle::Underline,
            PlaceholderStyle::Bordered,
        ]
    );
}
