//! Conversion of the syntax tree into boxes
use mathbox_surd::{Generator, Tuning};

use super::boxes::{Composite, Extent, Glyph, MathBox};
use super::{chars, delim, frac, glue, grid, placeholder, radical, script};
use crate::math::{MAX_NESTING, Node};
use crate::metrics::Metrics;
use crate::style::{Mode, StyleContext, Traversal};

/// Deepest node tree the builder descends into.
/// Parsed trees stay below it, hand-built trees are cut.
const MAX_BUILD_DEPTH: usize = 2 * MAX_NESTING;

/// Builds one box tree.
///
/// Placeholders are numbered by the builder's [`Traversal`] in the order their boxes
/// appear in the children lists, which is also the order of the render walk.
#[derive(Debug)]
pub(crate) struct Builder<'a> {
    metrics: &'a Metrics,
    tuning: &'a Tuning,
    generator: &'a Generator,
    traversal: Traversal,
    depth: usize,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(metrics: &'a Metrics, tuning: &'a Tuning, generator: &'a Generator) -> Self {
        Builder {
            metrics,
            tuning,
            generator,
            traversal: Traversal::new(),
            depth: 0,
        }
    }

    /// Number of placeholders built so far
    pub(crate) fn placeholder_count(&self) -> usize {
        self.traversal.count()
    }

    /// Lay out a sequence of nodes as a horizontal list
    pub(crate) fn build_seq(&mut self, nodes: &[Node], style: &StyleContext) -> MathBox {
        let items = nodes
            .iter()
            .map(|n| (self.build(n, style), n.atom()))
            .collect();
        glue::hlist(items, self.metrics, style.font_size).into()
    }

    pub(crate) fn build(&mut self, node: &Node, style: &StyleContext) -> MathBox {
        if self.depth >= MAX_BUILD_DEPTH {
            log::warn!("node tree deeper than {} levels, subtree dropped", MAX_BUILD_DEPTH);
            return Composite::new(Vec::new(), Extent::default()).into();
        }
        self.depth += 1;
        let res = self.build_node(node, style);
        self.depth -= 1;
        res
    }

    fn build_node(&mut self, node: &Node, style: &StyleContext) -> MathBox {
        let m = self.metrics;
        let fs = style.font_size;
        match node {
            Node::Char { ch, upright, .. } => self.build_char(*ch, *upright, style).into(),
            Node::Group(children) => self.build_seq(children, style),
            Node::Frac { num, den } => {
                let inner = style.scaled(m.frac_scale);
                let num = self.build(num, &inner);
                let den = self.build(den, &inner);
                frac::layout(num, den, m, fs, style.color).into()
            }
            Node::Sqrt(child) => {
                let content = self.build(child, style);
                radical::layout(content, self.generator, self.tuning, m, style).into()
            }
            Node::Sup { base, sup } => {
                let base = self.build(base, style);
                let sup = self.build(sup, &style.script(m.script_scale));
                script::layout(base, Some(sup), None, m, fs).into()
            }
            Node::Sub { base, sub } => {
                let base = self.build(base, style);
                let sub = self.build(sub, &style.script(m.script_scale));
                script::layout(base, None, Some(sub), m, fs).into()
            }
            Node::SupSub { base, sup, sub } => {
                let base = self.build(base, style);
                let script_style = style.script(m.script_scale);
                let sup = self.build(sup, &script_style);
                let sub = self.build(sub, &script_style);
                script::layout(base, Some(sup), Some(sub), m, fs).into()
            }
            Node::Delim {
                open,
                close,
                children,
            } => {
                let content = self.build_seq(children, style);
                delim::wrap(*open, *close, content, m, style).into()
            }
            Node::Placeholder {
                width_factor,
                style: ph_style,
            } => placeholder::build(*width_factor, *ph_style, &mut self.traversal, m, style).into(),
            Node::Matrix { delim, rows } => {
                let cells = self.build_rows(rows, style);
                grid::matrix(*delim, cells, m, style).into()
            }
            Node::Table { rows } => {
                let cells = self.build_rows(rows, style);
                grid::table(cells, m, style).into()
            }
        }
    }

    fn build_rows(&mut self, rows: &[Vec<Node>], style: &StyleContext) -> Vec<Vec<MathBox>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| self.build(cell, style)).collect())
            .collect()
    }

    fn build_char(&self, ch: char, upright: bool, style: &StyleContext) -> Glyph {
        let m = self.metrics;
        let fs = style.font_size;
        let italic = style.mode == Mode::Math && !upright && ch.is_ascii_alphabetic();
        let ratio = chars::width_ratio(ch, style.bold, italic).unwrap_or(m.default_char_width);
        Glyph {
            ch,
            font_size: fs,
            bold: style.bold,
            italic,
            color: style.color,
            extent: Extent::new(ratio * fs, m.char_ascent * fs, m.char_descent * fs),
        }
    }
}
