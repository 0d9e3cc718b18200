//! The reference radical outline.
//!
//! The outline is a closed cubic Bézier contour of 16 nodes, expressed in em units
//! in a y-up frame with the baseline at `y = 0`. Traversal starts at the inner crotch
//! (the notch between both arms), goes up the inner edge of the left arm, around the
//! hook, down the outer edge of the left arm, through the bottom elbow, up the outer
//! edge of the right arm, across the top cap and back down the inner edge of the right arm.
use mathbox_base::geom::Point;

use crate::vec::{self, pt};

/// A contour node: an anchor with its incoming and outgoing control handles.
///
/// A handle equal to its anchor denotes a sharp corner on that side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub handle_in: Point,
    pub anchor: Point,
    pub handle_out: Point,
}

impl Node {
    const fn new(handle_in: Point, anchor: Point, handle_out: Point) -> Self {
        Node {
            handle_in,
            anchor,
            handle_out,
        }
    }

    const fn sharp(anchor: Point) -> Self {
        Node::new(anchor, anchor, anchor)
    }

    pub(crate) fn translate(&mut self, d: Point) {
        self.handle_in = vec::add(self.handle_in, d);
        self.anchor = vec::add(self.anchor, d);
        self.handle_out = vec::add(self.handle_out, d);
    }

    pub(crate) fn map(&mut self, f: impl Fn(Point) -> Point) {
        self.handle_in = f(self.handle_in);
        self.anchor = f(self.anchor);
        self.handle_out = f(self.handle_out);
    }
}

pub const NODE_COUNT: usize = 16;

pub const NOTCH: usize = 0;
pub const LEFT_INNER_TOP: usize = 1;
pub const HOOK_TIP: usize = 5;
pub const HOOK_BEFORE_JUNCTION: usize = 7;
pub const HOOK_JUNCTION: usize = 8;
pub const LEFT_BOTTOM: usize = 9;
pub const ELBOW: usize = 10;
pub const RIGHT_BOTTOM: usize = 11;
pub const RIGHT_OUTER_UPPER: usize = 12;
pub const CAP_RIGHT: usize = 13;
pub const CAP_LEFT: usize = 14;
pub const RIGHT_INNER_UPPER: usize = 15;

/// Nodes rotated with the left arm
pub const LEFT_ARM: std::ops::RangeInclusive<usize> = 1..=9;
/// Nodes translated when the left arm is stretched
pub const LEFT_TIP: std::ops::RangeInclusive<usize> = 1..=8;
/// Nodes rotated with the right arm
pub const RIGHT_ARM: std::ops::RangeInclusive<usize> = 11..=15;
/// Nodes translated when the right arm is stretched
pub const RIGHT_TIP: std::ops::RangeInclusive<usize> = 12..=15;
/// Nodes of the hook
pub const HOOK: std::ops::RangeInclusive<usize> = 2..=8;

/// Thickness of the vinculum, in em
pub const VINCULUM_THICKNESS: f32 = 0.05;

pub(crate) const NODES: [Node; NODE_COUNT] = [
    // 0: notch
    Node::sharp(pt(0.4436, 0.1205)),
    // 1: left arm inner top
    Node::new(pt(0.266, 0.5), pt(0.266, 0.5), pt(0.255, 0.525)),
    // 2..=8: hook
    Node::new(pt(0.235, 0.545), pt(0.205, 0.548), pt(0.17, 0.55)),
    Node::new(pt(0.145, 0.54), pt(0.12, 0.525), pt(0.09, 0.51)),
    Node::new(pt(0.07, 0.495), pt(0.045, 0.478), pt(0.025, 0.465)),
    Node::new(pt(0.008, 0.456), pt(0.0, 0.448), pt(-0.004, 0.438)),
    Node::new(pt(0.006, 0.43), pt(0.018, 0.43), pt(0.03, 0.43)),
    Node::new(pt(0.055, 0.442), pt(0.08, 0.452), pt(0.11, 0.464)),
    Node::new(pt(0.15, 0.472), pt(0.18, 0.47), pt(0.18, 0.47)),
    // 9: left arm outer bottom
    Node::new(pt(0.4, 0.0), pt(0.4, 0.0), pt(0.405, -0.012)),
    // 10: elbow
    Node::new(pt(0.414, -0.04), pt(0.4205, -0.0438), pt(0.428, -0.04)),
    // 11: right arm outer bottom
    Node::new(pt(0.436, -0.012), pt(0.44, 0.0), pt(0.44, 0.0)),
    // 12: right arm outer upper
    Node::sharp(pt(0.79556, 0.8)),
    // 13, 14: top cap
    Node::new(pt(0.84889, 0.92), pt(0.84889, 0.92), pt(0.842, 0.948)),
    Node::new(pt(0.806, 0.948), pt(0.79889, 0.92), pt(0.79889, 0.92)),
    // 15: right arm inner upper
    Node::sharp(pt(0.74556, 0.8)),
];

/// Reference geometry derived from the template nodes
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub nodes: [Node; NODE_COUNT],
    /// Intersection of both arm centerlines
    pub pivot: Point,
    /// Center of the left arm top
    pub left_ref: Point,
    /// Center of the top cap
    pub right_ref: Point,
    /// Left arm angle in degrees
    pub left_angle: f32,
    /// Right arm angle in degrees
    pub right_angle: f32,
    /// Distance pivot to left reference
    pub left_length: f32,
    /// Distance pivot to right reference
    pub right_length: f32,
    /// Height of the right reference above the pivot
    pub base_height: f32,
    /// Rotation reference of the hook length scale, from node 1 to the hook tip
    pub hook_length: f32,
}

impl Template {
    pub fn new() -> Self {
        let nodes = NODES;
        let a = |i: usize| nodes[i].anchor;

        let left_ref = vec::midpoint(a(LEFT_INNER_TOP), a(HOOK_JUNCTION));
        let right_ref = vec::midpoint(a(CAP_RIGHT), a(CAP_LEFT));
        let left_dir = vec::sub(a(LEFT_BOTTOM), a(HOOK_JUNCTION));
        let right_dir = vec::sub(a(CAP_RIGHT), a(RIGHT_BOTTOM));

        // both directions are fixed and far from parallel
        let pivot = vec::intersect(left_ref, left_dir, right_ref, right_dir)
            .unwrap_or(vec::midpoint(a(LEFT_BOTTOM), a(RIGHT_BOTTOM)));

        let to_left = vec::sub(left_ref, pivot);
        let to_right = vec::sub(right_ref, pivot);

        Template {
            nodes,
            pivot,
            left_ref,
            right_ref,
            left_angle: vec::angle_of(to_left),
            right_angle: vec::angle_of(to_right),
            left_length: vec::length(to_left),
            right_length: vec::length(to_right),
            base_height: right_ref.y - pivot.y,
            hook_length: vec::length(vec::sub(a(HOOK_TIP), a(LEFT_INNER_TOP))),
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}
