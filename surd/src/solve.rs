//! Deformation of the template outline for a given rise.
//!
//! All operations happen in the template's y-up em frame.
use mathbox_base::geom::Point;

use crate::template::{self, Node, Template};
use crate::tuning::Resolved;
use crate::vec::{self, EPS, pt};

/// Arm angles are kept away from the horizontal
pub const MIN_ANGLE_DEG: f32 = 5.0;
pub const MAX_ANGLE_DEG: f32 = 175.0;

/// Arms never shrink below this fraction of their template length
const MIN_LENGTH_RATIO: f32 = 0.25;

pub(crate) type Nodes = [Node; template::NODE_COUNT];

fn clamp_angle(deg: f32) -> f32 {
    if deg.is_finite() {
        deg.clamp(MIN_ANGLE_DEG, MAX_ANGLE_DEG)
    } else {
        90.0
    }
}

fn translate_group(nodes: &mut Nodes, group: std::ops::RangeInclusive<usize>, d: Point) {
    for n in &mut nodes[group] {
        n.translate(d);
    }
}

fn rotate_group(
    nodes: &mut Nodes,
    group: std::ops::RangeInclusive<usize>,
    center: Point,
    deg: f32,
) {
    if deg.abs() < EPS {
        return;
    }
    for n in &mut nodes[group] {
        n.map(|p| vec::rotate_about(p, center, deg));
    }
}

/// Translate node `idx` so that its anchor lands on `target`
fn move_node(nodes: &mut Nodes, idx: usize, target: Point) {
    let d = vec::sub(target, nodes[idx].anchor);
    nodes[idx].translate(d);
}

/// Length an arm must have so that its reference point rises `rise` above the pivot
fn required_length(rise: f32, angle: f32, template_length: f32) -> f32 {
    let sin = angle.to_radians().sin().abs().max(EPS);
    (rise / sin).max(template_length * MIN_LENGTH_RATIO)
}

/// Stretch an arm by translating its tip group along the pivot-to-reference direction
fn stretch(
    nodes: &mut Nodes,
    group: std::ops::RangeInclusive<usize>,
    pivot: Point,
    reference: Point,
    delta: f32,
) {
    if let Some(u) = vec::normalize(vec::sub(reference, pivot)) {
        translate_group(nodes, group, vec::scale(u, delta));
    }
}

/// Scale the hook along the axis from the left arm top to the hook tip.
/// Only the component parallel to the axis is scaled.
fn scale_hook(nodes: &mut Nodes, scale: f32) {
    let origin = nodes[template::LEFT_INNER_TOP].anchor;
    let Some(axis) = vec::normalize(vec::sub(nodes[template::HOOK_TIP].anchor, origin)) else {
        return;
    };
    let factor = scale.max(0.0) - 1.0;
    for n in &mut nodes[template::HOOK] {
        n.map(|p| {
            let along = vec::dot(vec::sub(p, origin), axis);
            vec::add(p, vec::scale(axis, along * factor))
        });
    }
}

/// Slide node `idx` along `dir` until its anchor sits on the baseline
fn snap_to_baseline(nodes: &mut Nodes, idx: usize, dir: Point) {
    if dir.y.abs() < EPS {
        return;
    }
    let a = nodes[idx].anchor;
    let t = -a.y / dir.y;
    nodes[idx].translate(vec::scale(dir, t));
}

/// Deform the template so that the right reference rises `rise` em above the pivot.
pub(crate) fn solve(tpl: &Template, rise: f32, r: &Resolved) -> Nodes {
    let mut nodes = tpl.nodes;
    let pivot = tpl.pivot;

    let theta_r = clamp_angle(r.upstroke_angle);
    let theta_l = clamp_angle(r.downstroke_angle);

    // arm lengths
    let len_r = required_length(rise, theta_r, tpl.right_length);
    let len_l = required_length(r.downstroke_rise.max(0.0), theta_l, tpl.left_length);
    stretch(
        &mut nodes,
        template::RIGHT_TIP,
        pivot,
        tpl.right_ref,
        len_r - tpl.right_length,
    );
    stretch(
        &mut nodes,
        template::LEFT_TIP,
        pivot,
        tpl.left_ref,
        len_l - tpl.left_length,
    );

    scale_hook(&mut nodes, r.hook_length_scale);

    // arm angles
    let delta_l = theta_l - tpl.left_angle;
    let delta_r = theta_r - tpl.right_angle;
    rotate_group(&mut nodes, template::LEFT_ARM, pivot, delta_l);
    rotate_group(&mut nodes, template::RIGHT_ARM, pivot, delta_r);

    let dir_l = vec::from_angle(theta_l);
    let dir_r = vec::from_angle(theta_r);

    // elbow and notch sit at the intersections of the rotated edges
    let a = |nodes: &Nodes, i: usize| nodes[i].anchor;
    match vec::intersect(
        a(&nodes, template::LEFT_BOTTOM),
        dir_l,
        a(&nodes, template::RIGHT_BOTTOM),
        dir_r,
    ) {
        Some(p) => move_node(&mut nodes, template::ELBOW, p),
        None => log::trace!("elbow: arms are parallel, keeping template position"),
    }
    match vec::intersect(
        a(&nodes, template::LEFT_INNER_TOP),
        dir_l,
        a(&nodes, template::RIGHT_INNER_UPPER),
        dir_r,
    ) {
        Some(p) => move_node(&mut nodes, template::NOTCH, p),
        None => log::trace!("notch: arms are parallel, keeping template position"),
    }

    // hook orientation is absolute, compensate for the arm rotation
    let hook_center = a(&nodes, template::LEFT_INNER_TOP);
    rotate_group(
        &mut nodes,
        template::HOOK,
        hook_center,
        r.hook_rotation - delta_l,
    );

    // re-attach the hook to the outer edge of the left arm
    let before = a(&nodes, template::HOOK_BEFORE_JUNCTION);
    let junction = a(&nodes, template::HOOK_JUNCTION);
    if let Some(p) = vec::intersect(
        before,
        vec::sub(junction, before),
        a(&nodes, template::LEFT_BOTTOM),
        dir_l,
    ) {
        // reject far-away intersections of nearly parallel lines
        if vec::length(vec::sub(p, junction)) <= tpl.hook_length * 2.0 {
            move_node(&mut nodes, template::HOOK_JUNCTION, p);
        }
    }

    snap_to_baseline(&mut nodes, template::LEFT_BOTTOM, dir_l);
    snap_to_baseline(&mut nodes, template::RIGHT_BOTTOM, dir_r);

    nodes
}

/// Highest point of the top cap segment (node 13 to node 14)
pub(crate) fn cap_peak(nodes: &Nodes) -> Point {
    let n0 = nodes[template::CAP_RIGHT];
    let n1 = nodes[template::CAP_LEFT];
    let p = [n0.anchor, n0.handle_out, n1.handle_in, n1.anchor];
    cubic_peak(&p)
}

fn cubic_eval(p: &[Point; 4], t: f32) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    pt(
        a * p[0].x + b * p[1].x + c * p[2].x + d * p[3].x,
        a * p[0].y + b * p[1].y + c * p[2].y + d * p[3].y,
    )
}

/// Point of maximum Y of a cubic segment, found from the roots of dy/dt
pub(crate) fn cubic_peak(p: &[Point; 4]) -> Point {
    let (y0, y1, y2, y3) = (p[0].y, p[1].y, p[2].y, p[3].y);
    // dy/dt / 3 = a t² + b t + c
    let a = -y0 + 3.0 * y1 - 3.0 * y2 + y3;
    let b = 2.0 * (y0 - 2.0 * y1 + y2);
    let c = y1 - y0;

    let mut candidates = [0.0f32, 1.0, f32::NAN, f32::NAN];
    if a.abs() < EPS {
        if b.abs() >= EPS {
            candidates[2] = -c / b;
        }
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            candidates[2] = (-b + sq) / (2.0 * a);
            candidates[3] = (-b - sq) / (2.0 * a);
        }
    }

    let mut best = p[0];
    for t in candidates {
        if !(0.0..=1.0).contains(&t) {
            continue;
        }
        let q = cubic_eval(p, t);
        if q.y > best.y {
            best = q;
        }
    }
    best
}
