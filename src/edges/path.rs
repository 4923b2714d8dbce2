use kurbo::{Affine, BezPath, ParamCurve, PathSeg, Point};
use rand::Rng;

use crate::edges::{
    style::{EdgeStyle, EdgeVariant, Side},
    table::{TORN_JITTER, TORN_SEGMENTS, static_run},
};

/// Normalized run for one side, before it is placed on the card.
pub fn edge_run_with<R: Rng + ?Sized>(
    style: EdgeStyle,
    variant: EdgeVariant,
    rng: &mut R,
) -> Option<BezPath> {
    if style == EdgeStyle::Torn {
        return Some(torn_run(rng));
    }
    let d = static_run(style, variant)?;
    match BezPath::from_svg(d) {
        Ok(p) => Some(p),
        Err(err) => {
            tracing::error!(style = %style, variant = %variant, error = ?err, "bad edge table entry");
            None
        }
    }
}

fn torn_run<R: Rng + ?Sized>(rng: &mut R) -> BezPath {
    let step = 100.0 / TORN_SEGMENTS as f64;
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    for i in 0..=TORN_SEGMENTS {
        let y = (rng.random::<f64>() - 0.5) * 2.0 * TORN_JITTER;
        p.line_to((i as f64 * step, y));
    }
    p
}

/// Maps a normalized run onto `side` of an edge `length` long.
///
/// Top is used as-is, bottom is mirrored vertically, left swaps the axes and right additionally
/// mirrors horizontally. Offsets stay in canvas units so the silhouette depth does not grow with
/// the card.
pub fn side_transform(side: Side, length: f64) -> Affine {
    let k = length / 100.0;
    match side {
        Side::Top => Affine::scale_non_uniform(k, 1.0),
        Side::Bottom => Affine::scale_non_uniform(k, -1.0),
        Side::Left => Affine::new([0.0, k, 1.0, 0.0, 0.0, 0.0]),
        Side::Right => Affine::new([0.0, k, -1.0, 0.0, 0.0, 0.0]),
    }
}

/// Edge path for one side, using ambient randomness for `torn`.
pub fn build_edge_path(
    style: EdgeStyle,
    variant: EdgeVariant,
    side: Side,
    length: f64,
) -> Option<BezPath> {
    build_edge_path_with(style, variant, side, length, &mut rand::rng())
}

/// Same as [`build_edge_path`] with the jitter source supplied by the caller.
pub fn build_edge_path_with<R: Rng + ?Sized>(
    style: EdgeStyle,
    variant: EdgeVariant,
    side: Side,
    length: f64,
    rng: &mut R,
) -> Option<BezPath> {
    if !(length.is_finite() && length > 0.0) {
        tracing::warn!(length, "edge length must be positive");
        return None;
    }
    let mut run = edge_run_with(style, variant, rng)?;
    run.apply_affine(side_transform(side, length));
    Some(run)
}

/// All four sides placed on a `width x height` card, in top, bottom, left, right order.
pub fn build_side_paths_with<R: Rng + ?Sized>(
    style: EdgeStyle,
    variant: EdgeVariant,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Option<[BezPath; 4]> {
    let top = build_edge_path_with(style, variant, Side::Top, width, rng)?;
    let mut bottom = build_edge_path_with(style, variant, Side::Bottom, width, rng)?;
    let left = build_edge_path_with(style, variant, Side::Left, height, rng)?;
    let mut right = build_edge_path_with(style, variant, Side::Right, height, rng)?;
    bottom.apply_affine(Affine::translate((0.0, height)));
    right.apply_affine(Affine::translate((width, 0.0)));
    Some([top, bottom, left, right])
}

/// One closed outline running clockwise around the card: top, right, bottom, left.
pub fn build_edge_frame(
    style: EdgeStyle,
    variant: EdgeVariant,
    width: f64,
    height: f64,
) -> Option<BezPath> {
    build_edge_frame_with(style, variant, width, height, &mut rand::rng())
}

pub fn build_edge_frame_with<R: Rng + ?Sized>(
    style: EdgeStyle,
    variant: EdgeVariant,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Option<BezPath> {
    let [top, bottom, left, right] = build_side_paths_with(style, variant, width, height, rng)?;
    let mut out = BezPath::new();
    let mut cursor = None;
    append_segments(&mut out, &mut cursor, top.segments());
    append_segments(&mut out, &mut cursor, right.segments());
    append_segments(&mut out, &mut cursor, reversed(&bottom));
    append_segments(&mut out, &mut cursor, reversed(&left));
    out.close_path();
    Some(out)
}

fn reversed(path: &BezPath) -> impl Iterator<Item = PathSeg> {
    let segs: Vec<PathSeg> = path.segments().collect();
    segs.into_iter().rev().map(|s| s.reverse())
}

fn append_segments(
    out: &mut BezPath,
    cursor: &mut Option<Point>,
    segs: impl Iterator<Item = PathSeg>,
) {
    for seg in segs {
        let start = seg.start();
        match *cursor {
            None => out.move_to(start),
            Some(at) if at != start => out.line_to(start),
            Some(_) => {}
        }
        match seg {
            PathSeg::Line(l) => out.line_to(l.p1),
            PathSeg::Quad(q) => out.quad_to(q.p1, q.p2),
            PathSeg::Cubic(c) => out.curve_to(c.p1, c.p2, c.p3),
        }
        *cursor = Some(seg.end());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edges/path.rs"]
mod tests;
