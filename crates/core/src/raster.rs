//! Integer rasterization primitives.
//!
//! Each function returns the pixel coordinates it covers instead of writing
//! into a buffer, so the same shape can be stamped into a [`Canvas`](crate::Canvas)
//! or a [`Mask`](crate::Mask). Coordinates may fall outside any particular
//! grid; consumers clip.

use glam::IVec2;

/// Pixels on the segment from `a` to `b` (Bresenham), both endpoints included.
pub fn line(a: IVec2, b: IVec2) -> Vec<IVec2> {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (a.x, a.y);

    let mut out = Vec::with_capacity((dx - dy) as usize + 1);
    loop {
        out.push(IVec2::new(x, y));
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    out
}

/// Pixels on the closed outline through `points` (last vertex joins the first).
///
/// Shared corner pixels appear once per adjoining edge.
pub fn polygon_outline(points: &[IVec2]) -> Vec<IVec2> {
    match points {
        [] => Vec::new(),
        [only] => vec![*only],
        _ => points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .flat_map(|(&a, &b)| line(a, b))
            .collect(),
    }
}

/// A horizontal run of filled pixels, `x0..=x1` on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x0: i32,
    pub x1: i32,
}

/// Even-odd scanline fill of a closed polygon, sampled on integer rows.
///
/// An edge crosses row `y` when `y` lies in its half-open vertical extent
/// `[min_y, max_y)`, so vertices are never counted twice. Intersections are
/// paired left to right and each pair covers `ceil(x_left)..=floor(x_right)`.
/// Pixels exactly on a horizontal bottom edge are not covered; stamp
/// [`polygon_outline`] as well to include the boundary.
pub fn polygon_spans(points: &[IVec2]) -> Vec<Span> {
    if points.len() < 3 {
        return Vec::new();
    }
    let (min_y, max_y) = points
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

    let edges: Vec<(IVec2, IVec2)> = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b))
        .filter(|(a, b)| a.y != b.y)
        .collect();

    let mut spans = Vec::new();
    let mut xs: Vec<f64> = Vec::with_capacity(edges.len());
    for y in min_y..=max_y {
        xs.clear();
        for &(a, b) in &edges {
            let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
            if y >= lo.y && y < hi.y {
                let t = f64::from(y - lo.y) / f64::from(hi.y - lo.y);
                xs.push(f64::from(lo.x) + t * f64::from(hi.x - lo.x));
            }
        }
        xs.sort_by(f64::total_cmp);
        for pair in xs.chunks_exact(2) {
            let x0 = pair[0].ceil() as i32;
            let x1 = pair[1].floor() as i32;
            if x0 <= x1 {
                spans.push(Span { y, x0, x1 });
            }
        }
    }
    spans
}

/// Filled disc: every pixel with `dx² + dy² <= r²`.
pub fn disc(center: IVec2, radius: i32) -> Vec<IVec2> {
    let r = radius.max(0);
    let mut out = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                out.push(center + IVec2::new(dx, dy));
            }
        }
    }
    out
}

/// One-pixel rim of [`disc`]: disc pixels with at least one 4-neighbour outside it.
pub fn disc_rim(center: IVec2, radius: i32) -> Vec<IVec2> {
    let r = radius.max(0);
    let inside = |d: IVec2| d.x * d.x + d.y * d.y <= r * r;
    disc(center, r)
        .into_iter()
        .filter(|&p| {
            let d = p - center;
            [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y]
                .iter()
                .any(|&n| !inside(d + n))
        })
        .collect()
}
