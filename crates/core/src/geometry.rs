//! Radial geometry shared by the silhouette, shell and glow code.
//!
//! Everything in the sprite is laid out around one center point. These helpers
//! move points along the ray from that center so the shell walk and the glow
//! shrink use the same math.

use glam::{DVec2, IVec2};

/// Point at `radius` from `center` in the direction `angle` (radians).
pub fn polar(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + radius * DVec2::new(angle.cos(), angle.sin())
}

/// Unit vector pointing from `center` toward `point`.
///
/// Built from `atan2`, so a point sitting exactly on the center gets the +x axis.
pub fn radial_direction(center: DVec2, point: DVec2) -> DVec2 {
    let d = point - center;
    let angle = d.y.atan2(d.x);
    DVec2::new(angle.cos(), angle.sin())
}

/// Moves `point` by `delta` along its radial direction.
///
/// Positive `delta` moves away from the center, negative toward it.
pub fn radial_offset(center: DVec2, point: DVec2, delta: f64) -> DVec2 {
    point + delta * radial_direction(center, point)
}

/// Rounds to the nearest pixel (halves away from zero).
pub fn round_to_pixel(p: DVec2) -> IVec2 {
    IVec2::new(p.x.round() as i32, p.y.round() as i32)
}

/// Truncates toward zero to a pixel coordinate.
pub fn trunc_to_pixel(p: DVec2) -> IVec2 {
    IVec2::new(p.x.trunc() as i32, p.y.trunc() as i32)
}
