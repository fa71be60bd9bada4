//! Small geometric helpers shared by the generators and connectivity search.

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2) + (b[2] - a[2]).powi(2)).sqrt()
}

/// Azimuth of a point around the `y` axis, measured in the `xz` plane from `+x`.
///
/// Nanotubes are generated around the `y` axis, so this is the radial
/// direction of a wall atom.
#[inline]
pub fn azimuth(position: [f64; 3]) -> f64 {
    position[2].atan2(position[0])
}

/// Adds `offset` to `origin` component-wise.
#[inline]
pub fn translate(origin: [f64; 3], offset: [f64; 3]) -> [f64; 3] {
    [
        origin[0] + offset[0],
        origin[1] + offset[1],
        origin[2] + offset[2],
    ]
}
