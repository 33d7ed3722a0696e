//! Basic 3D point type used throughout the crate.

/// Representation of a 3D point in a projected coordinate system.
///
/// `x` is easting, `y` is northing and `z` is elevation, all in the same
/// linear unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Displacement from this point to `other`.
    pub fn displacement_to(&self, other: Point3) -> Displacement {
        Displacement::between(*self, other)
    }
}

/// Displacement vector between two points, `end - start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl Displacement {
    pub fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }

    /// Creates the displacement from `start` to `end`.
    pub fn between(start: Point3, end: Point3) -> Self {
        Self::new(end.x - start.x, end.y - start.y, end.z - start.z)
    }

    /// Length of the horizontal component.
    pub fn horizontal_distance(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }

    /// Returns `true` when both points share the same horizontal position.
    pub fn is_vertical(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Compass bearing of the horizontal component in radians, clockwise
    /// from north (+y) and normalised to `[0, 2π)`.
    ///
    /// Note the argument order: `atan2(dx, dy)` treats x as east and y as
    /// north, which yields a bearing rather than a mathematical angle.
    pub fn bearing(&self) -> f64 {
        let bearing = self.dx.atan2(self.dy);
        if bearing < 0.0 {
            bearing + 2.0 * std::f64::consts::PI
        } else {
            bearing
        }
    }
}
