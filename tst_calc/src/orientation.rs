//! Planar orientation expressed as strike and dip.

use std::f64::consts::FRAC_PI_2;

/// Values of `cos(bearing - strike)` at or below this magnitude are treated
/// as exactly zero, i.e. a bearing at right angles to strike.
pub const PERPENDICULAR_TOLERANCE: f64 = 1e-12;

/// Orientation of a planar surface.
///
/// `strike` is a compass bearing in degrees clockwise from north and `dip` is
/// the angle in degrees below horizontal, with the dip direction following
/// the right-hand rule.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Orientation {
    pub strike: f64,
    pub dip: f64,
}

impl Orientation {
    pub fn new(strike: f64, dip: f64) -> Self {
        Self { strike, dip }
    }

    /// A horizontal plane.
    pub fn horizontal() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn strike_radians(&self) -> f64 {
        self.strike.to_radians()
    }

    pub fn dip_radians(&self) -> f64 {
        self.dip.to_radians()
    }

    /// Dip direction in degrees, 90° clockwise from strike.
    pub fn dip_direction(&self) -> f64 {
        (self.strike + 90.0).rem_euclid(360.0)
    }

    /// Returns `true` for a vertical plane, where `tan(dip)` is undefined.
    pub fn is_vertical(&self) -> bool {
        self.dip == 90.0
    }

    /// Apparent dip in radians seen in a vertical section along `bearing`
    /// (radians, clockwise from north).
    ///
    /// Uses `atan(tan(dip) * cos(bearing - strike))`. A bearing at right
    /// angles to strike gives 0. A vertical plane gives the limit of the
    /// formula, `±π/2` with the sign of `cos(bearing - strike)`.
    pub fn apparent_dip(&self, bearing: f64) -> f64 {
        let alignment = (bearing - self.strike_radians()).cos();
        if alignment.abs() <= PERPENDICULAR_TOLERANCE {
            return 0.0;
        }
        if self.is_vertical() {
            return FRAC_PI_2.copysign(alignment);
        }
        (self.dip_radians().tan() * alignment).atan()
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::horizontal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, PI};

    #[test]
    fn radians_conversion() {
        let o = Orientation::new(180.0, 45.0);
        assert!((o.strike_radians() - PI).abs() < 1e-12);
        assert!((o.dip_radians() - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn dip_direction_wraps() {
        assert_eq!(Orientation::new(0.0, 10.0).dip_direction(), 90.0);
        assert_eq!(Orientation::new(300.0, 10.0).dip_direction(), 30.0);
        assert_eq!(Orientation::new(270.0, 10.0).dip_direction(), 0.0);
    }

    #[test]
    fn apparent_dip_equals_true_dip_in_strike_bearing() {
        let o = Orientation::new(90.0, 45.0);
        let ad = o.apparent_dip(PI / 2.0);
        assert!((ad - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn apparent_dip_zero_for_horizontal_plane() {
        let o = Orientation::horizontal();
        for deg in [0.0_f64, 33.0, 180.0, 271.0] {
            assert_eq!(o.apparent_dip(deg.to_radians()), 0.0);
        }
    }

    #[test]
    fn apparent_dip_zero_when_cosine_vanishes() {
        let o = Orientation::new(0.0, 60.0);
        assert_eq!(o.apparent_dip(PI / 2.0), 0.0);
        assert_eq!(o.apparent_dip(3.0 * PI / 2.0), 0.0);
    }

    #[test]
    fn vertical_plane_limits() {
        let o = Orientation::new(90.0, 90.0);
        assert!(o.is_vertical());
        assert_eq!(o.apparent_dip(PI / 2.0), FRAC_PI_2);
        assert_eq!(o.apparent_dip(3.0 * PI / 2.0), -FRAC_PI_2);
        assert_eq!(o.apparent_dip(0.0), 0.0);
        assert_eq!(o.apparent_dip(PI), 0.0);
    }

    #[test]
    fn vertical_plane_oblique_bearing() {
        let o = Orientation::new(0.0, 90.0);
        assert_eq!(o.apparent_dip(FRAC_PI_4), FRAC_PI_2);
        assert!(o.apparent_dip(FRAC_PI_4).is_finite());
    }
}
