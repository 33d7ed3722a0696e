//! True stratigraphic thickness between two points across a dipping plane.

use log::{debug, warn};

use crate::geometry::{self, Displacement, Point3};
use crate::orientation::Orientation;

/// Intermediate values of a thickness calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TstSolution {
    pub displacement: Displacement,
    pub horizontal_distance: f64,
    /// Straight-line distance between the two points.
    pub slope_distance: f64,
    /// Compass bearing of the horizontal displacement in degrees. `None` when
    /// the points share the same horizontal position.
    pub bearing: Option<f64>,
    /// Apparent dip along `bearing` in degrees.
    pub apparent_dip: Option<f64>,
    /// Thickness before taking the absolute value.
    pub signed_thickness: f64,
    pub thickness: f64,
}

/// Solves the thickness calculation and returns every intermediate value.
pub fn solve(orientation: Orientation, point1: Point3, point2: Point3) -> TstSolution {
    let displacement = Displacement::between(point1, point2);
    let horiz = displacement.horizontal_distance();
    let slope_distance = geometry::distance3(point1, point2);

    let (signed, bearing, apparent_dip) = if displacement.is_vertical() {
        let signed = displacement.dz * orientation.dip_radians().cos();
        debug!(
            "vertical displacement dz={} dip={} -> {}",
            displacement.dz, orientation.dip, signed
        );
        (signed, None, None)
    } else {
        let bearing = displacement.bearing();
        let apparent_dip = orientation.apparent_dip(bearing);
        let signed = displacement.dz * apparent_dip.cos() - horiz * apparent_dip.sin();
        debug!(
            "bearing={:.6} apparent_dip={:.6} horiz={} dz={} -> {}",
            bearing.to_degrees(),
            apparent_dip.to_degrees(),
            horiz,
            displacement.dz,
            signed
        );
        (
            signed,
            Some(bearing.to_degrees()),
            Some(apparent_dip.to_degrees()),
        )
    };
    if !signed.is_finite() {
        warn!("non-finite thickness from {:?} and {:?}", point1, point2);
    }

    TstSolution {
        displacement,
        horizontal_distance: horiz,
        slope_distance,
        bearing,
        apparent_dip,
        signed_thickness: signed,
        thickness: signed.abs(),
    }
}

/// Computes the true stratigraphic thickness between `point1` and `point2`
/// across a plane with the given orientation.
///
/// The result is non-negative and independent of point order. Ranges of
/// strike and dip are not checked here.
pub fn compute_tst(orientation: Orientation, point1: Point3, point2: Point3) -> f64 {
    solve(orientation, point1, point2).thickness
}

/// Same as [`compute_tst`] taking the eight raw numbers.
#[allow(clippy::too_many_arguments)]
pub fn tst_from_values(
    strike: f64,
    dip: f64,
    x1: f64,
    y1: f64,
    z1: f64,
    x2: f64,
    y2: f64,
    z2: f64,
) -> f64 {
    compute_tst(
        Orientation::new(strike, dip),
        Point3::new(x1, y1, z1),
        Point3::new(x2, y2, z2),
    )
}
