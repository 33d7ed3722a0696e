//! Core library for computing true stratigraphic thickness.

pub mod config;
pub mod form;
pub mod geometry;
pub mod input;
pub mod io;
pub mod orientation;
pub mod thickness;

pub use config::ReportConfig;
pub use form::{FormStatus, TstForm};
pub use geometry::Point3;
pub use input::{Field, FormValues, InputError, TstInput};
pub use orientation::Orientation;
pub use thickness::{compute_tst, solve, tst_from_values, TstSolution};
