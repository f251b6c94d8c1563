//! Math library for the Patas engine
//!
//! Small value types with no dependency on the platform math library.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - vectors with `+`, `-`, scalar `*` and `/`,
//!   magnitude and a normalize that returns zero for zero-length input
//! - [`Quaternion`] - Hamilton product, conjugate, inverse and vector rotation
//!
//! ## Scalar Functions
//!
//! [`scalar`] holds the iterative [`sqrt`], the Taylor-series [`sin`] and the
//! [`cos`]/[`tan`] built on it.

pub mod scalar;
mod vec2;
mod vec3;
mod vec4;
mod quaternion;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use quaternion::Quaternion;
pub use scalar::{sqrt, sin, cos, tan, to_radians, to_degrees, PI, E};
