//! Seeded, tileable noise functions for procedural generation.
//!
//! Every sampler is driven by the scrambling hashes from `loam-hash`, so
//! fields are deterministic, seedable with a plain `f32`, and can be made
//! to tile exactly with an integer period per axis.
//!
//! # Core Types
//!
//! - [`GradientNoise2D`] / [`GradientNoise3D`] - smooth signed noise with
//!   analytic gradients
//! - [`Voronoi2D`] / [`Voronoi3D`] - hard cellular noise (F1, F2, edges,
//!   cell ids)
//! - [`SmoothVoronoi2D`] / [`SmoothVoronoi3D`] - cellular noise with a
//!   soft minimum
//! - [`Voronoise2D`] / [`Voronoise3D`] - the grid/jitter blend between
//!   value noise and Voronoi
//! - [`Fbm`] - fractal layering over any of the above
//!
//! # Struct-based API
//!
//! All noise types are structs that can be configured and sampled:
//!
//! ```
//! use glam::Vec2;
//! use loam_noise::{GradientNoise2D, Noise2D};
//!
//! let noise = GradientNoise2D::new();
//! let value = noise.sample(Vec2::new(1.5, 2.5));
//! assert!(value.abs() < 1.0);
//!
//! // With custom seed
//! let seeded = GradientNoise2D::with_seed(42.0);
//! ```
//!
//! Free functions mirror the structs for one-off calls: [`noise2`],
//! [`vnoise2`], [`svnoise2`], [`voronoise2`] and their 3-D and periodic
//! (`p`-prefixed) forms.
//!
//! # Composing Noise
//!
//! Use [`Fbm`] for fractal Brownian motion:
//!
//! ```
//! use glam::Vec2;
//! use loam_noise::{Fbm, GradientNoise2D, Noise2D};
//!
//! let fbm = Fbm::new(GradientNoise2D::new())
//!     .octaves(4)
//!     .lacunarity(2.0)
//!     .persistence(0.5);
//!
//! let value = fbm.sample(Vec2::new(1.0, 2.0));
//! assert!(value.abs() <= 1.0);
//! ```

use glam::{Vec2, Vec3};

// =============================================================================
// Noise Traits
// =============================================================================

/// Trait for 2D noise functions.
pub trait Noise2D {
    /// Sample the noise at position `pos`.
    fn sample(&self, pos: Vec2) -> f32;
}

/// Trait for 3D noise functions.
pub trait Noise3D {
    /// Sample the noise at position `pos`.
    fn sample(&self, pos: Vec3) -> f32;
}

mod cellular;
mod fbm;
mod gradient;
mod metric;
mod smooth;
mod voronoise;

pub use cellular::{
    CellReturn, CellSample2, CellSample3, Voronoi2D, Voronoi3D, pvnoise2, pvnoise3, vnoise2,
    vnoise3,
};
pub use fbm::Fbm;
pub use gradient::{
    GradientNoise2D, GradientNoise3D, NoiseDeriv2, NoiseDeriv3, noise2, noise2d, noise3, noise3d,
    pnoise2, pnoise2d, pnoise3, pnoise3d,
};
pub use metric::{DistanceMetric, ParseMetricError};
pub use smooth::{SmoothVoronoi2D, SmoothVoronoi3D, psvnoise2, psvnoise3, svnoise2, svnoise3};
pub use voronoise::{Voronoise2D, Voronoise3D, pvoronoise2, pvoronoise3, voronoise2, voronoise3};
