//! Voronoise: the grid/jitter continuum between value noise and Voronoi.
//!
//! Two controls span a square of looks. `jitter` (the classic `u`) slides
//! feature points from the lattice corners (0, pure grid) to fully random
//! positions (1). `smoothness` (the classic `v`) blends from sharp
//! nearest-feature cells (0) to a wide smooth average (1). Every feature
//! carries a random value in `[0, 1)`; the sample is the kernel-weighted
//! average of those values and stays in `[0, 1]` while any weight
//! survives. At full jitter with zero smoothing every `f32` weight in the
//! window can underflow near a lattice corner; the average is then `0/0`
//! and surfaces as NaN rather than being patched.

use glam::{IVec2, IVec3, Vec2, Vec3, vec2, vec3};
use loam_hash::{hash_2_3, hash_3_4, phash_2_3, phash_3_4};

use crate::metric::DistanceMetric;
use crate::{Noise2D, Noise3D};

#[inline]
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Kernel sharpness from the smoothness control: 1 at full smoothing,
/// 64 at none.
#[inline]
fn sharpness(v: f32) -> f32 {
    1.0 + 63.0 * (1.0 - v).powi(4)
}

fn eval_voronoise2(
    seed: f32,
    pos: Vec2,
    u: f32,
    v: f32,
    metric: DistanceMetric,
    period: Option<Vec2>,
) -> f32 {
    let p = pos.floor();
    let f = pos - p;

    let k = sharpness(v);
    let mut va = 0.0f32;
    let mut wt = 0.0f32;

    for x in -2..=2 {
        for y in -2..=2 {
            let g = vec2(x as f32, y as f32);
            let o = match period {
                Some(m) => phash_2_3(seed, p + g, m),
                None => hash_2_3(seed, p + g),
            } * vec3(u, u, 1.0);
            let r = g - f + vec2(o.x, o.y);
            let d = metric.distance2(r);
            let w = (1.0 - smoothstep(0.0, std::f32::consts::SQRT_2, d)).powf(k);
            va += w * o.z;
            wt += w;
        }
    }

    va / wt
}

fn eval_voronoise3(
    seed: f32,
    pos: Vec3,
    u: f32,
    v: f32,
    metric: DistanceMetric,
    period: Option<Vec3>,
) -> f32 {
    let p = pos.floor();
    let f = pos - p;

    let k = sharpness(v);
    let mut va = 0.0f32;
    let mut wt = 0.0f32;

    // sqrt(3), the cell diagonal that normalizes the kernel span.
    const NORM: f32 = 1.732_050_8;

    for x in -2..=2 {
        for y in -2..=2 {
            for z in -2..=2 {
                let g = vec3(x as f32, y as f32, z as f32);
                let o = match period {
                    Some(m) => phash_3_4(seed, p + g, m),
                    None => hash_3_4(seed, p + g),
                } * glam::vec4(u, u, u, 1.0);
                let r = g - f + vec3(o.x, o.y, o.z);
                let d = metric.distance3(r);
                let w = (1.0 - smoothstep(0.0, NORM, d)).powf(k);
                va += w * o.w;
                wt += w;
            }
        }
    }

    va / wt
}

// ============================================================
// Samplers
// ============================================================

/// 2-D voronoise.
///
/// `jitter` and `smoothness` both live in `[0, 1]`; values outside are
/// accepted but not meaningful (full jitter with no smoothing can starve
/// the kernel weights). Corners of the control square: jitter 0 /
/// smoothness 1 is smooth value noise on the lattice, jitter 1 /
/// smoothness 0 is a Voronoi-like cell field.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use loam_noise::{Noise2D, Voronoise2D};
///
/// let cells = Voronoise2D::with_seed(2.0).jitter(1.0).smoothness(0.25);
/// let v = cells.sample(Vec2::new(0.25, 0.75));
/// assert!((0.0..=1.0).contains(&v));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Voronoise2D {
    pub seed: f32,
    /// Feature point jitter, the classic `u` control.
    pub jitter: f32,
    /// Value smoothing, the classic `v` control.
    pub smoothness: f32,
    pub metric: DistanceMetric,
    pub period: Option<IVec2>,
}

impl Default for Voronoise2D {
    fn default() -> Self {
        Self {
            seed: 0.0,
            jitter: 1.0,
            smoothness: 1.0,
            metric: DistanceMetric::default(),
            period: None,
        }
    }
}

impl Voronoise2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: f32) -> Self {
        Self { seed, ..Self::default() }
    }

    pub fn jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn smoothness(mut self, smoothness: f32) -> Self {
        self.smoothness = smoothness;
        self
    }

    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Makes the field tile with `period` cells per axis.
    pub fn period(mut self, period: IVec2) -> Self {
        self.period = Some(period);
        self
    }
}

impl Noise2D for Voronoise2D {
    fn sample(&self, pos: Vec2) -> f32 {
        match self.period {
            Some(period) => {
                let m = period.as_vec2();
                eval_voronoise2(self.seed, pos * m, self.jitter, self.smoothness, self.metric, Some(m))
            }
            None => eval_voronoise2(self.seed, pos, self.jitter, self.smoothness, self.metric, None),
        }
    }
}

/// 3-D voronoise. See [`Voronoise2D`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Voronoise3D {
    pub seed: f32,
    /// Feature point jitter, the classic `u` control.
    pub jitter: f32,
    /// Value smoothing, the classic `v` control.
    pub smoothness: f32,
    pub metric: DistanceMetric,
    pub period: Option<IVec3>,
}

impl Default for Voronoise3D {
    fn default() -> Self {
        Self {
            seed: 0.0,
            jitter: 1.0,
            smoothness: 1.0,
            metric: DistanceMetric::default(),
            period: None,
        }
    }
}

impl Voronoise3D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: f32) -> Self {
        Self { seed, ..Self::default() }
    }

    pub fn jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn smoothness(mut self, smoothness: f32) -> Self {
        self.smoothness = smoothness;
        self
    }

    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Makes the field tile with `period` cells per axis.
    pub fn period(mut self, period: IVec3) -> Self {
        self.period = Some(period);
        self
    }
}

impl Noise3D for Voronoise3D {
    fn sample(&self, pos: Vec3) -> f32 {
        match self.period {
            Some(period) => {
                let m = period.as_vec3();
                eval_voronoise3(self.seed, pos * m, self.jitter, self.smoothness, self.metric, Some(m))
            }
            None => eval_voronoise3(self.seed, pos, self.jitter, self.smoothness, self.metric, None),
        }
    }
}

// ============================================================
// Free functions
// ============================================================

/// 2-D voronoise with the Euclidean metric; `u` is jitter, `v` smoothness.
#[inline]
pub fn voronoise2(seed: f32, pos: Vec2, u: f32, v: f32) -> f32 {
    eval_voronoise2(seed, pos, u, v, DistanceMetric::Euclidean, None)
}

/// 3-D voronoise with the Euclidean metric; `u` is jitter, `v` smoothness.
#[inline]
pub fn voronoise3(seed: f32, pos: Vec3, u: f32, v: f32) -> f32 {
    eval_voronoise3(seed, pos, u, v, DistanceMetric::Euclidean, None)
}

/// Tiling 2-D voronoise; `period` cells per unit tile.
#[inline]
pub fn pvoronoise2(seed: f32, pos: Vec2, u: f32, v: f32, period: IVec2) -> f32 {
    Voronoise2D { period: Some(period), seed, jitter: u, smoothness: v, ..Voronoise2D::default() }
        .sample(pos)
}

/// Tiling 3-D voronoise; `period` cells per unit tile.
#[inline]
pub fn pvoronoise3(seed: f32, pos: Vec3, u: f32, v: f32, period: IVec3) -> f32 {
    Voronoise3D { period: Some(period), seed, jitter: u, smoothness: v, ..Voronoise3D::default() }
        .sample(pos)
}
