//! Smooth (exponentially blended) Voronoi noise.
//!
//! Instead of tracking discrete nearest distances, every feature in the
//! window contributes `exp(-falloff * d)` and the sum is mapped back with
//! `-(1/falloff) * ln(sum)`. The result is a soft-minimum of the feature
//! distances: large falloff approaches the hard F1 field, small falloff
//! melts the cells together. The wider 5x5 window (3x3x3 in 3-D) keeps the
//! exponential tail from being clipped at cell borders.
//!
//! Feature points are anchored at the lattice corners (`zchash * jitter/2 +
//! cell`), a half cell off from the hard Voronoi family's center-anchored
//! layout.

use glam::{IVec2, IVec3, Vec2, Vec3, vec2, vec3};
use loam_hash::{pzchash_2_2, pzchash_3_3, zchash_2_2, zchash_3_3};

use crate::metric::DistanceMetric;
use crate::{Noise2D, Noise3D};

fn eval_smooth2(
    seed: f32,
    pos: Vec2,
    jitter: f32,
    falloff: f32,
    metric: DistanceMetric,
    period: Option<Vec2>,
) -> f32 {
    let id = pos.floor();
    let p = pos - id;

    let mut res = 0.0f32;
    for x in -2..=2 {
        for y in -2..=2 {
            let offset = vec2(x as f32, y as f32);
            let hc = id + offset;
            let jit = match period {
                Some(m) => pzchash_2_2(seed, hc, m),
                None => zchash_2_2(seed, hc),
            };
            let feature = jit * jitter * 0.5 + offset;
            let dist = metric.distance2(p - feature);
            res += (-falloff * dist).exp();
        }
    }

    -(1.0 / falloff) * res.ln()
}

fn eval_smooth3(
    seed: f32,
    pos: Vec3,
    jitter: f32,
    falloff: f32,
    metric: DistanceMetric,
    period: Option<Vec3>,
) -> f32 {
    let id = pos.floor();
    let p = pos - id;

    let mut res = 0.0f32;
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                let offset = vec3(x as f32, y as f32, z as f32);
                let hc = id + offset;
                let jit = match period {
                    Some(m) => pzchash_3_3(seed, hc, m),
                    None => zchash_3_3(seed, hc),
                };
                let feature = jit * jitter * 0.5 + offset;
                let dist = metric.distance3(p - feature);
                res += (-falloff * dist).exp();
            }
        }
    }

    -(1.0 / falloff) * res.ln()
}

// ============================================================
// Samplers
// ============================================================

/// 2-D smooth Voronoi noise.
///
/// `falloff` must be positive (documented precondition, not validated):
/// it controls how closely the soft minimum hugs the true nearest-feature
/// distance. The output can dip slightly below zero near features, since
/// several overlapping exponentials sum above 1. Defaults: jitter 1,
/// falloff 8, Euclidean metric.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use loam_noise::{Noise2D, SmoothVoronoi2D};
///
/// let soft = SmoothVoronoi2D::with_seed(4.0).falloff(16.0);
/// let v = soft.sample(Vec2::new(0.3, 0.8));
/// assert!(v.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothVoronoi2D {
    pub seed: f32,
    pub jitter: f32,
    pub falloff: f32,
    pub metric: DistanceMetric,
    pub period: Option<IVec2>,
}

impl Default for SmoothVoronoi2D {
    fn default() -> Self {
        Self {
            seed: 0.0,
            jitter: 1.0,
            falloff: 8.0,
            metric: DistanceMetric::default(),
            period: None,
        }
    }
}

impl SmoothVoronoi2D {
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

    pub fn falloff(mut self, falloff: f32) -> Self {
        self.falloff = falloff;
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

impl Noise2D for SmoothVoronoi2D {
    fn sample(&self, pos: Vec2) -> f32 {
        match self.period {
            Some(period) => {
                let m = period.as_vec2();
                eval_smooth2(self.seed, pos * m, self.jitter, self.falloff, self.metric, Some(m))
            }
            None => eval_smooth2(self.seed, pos, self.jitter, self.falloff, self.metric, None),
        }
    }
}

/// 3-D smooth Voronoi noise. See [`SmoothVoronoi2D`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothVoronoi3D {
    pub seed: f32,
    pub jitter: f32,
    pub falloff: f32,
    pub metric: DistanceMetric,
    pub period: Option<IVec3>,
}

impl Default for SmoothVoronoi3D {
    fn default() -> Self {
        Self {
            seed: 0.0,
            jitter: 1.0,
            falloff: 8.0,
            metric: DistanceMetric::default(),
            period: None,
        }
    }
}

impl SmoothVoronoi3D {
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

    pub fn falloff(mut self, falloff: f32) -> Self {
        self.falloff = falloff;
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

impl Noise3D for SmoothVoronoi3D {
    fn sample(&self, pos: Vec3) -> f32 {
        match self.period {
            Some(period) => {
                let m = period.as_vec3();
                eval_smooth3(self.seed, pos * m, self.jitter, self.falloff, self.metric, Some(m))
            }
            None => eval_smooth3(self.seed, pos, self.jitter, self.falloff, self.metric, None),
        }
    }
}

// ============================================================
// Free functions
// ============================================================

/// 2-D smooth Voronoi noise with the Euclidean metric.
#[inline]
pub fn svnoise2(seed: f32, pos: Vec2, jitter: f32, falloff: f32) -> f32 {
    eval_smooth2(seed, pos, jitter, falloff, DistanceMetric::Euclidean, None)
}

/// 3-D smooth Voronoi noise with the Euclidean metric.
#[inline]
pub fn svnoise3(seed: f32, pos: Vec3, jitter: f32, falloff: f32) -> f32 {
    eval_smooth3(seed, pos, jitter, falloff, DistanceMetric::Euclidean, None)
}

/// Tiling 2-D smooth Voronoi noise; `period` cells per unit tile.
#[inline]
pub fn psvnoise2(seed: f32, pos: Vec2, jitter: f32, falloff: f32, period: IVec2) -> f32 {
    SmoothVoronoi2D { period: Some(period), seed, jitter, falloff, ..SmoothVoronoi2D::default() }
        .sample(pos)
}

/// Tiling 3-D smooth Voronoi noise; `period` cells per unit tile.
#[inline]
pub fn psvnoise3(seed: f32, pos: Vec3, jitter: f32, falloff: f32, period: IVec3) -> f32 {
    SmoothVoronoi3D { period: Some(period), seed, jitter, falloff, ..SmoothVoronoi3D::default() }
        .sample(pos)
}
