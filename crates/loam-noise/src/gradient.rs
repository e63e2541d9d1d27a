//! Lattice gradient noise, 2-D and 3-D, with analytic derivatives.
//!
//! Each lattice cell blends the contributions of its corner gradients with
//! a quintic fade, giving a C2-continuous signed field in roughly
//! `[-1, 1]` (not clamped). The derivative variants return the exact
//! gradient of that blend, so normals and slope effects don't need finite
//! differences.

use glam::{IVec2, IVec3, Vec2, Vec3, vec2, vec3};
use loam_hash::{fmodr2, fmodr3, zchash_2_2, zchash_3_3};

use crate::{Noise2D, Noise3D};

/// Quintic fade `w^3 (w (6w - 15) + 10)`.
#[inline]
fn fade2(w: Vec2) -> Vec2 {
    w * w * w * (w * (w * 6.0 - 15.0) + 10.0)
}

#[inline]
fn fade3(w: Vec3) -> Vec3 {
    w * w * w * (w * (w * 6.0 - 15.0) + 10.0)
}

/// Fade derivative `30 w^2 (w (w - 2) + 1)`.
#[inline]
fn fade_d2(w: Vec2) -> Vec2 {
    30.0 * w * w * (w * (w - 2.0) + 1.0)
}

#[inline]
fn fade_d3(w: Vec3) -> Vec3 {
    30.0 * w * w * (w * (w - 2.0) + 1.0)
}

#[inline]
fn corner_gradients2(seed: f32, p: Vec2, period: Option<Vec2>) -> [Vec2; 4] {
    let mut keys = [p, p + vec2(1.0, 0.0), p + vec2(0.0, 1.0), p + Vec2::ONE];
    if let Some(m) = period {
        for k in &mut keys {
            *k = fmodr2(*k, m);
        }
    }
    keys.map(|k| zchash_2_2(seed, k))
}

#[inline]
fn corner_gradients3(seed: f32, p: Vec3, period: Option<Vec3>) -> [Vec3; 8] {
    let mut keys = [
        p,
        p + vec3(1.0, 0.0, 0.0),
        p + vec3(0.0, 1.0, 0.0),
        p + vec3(1.0, 1.0, 0.0),
        p + vec3(0.0, 0.0, 1.0),
        p + vec3(1.0, 0.0, 1.0),
        p + vec3(0.0, 1.0, 1.0),
        p + Vec3::ONE,
    ];
    if let Some(m) = period {
        for k in &mut keys {
            *k = fmodr3(*k, m);
        }
    }
    keys.map(|k| zchash_3_3(seed, k))
}

fn eval2(seed: f32, pos: Vec2, period: Option<Vec2>) -> f32 {
    let p = pos.floor();
    let w = pos - p;
    let u = fade2(w);

    let [ga, gb, gc, gd] = corner_gradients2(seed, p, period);
    let va = ga.dot(w);
    let vb = gb.dot(w - vec2(1.0, 0.0));
    let vc = gc.dot(w - vec2(0.0, 1.0));
    let vd = gd.dot(w - Vec2::ONE);

    va + u.x * (vb - va) + u.y * (vc - va) + u.x * u.y * (va - vb - vc + vd)
}

fn eval2_d(seed: f32, pos: Vec2, period: Option<Vec2>) -> NoiseDeriv2 {
    let p = pos.floor();
    let w = pos - p;
    let u = fade2(w);
    let du = fade_d2(w);

    let [ga, gb, gc, gd] = corner_gradients2(seed, p, period);
    let va = ga.dot(w);
    let vb = gb.dot(w - vec2(1.0, 0.0));
    let vc = gc.dot(w - vec2(0.0, 1.0));
    let vd = gd.dot(w - Vec2::ONE);

    let value = va + u.x * (vb - va) + u.y * (vc - va) + u.x * u.y * (va - vb - vc + vd);
    let gradient = ga
        + u.x * (gb - ga)
        + u.y * (gc - ga)
        + u.x * u.y * (ga - gb - gc + gd)
        + du * (vec2(u.y, u.x) * (va - vb - vc + vd) + vec2(vb, vc) - va);

    NoiseDeriv2 { value, gradient }
}

fn eval3(seed: f32, pos: Vec3, period: Option<Vec3>) -> f32 {
    let p = pos.floor();
    let w = pos - p;
    let u = fade3(w);

    let [ga, gb, gc, gd, ge, gf, gg, gh] = corner_gradients3(seed, p, period);
    let va = ga.dot(w);
    let vb = gb.dot(w - vec3(1.0, 0.0, 0.0));
    let vc = gc.dot(w - vec3(0.0, 1.0, 0.0));
    let vd = gd.dot(w - vec3(1.0, 1.0, 0.0));
    let ve = ge.dot(w - vec3(0.0, 0.0, 1.0));
    let vf = gf.dot(w - vec3(1.0, 0.0, 1.0));
    let vg = gg.dot(w - vec3(0.0, 1.0, 1.0));
    let vh = gh.dot(w - Vec3::ONE);

    va + u.x * (vb - va)
        + u.y * (vc - va)
        + u.z * (ve - va)
        + u.x * u.y * (va - vb - vc + vd)
        + u.y * u.z * (va - vc - ve + vg)
        + u.z * u.x * (va - vb - ve + vf)
        + u.x * u.y * u.z * (-va + vb + vc - vd + ve - vf - vg + vh)
}

fn eval3_d(seed: f32, pos: Vec3, period: Option<Vec3>) -> NoiseDeriv3 {
    let p = pos.floor();
    let w = pos - p;
    let u = fade3(w);
    let du = fade_d3(w);

    let [ga, gb, gc, gd, ge, gf, gg, gh] = corner_gradients3(seed, p, period);
    let va = ga.dot(w);
    let vb = gb.dot(w - vec3(1.0, 0.0, 0.0));
    let vc = gc.dot(w - vec3(0.0, 1.0, 0.0));
    let vd = gd.dot(w - vec3(1.0, 1.0, 0.0));
    let ve = ge.dot(w - vec3(0.0, 0.0, 1.0));
    let vf = gf.dot(w - vec3(1.0, 0.0, 1.0));
    let vg = gg.dot(w - vec3(0.0, 1.0, 1.0));
    let vh = gh.dot(w - Vec3::ONE);

    // Face and volume deltas shared by the blend and its derivative.
    let kx = vb - va;
    let ky = vc - va;
    let kz = ve - va;
    let kxy = va - vb - vc + vd;
    let kyz = va - vc - ve + vg;
    let kzx = va - vb - ve + vf;
    let kxyz = -va + vb + vc - vd + ve - vf - vg + vh;

    let value = va
        + u.x * kx
        + u.y * ky
        + u.z * kz
        + u.x * u.y * kxy
        + u.y * u.z * kyz
        + u.z * u.x * kzx
        + u.x * u.y * u.z * kxyz;

    let gradient = ga
        + u.x * (gb - ga)
        + u.y * (gc - ga)
        + u.z * (ge - ga)
        + u.x * u.y * (ga - gb - gc + gd)
        + u.y * u.z * (ga - gc - ge + gg)
        + u.z * u.x * (ga - gb - ge + gf)
        + u.x * u.y * u.z * (-ga + gb + gc - gd + ge - gf - gg + gh)
        + du * vec3(
            kx + kxy * u.y + kzx * u.z + kxyz * u.y * u.z,
            ky + kyz * u.z + kxy * u.x + kxyz * u.z * u.x,
            kz + kzx * u.x + kyz * u.y + kxyz * u.x * u.y,
        );

    NoiseDeriv3 { value, gradient }
}

// ============================================================
// Samplers
// ============================================================

/// Value and analytic gradient of a 2-D noise sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseDeriv2 {
    pub value: f32,
    pub gradient: Vec2,
}

/// Value and analytic gradient of a 3-D noise sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseDeriv3 {
    pub value: f32,
    pub gradient: Vec3,
}

/// 2-D gradient noise.
///
/// Signed output, roughly `[-1, 1]`, zero at every lattice point. With a
/// period set, coordinates are measured in tiles instead of cells: the
/// unit square holds `period` lattice cells per axis and the field repeats
/// exactly every 1.0 (and so every whole multiple of the tile).
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use loam_noise::GradientNoise2D;
///
/// let noise = GradientNoise2D::with_seed(7.0);
/// let v = noise.sample(Vec2::new(0.4, 1.7));
/// assert!(v > -1.5 && v < 1.5);
///
/// let d = noise.sample_with_gradient(Vec2::new(0.4, 1.7));
/// assert_eq!(d.value, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientNoise2D {
    pub seed: f32,
    /// Lattice cells per tile. Components must be >= 1 for meaningful
    /// tiling; this is not validated.
    pub period: Option<IVec2>,
}

impl GradientNoise2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: f32) -> Self {
        Self { seed, period: None }
    }

    /// Makes the field tile with `period` cells per axis.
    pub fn period(mut self, period: IVec2) -> Self {
        self.period = Some(period);
        self
    }

    /// Samples the field value.
    pub fn sample(&self, pos: Vec2) -> f32 {
        match self.period {
            Some(period) => {
                let m = period.as_vec2();
                eval2(self.seed, pos * m, Some(m))
            }
            None => eval2(self.seed, pos, None),
        }
    }

    /// Samples the field value together with its analytic gradient.
    ///
    /// The gradient is measured per lattice cell. For tiled samplers that
    /// means it is the derivative with respect to the scaled (cell)
    /// coordinate; multiply by the period to get the slope per tile unit.
    pub fn sample_with_gradient(&self, pos: Vec2) -> NoiseDeriv2 {
        match self.period {
            Some(period) => {
                let m = period.as_vec2();
                eval2_d(self.seed, pos * m, Some(m))
            }
            None => eval2_d(self.seed, pos, None),
        }
    }
}

/// 3-D gradient noise. See [`GradientNoise2D`] for the field conventions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientNoise3D {
    pub seed: f32,
    /// Lattice cells per tile. Components must be >= 1 for meaningful
    /// tiling; this is not validated.
    pub period: Option<IVec3>,
}

impl GradientNoise3D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: f32) -> Self {
        Self { seed, period: None }
    }

    /// Makes the field tile with `period` cells per axis.
    pub fn period(mut self, period: IVec3) -> Self {
        self.period = Some(period);
        self
    }

    /// Samples the field value.
    pub fn sample(&self, pos: Vec3) -> f32 {
        match self.period {
            Some(period) => {
                let m = period.as_vec3();
                eval3(self.seed, pos * m, Some(m))
            }
            None => eval3(self.seed, pos, None),
        }
    }

    /// Samples the field value together with its analytic gradient (per
    /// lattice cell, as in [`GradientNoise2D::sample_with_gradient`]).
    pub fn sample_with_gradient(&self, pos: Vec3) -> NoiseDeriv3 {
        match self.period {
            Some(period) => {
                let m = period.as_vec3();
                eval3_d(self.seed, pos * m, Some(m))
            }
            None => eval3_d(self.seed, pos, None),
        }
    }
}

impl Noise2D for GradientNoise2D {
    fn sample(&self, pos: Vec2) -> f32 {
        GradientNoise2D::sample(self, pos)
    }
}

impl Noise3D for GradientNoise3D {
    fn sample(&self, pos: Vec3) -> f32 {
        GradientNoise3D::sample(self, pos)
    }
}

// ============================================================
// Free functions
// ============================================================

/// 2-D gradient noise value at `pos`.
#[inline]
pub fn noise2(seed: f32, pos: Vec2) -> f32 {
    eval2(seed, pos, None)
}

/// 2-D gradient noise value and gradient at `pos`.
#[inline]
pub fn noise2d(seed: f32, pos: Vec2) -> NoiseDeriv2 {
    eval2_d(seed, pos, None)
}

/// Tiling 2-D gradient noise value; `period` cells per unit tile.
#[inline]
pub fn pnoise2(seed: f32, pos: Vec2, period: IVec2) -> f32 {
    GradientNoise2D { seed, period: Some(period) }.sample(pos)
}

/// Tiling 2-D gradient noise value and per-cell gradient.
#[inline]
pub fn pnoise2d(seed: f32, pos: Vec2, period: IVec2) -> NoiseDeriv2 {
    GradientNoise2D { seed, period: Some(period) }.sample_with_gradient(pos)
}

/// 3-D gradient noise value at `pos`.
#[inline]
pub fn noise3(seed: f32, pos: Vec3) -> f32 {
    eval3(seed, pos, None)
}

/// 3-D gradient noise value and gradient at `pos`.
#[inline]
pub fn noise3d(seed: f32, pos: Vec3) -> NoiseDeriv3 {
    eval3_d(seed, pos, None)
}

/// Tiling 3-D gradient noise value; `period` cells per unit tile.
#[inline]
pub fn pnoise3(seed: f32, pos: Vec3, period: IVec3) -> f32 {
    GradientNoise3D { seed, period: Some(period) }.sample(pos)
}

/// Tiling 3-D gradient noise value and per-cell gradient.
#[inline]
pub fn pnoise3d(seed: f32, pos: Vec3, period: IVec3) -> NoiseDeriv3 {
    GradientNoise3D { seed, period: Some(period) }.sample_with_gradient(pos)
}
