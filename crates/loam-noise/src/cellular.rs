//! Hard Voronoi (cellular) noise over jittered feature points.
//!
//! Every lattice cell owns one feature point. A sample scans the 3x3 (2-D)
//! or 3x3x3 (3-D) neighborhood around its cell and reports the nearest and
//! second-nearest feature distances, the winning cell's id value and both
//! feature positions. Distances honor the configured [`DistanceMetric`].

use glam::{IVec2, IVec3, Vec2, Vec3, vec2, vec3};
use loam_hash::{
    hash_2_1, hash_3_1, phash_2_1, phash_3_1, pzchash_2_2, pzchash_3_3, zchash_2_2, zchash_3_3,
};

use crate::metric::DistanceMetric;
use crate::{Noise2D, Noise3D};

/// Scalar channel used when a Voronoi sampler is driven through the
/// [`Noise2D`]/[`Noise3D`] traits (single-value contexts such as fractal
/// stacking).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellReturn {
    /// Distance to the nearest feature point.
    #[default]
    F1,
    /// Distance to the second-nearest feature point.
    F2,
    /// `f2 - f1`; zero on cell borders, rising toward cell interiors.
    Edge,
    /// The nearest cell's random id value (piecewise constant).
    CellValue,
}

/// Full result of one cellular noise sample in 2-D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSample2 {
    /// Random id of the nearest cell, uniform in `[0, 1)`.
    pub cell_value: f32,
    /// Distance to the nearest feature point.
    pub f1: f32,
    /// Distance to the second-nearest feature point; `f1 <= f2`.
    pub f2: f32,
    /// Nearest feature point, in the sampled coordinate space.
    pub p1: Vec2,
    /// Second-nearest feature point.
    pub p2: Vec2,
}

impl CellSample2 {
    /// Border-distance channel, `f2 - f1`.
    #[inline]
    pub fn edge(&self) -> f32 {
        self.f2 - self.f1
    }
}

/// Full result of one cellular noise sample in 3-D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSample3 {
    pub cell_value: f32,
    pub f1: f32,
    pub f2: f32,
    pub p1: Vec3,
    pub p2: Vec3,
}

impl CellSample3 {
    /// Border-distance channel, `f2 - f1`.
    #[inline]
    pub fn edge(&self) -> f32 {
        self.f2 - self.f1
    }
}

fn eval_cell2(
    seed: f32,
    pos: Vec2,
    jitter: f32,
    metric: DistanceMetric,
    period: Option<Vec2>,
) -> CellSample2 {
    let id = pos.floor();
    let p = pos - id;

    let mut f1 = f32::MAX;
    let mut f2 = f32::MAX;
    let mut cell_value = 0.0;
    let mut p1 = Vec2::ZERO;
    let mut p2 = Vec2::ZERO;

    for x in -1..=1 {
        for y in -1..=1 {
            let offset = vec2(x as f32, y as f32);
            let hc = id + offset;
            let jit = match period {
                Some(m) => pzchash_2_2(seed, hc, m),
                None => zchash_2_2(seed, hc),
            };
            let feature = jit * jitter * 0.5 + 0.5 + offset;
            let dist = metric.distance2(p - feature);

            // Strict comparisons keep the first candidate on ties, so the
            // winner only depends on scan order, never on memory layout.
            if dist < f1 {
                f2 = f1;
                p2 = p1;
                f1 = dist;
                p1 = feature + id;
                cell_value = match period {
                    Some(m) => phash_2_1(seed, hc, m),
                    None => hash_2_1(seed, hc),
                };
            } else if dist < f2 {
                f2 = dist;
                p2 = feature + id;
            }
        }
    }

    CellSample2 { cell_value, f1, f2, p1, p2 }
}

fn eval_cell3(
    seed: f32,
    pos: Vec3,
    jitter: f32,
    metric: DistanceMetric,
    period: Option<Vec3>,
) -> CellSample3 {
    let id = pos.floor();
    let p = pos - id;

    let mut f1 = f32::MAX;
    let mut f2 = f32::MAX;
    let mut cell_value = 0.0;
    let mut p1 = Vec3::ZERO;
    let mut p2 = Vec3::ZERO;

    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                let offset = vec3(x as f32, y as f32, z as f32);
                let hc = id + offset;
                let jit = match period {
                    Some(m) => pzchash_3_3(seed, hc, m),
                    None => zchash_3_3(seed, hc),
                };
                let feature = jit * jitter * 0.5 + 0.5 + offset;
                let dist = metric.distance3(p - feature);

                if dist < f1 {
                    f2 = f1;
                    p2 = p1;
                    f1 = dist;
                    p1 = feature + id;
                    cell_value = match period {
                        Some(m) => phash_3_1(seed, hc, m),
                        None => hash_3_1(seed, hc),
                    };
                } else if dist < f2 {
                    f2 = dist;
                    p2 = feature + id;
                }
            }
        }
    }

    CellSample3 { cell_value, f1, f2, p1, p2 }
}

// ============================================================
// Samplers
// ============================================================

/// 2-D cellular (Voronoi) noise.
///
/// `jitter` in `[0, 1]` moves each feature point away from its cell center
/// by up to half a cell, so features always stay inside their own cell.
/// Values above 1 are accepted but let features spill into neighbor cells,
/// which can clip F2 against the 3x3 window. With a period set, coordinates
/// are in tiles (`period` cells per axis) and the field repeats every 1.0;
/// reported feature points are scaled back into tile space.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use loam_noise::{DistanceMetric, Voronoi2D};
///
/// let voronoi = Voronoi2D::with_seed(3.0).metric(DistanceMetric::Manhattan);
/// let s = voronoi.sample_cell(Vec2::new(0.7, 0.3));
/// assert!(s.f1 <= s.f2);
/// assert!(s.cell_value >= 0.0 && s.cell_value < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Voronoi2D {
    pub seed: f32,
    pub jitter: f32,
    pub metric: DistanceMetric,
    pub period: Option<IVec2>,
    pub return_type: CellReturn,
}

impl Default for Voronoi2D {
    fn default() -> Self {
        Self {
            seed: 0.0,
            jitter: 1.0,
            metric: DistanceMetric::default(),
            period: None,
            return_type: CellReturn::default(),
        }
    }
}

impl Voronoi2D {
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

    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Makes the field tile with `period` cells per axis.
    pub fn period(mut self, period: IVec2) -> Self {
        self.period = Some(period);
        self
    }

    /// Scalar channel reported through the [`Noise2D`] trait.
    pub fn return_type(mut self, return_type: CellReturn) -> Self {
        self.return_type = return_type;
        self
    }

    /// Samples all cellular channels at once.
    pub fn sample_cell(&self, pos: Vec2) -> CellSample2 {
        match self.period {
            Some(period) => {
                let m = period.as_vec2();
                let mut s = eval_cell2(self.seed, pos * m, self.jitter, self.metric, Some(m));
                s.p1 /= m;
                s.p2 /= m;
                s
            }
            None => eval_cell2(self.seed, pos, self.jitter, self.metric, None),
        }
    }
}

impl Noise2D for Voronoi2D {
    fn sample(&self, pos: Vec2) -> f32 {
        let s = self.sample_cell(pos);
        match self.return_type {
            CellReturn::F1 => s.f1,
            CellReturn::F2 => s.f2,
            CellReturn::Edge => s.f2 - s.f1,
            CellReturn::CellValue => s.cell_value,
        }
    }
}

/// 3-D cellular (Voronoi) noise. See [`Voronoi2D`] for the conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Voronoi3D {
    pub seed: f32,
    pub jitter: f32,
    pub metric: DistanceMetric,
    pub period: Option<IVec3>,
    pub return_type: CellReturn,
}

impl Default for Voronoi3D {
    fn default() -> Self {
        Self {
            seed: 0.0,
            jitter: 1.0,
            metric: DistanceMetric::default(),
            period: None,
            return_type: CellReturn::default(),
        }
    }
}

impl Voronoi3D {
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

    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Makes the field tile with `period` cells per axis.
    pub fn period(mut self, period: IVec3) -> Self {
        self.period = Some(period);
        self
    }

    /// Scalar channel reported through the [`Noise3D`] trait.
    pub fn return_type(mut self, return_type: CellReturn) -> Self {
        self.return_type = return_type;
        self
    }

    /// Samples all cellular channels at once.
    pub fn sample_cell(&self, pos: Vec3) -> CellSample3 {
        match self.period {
            Some(period) => {
                let m = period.as_vec3();
                let mut s = eval_cell3(self.seed, pos * m, self.jitter, self.metric, Some(m));
                s.p1 /= m;
                s.p2 /= m;
                s
            }
            None => eval_cell3(self.seed, pos, self.jitter, self.metric, None),
        }
    }
}

impl Noise3D for Voronoi3D {
    fn sample(&self, pos: Vec3) -> f32 {
        let s = self.sample_cell(pos);
        match self.return_type {
            CellReturn::F1 => s.f1,
            CellReturn::F2 => s.f2,
            CellReturn::Edge => s.f2 - s.f1,
            CellReturn::CellValue => s.cell_value,
        }
    }
}

// ============================================================
// Free functions
// ============================================================

/// 2-D cellular noise with the Euclidean metric.
#[inline]
pub fn vnoise2(seed: f32, pos: Vec2, jitter: f32) -> CellSample2 {
    eval_cell2(seed, pos, jitter, DistanceMetric::Euclidean, None)
}

/// 3-D cellular noise with the Euclidean metric.
#[inline]
pub fn vnoise3(seed: f32, pos: Vec3, jitter: f32) -> CellSample3 {
    eval_cell3(seed, pos, jitter, DistanceMetric::Euclidean, None)
}

/// Tiling 2-D cellular noise; `period` cells per unit tile.
#[inline]
pub fn pvnoise2(seed: f32, pos: Vec2, jitter: f32, period: IVec2) -> CellSample2 {
    Voronoi2D { period: Some(period), seed, jitter, ..Voronoi2D::default() }.sample_cell(pos)
}

/// Tiling 3-D cellular noise; `period` cells per unit tile.
#[inline]
pub fn pvnoise3(seed: f32, pos: Vec3, jitter: f32, period: IVec3) -> CellSample3 {
    Voronoi3D { period: Some(period), seed, jitter, ..Voronoi3D::default() }.sample_cell(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{ivec2, ivec3};

    const METRICS: [DistanceMetric; 4] = [
        DistanceMetric::Euclidean,
        DistanceMetric::Manhattan,
        DistanceMetric::Chebyshev,
        DistanceMetric::Minkowski(3.0),
    ];

    #[test]
    fn test_f1_never_exceeds_f2() {
        for metric in METRICS {
            let voronoi = Voronoi2D::with_seed(1.0).metric(metric);
            for i in 0..24 {
                for j in 0..24 {
                    let pos = vec2(i as f32 * 0.317 - 3.0, j as f32 * 0.277 - 4.0);
                    let s = voronoi.sample_cell(pos);
                    assert!(s.f1 <= s.f2, "{metric:?} {pos:?}: {} > {}", s.f1, s.f2);
                    assert!(s.f1 >= 0.0 && s.f1.is_finite());
                    assert!(s.f2.is_finite());
                    assert!(s.cell_value >= 0.0 && s.cell_value < 1.0);
                }
            }
        }
    }

    #[test]
    fn test_f1_f2_3d() {
        let voronoi = Voronoi3D::with_seed(2.0);
        for i in 0..8 {
            for j in 0..8 {
                for k in 0..4 {
                    let pos = vec3(
                        i as f32 * 0.43 - 1.5,
                        j as f32 * 0.39 + 0.2,
                        k as f32 * 0.57 - 0.8,
                    );
                    let s = voronoi.sample_cell(pos);
                    assert!(s.f1 <= s.f2, "{pos:?}");
                    assert!(s.f1 >= 0.0 && s.f2.is_finite());
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let pos = vec2(0.5, 0.5);
        assert_eq!(vnoise2(1.0, pos, 1.0), vnoise2(1.0, pos, 1.0));
        let pos3 = vec3(0.1, 0.2, 0.3);
        assert_eq!(vnoise3(4.0, pos3, 0.8), vnoise3(4.0, pos3, 0.8));
    }

    #[test]
    fn test_zero_jitter_features_sit_on_cell_centers() {
        let s = vnoise2(5.0, vec2(0.5, 0.5), 0.0);
        assert_eq!(s.f1, 0.0);
        assert_eq!(s.f2, 1.0);
        assert_eq!(s.p1, vec2(0.5, 0.5));

        let s = vnoise2(5.0, vec2(0.2, 0.2), 0.0);
        assert_eq!(s.p1, vec2(0.5, 0.5));

        let s3 = vnoise3(5.0, vec3(2.5, -1.5, 0.5), 0.0);
        assert_eq!(s3.f1, 0.0);
        assert_eq!(s3.p1, vec3(2.5, -1.5, 0.5));
    }

    #[test]
    fn test_ties_go_to_scan_order() {
        // (0.0, 0.5) is equidistant from the centers at (-0.5, 0.5) and
        // (0.5, 0.5); the x = -1 column is scanned first and must win.
        let s = vnoise2(0.0, vec2(0.0, 0.5), 0.0);
        assert_eq!(s.f1, 0.5);
        assert_eq!(s.f2, 0.5);
        assert_eq!(s.p1, vec2(-0.5, 0.5));
        assert_eq!(s.p2, vec2(0.5, 0.5));
    }

    #[test]
    fn test_jitter_keeps_features_in_cells() {
        // At full jitter a feature stays within its own cell, so f1 is
        // never farther than the cell diagonal.
        for i in 0..48 {
            let pos = vec2(i as f32 * 0.211 - 5.0, i as f32 * 0.173 + 2.0);
            let s = vnoise2(9.0, pos, 1.0);
            assert!(s.f1 < std::f32::consts::SQRT_2, "{pos:?} -> {}", s.f1);
            let cell = pos.floor();
            let p1_cell = s.p1.floor();
            assert!(
                (p1_cell.x - cell.x).abs() <= 1.0 && (p1_cell.y - cell.y).abs() <= 1.0,
                "feature {:?} too far from cell {cell:?}",
                s.p1
            );
        }
    }

    #[test]
    fn test_metric_ordering() {
        // Pointwise: chebyshev <= euclidean <= manhattan, preserved by min.
        for i in 0..16 {
            let pos = vec2(i as f32 * 0.37, i as f32 * -0.23 + 1.0);
            let che = Voronoi2D::with_seed(3.0)
                .metric(DistanceMetric::Chebyshev)
                .sample_cell(pos)
                .f1;
            let euc = Voronoi2D::with_seed(3.0).sample_cell(pos).f1;
            let man = Voronoi2D::with_seed(3.0)
                .metric(DistanceMetric::Manhattan)
                .sample_cell(pos)
                .f1;
            assert!(che <= euc + 1e-6 && euc <= man + 1e-6, "{che} {euc} {man}");
        }
    }

    #[test]
    fn test_tiles_exactly_at_dyadic_points() {
        let period = ivec2(4, 4);
        let base = vec2(0.28125, 0.59375);
        let a = pvnoise2(7.0, base, 1.0, period);
        for shift in [vec2(1.0, 0.0), vec2(-2.0, 3.0)] {
            let b = pvnoise2(7.0, base + shift, 1.0, period);
            assert_eq!(a.f1.to_bits(), b.f1.to_bits(), "shift {shift:?}");
            assert_eq!(a.f2.to_bits(), b.f2.to_bits());
            assert_eq!(a.cell_value.to_bits(), b.cell_value.to_bits());
        }

        let period3 = ivec3(2, 2, 4);
        let base3 = vec3(0.375, 0.8125, 0.03125);
        let a3 = pvnoise3(1.0, base3, 1.0, period3);
        let b3 = pvnoise3(1.0, base3 + vec3(1.0, -1.0, 2.0), 1.0, period3);
        assert_eq!(a3.f1.to_bits(), b3.f1.to_bits());
        assert_eq!(a3.cell_value.to_bits(), b3.cell_value.to_bits());
    }

    #[test]
    fn test_tiled_feature_points_translate_with_query() {
        let period = ivec2(4, 4);
        let base = vec2(0.28125, 0.59375);
        let a = pvnoise2(7.0, base, 1.0, period);
        let b = pvnoise2(7.0, base + vec2(1.0, 0.0), 1.0, period);
        let d = b.p1 - (a.p1 + vec2(1.0, 0.0));
        assert!(d.length() < 1e-5, "p1 drifted by {d:?}");
    }

    #[test]
    fn test_scalar_return_modes() {
        let pos = vec2(0.4, 1.9);
        let voronoi = Voronoi2D::with_seed(2.0);
        let s = voronoi.sample_cell(pos);
        assert_eq!(voronoi.sample(pos), s.f1);
        assert_eq!(voronoi.return_type(CellReturn::F2).sample(pos), s.f2);
        assert_eq!(voronoi.return_type(CellReturn::Edge).sample(pos), s.edge());
        assert_eq!(
            voronoi.return_type(CellReturn::CellValue).sample(pos),
            s.cell_value
        );
        assert!(s.edge() >= 0.0);
    }

    #[test]
    fn test_seeds_decorrelate() {
        let pos = vec2(0.6, 0.6);
        let a = vnoise2(1.0, pos, 1.0);
        let b = vnoise2(2.0, pos, 1.0);
        assert!(a.f1 != b.f1 || a.cell_value != b.cell_value);
    }
}
