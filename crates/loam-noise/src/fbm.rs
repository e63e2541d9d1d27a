//! Fractal layering over any noise source.

use glam::{Vec2, Vec3};

use crate::{Noise2D, Noise3D};

/// Fractal Brownian Motion - layers multiple octaves of noise.
///
/// Can wrap any noise type to add fractal detail. The result is
/// normalized by the total amplitude, so it spans the same range as the
/// wrapped noise. With `ridged` set, each octave is folded around zero
/// (`(1 - |n|)^2`) before accumulation, which turns zero crossings of a
/// signed source into sharp creases.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use loam_noise::{Fbm, GradientNoise2D, Noise2D};
///
/// let fbm = Fbm::new(GradientNoise2D::new())
///     .octaves(4)
///     .lacunarity(2.0)
///     .persistence(0.5);
///
/// let value = fbm.sample(Vec2::new(1.0, 2.0));
/// assert!(value.abs() <= 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fbm<N> {
    /// Base noise function.
    pub noise: N,
    /// Number of noise layers.
    pub octaves: u32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Amplitude multiplier per octave.
    pub persistence: f32,
    /// Fold each octave around zero for ridge lines.
    pub ridged: bool,
}

impl<N> Fbm<N> {
    /// Creates a new fBm with default parameters (4 octaves, 2.0 lacunarity, 0.5 persistence).
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
            ridged: false,
        }
    }

    /// Sets the number of octaves.
    pub fn octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the lacunarity (frequency multiplier per octave).
    pub fn lacunarity(mut self, lacunarity: f32) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Sets the persistence (amplitude multiplier per octave).
    pub fn persistence(mut self, persistence: f32) -> Self {
        self.persistence = persistence;
        self
    }

    /// Enables or disables the ridge fold.
    pub fn ridged(mut self, ridged: bool) -> Self {
        self.ridged = ridged;
        self
    }

    #[inline]
    fn shape(&self, n: f32) -> f32 {
        if self.ridged {
            let r = 1.0 - n.abs();
            r * r
        } else {
            n
        }
    }
}

impl<N: Noise2D> Noise2D for Fbm<N> {
    fn sample(&self, pos: Vec2) -> f32 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..self.octaves {
            value += self.shape(self.noise.sample(pos * frequency)) * amplitude;
            max_value += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        value / max_value
    }
}

impl<N: Noise3D> Noise3D for Fbm<N> {
    fn sample(&self, pos: Vec3) -> f32 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..self.octaves {
            value += self.shape(self.noise.sample(pos * frequency)) * amplitude;
            max_value += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        value / max_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cellular::{CellReturn, Voronoi2D};
    use crate::gradient::{GradientNoise2D, GradientNoise3D};
    use glam::{vec2, vec3};

    #[test]
    fn test_single_octave_matches_base() {
        let base = GradientNoise2D::with_seed(1.0);
        let fbm = Fbm::new(base).octaves(1);
        for i in 0..8 {
            let pos = vec2(i as f32 * 0.61, 2.0 - i as f32 * 0.37);
            assert_eq!(fbm.sample(pos), Noise2D::sample(&base, pos), "{pos:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        let fbm = Fbm::new(GradientNoise2D::with_seed(3.0)).octaves(5);
        let pos = vec2(0.7, -1.3);
        assert_eq!(fbm.sample(pos).to_bits(), fbm.sample(pos).to_bits());
    }

    #[test]
    fn test_output_bounded_by_base_range() {
        let fbm = Fbm::new(GradientNoise2D::with_seed(2.0)).octaves(6);
        for i in 0..40 {
            let pos = vec2(i as f32 * 0.173, i as f32 * -0.119 + 0.5);
            let v = fbm.sample(pos);
            assert!(v.abs() <= 1.0, "{pos:?}: {v}");
        }
    }

    #[test]
    fn test_ridged_stays_in_unit_range() {
        let fbm = Fbm::new(GradientNoise2D::with_seed(7.0)).ridged(true);
        for i in 0..40 {
            let pos = vec2(i as f32 * 0.241 - 3.0, i as f32 * 0.133);
            let v = fbm.sample(pos);
            assert!((0.0..=1.0).contains(&v), "{pos:?}: {v}");
        }
    }

    #[test]
    fn test_octave_count_changes_the_field() {
        let one = Fbm::new(GradientNoise2D::with_seed(4.0)).octaves(1);
        let four = Fbm::new(GradientNoise2D::with_seed(4.0)).octaves(4);
        let pos = vec2(0.33, 0.71);
        assert!(one.sample(pos) != four.sample(pos));
    }

    #[test]
    fn test_wraps_cell_noise() {
        let fbm = Fbm::new(Voronoi2D::with_seed(5.0).return_type(CellReturn::Edge)).octaves(3);
        let pos = vec2(1.2, 0.4);
        let v = fbm.sample(pos);
        assert!(v.is_finite());
        assert_eq!(fbm.sample(pos).to_bits(), v.to_bits());
    }

    #[test]
    fn test_three_dimensional_stack() {
        // 3-D gradient octaves can slightly exceed 1 (corner gradients all
        // aligned), so only the 1.5 envelope is guaranteed.
        let fbm = Fbm::new(GradientNoise3D::with_seed(6.0)).octaves(4);
        let pos = vec3(0.3, 1.1, -0.7);
        let v = fbm.sample(pos);
        assert!(v.abs() <= 1.5);
        assert_eq!(fbm.sample(pos).to_bits(), v.to_bits());
    }
}
