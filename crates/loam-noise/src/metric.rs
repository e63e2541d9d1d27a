//! Distance metrics for the cell-based noise families.

use core::fmt;
use core::str::FromStr;

use glam::{Vec2, Vec3};
use thiserror::Error;

/// How cell noise measures the distance to a feature point.
///
/// The metric changes the shape of the cells: Euclidean gives the familiar
/// rounded Voronoi look, Manhattan and Chebyshev give diamond and square
/// cells, Minkowski interpolates between those extremes through its
/// exponent (1 = Manhattan, 2 = Euclidean, large = Chebyshev).
///
/// The Minkowski exponent must be positive. It is not validated; a zero or
/// negative exponent produces NaN/Inf distances per IEEE rules rather than
/// panicking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
    Minkowski(f32),
}

impl DistanceMetric {
    /// Distance of a 2-D delta vector under this metric.
    #[inline]
    pub fn distance2(self, d: Vec2) -> f32 {
        match self {
            DistanceMetric::Euclidean => d.length(),
            DistanceMetric::Manhattan => d.x.abs() + d.y.abs(),
            DistanceMetric::Chebyshev => d.x.abs().max(d.y.abs()),
            DistanceMetric::Minkowski(p) => {
                (d.x.abs().powf(p) + d.y.abs().powf(p)).powf(1.0 / p)
            }
        }
    }

    /// Distance of a 3-D delta vector under this metric.
    #[inline]
    pub fn distance3(self, d: Vec3) -> f32 {
        match self {
            DistanceMetric::Euclidean => d.length(),
            DistanceMetric::Manhattan => d.x.abs() + d.y.abs() + d.z.abs(),
            DistanceMetric::Chebyshev => d.x.abs().max(d.y.abs()).max(d.z.abs()),
            DistanceMetric::Minkowski(p) => {
                (d.x.abs().powf(p) + d.y.abs().powf(p) + d.z.abs().powf(p)).powf(1.0 / p)
            }
        }
    }
}

/// Error from [`DistanceMetric::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown distance metric `{0}`; expected euclidean, manhattan, chebyshev or minkowski")]
pub struct ParseMetricError(pub String);

impl FromStr for DistanceMetric {
    type Err = ParseMetricError;

    /// Parses the lowercase metric names used by parameter menus.
    ///
    /// `"minkowski"` carries no exponent in menu form and parses with
    /// exponent 1.0; set the exponent through the enum when it matters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(DistanceMetric::Euclidean),
            "manhattan" => Ok(DistanceMetric::Manhattan),
            "chebyshev" => Ok(DistanceMetric::Chebyshev),
            "minkowski" => Ok(DistanceMetric::Minkowski(1.0)),
            _ => Err(ParseMetricError(s.to_owned())),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Manhattan => "manhattan",
            DistanceMetric::Chebyshev => "chebyshev",
            DistanceMetric::Minkowski(_) => "minkowski",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{vec2, vec3};

    #[test]
    fn test_metric_shapes_2d() {
        let d = vec2(3.0, -4.0);
        assert!((DistanceMetric::Euclidean.distance2(d) - 5.0).abs() < 1e-6);
        assert!((DistanceMetric::Manhattan.distance2(d) - 7.0).abs() < 1e-6);
        assert!((DistanceMetric::Chebyshev.distance2(d) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_metric_shapes_3d() {
        let d = vec3(1.0, -2.0, 2.0);
        assert!((DistanceMetric::Euclidean.distance3(d) - 3.0).abs() < 1e-6);
        assert!((DistanceMetric::Manhattan.distance3(d) - 5.0).abs() < 1e-6);
        assert!((DistanceMetric::Chebyshev.distance3(d) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_minkowski_limits() {
        let deltas = [vec2(0.3, 0.7), vec2(-0.5, 0.4), vec2(0.9, -0.35)];
        for d in deltas {
            let m1 = DistanceMetric::Minkowski(1.0).distance2(d);
            let manhattan = DistanceMetric::Manhattan.distance2(d);
            assert!((m1 - manhattan).abs() < 1e-4, "{d:?}: {m1} vs {manhattan}");

            let m2 = DistanceMetric::Minkowski(2.0).distance2(d);
            let euclid = DistanceMetric::Euclidean.distance2(d);
            assert!((m2 - euclid).abs() < 1e-4, "{d:?}: {m2} vs {euclid}");

            let m50 = DistanceMetric::Minkowski(50.0).distance2(d);
            let cheby = DistanceMetric::Chebyshev.distance2(d);
            assert!((m50 - cheby).abs() < 1e-2, "{d:?}: {m50} vs {cheby}");
        }
        let d3 = vec3(0.4, 0.8, -0.6);
        let m50 = DistanceMetric::Minkowski(50.0).distance3(d3);
        assert!((m50 - 0.8).abs() < 1e-2);
    }

    #[test]
    fn test_parse_and_display() {
        for name in ["euclidean", "manhattan", "chebyshev", "minkowski"] {
            let metric: DistanceMetric = name.parse().unwrap();
            assert_eq!(metric.to_string(), name);
        }
        assert_eq!(
            "manhattan".parse::<DistanceMetric>(),
            Ok(DistanceMetric::Manhattan)
        );
        assert_eq!(
            "minkowski".parse::<DistanceMetric>(),
            Ok(DistanceMetric::Minkowski(1.0))
        );
        let err = "taxicab".parse::<DistanceMetric>().unwrap_err();
        assert!(err.to_string().contains("taxicab"));
    }

    #[test]
    fn test_default_is_euclidean() {
        assert_eq!(DistanceMetric::default(), DistanceMetric::Euclidean);
    }
}
