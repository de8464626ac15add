// pattern/compare.rs
//
// Similarity scoring between two pattern descriptors.
// Pure math, no store or input dependencies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::pattern::descriptor::PatternDescriptor;
use crate::pattern::resample::resample;

/// Default cap on the number of points both polylines are resampled to.
pub const DEFAULT_RESAMPLE_CAP: usize = 20;

/// Weights of the three sub-scores, plus the shape-score falloff.
///
/// The defaults are the tuned values existing trained data was scored with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchWeights {
    pub shape: f32,
    pub direction: f32,
    pub length: f32,
    /// Mean point offset is multiplied by this before being subtracted from 1.
    /// With 2.0, an average offset of half the unit square scores zero.
    pub shape_falloff: f32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            shape: 0.5,
            direction: 0.3,
            length: 0.2,
            shape_falloff: 2.0,
        }
    }
}

/// Everything `compare_with` needs besides the two descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSettings {
    pub weights: MatchWeights,
    pub resample_cap: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            resample_cap: DEFAULT_RESAMPLE_CAP,
        }
    }
}

/// Similarity of two descriptors in [0, 1] with default settings.
pub fn compare(a: &PatternDescriptor, b: &PatternDescriptor) -> f32 {
    compare_with(a, b, &MatchSettings::default())
}

/// Weighted sum of shape, direction and length similarity.
pub fn compare_with(a: &PatternDescriptor, b: &PatternDescriptor, settings: &MatchSettings) -> f32 {
    let w = &settings.weights;
    let shape = shape_score(
        &a.normalized_points,
        &b.normalized_points,
        settings.resample_cap,
        w.shape_falloff,
    );
    let direction = direction_score(&a.directions, &b.directions);
    let length = length_score(a.total_distance, b.total_distance);

    shape * w.shape + direction * w.direction + length * w.length
}

/// Mean distance between the two polylines after resampling both to the
/// same count, mapped linearly onto [0, 1].
pub fn shape_score(a: &[Vec2], b: &[Vec2], resample_cap: usize, falloff: f32) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let target = resample_cap.max(2).min(a.len().max(b.len()));
    let ra = resample(a, target);
    let rb = resample(b, target);

    // Zero-length polylines come back unresampled, so lengths can differ.
    let count = ra.len().min(rb.len());
    if count == 0 {
        return 0.0;
    }

    let total: f32 = ra.iter().zip(&rb).map(|(p, q)| p.distance(*q)).sum();
    let mean = total / count as f32;
    (1.0 - mean * falloff).clamp(0.0, 1.0)
}

/// Average agreement of direction vectors at equal indices,
/// each dot product mapped from [-1, 1] to [0, 1].
pub fn direction_score(a: &[Vec2], b: &[Vec2]) -> f32 {
    let count = a.len().min(b.len());
    if count == 0 {
        return 0.0;
    }
    let total: f32 = a.iter().zip(b).map(|(u, v)| (u.dot(*v) + 1.0) / 2.0).sum();
    total / count as f32
}

/// Ratio of the shorter path length to the longer one.
pub fn length_score(a: f32, b: f32) -> f32 {
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }
    a.min(b) / a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn circle(n: usize) -> Vec<Vec2> {
        (0..n)
            .map(|i| {
                let angle = TAU * i as f32 / n as f32;
                Vec2::new(angle.cos(), angle.sin())
            })
            .collect()
    }

    fn horizontal_line(n: usize) -> Vec<Vec2> {
        (0..n).map(|i| Vec2::new(i as f32, 0.0)).collect()
    }

    fn check_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn self_match_is_one() {
        let d = PatternDescriptor::from_points(&circle(12));
        check_close(compare(&d, &d), 1.0);

        let zig = PatternDescriptor::from_points(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(2.0, 0.5),
            Vec2::new(4.0, 2.0),
        ]);
        check_close(compare(&zig, &zig), 1.0);
    }

    #[test]
    fn compare_is_symmetric() {
        let a = PatternDescriptor::from_points(&circle(12));
        let b = PatternDescriptor::from_points(&horizontal_line(5));
        let c = PatternDescriptor::from_points(&circle(31));
        assert_eq!(compare(&a, &b), compare(&b, &a));
        assert_eq!(compare(&a, &c), compare(&c, &a));
        assert_eq!(compare(&b, &c), compare(&c, &b));
    }

    #[test]
    fn circle_and_line_score_low() {
        let a = PatternDescriptor::from_points(&circle(12));
        let b = PatternDescriptor::from_points(&horizontal_line(5));
        let score = compare(&a, &b);
        assert!(score < 0.5, "score was {score}");
        assert!(score >= 0.0);
    }

    #[test]
    fn scale_and_offset_do_not_matter() {
        let small = PatternDescriptor::from_points(&circle(16));
        let big: Vec<Vec2> = circle(16).into_iter().map(|p| p * 40.0 + Vec2::new(300.0, -7.0)).collect();
        let big = PatternDescriptor::from_points(&big);
        assert!(compare(&small, &big) > 0.999);
    }

    #[test]
    fn empty_descriptor_scores_zero() {
        let empty = PatternDescriptor::default();
        let d = PatternDescriptor::from_points(&circle(12));
        assert_eq!(compare(&empty, &d), 0.0);
        assert_eq!(compare(&empty, &empty), 0.0);
    }

    #[test]
    fn sub_score_edges() {
        assert_eq!(direction_score(&[], &[Vec2::X]), 0.0);
        assert_eq!(direction_score(&[Vec2::X], &[Vec2::NEG_X]), 0.0);
        assert_eq!(direction_score(&[Vec2::X, Vec2::Y], &[Vec2::X]), 1.0);
        assert_eq!(length_score(0.0, 2.0), 0.0);
        assert_eq!(length_score(1.0, 4.0), 0.25);
        assert_eq!(length_score(4.0, 1.0), 0.25);
        assert_eq!(shape_score(&[], &[Vec2::ONE], 20, 2.0), 0.0);
    }

    #[test]
    fn shape_score_clamps_to_zero() {
        let a = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0)];
        let b = [Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];
        assert_eq!(shape_score(&a, &b, 20, 2.0), 0.0);
    }

    #[test]
    fn custom_weights_apply() {
        let a = PatternDescriptor::from_points(&circle(12));
        let b = PatternDescriptor::from_points(&horizontal_line(5));
        let length_only = MatchSettings {
            weights: MatchWeights {
                shape: 0.0,
                direction: 0.0,
                length: 1.0,
                ..MatchWeights::default()
            },
            ..MatchSettings::default()
        };
        check_close(
            compare_with(&a, &b, &length_only),
            length_score(a.total_distance, b.total_distance),
        );
    }
}
