use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Floor for bounding-box width/height, so flat strokes do not divide by zero.
pub const BOUNDS_EPSILON: f32 = 0.001;

/// Scale- and position-invariant description of one stroke.
///
/// Built once from raw points and never mutated afterwards. The serde
/// field names are the persisted JSON names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDescriptor {
    /// Points rescaled per axis into [0, 1] using the stroke's bounding box.
    pub normalized_points: Vec<Vec2>,
    /// Unit vectors between consecutive normalized points.
    /// Zero-length segments have no direction and are left out.
    pub directions: Vec<Vec2>,
    /// Path length over the normalized points.
    pub total_distance: f32,
    /// Number of normalized points.
    pub point_count: usize,
}

impl PatternDescriptor {
    /// Normalize a raw stroke.
    ///
    /// Fewer than two points yields an empty descriptor; callers that need
    /// a minimum stroke length enforce it themselves.
    pub fn from_points(points: &[Vec2]) -> Self {
        if points.len() < 2 {
            return Self::default();
        }

        let (min, max) = bounds(points);
        let width = (max.x - min.x).max(BOUNDS_EPSILON);
        let height = (max.y - min.y).max(BOUNDS_EPSILON);

        let normalized_points: Vec<Vec2> = points
            .iter()
            .map(|p| Vec2::new((p.x - min.x) / width, (p.y - min.y) / height))
            .collect();

        let total_distance = path_length(&normalized_points);

        let directions = normalized_points
            .windows(2)
            .map(|w| (w[1] - w[0]).normalize())
            .filter(|d| !d.is_nan())
            .collect();

        let point_count = normalized_points.len();
        Self {
            normalized_points,
            directions,
            total_distance,
            point_count,
        }
    }

    /// Normalize world-space points, ignoring depth.
    pub fn from_world(points: &[Vec3]) -> Self {
        let flat: Vec<Vec2> = points.iter().map(|p| p.truncate()).collect();
        Self::from_points(&flat)
    }

    /// True when the descriptor carries no usable shape.
    pub fn is_degenerate(&self) -> bool {
        self.normalized_points.len() < 2 || self.total_distance == 0.0
    }
}

/// Sum of distances between consecutive points.
pub fn path_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

fn bounds(points: &[Vec2]) -> (Vec2, Vec2) {
    points.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), &p| (min.min(p), max.max(p)),
    )
}
