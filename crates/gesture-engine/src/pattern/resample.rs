use glam::Vec2;

use crate::pattern::descriptor::path_length;

/// Resample a polyline to `target` points spaced evenly by arc length.
///
/// The first and last points are kept as-is. Interior points are found by
/// walking the source polyline until the accumulated length passes the
/// target arc length, then interpolating back into the segment that
/// straddles it. Polylines with at most one point, or with zero length,
/// are returned unchanged.
pub fn resample(points: &[Vec2], target: usize) -> Vec<Vec2> {
    if points.len() <= 1 || target < 2 {
        return points.to_vec();
    }

    let total_length = path_length(points);
    if total_length == 0.0 {
        return points.to_vec();
    }

    let last = points[points.len() - 1];
    let segment_length = total_length / (target - 1) as f32;

    let mut resampled = Vec::with_capacity(target);
    resampled.push(points[0]);

    let mut current_length = 0.0f32;
    let mut current_index = 0usize;

    for i in 1..target - 1 {
        let target_length = segment_length * i as f32;

        while current_index < points.len() - 1 && current_length < target_length {
            current_length += points[current_index].distance(points[current_index + 1]);
            current_index += 1;
        }

        if current_index >= points.len() - 1 {
            resampled.push(last);
        } else {
            let a = points[current_index - 1];
            let b = points[current_index];
            let excess = current_length - target_length;
            let seg_len = a.distance(b);
            let t = if seg_len > 0.0 { (seg_len - excess) / seg_len } else { 0.0 };
            resampled.push(a.lerp(b, t));
        }
    }

    resampled.push(last);
    resampled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Vec2> {
        // Uneven sampling along y = 0: dense at the start, sparse at the end
        (0..n)
            .map(|i| {
                let f = i as f32 / (n - 1) as f32;
                Vec2::new(f * f * 10.0, 0.0)
            })
            .collect()
    }

    #[test]
    fn keeps_endpoints() {
        let pts = line(7);
        let out = resample(&pts, 5);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[4], pts[6]);
    }

    #[test]
    fn straight_line_is_evenly_spaced() {
        let pts = line(30);
        let k = 11;
        let out = resample(&pts, k);
        assert_eq!(out.len(), k);
        for (i, p) in out.iter().enumerate() {
            let expected = 10.0 * i as f32 / (k - 1) as f32;
            assert!(
                (p.x - expected).abs() < 1e-3,
                "point {i}: x = {}, expected {expected}",
                p.x
            );
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn evenly_sampled_diagonal() {
        let pts: Vec<Vec2> = (0..41).map(|i| Vec2::splat(i as f32 * 0.25)).collect();
        let out = resample(&pts, 9);
        assert_eq!(out.len(), 9);
        for (i, p) in out.iter().enumerate() {
            let expected = Vec2::splat(10.0 * i as f32 / 8.0);
            assert!(p.distance(expected) < 1e-3, "point {i}: {p:?}");
        }
    }

    #[test]
    fn targets_inside_final_segment_snap_to_endpoint() {
        // Once the walk reaches the last point there is nothing left to
        // interpolate against, so remaining interior targets take the endpoint.
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0)];
        let out = resample(&pts, 5);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], Vec2::ZERO);
        assert!(out[1..].iter().all(|p| *p == Vec2::new(0.0, 4.0)));
    }

    #[test]
    fn zero_length_is_returned_unchanged() {
        let pts = vec![Vec2::ONE, Vec2::ONE, Vec2::ONE];
        assert_eq!(resample(&pts, 10), pts);
    }

    #[test]
    fn single_point_is_returned_unchanged() {
        assert_eq!(resample(&[Vec2::ONE], 10), vec![Vec2::ONE]);
        assert!(resample(&[], 10).is_empty());
    }
}
