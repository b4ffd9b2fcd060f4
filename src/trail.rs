//! Distance-sampled history of head positions and body placement along it.
//!
//! Invariants:
//! - samples are newest-first; a sample is taken once the head has moved at
//!   least `sample_spacing` since the previous one, not every tick
//! - after every sample the length is at most `(segments + 5) * 8`
//! - body segment `i` sits on trail sample `(i + 1) * segment_spacing`, or on
//!   the head while the trail is still too short

use glam::Vec3;
use std::collections::VecDeque;

/// Upper bound on trail length for a body of `segment_count` segments.
pub fn max_trail_len(segment_count: usize) -> usize {
    (segment_count + 5) * 8
}

/// Trail index followed by body segment `index`.
pub fn segment_trail_index(index: usize, segment_spacing: usize) -> usize {
    (index + 1) * segment_spacing
}

#[derive(Debug, Clone, Default)]
pub struct TrailBuffer {
    samples: VecDeque<Vec3>,
    accumulated: f32,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.samples.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.accumulated = 0.0;
    }

    /// Account for `moved` units of travel ending at `head`
    ///
    /// Returns true when a new sample was pushed.
    pub fn record(
        &mut self,
        moved: f32,
        head: Vec3,
        sample_spacing: f32,
        segment_count: usize,
    ) -> bool {
        self.accumulated += moved;
        if self.accumulated < sample_spacing {
            return false;
        }

        let bound = max_trail_len(segment_count);
        // the bound only grows between resets, so the previous trim still holds
        debug_assert!(
            self.samples.len() <= bound,
            "trail length {} exceeds bound {} for {} segments",
            self.samples.len(),
            bound,
            segment_count
        );

        self.samples.push_front(head);
        self.accumulated = 0.0;
        self.trim(bound);
        true
    }

    /// Drop the oldest samples until at most `max_len` remain.
    pub fn trim(&mut self, max_len: usize) {
        self.samples.truncate(max_len);
    }

    /// Move every body segment onto its trail sample.
    pub fn place_segments(&self, segments: &mut [Vec3], head: Vec3, segment_spacing: usize) {
        for (i, segment) in segments.iter_mut().enumerate() {
            *segment = self
                .get(segment_trail_index(i, segment_spacing))
                .unwrap_or(head);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_trail(len: usize) -> TrailBuffer {
        let mut trail = TrailBuffer::new();
        // oldest first so that sample k ends up at index len - 1 - k
        for k in 0..len {
            trail.record(1.0, Vec3::new(k as f32, 0.5, 0.0), 0.5, 100);
        }
        trail
    }

    #[test]
    fn test_bound_formula() {
        assert_eq!(max_trail_len(0), 40);
        assert_eq!(max_trail_len(3), 64);
        assert_eq!(segment_trail_index(0, 6), 6);
        assert_eq!(segment_trail_index(2, 6), 18);
    }

    #[test]
    fn test_samples_only_after_spacing() {
        let mut trail = TrailBuffer::new();
        assert!(!trail.record(0.04, Vec3::ZERO, 0.1, 0));
        assert!(!trail.record(0.04, Vec3::ZERO, 0.1, 0));
        assert!(trail.record(0.04, Vec3::X, 0.1, 0));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.get(0), Some(Vec3::X));
        // accumulator reset after the sample
        assert!(!trail.record(0.05, Vec3::Z, 0.1, 0));
    }

    #[test]
    fn test_newest_sample_first() {
        let trail = synthetic_trail(3);
        assert_eq!(trail.get(0), Some(Vec3::new(2.0, 0.5, 0.0)));
        assert_eq!(trail.get(2), Some(Vec3::new(0.0, 0.5, 0.0)));
    }

    #[test]
    fn test_trim_keeps_bound() {
        let mut trail = TrailBuffer::new();
        for k in 0..200 {
            trail.record(1.0, Vec3::new(k as f32, 0.0, 0.0), 0.5, 1);
            assert!(trail.len() <= max_trail_len(1));
        }
        assert_eq!(trail.len(), 48);
        // the newest sample survives trimming
        assert_eq!(trail.get(0), Some(Vec3::new(199.0, 0.0, 0.0)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds bound")]
    fn test_shrinking_body_violates_bound() {
        let mut trail = TrailBuffer::new();
        for k in 0..100 {
            trail.record(1.0, Vec3::new(k as f32, 0.0, 0.0), 0.5, 3);
        }
        assert_eq!(trail.len(), max_trail_len(3));
        // a body can only grow until reset clears the trail
        trail.record(1.0, Vec3::ZERO, 0.5, 0);
    }

    #[test]
    fn test_place_segments_uses_stride() {
        let trail = synthetic_trail(20);
        let head = Vec3::new(50.0, 0.5, 0.0);
        let mut segments = vec![Vec3::ZERO; 3];
        trail.place_segments(&mut segments, head, 6);

        assert_eq!(segments[0], trail.get(6).unwrap());
        assert_eq!(segments[1], trail.get(12).unwrap());
        assert_eq!(segments[2], trail.get(18).unwrap());
    }

    #[test]
    fn test_place_segments_falls_back_to_head() {
        let trail = synthetic_trail(8);
        let head = Vec3::new(50.0, 0.5, 0.0);
        let mut segments = vec![Vec3::ZERO; 2];
        trail.place_segments(&mut segments, head, 6);

        assert_eq!(segments[0], trail.get(6).unwrap());
        assert_eq!(segments[1], head);
    }

    #[test]
    fn test_clear_resets_accumulator() {
        let mut trail = TrailBuffer::new();
        trail.record(0.09, Vec3::ZERO, 0.1, 0);
        trail.clear();
        assert!(trail.is_empty());
        assert!(!trail.record(0.05, Vec3::ZERO, 0.1, 0));
    }
}
