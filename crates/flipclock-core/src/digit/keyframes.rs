use std::time::Duration;

/// Piecewise-linear rotation curve: `(offset in [0, 1], degrees)` stops.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Keyframes(&'static [(f32, f32)]);

impl Keyframes {
    pub const fn new(stops: &'static [(f32, f32)]) -> Self {
        Self(stops)
    }

    /// Angle at `t`, clamped to the curve's range.
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        for pair in self.0.windows(2) {
            let (t0, a0) = pair[0];
            let (t1, a1) = pair[1];
            if t <= t1 {
                let span = t1 - t0;
                if span <= 0.0 {
                    return a1;
                }
                return a0 + (a1 - a0) * ((t - t0) / span);
            }
        }
        self.0.last().map(|&(_, a)| a).unwrap_or(0.0)
    }
}

/// Upper decoy: flat to folded away.
pub const ROTATE_TOP: Keyframes = Keyframes::new(&[(0.0, 0.0), (1.0, -90.0)]);

/// Lower decoy: folded down to flat, with a small bounce before settling.
pub const ROTATE_BOTTOM: Keyframes =
    Keyframes::new(&[(0.0, 90.0), (0.6, 0.0), (0.8, 15.0), (1.0, 0.0)]);

/// Rotation of the two animated faces at one instant, in degrees about the
/// tile's horizontal hinge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlipFrame {
    pub upper_angle: f32,
    pub lower_angle: f32,
}

impl FlipFrame {
    /// Before any flip: upper decoy lies flat over the static face, lower
    /// decoy is folded out of sight.
    pub const REST: FlipFrame = FlipFrame { upper_angle: 0.0, lower_angle: 90.0 };

    /// After a flip: both decoys hold their final keyframe.
    pub const SETTLED: FlipFrame = FlipFrame { upper_angle: -90.0, lower_angle: 0.0 };

    /// Frame `elapsed` into a flip whose phases each last `half`.
    ///
    /// The bottom phase starts only once the top phase has finished; until
    /// then the lower decoy stays at its first keyframe.
    pub fn at(elapsed: Duration, half: Duration) -> FlipFrame {
        if half.is_zero() || elapsed >= half * 2 {
            return FlipFrame::SETTLED;
        }
        let e = elapsed.as_secs_f32();
        let half = half.as_secs_f32();
        FlipFrame {
            upper_angle: ROTATE_TOP.sample(e / half),
            lower_angle: ROTATE_BOTTOM.sample(((e - half) / half).max(0.0)),
        }
    }

    /// Projected height of the upper decoy as a fraction of a half tile.
    #[inline]
    pub fn upper_scale(&self) -> f32 {
        self.upper_angle.to_radians().cos().max(0.0)
    }

    /// Projected height of the lower decoy as a fraction of a half tile.
    #[inline]
    pub fn lower_scale(&self) -> f32 {
        self.lower_angle.to_radians().cos().max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn top_curve_is_linear() {
        assert!(close(ROTATE_TOP.sample(0.0), 0.0));
        assert!(close(ROTATE_TOP.sample(0.5), -45.0));
        assert!(close(ROTATE_TOP.sample(1.0), -90.0));
    }

    #[test]
    fn bottom_curve_overshoots_then_settles() {
        assert!(close(ROTATE_BOTTOM.sample(0.0), 90.0));
        assert!(close(ROTATE_BOTTOM.sample(0.3), 45.0));
        assert!(close(ROTATE_BOTTOM.sample(0.6), 0.0));
        assert!(close(ROTATE_BOTTOM.sample(0.7), 7.5));
        assert!(close(ROTATE_BOTTOM.sample(0.8), 15.0));
        assert!(close(ROTATE_BOTTOM.sample(1.0), 0.0));
    }

    #[test]
    fn samples_outside_range_are_clamped() {
        assert!(close(ROTATE_TOP.sample(-1.0), 0.0));
        assert!(close(ROTATE_BOTTOM.sample(3.0), 0.0));
    }

    #[test]
    fn lower_face_waits_for_top_phase() {
        let half = Duration::from_millis(300);
        let f = FlipFrame::at(Duration::from_millis(150), half);
        assert!(close(f.upper_angle, -45.0));
        assert!(close(f.lower_angle, 90.0));
    }

    #[test]
    fn phases_run_back_to_back() {
        let half = Duration::from_millis(300);
        let mid = FlipFrame::at(half, half);
        assert!(close(mid.upper_angle, -90.0));
        assert!(close(mid.lower_angle, 90.0));

        let end = FlipFrame::at(half * 2, half);
        assert_eq!(end, FlipFrame::SETTLED);
    }

    #[test]
    fn projected_scales() {
        assert!(close(FlipFrame::REST.upper_scale(), 1.0));
        assert!(close(FlipFrame::REST.lower_scale(), 0.0));
        assert!(close(FlipFrame::SETTLED.upper_scale(), 0.0));
        assert!(close(FlipFrame::SETTLED.lower_scale(), 1.0));
    }
}
