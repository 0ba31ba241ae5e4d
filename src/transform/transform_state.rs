use crate::math::clamp;
use crate::transform::format_transform;

/// Scale and local-space translation applied to the zoom target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub scale: f64,
    pub translate: [f64; 2],
}

impl TransformState {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            translate: [0.0, 0.0],
        }
    }

    /// Clamps `scale` into `[min, max]` and stores it. Non-finite requests are
    /// dropped and the current scale is kept.
    pub fn set_scale(&mut self, scale: f64, min: f64, max: f64) -> f64 {
        if scale.is_finite() {
            self.scale = clamp(scale, min, max);
        }
        self.scale
    }

    /// Adds a screen-space delta, converted into the element's pre-scale space.
    pub fn pan_by_screen(&mut self, delta: [f64; 2]) {
        self.translate[0] += delta[0] / self.scale;
        self.translate[1] += delta[1] / self.scale;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn to_css(&self) -> String {
        format_transform(self.scale, self.translate)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_scale_clamps() {
        let mut state = TransformState::new();
        for (requested, expected) in [(5.0, 3.0), (0.01, 0.1), (1.7, 1.7), (-2.0, 0.1), (3.0, 3.0)] {
            assert_eq!(state.set_scale(requested, 0.1, 3.0), expected);
        }
    }

    #[test]
    fn test_set_scale_ignores_nan() {
        let mut state = TransformState::new();
        state.set_scale(2.0, 0.1, 3.0);
        assert_eq!(state.set_scale(f64::NAN, 0.1, 3.0), 2.0);
        assert_eq!(state.set_scale(f64::INFINITY, 0.1, 3.0), 2.0);
    }

    #[test]
    fn test_pan_divides_by_scale() {
        let mut state = TransformState::new();
        state.scale = 2.0;
        state.pan_by_screen([50.0, -20.0]);
        assert_eq!(state.translate, [25.0, -10.0]);
    }

    #[test]
    fn test_reset() {
        let mut state = TransformState {
            scale: 2.4,
            translate: [-13.0, 77.5],
        };
        state.reset();
        assert_eq!(state, TransformState::new());
    }
}
