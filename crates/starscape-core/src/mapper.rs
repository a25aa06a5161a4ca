/// Linear map from a clamped input interval onto an output interval.
///
/// Inputs outside `[in_start, in_end]` are clamped to the nearest endpoint, so
/// the output never leaves `[out_start, out_end]`. A zero-width input interval
/// maps everything to `out_end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeMapper {
    pub in_start: f32,
    pub in_end: f32,
    pub out_start: f32,
    pub out_end: f32,
}

impl RangeMapper {
    pub const fn new(in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> Self {
        Self {
            in_start,
            in_end,
            out_start,
            out_end,
        }
    }

    #[inline]
    pub fn map(&self, value: f32) -> f32 {
        let span = self.in_end - self.in_start;
        if span == 0.0 || !span.is_finite() {
            return self.out_end;
        }
        let t = ((value - self.in_start) / span).clamp(0.0, 1.0);
        // endpoints come out exact
        self.out_start * (1.0 - t) + self.out_end * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_output_range() {
        let m = RangeMapper::new(0.0, 50.0, 2.0, 1.0);
        assert_eq!(m.map(0.0), 2.0);
        assert_eq!(m.map(50.0), 1.0);
        assert!((m.map(25.0) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn zero_width_input_maps_to_end() {
        let m = RangeMapper::new(0.0, 0.0, 1.0, 0.2);
        assert_eq!(m.map(0.0), 0.2);
        assert_eq!(m.map(10.0), 0.2);
    }
}
