/// Nominal frame rate of a clip as a rational `num/den`.
///
/// Values are taken from the host arguments as-is; no sign or zero checks are applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fps {
    /// Numerator (frames).
    pub num: i64,
    /// Denominator (seconds).
    pub den: i64,
}

impl Fps {
    /// Frame rate used when `fpsnum` is not supplied.
    pub const DEFAULT_NUM: i64 = 24;
    /// Frame rate denominator used when `fpsden` is not supplied.
    pub const DEFAULT_DEN: i64 = 1;

    /// Build a frame rate from raw parts.
    pub fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// Per-frame duration as `(num, den)`, the reciprocal of the rate.
    ///
    /// This is what lands in `_DurationNum` / `_DurationDen`.
    pub fn frame_duration(self) -> (i64, i64) {
        (self.den, self.num)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NUM, Self::DEFAULT_DEN)
    }
}

/// Round `width` up to the next multiple of 4.
pub fn align_width(width: usize) -> usize {
    width.div_ceil(4) * 4
}

/// Round `value` up to a multiple of `align` (`align` must be non-zero).
pub(crate) fn align_up(value: usize, align: usize) -> usize {
    value.div_ceil(align) * align
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
