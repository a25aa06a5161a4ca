use crate::constants::{STAR_HUE, STAR_LIGHTNESS_PCT, STAR_SATURATION_PCT};

/// CSS colour for a star at `alpha` opacity.
#[inline]
pub fn star_fill_style(alpha: f32) -> String {
    format!(
        "hsla({}, {}%, {}%, {})",
        STAR_HUE,
        STAR_SATURATION_PCT,
        STAR_LIGHTNESS_PCT,
        alpha.clamp(0.0, 1.0)
    )
}
