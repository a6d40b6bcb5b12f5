/// Twips for one line at 100% line spacing.
pub const LINE_TWIPS: f64 = 240.0;

/// Twips per indentation level (half an inch).
pub const INDENT_LEVEL_TWIPS: f64 = 720.0;

pub const TWIPS_PER_POINT: f64 = 20.0;

pub fn twips_to_pts(twips: i32) -> f32 {
    (twips as f64 / TWIPS_PER_POINT) as f32
}

/// Rounds to the nearest whole twip; `None` when that does not fit an `i32`.
pub(crate) fn to_twips(value: f64) -> Option<i32> {
    let rounded = value.round();
    (rounded.is_finite() && (i32::MIN as f64..=i32::MAX as f64).contains(&rounded))
        .then_some(rounded as i32)
}

pub fn line_height_to_twips(line_height: f64) -> Option<i32> {
    to_twips(line_height * LINE_TWIPS)
}

pub fn levels_to_twips(levels: f64) -> Option<i32> {
    to_twips(levels * INDENT_LEVEL_TWIPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_twips_are_rejected() {
        assert_eq!(to_twips(1e10), None);
        assert_eq!(to_twips(-1e10), None);
        assert_eq!(to_twips(f64::INFINITY), None);
        assert_eq!(to_twips(i32::MAX as f64), Some(i32::MAX));
        assert_eq!(levels_to_twips(3e6), None);
        assert_eq!(line_height_to_twips(1.1), Some(264));
    }
}
