pub(crate) const LATITUDE_RANGE: (f32, f32) = (-90.0, 90.0);
pub(crate) const LONGITUDE_RANGE: (f32, f32) = (-180.0, 180.0);
pub(crate) const RADIUS_RANGE: (f32, f32) = (0.0, 500.0);

/// Pins `value` to `[min, max]`. NaN is returned unchanged.
pub(crate) fn keep_in_range(value: f32, min: f32, max: f32) -> f32 {
    if value <= min {
        return min;
    }
    if value >= max {
        return max;
    }
    value
}

pub(crate) fn clamp_latitude(value: f32) -> f32 {
    keep_in_range(value, LATITUDE_RANGE.0, LATITUDE_RANGE.1)
}

pub(crate) fn clamp_longitude(value: f32) -> f32 {
    keep_in_range(value, LONGITUDE_RANGE.0, LONGITUDE_RANGE.1)
}

/// Radius must be positive, so anything that lands on zero becomes 1.
pub(crate) fn clamp_radius(value: f32) -> f32 {
    let radius = keep_in_range(value, RADIUS_RANGE.0, RADIUS_RANGE.1);
    if radius == 0.0 {
        1.0
    } else {
        radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_in_range_inside() {
        assert_eq!(keep_in_range(12.5, -90.0, 90.0), 12.5);
    }

    #[test]
    fn test_keep_in_range_bounds() {
        assert_eq!(keep_in_range(-91.0, -90.0, 90.0), -90.0);
        assert_eq!(keep_in_range(181.0, -180.0, 180.0), 180.0);
        assert_eq!(keep_in_range(90.0, -90.0, 90.0), 90.0);
    }

    #[test]
    fn test_keep_in_range_nan_passes_through() {
        assert!(keep_in_range(f32::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_clamp_radius() {
        assert_eq!(clamp_radius(0.0), 1.0);
        assert_eq!(clamp_radius(-10.0), 1.0);
        assert_eq!(clamp_radius(250.0), 250.0);
        assert_eq!(clamp_radius(9000.0), 500.0);
        assert_eq!(clamp_radius(0.25), 0.25);
    }
}
