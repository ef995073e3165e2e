use glam::Vec3;

/// Linear blend `a + (b - a) * t`, component-wise.
///
/// Kept separate from `Vec3::lerp` because that evaluates `a * (1 - t) + b * t`,
/// which rounds differently.
pub fn interpolate_point(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Blends each basis vector independently. The result is not renormalized.
pub fn interpolate_orientation(a: &[Vec3; 2], b: &[Vec3; 2], t: f32) -> [Vec3; 2] {
    [
        interpolate_point(a[0], b[0], t),
        interpolate_point(a[1], b[1], t),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_point_endpoints() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, -3.0);
        assert_eq!(interpolate_point(a, b, 0.0), a);
        assert_eq!(interpolate_point(a, b, 1.0), b);
    }

    #[test]
    fn test_interpolate_point_midpoint() {
        let a = Vec3::ZERO;
        let b = Vec3::new(10.0, 0.0, -4.0);
        assert_eq!(interpolate_point(a, b, 0.5), Vec3::new(5.0, 0.0, -2.0));
    }

    #[test]
    fn test_interpolate_orientation_not_normalized() {
        let a = [Vec3::X, Vec3::Z];
        let b = [Vec3::Y, Vec3::Z];
        let blended = interpolate_orientation(&a, &b, 0.5);

        assert_eq!(blended[0], Vec3::new(0.5, 0.5, 0.0));
        assert!((blended[0].length() - 1.0).abs() > 0.1);
        assert_eq!(blended[1], Vec3::Z);
    }
}
