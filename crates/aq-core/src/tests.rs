//! Unit tests for aq-core primitives.

#[cfg(test)]
mod ids {
    use crate::FishId;

    #[test]
    fn index_roundtrip() {
        let id = FishId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(FishId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(FishId::INVALID.0, u32::MAX);
        assert_eq!(FishId::default(), FishId::INVALID);
    }

    #[test]
    fn ordering() {
        assert!(FishId(0) < FishId(1));
    }

    #[test]
    fn display() {
        assert_eq!(FishId(7).to_string(), "FishId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn dot_and_length() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(a), 25.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.distance(Vec2::ZERO), 5.0);
    }

    #[test]
    fn normalized_unit_length() {
        let n = Vec2::new(10.0, 0.0).normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(n, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn normalized_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        // Denormal-length input must not produce NaN either.
        let tiny = Vec2::new(1e-20, -1e-20).normalized();
        assert!(tiny.is_finite());
        assert_eq!(tiny, Vec2::ZERO);
    }

    #[test]
    fn clamped_limits_magnitude() {
        let v = Vec2::new(6.0, 8.0); // length 10
        let c = v.clamped(5.0);
        assert!((c.length() - 5.0).abs() < 1e-5);
        // Direction preserved.
        assert!(c.normalized().dot(v.normalized()) > 0.999);
        // Under the limit: unchanged.
        assert_eq!(v.clamped(20.0), v);
    }
}

#[cfg(test)]
mod rng {
    use crate::{FishId, FishRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = FishRng::new(12345, FishId(0));
        let mut r2 = FishRng::new(12345, FishId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_fish_differ() {
        let mut r0 = FishRng::new(1, FishId(0));
        let mut r1 = FishRng::new(1, FishId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "streams for adjacent fish should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = FishRng::new(0, FishId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = FishRng::new(0, FishId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn unit_sample_in_box() {
        let mut rng = FishRng::new(7, FishId(3));
        for _ in 0..1000 {
            let s = rng.unit_sample();
            assert!((-1.0..=1.0).contains(&s.x));
            assert!((-1.0..=1.0).contains(&s.y));
        }
    }
}
