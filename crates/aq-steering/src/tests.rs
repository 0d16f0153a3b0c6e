//! Unit tests for aq-steering.

use aq_core::Vec2;

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

#[cfg(test)]
mod forces {
    use crate::{align, avoid, cohere, compose_velocity, flee, seek, separate, wander};

    use super::v;
    use aq_core::Vec2;

    #[test]
    fn seek_points_at_target_at_max_speed() {
        let out = seek(v(0.0, 0.0), v(10.0, 0.0), 2.0);
        assert_eq!(out, v(2.0, 0.0));
    }

    #[test]
    fn seek_at_target_is_zero() {
        let p = v(3.0, 4.0);
        assert_eq!(seek(p, p, 2.0), Vec2::ZERO);
    }

    #[test]
    fn flee_negates_seek() {
        let pos = v(1.0, 1.0);
        let threat = v(4.0, 5.0);
        assert_eq!(flee(pos, threat, 3.0), -seek(pos, threat, 3.0));
    }

    #[test]
    fn align_empty_is_zero() {
        assert_eq!(align(v(1.0, 0.0), &[]), Vec2::ZERO);
    }

    #[test]
    fn align_matches_average() {
        let out = align(v(1.0, 0.0), &[v(3.0, 0.0), v(1.0, 2.0)]);
        // average (2, 1) minus current (1, 0)
        assert_eq!(out, v(1.0, 1.0));
    }

    #[test]
    fn cohere_empty_is_zero() {
        assert_eq!(cohere(v(1.0, 0.0), &[], 2.0), Vec2::ZERO);
    }

    #[test]
    fn cohere_points_at_centroid() {
        let out = cohere(v(0.0, 0.0), &[v(4.0, 0.0), v(6.0, 0.0)], 2.0);
        assert_eq!(out, v(2.0, 0.0));
    }

    #[test]
    fn separate_nothing_in_radius_is_zero() {
        assert_eq!(separate(v(0.0, 0.0), &[], 3.0), Vec2::ZERO);
        assert_eq!(separate(v(0.0, 0.0), &[v(5.0, 0.0)], 3.0), Vec2::ZERO);
        // Boundary is exclusive.
        assert_eq!(separate(v(0.0, 0.0), &[v(3.0, 0.0)], 3.0), Vec2::ZERO);
    }

    #[test]
    fn separate_single_neighbor_pushes_away() {
        let out = separate(v(0.0, 0.0), &[v(1.0, 0.0)], 3.0);
        assert!(out.x < 0.0);
        assert_eq!(out.y, 0.0);
    }

    #[test]
    fn separate_closer_pushes_harder() {
        let near = separate(v(0.0, 0.0), &[v(0.5, 0.0)], 3.0);
        let far = separate(v(0.0, 0.0), &[v(2.0, 0.0)], 3.0);
        assert!(near.length() > far.length());
    }

    #[test]
    fn avoid_mirrors_separate_law() {
        let pos = v(0.0, 0.0);
        let points = [v(1.0, 1.0), v(-2.0, 0.5)];
        assert_eq!(avoid(pos, &points, 4.0), separate(pos, &points, 4.0));
    }

    #[test]
    fn wander_caps_magnitude() {
        let out = wander(v(10.0, 0.0), 2.0);
        assert!((out.length() - 2.0).abs() < 1e-5);
        // Small noise passes through untouched.
        assert_eq!(wander(v(0.3, 0.4), 2.0), v(0.3, 0.4));
    }

    #[test]
    fn compose_velocity_respects_max_speed() {
        let components = [
            (v(100.0, 0.0), 5.0),
            (v(0.0, 100.0), 5.0),
            (v(-40.0, 30.0), 2.0),
        ];
        let out = compose_velocity(v(1.0, 1.0), &components, 2.5, 1.5);
        assert!(out.length() <= 2.5 + 1e-4);
    }

    #[test]
    fn compose_velocity_respects_max_force() {
        let before = v(1.0, 0.0);
        let out = compose_velocity(before, &[(v(1000.0, 0.0), 1.0)], 100.0, 0.5);
        assert!((out - before).length() <= 0.5 + 1e-4);
    }

    #[test]
    fn compose_velocity_no_components_keeps_velocity() {
        let vel = v(1.0, -0.5);
        assert_eq!(compose_velocity(vel, &[], 2.5, 1.5), vel);
    }
}

#[cfg(test)]
mod noise {
    use crate::LeakyNoise;

    use aq_core::{FishId, FishRng};

    #[test]
    fn rejects_bad_tau() {
        assert!(LeakyNoise::new(0.0).is_err());
        assert!(LeakyNoise::new(-1.0).is_err());
        assert!(LeakyNoise::new(f32::NAN).is_err());
        assert!(LeakyNoise::new(f32::INFINITY).is_err());
    }

    #[test]
    fn alpha_derivation_and_clamping() {
        assert!((LeakyNoise::new(2.0).unwrap().alpha() - 0.5).abs() < 1e-6);
        // tau above the clamp ceiling of 5.0 bottoms out at alpha = 0.2.
        assert!((LeakyNoise::new(100.0).unwrap().alpha() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn deterministic_given_same_stream() {
        let mut n1 = LeakyNoise::new(1.2).unwrap();
        let mut n2 = LeakyNoise::new(1.2).unwrap();
        let mut r1 = FishRng::new(99, FishId(4));
        let mut r2 = FishRng::new(99, FishId(4));
        for _ in 0..200 {
            assert_eq!(n1.step(&mut r1), n2.step(&mut r2));
        }
    }

    #[test]
    fn state_stays_bounded() {
        // With alpha <= 1 the state is a convex blend of [-1,1]^2 samples.
        let mut noise = LeakyNoise::new(1.2).unwrap();
        let mut rng = FishRng::new(0, FishId(0));
        for _ in 0..1000 {
            let s = noise.step(&mut rng);
            assert!(s.x.abs() <= 1.0 + 1e-5);
            assert!(s.y.abs() <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn drifts_instead_of_jumping() {
        // Consecutive outputs can move at most alpha * (sample - state),
        // which is bounded by alpha * diameter of the sample box.
        let mut noise = LeakyNoise::new(5.0).unwrap();
        let alpha = noise.alpha();
        let mut rng = FishRng::new(3, FishId(1));
        let mut prev = noise.step(&mut rng);
        for _ in 0..500 {
            let next = noise.step(&mut rng);
            assert!((next - prev).length() <= alpha * 2.0_f32.sqrt() * 2.0 + 1e-5);
            prev = next;
        }
    }
}

#[cfg(test)]
mod config {
    use crate::SteeringConfig;

    #[test]
    fn default_is_valid() {
        assert!(SteeringConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_nonpositive_fields() {
        for mutate in [
            (|c: &mut SteeringConfig| c.max_speed = 0.0) as fn(&mut SteeringConfig),
            |c| c.max_force = -1.0,
            |c| c.separation_radius = 0.0,
            |c| c.obstacle_radius = f32::NAN,
        ] {
            let mut cfg = SteeringConfig::default();
            mutate(&mut cfg);
            assert!(cfg.validate().is_err(), "{cfg:?} should be rejected");
        }
    }
}
