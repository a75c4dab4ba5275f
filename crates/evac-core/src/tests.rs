//! Unit tests for evac-core primitives.

#[cfg(test)]
mod position {
    use crate::Position;

    #[test]
    fn index_roundtrip() {
        let p = Position::new(3, 7);
        assert_eq!(p.index(10), 37);
        assert_eq!(Position::from_index(37, 10), p);
    }

    #[test]
    fn offset_rejects_negative() {
        let p = Position::new(0, 2);
        assert_eq!(p.offset(-1, 0), None);
        assert_eq!(p.offset(1, -1), Some(Position::new(1, 1)));
    }

    #[test]
    fn chebyshev_counts_diagonal_as_one() {
        assert_eq!(Position::new(0, 0).chebyshev(Position::new(3, 2)), 3);
        assert_eq!(Position::new(4, 2).chebyshev(Position::new(4, 2)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
    }
}

#[cfg(test)]
mod units {
    use crate::Scale;

    #[test]
    fn conversions() {
        let s = Scale::new(0.5, 0.4);
        assert_eq!(s.secs(10.0), 5.0);
        assert!((s.meters(10.0) - 4.0).abs() < 1e-12);
        assert!((s.walking_speed() - 0.8).abs() < 1e-12);
    }
}

#[cfg(test)]
mod config {
    use crate::{EvacConfig, EvacError};

    #[test]
    fn default_is_valid() {
        EvacConfig::default().validate().unwrap();
    }

    #[test]
    fn factor_below_one_rejected() {
        let cfg = EvacConfig { occupied_factor: 0.5, ..EvacConfig::default() };
        assert!(matches!(cfg.validate(), Err(EvacError::Config(_))));
    }

    #[test]
    fn nan_factor_rejected() {
        let cfg = EvacConfig { smoke_factor: f64::NAN, ..EvacConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let cfg = EvacConfig { chaos_rate: 1.5, ..EvacConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = EvacConfig { spreading_rate: -0.1, ..EvacConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_runs_rejected() {
        let cfg = EvacConfig { runs: 0, ..EvacConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_partial_keeps_defaults() {
        let cfg = EvacConfig::from_toml_str("chaos_rate = 0.0\nruns = 5\n").unwrap();
        assert_eq!(cfg.chaos_rate, 0.0);
        assert_eq!(cfg.runs, 5);
        assert_eq!(cfg.occupied_factor, EvacConfig::default().occupied_factor);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_invalid_value_rejected() {
        assert!(EvacConfig::from_toml_str("smoke_factor = 0.2\n").is_err());
        assert!(EvacConfig::from_toml_str("runs = \"many\"\n").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_toml_file_is_io_error() {
        let err = EvacConfig::from_toml_file("/nonexistent/evac.toml").unwrap_err();
        assert!(matches!(err, EvacError::Io(_)));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_differ() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "child streams should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(rng.gen_bool(2.0));
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(7);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}
