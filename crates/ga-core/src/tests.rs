//! Unit tests for ga-core primitives.

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn unit_in_half_open_interval() {
        let mut rng = SimRng::new(1);
        for _ in 0..10_000 {
            let x = rng.unit();
            assert!((0.0..1.0).contains(&x), "got {x}");
        }
    }

    #[test]
    fn uniform_inclusive_stays_in_bounds() {
        let mut rng = SimRng::new(2);
        for _ in 0..10_000 {
            let x = rng.uniform_inclusive(1.0, 2.0);
            assert!((1.0..=2.0).contains(&x), "got {x}");
        }
    }

    #[test]
    fn draws_are_counted() {
        let mut rng = SimRng::new(3);
        assert_eq!(rng.draws(), 0);
        rng.unit();
        rng.uniform_inclusive(0.0, 1.0);
        assert_eq!(rng.draws(), 2);
    }
}

#[cfg(test)]
mod timing {
    use crate::{GaError, MetricMode, MetricTiming, SimRng, TimingValue};

    #[test]
    fn single_value_is_deterministic() {
        let t = MetricTiming::from_value(&TimingValue::Single(0.5)).unwrap();
        assert_eq!(t, MetricTiming::deterministic(0.5).unwrap());
        assert_eq!(t.bounds(), (0.5, 0.5));
        assert_eq!(t.mode(), MetricMode::Deterministic);
    }

    #[test]
    fn pair_is_stochastic_and_sorted() {
        let t = MetricTiming::from_value(&TimingValue::Range(vec![2.0, 1.0])).unwrap();
        assert_eq!(t, MetricTiming::stochastic(1.0, 2.0).unwrap());
        assert_eq!(t.bounds(), (1.0, 2.0));
    }

    #[test]
    fn wrong_arity_rejected() {
        for bounds in [vec![], vec![1.0], vec![1.0, 2.0, 3.0]] {
            let err = MetricTiming::from_value(&TimingValue::Range(bounds)).unwrap_err();
            assert!(matches!(err, GaError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn negative_or_non_finite_rejected() {
        assert!(MetricTiming::deterministic(-0.1).is_err());
        assert!(MetricTiming::deterministic(f64::NAN).is_err());
        assert!(MetricTiming::stochastic(0.0, f64::INFINITY).is_err());
        assert!(MetricTiming::try_from((-1.0, 1.0)).is_err());
    }

    #[test]
    fn durations_beyond_duration_max_rejected() {
        for secs in [1e20, 1e300, f64::MAX] {
            let err = MetricTiming::deterministic(secs).unwrap_err();
            assert!(matches!(err, GaError::InvalidConfiguration(_)), "secs={secs}");
            assert!(MetricTiming::stochastic(0.0, secs).is_err(), "secs={secs}");
        }
        assert!(MetricTiming::deterministic(1e18).is_ok());
    }

    #[test]
    fn widest_accepted_range_samples_without_panicking() {
        let t = MetricTiming::stochastic(0.0, 1e19).unwrap();
        let mut rng = SimRng::new(5);
        for _ in 0..100 {
            let x = t.sample(&mut rng);
            assert!((0.0..=1e19).contains(&x), "got {x}");
        }
    }

    #[test]
    fn deterministic_sample_draws_nothing() {
        let mut rng = SimRng::new(0);
        let t = MetricTiming::deterministic(0.25).unwrap();
        assert_eq!(t.sample(&mut rng), 0.25);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn degenerate_range_returns_bound() {
        let mut rng = SimRng::new(0);
        let t = MetricTiming::stochastic(0.3, 0.3).unwrap();
        assert_eq!(t.sample(&mut rng), 0.3);
    }

    #[test]
    fn stochastic_sample_in_bounds() {
        let mut rng = SimRng::new(11);
        let t = MetricTiming::try_from((3.0, 1.0)).unwrap();
        for _ in 0..1_000 {
            let x = t.sample(&mut rng);
            assert!((1.0..=3.0).contains(&x), "got {x}");
        }
        assert_eq!(rng.draws(), 1_000);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("Deterministic".parse::<MetricMode>().unwrap(), MetricMode::Deterministic);
        assert_eq!(" stochastic ".parse::<MetricMode>().unwrap(), MetricMode::Stochastic);
        let err = "annealed".parse::<MetricMode>().unwrap_err();
        assert!(matches!(err, GaError::UnsupportedMode(ref m) if m == "annealed"));
    }

    #[test]
    fn display() {
        assert_eq!(MetricTiming::deterministic(1.5).unwrap().to_string(), "deterministic 1.5s");
        assert_eq!(
            MetricTiming::stochastic(2.0, 1.0).unwrap().to_string(),
            "stochastic [1s, 2s]"
        );
    }
}

#[cfg(test)]
mod clock {
    use std::time::{Duration, Instant};

    use crate::{RealClock, VirtualClock, WaitClock, WaitMode};

    #[test]
    fn virtual_clock_accumulates_without_sleeping() {
        let mut clock = VirtualClock::new();
        let start = Instant::now();
        clock.wait(1_000.0).unwrap();
        clock.wait(0.5).unwrap();
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(clock.elapsed_secs(), 1_000.5);
        assert_eq!(clock.waits(), 2);
    }

    #[test]
    fn real_clock_sleeps_at_least_requested() {
        let mut clock = RealClock::new();
        let start = Instant::now();
        clock.wait(0.02).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(clock.waits(), 1);
    }

    #[test]
    fn make_clock_matches_mode() {
        assert_eq!(WaitMode::Real.make_clock().mode(), WaitMode::Real);
        assert_eq!(WaitMode::Virtual.make_clock().mode(), WaitMode::Virtual);
        assert_eq!(WaitMode::default(), WaitMode::Real);
    }
}

#[cfg(test)]
mod config {
    use std::io::Write;

    use crate::{GaError, MetricMode, MetricTiming, SimulatorConfig, TimingValue, WaitMode};

    #[test]
    fn defaults() {
        let cfg = SimulatorConfig::default();
        assert_eq!(cfg.metric_computation_time, TimingValue::Single(0.0));
        assert_eq!(cfg.collision_probability, 0.0);
        assert_eq!(cfg.wait_mode, WaitMode::Real);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.individuals, 0);
        cfg.validate().unwrap();
    }

    #[test]
    fn toml_range_and_integer_single() {
        let cfg = SimulatorConfig::from_toml_str(
            "metric_computation_time = [0.5, 1.5]\n\
             collision_probability = 0.25\n\
             wait_mode = \"virtual\"\n\
             seed = 42\n\
             individuals = 10\n",
        )
        .unwrap();
        assert_eq!(cfg.timing().unwrap().bounds(), (0.5, 1.5));
        assert_eq!(cfg.timing().unwrap().mode(), MetricMode::Stochastic);
        assert_eq!(cfg.wait_mode, WaitMode::Virtual);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.individuals().unwrap(), 10);

        let cfg = SimulatorConfig::from_toml_str("metric_computation_time = 2").unwrap();
        assert_eq!(cfg.timing().unwrap(), MetricTiming::deterministic(2.0).unwrap());
    }

    #[test]
    fn json_single() {
        let cfg = SimulatorConfig::from_json_str(
            r#"{"metric_computation_time": 0.1, "collision_probability": 1.0}"#,
        )
        .unwrap();
        assert_eq!(cfg.timing().unwrap(), MetricTiming::deterministic(0.1).unwrap());
        assert_eq!(cfg.probability().unwrap(), 1.0);
    }

    #[test]
    fn mode_tag_must_match_shape() {
        let cfg = SimulatorConfig::from_toml_str(
            "metric_computation_time = 1.0\nmode = \"stochastic\"",
        )
        .unwrap();
        assert!(matches!(cfg.timing(), Err(GaError::InvalidConfiguration(_))));
    }

    #[test]
    fn unknown_mode_tag_is_unsupported() {
        let cfg = SimulatorConfig::from_toml_str(
            "metric_computation_time = 1.0\nmode = \"quantum\"",
        )
        .unwrap();
        assert!(matches!(cfg.timing(), Err(GaError::UnsupportedMode(_))));
    }

    #[test]
    fn out_of_range_probability() {
        for p in [-0.01, 1.01, f64::NAN] {
            let cfg = SimulatorConfig { collision_probability: p, ..Default::default() };
            assert!(matches!(cfg.validate(), Err(GaError::InvalidConfiguration(_))), "p={p}");
        }
    }

    #[test]
    fn negative_individuals() {
        let cfg = SimulatorConfig { individuals: -1, ..Default::default() };
        assert!(matches!(cfg.individuals(), Err(GaError::InvalidArgument(_))));
    }

    #[test]
    fn three_element_range_rejected() {
        let cfg =
            SimulatorConfig::from_json_str(r#"{"metric_computation_time": [1, 2, 3]}"#).unwrap();
        assert!(matches!(cfg.timing(), Err(GaError::InvalidConfiguration(_))));
    }

    #[test]
    fn from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("sim.toml");
        let mut f = std::fs::File::create(&toml_path).unwrap();
        writeln!(f, "collision_probability = 0.5").unwrap();
        assert_eq!(SimulatorConfig::from_path(&toml_path).unwrap().collision_probability, 0.5);

        let json_path = dir.path().join("sim.json");
        std::fs::write(&json_path, r#"{"individuals": 3}"#).unwrap();
        assert_eq!(SimulatorConfig::from_path(&json_path).unwrap().individuals, 3);

        let yaml_path = dir.path().join("sim.yaml");
        std::fs::write(&yaml_path, "individuals: 3").unwrap();
        assert!(matches!(SimulatorConfig::from_path(&yaml_path), Err(GaError::Parse(_))));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(SimulatorConfig::from_path(&missing), Err(GaError::Io(_))));
    }
}
