//! Property-based tests for the evaluator and the sweep
//!
//! These check the formula, the sample count, and the results document
//! against generated parameter sets.

#[cfg(test)]
mod tests {
    use crate::config::SweepConfig;
    use crate::engine::evaluator::compute;
    use crate::engine::sweep::evaluate_sweep;
    use crate::results::{format_number, parse_results, render_results, ResultPair};
    use proptest::prelude::*;

    // Ranges small enough that a sweep stays short
    prop_compose! {
        fn bounded_sweep()(
            n0 in -50.0f64..50.0,
            span in 0.0f64..20.0,
            h in 0.05f64..5.0,
            a in -10.0f64..10.0,
            b in -10.0f64..10.0,
            c in -10.0f64..10.0,
        ) -> SweepConfig {
            SweepConfig { n0, h, nk: n0 + span, a, b, c }
        }
    }

    proptest! {
        #[test]
        fn test_compute_matches_formula(
            x in -1.0e6f64..1.0e6,
            a in -1.0e3f64..1.0e3,
            b in -1.0e3f64..1.0e3,
            c in -1.0e3f64..1.0e3,
        ) {
            let s = x.sin();
            let expected = a * s.powi(2) + b * s + c;
            let actual = compute(x, a, b, c);
            let scale = a.abs() + b.abs() + c.abs() + 1.0;
            prop_assert!((actual - expected).abs() <= 1e-9 * scale);
        }

        #[test]
        fn test_sweep_length(config in bounded_sweep()) {
            let results = evaluate_sweep(&config).unwrap();
            let expected = ((config.nk - config.n0) / config.h).floor() as i64 + 1;
            let actual = results.len() as i64;

            // Accumulated rounding may add or drop the final boundary sample
            prop_assert!((actual - expected).abs() <= 1, "expected ~{}, got {}", expected, actual);
        }

        #[test]
        fn test_sweep_is_ascending_and_bounded(config in bounded_sweep()) {
            let results = evaluate_sweep(&config).unwrap();

            prop_assert_eq!(results.first().map(|p| p.x), Some(config.n0));
            prop_assert!(results.iter().all(|p| p.x <= config.nk));
            prop_assert!(results.windows(2).all(|w| w[0].x < w[1].x));
            for pair in &results {
                prop_assert_eq!(pair.y, compute(pair.x, config.a, config.b, config.c));
            }
        }

        #[test]
        fn test_inverted_range_is_empty(
            n0 in -100.0f64..100.0,
            gap in 1.0e-6f64..100.0,
            h in -5.0f64..5.0,
        ) {
            let config = SweepConfig { n0, h, nk: n0 - gap, a: 1.0, b: 1.0, c: 1.0 };
            prop_assert!(evaluate_sweep(&config).unwrap().is_empty());
        }

        #[test]
        fn test_results_text_survives_reparse(
            values in prop::collection::vec((any::<f64>(), any::<f64>()), 0..20),
        ) {
            let pairs: Vec<ResultPair> =
                values.iter().map(|&(x, y)| ResultPair::new(x, y)).collect();

            let parsed = parse_results(&render_results(&pairs).unwrap()).unwrap();

            prop_assert_eq!(parsed.len(), pairs.len());
            for (original, reparsed) in pairs.iter().zip(&parsed) {
                prop_assert_eq!(format_number(original.x), format_number(reparsed.x));
                prop_assert_eq!(format_number(original.y), format_number(reparsed.y));
            }
        }
    }
}
