use area_drag_chart::core::{AxisScale, LinearScale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn horizontal_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::horizontal(domain_start, domain_end, 2048.0).expect("valid scale");

        let px = scale.to_pixel(value).expect("to pixel");
        let recovered = scale.to_domain(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-7);
        prop_assert!((-1e-9..=2048.0 + 1e-9).contains(&px));
    }

    #[test]
    fn vertical_scale_puts_larger_values_higher(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        low_factor in 0.0f64..0.5,
        high_factor in 0.5f64..1.0
    ) {
        let scale = LinearScale::vertical(domain_start, domain_start + domain_span, 400.0)
            .expect("valid scale");

        let low_px = scale.to_pixel(domain_start + low_factor * domain_span).expect("low");
        let high_px = scale.to_pixel(domain_start + high_factor * domain_span).expect("high");

        prop_assert!(high_px <= low_px);
    }

    #[test]
    fn ticks_are_inside_the_domain_and_evenly_spaced(
        domain_start in -10_000.0f64..10_000.0,
        domain_span in 0.01f64..10_000.0,
        count in 2usize..12
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::horizontal(domain_start, domain_end, 800.0).expect("valid scale");
        let ticks = scale.ticks(count);

        prop_assert!(!ticks.is_empty());
        let tolerance = domain_span * 1e-9;
        for tick in &ticks {
            prop_assert!(*tick >= domain_start - tolerance);
            prop_assert!(*tick <= domain_end + tolerance);
        }
        if let [first, second, ..] = ticks.as_slice() {
            let step = second - first;
            for pair in ticks.windows(2) {
                prop_assert!(((pair[1] - pair[0]) - step).abs() <= step * 1e-6);
            }
        }
    }

    #[test]
    fn nice_domain_contains_the_input_domain(
        domain_start in -10_000.0f64..10_000.0,
        domain_span in 0.01f64..10_000.0
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::vertical(domain_start, domain_end, 300.0)
            .expect("valid scale")
            .nice(5);
        let (nice_start, nice_end) = scale.domain();

        prop_assert!(nice_start <= domain_start);
        prop_assert!(nice_end >= domain_end);
    }
}
