use approx::assert_abs_diff_eq;
use pigmix::{
    hsv_to_rgb, hue_to_ncol, integer_ratio, normalize_ratio, parse_input, rgb_to_cmykw,
    rgb_to_cmyw, rgb_to_rybkw, Component, Error, Model, Rgb,
};
use proptest::prelude::*;

fn channel() -> impl Strategy<Value = i32> {
    0..=255i32
}

fn is_reduced(ratio: &str) -> bool {
    let parts = ratio
        .split(':')
        .map(|p| p.parse::<u32>().unwrap())
        .collect::<Vec<_>>();
    let divisor = parts.iter().copied().filter(|p| *p > 0).fold(0, |a, b| {
        let (mut a, mut b) = (a, b);
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    });
    divisor <= 1
}

proptest! {
    #[test]
    fn hex_round_trip(r in channel(), g in channel(), b in channel(), prefix in "(#|0x|0X|)") {
        let text = format!("{prefix}{r:02x}{g:02x}{b:02X}");
        prop_assert_eq!(parse_input(&text).unwrap(), Rgb::new(r, g, b));
    }

    #[test]
    fn decimal_round_trip(r in 100..=255i32, g in channel(), b in channel()) {
        let text = format!("{r}, {g}, {b}");
        prop_assert_eq!(parse_input(&text).unwrap(), Rgb::new(r, g, b));
    }

    #[test]
    fn grays_mix_black_and_white(v in channel()) {
        let white = v as Component / 255.0 * 100.0;
        for mix in [rgb_to_cmykw(v, v, v).unwrap().to_array(), rgb_to_rybkw(v, v, v).unwrap().to_array()] {
            prop_assert_eq!(&mix[..3], &[0.0; 3]);
            assert_abs_diff_eq!(mix[3] + mix[4], 100.0, epsilon = 0.02);
            assert_abs_diff_eq!(mix[4], white, epsilon = 0.01);
        }
    }

    #[test]
    fn mixes_add_up_to_one_hundred(r in channel(), g in channel(), b in channel()) {
        let cmykw: Component = rgb_to_cmykw(r, g, b).unwrap().values().iter().sum();
        let rybkw: Component = rgb_to_rybkw(r, g, b).unwrap().values().iter().sum();
        assert_abs_diff_eq!(cmykw, 100.0, epsilon = 0.1);
        assert_abs_diff_eq!(rybkw, 100.0, epsilon = 0.1);
    }

    #[test]
    fn mixes_stay_within_percentages(r in channel(), g in channel(), b in channel()) {
        let mix = rgb_to_rybkw(r, g, b).unwrap();
        prop_assert!(mix.values().iter().all(|v| (0.0..=100.0).contains(v)));
        let mix = rgb_to_cmyw(r, g, b).unwrap();
        prop_assert!(mix.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn ratios_have_one_part_per_channel(r in channel(), g in channel(), b in channel()) {
        let cmykw = integer_ratio(&rgb_to_cmykw(r, g, b).unwrap());
        prop_assert_eq!(cmykw.split(':').count(), 5);
        let cmyw = normalize_ratio(&rgb_to_cmyw(r, g, b).unwrap().values(), 8);
        prop_assert_eq!(cmyw.split(':').count(), 4);
        prop_assert!(is_reduced(&cmyw));
    }

    #[test]
    fn normalized_ratios_are_reduced(values in prop::collection::vec(0.0..100.0 as Component, 1..6)) {
        prop_assert!(is_reduced(&normalize_ratio(&values, 8)));
    }

    #[test]
    fn hsv_without_saturation_is_gray(h in 0.0..360.0 as Component, v in 0.0..=1.0 as Component) {
        let level = (v * 255.0).round() as i32;
        prop_assert_eq!(hsv_to_rgb(h, 0.0, v), Rgb::new(level, level, level));
    }

    #[test]
    fn ncol_letters(h in 0.0..720.0 as Component) {
        let name = hue_to_ncol(h).unwrap();
        prop_assert!(name.starts_with(['R', 'Y', 'G', 'C', 'B', 'M']));
    }

    #[test]
    fn out_of_range_is_rejected(r in 256..10_000i32) {
        prop_assert!(
            matches!(rgb_to_cmykw(r, 0, 0), Err(Error::OutOfRange { channel: "red", .. })),
            "red channel {} should be rejected", r
        );
    }
}

#[test]
fn documented_examples() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
    assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));

    let red = rgb_to_rybkw(255, 0, 0).unwrap();
    assert_abs_diff_eq!(red.red, 100.0, epsilon = 0.01);
    assert_abs_diff_eq!(red.yellow + red.blue + red.black + red.white, 0.0, epsilon = 0.01);

    assert_eq!(normalize_ratio(&[0.0, 0.0, 0.0], 8), "0:0:0");
    assert_eq!(normalize_ratio(&[1.0, 1.0, 1.0, 1.0], 8), "1:1:1:1");
    assert_eq!(
        integer_ratio(&pigmix::Cmykw::new(50.0, 50.0, 0.0, 0.0, 0.0)),
        "1:1:0:0:0"
    );

    assert_eq!(hue_to_ncol(0.0).unwrap(), "R0");
    assert_eq!(hue_to_ncol(90.0).unwrap(), "Y50");
    assert_eq!(hue_to_ncol(360.0).unwrap(), hue_to_ncol(0.0).unwrap());

    assert!(matches!(parse_input("12,34"), Err(Error::InvalidFormat { .. })));
    assert!(matches!(parse_input("zz12gg"), Err(Error::InvalidFormat { .. })));
    assert!(matches!(rgb_to_cmykw(300, 0, 0), Err(Error::OutOfRange { .. })));
}
