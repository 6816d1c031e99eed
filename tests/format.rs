use calc::{format_result, util::format::format_general};

#[test]
fn results_use_fifteen_significant_digits() {
    let cases = [(8.0, "8"),
                 (512.0, "512"),
                 (-2.5, "-2.5"),
                 (0.1 + 0.2, "0.3"),
                 (1.0 / 3.0, "0.333333333333333"),
                 (2.0 / 3.0, "0.666666666666667"),
                 (std::f64::consts::PI, "3.14159265358979"),
                 (123_456_789_012_345.0, "123456789012345"),
                 (0.0001, "0.0001"),
                 (0.0, "0")];

    for (value, expected) in cases {
        assert_eq!(format_result(value), expected, "{value}");
    }
}

#[test]
fn large_and_small_magnitudes_use_scientific_form() {
    let cases = [(1e20, "1E+20"),
                 (1_234_567_890_123_456.0, "1.23456789012346E+15"),
                 (1.5e-7, "1.5E-07"),
                 (0.000_012_34, "1.234E-05"),
                 (-2e100, "-2E+100"),
                 (2f64.powf(81.0), "2.41785163922926E+24")];

    for (value, expected) in cases {
        assert_eq!(format_result(value), expected, "{value}");
    }
}

#[test]
fn rounding_can_move_to_the_next_decade() {
    assert_eq!(format_general(999_999.7, 6), "1E+06");
    assert_eq!(format_general(99.999_99, 6), "100");
}

#[test]
fn special_values_have_fixed_spellings() {
    assert_eq!(format_result(f64::INFINITY), "+Inf");
    assert_eq!(format_result(f64::NEG_INFINITY), "-Inf");
    assert_eq!(format_result(f64::NAN), "NaN");
    assert_eq!(format_result(-0.0), "-0");
}

#[test]
fn zero_precision_means_one_digit() {
    assert_eq!(format_general(2.4, 0), "2");
    assert_eq!(format_general(1234.0, 0), "1E+03");
}
