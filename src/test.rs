/// Check for equality between two percentages allowing for the rounding to
/// two decimal places applied to every mix.
#[macro_export]
macro_rules! assert_percent_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 0.01 as $crate::Component);
    }};
}
