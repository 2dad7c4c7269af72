pub use float_cmp;

use num_traits::{Float, cast::NumCast};

// (epsilon, ulps) accepted anywhere a float_cmp::F64Margin is
pub const DEFAULT_F64_MARGIN: (f64, i64) = (1e-8, 4);

// approx_eq asserts two floats are equal within DEFAULT_F64_MARGIN
#[macro_export]
macro_rules! approx_eq {
    ($type:ty, $left:expr, $right:expr) => {{
        let left: $type = $left;
        let right: $type = $right;
        assert!(
            $crate::float_cmp::ApproxEq::approx_eq(left, right, $crate::DEFAULT_F64_MARGIN),
            "assertion failed: `(left ~= right)`\n  left: `{:?}`,\n right: `{:?}`",
            left,
            right,
        );
    }};
}

// fmt_float rounds a float to a fixed number of decimal places
pub fn fmt_float<F: Float>(f: F, decimal_precision: u32) -> String {
    let pow = 10_i64.pow(decimal_precision);
    let i = (f * NumCast::from(pow).unwrap_or_else(F::one)).round().to_i64().unwrap_or(0);
    let sign = if i < 0 { "-" } else { "" };
    if decimal_precision == 0 {
        return format!("{}{}", sign, i.abs());
    }
    format!(
        "{}{}.{:0width$}",
        sign,
        (i / pow).abs(),
        (i % pow).abs(),
        width = decimal_precision as usize,
    )
}

// ceil_count is the number of whole steps of size `step` needed to cover `length`
pub fn ceil_count(length: f64, step: f64) -> usize {
    if !length.is_finite() || !step.is_finite() || length <= 0. || step <= 0. {
        return 0;
    }
    (length / step).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_fmt_float() {
        assert_eq!("3", fmt_float(PI, 0));
        assert_eq!("3.1", fmt_float(PI, 1));
        assert_eq!("3.14", fmt_float(PI, 2));
        assert_eq!("3.142", fmt_float(PI, 3));
        assert_eq!("3.05", fmt_float(3.049_f64, 2));
        assert_eq!("-0.50", fmt_float(-0.5_f64, 2));
        assert_eq!("180.00", fmt_float(180_f64, 2));
    }

    #[test]
    fn test_ceil_count() {
        assert_eq!(0, ceil_count(0., 180.));
        assert_eq!(1, ceil_count(1., 180.));
        assert_eq!(1, ceil_count(180., 180.));
        assert_eq!(2, ceil_count(180.5, 180.));
        assert_eq!(0, ceil_count(-10., 180.));
        assert_eq!(0, ceil_count(100., 0.));
        assert_eq!(0, ceil_count(f64::NAN, 180.));
        assert_eq!(0, ceil_count(f64::INFINITY, 180.));
    }

    #[test]
    fn test_approx_eq() {
        approx_eq!(f64, 0.1 + 0.2, 0.3);
    }

    #[test]
    #[should_panic]
    fn test_approx_eq_fails() {
        approx_eq!(f64, 1., 1.1);
    }
}
