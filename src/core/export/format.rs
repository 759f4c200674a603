//! Canonical number formatting
//!
//! All emitters render reals through [`f_to_str`] so that a value written
//! as a parameter and the same value used elsewhere always have identical
//! text, and repeated exports diff cleanly.

/// Formats a real number for BNGL output
///
/// Produces the shortest decimal text that parses back to the same `f64`.
/// Integral values keep a `.0` suffix and very large or very small
/// magnitudes switch to exponent form (`1e-15`, `6.02214076e23`). Negative
/// zero is written as `0.0`.
///
/// # Examples
///
/// ```
/// use bngl_export::core::export::format::f_to_str;
///
/// assert_eq!(f_to_str(3.0), "3.0");
/// assert_eq!(f_to_str(2.5), "2.5");
/// assert_eq!(f_to_str(1e-15), "1e-15");
/// ```
pub fn f_to_str(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_keep_fraction() {
        assert_eq!(f_to_str(1.0), "1.0");
        assert_eq!(f_to_str(10.0), "10.0");
        assert_eq!(f_to_str(-4.0), "-4.0");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(f_to_str(0.01), "0.01");
        assert_eq!(f_to_str(0.5), "0.5");
        assert_eq!(f_to_str(123.456), "123.456");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(f_to_str(1e-15), "1e-15");
        assert_eq!(f_to_str(6.02214076e23), "6.02214076e23");
        assert_eq!(f_to_str(1e-6), "1e-6");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(f_to_str(-0.0), "0.0");
        assert_eq!(f_to_str(0.0), "0.0");
    }

    #[test]
    fn test_roundtrip_is_exact() {
        for v in [0.1, 1.0 / 3.0, 2.5e-9, 7.25e12, 6.02214076e23 * 1e-15] {
            let parsed: f64 = f_to_str(v).parse().unwrap();
            assert_eq!(parsed.to_bits(), v.to_bits());
        }
    }
}
