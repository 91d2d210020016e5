//! Numeric literals.
//!
//! The tokenizer only recognizes the *shape* of a number (decimal digits with an optional
//! fractional part); converting the token text into a value is delegated to a [`NumLiteral`]
//! impl. Standard impls are provided for `f32` and `f64`.

use num_traits::Float;

use core::fmt;

/// Numeric type that can be used to evaluate expressions.
///
/// # Examples
///
/// ```
/// use arithmetic_explain::NumLiteral;
///
/// assert_eq!(<f64 as NumLiteral>::parse("1.25"), Some(1.25));
/// assert_eq!(<f32 as NumLiteral>::parse(".5"), Some(0.5));
/// assert_eq!(<f64 as NumLiteral>::parse("1e3"), None);
/// ```
pub trait NumLiteral: 'static + Copy + fmt::Debug + fmt::Display + Float {
    /// Tries to convert a number token into a value. The token text consists of ASCII digits
    /// and at most one `.` char.
    fn parse(input: &str) -> Option<Self>;
}

macro_rules! impl_num_literal_for_float {
    ($($num:ident),+) => {
        $(
        impl NumLiteral for $num {
            fn parse(input: &str) -> Option<Self> {
                let is_decimal = input.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.');
                if is_decimal {
                    input.parse().ok()
                } else {
                    None
                }
            }
        }
        )+
    };
}

impl_num_literal_for_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_numbers_with_dot() {
        #[derive(Debug, Clone, Copy)]
        struct Sample {
            input: &'static str,
            value: f32,
        }

        #[rustfmt::skip]
        const SAMPLES: &[Sample] = &[
            Sample { input: "1.25", value: 1.25 },
            Sample { input: "1.", value: 1.0 },
            Sample { input: ".5", value: 0.5 },
            Sample { input: "007", value: 7.0 },
            Sample { input: "0.000", value: 0.0 },
        ];

        for &sample in SAMPLES {
            let number = <f32 as NumLiteral>::parse(sample.input).unwrap();
            assert!(
                (number - sample.value).abs() < f32::EPSILON,
                "Failed sample: {sample:?}"
            );
        }
    }

    #[test]
    fn non_decimal_inputs_are_rejected() {
        for &input in &["", ".", "1..2", "1e3", "inf", "NaN", "-1", "0x10"] {
            assert_eq!(
                <f64 as NumLiteral>::parse(input),
                None,
                "Failed input: {input}"
            );
        }
    }
}
