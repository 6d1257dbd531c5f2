// Holds the complex values that the driver adds, and the two ways they get written out
// Contains the fixed operand pairs, the addition, and the stream-style float text

pub mod imaginary {
    use num_complex::{Complex, Complex32, Complex64};
    use num_traits::Float;

    /// Builds a complex value from a (real, imaginary) tuple
    pub fn from_parts<T>((real, imaginary): (T, T)) -> Complex<T> {
        Complex::new(real, imaginary)
    }

    /// The double precision operands, (1, 2) and (3, 4)
    pub fn stream_pair() -> (Complex64, Complex64) {
        (from_parts((1.0, 2.0)), from_parts((3.0, 4.0)))
    }

    /// The single precision operands, (1, 2) and (2, 4)
    pub fn builtin_pair() -> (Complex32, Complex32) {
        (from_parts((1.0, 2.0)), from_parts((2.0, 4.0)))
    }

    /// Component-wise addition: real parts added, imaginary parts added
    pub fn sum<T: Float>((a, b): (Complex<T>, Complex<T>)) -> Complex<T> {
        a + b
    }

}

pub mod notation {
    use num_complex::Complex;
    use std::fmt;

    /// Significant digits an output stream uses unless told otherwise
    pub const DEFAULT_PRECISION: usize = 6;

    /// Formats a float in `%g` general notation with `precision` significant digits.
    ///
    /// Picks fixed or scientific form from the exponent the value has after
    /// rounding, then drops trailing fractional zeros.
    pub fn general(value: f64, precision: usize) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value < 0. { "-inf" } else { "inf" }.to_string();
        }
        if value == 0. {
            return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
        }
        let precision = precision.max(1);
        // Rounding can carry into a new digit (999999.5 -> 1e+06), so read the
        // exponent back from the rounded scientific text
        let scientific = format!("{:.*e}", precision - 1, value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };
        if exponent >= -4 && exponent < precision as i32 {
            let decimals = (precision as i32 - 1 - exponent) as usize;
            strip_zeros(&format!("{:.*}", decimals, value)).to_string()
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", strip_zeros(mantissa), sign, exponent.abs())
        }
    }

    fn strip_zeros(text: &str) -> &str {
        if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.')
        } else {
            text
        }
    }

    /// Writes a complex value as `(re,im)`
    pub struct StreamForm<'a, T>(pub &'a Complex<T>);

    impl<T: Copy + Into<f64>> fmt::Display for StreamForm<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let Complex { re, im } = *self.0;
            write!(
                f,
                "({},{})",
                general(re.into(), DEFAULT_PRECISION),
                general(im.into(), DEFAULT_PRECISION)
            )
        }
    }

    /// Writes a complex value as `re+imi`. The `+` is always written, so a
    /// negative imaginary part comes out as `3+-6i`
    pub struct SuffixForm<'a, T>(pub &'a Complex<T>);

    impl<T: Copy + Into<f64>> fmt::Display for SuffixForm<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let Complex { re, im } = *self.0;
            write!(
                f,
                "{}+{}i",
                general(re.into(), DEFAULT_PRECISION),
                general(im.into(), DEFAULT_PRECISION)
            )
        }
    }

}
