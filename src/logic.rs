// Holds the arithmetic and print driver
// Adds the two fixed operand pairs and writes one line per sum
use crate::error::Result;
use crate::numbers::imaginary::{builtin_pair, stream_pair, sum};
use crate::numbers::notation::{StreamForm, SuffixForm};
use std::io::Write;
use tracing::{debug, info};

/// The double precision sum in stream form, `(4,6)`
pub fn stream_line() -> String {
    let (a, b) = stream_pair();
    let c = sum((a, b));
    debug!(a = %a, b = %b, c = %c, "double precision sum");
    StreamForm(&c).to_string()
}

/// The single precision sum as real, `+`, imaginary, `i`, so `3+6i`
pub fn builtin_line() -> String {
    let (d, e) = builtin_pair();
    let f = sum((d, e));
    debug!(d = %d, e = %e, f = %f, "single precision sum");
    SuffixForm(&f).to_string()
}

/// Writes both sums to `out`, one per line, then flushes it
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", stream_line())?;
    writeln!(out, "{}", builtin_line())?;
    out.flush()?;
    info!("wrote both sums");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_lines() {
        assert_eq!(stream_line(), "(4,6)");
        assert_eq!(builtin_line(), "3+6i");
    }

    #[test]
    fn test_run_writes_two_lines() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(4,6)\n3+6i\n");
    }

    #[test]
    fn test_run_surfaces_write_failure() {
        let result = run(&mut ClosedPipe);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
