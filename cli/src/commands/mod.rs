use std::io::Write;

use llmmatch_core::api::CliError;

pub mod cli;
pub mod recommend;
pub mod train;

/// Write one line of command output. A closed pipe surfaces as `CliError::Io`
/// instead of a panic.
pub(crate) fn write_line(out: &mut impl Write, line: &str) -> Result<(), CliError> {
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut out = Vec::new();
        write_line(&mut out, "{\"ok\":true}").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"ok\":true}\n");
    }

    #[test]
    fn test_closed_output_is_an_io_error() {
        let err = write_line(&mut ClosedPipe, "x").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 20);
    }
}
