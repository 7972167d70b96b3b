use std::io::{self, Write};

pub fn write_stdout_text(text: &str) -> io::Result<()> {
    write_all_to_stdout(text.as_bytes(), false)
}

pub fn write_stdout_line(text: &str) -> io::Result<()> {
    write_all_to_stdout(text.as_bytes(), true)
}

// `makuta transactions | head` must not abort with a spurious error
// status when the reader closes early.
fn write_all_to_stdout(bytes: &[u8], terminate_line: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    let outcome = stdout
        .write_all(bytes)
        .and_then(|()| {
            if terminate_line {
                stdout.write_all(b"\n")
            } else {
                Ok(())
            }
        })
        .and_then(|()| stdout.flush());
    squelch_broken_pipe(outcome)
}

fn squelch_broken_pipe(outcome: io::Result<()>) -> io::Result<()> {
    match outcome {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::squelch_broken_pipe;

    #[test]
    fn broken_pipe_reads_as_success() {
        let outcome = squelch_broken_pipe(Err(io::Error::from(io::ErrorKind::BrokenPipe)));
        assert!(outcome.is_ok());
    }

    #[test]
    fn other_errors_pass_through() {
        let outcome = squelch_broken_pipe(Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        assert!(outcome.is_err());
        if let Err(error) = outcome {
            assert_eq!(error.kind(), io::ErrorKind::PermissionDenied);
        }

        assert!(squelch_broken_pipe(Ok(())).is_ok());
    }
}
