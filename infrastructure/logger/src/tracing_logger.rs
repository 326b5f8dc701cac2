use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards [`Logger`] calls to `tracing` under the `pizzagpt` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pizzagpt", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pizzagpt", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pizzagpt", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pizzagpt", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl CapturedOutput {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedOutput {
        type Writer = CapturedOutput;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(log: impl FnOnce(&TracingLogger)) -> String {
        let output = CapturedOutput::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(output.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || log(&TracingLogger));

        output.contents()
    }

    #[test]
    fn should_write_error_lines_under_pizzagpt_target() {
        let output = capture(|logger| logger.error("Connection error: refused"));

        assert!(output.contains("ERROR"));
        assert!(output.contains("pizzagpt"));
        assert!(output.contains("Connection error: refused"));
    }

    #[test]
    fn should_forward_each_level() {
        let output = capture(|logger| {
            logger.info("one");
            logger.warn("two");
            logger.debug("three");
        });

        assert!(output.contains("INFO"));
        assert!(output.contains("WARN"));
        assert!(output.contains("DEBUG"));
    }
}
