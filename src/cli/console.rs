//! Line-oriented console used by the interactive session.

use std::io::{self, BufRead, Write};

use quieten::{Confirm, FetchObserver, FetchReport, InboxError, ProgressEvent, ProgressSink};

/// Reads answers from `input` and writes prompts and progress to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a console over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    pub fn line(&mut self, text: &str) -> Result<(), InboxError> {
        writeln!(self.output, "{text}").map_err(|error| io_error(&error))
    }

    /// Writes pre-formatted text as is.
    pub fn block(&mut self, text: &str) -> Result<(), InboxError> {
        self.output
            .write_all(text.as_bytes())
            .map_err(|error| io_error(&error))
    }

    /// Writes `prompt` and reads one trimmed answer.
    ///
    /// Returns `None` once the input is exhausted. Bytes that are not UTF-8
    /// are replaced, so such a line reads as an unrecognised answer.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, InboxError> {
        write!(self.output, "{prompt}").map_err(|error| io_error(&error))?;
        self.output.flush().map_err(|error| io_error(&error))?;

        let mut answer = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut answer)
            .map_err(|error| io_error(&error))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&answer).trim().to_owned()))
    }

    /// Consumes the console, returning the output stream.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_progress(&mut self, text: &str, newline: bool) {
        let written = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}").and_then(|()| self.output.flush())
        };
        if let Err(error) = written {
            tracing::debug!("progress output failed: {error}");
        }
    }
}

impl<R, W> Confirm for Console<R, W>
where
    R: BufRead,
    W: Write,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        match self.ask(prompt) {
            Ok(Some(answer)) => answer.eq_ignore_ascii_case("y"),
            Ok(None) => false,
            Err(error) => {
                tracing::debug!("confirmation prompt failed: {error}");
                false
            }
        }
    }
}

impl<R, W> ProgressSink for Console<R, W>
where
    R: BufRead,
    W: Write,
{
    fn report(&mut self, event: ProgressEvent<'_>) {
        match event {
            ProgressEvent::Record {
                position,
                total,
                repository,
            } => self.write_progress(&format!("Processing [{position}/{total}] {repository}"), true),
            ProgressEvent::Elided => self.write_progress("...", true),
        }
    }
}

impl<R, W> FetchObserver for Console<R, W>
where
    R: BufRead,
    W: Write,
{
    fn page_fetched(&mut self, _page: u32, _received: usize) {
        self.write_progress(".", false);
    }

    fn finished(&mut self, report: &FetchReport) {
        match &report.failure {
            None => self.write_progress(" done", true),
            Some(error) => self.write_progress(
                &format!(
                    " stopped early after {} notifications: {error}",
                    report.records.len()
                ),
                true,
            ),
        }
    }
}

/// Converts an I/O error to an [`InboxError::Io`].
pub(crate) fn io_error(error: &io::Error) -> InboxError {
    InboxError::Io {
        message: error.to_string(),
    }
}
