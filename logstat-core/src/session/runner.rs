use crate::conf::{MonitorConfig, ParseErrorPolicy};
use crate::protocol::{Command, Ignored, ProtocolError, parse_command};
use crate::query::Monitor;
use crate::session::{SessionError, SessionSummary};
use crate::stats::{Stats, render_stats};
use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub on_parse_error: ParseErrorPolicy,
    pub strict_directions: bool,
    /// Flush after every result line, for interactive use.
    pub flush_each_line: bool,
}

impl SessionOptions {
    pub fn flush_each_line(mut self, flush: bool) -> Self {
        self.flush_each_line = flush;
        self
    }
}

impl From<&MonitorConfig> for SessionOptions {
    fn from(cfg: &MonitorConfig) -> Self {
        Self {
            on_parse_error: cfg.on_parse_error,
            strict_directions: cfg.strict_directions,
            flush_each_line: false,
        }
    }
}

pub struct Session<W: Write> {
    monitor: Monitor,
    output: W,
    options: SessionOptions,
    summary: SessionSummary,
}

impl<W: Write> Session<W> {
    pub fn new(output: W, options: SessionOptions) -> Self {
        Self::with_monitor(Monitor::new(), output, options)
    }

    pub fn with_monitor(monitor: Monitor, output: W, options: SessionOptions) -> Self {
        Self {
            monitor,
            output,
            options,
            summary: SessionSummary::default(),
        }
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read `input` to the end, handling each line in turn.
    ///
    /// Lines are split on raw bytes, so a line that is not valid UTF-8 is
    /// handled by the parse-error policy like any other malformed line.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<SessionSummary, SessionError> {
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).map_err(SessionError::Read)? == 0 {
                break;
            }
            line_no += 1;

            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
            match std::str::from_utf8(raw) {
                Ok(line) => self.process_line(line_no, line)?,
                Err(source) => {
                    self.summary.lines += 1;
                    self.reject(line_no, ProtocolError::InvalidUtf8 { source })?;
                }
            }
        }

        self.output.flush().map_err(SessionError::Write)?;

        let summary = self.summary;
        info!(
            lines = summary.lines,
            inserted = summary.inserted,
            queries = summary.queries,
            ignored = summary.ignored,
            rejected = summary.rejected,
            records = self.monitor.store().len(),
            types = self.monitor.store().type_count(),
            "session finished"
        );
        Ok(summary)
    }

    /// Apply one protocol line. `line_no` is 1-based and only used for
    /// reporting.
    ///
    /// A rejected line never touches the store.
    pub fn process_line(&mut self, line_no: usize, line: &str) -> Result<(), SessionError> {
        self.summary.lines += 1;

        match parse_command(line) {
            Ok(Command::Insert(record)) => {
                self.monitor.insert(record);
                self.summary.inserted += 1;
            }
            Ok(Command::Query(query)) => {
                let stats = self.monitor.query(&query);
                self.emit(&stats)?;
                self.summary.queries += 1;
            }
            Ok(Command::Ignored(Ignored::UnknownDirection { token }))
                if self.options.strict_directions =>
            {
                self.reject(line_no, ProtocolError::UnknownDirection { token })?;
            }
            Ok(Command::Ignored(reason)) => {
                debug!(line = line_no, ?reason, "ignoring line");
                self.summary.ignored += 1;
            }
            Err(e) => self.reject(line_no, e)?,
        }

        Ok(())
    }

    fn emit(&mut self, stats: &Stats) -> Result<(), SessionError> {
        writeln!(self.output, "{}", render_stats(stats)).map_err(SessionError::Write)?;
        if self.options.flush_each_line {
            self.output.flush().map_err(SessionError::Write)?;
        }
        Ok(())
    }

    fn reject(&mut self, line_no: usize, err: ProtocolError) -> Result<(), SessionError> {
        match self.options.on_parse_error {
            ParseErrorPolicy::Skip => {
                warn!(line = line_no, error = %err, "skipping malformed line");
                self.summary.rejected += 1;
                Ok(())
            }
            ParseErrorPolicy::Abort => {
                error!(line = line_no, error = %err, "aborting on malformed line");
                Err(SessionError::Aborted {
                    line: line_no,
                    source: err,
                })
            }
        }
    }
}
