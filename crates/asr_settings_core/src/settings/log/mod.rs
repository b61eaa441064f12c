use std::fmt;

/// Severity of a message emitted toward the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
	/// Failure the user should see.
	Error,
	/// Recoverable problem.
	Warning,
	/// Normal progress.
	Info,
	/// Diagnostic detail.
	Debug,
	/// Very verbose diagnostic detail.
	Trace,
}

impl LogLevel {
	/// Map a raw level code from a script runtime callback.
	///
	/// Codes are `1` error through `5` trace; anything else is `None`.
	pub fn from_raw(raw: u32) -> Option<Self> {
		match raw {
			1 => Some(Self::Error),
			2 => Some(Self::Warning),
			3 => Some(Self::Info),
			4 => Some(Self::Debug),
			5 => Some(Self::Trace),
			_ => None,
		}
	}

	/// Lowercase level label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Error => "error",
			Self::Warning => "warning",
			Self::Info => "info",
			Self::Debug => "debug",
			Self::Trace => "trace",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Destination for messages addressed to the host rather than the process log.
pub trait LogSink {
	/// Record one message.
	fn log(&mut self, level: LogLevel, message: &str);
}

/// Forwards messages to `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
	fn log(&mut self, level: LogLevel, message: &str) {
		match level {
			LogLevel::Error => tracing::error!(target: "asr_settings::host", "{message}"),
			LogLevel::Warning => tracing::warn!(target: "asr_settings::host", "{message}"),
			LogLevel::Info => tracing::info!(target: "asr_settings::host", "{message}"),
			LogLevel::Debug => tracing::debug!(target: "asr_settings::host", "{message}"),
			LogLevel::Trace => tracing::trace!(target: "asr_settings::host", "{message}"),
		}
	}
}

/// Drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
	fn log(&mut self, _level: LogLevel, _message: &str) {}
}

/// Keeps every message in order, mostly for tests and batch tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
	/// Recorded messages.
	pub entries: Vec<(LogLevel, String)>,
}

impl MemorySink {
	/// Messages at exactly `level`.
	pub fn messages(&self, level: LogLevel) -> impl Iterator<Item = &str> {
		self.entries.iter().filter(move |(entry_level, _)| *entry_level == level).map(|(_, message)| message.as_str())
	}
}

impl LogSink for MemorySink {
	fn log(&mut self, level: LogLevel, message: &str) {
		self.entries.push((level, message.to_owned()));
	}
}

impl<F> LogSink for F
where
	F: FnMut(LogLevel, &str),
{
	fn log(&mut self, level: LogLevel, message: &str) {
		self(level, message);
	}
}
