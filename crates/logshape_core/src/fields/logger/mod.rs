use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use crate::fields::encode::{EncodeOptions, Encoder};
use crate::fields::human::{HumanOptions, render_fields_with};
use crate::fields::json::render_json_fields;
use crate::fields::loggable::Loggable;
use crate::fields::value::Field;
use crate::fields::{LogError, Result};

/// Entry severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
	/// Diagnostic detail.
	Debug,
	/// Normal operation.
	Info,
	/// Unexpected but handled.
	Warn,
	/// Failed operation.
	Error,
}

impl Level {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Debug => "debug",
			Self::Info => "info",
			Self::Warn => "warn",
			Self::Error => "error",
		}
	}

	fn tag(self) -> &'static str {
		match self {
			Self::Debug => "DEBUG",
			Self::Info => "INFO",
			Self::Warn => "WARN",
			Self::Error => "ERROR",
		}
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Level {
	type Err = LogError;

	fn from_str(name: &str) -> Result<Self> {
		match name.to_ascii_lowercase().as_str() {
			"debug" => Ok(Self::Debug),
			"info" => Ok(Self::Info),
			"warn" | "warning" => Ok(Self::Warn),
			"error" => Ok(Self::Error),
			_ => Err(LogError::InvalidLevel { name: name.to_owned() }),
		}
	}
}

/// Text encoding a sink writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
	/// Header line followed by an indented field block.
	#[default]
	Human,
	/// One JSON object per line.
	Json,
}

/// One emitted log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
	/// Severity.
	pub level: Level,
	/// Component path, outermost first.
	pub components: Vec<Box<str>>,
	/// Message text.
	pub message: Box<str>,
	/// Context fields followed by call fields.
	pub fields: Vec<Field>,
}

impl Entry {
	/// Components joined with `.`, if any.
	pub fn component_path(&self) -> Option<String> {
		if self.components.is_empty() {
			return None;
		}
		Some(self.components.join("."))
	}

	/// Render the entry without a trailing newline.
	pub fn render(&self, format: Format) -> Result<Vec<u8>> {
		match format {
			Format::Human => Ok(self.render_human().into_bytes()),
			Format::Json => self.render_json(),
		}
	}

	fn render_human(&self) -> String {
		let mut out = format!("{} ", self.level.tag());
		if let Some(path) = self.component_path() {
			out.push('[');
			out.push_str(&path);
			out.push_str("] ");
		}
		out.push_str(&self.message);
		if !self.fields.is_empty() {
			out.push('\n');
			out.push_str(&render_fields_with(&self.fields, HumanOptions::nested(1)));
		}
		out
	}

	fn render_json(&self) -> Result<Vec<u8>> {
		let mut fields = Vec::with_capacity(self.fields.len() + 3);
		fields.push(Field::new("level", self.level.as_str()));
		if let Some(path) = self.component_path() {
			fields.push(Field::new("component", path));
		}
		fields.push(Field::new("msg", &*self.message));
		fields.extend(self.fields.iter().cloned());
		render_json_fields(&fields)
	}
}

/// Destination for rendered entries.
pub trait Sink: Send + Sync {
	/// Write one entry.
	fn emit(&self, entry: &Entry) -> Result<()>;
}

/// Sink writing newline-terminated entries to a shared writer.
///
/// Rendering happens before the lock is taken; the lock covers only the write.
#[derive(Debug)]
pub struct WriterSink<W> {
	format: Format,
	writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
	/// Wrap `writer`.
	pub fn new(writer: W, format: Format) -> Self {
		Self {
			format,
			writer: Mutex::new(writer),
		}
	}

	/// Format this sink writes.
	pub fn format(&self) -> Format {
		self.format
	}

	/// Recover the writer.
	pub fn into_inner(self) -> W {
		self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
	}
}

impl WriterSink<Vec<u8>> {
	/// In-memory sink.
	pub fn buffered(format: Format) -> Self {
		Self::new(Vec::new(), format)
	}

	/// Take everything written so far.
	pub fn take_output(&self) -> Vec<u8> {
		let mut buffer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
		std::mem::take(&mut *buffer)
	}
}

impl<W: Write + Send> Sink for WriterSink<W> {
	fn emit(&self, entry: &Entry) -> Result<()> {
		let mut bytes = entry.render(self.format)?;
		bytes.push(b'\n');

		let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
		writer.write_all(&bytes)?;
		writer.flush()?;
		Ok(())
	}
}

/// Explicitly constructed logging context.
///
/// Derived loggers share the sink and add components or context fields.
#[derive(Clone)]
pub struct Logger {
	sink: Arc<dyn Sink>,
	min_level: Level,
	components: Vec<Box<str>>,
	fields: Vec<Field>,
	encode: EncodeOptions,
}

impl Logger {
	/// Logger emitting `Info` and above to `sink`.
	pub fn new(sink: Arc<dyn Sink>) -> Self {
		Self {
			sink,
			min_level: Level::Info,
			components: Vec::new(),
			fields: Vec::new(),
			encode: EncodeOptions::default(),
		}
	}

	/// Derived logger with a different minimum level.
	pub fn with_level(&self, level: Level) -> Self {
		let mut next = self.clone();
		next.min_level = level;
		next
	}

	/// Derived logger with one more component path segment.
	pub fn with_component(&self, name: &str) -> Self {
		let mut next = self.clone();
		next.components.push(name.into());
		next
	}

	/// Derived logger carrying a context field on every entry; the value is encoded now.
	pub fn with_field(&self, name: &str, value: &dyn Loggable) -> Self {
		let mut next = self.clone();
		let value = Encoder::new(self.encode).encode(value);
		next.fields.push(Field::new(name, value));
		next
	}

	/// Derived logger with different encoding limits.
	pub fn with_encode_options(&self, options: EncodeOptions) -> Self {
		let mut next = self.clone();
		next.encode = options;
		next
	}

	/// Whether entries at `level` are emitted.
	pub fn enabled(&self, level: Level) -> bool {
		level >= self.min_level
	}

	/// Encode `fields` and emit one entry; sink failures are reported, not returned.
	pub fn log(&self, level: Level, message: &str, fields: &[(&str, &dyn Loggable)]) {
		if !self.enabled(level) {
			return;
		}

		let mut encoder = Encoder::new(self.encode);
		let mut all = Vec::with_capacity(self.fields.len() + fields.len());
		all.extend(self.fields.iter().cloned());
		all.extend(fields.iter().map(|(name, value)| Field::new(*name, encoder.encode(*value))));

		let entry = Entry {
			level,
			components: self.components.clone(),
			message: message.into(),
			fields: all,
		};
		if let Err(err) = self.sink.emit(&entry) {
			tracing::warn!(error = %err, level = %level, "log sink write failed");
		}
	}

	/// Emit at `Debug`.
	pub fn debug(&self, message: &str, fields: &[(&str, &dyn Loggable)]) {
		self.log(Level::Debug, message, fields);
	}

	/// Emit at `Info`.
	pub fn info(&self, message: &str, fields: &[(&str, &dyn Loggable)]) {
		self.log(Level::Info, message, fields);
	}

	/// Emit at `Warn`.
	pub fn warn(&self, message: &str, fields: &[(&str, &dyn Loggable)]) {
		self.log(Level::Warn, message, fields);
	}

	/// Emit at `Error`.
	pub fn error(&self, message: &str, fields: &[(&str, &dyn Loggable)]) {
		self.log(Level::Error, message, fields);
	}
}
