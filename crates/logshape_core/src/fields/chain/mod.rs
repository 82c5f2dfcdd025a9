use std::error::Error;
use std::fmt;
use std::panic::Location;

use crate::fields::encode::{EncodeOptions, Encoder, MAX_DEPTH_MARKER};
use crate::fields::loggable::{Loggable, Shape};
use crate::fields::value::{Field, Value};

/// Number of positional pieces a frame may report: message, function, location.
pub const FRAME_PIECES: usize = 3;

const PIECE_NAMES: [&str; FRAME_PIECES] = ["msg", "fun", "loc"];

/// Receiver for the pieces of one error frame.
pub trait Printer {
	/// Report the next positional piece of the current frame.
	fn print(&mut self, piece: &str);

	/// Report the next positional piece from format arguments.
	fn printf(&mut self, args: fmt::Arguments<'_>) {
		match args.as_str() {
			Some(piece) => self.print(piece),
			None => self.print(&args.to_string()),
		}
	}

	/// Whether function and location pieces are wanted.
	fn detail(&self) -> bool {
		true
	}
}

/// Errors that wrap another error and can describe each wrap level.
pub trait ChainFormatter {
	/// Print this frame's pieces and return the wrapped inner value, if any.
	fn format_error(&self, printer: &mut dyn Printer) -> Option<&dyn Loggable>;
}

/// Collects the positional pieces of one frame.
#[derive(Debug, Default)]
struct FramePrinter {
	pieces: Vec<String>,
}

impl Printer for FramePrinter {
	fn print(&mut self, piece: &str) {
		assert!(
			self.pieces.len() < FRAME_PIECES,
			"chain formatter reported more than {FRAME_PIECES} pieces in one frame (extra piece {piece:?})"
		);
		self.pieces.push(piece.trim().to_owned());
	}
}

impl FramePrinter {
	fn into_value(self) -> Value {
		let mut pieces = self.pieces.into_iter();
		let mut fields = vec![Field::new(PIECE_NAMES[0], pieces.next().unwrap_or_default())];
		for (name, piece) in PIECE_NAMES[1..].iter().zip(pieces) {
			if !piece.is_empty() {
				fields.push(Field::new(*name, piece));
			}
		}
		Value::Map(fields)
	}
}

/// Flatten a wrapped-error chain into a list of frames, outermost first.
///
/// Each frame is a map with `msg` and, when reported, `fun` and `loc`. When the
/// innermost wrapper returns a cause that is not itself a chain, the cause is
/// encoded normally and appended as the last element.
///
/// # Panics
///
/// Panics when a frame reports more than [`FRAME_PIECES`] pieces.
pub fn extract_chain(chain: &dyn ChainFormatter) -> Value {
	Encoder::new(EncodeOptions::default()).encode_chain(chain)
}

impl Encoder {
	pub(crate) fn encode_chain(&mut self, head: &dyn ChainFormatter) -> Value {
		let max_frames = usize::try_from(self.options().max_depth).unwrap_or(usize::MAX);
		let mut frames = Vec::new();
		let mut current = head;

		loop {
			if frames.len() >= max_frames {
				tracing::trace!(max_frames, "error chain truncated");
				frames.push(Value::String(MAX_DEPTH_MARKER.into()));
				break;
			}

			let mut printer = FramePrinter::default();
			let next = current.format_error(&mut printer);
			frames.push(printer.into_value());

			let Some(inner) = next else {
				break;
			};
			match inner.as_chain() {
				Some(chain) => current = chain,
				None => {
					frames.push(self.encode(inner));
					break;
				}
			}
		}

		Value::List(frames)
	}
}

/// Error that wraps a cause with a message and the place it was wrapped.
///
/// Use [`wrap!`](crate::wrap) to also record the enclosing function.
#[derive(Debug)]
pub struct Wrapped {
	message: String,
	function: Option<&'static str>,
	location: &'static Location<'static>,
	cause: Option<Box<dyn Error + Send + Sync>>,
}

impl Wrapped {
	/// Wrap `cause` with `message`, recording the caller's location.
	#[track_caller]
	pub fn new(message: impl Into<String>, cause: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
		Self {
			message: message.into(),
			function: None,
			location: Location::caller(),
			cause: Some(cause.into()),
		}
	}

	/// Root error without a cause, recording the caller's location.
	#[track_caller]
	pub fn msg(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			function: None,
			location: Location::caller(),
			cause: None,
		}
	}

	/// Attach the name of the function that wrapped the error.
	pub fn with_function(mut self, function: &'static str) -> Self {
		self.function = Some(function);
		self
	}

	/// Message of this wrap level.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Function recorded for this wrap level.
	pub fn function(&self) -> Option<&'static str> {
		self.function
	}

	/// Wrapped cause.
	pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
		self.cause.as_deref()
	}
}

impl fmt::Display for Wrapped {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.cause {
			Some(cause) => write!(f, "{}: {cause}", self.message),
			None => f.write_str(&self.message),
		}
	}
}

impl Error for Wrapped {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
	}
}

impl ChainFormatter for Wrapped {
	fn format_error(&self, printer: &mut dyn Printer) -> Option<&dyn Loggable> {
		printer.print(&self.message);
		if printer.detail() {
			printer.print(self.function.unwrap_or_default());
			printer.printf(format_args!("{}:{}", self.location.file(), self.location.line()));
		}
		self.cause.as_ref().map(|cause| cause as &dyn Loggable)
	}
}

impl Loggable for Wrapped {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(self)
	}

	fn as_chain(&self) -> Option<&dyn ChainFormatter> {
		Some(self)
	}

	fn as_error(&self) -> Option<&dyn Error> {
		Some(self)
	}
}

/// Wrap an error with a formatted message, recording location and enclosing function.
///
/// ```
/// use logshape::fields::{Wrapped, extract_chain};
///
/// fn load() -> Result<(), Wrapped> {
/// 	let err = std::io::Error::from(std::io::ErrorKind::NotFound);
/// 	Err(logshape::wrap!(err, "loading {}", "config.toml"))
/// }
///
/// let err = load().unwrap_err();
/// assert_eq!(err.message(), "loading config.toml");
/// assert!(err.function().is_some_and(|name| name.ends_with("load")));
/// assert_eq!(extract_chain(&err).as_list().map(<[_]>::len), Some(2));
/// ```
#[macro_export]
macro_rules! wrap {
	($cause:expr, $($arg:tt)+) => {
		$crate::fields::Wrapped::new(::std::format!($($arg)+), $cause).with_function($crate::function_path!())
	};
}

/// Path of the enclosing function, for example `my_crate::module::load`.
#[macro_export]
macro_rules! function_path {
	() => {{
		fn marker() {}
		fn name_of<T>(_: T) -> &'static str {
			::std::any::type_name::<T>()
		}
		let name = name_of(marker);
		name.strip_suffix("::marker").unwrap_or(name)
	}};
}

#[cfg(test)]
mod tests;
