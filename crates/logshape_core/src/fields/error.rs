use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, LogError>;

/// Boxed error carried by fallible representation overrides.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while rendering, parsing keys, and emitting entries.
#[derive(Debug, Error)]
pub enum LogError {
	/// Sink or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Quoted text was not a valid double-quoted literal.
	#[error("invalid quoted string at byte {at}: {input}")]
	InvalidQuoted {
		/// Original input text.
		input: String,
		/// Byte offset where parsing failed.
		at: usize,
	},
	/// Level name did not match a known level.
	#[error("invalid level: {name}")]
	InvalidLevel {
		/// User-provided level name.
		name: String,
	},
	/// Field argument was not of the form `name=value`.
	#[error("invalid field argument (expected name=value): {arg}")]
	InvalidFieldArg {
		/// User-provided argument.
		arg: String,
	},
}
