mod chain;
mod encode;
mod error;
mod human;
mod impls;
mod json;
mod loggable;
mod logger;
mod quote;
mod record;
mod value;

/// Wrapped-error protocol and chain flattening.
pub use chain::{ChainFormatter, FRAME_PIECES, Printer, Wrapped, extract_chain};
/// Encoder entry points, options, and substitution markers.
pub use encode::{CYCLE_MARKER, EncodeOptions, Encoder, GENERATED_INTERNAL_PREFIX, MAX_DEPTH_MARKER, encode, encode_fields, encode_with};
/// Error and result aliases.
pub use error::{BoxError, LogError, Result};
/// Human-readable renderer.
pub use human::{HumanOptions, NULL_LITERAL, format_float, render_fields, render_fields_with, render_human, render_human_with};
/// JSON renderer.
pub use json::{render_json, render_json_fields, render_json_to};
/// Capability surface encodable values implement.
pub use loggable::{Loggable, Replacement, Shape};
/// Logger facade and sinks.
pub use logger::{Entry, Format, Level, Logger, Sink, WriterSink};
/// Key quoting.
pub use quote::{quote, render_key, unquote, unquote_key};
/// Aggregate description and field naming.
pub use record::{FieldAttrs, Record, RecordField, field_name};
/// Encoded value tree.
pub use value::{Field, Value};
