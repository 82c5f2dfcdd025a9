use std::io;

use crate::fields::{ChainFormatter, Loggable, MAX_DEPTH_MARKER, Printer, Record, Shape, Value, Wrapped, encode, extract_chain};

fn eof() -> io::Error {
	io::Error::from(io::ErrorKind::UnexpectedEof)
}

#[test]
fn double_wrapped_eof_yields_two_frames_and_root_cause() {
	let root_msg = eof().to_string();
	let err = Wrapped::new("outer", Wrapped::new("inner", eof()));

	let chain = extract_chain(&err);
	let frames = chain.as_list().expect("list");
	assert_eq!(frames.len(), 3);
	assert_eq!(frames[0].get("msg"), Some(&Value::from("outer")));
	assert_eq!(frames[1].get("msg"), Some(&Value::from("inner")));
	assert_eq!(frames[2], Value::from(root_msg));
}

#[test]
fn n_wraps_produce_n_plus_one_entries() {
	for wraps in 1..6 {
		let mut err = Wrapped::new("level 0", eof());
		for level in 1..wraps {
			err = Wrapped::new(format!("level {level}"), err);
		}

		let chain = extract_chain(&err);
		let frames = chain.as_list().expect("list");
		assert_eq!(frames.len(), wraps + 1);
		let outermost = format!("level {}", wraps - 1);
		assert_eq!(frames[0].get("msg").and_then(Value::as_str), Some(outermost.as_str()));
	}
}

#[test]
fn frames_carry_location_and_omit_empty_function() {
	let err = Wrapped::new("outer", eof());
	let chain = extract_chain(&err);
	let frame = &chain.as_list().expect("list")[0];

	assert_eq!(frame.get("fun"), None);
	let loc = frame.get("loc").and_then(Value::as_str).expect("loc recorded");
	assert!(loc.contains("tests.rs:"), "unexpected location {loc}");
	let names: Vec<&str> = frame.as_map().expect("map").iter().map(|field| &*field.name).collect();
	assert_eq!(names, ["msg", "loc"]);
}

#[test]
fn wrap_macro_records_enclosing_function() {
	let err = crate::wrap!(eof(), "reading {}", "block");
	assert_eq!(err.message(), "reading block");

	let chain = extract_chain(&err);
	let fun = chain.as_list().expect("list")[0].get("fun").and_then(Value::as_str).expect("fun recorded");
	assert!(fun.ends_with("wrap_macro_records_enclosing_function"), "unexpected function {fun}");
}

#[test]
fn chain_without_cause_has_no_root_entry() {
	let err = Wrapped::new("outer", Wrapped::msg("root"));
	let chain = extract_chain(&err);
	let frames = chain.as_list().expect("list");
	assert_eq!(frames.len(), 2);
	assert_eq!(frames[1].get("msg"), Some(&Value::from("root")));
}

#[test]
fn encoder_prefers_chain_over_plain_message() {
	let err = Wrapped::new("outer", eof());
	assert_eq!(err.to_string(), format!("outer: {}", eof()));
	assert_eq!(encode(&err), extract_chain(&err));

	let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
	assert_eq!(encode(&boxed).as_list().map(<[_]>::len), Some(2));
}

struct Checkpoint {
	stage: &'static str,
}

impl Loggable for Checkpoint {
	fn shape(&self) -> Shape<'_> {
		Shape::Record(Record::new("Checkpoint").field("stage", &self.stage))
	}
}

struct StageFailure {
	checkpoint: Checkpoint,
}

impl ChainFormatter for StageFailure {
	fn format_error(&self, printer: &mut dyn Printer) -> Option<&dyn Loggable> {
		printer.print("stage failed");
		printer.printf(format_args!("pipeline::{}", "run"));
		Some(&self.checkpoint)
	}
}

#[test]
fn non_error_root_cause_is_encoded_structurally() {
	let err = StageFailure {
		checkpoint: Checkpoint { stage: "flush" },
	};
	let chain = extract_chain(&err);
	assert_eq!(
		chain,
		Value::List(vec![
			Value::map([("msg", "stage failed"), ("fun", "pipeline::run")]),
			Value::map([("stage", "flush")]),
		])
	);
}

struct Chatty;

impl ChainFormatter for Chatty {
	fn format_error(&self, printer: &mut dyn Printer) -> Option<&dyn Loggable> {
		for piece in ["msg", "fun", "loc", "extra"] {
			printer.print(piece);
		}
		None
	}
}

#[test]
#[should_panic(expected = "more than 3 pieces")]
fn extra_frame_pieces_abort() {
	let _ = extract_chain(&Chatty);
}

struct Looping;

impl ChainFormatter for Looping {
	fn format_error(&self, printer: &mut dyn Printer) -> Option<&dyn Loggable> {
		printer.print("again");
		Some(self)
	}
}

impl Loggable for Looping {
	fn shape(&self) -> Shape<'_> {
		Shape::Str("looping".into())
	}

	fn as_chain(&self) -> Option<&dyn ChainFormatter> {
		Some(self)
	}
}

#[test]
fn self_referential_chain_is_truncated() {
	let chain = extract_chain(&Looping);
	let frames = chain.as_list().expect("list");
	assert_eq!(frames.last(), Some(&Value::from(MAX_DEPTH_MARKER)));
	assert_eq!(frames.len(), 65);
}

#[derive(Default)]
struct Collecting {
	pieces: Vec<String>,
}

impl Printer for Collecting {
	fn print(&mut self, piece: &str) {
		self.pieces.push(piece.to_owned());
	}

	fn detail(&self) -> bool {
		false
	}
}

#[test]
fn wrapped_skips_detail_when_printer_declines() {
	let err = Wrapped::new("outer", eof()).with_function("app::load");
	let mut printer = Collecting::default();
	let next = err.format_error(&mut printer);

	assert_eq!(printer.pieces, ["outer"]);
	assert!(next.is_some());
}
