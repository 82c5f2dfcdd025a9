use std::io;
use std::sync::Arc;

use logshape::fields::{Format, Level, Loggable, Logger, Result, WriterSink};

use crate::cmd::util::parse_field_arg;

#[derive(clap::Args)]
pub struct Args {
	pub message: String,
	#[arg(short = 'f', long = "field", value_name = "NAME=VALUE")]
	pub fields: Vec<String>,
	#[arg(long, default_value = "info")]
	pub level: String,
	#[arg(long = "component")]
	pub components: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

/// Emit one entry to stdout through a writer sink.
pub fn run(args: Args) -> Result<()> {
	let Args {
		message,
		fields,
		level,
		components,
		json,
	} = args;

	let level: Level = level.parse()?;
	let fields = fields.iter().map(String::as_str).map(parse_field_arg).collect::<Result<Vec<_>>>()?;
	let format = if json { Format::Json } else { Format::Human };

	let sink = Arc::new(WriterSink::new(io::stdout(), format));
	let logger = components
		.iter()
		.fold(Logger::new(sink).with_level(Level::Debug), |logger, name| logger.with_component(name));

	let fields: Vec<(&str, &dyn Loggable)> = fields.iter().map(|(name, value)| (name.as_str(), value as &dyn Loggable)).collect();
	logger.log(level, &message, &fields);
	Ok(())
}
