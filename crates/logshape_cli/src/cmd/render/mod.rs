use std::io::{self, Write};
use std::path::{Path, PathBuf};

use logshape::fields::{EncodeOptions, Result, encode_with, render_human, render_json_to};

#[derive(clap::Args)]
pub struct Args {
	/// JSON or JSON-lines input; stdin when omitted.
	pub file: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth", conflicts_with = "shallow")]
	pub max_depth: Option<u32>,
	/// Use the shallow encoding preset.
	#[arg(long)]
	pub shallow: bool,
}

/// Encode every JSON document of the input and print it as log text.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		json,
		max_depth,
		shallow,
	} = args;

	let input = read_input(file.as_deref())?;
	let options = match max_depth {
		Some(max_depth) => EncodeOptions { max_depth },
		None if shallow => EncodeOptions::shallow(),
		None => EncodeOptions::default(),
	};
	let rendered = render_documents(&input, json, &options)?;

	let mut stdout = io::stdout().lock();
	stdout.write_all(&rendered)?;
	stdout.flush()?;
	Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
	match file {
		Some(path) => Ok(std::fs::read_to_string(path)?),
		None => Ok(io::read_to_string(io::stdin().lock())?),
	}
}

/// Render a stream of concatenated JSON documents.
///
/// JSON output is one line per document; human output separates document blocks with a blank line.
pub(crate) fn render_documents(input: &str, json: bool, options: &EncodeOptions) -> Result<Vec<u8>> {
	let documents = serde_json::Deserializer::from_str(input)
		.into_iter::<serde_json::Value>()
		.collect::<std::result::Result<Vec<_>, _>>()?;
	tracing::debug!(documents = documents.len(), json, max_depth = options.max_depth, "rendering documents");

	let mut out = Vec::new();
	for (idx, document) in documents.iter().enumerate() {
		let value = encode_with(document, options);
		tracing::trace!(document = idx, kind = value.kind(), "encoded document");
		if json {
			render_json_to(&mut out, &value)?;
		} else {
			if idx > 0 {
				out.push(b'\n');
			}
			out.extend_from_slice(render_human(&value).as_bytes());
		}
		out.push(b'\n');
	}
	Ok(out)
}
