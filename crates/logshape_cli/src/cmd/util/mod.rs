use logshape::fields::{LogError, Result};

/// Parse a `name=value` field argument; the value is JSON when it parses, else a plain string.
pub(crate) fn parse_field_arg(arg: &str) -> Result<(String, serde_json::Value)> {
	let Some((name, raw)) = arg.split_once('=') else {
		return Err(LogError::InvalidFieldArg { arg: arg.to_owned() });
	};
	let name = name.trim();
	if name.is_empty() {
		return Err(LogError::InvalidFieldArg { arg: arg.to_owned() });
	}

	let value = serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()));
	Ok((name.to_owned(), value))
}
