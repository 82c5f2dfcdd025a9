use std::fmt::Write as _;
use std::str::CharIndices;

use crate::fields::{LogError, Result};

/// Quote `input` as a double-quoted literal with backslash escapes.
///
/// Printable characters are kept as is; quotes, backslashes, and control or
/// invisible characters are escaped (`\n`, `\x01`, `\u00a0`).
pub fn quote(input: &str) -> String {
	let mut out = String::with_capacity(input.len() + 2);
	out.push('"');
	for ch in input.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\u{7}' => out.push_str("\\a"),
			'\u{8}' => out.push_str("\\b"),
			'\u{c}' => out.push_str("\\f"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			'\u{b}' => out.push_str("\\v"),
			ch if needs_escape(ch) => {
				let code = u32::from(ch);
				let _ = if code < 0x80 {
					write!(out, "\\x{code:02x}")
				} else if code < 0x1_0000 {
					write!(out, "\\u{code:04x}")
				} else {
					write!(out, "\\U{code:08x}")
				};
			}
			ch => out.push(ch),
		}
	}
	out.push('"');
	out
}

/// Unicode format characters (general category `Cf`); they render invisibly.
const FORMAT_CHARS: &[(char, char)] = &[
	('\u{ad}', '\u{ad}'),
	('\u{600}', '\u{605}'),
	('\u{61c}', '\u{61c}'),
	('\u{6dd}', '\u{6dd}'),
	('\u{70f}', '\u{70f}'),
	('\u{890}', '\u{891}'),
	('\u{8e2}', '\u{8e2}'),
	('\u{180e}', '\u{180e}'),
	('\u{200b}', '\u{200f}'),
	('\u{202a}', '\u{202e}'),
	('\u{2060}', '\u{2064}'),
	('\u{2066}', '\u{206f}'),
	('\u{feff}', '\u{feff}'),
	('\u{fff9}', '\u{fffb}'),
	('\u{110bd}', '\u{110bd}'),
	('\u{110cd}', '\u{110cd}'),
	('\u{13430}', '\u{1343f}'),
	('\u{1bca0}', '\u{1bca3}'),
	('\u{1d173}', '\u{1d17a}'),
	('\u{e0001}', '\u{e0001}'),
	('\u{e0020}', '\u{e007f}'),
];

fn needs_escape(ch: char) -> bool {
	ch.is_control() || (ch.is_whitespace() && ch != ' ') || FORMAT_CHARS.iter().any(|&(lo, hi)| (lo..=hi).contains(&ch))
}

/// Parse a double-quoted literal produced by [`quote`].
pub fn unquote(input: &str) -> Result<String> {
	let invalid = |at: usize| LogError::InvalidQuoted {
		input: input.to_owned(),
		at,
	};

	let body = input
		.strip_prefix('"')
		.and_then(|rest| rest.strip_suffix('"'))
		.ok_or_else(|| invalid(0))?;

	let mut out = String::with_capacity(body.len());
	let mut chars = body.char_indices();
	while let Some((idx, ch)) = chars.next() {
		// Offsets are reported relative to `input`, past the opening quote.
		let at = idx + 1;
		match ch {
			'"' => return Err(invalid(at)),
			'\\' => {
				let (_, escape) = chars.next().ok_or_else(|| invalid(at))?;
				let decoded = match escape {
					'"' => '"',
					'\\' => '\\',
					'\'' => '\'',
					'a' => '\u{7}',
					'b' => '\u{8}',
					'f' => '\u{c}',
					'n' => '\n',
					'r' => '\r',
					't' => '\t',
					'v' => '\u{b}',
					'x' => read_hex(&mut chars, 2).ok_or_else(|| invalid(at))?,
					'u' => read_hex(&mut chars, 4).ok_or_else(|| invalid(at))?,
					'U' => read_hex(&mut chars, 8).ok_or_else(|| invalid(at))?,
					_ => return Err(invalid(at)),
				};
				out.push(decoded);
			}
			ch => out.push(ch),
		}
	}
	Ok(out)
}

fn read_hex(chars: &mut CharIndices<'_>, digits: usize) -> Option<char> {
	let mut code = 0_u32;
	for _ in 0..digits {
		let (_, ch) = chars.next()?;
		code = code * 16 + ch.to_digit(16)?;
	}
	char::from_u32(code)
}

/// Render a map key: spaces become underscores, and the key stays bare unless
/// it needs escaping. The empty key renders as `""`.
pub fn render_key(name: &str) -> String {
	if name.is_empty() {
		return "\"\"".to_owned();
	}

	let key = name.replace(' ', "_");
	let quoted = quote(&key);
	if quoted.get(1..quoted.len() - 1) == Some(key.as_str()) { key } else { quoted }
}

/// Recover a key from its [`render_key`] form.
pub fn unquote_key(rendered: &str) -> Result<String> {
	if rendered.starts_with('"') {
		unquote(rendered)
	} else {
		Ok(rendered.to_owned())
	}
}

#[cfg(test)]
mod tests;
