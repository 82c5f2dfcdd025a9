//! Shared test helpers for workspace crates.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a UTF-8 fixture, panicking with the path on failure.
pub fn read_fixture(name: &str) -> String {
	let path = fixture_path(name);
	std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()))
}

/// Top-level keys of a JSON object in document order, duplicates included.
///
/// `serde_json::Value` sorts object keys, so order assertions go through this instead.
pub fn object_keys(json: &str) -> Vec<String> {
	let mut de = serde_json::Deserializer::from_str(json);
	(&mut de).deserialize_map(KeyCollector).expect("input should be a JSON object")
}

struct KeyCollector;

impl<'de> Visitor<'de> for KeyCollector {
	type Value = Vec<String>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a JSON object")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
		let mut keys = Vec::new();
		while let Some((key, IgnoredAny)) = map.next_entry::<String, IgnoredAny>()? {
			keys.push(key);
		}
		Ok(keys)
	}
}
