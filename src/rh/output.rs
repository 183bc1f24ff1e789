// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// Module: output
// Purpose: Render digest results for the command line host.

use crate::rh::digest::DigestResult;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
	#[default]
	Hex,
	Base64,
	HexBase64,
	Json,
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Hex => "hex",
			Self::Base64 => "base64",
			Self::HexBase64 => "hex-base64",
			Self::Json => "json",
		};
		f.write_str(label)
	}
}

#[derive(Serialize)]
struct JsonLine<'a> {
	label: &'a str,
	#[serde(flatten)]
	result: &'a DigestResult,
}

/// One output line for `result`. `label` is the input's name (the text or
/// the path) and is omitted from plain formats when `hash_only` is set.
pub fn render(
	result: &DigestResult,
	label: &str,
	format: OutputFormat,
	hash_only: bool,
) -> Result<String, serde_json::Error> {
	let digest = match format {
		OutputFormat::Hex => result.hex().to_string(),
		OutputFormat::Base64 => result.to_base64(),
		OutputFormat::HexBase64 => {
			format!("{} {}", result.hex(), result.to_base64())
		}
		OutputFormat::Json => {
			return serde_json::to_string(&JsonLine { label, result });
		}
	};
	if hash_only {
		Ok(digest)
	} else {
		Ok(format!("{} {}", digest, label))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rh::algorithm::HashAlgorithm;
	use crate::rh::hasher::Hasher;

	fn empty_md5() -> DigestResult {
		Hasher::default().hash_text("", HashAlgorithm::Md5).unwrap()
	}

	#[test]
	fn plain_formats() {
		let result = empty_md5();
		assert_eq!(
			render(&result, "", OutputFormat::Hex, true).unwrap(),
			"d41d8cd98f00b204e9800998ecf8427e"
		);
		assert_eq!(
			render(&result, "empty", OutputFormat::Base64, false).unwrap(),
			"1B2M2Y8AsgTpgAmY7PhCfg== empty"
		);
		assert_eq!(
			render(&result, "x", OutputFormat::HexBase64, true).unwrap(),
			"d41d8cd98f00b204e9800998ecf8427e 1B2M2Y8AsgTpgAmY7PhCfg=="
		);
	}

	#[test]
	fn json_format_is_flat() {
		let line =
			render(&empty_md5(), "notes.txt", OutputFormat::Json, true)
				.unwrap();
		let value: serde_json::Value = serde_json::from_str(&line).unwrap();
		assert_eq!(value["label"], "notes.txt");
		assert_eq!(value["algorithm"], "md5");
		assert_eq!(value["hex"], "d41d8cd98f00b204e9800998ecf8427e");
		assert_eq!(value["bytes_hashed"], 0);
	}
}
