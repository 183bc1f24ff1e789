// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: digest.rs
// Author: rusthasher maintainers

use crate::rh::algorithm::HashAlgorithm;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Outcome of one successful hashing invocation.
///
/// `hex` is always lowercase, most significant nibble first, bytes in the
/// order the algorithm produced them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DigestResult {
	algorithm: HashAlgorithm,
	bytes: Vec<u8>,
	hex: String,
	bytes_hashed: u64,
}

impl DigestResult {
	pub(crate) fn new(
		algorithm: HashAlgorithm,
		bytes: Vec<u8>,
		bytes_hashed: u64,
	) -> Self {
		debug_assert_eq!(bytes.len(), algorithm.output_len());
		let hex = hex::encode(&bytes);
		Self {
			algorithm,
			bytes,
			hex,
			bytes_hashed,
		}
	}

	pub fn algorithm(&self) -> HashAlgorithm {
		self.algorithm
	}

	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn hex(&self) -> &str {
		&self.hex
	}

	pub fn to_base64(&self) -> String {
		STANDARD.encode(&self.bytes)
	}

	/// Number of input bytes fed to the algorithm.
	pub fn bytes_hashed(&self) -> u64 {
		self.bytes_hashed
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}
}

impl fmt::Display for DigestResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.hex)
	}
}

impl Serialize for DigestResult {
	fn serialize<S: Serializer>(
		&self,
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("DigestResult", 4)?;
		state.serialize_field("algorithm", &self.algorithm)?;
		state.serialize_field("hex", &self.hex)?;
		state.serialize_field("base64", &self.to_base64())?;
		state.serialize_field("bytes_hashed", &self.bytes_hashed)?;
		state.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_is_lowercase_and_unreversed() {
		let mut bytes = vec![0u8; 16];
		bytes[0] = 0xAB;
		bytes[15] = 0x0F;
		let result = DigestResult::new(HashAlgorithm::Md5, bytes, 0);
		assert_eq!(result.hex().len(), 32);
		assert!(result.hex().starts_with("ab"));
		assert!(result.hex().ends_with("0f"));
		assert_eq!(result.to_string(), result.hex());
	}

	#[test]
	fn serializes_algorithm_by_name() {
		let result =
			DigestResult::new(HashAlgorithm::Sha1, vec![0u8; 20], 3);
		let json = serde_json::to_value(&result).unwrap();
		assert_eq!(json["algorithm"], "sha1");
		assert_eq!(json["hex"], "0".repeat(40));
		assert_eq!(json["base64"], format!("{}=", "A".repeat(27)));
		assert_eq!(json["bytes_hashed"], 3);
	}
}
