// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: config.rs
// Author: rusthasher maintainers

use crate::rh::algorithm::HashAlgorithm;
use crate::rh::source::{TextEncoding, DEFAULT_CHUNK_SIZE};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HasherConfig {
	/// Used when a caller does not name an algorithm.
	pub algorithm: HashAlgorithm,
	pub encoding: TextEncoding,
	pub chunk_size: usize,
}

impl Default for HasherConfig {
	fn default() -> Self {
		HasherConfig {
			algorithm: HashAlgorithm::Md5,
			encoding: TextEncoding::Utf8,
			chunk_size: DEFAULT_CHUNK_SIZE,
		}
	}
}

impl HasherConfig {
	pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
		self.algorithm = algorithm;
		self
	}

	pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
		self.encoding = encoding;
		self
	}

	/// Chunk size in bytes; zero is raised to one.
	pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
		self.chunk_size = chunk_size.max(1);
		self
	}
}
