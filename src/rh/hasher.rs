// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: hasher.rs
// Author: rusthasher maintainers

//! Entry points for a host bridge: hash a string or a file and get back a
//! [`DigestResult`] or a classified [`HashError`].
//!
//! [`HashError`]: crate::rh::error::HashError

use crate::rh::algorithm::HashAlgorithm;
use crate::rh::config::HasherConfig;
use crate::rh::digest::DigestResult;
use crate::rh::engine::{compute, Phase};
use crate::rh::error::Result;
use crate::rh::source::ByteSource;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct Hasher {
	config: HasherConfig,
}

impl Hasher {
	pub fn new(config: HasherConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &HasherConfig {
		&self.config
	}

	pub fn hash_text(
		&self,
		text: &str,
		algorithm: HashAlgorithm,
	) -> Result<DigestResult> {
		let source = ByteSource::from_text(text, self.config.encoding)?;
		compute(source, algorithm)
	}

	pub fn hash_file(
		&self,
		path: impl AsRef<Path>,
		algorithm: HashAlgorithm,
	) -> Result<DigestResult> {
		let source = ByteSource::from_file_with_chunk_size(
			path,
			self.config.chunk_size,
		)?;
		compute(source, algorithm)
	}

	pub fn hash_reader(
		&self,
		reader: impl Read + Send + 'static,
		label: &str,
		algorithm: HashAlgorithm,
	) -> Result<DigestResult> {
		let source =
			ByteSource::from_reader(reader, label, self.config.chunk_size);
		compute(source, algorithm)
	}

	/// Like [`Hasher::hash_text`], with the algorithm given as a loose
	/// identifier. `None` selects the configured default.
	pub fn hash_text_named(
		&self,
		text: &str,
		algorithm: Option<&str>,
	) -> Result<DigestResult> {
		let algorithm = self.resolve(algorithm)?;
		self.hash_text(text, algorithm)
	}

	/// Like [`Hasher::hash_file`]; an unknown identifier is refused before
	/// the path is touched.
	pub fn hash_file_named(
		&self,
		path: impl AsRef<Path>,
		algorithm: Option<&str>,
	) -> Result<DigestResult> {
		let algorithm = self.resolve(algorithm)?;
		self.hash_file(path, algorithm)
	}

	fn resolve(&self, identifier: Option<&str>) -> Result<HashAlgorithm> {
		HashAlgorithm::resolve(identifier, self.config.algorithm).inspect_err(
			|err| debug!(phase = ?Phase::Rejected, error = %err, "algorithm refused"),
		)
	}
}
