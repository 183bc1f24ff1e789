// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: lib.rs
// Author: rusthasher maintainers

//! Digests of in-memory text and of files.
//!
//! ```no_run
//! use rusthasher::{hash_file, hash_text, HashAlgorithm};
//!
//! let digest = hash_text("abc", HashAlgorithm::Sha256)?;
//! assert_eq!(digest.hex().len(), 64);
//! let digest = hash_file("Cargo.toml", HashAlgorithm::default())?;
//! println!("{}", digest);
//! # Ok::<(), rusthasher::HashError>(())
//! ```

pub mod rh {
	pub mod algorithm;
	pub mod app;
	pub mod config;
	pub mod digest;
	pub mod engine;
	pub mod error;
	pub mod hasher;
	#[cfg(feature = "async")]
	pub mod nonblocking;
	pub mod output;
	pub mod source;
	pub mod weak;
}

pub use rh::algorithm::HashAlgorithm;
pub use rh::config::HasherConfig;
pub use rh::digest::DigestResult;
pub use rh::engine::{compute, DigestEngine, Phase};
pub use rh::error::{HashError, HashErrorKind};
pub use rh::hasher::Hasher;
pub use rh::source::{ByteSource, TextEncoding, DEFAULT_CHUNK_SIZE};

use std::path::Path;

/// Hash `text` (UTF-8 bytes) with `algorithm`.
pub fn hash_text(
	text: &str,
	algorithm: HashAlgorithm,
) -> Result<DigestResult, HashError> {
	Hasher::default().hash_text(text, algorithm)
}

/// Hash the contents of the regular file at `path` with `algorithm`,
/// streaming it in [`DEFAULT_CHUNK_SIZE`] pieces.
pub fn hash_file(
	path: impl AsRef<Path>,
	algorithm: HashAlgorithm,
) -> Result<DigestResult, HashError> {
	Hasher::default().hash_file(path, algorithm)
}
