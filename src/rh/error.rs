// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: error.rs
// Author: rusthasher maintainers

//! Failure outcomes of a hashing invocation.
//!
//! Every failure is classified into exactly one [`HashErrorKind`]; the core
//! never retries and never collapses a specific condition into a generic one.

use crate::rh::source::TextEncoding;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HashError>;

#[derive(Error, Debug)]
pub enum HashError {
	#[error("unsupported hash algorithm: {identifier}")]
	UnsupportedAlgorithm { identifier: String },

	#[error("text is not valid {encoding}: {reason}")]
	EncodingError {
		encoding: TextEncoding,
		reason: String,
	},

	#[error("file not found: {}", path.display())]
	NotFound { path: PathBuf },

	#[error("permission denied: {}", path.display())]
	PermissionDenied {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("path is a directory: {}", path.display())]
	IsDirectory { path: PathBuf },

	#[error("{}", format_io_error(path.as_deref(), source))]
	IoError {
		path: Option<PathBuf>,
		#[source]
		source: io::Error,
	},
}

/// Tag of a [`HashError`], for callers that translate failures into their
/// own envelopes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HashErrorKind {
	UnsupportedAlgorithm,
	EncodingError,
	NotFound,
	PermissionDenied,
	IsDirectory,
	IoError,
}

impl HashError {
	pub fn unsupported(identifier: impl Into<String>) -> Self {
		Self::UnsupportedAlgorithm {
			identifier: identifier.into(),
		}
	}

	pub fn encoding(
		encoding: TextEncoding,
		reason: impl Into<String>,
	) -> Self {
		Self::EncodingError {
			encoding,
			reason: reason.into(),
		}
	}

	/// Classify a failure that happened while resolving or opening `path`.
	pub fn from_open(path: &Path, source: io::Error) -> Self {
		let path = path.to_path_buf();
		if is_symlink_loop(&source) {
			return Self::NotFound { path };
		}
		match source.kind() {
			// A component of the path is a file, so the path cannot resolve.
			io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
				Self::NotFound { path }
			}
			io::ErrorKind::PermissionDenied => {
				Self::PermissionDenied { path, source }
			}
			io::ErrorKind::IsADirectory => Self::IsDirectory { path },
			_ => Self::IoError {
				path: Some(path),
				source,
			},
		}
	}

	/// Wrap a failure that happened after reading began. A file that
	/// vanishes mid-read lands here too.
	pub fn from_read(path: Option<&Path>, source: io::Error) -> Self {
		Self::IoError {
			path: path.map(Path::to_path_buf),
			source,
		}
	}

	pub fn kind(&self) -> HashErrorKind {
		match self {
			Self::UnsupportedAlgorithm { .. } => {
				HashErrorKind::UnsupportedAlgorithm
			}
			Self::EncodingError { .. } => HashErrorKind::EncodingError,
			Self::NotFound { .. } => HashErrorKind::NotFound,
			Self::PermissionDenied { .. } => {
				HashErrorKind::PermissionDenied
			}
			Self::IsDirectory { .. } => HashErrorKind::IsDirectory,
			Self::IoError { .. } => HashErrorKind::IoError,
		}
	}

	pub fn path(&self) -> Option<&Path> {
		match self {
			Self::NotFound { path }
			| Self::PermissionDenied { path, .. }
			| Self::IsDirectory { path } => Some(path),
			Self::IoError { path, .. } => path.as_deref(),
			Self::UnsupportedAlgorithm { .. }
			| Self::EncodingError { .. } => None,
		}
	}
}

#[cfg(unix)]
fn is_symlink_loop(err: &io::Error) -> bool {
	err.raw_os_error() == Some(libc::ELOOP)
}

#[cfg(not(unix))]
fn is_symlink_loop(_err: &io::Error) -> bool {
	false
}

fn format_io_error(path: Option<&Path>, source: &io::Error) -> String {
	match path {
		Some(path) => {
			format!("I/O error reading {}: {}", path.display(), source)
		}
		None => format!("I/O error: {}", source),
	}
}
