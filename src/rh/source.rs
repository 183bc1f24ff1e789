// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: source.rs
// Author: rusthasher maintainers

//! Source adapter: turns caller input into a [`ByteSource`] that the engine
//! drains chunk by chunk.
//!
//! Text is turned into bytes with an explicit [`TextEncoding`]; UTF-8 is the
//! default and hashes the string's bytes unchanged. Files are opened once,
//! read in `chunk_size` pieces, and closed when the source is dropped,
//! whatever the outcome of the read.

use crate::rh::error::{HashError, Result};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextEncoding {
	#[default]
	Utf8,
	Utf16Le,
	Utf16Be,
	Latin1,
}

impl TextEncoding {
	pub fn name(self) -> &'static str {
		match self {
			Self::Utf8 => "utf-8",
			Self::Utf16Le => "utf-16le",
			Self::Utf16Be => "utf-16be",
			Self::Latin1 => "latin-1",
		}
	}

	/// Encode `text`. Fails only when a char has no representation.
	pub fn encode(self, text: &str) -> Result<Vec<u8>> {
		match self {
			Self::Utf8 => Ok(text.as_bytes().to_vec()),
			Self::Utf16Le => Ok(text
				.encode_utf16()
				.flat_map(u16::to_le_bytes)
				.collect()),
			Self::Utf16Be => Ok(text
				.encode_utf16()
				.flat_map(u16::to_be_bytes)
				.collect()),
			Self::Latin1 => text
				.chars()
				.map(|c| {
					u8::try_from(u32::from(c)).map_err(|_| {
						HashError::encoding(
							self,
							format!(
								"char U+{:04X} is outside latin-1",
								u32::from(c)
							),
						)
					})
				})
				.collect(),
		}
	}

	/// Check that `bytes` is well-formed in this encoding.
	pub fn validate(self, bytes: &[u8]) -> Result<()> {
		match self {
			Self::Utf8 => std::str::from_utf8(bytes)
				.map(|_| ())
				.map_err(|e| HashError::encoding(self, e.to_string())),
			Self::Utf16Le | Self::Utf16Be => {
				if bytes.len() % 2 != 0 {
					return Err(HashError::encoding(
						self,
						format!("odd byte length {}", bytes.len()),
					));
				}
				let units = bytes.chunks_exact(2).map(|pair| {
					let pair = [pair[0], pair[1]];
					if self == Self::Utf16Le {
						u16::from_le_bytes(pair)
					} else {
						u16::from_be_bytes(pair)
					}
				});
				for decoded in char::decode_utf16(units) {
					if let Err(e) = decoded {
						return Err(HashError::encoding(
							self,
							format!(
								"unpaired surrogate 0x{:04x}",
								e.unpaired_surrogate()
							),
						));
					}
				}
				Ok(())
			}
			Self::Latin1 => Ok(()),
		}
	}
}

impl fmt::Display for TextEncoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for TextEncoding {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let needle: String = s
			.trim()
			.chars()
			.filter(|c| *c != '-' && *c != '_')
			.map(|c| c.to_ascii_lowercase())
			.collect();
		match needle.as_str() {
			"utf8" => Ok(Self::Utf8),
			"utf16le" => Ok(Self::Utf16Le),
			"utf16be" => Ok(Self::Utf16Be),
			"latin1" | "iso88591" => Ok(Self::Latin1),
			_ => Err(format!("unknown text encoding: {}", s)),
		}
	}
}

/// Where the bytes of one hashing invocation come from.
pub enum ByteSource {
	InlineText(InlineText),
	FileHandle(FileHandle),
	Stream(StreamSource),
}

pub struct InlineText {
	bytes: Vec<u8>,
	drained: bool,
}

/// An open regular file. The descriptor lives exactly as long as this value.
pub struct FileHandle {
	path: PathBuf,
	file: File,
	len: u64,
	buffer: Box<[u8]>,
}

pub struct StreamSource {
	label: String,
	reader: Box<dyn Read + Send>,
	buffer: Box<[u8]>,
}

impl ByteSource {
	pub fn from_text(text: &str, encoding: TextEncoding) -> Result<Self> {
		Ok(Self::from_bytes(encoding.encode(text)?))
	}

	/// Hash already-encoded text as-is, after checking it is well-formed.
	pub fn from_encoded_text(
		bytes: Vec<u8>,
		encoding: TextEncoding,
	) -> Result<Self> {
		encoding.validate(&bytes)?;
		Ok(Self::from_bytes(bytes))
	}

	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self::InlineText(InlineText {
			bytes,
			drained: false,
		})
	}

	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_file_with_chunk_size(path, DEFAULT_CHUNK_SIZE)
	}

	pub fn from_file_with_chunk_size(
		path: impl AsRef<Path>,
		chunk_size: usize,
	) -> Result<Self> {
		let path = path.as_ref();
		let metadata = fs::metadata(path)
			.map_err(|e| HashError::from_open(path, e))?;
		check_regular_file(path, &metadata)?;
		let file =
			File::open(path).map_err(|e| HashError::from_open(path, e))?;
		debug!(path = %path.display(), len = metadata.len(), chunk_size, "opened file source");
		Ok(Self::FileHandle(FileHandle {
			path: path.to_path_buf(),
			file,
			len: metadata.len(),
			buffer: chunk_buffer(chunk_size),
		}))
	}

	pub fn from_reader(
		reader: impl Read + Send + 'static,
		label: impl Into<String>,
		chunk_size: usize,
	) -> Self {
		Self::Stream(StreamSource {
			label: label.into(),
			reader: Box::new(reader),
			buffer: chunk_buffer(chunk_size),
		})
	}

	/// Next chunk in source order, or `None` once exhausted.
	pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
		match self {
			Self::InlineText(text) => {
				if text.drained || text.bytes.is_empty() {
					text.drained = true;
					return Ok(None);
				}
				text.drained = true;
				Ok(Some(text.bytes.as_slice()))
			}
			Self::FileHandle(handle) => {
				let n = read_chunk(&mut handle.file, &mut handle.buffer)
					.map_err(|e| {
						HashError::from_read(Some(handle.path.as_path()), e)
					})?;
				Ok((n > 0).then(|| &handle.buffer[..n]))
			}
			Self::Stream(stream) => {
				let n = read_chunk(&mut stream.reader, &mut stream.buffer)
					.map_err(|e| HashError::from_read(None, e))?;
				Ok((n > 0).then(|| &stream.buffer[..n]))
			}
		}
	}

	/// Total length when known up front.
	pub fn len_hint(&self) -> Option<u64> {
		match self {
			Self::InlineText(text) => Some(text.bytes.len() as u64),
			Self::FileHandle(handle) => Some(handle.len),
			Self::Stream(_) => None,
		}
	}

	/// Human-readable origin, used in logs.
	pub fn describe(&self) -> String {
		match self {
			Self::InlineText(text) => {
				format!("inline text ({} bytes)", text.bytes.len())
			}
			Self::FileHandle(handle) => handle.path.display().to_string(),
			Self::Stream(stream) => stream.label.clone(),
		}
	}
}

impl FileHandle {
	pub fn path(&self) -> &Path {
		&self.path
	}
}

pub(crate) fn check_regular_file(
	path: &Path,
	metadata: &fs::Metadata,
) -> Result<()> {
	if metadata.is_dir() {
		return Err(HashError::IsDirectory {
			path: path.to_path_buf(),
		});
	}
	if !metadata.is_file() {
		return Err(HashError::IoError {
			path: Some(path.to_path_buf()),
			source: io::Error::new(
				io::ErrorKind::InvalidInput,
				"not a regular file",
			),
		});
	}
	Ok(())
}

pub(crate) fn chunk_buffer(chunk_size: usize) -> Box<[u8]> {
	vec![0u8; chunk_size.max(1)].into_boxed_slice()
}

fn read_chunk<R: Read + ?Sized>(
	reader: &mut R,
	buffer: &mut [u8],
) -> io::Result<usize> {
	loop {
		match reader.read(buffer) {
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			other => return other,
		}
	}
}
