// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: nonblocking.rs
// Author: rusthasher maintainers

//! Async entry points for hosts that must keep their calling thread free.
//!
//! File reads go through `tokio::fs`, so the only suspension points are the
//! reads themselves. Dropping the returned future closes the file; nothing
//! partial is ever handed back.

use crate::rh::algorithm::HashAlgorithm;
use crate::rh::digest::DigestResult;
use crate::rh::engine::{compute, DigestEngine};
use crate::rh::error::{HashError, Result};
use crate::rh::source::{
	check_regular_file, chunk_buffer, ByteSource, TextEncoding,
};
use std::io;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

/// Text never suspends; this exists so a bridge can treat both inputs alike.
pub async fn hash_text(
	text: &str,
	encoding: TextEncoding,
	algorithm: HashAlgorithm,
) -> Result<DigestResult> {
	compute(ByteSource::from_text(text, encoding)?, algorithm)
}

pub async fn hash_file(
	path: impl AsRef<Path>,
	algorithm: HashAlgorithm,
	chunk_size: usize,
) -> Result<DigestResult> {
	let path = path.as_ref();
	let metadata = tokio::fs::metadata(path)
		.await
		.map_err(|e| HashError::from_open(path, e))?;
	check_regular_file(path, &metadata)?;
	let mut file = tokio::fs::File::open(path)
		.await
		.map_err(|e| HashError::from_open(path, e))?;

	let engine = drain_reader(
		&mut file,
		DigestEngine::new(algorithm),
		chunk_size,
		Some(path),
	)
	.await?;
	drop(file);

	let result = engine.finish();
	debug!(
		algorithm = %algorithm,
		path = %path.display(),
		bytes = result.bytes_hashed(),
		"async digest computed"
	);
	Ok(result)
}

/// Feed `reader` to `engine` until EOF. A read error drops the engine.
pub async fn drain_reader<R: AsyncRead + Unpin>(
	reader: &mut R,
	mut engine: DigestEngine,
	chunk_size: usize,
	path: Option<&Path>,
) -> Result<DigestEngine> {
	let mut buffer = chunk_buffer(chunk_size);
	loop {
		let n = match reader.read(&mut buffer).await {
			Ok(0) => return Ok(engine),
			Ok(n) => n,
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(HashError::from_read(path, e)),
		};
		engine.feed(&buffer[..n]);
	}
}
