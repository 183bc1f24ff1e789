// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: engine.rs
// Author: rusthasher maintainers

//! Digest engine: drains a [`ByteSource`] into an algorithm's running state
//! and finalizes it into a [`DigestResult`].
//!
//! An engine is single-shot. `consume` and `finish` take `self`, so a run
//! that failed mid-stream leaves nothing behind to finalize and a finished
//! run cannot be fed again.

use crate::rh::algorithm::HashAlgorithm;
use crate::rh::digest::DigestResult;
use crate::rh::error::Result;
use crate::rh::source::ByteSource;
use digest::DynDigest;
use tracing::{debug, trace};

/// Lifecycle of a single invocation.
///
/// A `DigestEngine` moves through `Idle`, `Reading`, `Finalizing` and then
/// `Done` or `Failed`. It never holds `Rejected`: an unknown identifier is
/// refused while resolving a [`HashAlgorithm`], before any engine exists, and
/// `Rejected` only labels that outcome in logs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
	Idle,
	Reading,
	Finalizing,
	Done,
	Failed,
	/// Identifier refused before any input was touched. Log label only.
	Rejected,
}

pub struct DigestEngine {
	algorithm: HashAlgorithm,
	state: Box<dyn DynDigest + Send>,
	phase: Phase,
	bytes_hashed: u64,
}

impl DigestEngine {
	pub fn new(algorithm: HashAlgorithm) -> Self {
		Self {
			algorithm,
			state: algorithm.create_hasher(),
			phase: Phase::Idle,
			bytes_hashed: 0,
		}
	}

	pub fn algorithm(&self) -> HashAlgorithm {
		self.algorithm
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn bytes_hashed(&self) -> u64 {
		self.bytes_hashed
	}

	/// Feed one chunk. Chunks must arrive in source order.
	pub fn feed(&mut self, chunk: &[u8]) {
		self.enter(Phase::Reading);
		self.state.update(chunk);
		self.bytes_hashed += chunk.len() as u64;
	}

	/// Drain `source` to exhaustion. On a read failure the engine is
	/// dropped and the error returned unchanged.
	pub fn consume(mut self, source: &mut ByteSource) -> Result<Self> {
		self.enter(Phase::Reading);
		loop {
			match source.next_chunk() {
				Ok(Some(chunk)) => {
					trace!(len = chunk.len(), "chunk");
					self.feed(chunk);
				}
				Ok(None) => return Ok(self),
				Err(err) => {
					self.enter(Phase::Failed);
					debug!(
						algorithm = %self.algorithm,
						source = %source.describe(),
						bytes = self.bytes_hashed,
						error = %err,
						"digest aborted"
					);
					return Err(err);
				}
			}
		}
	}

	pub fn finish(mut self) -> DigestResult {
		self.enter(Phase::Finalizing);
		let bytes = self.state.finalize_reset().to_vec();
		self.enter(Phase::Done);
		DigestResult::new(self.algorithm, bytes, self.bytes_hashed)
	}

	fn enter(&mut self, next: Phase) {
		if self.phase != next {
			trace!(algorithm = %self.algorithm, from = ?self.phase, to = ?next, "phase");
			self.phase = next;
		}
	}
}

/// Drain `source` with `algorithm` and return the encoded digest.
pub fn compute(
	mut source: ByteSource,
	algorithm: HashAlgorithm,
) -> Result<DigestResult> {
	let result = DigestEngine::new(algorithm).consume(&mut source)?.finish();
	debug!(
		algorithm = %algorithm,
		source = %source.describe(),
		bytes = result.bytes_hashed(),
		digest = %result.hex(),
		"digest computed"
	);
	Ok(result)
}
