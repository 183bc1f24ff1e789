// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// Module: weak algorithm warnings helper
// Author: rusthasher maintainers

//! Registry of digest algorithms with known collision attacks, and the
//! warning banner the command line host prints when one is selected.

use crate::rh::algorithm::HashAlgorithm;
use colored::Colorize;

const NIST_REFERENCE: &str =
	"https://doi.org/10.6028/NIST.SP.800-131Ar2";

/// Metadata describing a weak algorithm entry in the registry.
#[derive(Debug, Clone)]
pub struct WeakAlgorithm {
	pub algorithm: HashAlgorithm,
	pub display_name: &'static str,
	pub replacement_hint: &'static str,
}

const WEAK_ALGORITHMS: &[WeakAlgorithm] = &[
	WeakAlgorithm {
		algorithm: HashAlgorithm::Md2,
		display_name: "MD2",
		replacement_hint: "Use SHA-256 or BLAKE3",
	},
	WeakAlgorithm {
		algorithm: HashAlgorithm::Md4,
		display_name: "MD4",
		replacement_hint: "Use SHA-256 or BLAKE3",
	},
	WeakAlgorithm {
		algorithm: HashAlgorithm::Md5,
		display_name: "MD5",
		replacement_hint: "Use SHA-256 or BLAKE3 for new digests",
	},
	WeakAlgorithm {
		algorithm: HashAlgorithm::Sha1,
		display_name: "SHA-1",
		replacement_hint: "Use SHA-256 or SHA-512",
	},
];

pub fn lookup(algorithm: HashAlgorithm) -> Option<&'static WeakAlgorithm> {
	WEAK_ALGORITHMS
		.iter()
		.find(|entry| entry.algorithm == algorithm)
}

/// Plain-text banner for `algorithm`, if it is weak.
pub fn warning_for(algorithm: HashAlgorithm) -> Option<String> {
	let entry = lookup(algorithm)?;
	Some(format!(
		"⚠ WARNING: {} is a weak algorithm (collisions known). {}.",
		entry.display_name, entry.replacement_hint
	))
}

pub fn emit_warning(algorithm: HashAlgorithm) {
	if let Some(banner) = warning_for(algorithm) {
		eprintln!("{}", banner.yellow().bold());
		eprintln!("{}", format!("References: {}", NIST_REFERENCE).yellow());
	}
}
