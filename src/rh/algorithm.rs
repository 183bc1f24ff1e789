// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: algorithm.rs
// Author: rusthasher maintainers

//! The closed set of digest algorithms and the factory that builds their
//! running state.

use crate::rh::error::HashError;
use blake2::Digest;
use digest::DynDigest;
use serde::{Serialize, Serializer};
use skein::{consts::U32, Skein1024, Skein256, Skein512};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

#[derive(
	Copy, Clone, Debug, Default, Eq, PartialEq, Hash, EnumIter,
)]
pub enum HashAlgorithm {
	Belthash,
	Blake2b,
	Blake2s,
	Blake3,
	Fsb160,
	Fsb224,
	Fsb256,
	Fsb384,
	Fsb512,
	Gost94,
	Gost94ua,
	Groestl,
	Jh224,
	Jh256,
	Jh384,
	Jh512,
	Md2,
	Md4,
	/// Default when a caller does not name an algorithm.
	#[default]
	Md5,
	Ripemd160,
	Ripemd320,
	Sha1,
	Sha224,
	Sha256,
	Sha384,
	Sha512,
	Sha3_224,
	Sha3_256,
	Sha3_384,
	Sha3_512,
	Shabal192,
	Shabal224,
	Shabal256,
	Shabal384,
	Shabal512,
	Skein256,
	Skein512,
	Skein1024,
	Sm3,
	Streebog256,
	Streebog512,
	Tiger,
	Whirlpool,
}

macro_rules! create_hasher {
	($alg:expr, $($variant:ident => $hasher:expr),+ $(,)?) => {
		match $alg {
			$(
				HashAlgorithm::$variant => Box::new($hasher),
			)+
		}
	};
}

impl HashAlgorithm {
	/// Canonical lowercase identifier, as accepted by [`FromStr`].
	pub fn name(self) -> &'static str {
		match self {
			Self::Belthash => "belthash",
			Self::Blake2b => "blake2b",
			Self::Blake2s => "blake2s",
			Self::Blake3 => "blake3",
			Self::Fsb160 => "fsb160",
			Self::Fsb224 => "fsb224",
			Self::Fsb256 => "fsb256",
			Self::Fsb384 => "fsb384",
			Self::Fsb512 => "fsb512",
			Self::Gost94 => "gost94",
			Self::Gost94ua => "gost94ua",
			Self::Groestl => "groestl",
			Self::Jh224 => "jh224",
			Self::Jh256 => "jh256",
			Self::Jh384 => "jh384",
			Self::Jh512 => "jh512",
			Self::Md2 => "md2",
			Self::Md4 => "md4",
			Self::Md5 => "md5",
			Self::Ripemd160 => "ripemd160",
			Self::Ripemd320 => "ripemd320",
			Self::Sha1 => "sha1",
			Self::Sha224 => "sha224",
			Self::Sha256 => "sha256",
			Self::Sha384 => "sha384",
			Self::Sha512 => "sha512",
			Self::Sha3_224 => "sha3-224",
			Self::Sha3_256 => "sha3-256",
			Self::Sha3_384 => "sha3-384",
			Self::Sha3_512 => "sha3-512",
			Self::Shabal192 => "shabal192",
			Self::Shabal224 => "shabal224",
			Self::Shabal256 => "shabal256",
			Self::Shabal384 => "shabal384",
			Self::Shabal512 => "shabal512",
			Self::Skein256 => "skein256",
			Self::Skein512 => "skein512",
			Self::Skein1024 => "skein1024",
			Self::Sm3 => "sm3",
			Self::Streebog256 => "streebog256",
			Self::Streebog512 => "streebog512",
			Self::Tiger => "tiger",
			Self::Whirlpool => "whirlpool",
		}
	}

	/// Digest length in bytes. Fixed per algorithm.
	pub fn output_len(self) -> usize {
		match self {
			Self::Md2 | Self::Md4 | Self::Md5 => 16,
			Self::Sha1 | Self::Ripemd160 | Self::Fsb160 => 20,
			Self::Tiger | Self::Shabal192 => 24,
			Self::Sha224
			| Self::Sha3_224
			| Self::Shabal224
			| Self::Fsb224
			| Self::Jh224 => 28,
			Self::Sha256
			| Self::Sha3_256
			| Self::Blake2s
			| Self::Blake3
			| Self::Sm3
			| Self::Streebog256
			| Self::Gost94
			| Self::Gost94ua
			| Self::Groestl
			| Self::Shabal256
			| Self::Skein256
			| Self::Skein512
			| Self::Skein1024
			| Self::Belthash
			| Self::Fsb256
			| Self::Jh256 => 32,
			Self::Ripemd320 => 40,
			Self::Sha384
			| Self::Sha3_384
			| Self::Shabal384
			| Self::Fsb384
			| Self::Jh384 => 48,
			Self::Sha512
			| Self::Sha3_512
			| Self::Blake2b
			| Self::Whirlpool
			| Self::Streebog512
			| Self::Shabal512
			| Self::Fsb512
			| Self::Jh512 => 64,
		}
	}

	/// Length of the lowercase hex encoding of a digest.
	pub fn hex_len(self) -> usize {
		self.output_len() * 2
	}

	pub fn all() -> impl Iterator<Item = HashAlgorithm> {
		Self::iter()
	}

	/// Resolve an optional identifier, falling back to `default` when the
	/// caller did not name one.
	pub fn resolve(
		identifier: Option<&str>,
		default: HashAlgorithm,
	) -> Result<HashAlgorithm, HashError> {
		match identifier {
			Some(identifier) => identifier.parse(),
			None => Ok(default),
		}
	}

	/// Fresh running state for this algorithm.
	pub(crate) fn create_hasher(self) -> Box<dyn DynDigest + Send> {
		create_hasher!(self,
			Belthash => belt_hash::BeltHash::new(),
			Blake2b => blake2::Blake2b512::new(),
			Blake2s => blake2::Blake2s256::new(),
			Blake3 => blake3::Hasher::new(),
			Fsb160 => fsb::Fsb160::new(),
			Fsb224 => fsb::Fsb224::new(),
			Fsb256 => fsb::Fsb256::new(),
			Fsb384 => fsb::Fsb384::new(),
			Fsb512 => fsb::Fsb512::new(),
			Gost94 => gost94::Gost94Test::new(),
			Gost94ua => gost94::Gost94UA::new(),
			Groestl => groestl::Groestl256::new(),
			Jh224 => jh::Jh224::new(),
			Jh256 => jh::Jh256::new(),
			Jh384 => jh::Jh384::new(),
			Jh512 => jh::Jh512::new(),
			Md2 => md2::Md2::new(),
			Md4 => md4::Md4::new(),
			Md5 => md5::Md5::new(),
			Ripemd160 => ripemd::Ripemd160::new(),
			Ripemd320 => ripemd::Ripemd320::new(),
			Sha1 => sha1::Sha1::new(),
			Sha224 => sha2::Sha224::new(),
			Sha256 => sha2::Sha256::new(),
			Sha384 => sha2::Sha384::new(),
			Sha512 => sha2::Sha512::new(),
			Sha3_224 => sha3::Sha3_224::new(),
			Sha3_256 => sha3::Sha3_256::new(),
			Sha3_384 => sha3::Sha3_384::new(),
			Sha3_512 => sha3::Sha3_512::new(),
			Shabal192 => shabal::Shabal192::new(),
			Shabal224 => shabal::Shabal224::new(),
			Shabal256 => shabal::Shabal256::new(),
			Shabal384 => shabal::Shabal384::new(),
			Shabal512 => shabal::Shabal512::new(),
			Skein256 => Skein256::<U32>::new(),
			Skein512 => Skein512::<U32>::new(),
			Skein1024 => Skein1024::<U32>::new(),
			Sm3 => sm3::Sm3::new(),
			Streebog256 => streebog::Streebog256::new(),
			Streebog512 => streebog::Streebog512::new(),
			Tiger => tiger::Tiger::new(),
			Whirlpool => whirlpool::Whirlpool::new(),
		)
	}
}

fn normalize(identifier: &str) -> String {
	identifier
		.trim()
		.chars()
		.filter(|c| *c != '-' && *c != '_')
		.map(|c| c.to_ascii_lowercase())
		.collect()
}

impl FromStr for HashAlgorithm {
	type Err = HashError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let needle = normalize(s);
		if needle.is_empty() {
			return Err(HashError::unsupported(s));
		}
		Self::iter()
			.find(|alg| normalize(alg.name()) == needle)
			.ok_or_else(|| HashError::unsupported(s))
	}
}

impl fmt::Display for HashAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl Serialize for HashAlgorithm {
	fn serialize<S: Serializer>(
		&self,
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rh::error::HashErrorKind;

	#[test]
	fn default_is_md5() {
		assert_eq!(HashAlgorithm::default(), HashAlgorithm::Md5);
	}

	#[test]
	fn parses_loose_spellings() {
		for spelling in ["sha256", "SHA256", "SHA-256", "sha_256", " sha256 "]
		{
			assert_eq!(
				spelling.parse::<HashAlgorithm>().unwrap(),
				HashAlgorithm::Sha256
			);
		}
		assert_eq!(
			"SHA3_512".parse::<HashAlgorithm>().unwrap(),
			HashAlgorithm::Sha3_512
		);
		assert_eq!(
			"sha3-224".parse::<HashAlgorithm>().unwrap(),
			HashAlgorithm::Sha3_224
		);
	}

	#[test]
	fn rejects_unknown_identifiers() {
		for bogus in ["MICKEYMOUSE", "", "-", "sha257", "crc32"] {
			let err = bogus.parse::<HashAlgorithm>().unwrap_err();
			assert_eq!(err.kind(), HashErrorKind::UnsupportedAlgorithm);
		}
	}

	#[test]
	fn names_round_trip_and_are_unique() {
		let mut seen = std::collections::HashSet::new();
		for alg in HashAlgorithm::all() {
			assert!(seen.insert(normalize(alg.name())), "{}", alg);
			assert_eq!(alg.name().parse::<HashAlgorithm>().unwrap(), alg);
		}
	}

	#[test]
	fn declared_lengths_match_running_state() {
		for alg in HashAlgorithm::all() {
			assert_eq!(
				alg.create_hasher().output_size(),
				alg.output_len(),
				"{}",
				alg
			);
		}
	}

	#[test]
	fn resolve_falls_back_to_default() {
		assert_eq!(
			HashAlgorithm::resolve(None, HashAlgorithm::Sha1).unwrap(),
			HashAlgorithm::Sha1
		);
		assert_eq!(
			HashAlgorithm::resolve(Some("md4"), HashAlgorithm::Sha1)
				.unwrap(),
			HashAlgorithm::Md4
		);
		assert!(HashAlgorithm::resolve(Some("nope"), HashAlgorithm::Md5)
			.is_err());
	}
}
