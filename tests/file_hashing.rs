use proptest::prelude::*;
use rusthasher::{
	compute, hash_file, hash_text, ByteSource, HashAlgorithm, HashErrorKind,
	Hasher, HasherConfig, DEFAULT_CHUNK_SIZE,
};
use std::path::Path;
use tempfile::tempdir;

fn write(path: &Path, contents: &[u8]) {
	std::fs::write(path, contents).unwrap();
}

#[test]
fn file_and_text_agree() {
	let tmp = tempdir().unwrap();
	let path = tmp.path().join("note.txt");
	let text = "The quick brown fox jumps over the lazy dog";
	write(&path, text.as_bytes());

	for algorithm in [
		HashAlgorithm::Md5,
		HashAlgorithm::Sha256,
		HashAlgorithm::Blake3,
	] {
		assert_eq!(
			hash_file(&path, algorithm).unwrap(),
			hash_text(text, algorithm).unwrap()
		);
	}
	assert_eq!(
		hash_file(&path, HashAlgorithm::Md5).unwrap().hex(),
		"9e107d9d372bb6826bd81d3542a419d6"
	);
}

#[test]
fn empty_file_hashes_like_empty_text() {
	let tmp = tempdir().unwrap();
	let path = tmp.path().join("empty");
	write(&path, b"");
	let result = hash_file(&path, HashAlgorithm::Md5).unwrap();
	assert_eq!(result.hex(), "d41d8cd98f00b204e9800998ecf8427e");
	assert_eq!(result.bytes_hashed(), 0);
}

#[test]
fn large_file_spans_many_chunks() {
	let tmp = tempdir().unwrap();
	let path = tmp.path().join("large.bin");
	let data: Vec<u8> = (0..(DEFAULT_CHUNK_SIZE * 3 + 17))
		.map(|i| (i * 31 % 256) as u8)
		.collect();
	write(&path, &data);

	let whole = compute(ByteSource::from_bytes(data.clone()), HashAlgorithm::Sha512)
		.unwrap();
	let streamed = hash_file(&path, HashAlgorithm::Sha512).unwrap();
	let one_chunk = compute(
		ByteSource::from_file_with_chunk_size(&path, data.len()).unwrap(),
		HashAlgorithm::Sha512,
	)
	.unwrap();

	assert_eq!(streamed, whole);
	assert_eq!(one_chunk, whole);
	assert_eq!(streamed.bytes_hashed(), data.len() as u64);
}

#[test]
fn missing_path_is_not_found() {
	let tmp = tempdir().unwrap();
	let err = hash_file(tmp.path().join("nope.txt"), HashAlgorithm::Md5)
		.unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::NotFound);
	assert_eq!(err.path(), Some(tmp.path().join("nope.txt").as_path()));
}

#[test]
fn path_through_a_file_is_not_found() {
	let tmp = tempdir().unwrap();
	let plain = tmp.path().join("plain.txt");
	write(&plain, b"leaf");
	let err = hash_file(plain.join("child"), HashAlgorithm::Md5).unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::NotFound);
}

#[cfg(unix)]
#[test]
fn symlink_loop_is_not_found() {
	let tmp = tempdir().unwrap();
	let link = tmp.path().join("loop");
	std::os::unix::fs::symlink(&link, &link).unwrap();
	let err = hash_file(&link, HashAlgorithm::Md5).unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::NotFound);
}

#[test]
fn directory_path_is_rejected() {
	let tmp = tempdir().unwrap();
	let err = hash_file(tmp.path(), HashAlgorithm::Sha256).unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::IsDirectory);
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_permission_denied() {
	use std::os::unix::fs::PermissionsExt;
	let tmp = tempdir().unwrap();
	let path = tmp.path().join("secret");
	write(&path, b"classified");
	std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000))
		.unwrap();
	if std::fs::File::open(&path).is_ok() {
		// Running with privileges that bypass file modes.
		return;
	}
	let err = hash_file(&path, HashAlgorithm::Md5).unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::PermissionDenied);
}

#[test]
fn unsupported_identifier_wins_over_missing_file() {
	let hasher = Hasher::default();
	let err = hasher
		.hash_file_named("/missing/too", Some("sha-4096"))
		.unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::UnsupportedAlgorithm);
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(32))]

	#[test]
	fn chunk_size_does_not_change_digest(
		data in proptest::collection::vec(any::<u8>(), 0..4096),
		chunk_size in 1usize..700,
	) {
		let tmp = tempdir().unwrap();
		let path = tmp.path().join("blob");
		write(&path, &data);

		let reference = compute(ByteSource::from_bytes(data.clone()), HashAlgorithm::Sha256)
			.unwrap();
		let chunked = Hasher::new(HasherConfig::default().with_chunk_size(chunk_size))
			.hash_file(&path, HashAlgorithm::Sha256)
			.unwrap();
		prop_assert_eq!(chunked, reference);
	}
}
