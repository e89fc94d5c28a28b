//! An implementation of [SHA-3](https://en.wikipedia.org/wiki/SHA-3) and the
//! SHAKE extendable-output functions.

use alloc::vec::Vec;

use super::sponge::Sponge;
use crate::Error;

pub(crate) const SHA3_SUFFIX: u8 = 0x06;
pub(crate) const SHAKE_SUFFIX: u8 = 0x1f;

pub(crate) const SHA3_224: Sponge = Sponge::fixed(1152, 448);
pub(crate) const SHA3_256: Sponge = Sponge::fixed(1088, 512);
pub(crate) const SHA3_384: Sponge = Sponge::fixed(832, 768);
pub(crate) const SHA3_512: Sponge = Sponge::fixed(576, 1024);
pub(crate) const SHAKE128: Sponge = Sponge::fixed(1344, 256);
pub(crate) const SHAKE256: Sponge = Sponge::fixed(1088, 512);

fn fixed_digest<const N: usize>(sponge: Sponge, bytes: &[u8]) -> [u8; N] {
	let mut out = [0; N];
	sponge.hash_into(bytes, SHA3_SUFFIX, &mut out);

	out
}

/// Returns the SHA3-224 digest of the byte slice passed to it.
pub fn sha3_224(bytes: &[u8]) -> [u8; 28] {
	fixed_digest(SHA3_224, bytes)
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(bytes: &[u8]) -> [u8; 32] {
	fixed_digest(SHA3_256, bytes)
}

/// Returns the SHA3-384 digest of the byte slice passed to it.
pub fn sha3_384(bytes: &[u8]) -> [u8; 48] {
	fixed_digest(SHA3_384, bytes)
}

/// Returns the SHA3-512 digest of the byte slice passed to it.
pub fn sha3_512(bytes: &[u8]) -> [u8; 64] {
	fixed_digest(SHA3_512, bytes)
}

/// Returns `output_len` bytes of SHAKE128 output.
pub fn shake128(bytes: &[u8], output_len: usize) -> Result<Vec<u8>, Error> {
	SHAKE128.hash(bytes, SHAKE_SUFFIX, output_len)
}

/// Returns `output_len` bytes of SHAKE256 output.
pub fn shake256(bytes: &[u8], output_len: usize) -> Result<Vec<u8>, Error> {
	SHAKE256.hash(bytes, SHAKE_SUFFIX, output_len)
}

/// Fills `out` with SHAKE128 output.
pub fn shake128_into(bytes: &[u8], out: &mut [u8]) {
	SHAKE128.hash_into(bytes, SHAKE_SUFFIX, out);
}

/// Fills `out` with SHAKE256 output.
pub fn shake256_into(bytes: &[u8], out: &mut [u8]) {
	SHAKE256.hash_into(bytes, SHAKE_SUFFIX, out);
}

#[cfg(test)]
fn format_hash<I: AsRef<[u8]>>(
	hasher: impl FnOnce(&[u8]) -> I,
	input: &[u8],
) -> alloc::string::String {
	use core::fmt::Write;

	let mut out = alloc::string::String::new();

	for &byte in hasher(input).as_ref() {
		write!(out, "{:>02x}", byte).unwrap();
	}

	out
}

#[test]
fn test_empty_inputs() {
	assert_eq!(
		format_hash(sha3_224, b""),
		"6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
	);

	assert_eq!(
		format_hash(sha3_256, b""),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);

	assert_eq!(
		format_hash(sha3_384, b""),
		"0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
	);

	assert_eq!(
		format_hash(sha3_512, b""),
		"a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
	);

	assert_eq!(
		format_hash(|bytes| shake128(bytes, 32).unwrap(), b""),
		"7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
	);

	assert_eq!(
		format_hash(|bytes| shake256(bytes, 64).unwrap(), b""),
		"46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762fd75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
	);
}

#[test]
fn test_abc() {
	assert_eq!(
		format_hash(sha3_224, b"abc"),
		"e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
	);

	assert_eq!(
		format_hash(sha3_256, b"abc"),
		"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
	);

	assert_eq!(
		format_hash(sha3_384, b"abc"),
		"ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
	);

	assert_eq!(
		format_hash(sha3_512, b"abc"),
		"b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
	);

	assert_eq!(
		format_hash(|bytes| shake128(bytes, 31).unwrap(), b"abc"),
		"5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2c",
	);

	assert_eq!(
		format_hash(|bytes| shake256(bytes, 32).unwrap(), b"abc"),
		"483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739",
	);
}

#[test]
fn test_shake_into_matches_allocating() {
	let mut out = [0; 200];
	shake128_into(b"abc", &mut out);
	assert_eq!(shake128(b"abc", 200).unwrap(), out);

	shake256_into(b"abc", &mut out);
	assert_eq!(shake256(b"abc", 200).unwrap(), out);
}
