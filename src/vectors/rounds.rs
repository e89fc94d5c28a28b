use anyhow::Result;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use tracing::debug;

use super::Vector;
use crate::Variant;

const SEED: &[u8] = b"abc";

/// Iteration counts at which a digest is reported.
const CHECKPOINTS: [u32; 2] = [5, 10];

/// Output length used when iterating the SHAKE functions.
const SHAKE_ROUND_LEN: usize = 31;

fn rust_crypto<D: Digest>(bytes: &[u8]) -> Result<Vec<u8>> {
	Ok(D::digest(bytes).to_vec())
}

fn push_rounds(
	vectors: &mut Vec<Vector>,
	name: &str,
	mut hasher: impl FnMut(&[u8]) -> Result<Vec<u8>>,
) -> Result<()> {
	let mut digest = SEED.to_vec();
	let mut rounds = 0;

	for checkpoint in CHECKPOINTS {
		while rounds < checkpoint {
			digest = hasher(&digest)?;
			rounds += 1;
		}

		vectors.push(Vector::new(format!("{} with {} Rounds", name, checkpoint), &digest));
	}

	Ok(())
}

/// Every supported hash applied repeatedly to `"abc"`, reported after 5 and
/// after 10 rounds.
pub fn round_vectors() -> Result<Vec<Vector>> {
	let mut vectors = Vec::new();

	push_rounds(&mut vectors, "SHA-1", rust_crypto::<Sha1>)?;
	push_rounds(&mut vectors, "SHA-224", rust_crypto::<Sha224>)?;
	push_rounds(&mut vectors, "SHA-256", rust_crypto::<Sha256>)?;
	push_rounds(&mut vectors, "SHA-384", rust_crypto::<Sha384>)?;
	push_rounds(&mut vectors, "SHA-512", rust_crypto::<Sha512>)?;

	for variant in Variant::ALL {
		let output_len = variant.is_shake().then_some(SHAKE_ROUND_LEN);

		push_rounds(&mut vectors, variant.name(), |bytes| {
			Ok(variant.digest(bytes, output_len)?)
		})?;
	}

	debug!(count = vectors.len(), "generated round vectors");

	Ok(vectors)
}

#[test]
fn test_round_vectors() {
	let vectors = round_vectors().unwrap();

	assert_eq!(vectors.len(), 2 * 11);

	let lines: Vec<String> = vectors.iter().map(ToString::to_string).collect();

	for expected in [
		"SHA-1 with 5 Rounds: b5c64925eb9940259be55c005c9cecc7d9897ef9",
		"SHA-256 with 10 Rounds: 10e286f907c0fe9f02cea3864cbaec04ae47e2c0a13b60473bc9968a4851b219",
		"SHA3-224 with 10 Rounds: a1b668748fd69b8b6a6453d3bada2b9eb9a06a29b78fbcff5ab530ae",
		"SHA3-256 with 5 Rounds: fd5ad48a1abf3fd8211ecd2a6a0b0503e745d953def260541fa5db7dc1b3b84f",
		"SHA3-256 with 10 Rounds: 5b814fc96d03918994939bccb796945d9683fa90a22f99350d6a964de78a7980",
		"SHA3-512 with 10 Rounds: 0e3c0126a211563fdedc96149f1c2334aa5f5b2afcf5590cb71fec0ab348ba522e56c1136f165f525b22890e2546d2f9edbea6b6f5e929237b6c0f395e1b2e9b",
		"SHAKE128 with 10 Rounds: 5a5aeb2022e0e92ef4da3dc3e261a9303224b65cf6666f87a4d395a4ab94fe",
		"SHAKE256 with 5 Rounds: 70368c73548e76dd6405ea6c1b4358eb0aeb4c0efe73526c7c6e1d9a9e4e0a",
	] {
		assert!(lines.iter().any(|line| line == expected), "missing {:?}", expected);
	}
}

#[test]
fn test_checkpoints_agree_with_digest_rounds() {
	let vectors = round_vectors().unwrap();
	let digest = Variant::Sha3_384.digest_rounds(SEED, 10, None).unwrap();

	assert!(vectors.contains(&Vector::new("SHA3-384 with 10 Rounds", &digest)));
}
