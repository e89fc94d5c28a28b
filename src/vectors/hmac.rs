use std::ops::RangeInclusive;

use anyhow::{anyhow, Result};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use tracing::debug;

use super::Vector;

/// A FIPS 198a sample: the key is every byte in `key`, in order.
struct Sample {
	name: &'static str,
	text: &'static [u8],
	key: RangeInclusive<u8>,
}

// shorter than, equal to and longer than the SHA-1/SHA-256 block size
const SAMPLES: [Sample; 3] = [
	Sample {name: "Short", text: b"Sample #2", key: 0x30 ..= 0x43},
	Sample {name: "Medium", text: b"Sample #1", key: 0x00 ..= 0x3f},
	Sample {name: "Large", text: b"Sample #3", key: 0x50 ..= 0xb3},
];

fn mac<M: Mac + KeyInit>(key: &[u8], text: &[u8]) -> Result<Vec<u8>> {
	let mut mac = <M as Mac>::new_from_slice(key).map_err(|err| anyhow!("HMAC key rejected: {}", err))?;
	mac.update(text);

	Ok(mac.finalize().into_bytes().to_vec())
}

fn push_samples(
	vectors: &mut Vec<Vector>,
	name: &str,
	key_repeats: usize,
	hmac: fn(&[u8], &[u8]) -> Result<Vec<u8>>,
) -> Result<()> {
	for sample in SAMPLES {
		let key: Vec<u8> = sample.key.collect::<Vec<u8>>().repeat(key_repeats);
		let tag = hmac(&key, sample.text)?;

		vectors.push(Vector::new(format!("{} {} Key Result", name, sample.name), &tag));
	}

	Ok(())
}

/// HMAC over SHA-1 and SHA-2. SHA-384 and SHA-512 have twice the block
/// size, so their keys are doubled to hit the same short/medium/large cases.
pub fn hmac_vectors() -> Result<Vec<Vector>> {
	let mut vectors = Vec::new();

	push_samples(&mut vectors, "SHA-1", 1, mac::<Hmac<Sha1>>)?;
	push_samples(&mut vectors, "SHA-224", 1, mac::<Hmac<Sha224>>)?;
	push_samples(&mut vectors, "SHA-256", 1, mac::<Hmac<Sha256>>)?;
	push_samples(&mut vectors, "SHA-384", 2, mac::<Hmac<Sha384>>)?;
	push_samples(&mut vectors, "SHA-512", 2, mac::<Hmac<Sha512>>)?;

	debug!(count = vectors.len(), "generated HMAC vectors");

	Ok(vectors)
}

#[test]
fn test_hmac_vectors() {
	let vectors = hmac_vectors().unwrap();

	assert_eq!(vectors.len(), 15);

	assert_eq!(
		vectors[0],
		Vector {
			label: "SHA-1 Short Key Result".to_string(),
			hex: "0922d3405faa3d194f82a45830737d5cc6c75d24".to_string(),
		},
	);

	assert_eq!(vectors[1].hex, "4f4ca3d5d68ba7cc0a1208c9c61e9c5da0403c0a");
	assert_eq!(vectors[2].hex, "bcf41eab8bb2d802f3d05caf7cb092ecf8d1a3aa");

	assert_eq!(vectors[6].label, "SHA-256 Short Key Result");
	assert_eq!(vectors[6].hex, "b8f20db541ea4309ca4ea9380cd0e834f71fbe9174a261380dc17eae6a3451d9");
	assert_eq!(vectors[8].hex, "2d7d0d7f3e52ffe89d65c978f39d555bb48b0ba48d5b6eb404654ad1afdb4ca3");

	assert_eq!(vectors[12].label, "SHA-512 Short Key Result");
	assert_eq!(
		vectors[12].hex,
		"74ed1131b8e37c0e18829b7ae7d99925664cfe055c2d01fa00d0f152ac321a50f3ef1ee91a36fd6248de60ede4196a4f9e5acca4981a09a91a0745d674ca11d3",
	);
}
