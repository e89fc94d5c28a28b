use anyhow::{Context, Result};
use tracing::debug;

use super::{Encoding, Message, Vector};
use crate::Variant;

/// SHAKE128 and SHAKE256 over every message and encoding, once per output
/// length (in bytes).
pub fn shake_vectors(output_lens: &[usize]) -> Result<Vec<Vector>> {
	let mut vectors = Vec::new();

	for variant in [Variant::Shake128, Variant::Shake256] {
		for message in Message::ALL {
			let text = message.text();

			for &output_len in output_lens {
				for encoding in Encoding::ALL {
					let digest = variant
						.digest(&encoding.encode(&text), Some(output_len))
						.with_context(|| {
							format!("{} over the {} {} input", variant, message.name(), encoding.name())
						})?;

					let label = format!(
						"{} with {} {} Input and {} bit Output",
						variant,
						message.name(),
						encoding.name(),
						output_len.saturating_mul(8),
					);

					vectors.push(Vector::new(label, &digest));
				}
			}
		}
	}

	debug!(count = vectors.len(), "generated SHAKE vectors");

	Ok(vectors)
}

#[test]
fn test_shake_vectors() {
	let vectors = shake_vectors(&[31]).unwrap();

	assert_eq!(vectors.len(), 2 * 3 * 3);

	let find = |label: &str| {
		vectors
			.iter()
			.find(|vector| vector.label == label)
			.map(|vector| vector.hex.as_str())
	};

	assert_eq!(
		find("SHAKE128 with Short UTF-8 Input and 248 bit Output"),
		Some("5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2c"),
	);

	assert_eq!(
		find("SHAKE128 with Medium UTF-16BE Input and 248 bit Output"),
		Some("d8ccc8505c54a81ddafd0db03b7eb8c2f309655b980781629b04bc4e9d7dbf"),
	);

	assert_eq!(vectors[0].label, "SHAKE128 with Short UTF-8 Input and 248 bit Output");
	assert_eq!(vectors[17].label, "SHAKE256 with Long UTF-16LE Input and 248 bit Output");
}

#[test]
fn test_shake_vectors_without_lengths() {
	assert!(shake_vectors(&[]).unwrap().is_empty());
}
