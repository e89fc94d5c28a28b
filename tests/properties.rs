//! Property-based tests for the sponge and the SHA-3 family.

use keccak_vectors::{keccak, sha3_224, sha3_256, sha3_384, sha3_512, shake128, shake256, Error, Sponge, Variant};
use proptest::prelude::*;

proptest! {
	#[test]
	fn sha3_is_deterministic(input in prop::collection::vec(any::<u8>(), 0 .. 600)) {
		prop_assert_eq!(sha3_256(&input), sha3_256(&input));
		prop_assert_eq!(shake256(&input, 77).unwrap(), shake256(&input, 77).unwrap());
	}

	#[test]
	fn fixed_lengths(input in prop::collection::vec(any::<u8>(), 0 .. 300)) {
		prop_assert_eq!(sha3_224(&input).len(), 28);
		prop_assert_eq!(sha3_256(&input).len(), 32);
		prop_assert_eq!(sha3_384(&input).len(), 48);
		prop_assert_eq!(sha3_512(&input).len(), 64);
	}

	/// Longer SHAKE output always extends the shorter one.
	#[test]
	fn shake_prefix(
		input in prop::collection::vec(any::<u8>(), 0 .. 300),
		short in 0usize .. 400,
		extra in 0usize .. 400,
	) {
		let long = short + extra;

		let a = shake128(&input, short).unwrap();
		let b = shake128(&input, long).unwrap();
		prop_assert_eq!(&b[.. short], &a[..]);

		let a = shake256(&input, short).unwrap();
		let b = shake256(&input, long).unwrap();
		prop_assert_eq!(&b[.. short], &a[..]);
	}

	/// The named entry points are exactly the general sponge with their parameters.
	#[test]
	fn entry_points_are_the_general_sponge(
		input in prop::collection::vec(any::<u8>(), 0 .. 400),
		output_len in 0usize .. 300,
	) {
		prop_assert_eq!(sha3_224(&input).to_vec(), keccak(1152, 448, &input, 0x06, 28).unwrap());
		prop_assert_eq!(sha3_256(&input).to_vec(), keccak(1088, 512, &input, 0x06, 32).unwrap());
		prop_assert_eq!(sha3_384(&input).to_vec(), keccak(832, 768, &input, 0x06, 48).unwrap());
		prop_assert_eq!(sha3_512(&input).to_vec(), keccak(576, 1024, &input, 0x06, 64).unwrap());
		prop_assert_eq!(shake128(&input, output_len).unwrap(), keccak(1344, 256, &input, 0x1f, output_len).unwrap());
		prop_assert_eq!(shake256(&input, output_len).unwrap(), keccak(1088, 512, &input, 0x1f, output_len).unwrap());
	}

	#[test]
	fn variants_agree_with_their_parameters(
		input in prop::collection::vec(any::<u8>(), 0 .. 200),
		index in 0usize .. 6,
	) {
		let variant = Variant::ALL[index];
		let output_len = variant.fixed_output_len().unwrap_or(50);

		prop_assert_eq!(
			variant.digest(&input, Some(output_len)).unwrap(),
			keccak(variant.rate(), variant.capacity(), &input, variant.delimited_suffix(), output_len).unwrap(),
		);
	}

	#[test]
	fn mismatched_width_is_rejected(rate in 0usize .. 2000, capacity in 0usize .. 2000) {
		prop_assume!(rate + capacity != 1600);

		prop_assert_eq!(
			keccak(rate, capacity, b"abc", 0x06, 32),
			Err(Error::InvalidParameters {rate, capacity}),
		);
	}

	#[test]
	fn unaligned_rate_is_rejected(rate in 1usize .. 1600) {
		prop_assume!(rate % 8 != 0);

		prop_assert_eq!(
			Sponge::new(rate, 1600 - rate),
			Err(Error::InvalidParameters {rate, capacity: 1600 - rate}),
		);
	}

	#[test]
	fn every_byte_aligned_rate_is_accepted(bytes in 1usize ..= 200) {
		let sponge = Sponge::new(bytes * 8, 1600 - bytes * 8).unwrap();

		prop_assert_eq!(sponge.rate_in_bytes(), bytes);
		prop_assert_eq!(sponge.hash(b"abc", 0x1f, 3 * bytes + 1).unwrap().len(), 3 * bytes + 1);
	}
}
