//! The keccak sponge: absorb, pad with a delimited suffix, squeeze.

use alloc::vec::Vec;

use tracing::trace;

use super::{keccak_f1600, State, STATE_BYTES};
use crate::Error;

/// Width of keccak-f\[1600\] in bits; `rate + capacity` must equal this.
pub const WIDTH: usize = 1600;

/// A validated rate/capacity split, both in bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sponge {
	rate: usize,
	capacity: usize,
}

impl Sponge {
	pub fn new(rate: usize, capacity: usize) -> Result<Self, Error> {
		if !Self::valid(rate, capacity) {
			return Err(Error::InvalidParameters {rate, capacity});
		}

		Ok(Self {rate, capacity})
	}

	/// For parameter sets known ahead of time; misuse fails to compile when
	/// evaluated in a const context.
	pub(crate) const fn fixed(rate: usize, capacity: usize) -> Self {
		assert!(Self::valid(rate, capacity));

		Self {rate, capacity}
	}

	const fn valid(rate: usize, capacity: usize) -> bool {
		rate != 0 && rate <= WIDTH && capacity == WIDTH - rate && rate % 8 == 0
	}

	pub fn rate(&self) -> usize {
		self.rate
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn rate_in_bytes(&self) -> usize {
		self.rate / 8
	}

	/// Hashes `input` and fills all of `output` from the squeezed stream.
	pub fn hash_into(&self, input: &[u8], delimited_suffix: u8, output: &mut [u8]) {
		let rate_in_bytes = self.rate_in_bytes();
		let mut state = [0; STATE_BYTES];

		let mut blocks = input.chunks_exact(rate_in_bytes);

		for block in &mut blocks {
			xor_into(&mut state, block);
			keccak_f1600(&mut state);
		}

		let tail = blocks.remainder();
		xor_into(&mut state, tail);

		let block_size = tail.len();

		state[block_size] ^= delimited_suffix;

		// the suffix's last bit and the final pad bit would share a byte
		if delimited_suffix & 0x80 != 0 && block_size == rate_in_bytes - 1 {
			keccak_f1600(&mut state);
		}

		state[rate_in_bytes - 1] ^= 0x80;
		keccak_f1600(&mut state);

		let mut blocks = output.chunks_mut(rate_in_bytes).peekable();

		while let Some(block) = blocks.next() {
			let len = block.len();
			block.copy_from_slice(&state[.. len]);

			if blocks.peek().is_some() {
				keccak_f1600(&mut state);
			}
		}
	}

	/// Like [`Sponge::hash_into`], allocating `output_len` bytes first.
	pub fn hash(&self, input: &[u8], delimited_suffix: u8, output_len: usize) -> Result<Vec<u8>, Error> {
		let mut output = Vec::new();

		output
			.try_reserve_exact(output_len)
			.map_err(|_| Error::InvalidOutputLength(output_len))?;

		output.resize(output_len, 0);
		self.hash_into(input, delimited_suffix, &mut output);

		Ok(output)
	}
}

fn xor_into(state: &mut State, block: &[u8]) {
	for (byte, input) in state.iter_mut().zip(block) {
		*byte ^= input;
	}
}

/// The general keccak sponge over keccak-f\[1600\].
///
/// `rate` and `capacity` are in bits. `delimited_suffix` holds the
/// domain-separation bits followed by the first bit of padding, e.g. `0x06`
/// for SHA-3 and `0x1f` for SHAKE.
pub fn keccak(
	rate: usize,
	capacity: usize,
	input: &[u8],
	delimited_suffix: u8,
	output_len: usize,
) -> Result<Vec<u8>, Error> {
	let sponge = Sponge::new(rate, capacity)?;

	trace!(
		rate,
		capacity,
		input_len = input.len(),
		delimited_suffix,
		output_len,
		"keccak sponge"
	);

	sponge.hash(input, delimited_suffix, output_len)
}

#[test]
fn test_rejects_invalid_parameters() {
	assert_eq!(
		keccak(1088, 511, b"abc", 0x06, 32),
		Err(Error::InvalidParameters {rate: 1088, capacity: 511}),
	);

	assert_eq!(
		keccak(1084, 516, b"abc", 0x06, 32),
		Err(Error::InvalidParameters {rate: 1084, capacity: 516}),
	);

	assert_eq!(
		keccak(0, 1600, b"abc", 0x06, 32),
		Err(Error::InvalidParameters {rate: 0, capacity: 1600}),
	);

	assert_eq!(
		Sponge::new(usize::MAX, 1601),
		Err(Error::InvalidParameters {rate: usize::MAX, capacity: 1601}),
	);
}

#[test]
fn test_rejects_unallocatable_output() {
	assert_eq!(
		keccak(1088, 512, b"", 0x1f, usize::MAX),
		Err(Error::InvalidOutputLength(usize::MAX)),
	);
}

#[test]
fn test_zero_output_len() {
	assert_eq!(keccak(1344, 256, b"abc", 0x1f, 0), Ok(Vec::new()));
}

#[test]
fn test_original_keccak_padding() {
	// pre-standard keccak-256 uses a bare 0x01 suffix
	assert_eq!(
		keccak(1088, 512, b"", 0x01, 32).unwrap(),
		[
			0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
			0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70,
		],
	);
}

#[test]
fn test_suffix_on_last_rate_byte() {
	let input: Vec<u8> = (0 .. 135).collect();

	// a suffix with its top bit set landing on the last byte of the rate
	// forces an extra permutation before the final pad bit
	assert_eq!(
		keccak(1088, 512, &input, 0x81, 32).unwrap(),
		[
			0x99, 0x0d, 0x2f, 0x00, 0xf8, 0xee, 0x20, 0x61, 0xee, 0x78, 0x96, 0xb5, 0x95, 0xa4, 0xeb, 0x64,
			0x7d, 0x6d, 0x42, 0x3d, 0x3c, 0xc1, 0x95, 0x3c, 0x1a, 0xdc, 0x35, 0x0a, 0xf6, 0xc7, 0xe5, 0xec,
		],
	);

	assert_eq!(
		keccak(1088, 512, &input[.. 134], 0x81, 32).unwrap(),
		[
			0xe7, 0x15, 0x22, 0x1a, 0x75, 0xe1, 0xce, 0x38, 0xe5, 0x8d, 0x12, 0xed, 0xa6, 0x0b, 0x0e, 0xd2,
			0x72, 0x43, 0xab, 0xb7, 0xd2, 0xeb, 0x03, 0x03, 0x4a, 0xfc, 0x4c, 0xca, 0xee, 0xaa, 0x4b, 0x23,
		],
	);
}

#[test]
fn test_narrow_rate() {
	assert_eq!(
		keccak(64, 1536, b"abc", 0x06, 16).unwrap(),
		[0xe0, 0x64, 0xae, 0x7e, 0xf2, 0xd7, 0x87, 0xc4, 0x7a, 0x36, 0xb5, 0x68, 0x4d, 0xd5, 0xf3, 0xe9],
	);
}
