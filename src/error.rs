use alloc::string::String;
use core::fmt;

use crate::keccak::variant::Variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// `rate + capacity` is not 1600, or `rate` is zero or not a whole number of bytes.
	InvalidParameters {
		rate: usize,
		capacity: usize,
	},
	/// The requested output cannot be allocated.
	InvalidOutputLength(usize),
	/// A SHAKE digest was requested without an output length.
	MissingOutputLength(Variant),
	/// A fixed-length SHA-3 digest was requested with some other length.
	FixedOutputLength {
		variant: Variant,
		requested: usize,
	},
	/// Iterated hashing needs at least one round.
	InvalidRounds(u32),
	UnsupportedVariant(String),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::InvalidParameters {rate, capacity} => write!(
				f,
				"invalid sponge parameters: rate {} + capacity {} must be 1600 with a non-zero, byte-aligned rate",
				rate,
				capacity,
			),
			Error::InvalidOutputLength(len) => write!(f, "cannot produce {} output bytes", len),
			Error::MissingOutputLength(variant) => write!(f, "{} requires an output length", variant),
			Error::FixedOutputLength {variant, requested} => write!(
				f,
				"{} always produces {} bytes, {} requested",
				variant,
				variant.fixed_output_len().unwrap_or_default(),
				requested,
			),
			Error::InvalidRounds(rounds) => write!(f, "number of rounds must be at least 1, got {}", rounds),
			Error::UnsupportedVariant(name) => write!(f, "unsupported keccak variant {:?}", name),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[test]
fn test_display() {
	use alloc::string::ToString;

	assert_eq!(
		Error::FixedOutputLength {variant: Variant::Sha3_256, requested: 16}.to_string(),
		"SHA3-256 always produces 32 bytes, 16 requested",
	);

	assert_eq!(
		Error::MissingOutputLength(Variant::Shake128).to_string(),
		"SHAKE128 requires an output length",
	);
}
