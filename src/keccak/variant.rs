//! Runtime selection of the six SHA-3 family functions by name.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use super::sha3::{
	SHA3_224,
	SHA3_256,
	SHA3_384,
	SHA3_512,
	SHA3_SUFFIX,
	SHAKE128,
	SHAKE256,
	SHAKE_SUFFIX,
};
use super::sponge::Sponge;
use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
	Sha3_224,
	Sha3_256,
	Sha3_384,
	Sha3_512,
	Shake128,
	Shake256,
}

impl Variant {
	pub const ALL: [Variant; 6] = [
		Variant::Sha3_224,
		Variant::Sha3_256,
		Variant::Sha3_384,
		Variant::Sha3_512,
		Variant::Shake128,
		Variant::Shake256,
	];

	pub fn name(self) -> &'static str {
		match self {
			Variant::Sha3_224 => "SHA3-224",
			Variant::Sha3_256 => "SHA3-256",
			Variant::Sha3_384 => "SHA3-384",
			Variant::Sha3_512 => "SHA3-512",
			Variant::Shake128 => "SHAKE128",
			Variant::Shake256 => "SHAKE256",
		}
	}

	pub(crate) fn sponge(self) -> Sponge {
		match self {
			Variant::Sha3_224 => SHA3_224,
			Variant::Sha3_256 => SHA3_256,
			Variant::Sha3_384 => SHA3_384,
			Variant::Sha3_512 => SHA3_512,
			Variant::Shake128 => SHAKE128,
			Variant::Shake256 => SHAKE256,
		}
	}

	/// Rate in bits.
	pub fn rate(self) -> usize {
		self.sponge().rate()
	}

	/// Capacity in bits.
	pub fn capacity(self) -> usize {
		self.sponge().capacity()
	}

	pub fn is_shake(self) -> bool {
		matches!(self, Variant::Shake128 | Variant::Shake256)
	}

	pub fn delimited_suffix(self) -> u8 {
		if self.is_shake() {
			SHAKE_SUFFIX
		} else {
			SHA3_SUFFIX
		}
	}

	/// Digest size in bytes, `None` for the extendable-output functions.
	pub fn fixed_output_len(self) -> Option<usize> {
		match self {
			Variant::Sha3_224 => Some(28),
			Variant::Sha3_256 => Some(32),
			Variant::Sha3_384 => Some(48),
			Variant::Sha3_512 => Some(64),
			Variant::Shake128 | Variant::Shake256 => None,
		}
	}

	fn resolve_output_len(self, output_len: Option<usize>) -> Result<usize, Error> {
		match (self.fixed_output_len(), output_len) {
			(Some(fixed), None) => Ok(fixed),
			(Some(fixed), Some(requested)) if requested == fixed => Ok(fixed),
			(Some(_), Some(requested)) => Err(Error::FixedOutputLength {variant: self, requested}),
			(None, Some(requested)) => Ok(requested),
			(None, None) => Err(Error::MissingOutputLength(self)),
		}
	}

	/// Hashes `bytes`. SHAKE variants need `output_len`; SHA-3 variants
	/// accept either nothing or their own digest size.
	pub fn digest(self, bytes: &[u8], output_len: Option<usize>) -> Result<Vec<u8>, Error> {
		let output_len = self.resolve_output_len(output_len)?;

		self.sponge().hash(bytes, self.delimited_suffix(), output_len)
	}

	/// Hashes `bytes`, then hashes the result again, `rounds` times in total.
	pub fn digest_rounds(self, bytes: &[u8], rounds: u32, output_len: Option<usize>) -> Result<Vec<u8>, Error> {
		if rounds == 0 {
			return Err(Error::InvalidRounds(rounds));
		}

		let mut digest = self.digest(bytes, output_len)?;

		for _ in 1 .. rounds {
			digest = self.digest(&digest, output_len)?;
		}

		Ok(digest)
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Variant {
	type Err = Error;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Variant::ALL
			.into_iter()
			.find(|variant| variant.name() == name)
			.ok_or_else(|| Error::UnsupportedVariant(name.to_string()))
	}
}

#[test]
fn test_parameters() {
	let expected = [
		(Variant::Sha3_224, 1152, 448, 0x06),
		(Variant::Sha3_256, 1088, 512, 0x06),
		(Variant::Sha3_384, 832, 768, 0x06),
		(Variant::Sha3_512, 576, 1024, 0x06),
		(Variant::Shake128, 1344, 256, 0x1f),
		(Variant::Shake256, 1088, 512, 0x1f),
	];

	for (variant, rate, capacity, suffix) in expected {
		assert_eq!(variant.rate(), rate);
		assert_eq!(variant.capacity(), capacity);
		assert_eq!(variant.delimited_suffix(), suffix);
	}
}

#[test]
fn test_names_round_trip() {
	for variant in Variant::ALL {
		assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
	}

	assert_eq!(
		"SHA-256".parse::<Variant>(),
		Err(Error::UnsupportedVariant("SHA-256".to_string())),
	);
}

#[test]
fn test_output_len_rules() {
	assert_eq!(Variant::Sha3_384.digest(b"abc", None).unwrap().len(), 48);
	assert_eq!(Variant::Sha3_384.digest(b"abc", Some(48)).unwrap().len(), 48);

	assert_eq!(
		Variant::Sha3_384.digest(b"abc", Some(32)),
		Err(Error::FixedOutputLength {variant: Variant::Sha3_384, requested: 32}),
	);

	assert_eq!(
		Variant::Shake256.digest(b"abc", None),
		Err(Error::MissingOutputLength(Variant::Shake256)),
	);

	assert_eq!(Variant::Shake256.digest(b"abc", Some(7)).unwrap().len(), 7);
}

#[test]
fn test_digest_matches_free_functions() {
	use super::sha3::{sha3_512, shake128};

	assert_eq!(Variant::Sha3_512.digest(b"abc", None).unwrap(), sha3_512(b"abc"));
	assert_eq!(Variant::Shake128.digest(b"abc", Some(99)).unwrap(), shake128(b"abc", 99).unwrap());
}

#[test]
fn test_rounds() {
	assert_eq!(
		Variant::Sha3_256.digest_rounds(b"abc", 0, None),
		Err(Error::InvalidRounds(0)),
	);

	assert_eq!(
		Variant::Sha3_256.digest_rounds(b"abc", 1, None),
		Variant::Sha3_256.digest(b"abc", None),
	);

	let twice = Variant::Shake128.digest(&Variant::Shake128.digest(b"abc", Some(31)).unwrap(), Some(31));
	assert_eq!(Variant::Shake128.digest_rounds(b"abc", 2, Some(31)), twice);
}
