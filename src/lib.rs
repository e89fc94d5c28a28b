#![cfg_attr(not(feature = "std"), no_std)]

//! A reference keccak sponge with the SHA-3 and SHAKE functions built on it,
//! plus generators that print known-answer vectors for checking other hash
//! libraries against.

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

extern crate alloc;

pub mod keccak;

#[cfg(feature = "vectors")]
pub mod vectors;

mod error;

pub use error::Error;

#[doc(inline)]
pub use keccak::sha3::{
	sha3_224,
	sha3_256,
	sha3_384,
	sha3_512,
	shake128,
	shake128_into,
	shake256,
	shake256_into,
};

#[doc(inline)]
pub use keccak::sponge::{keccak, Sponge};

#[doc(inline)]
pub use keccak::variant::Variant;
