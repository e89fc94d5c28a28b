//! Generators for the known-answer vectors printed by the `keccak-vectors`
//! binary.
//!
//! SHA-1, SHA-2 and HMAC come from the RustCrypto crates; only the keccak
//! family is computed by this crate.

use std::borrow::Cow;
use std::fmt;

use clap::ValueEnum;

mod hmac;
mod rounds;
mod shake;

pub use self::hmac::hmac_vectors;
pub use self::rounds::round_vectors;
pub use self::shake::shake_vectors;

/// SHAKE output lengths in bytes used when none are given.
pub const DEFAULT_SHAKE_LENGTHS: [usize; 2] = [31, 63];

const MEDIUM_TEXT: &str = "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

/// One labelled digest, rendered as `label: hex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vector {
	pub label: String,
	pub hex: String,
}

impl Vector {
	pub fn new(label: impl Into<String>, digest: &[u8]) -> Self {
		Self {
			label: label.into(),
			hex: hex::encode(digest),
		}
	}
}

impl fmt::Display for Vector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.label, self.hex)
	}
}

/// How text input is turned into bytes before hashing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
	Utf8,
	Utf16Be,
	Utf16Le,
}

impl Encoding {
	pub const ALL: [Encoding; 3] = [Encoding::Utf8, Encoding::Utf16Be, Encoding::Utf16Le];

	pub fn name(self) -> &'static str {
		match self {
			Encoding::Utf8 => "UTF-8",
			Encoding::Utf16Be => "UTF-16BE",
			Encoding::Utf16Le => "UTF-16LE",
		}
	}

	pub fn encode(self, text: &str) -> Vec<u8> {
		match self {
			Encoding::Utf8 => text.as_bytes().to_vec(),
			Encoding::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
			Encoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
		}
	}
}

/// The standard short, two-block and million-character test messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
	Short,
	Medium,
	Long,
}

impl Message {
	pub const ALL: [Message; 3] = [Message::Short, Message::Medium, Message::Long];

	pub fn name(self) -> &'static str {
		match self {
			Message::Short => "Short",
			Message::Medium => "Medium",
			Message::Long => "Long",
		}
	}

	pub fn text(self) -> Cow<'static, str> {
		match self {
			Message::Short => Cow::Borrowed("abc"),
			Message::Medium => Cow::Borrowed(MEDIUM_TEXT),
			Message::Long => Cow::Owned("a".repeat(1_000_000)),
		}
	}
}

#[test]
fn test_encodings() {
	assert_eq!(Encoding::Utf8.encode("aé"), [0x61, 0xc3, 0xa9]);
	assert_eq!(Encoding::Utf16Be.encode("aé"), [0x00, 0x61, 0x00, 0xe9]);
	assert_eq!(Encoding::Utf16Le.encode("aé"), [0x61, 0x00, 0xe9, 0x00]);
	assert_eq!(Encoding::Utf16Be.encode("\u{1f600}"), [0xd8, 0x3d, 0xde, 0x00]);
}

#[test]
fn test_messages() {
	assert_eq!(Message::Short.text(), "abc");
	assert_eq!(Message::Medium.text().len(), 112);
	assert_eq!(Message::Long.text().len(), 1_000_000);
}

#[test]
fn test_vector_display() {
	let vector = Vector::new("SHA3-256 with 1 Rounds", &[0xde, 0xad, 0x01]);

	assert_eq!(vector.to_string(), "SHA3-256 with 1 Rounds: dead01");
}
