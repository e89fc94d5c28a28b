//! Prints known-answer vectors for SHA-1, SHA-2, HMAC, SHA-3 and SHAKE.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keccak_vectors::vectors::{self, Encoding, Vector, DEFAULT_SHAKE_LENGTHS};
use keccak_vectors::Variant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "keccak-vectors", version)]
#[command(about = "Generate hash test vectors for validating other hash libraries")]
struct Cli {
	#[command(subcommand)]
	cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
	/// SHAKE128/SHAKE256 over the standard messages in every encoding
	Shake {
		/// Output lengths in bytes
		#[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SHAKE_LENGTHS)]
		lengths: Vec<usize>,
	},

	/// Every hash iterated over "abc", after 5 and 10 rounds
	Rounds,

	/// HMAC with the FIPS 198a sample keys
	Hmac,

	/// Shake, rounds and hmac vectors together
	All,

	/// Hash a single input with one SHA-3 family function
	Digest {
		/// SHA3-224, SHA3-256, SHA3-384, SHA3-512, SHAKE128 or SHAKE256
		variant: Variant,

		/// Text to hash, or hex bytes with --hex
		input: String,

		/// Output length in bytes (required for SHAKE)
		#[arg(long)]
		length: Option<usize>,

		/// Number of times to apply the hash
		#[arg(long, default_value_t = 1)]
		rounds: u32,

		#[arg(long, value_enum, default_value_t = Encoding::Utf8, conflicts_with = "hex_input")]
		encoding: Encoding,

		/// Treat the input as hex-encoded bytes
		#[arg(long = "hex")]
		hex_input: bool,
	},
}

fn print(vectors: &[Vector]) {
	for vector in vectors {
		println!("{}", vector);
	}
}

fn main() -> Result<()> {
	let _ = fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.try_init();

	let cli = Cli::parse();

	match cli.cmd {
		Cmd::Shake {lengths} => {
			print(&vectors::shake_vectors(&lengths)?);
		}
		Cmd::Rounds => {
			print(&vectors::round_vectors()?);
		}
		Cmd::Hmac => {
			print(&vectors::hmac_vectors()?);
		}
		Cmd::All => {
			print(&vectors::shake_vectors(&DEFAULT_SHAKE_LENGTHS)?);
			print(&vectors::round_vectors()?);
			print(&vectors::hmac_vectors()?);
		}
		Cmd::Digest {variant, input, length, rounds, encoding, hex_input} => {
			let bytes = if hex_input {
				hex::decode(input.trim()).context("input is not valid hex")?
			} else {
				encoding.encode(&input)
			};

			info!(%variant, input_len = bytes.len(), rounds, "hashing");

			let digest = variant
				.digest_rounds(&bytes, rounds, length)
				.with_context(|| format!("failed to compute {}", variant))?;

			println!("{}", hex::encode(digest));
		}
	}

	Ok(())
}
