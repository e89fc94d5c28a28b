#![cfg(feature = "vectors")]

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn cli() -> Command {
	let mut cmd = Command::cargo_bin("keccak-vectors").unwrap();
	cmd.env("RUST_LOG", "warn");
	cmd
}

#[test]
fn test_help() {
	cli()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Generate hash test vectors"));
}

#[test]
fn test_digest_text() {
	cli()
		.args(["digest", "SHA3-256", "abc"])
		.assert()
		.success()
		.stdout("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532\n");
}

#[test]
fn test_digest_hex_input_with_rounds() {
	// 616263 is "abc"
	cli()
		.args(["digest", "SHAKE128", "616263", "--hex", "--length", "31", "--rounds", "10"])
		.assert()
		.success()
		.stdout("5a5aeb2022e0e92ef4da3dc3e261a9303224b65cf6666f87a4d395a4ab94fe\n");
}

#[test]
fn test_digest_shake_needs_length() {
	cli()
		.args(["digest", "SHAKE256", "abc"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("SHAKE256 requires an output length"));
}

#[test]
fn test_unknown_variant() {
	cli()
		.args(["digest", "SHA3-100", "abc"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("unsupported keccak variant"));
}

#[test]
fn test_hmac_listing() {
	cli()
		.arg("hmac")
		.assert()
		.success()
		.stdout(predicate::str::starts_with(
			"SHA-1 Short Key Result: 0922d3405faa3d194f82a45830737d5cc6c75d24\n",
		))
		.stdout(predicate::function(|out: &str| out.lines().count() == 15));
}

#[test]
fn test_shake_listing_with_custom_lengths() {
	cli()
		.args(["shake", "--lengths", "16"])
		.assert()
		.success()
		.stdout(predicate::function(|out: &str| {
			out.lines().count() == 18 && out.lines().all(|line| line.contains("128 bit Output"))
		}));
}
