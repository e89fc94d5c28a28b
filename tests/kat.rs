use hex_literal::hex;
use keccak_vectors::{sha3_224, sha3_256, sha3_384, sha3_512, shake128, shake256, Variant};

fn counting_bytes(len: usize) -> Vec<u8> {
	(0 .. len).map(|i| i as u8).collect()
}

#[test]
fn test_sha3_256_nist_vectors() {
	assert_eq!(
		sha3_256(b""),
		hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
	);

	assert_eq!(
		sha3_256(b"abc"),
		hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"),
	);
}

#[test]
fn test_sha3_512_abc() {
	assert_eq!(
		sha3_512(b"abc"),
		hex!("
			b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e
			10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0
		"),
	);
}

#[test]
fn test_million_a() {
	let input = vec![b'a'; 1_000_000];

	assert_eq!(
		sha3_256(&input),
		hex!("5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1"),
	);
}

#[test]
fn test_inputs_around_the_rate() {
	assert_eq!(
		sha3_224(&counting_bytes(143)),
		hex!("64d0e8a1be3cf30ef6727b30a6e428f7f068d44634c943d277ad8e7f"),
	);

	assert_eq!(
		sha3_224(&counting_bytes(144)),
		hex!("5be75e6a08f19913a1d8036c056cc4556b98dc90aeca3f2a0664dedc"),
	);

	assert_eq!(
		sha3_224(&counting_bytes(288)),
		hex!("e0ae33f2dd63c31ef87f219c9b80c897669974b73d8a9fe64500887b"),
	);

	assert_eq!(
		sha3_256(&counting_bytes(135)),
		hex!("fded8fd9d6551c601eeb3b7c6bc5e5cfd8aad1d015b7e9aaa9c9b9475231d5e2"),
	);

	assert_eq!(
		sha3_256(&counting_bytes(136)),
		hex!("cf3ccff92480a29160c2d38317c430e14749bfee1788106957dfe73f8c4930e5"),
	);

	assert_eq!(
		sha3_256(&counting_bytes(272)),
		hex!("0b21ec4a8eff6d179e09ba9fe0ab08515b24e0923fbf419f5c30a38e64577db5"),
	);

	assert_eq!(
		sha3_384(&counting_bytes(104)),
		hex!("
			5b8d0d5cf8b41be507be8fcbfcbdbac3a28eb368d430fed6
			780aaa78a93a8da4a6c50485949ca344f228be91a96005a3
		"),
	);

	assert_eq!(
		sha3_512(&counting_bytes(72)),
		hex!("
			5d63f2bbe971a983ac6847480106e4e1264ee3a0befd79954914e1d86e795b2e
			18238f12fc5e46cb9cc78efdec610a93647cc04e1c23d8caaa6a58c21dd26c07
		"),
	);

	assert_eq!(
		shake128(&counting_bytes(168), 32).unwrap(),
		hex!("f15277eb61c4908d44a2853f3cde071ae2ed7a23461fbe162a1a98cf6875059c"),
	);

	assert_eq!(
		shake256(&counting_bytes(136), 32).unwrap(),
		hex!("b7ff4073b3f5a8eabd6e17705ca7f6761a31058f9df781a6a47e3a3063b9d67a"),
	);
}

#[test]
fn test_shake_squeezes_several_blocks() {
	let out = shake128(b"abc", 400).unwrap();

	assert_eq!(out.len(), 400);
	assert_eq!(&out[.. 32], hex!("5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2cc8"));
	assert_eq!(&out[384 ..], hex!("6ee173e30bd4d08f2bc59c6114bdd745"));

	let out = shake256(b"abc", 400).unwrap();

	assert_eq!(&out[.. 32], hex!("483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739"));
	assert_eq!(&out[384 ..], hex!("ade16384e151755c47e822fc74c5d710"));
}

#[test]
fn test_ten_rounds_of_sha3_256() {
	let mut digest = sha3_256(b"abc");

	for _ in 0 .. 9 {
		digest = sha3_256(&digest);
	}

	assert_eq!(digest, hex!("5b814fc96d03918994939bccb796945d9683fa90a22f99350d6a964de78a7980"));

	assert_eq!(
		Variant::Sha3_256.digest_rounds(b"abc", 10, None).unwrap(),
		digest,
	);
}

#[test]
fn test_utf16_input() {
	let text = "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
	let utf16le: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();

	assert_eq!(
		shake256(&utf16le, 63).unwrap(),
		hex!("
			cade3014570c222dc6aa327be04ac8088f85fe0a177f08e48b24b6a30dc0783f
			d4bdef46fddd440dba74b8dd5b524b9530d85e2a30e2e35a1bee69f7c7ed9a
		"),
	);
}
