//! The keccak-f\[1600\] permutation and the sponge built on top of it.

pub mod lanes;
pub mod round_constants;
pub mod sha3;
pub mod sponge;
pub mod variant;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod rho_pi;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::rho_pi::rho_pi;
use components::theta::theta;

/// Number of rounds of keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Size of the keccak state in bytes.
pub const STATE_BYTES: usize = 200;

/// The state as a 5×5 matrix of 64-bit lanes, indexed `[x][y]`.
pub type Lanes = [[u64; 5]; 5];

/// The state as raw bytes.
pub type State = [u8; STATE_BYTES];

pub fn keccak_f1600_on_lanes(lanes: &mut Lanes) {
	for round in 0 .. ROUNDS {
		theta(lanes);
		rho_pi(lanes);
		chi(lanes);
		iota(lanes, round);
	}
}

pub fn keccak_f1600(state: &mut State) {
	let mut lanes = lanes::load_lanes(state);
	keccak_f1600_on_lanes(&mut lanes);
	lanes::store_lanes(&lanes, state);
}

#[test]
fn test_permutation_of_zero_state() {
	let mut lanes = [[0; 5]; 5];
	keccak_f1600_on_lanes(&mut lanes);

	assert_eq!(lanes[0][0], 0xf1258f7940e1dde7);
	assert_eq!(lanes[1][0], 0x84d5ccf933c0478a);
	assert_eq!(lanes[2][0], 0xd598261ea65aa9ee);
	assert_eq!(lanes[3][0], 0xbd1547306f80494d);
	assert_eq!(lanes[4][0], 0x8b284e056253d057);

	keccak_f1600_on_lanes(&mut lanes);

	assert_eq!(lanes[0][0], 0x2d5c954df96ecb3c);
	assert_eq!(lanes[1][0], 0x6a332cd07057b56d);
}

#[test]
fn test_permutation_on_bytes() {
	let mut state = [0; STATE_BYTES];
	keccak_f1600(&mut state);

	assert_eq!(
		&state[.. 16],
		&[
			0xe7, 0xdd, 0xe1, 0x40, 0x79, 0x8f, 0x25, 0xf1,
			0x8a, 0x47, 0xc0, 0x33, 0xf9, 0xcc, 0xd5, 0x84,
		],
	);
}
