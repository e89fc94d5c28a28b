//! Conversions between the 200-byte keccak state and its 5×5 lane matrix.
//!
//! Lane `(x, y)` lives at byte offset `8 * (x + 5 * y)`, stored little-endian.

use super::{Lanes, State};

fn lane_offset(x: usize, y: usize) -> usize {
	8 * (x + 5 * y)
}

pub fn load_lane(state: &State, x: usize, y: usize) -> u64 {
	let mut bytes = [0; 8];
	bytes.copy_from_slice(&state[lane_offset(x, y) ..][.. 8]);

	u64::from_le_bytes(bytes)
}

pub fn store_lane(state: &mut State, x: usize, y: usize, lane: u64) {
	state[lane_offset(x, y) ..][.. 8].copy_from_slice(&lane.to_le_bytes());
}

pub fn load_lanes(state: &State) -> Lanes {
	let mut lanes = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			lanes[x][y] = load_lane(state, x, y);
		}
	}

	lanes
}

pub fn store_lanes(lanes: &Lanes, state: &mut State) {
	for x in 0 .. 5 {
		for y in 0 .. 5 {
			store_lane(state, x, y, lanes[x][y]);
		}
	}
}

#[test]
fn test_lane_byte_order() {
	let mut state = [0; 200];
	state[8] = 0x01;
	state[15] = 0x80;

	assert_eq!(load_lane(&state, 1, 0), 0x8000000000000001);
	assert_eq!(load_lane(&state, 0, 0), 0);

	store_lane(&mut state, 2, 3, 0x0706050403020100);

	assert_eq!(&state[136 .. 144], &[0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_load_store_lanes() {
	let mut state = [0; 200];

	for (i, byte) in state.iter_mut().enumerate() {
		*byte = (i * 7) as u8;
	}

	let lanes = load_lanes(&state);
	let mut restored = [0; 200];
	store_lanes(&lanes, &mut restored);

	assert_eq!(state, restored);
	assert_eq!(lanes[4][4], load_lane(&state, 4, 4));
}
