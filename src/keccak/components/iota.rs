use super::super::Lanes;
use super::super::round_constants::ROUND_CONSTANTS;

pub fn iota(lanes: &mut Lanes, round_number: usize) {
	lanes[0][0] ^= ROUND_CONSTANTS[round_number];
}
