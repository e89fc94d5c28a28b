use super::super::Lanes;

pub fn theta(lanes: &mut Lanes) {
	let mut parities = [0u64; 5];

	for x in 0 .. 5 {
		parities[x] = lanes[x][0] ^ lanes[x][1] ^ lanes[x][2] ^ lanes[x][3] ^ lanes[x][4];
	}

	for x in 0 .. 5 {
		let xm1 = (x + 4) % 5;
		let xp1 = (x + 1) % 5;

		let crossed_parities = parities[xm1] ^ parities[xp1].rotate_left(1);

		for y in 0 .. 5 {
			lanes[x][y] ^= crossed_parities;
		}
	}
}

#[test]
fn test_single_bit_spreads_to_neighbouring_columns() {
	let mut lanes = [[0; 5]; 5];
	lanes[0][0] = 1;

	theta(&mut lanes);

	// column 1 picks up the parity of column 0, column 4 its rotation
	for y in 0 .. 5 {
		assert_eq!(lanes[1][y], 1);
		assert_eq!(lanes[4][y], 2);
		assert_eq!(lanes[2][y], 0);
		assert_eq!(lanes[3][y], 0);
	}

	assert_eq!(lanes[0][0], 1);
	assert_eq!(lanes[0][1], 0);
}
