use super::super::Lanes;

pub fn chi(lanes: &mut Lanes) {
	for y in 0 .. 5 {
		let row = [lanes[0][y], lanes[1][y], lanes[2][y], lanes[3][y], lanes[4][y]];

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			lanes[x][y] = row[x] ^ (!row[xp1] & row[xp2]);
		}
	}
}

#[test]
fn test_zero_state_is_fixed() {
	let mut lanes = [[0; 5]; 5];
	chi(&mut lanes);

	assert_eq!(lanes, [[0; 5]; 5]);
}

#[test]
fn test_rows_are_independent() {
	let mut lanes = [[0; 5]; 5];
	lanes[2][3] = u64::MAX;

	chi(&mut lanes);

	// only row 3 changes: x = 0 sees !lanes[1] & lanes[2]
	assert_eq!(lanes[0][3], u64::MAX);
	assert_eq!(lanes[1][3], 0);
	assert_eq!(lanes[2][3], u64::MAX);
	assert_eq!(lanes[2][2], 0);
	assert_eq!(lanes[0][4], 0);
}
