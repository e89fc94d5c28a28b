use super::super::Lanes;
use super::super::round_constants::RHO_PI_STEPS;

/// Rotates every lane but `[0][0]` and moves it to its pi position in a
/// single walk, carrying the displaced lane forward.
pub fn rho_pi(lanes: &mut Lanes) {
	let mut current = lanes[1][0];

	for step in RHO_PI_STEPS {
		let displaced = lanes[step.x][step.y];
		lanes[step.x][step.y] = current.rotate_left(step.rotation);
		current = displaced;
	}
}

#[cfg(test)]
fn separate_rho_pi(lanes: &Lanes) -> Lanes {
	let offsets = [
		[0, 36, 3, 41, 18],
		[1, 44, 10, 45, 2],
		[62, 6, 43, 15, 61],
		[28, 55, 25, 21, 56],
		[27, 20, 39, 8, 14],
	];

	let mut out = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			out[y][(2 * x + 3 * y) % 5] = lanes[x][y].rotate_left(offsets[x][y]);
		}
	}

	out
}

#[test]
fn test_matches_separate_rho_then_pi() {
	let mut lanes = [[0; 5]; 5];
	let mut seed = 0x0123456789abcdefu64;

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
			lanes[x][y] = seed;
		}
	}

	let expected = separate_rho_pi(&lanes);
	rho_pi(&mut lanes);

	assert_eq!(lanes, expected);
}
