/// One step of the fused rho and pi pass: the running lane is rotated by
/// `rotation` and written to `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RhoPiStep {
	pub x: usize,
	pub y: usize,
	pub rotation: u32,
}

const fn step_lfsr(register: u8) -> u8 {
	(register << 1) ^ ((register >> 7) * 0x71)
}

const fn compute_round_constants() -> [u64; 24] {
	let mut register = 1;
	let mut out = [0; 24];

	let mut round = 0;

	while round < 24 {
		let mut j = 0;

		while j < 7 {
			register = step_lfsr(register);

			if register & 2 != 0 {
				out[round] ^= 1 << ((1 << j) - 1);
			}

			j += 1;
		}

		round += 1;
	}

	out
}

const fn compute_rho_pi_steps() -> [RhoPiStep; 24] {
	let mut out = [RhoPiStep {x: 0, y: 0, rotation: 0}; 24];

	let mut x = 1;
	let mut y = 0;

	let mut t = 0;

	while t < 24 {
		let new_x = y;
		let new_y = (2 * x + 3 * y) % 5;

		x = new_x;
		y = new_y;

		out[t] = RhoPiStep {
			x,
			y,
			rotation: (((t + 1) * (t + 2) / 2) % 64) as u32,
		};

		t += 1;
	}

	out
}

pub const ROUND_CONSTANTS: [u64; 24] = compute_round_constants();

/// Destinations and rotations of the fused rho/pi walk, starting from the
/// lane at `(1, 0)`.
pub const RHO_PI_STEPS: [RhoPiStep; 24] = compute_rho_pi_steps();

#[test]
fn test_round_constants() {
	assert_eq!(ROUND_CONSTANTS[0], 0x0000000000000001);
	assert_eq!(ROUND_CONSTANTS[1], 0x0000000000008082);
	assert_eq!(ROUND_CONSTANTS[2], 0x800000000000808a);
	assert_eq!(ROUND_CONSTANTS[11], 0x000000008000000a);
	assert_eq!(ROUND_CONSTANTS[19], 0x800000008000000a);
	assert_eq!(ROUND_CONSTANTS[23], 0x8000000080008008);
}

#[test]
fn test_rho_offsets_by_source_lane() {
	// rotation applied to the lane that started at [x][y]
	let expected = [
		[0, 36, 3, 41, 18],
		[1, 44, 10, 45, 2],
		[62, 6, 43, 15, 61],
		[28, 55, 25, 21, 56],
		[27, 20, 39, 8, 14],
	];

	let mut offsets = [[0; 5]; 5];
	let mut source = (1, 0);

	for step in RHO_PI_STEPS {
		offsets[source.0][source.1] = step.rotation;
		source = (step.x, step.y);
	}

	assert_eq!(offsets, expected);
	assert_eq!(source, (1, 0));
}
