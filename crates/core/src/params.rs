//! Traffic-adaptive hash parameters
//!
//! Fixed sizes and the constants behind rule, radius and step selection.

/// Number of cells in the automaton ring
pub const STATE_BITS: usize = 256;

/// Digest size in bytes
pub const DIGEST_SIZE: usize = STATE_BITS / 8;

/// Length of the rendered hex digest
pub const HEX_DIGEST_LEN: usize = DIGEST_SIZE * 2;

/// Chaotic rule, light traffic on green
pub const RULE_30: u8 = 30;

/// XOR rule, the "other states" fallback
pub const RULE_90: u8 = 90;

/// Complex rule for yellow and congested red
pub const RULE_110: u8 = 110;

/// Traffic-flow rule for emergencies and congestion
pub const RULE_184: u8 = 184;

/// The rule universe the selector draws from
pub const RULES: [u8; 4] = [RULE_30, RULE_90, RULE_110, RULE_184];

/// Upper density bound of the light-traffic band (exclusive)
pub const LOW_DENSITY: f64 = 0.3;

/// Upper density bound of the medium-traffic band (exclusive)
pub const HIGH_DENSITY: f64 = 0.7;

/// Largest neighborhood radius (EMERGENCY)
pub const MAX_RADIUS: usize = 5;

/// Generations run at zero density and zero urgency
pub const BASE_STEPS: usize = 64;

/// Extra generations per unit of density
pub const DENSITY_STEPS: f64 = 64.0;

/// Extra generations per urgency level
pub const URGENCY_STEPS: usize = 10;

/// Hard cap on generations, applied after the sum
pub const MAX_STEPS: usize = 256;

/// Highest accepted urgency level
pub const MAX_URGENCY: u32 = 10;

/// Vehicles an intersection holds at full density
pub const INTERSECTION_CAPACITY: f64 = 40.0;

/// Vehicles per urgency level at an intersection
pub const VEHICLES_PER_URGENCY: u32 = 4;

/// Field separator of canonical serializations
pub const FIELD_SEPARATOR: char = '|';
