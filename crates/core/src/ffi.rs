//! C FFI bindings for mobile platforms

use crate::params::DIGEST_SIZE;
use crate::tahash::hash_bytes;
use crate::traffic::{SignalState, TrafficContext};
use core::slice;

/// Compute the traffic-adaptive hash of input data
/// - input: pointer to input bytes (may be null when input_len is 0)
/// - input_len: length of input
/// - density: traffic density, clamped to [0, 1]
/// - signal_code: 0 GREEN, 1 YELLOW, 2 RED, 3 EMERGENCY, anything else unrecognized
/// - urgency: urgency level, clamped to [0, 10]
/// - output: pointer to 32-byte buffer for result
#[unsafe(no_mangle)]
pub extern "C" fn tahash_hash(
    input: *const u8,
    input_len: usize,
    density: f64,
    signal_code: u8,
    urgency: i32,
    output: *mut u8,
) {
    if output.is_null() || (input.is_null() && input_len != 0) {
        return;
    }

    let ctx = TrafficContext::new(density, SignalState::from_code(signal_code), urgency as i64);

    unsafe {
        let input_slice: &[u8] = if input_len == 0 {
            &[]
        } else {
            slice::from_raw_parts(input, input_len)
        };
        let result = hash_bytes(input_slice, &ctx);

        let output_slice = slice::from_raw_parts_mut(output, DIGEST_SIZE);
        output_slice.copy_from_slice(&result);
    }
}

/// Time `iterations` hashes under one traffic profile and return total
/// microseconds. Each input is a fixed prefix followed by the iteration
/// counter, so every hash runs the full rule, radius and step schedule of the
/// profile.
/// - signal_code, density, urgency: as for `tahash_hash`
#[unsafe(no_mangle)]
pub extern "C" fn tahash_benchmark(
    iterations: u32,
    density: f64,
    signal_code: u8,
    urgency: i32,
) -> u64 {
    use std::time::Instant;

    let ctx = TrafficContext::new(density, SignalState::from_code(signal_code), urgency as i64);
    let prefix = b"tahash mobile benchmark ";
    let mut data = Vec::with_capacity(prefix.len() + 4);

    let start = Instant::now();
    for i in 0..iterations {
        data.clear();
        data.extend_from_slice(prefix);
        data.extend_from_slice(&i.to_be_bytes());
        let _ = hash_bytes(&data, &ctx);
    }

    start.elapsed().as_micros().min(u64::MAX as u128) as u64
}

/// Hashes per second for a `tahash_benchmark` result, 0 when no time elapsed
#[unsafe(no_mangle)]
pub extern "C" fn tahash_hashrate(iterations: u32, microseconds: u64) -> f64 {
    if microseconds == 0 {
        return 0.0;
    }
    iterations as f64 * 1_000_000.0 / microseconds as f64
}
