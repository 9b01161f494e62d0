//! Traffic-adaptive hash pipeline
//!
//! seed -> {rule, radius, steps} -> evolve (steps times) -> extract.
//!
//! Every call builds its own state from scratch and shares nothing with other
//! calls, so hashing from several threads at once needs no locking.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::automaton::{extract_digest, seed};
use crate::params::DIGEST_SIZE;
use crate::traffic::{HashParams, TrafficContext};

/// Hash raw bytes under the given traffic conditions
pub fn hash_bytes(input: &[u8], ctx: &TrafficContext) -> [u8; DIGEST_SIZE] {
    let params = HashParams::for_context(ctx);
    log::trace!(
        "tahash: {} bytes, density={} signal={} urgency={} -> rule={} radius={} steps={}",
        input.len(),
        ctx.density(),
        ctx.signal(),
        ctx.urgency(),
        params.rule,
        params.radius,
        params.steps
    );

    let initial = seed(input, ctx.density());
    let last = initial.evolve_n(params.rule, params.radius, params.steps);
    extract_digest(&last)
}

/// Hash UTF-8 text and render the digest as 64 lowercase hex characters
pub fn traffic_adaptive_hash(input: &str, ctx: &TrafficContext) -> String {
    hex::encode(hash_bytes(input.as_bytes(), ctx))
}

/// Hash many inputs under one context, in parallel
#[cfg(feature = "parallel")]
pub fn hash_batch(inputs: &[&[u8]], ctx: &TrafficContext) -> Vec<[u8; DIGEST_SIZE]> {
    inputs.par_iter().map(|input| hash_bytes(input, ctx)).collect()
}

/// Hash many inputs under one context (sequential fallback)
#[cfg(not(feature = "parallel"))]
pub fn hash_batch(inputs: &[&[u8]], ctx: &TrafficContext) -> Vec<[u8; DIGEST_SIZE]> {
    inputs.iter().map(|input| hash_bytes(input, ctx)).collect()
}

/// Count leading '0' characters of the digest's hex rendering
pub fn leading_zero_digits(hash: &[u8; DIGEST_SIZE]) -> u32 {
    let mut digits = 0u32;

    for byte in hash.iter() {
        if *byte == 0 {
            digits += 2;
        } else {
            if *byte < 0x10 {
                digits += 1;
            }
            break;
        }
    }

    digits
}

/// Check if a hash meets the required difficulty
///
/// Difficulty is the number of leading '0' hex digits required, the target
/// used by the mining simulation.
///
/// # Example
///
/// ```rust
/// use tahash_core::meets_difficulty;
///
/// let mut hash = [0xFFu8; 32];
/// hash[0] = 0x00;
/// hash[1] = 0x0A;
/// assert!(meets_difficulty(&hash, 3));
/// assert!(!meets_difficulty(&hash, 4));
/// ```
#[inline(always)]
pub fn meets_difficulty(hash: &[u8; DIGEST_SIZE], difficulty: u32) -> bool {
    leading_zero_digits(hash) >= difficulty
}
