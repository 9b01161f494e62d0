//! # Traffic-Adaptive Cellular Automaton Hash
//!
//! A 256-bit digest computed by evolving a one-dimensional cellular automaton
//! whose rule, neighborhood radius and number of generations follow the
//! traffic conditions supplied with each call.
//!
//! Not a vetted cryptographic primitive: it is a teaching hash for a
//! demonstration traffic-light blockchain.
//!
//! ## Pipeline
//!
//! - **Seed**: input bits MSB-first, truncated to 256 or padded from
//!   `SHA-256(input || floor(density * 255))`
//! - **Rule**: one of 30, 90, 110, 184 from density and signal phase
//! - **Radius**: GREEN 1, YELLOW 2, RED 3, EMERGENCY 5
//! - **Steps**: `min(256, 64 + floor(density * 64) + urgency * 10)`
//! - **Evolve**: double-buffered generations on a 256-cell ring
//! - **Extract**: 32 bytes, cell `8i` is the top bit of byte `i`
//!
//! ## Example
//!
//! ```rust
//! use tahash_core::{SignalState, TrafficContext, traffic_adaptive_hash};
//!
//! // Light traffic on green: rule 30, radius 1, 76 generations
//! let ctx = TrafficContext::new(0.2, SignalState::Green, 0);
//! let digest = traffic_adaptive_hash("block_12345_timestamp_1699800000", &ctx);
//! assert_eq!(digest.len(), 64);
//!
//! // Out-of-range values are clamped, never rejected
//! let ctx = TrafficContext::new(7.5, SignalState::parse("purple"), -3);
//! assert_eq!(ctx.density(), 1.0);
//! assert_eq!(ctx.urgency(), 0);
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! tahash-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod automaton;
mod domain;
mod params;
mod tahash;
mod traffic;

#[cfg(feature = "std")]
mod ffi;

pub use automaton::{BitVector, density_byte, extract_digest, seed};
pub use domain::{
    BlockContents, IntersectionSnapshot, aggregate_signal, block_hash_with_traffic,
    congestion_context, intersection_hash,
};
pub use params::*;
pub use tahash::{
    hash_batch, hash_bytes, leading_zero_digits, meets_difficulty, traffic_adaptive_hash,
};
pub use traffic::{
    HashParams, SignalState, TrafficContext, clamp_density, clamp_urgency, evolution_steps,
    neighborhood_radius, select_rule,
};
