//! Domain entry points: intersection snapshots and blocks
//!
//! Both wrappers reduce a structured record to a traffic context plus a
//! canonical `|`-separated string, then hash that string.
//!
//! Intersection serialization:
//!
//! ```text
//! id|timestamp|dir=STATE,dir=STATE,...|dir=count,dir=count,...|weather
//! ```
//!
//! with maps in ascending key order and `weather` printed with two decimals.
//!
//! Block serialization:
//!
//! ```text
//! index|previous_hash|timestamp|tx_1|tx_2|...|tx_n|nonce
//! ```
//!
//! An empty transaction list leaves one empty field between timestamp and
//! nonce.

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use crate::params::*;
use crate::tahash::traffic_adaptive_hash;
use crate::traffic::{SignalState, TrafficContext, clamp_density};

/// State of one intersection at one instant
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionSnapshot {
    pub intersection_id: String,
    pub timestamp: u64,
    /// Signal phase per approach ("north", "south", ...)
    pub signal_states: BTreeMap<String, SignalState>,
    /// Queued vehicles per approach
    pub vehicle_counts: BTreeMap<String, u32>,
    /// Flow multiplier, 1.0 for clear weather
    #[cfg_attr(feature = "serde", serde(default = "clear_weather"))]
    pub weather_factor: f64,
}

#[cfg(feature = "serde")]
fn clear_weather() -> f64 {
    1.0
}

impl IntersectionSnapshot {
    pub fn total_vehicles(&self) -> u32 {
        self.vehicle_counts.values().fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    /// Vehicles over capacity, scaled by weather, in [0, 1]
    pub fn density(&self) -> f64 {
        let load = (self.total_vehicles() as f64 / INTERSECTION_CAPACITY).min(1.0);
        clamp_density(load * self.weather_factor)
    }

    /// Aggregate phase across all approaches, see [`aggregate_signal`]
    pub fn overall_signal(&self) -> SignalState {
        aggregate_signal(self.signal_states.values().copied())
    }

    /// One urgency level per four queued vehicles, at most 10
    pub fn urgency(&self) -> u32 {
        (self.total_vehicles() / VEHICLES_PER_URGENCY).min(MAX_URGENCY)
    }

    pub fn traffic_context(&self) -> TrafficContext {
        TrafficContext::new(self.density(), self.overall_signal(), self.urgency() as i64)
    }

    /// Canonical pre-image of the intersection hash
    pub fn serialize(&self) -> String {
        let signals = join_pairs(self.signal_states.iter().map(|(k, v)| (k, v.as_str())));
        let counts = join_pairs(self.vehicle_counts.iter());

        let sep = FIELD_SEPARATOR;
        format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{:.2}",
            self.intersection_id, self.timestamp, signals, counts, self.weather_factor
        )
    }
}

/// Merge per-approach phases: RED if any approach is red, else YELLOW if
/// any is yellow, else GREEN.
///
/// EMERGENCY and unrecognized phases never become the aggregate.
pub fn aggregate_signal<I>(states: I) -> SignalState
where
    I: IntoIterator<Item = SignalState>,
{
    states
        .into_iter()
        .fold(SignalState::Green, |acc, state| match (acc, state) {
            (SignalState::Red, _) | (_, SignalState::Red) => SignalState::Red,
            (SignalState::Yellow, _) | (_, SignalState::Yellow) => SignalState::Yellow,
            _ => SignalState::Green,
        })
}

fn join_pairs<K, V, I>(pairs: I) -> String
where
    K: core::fmt::Display,
    V: core::fmt::Display,
    I: Iterator<Item = (K, V)>,
{
    pairs
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Hash an intersection snapshot
pub fn intersection_hash(snapshot: &IntersectionSnapshot) -> String {
    traffic_adaptive_hash(&snapshot.serialize(), &snapshot.traffic_context())
}

/// Block fields that enter the block hash
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockContents {
    pub index: u64,
    pub previous_hash: String,
    pub timestamp: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transactions: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nonce: u64,
}

impl BlockContents {
    /// Canonical pre-image of the block hash
    pub fn serialize(&self) -> String {
        let sep = FIELD_SEPARATOR;
        let tx_data = self.transactions.join(&sep.to_string());
        format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.index, self.previous_hash, self.timestamp, tx_data, self.nonce
        )
    }
}

/// Traffic context a network congestion level maps to.
///
/// Congestion is used directly as density. The phase is GREEN below 0.3,
/// YELLOW below 0.7 and RED above; urgency is `floor(congestion * 10)`.
pub fn congestion_context(congestion: f64) -> TrafficContext {
    let congestion = clamp_density(congestion);
    let signal = if congestion < LOW_DENSITY {
        SignalState::Green
    } else if congestion < HIGH_DENSITY {
        SignalState::Yellow
    } else {
        SignalState::Red
    };
    let urgency = (congestion * MAX_URGENCY as f64) as i64;
    TrafficContext::new(congestion, signal, urgency)
}

/// Hash a block, with hashing effort tuned by network congestion
pub fn block_hash_with_traffic(block: &BlockContents, congestion: f64) -> String {
    traffic_adaptive_hash(&block.serialize(), &congestion_context(congestion))
}
