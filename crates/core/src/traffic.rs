//! Traffic context and parameter selection
//!
//! A [`TrafficContext`] carries the three signals a caller supplies per hash:
//! density, signal state and urgency. Out-of-range values are clamped here,
//! never rejected. The selectors turn a context into the automaton's
//! rule, neighborhood radius and number of generations.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::params::*;

/// Traffic-light phase driving rule and radius selection
///
/// `Unrecognized` stands in for any phase name outside the four known ones.
/// It behaves like the default radius (1) and always lands in the selector's
/// "other states" branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "&'static str"))]
pub enum SignalState {
    #[default]
    Green,
    Yellow,
    Red,
    Emergency,
    Unrecognized,
}

impl SignalState {
    /// Parse a phase name, case-insensitively. Never fails.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("GREEN") {
            Self::Green
        } else if name.eq_ignore_ascii_case("YELLOW") {
            Self::Yellow
        } else if name.eq_ignore_ascii_case("RED") {
            Self::Red
        } else if name.eq_ignore_ascii_case("EMERGENCY") {
            Self::Emergency
        } else {
            Self::Unrecognized
        }
    }

    /// Canonical upper-case name, as used in serializations
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
            Self::Emergency => "EMERGENCY",
            Self::Unrecognized => "UNKNOWN",
        }
    }

    /// Numeric code used across the C and wasm boundaries
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Green,
            1 => Self::Yellow,
            2 => Self::Red,
            3 => Self::Emergency,
            _ => Self::Unrecognized,
        }
    }
}

impl FromStr for SignalState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for SignalState {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<SignalState> for &'static str {
    fn from(state: SignalState) -> Self {
        state.as_str()
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp a density into [0, 1].
///
/// NaN maps to 0.0 and infinities to the nearest bound.
pub fn clamp_density(density: f64) -> f64 {
    if density.is_nan() {
        log::warn!("clamp_density: NaN density, using 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&density) {
        log::warn!("clamp_density: {density} outside [0, 1], clamping");
    }
    density.clamp(0.0, 1.0)
}

/// Clamp an urgency level into [0, 10].
pub fn clamp_urgency(urgency: i64) -> u32 {
    if !(0..=MAX_URGENCY as i64).contains(&urgency) {
        log::warn!("clamp_urgency: {urgency} outside [0, {MAX_URGENCY}], clamping");
    }
    urgency.clamp(0, MAX_URGENCY as i64) as u32
}

/// Per-call traffic conditions, clamped on construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficContext {
    density: f64,
    signal: SignalState,
    urgency: u32,
}

impl TrafficContext {
    /// Build a context, clamping density and urgency into range
    pub fn new(density: f64, signal: SignalState, urgency: i64) -> Self {
        Self {
            density: clamp_density(density),
            signal,
            urgency: clamp_urgency(urgency),
        }
    }

    /// Traffic density in [0, 1]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Signal phase
    pub fn signal(&self) -> SignalState {
        self.signal
    }

    /// Urgency in [0, 10]
    pub fn urgency(&self) -> u32 {
        self.urgency
    }
}

impl Default for TrafficContext {
    /// Medium density, green light, no urgency
    fn default() -> Self {
        Self::new(0.5, SignalState::Green, 0)
    }
}

/// Pick the transition rule for a density and signal phase.
///
/// First match wins:
///
/// | condition                         | rule |
/// |-----------------------------------|------|
/// | EMERGENCY                         | 184  |
/// | density < 0.3, GREEN              | 30   |
/// | density < 0.3                     | 90   |
/// | 0.3 <= density < 0.7, YELLOW      | 110  |
/// | 0.3 <= density < 0.7              | 90   |
/// | density >= 0.7, RED               | 110  |
/// | density >= 0.7                    | 184  |
///
/// Density is clamped first, so NaN selects like 0.0.
pub fn select_rule(density: f64, signal: SignalState) -> u8 {
    if signal == SignalState::Emergency {
        return RULE_184;
    }

    let density = clamp_density(density);

    if density < LOW_DENSITY {
        match signal {
            SignalState::Green => RULE_30,
            _ => RULE_90,
        }
    } else if density < HIGH_DENSITY {
        match signal {
            SignalState::Yellow => RULE_110,
            _ => RULE_90,
        }
    } else {
        match signal {
            SignalState::Red => RULE_110,
            _ => RULE_184,
        }
    }
}

/// Neighborhood radius for a signal phase
pub fn neighborhood_radius(signal: SignalState) -> usize {
    match signal {
        SignalState::Green => 1,
        SignalState::Yellow => 2,
        SignalState::Red => 3,
        SignalState::Emergency => MAX_RADIUS,
        SignalState::Unrecognized => 1,
    }
}

/// Number of generations: `min(256, 64 + floor(density * 64) + urgency * 10)`
///
/// Density is clamped to [0, 1] and urgency to at most 10 before use.
pub fn evolution_steps(density: f64, urgency: u32) -> usize {
    let density_factor = (clamp_density(density) * DENSITY_STEPS) as usize;
    let urgency_factor = urgency.min(MAX_URGENCY) as usize * URGENCY_STEPS;

    BASE_STEPS
        .saturating_add(density_factor)
        .saturating_add(urgency_factor)
        .min(MAX_STEPS)
}

/// Automaton parameters derived from one traffic context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashParams {
    pub rule: u8,
    pub radius: usize,
    pub steps: usize,
}

impl HashParams {
    /// Run rule, radius and step selection for `ctx`
    pub fn for_context(ctx: &TrafficContext) -> Self {
        Self {
            rule: select_rule(ctx.density(), ctx.signal()),
            radius: neighborhood_radius(ctx.signal()),
            steps: evolution_steps(ctx.density(), ctx.urgency()),
        }
    }
}
