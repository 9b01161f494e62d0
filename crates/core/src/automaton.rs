//! 256-cell ring automaton
//!
//! The state is packed into four big-endian `u64` words: cell 0 is the most
//! significant bit of word 0, cell 255 the least significant bit of word 3.
//! With that layout the seeder and the digest extractor are plain byte
//! copies, since both use MSB-first bit order.

use sha2::{Digest, Sha256};

use crate::params::{DIGEST_SIZE, STATE_BITS};

const WORDS: usize = STATE_BITS / 64;

/// Mask for ring indexing (STATE_BITS is a power of two)
const INDEX_MASK: usize = STATE_BITS - 1;

/// One generation of the automaton: exactly 256 cells on a ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitVector {
    words: [u64; WORDS],
}

impl BitVector {
    /// All cells zero
    pub const fn zero() -> Self {
        Self { words: [0; WORDS] }
    }

    /// Interpret 32 bytes as cells, MSB-first
    pub fn from_bytes(bytes: &[u8; DIGEST_SIZE]) -> Self {
        let mut words = [0u64; WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            // chunks_exact(8) yields 8-byte slices only
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_be_bytes(buf);
        }
        Self { words }
    }

    /// Pack cells into 32 bytes; byte `i` holds cells `8i..8i+7`, MSB-first
    pub fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        let mut out = [0u8; DIGEST_SIZE];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Cell value at `index`, taken modulo 256
    #[inline(always)]
    pub fn get(&self, index: usize) -> bool {
        let index = index & INDEX_MASK;
        (self.words[index / 64] >> (63 - index % 64)) & 1 == 1
    }

    /// Set the cell at `index`, taken modulo 256
    #[inline(always)]
    pub fn set(&mut self, index: usize, value: bool) {
        let index = index & INDEX_MASK;
        let mask = 1u64 << (63 - index % 64);
        if value {
            self.words[index / 64] |= mask;
        } else {
            self.words[index / 64] &= !mask;
        }
    }

    /// Number of live cells
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Neighborhood of cell `i` as an integer.
    ///
    /// Reads the `2 * radius + 1` cells at offsets `-radius..=radius` with
    /// wrap-around; the cell at `-radius` becomes the most significant bit.
    #[inline(always)]
    pub fn window(&self, i: usize, radius: usize) -> usize {
        // Adding STATE_BITS keeps the left edge non-negative for radius <= 256
        let start = i + STATE_BITS - (radius % STATE_BITS);
        (0..=2 * radius).fold(0usize, |acc, k| (acc << 1) | self.get(start + k) as usize)
    }

    /// Compute the next generation under `rule` with neighborhood `radius`.
    ///
    /// Radius 1 is the classical elementary lookup: bit `window` of `rule`.
    /// Wider radii mix the rule with the low byte of the window and take bit
    /// `window % 8` of the result. Every cell reads only from `self`; the
    /// next generation is built in a separate buffer and returned whole.
    pub fn evolve(&self, rule: u8, radius: usize) -> BitVector {
        let mut next = BitVector::zero();
        for i in 0..STATE_BITS {
            let window = self.window(i, radius);
            let bit = if radius == 1 {
                (rule >> window) & 1
            } else {
                let mixed = rule ^ (window & 0xFF) as u8;
                (mixed >> (window % 8)) & 1
            };
            next.set(i, bit == 1);
        }
        next
    }

    /// Run `steps` consecutive generations with a fixed rule and radius
    pub fn evolve_n(self, rule: u8, radius: usize, steps: usize) -> BitVector {
        (0..steps).fold(self, |state, _| state.evolve(rule, radius))
    }
}

/// Derive the initial 256-cell state from input bytes and a density.
///
/// Input bits fill the ring MSB-first. Anything past 256 bits is dropped.
/// Shorter inputs are padded with the bits of
/// `SHA-256(input || floor(density * 255))`, repeated as needed. Since the
/// input is a whole number of bytes the padding always starts on a byte
/// boundary, so the bit stream can be assembled byte by byte.
pub fn seed(input: &[u8], density: f64) -> BitVector {
    let mut bytes = [0u8; DIGEST_SIZE];

    if input.len() >= DIGEST_SIZE {
        bytes.copy_from_slice(&input[..DIGEST_SIZE]);
        return BitVector::from_bytes(&bytes);
    }

    let pad = padding_stream(input, density);
    let used = input.len();
    bytes[..used].copy_from_slice(input);
    for (dst, src) in bytes[used..].iter_mut().zip(pad.iter().cycle()) {
        *dst = *src;
    }

    BitVector::from_bytes(&bytes)
}

/// Density byte appended to the padding preimage
#[inline(always)]
pub fn density_byte(density: f64) -> u8 {
    (density.clamp(0.0, 1.0) * 255.0) as u8
}

fn padding_stream(input: &[u8], density: f64) -> [u8; DIGEST_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.update([density_byte(density)]);
    hasher.finalize().into()
}

/// Pack the final generation into the 32-byte digest
#[inline(always)]
pub fn extract_digest(state: &BitVector) -> [u8; DIGEST_SIZE] {
    state.to_bytes()
}
