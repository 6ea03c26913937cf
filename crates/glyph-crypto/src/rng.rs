//! A bit-granular deterministic stream built on AES-256 in CTR mode.
//!
//! Both the keyed challenge derivation and ephemeral per-attempt sampling
//! pull from this same primitive — the only difference is where the key
//! comes from (a SHA-256 digest for the former, fresh OS entropy for the
//! latter). The stream buffers 16-bit little-endian keystream words and
//! hands out arbitrary-width bit groups from that buffer, matching the way
//! both the ternary sampler and the challenge encoder consume it.

use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use rand_core::RngCore;

use crate::error::GlyphError;

type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// A deterministic bitstream keyed by a 256-bit key and a 128-bit IV.
pub struct BitStream {
    cipher: Aes256Ctr,
    buf: u32,
    bits: u32,
}

impl BitStream {
    /// Start a stream from an explicit key and IV.
    #[must_use]
    pub fn new(key: [u8; 32], iv: [u8; 16]) -> Self {
        Self {
            cipher: Aes256Ctr::new((&key).into(), (&iv).into()),
            buf: 0,
            bits: 0,
        }
    }

    /// Start a stream keyed by a digest (challenge derivation), IV fixed to
    /// all-zero — the key alone provides the domain separation needed here.
    #[must_use]
    pub fn keyed(key: [u8; 32]) -> Self {
        Self::new(key, [0u8; 16])
    }

    /// Start a stream keyed by fresh OS entropy (ephemeral sampling).
    ///
    /// # Errors
    /// Returns [`GlyphError::EntropyUnavailable`] if the OS RNG fails.
    pub fn from_os_entropy() -> Result<Self, GlyphError> {
        let mut key = [0u8; 32];
        rand::rngs::OsRng
            .try_fill_bytes(&mut key)
            .map_err(|_| GlyphError::EntropyUnavailable)?;
        Ok(Self::new(key, [0u8; 16]))
    }

    fn refill(&mut self) {
        let mut word = [0u8; 2];
        self.cipher.apply_keystream(&mut word);
        let w = u16::from_le_bytes(word);
        self.buf |= u32::from(w) << self.bits;
        self.bits += 16;
    }

    /// Pull `n` bits (`n <= 16`) from the stream, LSB-first.
    ///
    /// # Panics
    /// Panics if `n > 16`.
    pub fn next_bits(&mut self, n: u32) -> u32 {
        assert!(n <= 16, "bit groups wider than one keystream word are unsupported");
        while self.bits < n {
            self.refill();
        }
        let mask = (1u32 << n) - 1;
        let v = self.buf & mask;
        self.buf >>= n;
        self.bits -= n;
        v
    }

    /// Pull a single bit from the stream.
    pub fn next_bit(&mut self) -> bool {
        self.next_bits(1) != 0
    }
}
