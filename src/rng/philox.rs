//! Philox4x32-10 counter-based generator
//!
//! 10-round Feistel cipher from Salmon et al. "Parallel Random Numbers: As Easy as 1, 2, 3" (2011).
//! Output depends only on (counter, key), which is what lets every kernel
//! element own an independent stream without shared state.

const PHILOX_M4X32_0: u32 = 0xD2511F53;
const PHILOX_M4X32_1: u32 = 0xCD9E8D57;
const PHILOX_W32_0: u32 = 0x9E3779B9;
const PHILOX_W32_1: u32 = 0xBB67AE85;

/// Philox4x32 round function
#[inline(always)]
fn philox_round(ctr: [u32; 4], key: [u32; 2]) -> [u32; 4] {
    let prod0 = (ctr[0] as u64).wrapping_mul(PHILOX_M4X32_0 as u64);
    let prod1 = (ctr[2] as u64).wrapping_mul(PHILOX_M4X32_1 as u64);

    [
        ((prod1 >> 32) as u32) ^ ctr[1] ^ key[0],
        prod1 as u32,
        ((prod0 >> 32) as u32) ^ ctr[3] ^ key[1],
        prod0 as u32,
    ]
}

/// Philox4x32-10: 10-round Feistel cipher
#[inline(always)]
pub fn philox4x32_10(ctr: [u32; 4], key: [u32; 2]) -> [u32; 4] {
    let mut c = ctr;
    let mut k = key;

    for _ in 0..10 {
        c = philox_round(c, k);
        k[0] = k[0].wrapping_add(PHILOX_W32_0);
        k[1] = k[1].wrapping_add(PHILOX_W32_1);
    }

    c
}

/// A single Philox stream, buffering four words per block
///
/// Counter layout: `[block, element_lo, element_hi, launch_lo]`. The key is
/// the seed with the upper launch bits folded into its high word.
#[derive(Clone, Debug)]
pub struct PhiloxStream {
    key: [u32; 2],
    ctr: [u32; 4],
    buffer: [u32; 4],
    buffer_idx: usize,
}

impl PhiloxStream {
    /// Stream for element `index` of launch `launch` under `seed`
    pub fn new(seed: u64, launch: u64, index: u64) -> Self {
        let key = [seed as u32, ((seed >> 32) as u32) ^ ((launch >> 32) as u32)];
        let ctr = [0, index as u32, (index >> 32) as u32, launch as u32];
        Self {
            key,
            ctr,
            buffer: [0; 4],
            buffer_idx: 4, // Force generation on first call
        }
    }

    /// Next raw 32-bit word
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.buffer_idx >= 4 {
            self.buffer = philox4x32_10(self.ctr, self.key);
            self.ctr[0] = self.ctr[0].wrapping_add(1);
            self.buffer_idx = 0;
        }
        let val = self.buffer[self.buffer_idx];
        self.buffer_idx += 1;
        val
    }

    /// Next raw 64-bit word (two consecutive 32-bit draws)
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }
}
