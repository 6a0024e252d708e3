//! Fast mixer over the CPU cycle counter.
//!
//! Not a CSPRNG: successive counter reads are correlated and an observer who
//! can time the process can narrow the state. Only selectable explicitly.

use rand::{Error, RngCore};

use super::hw;

// Odd 64-bit multipliers picked per step by the mixed state.
const MULTIPLIERS: [u64; 8] = [
    0x9e3779b97f4a7c15,
    0xbf58476d1ce4e5b9,
    0x94d049bb133111eb,
    0xd6e8feb86659fd93,
    0xa0761d6478bd642f,
    0xe7037ed1a0b428db,
    0x8ebc6af09c88c6e3,
    0x589965cc75374cc3,
];

pub struct CycleRng {
    state: u64,
}

impl CycleRng {
    pub fn new() -> Self {
        Self { state: hw::counter() }
    }
}

impl Default for CycleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for CycleRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let ent = hw::counter();

        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl Drop for CycleRng {
    fn drop(&mut self) {
        // Volatile so the wipe is not optimised out.
        unsafe { std::ptr::write_volatile(&mut self.state, 0) }
    }
}
