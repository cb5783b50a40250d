use core::cmp::min;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;
use std::{
    fs::File,
    io::{self, Read},
};

/// wyrand, a tiny and fast generator. Every source of randomness in a run is either one of
/// these, or seeded from one of these, so a run is reproducible from a single seed.
#[derive(Debug, Clone)]
pub struct WyRng {
    state: u64,
}

impl WyRng {
    pub fn seeded(state: u64) -> Self {
        Self { state }
    }

    /// Split off an independent generator, advancing this one
    pub fn fork(&mut self) -> Self {
        Self::seeded(self.next_u64())
    }
}

impl RngCore for WyRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        const WY_CONST_0: u64 = 0x2d35_8dcc_aa6c_78a5;
        const WY_CONST_1: u64 = 0x8bb8_4b93_962e_acc9;
        self.state = self.state.wrapping_add(WY_CONST_0);
        let t = u128::from(self.state) * u128::from(self.state ^ WY_CONST_1);
        (t as u64) ^ (t >> 64) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let mut idx = 0;
        while idx < dst.len() {
            let lim = min(8, dst.len() - idx);
            dst[idx..idx + lim].copy_from_slice(&self.next_u64().to_le_bytes()[..lim]);
            idx += lim;
        }
    }
}

impl SeedableRng for WyRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

pub fn seed_urandom() -> io::Result<u64> {
    let mut file = File::open("/dev/urandom")?;
    let mut buffer = [0u8; 8];
    file.read_exact(&mut buffer)?;
    Ok(u64::from_le_bytes(buffer))
}

/// A generator seeded with `seed`, or from the OS when there isn't one
pub fn default_rng(seed: Option<u64>) -> WyRng {
    match seed {
        Some(seed) => WyRng::seeded(seed),
        None => WyRng::seeded(seed_urandom().unwrap_or_else(|_| rand::rng().next_u64())),
    }
}

#[inline]
pub fn gaussian(rng: &mut impl RngCore) -> f64 {
    rng.sample(StandardNormal)
}

/// true with probability p
#[inline]
pub fn happens(rng: &mut impl RngCore, p: f64) -> bool {
    rng.random::<f64>() < p
}

#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1. / (1. + (-x).exp())
}
