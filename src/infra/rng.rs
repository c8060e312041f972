use crate::engine::RandomSource;

//
// ✅ NATIVE ВАРИАНТ (НЕ wasm32):
//    тут есть rand.
//
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for SystemRng {
    fn choose_index(&mut self, len: usize) -> usize {
        use rand::{thread_rng, Rng};

        thread_rng().gen_range(0..len)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же партии при одинаковом seed.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for DeterministicRng {
    fn choose_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.inner.gen_range(0..len)
    }
}

/// RNG, выбранный конфигурацией: системный или с фиксированным seed.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub enum ConfiguredRng {
    System(SystemRng),
    Deterministic(DeterministicRng),
}

#[cfg(not(target_arch = "wasm32"))]
impl ConfiguredRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => ConfiguredRng::Deterministic(DeterministicRng::from_seed(seed)),
            None => ConfiguredRng::System(SystemRng),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for ConfiguredRng {
    fn choose_index(&mut self, len: usize) -> usize {
        match self {
            ConfiguredRng::System(rng) => rng.choose_index(len),
            ConfiguredRng::Deterministic(rng) => rng.choose_index(len),
        }
    }
}

//
// ✅ WASM ВАРИАНТ (Linera контракт):
//    тут НЕТ rand / getrandom.
//
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(target_arch = "wasm32")]
impl RandomSource for SystemRng {
    fn choose_index(&mut self, _len: usize) -> usize {
        // На wasm пока заглушка: всегда первая оставшаяся карта.
        // Раздача не будет случайной, но контракт детерминированный.
        0
    }
}
