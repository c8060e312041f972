use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{MatchId, ParticipantId};

/// Генерация ID: участники получают номера из монотонного счётчика,
/// матчи – UUID (`MatchId::new_random`).
#[derive(Debug)]
pub struct IdGenerator {
    participant_counter: AtomicU64,
    #[cfg(target_arch = "wasm32")]
    match_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1.
    pub fn new() -> Self {
        Self {
            participant_counter: AtomicU64::new(1),
            #[cfg(target_arch = "wasm32")]
            match_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_participant_id(&self) -> ParticipantId {
        self.participant_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[inline]
    pub fn next_match_id(&self) -> MatchId {
        MatchId::new_random()
    }

    /// На wasm нет системной энтропии: UUID собирается из счётчика.
    #[cfg(target_arch = "wasm32")]
    #[inline]
    pub fn next_match_id(&self) -> MatchId {
        let n = self.match_counter.fetch_add(1, Ordering::Relaxed);
        MatchId(uuid::Uuid::from_u64_pair(0, n))
    }

    /// Учесть id, пришедший извне (например, из снапшота),
    /// чтобы следующие выданные id с ним не пересеклись.
    pub fn observe_participant_id(&self, id: ParticipantId) {
        self.participant_counter
            .fetch_max(id.saturating_add(1), Ordering::Relaxed);
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
