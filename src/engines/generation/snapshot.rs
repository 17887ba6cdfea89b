use crate::engines::generation::genome::Genome;
use crate::types::Color;
use std::sync::{Arc, PoisonError, RwLock};

/// Immutable copy of the best individual at some point of the search
#[derive(Debug, Clone, PartialEq)]
pub struct BestSnapshot {
    pub genome: Genome,
    pub cost: f64,
    pub generation: u64,
    pub population_size: usize,
}

impl BestSnapshot {
    pub fn colors(&self) -> &[Color] {
        self.genome.colors()
    }
}

/// Shared view of the latest published snapshot.
///
/// Cloning is cheap and clones can move to other threads. The engine swaps in
/// a whole new `Arc` on every publish, so a reader holds either the previous
/// snapshot or the next one and never a partial write.
#[derive(Debug, Clone)]
pub struct SnapshotReader {
    slot: Arc<RwLock<Arc<BestSnapshot>>>,
}

impl SnapshotReader {
    pub(crate) fn new(initial: BestSnapshot) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    pub fn latest(&self) -> Arc<BestSnapshot> {
        // A poisoned slot still holds a complete snapshot.
        Arc::clone(&self.slot.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub(crate) fn publish(&self, snapshot: BestSnapshot) {
        let next = Arc::new(snapshot);
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(generation: u64) -> BestSnapshot {
        BestSnapshot {
            genome: Genome::from(vec![Color::new(1, 2, 3)]),
            cost: 10.0 - generation as f64,
            generation,
            population_size: 4,
        }
    }

    #[test]
    fn test_publish_replaces_for_all_clones() {
        let reader = SnapshotReader::new(snapshot(0));
        let other = reader.clone();

        let held = reader.latest();
        reader.publish(snapshot(1));

        assert_eq!(held.generation, 0);
        assert_eq!(other.latest().generation, 1);
        assert_eq!(other.latest().colors(), &[Color::new(1, 2, 3)]);
    }
}
