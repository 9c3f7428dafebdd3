use std::collections::HashMap;

use rand::Rng;

use crate::config::{GridSize, MAX_REWARD_VALUE};
use crate::snake::Position;

/// Decorative per-cell values picked up as the head passes over them.
///
/// Collected values never feed into the score.
#[derive(Debug, Clone, Default)]
pub struct RewardGrid {
    values: HashMap<Position, u8>,
    collected: Vec<u8>,
}

impl RewardGrid {
    /// Assigns a value in `1..=MAX_REWARD_VALUE` to every interior cell.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        let mut values = HashMap::with_capacity(bounds.total_cells());
        for x in 1..=bounds.max_inner_x() {
            for y in 1..=bounds.max_inner_y() {
                values.insert(Position::new(x, y), rng.gen_range(1..=MAX_REWARD_VALUE));
            }
        }

        Self {
            values,
            collected: Vec::new(),
        }
    }

    /// Removes the value under `position`, if any, and records it.
    pub fn collect(&mut self, position: Position) -> Option<u8> {
        let value = self.values.remove(&position)?;
        self.collected.push(value);
        Some(value)
    }

    /// Returns the value still waiting at `position`.
    #[must_use]
    pub fn value_at(&self, position: Position) -> Option<u8> {
        self.values.get(&position).copied()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Values picked up so far, in pickup order.
    #[must_use]
    pub fn collected(&self) -> &[u8] {
        &self.collected
    }

    #[must_use]
    pub fn collected_total(&self) -> u32 {
        self.collected.iter().map(|value| u32::from(*value)).sum()
    }
}
