//! Replay source for tests that need exact placements.

use std::collections::VecDeque;

use crate::RandomSource;

/// Hands out a fixed list of values in order.
///
/// Directions are drawn as `next_int(0, 3)` indices. Running dry, or a
/// scripted value outside the requested range, is a broken test and panics.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: VecDeque<i32>,
}

impl ScriptedRng {
    pub fn new<I: IntoIterator<Item = i32>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        let value = self
            .values
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted (wanted a value in {min}..={max})"));
        assert!(
            (min..=max).contains(&value),
            "scripted value {value} outside {min}..={max}"
        );
        value
    }
}
