//! Serving-size adjustment for the recipe detail view.

use crate::scale::scale;

/// Smallest selectable serving count.
pub const MIN_SERVINGS: u32 = 1;
/// Largest selectable serving count.
pub const MAX_SERVINGS: u32 = 20;

/// Keeps a recipe's original ingredient lines next to the selected serving
/// count so every displayed line is derived from the original text.
#[derive(Debug, Clone, PartialEq)]
pub struct ServingAdjuster {
    original_servings: u32,
    target_servings: u32,
    originals: Vec<String>,
}

impl ServingAdjuster {
    pub fn new(original_servings: u32, ingredients: &[String]) -> Self {
        let original_servings = original_servings.max(MIN_SERVINGS);
        Self {
            original_servings,
            target_servings: original_servings,
            originals: ingredients.to_vec(),
        }
    }

    pub fn original_servings(&self) -> u32 {
        self.original_servings
    }

    pub fn target_servings(&self) -> u32 {
        self.target_servings
    }

    pub fn originals(&self) -> &[String] {
        &self.originals
    }

    /// `target / original`.
    pub fn multiplier(&self) -> f64 {
        f64::from(self.target_servings) / f64::from(self.original_servings)
    }

    /// Select a serving count, clamped to `[MIN_SERVINGS, MAX_SERVINGS]`.
    pub fn set_target(&mut self, servings: u32) -> u32 {
        self.target_servings = servings.clamp(MIN_SERVINGS, MAX_SERVINGS);
        self.target_servings
    }

    /// One more serving. Returns `false` at the upper bound.
    pub fn increase(&mut self) -> bool {
        if self.target_servings >= MAX_SERVINGS {
            return false;
        }
        self.target_servings += 1;
        true
    }

    /// One fewer serving. Returns `false` at the lower bound.
    pub fn decrease(&mut self) -> bool {
        if self.target_servings <= MIN_SERVINGS {
            return false;
        }
        self.target_servings -= 1;
        true
    }

    /// Ingredient lines for the current target, each scaled from its original.
    pub fn scaled(&self) -> Vec<String> {
        let multiplier = self.multiplier();
        self.originals.iter().map(|i| scale(i, multiplier)).collect()
    }
}
