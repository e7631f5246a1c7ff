/// Result of a domain update operation
///
/// Carries the effects the caller must carry out after the state change:
/// events for the embedding application, or timer commands for a runtime.
#[derive(Debug)]
pub struct UpdateResult<E> {
    pub effects: Vec<E>,
}

impl<E> UpdateResult<E> {
    /// Create an empty update (no effects)
    pub fn none() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Create an update with a single effect
    pub fn effect(effect: E) -> Self {
        Self {
            effects: vec![effect],
        }
    }

    /// Add an effect to this update
    pub fn push(&mut self, effect: E) {
        self.effects.push(effect);
    }

    /// Add an effect to this update
    pub fn add_effect(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Check if this update contains any effects
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn into_effects(self) -> Vec<E> {
        self.effects
    }
}

impl<E> Default for UpdateResult<E> {
    fn default() -> Self {
        Self::none()
    }
}
