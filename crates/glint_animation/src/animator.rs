//! Animator
//!
//! Drives every registered animation from one shared time value.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use crate::animation::Animatable;

new_key_type! {
    pub struct AnimationId;
}

/// A registered animation, shared with the host
pub type SharedAnimatable = Rc<RefCell<dyn Animatable>>;

/// Fans one time value out to every registered animation
///
/// Dispatch follows registration order. Animations should be registered
/// during setup only; registering from inside an `animate` callback is
/// unsupported.
pub struct Animator {
    animations: SlotMap<AnimationId, SharedAnimatable>,
    order: Vec<AnimationId>,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Register a shared animation; the caller may keep its own `Rc` to
    /// reconfigure it later
    pub fn add_animation<A: Animatable + 'static>(
        &mut self,
        animation: Rc<RefCell<A>>,
    ) -> AnimationId {
        let id = self.animations.insert(animation);
        self.order.push(id);
        tracing::debug!("Registered animation {:?} ({} total)", id, self.order.len());
        id
    }

    /// Register an animation the animator takes ownership of
    pub fn add<A: Animatable + 'static>(&mut self, animation: A) -> AnimationId {
        self.add_animation(Rc::new(RefCell::new(animation)))
    }

    /// Unregister an animation, returning it if it was present
    pub fn remove_animation(&mut self, id: AnimationId) -> Option<SharedAnimatable> {
        let animation = self.animations.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(animation)
    }

    pub fn contains(&self, id: AnimationId) -> bool {
        self.animations.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.animations.clear();
        self.order.clear();
    }

    /// Apply `time` to every animation, in registration order
    pub fn animate(&self, time: f32) {
        tracing::trace!("Animating {} animations at time {}", self.order.len(), time);

        for id in &self.order {
            let Some(animation) = self.animations.get(*id) else {
                continue;
            };
            // Already borrowed means we are inside that animation's own callback
            match animation.try_borrow_mut() {
                Ok(mut animation) => animation.animate(time),
                Err(_) => tracing::warn!("Skipping re-entrant dispatch to animation {:?}", id),
            }
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("animations", &self.order)
            .finish()
    }
}
