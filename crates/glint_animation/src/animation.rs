//! Generic animations and the `Animatable` capability
//!
//! An [`Animation<T>`] owns one keyframe track plus a validation predicate.
//! Concrete animations pair it with a non-owning handle to their target and
//! implement [`Animatable`] to push the resolved value into that target.

use std::fmt;

use crate::error::Result;
use crate::interpolate::Interpolate;
use crate::keyframe::{Interpolation, KeyframeTrack};

/// Anything that can apply its state for a given time
///
/// Implementations must be cheap: they run once per scroll event.
pub trait Animatable {
    fn animate(&mut self, time: f32);
}

impl<F: FnMut(f32)> Animatable for F {
    fn animate(&mut self, time: f32) {
        self(time)
    }
}

/// Predicate deciding whether a resolved value may be applied
pub type Validator<T> = fn(&T) -> bool;

fn accept_all<T>(_: &T) -> bool {
    true
}

/// Rejects negative values (scales, radii)
pub fn non_negative(value: &f32) -> bool {
    *value >= 0.0
}

/// Accepts values in `0.0..=1.0` (opacity)
pub fn unit_interval(value: &f32) -> bool {
    (0.0..=1.0).contains(value)
}

/// A keyframe track for one value type with validation
#[derive(Clone)]
pub struct Animation<T> {
    track: KeyframeTrack<T>,
    interpolation: Interpolation,
    validator: Validator<T>,
}

impl<T: Interpolate> Default for Animation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Interpolate> Animation<T> {
    /// Animation accepting every value, keyframed with [`Interpolation::DEFAULT`]
    pub fn new() -> Self {
        Self {
            track: KeyframeTrack::new(),
            interpolation: Interpolation::DEFAULT,
            validator: accept_all,
        }
    }

    /// Builder: replace the validation predicate
    pub fn with_validator(mut self, validator: Validator<T>) -> Self {
        self.validator = validator;
        self
    }

    /// Builder: mode used by [`set`](Self::set) and [`at`](Self::at)
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn default_interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Set a keyframe with the default interpolation
    pub fn set(&mut self, time: f32, value: T) {
        self.track.set_keyframe(time, value, self.interpolation);
    }

    /// Set a keyframe with the default interpolation, rejecting non-finite times
    pub fn try_set(&mut self, time: f32, value: T) -> Result<()> {
        self.track.try_set_keyframe(time, value, self.interpolation)
    }

    /// Set a keyframe with an explicit interpolation
    pub fn set_with(&mut self, time: f32, value: T, interpolation: Interpolation) {
        self.track.set_keyframe(time, value, interpolation);
    }

    /// Builder: add a keyframe with the default interpolation
    pub fn at(mut self, time: f32, value: T) -> Self {
        self.set(time, value);
        self
    }

    /// Builder: add a keyframe with an explicit interpolation
    pub fn at_with(mut self, time: f32, value: T, interpolation: Interpolation) -> Self {
        self.set_with(time, value, interpolation);
        self
    }

    pub fn has_keyframes(&self) -> bool {
        self.track.has_keyframes()
    }

    pub fn track(&self) -> &KeyframeTrack<T> {
        &self.track
    }

    pub fn validate_value(&self, value: &T) -> bool {
        (self.validator)(value)
    }

    /// Raw track value, without validation
    pub fn value_at(&self, time: f32) -> Option<T> {
        self.track.value_at(time)
    }
}

impl<T: Interpolate + fmt::Debug> Animation<T> {
    /// The value to apply at `time`.
    ///
    /// `None` for an empty track. A value failing validation is an authoring
    /// bug: it asserts in debug builds and resolves to `None` in release so
    /// nothing is applied.
    pub fn resolve(&self, time: f32) -> Option<T> {
        let value = self.track.value_at(time)?;
        if !self.validate_value(&value) {
            tracing::error!("Invalid animation value {:?} at time {}", value, time);
            debug_assert!(false, "invalid animation value {value:?} at time {time}");
            return None;
        }
        Some(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Animation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("track", &self.track)
            .field("interpolation", &self.interpolation)
            .finish_non_exhaustive()
    }
}

/// Keyframe authoring shared by every concrete animation
pub trait Keyframed {
    type Value: Interpolate + fmt::Debug;

    fn animation(&self) -> &Animation<Self::Value>;

    fn animation_mut(&mut self) -> &mut Animation<Self::Value>;

    /// Set a keyframe with the animation's default interpolation
    fn set_keyframe(&mut self, time: f32, value: Self::Value) {
        self.animation_mut().set(time, value);
    }

    fn try_set_keyframe(&mut self, time: f32, value: Self::Value) -> Result<()> {
        self.animation_mut().try_set(time, value)
    }

    fn set_keyframe_with(&mut self, time: f32, value: Self::Value, interpolation: Interpolation) {
        self.animation_mut().set_with(time, value, interpolation);
    }

    /// Builder form of [`set_keyframe`](Self::set_keyframe)
    fn at(mut self, time: f32, value: Self::Value) -> Self
    where
        Self: Sized,
    {
        self.set_keyframe(time, value);
        self
    }

    /// Builder form of [`set_keyframe_with`](Self::set_keyframe_with)
    fn at_with(mut self, time: f32, value: Self::Value, interpolation: Interpolation) -> Self
    where
        Self: Sized,
    {
        self.set_keyframe_with(time, value, interpolation);
        self
    }

    fn has_keyframes(&self) -> bool {
        self.animation().has_keyframes()
    }

    fn value_at(&self, time: f32) -> Option<Self::Value> {
        self.animation().value_at(time)
    }

    fn validate_value(&self, value: &Self::Value) -> bool {
        self.animation().validate_value(value)
    }
}

/// Implement [`Keyframed`] for a struct with an `animation` field
macro_rules! impl_keyframed {
    ($ty:ty, $value:ty) => {
        impl $crate::animation::Keyframed for $ty {
            type Value = $value;

            fn animation(&self) -> &$crate::animation::Animation<$value> {
                &self.animation
            }

            fn animation_mut(&mut self) -> &mut $crate::animation::Animation<$value> {
                &mut self.animation
            }
        }
    };
}

pub(crate) use impl_keyframed;
