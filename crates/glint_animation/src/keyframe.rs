//! Keyframe tracks
//!
//! A [`KeyframeTrack`] holds the keyframes of one animatable property, kept
//! sorted by time, and answers "what is the value at time `t`?".
//!
//! - Empty tracks are inert and yield `None`.
//! - Queries before the first or after the last keyframe clamp to that
//!   keyframe's value; there is no extrapolation.
//! - Between two keyframes the *earlier* keyframe's [`Interpolation`] decides
//!   how the segment is blended.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::easing::Easing;
use crate::error::{AnimationError, Result};
use crate::interpolate::Interpolate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a segment is blended, owned by the keyframe the segment departs from
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interpolation {
    /// Step function: keep the departure value until the next keyframe
    Hold,
    /// Straight component-wise interpolation
    #[default]
    Linear,
    /// Linear progress remapped through an easing curve
    Eased(Easing),
}

impl Interpolation {
    /// Mode used when a keyframe is set without an explicit one
    pub const DEFAULT: Interpolation = Interpolation::Linear;

    /// Blend `from` toward `to` at segment progress `t` (0.0 to 1.0)
    pub fn blend<T: Interpolate>(&self, from: &T, to: &T, t: f32) -> T {
        match self {
            Interpolation::Hold => from.clone(),
            Interpolation::Linear => from.lerp(to, t),
            Interpolation::Eased(easing) => from.lerp(to, easing.apply(t)),
        }
    }
}

impl From<Easing> for Interpolation {
    fn from(easing: Easing) -> Self {
        Interpolation::Eased(easing)
    }
}

/// A single keyframe in a track
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe<T> {
    pub time: f32,
    pub value: T,
    /// Blending used for the segment that starts at this keyframe
    pub interpolation: Interpolation,
}

impl<T> Keyframe<T> {
    pub fn new(time: f32, value: T, interpolation: Interpolation) -> Self {
        Self {
            time,
            value,
            interpolation,
        }
    }
}

/// Time-indexed keyframes for one property
#[derive(Clone, Debug)]
pub struct KeyframeTrack<T> {
    /// Sorted by time, times unique
    keyframes: SmallVec<[Keyframe<T>; 4]>,
}

impl<T> Default for KeyframeTrack<T> {
    fn default() -> Self {
        Self {
            keyframes: SmallVec::new(),
        }
    }
}

impl<T: Interpolate> KeyframeTrack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the keyframe at `time`.
    ///
    /// A non-finite time is an authoring bug: it asserts in debug builds and
    /// is dropped in release.
    pub fn set_keyframe(&mut self, time: f32, value: T, interpolation: Interpolation) {
        if let Err(err) = self.try_set_keyframe(time, value, interpolation) {
            tracing::error!("Rejected keyframe: {}", err);
            debug_assert!(false, "rejected keyframe: {err}");
        }
    }

    /// Insert or replace the keyframe at `time`, rejecting non-finite times
    pub fn try_set_keyframe(
        &mut self,
        time: f32,
        value: T,
        interpolation: Interpolation,
    ) -> Result<()> {
        if !time.is_finite() {
            return Err(AnimationError::NonFiniteTime(time));
        }

        let keyframe = Keyframe::new(time, value, interpolation);
        match self.search(time) {
            Ok(index) => self.keyframes[index] = keyframe,
            Err(index) => self.keyframes.insert(index, keyframe),
        }
        Ok(())
    }

    /// Remove the keyframe at exactly `time`, returning its value
    pub fn remove_keyframe(&mut self, time: f32) -> Option<T> {
        let index = self.search(time).ok()?;
        Some(self.keyframes.remove(index).value)
    }

    pub fn clear(&mut self) {
        self.keyframes.clear();
    }

    pub fn has_keyframes(&self) -> bool {
        !self.keyframes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Keyframes sorted by time
    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    pub fn first_time(&self) -> Option<f32> {
        self.keyframes.first().map(|kf| kf.time)
    }

    pub fn last_time(&self) -> Option<f32> {
        self.keyframes.last().map(|kf| kf.time)
    }

    /// Value of the track at `time`, or `None` when the track is empty
    pub fn value_at(&self, time: f32) -> Option<T> {
        let first = self.keyframes.first()?;
        if self.keyframes.len() == 1 || time.is_nan() || time <= first.time {
            return Some(first.value.clone());
        }

        let last = &self.keyframes[self.keyframes.len() - 1];
        if time >= last.time {
            return Some(last.value.clone());
        }

        match self.search(time) {
            // Exact hits skip the blend arithmetic
            Ok(index) => Some(self.keyframes[index].value.clone()),
            Err(index) => {
                // first.time < time < last.time, so 1 <= index < len
                let prev = &self.keyframes[index - 1];
                let next = &self.keyframes[index];
                let local_progress = (time - prev.time) / (next.time - prev.time);
                Some(prev.interpolation.blend(&prev.value, &next.value, local_progress))
            }
        }
    }

    fn search(&self, time: f32) -> std::result::Result<usize, usize> {
        self.keyframes
            .binary_search_by(|kf| kf.time.partial_cmp(&time).unwrap_or(Ordering::Less))
    }
}
