//! Glint Animation System
//!
//! Keyframe animations driven by an externally supplied time value, usually
//! the scroll progress of a paging scroll view.
//!
//! # Features
//!
//! - **Keyframe Tracks**: Sorted keyframes with hold, linear, or eased segments
//! - **View Animations**: Alpha, colors, corner radius, visibility, frame, and
//!   transform facets of host-owned views
//! - **Constraint Animations**: Constants, reference multiples, and
//!   page-relative positions of layout constraints
//! - **Animator**: Fans one time value out to every registered animation
//! - **Paging**: Page multipliers and a headless paging scroller

pub mod animation;
pub mod animator;
pub mod constraint;
pub mod easing;
pub mod error;
pub mod interpolate;
pub mod keyframe;
pub mod paging;
pub mod properties;

pub use animation::{non_negative, unit_interval, Animatable, Animation, Keyframed, Validator};
pub use animator::{AnimationId, Animator, SharedAnimatable};
pub use constraint::{
    ConstraintConstantAnimation, ConstraintMultiplierAnimation, PageConstraintAnimation,
};
pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use interpolate::Interpolate;
pub use keyframe::{Interpolation, Keyframe, KeyframeTrack};
pub use paging::{multiplier_for_page, PagingConfig, PagingScroller};
pub use properties::{
    AlphaAnimation, BackgroundColorAnimation, CornerRadiusAnimation, FrameAnimation,
    HideAnimation, RotationAnimation, ScaleAnimation, TintColorAnimation, TransformAnimation,
    TranslationAnimation,
};
