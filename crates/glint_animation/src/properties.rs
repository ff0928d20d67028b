//! Animations of view properties
//!
//! Every animation here holds a [`WeakView`]: if the host drops the view the
//! animation keeps running as a no-op.
//!
//! Scale, rotation and translation write separate transform facets on the
//! view, which recomposes them as translation ∘ rotation ∘ scale on every
//! write. That lets the three be keyframed on independent timelines.

use glint_core::{Affine2D, Color, Point, Rect, TransformComponents, View, ViewHandle, WeakView};

use crate::animation::{impl_keyframed, non_negative, unit_interval, Animatable, Animation};
use crate::keyframe::Interpolation;

fn apply_to_view(view: &WeakView, property: &'static str, apply: impl FnOnce(&mut View)) {
    if view.with_mut(apply).is_none() {
        tracing::trace!("Skipping {} animation: view was dropped", property);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Appearance
// ─────────────────────────────────────────────────────────────────────────────

/// Animates the alpha of a view. Values must stay within `0.0..=1.0`.
#[derive(Debug)]
pub struct AlphaAnimation {
    view: WeakView,
    animation: Animation<f32>,
}

impl AlphaAnimation {
    pub fn new(view: &ViewHandle) -> Self {
        Self {
            view: view.downgrade(),
            animation: Animation::new().with_validator(unit_interval),
        }
    }
}

impl_keyframed!(AlphaAnimation, f32);

impl Animatable for AlphaAnimation {
    fn animate(&mut self, time: f32) {
        let Some(alpha) = self.animation.resolve(time) else {
            return;
        };
        apply_to_view(&self.view, "alpha", |view| view.alpha = alpha);
    }
}

/// Animates the background color of a view, blending each RGBA channel.
#[derive(Debug)]
pub struct BackgroundColorAnimation {
    view: WeakView,
    animation: Animation<Color>,
}

impl BackgroundColorAnimation {
    pub fn new(view: &ViewHandle) -> Self {
        Self {
            view: view.downgrade(),
            animation: Animation::new(),
        }
    }
}

impl_keyframed!(BackgroundColorAnimation, Color);

impl Animatable for BackgroundColorAnimation {
    fn animate(&mut self, time: f32) {
        let Some(color) = self.animation.resolve(time) else {
            return;
        };
        apply_to_view(&self.view, "background color", |view| {
            view.background_color = color
        });
    }
}

/// Animates the tint color of a view.
#[derive(Debug)]
pub struct TintColorAnimation {
    view: WeakView,
    animation: Animation<Color>,
}

impl TintColorAnimation {
    pub fn new(view: &ViewHandle) -> Self {
        Self {
            view: view.downgrade(),
            animation: Animation::new(),
        }
    }
}

impl_keyframed!(TintColorAnimation, Color);

impl Animatable for TintColorAnimation {
    fn animate(&mut self, time: f32) {
        let Some(color) = self.animation.resolve(time) else {
            return;
        };
        apply_to_view(&self.view, "tint color", |view| view.tint_color = color);
    }
}

/// Animates the corner radius of a view.
#[derive(Debug)]
pub struct CornerRadiusAnimation {
    view: WeakView,
    animation: Animation<f32>,
}

impl CornerRadiusAnimation {
    pub fn new(view: &ViewHandle) -> Self {
        Self {
            view: view.downgrade(),
            animation: Animation::new().with_validator(non_negative),
        }
    }
}

impl_keyframed!(CornerRadiusAnimation, f32);

impl Animatable for CornerRadiusAnimation {
    fn animate(&mut self, time: f32) {
        let Some(radius) = self.animation.resolve(time) else {
            return;
        };
        apply_to_view(&self.view, "corner radius", |view| {
            view.corner_radius = radius
        });
    }
}

/// Shows or hides a view. Keyframes always hold; there is no half-hidden.
///
/// `Hold` is the default mode here rather than `Linear`. Any other mode
/// gives the same result anyway, since `bool` only flips to the arrival
/// value once a segment completes.
#[derive(Debug)]
pub struct HideAnimation {
    view: WeakView,
    animation: Animation<bool>,
}

impl HideAnimation {
    pub fn new(view: &ViewHandle) -> Self {
        Self {
            view: view.downgrade(),
            animation: Animation::new().with_interpolation(Interpolation::Hold),
        }
    }
}

impl_keyframed!(HideAnimation, bool);

impl Animatable for HideAnimation {
    fn animate(&mut self, time: f32) {
        let Some(hidden) = self.animation.resolve(time) else {
            return;
        };
        apply_to_view(&self.view, "hidden", |view| view.hidden = hidden);
    }
}

/// Animates the whole frame of a view.
///
/// Only useful for views positioned manually; for constraint-driven views
/// animate the constraints instead.
#[derive(Debug)]
pub struct FrameAnimation {
    view: WeakView,
    animation: Animation<Rect>,
}

impl FrameAnimation {
    pub fn new(view: &ViewHandle) -> Self {
        Self {
            view: view.downgrade(),
            animation: Animation::new(),
        }
    }
}

impl_keyframed!(FrameAnimation, Rect);

impl Animatable for FrameAnimation {
    fn animate(&mut self, time: f32) {
        let Some(frame) = self.animation.resolve(time) else {
            return;
        };
        apply_to_view(&self.view, "frame", |view| view.frame = frame);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transform facets
// ─────────────────────────────────────────────────────────────────────────────

/// Animates the uniform scale facet of a view's transform.
///
/// Negative scales are rejected.
#[derive(Debug)]
pub struct ScaleAnimation {
    view: WeakView,
    animation: Animation<f32>,
}

impl ScaleAnimation {
    pub fn new(view: &ViewHandle) -> Self {
        Self {
            view: view.downgrade(),
            animation: Animation::new().with_validator(non_negative),
        }
    }
}

impl_keyframed!(ScaleAnimation, f32);

impl Animatable for ScaleAnimation {
    fn animate(&mut self, time: f32) {
        let Some(scale) = self.animation.resolve(time) else {
            return;
        };
        apply_to_view(&self.view, "scale", |view| {
            view.set_scale_transform(Affine2D::scale(scale, scale))
        });
    }
}

/// Animates the rotation facet of a view's transform, in degrees.
#[derive(Debug)]
pub struct RotationAnimation {
    view: WeakView,
    animation: Animation<f32>,
}

impl RotationAnimation {
    pub fn new(view: &ViewHandle) -> Self {
        Self {
            view: view.downgrade(),
            animation: Animation::new(),
        }
    }
}

impl_keyframed!(RotationAnimation, f32);

impl Animatable for RotationAnimation {
    fn animate(&mut self, time: f32) {
        let Some(degrees) = self.animation.resolve(time) else {
            return;
        };
        apply_to_view(&self.view, "rotation", |view| {
            view.set_rotation_transform(Affine2D::rotation(degrees.to_radians()))
        });
    }
}

/// Animates the translation facet of a view's transform.
#[derive(Debug)]
pub struct TranslationAnimation {
    view: WeakView,
    animation: Animation<Point>,
}

impl TranslationAnimation {
    pub fn new(view: &ViewHandle) -> Self {
        Self {
            view: view.downgrade(),
            animation: Animation::new(),
        }
    }
}

impl_keyframed!(TranslationAnimation, Point);

impl Animatable for TranslationAnimation {
    fn animate(&mut self, time: f32) {
        let Some(offset) = self.animation.resolve(time) else {
            return;
        };
        apply_to_view(&self.view, "translation", |view| {
            view.set_translation_transform(Affine2D::translation(offset.x, offset.y))
        });
    }
}

fn non_negative_scale(components: &TransformComponents) -> bool {
    non_negative(&components.scale.width) && non_negative(&components.scale.height)
}

/// Animates all three transform facets from one decomposed track.
#[derive(Debug)]
pub struct TransformAnimation {
    view: WeakView,
    animation: Animation<TransformComponents>,
}

impl TransformAnimation {
    pub fn new(view: &ViewHandle) -> Self {
        Self {
            view: view.downgrade(),
            animation: Animation::new().with_validator(non_negative_scale),
        }
    }
}

impl_keyframed!(TransformAnimation, TransformComponents);

impl Animatable for TransformAnimation {
    fn animate(&mut self, time: f32) {
        let Some(components) = self.animation.resolve(time) else {
            return;
        };
        apply_to_view(&self.view, "transform", |view| {
            view.set_transform_facets(
                components.scale_transform(),
                components.rotation_transform(),
                components.translation_transform(),
            )
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Keyframed;
    use crate::easing::Easing;
    use glint_core::Size;

    fn view() -> ViewHandle {
        View::new(Rect::new(0.0, 0.0, 100.0, 100.0)).into_handle()
    }

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn test_empty_animation_has_no_side_effect() {
        let view = view();
        let before = view.borrow().clone();

        AlphaAnimation::new(&view).animate(0.5);
        ScaleAnimation::new(&view).animate(0.5);
        BackgroundColorAnimation::new(&view).animate(0.5);

        assert_eq!(*view.borrow(), before);
    }

    #[test]
    fn test_alpha_follows_keyframes() {
        let view = view();
        let mut fade = AlphaAnimation::new(&view).at(0.0, 1.0).at(1.0, 0.0);

        fade.animate(0.25);
        assert!((view.borrow().alpha - 0.75).abs() < 1e-6);

        fade.animate(3.0);
        assert_eq!(view.borrow().alpha, 0.0);
    }

    #[test]
    fn test_scale_validation() {
        let view = view();
        let scale = ScaleAnimation::new(&view);
        assert!(!scale.validate_value(&-1.0));
        assert!(scale.validate_value(&0.0));
        assert!(scale.validate_value(&2.5));
    }

    #[test]
    #[should_panic(expected = "invalid animation value")]
    fn test_negative_scale_is_rejected() {
        let view = view();
        let mut scale = ScaleAnimation::new(&view).at(0.0, 1.0).at(1.0, -1.0);
        scale.animate(1.0);
    }

    #[test]
    fn test_negative_scale_applies_nothing() {
        let view = view();
        let weak = view.downgrade();
        let mut scale = ScaleAnimation::new(&view).at(0.0, -1.0);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            scale.animate(0.0);
        }));

        // Debug builds assert; either way the transform is untouched.
        if cfg!(debug_assertions) {
            assert!(result.is_err());
        }
        assert_eq!(weak.with(|v| v.scale_transform()), Some(None));
        assert!(view.borrow().transform().is_identity());
    }

    #[test]
    fn test_independent_facets_compose() {
        let view = view();
        let mut scale = ScaleAnimation::new(&view).at(0.0, 1.0).at(1.0, 2.0);
        let mut rotation = RotationAnimation::new(&view).at(0.0, 0.0).at(1.0, 90.0);
        let mut translation = TranslationAnimation::new(&view)
            .at(0.0, Point::ZERO)
            .at(1.0, Point::new(10.0, 0.0));

        // Dispatch order must not matter
        translation.animate(1.0);
        scale.animate(1.0);
        rotation.animate(1.0);

        let p = view.borrow().transform().transform_point(Point::new(1.0, 0.0));
        assert!(approx(p, Point::new(10.0, 2.0)));
    }

    #[test]
    fn test_transform_animation_matches_facets() {
        let view = view();
        let target = TransformComponents {
            scale: Size::new(2.0, 2.0),
            rotation: 90.0,
            translation: Point::new(10.0, 0.0),
        };
        let mut transform = TransformAnimation::new(&view)
            .at(0.0, TransformComponents::IDENTITY)
            .at(1.0, target);

        transform.animate(1.0);
        let p = view.borrow().transform().transform_point(Point::new(1.0, 0.0));
        assert!(approx(p, Point::new(10.0, 2.0)));
    }

    #[test]
    fn test_overshooting_curve_keeps_alpha_valid() {
        let view = view();
        let mut fade = AlphaAnimation::new(&view)
            .at_with(0.0, 0.0, Easing::CubicBezier(0.3, -0.5, 0.7, 1.5).into())
            .at(1.0, 1.0);

        fade.animate(0.1);
        assert!((0.0..=1.0).contains(&view.borrow().alpha));
        fade.animate(0.9);
        let alpha = view.borrow().alpha;
        assert!(alpha > 0.5 && alpha <= 1.0);
    }

    #[test]
    fn test_hide_ignores_linear_midpoints() {
        let view = view();
        let mut hide = HideAnimation::new(&view)
            .at_with(0.0, false, Interpolation::Linear)
            .at(1.0, true);

        hide.animate(0.99);
        assert!(!view.borrow().hidden);
    }

    #[test]
    fn test_color_blends_per_channel() {
        let view = view();
        let mut color = BackgroundColorAnimation::new(&view)
            .at(0.0, Color::RED)
            .at(2.0, Color::BLUE);

        color.animate(1.0);
        let c = view.borrow().background_color;
        assert!((c.r - 0.5).abs() < 1e-6);
        assert!((c.g - 0.0).abs() < 1e-6);
        assert!((c.b - 0.5).abs() < 1e-6);
        assert!((c.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_hide_holds_until_next_keyframe() {
        let view = view();
        let mut hide = HideAnimation::new(&view).at(0.0, false).at(1.0, true);

        hide.animate(0.9);
        assert!(!view.borrow().hidden);
        hide.animate(1.0);
        assert!(view.borrow().hidden);
    }

    #[test]
    fn test_frame_and_corner_radius() {
        let view = view();
        let mut frame = FrameAnimation::new(&view)
            .at(0.0, Rect::new(0.0, 0.0, 10.0, 10.0))
            .at(1.0, Rect::new(10.0, 10.0, 20.0, 20.0));
        let mut radius = CornerRadiusAnimation::new(&view).at(0.0, 0.0).at(1.0, 8.0);

        frame.animate(0.5);
        radius.animate(0.5);

        assert_eq!(view.borrow().frame, Rect::new(5.0, 5.0, 15.0, 15.0));
        assert_eq!(view.borrow().corner_radius, 4.0);
    }

    #[test]
    fn test_dropped_view_is_a_no_op() {
        let view = view();
        let mut tint = TintColorAnimation::new(&view).at(0.0, Color::GREEN);
        drop(view);
        tint.animate(0.0);
    }
}
