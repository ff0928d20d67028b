//! Animations of layout constraint constants
//!
//! These write `Constraint::constant` and then ask the superview for a layout
//! pass. Solving the constraints is left to the host.

use glint_core::{
    ConstraintHandle, HorizontalPositionAttribute, LayoutAttribute, ViewHandle, WeakConstraint,
    WeakView,
};

use crate::animation::{impl_keyframed, Animatable, Animation};

fn apply_to_constraint(constraint: &WeakConstraint, superview: &WeakView, constant: f32) {
    if constraint.with_mut(|c| c.constant = constant).is_none() {
        tracing::trace!("Skipping constraint animation: constraint was dropped");
        return;
    }
    superview.with_mut(|view| view.set_needs_layout());
}

/// Animates the constant of a constraint directly.
#[derive(Debug)]
pub struct ConstraintConstantAnimation {
    superview: WeakView,
    constraint: WeakConstraint,
    animation: Animation<f32>,
}

impl ConstraintConstantAnimation {
    pub fn new(superview: &ViewHandle, constraint: &ConstraintHandle) -> Self {
        Self {
            superview: superview.downgrade(),
            constraint: constraint.downgrade(),
            animation: Animation::new(),
        }
    }
}

impl_keyframed!(ConstraintConstantAnimation, f32);

impl Animatable for ConstraintConstantAnimation {
    fn animate(&mut self, time: f32) {
        let Some(constant) = self.animation.resolve(time) else {
            return;
        };
        apply_to_constraint(&self.constraint, &self.superview, constant);
    }
}

/// Animates a constraint's constant to a multiple of another view's geometry.
///
/// Keyframe values are multipliers. Each frame the constant becomes
/// `multiplier * attribute(reference) + constant`, with the reference
/// attribute read from the reference view's current frame, so the result
/// follows the reference view as it moves or resizes.
#[derive(Debug)]
pub struct ConstraintMultiplierAnimation {
    superview: WeakView,
    constraint: WeakConstraint,
    reference: WeakView,
    attribute: LayoutAttribute,
    constant: f32,
    animation: Animation<f32>,
}

impl ConstraintMultiplierAnimation {
    pub fn new(
        superview: &ViewHandle,
        constraint: &ConstraintHandle,
        attribute: LayoutAttribute,
        reference: &ViewHandle,
    ) -> Self {
        Self {
            superview: superview.downgrade(),
            constraint: constraint.downgrade(),
            reference: reference.downgrade(),
            attribute,
            constant: 0.0,
            animation: Animation::new(),
        }
    }

    /// Builder: fixed offset added after the multiplication
    pub fn with_constant(mut self, constant: f32) -> Self {
        self.constant = constant;
        self
    }

    pub fn attribute(&self) -> LayoutAttribute {
        self.attribute
    }
}

impl_keyframed!(ConstraintMultiplierAnimation, f32);

impl Animatable for ConstraintMultiplierAnimation {
    fn animate(&mut self, time: f32) {
        let Some(multiplier) = self.animation.resolve(time) else {
            return;
        };
        let attribute = self.attribute;
        let Some(reference_value) = self.reference.with(|view| attribute.value_in(&view.frame))
        else {
            tracing::trace!("Skipping constraint multiplier animation: reference was dropped");
            return;
        };
        apply_to_constraint(
            &self.constraint,
            &self.superview,
            multiplier * reference_value + self.constant,
        );
    }
}

/// Keeps a view's horizontal anchor on a (fractional) page of a paging
/// scroll view.
///
/// Keyframe values are page numbers. The constraint is expected to pin the
/// view's anchor to the left edge of the content view, so the constant is the
/// absolute x position `(offset(attribute) + page) * page_width`. The page
/// width must be updated through [`set_page_width`](Self::set_page_width)
/// whenever the scroll view resizes.
#[derive(Debug)]
pub struct PageConstraintAnimation {
    superview: WeakView,
    constraint: WeakConstraint,
    page_width: f32,
    attribute: HorizontalPositionAttribute,
    animation: Animation<f32>,
}

impl PageConstraintAnimation {
    pub fn new(
        superview: &ViewHandle,
        constraint: &ConstraintHandle,
        page_width: f32,
        attribute: HorizontalPositionAttribute,
    ) -> Self {
        Self {
            superview: superview.downgrade(),
            constraint: constraint.downgrade(),
            page_width,
            attribute,
            animation: Animation::new(),
        }
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn set_page_width(&mut self, page_width: f32) {
        self.page_width = page_width;
    }

    pub fn attribute(&self) -> HorizontalPositionAttribute {
        self.attribute
    }
}

impl_keyframed!(PageConstraintAnimation, f32);

impl Animatable for PageConstraintAnimation {
    fn animate(&mut self, time: f32) {
        let Some(page) = self.animation.resolve(time) else {
            return;
        };
        let constant = (self.attribute.offset() + page) * self.page_width;
        apply_to_constraint(&self.constraint, &self.superview, constant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Keyframed;
    use glint_core::{Constraint, Rect, View};

    fn setup() -> (ViewHandle, ConstraintHandle) {
        let superview = View::new(Rect::new(0.0, 0.0, 640.0, 480.0)).into_handle();
        let item = View::default().into_handle();
        let constraint = Constraint::new(
            &item,
            HorizontalPositionAttribute::CenterX,
            &superview,
            LayoutAttribute::OriginX,
        )
        .into_handle();
        (superview, constraint)
    }

    #[test]
    fn test_constant_animation_requests_layout() {
        let (superview, constraint) = setup();
        let mut animation = ConstraintConstantAnimation::new(&superview, &constraint)
            .at(0.0, 0.0)
            .at(1.0, 100.0);

        animation.animate(0.5);

        assert_eq!(constraint.borrow().constant, 50.0);
        assert!(superview.borrow_mut().take_needs_layout());
    }

    #[test]
    fn test_empty_constant_animation_touches_nothing() {
        let (superview, constraint) = setup();
        ConstraintConstantAnimation::new(&superview, &constraint).animate(0.5);

        assert_eq!(constraint.borrow().constant, 0.0);
        assert!(!superview.borrow().needs_layout());
    }

    #[test]
    fn test_multiplier_reads_reference_live() {
        let (superview, constraint) = setup();
        let reference = View::new(Rect::new(0.0, 0.0, 200.0, 50.0)).into_handle();
        let mut animation = ConstraintMultiplierAnimation::new(
            &superview,
            &constraint,
            LayoutAttribute::Width,
            &reference,
        )
        .with_constant(10.0)
        .at(0.0, 0.5)
        .at(1.0, 1.0);

        animation.animate(0.0);
        assert_eq!(constraint.borrow().constant, 110.0);

        // Reference resizes between frames; the same time now yields a new constant
        reference.borrow_mut().frame = Rect::new(0.0, 0.0, 400.0, 50.0);
        animation.animate(0.0);
        assert_eq!(constraint.borrow().constant, 210.0);

        animation.animate(1.0);
        assert_eq!(constraint.borrow().constant, 410.0);
    }

    #[test]
    fn test_multiplier_with_dropped_reference_is_no_op() {
        let (superview, constraint) = setup();
        let reference = View::default().into_handle();
        let mut animation = ConstraintMultiplierAnimation::new(
            &superview,
            &constraint,
            LayoutAttribute::CenterY,
            &reference,
        )
        .at(0.0, 2.0);
        drop(reference);

        animation.animate(0.0);
        assert_eq!(constraint.borrow().constant, 0.0);
    }

    #[test]
    fn test_page_constraint_positions_anchor() {
        let (superview, constraint) = setup();
        let mut animation = PageConstraintAnimation::new(
            &superview,
            &constraint,
            320.0,
            HorizontalPositionAttribute::CenterX,
        )
        .at(0.0, 0.0)
        .at(1.0, 1.0);

        animation.animate(0.0);
        assert_eq!(constraint.borrow().constant, 160.0);
        animation.animate(1.0);
        assert_eq!(constraint.borrow().constant, 480.0);
    }

    #[test]
    fn test_page_constraint_tracks_page_width() {
        let (superview, constraint) = setup();
        let mut animation = PageConstraintAnimation::new(
            &superview,
            &constraint,
            320.0,
            HorizontalPositionAttribute::Right,
        )
        .at(0.0, 1.0);

        animation.animate(0.0);
        assert_eq!(constraint.borrow().constant, 640.0);

        animation.set_page_width(480.0);
        assert_eq!(animation.page_width(), 480.0);
        animation.animate(0.0);
        assert_eq!(constraint.borrow().constant, 960.0);
    }
}
