//! Animation targets owned by the host
//!
//! The host owns views and constraints through [`Handle`]s. Animations only
//! ever keep a [`WeakHandle`], so dropping a view on the host side silently
//! detaches every animation that targets it.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::attribute::{HorizontalPositionAttribute, LayoutAttribute};
use crate::geometry::{Affine2D, Color, Rect};

/// Owning, shared handle to a host object
pub struct Handle<T>(Rc<RefCell<T>>);

impl<T> Handle<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Create a non-owning handle to the same object
    pub fn downgrade(&self) -> WeakHandle<T> {
        WeakHandle(Rc::downgrade(&self.0))
    }

    pub fn ptr_eq(&self, other: &Handle<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.0).finish()
    }
}

/// Non-owning handle to a host object
pub struct WeakHandle<T>(Weak<RefCell<T>>);

impl<T> WeakHandle<T> {
    pub fn upgrade(&self) -> Option<Handle<T>> {
        self.0.upgrade().map(Handle)
    }

    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Read the target if it is still alive
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let target = self.0.upgrade()?;
        let target = target.borrow();
        Some(f(&target))
    }

    /// Mutate the target if it is still alive
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let target = self.0.upgrade()?;
        let mut target = target.borrow_mut();
        Some(f(&mut target))
    }
}

impl<T> Clone for WeakHandle<T> {
    fn clone(&self) -> Self {
        Self(Weak::clone(&self.0))
    }
}

impl<T> fmt::Debug for WeakHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

pub type ViewHandle = Handle<View>;
pub type WeakView = WeakHandle<View>;
pub type ConstraintHandle = Handle<Constraint>;
pub type WeakConstraint = WeakHandle<Constraint>;

// ─────────────────────────────────────────────────────────────────────────────
// View
// ─────────────────────────────────────────────────────────────────────────────

/// Visual state of a host view
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub frame: Rect,
    pub alpha: f32,
    pub background_color: Color,
    pub tint_color: Color,
    pub corner_radius: f32,
    pub hidden: bool,
    scale_transform: Option<Affine2D>,
    rotation_transform: Option<Affine2D>,
    translation_transform: Option<Affine2D>,
    transform: Affine2D,
    needs_layout: bool,
}

impl Default for View {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl View {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            alpha: 1.0,
            background_color: Color::TRANSPARENT,
            tint_color: Color::BLUE,
            corner_radius: 0.0,
            hidden: false,
            scale_transform: None,
            rotation_transform: None,
            translation_transform: None,
            transform: Affine2D::IDENTITY,
            needs_layout: false,
        }
    }

    /// Wrap the view in an owning handle
    pub fn into_handle(self) -> ViewHandle {
        Handle::new(self)
    }

    /// The composed transform (translation ∘ rotation ∘ scale)
    pub fn transform(&self) -> Affine2D {
        self.transform
    }

    pub fn scale_transform(&self) -> Option<Affine2D> {
        self.scale_transform
    }

    pub fn rotation_transform(&self) -> Option<Affine2D> {
        self.rotation_transform
    }

    pub fn translation_transform(&self) -> Option<Affine2D> {
        self.translation_transform
    }

    pub fn set_scale_transform(&mut self, transform: Affine2D) {
        self.scale_transform = Some(transform);
        self.recompose_transform();
    }

    pub fn set_rotation_transform(&mut self, transform: Affine2D) {
        self.rotation_transform = Some(transform);
        self.recompose_transform();
    }

    pub fn set_translation_transform(&mut self, transform: Affine2D) {
        self.translation_transform = Some(transform);
        self.recompose_transform();
    }

    /// Replace all three facets with a single recomposition
    pub fn set_transform_facets(
        &mut self,
        scale: Affine2D,
        rotation: Affine2D,
        translation: Affine2D,
    ) {
        self.scale_transform = Some(scale);
        self.rotation_transform = Some(rotation);
        self.translation_transform = Some(translation);
        self.recompose_transform();
    }

    // Missing facets act as identity; scale is applied first.
    fn recompose_transform(&mut self) {
        let scale = self.scale_transform.unwrap_or(Affine2D::IDENTITY);
        let rotation = self.rotation_transform.unwrap_or(Affine2D::IDENTITY);
        let translation = self.translation_transform.unwrap_or(Affine2D::IDENTITY);
        self.transform = translation.then(&rotation).then(&scale);
    }

    /// Ask the host to run a layout pass before the next frame
    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Clear and return the pending layout request
    pub fn take_needs_layout(&mut self) -> bool {
        std::mem::take(&mut self.needs_layout)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Constraint
// ─────────────────────────────────────────────────────────────────────────────

/// A linear horizontal layout constraint:
/// `item.attribute = multiplier * reference.reference_attribute + constant`
///
/// Both ends are non-owning. The constraint only stores the relation;
/// resolving it against live geometry is up to whoever lays out the item.
#[derive(Clone, Debug)]
pub struct Constraint {
    pub item: WeakView,
    pub attribute: HorizontalPositionAttribute,
    pub reference: WeakView,
    pub reference_attribute: LayoutAttribute,
    pub multiplier: f32,
    pub constant: f32,
}

impl Constraint {
    pub fn new(
        item: &ViewHandle,
        attribute: HorizontalPositionAttribute,
        reference: &ViewHandle,
        reference_attribute: LayoutAttribute,
    ) -> Self {
        Self {
            item: item.downgrade(),
            attribute,
            reference: reference.downgrade(),
            reference_attribute,
            multiplier: 1.0,
            constant: 0.0,
        }
    }

    pub fn with_multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_constant(mut self, constant: f32) -> Self {
        self.constant = constant;
        self
    }

    pub fn into_handle(self) -> ConstraintHandle {
        Handle::new(self)
    }

    /// Position the item's anchor resolves to, read from the live reference
    pub fn resolve(&self) -> Option<f32> {
        let attribute = self.reference_attribute;
        let reference = self.reference.with(|view| attribute.value_in(&view.frame))?;
        Some(self.multiplier * reference + self.constant)
    }

    /// Move the item horizontally so its anchor sits at the resolved
    /// position. Returns false if either end is gone.
    pub fn apply(&self) -> bool {
        let Some(x) = self.resolve() else {
            return false;
        };
        let offset = self.attribute.offset();
        self.item
            .with_mut(|view| view.frame = view.frame.with_x(x - view.frame.width() * offset))
            .is_some()
    }
}
