//! Glint Core
//!
//! Foundational types shared by the Glint animation crates:
//!
//! - **Geometry**: points, sizes, rects, affine transforms and colors
//! - **Attributes**: closed enumerations naming which geometric facet a
//!   constraint or animation reads or writes
//! - **Targets**: host-owned views and layout constraints, reachable from
//!   animations only through non-owning handles

pub mod attribute;
pub mod geometry;
pub mod view;

pub use attribute::{HorizontalPositionAttribute, LayoutAttribute};
pub use geometry::{Affine2D, Color, Point, Rect, Size, TransformComponents};
pub use view::{
    Constraint, ConstraintHandle, Handle, View, ViewHandle, WeakConstraint, WeakHandle,
    WeakView,
};
