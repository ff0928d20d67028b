//! Geometric attributes that animations and constraints target

use crate::geometry::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal anchor of a view within a page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HorizontalPositionAttribute {
    /// Left edge
    Left,
    /// Horizontal center
    #[default]
    CenterX,
    /// Right edge
    Right,
}

impl HorizontalPositionAttribute {
    /// Fraction of a page width the anchor sits at
    pub fn offset(&self) -> f32 {
        match self {
            HorizontalPositionAttribute::Left => 0.0,
            HorizontalPositionAttribute::CenterX => 0.5,
            HorizontalPositionAttribute::Right => 1.0,
        }
    }

    /// Read this anchor's x position from a frame
    pub fn value_in(&self, frame: &Rect) -> f32 {
        frame.min_x() + frame.width() * self.offset()
    }
}

/// Geometric facet of a reference frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayoutAttribute {
    OriginX,
    OriginY,
    CenterX,
    CenterY,
    Width,
    Height,
}

impl LayoutAttribute {
    /// Read the attribute's current value from a frame
    pub fn value_in(&self, frame: &Rect) -> f32 {
        match self {
            LayoutAttribute::OriginX => frame.min_x(),
            LayoutAttribute::OriginY => frame.min_y(),
            LayoutAttribute::CenterX => frame.min_x() + frame.width() / 2.0,
            LayoutAttribute::CenterY => frame.min_y() + frame.height() / 2.0,
            LayoutAttribute::Width => frame.width(),
            LayoutAttribute::Height => frame.height(),
        }
    }
}
