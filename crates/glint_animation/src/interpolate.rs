//! Interpolatable value types
//!
//! Composite values interpolate component-wise on their decomposed form:
//! colors per channel, rects per coordinate, transforms per facet.

use glint_core::{Color, Point, Rect, Size, TransformComponents};

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

/// Booleans cannot blend; the value flips only once the segment completes.
impl Interpolate for bool {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        if t >= 1.0 {
            *other
        } else {
            *self
        }
    }

    fn approx_eq(&self, other: &Self, _epsilon: f32) -> bool {
        self == other
    }
}

impl Interpolate for Point {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Point::new(self.x.lerp(&other.x, t), self.y.lerp(&other.y, t))
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.approx_eq(&other.x, epsilon) && self.y.approx_eq(&other.y, epsilon)
    }
}

impl Interpolate for Size {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Size::new(
            self.width.lerp(&other.width, t),
            self.height.lerp(&other.height, t),
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.width.approx_eq(&other.width, epsilon)
            && self.height.approx_eq(&other.height, epsilon)
    }
}

impl Interpolate for Rect {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Rect::from_origin_size(
            self.origin.lerp(&other.origin, t),
            self.size.lerp(&other.size, t),
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.origin.approx_eq(&other.origin, epsilon) && self.size.approx_eq(&other.size, epsilon)
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::rgba(
            self.r.lerp(&other.r, t),
            self.g.lerp(&other.g, t),
            self.b.lerp(&other.b, t),
            self.a.lerp(&other.a, t),
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

impl Interpolate for TransformComponents {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        TransformComponents {
            scale: self.scale.lerp(&other.scale, t),
            rotation: self.rotation.lerp(&other.rotation, t),
            translation: self.translation.lerp(&other.translation, t),
        }
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.scale.approx_eq(&other.scale, epsilon)
            && self.rotation.approx_eq(&other.rotation, epsilon)
            && self.translation.approx_eq(&other.translation, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_color_channels_blend_independently() {
        let from = Color::rgba(1.0, 0.0, 0.0, 1.0);
        let to = Color::rgba(0.0, 0.0, 1.0, 0.0);
        let mid = from.lerp(&to, 0.5);

        assert!(mid.approx_eq(&Color::rgba(0.5, 0.0, 0.5, 0.5), 1e-6));
    }

    #[test]
    fn test_transform_facets_blend_independently() {
        let from = TransformComponents::IDENTITY;
        let to = TransformComponents {
            scale: Size::new(3.0, 1.0),
            rotation: 180.0,
            translation: Point::new(0.0, -20.0),
        };
        let mid = from.lerp(&to, 0.5);

        // A full-matrix blend would collapse the 90° rotation; facets keep it.
        assert!(mid.rotation.approx_eq(&90.0, 1e-4));
        assert!(mid.scale.approx_eq(&Size::new(2.0, 1.0), 1e-6));
        assert!(mid.translation.approx_eq(&Point::new(0.0, -10.0), 1e-6));
    }

    #[test]
    fn test_rect_interpolation() {
        let from = Rect::new(0.0, 0.0, 10.0, 10.0);
        let to = Rect::new(100.0, 50.0, 30.0, 20.0);
        let quarter = from.lerp(&to, 0.25);

        assert!(quarter.approx_eq(&Rect::new(25.0, 12.5, 15.0, 12.5), 1e-5));
    }

    #[test]
    fn test_bool_flips_at_segment_end() {
        assert!(!false.lerp(&true, 0.99));
        assert!(false.lerp(&true, 1.0));
    }
}
