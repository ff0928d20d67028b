//! Page-relative positioning for paging scroll views
//!
//! Progress through a paging scroll view is measured in pages: `0.0` is the
//! first page, `1.5` is halfway between the second and third. The
//! [`PagingScroller`] turns a horizontal content offset into that progress
//! and drives its [`Animator`] with it.
//!
//! Views are kept on pages with constraints against the content view, whose
//! width is `page_count * page_width`:
//!
//! - Static placement uses [`multiplier_for_page`] against the content
//!   view's center-x. The multiplier does not depend on the page width, so
//!   it stays valid across resizes.
//! - Animated placement uses a [`PageConstraintAnimation`] keyframed with
//!   page numbers against the content view's left edge. Its constant does
//!   depend on the page width, which [`PagingScroller::resize`] forwards.

use std::cell::RefCell;
use std::rc::Rc;

use glint_core::{
    Constraint, ConstraintHandle, HorizontalPositionAttribute, LayoutAttribute, Rect, Size, View,
    ViewHandle,
};

use crate::animation::Keyframed;
use crate::animator::Animator;
use crate::constraint::PageConstraintAnimation;
use crate::error::{AnimationError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout multiplier placing `attribute` of a view on `page`.
///
/// `2 * (offset(attribute) + page) / page_count`. Multiplied by the content
/// view's center-x (`page_count * page_width / 2`) this is the absolute x
/// position `(offset + page) * page_width`.
pub fn multiplier_for_page(
    page: f32,
    attribute: HorizontalPositionAttribute,
    page_count: usize,
) -> f32 {
    2.0 * (attribute.offset() + page) / page_count as f32
}

/// Paging layout configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagingConfig {
    /// Number of pages, at least one
    pub page_count: usize,
    /// Anchor used when a view is kept on a page without naming one
    pub default_attribute: HorizontalPositionAttribute,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_count: 2,
            default_attribute: HorizontalPositionAttribute::CenterX,
        }
    }
}

impl PagingConfig {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            ..Default::default()
        }
    }

    pub fn with_default_attribute(mut self, attribute: HorizontalPositionAttribute) -> Self {
        self.default_attribute = attribute;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_count == 0 {
            return Err(AnimationError::InvalidPageCount(self.page_count));
        }
        Ok(())
    }
}

/// Headless paging scroll view driving an [`Animator`] with page progress
pub struct PagingScroller {
    config: PagingConfig,
    animator: Animator,
    content_view: ViewHandle,
    /// Owned here; animations only hold weak references
    constraints: Vec<ConstraintHandle>,
    page_animations: Vec<Rc<RefCell<PageConstraintAnimation>>>,
    page_size: Size,
    content_offset_x: f32,
}

impl PagingScroller {
    /// Create a scroller whose pages are `page_size` each
    pub fn new(config: PagingConfig, page_size: Size) -> Result<Self> {
        config.validate()?;

        let content_view = View::new(content_frame(&config, page_size)).into_handle();
        tracing::debug!(
            "Created paging scroller: {} pages of {}x{}",
            config.page_count,
            page_size.width,
            page_size.height
        );

        Ok(Self {
            config,
            animator: Animator::new(),
            content_view,
            constraints: Vec::new(),
            page_animations: Vec::new(),
            page_size,
            content_offset_x: 0.0,
        })
    }

    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    pub fn page_count(&self) -> usize {
        self.config.page_count
    }

    pub fn page_width(&self) -> f32 {
        self.page_size.width
    }

    /// The view all paged content is laid out in
    pub fn content_view(&self) -> &ViewHandle {
        &self.content_view
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// Constraints created by the `keep_view*` family
    pub fn constraints(&self) -> &[ConstraintHandle] {
        &self.constraints
    }

    pub fn content_offset_x(&self) -> f32 {
        self.content_offset_x
    }

    /// Scroll progress in pages. Falls back to the raw offset when the page
    /// width is zero.
    pub fn page_offset(&self) -> f32 {
        let page_width = self.page_width();
        if page_width > 0.0 {
            self.content_offset_x / page_width
        } else {
            self.content_offset_x
        }
    }

    /// Scroll to a horizontal content offset and animate the new frame
    pub fn scroll_to(&mut self, content_offset_x: f32) {
        self.content_offset_x = content_offset_x;
        self.animate_current_frame();
    }

    /// Scroll so that `page` is in view
    pub fn scroll_to_page(&mut self, page: f32) {
        self.scroll_to(page * self.page_width());
    }

    pub fn animate_current_frame(&self) {
        self.animator.animate(self.page_offset());
    }

    /// Resize the pages, keeping the current page progress.
    ///
    /// Page animations get the new page width before the frame is
    /// re-animated.
    pub fn resize(&mut self, page_size: Size) {
        let page_offset = self.page_offset();
        tracing::debug!(
            "Resizing pages from {} to {} at page offset {}",
            self.page_width(),
            page_size.width,
            page_offset
        );

        self.page_size = page_size;
        for animation in &self.page_animations {
            animation.borrow_mut().set_page_width(page_size.width);
        }
        self.content_view.borrow_mut().frame = content_frame(&self.config, page_size);
        self.content_offset_x = page_offset * page_size.width;
        self.animate_current_frame();
    }

    /// Run a layout pass: place every constrained view horizontally
    pub fn layout(&self) {
        for constraint in &self.constraints {
            if !constraint.borrow().apply() {
                tracing::trace!("Skipping constraint with a dropped end");
            }
        }
        self.content_view.borrow_mut().take_needs_layout();
    }

    pub fn multiplier_for_page(&self, page: f32, attribute: HorizontalPositionAttribute) -> f32 {
        multiplier_for_page(page, attribute, self.page_count())
    }

    pub fn center_x_multiplier_for_page(&self, page: f32) -> f32 {
        self.multiplier_for_page(page, HorizontalPositionAttribute::CenterX)
    }

    pub fn left_multiplier_for_page(&self, page: f32) -> f32 {
        self.multiplier_for_page(page, HorizontalPositionAttribute::Left)
    }

    pub fn right_multiplier_for_page(&self, page: f32) -> f32 {
        self.multiplier_for_page(page, HorizontalPositionAttribute::Right)
    }

    /// Pin a view to `page` with the default anchor
    pub fn keep_view(&mut self, view: &ViewHandle, page: f32) -> ConstraintHandle {
        let attribute = self.config.default_attribute;
        self.keep_view_with_attribute(view, page, attribute)
    }

    /// Pin a view's `attribute` anchor to `page`
    pub fn keep_view_with_attribute(
        &mut self,
        view: &ViewHandle,
        page: f32,
        attribute: HorizontalPositionAttribute,
    ) -> ConstraintHandle {
        let constraint = Constraint::new(
            view,
            attribute,
            &self.content_view,
            LayoutAttribute::CenterX,
        )
        .with_multiplier(self.multiplier_for_page(page, attribute))
        .into_handle();
        self.constraints.push(constraint.clone());
        constraint
    }

    /// Move a view across `pages`, reaching `pages[i]` when the scroll
    /// progress is also `pages[i]`
    pub fn keep_view_on_pages(
        &mut self,
        view: &ViewHandle,
        pages: &[f32],
    ) -> Result<Rc<RefCell<PageConstraintAnimation>>> {
        self.keep_view_on_pages_at(view, pages, pages)
    }

    /// Move a view across pages, reaching `pages[i]` at progress `times[i]`
    pub fn keep_view_on_pages_at(
        &mut self,
        view: &ViewHandle,
        pages: &[f32],
        times: &[f32],
    ) -> Result<Rc<RefCell<PageConstraintAnimation>>> {
        let attribute = self.config.default_attribute;
        self.keep_view_on_pages_with(view, pages, times, attribute)
    }

    /// Move a view's `attribute` anchor across pages, reaching `pages[i]` at
    /// progress `times[i]`.
    ///
    /// The returned animation is already registered with the animator and
    /// receives page width updates from [`resize`](Self::resize).
    pub fn keep_view_on_pages_with(
        &mut self,
        view: &ViewHandle,
        pages: &[f32],
        times: &[f32],
        attribute: HorizontalPositionAttribute,
    ) -> Result<Rc<RefCell<PageConstraintAnimation>>> {
        if pages.len() != times.len() {
            return Err(AnimationError::MismatchedKeyframes {
                values: pages.len(),
                times: times.len(),
            });
        }

        let constraint = Constraint::new(
            view,
            attribute,
            &self.content_view,
            LayoutAttribute::OriginX,
        )
        .into_handle();
        let mut animation = PageConstraintAnimation::new(
            &self.content_view,
            &constraint,
            self.page_width(),
            attribute,
        );
        for (&time, &page) in times.iter().zip(pages) {
            animation.try_set_keyframe(time, page)?;
        }

        let animation = Rc::new(RefCell::new(animation));
        self.animator.add_animation(Rc::clone(&animation));
        self.page_animations.push(Rc::clone(&animation));
        self.constraints.push(constraint);
        Ok(animation)
    }
}

fn content_frame(config: &PagingConfig, page_size: Size) -> Rect {
    Rect::new(
        0.0,
        0.0,
        config.page_count as f32 * page_size.width,
        page_size.height,
    )
}

impl std::fmt::Debug for PagingScroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagingScroller")
            .field("config", &self.config)
            .field("page_size", &self.page_size)
            .field("content_offset_x", &self.content_offset_x)
            .field("animator", &self.animator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::HorizontalPositionAttribute::{CenterX, Left, Right};

    fn scroller(pages: usize) -> PagingScroller {
        PagingScroller::new(PagingConfig::new(pages), Size::new(320.0, 480.0)).unwrap()
    }

    #[test]
    fn test_multiplier_values_for_two_pages() {
        assert_eq!(multiplier_for_page(0.0, CenterX, 2), 0.5);
        assert_eq!(multiplier_for_page(1.0, CenterX, 2), 1.5);
        assert_eq!(multiplier_for_page(0.0, Left, 2), 0.0);
        assert_eq!(multiplier_for_page(1.0, Right, 2), 2.0);
    }

    #[test]
    fn test_multiplier_against_content_center_is_absolute_x() {
        for page_count in 1..5 {
            let page_width = 375.0;
            let content_center_x = page_count as f32 * page_width / 2.0;
            for page in 0..page_count {
                for attribute in [Left, CenterX, Right] {
                    let x = multiplier_for_page(page as f32, attribute, page_count)
                        * content_center_x;
                    let expected = (attribute.offset() + page as f32) * page_width;
                    assert!((x - expected).abs() < 1e-3);
                }
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: PagingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PagingConfig::default());
        assert_eq!(config.page_count, 2);
        assert_eq!(config.default_attribute, CenterX);

        let config: PagingConfig =
            serde_json::from_str(r#"{"page_count": 4, "default_attribute": "Left"}"#).unwrap();
        assert_eq!(config, PagingConfig::new(4).with_default_attribute(Left));
    }

    #[test]
    fn test_zero_pages_is_rejected() {
        let err = PagingScroller::new(PagingConfig::new(0), Size::new(320.0, 480.0)).unwrap_err();
        assert_eq!(err, AnimationError::InvalidPageCount(0));
    }

    #[test]
    fn test_page_offset() {
        let mut scroller = scroller(3);
        scroller.scroll_to(480.0);
        assert_eq!(scroller.page_offset(), 1.5);
        assert_eq!(scroller.content_view().borrow().frame.width(), 960.0);
    }

    #[test]
    fn test_page_offset_without_width() {
        let mut scroller =
            PagingScroller::new(PagingConfig::default(), Size::new(0.0, 0.0)).unwrap();
        scroller.scroll_to(12.0);
        assert_eq!(scroller.page_offset(), 12.0);
    }

    #[test]
    fn test_keep_view_static_multiplier() {
        let mut scroller = scroller(2);
        let view = View::new(Rect::new(0.0, 0.0, 100.0, 40.0)).into_handle();

        let constraint = scroller.keep_view(&view, 1.0);
        assert_eq!(constraint.borrow().multiplier, 1.5);

        scroller.layout();
        assert_eq!(view.borrow().frame.center().x, 480.0);
    }

    #[test]
    fn test_mismatched_pages_and_times() {
        let mut scroller = scroller(2);
        let view = View::default().into_handle();

        let err = scroller
            .keep_view_on_pages_at(&view, &[0.0, 1.0], &[0.0])
            .unwrap_err();
        assert_eq!(
            err,
            AnimationError::MismatchedKeyframes {
                values: 2,
                times: 1
            }
        );
        assert!(scroller.animator().is_empty());
        assert!(scroller.constraints().is_empty());
    }

    #[test]
    fn test_keep_view_on_pages_animates_with_scroll() {
        let mut scroller = scroller(2);
        let view = View::new(Rect::new(0.0, 0.0, 100.0, 40.0)).into_handle();
        let animation = scroller
            .keep_view_on_pages_with(&view, &[0.0, 1.0], &[0.0, 1.0], Left)
            .unwrap();
        assert_eq!(scroller.animator().len(), 1);

        scroller.scroll_to(160.0);
        scroller.layout();
        assert_eq!(view.borrow().frame.min_x(), 160.0);

        animation.borrow_mut().set_page_width(100.0);
        scroller.animate_current_frame();
        scroller.layout();
        assert_eq!(view.borrow().frame.min_x(), 50.0);
    }
}
