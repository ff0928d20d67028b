//! Onboarding Paging Demo
//!
//! A three page onboarding flow driven by simulated scroll offsets:
//! - A logo fades and shrinks while sliding from page 0 to page 1
//! - A title stays pinned to the center of page 2
//! - The pages resize halfway through, as on a device rotation
//!
//! Run with: RUST_LOG=debug cargo run -p glint_animation --example onboarding

use glint_animation::{
    AlphaAnimation, Easing, Interpolation, Keyframed, PagingConfig, PagingScroller, Result,
    ScaleAnimation,
};
use glint_core::{Rect, Size, View};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut scroller = PagingScroller::new(PagingConfig::new(3), Size::new(375.0, 667.0))?;

    let logo = View::new(Rect::new(0.0, 0.0, 120.0, 120.0)).into_handle();
    let title = View::new(Rect::new(0.0, 0.0, 200.0, 40.0)).into_handle();

    scroller.animator_mut().add(
        AlphaAnimation::new(&logo)
            .at_with(0.0, 1.0, Interpolation::Eased(Easing::EaseOutCubic))
            .at(1.0, 0.2),
    );
    scroller.animator_mut().add(
        ScaleAnimation::new(&logo)
            .at_with(0.0, 1.0, Easing::EASE_IN_OUT.into())
            .at(1.0, 0.5),
    );
    scroller.keep_view_on_pages(&logo, &[0.0, 1.0])?;
    scroller.keep_view(&title, 2.0);

    for step in 0..=8 {
        if step == 4 {
            scroller.resize(Size::new(667.0, 375.0));
        }
        let page = step as f32 * 0.25;
        scroller.scroll_to_page(page);
        scroller.layout();

        let state = logo.borrow();
        tracing::info!(
            "page {:.2}: logo x={:.1} alpha={:.2} scale={:.2}, title x={:.1}",
            scroller.page_offset(),
            state.frame.center().x,
            state.alpha,
            state.transform().elements[0],
            title.borrow().frame.center().x,
        );
    }

    Ok(())
}
