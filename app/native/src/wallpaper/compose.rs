//! Image compositing for per-output wallpapers.
//!
//! One source image and one target rectangle produce two derived images:
//!
//! - the **lock-screen** image: the source blurred, scaled preserving aspect
//!   ratio to cover the target, and center-cropped to it exactly;
//! - the **desktop** image: the source scaled preserving aspect ratio to fit,
//!   centered over the lock-screen image as backdrop so uncovered margins
//!   show the blur instead of a solid fill.
//!
//! Both results are exactly target-sized, always.

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage, imageops};

use crate::screen::Rect;

/// Target dimensions for the two derived images of one assignment.
///
/// `lock_screen` covers the target in both axes; `desktop` may be smaller
/// than the target in one axis (it is fitted, not cropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub desktop: Rect,
    pub lock_screen: Rect,
}

/// Computes the scaled dimensions for both derived images.
///
/// The desktop candidate locks the source to the target height, the
/// lock-screen candidate locks it to the target width, both with truncating
/// integer division. When the width-locked candidate would come out shorter
/// than the target (and therefore could not cover it), the two candidates
/// trade roles. The comparison is strict: a candidate exactly target-height
/// keeps the original roles.
///
/// Both input rectangles must have strictly positive dimensions.
#[must_use]
pub fn plan_layout(source: Rect, target: Rect) -> LayoutPlan {
    debug_assert!(source.is_positive(), "source bounds must be positive");
    debug_assert!(target.is_positive(), "target bounds must be positive");

    let desktop = Rect::new(scaled(source.width, target.height, source.height), target.height);
    let lock_screen = Rect::new(target.width, scaled(source.height, target.width, source.width));

    if lock_screen.height < target.height {
        LayoutPlan {
            desktop: lock_screen,
            lock_screen: desktop,
        }
    } else {
        LayoutPlan { desktop, lock_screen }
    }
}

/// `a * b / c` with truncating division, widened so the product cannot
/// overflow.
#[allow(clippy::cast_possible_truncation)] // quotient fits: b and the aspect ratio bound it
const fn scaled(a: u32, b: u32, c: u32) -> u32 {
    ((a as u64 * b as u64) / c as u64) as u32
}

/// The two generated images for one output, both exactly target-sized.
pub struct CompositeResult {
    pub desktop: RgbaImage,
    pub lock_screen: RgbaImage,
}

/// Renders the desktop and lock-screen images for one target rectangle.
///
/// The target must have strictly positive dimensions and the source must be a
/// decoded image (decoded rasters are never zero-sized).
#[must_use]
pub fn compose(source: &DynamicImage, target: Rect, blur_sigma: f32) -> CompositeResult {
    let bounds = Rect::new(source.width(), source.height());
    let plan = plan_layout(bounds, target);

    // Cover branch: blur the full source, scale to the lock candidate with a
    // linear filter, crop to the target anchored at its center. The plan
    // guarantees the candidate covers the target in both axes.
    let scaled_lock = source.blur(blur_sigma).resize_exact(
        plan.lock_screen.width,
        plan.lock_screen.height,
        FilterType::Triangle,
    );
    let crop_x = plan.lock_screen.width.saturating_sub(target.width) / 2;
    let crop_y = plan.lock_screen.height.saturating_sub(target.height) / 2;
    let lock_screen = scaled_lock
        .crop_imm(crop_x, crop_y, target.width, target.height)
        .to_rgba8();

    // Fit branch: scale to the desktop candidate and draw it centered over a
    // copy of the lock-screen image. The fitted image never exceeds the
    // target in either axis, so the offsets stay non-negative.
    let fitted = source
        .resize_exact(plan.desktop.width, plan.desktop.height, FilterType::Triangle)
        .to_rgba8();
    let mut desktop = lock_screen.clone();
    let offset_x = i64::from(target.width / 2) - i64::from(plan.desktop.width / 2);
    let offset_y = i64::from(target.height / 2) - i64::from(plan.desktop.height / 2);
    imageops::overlay(&mut desktop, &fitted, offset_x, offset_y);

    CompositeResult { desktop, lock_screen }
}
