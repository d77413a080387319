//! Landing detection
//!
//! Landing only samples where the jumper's feet are on the current tick, not
//! the path travelled since the previous one. A fall speed larger than the
//! platform height can therefore step straight past a platform between two
//! ticks. With the default tunables (fall 5, platform 15) it cannot happen;
//! it is left this way because a swept test would change how landings feel.

use super::bounds::Bounds;
use super::platform::Platform;

/// Check whether an actor is standing on a platform
///
/// The actor's bottom edge must lie within the platform's vertical band
/// (both edges inclusive) and the horizontal extents must overlap (edges
/// inclusive). Inclusive edges matter: with discrete steps the feet can sit
/// exactly on `top` or `bottom` and must still land.
pub fn lands_on(actor: &Bounds, platform: &Bounds) -> bool {
    // Vertical band first; it rejects most platforms
    if !platform.spans_height(actor.bottom) {
        return false;
    }
    platform.overlaps_horizontally(actor)
}

/// Check an actor against every platform
pub fn lands_on_any<'a>(actor: &Bounds, platforms: impl IntoIterator<Item = &'a Platform>) -> bool {
    platforms
        .into_iter()
        .any(|platform| lands_on(actor, &platform.bounds))
}
