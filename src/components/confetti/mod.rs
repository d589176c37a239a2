//! Falling confetti overlay.
//!
//! Colored pieces drop from above the viewport, drift right with a sine
//! wobble, tumble as they fall and are removed once they pass the bottom edge.
//!
//! The effect is split in two layers:
//! - A host-agnostic core: [`ConfettiController`] advances particles through a
//!   [`Surface`], and [`FrameLoop`] schedules it on a [`FrameClock`].
//! - Browser glue: DOM surface and `requestAnimationFrame` clock, exposed as the
//!   [`ConfettiOverlay`] Leptos component and the JS-facing [`Confetti`] class.
//!
//! # Example
//!
//! ```ignore
//! let (running, set_running) = signal(true);
//! view! { <ConfettiOverlay running=running /> }
//! ```

mod bindings;
mod browser;
pub mod clock;
mod component;
pub mod controller;
mod error;
pub mod particles;
pub mod surface;
pub mod theme;
mod types;

pub use bindings::Confetti;
pub use browser::{BrowserClock, BrowserLoop, DomSurface, SharedLoop, mount};
pub use clock::{FrameClock, FrameLoop};
pub use component::ConfettiOverlay;
pub use controller::ConfettiController;
pub use error::{ConfigError, MountError};
pub use surface::{Surface, Viewport};
pub use theme::Palette;
pub use types::{ConfettiConfig, ConfettiOptions, Stacking};
