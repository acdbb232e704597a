#![forbid(unsafe_code)]

//! Transient message bars ("toasts") for the top of the screen.
//!
//! Build a [`Message`], hand it to a [`MessageBarManager`], and drive the
//! manager's [`tick`](MessageBarManager::tick) from the host frame loop.
//! Messages present one at a time, strictly in show order: each slides (or,
//! in bounce mode, drops and bounces) in from above the top edge, rests for
//! its duration, then slides back out. A tap dismisses early and fires the
//! message's callback once; timer dismissals never do.
//!
//! Rendering and input stay on the host side behind the
//! [`PresentationSurface`] trait. [`HeadlessSurface`] is an in-memory
//! implementation for tests and embedding experiments.
//!
//! ```
//! use std::time::Duration;
//! use msgbar::{HeadlessSurface, Message, MessageBarManager};
//!
//! let handle = HeadlessSurface::new(320.0);
//! let surface = handle.clone();
//! let mut manager = MessageBarManager::new(move || Box::new(surface.clone()));
//!
//! manager.show(Message::success("Saved", "Your changes are safe."));
//! assert!(manager.is_message_visible());
//!
//! // Host frame loop.
//! for _ in 0..300 {
//!     manager.tick(Duration::from_millis(16));
//! }
//! assert!(!manager.is_message_visible());
//! ```

pub mod animator;
pub mod item;
pub mod manager;
pub mod style;
pub mod surface;

pub use animator::{EnterAnimator, PhysicsBounce, SLIDE_DURATION, SlideEnter};
pub use item::{DEFAULT_DURATION, ICON_SIZE, ItemLayout, Message, MessageItem, PADDING};
pub use manager::MessageBarManager;
pub use style::{Category, Color, DefaultStyleSheet, Font, FontWeight, Icon, StyleSheet};
pub use surface::{DrawRecord, HeadlessSurface, PresentationSurface, SurfaceFactory, ViewId};
