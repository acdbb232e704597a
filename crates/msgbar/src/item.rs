#![forbid(unsafe_code)]

//! Message requests and the per-item layout contract.
//!
//! A [`Message`] is what callers build; the manager turns it into a
//! [`MessageItem`], which carries the presentation state (frame, hit flag)
//! the manager owns once the item leaves the queue.

use std::fmt;
use std::time::Duration;

use msgbar_core::geometry::{Rect, Size};
use msgbar_core::text::line_count;

use crate::style::{Category, StyleSheet};
use crate::surface::ViewId;

/// Default display duration when the caller does not supply one.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Uniform padding between message edges, icon, and text, in points.
pub const PADDING: f32 = 10.0;

/// Fixed square size of the leading icon slot, in points.
pub const ICON_SIZE: f32 = 36.0;

/// Callback invoked when a message is dismissed by a user tap.
///
/// `FnOnce` makes at-most-once delivery structural: once the manager takes
/// and calls it, there is nothing left to call again.
pub type TapCallback = Box<dyn FnOnce() + 'static>;

/// A notification request.
///
/// Title and description may each be empty, but not both — that is a caller
/// contract, not a validated error (a degenerate bar is shown rather than a
/// failure reported).
pub struct Message {
    title: String,
    description: String,
    category: Category,
    duration: Duration,
    on_tap: Option<TapCallback>,
}

impl Message {
    /// Create a message with the default duration and no callback.
    pub fn new(
        category: Category,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            duration: DEFAULT_DURATION,
            on_tap: None,
        }
    }

    /// An error message.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Category::Error, title, description)
    }

    /// A success message.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Category::Success, title, description)
    }

    /// An informational message.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Category::Info, title, description)
    }

    /// Override the display duration.
    ///
    /// Non-positive durations are not validated; a zero duration fires the
    /// dismissal on the next tick.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Attach a callback fired if (and only if) the user taps the message.
    #[must_use]
    pub fn on_tap(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("category", &self.category)
            .field("duration", &self.duration)
            .field("has_callback", &self.on_tap.is_some())
            .finish()
    }
}

/// Layout of a message view, relative to the view's own origin.
///
/// All rectangles already account for the platform top inset; `size` is the
/// full frame size including that inset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    /// Overall frame size.
    pub size: Size,
    /// Leading icon slot.
    pub icon: Rect,
    /// Title text block. Zero-height when the title is empty.
    pub title: Rect,
    /// Description text block. Zero-height when the description is empty.
    pub description: Rect,
}

/// One queued or displayed notification.
///
/// Constructed from a [`Message`] when it enters the queue. Mutable
/// presentation state (`frame`, `hit`) is owned exclusively by the manager
/// once the item is dequeued for display.
pub struct MessageItem {
    id: ViewId,
    title: String,
    description: String,
    category: Category,
    duration: Duration,
    callback: Option<TapCallback>,
    has_callback: bool,
    hit: bool,
    frame: Rect,
}

impl MessageItem {
    pub(crate) fn from_message(id: ViewId, message: Message) -> Self {
        let has_callback = message.on_tap.is_some();
        Self {
            id,
            title: message.title,
            description: message.description,
            category: message.category,
            duration: message.duration,
            callback: message.on_tap,
            has_callback,
            hit: false,
            frame: Rect::default(),
        }
    }

    /// Stable identifier, used as the surface view key.
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Message category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Display duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether a real tap callback was supplied.
    pub fn has_callback(&self) -> bool {
        self.has_callback
    }

    /// Current frame in surface coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Set the hit flag, returning `false` if it was already set.
    ///
    /// This is the single race-resolution point between the duration timer
    /// and a user tap: the first caller to observe `false` wins.
    pub(crate) fn mark_hit(&mut self) -> bool {
        if self.hit {
            return false;
        }
        self.hit = true;
        true
    }

    pub(crate) fn is_hit(&self) -> bool {
        self.hit
    }

    pub(crate) fn take_callback(&mut self) -> Option<TapCallback> {
        self.callback.take()
    }

    /// Compute the natural layout for the current surface metrics.
    ///
    /// Width is always the live surface width; nothing is cached across
    /// calls, so a rotation simply yields a new layout. The top inset is
    /// added once to the overall height, not per text line.
    pub fn layout(&self, surface_width: f32, top_inset: f32, sheet: &dyn StyleSheet) -> ItemLayout {
        let title_font = sheet.title_font(self.category);
        let description_font = sheet.description_font(self.category);

        let avail = (surface_width - 3.0 * PADDING - ICON_SIZE).max(0.0);

        let title_cols = (avail / title_font.advance()).floor().max(1.0) as usize;
        let title_lines = line_count(&self.title, title_cols);
        let title_height = title_lines as f32 * title_font.line_height();

        let description_cols = (avail / description_font.advance()).floor().max(1.0) as usize;
        let description_lines = line_count(&self.description, description_cols);
        let description_height = description_lines as f32 * description_font.line_height();

        let content_height = ICON_SIZE.max(title_height + description_height);
        let height = content_height + 2.0 * PADDING + top_inset;

        let text_x = 2.0 * PADDING + ICON_SIZE;
        let title_y = if self.description.is_empty() {
            // No description: center the title in the bar (below the inset).
            top_inset + (height - top_inset - title_height) / 2.0
        } else {
            top_inset + PADDING
        };

        ItemLayout {
            size: Size::new(surface_width, height),
            icon: Rect::new(PADDING, top_inset + PADDING, ICON_SIZE, ICON_SIZE),
            title: Rect::new(text_x, title_y, avail, title_height),
            description: Rect::new(text_x, title_y + title_height, avail, description_height),
        }
    }
}

impl fmt::Debug for MessageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageItem")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("category", &self.category)
            .field("duration", &self.duration)
            .field("has_callback", &self.has_callback)
            .field("hit", &self.hit)
            .field("frame", &self.frame)
            .finish()
    }
}
