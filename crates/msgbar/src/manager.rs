#![forbid(unsafe_code)]

//! The presentation queue and its state machine.
//!
//! [`MessageBarManager`] is the sole mutator of queue state. Callers hand it
//! [`Message`]s from anywhere; it serializes them into a single-visible
//! presentation sequence: `Idle → Entering → Visible → Exiting → Idle`, one
//! item per cycle, strict FIFO.
//!
//! Everything asynchronous — the duration timer, animation settling — is a
//! per-item countdown advanced by [`MessageBarManager::tick`] from the
//! host's frame loop. There are no threads and no wall-clock reads, so the
//! only "races" are same-tick orderings, and those are resolved by the
//! per-item hit flag: the first of {timer, tap} to observe it unset wins.

use std::collections::VecDeque;
use std::mem;
use std::time::Duration;

use tracing::{debug, trace};

use msgbar_core::animation::{Slide, ease_in};
use msgbar_core::geometry::Rect;

use crate::animator::{EnterAnimator, PhysicsBounce, SLIDE_DURATION, SlideEnter};
use crate::item::{ItemLayout, Message, MessageItem};
use crate::style::{DefaultStyleSheet, StyleSheet};
use crate::surface::{PresentationSurface, SurfaceFactory, ViewId};

/// The item occupying the presentation slot, with its computed layout.
struct ActiveView {
    item: MessageItem,
    layout: ItemLayout,
}

/// Presentation slot state. At most one item is ever outside the queue.
enum Slot {
    /// Nothing displayed.
    Idle,
    /// Enter animation running. `remaining` is `Some` when the dismissal
    /// timer armed at attach (physics bounce) and counts down alongside the
    /// animation.
    Entering {
        view: ActiveView,
        animator: Box<dyn EnterAnimator>,
        remaining: Option<Duration>,
    },
    /// Resting at the top edge, waiting for the timer or a tap.
    Visible { view: ActiveView, remaining: Duration },
    /// Exit slide running. `tapped` records which trigger won.
    Exiting {
        view: ActiveView,
        slide: Slide,
        tapped: bool,
    },
}

/// Serializes show requests into an ordered, non-overlapping presentation
/// sequence of message bars at the top of the screen.
///
/// Construct one per overlay surface and keep it for the process lifetime;
/// the surface itself is created lazily through the injected factory on the
/// first [`show`](Self::show).
pub struct MessageBarManager {
    queue: VecDeque<MessageItem>,
    slot: Slot,
    sheet: Box<dyn StyleSheet>,
    factory: SurfaceFactory,
    surface: Option<Box<dyn PresentationSurface>>,
    bounce: bool,
    next_id: u64,
}

impl MessageBarManager {
    /// Create a manager that obtains its surface from `factory` on first use.
    pub fn new(factory: impl Fn() -> Box<dyn PresentationSurface> + 'static) -> Self {
        Self {
            queue: VecDeque::new(),
            slot: Slot::Idle,
            sheet: Box::new(DefaultStyleSheet),
            factory: Box::new(factory),
            surface: None,
            bounce: false,
            next_id: 1,
        }
    }

    /// Replace the built-in style sheet (builder).
    #[must_use]
    pub fn with_style_sheet(mut self, sheet: impl StyleSheet + 'static) -> Self {
        self.sheet = Box::new(sheet);
        self
    }

    /// Use the physics bounce for enter animations instead of the slide.
    ///
    /// Set once at construction; applies to every message. The exit is
    /// always the fixed slide regardless.
    #[must_use]
    pub fn bounce(mut self, enabled: bool) -> Self {
        self.bounce = enabled;
        self
    }

    /// Queue a message for presentation.
    ///
    /// If nothing is currently displayed, presentation of this message
    /// starts synchronously within this call; otherwise it waits its turn.
    /// Never fails.
    pub fn show(&mut self, message: Message) {
        let id = ViewId::new(self.next_id);
        self.next_id += 1;
        let item = MessageItem::from_message(id, message);
        debug!(id = id.0, category = ?item.category(), "message enqueued");
        self.queue.push_back(item);
        self.surface_mut();
        if matches!(self.slot, Slot::Idle) {
            self.advance();
        }
    }

    /// Report a user tap on the displayed message.
    ///
    /// Begins the exit animation and, on its completion, fires the item's
    /// callback (if any). Taps while nothing is displayed, or while the item
    /// is already dismissing, are silently absorbed.
    pub fn tap(&mut self) {
        let slot = mem::replace(&mut self.slot, Slot::Idle);
        match slot {
            // The hit guard: an item already dismissing (hit flag set) must
            // not restart the exit or re-arm callback delivery. Dropping the
            // Entering animator detaches the physics before the exit slide.
            Slot::Entering { view, .. } | Slot::Visible { view, .. } if !view.item.is_hit() => {
                self.begin_exit(view, true);
            }
            other => self.slot = other,
        }
    }

    /// Dismiss the displayed message and discard everything queued.
    ///
    /// Pending dismissal timers are cancelled; queued callbacks are never
    /// invoked. With `animated`, the displayed item slides out first;
    /// otherwise it is disposed immediately. The queue is empty afterwards,
    /// so no follow-up presentation starts.
    pub fn hide_all(&mut self, animated: bool) {
        let discarded = self.queue.len();
        self.queue.clear();

        let slot = mem::replace(&mut self.slot, Slot::Idle);
        match slot {
            Slot::Idle => {}
            // Dropping the slot cancels the item's countdown; nothing stale
            // can fire after the view is gone.
            Slot::Entering { view, .. } | Slot::Visible { view, .. } => {
                self.retire(view, animated);
            }
            Slot::Exiting { view, slide, .. } => {
                if animated {
                    // Let the running exit finish, but without callback
                    // delivery: hide_all is not a user interaction.
                    self.slot = Slot::Exiting {
                        view,
                        slide,
                        tapped: false,
                    };
                } else {
                    let id = view.item.id();
                    self.surface_mut().unmount(id);
                }
            }
        }

        // Sweep the surface for any message view we are not tracking. A
        // well-behaved surface has at most the one exiting view.
        let Self { surface, slot, .. } = self;
        if let Some(surface) = surface.as_mut() {
            let keep = match slot {
                Slot::Exiting { view, .. } => Some(view.item.id()),
                _ => None,
            };
            for id in surface.mounted_views() {
                if Some(id) != keep {
                    surface.unmount(id);
                }
            }
        }
        debug!(discarded, animated, "hide_all");
    }

    /// Replace the active style sheet.
    ///
    /// Takes effect on the next draw — including the currently displayed
    /// item, since draws read the sheet live. Layout already computed for
    /// the displayed item is not revisited.
    pub fn set_style_sheet(&mut self, sheet: impl StyleSheet + 'static) {
        self.sheet = Box::new(sheet);
    }

    /// Re-measure the displayed item against the current surface width and
    /// top inset.
    ///
    /// Call on rotation or size-class changes. Only frame geometry changes;
    /// the running animation and the dismissal timer are untouched.
    pub fn update_message_frames(&mut self) {
        let Self {
            surface,
            slot,
            sheet,
            ..
        } = self;
        let Some(surface) = surface.as_mut() else {
            return;
        };
        match slot {
            Slot::Idle => {}
            Slot::Entering { view, animator, .. } => {
                reframe(&mut **surface, sheet.as_ref(), view, animator.offset());
            }
            Slot::Visible { view, .. } => reframe(&mut **surface, sheet.as_ref(), view, 0.0),
            Slot::Exiting { view, slide, .. } => {
                reframe(&mut **surface, sheet.as_ref(), view, slide.position());
            }
        }
    }

    /// Advance animations and timers by `dt`.
    ///
    /// Drive this from the host's frame loop. All state transitions happen
    /// here or synchronously inside the public calls — never on a
    /// background thread.
    pub fn tick(&mut self, dt: Duration) {
        let slot = mem::replace(&mut self.slot, Slot::Idle);
        match slot {
            Slot::Idle => {}
            Slot::Entering {
                mut view,
                mut animator,
                mut remaining,
            } => {
                animator.tick(dt);
                self.apply_frame(&mut view, animator.offset());
                self.draw(&view);

                let timed_out = match remaining.as_mut() {
                    Some(rem) => {
                        *rem = rem.saturating_sub(dt);
                        rem.is_zero()
                    }
                    None => false,
                };

                if timed_out {
                    // Timer armed at attach can fire mid-bounce; dropping
                    // the animator detaches the physics.
                    self.begin_exit(view, false);
                } else if animator.is_settled() {
                    trace!(id = view.item.id().0, "enter animation settled");
                    let remaining = remaining.unwrap_or_else(|| view.item.duration());
                    self.slot = Slot::Visible { view, remaining };
                } else {
                    self.slot = Slot::Entering {
                        view,
                        animator,
                        remaining,
                    };
                }
            }
            Slot::Visible { view, remaining } => {
                let remaining = remaining.saturating_sub(dt);
                self.draw(&view);
                if remaining.is_zero() {
                    self.begin_exit(view, false);
                } else {
                    self.slot = Slot::Visible { view, remaining };
                }
            }
            Slot::Exiting {
                mut view,
                mut slide,
                tapped,
            } => {
                slide.tick(dt);
                self.apply_frame(&mut view, slide.position());
                self.draw(&view);
                if slide.is_complete() {
                    self.finish_exit(view, tapped);
                } else {
                    self.slot = Slot::Exiting {
                        view,
                        slide,
                        tapped,
                    };
                }
            }
        }
    }

    /// Whether an item is currently presenting or dismissing.
    pub fn is_message_visible(&self) -> bool {
        !matches!(self.slot, Slot::Idle)
    }

    /// Number of messages waiting behind the displayed one.
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// The active style sheet.
    pub fn style_sheet(&self) -> &dyn StyleSheet {
        self.sheet.as_ref()
    }

    /// Present the head of the queue. No-op unless the slot is idle and the
    /// queue is non-empty, so misordered internal calls are harmless.
    fn advance(&mut self) {
        if !matches!(self.slot, Slot::Idle) {
            return;
        }
        let Some(mut item) = self.queue.pop_front() else {
            return;
        };

        let (width, inset) = {
            let surface = self.surface_mut();
            (surface.width(), surface.top_inset())
        };
        let layout = item.layout(width, inset, self.sheet.as_ref());
        let height = layout.size.height;
        // Start just off-screen above the display area.
        item.set_frame(Rect::new(0.0, -height, layout.size.width, height));

        debug!(id = item.id().0, height, bounce = self.bounce, "presenting message");
        let surface = self.surface_mut();
        surface.mount(&item);
        surface.set_frame(item.id(), item.frame());

        let animator: Box<dyn EnterAnimator> = if self.bounce {
            Box::new(PhysicsBounce::new(height))
        } else {
            Box::new(SlideEnter::new(height))
        };
        let remaining = animator.arms_timer_on_attach().then(|| item.duration());
        self.slot = Slot::Entering {
            view: ActiveView { item, layout },
            animator,
            remaining,
        };
    }

    /// Start the exit slide for `view`. Sets the hit flag first, closing
    /// the timer/tap race before any animation state changes.
    fn begin_exit(&mut self, mut view: ActiveView, tapped: bool) {
        let first = view.item.mark_hit();
        debug_assert!(first, "dismissal started twice for one item");
        debug!(id = view.item.id().0, tapped, "dismissing message");

        let from = view.item.frame().y;
        let slide = Slide::new(from, -view.layout.size.height, SLIDE_DURATION).easing(ease_in);
        self.slot = Slot::Exiting {
            view,
            slide,
            tapped,
        };
    }

    /// Dispose the exited view, deliver the callback if a tap won, and pull
    /// the next item. The slot is idle before either happens, which makes
    /// the `advance` below the one legitimate re-entry into presentation.
    fn finish_exit(&mut self, mut view: ActiveView, tapped: bool) {
        self.slot = Slot::Idle;
        let id = view.item.id();
        self.surface_mut().unmount(id);
        if tapped && let Some(callback) = view.item.take_callback() {
            callback();
        }
        debug!(id = id.0, "message disposed");
        if !self.queue.is_empty() {
            self.advance();
        }
    }

    /// hide_all path for an entering or visible item.
    fn retire(&mut self, mut view: ActiveView, animated: bool) {
        view.item.mark_hit();
        if animated {
            let from = view.item.frame().y;
            let slide = Slide::new(from, -view.layout.size.height, SLIDE_DURATION).easing(ease_in);
            self.slot = Slot::Exiting {
                view,
                slide,
                tapped: false,
            };
        } else {
            let id = view.item.id();
            self.surface_mut().unmount(id);
        }
    }

    fn apply_frame(&mut self, view: &mut ActiveView, y: f32) {
        let frame = Rect::new(0.0, y, view.layout.size.width, view.layout.size.height);
        view.item.set_frame(frame);
        self.surface_mut().set_frame(view.item.id(), frame);
    }

    fn draw(&mut self, view: &ActiveView) {
        let Self { surface, sheet, .. } = self;
        if let Some(surface) = surface.as_mut() {
            surface.draw(&view.item, &view.layout, sheet.as_ref());
        }
    }

    fn surface_mut(&mut self) -> &mut Box<dyn PresentationSurface> {
        let Self {
            surface, factory, ..
        } = self;
        surface.get_or_insert_with(|| factory())
    }
}

/// Recompute layout for the current surface metrics and pin the frame at
/// vertical offset `y`, leaving animation and timer state alone.
fn reframe(
    surface: &mut dyn PresentationSurface,
    sheet: &dyn StyleSheet,
    view: &mut ActiveView,
    y: f32,
) {
    let (width, inset) = (surface.width(), surface.top_inset());
    view.layout = view.item.layout(width, inset, sheet);
    let frame = Rect::new(0.0, y, view.layout.size.width, view.layout.size.height);
    view.item.set_frame(frame);
    surface.set_frame(view.item.id(), frame);
}
