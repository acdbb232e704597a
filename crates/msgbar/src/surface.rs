#![forbid(unsafe_code)]

//! The presentation-surface boundary.
//!
//! A surface is the always-on-top overlay the host owns: it creates views
//! for mounted items, applies frames, draws through the live style sheet,
//! and passes touches through everywhere except message views. The manager
//! never draws pixels itself; it tells the surface what exists and where.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use msgbar_core::geometry::Rect;

use crate::item::{ItemLayout, MessageItem};
use crate::style::{Category, Color, StyleSheet};

/// Identifier of a mounted message view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

impl ViewId {
    /// Create a view id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Host-owned overlay that message views live on.
///
/// Implementations are free to be retained (create native views on `mount`)
/// or immediate (repaint on every `draw`). The manager calls `draw` once per
/// tick for the active view, reading the style sheet live — which is what
/// makes a sheet swap take effect on the next draw and never retroactively.
pub trait PresentationSurface {
    /// Current surface width in points.
    fn width(&self) -> f32;

    /// Platform top inset (status-bar equivalent), in points.
    fn top_inset(&self) -> f32 {
        0.0
    }

    /// Create a view for the item. Called once, before any draw.
    fn mount(&mut self, item: &MessageItem);

    /// Move/resize the view for `id`.
    fn set_frame(&mut self, id: ViewId, frame: Rect);

    /// Draw the item's view using the given sheet.
    fn draw(&mut self, item: &MessageItem, layout: &ItemLayout, sheet: &dyn StyleSheet);

    /// Destroy the view for `id`. Unknown ids are a silent no-op.
    fn unmount(&mut self, id: ViewId);

    /// Ids of all currently mounted message views.
    ///
    /// Used by `hide_all` to sweep the surface defensively; a well-behaved
    /// surface never has more than one.
    fn mounted_views(&self) -> Vec<ViewId>;
}

/// Creates the surface on first use. The manager caches the result for its
/// whole lifetime.
pub type SurfaceFactory = Box<dyn Fn() -> Box<dyn PresentationSurface>>;

/// One recorded draw call on a [`HeadlessSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRecord {
    /// View that was drawn.
    pub id: ViewId,
    /// Category at draw time.
    pub category: Category,
    /// Background color the live sheet returned.
    pub background: Color,
    /// Frame at draw time.
    pub frame: Rect,
}

#[derive(Debug)]
struct HeadlessState {
    width: f32,
    top_inset: f32,
    mounted: Vec<ViewId>,
    frames: HashMap<ViewId, Rect>,
    draws: Vec<DrawRecord>,
}

/// An in-memory surface that records every call.
///
/// Clones share state, so a test (or embedding host) can keep a handle while
/// the manager owns a boxed clone produced by the factory.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessSurface {
    /// Create a surface with the given width and no top inset.
    pub fn new(width: f32) -> Self {
        Self {
            state: Rc::new(RefCell::new(HeadlessState {
                width,
                top_inset: 0.0,
                mounted: Vec::new(),
                frames: HashMap::new(),
                draws: Vec::new(),
            })),
        }
    }

    /// Change the reported width (simulates a rotation).
    pub fn set_width(&self, width: f32) {
        self.state.borrow_mut().width = width;
    }

    /// Change the reported top inset.
    pub fn set_top_inset(&self, inset: f32) {
        self.state.borrow_mut().top_inset = inset;
    }

    /// Ids of currently mounted views.
    pub fn mounted(&self) -> Vec<ViewId> {
        self.state.borrow().mounted.clone()
    }

    /// Whether the view for `id` is mounted.
    pub fn is_mounted(&self, id: ViewId) -> bool {
        self.state.borrow().mounted.contains(&id)
    }

    /// Last applied frame for `id`, if any.
    pub fn frame_of(&self, id: ViewId) -> Option<Rect> {
        self.state.borrow().frames.get(&id).copied()
    }

    /// All draw calls recorded so far, oldest first.
    pub fn draws(&self) -> Vec<DrawRecord> {
        self.state.borrow().draws.clone()
    }

    /// Forget recorded draw calls.
    pub fn clear_draws(&self) {
        self.state.borrow_mut().draws.clear();
    }
}

impl PresentationSurface for HeadlessSurface {
    fn width(&self) -> f32 {
        self.state.borrow().width
    }

    fn top_inset(&self) -> f32 {
        self.state.borrow().top_inset
    }

    fn mount(&mut self, item: &MessageItem) {
        let mut state = self.state.borrow_mut();
        state.mounted.push(item.id());
        state.frames.insert(item.id(), item.frame());
    }

    fn set_frame(&mut self, id: ViewId, frame: Rect) {
        self.state.borrow_mut().frames.insert(id, frame);
    }

    fn draw(&mut self, item: &MessageItem, _layout: &ItemLayout, sheet: &dyn StyleSheet) {
        let record = DrawRecord {
            id: item.id(),
            category: item.category(),
            background: sheet.background_color(item.category()),
            frame: item.frame(),
        };
        self.state.borrow_mut().draws.push(record);
    }

    fn unmount(&mut self, id: ViewId) {
        let mut state = self.state.borrow_mut();
        state.mounted.retain(|mounted| *mounted != id);
        state.frames.remove(&id);
    }

    fn mounted_views(&self) -> Vec<ViewId> {
        self.state.borrow().mounted.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Message;
    use crate::style::DefaultStyleSheet;

    fn test_item(id: u64) -> MessageItem {
        MessageItem::from_message(ViewId::new(id), Message::info("t", "d"))
    }

    #[test]
    fn mount_and_unmount() {
        let handle = HeadlessSurface::new(320.0);
        let mut surface = handle.clone();
        let item = test_item(1);

        surface.mount(&item);
        assert!(handle.is_mounted(item.id()));
        assert_eq!(surface.mounted_views(), vec![item.id()]);

        surface.unmount(item.id());
        assert!(!handle.is_mounted(item.id()));
        assert!(handle.frame_of(item.id()).is_none());
    }

    #[test]
    fn unmount_unknown_id_is_noop() {
        let mut surface = HeadlessSurface::new(320.0);
        surface.unmount(ViewId::new(99));
    }

    #[test]
    fn set_frame_recorded() {
        let handle = HeadlessSurface::new(320.0);
        let mut surface = handle.clone();
        let item = test_item(1);
        surface.mount(&item);

        let frame = Rect::new(0.0, -10.0, 320.0, 56.0);
        surface.set_frame(item.id(), frame);
        assert_eq!(handle.frame_of(item.id()), Some(frame));
    }

    #[test]
    fn draw_queries_the_live_sheet() {
        let handle = HeadlessSurface::new(320.0);
        let mut surface = handle.clone();
        let item = test_item(1);
        let layout = item.layout(320.0, 0.0, &DefaultStyleSheet);

        surface.draw(&item, &layout, &DefaultStyleSheet);
        let draws = handle.draws();
        assert_eq!(draws.len(), 1);
        assert_eq!(
            draws[0].background,
            DefaultStyleSheet.background_color(item.category())
        );
    }

    #[test]
    fn width_changes_are_visible_through_clones() {
        let handle = HeadlessSurface::new(320.0);
        let surface = handle.clone();
        handle.set_width(480.0);
        assert_eq!(surface.width(), 480.0);
    }
}
