// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use graphview_imaging::{BezPath, DrawOp, DrawingSurface, DrawingSurfaceExt, Size};
use graphview_view2d::{Axis, AxisSpan, SubscriptionId, ViewportState, ViewportTransform};

use crate::lines::{Skip, line_positions};
use crate::style::{GridStyle, GridTier};

/// A host hook for scheduling a redraw of the canvas.
///
/// Implemented for any `Fn()` closure.
pub trait RepaintRequest {
    /// Asks the host to call [`GridRenderer::paint`] soon.
    fn request_repaint(&self);
}

impl<F: Fn()> RepaintRequest for F {
    fn request_repaint(&self) {
        self();
    }
}

/// Draws the adaptive background grid of a graph canvas.
///
/// The renderer never mutates the viewport. It subscribes to a
/// [`ViewportTransform`]'s change notifications to learn when the grid is
/// stale, and it reads a [`ViewportState`] each time it paints.
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use graphview_grid::GridRenderer;
/// use graphview_imaging::Size;
/// use graphview_imaging_ref::RecordingSurface;
/// use graphview_view2d::ViewportTransform;
///
/// let mut transform = ViewportTransform::default();
/// let mut grid = GridRenderer::default();
///
/// let requests = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&requests);
/// grid.attach(&mut transform, Rc::new(move || counter.set(counter.get() + 1)));
///
/// let mut surface = RecordingSurface::new(Size::new(700.0, 700.0));
/// grid.paint(transform.state(), &mut surface);
/// assert!(!grid.needs_repaint());
///
/// transform.handle_scroll(120.0).unwrap();
/// assert!(grid.needs_repaint());
/// assert_eq!(requests.get(), 1);
/// ```
pub struct GridRenderer {
    style: GridStyle,
    pending: Rc<Cell<bool>>,
    /// Bumped on every attach and detach; handlers from an older attachment
    /// see a different value and do nothing.
    generation: Rc<Cell<u64>>,
    subscriptions: Option<[SubscriptionId; 2]>,
    scratch: Vec<f64>,
}

impl GridRenderer {
    /// Creates a detached renderer drawing `style`.
    ///
    /// A new renderer needs a repaint until its first [`paint`](Self::paint).
    #[must_use]
    pub fn new(style: GridStyle) -> Self {
        Self {
            style,
            pending: Rc::new(Cell::new(true)),
            generation: Rc::new(Cell::new(0)),
            subscriptions: None,
            scratch: Vec::new(),
        }
    }

    /// The style being drawn.
    #[must_use]
    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    /// Replaces the style and marks the grid stale.
    pub fn set_style(&mut self, style: GridStyle) {
        self.style = style;
        self.pending.set(true);
    }

    /// Subscribes to `transform`'s scale and translation notifications.
    ///
    /// Each notification marks the grid stale. The first notification after
    /// a paint also calls `host`; later ones before the next paint only keep
    /// the grid marked, so the host is asked at most once per frame.
    ///
    /// Attaching an already attached renderer replaces its subscriptions.
    /// When the earlier attachment was to a different transform, its handlers
    /// stay registered there but no longer mark the grid; call
    /// [`detach`](Self::detach) first to remove them.
    pub fn attach(&mut self, transform: &mut ViewportTransform, host: Rc<dyn RepaintRequest>) {
        self.generation.set(self.generation.get().wrapping_add(1));
        if let Some(ids) = self.subscriptions.take() {
            if ids.iter().all(|&id| transform.issued(id)) {
                log::warn!("grid renderer attached twice; replacing subscriptions");
                for id in ids {
                    transform.unsubscribe(id);
                }
            } else {
                log::warn!("grid renderer moved to another transform without detaching");
            }
        }
        let on_scale = stale_marker(&self.pending, &self.generation, Rc::clone(&host));
        let on_translation = stale_marker(&self.pending, &self.generation, host);
        let scale_id = transform.on_scale_changed(move |_| on_scale());
        let translation_id = transform.on_translation_changed(move |_| on_translation());
        self.subscriptions = Some([scale_id, translation_id]);
    }

    /// Removes the subscriptions made by [`attach`](Self::attach).
    ///
    /// Returns `false` if the renderer was not attached, or was attached to a
    /// different transform; in that case nothing changes.
    pub fn detach(&mut self, transform: &mut ViewportTransform) -> bool {
        let Some(ids) = self.subscriptions else {
            return false;
        };
        if !ids.iter().all(|&id| transform.issued(id)) {
            log::warn!("grid renderer detached from a transform it is not attached to");
            return false;
        }
        for id in ids {
            transform.unsubscribe(id);
        }
        self.subscriptions = None;
        self.generation.set(self.generation.get().wrapping_add(1));
        true
    }

    /// Returns `true` while attached to a transform.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscriptions.is_some()
    }

    /// Returns `true` if the viewport or style changed since the last paint.
    #[must_use]
    pub fn needs_repaint(&self) -> bool {
        self.pending.get()
    }

    /// Redraws the whole grid for `viewport` onto `surface`.
    ///
    /// Clears the surface, then strokes each visible tier in style order,
    /// clipped to the surface. Each tier that places at least one line is a
    /// single stroke; tiers with nothing visible issue no stroke at all.
    pub fn paint<S>(&mut self, viewport: &ViewportState, surface: &mut S)
    where
        S: DrawingSurface + ?Sized,
    {
        self.pending.set(false);

        let geometry = viewport.geometry(surface.size());
        let bounds = geometry.canvas_rect();
        surface.draw(DrawOp::Clear(bounds));
        if bounds.is_zero_area() {
            log::trace!("grid paint skipped: empty canvas");
            return;
        }

        let scale = geometry.scale();
        let columns = geometry.span(Axis::X);
        let rows = geometry.span(Axis::Y);
        let canvas = geometry.canvas_size();
        let stroke = self.style.stroke();
        let scratch = &mut self.scratch;

        surface.with_clip_rect(bounds, |surface| {
            for tier in self.style.tiers() {
                if !tier.is_visible(scale) {
                    continue;
                }
                if !tier.is_valid() {
                    log::warn!("grid tier {tier:?} has an invalid frequency; skipped");
                    continue;
                }
                let Some(path) = tier_path(tier, &columns, &rows, canvas, scratch) else {
                    continue;
                };
                surface.stroke_path(path, &stroke, tier.color);
            }
        });
        log::trace!(
            "grid painted at scale {scale} over {}x{} px",
            canvas.width,
            canvas.height
        );
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new(GridStyle::default())
    }
}

impl fmt::Debug for GridRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridRenderer")
            .field("style", &self.style)
            .field("needs_repaint", &self.pending.get())
            .field("attached", &self.subscriptions.is_some())
            .finish_non_exhaustive()
    }
}

fn stale_marker(
    pending: &Rc<Cell<bool>>,
    generation: &Rc<Cell<u64>>,
    host: Rc<dyn RepaintRequest>,
) -> impl Fn() + 'static {
    let pending = Rc::clone(pending);
    let generation = Rc::clone(generation);
    let attached_at = generation.get();
    move || {
        if generation.get() == attached_at && !pending.replace(true) {
            host.request_repaint();
        }
    }
}

/// Builds one path holding every line `tier` places on the canvas, or `None`
/// when it places none.
fn tier_path(
    tier: &GridTier,
    columns: &AxisSpan,
    rows: &AxisSpan,
    canvas: Size,
    scratch: &mut Vec<f64>,
) -> Option<BezPath> {
    let mut path = BezPath::new();

    if place(tier, Axis::X, columns, scratch) {
        for &x in scratch.iter() {
            path.move_to((x, 0.0));
            path.line_to((x, canvas.height));
        }
    }
    if place(tier, Axis::Y, rows, scratch) {
        for &y in scratch.iter() {
            path.move_to((0.0, y));
            path.line_to((canvas.width, y));
        }
    }

    (!path.elements().is_empty()).then_some(path)
}

fn place(tier: &GridTier, axis: Axis, span: &AxisSpan, out: &mut Vec<f64>) -> bool {
    match line_positions(span, tier.kind, out) {
        Ok(()) => !out.is_empty(),
        Err(Skip::TooDense { needed }) => {
            log::warn!("grid tier {tier:?} skipped on {axis:?}: {needed} lines would be visible");
            false
        }
    }
}
