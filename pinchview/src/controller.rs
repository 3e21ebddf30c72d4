// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use pinchview_gesture::{Gesture, GestureConfig, GestureRecognizer, PointerEvent, PointerKind};
use pinchview_viewport::{DrawTransform, FitOutcome, ViewError, Viewport, ZoomMode};

use crate::config::{ViewerConfig, validate_damping, validate_margin};
use crate::content::Content;

/// What the host should draw for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Transform to apply to the content bitmap.
    pub transform: DrawTransform,
    /// Opacity to draw the content with.
    pub alpha: u8,
    /// `true` if another tick should be scheduled.
    pub redraw: bool,
}

/// Pinch/pan/zoom controller over a single content bitmap.
///
/// The host calls three kinds of methods, always from one thread:
/// - [`PinchController::on_size_changed`] when the view is laid out,
/// - [`PinchController::on_pointer_event`] for each pointer transition,
/// - [`PinchController::tick`] once per rendered frame.
///
/// Everything else configures the controller or reads its state.
#[derive(Clone, Debug)]
pub struct PinchController<C> {
    config: ViewerConfig,
    viewport: Viewport,
    gestures: GestureRecognizer,
    content: Option<C>,
    alpha: u8,
    click: Option<Point>,
}

impl<C: Content> PinchController<C> {
    /// Creates a controller with no content and an unsized view.
    pub fn new(config: ViewerConfig) -> Result<Self, ViewError> {
        config.validate()?;
        let mut viewport = Viewport::new();
        viewport.set_show_around_margin(config.show_around_margin)?;
        Ok(Self {
            config,
            viewport,
            gestures: GestureRecognizer::new(config.gesture),
            content: None,
            alpha: u8::MAX,
            click: None,
        })
    }

    /// Creates a controller showing `content`, fully opaque.
    pub fn with_content(content: C, config: ViewerConfig) -> Result<Self, ViewError> {
        let mut controller = Self::new(config)?;
        controller.viewport.set_content_size(content.pixel_size())?;
        controller.content = Some(content);
        Ok(controller)
    }

    /// Returns the current content, if any.
    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    /// Replaces the content.
    ///
    /// Content with a zero or non-finite pixel size is rejected. Setting
    /// content equal to the current one does nothing. Otherwise alpha drops
    /// to `0` so the new image fades in, and the zoom mode is re-applied.
    ///
    /// When `recycle_old` is set the previous content is handed back so the
    /// host can release it once no draw still uses it.
    pub fn set_content(&mut self, content: C, recycle_old: bool) -> Result<Option<C>, ViewError>
    where
        C: PartialEq,
    {
        let size = content.pixel_size();
        if !(size.width.is_finite() && size.height.is_finite())
            || size.width <= 0.0
            || size.height <= 0.0
        {
            return Err(ViewError::InvalidArgument("content"));
        }
        if self.content.as_ref() == Some(&content) {
            return Ok(None);
        }
        self.viewport.set_content_size(size)?;
        let old = self.content.replace(content);
        self.alpha = 0;
        log::debug!("content replaced: {}x{}", size.width, size.height);
        self.relayout();
        Ok(if recycle_old { old } else { None })
    }

    /// Returns the active zoom mode.
    pub fn zoom_mode(&self) -> ZoomMode {
        self.config.zoom_mode
    }

    /// Switches the zoom mode and re-fits immediately.
    pub fn set_zoom_mode(&mut self, mode: ZoomMode) {
        log::debug!("zoom mode {:?} -> {mode:?}", self.config.zoom_mode);
        self.config.zoom_mode = mode;
        match self.viewport.apply_zoom_mode(mode) {
            Ok(FitOutcome::ShowAroundReplayed) => log::debug!("pending show-around replayed"),
            Ok(FitOutcome::Fitted) => {}
            Err(err) => log::debug!("zoom mode fit deferred: {err}"),
        }
    }

    /// Moves `offset` steps through the zoom-mode cycle. Negative offsets go
    /// backwards.
    pub fn cycle_zoom_mode(&mut self, offset: i32) {
        self.set_zoom_mode(self.config.zoom_mode.cycled(offset));
    }

    /// Frames `rect` (content space) with the configured margin.
    ///
    /// `None` is a no-op, and so is a rectangle with no extent on either
    /// axis. Before the view has a size the request is kept and applied by
    /// the next [`PinchController::on_size_changed`].
    pub fn show_around(&mut self, rect: Option<Rect>) -> Result<(), ViewError> {
        let Some(rect) = rect else {
            return Ok(());
        };
        match self.viewport.show_around(rect) {
            Ok(()) => {}
            Err(ViewError::DegenerateGeometry) => {
                log::debug!("show-around ignored: {rect:?} has no extent");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
        if self.viewport.pending_show_around().is_some() {
            log::debug!("show-around deferred until the view has a size");
        }
        Ok(())
    }

    /// Tells the controller the view's new size in pixels.
    ///
    /// The zoom center moves to the middle of the view and the zoom mode is
    /// re-applied, or a pending show-around request is replayed.
    pub fn on_size_changed(&mut self, width: f64, height: f64) -> Result<(), ViewError> {
        self.viewport.set_view_size(Size::new(width, height))?;
        self.relayout();
        Ok(())
    }

    /// Feeds one pointer event. Returns `true` if the host should redraw.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let gesture = self.gestures.on_event(event, self.viewport.scale());
        let released = event.kind == PointerKind::PrimaryUp;
        match gesture {
            Some(Gesture::Pan(delta)) => {
                self.viewport.pan_by_view(delta);
                true
            }
            Some(Gesture::Zoom { scale }) => match self.viewport.set_scale(scale) {
                Ok(()) => true,
                Err(err) => {
                    log::debug!("pinch sample ignored: {err}");
                    released
                }
            },
            Some(Gesture::Tap(pos)) => {
                self.click = Some(pos);
                released
            }
            Some(Gesture::DoubleTap(_)) => {
                self.cycle_zoom_mode(1);
                true
            }
            None => released,
        }
    }

    /// Advances the fade-in and overrun correction by one frame.
    ///
    /// While a pointer is down nothing advances and `redraw` is `false`; the
    /// pointer events themselves request redraws.
    pub fn tick(&mut self) -> Frame {
        let mut redraw = false;
        if !self.gestures.is_touching() {
            if self.viewport.correct_overrun(self.config.overrun_damping) {
                let bounds = self.viewport.bounds();
                log::trace!(
                    "overrun step: bounds ({:.1}, {:.1}, {:.1}, {:.1}), scale {:.4}",
                    bounds.x0,
                    bounds.y0,
                    bounds.x1,
                    bounds.y1,
                    self.viewport.scale()
                );
                redraw = true;
            }
            let alpha = self.alpha.saturating_add(self.config.fade_in_rate);
            if alpha != self.alpha {
                self.alpha = alpha;
                redraw = true;
            }
        }
        Frame {
            transform: self.viewport.draw_transform(),
            alpha: self.alpha,
            redraw,
        }
    }

    /// Returns and clears the position of the last single tap.
    pub fn take_click(&mut self) -> Option<Point> {
        self.click.take()
    }

    /// Returns the current draw transform without advancing anything.
    pub fn draw_transform(&self) -> DrawTransform {
        self.viewport.draw_transform()
    }

    /// Returns the current scale.
    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    /// Returns the content-space rectangle currently visible.
    pub fn bounds(&self) -> Rect {
        self.viewport.bounds()
    }

    /// Returns the current opacity.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Returns the last primary pointer position seen outside a pinch.
    pub fn last_touch_point(&self) -> Point {
        self.gestures.last_point()
    }

    /// Returns `true` while any pointer is down.
    pub fn is_touching(&self) -> bool {
        self.gestures.is_touching()
    }

    /// Returns the underlying viewport geometry.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Sets how much alpha is added per tick while fading in.
    pub fn set_fade_in_rate(&mut self, rate: u8) {
        self.config.fade_in_rate = rate;
    }

    /// Sets the overrun damping divisor. Values below `1.0` are rejected.
    pub fn set_overrun_damping(&mut self, damping: f64) -> Result<(), ViewError> {
        validate_damping(damping)?;
        self.config.overrun_damping = damping;
        Ok(())
    }

    /// Sets the show-around margin ratio. Non-positive values are rejected.
    pub fn set_show_around_margin(&mut self, margin: f64) -> Result<(), ViewError> {
        validate_margin(margin)?;
        self.viewport.set_show_around_margin(margin)?;
        self.config.show_around_margin = margin;
        Ok(())
    }

    /// Replaces the gesture thresholds.
    pub fn set_gesture_config(&mut self, gesture: GestureConfig) {
        self.config.gesture = gesture;
        self.gestures.set_config(gesture);
    }

    /// Re-applies the zoom mode after a size or content change, anchoring
    /// the view at the content's top-left unless a show-around was pending.
    fn relayout(&mut self) {
        match self.viewport.apply_zoom_mode(self.config.zoom_mode) {
            Ok(FitOutcome::Fitted) => self.viewport.set_bounds_origin(Point::ORIGIN),
            Ok(FitOutcome::ShowAroundReplayed) => log::debug!("pending show-around replayed"),
            Err(err) => log::debug!("layout deferred: {err}"),
        }
    }
}
