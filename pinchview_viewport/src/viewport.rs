// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::ViewError;
use crate::zoom_mode::ZoomMode;

/// Slack, in content pixels, before an edge counts as overrun.
///
/// Without it, corrections at some zoom levels alternate between the two
/// rounding directions and the image visibly jitters.
pub const OVERRUN_TOLERANCE: f64 = 1.0;

/// Multiplicative step applied per correction pass while scale recovers
/// toward `1.0`.
pub const SCALE_RECOVERY_STEP: f64 = 1.05;

/// Default ratio between a show-around target and the region shown for it.
pub const DEFAULT_SHOW_AROUND_MARGIN: f64 = 3.0;

/// Content size used before any real content is attached.
pub const PLACEHOLDER_CONTENT_SIZE: Size = Size::new(1.0, 1.0);

/// Draw-time transform: scale by `scale` about `pivot`, then translate by
/// `translate` in content space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Fixed point of the scale, in viewport space.
    pub pivot: Point,
    /// Content-space translation applied before scaling.
    pub translate: Vec2,
}

impl DrawTransform {
    /// Returns the equivalent content → viewport affine.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        let pivot = self.pivot.to_vec2();
        Affine::translate(pivot) * Affine::scale(self.scale) * Affine::translate(self.translate - pivot)
    }
}

/// What [`Viewport::apply_zoom_mode`] did after setting the scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitOutcome {
    /// The scale was fitted and one undamped overrun pass ran.
    Fitted,
    /// A pending show-around request was replayed instead.
    ShowAroundReplayed,
}

/// Viewport over a fixed-size content bitmap.
///
/// The state is a uniform `scale`, a content-space `translate`, and a
/// `zoom_center` in viewport space. The content-space rectangle currently
/// visible is derived from those three values and the viewport size; see
/// [`Viewport::bounds`].
#[derive(Clone, Debug)]
pub struct Viewport {
    view_size: Size,
    content_size: Size,
    scale: f64,
    translate: Vec2,
    zoom_center: Point,
    show_around_margin: f64,
    pending_show_around: Option<Rect>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates an unsized viewport over placeholder content at scale `1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_size: Size::ZERO,
            content_size: PLACEHOLDER_CONTENT_SIZE,
            scale: 1.0,
            translate: Vec2::ZERO,
            zoom_center: Point::ORIGIN,
            show_around_margin: DEFAULT_SHOW_AROUND_MARGIN,
            pending_show_around: None,
        }
    }

    /// Returns the viewport size in device pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Returns `true` once the viewport has a nonzero extent on both axes.
    #[must_use]
    pub fn has_size(&self) -> bool {
        self.view_size.width > 0.0 && self.view_size.height > 0.0
    }

    /// Sets the viewport size and moves the zoom center to its middle.
    ///
    /// Scale and translation are left alone; callers usually follow this
    /// with [`Viewport::apply_zoom_mode`].
    pub fn set_view_size(&mut self, size: Size) -> Result<(), ViewError> {
        if !size.width.is_finite()
            || !size.height.is_finite()
            || size.width < 0.0
            || size.height < 0.0
        {
            return Err(ViewError::InvalidArgument("viewport size"));
        }
        self.view_size = size;
        self.zoom_center = Point::new(size.width / 2.0, size.height / 2.0);
        Ok(())
    }

    /// Returns the content size in content pixels.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Sets the content size. Both extents must be finite and positive.
    pub fn set_content_size(&mut self, size: Size) -> Result<(), ViewError> {
        if !(size.width.is_finite() && size.height.is_finite())
            || size.width <= 0.0
            || size.height <= 0.0
        {
            return Err(ViewError::InvalidArgument("content size"));
        }
        self.content_size = size;
        Ok(())
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale. Zero, negative, and non-finite scales are rejected.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), ViewError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewError::DegenerateGeometry);
        }
        self.scale = scale;
        Ok(())
    }

    /// Returns the content-space translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translate
    }

    /// Sets the content-space translation directly.
    pub fn set_translation(&mut self, translate: Vec2) {
        self.translate = translate;
    }

    /// Returns the viewport-space point scale is applied about.
    #[must_use]
    pub fn zoom_center(&self) -> Point {
        self.zoom_center
    }

    /// Returns the margin ratio used by [`Viewport::show_around`].
    #[must_use]
    pub fn show_around_margin(&self) -> f64 {
        self.show_around_margin
    }

    /// Sets the margin ratio used by [`Viewport::show_around`].
    pub fn set_show_around_margin(&mut self, margin: f64) -> Result<(), ViewError> {
        if !margin.is_finite() || margin <= 0.0 {
            return Err(ViewError::InvalidArgument("show-around margin"));
        }
        self.show_around_margin = margin;
        Ok(())
    }

    /// Returns the show-around request waiting for a viewport size, if any.
    #[must_use]
    pub fn pending_show_around(&self) -> Option<Rect> {
        self.pending_show_around
    }

    /// Returns the content-space rectangle currently visible.
    ///
    /// This is the exact inverse of [`DrawTransform`]: the viewport origin
    /// maps to `bounds().origin()` and the far corner to
    /// `bounds().origin() + view_size / scale`.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let rate = 1.0 - 1.0 / self.scale;
        let x0 = -self.translate.x + rate * self.zoom_center.x;
        let y0 = -self.translate.y + rate * self.zoom_center.y;
        Rect::new(
            x0,
            y0,
            x0 + self.view_size.width / self.scale,
            y0 + self.view_size.height / self.scale,
        )
    }

    /// Sets the translation so that [`Viewport::bounds`] starts at `origin`
    /// under the current scale and zoom center.
    pub fn set_bounds_origin(&mut self, origin: Point) {
        let rate = 1.0 - 1.0 / self.scale;
        self.translate = Vec2::new(
            -origin.x + rate * self.zoom_center.x,
            -origin.y + rate * self.zoom_center.y,
        );
    }

    /// Moves content by a viewport-space pixel delta.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        self.translate += delta / self.scale;
    }

    /// Returns the current draw transform.
    #[must_use]
    pub fn draw_transform(&self) -> DrawTransform {
        DrawTransform {
            scale: self.scale,
            pivot: self.zoom_center,
            translate: self.translate,
        }
    }

    /// Sets the scale from `mode`, then either replays a pending
    /// show-around request or runs one undamped overrun pass.
    ///
    /// Fails with [`ViewError::DegenerateGeometry`] while the viewport has no
    /// size; state is left untouched in that case.
    pub fn apply_zoom_mode(&mut self, mode: ZoomMode) -> Result<FitOutcome, ViewError> {
        self.scale = mode.scale_for(self.view_size, self.content_size)?;
        if let Some(rect) = self.pending_show_around.take() {
            if self.show_around(rect).is_ok() {
                return Ok(FitOutcome::ShowAroundReplayed);
            }
        }
        self.correct_overrun(1.0);
        Ok(FitOutcome::Fitted)
    }

    /// Nudges the view back toward the content by one damped step.
    ///
    /// Each axis is corrected only when exactly one of its edges overruns by
    /// more than [`OVERRUN_TOLERANCE`]; when content is narrower than the
    /// view both edges overrun and the axis is left alone. The translation
    /// moves by `gap / damping`, rounded away from zero, so a gap closes over
    /// several calls. While the scale is below `1.0` and the scaled content
    /// fits inside the view on both axes, the scale also grows by
    /// [`SCALE_RECOVERY_STEP`], capped at `1.0`.
    ///
    /// Returns `true` if anything changed. `damping` below `1.0` is treated
    /// as `1.0`.
    pub fn correct_overrun(&mut self, damping: f64) -> bool {
        let damping = if damping >= 1.0 { damping } else { 1.0 };
        let bounds = self.bounds();
        let mut changed = false;

        if let Some(step) = axis_step(bounds.x0, bounds.x1, self.content_size.width, damping) {
            self.translate.x += step;
            changed = true;
        }
        if let Some(step) = axis_step(bounds.y0, bounds.y1, self.content_size.height, damping) {
            self.translate.y += step;
            changed = true;
        }

        if self.scale < 1.0
            && self.view_size.width > self.content_size.width * self.scale
            && self.view_size.height > self.content_size.height * self.scale
        {
            self.scale = (self.scale * SCALE_RECOVERY_STEP).min(1.0);
            changed = true;
        }

        changed
    }

    /// Frames the content-space rectangle `rect` with a margin, centered in
    /// the viewport.
    ///
    /// The rectangle is grown by [`Viewport::show_around_margin`] and then
    /// widened or heightened to the viewport's aspect ratio. Before the
    /// viewport has a size the request is stored and replayed by the next
    /// [`Viewport::apply_zoom_mode`].
    pub fn show_around(&mut self, rect: Rect) -> Result<(), ViewError> {
        let rect = rect.abs();
        if !rect.is_finite() {
            return Err(ViewError::InvalidArgument("show-around rect"));
        }
        if rect.width() <= 0.0 && rect.height() <= 0.0 {
            return Err(ViewError::DegenerateGeometry);
        }
        if !self.has_size() {
            self.pending_show_around = Some(rect);
            return Ok(());
        }

        let view_ratio = self.view_size.width / self.view_size.height;
        let mut required_w = rect.width() * self.show_around_margin * view_ratio;
        let mut required_h = rect.height() * self.show_around_margin / view_ratio;
        if view_ratio < required_w / required_h {
            required_h = required_w / view_ratio;
        } else {
            required_w = required_h * view_ratio;
        }

        self.scale = self.view_size.width / required_w;
        let center = rect.center();
        self.set_bounds_origin(Point::new(
            center.x - required_w / 2.0,
            center.y - required_h / 2.0,
        ));
        Ok(())
    }
}

/// Translation step for one axis, or `None` if the axis needs no correction.
fn axis_step(low: f64, high: f64, extent: f64, damping: f64) -> Option<f64> {
    let underrun = low < -OVERRUN_TOLERANCE;
    let overrun = extent < high - OVERRUN_TOLERANCE;
    if underrun == overrun {
        return None;
    }
    Some(if underrun {
        libm::floor(low / damping)
    } else {
        libm::ceil((high - extent) / damping)
    })
}
