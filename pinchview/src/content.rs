// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// A displayable bitmap, as far as the controller is concerned.
///
/// The controller only reads the pixel size. Decoding, drawing, and freeing
/// the pixels stay with the host; typically `Self` is a cheap handle to the
/// host's bitmap.
///
/// Replacement is skipped when the new content is `==` to the current one,
/// so a handle's `PartialEq` should say whether two values are the same
/// bitmap.
pub trait Content {
    /// Width and height in pixels.
    fn pixel_size(&self) -> Size;
}

/// Bare dimensions, for hosts that keep the bitmap elsewhere.
///
/// Two sizes compare equal whenever their dimensions match, so
/// [`PinchController::set_content`](crate::PinchController::set_content)
/// treats a different bitmap of the same size as unchanged and skips the
/// fade. Hosts that swap same-sized images should pass a handle whose
/// `PartialEq` compares identity instead.
impl Content for Size {
    fn pixel_size(&self) -> Size {
        *self
    }
}

impl<T: Content + ?Sized> Content for &T {
    fn pixel_size(&self) -> Size {
        (**self).pixel_size()
    }
}
