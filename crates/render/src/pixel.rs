//! Pure-computation pixel buffer conversion from a rendered [`Pixmap`].
//!
//! Always available (no feature gate) so display callers can hand the raw
//! buffer to their own image widget without pulling in the PNG encoder.

use tiny_skia::Pixmap;

/// Converts the pixmap's premultiplied pixels to a straight RGBA8 buffer.
///
/// The buffer length is `width * height * 4`, rows top to bottom.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}
