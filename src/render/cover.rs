//! Paint a hero frame into a viewport with CSS `object-fit: cover` semantics.

use image::{Rgba, RgbaImage, imageops};

use crate::{
    assets::decode::DecodedFrame,
    foundation::error::{MuxuError, MuxuResult},
};

/// Fill color behind (and instead of) a frame.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Uniform scale that makes an `iw × ih` image cover a `w × h` surface.
pub fn cover_scale(iw: f64, ih: f64, w: f64, h: f64) -> f64 {
    (w / iw).max(h / ih)
}

/// Centered region of the source image that ends up visible on the surface.
pub fn cover_source_rect(iw: f64, ih: f64, w: f64, h: f64) -> kurbo::Rect {
    let scale = cover_scale(iw, ih, w, h);
    let (sw, sh) = (w / scale, h / scale);
    let (sx, sy) = ((iw - sw) / 2.0, (ih - sh) / 2.0);
    kurbo::Rect::new(sx, sy, sx + sw, sy + sh)
}

/// Render `frame` covering a `width × height` surface cleared to opaque black.
///
/// With no frame (nothing decoded yet) the surface stays black.
pub fn render_cover(
    frame: Option<&DecodedFrame>,
    width: u32,
    height: u32,
) -> MuxuResult<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(MuxuError::validation(format!(
            "cover surface must be non-empty, got {width}x{height}"
        )));
    }
    let mut surface = RgbaImage::from_pixel(width, height, BACKGROUND);
    let Some(frame) = frame else {
        return Ok(surface);
    };
    let (iw, ih) = (frame.width(), frame.height());
    if iw == 0 || ih == 0 {
        return Ok(surface);
    }

    let src = cover_source_rect(
        f64::from(iw),
        f64::from(ih),
        f64::from(width),
        f64::from(height),
    );
    let x = (src.x0.max(0.0).floor() as u32).min(iw - 1);
    let y = (src.y0.max(0.0).floor() as u32).min(ih - 1);
    let cw = (src.width().round() as u32).clamp(1, iw - x);
    let ch = (src.height().round() as u32).clamp(1, ih - y);

    let visible = imageops::crop_imm(&*frame.image, x, y, cw, ch).to_image();
    let scaled = if visible.dimensions() == (width, height) {
        visible
    } else {
        imageops::resize(&visible, width, height, imageops::FilterType::CatmullRom)
    };
    imageops::overlay(&mut surface, &scaled, 0, 0);
    Ok(surface)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cover.rs"]
mod tests;
