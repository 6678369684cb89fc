use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::MuxuResult;

/// One decoded hero frame, shared cheaply between the cache and renderers.
#[derive(Clone, Debug)]
pub struct DecodedFrame {
    pub image: Arc<image::RgbaImage>,
}

impl DecodedFrame {
    pub fn new(image: image::RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

pub fn decode_frame(bytes: &[u8]) -> MuxuResult<DecodedFrame> {
    let dyn_img = image::load_from_memory(bytes).context("decode frame from memory")?;
    Ok(DecodedFrame::new(dyn_img.to_rgba8()))
}
