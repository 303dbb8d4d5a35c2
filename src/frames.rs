//! Captured frames and the sources that supply them.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::PathBuf;
use tracing::{debug, warn};

/// One captured still. Read-only once it is in a [`FrameSequence`].
#[derive(Debug, Clone)]
pub struct Frame {
    index: usize,
    pixels: RgbaImage,
}

impl Frame {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Append-only list of frames. A frame's index is its position.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fully materialized frame and returns its index.
    pub fn push(&mut self, pixels: RgbaImage) -> usize {
        let index = self.frames.len();
        self.frames.push(Frame { index, pixels });
        index
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[Frame] {
        &self.frames
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

/// Supplies raw pixel buffers on demand, e.g. a camera or a folder of stills.
pub trait FrameSource {
    /// Grabs the current picture, or `None` when no source is available.
    fn capture_frame(&mut self) -> Option<RgbaImage>;
}

/// Region of a source image to keep when cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Centered crop of a `src_w`x`src_h` image matching the aspect ratio of
/// `dst_w`x`dst_h`.
pub fn crop_to_aspect(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> CropRect {
    let desired = dst_w as f64 / dst_h as f64;
    let actual = src_w as f64 / src_h as f64;

    if actual > desired {
        let width = ((src_h as f64 * desired).round() as u32).min(src_w);
        CropRect {
            x: (src_w - width) / 2,
            y: 0,
            width,
            height: src_h,
        }
    } else if actual < desired {
        let height = ((src_w as f64 / desired).round() as u32).min(src_h);
        CropRect {
            x: 0,
            y: (src_h - height) / 2,
            width: src_w,
            height,
        }
    } else {
        CropRect {
            x: 0,
            y: 0,
            width: src_w,
            height: src_h,
        }
    }
}

/// Crops `raw` to the target aspect ratio and scales it to `width`x`height`.
pub fn fit_to_capture_size(raw: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if raw.width() == width && raw.height() == height {
        return raw.clone();
    }
    let crop = crop_to_aspect(raw.width(), raw.height(), width, height);
    let view = imageops::crop_imm(raw, crop.x, crop.y, crop.width, crop.height).to_image();
    imageops::resize(&view, width, height, FilterType::Triangle)
}

/// Reads still images from disk, one per capture, in the given order.
#[derive(Debug, Clone)]
pub struct ImageFileSource {
    paths: Vec<PathBuf>,
    next: usize,
}

impl ImageFileSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths, next: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.paths.len().saturating_sub(self.next)
    }
}

impl FrameSource for ImageFileSource {
    fn capture_frame(&mut self) -> Option<RgbaImage> {
        let path = self.paths.get(self.next)?;
        self.next += 1;
        match image::open(path) {
            Ok(img) => {
                debug!(path = %path.display(), "frame read");
                Some(img.to_rgba8())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read frame");
                None
            }
        }
    }
}
