// SPDX-License-Identifier: MPL-2.0
//! Video poster thumbnails.
//!
//! A captured frame is center-cropped to a square, scaled to the thumbnail
//! edge, overlaid with a circular play glyph and encoded as PNG.

use crate::config::defaults::{PLAY_GLYPH_RADIUS_RATIO, PLAY_GLYPH_TRIANGLE_RATIO};
use crate::domain::media::RawImage;
use crate::domain::ui::ThumbnailEdge;
use image_rs::imageops::{self, FilterType};
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use thiserror::Error;
use tiny_skia::{FillRule, IntSize, Paint, PathBuilder, Pixmap, Transform};

/// Failure while turning a frame into a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThumbnailError {
    #[error("frame has no pixels")]
    EmptyFrame,

    #[error("could not rasterize play glyph")]
    Raster,

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Renders the strip thumbnail for a video frame and returns PNG bytes.
///
/// # Errors
///
/// Returns an error if the frame is empty or the PNG encoder fails.
pub fn render_video_thumbnail(
    frame: &RawImage,
    edge: ThumbnailEdge,
) -> Result<Vec<u8>, ThumbnailError> {
    let square = square_crop(frame, edge.value())?;
    let mut pixmap = to_pixmap(square, edge.value())?;
    draw_play_glyph(&mut pixmap)?;
    encode_png(pixmap)
}

/// Center-crops the frame to its largest square and resizes it to `edge`.
fn square_crop(frame: &RawImage, edge: u32) -> Result<RgbaImage, ThumbnailError> {
    let source = RgbaImage::from_raw(frame.width(), frame.height(), frame.rgba_bytes().to_vec())
        .ok_or(ThumbnailError::EmptyFrame)?;

    let side = frame.width().min(frame.height());
    if side == 0 {
        return Err(ThumbnailError::EmptyFrame);
    }
    let x = (frame.width() - side) / 2;
    let y = (frame.height() - side) / 2;

    let cropped = imageops::crop_imm(&source, x, y, side, side).to_image();
    let mut resized = imageops::resize(&cropped, edge, edge, FilterType::Triangle);

    // Thumbnails are opaque; this also keeps straight and premultiplied alpha identical.
    for pixel in resized.pixels_mut() {
        pixel.0[3] = u8::MAX;
    }
    Ok(resized)
}

fn to_pixmap(image: RgbaImage, edge: u32) -> Result<Pixmap, ThumbnailError> {
    let size = IntSize::from_wh(edge, edge).ok_or(ThumbnailError::EmptyFrame)?;
    Pixmap::from_vec(image.into_raw(), size).ok_or(ThumbnailError::Raster)
}

/// Semi-transparent dark disc with a white right-pointing triangle.
fn draw_play_glyph(pixmap: &mut Pixmap) -> Result<(), ThumbnailError> {
    #[allow(clippy::cast_precision_loss)]
    let edge = pixmap.width() as f32;
    let center = edge / 2.0;

    let circle = PathBuilder::from_circle(center, center, edge * PLAY_GLYPH_RADIUS_RATIO)
        .ok_or(ThumbnailError::Raster)?;
    let mut disc = Paint::default();
    disc.set_color_rgba8(0, 0, 0, 150);
    disc.anti_alias = true;
    pixmap.fill_path(&circle, &disc, FillRule::Winding, Transform::identity(), None);

    // Shifted right so the triangle's visual center sits on the disc center.
    let half = edge * PLAY_GLYPH_TRIANGLE_RATIO;
    let mut builder = PathBuilder::new();
    builder.move_to(center - half * 0.8, center - half);
    builder.line_to(center + half * 1.2, center);
    builder.line_to(center - half * 0.8, center + half);
    builder.close();
    let triangle = builder.finish().ok_or(ThumbnailError::Raster)?;

    let mut arrow = Paint::default();
    arrow.set_color_rgba8(255, 255, 255, 255);
    arrow.anti_alias = true;
    pixmap.fill_path(&triangle, &arrow, FillRule::Winding, Transform::identity(), None);
    Ok(())
}

fn encode_png(pixmap: Pixmap) -> Result<Vec<u8>, ThumbnailError> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let image = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or(ThumbnailError::Encode("pixel buffer size mismatch".into()))?;

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|err| ThumbnailError::Encode(err.to_string()))?;
    Ok(bytes)
}
