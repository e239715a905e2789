// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Surface capture and image encoding

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};

use super::{ExportError, ExportFormat};
use crate::field::{FieldLayout, FieldScene};
use crate::model::Strategy;
use crate::render::{TextLayouter, rasterize};
use crate::settings;

/// A measured drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHandle {
    /// Side length in logical pixels
    pub side: f64,
}

/// Parameters for one capture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureRequest {
    pub format: ExportFormat,
    pub pixel_ratio: f64,
    /// JPEG quality, 1-100; ignored for PNG
    pub quality: u8,
    pub overlay_visible: bool,
}

impl CaptureRequest {
    /// Request at the configured export density and quality
    pub fn new(format: ExportFormat, overlay_visible: bool) -> Self {
        Self {
            format,
            pixel_ratio: settings::export::PIXEL_RATIO,
            quality: settings::export::JPEG_QUALITY,
            overlay_visible,
        }
    }
}

/// Encoded capture result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub format: ExportFormat,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl CapturedImage {
    /// `data:image/<fmt>;base64,..` form of the encoded bytes
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }
}

/// Something that can produce an encoded image of the field
pub trait CaptureSurface {
    fn capture(&self, request: &CaptureRequest) -> Result<CapturedImage, ExportError>;
}

/// Captures by rasterizing a strategy snapshot at the measured surface size
pub struct SceneSurface {
    strategy: Arc<Strategy>,
    handle: SurfaceHandle,
}

impl SceneSurface {
    pub fn new(strategy: Arc<Strategy>, handle: SurfaceHandle) -> Self {
        Self { strategy, handle }
    }
}

impl CaptureSurface for SceneSurface {
    fn capture(&self, request: &CaptureRequest) -> Result<CapturedImage, ExportError> {
        let layout = FieldLayout::for_width(self.handle.side);
        let scene = FieldScene::build(layout, &self.strategy, request.overlay_visible, None);
        let image = rasterize(&scene, request.pixel_ratio, &mut TextLayouter::new())
            .ok_or(ExportError::EmptySurface)?;
        let bytes = encode(&image, request.format, request.quality)?;
        Ok(CapturedImage {
            format: request.format,
            width: image.width(),
            height: image.height(),
            bytes,
        })
    }
}

/// Encode RGBA pixels in the requested format
pub fn encode(image: &RgbaImage, format: ExportFormat, quality: u8) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    match format {
        ExportFormat::Png => {
            PngEncoder::new(&mut bytes).write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )?;
        }
        ExportFormat::Jpeg => {
            let flat = composite_on_white(image);
            JpegEncoder::new_with_quality(&mut bytes, quality).write_image(
                flat.as_raw(),
                flat.width(),
                flat.height(),
                ExtendedColorType::Rgb8,
            )?;
        }
    }
    Ok(bytes)
}

/// Flatten transparency onto a white background
fn composite_on_white(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = u32::from(a);
        let blend = |c: u8| ((u32::from(c) * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        image::Rgb([blend(r), blend(g), blend(b)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> RgbaImage {
        RgbaImage::from_fn(4, 4, |x, _| {
            if x < 2 {
                image::Rgba([0x8b, 0xc3, 0x4a, 0xff])
            } else {
                image::Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn png_and_jpeg_headers() {
        let png = encode(&checker(), ExportFormat::Png, 100).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let jpeg = encode(&checker(), ExportFormat::Jpeg, 100).unwrap();
        assert_eq!(&jpeg[..3], &[0xff, 0xd8, 0xff]);
    }

    #[test]
    fn transparent_pixels_become_white_for_jpeg() {
        let flat = composite_on_white(&checker());
        assert_eq!(flat.get_pixel(3, 0).0, [255, 255, 255]);
        assert_eq!(flat.get_pixel(0, 0).0, [0x8b, 0xc3, 0x4a]);

        let half = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 128]));
        assert_eq!(composite_on_white(&half).get_pixel(0, 0).0, [127, 127, 127]);
    }

    #[test]
    fn data_uri_carries_mime_and_base64() {
        let captured = CapturedImage {
            format: ExportFormat::Png,
            width: 1,
            height: 1,
            bytes: vec![0x89, b'P', b'N', b'G'],
        };
        assert_eq!(captured.data_uri(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn scene_surface_captures_at_double_density() {
        let surface = SceneSurface::new(Arc::new(Strategy::default()), SurfaceHandle { side: 120.0 });
        let captured = surface
            .capture(&CaptureRequest::new(ExportFormat::Png, true))
            .unwrap();
        assert_eq!((captured.width, captured.height), (240, 240));
        assert!(captured.data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn empty_surface_cannot_be_captured() {
        let surface = SceneSurface::new(Arc::new(Strategy::default()), SurfaceHandle { side: 0.0 });
        let result = surface.capture(&CaptureRequest::new(ExportFormat::Jpeg, true));
        assert!(matches!(result, Err(ExportError::EmptySurface)));
    }
}
