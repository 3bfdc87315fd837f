//! Host-side image objects backed by decoded picture files.
//!
//! Component counts drive the channel layout: one-channel data maps to the
//! `R` order, two-channel to `RA`, four-channel to `RGBA`. Three-channel
//! pictures are widened to four channels before upload because packed RGB
//! is rejected by implementations.

use std::path::Path;

use image::DynamicImage;
use oclhal::error::{ClError, ClResult, DropResult};
use oclhal::image::{
    channel_order_for_component_count, sample_data_type, ImageDesc, ImageFormat, ImageTrait,
    MemFlags, CHANNEL_ORDER_R, CHANNEL_ORDER_RA, CHANNEL_ORDER_RGBA,
};

/// An image object whose pixels live in host memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotImage {
    format: ImageFormat,
    desc: ImageDesc,
    pixels: Vec<u8>,
}

fn components_of(order: u32) -> ClResult<usize> {
    match order {
        CHANNEL_ORDER_R => Ok(1),
        CHANNEL_ORDER_RA => Ok(2),
        CHANNEL_ORDER_RGBA => Ok(4),
        _ => Err(ClError::InvalidImageFormatDescriptor),
    }
}

impl SnapshotImage {
    /// Decodes a picture file into an image object. `normalized` picks the
    /// 8-bit channel data type: normalized (sampled as floats in [0, 1]) or
    /// plain unsigned integers.
    pub fn load(path: &Path, normalized: bool) -> ClResult<SnapshotImage> {
        let decoded = image::open(path).map_err(|err| {
            log::debug!("failed to decode '{}': {}.", path.display(), err);
            ClError::InvalidValue
        })?;

        let (width, height, components, pixels) = match decoded {
            DynamicImage::ImageLuma8(buffer) => {
                (buffer.width(), buffer.height(), 1, buffer.into_raw())
            }
            DynamicImage::ImageLumaA8(buffer) => {
                (buffer.width(), buffer.height(), 2, buffer.into_raw())
            }
            // three-channel and everything else widens to RGBA
            other => {
                let buffer = other.into_rgba8();
                (buffer.width(), buffer.height(), 4, buffer.into_raw())
            }
        };

        // the component counts above always have an order
        let order = channel_order_for_component_count(components)
            .ok_or(ClError::InvalidImageFormatDescriptor)?;
        let format = ImageFormat::new(order, sample_data_type(normalized));
        let desc = ImageDesc::image_2d(width as usize, height as usize);
        Self::create(
            MemFlags::READ_WRITE | MemFlags::COPY_HOST_PTR,
            format,
            desc,
            &pixels,
        )
    }

    /// Encodes the image's pixels into a picture file. The output format is
    /// picked from the file extension by the codec.
    pub fn save(&self, path: &Path) -> ClResult<()> {
        let color = match components_of(self.format.channel_order)? {
            1 => image::ColorType::L8,
            2 => image::ColorType::La8,
            _ => image::ColorType::Rgba8,
        };
        image::save_buffer(
            path,
            &self.pixels,
            self.desc.width as u32,
            self.desc.height as u32,
            color,
        )
        .map_err(|err| {
            log::debug!("failed to encode '{}': {}.", path.display(), err);
            ClError::InvalidValue
        })
    }
}

impl ImageTrait for SnapshotImage {
    fn create(
        _flags: MemFlags,
        format: ImageFormat,
        desc: ImageDesc,
        pixels: &[u8],
    ) -> ClResult<Self> {
        let components = components_of(format.channel_order)?;
        if pixels.len() != desc.width * desc.height * components {
            return Err(ClError::InvalidImageSize);
        }
        Ok(SnapshotImage {
            format,
            desc,
            pixels: pixels.to_vec(),
        })
    }

    fn format(&self) -> ImageFormat {
        self.format
    }

    fn desc(&self) -> ImageDesc {
        self.desc
    }

    fn read(&self) -> ClResult<Vec<u8>> {
        Ok(self.pixels.clone())
    }

    fn drop(_image: Self) -> DropResult<Self> {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use oclhal::image::{CHANNEL_TYPE_UNORM_INT8, CHANNEL_TYPE_UNSIGNED_INT8};

    #[test]
    fn test_create_validates_pixel_count() {
        let format = ImageFormat::new(CHANNEL_ORDER_RGBA, CHANNEL_TYPE_UNORM_INT8);
        let desc = ImageDesc::image_2d(2, 2);
        assert!(SnapshotImage::create(MemFlags::READ_WRITE, format, desc, &[0; 16]).is_ok());
        assert_eq!(
            SnapshotImage::create(MemFlags::READ_WRITE, format, desc, &[0; 12]),
            Err(ClError::InvalidImageSize)
        );
    }

    #[test]
    fn test_create_rejects_unsupported_orders() {
        let format = ImageFormat::new(
            oclhal::image::CHANNEL_ORDER_RGB,
            CHANNEL_TYPE_UNORM_INT8,
        );
        let desc = ImageDesc::image_2d(1, 1);
        assert_eq!(
            SnapshotImage::create(MemFlags::READ_WRITE, format, desc, &[0; 3]),
            Err(ClError::InvalidImageFormatDescriptor)
        );
    }

    #[test]
    fn test_round_trip_rgba() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("round_trip.png");

        let pixels: Vec<u8> = (0..2 * 2 * 4).map(|i| i as u8 * 10).collect();
        image::save_buffer(&path, &pixels, 2, 2, image::ColorType::Rgba8)?;

        let loaded = SnapshotImage::load(&path, true)?;
        assert_eq!(loaded.format().channel_order, CHANNEL_ORDER_RGBA);
        assert_eq!(loaded.format().channel_data_type, CHANNEL_TYPE_UNORM_INT8);
        assert_eq!(loaded.desc(), ImageDesc::image_2d(2, 2));
        assert_eq!(loaded.read()?, pixels);

        let copy = dir.path().join("copy.png");
        loaded.save(&copy)?;
        let reloaded = SnapshotImage::load(&copy, false)?;
        assert_eq!(reloaded.format().channel_data_type, CHANNEL_TYPE_UNSIGNED_INT8);
        assert_eq!(reloaded.read()?, pixels);
        Ok(())
    }

    #[test]
    fn test_rgb_pictures_are_widened() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("rgb.png");

        let pixels = [10u8, 20, 30, 40, 50, 60];
        image::save_buffer(&path, &pixels, 2, 1, image::ColorType::Rgb8)?;

        let loaded = SnapshotImage::load(&path, true)?;
        assert_eq!(loaded.format().channel_order, CHANNEL_ORDER_RGBA);
        assert_eq!(
            loaded.read()?,
            vec![10, 20, 30, 255, 40, 50, 60, 255]
        );
        Ok(())
    }

    #[test]
    fn test_grayscale_maps_to_r() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("gray.png");

        let pixels = [0u8, 85, 170, 255];
        image::save_buffer(&path, &pixels, 2, 2, image::ColorType::L8)?;

        let loaded = SnapshotImage::load(&path, true)?;
        assert_eq!(loaded.format().channel_order, CHANNEL_ORDER_R);
        assert_eq!(loaded.read()?, pixels.to_vec());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = SnapshotImage::load(Path::new("/nonexistent/picture.png"), true);
        assert_eq!(err.err(), Some(ClError::InvalidValue));
    }
}
