//! Image formats, descriptors, and the device-image trait.
//!
//! The format/descriptor types mirror the wire structs of the wrapped API;
//! the channel constants below double as the catalogues driving the
//! supported-format matrix in [`crate::report`].

use crate::error::{ClResult, DropResult};
use bitflags::bitflags;

bitflags! {
    /// Memory object creation flags (`cl_mem_flags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemFlags: u64 {
        const READ_WRITE = 1 << 0;
        const WRITE_ONLY = 1 << 1;
        const READ_ONLY = 1 << 2;
        const USE_HOST_PTR = 1 << 3;
        const ALLOC_HOST_PTR = 1 << 4;
        const COPY_HOST_PTR = 1 << 5;
    }
}

/// Channel order enumerants (`cl_channel_order`).
pub const CHANNEL_ORDER_R: u32 = 0x10B0;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_A: u32 = 0x10B1;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_RG: u32 = 0x10B2;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_RA: u32 = 0x10B3;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_RGB: u32 = 0x10B4;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_RGBA: u32 = 0x10B5;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_BGRA: u32 = 0x10B6;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_ARGB: u32 = 0x10B7;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_INTENSITY: u32 = 0x10B8;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_LUMINANCE: u32 = 0x10B9;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_RX: u32 = 0x10BA;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_RGX: u32 = 0x10BB;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_RGBX: u32 = 0x10BC;
/// Apple vendor channel orders, reported by Apple's implementation.
pub const CHANNEL_ORDER_1RGB_APPLE: u32 = 0x1000_0008;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_BGR1_APPLE: u32 = 0x1000_0009;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_YCBYCR_APPLE: u32 = 0x1000_0010;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_CBYCRY_APPLE: u32 = 0x1000_0011;
#[allow(missing_docs)]
pub const CHANNEL_ORDER_ABGR_APPLE: u32 = 0x1000_0012;

/// Channel data type enumerants (`cl_channel_type`).
pub const CHANNEL_TYPE_SNORM_INT8: u32 = 0x10D0;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_SNORM_INT16: u32 = 0x10D1;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_UNORM_INT8: u32 = 0x10D2;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_UNORM_INT16: u32 = 0x10D3;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_UNORM_SHORT_565: u32 = 0x10D4;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_UNORM_SHORT_555: u32 = 0x10D5;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_UNORM_INT_101010: u32 = 0x10D6;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_SIGNED_INT8: u32 = 0x10D7;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_SIGNED_INT16: u32 = 0x10D8;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_SIGNED_INT32: u32 = 0x10D9;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_UNSIGNED_INT8: u32 = 0x10DA;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_UNSIGNED_INT16: u32 = 0x10DB;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_UNSIGNED_INT32: u32 = 0x10DC;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_HALF_FLOAT: u32 = 0x10DD;
#[allow(missing_docs)]
pub const CHANNEL_TYPE_FLOAT: u32 = 0x10DE;

/// Memory object type enumerants (`cl_mem_object_type`).
pub const MEM_OBJECT_BUFFER: u32 = 0x10F0;
#[allow(missing_docs)]
pub const MEM_OBJECT_IMAGE2D: u32 = 0x10F1;
#[allow(missing_docs)]
pub const MEM_OBJECT_IMAGE3D: u32 = 0x10F2;
#[allow(missing_docs)]
pub const MEM_OBJECT_IMAGE2D_ARRAY: u32 = 0x10F3;
#[allow(missing_docs)]
pub const MEM_OBJECT_IMAGE1D: u32 = 0x10F4;
#[allow(missing_docs)]
pub const MEM_OBJECT_IMAGE1D_ARRAY: u32 = 0x10F5;
#[allow(missing_docs)]
pub const MEM_OBJECT_IMAGE1D_BUFFER: u32 = 0x10F6;

/// Channel orders in catalogue order. This order is the column order of the
/// supported-format matrix.
pub static CHANNEL_ORDERS: &[u32] = &[
    CHANNEL_ORDER_R,
    CHANNEL_ORDER_RX,
    CHANNEL_ORDER_A,
    CHANNEL_ORDER_INTENSITY,
    CHANNEL_ORDER_LUMINANCE,
    CHANNEL_ORDER_RG,
    CHANNEL_ORDER_RGX,
    CHANNEL_ORDER_RA,
    CHANNEL_ORDER_RGB,
    CHANNEL_ORDER_RGBX,
    CHANNEL_ORDER_RGBA,
    CHANNEL_ORDER_ARGB,
    CHANNEL_ORDER_BGRA,
    CHANNEL_ORDER_1RGB_APPLE,
    CHANNEL_ORDER_ABGR_APPLE,
    CHANNEL_ORDER_BGR1_APPLE,
    CHANNEL_ORDER_CBYCRY_APPLE,
    CHANNEL_ORDER_YCBYCR_APPLE,
];

/// Channel data types in catalogue order (the row order of the matrix).
pub static CHANNEL_TYPES: &[u32] = &[
    CHANNEL_TYPE_SNORM_INT8,
    CHANNEL_TYPE_SNORM_INT16,
    CHANNEL_TYPE_UNORM_INT8,
    CHANNEL_TYPE_UNORM_INT16,
    CHANNEL_TYPE_UNORM_SHORT_565,
    CHANNEL_TYPE_UNORM_SHORT_555,
    CHANNEL_TYPE_UNORM_INT_101010,
    CHANNEL_TYPE_SIGNED_INT8,
    CHANNEL_TYPE_SIGNED_INT16,
    CHANNEL_TYPE_SIGNED_INT32,
    CHANNEL_TYPE_UNSIGNED_INT8,
    CHANNEL_TYPE_UNSIGNED_INT16,
    CHANNEL_TYPE_UNSIGNED_INT32,
    CHANNEL_TYPE_HALF_FLOAT,
    CHANNEL_TYPE_FLOAT,
];

/// The image object types swept by the supported-format report. Plain
/// buffers are excluded; they carry no format.
pub static IMAGE_OBJECT_TYPES: &[u32] = &[
    MEM_OBJECT_IMAGE1D,
    MEM_OBJECT_IMAGE1D_BUFFER,
    MEM_OBJECT_IMAGE2D,
    MEM_OBJECT_IMAGE3D,
    MEM_OBJECT_IMAGE1D_ARRAY,
    MEM_OBJECT_IMAGE2D_ARRAY,
];

/// An image channel layout (`cl_image_format`). Both fields are raw
/// enumerants so that vendor extensions survive a round trip through the
/// query layer; the description tables tolerate unknown values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageFormat {
    /// Channel order enumerant.
    pub channel_order: u32,
    /// Channel data type enumerant.
    pub channel_data_type: u32,
}

impl ImageFormat {
    /// Convenience constructor.
    pub fn new(channel_order: u32, channel_data_type: u32) -> Self {
        ImageFormat {
            channel_order,
            channel_data_type,
        }
    }
}

/// Geometry of an image object (`cl_image_desc`, trimmed to what 2-D
/// transfers use).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDesc {
    /// Memory object type enumerant, e.g. [`MEM_OBJECT_IMAGE2D`].
    pub image_type: u32,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels (1 for 1-D images).
    pub height: usize,
}

impl ImageDesc {
    /// Describes a 2-D image of the given size.
    pub fn image_2d(width: usize, height: usize) -> Self {
        ImageDesc {
            image_type: MEM_OBJECT_IMAGE2D,
            width,
            height,
        }
    }
}

/// Maps a decoded component count to the channel order an image object
/// should use. Three-component data has no answer: implementations reject
/// packed RGB, so callers must widen to RGBA before upload.
pub fn channel_order_for_component_count(components: u32) -> Option<u32> {
    match components {
        1 => Some(CHANNEL_ORDER_R),
        2 => Some(CHANNEL_ORDER_RA),
        4 => Some(CHANNEL_ORDER_RGBA),
        _ => None,
    }
}

/// Picks the 8-bit channel data type for uploaded pixel data: normalized
/// (sampled as floats in [0, 1]) or plain unsigned integers.
pub fn sample_data_type(normalized: bool) -> u32 {
    if normalized {
        CHANNEL_TYPE_UNORM_INT8
    } else {
        CHANNEL_TYPE_UNSIGNED_INT8
    }
}

/// A device-resident image object.
pub trait ImageTrait: Sized {
    /// Creates an image object from host pixel data. The pixel slice must
    /// hold `width * height * components` bytes for the given format.
    fn create(
        flags: MemFlags,
        format: ImageFormat,
        desc: ImageDesc,
        pixels: &[u8],
    ) -> ClResult<Self>;

    /// The channel layout of the object.
    fn format(&self) -> ImageFormat;

    /// The geometry of the object.
    fn desc(&self) -> ImageDesc;

    /// Reads the object's pixels back into host memory.
    fn read(&self) -> ClResult<Vec<u8>>;

    /// Destroy the image, returning the error and the un-destroyed value on
    /// failure.
    fn drop(image: Self) -> DropResult<Self>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_component_count_mapping() {
        assert_eq!(channel_order_for_component_count(1), Some(CHANNEL_ORDER_R));
        assert_eq!(channel_order_for_component_count(2), Some(CHANNEL_ORDER_RA));
        assert_eq!(
            channel_order_for_component_count(4),
            Some(CHANNEL_ORDER_RGBA)
        );
        // RGB has to be widened by the caller first.
        assert_eq!(channel_order_for_component_count(3), None);
        assert_eq!(channel_order_for_component_count(0), None);
    }

    #[test]
    fn test_sample_data_type() {
        assert_eq!(sample_data_type(true), CHANNEL_TYPE_UNORM_INT8);
        assert_eq!(sample_data_type(false), CHANNEL_TYPE_UNSIGNED_INT8);
    }

    #[test]
    fn test_catalogues_are_disjoint_and_complete() {
        assert_eq!(CHANNEL_ORDERS.len(), 18);
        assert_eq!(CHANNEL_TYPES.len(), 15);
        assert_eq!(IMAGE_OBJECT_TYPES.len(), 6);
    }
}
