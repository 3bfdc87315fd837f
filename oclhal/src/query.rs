//! Source traits through which the descriptor/printer core reaches its
//! environment.
//!
//! The core never calls a driver API directly: every external capability is
//! an explicit trait argument, so the same report code runs against a native
//! implementation, a recorded snapshot, or a test double. A query hands back
//! the property bytes exactly as the implementation reported them; deciding
//! how to interpret them is the job of the tag-driven dispatch in
//! [`crate::report`].

use crate::device::{DeviceId, DeviceType};
use crate::error::ClResult;
use crate::image::{ImageFormat, MemFlags};
use crate::platform::PlatformId;

/// Property queries against platforms and devices.
///
/// The returned buffer is owned by the caller; its length is the value's
/// exact wire size (for a native backend, the result of the usual
/// size-query-then-fetch two-step).
pub trait InfoSource {
    /// Fetches the raw bytes of one platform property.
    fn platform_info(&self, platform: PlatformId, info: u32) -> ClResult<Vec<u8>>;

    /// Fetches the raw bytes of one device property.
    fn device_info(&self, device: DeviceId, info: u32) -> ClResult<Vec<u8>>;
}

/// Ordered enumeration of platforms and their devices.
pub trait EnumerationSource {
    /// Returns every available platform, in the implementation's order.
    fn platforms(&self) -> ClResult<Vec<PlatformId>>;

    /// Returns the devices of `platform` matching the `device_type` filter.
    fn devices(&self, platform: PlatformId, device_type: DeviceType) -> ClResult<Vec<DeviceId>>;
}

/// Supported-image-format queries, one list per image object type.
pub trait FormatSource {
    /// Returns the formats usable for `image_type` objects created with
    /// `flags`.
    fn supported_image_formats(
        &self,
        flags: MemFlags,
        image_type: u32,
    ) -> ClResult<Vec<ImageFormat>>;
}

/// Fetches one device property and decodes it as a NUL-terminated string.
pub fn device_info_string<S: InfoSource + ?Sized>(
    source: &S,
    device: DeviceId,
    info: u32,
) -> ClResult<String> {
    let value = source.device_info(device, info)?;
    Ok(crate::render::text_of(&value))
}

/// Fetches one platform property and decodes it as a NUL-terminated string.
pub fn platform_info_string<S: InfoSource + ?Sized>(
    source: &S,
    platform: PlatformId,
    info: u32,
) -> ClResult<String> {
    let value = source.platform_info(platform, info)?;
    Ok(crate::render::text_of(&value))
}
