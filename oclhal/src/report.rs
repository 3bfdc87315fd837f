//! Tag-driven dispatch and the report drivers built on top of it.
//!
//! The demultiplexers map each info tag to the renderer matching the value
//! shape the OpenCL 1.2 standard documents for it. Tags outside the
//! catalogue render as a fixed sentinel. Report drivers sweep the
//! catalogues and skip, with a debug log line, any property the source
//! refuses to answer; a report over flaky hardware is still a report.

use crate::describe;
use crate::device::{DeviceId, DeviceInfo, DEVICE_INFOS};
use crate::image::{
    ImageFormat, MemFlags, CHANNEL_ORDERS, CHANNEL_TYPES, IMAGE_OBJECT_TYPES,
};
use crate::platform::{PlatformId, PlatformInfo, PLATFORM_INFOS};
use crate::query::{FormatSource, InfoSource};
use crate::render;

/// Column width of the property label in report lines.
pub const DESC_WIDTH: usize = 32;
/// Column width of the channel-data-type label in the format matrix.
pub const CHANNEL_DATA_TYPE_WIDTH: usize = 36;
/// Column width of the channel-order labels in the format matrix.
pub const CHANNEL_ORDER_WIDTH: usize = 4;

/// Renders a platform property according to its tag. Every 1.2 platform
/// property is a string; anything else is an unknown tag.
pub fn platform_info_text(info: u32, value: &[u8]) -> String {
    match PlatformInfo::from_raw(info) {
        Some(_) => render::string(value),
        None => "UNKNOWN PLATFORM INFO".to_string(),
    }
}

/// Renders a device property according to its tag.
///
/// The source is needed for the two handle-valued tags (owning platform and
/// parent device), whose names are looked up through a nested query.
pub fn device_info_text<S: InfoSource + ?Sized>(source: &S, info: u32, value: &[u8]) -> String {
    use DeviceInfo::*;

    let info = match DeviceInfo::from_raw(info) {
        Some(info) => info,
        None => return "UNKNOWN DEVICE INFO".to_string(),
    };
    match info {
        BuiltInKernels | Extensions | Name | OpenclCVersion | Profile | Vendor | Version
        | DriverVersion => render::string(value),
        ImageMaxArraySize | MaxParameterSize | MaxWorkGroupSize | PrintfBufferSize => {
            render::size(value)
        }
        ProfilingTimerResolution => render::size_nanoseconds(value),
        Image2dMaxHeight | Image2dMaxWidth | Image3dMaxDepth | Image3dMaxHeight
        | Image3dMaxWidth | ImageMaxBufferSize => render::size_pixels(value),
        Available | CompilerAvailable | EndianLittle | ErrorCorrectionSupport
        | HostUnifiedMemory | ImageSupport | LinkerAvailable | PreferredInteropUserSync => {
            render::boolean(value)
        }
        MaxComputeUnits | MaxConstantArgs | MaxReadImageArgs | MaxSamplers
        | MaxWorkItemDimensions | MaxWriteImageArgs | MemBaseAddrAlign | MinDataTypeAlignSize
        | NativeVectorWidthChar | NativeVectorWidthDouble | NativeVectorWidthFloat
        | NativeVectorWidthHalf | NativeVectorWidthInt | NativeVectorWidthLong
        | NativeVectorWidthShort | PartitionMaxSubDevices | PreferredVectorWidthChar
        | PreferredVectorWidthDouble | PreferredVectorWidthFloat | PreferredVectorWidthHalf
        | PreferredVectorWidthInt | PreferredVectorWidthLong | PreferredVectorWidthShort
        | ReferenceCount | VendorId => render::uint(value),
        AddressBits => render::uint_bits(value),
        GlobalMemCachelineSize | MaxConstantBufferSize | MaxMemAllocSize => {
            render::uint_bytes(value)
        }
        MaxClockFrequency => render::uint_hertz(value),
        GlobalMemCacheSize | GlobalMemSize | LocalMemSize => render::ulong_bytes(value),
        QueueProperties => render::queue_properties(value),
        PartitionAffinityDomain => render::affinity_domain(value),
        ExecutionCapabilities => render::exec_capabilities(value),
        DoubleFpConfig | HalfFpConfig | SingleFpConfig => render::fp_config(value),
        MaxWorkItemSizes => render::work_item_sizes(value),
        GlobalMemCacheType => render::mem_cache_type(value),
        LocalMemType => render::local_mem_type(value),
        ParentDevice => render::device_name_from_id(source, value),
        PartitionProperties => render::partition_properties(value),
        Type => render::device_type(value),
        Platform => render::platform_name_from_id(source, value),
        PartitionType => "[PRINT NOT IMPLEMENTED]".to_string(),
    }
}

/// Builds one platform report line, or `None` when the query fails.
pub fn platform_info_line<S: InfoSource + ?Sized>(
    source: &S,
    platform: PlatformId,
    info: PlatformInfo,
) -> Option<String> {
    match source.platform_info(platform, info.raw()) {
        Ok(value) => {
            let text = platform_info_text(info.raw(), &value);
            Some(format!(
                "\t{:<width$} {}",
                describe::platform_info(info.raw()),
                text,
                width = DESC_WIDTH
            ))
        }
        Err(err) => {
            log::debug!(
                "unable to print platform info '{}': {}.",
                describe::platform_info(info.raw()),
                err
            );
            None
        }
    }
}

/// Builds one device report line, or `None` when the query fails.
pub fn device_info_line<S: InfoSource + ?Sized>(
    source: &S,
    device: DeviceId,
    info: DeviceInfo,
) -> Option<String> {
    match source.device_info(device, info.raw()) {
        Ok(value) => {
            let text = device_info_text(source, info.raw(), &value);
            Some(format!(
                "\t{:<width$} {}",
                describe::device_info(info.raw()),
                text,
                width = DESC_WIDTH
            ))
        }
        Err(err) => {
            log::debug!(
                "unable to print device info '{}': {}.",
                describe::device_info(info.raw()),
                err
            );
            None
        }
    }
}

/// Reports every catalogued platform property, one line each.
pub fn platform_report<S: InfoSource + ?Sized>(source: &S, platform: PlatformId) -> String {
    let mut out = String::new();
    for info in PLATFORM_INFOS {
        if let Some(line) = platform_info_line(source, platform, *info) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Reports every catalogued device property, one line each.
pub fn device_report<S: InfoSource + ?Sized>(source: &S, device: DeviceId) -> String {
    let mut out = String::new();
    for info in DEVICE_INFOS {
        if let Some(line) = device_info_line(source, device, *info) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Lays out the supported formats as a channel-type by channel-order
/// matrix, an `x` marking each supported combination. Formats with an
/// uncatalogued order or type are left out.
pub fn image_format_matrix(formats: &[ImageFormat]) -> String {
    let mut available = [[false; CHANNEL_TYPES.len()]; CHANNEL_ORDERS.len()];
    for format in formats {
        let order = CHANNEL_ORDERS
            .iter()
            .position(|&o| o == format.channel_order);
        let data_type = CHANNEL_TYPES
            .iter()
            .position(|&t| t == format.channel_data_type);
        if let (Some(o), Some(t)) = (order, data_type) {
            available[o][t] = true;
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<width$.width$} ",
        "Data Type",
        width = CHANNEL_DATA_TYPE_WIDTH
    ));
    for order in CHANNEL_ORDERS {
        out.push_str(&format!(
            "| {:<width$.width$} ",
            describe::channel_order(*order),
            width = CHANNEL_ORDER_WIDTH
        ));
    }
    out.push('\n');

    for (t, data_type) in CHANNEL_TYPES.iter().enumerate() {
        out.push_str(&format!(
            "{:<width$.width$} ",
            describe::channel_type(*data_type),
            width = CHANNEL_DATA_TYPE_WIDTH
        ));
        for (o, _) in CHANNEL_ORDERS.iter().enumerate() {
            out.push_str(&format!(
                "| {:<width$.width$} ",
                if available[o][t] { "x" } else { "" },
                width = CHANNEL_ORDER_WIDTH
            ));
        }
        out.push('\n');
    }
    out
}

/// Reports one format matrix per image object type, querying with
/// read/write access. Object types the source cannot answer for, or that
/// support no format at all, are skipped with a debug log line.
pub fn supported_image_format_report<S: FormatSource + ?Sized>(source: &S) -> String {
    let mut out = String::new();
    for image_type in IMAGE_OBJECT_TYPES {
        let formats =
            match source.supported_image_formats(MemFlags::READ_WRITE, *image_type) {
                Ok(formats) => formats,
                Err(err) => {
                    log::debug!("unable to get available image formats: {}.", err);
                    continue;
                }
            };
        if formats.is_empty() {
            log::debug!("illegal number of formats: 0.");
            continue;
        }
        out.push_str(&format!(
            "\nPrinting matrix for {}.\n",
            describe::mem_object_type(*image_type)
        ));
        out.push_str(&image_format_matrix(&formats));
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::{ClError, ClResult};
    use crate::image::{
        CHANNEL_ORDER_R, CHANNEL_ORDER_RGBA, CHANNEL_TYPE_FLOAT, CHANNEL_TYPE_UNORM_INT8,
    };

    /// Answers name queries for one known platform and one known device,
    /// and fails everything else.
    struct OneDeviceSource;

    impl InfoSource for OneDeviceSource {
        fn platform_info(&self, platform: PlatformId, info: u32) -> ClResult<Vec<u8>> {
            if platform == PlatformId(7) && info == PlatformInfo::Name.raw() {
                Ok(b"Test Platform\0".to_vec())
            } else {
                Err(ClError::InvalidPlatform)
            }
        }

        fn device_info(&self, device: DeviceId, info: u32) -> ClResult<Vec<u8>> {
            if device == DeviceId(11) && info == DeviceInfo::Name.raw() {
                Ok(b"Test Device\0".to_vec())
            } else {
                Err(ClError::InvalidDevice)
            }
        }
    }

    #[test]
    fn test_unknown_tags_render_as_sentinels() {
        assert_eq!(platform_info_text(0xdead, b"whatever\0"), "UNKNOWN PLATFORM INFO");
        assert_eq!(
            device_info_text(&OneDeviceSource, 0xdead, b"whatever\0"),
            "UNKNOWN DEVICE INFO"
        );
    }

    #[test]
    fn test_partition_type_is_not_implemented() {
        assert_eq!(
            device_info_text(&OneDeviceSource, DeviceInfo::PartitionType.raw(), &[0; 8]),
            "[PRINT NOT IMPLEMENTED]"
        );
    }

    #[test]
    fn test_nested_handle_lookups() {
        let source = OneDeviceSource;
        let platform_handle = 7u64.to_ne_bytes();
        assert_eq!(
            device_info_text(&source, DeviceInfo::Platform.raw(), &platform_handle),
            "Test Platform"
        );
        let device_handle = 11u64.to_ne_bytes();
        assert_eq!(
            device_info_text(&source, DeviceInfo::ParentDevice.raw(), &device_handle),
            "Test Device"
        );
        // dangling handle
        let bogus = 99u64.to_ne_bytes();
        assert_eq!(
            device_info_text(&source, DeviceInfo::ParentDevice.raw(), &bogus),
            "N.A."
        );
    }

    #[test]
    fn test_report_lines_are_labelled_and_padded() {
        let source = OneDeviceSource;
        let line = device_info_line(&source, DeviceId(11), DeviceInfo::Name)
            .expect("name line");
        assert_eq!(line, format!("\t{:<32} {}", "Device name", "Test Device"));
        // failed queries produce no line
        assert!(device_info_line(&source, DeviceId(11), DeviceInfo::VendorId).is_none());
    }

    #[test]
    fn test_device_report_skips_unanswered_properties() {
        let report = device_report(&OneDeviceSource, DeviceId(11));
        assert_eq!(report.lines().count(), 1);
        assert!(report.contains("Device name"));
    }

    #[test]
    fn test_image_format_matrix_marks_supported_cells() {
        let formats = [
            ImageFormat::new(CHANNEL_ORDER_RGBA, CHANNEL_TYPE_UNORM_INT8),
            ImageFormat::new(CHANNEL_ORDER_R, CHANNEL_TYPE_FLOAT),
        ];
        let matrix = image_format_matrix(&formats);
        let lines: Vec<&str> = matrix.lines().collect();
        // header plus one row per channel type
        assert_eq!(lines.len(), 1 + CHANNEL_TYPES.len());
        assert!(lines[0].starts_with("Data Type"));

        let unorm_row = lines
            .iter()
            .find(|l| l.starts_with("normalized unsigned 8-bit int"))
            .expect("unorm row");
        assert!(unorm_row.contains("x"));
        let snorm_row = lines
            .iter()
            .find(|l| l.starts_with("normalized signed 16-bit int"))
            .expect("snorm row");
        assert!(!snorm_row.contains("x"));
    }
}
