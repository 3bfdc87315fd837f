//! A recorded-capability backend for oclhal.
//!
//! A snapshot holds the property answers a real platform once gave, byte
//! for byte, keyed by info tag. The report drivers in `oclhal::report` run
//! against it exactly as they would against a live driver, which makes the
//! snapshot both a replayable capability dump and the test double the rest
//! of the workspace exercises the report code with.
//!
//! Handles are assigned when a snapshot is registered with a
//! [`SnapshotApi`]: platforms and devices get distinct nonzero raw values,
//! and the cross-referencing blobs (owning platform, parent device) are
//! rewritten to match.

#![warn(missing_docs)]

pub mod image;
pub mod program;

use std::collections::HashMap;

use oclhal::device::{DeviceInfo, DEVICE_INFOS};
use oclhal::error::{ClError, ClResult};
use oclhal::image::{ImageFormat, MemFlags};
use oclhal::platform::PlatformInfo;
use oclhal::query::{EnumerationSource, FormatSource, InfoSource};
use oclhal::{DeviceId, DeviceType, PlatformId};

pub use crate::image::SnapshotImage;
pub use crate::program::SnapshotProgram;

/// Recorded properties of one device, keyed by raw info tag.
#[derive(Debug, Clone, Default)]
pub struct DeviceSnapshot {
    properties: HashMap<u32, Vec<u8>>,
}

impl DeviceSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the raw bytes of one property.
    pub fn with_raw(mut self, info: DeviceInfo, value: Vec<u8>) -> Self {
        self.properties.insert(info.raw(), value);
        self
    }

    /// Records a string property, stored NUL-terminated as a driver would
    /// report it.
    pub fn with_string(self, info: DeviceInfo, value: &str) -> Self {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        self.with_raw(info, bytes)
    }

    /// Records a `cl_uint` property.
    pub fn with_u32(self, info: DeviceInfo, value: u32) -> Self {
        self.with_raw(info, value.to_ne_bytes().to_vec())
    }

    /// Records a `cl_ulong` or bit-field property.
    pub fn with_u64(self, info: DeviceInfo, value: u64) -> Self {
        self.with_raw(info, value.to_ne_bytes().to_vec())
    }

    /// Records a `size_t` property.
    pub fn with_usize(self, info: DeviceInfo, value: usize) -> Self {
        self.with_raw(info, value.to_ne_bytes().to_vec())
    }

    /// Records a `size_t`-element vector property.
    pub fn with_usize_vec(self, info: DeviceInfo, values: &[usize]) -> Self {
        let mut bytes = Vec::with_capacity(values.len() * std::mem::size_of::<usize>());
        for value in values {
            bytes.extend_from_slice(&value.to_ne_bytes());
        }
        self.with_raw(info, bytes)
    }

    /// The recorded device type bits, if any. Used by device enumeration.
    fn type_bits(&self) -> u64 {
        self.properties
            .get(&DeviceInfo::Type.raw())
            .and_then(|v| v.get(..8))
            .and_then(|v| v.try_into().ok())
            .map(u64::from_ne_bytes)
            .unwrap_or(0)
    }
}

/// Recorded properties of one platform and its devices.
#[derive(Debug, Clone, Default)]
pub struct PlatformSnapshot {
    properties: HashMap<u32, Vec<u8>>,
    devices: Vec<DeviceSnapshot>,
}

impl PlatformSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a string property, stored NUL-terminated.
    pub fn with_string(mut self, info: PlatformInfo, value: &str) -> Self {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        self.properties.insert(info.raw(), bytes);
        self
    }

    /// Adds a device to the platform.
    pub fn with_device(mut self, device: DeviceSnapshot) -> Self {
        self.devices.push(device);
        self
    }
}

/// A set of recorded platforms answering the oclhal source traits.
#[derive(Debug, Default)]
pub struct SnapshotApi {
    platforms: Vec<(PlatformId, PlatformSnapshot)>,
    devices: Vec<(DeviceId, PlatformId, DeviceSnapshot)>,
    formats: HashMap<u32, Vec<ImageFormat>>,
    next_handle: u64,
}

impl SnapshotApi {
    /// Creates an API with no recorded platforms.
    pub fn new() -> Self {
        SnapshotApi {
            platforms: Vec::new(),
            devices: Vec::new(),
            formats: HashMap::new(),
            next_handle: 1,
        }
    }

    fn fresh_handle(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    /// Registers a platform, assigning handles to it and its devices. The
    /// owning-platform blob of every device is filled in; a registered
    /// device with no recorded parent-device handle is a root device and
    /// keeps none.
    pub fn register(&mut self, platform: PlatformSnapshot) -> PlatformId {
        let platform_id = PlatformId(self.fresh_handle());
        for mut device in platform.devices.iter().cloned() {
            let device_id = DeviceId(self.fresh_handle());
            device.properties.insert(
                DeviceInfo::Platform.raw(),
                platform_id.as_raw().to_ne_bytes().to_vec(),
            );
            self.devices.push((device_id, platform_id, device));
        }
        self.platforms.push((platform_id, platform));
        platform_id
    }

    /// Records the supported formats for one image object type.
    pub fn set_supported_formats(&mut self, image_type: u32, formats: Vec<ImageFormat>) {
        self.formats.insert(image_type, formats);
    }

    fn platform(&self, platform: PlatformId) -> ClResult<&PlatformSnapshot> {
        self.platforms
            .iter()
            .find(|(id, _)| *id == platform)
            .map(|(_, snapshot)| snapshot)
            .ok_or(ClError::InvalidPlatform)
    }

    fn device(&self, device: DeviceId) -> ClResult<&DeviceSnapshot> {
        self.devices
            .iter()
            .find(|(id, _, _)| *id == device)
            .map(|(_, _, snapshot)| snapshot)
            .ok_or(ClError::InvalidDevice)
    }

    /// Builds the reference snapshot: one platform carrying one recorded
    /// GPU device, with every property of the 1.2 tag-space populated and
    /// 2-D image formats registered. This is the fixture the workspace
    /// tests and the `snapshot_report` binary run against.
    pub fn reference() -> Self {
        use oclhal::device::{
            AffinityDomain, ExecCapabilities, FpConfig, QueueProperties,
            CACHE_READ_WRITE, LOCAL_MEM_LOCAL, PARTITION_BY_AFFINITY_DOMAIN,
            PARTITION_EQUALLY,
        };
        use oclhal::image;

        let device = DeviceSnapshot::new()
            .with_string(DeviceInfo::Name, "Snapshot GPU")
            .with_u64(DeviceInfo::Type, DeviceType::GPU.bits())
            .with_string(DeviceInfo::Vendor, "Snapshot Vendor")
            .with_u32(DeviceInfo::VendorId, 0x10DE)
            .with_u32(DeviceInfo::MaxClockFrequency, 1500)
            .with_u32(DeviceInfo::MaxComputeUnits, 28)
            .with_usize(DeviceInfo::MaxWorkGroupSize, 1024)
            .with_u32(DeviceInfo::MaxWorkItemDimensions, 3)
            .with_usize_vec(DeviceInfo::MaxWorkItemSizes, &[1024, 1024, 64])
            .with_string(DeviceInfo::Profile, "FULL_PROFILE")
            .with_string(DeviceInfo::DriverVersion, "510.47.03")
            .with_string(DeviceInfo::Version, "OpenCL 1.2 Snapshot")
            .with_string(DeviceInfo::OpenclCVersion, "OpenCL C 1.2")
            .with_string(
                DeviceInfo::Extensions,
                "cl_khr_byte_addressable_store cl_khr_fp64 cl_khr_icd",
            )
            .with_u32(DeviceInfo::Available, 1)
            .with_u32(DeviceInfo::CompilerAvailable, 1)
            .with_u32(DeviceInfo::LinkerAvailable, 1)
            .with_u32(DeviceInfo::ErrorCorrectionSupport, 0)
            .with_u32(DeviceInfo::EndianLittle, 1)
            .with_u32(DeviceInfo::PreferredInteropUserSync, 1)
            .with_usize(DeviceInfo::ProfilingTimerResolution, 1000)
            .with_u32(DeviceInfo::AddressBits, 64)
            .with_u32(DeviceInfo::HostUnifiedMemory, 0)
            .with_u64(DeviceInfo::GlobalMemSize, 8 * 1024 * 1024 * 1024)
            .with_u64(DeviceInfo::GlobalMemCacheSize, 1408 * 1024)
            .with_u32(DeviceInfo::GlobalMemCachelineSize, 128)
            .with_u32(DeviceInfo::GlobalMemCacheType, CACHE_READ_WRITE)
            .with_u64(DeviceInfo::LocalMemSize, 48 * 1024)
            .with_u32(DeviceInfo::LocalMemType, LOCAL_MEM_LOCAL)
            .with_usize(DeviceInfo::PrintfBufferSize, 1024 * 1024)
            .with_u32(DeviceInfo::ImageSupport, 1)
            .with_usize(DeviceInfo::ImageMaxArraySize, 2048)
            .with_usize(DeviceInfo::ImageMaxBufferSize, 134_217_728)
            .with_usize(DeviceInfo::Image2dMaxHeight, 32768)
            .with_usize(DeviceInfo::Image2dMaxWidth, 32768)
            .with_usize(DeviceInfo::Image3dMaxDepth, 16384)
            .with_usize(DeviceInfo::Image3dMaxHeight, 16384)
            .with_usize(DeviceInfo::Image3dMaxWidth, 16384)
            .with_u32(DeviceInfo::MaxReadImageArgs, 256)
            .with_u32(DeviceInfo::MaxWriteImageArgs, 32)
            .with_u32(DeviceInfo::MaxConstantArgs, 9)
            .with_u32(DeviceInfo::MaxConstantBufferSize, 64 * 1024)
            .with_u32(DeviceInfo::MaxMemAllocSize, 2 * 1024 * 1024 * 1024)
            .with_usize(DeviceInfo::MaxParameterSize, 4352)
            .with_u32(DeviceInfo::MaxSamplers, 32)
            .with_u32(DeviceInfo::MemBaseAddrAlign, 4096)
            .with_u32(DeviceInfo::MinDataTypeAlignSize, 128)
            .with_u32(DeviceInfo::PartitionMaxSubDevices, 4)
            .with_usize_vec(
                DeviceInfo::PartitionProperties,
                &[PARTITION_EQUALLY, PARTITION_BY_AFFINITY_DOMAIN],
            )
            .with_u64(
                DeviceInfo::PartitionAffinityDomain,
                (AffinityDomain::NUMA | AffinityDomain::NEXT_PARTITIONABLE).bits(),
            )
            .with_usize_vec(DeviceInfo::PartitionType, &[])
            .with_u32(DeviceInfo::NativeVectorWidthChar, 1)
            .with_u32(DeviceInfo::NativeVectorWidthDouble, 1)
            .with_u32(DeviceInfo::NativeVectorWidthFloat, 1)
            .with_u32(DeviceInfo::NativeVectorWidthHalf, 0)
            .with_u32(DeviceInfo::NativeVectorWidthInt, 1)
            .with_u32(DeviceInfo::NativeVectorWidthLong, 1)
            .with_u32(DeviceInfo::NativeVectorWidthShort, 1)
            .with_u32(DeviceInfo::PreferredVectorWidthChar, 1)
            .with_u32(DeviceInfo::PreferredVectorWidthDouble, 1)
            .with_u32(DeviceInfo::PreferredVectorWidthFloat, 1)
            .with_u32(DeviceInfo::PreferredVectorWidthHalf, 0)
            .with_u32(DeviceInfo::PreferredVectorWidthInt, 1)
            .with_u32(DeviceInfo::PreferredVectorWidthLong, 1)
            .with_u32(DeviceInfo::PreferredVectorWidthShort, 1)
            .with_u64(
                DeviceInfo::SingleFpConfig,
                (FpConfig::DENORM
                    | FpConfig::INF_NAN
                    | FpConfig::ROUND_TO_NEAREST
                    | FpConfig::ROUND_TO_ZERO
                    | FpConfig::ROUND_TO_INF
                    | FpConfig::FMA)
                    .bits(),
            )
            .with_u64(
                DeviceInfo::DoubleFpConfig,
                (FpConfig::DENORM
                    | FpConfig::INF_NAN
                    | FpConfig::ROUND_TO_NEAREST
                    | FpConfig::FMA)
                    .bits(),
            )
            .with_u64(
                DeviceInfo::QueueProperties,
                (QueueProperties::OUT_OF_ORDER_EXEC_MODE_ENABLE
                    | QueueProperties::PROFILING_ENABLE)
                    .bits(),
            )
            .with_u32(DeviceInfo::ReferenceCount, 1)
            .with_u64(
                DeviceInfo::ExecutionCapabilities,
                ExecCapabilities::KERNEL.bits(),
            )
            .with_string(DeviceInfo::BuiltInKernels, "");

        let platform = PlatformSnapshot::new()
            .with_string(PlatformInfo::Name, "Snapshot OpenCL Platform")
            .with_string(PlatformInfo::Vendor, "Snapshot Vendor")
            .with_string(PlatformInfo::Profile, "FULL_PROFILE")
            .with_string(PlatformInfo::Version, "OpenCL 1.2 Snapshot")
            .with_string(
                PlatformInfo::Extensions,
                "cl_khr_icd cl_khr_fp64 cl_khr_byte_addressable_store",
            )
            .with_device(device);

        let mut api = SnapshotApi::new();
        api.register(platform);
        api.set_supported_formats(
            image::MEM_OBJECT_IMAGE2D,
            vec![
                ImageFormat::new(image::CHANNEL_ORDER_R, image::CHANNEL_TYPE_UNORM_INT8),
                ImageFormat::new(image::CHANNEL_ORDER_R, image::CHANNEL_TYPE_UNSIGNED_INT8),
                ImageFormat::new(image::CHANNEL_ORDER_R, image::CHANNEL_TYPE_FLOAT),
                ImageFormat::new(image::CHANNEL_ORDER_RA, image::CHANNEL_TYPE_UNORM_INT8),
                ImageFormat::new(image::CHANNEL_ORDER_RA, image::CHANNEL_TYPE_UNSIGNED_INT8),
                ImageFormat::new(image::CHANNEL_ORDER_RGBA, image::CHANNEL_TYPE_UNORM_INT8),
                ImageFormat::new(
                    image::CHANNEL_ORDER_RGBA,
                    image::CHANNEL_TYPE_UNSIGNED_INT8,
                ),
                ImageFormat::new(image::CHANNEL_ORDER_RGBA, image::CHANNEL_TYPE_FLOAT),
                ImageFormat::new(image::CHANNEL_ORDER_BGRA, image::CHANNEL_TYPE_UNORM_INT8),
            ],
        );
        api
    }
}

impl InfoSource for SnapshotApi {
    fn platform_info(&self, platform: PlatformId, info: u32) -> ClResult<Vec<u8>> {
        let snapshot = self.platform(platform)?;
        snapshot
            .properties
            .get(&info)
            .cloned()
            .ok_or(ClError::InvalidValue)
    }

    fn device_info(&self, device: DeviceId, info: u32) -> ClResult<Vec<u8>> {
        let snapshot = self.device(device)?;
        snapshot
            .properties
            .get(&info)
            .cloned()
            .ok_or(ClError::InvalidValue)
    }
}

impl EnumerationSource for SnapshotApi {
    fn platforms(&self) -> ClResult<Vec<PlatformId>> {
        Ok(self.platforms.iter().map(|(id, _)| *id).collect())
    }

    fn devices(&self, platform: PlatformId, device_type: DeviceType) -> ClResult<Vec<DeviceId>> {
        self.platform(platform)?;
        let matching: Vec<DeviceId> = self
            .devices
            .iter()
            .filter(|(_, owner, snapshot)| {
                *owner == platform && snapshot.type_bits() & device_type.bits() != 0
            })
            .map(|(id, _, _)| *id)
            .collect();
        if matching.is_empty() {
            // clGetDeviceIDs answers an empty filter result with an error
            Err(ClError::DeviceNotFound)
        } else {
            Ok(matching)
        }
    }
}

impl FormatSource for SnapshotApi {
    fn supported_image_formats(
        &self,
        _flags: MemFlags,
        image_type: u32,
    ) -> ClResult<Vec<ImageFormat>> {
        self.formats
            .get(&image_type)
            .cloned()
            .ok_or(ClError::InvalidValue)
    }
}

/// True when the snapshot records a value for every swept device property.
/// Handy for validating a captured dump before replaying it.
pub fn covers_swept_properties(api: &SnapshotApi, device: DeviceId) -> bool {
    DEVICE_INFOS
        .iter()
        .all(|info| api.device_info(device, info.raw()).is_ok())
}

#[cfg(test)]
mod test {
    use super::*;
    use oclhal::report;

    #[test]
    fn test_enumeration() -> Result<(), Box<dyn std::error::Error>> {
        let api = SnapshotApi::reference();
        let platforms = api.platforms()?;
        assert_eq!(platforms.len(), 1);

        let devices = api.devices(platforms[0], DeviceType::ALL)?;
        assert_eq!(devices.len(), 1);

        let gpus = api.devices(platforms[0], DeviceType::GPU)?;
        assert_eq!(gpus, devices);
        Ok(())
    }

    #[test]
    fn test_type_filter_misses_report_device_not_found() -> Result<(), Box<dyn std::error::Error>>
    {
        let api = SnapshotApi::reference();
        let platforms = api.platforms()?;
        assert_eq!(
            api.devices(platforms[0], DeviceType::CPU),
            Err(ClError::DeviceNotFound)
        );
        Ok(())
    }

    #[test]
    fn test_unknown_handles_are_rejected() {
        let api = SnapshotApi::reference();
        assert_eq!(
            api.platform_info(PlatformId(999), PlatformInfo::Name.raw()),
            Err(ClError::InvalidPlatform)
        );
        assert_eq!(
            api.device_info(DeviceId(999), DeviceInfo::Name.raw()),
            Err(ClError::InvalidDevice)
        );
    }

    #[test]
    fn test_reference_covers_the_sweep() -> Result<(), Box<dyn std::error::Error>> {
        let api = SnapshotApi::reference();
        let platforms = api.platforms()?;
        let devices = api.devices(platforms[0], DeviceType::ALL)?;
        assert!(covers_swept_properties(&api, devices[0]));
        Ok(())
    }

    #[test]
    fn test_reference_platform_report() -> Result<(), Box<dyn std::error::Error>> {
        let api = SnapshotApi::reference();
        let platforms = api.platforms()?;
        let report = report::platform_report(&api, platforms[0]);
        assert!(report.contains("Platform name"));
        assert!(report.contains("Snapshot OpenCL Platform"));
        assert!(report.contains("FULL_PROFILE"));
        Ok(())
    }

    #[test]
    fn test_reference_device_report() -> Result<(), Box<dyn std::error::Error>> {
        let api = SnapshotApi::reference();
        let platforms = api.platforms()?;
        let devices = api.devices(platforms[0], DeviceType::ALL)?;
        let report = report::device_report(&api, devices[0]);

        assert!(report.contains("Snapshot GPU"));
        assert!(report.contains("1.50 GhZ (1500 MhZ)"));
        assert!(report.contains("8.00 GB (8589934592 bytes)"));
        assert!(report.contains("1024, 1024, 64"));
        // the owning-platform line resolves through the nested name query
        assert!(report.contains("Snapshot OpenCL Platform"));
        assert!(report.contains("[PRINT NOT IMPLEMENTED]"));
        // empty built-in kernel list
        assert!(report.contains("N.A."));
        // every swept property must have produced a line
        assert_eq!(report.lines().count(), DEVICE_INFOS.len());
        Ok(())
    }

    #[test]
    fn test_reference_format_matrix() {
        let api = SnapshotApi::reference();
        let report = report::supported_image_format_report(&api);
        assert!(report.contains("Printing matrix for 2D image."));
        assert!(!report.contains("Printing matrix for 3D image."));
        assert!(report.contains("x"));
    }
}
