//! Device handles, the device-info tag-space, and the device-level flag
//! words with their declared-order catalogues.
//!
//! Every tag carries a fixed value shape (string, scalar, bitmask or vector)
//! documented by the OpenCL 1.2 standard; that contract is mirrored by the
//! demultiplexer in [`crate::report`] and never inferred at runtime.

use bitflags::bitflags;

/// Opaque handle to an OpenCL device.
///
/// The raw value is whatever the backend uses to identify the device (for a
/// native backend, the pointer value of the `cl_device_id`). When a handle
/// travels inside a property blob it is encoded as 8 native-endian bytes.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct DeviceId(pub u64);

impl DeviceId {
    /// Returns the raw handle value.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

bitflags! {
    /// Bit field classifying a device (`cl_device_type`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeviceType: u64 {
        const DEFAULT = 1 << 0;
        const CPU = 1 << 1;
        const GPU = 1 << 2;
        const ACCELERATOR = 1 << 3;
        const CUSTOM = 1 << 4;
        /// Matches every device type when used as an enumeration filter.
        const ALL = 0xFFFF_FFFF;
    }
}

bitflags! {
    /// Bit field of supported partition affinity domains
    /// (`cl_device_affinity_domain`). A value of 0 is not an error: the
    /// standard defines it as "no affinity domain supported".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AffinityDomain: u64 {
        const NUMA = 1 << 0;
        const L4_CACHE = 1 << 1;
        const L3_CACHE = 1 << 2;
        const L2_CACHE = 1 << 3;
        const L1_CACHE = 1 << 4;
        const NEXT_PARTITIONABLE = 1 << 5;
    }
}

bitflags! {
    /// Bit field of device execution capabilities
    /// (`cl_device_exec_capabilities`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ExecCapabilities: u64 {
        const KERNEL = 1 << 0;
        const NATIVE_KERNEL = 1 << 1;
    }
}

bitflags! {
    /// Bit field of command-queue properties (`cl_command_queue_properties`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QueueProperties: u64 {
        const OUT_OF_ORDER_EXEC_MODE_ENABLE = 1 << 0;
        const PROFILING_ENABLE = 1 << 1;
    }
}

bitflags! {
    /// Bit field of floating-point capabilities (`cl_device_fp_config`).
    /// A value of 0 means the precision is not supported at all.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FpConfig: u64 {
        const DENORM = 1 << 0;
        const INF_NAN = 1 << 1;
        const ROUND_TO_NEAREST = 1 << 2;
        const ROUND_TO_ZERO = 1 << 3;
        const ROUND_TO_INF = 1 << 4;
        const FMA = 1 << 5;
        const SOFT_FLOAT = 1 << 6;
        const CORRECTLY_ROUNDED_DIVIDE_SQRT = 1 << 7;
    }
}

/// Global memory cache kinds (`cl_device_mem_cache_type`).
pub const CACHE_NONE: u32 = 0;
/// Read-only global memory cache.
pub const CACHE_READ_ONLY: u32 = 1;
/// Read/write global memory cache.
pub const CACHE_READ_WRITE: u32 = 2;

/// Local memory kinds (`cl_device_local_mem_type`). `LOCAL_MEM_NONE` is only
/// reported by custom devices without local memory.
pub const LOCAL_MEM_NONE: u32 = 0;
/// Dedicated local memory storage.
pub const LOCAL_MEM_LOCAL: u32 = 1;
/// Local memory mapped onto global memory.
pub const LOCAL_MEM_GLOBAL: u32 = 2;

/// Partition scheme enumerants (`cl_device_partition_property`). These
/// travel as pointer-sized vector elements, so they are `usize` here.
pub const PARTITION_EQUALLY: usize = 0x1086;
/// Partition into sub-devices with explicit compute-unit counts.
pub const PARTITION_BY_COUNTS: usize = 0x1087;
/// Partition along a cache-hierarchy affinity domain.
pub const PARTITION_BY_AFFINITY_DOMAIN: usize = 0x1088;

/// Affinity-domain flags in catalogue order. Bitmask rendering walks this
/// slice, not the numeric bit order.
pub static AFFINITY_DOMAINS: &[AffinityDomain] = &[
    AffinityDomain::NUMA,
    AffinityDomain::L4_CACHE,
    AffinityDomain::L3_CACHE,
    AffinityDomain::L2_CACHE,
    AffinityDomain::L1_CACHE,
    AffinityDomain::NEXT_PARTITIONABLE,
];

/// Execution-capability flags in catalogue order.
pub static EXEC_CAPABILITIES: &[ExecCapabilities] =
    &[ExecCapabilities::KERNEL, ExecCapabilities::NATIVE_KERNEL];

/// Command-queue property flags in catalogue order.
pub static QUEUE_PROPERTIES: &[QueueProperties] = &[
    QueueProperties::OUT_OF_ORDER_EXEC_MODE_ENABLE,
    QueueProperties::PROFILING_ENABLE,
];

/// Floating-point capability flags in catalogue order.
pub static FP_CONFIGS: &[FpConfig] = &[
    FpConfig::DENORM,
    FpConfig::INF_NAN,
    FpConfig::ROUND_TO_NEAREST,
    FpConfig::ROUND_TO_ZERO,
    FpConfig::ROUND_TO_INF,
    FpConfig::FMA,
    FpConfig::CORRECTLY_ROUNDED_DIVIDE_SQRT,
    FpConfig::SOFT_FLOAT,
];

/// The device-info tag-space (`cl_device_info`). Discriminants are the
/// OpenCL 1.2 enumerant values.
#[repr(u32)]
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum DeviceInfo {
    Type = 0x1000,
    VendorId = 0x1001,
    MaxComputeUnits = 0x1002,
    MaxWorkItemDimensions = 0x1003,
    MaxWorkGroupSize = 0x1004,
    MaxWorkItemSizes = 0x1005,
    PreferredVectorWidthChar = 0x1006,
    PreferredVectorWidthShort = 0x1007,
    PreferredVectorWidthInt = 0x1008,
    PreferredVectorWidthLong = 0x1009,
    PreferredVectorWidthFloat = 0x100A,
    PreferredVectorWidthDouble = 0x100B,
    MaxClockFrequency = 0x100C,
    AddressBits = 0x100D,
    MaxReadImageArgs = 0x100E,
    MaxWriteImageArgs = 0x100F,
    MaxMemAllocSize = 0x1010,
    Image2dMaxWidth = 0x1011,
    Image2dMaxHeight = 0x1012,
    Image3dMaxWidth = 0x1013,
    Image3dMaxHeight = 0x1014,
    Image3dMaxDepth = 0x1015,
    ImageSupport = 0x1016,
    MaxParameterSize = 0x1017,
    MaxSamplers = 0x1018,
    MemBaseAddrAlign = 0x1019,
    MinDataTypeAlignSize = 0x101A,
    SingleFpConfig = 0x101B,
    GlobalMemCacheType = 0x101C,
    GlobalMemCachelineSize = 0x101D,
    GlobalMemCacheSize = 0x101E,
    GlobalMemSize = 0x101F,
    MaxConstantBufferSize = 0x1020,
    MaxConstantArgs = 0x1021,
    LocalMemType = 0x1022,
    LocalMemSize = 0x1023,
    ErrorCorrectionSupport = 0x1024,
    ProfilingTimerResolution = 0x1025,
    EndianLittle = 0x1026,
    Available = 0x1027,
    CompilerAvailable = 0x1028,
    ExecutionCapabilities = 0x1029,
    QueueProperties = 0x102A,
    Name = 0x102B,
    Vendor = 0x102C,
    DriverVersion = 0x102D,
    Profile = 0x102E,
    Version = 0x102F,
    Extensions = 0x1030,
    Platform = 0x1031,
    DoubleFpConfig = 0x1032,
    HalfFpConfig = 0x1033,
    PreferredVectorWidthHalf = 0x1034,
    HostUnifiedMemory = 0x1035,
    NativeVectorWidthChar = 0x1036,
    NativeVectorWidthShort = 0x1037,
    NativeVectorWidthInt = 0x1038,
    NativeVectorWidthLong = 0x1039,
    NativeVectorWidthFloat = 0x103A,
    NativeVectorWidthDouble = 0x103B,
    NativeVectorWidthHalf = 0x103C,
    OpenclCVersion = 0x103D,
    LinkerAvailable = 0x103E,
    BuiltInKernels = 0x103F,
    ImageMaxBufferSize = 0x1040,
    ImageMaxArraySize = 0x1041,
    ParentDevice = 0x1042,
    PartitionMaxSubDevices = 0x1043,
    PartitionProperties = 0x1044,
    PartitionAffinityDomain = 0x1045,
    PartitionType = 0x1046,
    ReferenceCount = 0x1047,
    PreferredInteropUserSync = 0x1048,
    PrintfBufferSize = 0x1049,
}

impl DeviceInfo {
    /// Maps a raw tag to its variant, or `None` for a tag outside the
    /// catalogue (vendor-specific or post-1.2 enumerants).
    pub fn from_raw(value: u32) -> Option<DeviceInfo> {
        let info = match value {
            0x1000 => DeviceInfo::Type,
            0x1001 => DeviceInfo::VendorId,
            0x1002 => DeviceInfo::MaxComputeUnits,
            0x1003 => DeviceInfo::MaxWorkItemDimensions,
            0x1004 => DeviceInfo::MaxWorkGroupSize,
            0x1005 => DeviceInfo::MaxWorkItemSizes,
            0x1006 => DeviceInfo::PreferredVectorWidthChar,
            0x1007 => DeviceInfo::PreferredVectorWidthShort,
            0x1008 => DeviceInfo::PreferredVectorWidthInt,
            0x1009 => DeviceInfo::PreferredVectorWidthLong,
            0x100A => DeviceInfo::PreferredVectorWidthFloat,
            0x100B => DeviceInfo::PreferredVectorWidthDouble,
            0x100C => DeviceInfo::MaxClockFrequency,
            0x100D => DeviceInfo::AddressBits,
            0x100E => DeviceInfo::MaxReadImageArgs,
            0x100F => DeviceInfo::MaxWriteImageArgs,
            0x1010 => DeviceInfo::MaxMemAllocSize,
            0x1011 => DeviceInfo::Image2dMaxWidth,
            0x1012 => DeviceInfo::Image2dMaxHeight,
            0x1013 => DeviceInfo::Image3dMaxWidth,
            0x1014 => DeviceInfo::Image3dMaxHeight,
            0x1015 => DeviceInfo::Image3dMaxDepth,
            0x1016 => DeviceInfo::ImageSupport,
            0x1017 => DeviceInfo::MaxParameterSize,
            0x1018 => DeviceInfo::MaxSamplers,
            0x1019 => DeviceInfo::MemBaseAddrAlign,
            0x101A => DeviceInfo::MinDataTypeAlignSize,
            0x101B => DeviceInfo::SingleFpConfig,
            0x101C => DeviceInfo::GlobalMemCacheType,
            0x101D => DeviceInfo::GlobalMemCachelineSize,
            0x101E => DeviceInfo::GlobalMemCacheSize,
            0x101F => DeviceInfo::GlobalMemSize,
            0x1020 => DeviceInfo::MaxConstantBufferSize,
            0x1021 => DeviceInfo::MaxConstantArgs,
            0x1022 => DeviceInfo::LocalMemType,
            0x1023 => DeviceInfo::LocalMemSize,
            0x1024 => DeviceInfo::ErrorCorrectionSupport,
            0x1025 => DeviceInfo::ProfilingTimerResolution,
            0x1026 => DeviceInfo::EndianLittle,
            0x1027 => DeviceInfo::Available,
            0x1028 => DeviceInfo::CompilerAvailable,
            0x1029 => DeviceInfo::ExecutionCapabilities,
            0x102A => DeviceInfo::QueueProperties,
            0x102B => DeviceInfo::Name,
            0x102C => DeviceInfo::Vendor,
            0x102D => DeviceInfo::DriverVersion,
            0x102E => DeviceInfo::Profile,
            0x102F => DeviceInfo::Version,
            0x1030 => DeviceInfo::Extensions,
            0x1031 => DeviceInfo::Platform,
            0x1032 => DeviceInfo::DoubleFpConfig,
            0x1033 => DeviceInfo::HalfFpConfig,
            0x1034 => DeviceInfo::PreferredVectorWidthHalf,
            0x1035 => DeviceInfo::HostUnifiedMemory,
            0x1036 => DeviceInfo::NativeVectorWidthChar,
            0x1037 => DeviceInfo::NativeVectorWidthShort,
            0x1038 => DeviceInfo::NativeVectorWidthInt,
            0x1039 => DeviceInfo::NativeVectorWidthLong,
            0x103A => DeviceInfo::NativeVectorWidthFloat,
            0x103B => DeviceInfo::NativeVectorWidthDouble,
            0x103C => DeviceInfo::NativeVectorWidthHalf,
            0x103D => DeviceInfo::OpenclCVersion,
            0x103E => DeviceInfo::LinkerAvailable,
            0x103F => DeviceInfo::BuiltInKernels,
            0x1040 => DeviceInfo::ImageMaxBufferSize,
            0x1041 => DeviceInfo::ImageMaxArraySize,
            0x1042 => DeviceInfo::ParentDevice,
            0x1043 => DeviceInfo::PartitionMaxSubDevices,
            0x1044 => DeviceInfo::PartitionProperties,
            0x1045 => DeviceInfo::PartitionAffinityDomain,
            0x1046 => DeviceInfo::PartitionType,
            0x1047 => DeviceInfo::ReferenceCount,
            0x1048 => DeviceInfo::PreferredInteropUserSync,
            0x1049 => DeviceInfo::PrintfBufferSize,
            _ => return None,
        };
        Some(info)
    }

    /// Returns the raw tag value.
    pub fn raw(self) -> u32 {
        self as u32
    }
}

/// The device properties reported by the all-info driver, in report order:
/// basic identity first, then versions, platform, booleans, memory, images,
/// kernel limits, partitioning, vector widths, and the bit-field valued
/// properties last. Extensions and the parent-device handle are excluded
/// from the sweep but still render when queried individually.
pub static DEVICE_INFOS: &[DeviceInfo] = &[
    // basic info
    DeviceInfo::Name,
    DeviceInfo::Type,
    DeviceInfo::Vendor,
    DeviceInfo::VendorId,
    DeviceInfo::MaxClockFrequency,
    DeviceInfo::MaxComputeUnits,
    DeviceInfo::MaxWorkGroupSize,
    DeviceInfo::MaxWorkItemDimensions,
    DeviceInfo::MaxWorkItemSizes,
    // versions
    DeviceInfo::Profile,
    DeviceInfo::DriverVersion,
    DeviceInfo::Version,
    DeviceInfo::OpenclCVersion,
    // owning platform
    DeviceInfo::Platform,
    // bool stuff
    DeviceInfo::Available,
    DeviceInfo::CompilerAvailable,
    DeviceInfo::LinkerAvailable,
    DeviceInfo::ErrorCorrectionSupport,
    DeviceInfo::EndianLittle,
    DeviceInfo::PreferredInteropUserSync,
    DeviceInfo::ProfilingTimerResolution,
    // memory
    DeviceInfo::AddressBits,
    DeviceInfo::HostUnifiedMemory,
    DeviceInfo::GlobalMemSize,
    DeviceInfo::GlobalMemCacheSize,
    DeviceInfo::GlobalMemCachelineSize,
    DeviceInfo::GlobalMemCacheType,
    DeviceInfo::LocalMemSize,
    DeviceInfo::LocalMemType,
    DeviceInfo::PrintfBufferSize,
    // images
    DeviceInfo::ImageSupport,
    DeviceInfo::ImageMaxArraySize,
    DeviceInfo::ImageMaxBufferSize,
    DeviceInfo::Image2dMaxHeight,
    DeviceInfo::Image2dMaxWidth,
    DeviceInfo::Image3dMaxDepth,
    DeviceInfo::Image3dMaxHeight,
    DeviceInfo::Image3dMaxWidth,
    DeviceInfo::MaxReadImageArgs,
    DeviceInfo::MaxWriteImageArgs,
    // kernel stuff
    DeviceInfo::MaxConstantArgs,
    DeviceInfo::MaxConstantBufferSize,
    DeviceInfo::MaxMemAllocSize,
    DeviceInfo::MaxParameterSize,
    DeviceInfo::MaxSamplers,
    DeviceInfo::MemBaseAddrAlign,
    DeviceInfo::MinDataTypeAlignSize,
    // partition
    DeviceInfo::PartitionMaxSubDevices,
    DeviceInfo::PartitionProperties,
    DeviceInfo::PartitionAffinityDomain,
    DeviceInfo::PartitionType,
    // vector widths
    DeviceInfo::NativeVectorWidthChar,
    DeviceInfo::NativeVectorWidthDouble,
    DeviceInfo::NativeVectorWidthFloat,
    DeviceInfo::NativeVectorWidthHalf,
    DeviceInfo::NativeVectorWidthInt,
    DeviceInfo::NativeVectorWidthLong,
    DeviceInfo::NativeVectorWidthShort,
    DeviceInfo::PreferredVectorWidthChar,
    DeviceInfo::PreferredVectorWidthDouble,
    DeviceInfo::PreferredVectorWidthFloat,
    DeviceInfo::PreferredVectorWidthHalf,
    DeviceInfo::PreferredVectorWidthInt,
    DeviceInfo::PreferredVectorWidthLong,
    DeviceInfo::PreferredVectorWidthShort,
    // complex stuff
    DeviceInfo::SingleFpConfig,
    DeviceInfo::DoubleFpConfig,
    DeviceInfo::QueueProperties,
    DeviceInfo::ReferenceCount,
    DeviceInfo::ExecutionCapabilities,
    DeviceInfo::BuiltInKernels,
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_raw_round_trip() {
        for info in DEVICE_INFOS {
            assert_eq!(DeviceInfo::from_raw(info.raw()), Some(*info));
        }
        assert_eq!(DeviceInfo::from_raw(0x1042), Some(DeviceInfo::ParentDevice));
        assert_eq!(DeviceInfo::from_raw(0x9999), None);
    }

    #[test]
    fn test_catalogue_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for info in DEVICE_INFOS {
            assert!(seen.insert(info.raw()), "duplicate tag {:#06x}", info.raw());
        }
    }

    #[test]
    fn test_device_type_all_covers_every_flag() {
        assert!(DeviceType::ALL.contains(DeviceType::GPU | DeviceType::CUSTOM));
    }
}
