//! Description tables: total functions from a raw enumerated value to a
//! short human-readable label.
//!
//! Every function here answers for *every* possible input. Values outside
//! the catalogue yield a fixed `"UNKNOWN ..."` sentinel rather than an error,
//! because devices may report vendor-specific or post-1.2 enumerants and a
//! capability report must keep going. Two zero values are not unknowns: the
//! standard defines affinity-domain 0 and partition-property 0 as "feature
//! absent", and they get their documented wording.

use crate::device;
use crate::image;

/// Describes a platform-info tag (`cl_platform_info`).
pub fn platform_info(value: u32) -> &'static str {
    match value {
        0x0900 => "OpenCL profile",
        0x0901 => "OpenCL version",
        0x0902 => "Platform name",
        0x0903 => "Vendor",
        0x0904 => "Available extensions",
        _ => "UNKNOWN INFO",
    }
}

/// Describes a device-info tag (`cl_device_info`).
pub fn device_info(value: u32) -> &'static str {
    match value {
        0x1000 => "Device type",
        0x1001 => "Vendor ID",
        0x1002 => "Max compute units",
        0x1003 => "Max work item dimensions",
        0x1004 => "Max work group size",
        0x1005 => "Max work item sizes",
        0x1006 => "Preferred char[] size",
        0x1007 => "Preferred short[] size",
        0x1008 => "Preferred int[] size",
        0x1009 => "Preferred long[] size",
        0x100A => "Preferred float[] size",
        0x100B => "Preferred double[] size",
        0x100C => "Max clock frequency",
        0x100D => "Address space",
        0x100E => "Max readable images",
        0x100F => "Max writeable images",
        0x1010 => "Max kernel alloc size",
        0x1011 => "Max 2D image width",
        0x1012 => "Max 2D image height",
        0x1013 => "Max 3D image width",
        0x1014 => "Max 3D image height",
        0x1015 => "Max 3D image depth",
        0x1016 => "Image support available",
        0x1017 => "Max kernel parameter size",
        0x1018 => "Max samplers",
        0x1019 => "Largest builtin type size",
        0x101A => "Smallest alignment [DEPRECATED]",
        0x101B => "Single FP capabilities",
        0x101C => "Global memory cache type",
        0x101D => "Global memory cache line size",
        0x101E => "Global memory cache size",
        0x101F => "Global memory size",
        0x1020 => "Max constant buffer size",
        0x1021 => "Max kernel constant args",
        0x1022 => "Local memory type",
        0x1023 => "Local memory size",
        0x1024 => "Error correction available",
        0x1025 => "Profiling timer resolution",
        0x1026 => "Little endian",
        0x1027 => "Device available",
        0x1028 => "Compiler available",
        0x1029 => "Execution capabilities",
        0x102A => "Queue enabled properties",
        0x102B => "Device name",
        0x102C => "Vendor",
        0x102D => "OpenCL driver version",
        0x102E => "OpenCL profile",
        0x102F => "OpenCL version",
        0x1030 => "Available extensions",
        0x1031 => "Platform",
        0x1032 => "Double FP capabilities",
        0x1033 => "Half FP capabilities",
        0x1034 => "Preferred half[] size",
        0x1035 => "Memory unified with host",
        0x1036 => "Native char[] size",
        0x1037 => "Native short[] size",
        0x1038 => "Native int[] size",
        0x1039 => "Native long[] size",
        0x103A => "Native float[] size",
        0x103B => "Native double[] size",
        0x103C => "Native half[] size",
        0x103D => "OpenCL C version",
        0x103E => "Linker available",
        0x103F => "Supported builtin kernels",
        0x1040 => "Max 1D image size",
        0x1041 => "Max image[] size",
        0x1042 => "Parent device",
        0x1043 => "Max sub devices",
        0x1044 => "Supported partition types",
        0x1045 => "Supported partition domains",
        0x1046 => "Specified partition types",
        0x1047 => "Reference count",
        0x1048 => "Prefers user synchronization",
        0x1049 => "Printf buffer size",
        _ => "UNKNOWN INFO",
    }
}

/// Describes a device type flag (`cl_device_type`). The argument is one
/// flag, not a combination; combinations are walked by the renderer.
pub fn device_type(value: u64) -> &'static str {
    const DEFAULT: u64 = device::DeviceType::DEFAULT.bits();
    const CPU: u64 = device::DeviceType::CPU.bits();
    const GPU: u64 = device::DeviceType::GPU.bits();
    const ACCELERATOR: u64 = device::DeviceType::ACCELERATOR.bits();
    const CUSTOM: u64 = device::DeviceType::CUSTOM.bits();
    match value {
        CPU => "CPU",
        GPU => "GPU",
        ACCELERATOR => "Accelerator",
        DEFAULT => "Default device type",
        CUSTOM => "Custom device",
        _ => "UNKNOWN DEVICE TYPE",
    }
}

/// Describes an execution capability flag (`cl_device_exec_capabilities`).
pub fn exec_capability(value: u64) -> &'static str {
    const KERNEL: u64 = device::ExecCapabilities::KERNEL.bits();
    const NATIVE: u64 = device::ExecCapabilities::NATIVE_KERNEL.bits();
    match value {
        KERNEL => "OpenCL C kernels",
        NATIVE => "Native kernels",
        _ => "UNKNOWN EXEC CAPABILITY",
    }
}

/// Describes an affinity domain flag (`cl_device_affinity_domain`). Zero is
/// the documented "nothing supported" value, not an unknown.
pub fn affinity_domain(value: u64) -> &'static str {
    const NUMA: u64 = device::AffinityDomain::NUMA.bits();
    const L4: u64 = device::AffinityDomain::L4_CACHE.bits();
    const L3: u64 = device::AffinityDomain::L3_CACHE.bits();
    const L2: u64 = device::AffinityDomain::L2_CACHE.bits();
    const L1: u64 = device::AffinityDomain::L1_CACHE.bits();
    const NEXT: u64 = device::AffinityDomain::NEXT_PARTITIONABLE.bits();
    match value {
        NUMA => "NUMA",
        L4 => "L4 cache",
        L3 => "L3 cache",
        L2 => "L2 cache",
        L1 => "L1 cache",
        NEXT => "Next Partitionable",
        0 => "no affinity domain supported",
        _ => "UNKNOWN PARTITION DOMAIN",
    }
}

/// Describes a floating-point capability flag (`cl_device_fp_config`).
pub fn fp_config(value: u64) -> &'static str {
    const DENORM: u64 = device::FpConfig::DENORM.bits();
    const INF_NAN: u64 = device::FpConfig::INF_NAN.bits();
    const NEAREST: u64 = device::FpConfig::ROUND_TO_NEAREST.bits();
    const ZERO: u64 = device::FpConfig::ROUND_TO_ZERO.bits();
    const INF: u64 = device::FpConfig::ROUND_TO_INF.bits();
    const FMA: u64 = device::FpConfig::FMA.bits();
    const DIV_SQRT: u64 = device::FpConfig::CORRECTLY_ROUNDED_DIVIDE_SQRT.bits();
    const SOFT: u64 = device::FpConfig::SOFT_FLOAT.bits();
    match value {
        DENORM => "denorms",
        INF_NAN => "INF and NaN values",
        NEAREST => "rounding to nearest",
        ZERO => "rounding to zero",
        INF => "rouding to INF",
        FMA => "fused multiply-add",
        DIV_SQRT => "correctly rounded divides and sqrt",
        SOFT => "software float ops",
        _ => "UNKNOWN FP CAPABILITY",
    }
}

/// Describes a partition scheme (`cl_device_partition_property`). Zero is
/// the documented "no partition type supported" value, not an unknown.
pub fn partition_property(value: usize) -> &'static str {
    match value {
        device::PARTITION_EQUALLY => "partition equally",
        device::PARTITION_BY_COUNTS => "partition by counts",
        device::PARTITION_BY_AFFINITY_DOMAIN => "partition by domain",
        0 => "no partition type supported",
        _ => "UNKNOWN PARTITION PROPERTY",
    }
}

/// Describes a global memory cache kind (`cl_device_mem_cache_type`).
pub fn mem_cache_type(value: u32) -> &'static str {
    match value {
        device::CACHE_NONE => "no cache",
        device::CACHE_READ_ONLY => "read only cache",
        device::CACHE_READ_WRITE => "read/write cache",
        _ => "UNKNOWN CACHE TYPE",
    }
}

/// Describes a local memory kind (`cl_device_local_mem_type`).
pub fn local_mem_type(value: u32) -> &'static str {
    match value {
        device::LOCAL_MEM_LOCAL => "local",
        device::LOCAL_MEM_GLOBAL => "global",
        device::LOCAL_MEM_NONE => "no memory",
        _ => "UNKNOWN MEMORY TYPE",
    }
}

/// Describes a command-queue property flag (`cl_command_queue_properties`).
pub fn queue_property(value: u64) -> &'static str {
    const OUT_OF_ORDER: u64 = device::QueueProperties::OUT_OF_ORDER_EXEC_MODE_ENABLE.bits();
    const PROFILING: u64 = device::QueueProperties::PROFILING_ENABLE.bits();
    match value {
        OUT_OF_ORDER => "out of order execution",
        PROFILING => "profiling",
        _ => "UNKNOWN QUEUE PROPERTY",
    }
}

/// Describes a channel order (`cl_channel_order`).
pub fn channel_order(value: u32) -> &'static str {
    match value {
        image::CHANNEL_ORDER_R => "R",
        image::CHANNEL_ORDER_RX => "Rx",
        image::CHANNEL_ORDER_A => "A",
        image::CHANNEL_ORDER_INTENSITY => "Intensity",
        image::CHANNEL_ORDER_LUMINANCE => "Luminance",
        image::CHANNEL_ORDER_RG => "RG",
        image::CHANNEL_ORDER_RGX => "RGx",
        image::CHANNEL_ORDER_RA => "RA",
        image::CHANNEL_ORDER_RGB => "RGB",
        image::CHANNEL_ORDER_RGBX => "RGBx",
        image::CHANNEL_ORDER_RGBA => "RGBA",
        image::CHANNEL_ORDER_ARGB => "ARGB",
        image::CHANNEL_ORDER_BGRA => "BGRA",
        image::CHANNEL_ORDER_1RGB_APPLE => "1RGB Apple",
        image::CHANNEL_ORDER_ABGR_APPLE => "ABGR Apple",
        image::CHANNEL_ORDER_BGR1_APPLE => "BGR1 Apple",
        image::CHANNEL_ORDER_CBYCRY_APPLE => "CbYCrY Apple",
        image::CHANNEL_ORDER_YCBYCR_APPLE => "YCbYCr Apple",
        _ => "UNKNOWN CHANNEL ORDER",
    }
}

/// Describes a channel data type (`cl_channel_type`).
pub fn channel_type(value: u32) -> &'static str {
    match value {
        image::CHANNEL_TYPE_SNORM_INT8 => "normalized signed 8-bit int",
        image::CHANNEL_TYPE_SNORM_INT16 => "normalized signed 16-bit int",
        image::CHANNEL_TYPE_UNORM_INT8 => "normalized unsigned 8-bit int",
        image::CHANNEL_TYPE_UNORM_INT16 => "normalized unsigned 16-bit int",
        image::CHANNEL_TYPE_UNORM_SHORT_565 => "normalized 5-6-5 3chan RGB",
        image::CHANNEL_TYPE_UNORM_SHORT_555 => "normalized x-5-5-5 4chan xRGB",
        image::CHANNEL_TYPE_UNORM_INT_101010 => "normalized x-10-10-10 4chan xRGB",
        image::CHANNEL_TYPE_SIGNED_INT8 => "un-normalized signed 8-bit int",
        image::CHANNEL_TYPE_SIGNED_INT16 => "un-normalized signed 16-bit int",
        image::CHANNEL_TYPE_SIGNED_INT32 => "un-normalized signed 32-bit int",
        image::CHANNEL_TYPE_UNSIGNED_INT8 => "un-normalized unsigned 8-bit int",
        image::CHANNEL_TYPE_UNSIGNED_INT16 => "un-normalized unsigned 16-bit int",
        image::CHANNEL_TYPE_UNSIGNED_INT32 => "un-normalized unsigned 32-bit int",
        image::CHANNEL_TYPE_HALF_FLOAT => "16-bit half-float",
        image::CHANNEL_TYPE_FLOAT => "single precision float",
        _ => "UNKNOWN CHANNEL DATA TYPE",
    }
}

/// Describes an image object type (`cl_mem_object_type`).
pub fn mem_object_type(value: u32) -> &'static str {
    match value {
        image::MEM_OBJECT_IMAGE1D => "1D image",
        image::MEM_OBJECT_IMAGE1D_BUFFER => "1D image buffer",
        image::MEM_OBJECT_IMAGE2D => "2D image",
        image::MEM_OBJECT_IMAGE3D => "3D image",
        image::MEM_OBJECT_IMAGE1D_ARRAY => "1D image[]",
        image::MEM_OBJECT_IMAGE2D_ARRAY => "2D image[]",
        _ => "UNKNOWN IMAGE FORMAT",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::device::{DEVICE_INFOS, FP_CONFIGS};
    use crate::platform::PLATFORM_INFOS;

    #[test]
    fn test_catalogued_tags_have_labels() {
        for info in PLATFORM_INFOS {
            let label = platform_info(info.raw());
            assert!(!label.is_empty() && label != "UNKNOWN INFO");
        }
        for info in DEVICE_INFOS {
            let label = device_info(info.raw());
            assert!(!label.is_empty() && label != "UNKNOWN INFO");
        }
    }

    #[test]
    fn test_unknown_values_hit_sentinels() {
        assert_eq!(platform_info(0xdead), "UNKNOWN INFO");
        assert_eq!(device_info(0xdead), "UNKNOWN INFO");
        assert_eq!(device_type(0), "UNKNOWN DEVICE TYPE");
        assert_eq!(exec_capability(1 << 7), "UNKNOWN EXEC CAPABILITY");
        assert_eq!(fp_config(1 << 20), "UNKNOWN FP CAPABILITY");
        assert_eq!(partition_property(42), "UNKNOWN PARTITION PROPERTY");
        assert_eq!(mem_cache_type(9), "UNKNOWN CACHE TYPE");
        assert_eq!(local_mem_type(9), "UNKNOWN MEMORY TYPE");
        assert_eq!(queue_property(1 << 9), "UNKNOWN QUEUE PROPERTY");
        assert_eq!(channel_order(0xdead), "UNKNOWN CHANNEL ORDER");
        assert_eq!(channel_type(0xdead), "UNKNOWN CHANNEL DATA TYPE");
        assert_eq!(mem_object_type(0xdead), "UNKNOWN IMAGE FORMAT");
    }

    #[test]
    fn test_zero_sentinels_are_not_unknown() {
        assert_eq!(affinity_domain(0), "no affinity domain supported");
        assert_eq!(partition_property(0), "no partition type supported");
    }

    #[test]
    fn test_every_fp_flag_is_catalogued() {
        for flag in FP_CONFIGS {
            assert_ne!(fp_config(flag.bits()), "UNKNOWN FP CAPABILITY");
        }
    }
}
