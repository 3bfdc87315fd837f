//! Platform handles and the platform-info tag-space.

/// Opaque handle to an OpenCL platform.
///
/// The raw value is whatever the backend uses to identify the platform (for a
/// native backend, the pointer value of the `cl_platform_id`). When a handle
/// travels inside a property blob it is encoded as 8 native-endian bytes.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct PlatformId(pub u64);

impl PlatformId {
    /// Returns the raw handle value.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// The platform-info tag-space (`cl_platform_info`). Discriminants are the
/// OpenCL 1.2 enumerant values.
#[repr(u32)]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum PlatformInfo {
    /// OpenCL profile string.
    Profile = 0x0900,
    /// OpenCL version string.
    Version = 0x0901,
    /// Platform name string.
    Name = 0x0902,
    /// Platform vendor string.
    Vendor = 0x0903,
    /// Space-separated extension name list.
    Extensions = 0x0904,
}

impl PlatformInfo {
    /// Maps a raw tag to its variant, or `None` for a tag outside the
    /// catalogue. The value shape of each tag is fixed by the standard and
    /// never inferred at runtime.
    pub fn from_raw(value: u32) -> Option<PlatformInfo> {
        let info = match value {
            0x0900 => PlatformInfo::Profile,
            0x0901 => PlatformInfo::Version,
            0x0902 => PlatformInfo::Name,
            0x0903 => PlatformInfo::Vendor,
            0x0904 => PlatformInfo::Extensions,
            _ => return None,
        };
        Some(info)
    }

    /// Returns the raw tag value.
    pub fn raw(self) -> u32 {
        self as u32
    }
}

/// The platform properties reported by the all-info driver, in report order.
/// Extensions are excluded from the sweep (too noisy for a summary) but still
/// render when queried individually.
pub static PLATFORM_INFOS: &[PlatformInfo] = &[
    PlatformInfo::Name,
    PlatformInfo::Vendor,
    PlatformInfo::Profile,
    PlatformInfo::Version,
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_raw_round_trip() {
        for info in PLATFORM_INFOS {
            assert_eq!(PlatformInfo::from_raw(info.raw()), Some(*info));
        }
        assert_eq!(PlatformInfo::from_raw(0x0904), Some(PlatformInfo::Extensions));
        assert_eq!(PlatformInfo::from_raw(0xdead), None);
    }
}
