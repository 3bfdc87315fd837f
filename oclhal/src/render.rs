//! Typed renderers turning raw property bytes into display strings.
//!
//! Every renderer is total: a buffer too short for the advertised type
//! renders as `"N.A."` instead of failing, so that one odd property can
//! never abort a capability report. Buffers hold native-endian values, the
//! layout the query layer stores them in.

use crate::describe;
use crate::device::{
    AFFINITY_DOMAINS, EXEC_CAPABILITIES, FP_CONFIGS, QUEUE_PROPERTIES,
};
use crate::platform::{PlatformId, PlatformInfo};
use crate::query::InfoSource;
use crate::DeviceId;

/// Placeholder for values that cannot be displayed.
pub const NOT_AVAILABLE: &str = "N.A.";

/// Interprets a raw buffer as NUL-terminated text. Bytes from the first
/// NUL onward are dropped; invalid UTF-8 is replaced, not rejected.
pub fn text_of(value: &[u8]) -> String {
    let end = value.iter().position(|&b| b == 0).unwrap_or(value.len());
    String::from_utf8_lossy(&value[..end]).into_owned()
}

fn read_u32(value: &[u8]) -> Option<u32> {
    let bytes = value.get(..4)?.try_into().ok()?;
    Some(u32::from_ne_bytes(bytes))
}

fn read_u64(value: &[u8]) -> Option<u64> {
    let bytes = value.get(..8)?.try_into().ok()?;
    Some(u64::from_ne_bytes(bytes))
}

fn read_usize(value: &[u8]) -> Option<usize> {
    const WIDTH: usize = std::mem::size_of::<usize>();
    let bytes = value.get(..WIDTH)?.try_into().ok()?;
    Some(usize::from_ne_bytes(bytes))
}

/// Scales `value` down by `step` while it still holds a whole unit,
/// stopping at the last unit. Returns the scaled value and the number of
/// divisions applied.
fn scaled(value: f64, step: f64, unit_count: usize) -> (f64, usize) {
    let mut shorter = value;
    let mut divisions = 0;
    while shorter >= step && divisions < unit_count {
        shorter /= step;
        divisions += 1;
    }
    (shorter, divisions)
}

/// Renders a string property. The empty string displays as `"N.A."`.
pub fn string(value: &[u8]) -> String {
    let text = text_of(value);
    if text.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        text
    }
}

pub fn uint(value: &[u8]) -> String {
    match read_u32(value) {
        Some(v) => v.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn uint_bits(value: &[u8]) -> String {
    match read_u32(value) {
        Some(v) => format!("{} bits", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Renders a `cl_uint` byte count, scaled through KB, MB and GB. Values
/// below 1 KB display as a plain byte count.
pub fn uint_bytes(value: &[u8]) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];
    let bytes = match read_u32(value) {
        Some(v) => v,
        None => return NOT_AVAILABLE.to_string(),
    };
    let (shorter, divisions) = scaled(bytes as f64, 1024.0, UNITS.len());
    if divisions > 0 {
        format!("{:.2} {} ({} bytes)", shorter, UNITS[divisions - 1], bytes)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Renders a `cl_ulong` byte count, scaled through KB up to PB.
pub fn ulong_bytes(value: &[u8]) -> String {
    const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];
    let bytes = match read_u64(value) {
        Some(v) => v,
        None => return NOT_AVAILABLE.to_string(),
    };
    let (shorter, divisions) = scaled(bytes as f64, 1024.0, UNITS.len());
    if divisions > 0 {
        format!("{:.2} {} ({} bytes)", shorter, UNITS[divisions - 1], bytes)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Renders a `cl_uint` clock frequency given in MhZ. Frequencies of a
/// whole GhZ or more are scaled down once.
pub fn uint_hertz(value: &[u8]) -> String {
    let hertz = match read_u32(value) {
        Some(v) => v,
        None => return NOT_AVAILABLE.to_string(),
    };
    let (shorter, divisions) = scaled(hertz as f64, 1000.0, 1);
    if divisions > 0 {
        format!("{:.2} GhZ ({} MhZ)", shorter, hertz)
    } else {
        format!("{} MhZ", hertz)
    }
}

pub fn size(value: &[u8]) -> String {
    match read_usize(value) {
        Some(v) => v.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn size_nanoseconds(value: &[u8]) -> String {
    match read_usize(value) {
        Some(v) => format!("{} ns", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn size_pixels(value: &[u8]) -> String {
    match read_usize(value) {
        Some(v) => format!("{} pixels", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Renders a `cl_bool`. Zero is `FALSE`, everything else is `TRUE`.
pub fn boolean(value: &[u8]) -> String {
    match read_u32(value) {
        Some(0) => "FALSE".to_string(),
        Some(_) => "TRUE".to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn device_type(value: &[u8]) -> String {
    match read_u64(value) {
        Some(v) => describe::device_type(v).to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn mem_cache_type(value: &[u8]) -> String {
    match read_u32(value) {
        Some(v) => describe::mem_cache_type(v).to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn local_mem_type(value: &[u8]) -> String {
    match read_u32(value) {
        Some(v) => describe::local_mem_type(v).to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Walks `flags` in catalogue order and joins the labels of the active
/// ones with `", "`. Bits outside the catalogue are dropped.
fn joined_flags(
    flags: u64,
    catalogue: impl IntoIterator<Item = u64>,
    label: fn(u64) -> &'static str,
) -> String {
    let mut out = String::new();
    for flag in catalogue {
        if flags & flag != 0 {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(label(flag));
        }
    }
    out
}

/// Renders a `cl_command_queue_properties` bitfield.
pub fn queue_properties(value: &[u8]) -> String {
    match read_u64(value) {
        Some(v) => joined_flags(
            v,
            QUEUE_PROPERTIES.iter().map(|f| f.bits()),
            describe::queue_property,
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Renders a `cl_device_affinity_domain` bitfield. Zero means the device
/// supports no affinity domain and gets its documented wording.
pub fn affinity_domain(value: &[u8]) -> String {
    match read_u64(value) {
        Some(0) => describe::affinity_domain(0).to_string(),
        Some(v) => joined_flags(
            v,
            AFFINITY_DOMAINS.iter().map(|f| f.bits()),
            describe::affinity_domain,
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Renders a `cl_device_exec_capabilities` bitfield.
pub fn exec_capabilities(value: &[u8]) -> String {
    match read_u64(value) {
        Some(v) => joined_flags(
            v,
            EXEC_CAPABILITIES.iter().map(|f| f.bits()),
            describe::exec_capability,
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Renders a `cl_device_fp_config` bitfield. Zero means no floating-point
/// support of the queried width at all.
pub fn fp_config(value: &[u8]) -> String {
    match read_u64(value) {
        Some(0) => "no FP capabilities".to_string(),
        Some(v) => joined_flags(
            v,
            FP_CONFIGS.iter().map(|f| f.bits()),
            describe::fp_config,
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Renders the work-item size vector, one `size_t` per dimension, joined
/// with `", "`. A trailing partial element is ignored.
pub fn work_item_sizes(value: &[u8]) -> String {
    const WIDTH: usize = std::mem::size_of::<usize>();
    let mut out = String::new();
    for chunk in value.chunks_exact(WIDTH) {
        if let Some(v) = read_usize(chunk) {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(&v.to_string());
        }
    }
    out
}

/// Renders the supported partition scheme vector, one label per
/// `cl_device_partition_property` element.
pub fn partition_properties(value: &[u8]) -> String {
    const WIDTH: usize = std::mem::size_of::<usize>();
    let mut out = String::new();
    for chunk in value.chunks_exact(WIDTH) {
        if let Some(v) = read_usize(chunk) {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(describe::partition_property(v));
        }
    }
    out
}

/// Reads a device handle out of `value` and renders that device's name.
/// Any failure along the way, including a dangling handle, renders as
/// `"N.A."`.
pub fn device_name_from_id<S: InfoSource + ?Sized>(source: &S, value: &[u8]) -> String {
    let raw = match read_u64(value) {
        Some(v) => v,
        None => return NOT_AVAILABLE.to_string(),
    };
    match source.device_info(DeviceId(raw), crate::device::DeviceInfo::Name.raw()) {
        Ok(bytes) => string(&bytes),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

/// Reads a platform handle out of `value` and renders that platform's name.
pub fn platform_name_from_id<S: InfoSource + ?Sized>(source: &S, value: &[u8]) -> String {
    let raw = match read_u64(value) {
        Some(v) => v,
        None => return NOT_AVAILABLE.to_string(),
    };
    match source.platform_info(PlatformId(raw), PlatformInfo::Name.raw()) {
        Ok(bytes) => string(&bytes),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::device::{AffinityDomain, FpConfig, QueueProperties};

    fn u32_bytes(v: u32) -> Vec<u8> {
        v.to_ne_bytes().to_vec()
    }

    fn u64_bytes(v: u64) -> Vec<u8> {
        v.to_ne_bytes().to_vec()
    }

    #[test]
    fn test_text_of_stops_at_nul() {
        assert_eq!(text_of(b"OpenCL 1.2\0garbage"), "OpenCL 1.2");
        assert_eq!(text_of(b"no terminator"), "no terminator");
        assert_eq!(text_of(b"\0"), "");
    }

    #[test]
    fn test_string_empty_is_not_available() {
        assert_eq!(string(b"\0"), "N.A.");
        assert_eq!(string(b""), "N.A.");
        assert_eq!(string(b"Acme\0"), "Acme");
    }

    #[test]
    fn test_uint_bytes_ladder() {
        assert_eq!(uint_bytes(&u32_bytes(0)), "0 bytes");
        assert_eq!(uint_bytes(&u32_bytes(1023)), "1023 bytes");
        assert_eq!(uint_bytes(&u32_bytes(1024)), "1.00 KB (1024 bytes)");
        assert_eq!(uint_bytes(&u32_bytes(1536)), "1.50 KB (1536 bytes)");
        assert_eq!(
            uint_bytes(&u32_bytes(2 * 1024 * 1024)),
            "2.00 MB (2097152 bytes)"
        );
        assert_eq!(
            uint_bytes(&u32_bytes(3 * 1024 * 1024 * 1024)),
            "3.00 GB (3221225472 bytes)"
        );
    }

    #[test]
    fn test_ulong_bytes_reaches_large_units() {
        assert_eq!(
            ulong_bytes(&u64_bytes(1024u64.pow(4))),
            "1.00 TB (1099511627776 bytes)"
        );
        assert_eq!(
            ulong_bytes(&u64_bytes(1024u64.pow(5))),
            "1.00 PB (1125899906842624 bytes)"
        );
        // past the last unit the value stays in PB
        assert_eq!(
            ulong_bytes(&u64_bytes(1024u64.pow(5) * 2048)),
            "2048.00 PB (2305843009213693952 bytes)"
        );
    }

    #[test]
    fn test_uint_hertz_scales_once() {
        assert_eq!(uint_hertz(&u32_bytes(999)), "999 MhZ");
        assert_eq!(uint_hertz(&u32_bytes(1000)), "1.00 GhZ (1000 MhZ)");
        assert_eq!(uint_hertz(&u32_bytes(2450)), "2.45 GhZ (2450 MhZ)");
        assert_eq!(
            uint_hertz(&u32_bytes(1_000_000)),
            "1000.00 GhZ (1000000 MhZ)"
        );
    }

    #[test]
    fn test_boolean() {
        assert_eq!(boolean(&u32_bytes(0)), "FALSE");
        assert_eq!(boolean(&u32_bytes(1)), "TRUE");
        assert_eq!(boolean(&u32_bytes(42)), "TRUE");
    }

    #[test]
    fn test_short_buffers_render_as_not_available() {
        assert_eq!(uint(&[1, 2]), "N.A.");
        assert_eq!(ulong_bytes(&[0; 4]), "N.A.");
        assert_eq!(boolean(&[]), "N.A.");
        assert_eq!(device_type(&[0; 3]), "N.A.");
    }

    #[test]
    fn test_bitmask_joins_in_catalogue_order() {
        let both = QueueProperties::PROFILING_ENABLE.bits()
            | QueueProperties::OUT_OF_ORDER_EXEC_MODE_ENABLE.bits();
        assert_eq!(
            queue_properties(&u64_bytes(both)),
            "out of order execution, profiling"
        );

        let domains = AffinityDomain::L1_CACHE.bits() | AffinityDomain::NUMA.bits();
        assert_eq!(affinity_domain(&u64_bytes(domains)), "NUMA, L1 cache");
        assert_eq!(
            affinity_domain(&u64_bytes(0)),
            "no affinity domain supported"
        );
    }

    #[test]
    fn test_fp_config_zero_sentinel_and_unknown_bits() {
        assert_eq!(fp_config(&u64_bytes(0)), "no FP capabilities");
        let flags = FpConfig::DENORM.bits() | FpConfig::FMA.bits();
        assert_eq!(fp_config(&u64_bytes(flags)), "denorms, fused multiply-add");
        // bits outside the catalogue are dropped silently
        assert_eq!(
            fp_config(&u64_bytes(FpConfig::INF_NAN.bits() | (1 << 40))),
            "INF and NaN values"
        );
    }

    #[test]
    fn test_vector_renderers() {
        let mut buffer = Vec::new();
        for v in [1024usize, 512, 64] {
            buffer.extend_from_slice(&v.to_ne_bytes());
        }
        assert_eq!(work_item_sizes(&buffer), "1024, 512, 64");
        assert_eq!(work_item_sizes(&[]), "");

        let mut props = Vec::new();
        for v in [crate::device::PARTITION_EQUALLY, 0usize] {
            props.extend_from_slice(&v.to_ne_bytes());
        }
        assert_eq!(
            partition_properties(&props),
            "partition equally, no partition type supported"
        );
    }
}
