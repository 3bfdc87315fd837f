//! Types for error handling.
//!
//! Nearly every call into an OpenCL implementation reports a status code, and
//! nearly all of them can fail. [`ClError`] mirrors the OpenCL 1.2 status
//! space; [`ToResult`] converts a raw status word into a [`ClResult`], and
//! [`status_description`] is the total decoding function used when a status
//! has to become text rather than a fault (a report must never crash while
//! describing hardware).

use std::error::Error;
use std::fmt;

/// Error enum covering the status codes an OpenCL 1.2 implementation can
/// report. Discriminants are the raw (negative) status values.
#[repr(i32)]
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ClError {
    DeviceNotFound = -1,
    DeviceNotAvailable = -2,
    CompilerNotAvailable = -3,
    MemObjectAllocationFailure = -4,
    OutOfResources = -5,
    OutOfHostMemory = -6,
    ProfilingInfoNotAvailable = -7,
    MemCopyOverlap = -8,
    ImageFormatMismatch = -9,
    ImageFormatNotSupported = -10,
    BuildProgramFailure = -11,
    MapFailure = -12,
    MisalignedSubBufferOffset = -13,
    ExecStatusErrorForEventsInWaitList = -14,
    CompileProgramFailure = -15,
    LinkerNotAvailable = -16,
    LinkProgramFailure = -17,
    DevicePartitionFailed = -18,
    KernelArgInfoNotAvailable = -19,
    InvalidValue = -30,
    InvalidDeviceType = -31,
    InvalidPlatform = -32,
    InvalidDevice = -33,
    InvalidContext = -34,
    InvalidQueueProperties = -35,
    InvalidCommandQueue = -36,
    InvalidHostPtr = -37,
    InvalidMemObject = -38,
    InvalidImageFormatDescriptor = -39,
    InvalidImageSize = -40,
    InvalidSampler = -41,
    InvalidBinary = -42,
    InvalidBuildOptions = -43,
    InvalidProgram = -44,
    InvalidProgramExecutable = -45,
    InvalidKernelName = -46,
    InvalidKernelDefinition = -47,
    InvalidKernel = -48,
    InvalidArgIndex = -49,
    InvalidArgValue = -50,
    InvalidArgSize = -51,
    InvalidKernelArgs = -52,
    InvalidWorkDimension = -53,
    InvalidWorkGroupSize = -54,
    InvalidWorkItemSize = -55,
    InvalidGlobalOffset = -56,
    InvalidEventWaitList = -57,
    InvalidEvent = -58,
    InvalidOperation = -59,
    InvalidGlObject = -60,
    InvalidBufferSize = -61,
    InvalidMipLevel = -62,
    InvalidGlobalWorkSize = -63,
    InvalidProperty = -64,
    InvalidImageDescriptor = -65,
    InvalidCompilerOptions = -66,
    InvalidLinkerOptions = -67,
    InvalidDevicePartitionCount = -68,

    // Self-defined: any status outside the 1.2 catalogue.
    UnknownError = -100_100,
}

/// Result type for most oclhal functions.
pub type ClResult<T> = Result<T, ClError>;

/// Special result type for `drop` functions which includes the un-dropped
/// value with the error.
pub type DropResult<T> = Result<(), (ClError, T)>;

impl ClError {
    /// Maps a raw status code to its variant. Success (0) and unknown codes
    /// map to `None`; the [`ToResult`] boundary turns unknown codes into
    /// `UnknownError`.
    pub fn from_raw(value: i32) -> Option<ClError> {
        let kind = match value {
            -1 => ClError::DeviceNotFound,
            -2 => ClError::DeviceNotAvailable,
            -3 => ClError::CompilerNotAvailable,
            -4 => ClError::MemObjectAllocationFailure,
            -5 => ClError::OutOfResources,
            -6 => ClError::OutOfHostMemory,
            -7 => ClError::ProfilingInfoNotAvailable,
            -8 => ClError::MemCopyOverlap,
            -9 => ClError::ImageFormatMismatch,
            -10 => ClError::ImageFormatNotSupported,
            -11 => ClError::BuildProgramFailure,
            -12 => ClError::MapFailure,
            -13 => ClError::MisalignedSubBufferOffset,
            -14 => ClError::ExecStatusErrorForEventsInWaitList,
            -15 => ClError::CompileProgramFailure,
            -16 => ClError::LinkerNotAvailable,
            -17 => ClError::LinkProgramFailure,
            -18 => ClError::DevicePartitionFailed,
            -19 => ClError::KernelArgInfoNotAvailable,
            -30 => ClError::InvalidValue,
            -31 => ClError::InvalidDeviceType,
            -32 => ClError::InvalidPlatform,
            -33 => ClError::InvalidDevice,
            -34 => ClError::InvalidContext,
            -35 => ClError::InvalidQueueProperties,
            -36 => ClError::InvalidCommandQueue,
            -37 => ClError::InvalidHostPtr,
            -38 => ClError::InvalidMemObject,
            -39 => ClError::InvalidImageFormatDescriptor,
            -40 => ClError::InvalidImageSize,
            -41 => ClError::InvalidSampler,
            -42 => ClError::InvalidBinary,
            -43 => ClError::InvalidBuildOptions,
            -44 => ClError::InvalidProgram,
            -45 => ClError::InvalidProgramExecutable,
            -46 => ClError::InvalidKernelName,
            -47 => ClError::InvalidKernelDefinition,
            -48 => ClError::InvalidKernel,
            -49 => ClError::InvalidArgIndex,
            -50 => ClError::InvalidArgValue,
            -51 => ClError::InvalidArgSize,
            -52 => ClError::InvalidKernelArgs,
            -53 => ClError::InvalidWorkDimension,
            -54 => ClError::InvalidWorkGroupSize,
            -55 => ClError::InvalidWorkItemSize,
            -56 => ClError::InvalidGlobalOffset,
            -57 => ClError::InvalidEventWaitList,
            -58 => ClError::InvalidEvent,
            -59 => ClError::InvalidOperation,
            -60 => ClError::InvalidGlObject,
            -61 => ClError::InvalidBufferSize,
            -62 => ClError::InvalidMipLevel,
            -63 => ClError::InvalidGlobalWorkSize,
            -64 => ClError::InvalidProperty,
            -65 => ClError::InvalidImageDescriptor,
            -66 => ClError::InvalidCompilerOptions,
            -67 => ClError::InvalidLinkerOptions,
            -68 => ClError::InvalidDevicePartitionCount,
            _ => return None,
        };
        Some(kind)
    }

    /// A short, stable description of the failure.
    pub fn description(self) -> &'static str {
        match self {
            ClError::DeviceNotFound => "no such device",
            ClError::DeviceNotAvailable => "device not available",
            ClError::CompilerNotAvailable => "compiler not available",
            ClError::MemObjectAllocationFailure => "failed to allocate memory for image or buffer",
            ClError::OutOfResources => "failed to allocate resources on device",
            ClError::OutOfHostMemory => "failed to allocate resources on host",
            ClError::ProfilingInfoNotAvailable => "profiling info not available",
            ClError::MemCopyOverlap => "overlapping memory copy",
            ClError::ImageFormatMismatch => "image format mismatch",
            ClError::ImageFormatNotSupported => "image format not supported",
            ClError::BuildProgramFailure => "program build failed",
            ClError::MapFailure => "failed to map buffer or image",
            ClError::MisalignedSubBufferOffset => "misaligned sub buffer object",
            ClError::ExecStatusErrorForEventsInWaitList => "error in event wait list",
            ClError::CompileProgramFailure => "program compile failed",
            ClError::LinkerNotAvailable => "linker not available",
            ClError::LinkProgramFailure => "program link failed",
            ClError::DevicePartitionFailed => "device partition failed",
            ClError::KernelArgInfoNotAvailable => "kernel argument info not available",
            ClError::InvalidValue => "invalid value",
            ClError::InvalidDeviceType => "invalid device type",
            ClError::InvalidPlatform => "invalid platform",
            ClError::InvalidDevice => "invalid device",
            ClError::InvalidContext => "invalid context",
            ClError::InvalidQueueProperties => "invalid queue properties",
            ClError::InvalidCommandQueue => "invalid command queue",
            ClError::InvalidHostPtr => "invalid host pointer",
            ClError::InvalidMemObject => "invalid memory object",
            ClError::InvalidImageFormatDescriptor => "invalid image format descriptor",
            ClError::InvalidImageSize => "invalid image size",
            ClError::InvalidSampler => "invalid sampler",
            ClError::InvalidBinary => "invalid binary",
            ClError::InvalidBuildOptions => "invalid build options",
            ClError::InvalidProgram => "invalid program",
            ClError::InvalidProgramExecutable => "invalid program executable",
            ClError::InvalidKernelName => "invalid kernel name",
            ClError::InvalidKernelDefinition => "invalid kernel definition",
            ClError::InvalidKernel => "invalid kernel",
            ClError::InvalidArgIndex => "invalid argument index",
            ClError::InvalidArgValue => "invalid argument value",
            ClError::InvalidArgSize => "invalid argument size",
            ClError::InvalidKernelArgs => "invalid kernel argument(s)",
            ClError::InvalidWorkDimension => "invalid work dimension",
            ClError::InvalidWorkGroupSize => "invalid work group size",
            ClError::InvalidWorkItemSize => "invalid work item size",
            ClError::InvalidGlobalOffset => "invalid global offset",
            ClError::InvalidEventWaitList => "invalid event wait list",
            ClError::InvalidEvent => "invalid event",
            ClError::InvalidOperation => "invalid operation",
            ClError::InvalidGlObject => "invalid GL object",
            ClError::InvalidBufferSize => "invalid buffer size",
            ClError::InvalidMipLevel => "invalid mip level",
            ClError::InvalidGlobalWorkSize => "invalid global work size",
            ClError::InvalidProperty => "invalid property",
            ClError::InvalidImageDescriptor => "invalid image descriptor",
            ClError::InvalidCompilerOptions => "invalid compiler options",
            ClError::InvalidLinkerOptions => "invalid linker options",
            ClError::InvalidDevicePartitionCount => "invalid device partition count",
            ClError::UnknownError => "UNKNOWN ERROR",
        }
    }
}

impl Error for ClError {}

impl fmt::Display for ClError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ClError::description(*self))
    }
}

/// Conversion from a raw status word to a `ClResult`.
pub trait ToResult {
    /// Interprets the status: success becomes `Ok`, everything else the
    /// matching [`ClError`].
    fn to_result(self) -> ClResult<()>;
}

impl ToResult for i32 {
    fn to_result(self) -> ClResult<()> {
        if self == 0 {
            return Ok(());
        }
        Err(ClError::from_raw(self).unwrap_or(ClError::UnknownError))
    }
}

/// Total description function over the raw status space. Success and every
/// catalogued failure decode to a stable string; anything else is the
/// `"UNKNOWN ERROR"` sentinel.
pub fn status_description(value: i32) -> &'static str {
    if value == 0 {
        return "success";
    }
    match ClError::from_raw(value) {
        Some(err) => err.description(),
        None => "UNKNOWN ERROR",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_result() {
        assert_eq!(0i32.to_result(), Ok(()));
        assert_eq!((-11i32).to_result(), Err(ClError::BuildProgramFailure));
        assert_eq!((-9999i32).to_result(), Err(ClError::UnknownError));
    }

    #[test]
    fn test_status_description_catalogued() {
        assert_eq!(status_description(0), "success");
        assert_eq!(status_description(-1), "no such device");
        assert_eq!(status_description(-11), "program build failed");
        assert_eq!(
            status_description(-4),
            "failed to allocate memory for image or buffer"
        );
    }

    #[test]
    fn test_status_description_unknown_is_sentinel() {
        assert_eq!(status_description(-424242), "UNKNOWN ERROR");
        assert_eq!(status_description(77), "UNKNOWN ERROR");
    }

    #[test]
    fn test_display_matches_description() {
        assert_eq!(
            ClError::OutOfResources.to_string(),
            "failed to allocate resources on device"
        );
    }
}
