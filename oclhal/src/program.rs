//! Program objects and build-option handling.

use crate::error::{ClError, ClResult, DropResult};

/// Options every program build starts from: the language level is pinned,
/// kernel argument metadata is kept for introspection, and warnings are
/// promoted to errors. Extra flags are appended after the trailing space.
pub const DEFAULT_BUILD_OPTIONS: &str = "-cl-std=CL1.2 -cl-kernel-arg-info -Werror ";

/// Builds the option string passed to the compiler: the defaults, followed
/// by the caller's extra flags when there are any.
pub fn build_options(flags: Option<&str>) -> String {
    match flags {
        Some(flags) => format!("{}{}", DEFAULT_BUILD_OPTIONS, flags),
        None => DEFAULT_BUILD_OPTIONS.to_string(),
    }
}

/// A program object compiled for a set of devices.
pub trait ProgramTrait: Sized {
    /// The device handle type of the backing implementation.
    type DeviceT: Copy;

    /// Creates and builds a program from source text. The build uses
    /// [`DEFAULT_BUILD_OPTIONS`] plus the given extra flags.
    ///
    /// A failed compile still returns the program object so the caller can
    /// fetch the build logs; the failure is reported by [`build_status`].
    ///
    /// [`build_status`]: ProgramTrait::build_status
    fn from_source(
        source: &str,
        flags: Option<&str>,
        devices: &[Self::DeviceT],
    ) -> ClResult<Self>;

    /// Creates and builds a program from a source file.
    fn from_file(
        path: &std::path::Path,
        flags: Option<&str>,
        devices: &[Self::DeviceT],
    ) -> ClResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|_| ClError::InvalidValue)?;
        Self::from_source(&source, flags, devices)
    }

    /// The outcome of the build: `Ok` on success, the build error otherwise.
    fn build_status(&self) -> ClResult<()>;

    /// The devices the program was built for.
    fn devices(&self) -> &[Self::DeviceT];

    /// The compiler log produced while building for `device`.
    fn build_log(&self, device: Self::DeviceT) -> ClResult<String>;

    /// Destroy the program, returning the error and the un-destroyed value
    /// on failure.
    fn drop(program: Self) -> DropResult<Self>;
}

/// Collects the build logs of every device the program was built for, in
/// device order. Devices whose log cannot be fetched are skipped with a
/// debug log line.
pub fn build_log_report<P: ProgramTrait>(program: &P) -> String {
    let mut out = String::new();
    for device in program.devices() {
        match program.build_log(*device) {
            Ok(log) => {
                out.push_str(&format!("Program build log:\n{}\n", log));
            }
            Err(err) => {
                log::debug!("unable to get program build log: {}.", err);
            }
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_options_keep_their_trailing_space() {
        assert!(DEFAULT_BUILD_OPTIONS.ends_with(' '));
    }

    #[test]
    fn test_build_options_append_extra_flags() {
        assert_eq!(build_options(None), DEFAULT_BUILD_OPTIONS);
        assert_eq!(
            build_options(Some("-D WIDTH=64")),
            "-cl-std=CL1.2 -cl-kernel-arg-info -Werror -D WIDTH=64"
        );
    }
}
