//! Program objects over a mock compiler.
//!
//! The snapshot backend cannot run a real OpenCL C compiler, so a build
//! scans the source for `#error` directives the way `-Werror` surfaces
//! them, and records one diagnostic per hit in the per-device build log.
//! That is enough to replay both sides of the build flow: a clean build
//! with an empty log, and a failed build whose log explains why.

use oclhal::error::{ClError, ClResult, DropResult};
use oclhal::program::{build_options, ProgramTrait};
use oclhal::DeviceId;

/// A program compiled by the snapshot backend's mock compiler.
#[derive(Debug, Clone)]
pub struct SnapshotProgram {
    options: String,
    devices: Vec<DeviceId>,
    status: Result<(), ClError>,
    log: String,
}

impl SnapshotProgram {
    /// The option string the build ran with.
    pub fn options(&self) -> &str {
        &self.options
    }
}

impl ProgramTrait for SnapshotProgram {
    type DeviceT = DeviceId;

    fn from_source(
        source: &str,
        flags: Option<&str>,
        devices: &[DeviceId],
    ) -> ClResult<SnapshotProgram> {
        if devices.is_empty() {
            return Err(ClError::InvalidValue);
        }

        let mut log = String::new();
        for (number, line) in source.lines().enumerate() {
            let line = line.trim_start();
            if let Some(message) = line.strip_prefix("#error") {
                log.push_str(&format!(
                    "{}: error:{}\n",
                    number + 1,
                    message.trim_end()
                ));
            }
        }

        let status = if log.is_empty() {
            Ok(())
        } else {
            log::debug!("program build failed:\n{}", log);
            Err(ClError::BuildProgramFailure)
        };

        Ok(SnapshotProgram {
            options: build_options(flags),
            devices: devices.to_vec(),
            status,
            log,
        })
    }

    fn build_status(&self) -> ClResult<()> {
        self.status
    }

    fn devices(&self) -> &[DeviceId] {
        &self.devices
    }

    fn build_log(&self, device: DeviceId) -> ClResult<String> {
        if self.devices.contains(&device) {
            Ok(self.log.clone())
        } else {
            Err(ClError::InvalidDevice)
        }
    }

    fn drop(_program: Self) -> DropResult<Self> {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use oclhal::program::{build_log_report, DEFAULT_BUILD_OPTIONS};

    const KERNEL: &str = "__kernel void noop(__global int *out) { *out = 0; }";

    #[test]
    fn test_clean_build() -> Result<(), Box<dyn std::error::Error>> {
        let devices = [DeviceId(1)];
        let program = SnapshotProgram::from_source(KERNEL, None, &devices)?;
        assert_eq!(program.build_status(), Ok(()));
        assert_eq!(program.build_log(DeviceId(1))?, "");
        assert_eq!(program.options(), DEFAULT_BUILD_OPTIONS);
        Ok(())
    }

    #[test]
    fn test_extra_flags_are_appended() -> Result<(), Box<dyn std::error::Error>> {
        let devices = [DeviceId(1)];
        let program = SnapshotProgram::from_source(KERNEL, Some("-D N=4"), &devices)?;
        assert_eq!(
            program.options(),
            "-cl-std=CL1.2 -cl-kernel-arg-info -Werror -D N=4"
        );
        Ok(())
    }

    #[test]
    fn test_error_directives_fail_the_build() -> Result<(), Box<dyn std::error::Error>> {
        let source = "#error unsupported target\n__kernel void noop() {}\n";
        let devices = [DeviceId(1), DeviceId(2)];
        let program = SnapshotProgram::from_source(source, None, &devices)?;
        assert_eq!(program.build_status(), Err(ClError::BuildProgramFailure));
        assert!(program
            .build_log(DeviceId(2))?
            .contains("1: error: unsupported target"));

        let report = build_log_report(&program);
        assert_eq!(report.matches("Program build log:").count(), 2);
        Ok(())
    }

    #[test]
    fn test_foreign_device_has_no_log() -> Result<(), Box<dyn std::error::Error>> {
        let program = SnapshotProgram::from_source(KERNEL, None, &[DeviceId(1)])?;
        assert_eq!(program.build_log(DeviceId(9)), Err(ClError::InvalidDevice));
        Ok(())
    }

    #[test]
    fn test_no_devices_is_an_error() {
        assert!(SnapshotProgram::from_source(KERNEL, None, &[]).is_err());
    }
}
