//! This module re-exports a number of commonly-used types for working with
//! oclhal.
//!
//! This allows the user to `use oclhal::prelude::*;` and have the most
//! commonly-used types available quickly.

pub use crate::device::{DeviceId, DeviceInfo, DeviceType};
pub use crate::error::{ClError, ClResult, DropResult, ToResult};
pub use crate::event::ProfilingSpan;
pub use crate::image::{ImageDesc, ImageFormat, ImageTrait, MemFlags};
pub use crate::platform::{PlatformId, PlatformInfo};
pub use crate::program::ProgramTrait;
pub use crate::query::{EnumerationSource, FormatSource, InfoSource};
