//! Capability introspection and pretty-printing for OpenCL 1.2 platforms
//! and devices.
//!
//! # Terminology:
//!
//! ## Platforms and Devices:
//!
//! A platform is one installed OpenCL implementation: a vendor driver
//! exposing one or more devices. A device is a compute unit behind that
//! platform, a GPU, CPU or accelerator. Both are addressed through opaque
//! handles and described through tagged property queries: the caller names
//! a property by its numeric tag and receives the raw value bytes.
//!
//! ## Tags, catalogues and renderers:
//!
//! Every property tag has a value shape fixed by the standard: a
//! NUL-terminated string, a scalar, a bit field, or a vector. This crate
//! keeps a catalogue of the 1.2 tag-space ([`platform::PlatformInfo`],
//! [`device::DeviceInfo`]), a description table giving each enumerated
//! value a short label ([`describe`]), and one renderer per value shape
//! ([`render`]). The demultiplexers in [`report`] tie the three together.
//!
//! Everything downstream of a query is total: unknown tags, unknown
//! enumerants and undersized buffers all render as fixed sentinel strings.
//! A report describing a device must not be able to crash on the answers
//! the device gives.
//!
//! # Usage:
//!
//! The crate never talks to a driver itself. Backends implement the source
//! traits in [`query`] and the report drivers run against any of them, so
//! the same code serves a native binding, a recorded snapshot, or a test
//! double:
//!
//! ```
//! use oclhal::prelude::*;
//!
//! fn describe_everything<S>(source: &S) -> oclhal::error::ClResult<String>
//! where
//!     S: InfoSource + EnumerationSource,
//! {
//!     let mut out = String::new();
//!     for platform in source.platforms()? {
//!         out.push_str(&oclhal::report::platform_report(source, platform));
//!         for device in source.devices(platform, DeviceType::ALL)? {
//!             out.push_str(&oclhal::report::device_report(source, device));
//!         }
//!     }
//!     Ok(out)
//! }
//! ```

#![warn(missing_docs)]

pub mod describe;
pub mod device;
pub mod error;
pub mod event;
pub mod image;
pub mod platform;
pub mod prelude;
pub mod program;
pub mod query;
pub mod render;
pub mod report;

pub use crate::device::{DeviceId, DeviceInfo, DeviceType};
pub use crate::error::{ClError, ClResult, DropResult, ToResult};
pub use crate::image::{ImageDesc, ImageFormat, MemFlags};
pub use crate::platform::{PlatformId, PlatformInfo};
