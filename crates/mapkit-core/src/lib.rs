//! # mapkit Core
//!
//! Value types shared by every mapkit crate:
//! - [`Properties`]: the string-to-string mapping attached to map objects and object types
//! - [`Color`]: display colors as stored in object type catalogs
//! - [`PointF`] / [`SizeF`]: object geometry
//!
//! Errors raised while parsing these values are reported through [`CoreError`].

pub mod color;
pub mod error;
pub mod geometry;
pub mod properties;

pub use color::Color;
pub use error::{CoreError, CoreResult};
pub use geometry::{PointF, SizeF};
pub use properties::{parse_property_pair, Properties, PropertiesExt};
