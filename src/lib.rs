//! # zenpgm
//!
//! Decoder and encoder for the 8-bit PGM (Portable Gray Map) format, covering
//! both sub-formats:
//!
//! - **P5** ("raw") — samples stored as a binary raster
//! - **P2** ("plain") — samples stored as whitespace-separated ASCII decimal
//!
//! Header comment lines (`# ...`) are collected on decode and reproduced on
//! encode, in order.
//!
//! The header and the pixel raster can be processed independently:
//! [`read_properties`] parses the header off a [`ByteReader`] and leaves the
//! cursor on the single whitespace byte that separates the maxval from the
//! pixel data; [`read_pixels`] consumes that byte and fills a caller-owned
//! buffer of exactly `width * height` samples. [`decode`] and [`encode`] wrap
//! the two phases for whole-file use.
//!
//! ## Non-Goals
//!
//! - 16-bit samples (maxval is capped at 255, one byte per sample)
//! - PPM, PBM, PAM and PFM variants
//! - Image processing of any kind
//!
//! ## Usage
//!
//! ```
//! use zenpgm::{Format, ImageProperties};
//!
//! let mut props = ImageProperties::new();
//! props.set_width(2)?;
//! props.set_height(2)?;
//! props.set_maxval(255)?;
//! props.set_format(Format::Raw);
//!
//! let encoded = zenpgm::encode(&props, &[0, 64, 128, 255])?;
//! let (decoded, pixels) = zenpgm::decode(&encoded)?;
//!
//! assert_eq!(decoded, props);
//! assert_eq!(pixels, [0, 64, 128, 255]);
//! # Ok::<(), zenpgm::PgmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod props;
mod stream;

pub use decode::{decode, read_pixels, read_properties};
pub use encode::{encode, write};
pub use error::PgmError;
pub use props::{Format, ImageProperties};
pub use stream::{ByteReader, ByteWriter};
