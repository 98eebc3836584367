use alloc::string::String;
use alloc::vec::Vec;

use crate::error::PgmError;

/// PGM sub-format, named after the variant digit in the magic number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// P2 — samples as whitespace-separated ASCII decimal.
    Plain,
    /// P5 — samples as a binary raster.
    Raw,
}

impl Format {
    /// The two-byte magic for this sub-format.
    pub const fn magic(self) -> &'static [u8; 2] {
        match self {
            Format::Plain => b"P2",
            Format::Raw => b"P5",
        }
    }

    /// The numeric variant digit (2 or 5).
    pub const fn code(self) -> u8 {
        match self {
            Format::Plain => 2,
            Format::Raw => 5,
        }
    }

    /// Map a numeric variant code to a format. Anything outside {2, 5}
    /// is rejected.
    pub fn from_code(code: u8) -> Result<Self, PgmError> {
        match code {
            2 => Ok(Format::Plain),
            5 => Ok(Format::Raw),
            _ => Err(PgmError::InvalidArgument(
                "format code must be 2 (plain) or 5 (raw)",
            )),
        }
    }
}

/// Validated, partially-constructible PGM header.
///
/// Starts with every field unset; fields are populated one at a time, either
/// by [`crate::read_properties`] or by the caller. [`Self::is_complete`]
/// gates encoding. Comment lines ride along but do not count towards
/// completeness.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageProperties {
    width: Option<u16>,
    height: Option<u16>,
    maxval: Option<u8>,
    format: Option<Format>,
    comments: Vec<String>,
}

impl ImageProperties {
    /// A header with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> Option<u16> {
        self.width
    }

    pub fn height(&self) -> Option<u16> {
        self.height
    }

    pub fn maxval(&self) -> Option<u8> {
        self.maxval
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// Header comment lines, in file order, without the `#` marker.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Set the image width. Zero is rejected; the `u16` type carries the
    /// 65535 upper bound.
    pub fn set_width(&mut self, width: u16) -> Result<(), PgmError> {
        if width == 0 {
            return Err(PgmError::InvalidArgument("width must be > 0"));
        }
        self.width = Some(width);
        Ok(())
    }

    /// Set the image height. Zero is rejected.
    pub fn set_height(&mut self, height: u16) -> Result<(), PgmError> {
        if height == 0 {
            return Err(PgmError::InvalidArgument("height must be > 0"));
        }
        self.height = Some(height);
        Ok(())
    }

    /// Set the maximum sample value. Zero is rejected; the `u8` type carries
    /// the 255 upper bound (single-byte samples only).
    pub fn set_maxval(&mut self, maxval: u8) -> Result<(), PgmError> {
        if maxval == 0 {
            return Err(PgmError::InvalidArgument("maxval must be > 0"));
        }
        self.maxval = Some(maxval);
        Ok(())
    }

    /// Set the sub-format. The enum admits only the two legal variants;
    /// numeric codes go through [`Format::from_code`].
    pub fn set_format(&mut self, format: Format) {
        self.format = Some(format);
    }

    /// Append a header comment line. The text must not contain a line break;
    /// the `#` marker is added on encode.
    pub fn push_comment(&mut self, text: impl Into<String>) -> Result<(), PgmError> {
        let text = text.into();
        if text.bytes().any(|b| b == b'\n' || b == b'\r') {
            return Err(PgmError::InvalidArgument(
                "comment must not contain a line break",
            ));
        }
        self.comments.push(text);
        Ok(())
    }

    /// `width * height`, widened to `usize`. Unset dimensions contribute
    /// zero, so the value is only meaningful once both are set.
    pub fn num_pixels(&self) -> usize {
        usize::from(self.width.unwrap_or(0)) * usize::from(self.height.unwrap_or(0))
    }

    /// Whether width, height, maxval and format have all been set.
    pub fn is_complete(&self) -> bool {
        self.width.is_some()
            && self.height.is_some()
            && self.maxval.is_some()
            && self.format.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_reject_zero() {
        let mut props = ImageProperties::new();
        assert_eq!(
            props.set_width(0),
            Err(PgmError::InvalidArgument("width must be > 0"))
        );
        assert_eq!(
            props.set_height(0),
            Err(PgmError::InvalidArgument("height must be > 0"))
        );
        assert_eq!(
            props.set_maxval(0),
            Err(PgmError::InvalidArgument("maxval must be > 0"))
        );
        assert!(!props.is_complete());
    }

    #[test]
    fn completeness_requires_all_four_fields() {
        let mut props = ImageProperties::new();
        props.set_width(1).unwrap();
        props.set_height(1).unwrap();
        props.set_maxval(1).unwrap();
        assert!(!props.is_complete());
        props.set_format(Format::Plain);
        assert!(props.is_complete());
    }

    #[test]
    fn num_pixels_widens() {
        let mut props = ImageProperties::new();
        props.set_width(u16::MAX).unwrap();
        props.set_height(u16::MAX).unwrap();
        assert_eq!(props.num_pixels(), 65535 * 65535);
    }

    #[test]
    fn num_pixels_is_zero_while_unset() {
        let mut props = ImageProperties::new();
        assert_eq!(props.num_pixels(), 0);
        props.set_width(10).unwrap();
        assert_eq!(props.num_pixels(), 0);
    }

    #[test]
    fn format_codes() {
        assert_eq!(Format::from_code(2), Ok(Format::Plain));
        assert_eq!(Format::from_code(5), Ok(Format::Raw));
        assert!(matches!(
            Format::from_code(3),
            Err(PgmError::InvalidArgument(_))
        ));
        assert_eq!(Format::Plain.code(), 2);
        assert_eq!(Format::Raw.magic(), b"P5");
    }

    #[test]
    fn comments_reject_line_breaks() {
        let mut props = ImageProperties::new();
        assert!(props.push_comment("one line").is_ok());
        assert!(matches!(
            props.push_comment("two\nlines"),
            Err(PgmError::InvalidArgument(_))
        ));
        assert_eq!(props.comments(), ["one line"]);
    }
}
