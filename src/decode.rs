//! PGM header and pixel decoding.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use log::trace;

use crate::error::PgmError;
use crate::props::{Format, ImageProperties};
use crate::stream::ByteReader;

/// Parse a PGM header from the stream.
///
/// Reads the magic-number line, then width, height and maxval as
/// whitespace-delimited decimal tokens. Comment lines encountered anywhere a
/// header token is expected are collected, in order, into the returned
/// properties. The whitespace byte separating the maxval token from the
/// pixel data is left unconsumed; [`read_pixels`] eats it.
pub fn read_properties(stream: &mut ByteReader) -> Result<ImageProperties, PgmError> {
    let magic = stream.read_line()?;
    let format = match magic.get(..2) {
        Some(b"P5") => Format::Raw,
        Some(b"P2") => Format::Plain,
        _ => return Err(PgmError::InvalidMagic),
    };

    let mut props = ImageProperties::new();
    props.set_format(format);

    let width = dimension_field(stream, &mut props, "width must be at most 65535")?;
    props.set_width(width)?;

    let height = dimension_field(stream, &mut props, "height must be at most 65535")?;
    props.set_height(height)?;

    // The maxval token is narrowed to one byte; a stream that says 0 (or a
    // multiple of 256) fails in the setter.
    let maxval = header_field(stream, &mut props)? as u8;
    props.set_maxval(maxval)?;

    trace!("pgm header: {width}x{height} maxval {maxval} ({format:?})");

    Ok(props)
}

/// Read the pixel raster into `buffer`.
///
/// Requires width, height and format to be set (maxval is not consulted) and
/// `buffer.len()` to equal `width * height` exactly. Consumes the single
/// whitespace byte after the maxval token, then either copies the raw raster
/// or parses one decimal token per sample, row-major.
pub fn read_pixels(
    stream: &mut ByteReader,
    props: &ImageProperties,
    buffer: &mut [u8],
) -> Result<(), PgmError> {
    let (Some(width), Some(height), Some(format)) = (props.width(), props.height(), props.format())
    else {
        return Err(PgmError::IncompleteProperties);
    };

    let needed = usize::from(width) * usize::from(height);
    if buffer.len() != needed {
        return Err(PgmError::BufferSizeMismatch {
            needed,
            actual: buffer.len(),
        });
    }

    // The one separator byte between the maxval token and the raster.
    stream.get_u8()?;

    match format {
        Format::Raw => stream.read_exact(buffer)?,
        Format::Plain => {
            for sample in buffer.iter_mut() {
                // Values above 255 are narrowed, not rejected.
                *sample = parse_ascii_u32(stream.next_token()?)? as u8;
            }
        }
    }

    Ok(())
}

/// Decode a whole PGM file: header, then a freshly allocated pixel buffer.
pub fn decode(data: &[u8]) -> Result<(ImageProperties, Vec<u8>), PgmError> {
    let mut stream = ByteReader::new(data);
    let props = read_properties(&mut stream)?;
    let mut pixels = vec![0u8; props.num_pixels()];
    read_pixels(&mut stream, &props, &mut pixels)?;
    Ok((props, pixels))
}

/// Read one decimal header field, collecting any comment lines that precede
/// it into `props`.
fn header_field(stream: &mut ByteReader, props: &mut ImageProperties) -> Result<u32, PgmError> {
    loop {
        stream.skip_whitespace();
        if stream.peek_u8() == Some(b'#') {
            let line = stream.read_line()?;
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            let text = line.strip_prefix(b"#").unwrap_or(line);
            let text = text.strip_prefix(b" ").unwrap_or(text);
            props.push_comment(String::from_utf8_lossy(text).into_owned())?;
            continue;
        }
        return parse_ascii_u32(stream.next_token()?);
    }
}

fn dimension_field(
    stream: &mut ByteReader,
    props: &mut ImageProperties,
    too_large: &'static str,
) -> Result<u16, PgmError> {
    let value = header_field(stream, props)?;
    u16::try_from(value).map_err(|_| PgmError::InvalidArgument(too_large))
}

fn parse_ascii_u32(token: &[u8]) -> Result<u32, PgmError> {
    let mut value: u32 = 0;
    for &byte in token {
        if !byte.is_ascii_digit() {
            return Err(malformed(token));
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(byte - b'0')))
            .ok_or_else(|| malformed(token))?;
    }
    Ok(value)
}

fn malformed(token: &[u8]) -> PgmError {
    PgmError::MalformedToken(String::from_utf8_lossy(token).into_owned())
}
