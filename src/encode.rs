//! PGM serialization.

use alloc::vec::Vec;

use crate::error::PgmError;
use crate::props::{Format, ImageProperties};
use crate::stream::ByteWriter;

/// Serialize a full PGM file into `out`.
///
/// Emits the magic-number line, one `# ...` line per stored comment, the
/// dimension line, the maxval line and the pixel raster. Plain rasters get
/// each sample as decimal followed by one space, with a newline after every
/// row; the trailing space before each newline is part of the format. The
/// sink is left to the caller, nothing is flushed or closed.
pub fn write(
    props: &ImageProperties,
    pixels: &[u8],
    out: &mut ByteWriter,
) -> Result<(), PgmError> {
    let (Some(width), Some(height), Some(maxval), Some(format)) = (
        props.width(),
        props.height(),
        props.maxval(),
        props.format(),
    ) else {
        return Err(PgmError::IncompleteProperties);
    };

    // Re-checked at write time even though the setters already enforce it.
    if width == 0 {
        return Err(PgmError::InvalidArgument("width must be > 0"));
    }
    if height == 0 {
        return Err(PgmError::InvalidArgument("height must be > 0"));
    }
    if maxval == 0 {
        return Err(PgmError::InvalidArgument("maxval must be > 0"));
    }

    let needed = props.num_pixels();
    if pixels.len() != needed {
        return Err(PgmError::BufferSizeMismatch {
            needed,
            actual: pixels.len(),
        });
    }

    out.write_all(format.magic());
    out.write_u8(b'\n');

    for comment in props.comments() {
        out.write_all(b"# ");
        out.write_all(comment.as_bytes());
        out.write_u8(b'\n');
    }

    out.write_decimal(u32::from(width));
    out.write_u8(b' ');
    out.write_decimal(u32::from(height));
    out.write_u8(b'\n');
    out.write_decimal(u32::from(maxval));
    out.write_u8(b'\n');

    match format {
        Format::Raw => out.write_all(pixels),
        Format::Plain => {
            for row in pixels.chunks_exact(usize::from(width)) {
                for &sample in row {
                    out.write_decimal(u32::from(sample));
                    out.write_u8(b' ');
                }
                out.write_u8(b'\n');
            }
        }
    }

    Ok(())
}

/// Serialize a full PGM file into a freshly allocated buffer.
pub fn encode(props: &ImageProperties, pixels: &[u8]) -> Result<Vec<u8>, PgmError> {
    let per_sample = match props.format() {
        Some(Format::Plain) => 4,
        _ => 1,
    };
    let comment_bytes: usize = props.comments().iter().map(|c| c.len() + 3).sum();
    let capacity = 16 + comment_bytes + props.num_pixels() * per_sample;

    let mut out = ByteWriter::with_capacity(capacity);
    write(props, pixels, &mut out)?;
    Ok(out.into_inner())
}
