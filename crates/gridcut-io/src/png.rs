//! PNG image format support
//!
//! Reads PNG images with the `png` crate and normalizes every color
//! type and bit depth to an 8-bit RGBA [`Raster`]: grayscale expands
//! to equal channels, palettes resolve through the PLTE chunk (with
//! tRNS alpha when present), and 16-bit samples keep their high byte.
//! Writing always produces 8-bit RGBA.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;

use gridcut_core::{BYTES_PER_PIXEL, Raster};
use png::{BitDepth, ColorType, Decoder, Encoder};

use crate::error::{IoError, IoResult};

/// Read a PNG image from a reader into an RGBA raster.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] for malformed PNG data and
/// [`IoError::UnsupportedFormat`] for color type and bit depth
/// combinations outside the PNG specification.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("PNG output buffer size overflow".to_string()))?;
    let mut buf = vec![0u8; buf_size];
    let output = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;
    let line_size = output.line_size;
    let data = &buf[..output.buffer_size()];

    let info = reader.info();
    let palette = info.palette.as_deref();
    let trns = info.trns.as_deref();

    let w = width as usize;
    let h = height as usize;
    let mut rgba = vec![0u8; w * h * BYTES_PER_PIXEL];

    match (color_type, bit_depth) {
        (ColorType::Rgba, BitDepth::Eight) => {
            for y in 0..h {
                let src = y * line_size;
                let dst = y * w * BYTES_PER_PIXEL;
                rgba[dst..dst + w * BYTES_PER_PIXEL]
                    .copy_from_slice(&data[src..src + w * BYTES_PER_PIXEL]);
            }
        }
        (ColorType::Rgba, BitDepth::Sixteen) => {
            for y in 0..h {
                for x in 0..w {
                    let src = y * line_size + x * 8;
                    let dst = (y * w + x) * BYTES_PER_PIXEL;
                    rgba[dst] = data[src];
                    rgba[dst + 1] = data[src + 2];
                    rgba[dst + 2] = data[src + 4];
                    rgba[dst + 3] = data[src + 6];
                }
            }
        }
        (ColorType::Rgb, BitDepth::Eight) => {
            for y in 0..h {
                for x in 0..w {
                    let src = y * line_size + x * 3;
                    let dst = (y * w + x) * BYTES_PER_PIXEL;
                    rgba[dst..dst + 3].copy_from_slice(&data[src..src + 3]);
                    rgba[dst + 3] = 255;
                }
            }
        }
        (ColorType::Rgb, BitDepth::Sixteen) => {
            for y in 0..h {
                for x in 0..w {
                    let src = y * line_size + x * 6;
                    let dst = (y * w + x) * BYTES_PER_PIXEL;
                    rgba[dst] = data[src];
                    rgba[dst + 1] = data[src + 2];
                    rgba[dst + 2] = data[src + 4];
                    rgba[dst + 3] = 255;
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Eight) => {
            for y in 0..h {
                for x in 0..w {
                    let g = data[y * line_size + x];
                    let dst = (y * w + x) * BYTES_PER_PIXEL;
                    rgba[dst..dst + BYTES_PER_PIXEL].copy_from_slice(&[g, g, g, 255]);
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Sixteen) => {
            for y in 0..h {
                for x in 0..w {
                    let g = data[y * line_size + x * 2];
                    let dst = (y * w + x) * BYTES_PER_PIXEL;
                    rgba[dst..dst + BYTES_PER_PIXEL].copy_from_slice(&[g, g, g, 255]);
                }
            }
        }
        (ColorType::Grayscale, BitDepth::One) => {
            expand_gray_packed(&mut rgba, data, line_size, w, h, 1);
        }
        (ColorType::Grayscale, BitDepth::Two) => {
            expand_gray_packed(&mut rgba, data, line_size, w, h, 2);
        }
        (ColorType::Grayscale, BitDepth::Four) => {
            expand_gray_packed(&mut rgba, data, line_size, w, h, 4);
        }
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => {
            for y in 0..h {
                for x in 0..w {
                    let src = y * line_size + x * 2;
                    let g = data[src];
                    let a = data[src + 1];
                    let dst = (y * w + x) * BYTES_PER_PIXEL;
                    rgba[dst..dst + BYTES_PER_PIXEL].copy_from_slice(&[g, g, g, a]);
                }
            }
        }
        (ColorType::GrayscaleAlpha, BitDepth::Sixteen) => {
            for y in 0..h {
                for x in 0..w {
                    let src = y * line_size + x * 4;
                    let g = data[src];
                    let a = data[src + 2];
                    let dst = (y * w + x) * BYTES_PER_PIXEL;
                    rgba[dst..dst + BYTES_PER_PIXEL].copy_from_slice(&[g, g, g, a]);
                }
            }
        }
        (ColorType::Indexed, depth) => {
            expand_indexed(&mut rgba, data, line_size, w, h, depth, palette, trns)?;
        }
        (other, depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG color type {other:?} at bit depth {depth:?}"
            )));
        }
    }

    Ok(Raster::from_rgba(width, height, rgba)?)
}

/// Expand sub-byte grayscale samples to 8-bit RGBA.
fn expand_gray_packed(
    rgba: &mut [u8],
    data: &[u8],
    line_size: usize,
    w: usize,
    h: usize,
    bits: u32,
) {
    // Scale to full range: 1-bit x255, 2-bit x85, 4-bit x17.
    let max = (1u8 << bits) - 1;
    let scale = 255 / max;
    for y in 0..h {
        let row = &data[y * line_size..y * line_size + line_size];
        for x in 0..w {
            let g = unpack_sample(row, x as u32, bits) * scale;
            let dst = (y * w + x) * BYTES_PER_PIXEL;
            rgba[dst..dst + BYTES_PER_PIXEL].copy_from_slice(&[g, g, g, 255]);
        }
    }
}

/// Resolve palette indices to RGBA through the PLTE and tRNS chunks.
fn expand_indexed(
    rgba: &mut [u8],
    data: &[u8],
    line_size: usize,
    w: usize,
    h: usize,
    bit_depth: BitDepth,
    palette: Option<&[u8]>,
    trns: Option<&[u8]>,
) -> IoResult<()> {
    let bits = match bit_depth {
        BitDepth::One => 1,
        BitDepth::Two => 2,
        BitDepth::Four => 4,
        BitDepth::Eight => 8,
        BitDepth::Sixteen => {
            return Err(IoError::InvalidData(
                "indexed PNG cannot be 16-bit".to_string(),
            ));
        }
    };
    let palette =
        palette.ok_or_else(|| IoError::InvalidData("indexed PNG missing palette".to_string()))?;

    for y in 0..h {
        let row = &data[y * line_size..y * line_size + line_size];
        for x in 0..w {
            let index = if bits == 8 {
                row[x]
            } else {
                unpack_sample(row, x as u32, bits)
            } as usize;
            let base = index * 3;
            let rgb = palette.get(base..base + 3).ok_or_else(|| {
                IoError::InvalidData(format!("palette index {index} out of range"))
            })?;
            let alpha = trns.and_then(|t| t.get(index)).copied().unwrap_or(255);
            let dst = (y * w + x) * BYTES_PER_PIXEL;
            rgba[dst..dst + 3].copy_from_slice(rgb);
            rgba[dst + 3] = alpha;
        }
    }
    Ok(())
}

/// Extract a sub-byte sample from a packed scanline.
///
/// Samples are packed most significant bits first, per the PNG
/// specification.
fn unpack_sample(row: &[u8], x: u32, bits: u32) -> u8 {
    let per_byte = 8 / bits;
    let byte = row[(x / per_byte) as usize];
    let shift = 8 - bits * (x % per_byte + 1);
    (byte >> shift) & ((1u16 << bits) - 1) as u8
}

/// Write a raster as an 8-bit RGBA PNG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the encoder rejects the data.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG encode error: {e}")))?;
    png_writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("PNG encode error: {e}")))?;
    Ok(())
}

/// Read a PNG file into an RGBA raster.
pub fn read_png_file<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a raster to a PNG file.
pub fn write_png_file<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(raster, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcut_core::Rgba;
    use std::io::Cursor;

    /// Encode raw scanline data with the given color type and depth.
    fn encode_with(
        color: ColorType,
        depth: BitDepth,
        data: &[u8],
        width: u32,
        height: u32,
        palette: Option<&[u8]>,
    ) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = Encoder::new(&mut bytes, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            if let Some(p) = palette {
                encoder.set_palette(p.to_vec());
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        bytes
    }

    #[test]
    fn test_rgba_roundtrip() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 255, // blue
            255, 255, 255, 128, // translucent white
        ];
        let raster = Raster::from_rgba(2, 2, data).unwrap();

        let mut bytes = Vec::new();
        write_png(&raster, &mut bytes).unwrap();
        let decoded = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.data(), raster.data());
    }

    #[test]
    fn test_decode_grayscale() {
        let bytes = encode_with(
            ColorType::Grayscale,
            BitDepth::Eight,
            &[0, 128, 255, 64],
            2,
            2,
            None,
        );
        let raster = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(raster.pixel(0, 0), Some(Rgba::opaque(0, 0, 0)));
        assert_eq!(raster.pixel(1, 0), Some(Rgba::opaque(128, 128, 128)));
        assert_eq!(raster.pixel(0, 1), Some(Rgba::WHITE));
        assert_eq!(raster.pixel(1, 1), Some(Rgba::opaque(64, 64, 64)));
    }

    #[test]
    fn test_decode_grayscale_one_bit() {
        // One packed byte: pixels 1,0,1,0,0,0,0,0.
        let bytes = encode_with(ColorType::Grayscale, BitDepth::One, &[0b1010_0000], 8, 1, None);
        let raster = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(raster.pixel(0, 0), Some(Rgba::WHITE));
        assert_eq!(raster.pixel(1, 0), Some(Rgba::BLACK));
        assert_eq!(raster.pixel(2, 0), Some(Rgba::WHITE));
        assert_eq!(raster.pixel(3, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_decode_rgb_gets_opaque_alpha() {
        let bytes = encode_with(
            ColorType::Rgb,
            BitDepth::Eight,
            &[10, 20, 30, 40, 50, 60],
            2,
            1,
            None,
        );
        let raster = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(raster.pixel(0, 0), Some(Rgba::opaque(10, 20, 30)));
        assert_eq!(raster.pixel(1, 0), Some(Rgba::opaque(40, 50, 60)));
    }

    #[test]
    fn test_decode_grayscale_alpha() {
        let bytes = encode_with(
            ColorType::GrayscaleAlpha,
            BitDepth::Eight,
            &[200, 255, 100, 0],
            2,
            1,
            None,
        );
        let raster = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(raster.pixel(0, 0), Some(Rgba::new(200, 200, 200, 255)));
        assert_eq!(raster.pixel(1, 0), Some(Rgba::new(100, 100, 100, 0)));
    }

    #[test]
    fn test_decode_indexed() {
        let palette = [255, 0, 0, 0, 255, 0]; // red, green
        let bytes = encode_with(
            ColorType::Indexed,
            BitDepth::Eight,
            &[0, 1, 1, 0],
            2,
            2,
            Some(&palette),
        );
        let raster = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(raster.pixel(0, 0), Some(Rgba::RED));
        assert_eq!(raster.pixel(1, 0), Some(Rgba::GREEN));
        assert_eq!(raster.pixel(0, 1), Some(Rgba::GREEN));
        assert_eq!(raster.pixel(1, 1), Some(Rgba::RED));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = read_png(Cursor::new(b"not a png at all".to_vec()));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }

    #[test]
    fn test_written_png_carries_magic() {
        let raster = Raster::new(1, 1).unwrap();
        let mut bytes = Vec::new();
        write_png(&raster, &mut bytes).unwrap();
        assert!(bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }

    #[test]
    fn test_unpack_sample() {
        assert_eq!(unpack_sample(&[0b1000_0001], 0, 1), 1);
        assert_eq!(unpack_sample(&[0b1000_0001], 7, 1), 1);
        assert_eq!(unpack_sample(&[0b1000_0001], 3, 1), 0);
        assert_eq!(unpack_sample(&[0b1101_0010], 0, 2), 3);
        assert_eq!(unpack_sample(&[0b1101_0010], 3, 2), 2);
        assert_eq!(unpack_sample(&[0xAB], 0, 4), 0xA);
        assert_eq!(unpack_sample(&[0xAB], 1, 4), 0xB);
    }
}
