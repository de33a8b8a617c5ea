use log::trace;

/// One of the four states a sprite pixel can take, spread across two
/// parallel bit-planes: `(plane1, plane2)` = `(0,0)` transparent,
/// `(0,1)` white, `(1,0)` black, `(1,1)` grey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    Transparent,
    White,
    Black,
    Grey,
}

impl PixelClass {
    /// Quantize one `[r, g, b, a]` sample.
    ///
    /// Anything below half alpha is transparent; otherwise the weighted
    /// luma decides, with both thresholds exclusive (`luma == 64` and
    /// `luma == 192` are grey).
    pub fn classify(rgba: [u8; 4]) -> PixelClass {
        let [r, g, b, a] = rgba;
        if a < 128 {
            return PixelClass::Transparent;
        }
        let luma = (76 * r as u32 + 150 * g as u32 + 30 * b as u32) / 256;
        if luma > 192 {
            PixelClass::White
        } else if luma < 64 {
            PixelClass::Black
        } else {
            PixelClass::Grey
        }
    }

    /// `(plane1, plane2)` bits, each 0 or 1.
    pub fn plane_bits(self) -> (u8, u8) {
        match self {
            PixelClass::Transparent => (0, 0),
            PixelClass::White => (0, 1),
            PixelClass::Black => (1, 0),
            PixelClass::Grey => (1, 1),
        }
    }

    pub fn from_plane_bits(plane1: bool, plane2: bool) -> PixelClass {
        match (plane1, plane2) {
            (false, false) => PixelClass::Transparent,
            (false, true) => PixelClass::White,
            (true, false) => PixelClass::Black,
            (true, true) => PixelClass::Grey,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteError {
    /// Stream shorter than the two-byte width/height header.
    MissingHeader,
    /// Stream length does not match the declared dimensions.
    LengthMismatch { expected: usize, actual: usize },
}

type Result<T> = core::result::Result<T, SpriteError>;

/// Validated view over an encoded sprite stream.
///
/// Layout: byte 0 width, byte 1 height, then for every column
/// `ceil(height / 8)` byte pairs (plane 1, plane 2), one pair per 8-row
/// band, column-major. Row `start + k` of a band sits at bit `k`.
/// The blit engine assumes the length invariant checked by [`Sprite::new`].
pub struct Sprite<'a> {
    width: u8,
    height: u8,
    data: &'a [u8],
}

impl<'a> Sprite<'a> {
    pub fn new(stream: &'a [u8]) -> Result<Sprite<'a>> {
        if stream.len() < 2 {
            return Err(SpriteError::MissingHeader);
        }
        let width = stream[0];
        let height = stream[1];
        let bands = (height as usize).div_ceil(8);
        let expected = 2 + width as usize * bands * 2;
        if stream.len() != expected {
            return Err(SpriteError::LengthMismatch {
                expected,
                actual: stream.len(),
            });
        }
        trace!("sprite stream accepted: {}x{}, {} bands", width, height, bands);
        Ok(Sprite {
            width,
            height,
            data: &stream[2..],
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Bands per column, counting the alignment padding.
    pub fn bands(&self) -> usize {
        (self.height as usize).div_ceil(8)
    }

    /// Plane byte pair of one band of one column.
    pub(crate) fn band(&self, column: usize, band: usize) -> (u8, u8) {
        let offset = (column * self.bands() + band) * 2;
        (self.data[offset], self.data[offset + 1])
    }

    /// Decoded state of a single pixel within the logical bounds.
    pub fn pixel(&self, x: u8, y: u8) -> Option<PixelClass> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let (plane1, plane2) = self.band(x as usize, y as usize / 8);
        let bit = y & 7;
        Some(PixelClass::from_plane_bits(
            plane1 >> bit & 1 == 1,
            plane2 >> bit & 1 == 1,
        ))
    }
}
