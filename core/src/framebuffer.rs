use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameBufferError {
    /// Height is not a multiple of 8, so rows would not pack into whole bands.
    UnalignedHeight,
    /// Backing slice length does not match `width * height / 8`.
    SizeMismatch { expected: usize, actual: usize },
}

type Result<T> = core::result::Result<T, FrameBufferError>;

/// Borrowed handle to a packed 1-bpp framebuffer.
///
/// The buffer is byte-addressed as `buffer[(y / 8) * width + x]`; bit
/// `y % 8` selects the pixel within the 8-row band. A set bit is a
/// foreground (dark) pixel. The handle never allocates or frees the
/// backing storage, it only mutates it in place.
pub struct FrameBuffer<'a> {
    buffer: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(buffer: &'a mut [u8], width: usize, height: usize) -> Result<FrameBuffer<'a>> {
        if height % 8 != 0 {
            return Err(FrameBufferError::UnalignedHeight);
        }
        let expected = width * height / 8;
        if buffer.len() != expected {
            return Err(FrameBufferError::SizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        Ok(FrameBuffer {
            buffer,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of 8-row bands.
    pub fn bands(&self) -> usize {
        self.height / 8
    }

    pub fn bytes(&self) -> &[u8] {
        self.buffer
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        self.buffer
    }

    pub fn clear(&mut self, fill: u8) {
        self.buffer.fill(fill);
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let index = (y as usize / 8) * self.width + x as usize;
        let bit = y as u32 & 7;
        match color {
            BinaryColor::On => self.buffer[index] |= 1 << bit,
            BinaryColor::Off => self.buffer[index] &= !(1 << bit),
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<BinaryColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let byte = self.buffer[(y / 8) * self.width + x];
        Some(BinaryColor::from(byte >> (y & 7) & 1 == 1))
    }
}

impl OriginDimensions for FrameBuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer<'_> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}
