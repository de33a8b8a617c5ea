use alloc::vec::Vec;
use log::info;

use crate::sprite::PixelClass;

/// Quantize a truecolor image into an encoded sprite stream.
///
/// `sample` is called once for every pixel inside `width` x `height` and
/// must return an `[r, g, b, a]` sample. Rows added to reach the next
/// 8-row boundary are transparent padding; `sample` is not consulted for
/// them. A width or height of zero yields a header-only stream, which is
/// still a valid sprite.
pub fn encode<F>(width: u8, height: u8, mut sample: F) -> Vec<u8>
where
    F: FnMut(u32, u32) -> [u8; 4],
{
    let bands = (height as usize).div_ceil(8);
    let mut stream = Vec::with_capacity(2 + width as usize * bands * 2);
    stream.push(width);
    stream.push(height);

    for x in 0..width as u32 {
        for band in 0..bands {
            let mut plane1 = 0u8;
            let mut plane2 = 0u8;
            // Insert at the top, shift down: row `band * 8 + k` lands at
            // bit `k`. The blit shift arithmetic relies on this order.
            for k in 0..8 {
                let y = band as u32 * 8 + k;
                let class = if y < height as u32 {
                    PixelClass::classify(sample(x, y))
                } else {
                    PixelClass::Transparent
                };
                let (bit1, bit2) = class.plane_bits();
                plane1 = plane1 >> 1 | bit1 << 7;
                plane2 = plane2 >> 1 | bit2 << 7;
            }
            stream.push(plane1);
            stream.push(plane2);
        }
    }

    info!(
        "encoded {}x{} sprite, {} bytes",
        width,
        height,
        stream.len()
    );
    stream
}
