use crate::framebuffer::FrameBuffer;
use crate::sprite::Sprite;

/// Shift a band byte up by `shift`, splitting it into the part that stays
/// in the current framebuffer band and the bits carried into the next one.
#[inline]
fn shift_split(mask: u8, shift: u32) -> (u8, u8) {
    let wide = (mask as u16) << shift;
    (wide as u8, (wide >> 8) as u8)
}

/// Derive the write masks for one plane byte pair.
///
/// `l1 | l2` marks every non-transparent pixel. `l1 & !l2` marks black;
/// `l1 & l2 & frame_mask` adds grey unless grey is being hidden, in which
/// case grey stays opaque but draws as background.
#[inline]
fn band_masks(l1: u8, l2: u8, frame_mask: u8) -> (u8, u8) {
    (l1 | l2, l1 & (!l2 | (l2 & frame_mask)))
}

/// Composite `sprite` onto `fb` with its top-left corner at `(x, y)`.
///
/// Transparent pixels leave the framebuffer untouched; every other pixel
/// overwrites its destination bit. With `hide_grey` set, grey pixels
/// write background instead of foreground (they do not become holes).
/// The sprite is clipped on all four sides; a sprite entirely off screen
/// performs no memory access at all.
pub fn blit(fb: &mut FrameBuffer<'_>, sprite: &Sprite<'_>, x: i32, y: i32, hide_grey: bool) {
    let width = sprite.width() as i32;
    let height = sprite.height() as i32;
    let fb_width = fb.width() as i32;
    let fb_height = fb.height() as i32;

    if width == 0 || height == 0 {
        return;
    }
    if x + width <= 0 || x >= fb_width || y + height <= 0 || y >= fb_height {
        return;
    }

    // Sub-band misalignment between sprite rows and framebuffer bands.
    // `& 7` keeps the amount in 0..8 for negative y as well.
    let shift = (y & 7) as u32;
    let frame_mask: u8 = if hide_grey { 0x00 } else { 0xFF };

    // Columns surviving the horizontal clip.
    let col_start = (-x).max(0) as usize;
    let col_end = width.min(fb_width - x) as usize;

    // Vertical crop. Whole bands above the screen are skipped; the last
    // skipped band still seeds the carry, since its bottom rows can reach
    // framebuffer band 0.
    let top_bands = if y < 0 { ((-y + 7) / 8) as usize } else { 0 };
    let first_fb_band = if y >= 0 { (y / 8) as usize } else { 0 };
    let last_fb_band = ((y + height).min(fb_height) as usize - 1) / 8;
    let touched_bands = last_fb_band - first_fb_band + 1;

    let available = sprite.bands() - top_bands;
    let full_bands = available.min(touched_bands);
    // One carry-only write when on-screen sprite rows spill past the last
    // band read; a bottom crop suppresses it.
    let trailing = touched_bands > full_bands;

    let stride = fb.width();
    let buffer = fb.bytes_mut();

    for col in col_start..col_end {
        let fb_col = (x + col as i32) as usize;
        let mut carry_opaque = 0u8;
        let mut carry_set = 0u8;

        if top_bands > 0 {
            let (l1, l2) = sprite.band(col, top_bands - 1);
            let (opaque, set) = band_masks(l1, l2, frame_mask);
            carry_opaque = shift_split(opaque, shift).1;
            carry_set = shift_split(set, shift).1;
        }

        let mut index = first_fb_band * stride + fb_col;
        for band in 0..full_bands {
            let (l1, l2) = sprite.band(col, top_bands + band);
            let (opaque, set) = band_masks(l1, l2, frame_mask);
            let (cur_opaque, next_opaque) = shift_split(opaque, shift);
            let (cur_set, next_set) = shift_split(set, shift);

            debug_assert!(index < buffer.len());
            let pixel = buffer[index];
            buffer[index] = (pixel & !(cur_opaque | carry_opaque)) | cur_set | carry_set;

            carry_opaque = next_opaque;
            carry_set = next_set;
            index += stride;
        }

        if trailing {
            debug_assert!(index < buffer.len());
            let pixel = buffer[index];
            buffer[index] = (pixel & !carry_opaque) | carry_set;
        }
    }
}
