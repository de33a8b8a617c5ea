/*!
Two-plane sprite compositing for 1-bpp packed monochrome framebuffers.

Sprites carry four pixel states (transparent, white, black, grey) in two
parallel bit-planes, packed column-major in 8-row bands. The blit engine
realigns those bands onto a framebuffer whose bands start at an arbitrary
vertical offset using only shift/mask/carry arithmetic, clipping on all
four sides without touching memory outside either buffer.

## Features
- no_std (alloc only for the encoder output)
- allocation-free, branch-light blit inner loop
- four-sided clipping at signed offsets
- optional "hide grey" rendering mode
- `embedded-graphics` `DrawTarget` on the framebuffer handle

## Usage
```
# use greyblit_core::{FrameBuffer, Sprite, blit, encode};
let stream = encode(4, 4, |_, _| [0, 0, 0, 255]);
let sprite = Sprite::new(&stream).unwrap();
let mut raw = [0u8; 8 * 8 / 8];
let mut fb = FrameBuffer::new(&mut raw, 8, 8).unwrap();
blit(&mut fb, &sprite, -2, 0, false);
```

## Limitations & non-goals
- monochrome only, no arbitrary bit depths
- no anti-aliasing or colour-accurate rendering
- framebuffer height must be a multiple of 8
- one caller at a time; the engine borrows the framebuffer exclusively
*/

#![no_std]

pub mod blit;
pub mod encoder;
pub mod framebuffer;
pub mod sprite;


extern crate alloc;

pub use blit::blit;
pub use encoder::encode;
pub use framebuffer::{FrameBuffer, FrameBufferError};
pub use sprite::{PixelClass, Sprite, SpriteError};
