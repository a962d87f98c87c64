use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// One straight-alpha sRGB output pixel.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// CPU framebuffer of premultiplied linear colors.
///
/// Compositing happens in f32 premul space; [`to_rgba8`](Pixmap::to_rgba8)
/// unpremultiplies on the way out for image encoders that expect straight
/// alpha.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl Pixmap {
    /// Allocates a pixmap cleared to `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            width,
            height,
            data: vec![background; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.data[y * self.width + x]
    }

    /// Source-over composites `src` onto the pixel at `(x, y)`.
    #[inline]
    pub fn blend(&mut self, x: usize, y: usize, src: Color) {
        let dst = &mut self.data[y * self.width + x];
        *dst = src.over(*dst);
    }

    /// Encodes the framebuffer as straight-alpha RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let pixels: Vec<Rgba8> = self
            .data
            .iter()
            .map(|c| {
                let (r, g, b, a) = c.to_straight();
                Rgba8 {
                    r: (r * 255.0 + 0.5) as u8,
                    g: (g * 255.0 + 0.5) as u8,
                    b: (b * 255.0 + 0.5) as u8,
                    a: (a * 255.0 + 0.5) as u8,
                }
            })
            .collect();
        bytemuck::cast_slice(&pixels).to_vec()
    }
}
