pub mod encode;

pub use encode::{encode_png, save_png, WriteError};

pub const WIDTH: u32 = 512;
pub const HEIGHT: u32 = 512;

/// 8-bit red, green, blue and alpha.
pub type Rgba = [u8; 4];

pub const RED: Rgba = [255, 0, 0, 255];
pub const WHITE: Rgba = [255, 255, 255, 255];

/// Red where both coordinates are even, white everywhere else.
pub fn checker_color(x: u32, y: u32) -> Rgba {
    if x % 2 == 0 && y % 2 == 0 {
        RED
    } else {
        WHITE
    }
}

/// Row-major RGBA8 pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<Rgba>,
}

impl Canvas {
    /// Fill every cell exactly once by calling `f(x, y)`, rows top to bottom.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);

        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    pub fn checkerboard(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, checker_color)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        // width 0 means no data, so the chunk size never matters then
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}
