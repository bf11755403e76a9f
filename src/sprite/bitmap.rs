use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// 不可變的點陣圖，像素格式為 0xAARRGGBB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Bitmap {
    /// 從 PNG 等圖檔載入；檔案缺失或格式錯誤時回傳錯誤
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgba8();
        let (width, height) = image.dimensions();
        let pixels = image
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                u32::from_be_bytes([a, r, g, b])
            })
            .collect();
        debug!("載入圖片 {} ({}x{})", path.display(), width, height);
        Self::from_pixels(width as usize, height as usize, pixels)
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(Error::config(format!(
                "像素數量不符: 預期 {}，實際 {}",
                width * height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// 單色點陣圖
    pub fn solid(width: usize, height: usize, argb: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![argb; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[u32] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(Bitmap::from_pixels(2, 2, vec![0; 3]).is_err());
        let bitmap = Bitmap::from_pixels(2, 1, vec![1, 2]).unwrap();
        assert_eq!(bitmap.pixel(1, 0), 2);
        assert_eq!(bitmap.row(0), &[1, 2]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Bitmap::load("/nonexistent/hero.png");
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[test]
    fn test_load_bundled_hero() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/hero.png");
        let bitmap = Bitmap::load(path).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (16, 16));
        // 邊框為透明
        assert_eq!(bitmap.pixel(0, 0) >> 24, 0);
        assert_eq!(bitmap.pixel(8, 8) >> 24, 0xFF);
    }
}
