use super::{Canvas, Rect};
use crate::sprite::Bitmap;

/// minifb 使用的 0x00RRGGBB 像素緩衝區
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    buffer: Vec<u32>,
    // 清除與繪製只作用於這個區域
    viewport: Rect,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width * height],
            viewport: Rect::new(0, 0, width as i32, height as i32),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// 限制後續繪製的區域，超出緩衝區的部分會被裁掉
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport.intersect(&self.bounds()).unwrap_or_default();
    }

    pub fn reset_viewport(&mut self) {
        self.viewport = self.bounds();
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.buffer[y * self.width + x]
    }

    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let Some(area) = rect.intersect(&self.viewport) else {
            return;
        };
        for y in area.y..area.bottom() {
            let start = y as usize * self.width + area.x as usize;
            self.buffer[start..start + area.width as usize].fill(color & 0x00FF_FFFF);
        }
    }

    /// 一像素寬的外框
    pub fn stroke_rect(&mut self, rect: Rect, color: u32) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - 1, rect.width, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.y, 1, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.height), color);
    }
}

/// 以來源 alpha 混合兩個顏色
fn blend(src: u32, dst: u32) -> u32 {
    let alpha = src >> 24;
    match alpha {
        0 => dst,
        0xFF => src & 0x00FF_FFFF,
        _ => {
            let mix = |shift: u32| {
                let s = (src >> shift) & 0xFF;
                let d = (dst >> shift) & 0xFF;
                ((s * alpha + d * (255 - alpha)) / 255) << shift
            };
            mix(16) | mix(8) | mix(0)
        }
    }
}

impl Canvas for FrameBuffer {
    fn clear(&mut self, color: u32) {
        let viewport = self.viewport;
        self.fill_rect(viewport, color);
    }

    fn blit(&mut self, bitmap: &Bitmap, x: i32, y: i32) {
        let target = Rect::new(x, y, bitmap.width() as i32, bitmap.height() as i32);
        let Some(area) = target.intersect(&self.viewport) else {
            return;
        };
        for dst_y in area.y..area.bottom() {
            let row = bitmap.row((dst_y - y) as usize);
            for dst_x in area.x..area.right() {
                let src = row[(dst_x - x) as usize];
                let index = dst_y as usize * self.width + dst_x as usize;
                self.buffer[index] = blend(src, self.buffer[index]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_respects_viewport() {
        let mut frame = FrameBuffer::new(8, 4);
        frame.set_viewport(Rect::new(0, 0, 4, 4));
        frame.clear(0x3299CC);
        assert_eq!(frame.pixel(3, 3), 0x3299CC);
        assert_eq!(frame.pixel(4, 0), 0);
    }

    #[test]
    fn test_blit_copies_opaque_and_skips_transparent() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.clear(0x000010);
        let bitmap = Bitmap::from_pixels(2, 1, vec![0xFF123456, 0x00FFFFFF]).unwrap();
        frame.blit(&bitmap, 1, 1);
        assert_eq!(frame.pixel(1, 1), 0x123456);
        assert_eq!(frame.pixel(2, 1), 0x000010);
    }

    #[test]
    fn test_blit_clips_offscreen_positions() {
        let mut frame = FrameBuffer::new(4, 4);
        let bitmap = Bitmap::solid(3, 3, 0xFFFFFFFF);
        frame.blit(&bitmap, -2, -2);
        assert_eq!(frame.pixel(0, 0), 0xFFFFFF);
        assert_eq!(frame.pixel(1, 0), 0);
        frame.blit(&bitmap, 100, -60);
        frame.blit(&bitmap, -60, 100);
        frame.blit(&bitmap, 3, 3);
        assert_eq!(frame.pixel(3, 3), 0xFFFFFF);
    }

    #[test]
    fn test_blit_clipped_to_viewport() {
        let mut frame = FrameBuffer::new(8, 2);
        frame.set_viewport(Rect::new(0, 0, 4, 2));
        frame.blit(&Bitmap::solid(4, 1, 0xFFABCDEF), 2, 0);
        assert_eq!(frame.pixel(3, 0), 0xABCDEF);
        assert_eq!(frame.pixel(4, 0), 0);
    }

    #[test]
    fn test_half_alpha_blends() {
        assert_eq!(blend(0x80FF0000, 0x000000), 0x800000);
        assert_eq!(blend(0x80000000, 0xFFFFFF) & 0xFF, 0x7F);
    }

    #[test]
    fn test_stroke_rect_outline() {
        let mut frame = FrameBuffer::new(5, 5);
        frame.stroke_rect(Rect::new(0, 0, 5, 5), 0x111111);
        assert_eq!(frame.pixel(0, 0), 0x111111);
        assert_eq!(frame.pixel(4, 4), 0x111111);
        assert_eq!(frame.pixel(2, 2), 0);
    }
}
