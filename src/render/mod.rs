// 渲染：畫布抽象、幀緩衝區與每幀的繪製流程
pub mod framebuffer; // minifb 使用的像素緩衝區

pub use framebuffer::FrameBuffer;

use log::trace;

use crate::sprite::{Batch, Bitmap, SpriteState};

/// 螢幕上的矩形區域，右與下邊界不含
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// 向內縮小 amount 像素
    pub fn inset(&self, amount: i32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2 * amount).max(0),
            (self.height - 2 * amount).max(0),
        )
    }
}

/// 可被渲染流程繪製的表面
pub trait Canvas {
    /// 以背景色清除整個可繪製區域
    fn clear(&mut self, color: u32);
    /// 將點陣圖左上角繪製於 (x, y)
    fn blit(&mut self, bitmap: &Bitmap, x: i32, y: i32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub cleared: bool,
    pub blits: usize,
}

/// 完整重繪：清除背景後依插入順序繪製所有項目，不做差異比對
pub fn render_pass<C: Canvas + ?Sized>(canvas: &mut C, background: u32, batch: &Batch) -> RenderStats {
    canvas.clear(background);
    let mut stats = RenderStats {
        cleared: true,
        blits: 0,
    };
    for item in batch.iter() {
        let (x, y) = item.position();
        canvas.blit(item.bitmap(), x, y);
        stats.blits += 1;
    }
    trace!("render pass: {} blits", stats.blits);
    stats
}
