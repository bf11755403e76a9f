// 精靈與繪製批次
pub mod bitmap; // 點陣圖資源

pub use bitmap::Bitmap;

use std::rc::Rc;

use crate::input::Delta;

/// 一個可繪製項目：點陣圖加上目前的螢幕位置
#[derive(Debug, Clone)]
pub struct Drawable {
    bitmap: Rc<Bitmap>,
    pub x: i32,
    pub y: i32,
}

impl Drawable {
    pub fn new(bitmap: Rc<Bitmap>, x: i32, y: i32) -> Self {
        Self { bitmap, x, y }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }
}

/// 單一精靈的位置狀態
pub trait SpriteState {
    /// 無條件加上位移，不做邊界限制；超出 i32 範圍時停在極值
    fn apply_delta(&mut self, delta: Delta);
    fn position(&self) -> (i32, i32);
}

impl SpriteState for Drawable {
    fn apply_delta(&mut self, delta: Delta) {
        self.x = self.x.saturating_add(delta.dx);
        self.y = self.y.saturating_add(delta.dy);
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawableId(usize);

/// 一幀要繪製的項目，依插入順序繪製
#[derive(Debug, Default, Clone)]
pub struct Batch {
    items: Vec<Drawable>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Drawable) -> DrawableId {
        self.items.push(item);
        DrawableId(self.items.len() - 1)
    }

    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.items.get(id.0)
    }

    pub fn get_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.items.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Drawable> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
