use super::{Direction, InertButton, InputEvent};
use crate::render::{FrameBuffer, Rect};

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 3;

const PANEL_BACKGROUND: u32 = 0xF0F0F0;
const BUTTON_FACE: u32 = 0xE1E1E1;
const BUTTON_PRESSED: u32 = 0xCCE4F7;
const BUTTON_BORDER: u32 = 0xADADAD;
const GLYPH_COLOR: u32 = 0x333333;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelButton {
    Up,
    Down,
    Left,
    Right,
    Party,
    Map,
    Quest,
    Settings,
}

/// 5x3 網格，None 為空白格
pub const GRID: [[Option<PanelButton>; GRID_COLS]; GRID_ROWS] = [
    [None, Some(PanelButton::Up), None],
    [Some(PanelButton::Left), None, Some(PanelButton::Right)],
    [None, Some(PanelButton::Down), None],
    [Some(PanelButton::Party), None, Some(PanelButton::Map)],
    [Some(PanelButton::Quest), None, Some(PanelButton::Settings)],
];

impl PanelButton {
    pub const ALL: [PanelButton; 8] = [
        PanelButton::Up,
        PanelButton::Down,
        PanelButton::Left,
        PanelButton::Right,
        PanelButton::Party,
        PanelButton::Map,
        PanelButton::Quest,
        PanelButton::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PanelButton::Up => "Up",
            PanelButton::Down => "Down",
            PanelButton::Left => "Left",
            PanelButton::Right => "Right",
            PanelButton::Party => "Party",
            PanelButton::Map => "Map",
            PanelButton::Quest => "Quest",
            PanelButton::Settings => "Settings",
        }
    }

    /// 按鈕到輸入事件的分派表
    pub fn event(self) -> InputEvent {
        match self {
            PanelButton::Up => InputEvent::Move(Direction::Up),
            PanelButton::Down => InputEvent::Move(Direction::Down),
            PanelButton::Left => InputEvent::Move(Direction::Left),
            PanelButton::Right => InputEvent::Move(Direction::Right),
            PanelButton::Party => InputEvent::Inert(InertButton::Party),
            PanelButton::Map => InputEvent::Inert(InertButton::Map),
            PanelButton::Quest => InputEvent::Inert(InertButton::Quest),
            PanelButton::Settings => InputEvent::Inert(InertButton::Settings),
        }
    }

    /// 在網格中的 (row, col)
    pub const fn cell(self) -> (usize, usize) {
        match self {
            PanelButton::Up => (0, 1),
            PanelButton::Left => (1, 0),
            PanelButton::Right => (1, 2),
            PanelButton::Down => (2, 1),
            PanelButton::Party => (3, 0),
            PanelButton::Map => (3, 2),
            PanelButton::Quest => (4, 0),
            PanelButton::Settings => (4, 2),
        }
    }
}

/// 右側的方向控制面板
#[derive(Debug, Clone)]
pub struct ControlPanel {
    bounds: Rect,
}

impl ControlPanel {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// 網格格子的矩形，餘數像素分配給後面的格子
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let b = self.bounds;
        let x0 = b.x + b.width * col as i32 / GRID_COLS as i32;
        let x1 = b.x + b.width * (col as i32 + 1) / GRID_COLS as i32;
        let y0 = b.y + b.height * row as i32 / GRID_ROWS as i32;
        let y1 = b.y + b.height * (row as i32 + 1) / GRID_ROWS as i32;
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn button_rect(&self, button: PanelButton) -> Rect {
        let (row, col) = button.cell();
        self.cell_rect(row, col)
    }

    pub fn hit_test(&self, x: i32, y: i32) -> Option<PanelButton> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        PanelButton::ALL
            .into_iter()
            .find(|button| self.button_rect(*button).contains(x, y))
    }

    pub fn paint(&self, frame: &mut FrameBuffer, pressed: Option<PanelButton>) {
        let previous = frame.viewport();
        frame.set_viewport(self.bounds);
        frame.fill_rect(self.bounds, PANEL_BACKGROUND);
        for button in PanelButton::ALL {
            let rect = self.button_rect(button).inset(2);
            let face = if pressed == Some(button) {
                BUTTON_PRESSED
            } else {
                BUTTON_FACE
            };
            frame.fill_rect(rect, face);
            frame.stroke_rect(rect, BUTTON_BORDER);
            paint_glyph(frame, rect, button);
        }
        frame.set_viewport(previous);
    }
}

/// 滑鼠左鍵的按下邊緣偵測，一次按下只觸發一次
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickEdge {
    was_down: bool,
}

impl ClickEdge {
    /// 從放開變成按下時回傳 true
    pub fn update(&mut self, down: bool) -> bool {
        let pressed = down && !self.was_down;
        self.was_down = down;
        pressed
    }

    pub fn is_down(&self) -> bool {
        self.was_down
    }
}

/// 方向鍵畫三角形箭頭，其他按鈕畫小方塊
fn paint_glyph(frame: &mut FrameBuffer, rect: Rect, button: PanelButton) {
    let size = (rect.width.min(rect.height) / 4).max(2);
    let cx = rect.x + rect.width / 2;
    let cy = rect.y + rect.height / 2;
    let direction = match button.event() {
        InputEvent::Move(direction) => direction,
        InputEvent::Inert(_) => {
            let half = size / 3;
            frame.fill_rect(Rect::new(cx - half, cy - half, half * 2, half * 2), GLYPH_COLOR);
            return;
        }
    };
    for i in 0..size {
        // i 為距離箭頭尖端的距離，寬度隨之增加
        let span = i * 2 + 1;
        let line = match direction {
            Direction::Up => Rect::new(cx - i, cy - size / 2 + i, span, 1),
            Direction::Down => Rect::new(cx - i, cy + size / 2 - i, span, 1),
            Direction::Left => Rect::new(cx - size / 2 + i, cy - i, 1, span),
            Direction::Right => Rect::new(cx + size / 2 - i, cy - i, 1, span),
        };
        frame.fill_rect(line, GLYPH_COLOR);
    }
}
