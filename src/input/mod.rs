/*
================================================================================
IsshA - 輸入模組
================================================================================
將離散的輸入事件（方向或無作用按鈕）轉換為位移

功能：
- 方向與位移定義
- 按鈕面板分派表
- 鍵盤鍵碼分派表
================================================================================
*/

pub mod keyboard; // 鍵碼對應
pub mod panel; // 控制面板按鈕

pub use keyboard::KeyMap;
pub use panel::{ClickEdge, ControlPanel, PanelButton};

/// 預設每次移動的像素數
pub const DEFAULT_STEP: i32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// 指定步長下的位移，y 軸向下為正
    pub fn delta(self, step: i32) -> Delta {
        match self {
            Direction::Up => Delta::new(0, -step),
            Direction::Down => Delta::new(0, step),
            Direction::Left => Delta::new(-step, 0),
            Direction::Right => Delta::new(step, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub const ZERO: Delta = Delta { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// 沒有綁定行為的按鈕
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InertButton {
    Party,
    Map,
    Quest,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Move(Direction),
    Inert(InertButton),
}

/// 輸入事件到位移的對應
#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    step: i32,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::with_step(DEFAULT_STEP)
    }

    pub fn with_step(step: i32) -> Self {
        Self { step }
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// 無作用按鈕一律回傳零位移
    pub fn delta(&self, event: InputEvent) -> Delta {
        match event {
            InputEvent::Move(direction) => direction.delta(self.step),
            InputEvent::Inert(_) => Delta::ZERO,
        }
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas() {
        let mapper = InputMapper::new();
        assert_eq!(mapper.delta(InputEvent::Move(Direction::Right)), Delta::new(16, 0));
        assert_eq!(mapper.delta(InputEvent::Move(Direction::Left)), Delta::new(-16, 0));
        assert_eq!(mapper.delta(InputEvent::Move(Direction::Up)), Delta::new(0, -16));
        assert_eq!(mapper.delta(InputEvent::Move(Direction::Down)), Delta::new(0, 16));
    }

    #[test]
    fn test_inert_buttons_map_to_zero() {
        let mapper = InputMapper::new();
        for button in [
            InertButton::Party,
            InertButton::Map,
            InertButton::Quest,
            InertButton::Settings,
        ] {
            assert!(mapper.delta(InputEvent::Inert(button)).is_zero());
        }
    }

    #[test]
    fn test_custom_step() {
        let mapper = InputMapper::with_step(8);
        assert_eq!(mapper.step(), 8);
        assert_eq!(mapper.delta(InputEvent::Move(Direction::Up)), Delta::new(0, -8));
    }

    #[test]
    fn test_every_direction_moves_one_axis() {
        for direction in Direction::ALL {
            let delta = direction.delta(DEFAULT_STEP);
            assert_eq!(delta.dx.abs() + delta.dy.abs(), DEFAULT_STEP);
        }
    }
}
