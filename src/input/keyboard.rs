use minifb::Key;

use super::Direction;
use crate::config::KeyboardMapping;
use crate::error::{Error, Result};

/// 配置檔中可使用的按鍵
const SUPPORTED_KEYS: &[Key] = &[
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::NumPad0,
    Key::NumPad1,
    Key::NumPad2,
    Key::NumPad3,
    Key::NumPad4,
    Key::NumPad5,
    Key::NumPad6,
    Key::NumPad7,
    Key::NumPad8,
    Key::NumPad9,
    Key::Key0,
    Key::Key1,
    Key::Key2,
    Key::Key3,
    Key::Key4,
    Key::Key5,
    Key::Key6,
    Key::Key7,
    Key::Key8,
    Key::Key9,
    Key::A,
    Key::B,
    Key::C,
    Key::D,
    Key::E,
    Key::F,
    Key::G,
    Key::H,
    Key::I,
    Key::J,
    Key::K,
    Key::L,
    Key::M,
    Key::N,
    Key::O,
    Key::P,
    Key::Q,
    Key::R,
    Key::S,
    Key::T,
    Key::U,
    Key::V,
    Key::W,
    Key::X,
    Key::Y,
    Key::Z,
    Key::Space,
    Key::Enter,
    Key::Tab,
];

/// 依 minifb 的按鍵名稱解析，例如 "NumPad8"、"Up"、"W"
pub fn parse_key(name: &str) -> Result<Key> {
    SUPPORTED_KEYS
        .iter()
        .copied()
        .find(|key| format!("{:?}", key) == name)
        .ok_or_else(|| Error::config(format!("未知的按鍵名稱: {}", name)))
}

/// 鍵碼到方向的分派表
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: Vec<(Key, Direction)>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mapping(mapping: &KeyboardMapping) -> Result<Self> {
        let mut map = Self::new();
        let groups = [
            (&mapping.up, Direction::Up),
            (&mapping.down, Direction::Down),
            (&mapping.left, Direction::Left),
            (&mapping.right, Direction::Right),
        ];
        for (names, direction) in groups {
            for name in names {
                map.bind(parse_key(name)?, direction);
            }
        }
        Ok(map)
    }

    /// 同一個鍵重複綁定時，以最後一次為準
    pub fn bind(&mut self, key: Key, direction: Direction) {
        self.bindings.retain(|(k, _)| *k != key);
        self.bindings.push((key, direction));
    }

    pub fn lookup(&self, key: Key) -> Option<Direction> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, direction)| *direction)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
