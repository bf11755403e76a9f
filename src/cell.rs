// 遊戲座標（格子）與螢幕座標（像素）

/// 遊戲內的格子座標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GamePos {
    pub x: i32,
    pub y: i32,
}

/// 螢幕像素座標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPos {
    pub x: i32,
    pub y: i32,
}

impl GamePos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl ScreenPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 格子大小與原點，決定兩種座標間的轉換
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    tile_size: i32,
    origin: ScreenPos,
}

impl Grid {
    /// tile_size 必須大於 0，由配置驗證保證
    pub fn new(tile_size: i32, origin: ScreenPos) -> Self {
        debug_assert!(tile_size > 0);
        Self { tile_size, origin }
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// 格子左上角的像素位置
    pub fn to_screen(&self, pos: GamePos) -> ScreenPos {
        ScreenPos::new(
            self.origin.x + pos.x * self.tile_size,
            self.origin.y + pos.y * self.tile_size,
        )
    }

    /// 包含該像素的格子，負座標向下取整
    pub fn to_game(&self, pos: ScreenPos) -> GamePos {
        GamePos::new(
            (pos.x - self.origin.x).div_euclid(self.tile_size),
            (pos.y - self.origin.y).div_euclid(self.tile_size),
        )
    }
}

/// 同時保存遊戲座標與螢幕座標的格子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub game: GamePos,
    pub screen: ScreenPos,
}

impl Cell {
    pub fn from_game(grid: &Grid, game: GamePos) -> Self {
        Self {
            game,
            screen: grid.to_screen(game),
        }
    }

    pub fn from_screen(grid: &Grid, screen: ScreenPos) -> Self {
        Self {
            game: grid.to_game(screen),
            screen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_and_back() {
        let grid = Grid::new(16, ScreenPos::default());
        let game = GamePos::new(7, -3);
        let screen = grid.to_screen(game);
        assert_eq!(screen, ScreenPos::new(112, -48));
        assert_eq!(grid.to_game(screen), game);
    }

    #[test]
    fn test_to_game_floors_negative() {
        let grid = Grid::new(16, ScreenPos::default());
        assert_eq!(grid.to_game(ScreenPos::new(-1, 15)), GamePos::new(-1, 0));
        assert_eq!(grid.to_game(ScreenPos::new(-60, 100)), GamePos::new(-4, 6));
    }

    #[test]
    fn test_origin_offset() {
        let grid = Grid::new(10, ScreenPos::new(5, 5));
        assert_eq!(grid.to_screen(GamePos::new(1, 2)), ScreenPos::new(15, 25));
        let cell = Cell::from_screen(&grid, ScreenPos::new(4, 14));
        assert_eq!(cell.game, GamePos::new(-1, 0));
        assert_eq!(Cell::from_game(&grid, cell.game).screen, ScreenPos::new(-5, 5));
    }
}
