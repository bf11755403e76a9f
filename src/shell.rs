/*
================================================================================
IsshA - 遊戲外殼
================================================================================
持有主角精靈，將按鈕與鍵盤輸入轉成位移，並在需要時重繪

狀態：idle -> 重繪請求 -> idle
================================================================================
*/

use std::rc::Rc;
use std::time::Duration;

use log::{debug, info, trace};
use minifb::Key;

use crate::cell::{Cell, Grid, ScreenPos};
use crate::config::{Config, InputMode};
use crate::error::Result;
use crate::input::{ControlPanel, InputEvent, InputMapper, KeyMap, PanelButton};
use crate::render::{render_pass, Canvas, FrameBuffer, Rect, RenderStats};
use crate::sprite::{Batch, Bitmap, Drawable, DrawableId, SpriteState};
use crate::timer::Ticker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawState {
    Idle,
    Requested,
}

pub struct GameShell {
    batch: Batch,
    hero: DrawableId,
    mapper: InputMapper,
    keymap: KeyMap,
    panel: ControlPanel,
    mode: InputMode,
    ticker: Ticker,
    grid: Grid,
    background: u32,
    game_area: Rect,
    redraw: RedrawState,
    frames: u64,
}

impl GameShell {
    pub fn new(config: &Config, hero_bitmap: Rc<Bitmap>) -> Result<Self> {
        config.validate()?;
        let video = &config.video;
        let (game_area, panel_area) = split_layout(video.width, video.height, video.panel_ratio);

        let mut batch = Batch::new();
        let hero = batch.push(Drawable::new(hero_bitmap, video.start_x, video.start_y));

        info!(
            "遊戲面板 {}x{}，控制面板 {}x{}，輸入模式 {:?}",
            game_area.width, game_area.height, panel_area.width, panel_area.height, config.input.mode
        );

        Ok(Self {
            batch,
            hero,
            mapper: InputMapper::with_step(config.input.step),
            keymap: KeyMap::from_mapping(&config.input.keyboard_mapping)?,
            panel: ControlPanel::new(panel_area),
            mode: config.input.mode,
            ticker: Ticker::new(config.timer.period())?,
            grid: Grid::new(video.tile_size, ScreenPos::default()),
            background: video.background,
            game_area,
            redraw: RedrawState::Requested,
            frames: 0,
        })
    }

    /// 套用一個輸入事件；位置有變動時回傳 true 並請求重繪
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let delta = self.mapper.delta(event);
        if delta.is_zero() {
            debug!("{:?} 沒有綁定行為", event);
            return false;
        }
        let Some(hero) = self.batch.get_mut(self.hero) else {
            return false;
        };
        hero.apply_delta(delta);
        let (x, y) = hero.position();
        let cell = Cell::from_screen(&self.grid, ScreenPos::new(x, y));
        debug!(
            "主角移動到 ({}, {})，格子 ({}, {})",
            x, y, cell.game.x, cell.game.y
        );
        self.request_redraw();
        true
    }

    /// 滑鼠點擊；回傳被按下的按鈕
    pub fn on_click(&mut self, x: i32, y: i32) -> Option<PanelButton> {
        if !self.mode.accepts_buttons() {
            return None;
        }
        let button = self.panel.hit_test(x, y)?;
        debug!("按鈕 {} 被按下", button.label());
        self.handle(button.event());
        Some(button)
    }

    /// 鍵盤按下；只處理分派表中的按鍵
    pub fn on_key(&mut self, key: Key) -> bool {
        if !self.mode.accepts_keyboard() {
            return false;
        }
        match self.keymap.lookup(key) {
            Some(direction) => self.handle(InputEvent::Move(direction)),
            None => false,
        }
    }

    /// 推進計時器，到期時請求重繪
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let due = self.ticker.step(elapsed);
        if due {
            self.request_redraw();
        }
        due
    }

    pub fn request_redraw(&mut self) {
        self.redraw = RedrawState::Requested;
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw == RedrawState::Requested
    }

    pub fn redraw_state(&self) -> RedrawState {
        self.redraw
    }

    /// 完整重繪遊戲面板
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> RenderStats {
        let stats = render_pass(canvas, self.background, &self.batch);
        self.redraw = RedrawState::Idle;
        self.frames += 1;
        trace!("frame {} rendered", self.frames);
        stats
    }

    /// 重繪整個視窗：左側遊戲面板與右側控制面板
    pub fn render_frame(&mut self, frame: &mut FrameBuffer, pressed: Option<PanelButton>) -> RenderStats {
        frame.set_viewport(self.game_area);
        let stats = self.render(frame);
        frame.reset_viewport();
        self.paint_panel(frame, pressed);
        stats
    }

    pub fn paint_panel(&self, frame: &mut FrameBuffer, pressed: Option<PanelButton>) {
        self.panel.paint(frame, pressed);
    }

    pub fn hero_position(&self) -> (i32, i32) {
        self.batch
            .get(self.hero)
            .map(|hero| hero.position())
            .unwrap_or_default()
    }

    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn game_area(&self) -> Rect {
        self.game_area
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }
}

/// 依比例水平切分視窗，左側為遊戲面板
pub fn split_layout(width: usize, height: usize, ratio: (u32, u32)) -> (Rect, Rect) {
    let (game, panel) = ratio;
    let total = (game + panel).max(1) as usize;
    let game_width = (width * game as usize / total) as i32;
    let height = height as i32;
    (
        Rect::new(0, 0, game_width, height),
        Rect::new(game_width, 0, width as i32 - game_width, height),
    )
}
