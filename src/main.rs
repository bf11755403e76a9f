// IsshA - 主程式
// 建立視窗，將鍵盤與滑鼠輸入交給遊戲外殼，並依計時器重繪

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::info;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use issha::input::{ClickEdge, PanelButton};
use issha::utils::Logger;
use issha::{Bitmap, Config, FrameBuffer, GameShell};

const DEFAULT_CONFIG: &str = "issha.toml";
const LOG_DIR: &str = "logs";

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // 處理命令行參數
    let args: Vec<String> = std::env::args().collect();
    let config_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG);

    let config = Config::load(config_path)
        .with_context(|| format!("無法載入配置檔 '{}'", config_path))?;

    let mut logger = Logger::new(config.system.level_filter()?);
    if config.system.log_to_file {
        logger = logger.with_file(LOG_DIR)?;
    }
    logger.init()?;
    info!("🎮 IsshA 啟動中...");

    // 主角圖片缺失時直接結束
    let hero_path = config.system.hero_path();
    let hero = Bitmap::load(&hero_path)
        .with_context(|| format!("無法載入主角圖片 '{}'", hero_path.display()))?;
    info!("✅ 主角圖片載入成功: {}", hero_path.display());

    let mut shell = GameShell::new(&config, Rc::new(hero))?;

    let (width, height) = (config.video.width, config.video.height);
    let mut frame = FrameBuffer::new(width, height);
    let mut window = open_window(&config.video.title, width, height)?;
    info!("✅ 視窗創建成功 ({}x{})", width, height);

    let mut click = ClickEdge::default();
    let mut pressed: Option<PanelButton> = None;
    let mut last = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        for key in window.get_keys_pressed(KeyRepeat::Yes) {
            shell.on_key(key);
        }

        let mouse_down = window.get_mouse_down(MouseButton::Left);
        if click.update(mouse_down) {
            if let Some((x, y)) = window.get_mouse_pos(MouseMode::Discard) {
                pressed = shell.on_click(x as i32, y as i32);
                if pressed.is_some() {
                    shell.request_redraw();
                }
            }
        } else if !mouse_down && pressed.take().is_some() {
            shell.request_redraw();
        }

        let now = Instant::now();
        shell.tick(now - last);
        last = now;

        if shell.needs_redraw() {
            shell.render_frame(&mut frame, pressed);
            present(&mut window, &frame)?;
        } else {
            window.update();
        }
    }

    let (x, y) = shell.hero_position();
    info!("🎉 IsshA 結束，總幀數: {}，主角位置 ({}, {})", shell.frames(), x, y);
    log::logger().flush();
    Ok(())
}

/// 建立固定尺寸的視窗，更新頻率約 60 Hz
fn open_window(title: &str, width: usize, height: usize) -> issha::Result<Window> {
    let mut window = Window::new(title, width, height, WindowOptions::default())?;
    window.limit_update_rate(Some(Duration::from_millis(16)));
    Ok(window)
}

/// 將幀緩衝區送到視窗
fn present(window: &mut Window, frame: &FrameBuffer) -> issha::Result<()> {
    window.update_with_buffer(frame.buffer(), frame.width(), frame.height())?;
    Ok(())
}
