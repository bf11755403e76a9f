use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::input::keyboard::parse_key;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub system: SystemConfig,
    pub video: VideoConfig,
    pub input: InputConfig,
    pub timer: TimerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub debug_mode: bool,
    pub log_level: String,
    pub log_to_file: bool,
    pub resource_dir: String,
    pub hero_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    /// 背景色 0xRRGGBB
    pub background: u32,
    /// 遊戲面板 : 控制面板 的寬度比例
    pub panel_ratio: (u32, u32),
    pub start_x: i32,
    pub start_y: i32,
    pub tile_size: i32,
}

/// 輸入來源選擇
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Buttons,
    Keyboard,
    Both,
}

impl InputMode {
    pub fn accepts_buttons(self) -> bool {
        matches!(self, InputMode::Buttons | InputMode::Both)
    }

    pub fn accepts_keyboard(self) -> bool {
        matches!(self, InputMode::Keyboard | InputMode::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mode: InputMode,
    pub step: i32,
    pub keyboard_mapping: KeyboardMapping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardMapping {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub redraw_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system: SystemConfig::default(),
            video: VideoConfig::default(),
            input: InputConfig::default(),
            timer: TimerConfig::default(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            log_level: "info".to_string(),
            log_to_file: false,
            resource_dir: "resources".to_string(),
            hero_image: "hero.png".to_string(),
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            title: "IsshA".to_string(),
            width: 800,
            height: 400,
            background: 0x3299CC, // sky blue
            panel_ratio: (2, 1),
            start_x: 100,
            start_y: 100,
            tile_size: 16,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mode: InputMode::Both,
            step: 16,
            keyboard_mapping: KeyboardMapping::default(),
        }
    }
}

impl Default for KeyboardMapping {
    fn default() -> Self {
        let keys = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            up: keys(&["NumPad8", "Up"]),
            down: keys(&["NumPad2", "Down"]),
            left: keys(&["NumPad4", "Left"]),
            right: keys(&["NumPad6", "Right"]),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { redraw_ms: 50 }
    }
}

impl TimerConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.redraw_ms)
    }
}

impl SystemConfig {
    /// 主角圖片的完整路徑
    pub fn hero_path(&self) -> PathBuf {
        Path::new(&self.resource_dir).join(&self.hero_image)
    }

    /// 實際使用的日誌等級，debug_mode 會強制為 debug
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        if self.debug_mode {
            return Ok(log::LevelFilter::Debug);
        }
        self.log_level
            .parse()
            .map_err(|_| Error::config(format!("未知的日誌等級: {}", self.log_level)))
    }
}

impl Config {
    /// 從 TOML 檔載入配置；檔案不存在時使用預設值
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.timer.redraw_ms == 0 {
            return Err(Error::config("redraw_ms 必須大於 0"));
        }
        if self.video.width == 0 || self.video.height == 0 {
            return Err(Error::config("視窗尺寸不可為 0"));
        }
        if self.input.step <= 0 {
            return Err(Error::config("step 必須大於 0"));
        }
        if self.video.tile_size <= 0 {
            return Err(Error::config("tile_size 必須大於 0"));
        }
        let (game, panel) = self.video.panel_ratio;
        if game + panel == 0 {
            return Err(Error::config("panel_ratio 不可全為 0"));
        }
        let mapping = &self.input.keyboard_mapping;
        for name in mapping
            .up
            .iter()
            .chain(&mapping.down)
            .chain(&mapping.left)
            .chain(&mapping.right)
        {
            parse_key(name)?;
        }
        self.system.level_filter()?;
        Ok(())
    }
}

/// 配置構建器
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::default(),
        }
    }

    pub fn system_config(mut self, config: SystemConfig) -> Self {
        self.config.system = config;
        self
    }

    pub fn video_config(mut self, config: VideoConfig) -> Self {
        self.config.video = config;
        self
    }

    pub fn input_config(mut self, config: InputConfig) -> Self {
        self.config.input = config;
        self
    }

    pub fn timer_config(mut self, config: TimerConfig) -> Self {
        self.config.timer = config;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_window() {
        let config = Config::default();
        assert_eq!(config.video.title, "IsshA");
        assert_eq!((config.video.width, config.video.height), (800, 400));
        assert_eq!(config.timer.period(), Duration::from_millis(50));
        assert_eq!(config.input.mode, InputMode::Both);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [input]
            mode = "keyboard"

            [timer]
            redraw_ms = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.input.mode, InputMode::Keyboard);
        assert_eq!(config.input.step, 16);
        assert_eq!(config.timer.redraw_ms, 20);
        assert_eq!(config.video.start_x, 100);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.timer.redraw_ms = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.input.keyboard_mapping.up = vec!["NoSuchKey".to_string()];
        assert!(config.validate().is_err());

        for step in [0, -16] {
            let mut config = Config::default();
            config.input.step = step;
            assert!(matches!(config.validate(), Err(Error::Config(_))), "step {}", step);
        }

        let mut config = Config::default();
        config.system.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("issha_config_{}.toml", std::process::id()));
        let mut config = Config::default();
        config.input.mode = InputMode::Buttons;
        config.video.background = 0x112233;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/issha.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_debug_mode_forces_debug_level() {
        let mut system = SystemConfig::default();
        assert_eq!(system.level_filter().unwrap(), log::LevelFilter::Info);
        system.debug_mode = true;
        assert_eq!(system.level_filter().unwrap(), log::LevelFilter::Debug);
    }
}
