use std::io;
use thiserror::Error;

/// IsshA 外殼的錯誤類型
#[derive(Error, Debug)]
pub enum Error {
    /// IO 錯誤
    #[error("IO 錯誤: {0}")]
    Io(#[from] io::Error),

    /// 圖片載入或解碼失敗
    #[error("圖片錯誤: {0}")]
    Image(#[from] image::ImageError),

    /// 視窗建立或更新失敗
    #[error("視窗錯誤: {0}")]
    Window(#[from] minifb::Error),

    /// 配置檔解析錯誤
    #[error("配置解析錯誤: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// 配置檔序列化錯誤
    #[error("配置序列化錯誤: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// 配置值不合法
    #[error("配置錯誤: {0}")]
    Config(String),

    /// 日誌系統初始化失敗
    #[error("日誌錯誤: {0}")]
    Logger(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

/// 外殼結果類型
pub type Result<T> = std::result::Result<T, Error>;
