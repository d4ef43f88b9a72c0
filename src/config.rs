use crate::error::{ReceiptError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 時間帯によるカテゴリ再分類を切り替える環境変数
pub const TIME_CATEGORY_ENV: &str = "TIME_CATEGORY_ENABLED";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub time_category_enabled: bool,
    pub user_name: String,
    pub payment_cutoff_day: u32,
    pub payment_day: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_category_enabled: true,
            user_name: String::new(),
            payment_cutoff_day: 10,
            payment_day: 15,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込む（無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReceiptError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("receipt-datetime").join("config.json"))
    }

    /// 利用者名・再分類フラグを更新する（変更があれば true）
    ///
    /// 空白のみの利用者名は未設定として扱う。
    pub fn update(&mut self, user_name: Option<String>, time_category: Option<bool>) -> bool {
        let mut changed = false;
        if let Some(name) = user_name {
            self.user_name = name.trim().to_string();
            changed = true;
        }
        if let Some(enabled) = time_category {
            self.time_category_enabled = enabled;
            changed = true;
        }
        changed
    }

    /// 時間帯再分類が有効か（環境変数を優先）
    pub fn time_category_enabled(&self) -> bool {
        resolve_flag(std::env::var(TIME_CATEGORY_ENV).ok().as_deref(), self.time_category_enabled)
    }
}

/// 環境変数値を真偽値に解釈する
///
/// 未設定・空なら `fallback`、`true`/`1`/`on`（大文字小文字無視）なら true、それ以外は false。
pub fn resolve_flag(value: Option<&str>, fallback: bool) -> bool {
    match value.map(str::trim) {
        None | Some("") => fallback,
        Some(v) => matches!(v.to_lowercase().as_str(), "true" | "1" | "on"),
    }
}
