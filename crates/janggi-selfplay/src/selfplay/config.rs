//! ルール設定ファイル（TOML）
//!
//! ```toml
//! enforce_general_safety = true
//! palace_diagonals = false
//! ```
//!
//! 省略したキーは既定値（false）になる。

use std::path::Path;

use anyhow::{Context, Result};
use janggi_core::Rules;

/// TOML ファイルからルールを読み込む
pub fn load_rules(path: &Path) -> Result<Rules> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file {}", path.display()))?;
    let rules: Rules = toml::from_str(&text)
        .with_context(|| format!("failed to parse rules file {}", path.display()))?;
    Ok(rules)
}

/// 設定ファイルと CLI フラグからルールを決める
///
/// フラグは有効化のみ（ファイルで有効にした項目をフラグで無効にはできない）。
pub fn resolve_rules(
    path: Option<&Path>,
    enforce_general_safety: bool,
    palace_diagonals: bool,
) -> Result<Rules> {
    let mut rules = match path {
        Some(path) => load_rules(path)?,
        None => Rules::default(),
    };
    rules.enforce_general_safety |= enforce_general_safety;
    rules.palace_diagonals |= palace_diagonals;
    Ok(rules)
}
