use serde::{Deserialize, Serialize};
use std::fmt;

/// 單筆趨勢記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    /// 趨勢名稱（去除前後空白，不會是空字串）
    pub name: String,
    /// 討論熱度
    pub volume: TrendVolume,
}

/// 趨勢熱度
///
/// 來源頁面的熱度字串不一定能解析成數字，
/// 解析失敗時保留清理後的原文，不會靜默變成 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrendVolume {
    /// 解析成功的數值
    Count(u64),
    /// 無法解析；raw 為清理後的原文（頁面上找不到熱度元素時為 None）
    Unknown { raw: Option<String> },
}

impl TrendVolume {
    /// 是否為已解析的數值
    pub fn is_count(&self) -> bool {
        matches!(self, TrendVolume::Count(_))
    }
}

impl fmt::Display for TrendVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendVolume::Count(n) => write!(f, "{}", n),
            TrendVolume::Unknown { raw: Some(text) } if !text.is_empty() => {
                write!(f, "{}", text)
            }
            TrendVolume::Unknown { .. } => write!(f, "N/A"),
        }
    }
}
