use crate::sentiment::SentimentLabel;
use crate::types::TrendRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一則已生成的貼文
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPost {
    /// 依據的趨勢名稱
    pub trend_name: String,
    /// 生成的內文
    pub text: String,
    /// 情緒分類
    pub sentiment: SentimentLabel,
    /// compound 分數（-1 到 1）
    pub compound: f64,
    /// 生成時間
    pub generated_at: DateTime<Utc>,
}

/// UI 會話狀態
///
/// 由主控制器持有並以參數傳遞，核心邏輯不碰全域狀態
#[derive(Debug, Default)]
pub struct SessionState {
    /// 目前選擇的國家顯示名稱
    pub country: Option<String>,
    /// 最近一次抓到的趨勢
    pub trends: Vec<TrendRecord>,
    /// 目前選擇的趨勢索引
    pub selected: Option<usize>,
    /// 最近一次生成的貼文
    pub last_post: Option<GeneratedPost>,
    /// 歷來的 compound 分數
    pub sentiment_history: Vec<f64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 更新趨勢列表；有資料時自動選第一筆
    pub fn set_trends(&mut self, country: &str, trends: Vec<TrendRecord>) {
        self.country = Some(country.to_string());
        self.selected = if trends.is_empty() { None } else { Some(0) };
        self.trends = trends;
    }

    /// 選擇趨勢（0-based）；索引超出範圍時不變更並回傳 false
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.trends.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// 目前選擇的趨勢
    pub fn selected_trend(&self) -> Option<&TrendRecord> {
        self.selected.and_then(|index| self.trends.get(index))
    }

    /// 記錄新生成的貼文，同時累積情緒分數
    pub fn record_post(&mut self, post: GeneratedPost) {
        self.sentiment_history.push(post.compound);
        self.last_post = Some(post);
    }
}
