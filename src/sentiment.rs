use serde::{Deserialize, Serialize};

/// 情緒分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    /// 顯示用的符號
    pub fn marker(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "🟢",
            SentimentLabel::Negative => "🔴",
            SentimentLabel::Neutral => "⚪",
        }
    }
}

/// compound 分數 → 分類
///
/// 門檻值沿用 VADER 的慣例：±0.05
pub fn label_for(compound: f64) -> SentimentLabel {
    if compound >= 0.05 {
        SentimentLabel::Positive
    } else if compound <= -0.05 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// 以 VADER 詞典計算文字的情緒分數
///
/// 回傳分類與 compound 分數（-1 到 1）；
/// 詞典版本固定時結果是確定性的
pub fn score_sentiment(text: &str) -> (SentimentLabel, f64) {
    let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);
    let compound = scores.get("compound").copied().unwrap_or(0.0);

    (label_for(compound), compound)
}
