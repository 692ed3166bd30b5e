use crate::types::{TrendRecord, TrendVolume};
use anyhow::Result;
use scraper::{ElementRef, Html, Selector};

/// 最多取前 10 筆候選（依文件順序）
const MAX_TRENDS: usize = 10;

/// 候選清單選擇策略
///
/// 依序嘗試已知的幾種版面結構，第一個有結果的就採用
struct SelectStrategy {
    name: &'static str,
    select: for<'a> fn(&'a Html) -> Vec<ElementRef<'a>>,
}

const STRATEGIES: &[SelectStrategy] = &[
    SelectStrategy {
        name: "trend-card",
        select: select_trend_card,
    },
    SelectStrategy {
        name: "trends-list-id",
        select: select_trends_list_id,
    },
    SelectStrategy {
        name: "trends-list-class",
        select: select_trends_list_class,
    },
];

fn select_trend_card<'a>(document: &'a Html) -> Vec<ElementRef<'a>> {
    select_all(document, ".trend-card__list li a")
}

fn select_trends_list_id<'a>(document: &'a Html) -> Vec<ElementRef<'a>> {
    select_all(document, "#trends-list li a")
}

fn select_trends_list_class<'a>(document: &'a Html) -> Vec<ElementRef<'a>> {
    select_all(document, ".trends-list li a")
}

fn select_all<'a>(document: &'a Html, selector_str: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector_str) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// trends24 頁面的 Parser
pub struct TrendParser {
    volume_selector: Selector,
    anchor_selector: Selector,
}

impl TrendParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // 熱度標籤有兩種已知的 class 名稱
            volume_selector: Selector::parse("span.tweet-volume, span.volume")
                .map_err(|e| anyhow::anyhow!("選擇器解析失敗: {:?}", e))?,
            anchor_selector: Selector::parse("a[href]")
                .map_err(|e| anyhow::anyhow!("選擇器解析失敗: {:?}", e))?,
        })
    }

    /// 解析整頁 HTML，回傳正規化後的趨勢列表
    ///
    /// 找不到任何可辨識的趨勢結構時回傳空列表；
    /// 相同的輸入永遠產生相同的結果
    pub fn parse(&self, html: &str) -> Vec<TrendRecord> {
        let document = Html::parse_document(html);
        let (_strategy, candidates) = self.select_candidates(&document);

        let mut records = Vec::new();
        for element in candidates.into_iter().take(MAX_TRENDS) {
            let name = element.text().collect::<String>().trim().to_string();

            // 文字是空的就整筆跳過
            if name.is_empty() {
                continue;
            }

            let volume = self.extract_volume(element);
            records.push(TrendRecord { name, volume });
        }

        records
    }

    /// 依序套用選擇策略，回傳第一個有結果的策略名稱與元素
    fn select_candidates<'a>(
        &self,
        document: &'a Html,
    ) -> (&'static str, Vec<ElementRef<'a>>) {
        for strategy in STRATEGIES {
            let found = (strategy.select)(document);
            if !found.is_empty() {
                return (strategy.name, found);
            }
        }

        // 後備方案：連結目標含 "hashtag" 的所有錨點
        let anchors = document
            .select(&self.anchor_selector)
            .filter(|element| {
                element
                    .value()
                    .attr("href")
                    .map_or(false, |href| href.contains("hashtag"))
            })
            .collect();

        ("hashtag-fallback", anchors)
    }

    /// 在候選元素的父層尋找熱度標籤
    fn extract_volume(&self, element: ElementRef) -> TrendVolume {
        let parent = match element.parent().and_then(ElementRef::wrap) {
            Some(parent) => parent,
            None => return TrendVolume::Unknown { raw: None },
        };

        match parent.select(&self.volume_selector).next() {
            Some(span) => {
                let text = span.text().collect::<String>();
                normalize_volume(text.trim())
            }
            None => TrendVolume::Unknown { raw: None },
        }
    }
}

/// 將熱度字串正規化成數值
///
/// 清理規則：去掉 "+" 與千分位逗號，結尾的 "K" 代表 ×1000，
/// 小數部分無條件捨去。解析失敗時保留清理後的原文
pub fn normalize_volume(text: &str) -> TrendVolume {
    let cleaned = text.trim().replace('+', "").replace(',', "");

    let parsed = match cleaned.strip_suffix('K') {
        Some(prefix) => prefix.parse::<f64>().map(|value| value * 1000.0),
        None => cleaned.parse::<f64>(),
    };

    match parsed {
        Ok(value) if value.is_finite() && value >= 0.0 => {
            TrendVolume::Count(value as u64)
        }
        _ => TrendVolume::Unknown { raw: Some(cleaned) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_FIXTURE: &str = r#"
    <div class="trend-card">
        <ul class="trend-card__list">
            <li><a href="/t/1">#One</a><span class="tweet-volume">12.5K</span></li>
            <li><a href="/t/2">#Two</a><span class="volume">1,234</span></li>
            <li><a href="/t/3">#Three</a><span class="tweet-volume">N/A</span></li>
            <li><a href="/t/4">#Four</a></li>
        </ul>
    </div>
    "#;

    #[test]
    fn test_parse_card_fixture() {
        let parser = TrendParser::new().unwrap();
        let records = parser.parse(CARD_FIXTURE);

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].name, "#One");
        assert_eq!(records[0].volume, TrendVolume::Count(12500));
        assert_eq!(records[1].volume, TrendVolume::Count(1234));
        assert_eq!(
            records[2].volume,
            TrendVolume::Unknown {
                raw: Some("N/A".to_string())
            }
        );
        assert_eq!(records[3].volume, TrendVolume::Unknown { raw: None });
    }

    #[test]
    fn test_no_recognizable_markup() {
        let parser = TrendParser::new().unwrap();
        let records = parser.parse("<html><body><p>什麼都沒有</p></body></html>");
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_text_candidates_skipped() {
        let html = r#"
        <ul class="trend-card__list">
            <li><a href="/t/1">   </a></li>
            <li><a href="/t/2">#Kept</a></li>
            <li><a href="/t/3"></a></li>
        </ul>
        "#;

        let parser = TrendParser::new().unwrap();
        let records = parser.parse(html);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "#Kept");
    }

    #[test]
    fn test_truncates_to_ten_in_document_order() {
        let mut html = String::from("<ul class=\"trend-card__list\">");
        for i in 1..=15 {
            html.push_str(&format!("<li><a href=\"/t/{i}\">#Trend{i}</a></li>"));
        }
        html.push_str("</ul>");

        let parser = TrendParser::new().unwrap();
        let records = parser.parse(&html);

        assert_eq!(records.len(), 10);
        assert_eq!(records[0].name, "#Trend1");
        assert_eq!(records[9].name, "#Trend10");
    }

    #[test]
    fn test_strategy_order_is_strict() {
        // 同時有兩種結構時，先宣告的策略優先
        let html = r#"
        <ul class="trend-card__list"><li><a href="/t/1">#FromCard</a></li></ul>
        <ul id="trends-list"><li><a href="/t/2">#FromId</a></li></ul>
        "#;

        let parser = TrendParser::new().unwrap();
        let document = Html::parse_document(html);
        let (strategy, candidates) = parser.select_candidates(&document);

        assert_eq!(strategy, "trend-card");
        assert_eq!(candidates.len(), 1);

        let records = parser.parse(html);
        assert_eq!(records[0].name, "#FromCard");
    }

    #[test]
    fn test_hashtag_fallback() {
        let html = r#"
        <div>
            <p><a href="https://twitter.com/hashtag/Rust">#Rust</a>
               <span class="volume">88K</span></p>
            <p><a href="/about">關於我們</a></p>
            <p><a href="/search?q=hashtag%2FGo">#Go</a></p>
        </div>
        "#;

        let parser = TrendParser::new().unwrap();
        let document = Html::parse_document(html);
        let (strategy, _) = parser.select_candidates(&document);
        assert_eq!(strategy, "hashtag-fallback");

        let records = parser.parse(html);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "#Rust");
        assert_eq!(records[0].volume, TrendVolume::Count(88000));
        assert_eq!(records[1].name, "#Go");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = TrendParser::new().unwrap();
        assert_eq!(parser.parse(CARD_FIXTURE), parser.parse(CARD_FIXTURE));
    }

    #[test]
    fn test_normalize_volume() {
        assert_eq!(normalize_volume("12.5K"), TrendVolume::Count(12500));
        assert_eq!(normalize_volume("1,234"), TrendVolume::Count(1234));
        assert_eq!(normalize_volume("50K+"), TrendVolume::Count(50000));
        assert_eq!(normalize_volume("2400"), TrendVolume::Count(2400));
        assert_eq!(normalize_volume("1.2K"), TrendVolume::Count(1200));
    }

    #[test]
    fn test_normalize_volume_unparseable() {
        assert_eq!(
            normalize_volume("N/A"),
            TrendVolume::Unknown {
                raw: Some("N/A".to_string())
            }
        );
        assert_eq!(
            normalize_volume(""),
            TrendVolume::Unknown {
                raw: Some(String::new())
            }
        );
        // 負數不是合理的熱度，保留原文
        assert_eq!(
            normalize_volume("-5"),
            TrendVolume::Unknown {
                raw: Some("-5".to_string())
            }
        );
    }
}
