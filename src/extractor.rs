use crate::fetcher::{FetchError, Fetcher, HttpFetcher};
use crate::parser::TrendParser;
use crate::types::TrendRecord;
use anyhow::Result;
use std::sync::Arc;

/// trends24 首頁；國家頁直接接在後面
pub const BASE_URL: &str = "https://trends24.in/";

/// 請求逾時（秒）
const FETCH_TIMEOUT_SECS: u64 = 10;

/// 組出目標 URL；空的片段代表全球頁
pub fn build_url(region_slug: &str) -> String {
    if region_slug.is_empty() {
        BASE_URL.to_string()
    } else {
        format!("{}{}", BASE_URL, region_slug)
    }
}

/// 趨勢擷取器
///
/// 每次呼叫發出一個請求、讀完整個回應後才回傳，
/// 內部沒有共享狀態，呼叫之間彼此獨立
pub struct TrendExtractor {
    fetcher: Arc<dyn Fetcher>,
    parser: TrendParser,
}

impl TrendExtractor {
    pub fn new() -> Result<Self> {
        Self::with_fetcher(Arc::new(HttpFetcher::new(FETCH_TIMEOUT_SECS)?))
    }

    /// 以自訂的 Fetcher 建立
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        Ok(Self {
            fetcher,
            parser: TrendParser::new()?,
        })
    }

    /// 抓取並解析指定地區的趨勢列表
    ///
    /// 網路或狀態碼錯誤以 `FetchError` 回報；
    /// 頁面抓得到但認不出趨勢結構時回傳空列表
    pub async fn fetch_trends(
        &self,
        region_slug: &str,
    ) -> Result<Vec<TrendRecord>, FetchError> {
        let url = build_url(region_slug);
        let html = self.fetcher.fetch_page(&url).await?;

        Ok(self.parser.parse(&html))
    }
}
