use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// 模擬瀏覽器的 User-Agent（trends24 會擋掉預設的程式 UA）
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 抓取失敗
///
/// 單次抓取失敗不重試，由呼叫端決定是否重新發起
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// 連線、逾時或讀取回應失敗
    #[error("請求失敗: {0}")]
    Request(#[from] reqwest::Error),
    /// 伺服器回應非 2xx 狀態碼
    #[error("HTTP 錯誤: {0}")]
    Status(reqwest::StatusCode),
}

/// HTTP Fetcher trait - 抽象介面（測試與未來擴充用）
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP 實作
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// 建立新的 HTTP Fetcher
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .context("無法建立 HTTP 客戶端")?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}
