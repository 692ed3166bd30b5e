use anyhow::Result;

/// 文字生成服務 Trait
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// 服務名稱
    fn name(&self) -> &str;

    /// 依提示詞生成一段文字
    async fn generate(&self, prompt: &str) -> Result<String>;
}
