use crate::generation::trait_def::TextGenerator;
use anyhow::Result;
use std::time::Duration;

/// 使用的模型
const MODEL_NAME: &str = "gemini-1.5-pro-latest";

/// Gemini generateContent API
pub struct GeminiService {
    api_key: String,
    client: reqwest::Client,
}

impl GeminiService {
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { api_key, client })
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiService {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        // Gemini API 呼叫（API key 放在 query 參數）
        let api_url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            MODEL_NAME,
            urlencoding::encode(&self.api_key)
        );

        let request_body = serde_json::json!({
            "contents": [{
                "parts": [
                    {"text": prompt}
                ]
            }]
        });

        let response = self
            .client
            .post(&api_url)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<serde_json::Value>().await?;

        if !status.is_success() {
            let message = body["error"]["message"].as_str().unwrap_or("未知錯誤");
            anyhow::bail!("Gemini API 錯誤 ({}): {}", status, message);
        }

        extract_text(&body)
            .ok_or_else(|| anyhow::anyhow!("Gemini 回應中沒有文字"))
    }
}

/// 從回應取出第一個候選的文字
fn extract_text(response: &serde_json::Value) -> Option<String> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|text| text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text() {
        let response = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Rust is trending! #RustLang\n"}
                    ]
                }
            }]
        });

        assert_eq!(
            extract_text(&response),
            Some("Rust is trending! #RustLang".to_string())
        );
    }

    #[test]
    fn test_extract_text_missing() {
        let response = serde_json::json!({"candidates": []});
        assert_eq!(extract_text(&response), None);

        let response = serde_json::json!({
            "error": {"message": "API key not valid"}
        });
        assert_eq!(extract_text(&response), None);
    }

    #[test]
    fn test_build_service() {
        assert!(GeminiService::new("test-key".to_string()).is_ok());
    }
}
