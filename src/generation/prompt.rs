/// 組出趨勢貼文的提示詞
///
/// 純字串模板，相同輸入永遠產生相同輸出
pub fn build_prompt(trend_name: &str, user_context: &str) -> String {
    format!(
        r#"
    Write an engaging tweet about the trending topic "{trend_name}".
    Additional context from user: {user_context}

    Guidelines:
    - Keep it under 280 characters
    - Make it engaging and relevant
    - Include hashtags naturally
    - Consider the current context of why this topic is trending
    "#
    )
}
