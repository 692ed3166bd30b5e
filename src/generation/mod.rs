// 宣告子模組
pub mod prompt;
pub mod services;
pub mod trait_def;

// 重新導出常用項目
pub use prompt::build_prompt;
pub use services::gemini::GeminiService;
pub use trait_def::TextGenerator;
