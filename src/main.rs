mod extractor;
mod fetcher;
mod generation;
mod parser;
mod regions;
mod sentiment;
mod session;
mod types;

use anyhow::Result;
use extractor::TrendExtractor;
use generation::{GeminiService, TextGenerator, build_prompt};
use indicatif::{ProgressBar, ProgressStyle};
use sentiment::{SentimentLabel, label_for};
use session::{GeneratedPost, SessionState};
use std::collections::HashMap;
use std::env;
use std::io::Write;
use std::sync::Arc;
use types::TrendRecord;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "trends" => {
                let country = args[2..].join(" ");
                run_fetch_once(&country).await?;
            }
            "countries" => print_countries(),
            "--help" | "-h" => print_help(),
            _ => {
                println!("未知命令: {}", args[1]);
                print_help();
            }
        }
    } else {
        run_session().await?;
    }

    Ok(())
}

/// 一次性模式：只抓趨勢並列出
async fn run_fetch_once(country: &str) -> Result<()> {
    let country = if country.is_empty() { "Worldwide" } else { country };

    let (country, slug) = match regions::lookup(country) {
        Some(entry) => entry,
        None => {
            println!("❌ 不認識的國家: {}", country);
            println!("💡 執行 cargo run countries 查看支援清單");
            return Ok(());
        }
    };

    let extractor = TrendExtractor::new()?;

    let pb = spinner(format!("正在抓取 {} 的趨勢...", country));
    let result = extractor.fetch_trends(slug).await;
    pb.finish_and_clear();

    match result {
        Ok(trends) if trends.is_empty() => {
            println!("⚠️  認不出任何趨勢（可能是版面又改了）");
        }
        Ok(trends) => print_trends(country, &trends),
        Err(e) => println!("❌ 無法取得趨勢: {}", e),
    }

    Ok(())
}

/// 互動模式：選國家 → 抓趨勢 → 選趨勢 → 生成貼文 → 看情緒
async fn run_session() -> Result<()> {
    println!("=== TweetX ===\n");

    let extractor = TrendExtractor::new()?;
    let mut state = SessionState::new();
    let mut generator_slot: Option<Arc<dyn TextGenerator>> = None;

    'country: loop {
        let input = read_line("輸入國家名稱（Enter 用 Worldwide，l 列出清單，q 離開）: ")?;
        match input.as_str() {
            "q" => break 'country,
            "l" => {
                print_countries();
                continue 'country;
            }
            _ => {}
        }

        let requested = if input.is_empty() { "Worldwide" } else { input.as_str() };
        let (country, slug) = match regions::lookup(requested) {
            Some(entry) => entry,
            None => {
                println!("❌ 不認識的國家: {}", requested);
                continue 'country;
            }
        };

        let pb = spinner(format!("正在抓取 {} 的趨勢...", country));
        let result = extractor.fetch_trends(slug).await;
        pb.finish_and_clear();

        let trends = match result {
            Ok(trends) => trends,
            Err(e) => {
                // 抓取失敗不影響上一輪的資料，讓使用者重試
                println!("❌ 無法取得趨勢: {}", e);
                continue 'country;
            }
        };

        if trends.is_empty() {
            println!("⚠️  認不出任何趨勢（可能是版面又改了）");
            continue 'country;
        }

        state.set_trends(country, trends);
        print_trends(country, &state.trends);

        'trend: loop {
            let input =
                read_line("選擇趨勢編號（Enter 用第一筆，s 統計，c 換國家，q 離開）: ")?;
            match input.as_str() {
                "q" => break 'country,
                "c" => break 'trend,
                "s" => {
                    print_statistics(&state);
                    continue 'trend;
                }
                "" => {}
                _ => {
                    let selected = input
                        .parse::<usize>()
                        .ok()
                        .and_then(|number| number.checked_sub(1))
                        .map_or(false, |index| state.select(index));

                    if !selected {
                        println!("❌ 無效的編號: {}", input);
                        continue 'trend;
                    }
                }
            }

            let trend_name = match state.selected_trend() {
                Some(trend) => trend.name.clone(),
                None => {
                    println!("⚠️  沒有可用的趨勢");
                    break 'trend;
                }
            };
            println!("📌 已選擇: {}", trend_name);

            let context = read_line("補充說明（可留空）: ")?;

            let generator = match ensure_generator(&mut generator_slot) {
                Ok(generator) => generator,
                Err(e) => {
                    println!("❌ {}", e);
                    continue 'trend;
                }
            };

            loop {
                let prompt = build_prompt(&trend_name, &context);

                let pb = spinner(format!("正在請 {} 撰寫貼文...", generator.name()));
                let result = generator.generate(&prompt).await;
                pb.finish_and_clear();

                match result {
                    Ok(text) => {
                        let (label, compound) = sentiment::score_sentiment(&text);

                        println!("\n📝 生成的貼文:\n");
                        println!("{}\n", text);
                        println!("{} 情緒: {} ({:.2})", label.marker(), label.as_str(), compound);

                        state.record_post(GeneratedPost {
                            trend_name: trend_name.clone(),
                            text,
                            sentiment: label,
                            compound,
                            generated_at: chrono::Utc::now(),
                        });
                    }
                    Err(e) => {
                        // 生成失敗不影響已抓到的趨勢列表
                        println!("❌ 生成失敗: {}", e);
                        break;
                    }
                }

                let again = read_line("r 重新生成，其他鍵返回趨勢列表: ")?;
                if again != "r" {
                    break;
                }
            }
        }
    }

    if !state.sentiment_history.is_empty() {
        print_statistics(&state);
    }
    println!("👋 再見！");

    Ok(())
}

/// 取得生成服務；第一次使用時要求輸入 API key
fn ensure_generator(
    slot: &mut Option<Arc<dyn TextGenerator>>,
) -> Result<Arc<dyn TextGenerator>> {
    if let Some(generator) = slot {
        return Ok(Arc::clone(generator));
    }

    let api_key = read_line("請輸入 Gemini API Key: ")?;
    if api_key.is_empty() {
        anyhow::bail!("請先提供 Gemini API Key");
    }

    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiService::new(api_key)?);
    *slot = Some(Arc::clone(&generator));

    Ok(generator)
}

fn print_trends(country: &str, trends: &[TrendRecord]) {
    println!("\n📈 {} 的趨勢:\n", country);
    println!("{:<4} {:<32} {:>10}", "#", "名稱", "熱度");

    for (index, trend) in trends.iter().enumerate() {
        println!(
            "{:<4} {:<32} {:>10}",
            index + 1,
            trend.name,
            trend.volume.to_string()
        );
    }
    println!();
}

fn print_countries() {
    println!("🌍 支援的國家:\n");
    for (index, name) in regions::country_names().enumerate() {
        println!("{:>3}. {}", index + 1, name);
    }
    println!();
}

/// 顯示統計報告
fn print_statistics(state: &SessionState) {
    if state.sentiment_history.is_empty() {
        println!("⚠️  尚未生成任何貼文");
        return;
    }

    let count = state.sentiment_history.len();
    let average: f64 = state.sentiment_history.iter().sum::<f64>() / count as f64;
    let positive = count_label(state, SentimentLabel::Positive);
    let negative = count_label(state, SentimentLabel::Negative);
    let neutral = count - positive - negative;

    println!("\n╔══════════════════════════════════╗");
    println!("║       📊 情緒統計               ║");
    println!("╠══════════════════════════════════╣");
    println!("║ 貼文總數:   {:>18} ║", count);
    println!("║ 平均分數:   {:>18.2} ║", average);
    println!("║ 正面:       {:>18} ║", positive);
    println!("║ 負面:       {:>18} ║", negative);
    println!("║ 中性:       {:>18} ║", neutral);
    println!("╚══════════════════════════════════╝\n");

    println!("📋 最近分數:");
    for (index, score) in state.sentiment_history.iter().rev().take(5).enumerate() {
        println!("  {}. {} {:+.2}", index + 1, label_for(*score).marker(), score);
    }
    println!();

    // 趨勢名稱的關鍵字出現次數（文字版的文字雲）
    if !state.trends.is_empty() {
        let mut by_word: HashMap<String, usize> = HashMap::new();
        for trend in &state.trends {
            for word in trend.name.split_whitespace() {
                let word = word.trim_start_matches('#').to_lowercase();
                if !word.is_empty() {
                    *by_word.entry(word).or_insert(0) += 1;
                }
            }
        }

        let mut words: Vec<_> = by_word.into_iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        println!("📊 趨勢關鍵字:");
        for (word, count) in words.into_iter().take(10) {
            println!("  - {}: {} 次", word, count);
        }
        println!();
    }
}

fn count_label(state: &SessionState, label: SentimentLabel) -> usize {
    state
        .sentiment_history
        .iter()
        .filter(|score| label_for(**score) == label)
        .count()
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

fn print_help() {
    println!("TweetX - 趨勢貼文產生器\n");
    println!("用法:");
    println!("  cargo run                        # 互動模式");
    println!("  cargo run trends [國家]          # 只抓趨勢並列出");
    println!("  cargo run countries              # 列出支援的國家");
    println!("  cargo run --help                 # 顯示此幫助\n");
    println!("互動流程:");
    println!("  1. 選擇國家，抓取 trends24.in 的趨勢列表");
    println!("  2. 挑一筆趨勢、補充說明，請 Gemini 撰寫貼文");
    println!("  3. 檢視貼文的情緒分數，必要時重新生成\n");
    println!("範例:");
    println!("  cargo run trends India           # 印度趨勢");
    println!("  cargo run trends                 # 全球趨勢");
    println!("  cargo run trends united states   # 名稱不分大小寫");
}
