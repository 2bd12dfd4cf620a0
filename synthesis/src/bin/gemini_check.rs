// Sends one short prompt to Gemini to confirm the key and model work.

use anyhow::Result;
use paper_synthesis::{Config, GeminiService, GenerativeModel};

const CHECK_PROMPT: &str = "Explain how AI works in a few words";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let gemini = GeminiService::new(&config);
    log::info!("Gemini client configured for model {}", gemini.model());

    log::info!("Sending prompt: '{}'", CHECK_PROMPT);
    let reply = gemini.generate(CHECK_PROMPT).await?;

    println!("---------------------------");
    println!("{}", reply.trim());
    println!("---------------------------");
    Ok(())
}
