//! Ask the Sapient Squirrel a question.
//!
//! ```shell
//! GENIZA_KEY=... GENIZA_SECRET_KEY=... GENIZA_ENVIRONMENT=sandbox \
//!     cargo run --example ask -- "Why is the sky blue?"
//! ```

use geniza::{Geniza, Result};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What is the capital of France?".to_string());

    let geniza = Geniza::from_env().await?;
    let answer = geniza.ask_sapient_squirrel(&question).await?;
    println!("{answer}");

    Ok(())
}
