use wordcount::config::AppConfig;
use wordcount::error::Result;
use wordcount::ingestion::source::load_corpus;
use wordcount::session::builder::SessionBuilder;
use wordcount::session::Session;
use wordcount::wordcount::pipeline::perform_word_count;
use wordcount::wordcount::report::render;
use wordcount::wordcount::types::WordCountOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Word Count application");

    let config = AppConfig::from_env()?;
    tracing::info!(mode = %config.mode, app_name = %config.app_name, "Loaded configuration");

    let session = SessionBuilder::from_config(&config).get_or_create().await?;
    tracing::info!("Engine session created successfully");

    let outcome = run(&session, &config).await;

    // Stop the session on both paths before reporting the outcome.
    let mode = session.mode();
    if let Err(e) = session.stop().await {
        tracing::warn!("Failed to stop {} session cleanly: {}", mode, e);
    } else {
        tracing::info!("Engine session stopped");
    }

    match outcome {
        Ok(()) => {
            tracing::info!("Word count application completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, engine = e.is_engine_error(), "Application failed");
            Err(e.into())
        }
    }
}

async fn run(session: &Session, config: &AppConfig) -> Result<()> {
    let corpus = load_corpus(&config.input)?;
    tracing::info!(source = %corpus.source, lines = corpus.len(), "Loaded input corpus");

    let options = WordCountOptions::default();
    let report = perform_word_count(session, &corpus, &options).await?;

    println!("{}", render(&report, options.top_n)?);
    Ok(())
}
