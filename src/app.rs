use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::messages::Messages;
use crate::page::Page;
use crate::requester::AnswerRequester;
use crate::transport::HttpTransport;

/// Initialize tracing and logging for the client.
/// Logs go to stderr so stdout carries only answers.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qa_answer_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build a requester that talks to the configured backend over HTTP
pub fn create_requester<P: Page + 'static>(
    config: &Config,
    page: P,
) -> Result<AnswerRequester<P, HttpTransport>, anyhow::Error> {
    info!("Initializing HTTP transport for {}", config.backend_url);
    let transport = HttpTransport::new(config.backend_url.clone())?;

    Ok(AnswerRequester::new(
        page,
        transport,
        Messages::for_locale(config.locale),
    ))
}
