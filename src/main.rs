use futures::future::join_all;
use qa_answer_client::config::Config;
use qa_answer_client::page::ConsolePage;
use qa_answer_client::{AskOutcome, create_requester, init_tracing};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    init_tracing();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let page = ConsolePage::new();
    let requester = match create_requester(&config, page) {
        Ok(requester) => requester,
        Err(e) => {
            error!("Failed to create requester: {}", e);
            std::process::exit(1);
        }
    };

    // Every question is an independent request; none waits for the previous one
    let mut pending = Vec::new();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    requester.page().set_question(&line);
                    pending.push(tokio::spawn(requester.request_answer()));
                }
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read question from stdin: {}", e);
                    break;
                }
            }
        }
    } else {
        for question in args {
            requester.page().set_question(&question);
            pending.push(tokio::spawn(requester.request_answer()));
        }
    }

    let outcomes = join_all(pending).await;
    let answered = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, Ok(AskOutcome::Answered(_))))
        .count();
    info!("{} of {} questions answered", answered, outcomes.len());
}
