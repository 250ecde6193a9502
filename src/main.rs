mod annotate;
mod auth;
mod cli;
mod submission;

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::ProgressBar;
use tracing::info;

use annotate::client::VideoIntelligenceClient;
use annotate::error::AnnotateError;
use auth::CredentialSource;
use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse_args();

    let request = submission::build_request(&args, Utc::now())
        .context("building annotation request")?;
    info!(
        "annotating {} -> {}",
        request.input_uri, request.output_uri
    );

    let credentials = CredentialSource::from_key_path(args.credentials.clone())
        .load()
        .context("loading credentials")?;

    let http = reqwest::Client::new();
    let token = credentials
        .access_token(&http)
        .await
        .context("minting access token")?;
    let client = VideoIntelligenceClient::new(http, args.endpoint.clone(), token);

    let operation = client
        .annotate_video(&request)
        .await
        .context("submitting annotation request")?;
    info!("processing video, operation {}", operation.name);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("waiting for {}", operation.name));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = client
        .wait_for_operation(
            operation,
            Duration::from_secs(args.timeout_secs),
            Duration::from_secs(args.poll_interval_secs),
        )
        .await;
    spinner.finish_and_clear();

    match outcome {
        Ok(operation) => {
            // The payload is discarded: the service has already written the
            // annotation document to the output URI.
            drop(operation.response);
            info!("finished processing");
            Ok(())
        }
        Err(err @ AnnotateError::Timeout { .. }) => Err(anyhow::Error::new(err).context(
            "gave up waiting; server-side processing continues and will still write the output object",
        )),
        Err(err) => Err(err.into()),
    }
}
