mod commands;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use decision_receipt::{
    render, ApiConfig, DecisionApi, ReceiptApi, SelectedFile, ViewController,
};
use session::Session;
use std::path::PathBuf;

/// Upload policy PDFs to the indexing service and ask questions about them
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the indexing/query service (overrides DECISION_RECEIPT_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload and index a PDF
    Upload {
        /// Path to the PDF file
        path: PathBuf,
    },

    /// Ask a question against the indexed document
    Query {
        /// The question; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = config_for(&cli)?;
    log::info!("Using service at {}", config.base_url);

    let mut controller = ViewController::new(ReceiptApi::new(config));

    match cli.command {
        None => Session::new(controller).run().await,
        Some(command) => {
            let outcome = run_once(&mut controller, command).await;
            print!("{}", render(controller.state()));
            outcome
        }
    }
}

/// `--api-base` wins over `DECISION_RECEIPT_API_BASE`, which wins over the default.
fn config_for(cli: &Cli) -> Result<ApiConfig> {
    match &cli.api_base {
        Some(base) => ApiConfig::new(base),
        None => ApiConfig::from_env(),
    }
}

/// Runs one subcommand. `Err` makes the process exit non-zero.
async fn run_once<A: DecisionApi>(
    controller: &mut ViewController<A>,
    command: Command,
) -> Result<()> {
    match command {
        Command::Upload { path } => {
            let file = SelectedFile::from_path(&path).await?;
            controller.select_file(file);
            controller.upload().await?;
        }
        Command::Query { question } => {
            controller.set_question(question.join(" "));
            controller.query().await?;
        }
    }

    finish(controller)
}

fn finish<A: DecisionApi>(controller: &ViewController<A>) -> Result<()> {
    match controller.state().last_failure() {
        Some(failure) => Err(anyhow::anyhow!("{:?} failed: {}", failure.action, failure.message)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn unreachable_api() -> ReceiptApi {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        ReceiptApi::new(ApiConfig::new(&format!("http://{}", addr)).unwrap())
    }

    // The only test in this crate touching the process environment.
    #[test]
    fn flag_beats_env_and_env_beats_default() {
        std::env::set_var(decision_receipt::config::API_BASE_ENV, "http://from-env:9000");

        let cli = Cli::parse_from(["decision-receipt", "--api-base", "http://from-flag:7000/"]);
        assert_eq!(config_for(&cli).unwrap().base_url, "http://from-flag:7000");

        let cli = Cli::parse_from(["decision-receipt"]);
        assert_eq!(config_for(&cli).unwrap().base_url, "http://from-env:9000");

        std::env::remove_var(decision_receipt::config::API_BASE_ENV);
        assert_eq!(config_for(&cli).unwrap(), ApiConfig::default());

        let cli = Cli::parse_from(["decision-receipt", "--api-base", "localhost"]);
        assert!(config_for(&cli).is_err());
    }

    #[test]
    fn query_words_are_joined() {
        let cli = Cli::parse_from(["decision-receipt", "query", "refund", "window?"]);
        match cli.command {
            Some(Command::Query { question }) => assert_eq!(question.join(" "), "refund window?"),
            other => panic!("expected query, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failed_call_exits_with_error() {
        let mut controller = ViewController::new(unreachable_api().await);
        let command = Command::Query {
            question: vec!["refunds?".to_string()],
        };

        let err = run_once(&mut controller, command).await.unwrap_err();

        assert!(err.to_string().starts_with("Query failed"));
        assert_eq!(controller.state().status(), "Query failed");
        assert!(finish(&controller).is_err());
    }

    #[tokio::test]
    async fn blank_question_exits_with_error() {
        let mut controller = ViewController::new(unreachable_api().await);
        let command = Command::Query {
            question: vec!["  ".to_string()],
        };

        let err = run_once(&mut controller, command).await.unwrap_err();

        assert_eq!(err.to_string(), "Enter a question");
        assert!(finish(&controller).is_ok());
    }

    #[tokio::test]
    async fn missing_pdf_exits_with_error() {
        let mut controller = ViewController::new(unreachable_api().await);
        let command = Command::Upload {
            path: PathBuf::from("/no/such/policy.pdf"),
        };

        assert!(run_once(&mut controller, command).await.is_err());
        assert!(controller.state().selected_file().is_none());
    }

    #[test]
    fn finish_is_ok_without_failure() {
        let controller = ViewController::new(ReceiptApi::new(ApiConfig::default()));
        assert!(finish(&controller).is_ok());
    }
}
