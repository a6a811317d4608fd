use std::{
    env,
    process::ExitCode,
};

use earthpic::{
    tool_definition,
    EpicConfig,
    EpicImageFetcher,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: earthpic [earth_date] [type]\n       earthpic --definition";

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr, stdout only carries the tool output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args()
        .skip(1)
        .collect();

    if args.first().map(String::as_str) == Some("--definition") {
        println!("{:#}", tool_definition());
        return ExitCode::SUCCESS;
    }

    if args.len() > 2 {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    }

    let config = EpicConfig::from_env();
    tracing::debug!("earthpic starting with config: {:?}", config);

    let fetcher = EpicImageFetcher::new(config);
    let res = fetcher
        .fetch(
            args.first().map(String::as_str),
            args.get(1).map(String::as_str),
        )
        .await;

    println!("{}", res);

    ExitCode::SUCCESS
}
