//! speech-cli — submit audio to the speech gateway and poll results
//!
//! Usage:
//!   speech-cli [--config <file>] base64 <language> <audio-file>
//!   speech-cli [--config <file>] file <language> <audio-file>
//!   speech-cli [--config <file>] large-file <language> <audio-file>
//!   speech-cli [--config <file>] check <token>
//!   speech-cli [--config <file>] link <language> <url>

use anyhow::{bail, Context};
use speech_gateway_client::{ApiResponse, ClientConfig, SpeechClient};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = match take_config_flag(&mut args) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    };

    if args.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    match args[0].as_str() {
        "version" | "--version" | "-V" => {
            println!("speech-cli {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {}
    }

    match run(config_path, &args).await {
        Ok(resp) => match serde_json::to_string_pretty(&resp) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to render response: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"speech-cli — speech gateway command line client

USAGE:
    speech-cli [--config <file>] <COMMAND> [ARGS]

COMMANDS:
    base64 <language> <audio-file>      Encode a file as base64 and submit it
    file <language> <audio-file>        Upload a file (multipart)
    large-file <language> <audio-file>  Upload a large file (multipart)
    check <token>                       Poll a job by its token
    link <language> <url>               Submit remotely hosted audio
    version                             Show version information
    help                                Show this help message

CONFIG FILE (YAML):
    endpoint_url: https://api.example.com
    gateway_token: <token>
    timeout_secs: 30            # optional

ENVIRONMENT (used when --config is absent):
    SPEECH_ENDPOINT_URL         Gateway base URL
    SPEECH_GATEWAY_TOKEN        Gateway token
    SPEECH_HTTP_TIMEOUT_SECS    Optional request timeout
    RUST_LOG                    Log filter, e.g. speech_gateway_client=debug"#
    );
}

fn take_config_flag(args: &mut Vec<String>) -> anyhow::Result<Option<PathBuf>> {
    let Some(pos) = args.iter().position(|a| a == "--config") else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        bail!("--config requires a path");
    }
    let path = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(PathBuf::from(path)))
}

async fn run(config_path: Option<PathBuf>, args: &[String]) -> anyhow::Result<ApiResponse> {
    let config = match config_path {
        Some(path) => ClientConfig::from_yaml_file(&path)?,
        None => ClientConfig::from_env()?,
    };
    let client = SpeechClient::from_config(config)?;

    let command = args[0].as_str();
    let resp = match (command, &args[1..]) {
        ("base64", [language, path]) => {
            let audio = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {path}"))?;
            client.send_bytes_as_base64(language, &audio).await?
        }
        ("file", [language, path]) => client.send_file(language, path).await?,
        ("large-file", [language, path]) => client.send_large_file(language, path).await?,
        ("check", [token]) => client.check_result(token).await?,
        ("link", [language, link]) => client.process_link(language, link).await?,
        ("base64" | "file" | "large-file" | "link", _) => {
            bail!("{command} expects <language> and one more argument")
        }
        ("check", _) => bail!("check expects exactly one <token>"),
        (other, _) => bail!("Unknown command: {other}"),
    };
    Ok(resp)
}
