use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use mobile_lookup_server::{MobileNumber, TrackResponseDto};
use reqwest::Url;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "mobile-lookup-cli")]
#[command(about = "CLI for querying the mobile lookup server", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(short, long, env = "MOBILE_LOOKUP_URL", default_value = "http://127.0.0.1:5000")]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a mobile number
    Track {
        /// Mobile number, digits only, at least 10 long
        mobile: String,
        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
}

/// `/track` under the server URL, keeping any path prefix it has
fn track_url(base: &str, mobile: &MobileNumber) -> Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("Invalid server URL: {}", base))?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("Server URL cannot have a path: {}", base))?
        .pop_if_empty()
        .push("track");
    url.query_pairs_mut().append_pair("mobile", mobile.as_str());
    Ok(url)
}

/// Lines printed for a successful lookup
fn render_found(mobile: &MobileNumber, response: &TrackResponseDto) -> Vec<String> {
    let mut lines = vec![format!("Target Mobile: {}", mobile)];
    if let Some(record) = &response.data {
        lines.extend(record.display_rows().iter().map(|row| row.to_string()));
    }
    lines
}

async fn track(cli: &Cli, mobile: &str, json: bool) -> Result<()> {
    let mobile = match MobileNumber::parse(mobile) {
        Ok(mobile) => mobile,
        Err(e) => bail!("Please enter a valid mobile number (only digits, min 10): {}", e),
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(track_url(&cli.url, &mobile)?)
        .send()
        .await
        .context("Failed to reach lookup server")?;

    let status = response.status();
    let body: TrackResponseDto = response
        .json()
        .await
        .with_context(|| format!("Unexpected response from server (status {})", status))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&body)?);
    }

    if !body.success {
        bail!(
            "{}",
            body.error.as_deref().unwrap_or("No information found")
        );
    }

    if !json {
        for line in render_found(&mobile, &body) {
            println!("{}", line);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Track { mobile, json } => track(&cli, mobile, *json).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "mobile-lookup-cli",
            "--url",
            "http://localhost:8080",
            "track",
            "6294782049",
            "--json",
        ]);

        assert_eq!(cli.url, "http://localhost:8080");
        match cli.command {
            Commands::Track { mobile, json } => {
                assert_eq!(mobile, "6294782049");
                assert!(json);
            }
        }
    }

    #[test]
    fn test_track_url() {
        let mobile = MobileNumber::parse("6294782049").unwrap();
        let url = track_url("http://127.0.0.1:5000", &mobile).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/track?mobile=6294782049");
    }

    #[test]
    fn test_track_url_keeps_path_prefix() {
        let mobile = MobileNumber::parse("6294782049").unwrap();

        for base in ["http://h/api", "http://h/api/"] {
            let url = track_url(base, &mobile).unwrap();
            assert_eq!(url.as_str(), "http://h/api/track?mobile=6294782049", "base {base}");
        }

        assert!(track_url("mailto:someone@example.com", &mobile).is_err());
    }

    #[test]
    fn test_render_found_skips_placeholders() {
        let mobile = MobileNumber::parse("6294782049").unwrap();
        let response: TrackResponseDto = serde_json::from_value(json!({
            "success": true,
            "data": {"name": "John", "circle": "Delhi", "operator": "NA"}
        }))
        .unwrap();

        assert_eq!(
            render_found(&mobile, &response),
            vec![
                "Target Mobile: 6294782049".to_string(),
                "NAME: John".to_string(),
                "CIRCLE: Delhi".to_string(),
            ]
        );
    }
}
