//! ig-downloader - CLI entry point.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use ig_downloader::{
    api::MediaApi,
    cli::Args,
    config::{validate_post_url, Settings},
    download::download_post,
    error::{exit_codes, Result},
    output::{print_banner, print_error},
};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let args = Args::parse_with_legacy_flags();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    let result = run(args.url.as_deref(), &Settings::default()).await;
    if let Err(e) = &result {
        print_error(&format!("{}", e));
    }

    ExitCode::from(exit_codes::for_result(&result) as u8)
}

async fn run(url: Option<&str>, settings: &Settings) -> Result<()> {
    // Reject an empty URL before touching the network
    let post_url = validate_post_url(url)?;

    tracing::debug!("Error policy: {}", settings.policy);

    let api = MediaApi::new(settings)?;

    if let Some(path) = download_post(&api, settings, post_url).await? {
        tracing::debug!("Finished: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ig_downloader::Error;
    use serde_json::json;
    use tempfile::TempDir;

    fn make_test_settings(root: &std::path::Path) -> Settings {
        Settings {
            output_root: root.to_path_buf(),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn test_empty_url_exits_one_without_requests() {
        let temp = TempDir::new().unwrap();
        let settings = make_test_settings(temp.path());

        for url in [None, Some("")] {
            let result = run(url, &settings).await;

            assert!(matches!(result, Err(Error::Usage(_))));
            assert_eq!(exit_codes::for_result(&result), 1);
        }
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_html_metadata_exits_zero() {
        let mut server = mockito::Server::new_async().await;
        let _metadata = server
            .mock("GET", "/p/ABC123/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html><body>Error</body></html>")
            .create_async()
            .await;

        let temp = TempDir::new().unwrap();
        let settings = make_test_settings(temp.path());
        let url = format!("{}/p/ABC123/?utm_source=ig_web_copy_link", server.url());

        let result = run(Some(&url), &settings).await;

        assert_eq!(exit_codes::for_result(&result), 0);
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_directory_failure_exits_one() {
        let mut server = mockito::Server::new_async().await;
        let base = server.url();
        let _metadata = server
            .mock("GET", "/p/ABC123/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                json!({
                    "graphql": {
                        "shortcode_media": {
                            "id": "ABC123",
                            "display_url": format!("{}/display.jpg", base)
                        }
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let settings = make_test_settings(&blocker);
        let url = format!("{}/p/ABC123/", base);

        let result = run(Some(&url), &settings).await;

        assert!(matches!(result, Err(Error::CreateDir { .. })));
        assert_eq!(exit_codes::for_result(&result), 1);
    }
}
