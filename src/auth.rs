use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use rspotify::{AuthCodeSpotify, Config, Token};

const SPOTIFY_CLIENT_ID: &str = "492e1e45ea814fa3ac555fe1576aaf5b";
const SPOTIFY_REDIRECT_URI: &str = "http://127.0.0.1:8898/login";
pub const SCOPES: &str =
    "user-top-read user-read-recently-played user-library-read user-follow-read playlist-read-private playlist-read-collaborative";

const RESPONSE: &str = r#"
<!doctype html>
<html>
<head><title>Success</title></head>
<body><h1>Authentication Successful!</h1><script>window.close();</script></body>
</html>
"#;
const CACHE: &str = ".cache";
const REFRESH_TOKEN_FILE: &str = ".cache/refresh_token";

fn oauth_builder() -> librespot_oauth::OAuthClientBuilder {
    librespot_oauth::OAuthClientBuilder::new(
        SPOTIFY_CLIENT_ID,
        SPOTIFY_REDIRECT_URI,
        SCOPES.split_whitespace().collect(),
    )
}

fn store_refresh_token(refresh_token: &str) {
    if let Err(e) = fs::create_dir_all(CACHE).and_then(|_| fs::write(REFRESH_TOKEN_FILE, refresh_token)) {
        tracing::warn!(error = %e, "Could not cache refresh token");
    } else {
        tracing::debug!("Saved refresh token to disk");
    }
}

async fn perform_browser_auth() -> Result<String> {
    tracing::info!("Starting browser-based OAuth flow");
    let client = oauth_builder()
        .open_in_browser()
        .with_custom_message(RESPONSE)
        .build()
        .context("failed to build OAuth client")?;

    let token = client
        .get_access_token_async()
        .await
        .context("failed to obtain access token")?;

    store_refresh_token(&token.refresh_token);
    tracing::info!("Browser authentication completed successfully");
    Ok(token.access_token)
}

/// Returns a fresh access token, refreshing the cached one when possible
async fn access_token() -> Result<String> {
    let stored_refresh_token = fs::read_to_string(REFRESH_TOKEN_FILE).ok();

    let Some(refresh_token) = stored_refresh_token.filter(|t| !t.trim().is_empty()) else {
        tracing::info!("No cached refresh token, starting browser authentication");
        return perform_browser_auth().await;
    };

    let oauth_client = oauth_builder().build().context("failed to build OAuth client")?;
    match oauth_client.refresh_token_async(refresh_token.trim()).await {
        Ok(new_token) => {
            store_refresh_token(&new_token.refresh_token);
            tracing::debug!("Token refreshed successfully");
            Ok(new_token.access_token)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Cached refresh token failed, re-authenticating");
            perform_browser_auth().await
        }
    }
}

/// Authenticates with Spotify and returns a ready-to-use rspotify client
pub async fn authenticate() -> Result<AuthCodeSpotify> {
    if !Path::new(CACHE).exists() {
        fs::create_dir_all(CACHE)?;
    }
    let access_token = access_token().await?;

    let token = Token {
        access_token,
        expires_in: chrono::Duration::seconds(3600),
        expires_at: Some(Utc::now() + chrono::Duration::seconds(3600)),
        scopes: SCOPES
            .split_whitespace()
            .map(|s| s.to_string())
            .collect::<HashSet<String>>(),
        refresh_token: None,
    };

    let spotify = AuthCodeSpotify::with_config(
        Default::default(),
        Default::default(),
        Config {
            token_cached: false,
            token_refreshing: false,
            ..Default::default()
        },
    );
    *spotify
        .token
        .lock()
        .await
        .map_err(|_| anyhow::anyhow!("rspotify token lock poisoned"))? = Some(token);
    tracing::debug!("rspotify client initialized");

    Ok(spotify)
}
