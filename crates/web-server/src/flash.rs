//! One-shot notifications shown on the next rendered page.
//!
//! Messages that must survive a redirect are queued in a signed cookie and
//! cleared as soon as a page displays them. A cookie with a bad signature or
//! an unreadable payload is treated as empty.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

impl Level {
    pub fn css_class(&self) -> &'static str {
        match self {
            Level::Success => "flash-success",
            Level::Error => "flash-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// Queues `flash` for the next page that calls `take`.
pub fn push(jar: SignedCookieJar, flash: Flash) -> SignedCookieJar {
    let mut pending = peek(&jar);
    pending.push(flash);
    match encode(&pending) {
        Ok(value) => jar.add(
            Cookie::build((FLASH_COOKIE, value))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode flash messages.");
            jar
        }
    }
}

/// Removes and returns every queued message.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<Flash>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }
    let messages = peek(&jar);
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), messages)
}

fn peek(jar: &SignedCookieJar) -> Vec<Flash> {
    jar.get(FLASH_COOKIE)
        .and_then(|cookie| decode(cookie.value()))
        .unwrap_or_default()
}

fn encode(messages: &[Flash]) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(messages)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

fn decode(value: &str) -> Option<Vec<Flash>> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}
