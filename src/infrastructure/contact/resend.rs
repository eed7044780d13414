// SPDX-License-Identifier: MPL-2.0
//! E-mail delivery through the Resend HTTP API.
//!
//! Status handling:
//! - `2xx` → success
//! - `4xx` with a JSON `message` → rejected outcome carrying that message
//! - anything else, or a transport error → [`SubmissionError`]

use crate::application::port::{ContactSender, SubmissionError};
use crate::domain::contact::validation::EMAIL_FIELD;
use crate::domain::contact::{Outcome, Payload};
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;

/// Resend endpoint for sending a single e-mail.
pub const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Field whose value names the sender in the subject line.
const NAME_FIELD: &str = "navn";

/// Sends each submission as a plain-text e-mail to a fixed recipient.
#[derive(Clone)]
pub struct ResendSender {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
    to: String,
}

impl std::fmt::Debug for ResendSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendSender")
            .field("endpoint", &self.endpoint)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct EmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    #[serde(default)]
    message: Option<String>,
}

impl ResendSender {
    /// Creates a sender.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::NotConfigured`] when the key, sender, or
    /// recipient is blank, or when the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, SubmissionError> {
        let api_key = api_key.into();
        let from = from.into();
        let to = to.into();

        for (value, what) in [(&api_key, "API key"), (&from, "sender"), (&to, "recipient")] {
            if value.trim().is_empty() {
                return Err(SubmissionError::NotConfigured(what.to_string()));
            }
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SubmissionError::NotConfigured(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: RESEND_ENDPOINT.to_string(),
            api_key,
            from,
            to,
        })
    }

    /// Reads the API key from the environment variable `key_var`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::NotConfigured`] when the variable is unset.
    pub fn from_env(
        key_var: &str,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, SubmissionError> {
        let api_key = std::env::var(key_var)
            .map_err(|_| SubmissionError::NotConfigured(format!("${key_var}")))?;
        Self::new(api_key, from, to)
    }

    /// Overrides the API endpoint (used for staging proxies).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl ContactSender for ResendSender {
    fn send(&self, payload: Payload) -> BoxFuture<'static, Result<Outcome, SubmissionError>> {
        let this = self.clone();

        Box::pin(async move {
            let request = EmailRequest {
                from: &this.from,
                to: [&this.to],
                subject: email_subject(&payload),
                text: render_email_text(&payload),
                reply_to: payload.get(EMAIL_FIELD).filter(|v| !v.trim().is_empty()),
            };

            let response = this
                .client
                .post(&this.endpoint)
                .bearer_auth(&this.api_key)
                .json(&request)
                .send()
                .await
                .map_err(|e| SubmissionError::Network(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                return Ok(Outcome::success());
            }

            let body = response
                .text()
                .await
                .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))?;

            if status.is_client_error() {
                if let Ok(ErrorReply { message: Some(message) }) = serde_json::from_str(&body) {
                    return Ok(Outcome::failure(Some(message)));
                }
            }

            Err(SubmissionError::Http {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            })
        })
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}

fn email_subject(payload: &Payload) -> String {
    match payload.get(NAME_FIELD).map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Henvendelse fra {name}"),
        None => "Henvendelse fra nettsiden".to_string(),
    }
}

/// Renders the payload as the plain-text mail body, one `field: value` per
/// line in field-name order. Blank fields are skipped.
#[must_use]
pub fn render_email_text(payload: &Payload) -> String {
    let mut text = String::new();
    for (name, value) in payload.iter() {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let _ = writeln!(text, "{name}: {value}");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers exactly one request with `status` and `body`, then closes.
    /// Returns the endpoint URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind local listener");
        let addr = listener.local_addr().expect("listener address");

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request_complete(&request) {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/emails")
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let length = text[..head_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);
        request.len() >= head_end + 4 + length
    }

    fn sender_for(endpoint: String) -> ResendSender {
        ResendSender::new("key", "a@b.no", "c@d.no")
            .expect("valid configuration")
            .with_endpoint(endpoint)
    }

    fn sample_payload() -> Payload {
        [
            ("navn", "Kari Nordmann"),
            ("epost", "kari@example.no"),
            ("telefon", ""),
            ("melding", "Trenger ny sikringsboks"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn email_text_skips_blank_fields() {
        let text = render_email_text(&sample_payload());
        assert_eq!(
            text,
            "epost: kari@example.no\nmelding: Trenger ny sikringsboks\nnavn: Kari Nordmann\n"
        );
    }

    #[test]
    fn subject_names_the_sender() {
        assert_eq!(email_subject(&sample_payload()), "Henvendelse fra Kari Nordmann");
        assert_eq!(email_subject(&Payload::new()), "Henvendelse fra nettsiden");
    }

    #[test]
    fn blank_configuration_is_rejected() {
        let err = ResendSender::new("", "a@b.no", "c@d.no").unwrap_err();
        assert_eq!(err, SubmissionError::NotConfigured("API key".into()));
    }

    #[test]
    fn missing_env_var_is_not_configured() {
        let err = ResendSender::from_env("ALOK_SITE_TEST_UNSET_KEY", "a@b.no", "c@d.no")
            .unwrap_err();
        assert!(matches!(err, SubmissionError::NotConfigured(var) if var.contains("ALOK_SITE_TEST_UNSET_KEY")));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_fault() {
        let sender = ResendSender::new("key", "a@b.no", "c@d.no")
            .expect("valid configuration")
            .with_endpoint("http://127.0.0.1:9/emails");

        let result = sender.send(sample_payload()).await;
        assert!(matches!(result, Err(SubmissionError::Network(_))));
    }

    #[tokio::test]
    async fn accepted_mail_is_a_success() {
        let endpoint = serve_once("200 OK", r#"{"id":"49a3999c"}"#).await;
        let outcome = sender_for(endpoint)
            .send(sample_payload())
            .await
            .expect("accepted request");
        assert!(outcome.success);
    }

    #[tokio::test]
    async fn client_error_with_message_is_a_failure_outcome() {
        let endpoint = serve_once(
            "422 Unprocessable Entity",
            r#"{"statusCode":422,"name":"validation_error","message":"Invalid `to` field."}"#,
        )
        .await;

        let outcome = sender_for(endpoint)
            .send(sample_payload())
            .await
            .expect("a rejection is not a fault");
        assert!(!outcome.success);
        assert_eq!(outcome.failure_detail(), Some("Invalid `to` field."));
    }

    #[tokio::test]
    async fn server_error_is_an_http_fault() {
        let endpoint = serve_once("500 Internal Server Error", "upstream down").await;

        let result = sender_for(endpoint).send(sample_payload()).await;
        assert_eq!(
            result,
            Err(SubmissionError::Http {
                status: 500,
                body: "upstream down".into(),
            })
        );
    }
}
