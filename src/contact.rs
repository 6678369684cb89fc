//! Contact form validation and challenge-token verification.

use crate::{
    foundation::error::{MuxuError, MuxuResult},
    http::HttpTransport,
};

/// Verification endpoint of the challenge widget embedded in the form.
pub const SITEVERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Environment variable holding the server-side challenge secret.
pub const SECRET_ENV: &str = "TURNSTILE_SECRET_KEY";

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: Option<String>,
    pub country_code: Option<String>,
    pub message: Option<String>,
    pub turnstile_token: Option<String>,
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl ContactForm {
    /// Required fields and presence of a challenge token.
    pub fn validate(&self) -> MuxuResult<()> {
        if blank(&self.name) || blank(&self.surname) || blank(&self.email) {
            return Err(MuxuError::contact("missing required fields"));
        }
        if self.token().is_none() {
            return Err(MuxuError::contact("CAPTCHA verification required"));
        }
        Ok(())
    }

    fn token(&self) -> Option<&str> {
        self.turnstile_token.as_deref().filter(|t| !blank(t))
    }

    /// `"<code> <phone>"`, or `"Not provided"`.
    pub fn formatted_phone(&self) -> String {
        match self.phone.as_deref().filter(|p| !blank(p)) {
            Some(phone) => format!("{} {phone}", self.country_code.as_deref().unwrap_or("")),
            None => "Not provided".to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.trim(), self.surname.trim())
    }
}

#[derive(serde::Deserialize)]
struct VerifyResponse {
    success: bool,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// Server-side check of a challenge token.
pub struct ChallengeVerifier<T> {
    endpoint: String,
    secret: Option<String>,
    transport: T,
}

impl<T: HttpTransport> ChallengeVerifier<T> {
    pub fn new(endpoint: impl Into<String>, secret: Option<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            secret,
            transport,
        }
    }

    /// Verifier against the public endpoint with the secret from [`SECRET_ENV`].
    pub fn from_env(transport: T) -> Self {
        let secret = std::env::var(SECRET_ENV).ok().filter(|s| !blank(s));
        Self::new(SITEVERIFY_URL, secret, transport)
    }

    /// Whether `token` is accepted. A missing secret, transport error or malformed reply all
    /// count as rejection.
    pub fn verify(&self, token: &str) -> bool {
        let Some(secret) = &self.secret else {
            tracing::error!("{SECRET_ENV} not configured");
            return false;
        };
        let resp = match self
            .transport
            .post_form(&self.endpoint, &[("secret", secret.as_str()), ("response", token)])
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%err, "challenge verification request failed");
                return false;
            }
        };
        match serde_json::from_slice::<VerifyResponse>(&resp.body) {
            Ok(v) => {
                if !v.success {
                    tracing::info!(codes = ?v.error_codes, "challenge token rejected");
                }
                v.success
            }
            Err(err) => {
                tracing::warn!(%err, status = resp.status, "malformed verification response");
                false
            }
        }
    }
}

/// Validate `form` and verify its challenge token.
#[tracing::instrument(skip_all, fields(email = %form.email))]
pub fn accept<T: HttpTransport>(
    form: &ContactForm,
    verifier: &ChallengeVerifier<T>,
) -> MuxuResult<()> {
    form.validate()?;
    let token = form
        .token()
        .ok_or_else(|| MuxuError::contact("CAPTCHA verification required"))?;
    if !verifier.verify(token) {
        return Err(MuxuError::contact("CAPTCHA verification failed"));
    }
    tracing::info!(name = %form.full_name(), "contact form accepted");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/contact.rs"]
mod tests;
