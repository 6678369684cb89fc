//! Minimal blocking HTTP seam shared by the checkout and contact clients.

use std::time::Duration;

use anyhow::Context;

use crate::foundation::error::MuxuResult;

/// Status and raw body of a finished request. Non-2xx statuses are not errors here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpTransport {
    fn post_json(&self, url: &str, body: &[u8]) -> MuxuResult<HttpResponse>;

    /// `application/x-www-form-urlencoded` POST.
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> MuxuResult<HttpResponse>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn post_json(&self, url: &str, body: &[u8]) -> MuxuResult<HttpResponse> {
        (**self).post_json(url, body)
    }

    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> MuxuResult<HttpResponse> {
        (**self).post_form(url, fields)
    }
}

#[derive(Clone, Debug)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }

    pub fn get(&self, url: &str) -> MuxuResult<HttpResponse> {
        let resp = self
            .agent
            .get(url)
            .call()
            .with_context(|| format!("GET {url}"))?;
        Self::finish(url, resp)
    }

    fn finish(url: &str, mut resp: ureq::http::Response<ureq::Body>) -> MuxuResult<HttpResponse> {
        let status = resp.status().as_u16();
        let body = resp
            .body_mut()
            .read_to_vec()
            .with_context(|| format!("read response body from {url}"))?;
        tracing::debug!(url, status, bytes = body.len(), "http response");
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for UreqTransport {
    fn post_json(&self, url: &str, body: &[u8]) -> MuxuResult<HttpResponse> {
        let resp = self
            .agent
            .post(url)
            .header("Content-Type", "application/json")
            .send(body)
            .with_context(|| format!("POST {url}"))?;
        Self::finish(url, resp)
    }

    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> MuxuResult<HttpResponse> {
        let resp = self
            .agent
            .post(url)
            .send_form(fields.iter().copied())
            .with_context(|| format!("POST {url}"))?;
        Self::finish(url, resp)
    }
}
