use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;

use crate::{
    foundation::{
        core::{FrameCount, FrameIndex},
        error::{MuxuError, MuxuResult},
    },
    http::UreqTransport,
};

/// Name of the sequence descriptor next to the frames.
pub const META_FILE: &str = "meta.json";

const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

/// Where the frames of a sequence live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetRoot {
    Dir(PathBuf),
    Http(HttpRoot),
}

/// Base URL plus the client every fetch under it goes through, so frame requests reuse
/// pooled connections. Clones share the pool.
#[derive(Clone, Debug)]
pub struct HttpRoot {
    base: String,
    http: UreqTransport,
}

impl HttpRoot {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_owned(),
            http: UreqTransport::new(HTTP_TIMEOUT),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, name: &str) -> String {
        format!("{}/{name}", self.base)
    }

    fn fetch(&self, name: &str) -> MuxuResult<Vec<u8>> {
        let url = self.url(name);
        let resp = self.http.get(&url)?;
        if !resp.is_success() {
            return Err(MuxuError::asset(format!("GET {url}: HTTP {}", resp.status)));
        }
        Ok(resp.body)
    }
}

impl PartialEq for HttpRoot {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl Eq for HttpRoot {}

impl AssetRoot {
    /// `http://` and `https://` locations are fetched over the network, anything else is a
    /// directory.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Http(HttpRoot::new(s))
        } else {
            Self::Dir(PathBuf::from(s))
        }
    }

    pub fn dir(path: impl AsRef<Path>) -> Self {
        Self::Dir(path.as_ref().to_path_buf())
    }

    /// Display location of `name` under this root.
    pub fn locate(&self, name: &str) -> String {
        match self {
            Self::Dir(dir) => dir.join(name).display().to_string(),
            Self::Http(root) => root.url(name),
        }
    }

    /// Read the full contents of `name`.
    pub fn read(&self, name: &str) -> MuxuResult<Vec<u8>> {
        match self {
            Self::Dir(dir) => {
                let path = dir.join(name);
                let bytes =
                    std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
                Ok(bytes)
            }
            Self::Http(root) => root.fetch(name),
        }
    }
}

impl std::fmt::Display for AssetRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dir(dir) => write!(f, "{}", dir.display()),
            Self::Http(root) => f.write_str(root.base()),
        }
    }
}

/// File name of frame `index`, clamped into the sequence: `frame_0000.jpg`.
pub fn frame_file_name(count: FrameCount, index: FrameIndex) -> String {
    let i = count.clamp(i64::from(index.0));
    format!("frame_{:04}.jpg", i.0)
}

/// Contents of `meta.json`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceMeta {
    pub frame_count: FrameCount,
}

pub fn parse_meta(bytes: &[u8]) -> MuxuResult<SequenceMeta> {
    serde_json::from_slice(bytes).map_err(|e| MuxuError::serde(format!("{META_FILE}: {e}")))
}

pub fn read_meta(root: &AssetRoot) -> MuxuResult<SequenceMeta> {
    parse_meta(&root.read(META_FILE)?)
}

/// Frame count announced by `meta.json`, or `default` when it cannot be read.
#[tracing::instrument(skip(default))]
pub fn resolve_frame_count(root: &AssetRoot, default: FrameCount) -> FrameCount {
    match read_meta(root) {
        Ok(meta) => meta.frame_count,
        Err(err) => {
            tracing::warn!(
                %err,
                fallback = default.get(),
                "sequence metadata unavailable; using default frame count"
            );
            default
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
