//! Image assets - references, resolution and the broken-image placeholder.
//!
//! Render functions only carry an [`AssetRef`]. Turning it into something
//! a webview can display is the job of an [`AssetResolver`], which the
//! host calls once per asset before mounting the card.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Name of the bundled profile picture
pub const PROFILE_IMAGE: &str = "profile_image";

/// File extensions tried, in order, when looking an asset up on disk
pub const ASSET_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "svg"];

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" fill="#e0e0e0"/><path d="M8 52 L24 30 L34 42 L42 34 L56 52 Z" fill="#9e9e9e"/><circle cx="44" cy="18" r="6" fill="#9e9e9e"/><path d="M4 4 L60 60" stroke="#bdbdbd" stroke-width="3"/></svg>"##;

/// Reference to an image resource by name, without extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetRef {
    pub name: String,
}

impl AssetRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// True if the name is a single file name that cannot leave the
    /// assets directory once joined onto it.
    pub fn is_plain_name(&self) -> bool {
        let name = self.name.as_str();
        !name.trim().is_empty()
            && !name.contains(['/', '\\', ':'])
            && !name.contains("..")
            && !Path::new(name).is_absolute()
    }
}

impl Default for AssetRef {
    fn default() -> Self {
        Self::new(PROFILE_IMAGE)
    }
}

/// An asset ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// MIME type, e.g. `image/png`
    pub mime: String,
    /// `data:` URI usable as an `img` source
    pub url: String,
}

impl ResolvedAsset {
    fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self {
            mime: mime.to_string(),
            url: format!("data:{};base64,{}", mime, encoded),
        }
    }

    /// The image shown when an asset cannot be resolved.
    pub fn placeholder() -> Self {
        Self::from_bytes("image/svg+xml", PLACEHOLDER_SVG.as_bytes())
    }
}

/// Resolves asset references into displayable images.
pub trait AssetResolver {
    fn resolve(&self, asset: &AssetRef) -> CardResult<ResolvedAsset>;
}

/// Resolve `asset`, substituting the placeholder on failure.
pub fn resolve_or_placeholder<R: AssetResolver + ?Sized>(
    resolver: &R,
    asset: &AssetRef,
) -> ResolvedAsset {
    match resolver.resolve(asset) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::warn!("Falling back to placeholder for '{}': {}", asset.name, e);
            ResolvedAsset::placeholder()
        }
    }
}

/// Assets read from a directory on disk.
#[derive(Debug, Clone)]
pub struct BundledAssets {
    root: PathBuf,
}

impl BundledAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn find(&self, asset: &AssetRef) -> CardResult<(PathBuf, &'static str)> {
        if !asset.is_plain_name() {
            return Err(CardError::InvalidContent(format!(
                "asset name '{}' is not a plain file name",
                asset.name
            )));
        }
        ASSET_EXTENSIONS
            .iter()
            .find_map(|ext| {
                let path = self.root.join(format!("{}.{}", asset.name, ext));
                path.is_file().then_some((path, *ext))
            })
            .ok_or_else(|| CardError::AssetNotFound(asset.name.clone()))
    }
}

impl AssetResolver for BundledAssets {
    fn resolve(&self, asset: &AssetRef) -> CardResult<ResolvedAsset> {
        let (path, ext) = self.find(asset)?;
        let bytes = fs::read(&path)?;

        let mime = if ext == "svg" {
            "image/svg+xml"
        } else {
            image::guess_format(&bytes)
                .map_err(|_| CardError::UnsupportedAsset(path.display().to_string()))?
                .to_mime_type()
        };

        tracing::debug!(asset = %asset.name, mime, bytes = bytes.len(), "Resolved asset");
        Ok(ResolvedAsset::from_bytes(mime, &bytes))
    }
}
