//! Asset URL table
//!
//! Assets are resolved once, before mounting, so rendering never touches
//! the filesystem.

use std::collections::BTreeMap;
use std::rc::Rc;

use jetbizcard_core::{resolve_or_placeholder, AssetRef, AssetResolver, ResolvedAsset};

/// Image sources for every asset a card can show
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AssetUrls(Rc<BTreeMap<AssetRef, String>>);

impl AssetUrls {
    /// Resolve each asset, using the placeholder for any that fail.
    pub fn resolve<R, I>(resolver: &R, assets: I) -> Self
    where
        R: AssetResolver + ?Sized,
        I: IntoIterator<Item = AssetRef>,
    {
        let urls = assets
            .into_iter()
            .map(|asset| {
                let resolved = resolve_or_placeholder(resolver, &asset);
                (asset, resolved.url)
            })
            .collect();
        Self(Rc::new(urls))
    }

    /// URL for `asset`; the placeholder if it was never resolved.
    pub fn url(&self, asset: &AssetRef) -> String {
        self.0
            .get(asset)
            .cloned()
            .unwrap_or_else(|| ResolvedAsset::placeholder().url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetbizcard_core::{CardError, CardResult};

    struct OnlyLogo;

    impl AssetResolver for OnlyLogo {
        fn resolve(&self, asset: &AssetRef) -> CardResult<ResolvedAsset> {
            if asset.name == "logo" {
                Ok(ResolvedAsset {
                    mime: "image/png".to_string(),
                    url: "data:image/png;base64,AAAA".to_string(),
                })
            } else {
                Err(CardError::AssetNotFound(asset.name.clone()))
            }
        }
    }

    #[test]
    fn resolves_known_and_falls_back_for_missing() {
        let urls = AssetUrls::resolve(&OnlyLogo, [AssetRef::new("logo"), AssetRef::new("gone")]);
        assert_eq!(urls.url(&AssetRef::new("logo")), "data:image/png;base64,AAAA");
        assert_eq!(urls.url(&AssetRef::new("gone")), ResolvedAsset::placeholder().url);
    }

    #[test]
    fn unresolved_asset_uses_placeholder() {
        let urls = AssetUrls::default();
        assert_eq!(urls.url(&AssetRef::default()), ResolvedAsset::placeholder().url);
    }
}
