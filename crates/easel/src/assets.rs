//! Serves embedded assets to gpui.

use anyhow::Result;
use gpui::{AssetSource, SharedString};

/// Embedded asset provider implementing [`AssetSource`]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<std::borrow::Cow<'static, [u8]>>> {
        Ok(assets::Assets::get_asset(path))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let prefix = if path.is_empty() || path.ends_with('/') {
            path.to_string()
        } else {
            format!("{}/", path)
        };

        let items = assets::Assets::list()
            .filter_map(|asset_path| {
                let rest = asset_path.strip_prefix(prefix.as_str())?;
                let name = rest.split('/').next().unwrap_or("");
                (!name.is_empty()).then(|| SharedString::from(name.to_string()))
            })
            .collect();

        Ok(items)
    }
}
