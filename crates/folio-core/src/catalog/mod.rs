//! Logo catalog: asset references in, filtered and sorted display items out.
//!
//! [`build_catalog`] is pure. Assets whose display name is not allowed are
//! dropped without error; a missing logo shows up only as a missing entry.

mod allow_list;
mod collate;
mod filter;

pub use allow_list::AllowList;
pub use collate::SortOrder;
pub use filter::filter_and_sort;

use crate::normalize::normalize;
use serde::Serialize;

/// A logo asset as found by discovery: its path and the reference to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRef {
    pub path: String,
    pub url: String,
}

impl AssetRef {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// A display name paired with its logo reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub name: String,
    pub logo: String,
}

impl CatalogItem {
    pub fn from_asset(asset: &AssetRef) -> Self {
        Self {
            name: normalize(&asset.path),
            logo: asset.url.clone(),
        }
    }
}

/// Ordered, filtered catalog items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Builds the catalog with the default [`SortOrder::Locale`] ordering.
pub fn build_catalog(assets: &[AssetRef], allow: &AllowList) -> Catalog {
    build_catalog_with(assets, allow, SortOrder::default())
}

/// Normalizes every asset path, keeps allowed non-empty names, and stable-sorts by name.
///
/// Duplicates are kept: two assets normalizing to the same allowed name both
/// appear, in input order.
pub fn build_catalog_with(assets: &[AssetRef], allow: &AllowList, order: SortOrder) -> Catalog {
    let candidates = assets.iter().map(CatalogItem::from_asset);
    let items = filter_and_sort(
        candidates,
        |item| {
            let allowed = !item.name.is_empty() && allow.contains(&item.name);
            if !allowed {
                tracing::debug!(name = %item.name, logo = %item.logo, "logo not in allow-list");
            }
            allowed
        },
        |item| item.name.as_str(),
        order,
    );
    tracing::debug!(
        "catalog built: {} of {} assets kept",
        items.len(),
        assets.len()
    );
    Catalog { items }
}
