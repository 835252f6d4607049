//! Read-only listing model as delivered by the classified-ads API.

use serde::{Deserialize, Deserializer};
use serde_json::Number;
use std::collections::BTreeMap;

/// A classified-ad listing.
///
/// Missing or `null` text fields deserialize as empty strings; identifiers are
/// accepted as JSON strings or integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    /// Opaque listing identifier used to build the canonical URL.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Listing title.
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    /// Seller identifier.
    #[serde(deserialize_with = "optional_string_or_number")]
    pub seller_id: Option<String>,
    /// Free-form description.
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
    /// Structured price.
    pub price_detailed: Option<PriceDetailed>,
    /// Location data.
    pub geo: Option<Geo>,
    /// Photos in display order.
    #[serde(deserialize_with = "nullable_vec")]
    pub images: Vec<Image>,
}

/// Structured price block of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriceDetailed {
    /// Numeric price value.
    pub value: Option<Number>,
}

/// Location block of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Geo {
    /// Human readable address.
    pub formatted_address: Option<String>,
}

/// One photo: resolution label (`"WxH"`) to URL.
///
/// Variants are kept sorted by label so selection is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Image {
    variants: BTreeMap<String, String>,
}

impl Listing {
    /// Canonical listing URL: `base` followed by the identifier.
    pub fn canonical_url(&self, base: &str) -> String {
        format!("{base}{}", self.id)
    }

    /// The nested `priceDetailed.value`, if present.
    pub fn price(&self) -> Option<&Number> {
        self.price_detailed.as_ref()?.value.as_ref()
    }

    /// The formatted address, if present.
    pub fn address(&self) -> Option<&str> {
        self.geo.as_ref()?.formatted_address.as_deref()
    }
}

impl Image {
    /// Creates an image from `(label, url)` pairs.
    pub fn new<I, K, V>(variants: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        variants.into_iter().collect()
    }

    /// Iterates variants in ascending label order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variants.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the image has no variants at all.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Image {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            variants: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(Number),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_string_or_number(deserializer)?.unwrap_or_default())
}

fn optional_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(StringOrNumber::into_string))
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_vec<'de, D: Deserializer<'de>, T: Deserialize<'de>>(
    deserializer: D,
) -> Result<Vec<T>, D::Error> {
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
