use serde::{Deserialize, Deserializer};

/// Output of the render step for a single page
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageResults {
    /// Absolute URL the page was rendered at
    pub url: String,

    /// Anchors found in the rendered document, if the renderer collected any
    #[serde(default)]
    pub anchors: Option<Vec<Anchor>>,
}

/// A rendered `<a>` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Anchor {
    /// Raw `href` value; `None` when missing or not a string
    #[serde(default, deserialize_with = "deserialize_href")]
    pub href: Option<String>,
}

impl Anchor {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
        }
    }
}

/// Accepts any value for `href`, keeping it only when it is a string
fn deserialize_href<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawHref {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawHref::deserialize(deserializer)? {
        RawHref::Text(href) => Some(href),
        RawHref::Other(_) => None,
    })
}
