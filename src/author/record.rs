//! Author profile records as stored in `authors.yaml`.

use serde::{Deserialize, Serialize};

/// One author's public profile.
///
/// # Fields
///
/// | Field     | Type              | Description                       |
/// |-----------|-------------------|-----------------------------------|
/// | `name`    | `String`          | Display name                      |
/// | `img`     | `String`          | Profile image URL or relative path |
/// | `bio`     | `String`          | Free-text bio (may hold inline HTML) |
/// | `socials` | `Vec<SocialLink>` | Outbound profile links, in order  |
///
/// Every field defaults to empty when absent, so a partial entry still
/// renders a card instead of aborting the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorRecord {
    pub name: String,
    pub img: String,
    pub bio: String,
    #[serde(deserialize_with = "deserialize_socials")]
    pub socials: Vec<SocialLink>,
}

/// One outbound profile link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Human-readable label, used as tooltip text.
    pub name: String,
    /// Icon CSS class (e.g. `fa-brands fa-github`).
    pub icon: String,
    /// Target URL.
    pub link: String,
}

/// Deserialize socials, treating `null` as empty vec
fn deserialize_socials<'de, D>(deserializer: D) -> Result<Vec<SocialLink>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<SocialLink>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
