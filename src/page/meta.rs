//! Page metadata from YAML (`---`) or TOML (`+++`) front matter.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Author ids declared by a page: `authors: alice` or `authors: [alice, bob]`.
///
/// Ids are matched against registry keys as text, so scalar ids of any kind
/// (`authors: 123`) are kept in their string form. Null and nested entries
/// cannot name an author and are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthorRefs {
    One(String),
    Many(Vec<String>),
}

impl AuthorRefs {
    /// Ids in declared order; a single id becomes a one-element sequence.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        let ids = match self {
            Self::One(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids.as_slice(),
        };
        ids.iter().map(String::as_str)
    }
}

impl Default for AuthorRefs {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<'de> Deserialize<'de> for AuthorRefs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AuthorRefsVisitor;

        impl<'de> Visitor<'de> for AuthorRefsVisitor {
            type Value = AuthorRefs;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an author id or a list of author ids")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<AuthorRefs, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut ids = Vec::new();
                while let Some(AuthorId(id)) = seq.next_element()? {
                    ids.extend(id);
                }
                Ok(AuthorRefs::Many(ids))
            }

            fn visit_map<M>(self, map: M) -> Result<AuthorRefs, M::Error>
            where
                M: MapAccess<'de>,
            {
                skip_map(map)?;
                Ok(AuthorRefs::default())
            }

            fn visit_unit<E: de::Error>(self) -> Result<AuthorRefs, E> {
                Ok(AuthorRefs::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<AuthorRefs, E> {
                Ok(AuthorRefs::default())
            }

            fn visit_some<D>(self, deserializer: D) -> Result<AuthorRefs, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<AuthorRefs, E> {
                Ok(AuthorRefs::One(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<AuthorRefs, E> {
                Ok(AuthorRefs::One(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<AuthorRefs, E> {
                Ok(AuthorRefs::One(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<AuthorRefs, E> {
                Ok(AuthorRefs::One(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<AuthorRefs, E> {
                Ok(AuthorRefs::One(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<AuthorRefs, E> {
                Ok(AuthorRefs::One(v.to_string()))
            }
        }

        deserializer.deserialize_any(AuthorRefsVisitor)
    }
}

/// One list entry: scalars become text, anything else is `None`.
struct AuthorId(Option<String>);

impl<'de> Deserialize<'de> for AuthorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AuthorIdVisitor;

        impl<'de> Visitor<'de> for AuthorIdVisitor {
            type Value = Option<String>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an author id")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Option<String>, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(None)
            }

            fn visit_map<M>(self, map: M) -> Result<Option<String>, M::Error>
            where
                M: MapAccess<'de>,
            {
                skip_map(map)?;
                Ok(None)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Option<String>, E> {
                Ok(None)
            }

            fn visit_none<E: de::Error>(self) -> Result<Option<String>, E> {
                Ok(None)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Option<String>, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Option<String>, E> {
                Ok(Some(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Option<String>, E> {
                Ok(Some(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Option<String>, E> {
                Ok(Some(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Option<String>, E> {
                Ok(Some(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Option<String>, E> {
                Ok(Some(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Option<String>, E> {
                Ok(Some(v.to_string()))
            }
        }

        deserializer.deserialize_any(AuthorIdVisitor).map(AuthorId)
    }
}

fn skip_map<'de, M>(mut map: M) -> Result<(), M::Error>
where
    M: MapAccess<'de>,
{
    while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
    Ok(())
}

/// Deserialize a present `authors` key.
///
/// Only called when the key exists, so `None` on the field always means
/// "no `authors` key"; `authors: ~` is present but empty.
fn deserialize_authors<'de, D>(deserializer: D) -> Result<Option<AuthorRefs>, D::Error>
where
    D: Deserializer<'de>,
{
    AuthorRefs::deserialize(deserializer).map(Some)
}

/// Page metadata consumed by the authors plugin.
///
/// Other front-matter keys are ignored and left in the page untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    #[serde(
        deserialize_with = "deserialize_authors",
        skip_serializing_if = "Option::is_none"
    )]
    pub authors: Option<AuthorRefs>,
}
