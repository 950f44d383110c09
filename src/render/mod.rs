//! Author block rendering.
//!
//! [`annotate`] prepends the authors block to a page's Markdown:
//!
//! ```text
//! <div class="authors-section"> + <style>     (always)
//! <h6 ...>Authors</h6>                        (always)
//! <div class='authors-list'> cards </div>     (only if the page has `authors`)
//! </div><hr>                                  (always)
//! page markdown
//! ```
//!
//! Rendering is pure: no IO, no logging beyond `--verbose` lookups.

mod template;

use crate::author::{AuthorRecord, AuthorRegistry, SocialLink};
use crate::page::AuthorRefs;
use crate::utils::html::escape_attr;

/// Prepend the authors block to `markdown`.
///
/// `authors` is `None` when the page has no `authors` key; the wrapper is
/// still emitted, without the author list. Unknown ids are skipped.
///
/// The result is the block, then a blank line (`"\n\n"`), then `markdown`
/// unchanged. Those two newlines are added on top of the block itself so
/// that Markdown renderers end the raw HTML block before the page content.
pub fn annotate(markdown: &str, authors: Option<&AuthorRefs>, registry: &AuthorRegistry) -> String {
    let block = render_block(authors, registry);
    let mut out = String::with_capacity(block.len() + template::SEPARATOR.len() + markdown.len());
    out.push_str(&block);
    out.push_str(template::SEPARATOR);
    out.push_str(markdown);
    out
}

/// Render the authors block alone.
pub fn render_block(authors: Option<&AuthorRefs>, registry: &AuthorRegistry) -> String {
    let mut html = String::from(template::SECTION_OPEN);
    html.push_str(template::TITLE);

    if let Some(refs) = authors {
        html.push_str(template::LIST_OPEN);
        for author in registry.resolve(refs.ids()) {
            html.push_str(&render_card(author));
        }
        html.push_str(template::LIST_CLOSE);
    }

    html.push_str(template::SECTION_CLOSE);
    html
}

/// Render one author card.
///
/// `name` and `bio` are inserted as-is; attribute values are escaped.
pub fn render_card(author: &AuthorRecord) -> String {
    format!(
        r#"
<div class="author-card">
<img class="author-image" alt="{alt} image" src="{img}">
<div>
<div>
<p class="author-name">{name}</p>
<p class="author-bio">{bio}</p>
</div>
<section class="author-socials">{socials}</section>
</div>
</div>"#,
        alt = escape_attr(&author.name),
        img = escape_attr(&author.img),
        name = author.name,
        bio = author.bio,
        socials = render_socials(&author.socials),
    )
}

/// Render social icon anchors in declared order.
fn render_socials(socials: &[SocialLink]) -> String {
    socials
        .iter()
        .map(|social| {
            format!(
                r#"<a class="author-icon" target="_blank" href="{link}" title="{title}"><i class="{icon}"></i></a>"#,
                link = escape_attr(&social.link),
                title = escape_attr(&social.name),
                icon = escape_attr(&social.icon),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORS: &str = r#"
alice:
  name: Alice
  img: https://example.com/alice.png
  bio: Keeps the lights on.
  socials:
    - name: GitHub
      icon: fa-brands fa-github
      link: https://github.com/alice
    - name: Mastodon
      icon: fa-brands fa-mastodon
      link: https://fosstodon.org/@alice
bob:
  name: Bob
  img: bob.png
  bio: Writes guides.
"#;

    fn registry() -> AuthorRegistry {
        AuthorRegistry::from_yaml_str(AUTHORS).unwrap()
    }

    fn one(id: &str) -> AuthorRefs {
        AuthorRefs::One(id.to_string())
    }

    fn many(ids: &[&str]) -> AuthorRefs {
        AuthorRefs::Many(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_no_authors_key_emits_wrapper_without_list() {
        let out = annotate("# Page\n", None, &registry());

        let expected_block = format!(
            "{}{}{}",
            template::SECTION_OPEN,
            template::TITLE,
            template::SECTION_CLOSE
        );
        assert_eq!(out, format!("{expected_block}\n\n# Page\n"));
        assert!(!out.contains("authors-list"));
        assert!(!out.contains("author-card"));
    }

    #[test]
    fn test_empty_authors_list_emits_empty_list() {
        let out = annotate("body", Some(&many(&[])), &registry());
        assert!(out.contains("<div class='authors-list'></div></div><hr>"));
        assert!(!out.contains("author-card"));
    }

    #[test]
    fn test_single_author() {
        let out = annotate("body", Some(&one("alice")), &registry());

        assert_eq!(out.matches(r#"<div class="author-card">"#).count(), 1);
        assert!(out.contains(r#"<p class="author-name">Alice</p>"#));
        assert!(out.contains(r#"<p class="author-bio">Keeps the lights on.</p>"#));
        assert!(out.contains(r#"src="https://example.com/alice.png""#));
        assert!(out.contains(r#"alt="Alice image""#));
        assert_eq!(out.matches(r#"<a class="author-icon""#).count(), 2);
        assert!(out.ends_with("\n\nbody"));
    }

    #[test]
    fn test_social_link_markup() {
        let out = annotate("", Some(&one("alice")), &registry());
        assert!(out.contains(
            r#"<a class="author-icon" target="_blank" href="https://github.com/alice" title="GitHub"><i class="fa-brands fa-github"></i></a>"#
        ));
    }

    #[test]
    fn test_socials_keep_declared_order() {
        let out = annotate("", Some(&one("alice")), &registry());
        let github = out.find("title=\"GitHub\"").unwrap();
        let mastodon = out.find("title=\"Mastodon\"").unwrap();
        assert!(github < mastodon);
    }

    #[test]
    fn test_unknown_author_skipped() {
        let out = annotate("body", Some(&many(&["alice", "ghost"])), &registry());
        assert_eq!(out.matches(r#"<div class="author-card">"#).count(), 1);
        assert!(out.contains("Alice"));
        assert!(!out.contains("ghost"));
    }

    #[test]
    fn test_cards_keep_declared_order() {
        let out = annotate("", Some(&many(&["bob", "alice"])), &registry());
        let bob = out.find(r#"<p class="author-name">Bob</p>"#).unwrap();
        let alice = out.find(r#"<p class="author-name">Alice</p>"#).unwrap();
        assert!(bob < alice);
    }

    #[test]
    fn test_author_without_socials() {
        let out = annotate("", Some(&one("bob")), &registry());
        assert!(out.contains(r#"<section class="author-socials"></section>"#));
    }

    #[test]
    fn test_deterministic_output() {
        let registry = registry();
        let refs = many(&["alice", "bob"]);
        assert_eq!(
            annotate("# Same", Some(&refs), &registry),
            annotate("# Same", Some(&refs), &registry)
        );
    }

    #[test]
    fn test_not_idempotent_on_own_output() {
        let registry = registry();
        let once = annotate("x", None, &registry);
        let twice = annotate(&once, None, &registry);
        assert_eq!(twice.matches(r#"<div class="authors-section">"#).count(), 2);
    }

    #[test]
    fn test_attribute_values_escaped() {
        let registry = AuthorRegistry::from_yaml_str(
            "eve:\n  name: 'Eve \"E\" Doe'\n  img: a.png\n  socials:\n    - name: Site\n      icon: fa\n      link: 'https://e.dev/?a=1&b=2'\n",
        )
        .unwrap();
        let out = annotate("", Some(&one("eve")), &registry);
        assert!(out.contains(r#"alt="Eve &quot;E&quot; Doe image""#));
        assert!(out.contains(r#"<p class="author-name">Eve "E" Doe</p>"#));
        assert!(out.contains(r#"href="https://e.dev/?a=1&amp;b=2""#));
    }

    #[test]
    fn test_block_has_no_blank_lines() {
        let block = render_block(Some(&many(&["alice", "bob"])), &registry());
        assert!(!block.contains("\n\n"));
    }

    #[test]
    fn test_annotate_inserts_only_block_and_blank_line() {
        let refs = one("alice");
        let out = annotate("# Page\n", Some(&refs), &registry());
        assert_eq!(out, format!("{}\n\n# Page\n", render_block(Some(&refs), &registry())));
    }
}
