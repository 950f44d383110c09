//! Fixed markup of the authors block.
//!
//! No line in these fragments may be blank: Markdown ends a raw HTML block
//! at the first blank line.

/// Wrapper opening: icon stylesheet and card styles.
pub const SECTION_OPEN: &str = r#"<div class="authors-section">
<link href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" rel="stylesheet"/>
<style>
.authors-section {  margin-bottom:0px; }
.authors-list {  font-size: .75em; gap: 10px; }
.author-card { display: flex; align-items: center; }
.author-image { width: 4em; height: 4em; border-radius: 50%; margin:1em; margin-left:0; }
.author-icon { width: 1.5em; height: 1.5em; }
.author-name {  margin-bottom:0px;   font-weight: bold;}
.author-socials {  margin-bottom:0px; }
.author-bio { font-size: .75em; }
.author-list-title {margin-top:0 !important; margin-bottom:0 !important;}
</style>
"#;

pub const TITLE: &str = r#"<h6 class="author-list-title" >Authors</h6>"#;

pub const LIST_OPEN: &str = "<div class='authors-list'>";

pub const LIST_CLOSE: &str = "</div>";

/// Closes the wrapper and draws the divider.
pub const SECTION_CLOSE: &str = "</div><hr>";

/// Blank line ending the HTML block so the page's Markdown renders.
pub const SEPARATOR: &str = "\n\n";
