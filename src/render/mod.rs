//! Rendering module for converting parsed content to HTML fragments.

mod html;
mod inline;

pub use html::HtmlRenderer;
pub use inline::{escape_html, unescape_html, InlineFormatter};
