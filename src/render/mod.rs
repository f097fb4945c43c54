//! Rendering module for turning parsed documents into styled output.

mod grouping;
mod html;
mod inline;
mod json;
mod options;
mod result;
mod styles;

pub use grouping::{group_lists, RenderUnit};
pub use html::{escape_html, to_html, to_html_with_stats, HtmlRenderer};
pub use inline::{format_inline, InlineFormatter, InlinePass};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
pub use styles::Styles;
