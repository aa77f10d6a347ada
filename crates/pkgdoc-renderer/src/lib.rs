//! Comment, declaration and navigation rendering for package documentation.
//!
//! Every function here is pure: it reads only its arguments and immutable
//! process-wide tables, so renders may run concurrently.
//!
//! # Components
//!
//! - [`url_path`]: escape an arbitrary string as a URL path
//! - [`relative_time`]: coarse "N minutes ago" ages
//! - [`CommentRenderer`]: doc comments to HTML or wrapped text, on top of an
//!   injected [`CommentMarkup`] engine
//! - [`decl_html`]: declarations with cross-reference links
//! - [`breadcrumbs_html`]: linked import path trails
//! - [`collect_examples`] and [`example_id`]: example listing and anchors
//!
//! # Example
//!
//! ```
//! use pkgdoc_renderer::{CommentRenderer, breadcrumbs_html};
//!
//! let html = CommentRenderer::default().html("Implements RFC 1952.");
//! assert!(html.contains(r#"<a href="http://tools.ietf.org/html/rfc1952">RFC 1952</a>"#));
//!
//! let crumbs = breadcrumbs_html("github.com/user/repo/sub", "github.com/user/repo".len());
//! assert!(crumbs.ends_with("/sub"));
//! ```

mod breadcrumbs;
mod comment;
mod decl;
mod escape;
mod examples;
pub mod markup;
mod paths;
mod time;
mod url;

pub use breadcrumbs::{Crumb, STD_PACKAGES_PATH, breadcrumbs, breadcrumbs_html};
pub use comment::{CommentRenderer, DEFAULT_INDENT, DEFAULT_WIDTH};
pub use decl::decl_html;
pub use escape::escape_html;
pub use examples::{EXAMPLE_ID_PREFIX, OwnerIdent, collect_examples, example_id, example_ref_id};
pub use markup::{CommentMarkup, GodocMarkup, MarkdownMarkup};
pub use paths::{command_name, import_path_html, relative_import_path};
pub use time::{Clock, FixedClock, SystemClock, relative_time};
pub use url::url_path;
