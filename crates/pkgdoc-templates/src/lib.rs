//! Template execution for rendered package documentation.
//!
//! [`TemplateRegistry`] owns a parsed template set with the rendering helpers
//! bound under the names templates use (`comment`, `decl`, `breadcrumbs`,
//! `examples`, `exampleId`, ...). [`TemplateRegistry::execute`] renders one
//! template and writes content type, status and body to a [`ResponseSink`].
//!
//! # Example
//!
//! ```
//! use pkgdoc_doc::{DocItem, Package};
//! use pkgdoc_templates::{BufferedResponse, RegistryConfig, TemplateRegistry, TemplateSource};
//!
//! let source = TemplateSource::Memory(vec![(
//!     "crumbs.html".to_owned(),
//!     "{{ breadcrumbs(data) }}".to_owned(),
//! )]);
//! let registry = TemplateRegistry::load(RegistryConfig::new(source))?;
//!
//! let pkg = Package { import_path: "fmt".to_owned(), ..Package::default() };
//! let mut response = BufferedResponse::default();
//! registry.execute(&mut response, "crumbs.html", 200, &DocItem::Package(&pkg))?;
//!
//! assert_eq!(response.content_type, Some("text/html; charset=utf-8"));
//! assert!(response.body_str().ends_with("</a> fmt"));
//! # Ok::<(), pkgdoc_templates::TemplateError>(())
//! ```

mod content_type;
mod error;
mod helpers;
mod registry;
mod response;

pub use content_type::content_type_for;
pub use error::TemplateError;
pub use helpers::{HelperError, build_map};
pub use registry::{RegistryConfig, TemplateRegistry, TemplateSource};
pub use response::{BufferedResponse, ResponseSink, WriterResponse};
