//! # Taxonomy Core - RDF-Schema class taxonomies
//!
//! Loads a domain class taxonomy (categories with typed properties) from an
//! RDF-Schema document, assembles it into an immutable tree, caches it and
//! answers structural queries against the cached tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐  cache miss  ┌─────────────┐      ┌──────────────────┐
//! │   TaxonomyService    │ ───────────▶ │ TreeBuilder │ ◀─── │ SchemaSource-    │
//! │ Arc<TaxonomyTree>    │ ◀─────────── │             │      │ Reader (oxigraph)│
//! └──────────────────────┘  new tree    └─────────────┘      └──────────────────┘
//! ```
//!
//! Each taxonomy variant is addressed by a [`SchemaSourceLocator`]
//! (namespace + resource path). The logistics base taxonomy ships embedded.
//!
//! ```no_run
//! use taxonomy_core::TaxonomyService;
//!
//! # fn main() -> taxonomy_core::Result<()> {
//! let service = TaxonomyService::logistics();
//! let location = service.get_category_by_class_name("Location")?;
//! assert!(location.map(|c| c.is_root()).unwrap_or(false));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod errors;
pub mod model;
pub mod schema;
pub mod service;

pub use builder::TreeBuilder;
pub use config::{TaxonomyConfig, VariantConfig};
pub use errors::{Result, TaxonomyError};
pub use model::{
    classify, CategoryId, CategoryInfo, PropertyDefinition, PropertyType, TaxonomyTree,
};
pub use schema::{
    RdfsSchemaReader, ResourceResolver, SchemaSourceLocator, SchemaSourceReader, LOGISTICS,
};
pub use service::{CategoryHandle, TaxonomyService, TaxonomyStats};
