/**
 * schema module
 *
 * - locator: namespace + resource pair per taxonomy variant
 * - resources: embedded / on-disk schema documents
 * - reader: RDF-Schema reader with Oxigraph
 * - query: SPARQL builders used by the reader
 * - vocab: RDF/RDFS/OWL/XSD IRIs
 */

pub mod definitions;
pub mod locator;
pub mod query;
pub mod reader;
pub mod resources;
pub mod vocab;

pub use definitions::{ClassDefinition, Labels, PropertyRecord, SchemaDefinitions};
pub use locator::{OwnedLocator, SchemaSourceLocator, StaticLocator, LOGISTICS};
pub use reader::{RdfsSchemaReader, SchemaSourceReader};
pub use resources::ResourceResolver;
pub use query::SparqlQuery;
