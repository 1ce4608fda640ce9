/**
 * model module
 *
 * - category: CategoryInfo node with index links
 * - tree: arena-backed TaxonomyTree and traversal
 * - property: PropertyDefinition + builder
 * - property_type: PropertyType and the ordered classification rules
 */

pub mod category;
pub mod property;
pub mod property_type;
pub mod tree;

pub use category::{CategoryId, CategoryInfo};
pub use property::{PropertyDefinition, PropertyDefinitionBuilder};
pub use property_type::{classify, classify_range, PropertyType};
pub use tree::{TaxonomyTree, Walk};
