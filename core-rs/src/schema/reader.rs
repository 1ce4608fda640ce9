/**
 * reader.rs
 * RDF-Schema source reader backed by an in-memory Oxigraph store
 */

use oxigraph::io::RdfFormat;
use oxigraph::model::Term;
use oxigraph::sparql::{QueryResults, QuerySolution};
use oxigraph::store::Store;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::errors::{Result, TaxonomyError};
use crate::schema::definitions::{ClassDefinition, Labels, PropertyRecord, SchemaDefinitions};
use crate::schema::locator::SchemaSourceLocator;
use crate::schema::query::SparqlQuery;
use crate::schema::resources::ResourceResolver;

/// Produces raw class and property definitions for a taxonomy variant.
pub trait SchemaSourceReader: Send + Sync {
    fn read(&self, locator: &dyn SchemaSourceLocator) -> Result<SchemaDefinitions>;
}

/// Reads RDF-Schema documents (Turtle, N-Triples or RDF/XML).
#[derive(Debug, Clone)]
pub struct RdfsSchemaReader {
    resources: ResourceResolver,
}

impl Default for RdfsSchemaReader {
    fn default() -> Self {
        Self::new(ResourceResolver::embedded())
    }
}

impl RdfsSchemaReader {
    pub fn new(resources: ResourceResolver) -> Self {
        Self { resources }
    }

    /// Parse `content` and extract its definitions.
    pub fn read_document(&self, content: &str, format: RdfFormat) -> Result<SchemaDefinitions> {
        let store = Store::new().map_err(|e| TaxonomyError::Store(e.to_string()))?;

        store
            .load_from_reader(format, content.as_bytes())
            .map_err(|e| TaxonomyError::SchemaParse(e.to_string()))?;

        let annotations = collect_annotations(&store)?;
        let classes = collect_classes(&store, &annotations)?;
        let properties = collect_properties(&store, &annotations)?;

        Ok(SchemaDefinitions { classes, properties })
    }
}

impl SchemaSourceReader for RdfsSchemaReader {
    fn read(&self, locator: &dyn SchemaSourceLocator) -> Result<SchemaDefinitions> {
        let resource_path = locator.resource_path();
        debug!(resource = resource_path, namespace = locator.namespace(), "reading schema source");

        let content = self.resources.read(resource_path)?;
        let definitions = self
            .read_document(&content, format_for(resource_path))
            .map_err(|e| match e {
                TaxonomyError::SchemaParse(msg) => {
                    TaxonomyError::SchemaParse(format!("{}: {}", resource_path, msg))
                }
                other => other,
            })?;

        debug!(
            resource = resource_path,
            classes = definitions.classes.len(),
            properties = definitions.properties.len(),
            "schema source read"
        );
        Ok(definitions)
    }
}

/// Serialization picked from the resource's file extension; Turtle otherwise.
pub fn format_for(resource_path: &str) -> RdfFormat {
    let extension = Path::new(resource_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("nt") => RdfFormat::NTriples,
        Some("rdf") | Some("owl") | Some("xml") => RdfFormat::RdfXml,
        _ => RdfFormat::Turtle,
    }
}

/// Labels and comments gathered per subject before picking per-language values.
#[derive(Debug, Default)]
struct Annotations {
    labels: Vec<(String, String)>,
    comments: Vec<(String, String)>,
}

impl Annotations {
    fn resolve(&self) -> Labels {
        Labels {
            english: pick(&self.labels, &["en"]).or_else(|| pick(&self.labels, &[""])),
            norwegian: pick(&self.labels, &["no", "nb"]),
            description: pick(&self.comments, &["en"]).or_else(|| pick(&self.comments, &[""])),
        }
    }
}

/// First value tagged with one of `languages`, in preference order. An exact
/// tag beats a regional subtag (`en` before `en-GB`).
fn pick(values: &[(String, String)], languages: &[&str]) -> Option<String> {
    languages.iter().find_map(|wanted| {
        values
            .iter()
            .find(|(lang, _)| lang.eq_ignore_ascii_case(wanted))
            .or_else(|| values.iter().find(|(lang, _)| is_subtag_of(lang, wanted)))
            .map(|(_, value)| value.clone())
    })
}

/// `en-GB` is a subtag of `en`; the untagged wildcard has no subtags.
fn is_subtag_of(tag: &str, language: &str) -> bool {
    !language.is_empty()
        && tag.len() > language.len()
        && tag.as_bytes()[language.len()] == b'-'
        && tag[..language.len()].eq_ignore_ascii_case(language)
}

fn run_select(store: &Store, query: &SparqlQuery) -> Result<Vec<QuerySolution>> {
    let results = store
        .query(query.as_str())
        .map_err(|e| TaxonomyError::Query(e.to_string()))?;

    match results {
        QueryResults::Solutions(solutions) => solutions
            .map(|solution| solution.map_err(|e| TaxonomyError::Query(e.to_string())))
            .collect(),
        _ => Err(TaxonomyError::Query(
            "Expected SELECT solutions".to_string(),
        )),
    }
}

fn iri(solution: &QuerySolution, var: &str) -> Option<String> {
    match solution.get(var) {
        Some(Term::NamedNode(node)) => Some(node.as_str().to_string()),
        _ => None,
    }
}

fn literal(solution: &QuerySolution, var: &str) -> Option<String> {
    match solution.get(var) {
        Some(Term::Literal(lit)) => Some(lit.value().to_string()),
        _ => None,
    }
}

fn collect_annotations(store: &Store) -> Result<BTreeMap<String, Annotations>> {
    let mut annotations: BTreeMap<String, Annotations> = BTreeMap::new();

    for row in run_select(store, &SparqlQuery::annotations())? {
        let (Some(subject), Some(kind), Some(value)) =
            (iri(&row, "subject"), literal(&row, "kind"), literal(&row, "value"))
        else {
            continue;
        };
        let lang = literal(&row, "lang").unwrap_or_default();

        let entry = annotations.entry(subject).or_default();
        match kind.as_str() {
            "label" => entry.labels.push((lang, value)),
            _ => entry.comments.push((lang, value)),
        }
    }

    Ok(annotations)
}

fn collect_classes(
    store: &Store,
    annotations: &BTreeMap<String, Annotations>,
) -> Result<Vec<ClassDefinition>> {
    let mut classes: BTreeMap<String, ClassDefinition> = BTreeMap::new();

    for row in run_select(store, &SparqlQuery::classes())? {
        let Some(uri) = iri(&row, "class") else {
            continue;
        };
        let class = classes
            .entry(uri.clone())
            .or_insert_with(|| ClassDefinition::new(uri));

        if let Some(parent) = iri(&row, "parent") {
            if parent != class.uri && !class.parents.contains(&parent) {
                class.parents.push(parent);
            }
        }
    }

    Ok(classes
        .into_values()
        .map(|class| {
            let labels = annotations
                .get(&class.uri)
                .map(Annotations::resolve)
                .unwrap_or_default();
            class.with_labels(labels)
        })
        .collect())
}

fn collect_properties(
    store: &Store,
    annotations: &BTreeMap<String, Annotations>,
) -> Result<Vec<PropertyRecord>> {
    let mut properties: BTreeMap<String, PropertyRecord> = BTreeMap::new();

    for row in run_select(store, &SparqlQuery::properties())? {
        let Some(uri) = iri(&row, "property") else {
            continue;
        };
        let property = properties
            .entry(uri.clone())
            .or_insert_with(|| PropertyRecord::new(uri));

        if let Some(domain) = iri(&row, "domain") {
            if !property.domains.contains(&domain) {
                property.domains.push(domain);
            }
        }

        if let Some(range) = iri(&row, "range") {
            match &property.range {
                None => property.range = Some(range),
                Some(existing) if *existing != range => {
                    debug!(
                        property = %property.uri,
                        kept = %existing,
                        ignored = %range,
                        "multiple ranges declared"
                    );
                }
                Some(_) => {}
            }
        }
    }

    Ok(properties
        .into_values()
        .map(|property| {
            let labels = annotations
                .get(&property.uri)
                .map(Annotations::resolve)
                .unwrap_or_default();
            property.with_labels(labels)
        })
        .collect())
}
