/**
 * query.rs
 * SPARQL builders for extracting RDF-Schema definitions
 */

use crate::schema::vocab::{CLASS_TYPES, PROPERTY_TYPES};

pub struct SparqlQuery {
    query: String,
}

impl SparqlQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    /// Every class with each of its declared superclasses (one row per pair,
    /// `?parent` unbound for classes without one)
    pub fn classes() -> Self {
        Self::new(format!(
            r#"
            PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
            PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

            SELECT DISTINCT ?class ?parent
            WHERE {{
                ?class rdf:type ?type .
                VALUES ?type {{ {} }}
                FILTER(isIRI(?class))
                OPTIONAL {{ ?class rdfs:subClassOf ?parent . FILTER(isIRI(?parent)) }}
            }}
            ORDER BY ?class ?parent
            "#,
            iri_list(&CLASS_TYPES)
        ))
    }

    /// Every property with its domains and ranges (one row per combination)
    pub fn properties() -> Self {
        Self::new(format!(
            r#"
            PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
            PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

            SELECT DISTINCT ?property ?domain ?range
            WHERE {{
                ?property rdf:type ?type .
                VALUES ?type {{ {} }}
                FILTER(isIRI(?property))
                OPTIONAL {{ ?property rdfs:domain ?domain . FILTER(isIRI(?domain)) }}
                OPTIONAL {{ ?property rdfs:range ?range . FILTER(isIRI(?range)) }}
            }}
            ORDER BY ?property ?domain ?range
            "#,
            iri_list(&PROPERTY_TYPES)
        ))
    }

    /// All `rdfs:label` / `rdfs:comment` literals, with their language tags
    pub fn annotations() -> Self {
        Self::new(
            r#"
            PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

            SELECT ?subject ?kind ?value (LANG(?value) AS ?lang)
            WHERE {
                {
                    ?subject rdfs:label ?value .
                    BIND("label" AS ?kind)
                } UNION {
                    ?subject rdfs:comment ?value .
                    BIND("comment" AS ?kind)
                }
                FILTER(isIRI(?subject) && isLiteral(?value))
            }
            ORDER BY ?subject ?kind ?lang ?value
            "#,
        )
    }
}

fn iri_list(iris: &[&str]) -> String {
    iris.iter()
        .map(|iri| format!("<{}>", iri))
        .collect::<Vec<_>>()
        .join(" ")
}
