//! Assembles a [`TaxonomyTree`] from raw schema definitions.
//!
//! The builder holds no state between calls; every `build` returns a fully
//! independent object graph or a structural error.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::errors::{Result, TaxonomyError};
use crate::model::{CategoryId, CategoryInfo, PropertyDefinition, TaxonomyTree};
use crate::schema::definitions::{ClassDefinition, PropertyRecord};
use crate::schema::vocab::local_name;

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a tree from the definitions that belong to `namespace`.
    ///
    /// Definitions outside the namespace are skipped; superclasses outside it
    /// do not count as parents.
    pub fn build(
        &self,
        namespace: &str,
        classes: &[ClassDefinition],
        properties: &[PropertyRecord],
    ) -> Result<TaxonomyTree> {
        let (mut categories, members) = create_categories(namespace, classes)?;
        let index: HashMap<String, CategoryId> = categories
            .iter()
            .map(|c| (c.class_name.clone(), c.id))
            .collect();

        link_parents(namespace, &mut categories, &members, &index)?;
        reject_cycles(&categories)?;
        link_children(&mut categories);
        attach_properties(namespace, &mut categories, properties, &index)?;

        Ok(TaxonomyTree::from_parts(namespace, categories))
    }
}

/// One category per in-namespace class, plus the definition each came from.
fn create_categories<'a>(
    namespace: &str,
    classes: &'a [ClassDefinition],
) -> Result<(Vec<CategoryInfo>, Vec<&'a ClassDefinition>)> {
    let mut categories: Vec<CategoryInfo> = Vec::with_capacity(classes.len());
    let mut members = Vec::with_capacity(classes.len());
    let mut seen = HashSet::new();

    for class in classes {
        let Some(class_name) = local_name(&class.uri, namespace) else {
            debug!(class = %class.uri, "skipping class outside taxonomy namespace");
            continue;
        };

        if !seen.insert(class_name) {
            return Err(TaxonomyError::DuplicateClass(class_name.to_string()));
        }

        categories.push(CategoryInfo {
            id: CategoryId(categories.len()),
            class_name: class_name.to_string(),
            uri: class.uri.clone(),
            english_name: class
                .labels
                .english
                .clone()
                .unwrap_or_else(|| class_name.to_string()),
            norwegian_name: class.labels.norwegian.clone(),
            description: class.labels.description.clone(),
            parent: None,
            children: Vec::new(),
            properties: Vec::new(),
        });
        members.push(class);
    }

    Ok((categories, members))
}

fn link_parents(
    namespace: &str,
    categories: &mut [CategoryInfo],
    members: &[&ClassDefinition],
    index: &HashMap<String, CategoryId>,
) -> Result<()> {
    for (category, class) in categories.iter_mut().zip(members) {
        let mut parents: Vec<&str> = Vec::new();
        for parent in &class.parents {
            match local_name(parent, namespace) {
                Some(name) if !parents.contains(&name) => parents.push(name),
                Some(_) => {}
                None => debug!(
                    class = %category.class_name,
                    parent = %parent,
                    "ignoring foreign superclass"
                ),
            }
        }

        category.parent = match parents.as_slice() {
            [] => None,
            [parent] => {
                let id = index.get(*parent).ok_or_else(|| TaxonomyError::UnresolvedParent {
                    class: category.class_name.clone(),
                    parent: parent.to_string(),
                })?;
                Some(*id)
            }
            many => {
                return Err(TaxonomyError::MultipleParents {
                    class: category.class_name.clone(),
                    parents: many.iter().map(|p| p.to_string()).collect(),
                })
            }
        };
    }
    Ok(())
}

fn reject_cycles(categories: &[CategoryInfo]) -> Result<()> {
    for start in categories {
        let mut visited = HashSet::new();
        let mut current = Some(start.id);
        while let Some(id) = current {
            if !visited.insert(id) {
                return Err(TaxonomyError::CyclicHierarchy(start.class_name.clone()));
            }
            current = categories[id.0].parent;
        }
    }
    Ok(())
}

fn link_children(categories: &mut [CategoryInfo]) {
    let links: Vec<(CategoryId, CategoryId)> = categories
        .iter()
        .filter_map(|c| c.parent.map(|parent| (parent, c.id)))
        .collect();

    for (parent, child) in links {
        categories[parent.0].children.push(child);
    }

    let names: Vec<String> = categories.iter().map(|c| c.class_name.clone()).collect();
    for category in categories.iter_mut() {
        category.children.sort_by(|a, b| names[a.0].cmp(&names[b.0]));
    }
}

fn attach_properties(
    namespace: &str,
    categories: &mut [CategoryInfo],
    properties: &[PropertyRecord],
    index: &HashMap<String, CategoryId>,
) -> Result<()> {
    for record in properties {
        let Some(name) = local_name(&record.uri, namespace) else {
            debug!(property = %record.uri, "skipping property outside taxonomy namespace");
            continue;
        };

        if record.domains.is_empty() {
            return Err(TaxonomyError::UnresolvedDomain {
                property: name.to_string(),
                domain: String::new(),
            });
        }

        for domain in &record.domains {
            let id = local_name(domain, namespace)
                .and_then(|class_name| index.get(class_name))
                .ok_or_else(|| TaxonomyError::UnresolvedDomain {
                    property: name.to_string(),
                    domain: domain.clone(),
                })?;

            let category = &mut categories[id.0];
            if category.property(name).is_some() {
                return Err(TaxonomyError::DuplicateProperty {
                    class: category.class_name.clone(),
                    property: name.to_string(),
                });
            }

            let mut builder = PropertyDefinition::builder()
                .name(name)
                .uri(record.uri.clone())
                .maybe_range_type(record.range.clone())
                .domain_class(category.class_name.clone());
            if let Some(label) = &record.labels.english {
                builder = builder.english_label(label.clone());
            }
            if let Some(label) = &record.labels.norwegian {
                builder = builder.norwegian_label(label.clone());
            }
            if let Some(description) = &record.labels.description {
                builder = builder.description(description.clone());
            }
            category.properties.push(builder.build());
        }
    }

    for category in categories.iter_mut() {
        category.properties.sort_by(|a, b| a.name().cmp(b.name()));
    }
    Ok(())
}
