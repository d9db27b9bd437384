//! Bridge layer: relocalize a winning generic concept into a
//! jurisdiction-specific material entry for display.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::types::{CatalogEntry, Category, EntryId, Guidance};

/// Fixed per-category default handling instructions, used when no
/// jurisdiction material exists for a concept.
pub fn default_instructions(category: Category) -> Vec<String> {
    let lines: &[&str] = match category {
        Category::Recycle => &[
            "Rinse off any food residue",
            "Place loose in your recycling bin",
        ],
        Category::Compost => &[
            "Remove any stickers, ties, or packaging",
            "Place in your compost or green-waste bin",
        ],
        Category::Trash => &[
            "Bag securely and place in your trash cart",
        ],
        Category::Dropoff => &[
            "Take to a designated drop-off location",
            "Check the accepted-items list before you go",
        ],
        Category::Hazardous => &[
            "Do not place in any curbside bin",
            "Bring to a household hazardous waste facility",
        ],
        Category::Unsure => &[
            "Check with your local disposal program before binning",
        ],
    };
    lines.iter().map(|line| line.to_string()).collect()
}

/// Maps concept ids to jurisdiction material ids and localizes winning
/// concepts against a material catalog.
#[derive(Debug, Default)]
pub struct ConceptBridge {
    mappings: BTreeMap<EntryId, EntryId>,
}

impl ConceptBridge {
    pub fn new() -> Self {
        ConceptBridge::default()
    }

    pub fn with_mappings(pairs: impl IntoIterator<Item = (EntryId, EntryId)>) -> Self {
        ConceptBridge {
            mappings: pairs.into_iter().collect(),
        }
    }

    pub fn map(&mut self, concept_id: EntryId, material_id: EntryId) {
        self.mappings.insert(concept_id, material_id);
    }

    /// The richer jurisdiction material for a winning concept, when the
    /// mapping table and the material catalog both know it. Otherwise a
    /// minimal entry synthesized from the per-category defaults, carrying
    /// the classification rationale as notes.
    pub fn localize(
        &self,
        concept: &CatalogEntry,
        materials: &Catalog,
        rationale: &[String],
    ) -> CatalogEntry {
        if let Some(material_id) = self.mappings.get(&concept.id) {
            if let Some(material) = materials.get(material_id) {
                return material.clone();
            }
        }
        synthesize(concept, rationale)
    }
}

fn synthesize(concept: &CatalogEntry, rationale: &[String]) -> CatalogEntry {
    let notes = if rationale.is_empty() {
        None
    } else {
        Some(rationale.join("; "))
    };

    CatalogEntry {
        id: concept.id.clone(),
        name: concept.name.clone(),
        aliases: vec![concept.name.clone()],
        examples: Vec::new(),
        category: concept.category,
        attribute_tags: Vec::new(),
        followup_questions: Vec::new(),
        guidance: Some(Guidance {
            instructions: default_instructions(concept.category),
            notes,
            common_mistakes: Vec::new(),
        }),
    }
}
