use curbside_core::bridge::{default_instructions, ConceptBridge};
use curbside_core::catalog::Catalog;
use curbside_core::types::{CatalogEntry, CatalogId, Category, EntryId, Guidance};

fn concept(id: &str, name: &str, category: Category) -> CatalogEntry {
    CatalogEntry {
        id: EntryId::new(id),
        name: name.to_string(),
        aliases: vec![name.to_string()],
        examples: Vec::new(),
        category,
        attribute_tags: Vec::new(),
        followup_questions: Vec::new(),
        guidance: None,
    }
}

fn springfield_materials() -> Catalog {
    let mut bottles = concept("sf-plastic-bottles", "plastic bottles", Category::Recycle);
    bottles.guidance = Some(Guidance {
        instructions: vec![
            "Empty and rinse".to_string(),
            "Caps back on, place in the blue cart".to_string(),
        ],
        notes: Some("No. 1 and 2 plastics only".to_string()),
        common_mistakes: vec!["Bagging recyclables in plastic film".to_string()],
    });
    Catalog::new(CatalogId::new("springfield"), vec![bottles]).unwrap()
}

#[test]
fn mapped_concept_returns_jurisdiction_material() {
    let materials = springfield_materials();
    let bridge = ConceptBridge::with_mappings([(
        EntryId::new("plastic-bottles"),
        EntryId::new("sf-plastic-bottles"),
    )]);

    let winner = concept("plastic-bottles", "plastic bottles", Category::Recycle);
    let localized = bridge.localize(&winner, &materials, &[]);

    assert_eq!(localized.id.as_str(), "sf-plastic-bottles");
    let guidance = localized.guidance.expect("material guidance expected");
    assert_eq!(guidance.notes.as_deref(), Some("No. 1 and 2 plastics only"));
    assert_eq!(guidance.instructions.len(), 2);
}

#[test]
fn unmapped_concept_synthesizes_default_entry() {
    let materials = springfield_materials();
    let bridge = ConceptBridge::new();

    let winner = concept("batteries", "battery", Category::Hazardous);
    let rationale = vec!["Best match: 'battery' via exact-name match (score 1.00)".to_string()];
    let localized = bridge.localize(&winner, &materials, &rationale);

    assert_eq!(localized.id.as_str(), "batteries");
    assert_eq!(localized.name, "battery");
    assert_eq!(localized.aliases, vec!["battery".to_string()]);
    assert_eq!(localized.category, Category::Hazardous);

    let guidance = localized.guidance.expect("synthesized guidance expected");
    assert_eq!(guidance.instructions, default_instructions(Category::Hazardous));
    assert_eq!(guidance.notes.as_deref(), Some(rationale[0].as_str()));
}

#[test]
fn mapping_to_missing_material_falls_back_to_synthesis() {
    let materials = springfield_materials();
    let bridge = ConceptBridge::with_mappings([(
        EntryId::new("plastic-bags"),
        EntryId::new("sf-plastic-bags"),
    )]);

    let winner = concept("plastic-bags", "plastic bags", Category::Trash);
    let localized = bridge.localize(&winner, &materials, &[]);

    assert_eq!(localized.id.as_str(), "plastic-bags");
    let guidance = localized.guidance.expect("synthesized guidance expected");
    assert_eq!(guidance.instructions, default_instructions(Category::Trash));
    assert!(guidance.notes.is_none());
}

#[test]
fn default_instructions_cover_every_category() {
    for category in [
        Category::Recycle,
        Category::Trash,
        Category::Compost,
        Category::Dropoff,
        Category::Hazardous,
        Category::Unsure,
    ] {
        assert!(
            !default_instructions(category).is_empty(),
            "no default instructions for {category}"
        );
    }
}

#[test]
fn hazardous_defaults_keep_items_out_of_curbside_bins() {
    let instructions = default_instructions(Category::Hazardous);
    assert!(instructions
        .iter()
        .any(|line| line.contains("hazardous waste facility")));
}
