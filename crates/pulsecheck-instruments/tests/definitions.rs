use pretty_assertions::assert_eq;
use pulsecheck_core::models::category::CategoryId;
use pulsecheck_instruments::definition::InstrumentDefinition;
use pulsecheck_instruments::error::InstrumentError;
use pulsecheck_instruments::registry::InstrumentRegistry;
use pulsecheck_instruments::{all_instruments, get_instrument};

#[test]
fn builtin_definitions_are_valid() {
    for instrument in all_instruments() {
        instrument
            .definition()
            .validate()
            .unwrap_or_else(|e| panic!("{} failed validation: {e}", instrument.id()));
    }
}

#[test]
fn indicator_tool_shape() {
    let instrument = get_instrument("indicator_tool").unwrap();
    let def = instrument.definition();
    assert_eq!(def.items.len(), 35);
    assert_eq!(def.categories.len(), 7);

    let count = |id: &'static str| def.items_in(&CategoryId::from_static(id)).count();
    assert_eq!(count("demands"), 8);
    assert_eq!(count("control"), 6);
    assert_eq!(count("manager_support"), 5);
    assert_eq!(count("peer_support"), 4);
    assert_eq!(count("relationships"), 4);
    assert_eq!(count("role"), 5);
    assert_eq!(count("change"), 3);

    let inverted: Vec<u32> = def
        .items
        .iter()
        .filter(|i| i.inverted)
        .map(|i| i.item_number)
        .collect();
    assert_eq!(inverted, vec![3, 5, 6, 9, 12, 14, 16, 18, 20, 21, 22, 34]);
    assert!(def.items.iter().all(|i| i.scale.min == 1 && i.scale.max == 5));
}

#[test]
fn burnout_inventory_shape() {
    let instrument = get_instrument("burnout_inventory").unwrap();
    let def = instrument.definition();
    assert_eq!(def.items.len(), 20);
    assert!(def.items.iter().all(|i| i.scale.min == 1 && i.scale.max == 6));
    let min_total: i32 = def.items.iter().map(|i| i.scale.min).sum();
    let max_total: i32 = def.items.iter().map(|i| i.scale.max).sum();
    assert_eq!((min_total, max_total), (20, 120));
}

#[test]
fn unknown_category_lookup_is_an_error() {
    let instrument = get_instrument("indicator_tool").unwrap();
    let err = instrument
        .definition()
        .category(&CategoryId::from_static("exhaustion"))
        .unwrap_err();
    assert!(matches!(err, InstrumentError::UnknownCategory { .. }));
}

#[test]
fn registry_resolves_builtins_and_rejects_unknown_ids() {
    let registry = InstrumentRegistry::builtin();
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.ids().collect::<Vec<_>>(),
        vec!["indicator_tool", "burnout_inventory"]
    );
    assert!(registry.get("burnout_inventory").is_ok());
    assert!(matches!(
        registry.get("nope"),
        Err(InstrumentError::UnknownInstrument(id)) if id == "nope"
    ));
}

#[test]
fn definitions_round_trip_through_json_and_are_validated() {
    let instrument = get_instrument("indicator_tool").unwrap();
    let json = serde_json::to_string(instrument.definition()).unwrap();
    let loaded = InstrumentDefinition::from_json(&json).unwrap();
    assert_eq!(&loaded, instrument.definition());

    let mut broken = loaded.clone();
    broken.items[0].category = CategoryId::from_static("nowhere");
    let json = serde_json::to_string(&broken).unwrap();
    assert!(matches!(
        InstrumentDefinition::from_json(&json),
        Err(InstrumentError::UnknownCategory { .. })
    ));

    let mut duplicated = loaded.clone();
    duplicated.items[1].item_number = duplicated.items[0].item_number;
    assert!(matches!(
        duplicated.validate(),
        Err(InstrumentError::InvalidDefinition { .. })
    ));
}

#[test]
fn registry_rejects_duplicate_and_upsert_replaces() {
    let mut registry = InstrumentRegistry::builtin();
    let mut def = registry.get("indicator_tool").unwrap().clone();
    assert!(matches!(
        registry.register(def.clone()),
        Err(InstrumentError::DuplicateInstrument(_))
    ));

    def.version = 2;
    registry.upsert(def).unwrap();
    assert_eq!(registry.get("indicator_tool").unwrap().version, 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn every_instrument_error_is_reachable() {
    let mut registry = InstrumentRegistry::builtin();
    let indicator = registry.get("indicator_tool").unwrap().clone();

    let mut empty = indicator.clone();
    empty.items.clear();

    let errors = vec![
        registry.get("missing").unwrap_err(),
        indicator
            .category(&CategoryId::from_static("missing"))
            .unwrap_err(),
        empty.validate().unwrap_err(),
        registry.register(indicator.clone()).unwrap_err(),
        InstrumentDefinition::from_json("{ not json").unwrap_err(),
    ];

    // Exhaustive, so a new variant needs a case that produces it.
    let names: Vec<&str> = errors
        .iter()
        .map(|e| match e {
            InstrumentError::UnknownInstrument(_) => "unknown_instrument",
            InstrumentError::UnknownCategory { .. } => "unknown_category",
            InstrumentError::InvalidDefinition { .. } => "invalid_definition",
            InstrumentError::DuplicateInstrument(_) => "duplicate_instrument",
            InstrumentError::Serialization(_) => "serialization",
        })
        .collect();
    assert_eq!(
        names,
        vec![
            "unknown_instrument",
            "unknown_category",
            "invalid_definition",
            "duplicate_instrument",
            "serialization",
        ]
    );
}
