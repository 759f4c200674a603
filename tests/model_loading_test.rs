//! Integration tests for loading model snapshots from JSON and exporting them

use bngl_export::core::export::{BnglExporter, ExportOptions};
use bngl_export::domain::{BnglError, ModelSnapshot, DEFAULT_COMPARTMENT_NAME};
use std::fs;
use tempfile::TempDir;

const RECEPTOR_MODEL: &str = r#"{
    "molecule_types": [
        {
            "name": "L",
            "kind": "volume",
            "diffusion_constant": 1e-6,
            "components": [{ "name": "r" }]
        },
        {
            "name": "Rec",
            "kind": "surface",
            "D": 1e-8,
            "components": [{ "name": "l" }, { "name": "s", "states": ["U", "P"] }]
        },
        { "name": "ALL_MOLECULES", "kind": "volume", "diffusion_constant": 0.0 }
    ],
    "compartments": [
        { "id": 1, "name": "EC", "dimensionality": "volume", "volume_or_area": 100.0 },
        { "id": 2, "name": "PM", "dimensionality": "surface", "size": 12.5, "parent": 1 },
        { "id": 3, "name": "CP", "dimensionality": "volume", "volume_or_area": 8.0, "parent": 2 }
    ],
    "rxn_rules": [
        {
            "name": "bind",
            "reactants": [
                { "pattern": "L(r)@EC", "locality": "volume" },
                { "pattern": "Rec(l)@PM", "locality": "surface" }
            ],
            "products": ["L(r!1).Rec(l!1)@PM"],
            "base_rate_constant": 1e6
        },
        {
            "reactants": [{ "pattern": "L(r!1).Rec(l!1)@PM", "locality": "surface" }],
            "products": ["L(r)@EC", "Rec(l)@PM"],
            "base_rate_constant": 0.1
        }
    ]
}"#;

fn write_model(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("model.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_load_and_export_receptor_model() {
    let dir = TempDir::new().unwrap();
    let model = ModelSnapshot::from_json_file(write_model(&dir, RECEPTOR_MODEL)).unwrap();

    assert_eq!(model.compartments().len(), 4);
    assert!(model.find_compartment(DEFAULT_COMPARTMENT_NAME).is_some());

    let outcome = BnglExporter::new(&model)
        .export_sections(&ExportOptions::default())
        .unwrap();
    assert!(outcome.summary.is_successful());
    assert_eq!(outcome.summary.error_text(), "");

    assert_eq!(
        outcome.sections.molecule_types,
        "begin molecule types\n  L(r)\n  Rec(l,s~U~P)\nend molecule types\n"
    );
    assert_eq!(
        outcome.sections.compartments,
        "begin compartments\n  EC 3 vol_EC\n  PM 2 area_PM * thickness EC\n  CP 3 vol_CP PM\nend compartments\n"
    );
    assert_eq!(
        outcome.sections.reaction_rules,
        "begin reaction rules\n  bind: L(r)@EC + Rec(l)@PM -> L(r!1).Rec(l!1)@PM k0\n  L(r!1).Rec(l!1)@PM -> L(r)@EC + Rec(l)@PM k1\nend reaction rules\n"
    );

    let params = &outcome.sections.parameters;
    assert!(params.contains("  k0 1000000.0 / mcell_to_bng_vol_conv * vol_rxn\n"));
    assert!(params.contains("  k1 0.1\n"));
    assert!(params.contains("  MCELL_DIFFUSION_CONSTANT_2D_Rec 1e-8\n"));
    assert!(!params.contains("ALL_MOLECULES"));
}

#[test]
fn test_orphan_compartment_is_input_fault() {
    let json = r#"{
        "compartments": [
            { "id": 1, "name": "Lost", "dimensionality": "volume", "volume_or_area": 1.0, "parent": 99 }
        ]
    }"#;
    let dir = TempDir::new().unwrap();
    let model = ModelSnapshot::from_json_file(write_model(&dir, json)).unwrap();

    let err = BnglExporter::new(&model)
        .export_sections(&ExportOptions::default())
        .unwrap_err();
    assert!(err.is_input_fault());
    assert!(matches!(
        err,
        BnglError::InconsistentCompartments { ordered: 1, total: 2, .. }
    ));
}

#[test]
fn test_parent_cycle_is_input_fault() {
    let json = r#"{
        "compartments": [
            { "id": 1, "name": "A", "dimensionality": "volume", "volume_or_area": 1.0, "parent": 2 },
            { "id": 2, "name": "B", "dimensionality": "volume", "volume_or_area": 1.0, "parent": 1 }
        ]
    }"#;
    let model = ModelSnapshot::from_json_str(json).unwrap();

    let err = BnglExporter::new(&model)
        .export_sections(&ExportOptions::default())
        .unwrap_err();
    assert!(matches!(err, BnglError::InconsistentCompartments { .. }));
}

#[test]
fn test_malformed_json_is_model_error() {
    let dir = TempDir::new().unwrap();
    let err = ModelSnapshot::from_json_file(write_model(&dir, "{\"compartments\": [")).unwrap_err();
    assert!(matches!(err, BnglError::Model(_)));
}

#[test]
fn test_missing_file_is_model_error() {
    let dir = TempDir::new().unwrap();
    let err = ModelSnapshot::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, BnglError::Model(_)));
}
