use ants_sidecar_core::{BBox, Domain, Operation, Sidecar, SidecarError, SynTriplet};
use ants_sidecar_io::{dump_package, load_package, load_package_value, PackageError};
use serde_json::{json, Value};

fn syn_op() -> Operation {
    Operation::Syn(SynTriplet::new("A.mat", "W.nii.gz", "IW.nii.gz").unwrap())
}

fn sample_domain() -> Domain {
    let bbox = BBox::new((0.0, 10.0), (0.0, 20.0), (0.0, 30.0)).unwrap();
    Domain::new([1.0, 1.0, 1.0], bbox, Some([11, 21, 31])).unwrap()
}

#[test]
fn round_trip_without_domains() {
    let sidecar = Sidecar::new(syn_op());
    let reloaded = load_package(&dump_package(&sidecar).unwrap()).unwrap();
    assert_eq!(reloaded, sidecar);
}

#[test]
fn round_trip_with_domains() {
    let sidecar = Sidecar::with_domains(syn_op(), sample_domain(), sample_domain());
    let reloaded = load_package(&dump_package(&sidecar).unwrap()).unwrap();
    assert_eq!(reloaded, sidecar);
}

#[test]
fn dump_emits_fixed_metadata() {
    let sidecar = Sidecar::new(syn_op());
    let value: Value = serde_json::from_str(&dump_package(&sidecar).unwrap()).unwrap();
    assert_eq!(value["schema_version"], "1.0");
    assert_eq!(value["frame"], "LPS");
    assert_eq!(value["units"], "mm");
    assert_eq!(value["transform"]["kind"], "syn");
}

#[test]
fn dump_omits_absent_domains_entirely() {
    let sidecar = Sidecar::new(syn_op());
    let text = dump_package(&sidecar).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    let object = value.as_object().unwrap();
    // Omitted, not emitted as null.
    assert!(!object.contains_key("fixed_domain"));
    assert!(!object.contains_key("moving_domain"));
    assert!(!text.contains("null"));
}

#[test]
fn dump_emits_populated_signature() {
    let sidecar = Sidecar::with_domains(syn_op(), sample_domain(), sample_domain());
    let value: Value = serde_json::from_str(&dump_package(&sidecar).unwrap()).unwrap();
    let signature = &value["fixed_domain"]["spatial_signature"];
    assert_eq!(signature["method"], "LPS_bbox_spacing_shape:intQ9:BE");
    assert!(signature["blake2b"].as_str().unwrap().starts_with("b2:"));
}

#[test]
fn load_accepts_payload_without_frame_and_units() {
    let payload = json!({
        "schema_version": "1.0",
        "transform": {"kind": "syn", "affine": "A.mat", "warp": "W.nii.gz", "inverse_warp": "IW.nii.gz"}
    });
    let sidecar = load_package_value(&payload).unwrap();
    assert_eq!(sidecar, Sidecar::new(syn_op()));
}

#[test]
fn load_populates_missing_domain_signature() {
    let payload = json!({
        "schema_version": "1.0",
        "fixed_domain": {
            "spacing": [1.0, 1.0, 1.0],
            "bbox": {"L": [0.0, 10.0], "P": [0.0, 20.0], "S": [0.0, 30.0]},
            "shape_canonical": [11, 21, 31]
        },
        "moving_domain": {
            "spacing": [1.0, 1.0, 1.0],
            "bbox": {"L": [0.0, 10.0], "P": [0.0, 20.0], "S": [0.0, 30.0]},
            "shape_canonical": [11, 21, 31]
        },
        "transform": {"kind": "syn", "affine": "A.mat", "warp": "W.nii.gz", "inverse_warp": "IW.nii.gz"}
    });
    let sidecar = load_package_value(&payload).unwrap();
    let signature = sidecar.fixed_domain().unwrap().spatial_signature();
    assert_eq!(signature.blake2b(), "b2:aa637f61490af34eadc0fdb946d29178");
}

#[test]
fn load_rejects_tampered_signature_naming_both_digests() {
    let sidecar = Sidecar::with_domains(syn_op(), sample_domain(), sample_domain());
    let mut value: Value = serde_json::from_str(&dump_package(&sidecar).unwrap()).unwrap();
    let genuine = sample_domain().spatial_signature().blake2b().to_owned();
    value["fixed_domain"]["spatial_signature"]["blake2b"] =
        json!("b2:deadbeefdeadbeefdeadbeefdeadbeef");

    match load_package_value(&value).unwrap_err() {
        PackageError::Model(SidecarError::SignatureMismatch { provided, computed }) => {
            assert_eq!(provided, "b2:deadbeefdeadbeefdeadbeefdeadbeef");
            assert_eq!(computed, genuine);
        }
        other => panic!("expected SignatureMismatch, got {other:?}"),
    }
}

#[test]
fn load_rejects_single_domain() {
    let mut payload = json!({
        "schema_version": "1.0",
        "fixed_domain": {
            "spacing": [1.0, 1.0, 1.0],
            "bbox": {"L": [0.0, 10.0], "P": [0.0, 20.0], "S": [0.0, 30.0]}
        },
        "transform": {"kind": "syn", "affine": "A.mat", "warp": "W.nii.gz", "inverse_warp": "IW.nii.gz"}
    });
    assert!(matches!(
        load_package_value(&payload).unwrap_err(),
        PackageError::Model(SidecarError::UnpairedDomains)
    ));

    // Same with only the moving domain.
    let domain = payload["fixed_domain"].take();
    payload["moving_domain"] = domain;
    assert!(matches!(
        load_package_value(&payload).unwrap_err(),
        PackageError::Model(SidecarError::UnpairedDomains)
    ));
}

#[test]
fn load_rejects_non_monotonic_bbox() {
    let payload = json!({
        "schema_version": "1.0",
        "fixed_domain": {
            "spacing": [1.0, 1.0, 1.0],
            "bbox": {"L": [10.0, 0.0], "P": [0.0, 20.0], "S": [0.0, 30.0]}
        },
        "moving_domain": {
            "spacing": [1.0, 1.0, 1.0],
            "bbox": {"L": [0.0, 10.0], "P": [0.0, 20.0], "S": [0.0, 30.0]}
        },
        "transform": {"kind": "syn", "affine": "A.mat", "warp": "W.nii.gz", "inverse_warp": "IW.nii.gz"}
    });
    assert!(matches!(
        load_package_value(&payload).unwrap_err(),
        PackageError::Model(SidecarError::BBoxNotMonotonic { .. })
    ));
}

#[test]
fn load_rejects_empty_triplet_member() {
    let payload = json!({
        "schema_version": "1.0",
        "transform": {"kind": "syn", "affine": "A.mat", "warp": "", "inverse_warp": "IW.nii.gz"}
    });
    assert!(matches!(
        load_package_value(&payload).unwrap_err(),
        PackageError::Model(SidecarError::EmptyFileReference { field: "warp" })
    ));
}

#[test]
fn load_rejects_unknown_operation_kind() {
    let payload = json!({
        "schema_version": "1.0",
        "transform": {"kind": "bspline", "file": "B.nii.gz"}
    });
    assert!(matches!(
        load_package_value(&payload).unwrap_err(),
        PackageError::Json(_)
    ));
}

#[test]
fn loaded_sidecar_renders_chains() {
    let payload = json!({
        "schema_version": "1.0",
        "transform": {"kind": "syn", "affine": "A.mat", "warp": "W.nii.gz", "inverse_warp": "IW.nii.gz"}
    });
    let sidecar = load_package_value(&payload).unwrap();
    let (transforms, whichtoinvert) = sidecar.inverse_chain().to_apply_transforms_args();
    assert_eq!(transforms, ["A.mat", "IW.nii.gz"]);
    assert_eq!(whichtoinvert, [true, false]);
}
