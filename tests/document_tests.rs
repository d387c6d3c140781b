//! Scene Document & Manager Tests
//!
//! Tests for:
//! - Loading scene files from disk and registering their asset manifests
//! - Asset GUID identity across scene files
//! - Scene rows that do not depend on load order
//! - SceneManager as the auditor's host, end to end
//! - Settings files

use std::path::{Path, PathBuf};

use asset_audit::assets::AssetServer;
use asset_audit::audit::{
    AuditSettings, Auditor, BuildSettings, OpenSceneMode, ProjectIssue, SceneHost, SceneProperty,
    ScenesAuditor,
};
use asset_audit::errors::AuditError;
use asset_audit::resources::ShaderPropertyType;
use asset_audit::scene::document::{
    AssetManifest, MaterialEntry, PrefabEntry, ShaderEntry, ShaderPropertyEntry, TextureEntry,
};
use asset_audit::scene::{NodeDocument, SceneDocument, SceneManager};
use tempfile::TempDir;
use uuid::Uuid;

const SHADER: Uuid = Uuid::from_u128(0x51);
const TEXTURE: Uuid = Uuid::from_u128(0x71);
const BRICK: Uuid = Uuid::from_u128(0x31);
const WOOD: Uuid = Uuid::from_u128(0x32);
const CRATE: Uuid = Uuid::from_u128(0x91);

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn manifest(materials: &[(Uuid, &str)]) -> AssetManifest {
    AssetManifest {
        textures: vec![TextureEntry {
            id: TEXTURE,
            name: "Albedo".into(),
            width: 512,
            height: 512,
        }],
        shaders: vec![ShaderEntry {
            id: SHADER,
            name: "Standard".into(),
            properties: vec![
                ShaderPropertyEntry {
                    name: "_MainTex".into(),
                    ty: ShaderPropertyType::Texture,
                },
                ShaderPropertyEntry {
                    name: "_Color".into(),
                    ty: ShaderPropertyType::Color,
                },
            ],
        }],
        materials: materials
            .iter()
            .map(|&(id, name)| MaterialEntry {
                id,
                name: name.into(),
                shader: Some(SHADER),
                textures: [("_MainTex".to_string(), TEXTURE)].into_iter().collect(),
            })
            .collect(),
        geometries: Vec::new(),
        prefabs: vec![PrefabEntry {
            id: CRATE,
            name: "Crate".into(),
        }],
    }
}

fn write_scene(dir: &Path, file: &str, doc: &SceneDocument) -> PathBuf {
    let path = dir.join(file);
    doc.save(&path).unwrap();
    path
}

/// Two crates (one nested inside the other's instance) and a wall.
fn level_one() -> SceneDocument {
    SceneDocument {
        name: "Level01".into(),
        assets: manifest(&[(BRICK, "Brick")]),
        roots: vec![
            NodeDocument::new("Wall").with_renderer(None, &[Some(BRICK), None]),
            NodeDocument::new("Crate (1)")
                .with_prefab(Uuid::from_u128(0xA1), Some(CRATE))
                .with_renderer(None, &[Some(BRICK)])
                .with_child(
                    NodeDocument::new("Lid").with_child(
                        NodeDocument::new("Crate (2)")
                            .with_prefab(Uuid::from_u128(0xA2), Some(CRATE)),
                    ),
                ),
        ],
    }
}

fn level_two() -> SceneDocument {
    SceneDocument {
        name: "Level02".into(),
        assets: manifest(&[(BRICK, "Brick"), (WOOD, "Wood")]),
        roots: vec![
            NodeDocument::new("Floor").with_renderer(None, &[Some(BRICK), Some(WOOD)]),
        ],
    }
}

// ============================================================================
// Documents
// ============================================================================

#[test]
fn save_and_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_scene(dir.path(), "level.scene", &level_one());

    let loaded = SceneDocument::load(&path).unwrap();
    assert_eq!(loaded, level_one());
}

#[test]
fn load_malformed_file_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.scene");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        SceneDocument::load(&path),
        Err(AuditError::JsonError(_))
    ));
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        SceneDocument::load(dir.path().join("nope.scene")),
        Err(AuditError::IoError(_))
    ));
}

#[test]
fn same_guid_in_two_documents_is_one_asset() {
    let assets = AssetServer::new();
    let _ = level_one().instantiate(&assets);
    let _ = level_two().instantiate(&assets);

    assert_eq!(assets.materials.len(), 2, "Brick + Wood");
    assert_eq!(assets.shaders.len(), 1);
    assert_eq!(assets.textures.len(), 1);
}

#[test]
fn redeclared_guid_keeps_handle_and_takes_latest_definition() {
    let assets = AssetServer::new();
    let stale = SceneDocument {
        name: "Stale".into(),
        assets: AssetManifest {
            materials: vec![material(BRICK, "Brick", Some(SHADER))],
            ..Default::default()
        },
        roots: Vec::new(),
    };
    let _ = stale.instantiate(&assets);
    let brick = assets.materials.get_handle_by_uuid(&BRICK).unwrap();
    assert!(assets.get_material(brick).unwrap().shader.is_none());

    let _ = level_one().instantiate(&assets);

    assert_eq!(assets.materials.get_handle_by_uuid(&BRICK), Some(brick));
    assert!(assets.get_material(brick).unwrap().shader.is_some());
}

// ============================================================================
// Load Order
// ============================================================================

fn material(id: Uuid, name: &str, shader: Option<Uuid>) -> MaterialEntry {
    MaterialEntry {
        id,
        name: name.into(),
        shader,
        textures: Default::default(),
    }
}

/// Declares Brick but not the shader Brick points at.
fn partial_scene() -> SceneDocument {
    SceneDocument {
        name: "Partial".into(),
        assets: AssetManifest {
            materials: vec![material(BRICK, "Brick", Some(SHADER))],
            ..Default::default()
        },
        roots: vec![NodeDocument::new("Wall").with_renderer(None, &[Some(BRICK)])],
    }
}

/// Uses Brick with a renderer slot pointing at Wood, which only level two declares.
fn borrowing_scene() -> SceneDocument {
    SceneDocument {
        name: "Borrowing".into(),
        assets: manifest(&[(BRICK, "Brick")]),
        roots: vec![NodeDocument::new("Floor").with_renderer(None, &[Some(BRICK), Some(WOOD)])],
    }
}

fn audit_in_order(scenes: &[(&str, SceneDocument)]) -> Vec<ProjectIssue> {
    let mut manager = SceneManager::default();
    for (path, doc) in scenes {
        manager.insert_document(*path, doc.clone());
    }
    let auditor = ScenesAuditor::new(BuildSettings::from_paths(scenes.iter().map(|(p, _)| *p)));

    let mut issues = Vec::new();
    auditor.run(&mut manager, &mut |issue| issues.push(issue), None);
    issues
}

#[test]
fn scene_row_does_not_depend_on_earlier_scenes() {
    init_logger();
    let alone = audit_in_order(&[("Level01.scene", level_one())]);
    let after = audit_in_order(&[
        ("Partial.scene", partial_scene()),
        ("Level01.scene", level_one()),
    ]);

    assert_eq!(after.len(), 2);
    assert_eq!(after[1], alone[0]);
    assert_eq!(after[1].property_as_usize(SceneProperty::NumShaders), Some(1));
    assert_eq!(after[1].property_as_usize(SceneProperty::NumTextures), Some(1));
}

#[test]
fn undeclared_references_stay_empty_in_any_order() {
    init_logger();
    let alone = audit_in_order(&[("Partial.scene", partial_scene())]);
    let after = audit_in_order(&[
        ("Level01.scene", level_one()),
        ("Partial.scene", partial_scene()),
    ]);

    assert_eq!(after[1], alone[0]);
    assert_eq!(alone[0].property_as_usize(SceneProperty::NumMaterials), Some(1));
    assert_eq!(alone[0].property_as_usize(SceneProperty::NumShaders), Some(0));
}

#[test]
fn renderer_slots_resolve_against_own_manifest() {
    let assets = AssetServer::new();
    let _ = level_two().instantiate(&assets);
    let scene = borrowing_scene().instantiate(&assets);

    let renderer = &scene.renderers(scene.root_nodes()[0])[0];
    assert!(renderer.materials[0].is_some());
    assert_eq!(renderer.materials[1], None, "Wood is not declared by this file");
}

// ============================================================================
// Scene Manager
// ============================================================================

#[test]
fn manager_opens_files_and_reports_missing_paths() {
    let dir = TempDir::new().unwrap();
    let path = write_scene(dir.path(), "level.scene", &level_one());
    let mut manager = SceneManager::default();

    assert!(manager.scene_exists(&path));
    assert!(!manager.scene_exists(&dir.path().join("missing.scene")));

    let scene = manager.open_scene(&path, OpenSceneMode::Single).unwrap();
    assert_eq!(scene.name, "Level01");
    assert_eq!(scene.node_count(), 4);
}

#[test]
fn manager_in_memory_documents_shadow_files() {
    let dir = TempDir::new().unwrap();
    let path = write_scene(dir.path(), "level.scene", &level_one());
    let mut manager = SceneManager::default();
    manager.insert_document(&path, level_two());

    let scene = manager.open_scene(&path, OpenSceneMode::Single).unwrap();
    assert_eq!(scene.name, "Level02");
}

// ============================================================================
// End to End
// ============================================================================

#[test]
fn audit_scene_files_end_to_end() {
    init_logger();
    let dir = TempDir::new().unwrap();
    let one = write_scene(dir.path(), "Level01.scene", &level_one());
    let two = write_scene(dir.path(), "Level02.scene", &level_two());
    let missing = dir.path().join("Cut.scene");

    let mut manager = SceneManager::default();
    manager.insert_document("Menu.scene", SceneDocument::default());
    manager
        .open_scene(Path::new("Menu.scene"), OpenSceneMode::Single)
        .unwrap();
    let before = manager.setup();

    let mut auditor = ScenesAuditor::new(BuildSettings::from_paths([&one, &missing, &two]));
    auditor.initialize(&AuditSettings::default());

    let mut issues: Vec<ProjectIssue> = Vec::new();
    let summary = auditor.audit(&mut manager, &mut |issue| issues.push(issue), None, None);

    assert_eq!(summary.scenes_audited, 2);
    assert_eq!(summary.scenes_skipped, 1);
    assert_eq!(issues.len(), 2);

    let row = |i: usize, p: SceneProperty| issues[i].property_as_usize(p).unwrap();
    // Level01: Wall, Crate (1), Lid, Crate (2)
    assert_eq!(row(0, SceneProperty::NumObjects), 4);
    assert_eq!(row(0, SceneProperty::NumPrefabs), 2);
    assert_eq!(row(0, SceneProperty::NumMaterials), 1);
    assert_eq!(row(0, SceneProperty::NumShaders), 1);
    assert_eq!(row(0, SceneProperty::NumTextures), 1);
    // Level02: Floor with Brick + Wood
    assert_eq!(row(1, SceneProperty::NumObjects), 1);
    assert_eq!(row(1, SceneProperty::NumMaterials), 2);
    assert_eq!(row(1, SceneProperty::NumShaders), 1);

    // Brick is shared across files
    assert_eq!(summary.aggregate.materials, 2);
    assert_eq!(summary.aggregate.shaders, 1);
    assert_eq!(summary.aggregate.textures, 1);
    assert_eq!(summary.aggregate.objects, 5);
    assert_eq!(summary.aggregate.prefabs, 2);
    assert_eq!(manager.assets().materials.len(), 2, "Brick loaded once for both files");

    assert_eq!(manager.setup(), before);
    assert_eq!(manager.active_path(), Some(Path::new("Menu.scene")));
}

#[test]
fn malformed_scene_file_fails_without_stopping_the_run() {
    init_logger();
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("Bad.scene");
    std::fs::write(&bad, "[1, 2").unwrap();
    let good = write_scene(dir.path(), "Good.scene", &level_two());

    let mut manager = SceneManager::default();
    let auditor = ScenesAuditor::new(BuildSettings::from_paths([&bad, &good]));

    let mut issues = Vec::new();
    let summary = auditor.run(&mut manager, &mut |issue| issues.push(issue), None);

    assert_eq!(summary.scenes_failed, 1);
    assert_eq!(summary.scenes_audited, 1);
    assert_eq!(issues.len(), 1);
    // Nothing was open before the run, so nothing is open after it
    assert!(manager.setup().is_empty());
    assert_eq!(manager.loaded_count(), 0);
}

// ============================================================================
// Settings Files
// ============================================================================

#[test]
fn build_and_audit_settings_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let build = dir.path().join("build.json");
    let audit = dir.path().join("audit.json");
    std::fs::write(
        &build,
        r#"{ "scenes": [ { "path": "A.scene" }, { "path": "B.scene", "enabled": false } ] }"#,
    )
    .unwrap();
    std::fs::write(&audit, r#"{ "skip_disabled_scenes": true }"#).unwrap();

    let build = BuildSettings::load(&build).unwrap();
    assert_eq!(build.len(), 2);
    assert!(build.scenes[0].enabled);
    assert!(!build.scenes[1].enabled);

    let audit = AuditSettings::load(&audit).unwrap();
    assert!(audit.skip_disabled_scenes);
    assert!(audit.log_summary, "Unset fields keep their defaults");
}
