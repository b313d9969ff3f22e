use std::sync::Arc;

use tempfile::TempDir;

use font_version_resolver::version::catalogs::{InMemoryCatalog, JsonDirCatalog};
use font_version_resolver::version::error::{CatalogError, LookupError, ResolveError, SpecError};
use font_version_resolver::version::lookup::{ResolvedPackage, VersionLookup};

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("roboto.json"),
        r#"{
            "type": "npm",
            "name": "@fontsource/roboto",
            "versions": [
                { "version": "5.0.8" },
                { "version": "5.0.10" },
                { "version": "5.1.0-beta.1" },
                { "version": "4.5.8" }
            ]
        }"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("broken.json"), r#"{"name":"broken"}"#).unwrap();
    dir
}

#[tokio::test]
async fn lookup_resolves_specs_from_json_directory() {
    let dir = fixture_dir();
    let lookup = VersionLookup::new(Arc::new(JsonDirCatalog::new(dir.path())));

    let results = lookup
        .lookup_all(&["roboto@latest", "roboto@4", "roboto@5.0", "roboto@5.0.8"])
        .await;

    let versions: Vec<String> = results
        .into_iter()
        .map(|r| r.unwrap().version)
        .collect();
    assert_eq!(versions, vec!["5.0.10", "4.5.8", "5.0.10", "5.0.8"]);
}

#[tokio::test]
async fn lookup_maps_failures_to_status_codes() {
    let dir = fixture_dir();
    let lookup = VersionLookup::new(Arc::new(JsonDirCatalog::new(dir.path())));

    let cases = [
        ("roboto@5.1", 404),
        ("roboto@x", 400),
        ("inter@latest", 404),
        ("broken@latest", 404),
        ("@latest", 400),
        ("roboto", 400),
    ];

    for (spec, status) in cases {
        let error = lookup.lookup(spec).await.unwrap_err();
        assert_eq!(error.status_code(), status, "{spec}: {error}");
    }
}

#[tokio::test]
async fn lookup_reports_typed_errors() {
    let catalog = InMemoryCatalog::new().with_versions("inter", vec!["5.1.0", "4.5.15"]);
    let lookup = VersionLookup::new(Arc::new(catalog));

    assert_eq!(
        lookup.lookup("inter@4").await.unwrap(),
        ResolvedPackage {
            id: "inter".to_string(),
            tag: "4".to_string(),
            version: "4.5.15".to_string(),
        }
    );
    assert!(matches!(
        lookup.lookup("inter@3").await,
        Err(LookupError::Resolve(ResolveError::NotFound(_)))
    ));
    assert!(matches!(
        lookup.lookup("roboto@1").await,
        Err(LookupError::Catalog(CatalogError::NotFound(_)))
    ));
    assert!(matches!(
        lookup.lookup("@1").await,
        Err(LookupError::Spec(SpecError::MissingId(_)))
    ));
}
