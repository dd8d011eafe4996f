//! Shared fixtures for route-registration tests.

use std::fs;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use resource_server::config::schema::{AppConfig, CacheConfig, ResourcesConfig};

/// On-disk fixture: two source directories, each with a `public` folder, plus
/// an optimized `dist/public` build under the first one.
pub struct AssetTree {
    // Held so the files outlive the test.
    #[allow(dead_code)]
    pub root: TempDir,
    pub server_dir: PathBuf,
    pub commons_dir: PathBuf,
}

pub fn asset_tree() -> AssetTree {
    let root = tempfile::tempdir().unwrap();
    let server_dir = root.path().join("server");
    let commons_dir = root.path().join("commons");

    write(&server_dir.join("public/app.js"), "server app");
    write(&server_dir.join("public/shared.txt"), "from server");
    write(&commons_dir.join("public/commons.js"), "commons lib");
    write(&commons_dir.join("public/shared.txt"), "from commons");

    write(&server_dir.join("dist/public/bundle.js"), "merged bundle");
    write(&server_dir.join("dist/public/css/all.css"), "merged styles");

    AssetTree {
        root,
        server_dir,
        commons_dir,
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Config over the fixture tree: version 1.0, an 86-second cache, and one
/// i18n bundle.
pub fn config(tree: &AssetTree, optimize: bool) -> AppConfig {
    AppConfig {
        version: "1.0".to_string(),
        context_url: "/portal".to_string(),
        asset_dirs: vec![tree.server_dir.clone(), tree.commons_dir.clone()],
        bundles: vec!["Portal".to_string()],
        resources: ResourcesConfig {
            optimize,
            cache: Some(CacheConfig {
                ms: None,
                seconds: Some(86),
            }),
        },
        ..AppConfig::default()
    }
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
