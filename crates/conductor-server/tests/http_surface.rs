//! HTTP surface tests over a real listener.

#![allow(missing_docs)]

use std::io::Write;
use std::net::SocketAddr;

use conductor_server::{PackageInfo, router};

async fn spawn_app(package: PackageInfo) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let _ = tokio::spawn(async move {
        axum::serve(listener, router(package)).await.unwrap();
    });
    addr
}

fn fixture_package(dir: &tempfile::TempDir) -> PackageInfo {
    let path = dir.path().join("conductor-release.apk");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"not a real apk, but enough bytes to serve").unwrap();
    PackageInfo::resolve(Some(&path)).unwrap()
}

#[tokio::test]
async fn landing_page_shows_package_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let addr = spawn_app(fixture_package(&dir)).await;

    let body = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Conductor Mobile"));
    assert!(body.contains("conductor-release.apk"));
}

#[tokio::test]
async fn index_html_is_the_same_page() {
    let dir = tempfile::tempdir().unwrap();
    let addr = spawn_app(fixture_package(&dir)).await;

    let response = reqwest::get(format!("http://{addr}/index.html")).await.unwrap();
    assert!(response.status().is_success());
    assert!(response.text().await.unwrap().contains("Installation Steps"));
}

#[tokio::test]
async fn package_download_carries_apk_headers() {
    let dir = tempfile::tempdir().unwrap();
    let package = fixture_package(&dir);
    let expected = std::fs::read(&package.path).unwrap();
    let addr = spawn_app(package).await;

    let response = reqwest::get(format!("http://{addr}/conductor-release.apk"))
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/vnd.android.package-archive")
    );
    assert!(
        response
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("attachment"))
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), expected);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let addr = spawn_app(fixture_package(&dir)).await;

    let response = reqwest::get(format!("http://{addr}/other.apk")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let response = reqwest::get(format!("http://{addr}/deep/path")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
