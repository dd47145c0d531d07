//! End-to-end install: resolve, download over HTTP, unpack

use super::common::{container_for, mount_release_pages, release_json};
use flate2::write::GzEncoder;
use flate2::Compression;
use relver::core::RelverError;
use relver::di::ConfigProvider;
use relver::installer::{Installer, NeovimInstaller};
use regex::Regex;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPO: &str = "neovim/neovim";
const ARCHIVE: &str = "nvim-linux-x86_64.tar.gz";

fn nvim_archive() -> Vec<u8> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (name, data) in [
        ("nvim-linux-x86_64/bin/nvim", "#!/bin/sh\necho nvim\n"),
        ("nvim-linux-x86_64/share/nvim/runtime/filetype.lua", "-- filetypes\n"),
    ] {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder.append_data(&mut header, name, data.as_bytes()).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

async fn serve_release(server: &MockServer) {
    let uri = server.uri();
    mount_release_pages(
        server,
        REPO,
        30,
        &[vec![
            release_json(&uri, REPO, "v0.10.1", &[ARCHIVE, "nvim-win64.zip"]),
            release_json(&uri, REPO, "v0.10.0", &[ARCHIVE, "nvim-win64.zip"]),
        ]],
    )
    .await;
    Mock::given(method("GET"))
        .and(path(format!("/download/{}/v0.10.1/{}", REPO, ARCHIVE)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(nvim_archive()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_install_neovim_archive() {
    let server = MockServer::start().await;
    serve_release(&server).await;

    let temp = TempDir::new().unwrap();
    let container = container_for(&server, temp.path(), 30);
    let installer = NeovimInstaller::with_pattern(Regex::new(r"^nvim-linux-x86_64\.tar\.gz$").unwrap());
    let mut resolver = container.resolver(installer.repository().clone());

    let resolution = resolver.resolve("head").await.unwrap();
    let install_root = container.config().install_dir().unwrap();
    let bin = installer
        .install(&resolver, &resolution.version, &install_root)
        .await
        .unwrap();

    let version_dir = temp.path().join("installs").join("neovim").join("0.10.1");
    assert_eq!(bin, version_dir.join("bin").join("nvim"));
    assert_eq!(std::fs::read_to_string(&bin).unwrap(), "#!/bin/sh\necho nvim\n");
    assert!(version_dir.join("share/nvim/runtime/filetype.lua").is_file());
}

#[tokio::test]
async fn test_install_reports_available_assets() {
    let server = MockServer::start().await;
    serve_release(&server).await;

    let temp = TempDir::new().unwrap();
    let container = container_for(&server, temp.path(), 30);
    let installer = NeovimInstaller::with_pattern(Regex::new(r"^nvim-macos").unwrap());
    let mut resolver = container.resolver(installer.repository().clone());

    let resolution = resolver.resolve("0.10.1").await.unwrap();
    let err = installer
        .install(&resolver, &resolution.version, temp.path())
        .await
        .unwrap_err();

    match err {
        RelverError::AssetNotFound { available, .. } => {
            assert_eq!(available, vec![ARCHIVE, "nvim-win64.zip"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}
