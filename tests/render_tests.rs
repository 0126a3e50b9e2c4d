//! Integration tests for the render command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::ogp_cmd;

#[test]
fn test_render_article() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("post.toml");
    fs::write(
        &page,
        r#"type = "article"
title = "How to Train Your Dragons"
url = "http://example.com/article/how-to-train-your-dragon"

[[images]]
url = "http://example.com/image/dragon.jpg"

[[authors]]
url = "http://example.com/profile/dragon-master"
"#,
    )
    .unwrap();

    ogp_cmd().arg("render").arg(&page).assert().success().stdout(
        "<meta property=\"og:type\" content=\"article\">\n\
         <meta property=\"og:title\" content=\"How to Train Your Dragons\">\n\
         <meta property=\"og:url\" content=\"http://example.com/article/how-to-train-your-dragon\">\n\
         <meta property=\"og:image\" content=\"http://example.com/image/dragon.jpg\">\n\
         <meta property=\"article:author\" content=\"http://example.com/profile/dragon-master\">\n",
    );
}

#[test]
fn test_render_uses_site_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("ogp.toml"), "site_name = \"Example\"\n").unwrap();
    fs::write(temp.path().join("index.toml"), "type = \"website\"\n").unwrap();

    ogp_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("index.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<meta property=\"og:site_name\" content=\"Example\">",
        ));
}

#[test]
fn test_render_list_format() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("song.toml");
    fs::write(&page, "type = \"music.song\"\nduration = 180\n").unwrap();

    ogp_cmd()
        .arg("render")
        .arg(&page)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("og:type = music.song\n"))
        .stdout(predicate::str::contains("music:duration = 180\n"))
        .stdout(predicate::str::contains("<meta").not());
}

#[test]
fn test_render_unknown_type_exit_code() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("page.toml");
    fs::write(&page, "type = \"blog\"\n").unwrap();

    ogp_cmd()
        .arg("render")
        .arg(&page)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown object type: 'blog'"))
        .stderr(predicate::str::contains("ogp types"));
}

#[test]
fn test_render_missing_type_exit_code() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("page.toml");
    fs::write(&page, "title = \"Untyped\"\n").unwrap();

    ogp_cmd()
        .arg("render")
        .arg(&page)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no 'type' key"));
}

#[test]
fn test_render_invalid_document_exit_code() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("page.toml");
    fs::write(&page, "type = \"book\"\nrelease_date = \"someday\"\n").unwrap();

    ogp_cmd()
        .arg("render")
        .arg(&page)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid document"));
}

#[test]
fn test_render_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("ogp.toml"), "site_name = [\n").unwrap();
    fs::write(temp.path().join("index.toml"), "type = \"website\"\n").unwrap();

    ogp_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("index.toml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}
