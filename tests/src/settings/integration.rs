#![cfg(test)]
use pinger_common::config::Config;
use pinger_common::error::ValidationError;
use pinger_common::settings::SettingsRepository;
use pinger_common::target::{Target, TargetCandidate};
use pinger_core::settings::{FileSettingsRepo, open_repository};
use pinger_core::{Session, TcpProber};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use crate::utils::{closed_target, open_target};

fn file_session(dir: &TempDir) -> Session {
    let repo = FileSettingsRepo::new(dir.path().join("settings.toml"));
    Session::new(Box::new(repo), Arc::new(TcpProber::new(Duration::from_millis(1500))))
}

#[test]
fn fresh_install_uses_default_target() {
    let dir = TempDir::new().unwrap();
    let session = file_session(&dir);

    assert_eq!(session.target(), Target::new("google.com", 80));
}

#[test]
fn saved_target_survives_restart() {
    let dir = TempDir::new().unwrap();

    let first = file_session(&dir);
    first
        .on_settings_saved(TargetCandidate::new("example.net", 8080))
        .unwrap();
    drop(first);

    let second = file_session(&dir);
    assert_eq!(second.target(), Target::new("example.net", 8080));
}

#[test]
fn out_of_range_edit_leaves_storage_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    let session = file_session(&dir);
    session
        .on_settings_saved(TargetCandidate::new("kept.example", 443))
        .unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let result = session.on_settings_saved(TargetCandidate::new("lost.example", 70000));

    assert_eq!(result, Err(ValidationError::PortOutOfRange(70000)));
    assert_eq!(session.target(), Target::new("kept.example", 443));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(
        FileSettingsRepo::new(&path).load(),
        Target::new("kept.example", 443)
    );
}

#[test]
fn ephemeral_session_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    let cfg = Config {
        settings_path: Some(path.clone()),
        ephemeral: true,
        ..Config::default()
    };

    let session = Session::new(open_repository(&cfg).unwrap(), Arc::new(TcpProber::default()));
    session
        .on_settings_saved(TargetCandidate::new("example.org", 22))
        .unwrap();

    assert_eq!(session.target(), Target::new("example.org", 22));
    assert!(!path.exists());
}

#[tokio::test]
async fn check_follows_committed_edits() {
    let dir = TempDir::new().unwrap();
    let session = file_session(&dir);
    let (_listener, open) = open_target();
    let closed = closed_target();

    session
        .on_settings_saved(TargetCandidate::from(&open))
        .unwrap();
    let result = session.on_check_requested().await;
    assert_eq!(result.target, open);
    assert!(result.reachable);

    session
        .on_settings_saved(TargetCandidate::from(&closed))
        .unwrap();
    let result = session.spawn_check().await.unwrap();
    assert_eq!(result.target, closed);
    assert!(!result.reachable);
}
