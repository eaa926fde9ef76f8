//! Library integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use stampcache::cache::{CacheStore, EnsureStorePath, OverwritePolicy, StoreInit};
use stampcache::fingerprint::{compute_fingerprint, FileFingerprint};
use stampcache::StampCacheError;
use tempfile::TempDir;

fn ready_store(root: &Path) -> CacheStore {
    match CacheStore::open(root, EnsureStorePath::Create) {
        StoreInit::Ready(store) => store,
        StoreInit::Disabled(d) => panic!("store disabled: {}", d.reason()),
    }
}

fn write_with_mtime(path: &Path, content: &[u8], secs: u64) {
    fs::write(path, content).unwrap();
    let file = fs::OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

#[test]
fn error_types_are_public() {
    let err = StampCacheError::InvalidFile {
        path: PathBuf::from("/x"),
    };
    assert!(err.to_string().contains("/x"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> stampcache::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn fingerprint_is_deterministic_for_fixed_inputs() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a.txt");
    write_with_mtime(&file, b"data", 1_700_000_000);

    let first = compute_fingerprint(&file).unwrap();

    // Rewriting identical bytes and restoring the mtime gives the same key,
    // as a fresh process would see it.
    write_with_mtime(&file, b"data", 1_700_000_000);
    let second = compute_fingerprint(&file).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.to_string().parse::<FileFingerprint>().unwrap(),
        first
    );
}

#[test]
fn touch_and_resize_change_fingerprint() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a.bin");
    write_with_mtime(&file, b"HEADER00body", 1_700_000_000);
    let base = compute_fingerprint(&file).unwrap();

    write_with_mtime(&file, b"HEADER00body", 1_700_000_001);
    let touched = compute_fingerprint(&file).unwrap();

    write_with_mtime(&file, b"HEADER00bod", 1_700_000_000);
    let truncated = compute_fingerprint(&file).unwrap();

    assert_ne!(base, touched);
    assert_ne!(base, truncated);
}

#[test]
fn round_trip() {
    let temp = TempDir::new().unwrap();
    let store = ready_store(&temp.path().join("cache"));
    let file = temp.path().join("f");
    fs::write(&file, "source").unwrap();

    let key = store.add(&file, "X", OverwritePolicy::Overwrite).unwrap();

    assert_eq!(store.content(key).as_deref(), Some("X"));
    assert_eq!(store.content_or_empty(key), "X");
}

#[test]
fn no_overwrite_law() {
    let temp = TempDir::new().unwrap();
    let store = ready_store(&temp.path().join("cache"));
    let file = temp.path().join("f");
    fs::write(&file, "source").unwrap();

    let key = store
        .add(&file, "A", OverwritePolicy::DoNotOverwrite)
        .unwrap();
    let second = store.add(&file, "B", OverwritePolicy::DoNotOverwrite);

    assert!(matches!(second, Err(StampCacheError::AlreadyCached { .. })));
    assert_eq!(store.content(key).as_deref(), Some("A"));
}

#[test]
fn overwrite_law() {
    let temp = TempDir::new().unwrap();
    let store = ready_store(&temp.path().join("cache"));
    let file = temp.path().join("f");
    fs::write(&file, "source").unwrap();

    let key = store
        .add(&file, "A", OverwritePolicy::DoNotOverwrite)
        .unwrap();
    store.add(&file, "B", OverwritePolicy::Overwrite).unwrap();

    assert_eq!(store.content(key).as_deref(), Some("B"));
}

#[test]
fn existence_follows_entry_file() {
    let temp = TempDir::new().unwrap();
    let store = ready_store(&temp.path().join("cache"));
    let file = temp.path().join("f");
    fs::write(&file, "source").unwrap();

    let key = store
        .add(&file, "payload", OverwritePolicy::DoNotOverwrite)
        .unwrap();
    assert!(store.exists_for(&file));
    assert!(store.exists(key));

    fs::remove_file(store.root().join(key.to_string())).unwrap();
    assert!(!store.exists_for(&file));
    assert!(!store.exists(key));
}

#[test]
fn missing_root_without_create_degrades() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("f");
    fs::write(&file, "source").unwrap();

    let init = CacheStore::open(temp.path().join("absent"), EnsureStorePath::AssumeExists);

    assert!(!init.is_initialized());
    assert!(!init.exists_for(&file));
    assert!(!init.exists(FileFingerprint::new(0)));
    assert_eq!(init.content_or_empty(FileFingerprint::new(0)), "");
    assert!(matches!(
        init.add(&file, "x", OverwritePolicy::Overwrite),
        Err(StampCacheError::StoreDisabled { .. })
    ));
}

#[test]
fn stale_file_scenario() {
    let temp = TempDir::new().unwrap();
    let store = ready_store(&temp.path().join("cache_test"));
    let file = temp.path().join("a.txt");
    fs::write(&file, "data").unwrap();

    let key = store
        .add(&file, "payload1", OverwritePolicy::DoNotOverwrite)
        .unwrap();
    assert_eq!(store.content(key).as_deref(), Some("payload1"));

    fs::write(&file, "data2").unwrap();

    assert!(!store.exists_for(&file));
    assert!(store.exists(key));
    assert_eq!(store.content(key).as_deref(), Some("payload1"));
}

#[test]
fn entry_file_name_is_decimal_key() {
    let temp = TempDir::new().unwrap();
    let store = ready_store(&temp.path().join("cache"));
    let file = temp.path().join("f");
    fs::write(&file, "source").unwrap();

    let key = store.add(&file, "p", OverwritePolicy::Overwrite).unwrap();

    let names: Vec<String> = fs::read_dir(store.root())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec![key.value().to_string()]);
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use stampcache::cli::{Cli, Commands};

    let cli = Cli::parse_from(["stampcache", "list", "--json"]);

    if let Commands::List(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected List command");
    }
}
