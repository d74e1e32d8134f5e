use scale::{classify, EntryKind, Error};
use tempfile::TempDir;

#[tokio::test]
async fn classify_regular_file() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("data.txt");
    std::fs::write(&file_path, b"x").unwrap();

    let info = classify(&file_path).await.unwrap();

    assert_eq!(info.kind, EntryKind::File);
    assert!(info.path.is_absolute());
    assert!(info.path.ends_with("data.txt"));
}

#[tokio::test]
async fn classify_directory() {
    let dir = TempDir::new().unwrap();

    let info = classify(dir.path()).await.unwrap();

    assert_eq!(info.kind, EntryKind::Directory);
}

#[tokio::test]
async fn classify_missing_path_is_typed() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no-such-entry");

    let result = classify(&missing).await;

    assert!(matches!(result, Err(Error::PathNotFound { ref path }) if path == &missing));
}

#[tokio::test]
async fn classify_relative_path_becomes_absolute() {
    let info = classify("Cargo.toml").await.unwrap();

    assert!(info.path.is_absolute());
    assert_eq!(info.kind, EntryKind::File);
}
