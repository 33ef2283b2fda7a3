use super::*;
use crate::model::Dimensions;
use crate::store::MemoryStore;

const D: Dimensions = Dimensions { width: 100.0, height: 50.0 };

#[tokio::test]
async fn writes_payload_under_fixed_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new(D);

    let path = download_dimensions(&store, dir.path()).await.unwrap();
    assert_eq!(path, dir.path().join("rectangle-dimensions.json"));

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, store.download().await.unwrap());
    let parsed: Dimensions = serde_json::from_slice(&written).unwrap();
    assert_eq!(parsed, D);
}

#[tokio::test]
async fn leaves_no_partial_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    download_dimensions(&MemoryStore::new(D), dir.path()).await.unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["rectangle-dimensions.json".to_string()]);
}

#[tokio::test]
async fn replaces_previous_export() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rectangle-dimensions.json"), b"stale").unwrap();

    let path = download_dimensions(&MemoryStore::new(D), dir.path()).await.unwrap();
    assert_ne!(std::fs::read(path).unwrap(), b"stale");
}

#[tokio::test]
async fn creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("exports").join("today");

    let path = download_dimensions(&MemoryStore::new(D), &nested).await.unwrap();
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[tokio::test]
async fn store_failure_is_download_failure_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let err = download_dimensions(&MemoryStore::empty(), dir.path()).await.unwrap_err();

    assert!(matches!(err, SyncError::DownloadFailure(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn unwritable_directory_is_export_write() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();

    let err = download_dimensions(&MemoryStore::new(D), &blocker).await.unwrap_err();
    match err {
        SyncError::ExportWrite { path, .. } => assert_eq!(path, blocker),
        other => panic!("expected ExportWrite, got {other:?}"),
    }
}

#[tokio::test]
async fn works_through_trait_object() {
    let dir = tempfile::tempdir().unwrap();
    let store: std::sync::Arc<dyn RemoteStore> = std::sync::Arc::new(MemoryStore::new(D));
    assert!(download_dimensions(store.as_ref(), dir.path()).await.is_ok());
}
