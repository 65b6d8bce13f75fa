use super::backend::JsonFileStore;
use super::config::StorageConfig;
use super::error::StorageError;
use super::traits::CustomerStore;
use shared_types::Customer;
use tempfile::TempDir;

fn create_test_store() -> (JsonFileStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = StorageConfig::Local {
        path: temp_dir.path().to_path_buf(),
    };
    let store = JsonFileStore::from_config(config).unwrap();
    (store, temp_dir)
}

fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new(1, "Alice", "Anderson", "Berlin", "Acme"),
        Customer::new(2, "Bob", "Brown", "Madrid", "Globex"),
    ]
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let (store, _dir) = create_test_store();

    let customers = sample_customers();
    store.save(&customers).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, customers);
}

#[tokio::test]
async fn test_save_overwrites_previous_collection() {
    let (store, _dir) = create_test_store();

    store.save(&sample_customers()).await.unwrap();

    let replacement = vec![Customer::new(1, "Carol", "Chen", "Oslo", "Initech")];
    store.save(&replacement).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, replacement);
}

#[tokio::test]
async fn test_load_missing_file_is_read_error() {
    let (store, _dir) = create_test_store();

    let err = store.load().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StorageError>(),
        Some(StorageError::Read(_))
    ));
}

#[tokio::test]
async fn test_load_rejects_corrupt_content() {
    let (store, dir) = create_test_store();

    std::fs::write(dir.path().join("customers.json"), b"not json at all").unwrap();

    let err = store.load().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StorageError>(),
        Some(StorageError::Read(_))
    ));
}

#[tokio::test]
async fn test_load_rejects_wrong_shape() {
    let (store, dir) = create_test_store();

    // A JSON object instead of the expected array of customers.
    std::fs::write(dir.path().join("customers.json"), br#"{"id": 1}"#).unwrap();

    let err = store.load().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StorageError>(),
        Some(StorageError::Read(_))
    ));
}

#[tokio::test]
async fn test_exists() {
    let (store, _dir) = create_test_store();

    assert!(!store.exists().await.unwrap());

    store.save(&[]).await.unwrap();
    assert!(store.exists().await.unwrap());
}

#[tokio::test]
async fn test_on_disk_shape_is_an_array_of_records() {
    let (store, dir) = create_test_store();

    store.save(&sample_customers()).await.unwrap();

    let raw = std::fs::read(dir.path().join("customers.json")).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["first_name"], "Alice");
    assert_eq!(records[0]["last_name"], "Anderson");
    assert_eq!(records[0]["city"], "Berlin");
    assert_eq!(records[0]["company"], "Acme");
}
