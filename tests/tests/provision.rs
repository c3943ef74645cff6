use spanner_harness::{EmulatorConfig, Harness, NameHasher, EMULATOR_HOST_VAR};
use spanner_harness_driver_memory::Memory;
use std::sync::Arc;
use tests::{tests, HarnessTest};

async fn ensure_instance_is_idempotent(test: &mut HarnessTest) {
    // The wrapper already provisioned the instance once.
    test.log().clear();

    test.harness().ensure_instance().await.unwrap();
    test.harness().ensure_instance().await.unwrap();

    assert_eq!(test.log().filter("create_instance").len(), 2);
}

async fn concurrent_ensure_instance_succeeds(test: &mut HarnessTest) {
    let harness = test.harness().clone();

    let (a, b) = tokio::join!(harness.ensure_instance(), harness.ensure_instance());
    a.unwrap();
    b.unwrap();
}

tests!(
    ensure_instance_is_idempotent,
    concurrent_ensure_instance_succeeds,
);

#[tokio::test]
async fn first_ensure_creates_the_instance() {
    let memory = Memory::new();
    let harness = Harness::with_hasher(Arc::new(memory.clone()), NameHasher::new());

    assert!(!memory.instance_exists(harness.instance()));
    harness.ensure_instance().await.unwrap();
    assert!(memory.instance_exists(harness.instance()));

    assert_eq!(
        harness.instance().to_string(),
        "projects/testing-project/instances/testing-instance"
    );
}

#[tokio::test]
async fn databases_need_a_provisioned_instance() {
    let harness = Harness::new(Memory::new());
    let client = harness.client("no-instance").await.unwrap();

    let err = client
        .create_database_with(["CREATE TABLE T (ID INT64) PRIMARY KEY (ID)"])
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().starts_with("failed to create database; database=db_"));
}

#[tokio::test]
async fn memory_url_selects_memory_backend() {
    let harness = Harness::connect("memory://").unwrap();
    harness.ensure_instance().await.unwrap();
    harness.ensure_instance().await.unwrap();
}

#[test]
fn missing_emulator_host_is_a_configuration_error() {
    let err = EmulatorConfig::from_lookup(|_| None).unwrap_err();

    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains(EMULATOR_HOST_VAR));
}

#[test]
fn unknown_driver_url_is_a_configuration_error() {
    let err = Harness::connect("mysql://localhost:3306").unwrap_err();
    assert!(err.is_invalid_configuration());
}
