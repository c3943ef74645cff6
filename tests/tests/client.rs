use spanner_harness::{
    driver::Operation,
    stmt::{KeySet, Mutation, Value},
};
use tests::{fixtures::User, tests, HarnessTest};

async fn create_database_sends_schema_statements(test: &mut HarnessTest) {
    let client = test.client().await;
    test.log().clear();

    client
        .create_database(tests::schema("users.sql"))
        .await
        .unwrap();

    let creates = test.log().filter("create_database");
    let [Operation::CreateDatabase(op)] = &creates[..] else {
        panic!("expected one create_database operation; got {creates:#?}");
    };

    assert_eq!(op.database_id, client.database_name().as_str());
    assert_eq!(
        op.create_statement(),
        format!("CREATE DATABASE `{}`", client.database_name())
    );
    assert_eq!(op.extra_statements.len(), 2);
    assert!(op.extra_statements[0].starts_with("CREATE TABLE Users ("));
    assert_eq!(op.extra_statements[1], "CREATE INDEX UsersByAge ON Users (Age)");

    // Creation blocks until the operation completed.
    assert_eq!(test.log().names().last(), Some(&"wait_operation"));

    client.drop_database().await.unwrap();
}

async fn create_database_twice_is_already_exists(test: &mut HarnessTest) {
    let client = test.client_with_schema("users.sql").await;

    let err = client
        .create_database(tests::schema("users.sql"))
        .await
        .unwrap_err();

    assert!(err.is_already_exists());
    let context = format!("failed to create database; database={}", client.database_name());
    assert!(err.to_string().starts_with(&context), "{err}");
}

async fn missing_schema_file_creates_nothing(test: &mut HarnessTest) {
    let client = test.client().await;
    test.log().clear();

    let err = client
        .create_database(tests::schema("missing.sql"))
        .await
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert!(test.log().is_empty());
}

async fn identifiers_map_to_distinct_databases(test: &mut HarnessTest) {
    let a = test.client().await;
    let b = test.client().await;

    assert_ne!(a.identifier(), b.identifier());
    assert_ne!(a.database_name(), b.database_name());
    assert_eq!(
        test.harness().hasher().derive_name(a.identifier()),
        *a.database_name()
    );
    assert_eq!(a.path().instance(), test.harness().instance());
}

async fn truncate_tables_commits_once(test: &mut HarnessTest) {
    let client = test.client_with_schema("users.sql").await;
    test.log().clear();

    client.truncate_tables([User::TABLE]).await.unwrap();

    let applies = test.log().filter("apply");
    let [Operation::Apply(op)] = &applies[..] else {
        panic!("expected one apply operation; got {applies:#?}");
    };
    assert_eq!(op.mutations, [Mutation::delete(User::TABLE, KeySet::all())]);

    // No tables, no round trip.
    test.log().clear();
    client.truncate_tables(Vec::<String>::new()).await.unwrap();
    assert!(test.log().is_empty());
}

async fn drop_database_is_immediate_and_idempotent(test: &mut HarnessTest) {
    let client = test.client_with_schema("users.sql").await;
    assert!(test.harness().registry().contains_name(client.database_name()));

    client.drop_database().await.unwrap();
    assert!(!test.harness().registry().contains_name(client.database_name()));

    // Already gone counts as dropped.
    client.drop_database().await.unwrap();

    let err = client
        .read(User::TABLE, User::COLUMNS, KeySet::all())
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "{err}");
}

async fn defer_drop_leaves_database_to_teardown(test: &mut HarnessTest) {
    let client = test.client().await;
    client
        .create_database(tests::schema("users.sql"))
        .await
        .unwrap();

    client.defer_drop();
    client.defer_drop();
    assert_eq!(test.harness().registry().len(), 1);

    // Still usable until the teardown pass.
    client
        .apply([User::new(1, "Jiro", 41).insert_or_update()])
        .await
        .unwrap();

    test.log().clear();
    test.harness().drop_all().await.unwrap();

    assert!(test.harness().registry().is_empty());
    let drops = test.log().filter("drop_database");
    let [Operation::DropDatabase(op)] = &drops[..] else {
        panic!("expected one drop_database operation; got {drops:#?}");
    };
    assert_eq!(op.database, *client.path());
}

async fn insert_of_existing_row_is_already_exists(test: &mut HarnessTest) {
    let client = test.client_with_schema("users.sql").await;
    let user = User::new(1, "Jiro", 41);

    let insert = || {
        Mutation::insert(
            User::TABLE,
            User::COLUMNS,
            [
                Value::from(user.id),
                Value::from(user.name.as_str()),
                Value::from(user.age),
            ],
        )
    };

    client.apply([insert()]).await.unwrap();
    let err = client.apply([insert()]).await.unwrap_err();
    assert!(err.is_already_exists(), "{err}");
}

async fn update_of_missing_row_is_not_found(test: &mut HarnessTest) {
    let client = test.client_with_schema("users.sql").await;

    let err = client
        .apply([Mutation::update(
            User::TABLE,
            ["ID", "Age"],
            [Value::I64(404), Value::I64(30)],
        )])
        .await
        .unwrap_err();

    assert!(err.is_not_found(), "{err}");
}

async fn failed_commit_applies_nothing(test: &mut HarnessTest) {
    let client = test.client_with_schema("users.sql").await;
    client
        .apply([User::new(0, "Taro", 25).insert_or_update()])
        .await
        .unwrap();

    let new_user = User::new(3, "Saburo", 30);
    let duplicate = Mutation::insert(
        User::TABLE,
        User::COLUMNS,
        [Value::I64(0), Value::from("Taro"), Value::I64(25)],
    );

    let err = client
        .apply([new_user.insert_or_update(), duplicate])
        .await
        .unwrap_err();
    assert!(err.is_already_exists(), "{err}");

    let rows = client
        .read(User::TABLE, User::COLUMNS, KeySet::keys([3_i64]))
        .await
        .unwrap();
    assert!(rows.is_empty());
}

tests!(
    create_database_sends_schema_statements,
    create_database_twice_is_already_exists,
    missing_schema_file_creates_nothing,
    identifiers_map_to_distinct_databases,
    truncate_tables_commits_once,
    drop_database_is_immediate_and_idempotent,
    defer_drop_leaves_database_to_teardown,
    insert_of_existing_row_is_already_exists,
    update_of_missing_row_is_not_found,
    failed_commit_applies_nothing,
);
