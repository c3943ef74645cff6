//! Semantics of the in-memory backend, exercised through the driver seam.

use pretty_assertions::assert_eq;
use spanner_harness::{
    driver::{
        operation::{
            Apply, CreateDatabase, CreateInstance, ExecuteSql, ListDatabases, Read, WaitOperation,
        },
        LongRunningOperation, Response,
    },
    stmt::{KeySet, Mutation, Rows, Value},
    DatabasePath, InstancePath,
};
use spanner_harness_core::{Connection, Driver};
use spanner_harness_driver_memory::Memory;

const SCHEMA: &str = "CREATE TABLE Scores (
    Player STRING(64) NOT NULL,
    Round INT64 NOT NULL,
    Points INT64,
    Note STRING(MAX),
) PRIMARY KEY (Player, Round)";

struct Db {
    memory: Memory,
    connection: Box<dyn Connection>,
    path: DatabasePath,
}

impl Db {
    async fn new() -> Db {
        let memory = Memory::new();
        let mut connection = memory.connect().await.unwrap();
        let instance = InstancePath::testing();

        connection
            .exec(CreateInstance::emulator(instance.clone()).into())
            .await
            .unwrap();

        let pending = connection
            .exec(
                CreateDatabase {
                    instance: instance.clone(),
                    database_id: "scores".into(),
                    extra_statements: vec![SCHEMA.into()],
                }
                .into(),
            )
            .await
            .unwrap()
            .into_pending()
            .unwrap();

        assert!(pending.done);
        connection
            .exec(WaitOperation::from(pending).into())
            .await
            .unwrap();

        Db {
            memory,
            connection,
            path: instance.database("scores"),
        }
    }

    async fn apply(&mut self, mutations: Vec<Mutation>) -> spanner_harness::Result<()> {
        self.connection
            .exec(
                Apply {
                    database: self.path.clone(),
                    mutations,
                }
                .into(),
            )
            .await
            .map(|_| ())
    }

    async fn read(&mut self, key_set: KeySet) -> Vec<Vec<Value>> {
        let rows: Rows = self
            .connection
            .exec(
                Read {
                    database: self.path.clone(),
                    table: "Scores".into(),
                    columns: vec!["Player".into(), "Round".into(), "Points".into(), "Note".into()],
                    key_set,
                }
                .into(),
            )
            .await
            .unwrap()
            .into_rows()
            .unwrap();

        rows.into_iter().map(|row| row.into_values()).collect()
    }
}

fn score(player: &str, round: i64, points: i64) -> Mutation {
    Mutation::insert(
        "Scores",
        ["Player", "Round", "Points"],
        [Value::from(player), Value::I64(round), Value::I64(points)],
    )
}

fn row(player: &str, round: i64, points: Value, note: Value) -> Vec<Value> {
    vec![Value::from(player), Value::I64(round), points, note]
}

#[tokio::test]
async fn reads_come_back_in_key_order() {
    let mut db = Db::new().await;
    db.apply(vec![score("bob", 1, 5), score("alice", 2, 7), score("alice", 1, 3)])
        .await
        .unwrap();

    assert_eq!(
        db.read(KeySet::all()).await,
        [
            row("alice", 1, Value::I64(3), Value::Null),
            row("alice", 2, Value::I64(7), Value::Null),
            row("bob", 1, Value::I64(5), Value::Null),
        ]
    );

    let keys = KeySet::composite_keys(vec![
        vec![Value::from("bob"), Value::I64(1)],
        vec![Value::from("alice"), Value::I64(2)],
        vec![Value::from("alice"), Value::I64(2)],
        vec![Value::from("carol"), Value::I64(1)],
    ]);
    assert_eq!(
        db.read(keys).await,
        [
            row("alice", 2, Value::I64(7), Value::Null),
            row("bob", 1, Value::I64(5), Value::Null),
        ]
    );
}

#[tokio::test]
async fn update_changes_only_listed_columns() {
    let mut db = Db::new().await;
    db.apply(vec![Mutation::insert(
        "Scores",
        ["Player", "Round", "Points", "Note"],
        [Value::from("alice"), Value::I64(1), Value::I64(3), Value::from("first")],
    )])
    .await
    .unwrap();

    db.apply(vec![Mutation::update(
        "Scores",
        ["Player", "Round", "Points"],
        [Value::from("alice"), Value::I64(1), Value::I64(10)],
    )])
    .await
    .unwrap();

    assert_eq!(
        db.read(KeySet::all()).await,
        [row("alice", 1, Value::I64(10), Value::from("first"))]
    );
}

#[tokio::test]
async fn replace_resets_unlisted_columns() {
    let mut db = Db::new().await;
    db.apply(vec![Mutation::insert(
        "Scores",
        ["Player", "Round", "Points", "Note"],
        [Value::from("alice"), Value::I64(1), Value::I64(3), Value::from("first")],
    )])
    .await
    .unwrap();

    db.apply(vec![Mutation::replace(
        "Scores",
        ["Player", "Round", "Points"],
        [Value::from("alice"), Value::I64(1), Value::I64(4)],
    )])
    .await
    .unwrap();

    assert_eq!(
        db.read(KeySet::all()).await,
        [row("alice", 1, Value::I64(4), Value::Null)]
    );
}

#[tokio::test]
async fn insert_or_update_inserts_then_updates() {
    let mut db = Db::new().await;
    let upsert = |points: i64| {
        Mutation::insert_or_update(
            "Scores",
            ["Player", "Round", "Points"],
            [Value::from("bob"), Value::I64(2), Value::I64(points)],
        )
    };

    db.apply(vec![upsert(1)]).await.unwrap();
    db.apply(vec![upsert(2)]).await.unwrap();

    assert_eq!(
        db.read(KeySet::all()).await,
        [row("bob", 2, Value::I64(2), Value::Null)]
    );
}

#[tokio::test]
async fn delete_by_key_and_all() {
    let mut db = Db::new().await;
    db.apply(vec![score("a", 1, 1), score("b", 1, 1), score("c", 1, 1)])
        .await
        .unwrap();

    db.apply(vec![Mutation::delete(
        "Scores",
        KeySet::composite_keys(vec![
            vec![Value::from("b"), Value::I64(1)],
            vec![Value::from("zzz"), Value::I64(1)],
        ]),
    )])
    .await
    .unwrap();
    assert_eq!(db.read(KeySet::all()).await.len(), 2);

    db.apply(vec![Mutation::delete("Scores", KeySet::all())])
        .await
        .unwrap();
    assert!(db.read(KeySet::all()).await.is_empty());
}

#[tokio::test]
async fn unknown_table_and_column_are_not_found() {
    let mut db = Db::new().await;

    let err = db
        .apply(vec![Mutation::insert("Nope", ["ID"], [Value::I64(1)])])
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "{err}");

    let err = db
        .apply(vec![Mutation::insert(
            "Scores",
            ["Player", "Round", "Bogus"],
            [Value::from("a"), Value::I64(1), Value::I64(1)],
        )])
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "{err}");
}

#[tokio::test]
async fn write_without_full_key_is_invalid_argument() {
    let mut db = Db::new().await;

    let err = db
        .apply(vec![Mutation::insert("Scores", ["Player"], [Value::from("a")])])
        .await
        .unwrap_err();

    assert_eq!(err.remote_code(), Some(3));
}

#[tokio::test]
async fn sql_is_unsupported() {
    let mut db = Db::new().await;
    assert!(!db.connection.capability().sql);

    let err = db
        .connection
        .exec(
            ExecuteSql {
                database: db.path.clone(),
                statement: "SELECT 1".into(),
            }
            .into(),
        )
        .await
        .unwrap_err();

    assert!(err.is_unsupported_feature());
}

#[tokio::test]
async fn bad_ddl_creates_nothing() {
    let db = Db::new().await;
    let mut connection = db.memory.connect().await.unwrap();

    let err = connection
        .exec(
            CreateDatabase {
                instance: InstancePath::testing(),
                database_id: "broken".into(),
                extra_statements: vec![
                    "CREATE TABLE Ok (ID INT64) PRIMARY KEY (ID)".into(),
                    "CREATE TABLE Bad (ID INT64)".into(),
                ],
            }
            .into(),
        )
        .await
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(db.memory.database_ids(&InstancePath::testing()), ["scores"]);
}

#[tokio::test]
async fn listing_is_paginated() {
    let db = Db::new().await;
    let mut connection = db.memory.connect().await.unwrap();
    let instance = InstancePath::testing();

    for id in ["b", "c", "d"] {
        connection
            .exec(
                CreateDatabase {
                    instance: instance.clone(),
                    database_id: id.into(),
                    extra_statements: vec![],
                }
                .into(),
            )
            .await
            .unwrap();
    }

    let mut ids = vec![];
    let mut page_token = None;
    let mut pages = 0;

    loop {
        let page = connection
            .exec(
                ListDatabases {
                    instance: instance.clone(),
                    page_token: page_token.take(),
                    page_size: None,
                }
                .into(),
            )
            .await
            .unwrap()
            .into_databases()
            .unwrap();

        pages += 1;
        ids.extend(page.databases.iter().map(|db| db.database_id().to_string()));

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    assert_eq!(pages, 2);
    assert_eq!(ids, ["b", "c", "d", "scores"]);
}

#[tokio::test]
async fn waiting_on_unknown_operation_is_not_found() {
    let mut db = Db::new().await;

    let err = db
        .connection
        .exec(
            WaitOperation::from(LongRunningOperation {
                name: "projects/p/instances/i/operations/unknown".into(),
                done: false,
            })
            .into(),
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn creating_an_existing_instance_is_already_exists() {
    let mut db = Db::new().await;

    let err = db
        .connection
        .exec(CreateInstance::emulator(InstancePath::testing()).into())
        .await
        .unwrap_err();

    assert!(err.is_already_exists());
    assert!(matches!(
        db.connection
            .exec(CreateInstance::emulator(InstancePath::new("p", "other")).into())
            .await
            .unwrap(),
        Response::Pending(_)
    ));
}
