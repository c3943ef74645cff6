use pretty_assertions::assert_eq;
use spanner_harness::stmt::{KeySet, Statement};
use tests::{fixtures::User, tests, HarnessTest};

async fn read_all_users(test: &mut HarnessTest) {
    let client = test.client_with_schema("users.sql").await;

    client
        .apply(User::samples().iter().map(User::insert_or_update))
        .await
        .unwrap();

    let users = client
        .read(User::TABLE, User::COLUMNS, KeySet::all())
        .await
        .unwrap()
        .decode(User::from_row)
        .unwrap();

    assert_eq!(users, User::samples());
}

async fn read_users_by_id(test: &mut HarnessTest) {
    let client = test.client_with_schema("users.sql").await;

    client
        .apply(User::samples().iter().map(User::insert_or_update))
        .await
        .unwrap();

    let mut users = client
        .read(User::TABLE, User::COLUMNS, KeySet::keys([2_i64, 0, 7]))
        .await
        .unwrap()
        .decode(User::from_row)
        .unwrap();
    users.sort_by_key(|user| user.id);

    assert_eq!(users, [User::new(0, "Taro", 25), User::new(2, "Hanako", 28)]);
}

async fn read_projects_columns(test: &mut HarnessTest) {
    let client = test.client_with_schema("users.sql").await;
    client
        .apply([User::new(5, "Saburo", 33).insert_or_update()])
        .await
        .unwrap();

    let rows = client
        .read(User::TABLE, ["Age", "Name"], KeySet::keys([5_i64]))
        .await
        .unwrap();

    assert_eq!(rows.columns(), ["Age", "Name"]);
    let row = rows.iter().next().unwrap();
    assert_eq!(row.get::<i64>(0).unwrap(), 33);
    assert_eq!(row.get_by_name::<String>("Name").unwrap(), "Saburo");
}

/// Cases share one database and run one after the other; each truncates the
/// table when done.
async fn query_samples(test: &mut HarnessTest) {
    if !test.capability().sql {
        return;
    }

    let client = test.client_with_schema("users.sql").await;

    let cases = [
        (
            Statement::new("SELECT ID, Name, Age FROM Users ORDER BY ID"),
            User::samples(),
        ),
        (
            Statement::new("SELECT ID, Name, Age FROM Users WHERE Age > @age ORDER BY ID")
                .bind("age", 40_i64),
            vec![User::new(1, "Jiro", 41)],
        ),
    ];

    for (statement, want) in cases {
        client
            .apply(User::samples().iter().map(User::insert_or_update))
            .await
            .unwrap();

        let got = client
            .query(statement)
            .await
            .unwrap()
            .decode(User::from_row)
            .unwrap();

        assert_eq!(got, want);

        client.truncate_tables([User::TABLE]).await.unwrap();
    }
}

async fn query_without_sql_support_fails(test: &mut HarnessTest) {
    if test.capability().sql {
        return;
    }

    let client = test.client_with_schema("users.sql").await;
    let err = client
        .query("SELECT ID FROM Users")
        .await
        .unwrap_err();

    assert!(err.is_unsupported_feature());
    assert!(err.to_string().starts_with("failed to query; database=db_"));
}

async fn truncate_empties_the_table(test: &mut HarnessTest) {
    let client = test.client_with_schema("users.sql").await;

    client
        .apply(User::samples().iter().map(User::insert_or_update))
        .await
        .unwrap();
    client.truncate_tables([User::TABLE]).await.unwrap();

    let rows = client
        .read(User::TABLE, User::COLUMNS, KeySet::all())
        .await
        .unwrap();
    assert!(rows.is_empty());

    // The table is still usable.
    client
        .apply([User::new(9, "Shiro", 19).insert_or_update()])
        .await
        .unwrap();
    let rows = client
        .read(User::TABLE, User::COLUMNS, KeySet::all())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

tests!(
    read_all_users,
    read_users_by_id,
    read_projects_columns,
    query_samples,
    query_without_sql_support_fails,
    truncate_empties_the_table,
);
