use pretty_assertions::assert_eq;
use spanner_harness::stmt::{KeySet, Statement};
use tests::{fixtures::Item, tests, HarnessTest};

async fn read_all_items(test: &mut HarnessTest) {
    let client = test.client_with_schema("items.sql").await;

    client
        .apply(Item::samples().iter().map(Item::insert_or_update))
        .await
        .unwrap();

    let items = client
        .read(Item::TABLE, Item::COLUMNS, KeySet::all())
        .await
        .unwrap()
        .decode(Item::from_row)
        .unwrap();

    assert_eq!(items, Item::samples());
}

async fn insert_or_update_overwrites(test: &mut HarnessTest) {
    let client = test.client_with_schema("items.sql").await;

    client
        .apply(Item::samples().iter().map(Item::insert_or_update))
        .await
        .unwrap();
    client
        .apply([Item::new(2, "Sofa", "Furniture").insert_or_update()])
        .await
        .unwrap();

    let items = client
        .read(Item::TABLE, Item::COLUMNS, KeySet::keys([2_i64]))
        .await
        .unwrap()
        .decode(Item::from_row)
        .unwrap();

    assert_eq!(items, [Item::new(2, "Sofa", "Furniture")]);
}

async fn query_items_by_category(test: &mut HarnessTest) {
    if !test.capability().sql {
        return;
    }

    let client = test.client_with_schema("items.sql").await;

    let cases = [
        (
            Statement::new("SELECT ID, Name, Category FROM Items ORDER BY ID"),
            Item::samples(),
        ),
        (
            Statement::new(
                "SELECT ID, Name, Category FROM Items WHERE Category = @category ORDER BY ID",
            )
            .bind("category", "Fruit"),
            vec![Item::new(0, "Orange", "Fruit"), Item::new(1, "Grape", "Fruit")],
        ),
    ];

    for (statement, want) in cases {
        client
            .apply(Item::samples().iter().map(Item::insert_or_update))
            .await
            .unwrap();

        let got = client
            .query(statement)
            .await
            .unwrap()
            .decode(Item::from_row)
            .unwrap();

        assert_eq!(got, want);

        client.truncate_tables([Item::TABLE]).await.unwrap();
    }
}

tests!(
    read_all_items,
    insert_or_update_overwrites,
    query_items_by_category,
);
