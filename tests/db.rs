use diesel::prelude::*;

use b2b_wholesale::schema::{categories, product_faqs, product_images, products, shops, users};

mod common;

#[test]
fn migrations_create_the_catalog_schema() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("connection from pool");

    // Counting against each table proves the migrated schema exposes it.
    let empty_counts = [
        users::table.count().get_result::<i64>(&mut conn),
        categories::table.count().get_result::<i64>(&mut conn),
        products::table.count().get_result::<i64>(&mut conn),
        product_images::table.count().get_result::<i64>(&mut conn),
        product_faqs::table.count().get_result::<i64>(&mut conn),
        shops::table.count().get_result::<i64>(&mut conn),
    ];

    for count in empty_counts {
        assert_eq!(count.expect("table should exist after migrations"), 0);
    }
}
