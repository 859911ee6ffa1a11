//! Car inventory report: budget filtering plus a JSON snapshot round-trip of the full
//! inventory, with snapshot outcomes logged to stderr.

use std::error::Error;
use std::sync::Arc;

use tabular_query::query::filter;
use tabular_query::report::render_table;
use tabular_query::snapshot::{load_snapshot, save_snapshot, SnapshotOptions, StdErrObserver};
use tabular_query::types::{DataType, Field, RecordSet, Schema, Value};

fn car_records() -> RecordSet {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int64),
        Field::new("make", DataType::Utf8),
        Field::new("model", DataType::Utf8),
        Field::new("year", DataType::Int64),
        Field::new("price", DataType::Int64),
    ]);
    let records = vec![
        (1, "Toyota", "Camry", 2021, 56500),
        (2, "Honda", "Civic", 2020, 22000),
        (3, "Ford", "Mustang", 2022, 30000),
        (4, "Chevrolet", "Cruze", 2019, 18000),
        (5, "Nissan", "Altima", 2023, 28000),
    ]
    .into_iter()
    .map(|(id, make, model, year, price)| {
        vec![
            Value::Int64(id),
            Value::Utf8(make.to_string()),
            Value::Utf8(model.to_string()),
            Value::Int64(year),
            Value::Int64(price),
        ]
    })
    .collect();
    RecordSet::new(schema, records)
}

fn main() -> Result<(), Box<dyn Error>> {
    let inventory = car_records();
    let budget = 25_000;

    println!("=== All Available Cars ===");
    print!("{}", render_table(&inventory));

    let price_idx = inventory.schema.require("price")?;
    let affordable = filter(&inventory, |record| {
        matches!(record[price_idx], Value::Int64(price) if price <= budget)
    });
    if affordable.is_empty() {
        println!("\nNo cars found within the budget of {budget}");
    } else {
        println!("\n=== Cars Within Budget of {budget} ===");
        print!("{}", render_table(&affordable));
    }

    let path = "car_inventory.json";
    let options = SnapshotOptions {
        observer: Some(Arc::new(StdErrObserver)),
        ..Default::default()
    };
    save_snapshot(&inventory, path, &options)?;
    let reloaded = load_snapshot(path, &inventory.schema, &options)?;

    println!("\n=== Summary ===");
    println!("Total cars in inventory: {}", inventory.record_count());
    println!("Cars within budget: {}", affordable.record_count());
    println!(
        "Inventory saved to {path}; reload matches original: {}",
        reloaded == inventory
    );

    Ok(())
}
