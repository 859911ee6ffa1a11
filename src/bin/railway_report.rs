//! Railway reservation report: waiting list and availability counts, price extremes,
//! per-partition seat listings, and revenue/occupancy statistics.

use std::error::Error;

use tabular_query::query::{extremum, filter, summary_stats, ExtremumMode};
use tabular_query::report::render_table;
use tabular_query::types::{DataType, Field, RecordSet, Schema, Value};

fn seat_records() -> RecordSet {
    let schema = Schema::new(vec![
        Field::new("seat", DataType::Int64),
        Field::new("passenger", DataType::Utf8),
        Field::new("price", DataType::Int64),
        Field::new("available", DataType::Bool),
    ]);
    let records = vec![
        (101, "John", 250, true),
        (102, "Alice", 300, false),
        (103, "Bob", 400, true),
        (104, "Emma", 350, false),
        (105, "David", 500, true),
    ]
    .into_iter()
    .map(|(seat, passenger, price, available)| {
        vec![
            Value::Int64(seat),
            Value::Utf8(passenger.to_string()),
            Value::Int64(price),
            Value::Bool(available),
        ]
    })
    .collect();
    RecordSet::new(schema, records)
}

fn main() -> Result<(), Box<dyn Error>> {
    let seats = seat_records();
    let seat_idx = seats.schema.require("seat")?;
    let passenger_idx = seats.schema.require("passenger")?;
    let price_idx = seats.schema.require("price")?;
    let available_idx = seats.schema.require("available")?;

    println!("=== Reservation Overview ===");
    print!("{}", render_table(&seats));

    let stats = summary_stats(&seats, "price", Some("available"))?;
    let parts = stats.partition.unwrap_or_default();

    println!("\n=== Waiting List ===");
    println!("Passengers waiting on reserved seats: {}", parts.count_where_false);

    println!("\n=== Highest Ticket Price ===");
    match extremum(&seats, "price", ExtremumMode::Max)? {
        Some(highest) => println!(
            "Seat {} at ${}",
            highest.record[seat_idx], highest.value
        ),
        None => println!("No seats on record"),
    }

    println!("\n=== Available Seats ===");
    println!("Number of available seats: {}", parts.count_where_true);

    let available = filter(&seats, |record| {
        matches!(record[available_idx], Value::Bool(true))
    });
    let reserved = filter(&seats, |record| {
        matches!(record[available_idx], Value::Bool(false))
    });

    println!("\n=== Additional Analysis ===");
    if !available.is_empty() {
        println!("Available seats:");
        for record in &available.records {
            println!("  - Seat {}: ${}", record[seat_idx], record[price_idx]);
        }
    }
    if !reserved.is_empty() {
        println!("Reserved seats:");
        for record in &reserved.records {
            println!(
                "  - Seat {}: {} - ${}",
                record[seat_idx], record[passenger_idx], record[price_idx]
            );
        }
    }
    if let Some(cheapest) = extremum(&available, "price", ExtremumMode::Min)? {
        println!(
            "Cheapest available seat: {} at ${}",
            cheapest.record[seat_idx], cheapest.value
        );
    }

    println!("\n=== Summary Statistics ===");
    println!("Total seats: {}", stats.count);
    println!("Available seats: {}", parts.count_where_true);
    println!("Reserved seats: {}", parts.count_where_false);
    match stats.rate_where_false() {
        Some(rate) => println!("Occupancy rate: {rate:.1}%"),
        None => println!("Occupancy rate: undefined (no seats)"),
    }
    println!("Current revenue: ${}", parts.sum_where_false);
    println!("Potential revenue: ${}", stats.sum);

    Ok(())
}
