//! Waste summary report: group totals by waste type, distinct collection zones, the
//! heaviest location, and overall statistics.

use std::error::Error;

use tabular_query::query::{distinct_values, extremum, group_sum, summary_stats, ExtremumMode};
use tabular_query::report::render_table;
use tabular_query::types::{DataType, Field, RecordSet, Schema, Value};

fn waste_records() -> RecordSet {
    let schema = Schema::new(vec![
        Field::new("zone", DataType::Utf8),
        Field::new("type", DataType::Utf8),
        Field::new("weight", DataType::Int64),
    ]);
    let records = vec![
        ("Zone A", "Organic", 120),
        ("Zone B", "Plastic", 80),
        ("Zone C", "Electronic", 45),
        ("Zone D", "Metal", 60),
        ("Zone E", "Organic", 95),
    ]
    .into_iter()
    .map(|(zone, waste_type, weight)| {
        vec![
            Value::Utf8(zone.to_string()),
            Value::Utf8(waste_type.to_string()),
            Value::Int64(weight),
        ]
    })
    .collect();
    RecordSet::new(schema, records)
}

fn main() -> Result<(), Box<dyn Error>> {
    let records = waste_records();
    let zone_idx = records.schema.require("zone")?;

    println!("=== Waste Data Overview ===");
    print!("{}", render_table(&records));

    println!("\n=== Total Waste by Type ===");
    let totals = group_sum(&records, "type", "weight")?;
    for (waste_type, total) in &totals {
        println!("{:<12}: {total} kg", waste_type.to_string());
    }

    println!("\n=== Unique Waste Zones ===");
    let mut zones: Vec<Value> = distinct_values(&records, "zone")?.into_iter().collect();
    zones.sort();
    for zone in &zones {
        println!("- {zone}");
    }

    println!("\n=== Heaviest Waste Location ===");
    match extremum(&records, "weight", ExtremumMode::Max)? {
        Some(heaviest) => {
            println!("Zone: {}", heaviest.record[zone_idx]);
            println!("Weight: {} kg", heaviest.value);
        }
        None => println!("No waste data available"),
    }

    println!("\n=== Summary Statistics ===");
    let stats = summary_stats(&records, "weight", None)?;
    println!("Total zones: {}", zones.len());
    println!("Total waste types: {}", totals.len());
    println!("Total weight: {} kg", stats.sum);
    match stats.mean {
        Some(mean) => println!("Average weight per location: {mean:.1} kg"),
        None => println!("Average weight per location: undefined (no records)"),
    }

    Ok(())
}
