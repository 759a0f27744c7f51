use aspect_core::{compute_aspects, to_csv, AspectTable, PointStore, ZodiacSign};
use std::env;
use std::path::Path;
use std::process;

fn main() {
    // Example usage: aspect table dataset path as the first argument
    let path = env::args().nth(1).unwrap_or_else(|| "Aspects.csv".to_string());
    let table = match AspectTable::load(Path::new(&path)) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut store = PointStore::new();
    let sample = [
        ("Sun", ZodiacSign::Gemini, 26, 45),
        ("Moon", ZodiacSign::Scorpio, 3, 12),
        ("Mercury", ZodiacSign::Gemini, 20, 2),
        ("Venus", ZodiacSign::Taurus, 14, 58),
        ("Mars", ZodiacSign::Pisces, 8, 30),
    ];
    for (label, sign, degree, minute) in sample {
        if let Err(e) = store.add(label, sign, degree, minute) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    for point in store.points() {
        println!("{} — {}", point.label, point.describe());
    }
    println!();

    let results = compute_aspects(store.points(), &table);
    if results.is_empty() {
        println!("No aspects formed.");
    } else {
        print!("{}", to_csv(&results));
    }
}
