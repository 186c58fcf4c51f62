//! Tabstat Analysis Example
//!
//! Parses a small CSV blob, analyzes it, and prints the text and HTML
//! renderings.
//!
//! Run with:
//!   cargo run --example analyze

use tabstat::prelude::*;
use tabstat::RenderOptions;

const DATA: &str = "\
hours,score,student
2,51,ana
5,74,ben
1,42,cam
8,91,dia
4,67,eli
6,80,fin
";

fn main() {
    let table = match parse_csv(DATA) {
        Ok(table) => table,
        Err(e) => {
            // The error message replaces the normal output.
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let analysis = analyze_table(&table);
    let options = RenderOptions::default();

    print!("{}", format_analysis_text(&table, &analysis, &options));
    println!();
    println!("{}", render_analysis_html(&table, &analysis, &options));
}
