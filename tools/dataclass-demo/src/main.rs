// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! dataclass-demo - Walk through the typed value-class scenario
//!
//! Builds a `Point`, moves it, wraps it in a `Circle`, and shows what a
//! rejected write looks like. Set `RUST_LOG=debug` to see classes and
//! checkers being defined.

use clap::Parser;
use typed_dataclass::shapes::{circle_class, point_class, Circle, Point};
use typed_dataclass::{CheckerRegistry, Value};

/// Typed value-class demo
#[derive(Parser, Debug)]
#[command(name = "dataclass-demo")]
#[command(version = "0.1.0")]
#[command(about = "Point/Circle walkthrough for runtime type-enforced value classes")]
struct Args {
    /// Starting x coordinate
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    x: i64,

    /// Starting y coordinate
    #[arg(long, default_value = "2", allow_hyphen_values = true)]
    y: i64,

    /// Horizontal move (integers pass the check, anything else is rejected)
    #[arg(long, default_value = "3", allow_hyphen_values = true)]
    dx: String,

    /// Vertical move
    #[arg(long, default_value = "4", allow_hyphen_values = true)]
    dy: String,

    /// Circle radius (try `2.5` or `two` to see the check fire)
    #[arg(short, long, default_value = "2")]
    radius: String,
}

/// Parse CLI text the way a literal would read: int, then float, else string.
fn literal(text: &str) -> Value {
    if let Ok(v) = text.parse::<i64>() {
        Value::Int(v)
    } else if let Ok(v) = text.parse::<f64>() {
        Value::Float(v)
    } else {
        Value::Str(text.to_string())
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut point = Point::new(args.x, args.y)?;
    println!("{}", point);

    match point.move_by(literal(&args.dx), literal(&args.dy)) {
        Ok(()) => println!("moved by ({}, {}): {}", args.dx, args.dy, point),
        Err(e) => println!("move rejected: {}", e),
    }

    match Circle::new(point.clone(), literal(&args.radius)) {
        Ok(circle) => {
            println!("{}", circle);
            println!("area = {:.4}", circle.area()?);
        }
        Err(e) => println!("circle rejected: {}", e),
    }

    let registry = CheckerRegistry::global();
    log::info!(
        "[demo] {} checker(s) cached; Point fields {:?}, Circle fields {:?}",
        registry.len(),
        point_class().field_names().collect::<Vec<_>>(),
        circle_class().field_names().collect::<Vec<_>>()
    );
    Ok(())
}
