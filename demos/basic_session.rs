// ============================================================================
// Basic Session Example
// ============================================================================

use cdc::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== cdc Example ===\n");

    let handler = Arc::new(RecordingEventHandler::new());

    for config in [
        CalculatorConfig::classic(),
        CalculatorConfig::decimal(),
        CalculatorConfig::high_precision(),
    ] {
        let mut calc = match create_from_config(config, handler.clone()) {
            Ok(calc) => calc,
            Err(e) => {
                println!("skipping: {}", e);
                continue;
            }
        };

        println!("Backend: {}", calc.backend_name());

        let events = calc.execute_line("0.1 0.2 + p 2 v p 1 3 / p");
        for line in events.iter().filter_map(CalcEvent::render) {
            println!("  {}", line);
        }

        // Errors are reported and evaluation continues
        let events = calc.execute_line("5 0 / x p");
        for line in events.iter().filter_map(CalcEvent::render) {
            println!("  {}", line);
        }

        println!("  stack: {:?}", calc.stack_snapshot());
        println!("  released at shutdown: {}\n", calc.shutdown());
    }

    println!("Total output lines: {}", handler.lines().len());
}
