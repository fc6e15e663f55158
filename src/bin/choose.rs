use std::env;
use std::error::Error;
use std::time::Instant;

use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pascal::print;
use pascal::table::BinomialTable;

const MAX_ORDER: usize = 20;

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let start_time = Instant::now();
    let table = BinomialTable::build(MAX_ORDER);
    let elapsed = start_time.elapsed();
    info!(
        "built table of order {MAX_ORDER} ({} entries) in {:.3}ms",
        table.len(),
        elapsed.as_micros() as f64 / 1_000.
    );
    debug!(
        "table:\n{}",
        Console::default().render(&print::tabulate(&table))
    );

    let value = table.lookup(20, 7)?;
    println!("Result for 20 choose 7 is: {value}");
    Ok(())
}
