use std::env;

use rentfeed_core::RecordCount;
use rentfeed_generate::generate_records;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let count = env::args()
        .nth(1)
        .map(|arg| arg.parse::<u16>())
        .transpose()?
        .unwrap_or(3);

    let count = RecordCount::new(count)?;
    let records = generate_records(count, &mut rand::rng())?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
