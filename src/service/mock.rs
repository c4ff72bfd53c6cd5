use rand::Rng;
use std::fs::File;

/// Generate a mock CSV file with random subscribe/cancel operations against
/// the default fund catalog. This is used to exercise the platform locally.
pub fn generator(output: &str, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["type", "client", "fund", "amount"])?;

    let num_clients = (count / 4).clamp(1, 500);
    let ops_per_client = (count / num_clients).max(1);

    let mut rng = rand::rng();
    let mut total = 0usize;

    for client_id in 1..=num_clients {
        let client = format!("C{:06}", client_id);
        let mut held: Vec<u32> = Vec::new();

        for _ in 0..ops_per_client {
            let fund = rng.random_range(1..=5u32);
            if held.contains(&fund) && rng.random_bool(0.6) {
                wtr.write_record(["cancel", &client, &fund.to_string(), ""])?;
                held.retain(|f| *f != fund);
            } else {
                // duplicate subscribes are left in on purpose, they
                // exercise the rejection path
                wtr.write_record(["subscribe", &client, &fund.to_string(), ""])?;
                if !held.contains(&fund) {
                    held.push(fund);
                }
            }
            total += 1;
        }
    }

    wtr.flush()?;
    println!(
        "✓ Generated {} operations across {} clients to {}",
        total, num_clients, output
    );
    Ok(())
}
