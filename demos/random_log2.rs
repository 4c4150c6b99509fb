use debruijn::{BufferedBitSource, DeBruijnConfig, Log2Table};

fn main() -> Result<(), debruijn::DeBruijnError> {
    let config = DeBruijnConfig::new(6)?;
    let mut bits = BufferedBitSource::new(rand::rng());

    let sequence = debruijn::sample(config.order(), &mut bits)?;
    println!("random B(2,6) sequence: 0x{sequence:016X}");

    let Some(table) = Log2Table::new(config, sequence) else {
        eprintln!("sampled sequence cannot index a log2 table");
        return Ok(());
    };

    println!("lookup table:");
    for row in table.as_slice().chunks(16) {
        let row: Vec<String> = row.iter().map(|j| format!("{j:2}")).collect();
        println!("  {}", row.join(", "));
    }

    let power = 1u64 << 37;
    println!("log2(0x{power:X}) = {}", table.log2(power));
    Ok(())
}
