use debruijn::{DeBruijnConfig, WindowExtractor};

fn main() -> Result<(), debruijn::DeBruijnError> {
    let config = DeBruijnConfig::new(4)?;
    let extract = WindowExtractor::new(config);

    println!("B(2,4) sequences and their windows:");
    debruijn::search_with_config(config, |sequence| {
        let windows: Vec<String> = extract
            .windows(sequence)
            .iter()
            .map(|w| format!("{w:2}"))
            .collect();
        println!("  0x{sequence:04x}: {}", windows.join(" "));
        false
    });

    Ok(())
}
