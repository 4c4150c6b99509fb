fn main() -> Result<(), debruijn::DeBruijnError> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .ok();

    let mut count = 0u64;
    debruijn::search(5, |_| {
        count += 1;
        false
    })?;

    println!("found: {count}");
    Ok(())
}
