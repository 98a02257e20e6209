use anyhow::Result;

fn main() -> Result<()> {
    kata_core::init()?;
    let config = kata_core::Config::load()?;

    let session = kata_guess::GuessSession::new(config.guess.min, config.guess.max);

    let stdin = std::io::stdin();
    kata_guess::run(session, stdin.lock(), std::io::stdout())?;

    Ok(())
}
