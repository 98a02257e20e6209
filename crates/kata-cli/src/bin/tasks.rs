use anyhow::Result;
use kata_tasks::TaskStore;

fn main() -> Result<()> {
    kata_core::init()?;
    let config = kata_core::Config::load()?;

    let store = TaskStore::new(&config.tasks.file);

    let stdin = std::io::stdin();
    kata_tasks::run(&store, stdin.lock(), std::io::stdout())?;

    Ok(())
}
