use clap::Parser;
use reachout::cli::{run_once, run_shell, ui, Cli, Commands};
use reachout::config::Config;
use reachout::db::Database;
use reachout::logging::init_logging;
use reachout::logic::LogicManager;
use reachout::templates::TemplateStorageManager;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.overrides())?;

    if let Err(e) = init_logging(&config.log_level, &config.log_dir()) {
        ui::warning(&format!("logging disabled: {}", e));
    }

    let db = Database::open_at(&config.database_path())?;
    let templates = TemplateStorageManager::new(config.template_dir.clone());
    let mut logic = LogicManager::new(db, templates)?;

    match cli.command {
        None | Some(Commands::Shell) => {
            run_shell(&mut logic)?;
        }
        Some(Commands::Run(args)) => {
            run_once(&mut logic, &args.line())?;
        }
    }

    Ok(())
}
