use anyhow::Context;
use clap::Parser;
use prompt_install::utils::logger;
use prompt_install::{
    CliConfig, Environment, InstallConfig, InstallError, Installer, LocalStorage, SettingsFile,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);

            let install_error = e.chain().find_map(|c| c.downcast_ref::<InstallError>());
            match install_error {
                Some(err) => {
                    eprintln!("hint: {}", err.recovery_suggestion());
                    if err.may_leave_partial_install() {
                        eprintln!("note: earlier files may already be installed; rerunning is safe");
                    }
                    ExitCode::from(err.exit_code() as u8)
                }
                None => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => Some(
            SettingsFile::from_file(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
        ),
        None => None,
    };

    let env = Environment::from_process()?;
    let config = InstallConfig::resolve(cli, settings.as_ref(), &env)?;

    let installer = Installer::new(LocalStorage::new(), config);
    let mut stdout = std::io::stdout().lock();
    installer.run(&mut stdout)?;
    Ok(())
}
