//! doxbridge - Doxygen → Breathe bridge for a Sphinx documentation build.

mod bridge;
mod build;
mod cli;
mod config;
mod init;
mod logger;
mod registry;
mod template;
mod utils;
mod xref;

use anyhow::{Result, bail};
use bridge::BridgeManifest;
use build::{Doxygen, ProcessEnv};
use clap::Parser;
use cli::{Cli, Commands};
use config::DocsConfig;
use init::new_config;
use xref::{PlainReason, Resolution, XrefTable};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Init => new_config(&config),
        Commands::Build { .. } => build_docs(&config),
        Commands::Resolve { alias, group } => resolve_alias(&config, alias, group.as_deref()),
        Commands::Check => check_config(&config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<DocsConfig> {
    let mut config = DocsConfig::default();
    config.update_with_cli(cli);
    let config_path = config.config_path.clone();

    if cli.is_init() {
        return Ok(config);
    }

    if config_path.exists() {
        config = DocsConfig::from_path(&config_path)?;
        config.update_with_cli(cli);
    } else {
        log!("config"; "{} not found, using defaults", config_path.display());
    }

    config.validate()?;
    Ok(config)
}

/// Run the pipeline and publish its result for the site compiler.
fn build_docs(config: &DocsConfig) -> Result<()> {
    let xref = XrefTable::from_config(&config.xref)?;
    let report = build::run(config, &ProcessEnv, &Doxygen::new(&config.doxygen.command))?;

    let registry = &report.registry;
    if registry.is_empty() {
        log!("build"; "no native API docs in this build");
    } else if let Some(xml) = registry.get(registry.default_project()) {
        log!("build"; "native API docs from {}", xml.display());
    }

    let manifest = config.path(&config.project.manifest);
    BridgeManifest::new(config, &report, &xref).write(&manifest)?;
    log!("build"; "wrote {}", manifest.display());

    Ok(())
}

fn resolve_alias(config: &DocsConfig, alias: &str, group: Option<&str>) -> Result<()> {
    let xref = XrefTable::from_config(&config.xref)?;

    let (group, resolution) = match group {
        Some(group) => (Some(group), xref.resolve_url(alias, group)),
        None => xref.resolve_alias(alias),
    };

    match resolution {
        Resolution::Link(link) => {
            log!("xref"; "{} ({})", alias, group.unwrap_or_default());
            println!("{}", link.primary);
            println!("{}", link.fallback);
        }
        Resolution::Plain(PlainReason::UnknownGroup) => {
            bail!(
                "unknown group `{}`, expected one of: {}",
                group.unwrap_or_default(),
                xref.groups().collect::<Vec<_>>().join(", ")
            );
        }
        Resolution::Plain(reason) => {
            log!("xref"; "{:?}", reason);
            println!("plain text: {alias}");
        }
    }

    Ok(())
}

fn check_config(config: &DocsConfig) -> Result<()> {
    let xref = XrefTable::from_config(&config.xref)?;

    log!(
        "check";
        "{} input directories, output `{}`",
        config.doxygen.inputs.len(),
        config.doxygen.output
    );
    log!(
        "check";
        "{} linkable aliases in {} groups, {} ignored, {} renamed",
        xref.alias_count(),
        xref.groups().count(),
        config.xref.ignore.len(),
        config.xref.rename.len()
    );

    if let Some(warning) = missing_extractor(&config.doxygen.command) {
        log!("warn"; "{}", warning);
    }

    let template = config.path(&config.doxygen.template);
    if !template.is_file() {
        log!("warn"; "{} not found, hosted builds will fail", template.display());
    }

    log!("check"; "ok");
    Ok(())
}

/// Warning for an extractor command that cannot be found on `PATH`.
fn missing_extractor(command: &[String]) -> Option<String> {
    let program = command.first()?;
    utils::exec::locate(command)
        .is_err()
        .then(|| format!("`{program}` is not on PATH, extraction will fail on hosted builds"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_extractor_warns_about_failure() {
        let warning = missing_extractor(&["doxbridge-no-such-doxygen".to_string()]).unwrap();
        assert_eq!(
            warning,
            "`doxbridge-no-such-doxygen` is not on PATH, extraction will fail on hosted builds"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_extractor_silent_when_found() {
        assert_eq!(missing_extractor(&["sh".to_string()]), None);
    }
}
