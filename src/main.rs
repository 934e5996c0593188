//! Contactr CLI application entry point
//!
//! This is the main executable for the contactr contact record generator.
//! It builds batches of well-formed and deliberately malformed contact
//! records (email or SMS) and exports them as CSV for import testing.
//!
//! # Usage
//!
//! ```bash
//! # Two valid email contacts and one malformed one
//! contactr generate -v 2 -i 1 -f John -l Doe -p John
//!
//! # SMS contacts with tags on every valid row
//! contactr generate -t sms -v 10 -f Jane -l Roe --tags "vip;beta"
//!
//! # Random tag assignment, custom output path
//! contactr g -v 5 -f A -l B -p a --tags "x;y;z" -m random -o fixtures.csv
//!
//! # Preview without writing a file
//! contactr generate -v 3 -f John -l Doe -p John --dry-run
//!
//! # Quiet mode (only output the written path)
//! contactr -q generate -v 2 -f John -l Doe -p John
//! ```
//!
//! # Configuration
//!
//! Defaults (quiet mode, output path, email domain) are stored in the user's
//! config directory (`~/.config/contactr/config.toml` on Linux).

use std::path::PathBuf;

use colored::Colorize;
use contactr::{
    ContactrError,
    cli::{Cli, Commands, ConfigCommands, GenerateParams},
    config::ContactrConfig,
    export,
    generate::{self, ContactType, GenerateSpec},
    output,
};
use dialoguer::Confirm;

type Result<T> = std::result::Result<T, ContactrError>;

/// Handle the generate command - build a batch and export it as CSV
///
/// Builds the full row sequence from the CLI parameters (with config
/// defaults filled in), then either previews it (dry run) or writes it to
/// the output file, prompting before overwriting an existing file.
///
/// # Errors
///
/// Returns `ContactrError` if the parameters are invalid (email type
/// without a prefix) or the export fails.
fn handle_generate_command(
    config: &ContactrConfig,
    params: &GenerateParams,
    quiet: bool,
) -> Result<()> {
    let email_prefix = match (params.contact_type, &params.email_prefix) {
        (ContactType::Email, Some(prefix)) => prefix.clone(),
        (ContactType::Email, None) => {
            return Err(ContactrError::InvalidInput(
                "No email prefix provided. Use -p/--email-prefix with --type email.".into(),
            ));
        }
        (ContactType::Sms, _) => String::new(),
    };

    let spec = GenerateSpec {
        contact_type: params.contact_type,
        valid_count: params.valid,
        invalid_count: params.invalid,
        first_name: params.first_name.clone(),
        last_name: params.last_name.clone(),
        email_prefix,
        email_domain: params.domain.clone().unwrap_or_else(|| config.email_domain.clone()),
        tag_expression: params.tags.clone(),
        tag_mode: params.tag_mode,
    };

    let mut rng = rand::thread_rng();
    let rows = generate::build_rows(&spec, &mut rng);

    if params.dry_run {
        println!("{}", "=== Dry Run Mode ===".yellow().bold());
        println!("Would write {} row(s):", rows.len());
        for row in rows.iter().take(output::PREVIEW_LIMIT) {
            println!("{}", output::preview_row(row, spec.contact_type));
        }
        if rows.len() > output::PREVIEW_LIMIT {
            println!("  ... and {} more", rows.len() - output::PREVIEW_LIMIT);
        }
        println!("\n{}", "Run without --dry-run to write the file.".yellow());
        return Ok(());
    }

    let path: PathBuf = params.output.clone().unwrap_or_else(|| config.output.clone());

    if path.exists() && !params.yes && !quiet {
        let prompt = format!("Overwrite existing file '{}'?", path.display());
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| ContactrError::InvalidInput(format!("Failed to get confirmation: {e}")))?;
        if !confirmed {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    export::export_to_path(&rows, spec.contact_type, &path)?;

    if quiet {
        println!("{}", path.display());
    } else {
        println!("{}", output::summary(spec.valid_count, spec.invalid_count, &path));
    }

    Ok(())
}

/// Handle the config command - manage application settings
///
/// Performs configuration operations including setting and getting config values.
///
/// # Errors
///
/// Returns `ContactrError` if the configuration key is invalid, value parsing
/// fails, or configuration save fails.
fn handle_config_command(
    mut config: ContactrConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let parts: Vec<&str> = setting.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(ContactrError::InvalidInput(
                    "Invalid format. Use: contactr config set key=value".into(),
                ));
            }

            let key = parts[0].trim();
            let value = parts[1].trim();

            match key {
                "quiet" => {
                    let new_value = value.parse::<bool>().map_err(|_| {
                        ContactrError::InvalidInput(format!(
                            "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                    config.quiet = new_value;
                    config.save()?;
                    if !quiet {
                        println!("Set quiet = {new_value}");
                    }
                }
                "output" => {
                    if value.is_empty() {
                        return Err(ContactrError::InvalidInput(
                            "Invalid value for output: path must not be empty".into(),
                        ));
                    }
                    config.output = PathBuf::from(value);
                    config.save()?;
                    if !quiet {
                        println!("Set output = {value}");
                    }
                }
                "email_domain" => {
                    if value.is_empty() {
                        return Err(ContactrError::InvalidInput(
                            "Invalid value for email_domain: domain must not be empty".into(),
                        ));
                    }
                    config.email_domain = value.to_string();
                    config.save()?;
                    if !quiet {
                        println!("Set email_domain = {value}");
                    }
                }
                _ => {
                    return Err(ContactrError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: quiet, output, email_domain"
                    )));
                }
            }
        }
        ConfigCommands::Get { key } => match key.as_str() {
            "quiet" => println!("{}", config.quiet),
            "output" => println!("{}", config.output.display()),
            "email_domain" => println!("{}", config.email_domain),
            _ => {
                return Err(ContactrError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: quiet, output, email_domain"
                )));
            }
        },
    }
    Ok(())
}

/// Main entry point for the contactr application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `ContactrError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    let config = ContactrConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Generate { .. } => {
            let params = cli.command.get_generate_params().ok_or_else(|| {
                ContactrError::InvalidInput("Failed to parse generate parameters".into())
            })?;
            handle_generate_command(&config, &params, quiet)?;
        }
        Commands::Config { command } => {
            handle_config_command(config, command, quiet)?;
        }
    }

    Ok(())
}
