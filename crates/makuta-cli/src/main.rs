mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use makuta_client::ClientError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Makuta - wallet transaction reporting and export

Usage:
  makuta <command>

Start here:
  makuta transactions --snapshot <path>
  makuta wallet --snapshot <path> --currency USD
  makuta export --help
";

const TOP_LEVEL_HELP: &str = "Makuta — wallet transaction reporting and export

USAGE: makuta <command>

Inspect a wallet snapshot:
  makuta transactions --snapshot wallet.json              List transactions with filters and paging
  makuta wallet --snapshot wallet.json --currency USD     Show balance and lifetime totals
  makuta stats --snapshot wallet.json --currency USD      Aggregate amounts and counts by type

Filter what you see:
  makuta transactions --snapshot wallet.json --status completed --type withdrawal
  makuta transactions --snapshot wallet.json --from 2024-03-01 --to 2024-03-31
  makuta transactions --snapshot wallet.json --search \"mobile money\"

Export to a spreadsheet file:
  makuta export --snapshot wallet.json                    Export the current page of results
  makuta export --snapshot wallet.json --all              Export every filtered transaction
  makuta export --snapshot wallet.json --out reports/     Choose the output directory

Scripting:
  Add --json to any command for machine-readable output.

Having issues or errors?
  Run `makuta <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) && is_top_level_help_request(&raw_args)
                {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so the "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Picks the subcommand name out of raw CLI args for use in help hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let first_non_flag = raw_args
        .iter()
        .skip(1)
        .find(|value| !value.starts_with('-'))?;

    match first_non_flag.as_str() {
        "transactions" | "stats" | "wallet" | "export" => Some(first_non_flag.clone()),
        _ => None,
    }
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.code.starts_with("internal_") {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

#[cfg(test)]
mod tests {
    use super::{command_path_from_args, strip_clap_boilerplate};

    #[test]
    fn boilerplate_is_stripped_from_clap_messages() {
        let message = "error: invalid value '2024-99-01'\n\nUsage: makuta transactions [OPTIONS]\n\nFor more information, try '--help'.";
        assert_eq!(
            strip_clap_boilerplate(message),
            "error: invalid value '2024-99-01'"
        );
    }

    #[test]
    fn command_hint_uses_the_first_subcommand_token() {
        let args: Vec<String> = ["makuta", "export", "--snapshot", "s.json", "--bogus"]
            .iter()
            .map(|value| (*value).to_string())
            .collect();
        assert_eq!(command_path_from_args(&args), Some("export".to_string()));

        let unknown: Vec<String> = ["makuta", "frobnicate"]
            .iter()
            .map(|value| (*value).to_string())
            .collect();
        assert_eq!(command_path_from_args(&unknown), None);
    }
}
