//! Command-line argument parsing.
//!
//! Parses `offset [OPTIONS] [COMMAND] [ARGS]` into a [`CliAction`]. Options may
//! appear before or after the command. Anything unrecognized produces
//! [`CliAction::ShowHelpDueToError`] rather than a guess.

/// Subcommand to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Clock cards for every configured city (the default)
    Clocks,
    /// Subsolar and midnight points
    Sun,
    /// Night shadow as a terminal map or GeoJSON
    Map { json: bool },
    /// Meeting planner grid for a date (reference-zone date, default today)
    Plan { date: Option<String>, slot: Option<usize> },
}

/// Options shared by all commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
    /// Time travel offset in minutes
    pub shift_minutes: Option<i64>,
    /// Fixed UTC instant, "YYYY-MM-DD HH:MM:SS"
    pub at: Option<String>,
    pub log_file: Option<String>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    Run {
        command: Command,
        options: GlobalOptions,
    },
    /// Detailed help for one command, or general help
    HelpCommand { command: Option<String> },
    ShowHelp,
    ShowVersion,
    ShowHelpDueToError { reason: String },
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

fn error(reason: impl Into<String>) -> ParsedArgs {
    ParsedArgs {
        action: CliAction::ShowHelpDueToError {
            reason: reason.into(),
        },
    }
}

impl ParsedArgs {
    /// Parse command-line arguments (including the program name) into an action.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut options = GlobalOptions::default();
        let mut json = false;
        let mut slot: Option<usize> = None;
        let mut positionals: Vec<String> = Vec::new();

        let mut iter = args_vec.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => {
                    return ParsedArgs {
                        action: CliAction::ShowHelp,
                    };
                }
                "--version" | "-V" | "-v" => {
                    return ParsedArgs {
                        action: CliAction::ShowVersion,
                    };
                }
                "--debug" | "-d" => options.debug_enabled = true,
                "--json" | "-j" => json = true,
                "--config" | "-c" => match iter.next() {
                    Some(dir) => options.config_dir = Some(dir),
                    None => return error("--config requires a directory"),
                },
                "--log" | "-l" => match iter.next() {
                    Some(path) => options.log_file = Some(path),
                    None => return error("--log requires a file path"),
                },
                "--at" | "-a" => match iter.next() {
                    Some(at) => options.at = Some(at),
                    None => return error("--at requires \"YYYY-MM-DD HH:MM:SS\""),
                },
                "--shift" | "-s" => match iter.next().map(|v| v.parse::<i64>()) {
                    Some(Ok(minutes)) => options.shift_minutes = Some(minutes),
                    _ => return error("--shift requires a number of minutes"),
                },
                "--slot" => match iter.next().map(|v| v.parse::<usize>()) {
                    Some(Ok(column)) => slot = Some(column),
                    _ => return error("--slot requires an hour column (0-23)"),
                },
                flag if flag.starts_with('-') => {
                    return error(format!("Unknown option: {flag}"));
                }
                _ => positionals.push(arg),
            }
        }

        let mut positionals = positionals.into_iter();
        let command = match positionals.next().as_deref() {
            None | Some("clocks") | Some("c") => Command::Clocks,
            Some("sun") | Some("S") => Command::Sun,
            Some("map") | Some("m") => Command::Map { json },
            Some("plan") | Some("p") => Command::Plan {
                date: positionals.next(),
                slot,
            },
            Some("help") | Some("h") => {
                return ParsedArgs {
                    action: CliAction::HelpCommand {
                        command: positionals.next(),
                    },
                };
            }
            Some(unknown) => return error(format!("Unknown command: {unknown}")),
        };

        if let Some(extra) = positionals.next() {
            return error(format!("Unexpected argument: {extra}"));
        }
        if json && !matches!(command, Command::Map { .. }) {
            return error("--json is only valid with the map command");
        }
        if slot.is_some() && !matches!(command, Command::Plan { .. }) {
            return error("--slot is only valid with the plan command");
        }

        ParsedArgs {
            action: CliAction::Run { command, options },
        }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::emit_raw(&format!("┗ {}", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("offset [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-a, --at <datetime>    Freeze the clock at a UTC instant (\"YYYY-MM-DD HH:MM:SS\")");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-l, --log <file>       Write output to a file instead of the terminal");
    log_indented!("-s, --shift <minutes>  Time travel, snapped to 15 minutes within ±12h");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("clocks, c              Local time in every configured city (default)");
    log_indented!("help, h [COMMAND]      Show detailed help for a command");
    log_indented!("map, m [--json]        Night shadow as a terminal map or GeoJSON");
    log_indented!("plan, p [DATE]         Meeting planner for a date (YYYY-MM-DD)");
    log_indented!("sun, S                 Subsolar and midnight points");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        let mut full = vec!["offset"];
        full.extend_from_slice(args);
        ParsedArgs::parse(full).action
    }

    #[test]
    fn test_no_arguments_runs_clocks() {
        assert_eq!(
            parse(&[]),
            CliAction::Run {
                command: Command::Clocks,
                options: GlobalOptions::default(),
            }
        );
    }

    #[test]
    fn test_help_and_version_take_precedence() {
        assert_eq!(parse(&["map", "--help"]), CliAction::ShowHelp);
        assert_eq!(parse(&["-V"]), CliAction::ShowVersion);
    }

    #[test]
    fn test_global_options_anywhere() {
        let action = parse(&["--shift", "-90", "map", "--json", "-d", "--config", "/tmp/x"]);
        assert_eq!(
            action,
            CliAction::Run {
                command: Command::Map { json: true },
                options: GlobalOptions {
                    debug_enabled: true,
                    config_dir: Some("/tmp/x".to_string()),
                    shift_minutes: Some(-90),
                    ..Default::default()
                },
            }
        );
    }

    #[test]
    fn test_plan_with_date_and_slot() {
        let action = parse(&["plan", "2024-01-15", "--slot", "15", "--at", "2024-01-15 12:00:00"]);
        match action {
            CliAction::Run { command, options } => {
                assert_eq!(
                    command,
                    Command::Plan {
                        date: Some("2024-01-15".to_string()),
                        slot: Some(15),
                    }
                );
                assert_eq!(options.at.as_deref(), Some("2024-01-15 12:00:00"));
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_help_command_with_target() {
        assert_eq!(
            parse(&["help", "plan"]),
            CliAction::HelpCommand {
                command: Some("plan".to_string())
            }
        );
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&["--bogus"]), CliAction::ShowHelpDueToError { .. }));
        assert!(matches!(parse(&["dance"]), CliAction::ShowHelpDueToError { .. }));
        assert!(matches!(parse(&["--shift", "soon"]), CliAction::ShowHelpDueToError { .. }));
        assert!(matches!(parse(&["--config"]), CliAction::ShowHelpDueToError { .. }));
        assert!(matches!(parse(&["sun", "extra"]), CliAction::ShowHelpDueToError { .. }));
        assert!(matches!(parse(&["clocks", "--json"]), CliAction::ShowHelpDueToError { .. }));
        assert!(matches!(parse(&["map", "--slot", "3"]), CliAction::ShowHelpDueToError { .. }));
    }
}
