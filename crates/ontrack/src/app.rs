use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("ontrack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Budget progress widget for the terminal")
        .long_about("OnTrack fetches your budget statistics, draws spent and remaining budget as a ring with a deviation arc, and refreshes every 15 minutes. Configure the endpoint in ~/.ontrack/config.toml or with --url and --token.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .help("Budget statistics endpoint (overrides config)")
                .global(true),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .help("Auth-Token header value (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fetch")
                .about("Fetch budget statistics once and print them")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("snapshot")
                .about("Run one refresh cycle and print the resulting snapshot")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Print the widget as a list of drawable primitives (JSON)")
                .arg(
                    Arg::new("sample")
                        .long("sample")
                        .help("Render sample figures instead of fetching")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Show the widget with sample figures, without network access")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("watch")
                .about("Keep the widget refreshed until interrupted")
                .long_about(
                    "Runs a refresh cycle now and again every refresh interval (default 15 minutes).\n\n\
                    Send SIGHUP to reload immediately without changing the schedule:\n\
                    \x20   kill -HUP <pid>\n\n\
                    Press Ctrl+C to exit."
                )
                .arg(json_arg()),
        )
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}
