use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use chatbox_stats::commands;

/// Endpoint, interval and source flags shared by `run`, `send` and `preview`.
fn override_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("OSC host to send to (overrides config)"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("OSC port to send to (overrides config)")
                .value_parser(clap::value_parser!(u16)),
        )
}

fn source_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("enable")
                .short('e')
                .long("enable")
                .value_name("SOURCES")
                .help("Enable sources for this run (os, clock, media, cpu, ram, gpu, amd)")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("disable")
                .short('d')
                .long("disable")
                .value_name("SOURCES")
                .help("Disable sources for this run")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("12h")
                .long("12h")
                .help("Use a 12-hour clock")
                .action(ArgAction::SetTrue)
                .conflicts_with("24h"),
        )
        .arg(
            Arg::new("24h")
                .long("24h")
                .help("Use a 24-hour clock")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let run = Command::new("run")
        .about("Broadcast system stats to the chatbox until Ctrl+C")
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("MS")
                .help("Milliseconds to wait between messages (overrides config)")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Send a single message and exit")
                .action(ArgAction::SetTrue),
        );

    let send = Command::new("send")
        .about("Send a custom chat message")
        .arg(
            Arg::new("text")
                .help("Message text")
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("duration")
                .short('t')
                .long("duration")
                .value_name("SECONDS")
                .help("Seconds to keep the message on screen (default from config)"),
        );

    let preview = Command::new("preview").about("Print the message that would be sent, without sending it");

    let matches = Command::new("chatbox-stats")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Broadcast system stats to a VR chatbox over OSC")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(source_args(override_args(run)))
        .subcommand(override_args(send))
        .subcommand(source_args(preview))
        .subcommand(
            Command::new("config")
                .about("Show or change stored settings (use 'chatbox-stats config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Show the current configuration"))
                .subcommand(
                    Command::new("set")
                        .about("Turn a source on or off")
                        .arg(
                            Arg::new("source")
                                .help("Source name (os, clock, media, cpu, ram, gpu, amd)")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("state")
                                .help("on or off")
                                .required(true)
                                .index(2),
                        ),
                )
                .subcommand(
                    Command::new("clock")
                        .about("Set the clock format")
                        .arg(
                            Arg::new("format")
                                .help("12h or 24h")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("endpoint")
                        .about("Set the OSC host and port")
                        .arg(Arg::new("host").help("Host name or IP").required(true).index(1))
                        .arg(
                            Arg::new("port")
                                .help("UDP port")
                                .required(true)
                                .index(2)
                                .value_parser(clap::value_parser!(u16)),
                        ),
                )
                .subcommand(
                    Command::new("interval")
                        .about("Set the delay between messages")
                        .arg(
                            Arg::new("ms")
                                .help("Milliseconds")
                                .required(true)
                                .index(1)
                                .value_parser(clap::value_parser!(u64)),
                        ),
                )
                .subcommand(
                    Command::new("duration")
                        .about("Set how long custom messages stay on screen")
                        .arg(
                            Arg::new("secs")
                                .help("Seconds")
                                .required(true)
                                .index(1)
                                .value_parser(clap::value_parser!(u64)),
                        ),
                )
                .subcommand(Command::new("reset").about("Restore default settings")),
        )
        .subcommand(Command::new("version").about("Shows version information"))
        .get_matches();

    chatbox_stats::init_logging(matches.get_flag("verbose"));

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("run", sub_matches)) => commands::run(sub_matches)?,
        Some(("send", sub_matches)) => commands::send(sub_matches)?,
        Some(("preview", sub_matches)) => commands::preview(sub_matches)?,
        Some(("config", sub_matches)) => commands::config::execute(sub_matches)?,
        Some(("version", _)) => commands::version()?,
        _ => {
            println!("Welcome to chatbox-stats!");
            println!("Use 'chatbox-stats --help' for more information.");
        }
    }

    Ok(())
}
