use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("deskstart")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Launch login startup items without duplicating already-running programs")
        .long_about(
            "deskstart scans a startup folder for .lnk shortcuts and native executables \
            (.exe, .ahk, .bat, ...), launches each item unless an equivalent instance is \
            already visible on the current desktop, and waits for every launch to be \
            confirmed. Windows parked on other virtual desktops do not count as running.",
        )
        .arg(
            Arg::new("startup_dir")
                .help("Startup directory path (default: ./Desktop-Startup)")
                .index(1),
        )
        .arg(
            Arg::new("restrict-all")
                .long("restrict-all")
                .help("Restrict all programs to a single instance by default")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("restrict-multiple")
                .long("restrict-multiple")
                .short('r')
                .value_name("PROGRAM")
                .action(ArgAction::Append)
                .help("Restrict a specific program to a single instance (repeatable)"),
        )
        .arg(
            Arg::new("allow-multiple")
                .long("allow-multiple")
                .short('a')
                .value_name("PROGRAM")
                .action(ArgAction::Append)
                .help("Allow multiple instances of a program (only useful with --restrict-all)"),
        )
        .arg(
            Arg::new("no-native")
                .long("no-native")
                .help("Only process .lnk shortcuts, skip native executables")
                .action(ArgAction::SetTrue)
                .conflicts_with("native-only"),
        )
        .arg(
            Arg::new("native-only")
                .long("native-only")
                .help("Only process native executables, skip .lnk shortcuts")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("native-types")
                .long("native-types")
                .value_name("EXT")
                .num_args(1..)
                .help(
                    "Only include these native file types (e.g. --native-types ahk exe). \
                    Dot prefix is optional.",
                ),
        )
        .arg(
            Arg::new("delay")
                .long("delay")
                .value_name("SECS")
                .value_parser(clap::value_parser!(f64))
                .help("Delay between launching programs (default: 1.0 seconds)"),
        )
        .arg(
            Arg::new("wait-time")
                .long("wait-time")
                .value_name("TICKS")
                .value_parser(clap::value_parser!(u32))
                .help("Maximum time to wait for a program to start (default: 5)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the run summary as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
}
