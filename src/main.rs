// SPDX-License-Identifier: MPL-2.0
use toastline::app::{self, Flags};

const USAGE: &str = "\
Usage: toastline [OPTIONS]

Options:
  --route <PATH>        Initial route, e.g. #/playground
  --config-dir <DIR>    Directory containing settings.toml
  --duration-ms <MS>    Default toast lifetime in milliseconds
  -h, --help            Print this help
";

fn main() -> iced::Result {
    setup_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        route: args.opt_value_from_str("--route")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        duration_ms: args.opt_value_from_str("--duration-ms")?,
    })
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,toastline=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
