// SPDX-License-Identifier: MPL-2.0
use iced_popup::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
iced_popup - animated success/error popup demo

USAGE:
    iced_popup [OPTIONS]

OPTIONS:
    --lang <LOCALE>        UI language, e.g. en-US or fr
    --config-dir <DIR>     Directory holding settings.toml
    --i18n-dir <DIR>       Directory with extra Fluent .ftl files
    -h, --help             Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_popup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
