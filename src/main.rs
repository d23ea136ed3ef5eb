// SPDX-License-Identifier: MPL-2.0
use card_preview::app::{self, paths, Flags};

const HELP: &str = "\
Preview a post image and text on every feed surface.

USAGE:
  card_preview [OPTIONS] [IMAGE]

ARGS:
  <IMAGE>              Image file to load at startup

OPTIONS:
  -h, --help           Print this help
      --lang <ID>      UI language (en-US, ru)
      --config-dir <DIR>
                       Directory holding settings.toml
                       (overrides CARD_PREVIEW_CONFIG_DIR)
      --text <TEXT>    Post text to start with

ENVIRONMENT:
  CARD_PREVIEW_CONFIG_DIR  Settings directory
  RUST_LOG                 Log filter (default: info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let text = args.opt_value_from_str("--text")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        file_path,
        config_dir,
        text,
    }))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
