// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, Flags};

const HELP: &str = "\
iced_lightbox - modal image previewer

USAGE:
  iced_lightbox [OPTIONS] [IMAGE]

OPTIONS:
  --title <TEXT>       Caption shown in the panel header
  --alt <TEXT>         Alternative text used when no title is given
  --overlay            Present the trigger as a transparent overlay
  --skip-intro         Skip the intro reveal
  --config-dir <DIR>   Override the settings directory
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        title: args.opt_value_from_str("--title").unwrap_or(None),
        alt: args.opt_value_from_str("--alt").unwrap_or(None),
        overlay: args.contains("--overlay"),
        skip_intro: args.contains("--skip-intro"),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        image_path: args
            .finish()
            .into_iter()
            .next()
            .map(std::path::PathBuf::from),
    };

    app::run(flags)
}
