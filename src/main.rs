// SPDX-License-Identifier: MPL-2.0
use alok_site::app::{self, Flags};

const HELP: &str = "\
alok_site - ALOK AS company site

USAGE:
    alok_site [OPTIONS]

OPTIONS:
    --lang <ID>          Interface language (nb-NO, en-US)
    --config-dir <DIR>   Directory holding settings.toml
    --dump-diagnostics   Print the activity log as JSON on exit
    -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            eprintln!("[WARN] Ignoring --lang: {err}");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            eprintln!("[WARN] Ignoring --config-dir: {err}");
            None
        }),
        dump_diagnostics: args.contains("--dump-diagnostics"),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        eprintln!("[WARN] Ignoring unknown arguments: {unused:?}");
    }

    app::run(flags)
}
