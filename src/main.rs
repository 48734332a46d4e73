// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Ignoring --lang: {err}");
        None
    });

    app::run(Flags { lang })
}
