//! Translation of the classic `-switch` / `-switch:value` syntax.
//!
//! Classic switches become long options. Every argument that names no known
//! option is a file name, and the last one wins; it is handed to clap after
//! `--` so stray text never trips clap's own usage errors.

use std::ffi::OsString;

use clap::Command;

const VALUE_SWITCHES: [(&str, &str); 2] = [("-inc:", "--inc="), ("-set:", "--set=")];

const FLAG_SWITCHES: [(&str, &str); 5] = [
    ("-av", "--av"),
    ("-fv", "--fv"),
    ("-cy", "--cy"),
    ("-onlywhenmodified", "--only-when-modified"),
    ("-stop", "--stop"),
];

const END_OF_OPTIONS: &str = "--";

/// Long and short options of a clap command, with whether each takes a value.
struct KnownOptions {
    longs: Vec<(String, bool)>,
    shorts: Vec<(char, bool)>,
}

impl KnownOptions {
    fn from_command(command: &Command) -> Self {
        let mut command = command.clone();
        command.build();

        let mut longs = Vec::new();
        let mut shorts = Vec::new();
        for arg in command.get_arguments() {
            let takes_value = arg.get_action().takes_values();
            if let Some(long) = arg.get_long() {
                longs.push((long.to_string(), takes_value));
            }
            if let Some(short) = arg.get_short() {
                shorts.push((short, takes_value));
            }
        }

        Self { longs, shorts }
    }

    /// Returns whether the next argument is `arg`'s value, or `None` when
    /// `arg` is not a known option.
    fn lookup(&self, arg: &str) -> Option<bool> {
        if let Some(long) = arg.strip_prefix("--") {
            let (name, inline_value) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };
            return self
                .longs
                .iter()
                .find(|(known, _)| known == name)
                .map(|(_, takes_value)| *takes_value && !inline_value);
        }

        let mut chars = arg.strip_prefix('-')?.chars();
        let (Some(short), None) = (chars.next(), chars.next()) else {
            return None;
        };
        self.shorts
            .iter()
            .find(|(known, _)| *known == short)
            .map(|(_, takes_value)| *takes_value)
    }
}

/// Rewrites the process arguments into a form `command` parses cleanly.
///
/// Switch matching is case-insensitive, like the original switches. The
/// first argument is the program name and is kept as is.
pub fn normalize_args<I>(args: I, command: &Command) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let known = KnownOptions::from_command(command);
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut file = None;
    let mut options_ended = false;

    while let Some(arg) = args.next() {
        if options_ended {
            file = Some(arg);
            continue;
        }

        let arg = translate(arg);
        let lookup = match arg.to_str() {
            Some(END_OF_OPTIONS) => {
                options_ended = true;
                continue;
            }
            Some(text) => known.lookup(text),
            None => None,
        };

        match lookup {
            Some(takes_next) => {
                normalized.push(arg);
                if takes_next {
                    normalized.extend(args.next());
                }
            }
            None => file = Some(arg),
        }
    }

    if let Some(file) = file {
        normalized.push(END_OF_OPTIONS.into());
        normalized.push(file);
    }
    normalized
}

fn translate(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };

    if text.starts_with("--") {
        return arg;
    }

    for (legacy, modern) in VALUE_SWITCHES {
        if let Some(value) = strip_prefix_ignore_case(text, legacy) {
            return format!("{modern}{value}").into();
        }
    }

    for (legacy, modern) in FLAG_SWITCHES {
        if text.eq_ignore_ascii_case(legacy) {
            return modern.into();
        }
    }

    arg
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}
