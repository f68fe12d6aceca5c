// SPDX-License-Identifier: MPL-2.0
use og_dashboard::app::{paths, App, FilePreferences, Flags};
use og_dashboard::application::port::PreferenceStore;
use og_dashboard::config;
use og_dashboard::error::Result;
use og_dashboard::i18n::LocaleTag;
use og_dashboard::infrastructure::{log, ConsoleHost};
use og_dashboard::plugins::PluginSet;
use std::ffi::OsString;
use std::process::ExitCode;

const HELP: &str = "\
og-dashboard

USAGE:
  og-dashboard [COMMAND] [OPTIONS]

COMMANDS:
  mount                  Bootstrap and mount the dashboard (default)
  routes                 Print the aggregated route table
  tr KEY [NAME=VALUE]..  Translate KEY in the active locale
  locales                List registered locales

OPTIONS:
  --lang TAG             Switch to TAG and remember it
  --config-dir DIR       Directory holding settings.toml
  --data-dir DIR         Directory holding stored preferences
  -h, --help             Print help
";

enum Command {
    Mount,
    Routes,
    Translate { key: String, args: Vec<(String, String)> },
    Locales,
}

fn parse_args() -> std::result::Result<Option<(Flags, Command)>, String> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let subcommand = args.subcommand().map_err(|e| e.to_string())?;
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").map_err(|e| e.to_string())?,
        data_dir: args.opt_value_from_str("--data-dir").map_err(|e| e.to_string())?,
        config_dir: args.opt_value_from_str("--config-dir").map_err(|e| e.to_string())?,
    };
    let rest: Vec<String> = args
        .finish()
        .into_iter()
        .map(OsString::into_string)
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| "arguments must be valid UTF-8".to_string())?;

    let command = match subcommand.as_deref() {
        None | Some("mount") => Command::Mount,
        Some("routes") => Command::Routes,
        Some("locales") => Command::Locales,
        Some("tr") => {
            let mut rest = rest.into_iter();
            let key = rest.next().ok_or("tr requires a KEY")?;
            let args: Vec<(String, String)> = rest
                .map(|pair| match pair.split_once('=') {
                    Some((name, value)) => Ok((name.to_string(), value.to_string())),
                    None => Err(format!("expected NAME=VALUE, got '{pair}'")),
                })
                .collect::<std::result::Result<_, _>>()?;
            return Ok(Some((flags, Command::Translate { key, args })));
        }
        Some(other) => return Err(format!("unknown command '{other}'")),
    };
    if let Some(extra) = rest.first() {
        return Err(format!("unexpected argument '{extra}'"));
    }
    Ok(Some((flags, command)))
}

fn run(flags: Flags, command: Command) -> ExitCode {
    let (config, config_warning) = config::load();
    log::init(&config.log);
    if let Some(key) = config_warning {
        tracing::warn!(%key, "using default settings");
    }

    let (mut preferences, preferences_warning) = FilePreferences::load();
    if let Some(key) = preferences_warning {
        tracing::warn!(%key, "stored preferences were reset");
    }

    let mut app = match App::bootstrap(config, &preferences, PluginSet::default()) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(key = err.i18n_key(), "dashboard failed to start");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match execute(&mut app, &mut preferences, flags.lang, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(key = err.i18n_key(), "dashboard command failed");
            eprintln!("{}", app.i18n().describe_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn execute(app: &mut App, preferences: &mut FilePreferences, lang: Option<String>, command: Command) -> Result<()> {
    if let Some(lang) = lang {
        let tag: LocaleTag = lang.parse()?;
        app.switch_locale(tag, preferences)?;
    }

    match command {
        Command::Mount => {
            let mut host = ConsoleHost::new(std::io::stdout().lock());
            app.mount(&mut host)?;
        }
        Command::Routes => {
            for route in app.routes() {
                println!("{}\t{}\t{}", route.path, route.name, route.view);
            }
        }
        Command::Translate { key, args } => {
            let args: Vec<(&str, &str)> = args.iter().map(|(n, v)| (n.as_str(), v.as_str())).collect();
            println!("{}", app.i18n().translate_with(&key, &args));
        }
        Command::Locales => {
            let i18n = app.i18n();
            for tag in i18n.available_locales() {
                let marker = if i18n.current_locale() == Some(tag) { "*" } else { " " };
                let count = i18n.missing_keys(tag).len().to_string();
                let name = i18n.language_name(tag);
                let summary = i18n.translate_with(
                    "locales.summary",
                    &[("name", name.as_str()), ("tag", tag.as_str()), ("count", count.as_str())],
                );
                println!("{marker} {summary}");
            }
            let key = &app.config().i18n.preference_key;
            tracing::debug!(%key, stored = ?preferences.get(key), "stored locale preference");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let (flags, command) = match parse_args() {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("Error: {message}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone()) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    run(flags, command)
}
