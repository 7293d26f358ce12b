// SPDX-License-Identifier: MPL-2.0
use portfolio_i18n::config;
use portfolio_i18n::locale::Locale;
use portfolio_i18n::paths;
use portfolio_i18n::site;
use portfolio_i18n::storage::{FileStore, PreferenceStore, Unavailable};
use portfolio_i18n::{I18nProvider, TranslationStore};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
portfolio-i18n

USAGE:
  portfolio-i18n [OPTIONS] [KEY...]

OPTIONS:
  --lang <CODE>        Switch to and persist a locale (pt-BR, en-US, es-ES)
  --data-dir <DIR>     Directory holding the persisted preferences
  --config-dir <DIR>   Directory holding settings.toml
  --languages          Print the language picker
  --check              Report translation keys missing per locale
  --no-persist         Turn off locale persistence in settings.toml and exit
  -h, --help           Print this help

Each KEY is printed translated in the active locale. Without KEY or flags,
the header navigation and the hero tech cards are printed.
";

struct Flags {
    lang: Option<String>,
    data_dir: Option<String>,
    config_dir: Option<String>,
    languages: bool,
    check: bool,
    no_persist: bool,
    keys: Vec<String>,
}

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    Ok(Some(Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        languages: args.contains("--languages"),
        check: args.contains("--check"),
        no_persist: args.contains("--no-persist"),
        keys: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    }))
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "portfolio-i18n failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(flags: Flags) -> portfolio_i18n::Result<()> {
    paths::init_cli_overrides(flags.data_dir, flags.config_dir)?;

    let (mut cfg, warning) = config::load();
    init_logging(cfg.log_filter());
    if let Some(warning) = warning {
        tracing::warn!(warning = %warning, "settings.toml ignored");
    }

    if flags.no_persist {
        cfg.storage.enabled = Some(false);
        config::save(&cfg)?;
        tracing::info!("locale persistence disabled");
        return Ok(());
    }

    // Parse before touching storage so a typo never persists anything.
    let requested = flags.lang.as_deref().map(str::parse::<Locale>).transpose()?;

    let translations = match &cfg.translations.dir {
        Some(dir) => TranslationStore::load_dir(dir)?,
        None => TranslationStore::embedded()?,
    };

    let store: Box<dyn PreferenceStore> = if cfg.storage_enabled() {
        Box::new(FileStore::new())
    } else {
        Box::new(Unavailable)
    };

    let mut provider = I18nProvider::start(store, Arc::new(translations));
    let mut ctx = provider.context();

    if let Some(locale) = requested {
        site::select_language(&mut ctx, locale)?;
    }

    if flags.languages {
        for (option, selected) in site::language_picker(&mut ctx)? {
            let marker = if selected { "✓" } else { " " };
            println!("{marker} {} {:<6} {}", option.glyph, option.locale.code(), option.label);
        }
    }

    for key in &flags.keys {
        println!("{}", ctx.i18n()?.t(key));
    }

    let printed_something = flags.languages || flags.check || !flags.keys.is_empty();
    if !printed_something {
        let (name, subtitle) = site::header_logo(&mut ctx)?;
        println!("{name} - {subtitle}");
        let nav: Vec<String> = site::header_nav(&mut ctx)?
            .into_iter()
            .map(|link| link.label)
            .collect();
        println!("{}", nav.join(" | "));
        let cards: Vec<String> = site::tech_cards(&mut ctx)?
            .into_iter()
            .map(|card| format!("{} {}", card.icon, card.label))
            .collect();
        println!("{}", cards.join("  "));
    }

    drop(ctx);
    if flags.check {
        print_coverage(provider.translations());
    }
    Ok(())
}

fn print_coverage(translations: &TranslationStore) {
    let report = translations.coverage();
    println!("reference {} ({} keys)", report.reference, report.total);
    for entry in &report.locales {
        if entry.missing.is_empty() {
            println!("  {}: complete", entry.locale);
        } else {
            println!("  {}: {} missing", entry.locale, entry.missing.len());
            for key in &entry.missing {
                println!("    {key}");
            }
        }
    }
}
