// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded bundles, then any `<locale>.ftl` found in
    /// `i18n_dir` (messages from disk override embedded ones).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut i18n = Self {
            bundles: HashMap::new(),
            available_locales: Vec::new(),
            current_locale: default_locale(),
        };

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                i18n.add_source(locale, String::from_utf8_lossy(content.data.as_ref()).to_string());
            }
        }

        if let Some(dir) = i18n_dir {
            i18n.load_dir(Path::new(&dir));
        }

        if let Some(locale) = resolve_locale(cli_lang, config, &i18n.available_locales) {
            i18n.current_locale = locale;
        }
        tracing::debug!(locale = %i18n.current_locale, "i18n initialised");
        i18n
    }

    fn load_dir(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("Failed to read i18n directory {}: {err}", dir.display());
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(locale) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(locale_from_filename)
            else {
                continue;
            };
            match fs::read_to_string(&path) {
                Ok(source) => self.add_source(locale, source),
                Err(err) => tracing::warn!("Failed to read {}: {err}", path.display()),
            }
        }
    }

    fn add_source(&mut self, locale: LanguageIdentifier, source: String) {
        let resource = match FluentResource::try_new(source) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                tracing::warn!(%locale, "FTL parse errors: {errors:?}");
                resource
            }
        };

        match self.bundles.get_mut(&locale) {
            Some(bundle) => bundle.add_resource_overriding(resource),
            None => {
                let mut bundle = FluentBundle::new(vec![locale.clone()]);
                if let Err(errors) = bundle.add_resource(resource) {
                    tracing::warn!(%locale, "FTL resource errors: {errors:?}");
                }
                self.bundles.insert(locale.clone(), bundle);
                self.available_locales.push(locale);
            }
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.general.language.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().as_deref().and_then(supported)
}
