// SPDX-License-Identifier: MPL-2.0
//! The site's translated surfaces: header navigation, page sections, the hero
//! tech cards and the language picker. Each one pulls the accessor out of the [`Context`] it is
//! composed with, so composing one without a provider fails loudly.

use crate::error::Result;
use crate::locale::{language_options, Locale, LanguageOption};
use crate::session::Context;
use crate::storage::PreferenceStore;

/// Anchor id and translation key of each header navigation link.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("inicio", "header.nav.home"),
    ("sobre", "header.nav.about"),
    ("projetos", "header.nav.projects"),
    ("contato", "header.nav.contact"),
];

/// Keys rendered by each page section, in page order.
pub const SECTIONS: [(&str, &[&str]); 4] = [
    ("inicio", &["home.title", "home.subtitle", "home.description", "home.cta"]),
    (
        "sobre",
        &["about.title", "about.highlight", "about.paragraph1", "about.paragraph2"],
    ),
    (
        "projetos",
        &["projects.title", "projects.highlight", "projects.description", "projects.project"],
    ),
    (
        "contato",
        &["contact.title", "contact.highlight", "contact.description", "contact.linkedin"],
    ),
];

/// Translation key and icon of each hero tech card, in display order.
pub const TECH_CARDS: [(&str, &str); 4] = [
    ("tech.nextjs", "⚡"),
    ("tech.react", "⚛️"),
    ("tech.typescript", "📘"),
    ("tech.tailwind", "🎨"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: String,
}

pub fn header_logo<S: PreferenceStore>(ctx: &mut Context<'_, S>) -> Result<(String, String)> {
    let i18n = ctx.i18n()?;
    Ok((i18n.t("header.logo.name"), i18n.t("header.logo.subtitle")))
}

pub fn header_nav<S: PreferenceStore>(ctx: &mut Context<'_, S>) -> Result<Vec<NavLink>> {
    let i18n = ctx.i18n()?;
    Ok(NAV_LINKS
        .iter()
        .map(|&(anchor, key)| NavLink {
            anchor,
            label: i18n.t(key),
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechCard {
    pub icon: &'static str,
    pub label: String,
}

pub fn tech_cards<S: PreferenceStore>(ctx: &mut Context<'_, S>) -> Result<Vec<TechCard>> {
    let i18n = ctx.i18n()?;
    Ok(TECH_CARDS
        .iter()
        .map(|&(key, icon)| TechCard {
            icon,
            label: i18n.t(key),
        })
        .collect())
}

/// Translated lines of the section with anchor `id`, or `None` if no such section.
pub fn section<S: PreferenceStore>(ctx: &mut Context<'_, S>, id: &str) -> Result<Option<Vec<String>>> {
    let i18n = ctx.i18n()?;
    Ok(SECTIONS
        .iter()
        .find(|(anchor, _)| *anchor == id)
        .map(|(_, keys)| keys.iter().map(|key| i18n.t(key)).collect()))
}

/// Picker entries with the active locale marked.
pub fn language_picker<S: PreferenceStore>(
    ctx: &mut Context<'_, S>,
) -> Result<Vec<(LanguageOption, bool)>> {
    let i18n = ctx.i18n()?;
    Ok(language_options(i18n.locale()))
}

pub fn select_language<S: PreferenceStore>(ctx: &mut Context<'_, S>, locale: Locale) -> Result<()> {
    ctx.i18n()?.set_locale(locale);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TranslationStore;
    use crate::error::Error;
    use crate::session::I18nProvider;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn provider() -> I18nProvider<MemoryStore> {
        let translations = TranslationStore::embedded().expect("embedded translations");
        I18nProvider::start(MemoryStore::new(), Arc::new(translations))
    }

    #[test]
    fn header_nav_follows_the_active_locale() {
        let mut provider = provider();
        let mut ctx = provider.context();

        let labels: Vec<_> = header_nav(&mut ctx).expect("nav").into_iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Início", "Sobre", "Projetos", "Contato"]);

        select_language(&mut ctx, Locale::EnUs).expect("select");
        let labels: Vec<_> = header_nav(&mut ctx).expect("nav").into_iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Projects", "Contact"]);
    }

    #[test]
    fn every_section_key_is_translated_in_every_locale() {
        let mut provider = provider();
        for locale in Locale::ALL {
            let mut ctx = provider.context();
            select_language(&mut ctx, locale).expect("select");
            for (id, keys) in SECTIONS {
                let lines = section(&mut ctx, id).expect("section").expect("known section");
                for (line, key) in lines.iter().zip(keys.iter()) {
                    assert_ne!(line, key, "{key} untranslated in {locale}");
                }
            }
            let cards = tech_cards(&mut ctx).expect("tech cards");
            for (card, (key, _)) in cards.iter().zip(TECH_CARDS.iter()) {
                assert_ne!(card.label, *key, "{key} untranslated in {locale}");
            }
        }
    }

    #[test]
    fn tech_cards_keep_hero_order() {
        let mut provider = provider();
        let mut ctx = provider.context();
        let cards = tech_cards(&mut ctx).expect("tech cards");
        let labels: Vec<_> = cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Next.js", "React", "TypeScript", "Tailwind CSS"]);
        assert_eq!(cards[0].icon, "⚡");
    }

    #[test]
    fn nav_anchors_point_at_sections() {
        let mut provider = provider();
        let mut ctx = provider.context();
        for link in header_nav(&mut ctx).expect("nav") {
            assert!(
                section(&mut ctx, link.anchor).expect("section").is_some(),
                "no section for #{}",
                link.anchor
            );
        }
    }

    #[test]
    fn unknown_section_is_none() {
        let mut provider = provider();
        let mut ctx = provider.context();
        assert_eq!(section(&mut ctx, "blog").expect("section"), None);
    }

    #[test]
    fn picker_marks_the_selected_language() {
        let mut provider = provider();
        let mut ctx = provider.context();
        select_language(&mut ctx, Locale::EsEs).expect("select");

        let picker = language_picker(&mut ctx).expect("picker");
        let selected: Vec<_> = picker.iter().filter(|(_, s)| *s).map(|(o, _)| o.label).collect();
        assert_eq!(selected, vec!["Español"]);
    }

    #[test]
    fn components_outside_a_provider_fail() {
        let mut ctx: Context<'_, MemoryStore> = Context::detached();
        assert_eq!(header_nav(&mut ctx), Err(Error::OutsideProvider));
        assert_eq!(header_logo(&mut ctx), Err(Error::OutsideProvider));
        assert_eq!(tech_cards(&mut ctx), Err(Error::OutsideProvider));
        assert_eq!(select_language(&mut ctx, Locale::EnUs), Err(Error::OutsideProvider));
    }
}
