//! Static, localized portfolio content.
//!
//! This module is the content registry: every user-facing string exists in
//! exactly two locales and every section is addressable by a fixed id. It has
//! no dependencies on the rest of the crate.

mod data;

pub use data::*;

/// Specifying the supported locales.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Language {
    #[default]
    En,
    Pl,
}

impl Language {
    /// Return the other locale.
    ///
    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Pl,
            Language::Pl => Language::En,
        }
    }

    /// Return the short code shown in the top bar.
    ///
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Pl => "PL",
        }
    }
}

/// A string available in both locales.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Text {
    pub en: &'static str,
    pub pl: &'static str,
}

impl Text {
    /// Return a text that reads the same in both locales.
    ///
    pub const fn same(value: &'static str) -> Text {
        Text {
            en: value,
            pl: value,
        }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Pl => self.pl,
        }
    }
}

/// Shorthand for building a [`Text`] in static tables.
///
pub const fn t(en: &'static str, pl: &'static str) -> Text {
    Text { en, pl }
}

/// Specifying the navigable sections in top-to-bottom order.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Why,
    Contact,
}

impl SectionId {
    /// Every section in declared order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Why,
        SectionId::Contact,
    ];

    /// Return the fixed identifier used to address the section.
    ///
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Why => "why",
            SectionId::Contact => "contact",
        }
    }

    /// Return the navigation label for the section.
    ///
    pub fn label(self, language: Language) -> &'static str {
        let text = match self {
            SectionId::Home => t("home", "start"),
            SectionId::About => t("about", "o mnie"),
            SectionId::Skills => Text::same("skills"),
            SectionId::Experience => Text::same("exp"),
            SectionId::Projects => t("projects", "projekty"),
            SectionId::Why => t("why", "dlaczego"),
            SectionId::Contact => t("contact", "kontakt"),
        };
        text.get(language)
    }

    /// Return the position of the section in declared order.
    ///
    pub fn index(self) -> usize {
        SectionId::ALL
            .iter()
            .position(|id| *id == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<SectionId> {
        SectionId::ALL.get(index).copied()
    }

    /// Resolve a section from its fixed identifier.
    ///
    pub fn parse(value: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
