//! The holiday record and the insertion-ordered holiday set.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;
use feriae_core::ensure;
use feriae_core::errors::Result;

use crate::context::DEFAULT_LOCALE;

/// Classification of a holiday.
///
/// A closed enumeration: providers never attach free-form type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HolidayType {
    /// An official national (public) holiday.
    National,
    /// A bank holiday.
    Bank,
    /// An observance — widely recognised but not a day off.
    Observance,
    /// A seasonal marker (solstice, equinox, season opening).
    Season,
    /// Anything else.
    Other,
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HolidayType::National => "national",
            HolidayType::Bank => "bank",
            HolidayType::Observance => "observance",
            HolidayType::Season => "season",
            HolidayType::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// Locale identifier → localized display string.
pub type Translations = BTreeMap<String, String>;

/// Build a [`Translations`] map from literal `(locale, name)` pairs.
pub fn translations(pairs: &[(&str, &str)]) -> Translations {
    pairs
        .iter()
        .map(|(locale, name)| (locale.to_string(), name.to_string()))
        .collect()
}

/// A single dated, typed, named holiday — the atomic output unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Holiday {
    key: &'static str,
    names: Translations,
    date: NaiveDate,
    timezone: Tz,
    locale: String,
    kind: HolidayType,
}

impl Holiday {
    /// Construct a holiday record.
    ///
    /// `locale` is the display locale requested by the query (it need not
    /// have a translation — [`Holiday::display_name`] falls back).
    /// `names` must carry at least one translation; a record with zero
    /// translations cannot exist.
    pub fn new(
        key: &'static str,
        names: Translations,
        date: NaiveDate,
        timezone: Tz,
        locale: &str,
        kind: HolidayType,
    ) -> Result<Self> {
        ensure!(
            !names.is_empty(),
            "holiday {key:?} must carry at least one translation"
        );
        Ok(Holiday {
            key,
            names,
            date,
            timezone,
            locale: locale.to_string(),
            kind,
        })
    }

    /// Stable machine identifier, unique within one jurisdiction's output.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// All attached translations, keyed by locale identifier.
    pub fn names(&self) -> &Translations {
        &self.names
    }

    /// The display name for `locale`.
    ///
    /// Falls back to the base locale ([`DEFAULT_LOCALE`]) when the
    /// requested locale has no translation, and to the key itself when
    /// even the base locale is missing.
    pub fn name(&self, locale: &str) -> &str {
        self.names
            .get(locale)
            .or_else(|| self.names.get(DEFAULT_LOCALE))
            .map(String::as_str)
            .unwrap_or(self.key)
    }

    /// The display name in the locale the query was made with.
    pub fn display_name(&self) -> &str {
        self.name(&self.locale)
    }

    /// The display locale requested by the query.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The civil calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The timezone the date was constructed in.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The holiday classification.
    pub fn kind(&self) -> HolidayType {
        self.kind
    }
}

/// An insertion-ordered collection of [`Holiday`] records keyed by `key`.
///
/// Adding a record whose key is already present replaces the existing
/// record *in place* (keeping its position) instead of appending a
/// duplicate — this is how a region re-types a holiday inherited from its
/// parent country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HolidaySet {
    entries: Vec<Holiday>,
}

impl HolidaySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same key.
    pub fn add(&mut self, holiday: Holiday) {
        match self.entries.iter_mut().find(|h| h.key == holiday.key) {
            Some(slot) => *slot = holiday,
            None => self.entries.push(holiday),
        }
    }

    /// Insert a record if the calculator produced one (year-gated
    /// calculators yield `None` outside their active range).
    pub fn add_if(&mut self, holiday: Option<Holiday>) {
        if let Some(h) = holiday {
            self.add(h);
        }
    }

    /// Look up a record by key.
    pub fn get(&self, key: &str) -> Option<&Holiday> {
        self.entries.iter().find(|h| h.key == key)
    }

    /// Return `true` if a record with `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.entries.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|h| h.key)
    }

    /// Iterate over records of the given classification.
    pub fn of_kind(&self, kind: HolidayType) -> impl Iterator<Item = &Holiday> {
        self.entries.iter().filter(move |h| h.kind == kind)
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for HolidaySet {
    type Item = Holiday;
    type IntoIter = std::vec::IntoIter<Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
