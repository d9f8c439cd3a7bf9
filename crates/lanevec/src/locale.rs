use std::{env, sync::OnceLock};

use log::debug;
use parking_lot::RwLock;

/// Environment variables consulted, in order, for the initial current locale.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Numeric formatting symbols used when rendering lanes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    group_separator: String,
    decimal_separator: String,
    negative_sign: String,
    nan_symbol: String,
    positive_infinity: String,
    negative_infinity: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::invariant()
    }
}

impl Locale {
    /// Culture-independent symbols: `,` grouping, `.` decimals.
    pub fn invariant() -> Self {
        Self {
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            negative_sign: "-".to_string(),
            nan_symbol: "NaN".to_string(),
            positive_infinity: "Infinity".to_string(),
            negative_infinity: "-Infinity".to_string(),
        }
    }

    /// Symbols for a POSIX or BCP 47 locale tag such as `de_DE.UTF-8` or `fr-CA`.
    ///
    /// Only the language part is used. Unknown languages get `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let (group, decimal) = match language.as_str() {
            "" | "c" | "posix" | "en" | "ja" | "ko" | "zh" | "hi" | "th" | "he" => (",", "."),
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el" | "ro" | "hr"
            | "sl" | "vi" => (".", ","),
            "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "no" | "uk" | "hu"
            | "bg" | "lt" | "lv" | "et" => ("\u{a0}", ","),
            _ => return None,
        };

        Some(Self::invariant().with_separators(group, decimal))
    }

    /// Builds the locale from the first non-empty of [`LOCALE_ENV_VARS`].
    pub fn from_env() -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty())
            .and_then(|tag| {
                let locale = Self::from_tag(&tag);
                debug!("Locale from environment: {tag} (known: {})", locale.is_some());
                locale
            })
            .unwrap_or_else(Self::invariant)
    }

    /// Process-wide locale used by `Display` impls.
    pub fn current() -> Self {
        current().read().clone()
    }

    pub fn set_current(locale: Self) {
        *current().write() = locale;
    }

    pub fn with_separators(mut self, group: &str, decimal: &str) -> Self {
        self.group_separator = group.to_string();
        self.decimal_separator = decimal.to_string();
        self
    }

    pub fn with_group_separator(mut self, separator: &str) -> Self {
        self.group_separator = separator.to_string();
        self
    }

    pub fn with_decimal_separator(mut self, separator: &str) -> Self {
        self.decimal_separator = separator.to_string();
        self
    }

    pub fn with_negative_sign(mut self, sign: &str) -> Self {
        self.negative_infinity = format!("{sign}{}", self.positive_infinity);
        self.negative_sign = sign.to_string();
        self
    }

    pub fn with_nan_symbol(mut self, symbol: &str) -> Self {
        self.nan_symbol = symbol.to_string();
        self
    }

    pub fn with_infinity_symbol(mut self, symbol: &str) -> Self {
        self.positive_infinity = symbol.to_string();
        self.negative_infinity = format!("{}{symbol}", self.negative_sign);
        self
    }

    #[inline]
    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }

    #[inline]
    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    #[inline]
    pub fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    #[inline]
    pub fn nan_symbol(&self) -> &str {
        &self.nan_symbol
    }

    #[inline]
    pub fn positive_infinity(&self) -> &str {
        &self.positive_infinity
    }

    #[inline]
    pub fn negative_infinity(&self) -> &str {
        &self.negative_infinity
    }
}

impl From<(&str, &str)> for Locale {
    fn from((group, decimal): (&str, &str)) -> Self {
        Self::invariant().with_separators(group, decimal)
    }
}

fn current() -> &'static RwLock<Locale> {
    static CURRENT: OnceLock<RwLock<Locale>> = OnceLock::new();
    CURRENT.get_or_init(|| RwLock::new(Locale::from_env()))
}
