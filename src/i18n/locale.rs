use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Ru,
    Ro,
    En,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ru, Locale::Ro, Locale::En];

    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::Ro => "ro",
            Locale::En => "en",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|locale| primary.eq_ignore_ascii_case(locale.as_str()))
    }

    pub fn resolve(code: &str) -> Self {
        Self::parse(code).unwrap_or_default()
    }

    pub fn from_browser_hint(hint: &str) -> Self {
        let hint = hint.trim().to_ascii_lowercase();
        if hint.starts_with("ro") {
            Locale::Ro
        } else if hint.starts_with("en") {
            Locale::En
        } else {
            Locale::default()
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
