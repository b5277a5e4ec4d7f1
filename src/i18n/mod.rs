pub mod locale;
pub mod localizer;
pub mod table;

pub use locale::Locale;
pub use localizer::Localizer;
pub use table::LocaleTable;

pub const LANG_KEY: &str = "gs_lang";

// The saved-label string embeds the counter element at `{count}`.
pub const SAVED_LABEL_KEY: &str = "bookings.savedLabel";
pub const COUNTER_ID: &str = "bookings-count";

pub const TEXT_ATTR: &str = "data-i18n";
pub const PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";
pub const ALT_ATTR: &str = "data-i18n-alt";
