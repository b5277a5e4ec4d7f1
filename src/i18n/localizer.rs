use std::sync::Arc;

use super::{
    Locale, LocaleTable, ALT_ATTR, COUNTER_ID, LANG_KEY, PLACEHOLDER_ATTR, SAVED_LABEL_KEY,
    TEXT_ATTR,
};
use crate::dom::{Element, Node};
use crate::storage::Storage;

pub struct Localizer {
    table: Arc<LocaleTable>,
    storage: Arc<dyn Storage>,
    locale: Locale,
}

impl Localizer {
    // Persisted choice, else the browser hint, else the default.
    pub fn new(table: Arc<LocaleTable>, storage: Arc<dyn Storage>, browser_hint: Option<&str>) -> Self {
        let persisted = match storage.get_item(LANG_KEY) {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "could not read saved language");
                None
            }
        };

        let locale = match (persisted, browser_hint) {
            (Some(code), _) => Locale::resolve(&code),
            (None, Some(hint)) => Locale::from_browser_hint(hint),
            (None, None) => Locale::default(),
        };

        let localizer = Self {
            table,
            storage,
            locale,
        };
        localizer.persist();
        localizer
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    // Empty strings count as missing.
    pub fn tr(&self, key: &str) -> Option<&str> {
        self.table
            .lookup(self.locale, key)
            .filter(|value| !value.is_empty())
    }

    pub fn tr_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.tr(key).unwrap_or(fallback)
    }

    pub fn switch(&mut self, code: &str, root: &mut Element, pending_count: usize) -> Locale {
        let locale = Locale::resolve(code);
        if Locale::parse(code).is_none() {
            tracing::warn!(code, fallback = %locale, "unsupported language requested");
        }
        self.locale = locale;
        self.persist();
        self.apply(root, pending_count);
        locale
    }

    pub fn apply(&self, root: &mut Element, pending_count: usize) {
        root.walk_mut(&mut |el| {
            let text_key = el.attr(TEXT_ATTR).map(str::to_owned);
            if let Some((key, value)) = text_key.and_then(|key| self.tr(&key).map(|v| (key, v))) {
                if key == SAVED_LABEL_KEY {
                    el.children = counter_nodes(value, pending_count);
                } else if el.tag == "option" {
                    el.set_text(value);
                } else {
                    el.set_inner_html(value);
                }
            }
            if let Some(value) = el.attr(PLACEHOLDER_ATTR).and_then(|key| self.tr(key)) {
                el.set_attr("placeholder", value);
            }
            if let Some(value) = el.attr(ALT_ATTR).and_then(|key| self.tr(key)) {
                el.set_attr("alt", value);
            }
        });
    }

    fn persist(&self) {
        if let Err(e) = self.storage.set_item(LANG_KEY, self.locale.as_str()) {
            tracing::warn!(error = %format!("{e:#}"), "could not save language");
        }
    }
}

fn counter_nodes(label: &str, count: usize) -> Vec<Node> {
    let counter = Element::new("span")
        .with_attr("id", COUNTER_ID)
        .with_text(&count.to_string());

    let Some((before, after)) = label.split_once("{count}") else {
        return vec![Node::Markup(label.to_string())];
    };

    let mut nodes = Vec::with_capacity(3);
    if !before.is_empty() {
        nodes.push(Node::Markup(before.to_string()));
    }
    nodes.push(Node::Element(counter));
    if !after.is_empty() {
        nodes.push(Node::Markup(after.to_string()));
    }
    nodes
}
