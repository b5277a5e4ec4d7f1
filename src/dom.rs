use std::collections::BTreeMap;
use std::fmt::Write;

const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    // Rendered verbatim.
    Markup(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn set_text(&mut self, text: &str) {
        self.children = vec![Node::Text(text.to_string())];
    }

    pub fn set_inner_html(&mut self, markup: &str) {
        self.children = vec![Node::Markup(markup.to_string())];
    }

    // Parents first.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.walk_mut(f);
            }
        }
    }

    pub fn find(&self, pred: &impl Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(el) => el.find(pred),
            _ => None,
        })
    }

    pub fn find_mut(&mut self, pred: &impl Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(el) => el.find_mut(pred),
            _ => None,
        })
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.id() == Some(id))
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.find_mut(&|el: &Element| el.id() == Some(id))
    }

    pub fn by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.attr(name) == Some(value))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Element(el) => out.push_str(&el.text_content()),
                Node::Text(text) => out.push_str(text),
                Node::Markup(markup) => out.push_str(&strip_tags(markup)),
            }
        }
        out
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Element(el) => el.render(&mut out),
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Markup(markup) => out.push_str(markup),
            }
        }
        out
    }

    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }

    fn render(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value).replace('"', "&quot;"));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        out.push_str(&self.inner_html());
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_child(Element::new("h1").with_attr("id", "title").with_text("Hi"))
            .with_child(Element::new("input").with_attr("placeholder", "Name"))
    }

    #[test]
    fn test_by_id() {
        let doc = sample();
        assert_eq!(doc.by_id("title").unwrap().text_content(), "Hi");
        assert!(doc.by_id("missing").is_none());
    }

    #[test]
    fn test_by_id_mut_updates_in_place() {
        let mut doc = sample();
        doc.by_id_mut("title").unwrap().set_text("Salut");
        assert_eq!(doc.by_id("title").unwrap().text_content(), "Salut");
    }

    #[test]
    fn test_walk_visits_every_element() {
        let mut doc = sample();
        let mut tags = Vec::new();
        doc.walk_mut(&mut |el| tags.push(el.tag.clone()));
        assert_eq!(tags, vec!["div", "h1", "input"]);
    }

    #[test]
    fn test_render_escapes_text_but_not_markup() {
        let mut el = Element::new("p").with_text("a < b");
        assert_eq!(el.outer_html(), "<p>a &lt; b</p>");

        el.set_inner_html("Tel: <b>1</b>");
        assert_eq!(el.inner_html(), "Tel: <b>1</b>");
        assert_eq!(el.text_content(), "Tel: 1");
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let el = Element::new("img").with_attr("alt", "Logo");
        assert_eq!(el.outer_html(), "<img alt=\"Logo\">");
    }
}
