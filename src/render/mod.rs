use std::sync::OnceLock;

use regex::Regex;

use crate::model::DemoRecord;

pub const LINK_LABEL: &str = "Open demo →";
pub const EMPTY_MESSAGE: &str = "No demos match that filter. Try another keyword.";
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load demo list. Please refresh.";

/// Prefix that reaches the demo directories from the page hosting the grid.
pub const RELATIVE_ASCENT: &str = "../";

/// Description of a renderable tree. Adapters turn it into real markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn element(tag: &str) -> Self {
        Node::Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(value: &str) -> Self {
        Node::Text(value.to_string())
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn with_text(self, value: &str) -> Self {
        self.child(Node::text(value))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag.as_str()),
            Node::Text(_) => None,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|v| v.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Concatenated text of every descendant, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(value),
            Node::Element { children, .. } => {
                for c in children {
                    c.collect_text(out);
                }
            }
        }
    }

    /// First descendant (or self) satisfying `pred`, depth first.
    pub fn find(&self, pred: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        if pred(self) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(pred))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(&escape_html(value)),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (k, v) in attrs {
                    out.push_str(&format!(" {}=\"{}\"", k, escape_html(v)));
                }
                out.push('>');
                for c in children {
                    c.write_html(out);
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }
}

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn absolute_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^https?:").unwrap())
}

/// Absolute http(s) URLs pass through; anything else is treated as a path
/// next to the hosting page's directory.
pub fn link_target(path: &str) -> String {
    if absolute_url_re().is_match(path) {
        return path.to_string();
    }
    format!("{}{}", RELATIVE_ASCENT, path.trim_start_matches('/'))
}

pub fn tag_list(tags: &[String]) -> Node {
    tags.iter().fold(Node::element("div").class("tags"), |list, tag| {
        list.child(Node::element("span").class("tag").with_text(tag))
    })
}

pub fn card(demo: &DemoRecord) -> Node {
    let link = Node::element("a")
        .attr("href", &link_target(&demo.path))
        .attr("target", "_blank")
        .attr("rel", "noreferrer noopener")
        .with_text(LINK_LABEL);

    Node::element("article")
        .class("card")
        .child(Node::element("h2").with_text(&demo.title))
        .child(Node::element("span").class("status").with_text(&demo.status))
        .child(Node::element("p").with_text(&demo.description))
        .child(tag_list(&demo.tags))
        .child(link)
}

pub fn empty_placeholder() -> Node {
    Node::element("p").with_text(EMPTY_MESSAGE)
}
