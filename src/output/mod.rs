pub mod page;

use crate::grid::{self, MemoryContainer};
use crate::model::DemoRecord;
use crate::render::Node;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

/// What the renderers need: the mounted grid plus the data behind it.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: &'a MemoryContainer,
    pub records: &'a [DemoRecord],
    pub term: &'a str,
}

fn card_line(card: &Node) -> String {
    let field = |tag: &str| {
        card.children()
            .iter()
            .find(|c| c.tag() == Some(tag))
            .map(|c| c.text_content())
            .unwrap_or_default()
    };
    let href = card
        .find(&|n| n.tag() == Some("a"))
        .and_then(|a| a.get_attr("href"))
        .unwrap_or_default()
        .to_string();
    let tags = card
        .find(&|n| n.has_class("tags"))
        .map(|list| {
            list.children()
                .iter()
                .map(|chip| format!("#{}", chip.text_content()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    let mut line = format!("{} [{}] -> {}", field("h2"), field("span"), href);
    if !tags.is_empty() {
        line.push_str("  ");
        line.push_str(&tags);
    }
    line
}

pub fn render_text(snapshot: &Snapshot) -> Vec<u8> {
    let mut out = String::new();
    for node in snapshot.grid.children() {
        if node.has_class("card") {
            out.push_str(&card_line(node));
        } else {
            out.push_str(&node.text_content());
        }
        out.push('\n');
    }
    out.into_bytes()
}

pub fn render_json(snapshot: &Snapshot) -> Vec<u8> {
    let visible = grid::visible(snapshot.records, snapshot.term);
    let mut out = serde_json::to_vec_pretty(&visible).unwrap_or_else(|_| b"[]".to_vec());
    out.push(b'\n');
    out
}

pub fn render_html(snapshot: &Snapshot) -> Vec<u8> {
    page::render_html(snapshot)
}

pub fn render(format: OutputFormat, snapshot: &Snapshot) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(snapshot),
        OutputFormat::Json => render_json(snapshot),
        OutputFormat::Html => render_html(snapshot),
    }
}
