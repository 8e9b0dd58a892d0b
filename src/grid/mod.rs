use crate::model::{normalize_term, DemoRecord};
use crate::render::{self, Node};

/// Element id of the grid container on the hosting page.
pub const GRID_ID: &str = "demoGrid";

/// Thin adapter over whatever actually holds the grid's nodes.
pub trait Container {
    /// Swap the whole child list in one step.
    fn replace_children(&mut self, nodes: Vec<Node>);

    /// Replace every child with a single text node.
    fn set_text_content(&mut self, text: &str);
}

/// Records matching `term`, in source order.
pub fn visible<'a>(records: &'a [DemoRecord], term: &str) -> Vec<&'a DemoRecord> {
    let normalized = normalize_term(term);
    records.iter().filter(|r| r.matches(&normalized)).collect()
}

/// The grid's children for `(records, term)`: one card per visible record,
/// or the placeholder when nothing matches.
pub fn build_grid(records: &[DemoRecord], term: &str) -> Vec<Node> {
    let cards: Vec<Node> = visible(records, term)
        .into_iter()
        .map(render::card)
        .collect();
    if cards.is_empty() {
        return vec![render::empty_placeholder()];
    }
    cards
}

pub fn mount_grid<C: Container + ?Sized>(grid: &mut C, records: &[DemoRecord], term: &str) {
    let nodes = build_grid(records, term);
    grid.replace_children(nodes);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryContainer {
    pub id: String,
    children: Vec<Node>,
}

impl MemoryContainer {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn cards(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|n| n.has_class("card"))
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(|n| n.text_content()).collect()
    }

    pub fn to_html(&self) -> String {
        self.children.iter().map(|n| n.to_html()).collect()
    }
}

impl Container for MemoryContainer {
    fn replace_children(&mut self, nodes: Vec<Node>) {
        self.children = nodes;
    }

    fn set_text_content(&mut self, text: &str) {
        self.children = vec![Node::text(text)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo(title: &str, tags: &[&str]) -> DemoRecord {
        DemoRecord {
            title: title.to_string(),
            description: format!("{title} demo"),
            status: "stable".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            path: format!("demos/{}", title.to_lowercase()),
        }
    }

    fn titles(records: &[&DemoRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn alpha_beta_scenario() {
        let records = vec![demo("Alpha", &["net"]), demo("Beta", &["cache"])];
        assert_eq!(titles(&visible(&records, "net")), vec!["Alpha"]);
        assert_eq!(titles(&visible(&records, "")), vec!["Alpha", "Beta"]);
        assert!(visible(&records, "zzz").is_empty());
    }

    #[test]
    fn whitespace_term_is_identity() {
        let records = vec![demo("Beta", &[]), demo("Alpha", &[])];
        assert_eq!(titles(&visible(&records, "  \t ")), vec!["Beta", "Alpha"]);
    }

    #[test]
    fn term_is_trimmed_and_case_folded() {
        let records = vec![demo("Alpha", &["NET"]), demo("Beta", &["cache"])];
        assert_eq!(titles(&visible(&records, "  nEt ")), vec!["Alpha"]);
    }

    #[test]
    fn build_grid_shows_placeholder_when_nothing_matches() {
        let records = vec![demo("Alpha", &["net"])];
        let nodes = build_grid(&records, "zzz");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag(), Some("p"));
        assert_eq!(nodes[0].text_content(), render::EMPTY_MESSAGE);
    }

    #[test]
    fn empty_record_set_shows_placeholder() {
        let nodes = build_grid(&[], "");
        assert_eq!(nodes, vec![render::empty_placeholder()]);
    }

    #[test]
    fn mount_replaces_previous_content() {
        let records = vec![demo("Alpha", &["net"]), demo("Beta", &["cache"])];
        let mut grid = MemoryContainer::new(GRID_ID);
        grid.set_text_content("stale");

        mount_grid(&mut grid, &records, "");
        assert_eq!(grid.cards().count(), 2);
        assert!(!grid.text_content().contains("stale"));

        mount_grid(&mut grid, &records, "cache");
        assert_eq!(grid.cards().count(), 1);
        assert!(grid.text_content().starts_with("Beta"));
    }

    #[test]
    fn mount_is_idempotent() {
        let records = vec![demo("Alpha", &["net"]), demo("Beta", &["cache"])];
        let mut once = MemoryContainer::new(GRID_ID);
        mount_grid(&mut once, &records, "a");
        let mut twice = once.clone();
        mount_grid(&mut twice, &records, "a");
        assert_eq!(once, twice);
    }

    struct CountingContainer {
        swaps: usize,
        last: Vec<Node>,
    }

    impl Container for CountingContainer {
        fn replace_children(&mut self, nodes: Vec<Node>) {
            self.swaps += 1;
            self.last = nodes;
        }

        fn set_text_content(&mut self, text: &str) {
            self.last = vec![Node::text(text)];
        }
    }

    #[test]
    fn mount_swaps_children_once() {
        let records = vec![demo("Alpha", &[]), demo("Beta", &[]), demo("Gamma", &[])];
        let mut grid = CountingContainer {
            swaps: 0,
            last: Vec::new(),
        };
        mount_grid(&mut grid, &records, "");
        assert_eq!(grid.swaps, 1);
        assert_eq!(grid.last.len(), 3);

        mount_grid(&mut grid, &records, "nothing");
        assert_eq!(grid.swaps, 2);
        assert_eq!(grid.last.len(), 1);
    }
}
