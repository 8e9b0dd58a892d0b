use crate::bootstrap::{bootstrap, Page, PageState};
use crate::grid::{build_grid, mount_grid, visible, Container, MemoryContainer, GRID_ID};
use crate::loader::{parse_demos, DataSource};
use crate::model::DemoRecord;
use crate::render::{link_target, EMPTY_MESSAGE, LOAD_FAILED_MESSAGE};

fn demo(title: &str, description: &str, tags: &[&str]) -> DemoRecord {
    DemoRecord {
        title: title.to_string(),
        description: description.to_string(),
        status: "preview".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        path: format!("demos/{}", title.to_lowercase()),
    }
}

fn catalog() -> Vec<DemoRecord> {
    vec![
        demo("Ring Buffer", "lock-free queue", &["Concurrency"]),
        demo("Raft", "consensus over TCP", &["net", "distributed"]),
        demo("LRU", "bounded cache", &["cache"]),
        demo("Tokenizer", "streaming lexer", &[]),
    ]
}

fn brute_force(records: &[DemoRecord], term: &str) -> Vec<String> {
    let t = term.trim().to_lowercase();
    records
        .iter()
        .filter(|r| {
            t.is_empty()
                || r.title.to_lowercase().contains(&t)
                || r.description.to_lowercase().contains(&t)
                || r.tags.iter().any(|tag| tag.to_lowercase().contains(&t))
        })
        .map(|r| r.title.clone())
        .collect()
}

#[test]
fn visible_subset_agrees_with_definition() {
    let records = catalog();
    for term in ["r", "RAFT", " cache ", "con", "lex", "tcp", "q", "zzz", "", "  "] {
        let got: Vec<_> = visible(&records, term)
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(got, brute_force(&records, term), "term {term:?}");
    }
}

#[test]
fn blank_terms_keep_every_record_in_order() {
    let records = catalog();
    let all: Vec<_> = records.iter().map(|r| r.title.clone()).collect();
    for term in ["", " ", "\t\n"] {
        let got: Vec<_> = visible(&records, term)
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(got, all);
    }
}

#[test]
fn remount_with_same_inputs_is_stable() {
    let records = catalog();
    let mut grid = MemoryContainer::new(GRID_ID);
    mount_grid(&mut grid, &records, "con");
    let first = grid.to_html();
    mount_grid(&mut grid, &records, "con");
    mount_grid(&mut grid, &records, "con");
    assert_eq!(grid.to_html(), first);
    assert_eq!(build_grid(&records, "con"), grid.children().to_vec());
}

#[test]
fn no_match_leaves_exactly_one_placeholder() {
    let records = catalog();
    let mut grid = MemoryContainer::new(GRID_ID);
    mount_grid(&mut grid, &records, "does-not-exist");
    assert_eq!(grid.children().len(), 1);
    assert_eq!(grid.cards().count(), 0);
    assert_eq!(grid.text_content(), EMPTY_MESSAGE);
}

#[test]
fn link_targets() {
    assert_eq!(link_target("demos/foo"), "../demos/foo");
    assert_eq!(link_target("https://example.com/x"), "https://example.com/x");
    assert_eq!(link_target("/demos/foo"), "../demos/foo");
}

#[test]
fn failure_text_replaces_cards() {
    let records = catalog();
    let mut grid = MemoryContainer::new(GRID_ID);
    mount_grid(&mut grid, &records, "");
    grid.set_text_content(LOAD_FAILED_MESSAGE);
    assert_eq!(grid.text_content(), LOAD_FAILED_MESSAGE);
    assert_eq!(grid.cards().count(), 0);
}

#[tokio::test]
async fn alpha_beta_through_bootstrap() {
    let records = parse_demos(
        br#"[
            {"title":"Alpha","description":"","status":"stable","tags":["net"],"path":"demos/alpha"},
            {"title":"Beta","description":"","status":"stable","tags":["cache"],"path":"demos/beta"}
        ]"#,
        "inline",
    )
    .unwrap();
    let page = Page::new(MemoryContainer::new(GRID_ID));
    let mut page = bootstrap(page, &reqwest::Client::new(), &DataSource::Inline(records))
        .await
        .unwrap();
    assert!(matches!(page.state(), PageState::Ready(_)));

    page.on_input("net");
    let titles: Vec<_> = page
        .grid()
        .cards()
        .map(|c| c.children()[0].text_content())
        .collect();
    assert_eq!(titles, vec!["Alpha"]);

    page.on_input("");
    assert_eq!(page.grid().cards().count(), 2);

    page.on_input("zzz");
    assert_eq!(page.grid().text_content(), EMPTY_MESSAGE);
}
