use thiserror::Error;

use crate::grid::{self, Container, GRID_ID};
use crate::loader::{self, DataSource};
use crate::logging;
use crate::model::DemoRecord;
use crate::render::LOAD_FAILED_MESSAGE;

/// Element id of the search box on the hosting page.
pub const SEARCH_ID: &str = "search";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchInput {
    pub id: String,
    value: String,
}

impl SearchInput {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The two elements the grid needs from its hosting page. Either may be
/// missing; [`bootstrap`] refuses to start in that case.
#[derive(Clone, Debug)]
pub struct Page<C> {
    pub grid: Option<C>,
    pub search: Option<SearchInput>,
}

impl<C> Page<C> {
    pub fn new(grid: C) -> Self {
        Self {
            grid: Some(grid),
            search: Some(SearchInput::new(SEARCH_ID)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Ready(Vec<DemoRecord>),
    Failed,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("required page element '#{id}' is missing")]
    MissingElement { id: &'static str },
}

/// A bootstrapped grid: owns the container and, once loaded, the records.
#[derive(Debug)]
pub struct DemoPage<C> {
    grid: C,
    search: SearchInput,
    state: PageState,
}

impl<C: Container> DemoPage<C> {
    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn grid(&self) -> &C {
        &self.grid
    }

    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    pub fn records(&self) -> &[DemoRecord] {
        match &self.state {
            PageState::Ready(records) => records,
            _ => &[],
        }
    }

    /// One search-input change. Every call recomputes and remounts the whole
    /// grid; there is nothing to do once loading has failed.
    pub fn on_input(&mut self, value: &str) {
        self.search.value = value.to_string();
        if let PageState::Ready(records) = &self.state {
            logging::debug(&format!("filtering {} demos by '{}'", records.len(), value));
            grid::mount_grid(&mut self.grid, records, value);
        }
    }

    fn finish_load(&mut self, result: Result<Vec<DemoRecord>, loader::LoadError>) {
        match result {
            Ok(records) => {
                logging::info(&format!("loaded {} demos", records.len()));
                grid::mount_grid(&mut self.grid, &records, "");
                self.state = PageState::Ready(records);
            }
            Err(e) => {
                logging::error(&e.to_string());
                self.grid.set_text_content(LOAD_FAILED_MESSAGE);
                self.state = PageState::Failed;
            }
        }
    }
}

/// Entry point: acquire the page elements, load the demo list once and
/// perform the first unfiltered mount.
///
/// A load failure is not an `Err`: it leaves the page in
/// [`PageState::Failed`] with the failure message in the grid. Only missing
/// page elements abort startup, and they are checked before anything is
/// fetched.
pub async fn bootstrap<C: Container>(
    page: Page<C>,
    client: &reqwest::Client,
    source: &DataSource,
) -> Result<DemoPage<C>, BootstrapError> {
    let grid = page
        .grid
        .ok_or(BootstrapError::MissingElement { id: GRID_ID })?;
    let search = page
        .search
        .ok_or(BootstrapError::MissingElement { id: SEARCH_ID })?;

    let mut demo_page = DemoPage {
        grid,
        search,
        state: PageState::Loading,
    };

    logging::debug(&format!("loading demos from {}", source.describe()));
    let result = loader::fetch_demos(client, source).await;
    demo_page.finish_load(result);
    Ok(demo_page)
}
