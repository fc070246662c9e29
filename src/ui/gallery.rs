/// Photo grid gallery
///
/// Lays catalog entries out in a fixed number of columns and wires each
/// cell's taps and image loads to its own `CellState`.
use iced::advanced::image::Renderer as ImageRenderer;
use iced::advanced::text::Renderer as TextRenderer;
use iced::widget::image::Handle;
use iced::widget::{self, container, mouse_area, responsive, scrollable, Column, Image, Row};
use iced::{ContentFit, Element, Length, Task, Theme};

use crate::error::LoadError;
use crate::loader;
use crate::state::catalog::Catalog;
use crate::state::cell::{CellState, CellView, SourceKind, ZoomPolicy};
use crate::state::config::GalleryConfig;
use crate::state::data::CatalogEntry;
use crate::Message;

use super::zoom::{self, Zoom};

/// Smallest edge a cell is ever drawn with
const MIN_CELL_EDGE: f32 = 1.0;

/// Edge length of a square cell so that `columns` cells fit across `width`
pub fn cell_edge(width: f32, columns: usize, spacing: f32, padding: f32) -> f32 {
    let columns = columns.max(1) as f32;
    let usable = width - 2.0 * padding - (columns - 1.0) * spacing;
    (usable / columns).max(MIN_CELL_EDGE)
}

/// A load the cell wants the loader to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub id: usize,
    pub source: SourceKind,
    pub uri: String,
}

/// What the cell holds for one of its two sources
#[derive(Debug, Clone, Default)]
enum Slot {
    #[default]
    Empty,
    Loading,
    Ready(Handle),
    Failed,
}

/// What a cell draws inside its square
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellContent<'a> {
    Image { handle: &'a Handle, scale: f32 },
    Loading,
    Failed,
}

/// One grid position: its catalog entry, its state, and what the loader
/// has answered for each of its sources so far
#[derive(Debug, Clone)]
pub struct GalleryCell {
    entry: CatalogEntry,
    state: CellState,
    primary: Slot,
    fallback: Slot,
}

impl GalleryCell {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            state: CellState::new(),
            primary: Slot::Empty,
            fallback: Slot::Empty,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &CellState {
        &self.state
    }

    fn slot(&self, kind: SourceKind) -> &Slot {
        match kind {
            SourceKind::Primary => &self.primary,
            SourceKind::Fallback => &self.fallback,
        }
    }

    /// Record `slot` for `kind`; both sources share it when they are the same URI
    fn store(&mut self, kind: SourceKind, slot: Slot) {
        if !self.entry.has_distinct_fallback() {
            self.primary = slot.clone();
            self.fallback = slot;
        } else if kind == SourceKind::Primary {
            self.primary = slot;
        } else {
            self.fallback = slot;
        }
    }

    /// Make sure the shown source is loaded or loading.
    ///
    /// Returns the fetch to run when nothing is held for it yet. A source that
    /// already failed is never fetched again: showing it fails the cell.
    pub fn request_load(&mut self) -> Option<LoadRequest> {
        let CellView::Image { source, .. } = self.state.view(&self.entry) else {
            return None;
        };
        let kind = self.state.source_kind();

        match self.slot(kind) {
            Slot::Empty => {
                let request = LoadRequest {
                    id: self.entry.id,
                    source: kind,
                    uri: source.to_string(),
                };
                self.store(kind, Slot::Loading);
                Some(request)
            }
            Slot::Failed => {
                self.state.fail();
                None
            }
            Slot::Loading | Slot::Ready(_) => None,
        }
    }

    /// Handle a tap; returns the load needed for the newly shown source
    pub fn tap(&mut self, policy: &ZoomPolicy) -> Option<LoadRequest> {
        if !self.state.tap(policy) {
            return None;
        }
        self.request_load()
    }

    /// Handle the loader's answer for one of this cell's sources.
    ///
    /// A failure fails the cell when it is for the source currently shown.
    /// Otherwise it is remembered so that source is never fetched again.
    pub fn image_loaded(&mut self, source: SourceKind, result: Result<Handle, LoadError>) {
        if self.state.load_failed() {
            return;
        }

        match result {
            Ok(handle) => self.store(source, Slot::Ready(handle)),
            Err(_) => {
                self.store(source, Slot::Failed);
                if matches!(self.slot(self.state.source_kind()), Slot::Failed) {
                    self.state.fail();
                }
            }
        }
    }

    /// Resolve what the cell draws right now
    pub fn content(&self) -> CellContent<'_> {
        match self.state.view(&self.entry) {
            CellView::Failed => CellContent::Failed,
            CellView::Image { scale, .. } => match self.slot(self.state.source_kind()) {
                Slot::Ready(handle) => CellContent::Image { handle, scale },
                _ => CellContent::Loading,
            },
        }
    }

    /// Draw the cell as an `edge` × `edge` tappable square
    pub fn view<'a, Renderer>(&'a self, edge: f32) -> Element<'a, Message, Theme, Renderer>
    where
        Renderer: ImageRenderer<Handle = Handle> + TextRenderer + 'a,
    {
        let content: Element<'a, Message, Theme, Renderer> = match self.content() {
            CellContent::Failed => widget::text("Failed to load").size(12).into(),
            CellContent::Loading => widget::text("Loading…").size(12).into(),
            CellContent::Image { handle, scale } => {
                let side = zoom::zoomed_edge(edge, scale);
                let image = Image::new(handle.clone())
                    .width(Length::Fixed(side))
                    .height(Length::Fixed(side))
                    .content_fit(ContentFit::Cover);

                Zoom::new(image, edge, scale).into()
            }
        };

        let cell = container(content)
            .center_x(Length::Fixed(edge))
            .center_y(Length::Fixed(edge))
            .clip(true)
            .style(container::rounded_box);

        mouse_area(cell)
            .on_press(Message::CellTapped(self.entry.id))
            .into()
    }
}

/// The grid of cells, one per catalog entry
#[derive(Debug)]
pub struct Gallery {
    cells: Vec<GalleryCell>,
    config: GalleryConfig,
}

impl Gallery {
    /// Mount one cell per catalog entry
    pub fn new(catalog: &Catalog, config: GalleryConfig) -> Self {
        let cells = catalog.entries().iter().cloned().map(GalleryCell::new).collect();
        Self { cells, config }
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[GalleryCell] {
        &self.cells
    }

    /// Kick off the first load for every cell
    pub fn load_all(&mut self) -> Task<Message> {
        Task::batch(
            self.cells
                .iter_mut()
                .filter_map(GalleryCell::request_load)
                .map(load_task),
        )
    }

    /// Handle a tap on cell `id`
    pub fn tap(&mut self, id: usize) -> Task<Message> {
        let policy = self.config.zoom;

        match self.cells.get_mut(id).and_then(|cell| cell.tap(&policy)) {
            Some(request) => load_task(request),
            None => Task::none(),
        }
    }

    /// Route a loader answer to its cell
    pub fn image_loaded(&mut self, id: usize, source: SourceKind, result: Result<Handle, LoadError>) {
        if let Some(cell) = self.cells.get_mut(id) {
            cell.image_loaded(source, result);
        }
    }

    /// Build the user interface
    pub fn view(&self) -> Element<'_, Message> {
        responsive(move |size| {
            let edge = cell_edge(
                size.width,
                self.config.columns,
                self.config.spacing,
                self.config.padding,
            );
            scrollable(self.grid(edge)).height(Length::Fill).into()
        })
        .into()
    }

    fn grid<'a>(&'a self, edge: f32) -> Element<'a, Message> {
        let rows = self
            .cells
            .chunks(self.config.columns.max(1))
            .map(|chunk| -> Element<'a, Message> {
                Row::with_children(chunk.iter().map(|cell| cell.view::<iced::Renderer>(edge)))
                    .spacing(self.config.spacing)
                    .into()
            });

        Column::with_children(rows)
            .spacing(self.config.spacing)
            .padding(self.config.padding)
            .into()
    }
}

fn load_task(request: LoadRequest) -> Task<Message> {
    let LoadRequest { id, source, uri } = request;

    Task::perform(loader::load_image(uri), move |result| Message::ImageLoaded {
        id,
        source,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::layout;
    use iced::advanced::widget::Tree;
    use iced::Size;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255])
    }

    fn cell(primary: &str, fallback: &str) -> GalleryCell {
        GalleryCell::new(CatalogEntry {
            id: 7,
            primary_source: primary.to_string(),
            fallback_source: fallback.to_string(),
        })
    }

    #[test]
    fn test_cell_edge() {
        // 3 columns in 336px with 8px gaps and 12px padding: (336 - 24 - 16) / 3
        assert!((cell_edge(336.0, 3, 8.0, 12.0) - 98.666_67).abs() < 1e-3);
        assert_eq!(cell_edge(100.0, 1, 0.0, 0.0), 100.0);
    }

    #[test]
    fn test_cell_edge_never_collapses() {
        assert_eq!(cell_edge(10.0, 4, 8.0, 12.0), MIN_CELL_EDGE);
        assert_eq!(cell_edge(90.0, 0, 0.0, 0.0), 90.0);
    }

    #[test]
    fn test_mount_requests_primary() {
        let mut cell = cell("a.jpg", "b.jpg");
        assert_eq!(
            cell.request_load(),
            Some(LoadRequest {
                id: 7,
                source: SourceKind::Primary,
                uri: "a.jpg".to_string(),
            })
        );
        assert_eq!(cell.content(), CellContent::Loading);
    }

    #[test]
    fn test_tap_requests_fallback_then_reuses_primary() {
        let policy = ZoomPolicy::default();
        let mut cell = cell("a.jpg", "b.jpg");
        cell.image_loaded(SourceKind::Primary, Ok(handle()));
        assert!(cell.request_load().is_none());

        let request = cell.tap(&policy).unwrap();
        assert_eq!(request.source, SourceKind::Fallback);
        assert_eq!(request.uri, "b.jpg");

        cell.image_loaded(SourceKind::Fallback, Ok(handle()));
        assert!(cell.tap(&policy).is_none());
        assert!(!cell.state().using_fallback());
    }

    #[test]
    fn test_in_flight_source_is_not_requested_twice() {
        let policy = ZoomPolicy::default();
        let mut cell = cell("a.jpg", "b.jpg");

        assert!(cell.request_load().is_some());
        assert!(cell.tap(&policy).is_some());
        assert!(cell.tap(&policy).is_none());
        assert!(cell.tap(&policy).is_none());
    }

    #[test]
    fn test_failed_source_is_never_fetched_again() {
        let policy = ZoomPolicy::default();
        let mut cell = cell("a.jpg", "b.jpg");
        cell.tap(&policy);

        cell.image_loaded(SourceKind::Primary, Err(LoadError::Status(404)));
        assert!(!cell.state().load_failed());

        assert!(cell.tap(&policy).is_none());
        assert!(cell.state().load_failed());
        assert_eq!(cell.content(), CellContent::Failed);
    }

    #[test]
    fn test_same_source_loads_once() {
        let policy = ZoomPolicy::default();
        let mut cell = cell("a.jpg", "a.jpg");
        cell.image_loaded(SourceKind::Primary, Ok(handle()));

        assert!(cell.tap(&policy).is_none());
        assert!(cell.state().using_fallback());
    }

    #[test]
    fn test_failure_for_shown_source_is_terminal() {
        let policy = ZoomPolicy::default();
        let mut cell = cell("a.jpg", "b.jpg");
        cell.image_loaded(SourceKind::Primary, Err(LoadError::Status(404)));

        assert!(cell.state().load_failed());
        assert!(cell.tap(&policy).is_none());
        assert!(!cell.state().using_fallback());
        assert_eq!(cell.state().scale(), 1.0);

        cell.image_loaded(SourceKind::Primary, Ok(handle()));
        assert!(cell.state().load_failed());
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let policy = ZoomPolicy::default();
        let mut cell = cell("a.jpg", "b.jpg");
        cell.tap(&policy);

        cell.image_loaded(SourceKind::Primary, Err(LoadError::Decode("bad".into())));
        assert!(!cell.state().load_failed());

        cell.image_loaded(SourceKind::Fallback, Err(LoadError::Decode("bad".into())));
        assert!(cell.state().load_failed());
    }

    #[test]
    fn test_gallery_routes_by_id() {
        let catalog = Catalog::from_sources(["a.jpg", "c.jpg"], ["b.jpg"]);
        let mut gallery = Gallery::new(&catalog, GalleryConfig::default());

        gallery.image_loaded(1, SourceKind::Primary, Err(LoadError::Status(500)));
        gallery.image_loaded(9, SourceKind::Primary, Err(LoadError::Status(500)));

        assert!(!gallery.cells()[0].state().load_failed());
        assert!(gallery.cells()[1].state().load_failed());
    }

    #[test]
    fn test_content_follows_state() {
        let policy = ZoomPolicy::default();
        let mut cell = cell("a.jpg", "b.jpg");
        let primary = handle();
        cell.image_loaded(SourceKind::Primary, Ok(primary.clone()));

        assert_eq!(
            cell.content(),
            CellContent::Image {
                handle: &primary,
                scale: 1.0
            }
        );

        cell.tap(&policy);
        assert_eq!(cell.content(), CellContent::Loading);

        cell.image_loaded(SourceKind::Fallback, Ok(handle()));
        match cell.content() {
            CellContent::Image { scale, .. } => assert!((scale - 1.2).abs() < 1e-4),
            other => panic!("expected an image, got {:?}", other),
        }

        cell.image_loaded(SourceKind::Fallback, Err(LoadError::Status(410)));
        cell.tap(&policy);
        assert_eq!(cell.content(), CellContent::Failed);
    }

    /// Lay a cell out the way the grid does, returning the inner node of its square
    fn layout_cell(cell: &GalleryCell, edge: f32) -> layout::Node {
        let element: Element<'_, Message, Theme, ()> = cell.view(edge);
        let mut tree = Tree::new(&element);
        let limits = layout::Limits::new(Size::ZERO, Size::new(1000.0, 1000.0));
        let square = element.as_widget().layout(&mut tree, &(), &limits);

        assert_eq!(square.size(), Size::new(edge, edge));
        square.children()[0].clone()
    }

    #[test]
    fn test_image_is_drawn_at_current_scale() {
        let policy = ZoomPolicy::default();
        let mut cell = cell("a.jpg", "a.jpg");
        cell.image_loaded(SourceKind::Primary, Ok(handle()));
        cell.tap(&policy);
        cell.tap(&policy);

        let viewport = layout_cell(&cell, 100.0);
        assert_eq!(viewport.size(), Size::new(100.0, 100.0));

        let image = &viewport.children()[0];
        assert!((image.size().width - 144.0).abs() < 1e-3);
        assert!((image.size().height - 144.0).abs() < 1e-3);
    }

    #[test]
    fn test_failed_cell_draws_indicator() {
        let mut cell = cell("a.jpg", "b.jpg");
        cell.image_loaded(SourceKind::Primary, Err(LoadError::Status(404)));

        // The text indicator is a leaf; an image sits inside a zoom viewport
        let content = layout_cell(&cell, 100.0);
        assert!(content.children().is_empty());
    }
}
