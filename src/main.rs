use env_logger::{Builder, Target};
use iced::widget::image::Handle;
use iced::widget::{button, column, container, Row};
use iced::{Element, Length, Size, Task, Theme};
use log::LevelFilter;
use std::path::PathBuf;

mod error;
mod loader;
mod state;
mod ui;

use error::{LoadError, StartupError};
use state::cell::SourceKind;
use state::config::{AppConfig, IdentityConfig};
use ui::gallery::Gallery;
use ui::Screen;

/// Main application state
struct PhotoGrid {
    /// The photo grid, one cell per catalog entry
    gallery: Gallery,
    /// Text for the identity card screen
    identity: IdentityConfig,
    /// Which screen is showing
    screen: Screen,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a screen in the navigation bar
    ShowScreen(Screen),
    /// User tapped the cell with this id
    CellTapped(usize),
    /// The loader finished one attempt for a cell's source
    ImageLoaded {
        id: usize,
        source: SourceKind,
        result: Result<Handle, LoadError>,
    },
}

impl PhotoGrid {
    /// Create a new instance of the application
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let catalog = config.catalog.build();
        log::info!(
            "🖼️  Photo Grid initialized with {} photos ({} columns, {:?} zoom)",
            catalog.len(),
            config.gallery.columns,
            config.gallery.zoom.saturation,
        );

        let mut gallery = Gallery::new(&catalog, config.gallery);
        let initial_loads = gallery.load_all();

        (
            PhotoGrid {
                gallery,
                identity: config.identity,
                screen: Screen::default(),
            },
            initial_loads,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowScreen(screen) => {
                self.screen = screen;
                Task::none()
            }
            Message::CellTapped(id) => self.gallery.tap(id),
            Message::ImageLoaded { id, source, result } => {
                self.gallery.image_loaded(id, source, result);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let buttons: Vec<Element<'_, Message>> = Screen::ALL
            .into_iter()
            .map(|screen| {
                let style = if screen == self.screen {
                    button::primary
                } else {
                    button::secondary
                };

                button(screen.title())
                    .on_press(Message::ShowScreen(screen))
                    .padding(10)
                    .style(style)
                    .into()
            })
            .collect();

        let navbar = Row::with_children(buttons).spacing(10).padding(10);

        let content = match self.screen {
            Screen::Gallery => self.gallery.view(),
            Screen::IdentityCard => ui::identity::view(&self.identity),
        };

        column![
            navbar,
            container(content).width(Length::Fill).height(Length::Fill),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Honour `RUST_LOG` when set, otherwise warn globally and debug for this crate
fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }

    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("photo_grid", LevelFilter::Debug)
        .init();
}

fn main() -> Result<(), StartupError> {
    init_logger();

    // Optional first argument: path to a JSON config file
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);

    let config = AppConfig::load(explicit).inspect_err(|e| log::error!("❌ {}", e))?;
    match config.to_json() {
        Ok(json) => log::debug!("Effective configuration:\n{}", json),
        Err(e) => log::warn!("⚠️  Could not render configuration: {}", e),
    }

    iced::application("Photo Grid", PhotoGrid::update, PhotoGrid::view)
        .theme(PhotoGrid::theme)
        .window_size(Size::new(420.0, 760.0))
        .centered()
        .run_with(move || PhotoGrid::new(config))?;

    Ok(())
}
