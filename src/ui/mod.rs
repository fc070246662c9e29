/// User interface module
///
/// - `gallery.rs` - the photo grid and its per-cell controllers
/// - `identity.rs` - the static identity card screen
/// - `triangle.rs` - canvas program used by the identity card
/// - `zoom.rs` - clipped viewport that draws a cell's image at its zoom

pub mod gallery;
pub mod identity;
pub mod triangle;
pub mod zoom;

/// Top-level screens reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Gallery,
    IdentityCard,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Gallery, Screen::IdentityCard];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Gallery => "Gallery",
            Screen::IdentityCard => "Identity Card",
        }
    }
}
