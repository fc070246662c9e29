/// Per-cell interaction state for the photo grid
///
/// Each grid cell owns one `CellState`. It is mutated only by that cell's
/// tap handler and by the load-failure signal for the image it shows.
/// Once a cell has failed it stays failed; taps on it do nothing.

use serde::{Deserialize, Serialize};

use super::data::CatalogEntry;

/// What happens when the next zoom step would reach the cap
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Saturation {
    /// Stick at the cap once reached
    #[default]
    Clamp,
    /// Jump back to 1.0 instead of reaching the cap
    Wrap,
}

/// Zoom progression applied on every tap, shared by all cells
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ZoomPolicy {
    /// Multiplicative step per tap (> 1.0)
    pub step: f32,
    /// Upper bound for the scale (> 1.0)
    pub cap: f32,
    pub saturation: Saturation,
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self {
            step: 1.2,
            cap: 2.0,
            saturation: Saturation::Clamp,
        }
    }
}

impl ZoomPolicy {
    /// Scale at rest, before any tap
    pub const INITIAL_SCALE: f32 = 1.0;

    /// The scale that follows `scale` after one tap
    pub fn next(&self, scale: f32) -> f32 {
        let stepped = scale * self.step;

        match self.saturation {
            Saturation::Clamp => stepped.min(self.cap),
            Saturation::Wrap if stepped >= self.cap => Self::INITIAL_SCALE,
            Saturation::Wrap => stepped,
        }
    }
}

/// Which of the entry's two sources a cell is pointing at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Primary,
    Fallback,
}

impl SourceKind {
    /// Pick the matching URI out of a catalog entry
    pub fn resolve(self, entry: &CatalogEntry) -> &str {
        match self {
            SourceKind::Primary => &entry.primary_source,
            SourceKind::Fallback => &entry.fallback_source,
        }
    }
}

/// What a cell should draw right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellView<'a> {
    /// Draw the image at `source`, zoomed by `scale`
    Image { source: &'a str, scale: f32 },
    /// Draw the static "failed to load" indicator
    Failed,
}

/// Interaction state for a single grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellState {
    using_fallback: bool,
    scale: f32,
    load_failed: bool,
}

impl Default for CellState {
    fn default() -> Self {
        Self {
            using_fallback: false,
            scale: ZoomPolicy::INITIAL_SCALE,
            load_failed: false,
        }
    }
}

impl CellState {
    /// Fresh state for a newly mounted cell
    pub fn new() -> Self {
        Self::default()
    }

    pub fn using_fallback(&self) -> bool {
        self.using_fallback
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Which source the cell currently shows
    pub fn source_kind(&self) -> SourceKind {
        if self.using_fallback() {
            SourceKind::Fallback
        } else {
            SourceKind::Primary
        }
    }

    /// Handle a tap: toggle the source and advance the zoom.
    ///
    /// Returns `false` (and changes nothing) if the cell has failed.
    pub fn tap(&mut self, policy: &ZoomPolicy) -> bool {
        if self.load_failed {
            return false;
        }

        self.using_fallback = !self.using_fallback;
        self.scale = policy.next(self.scale);
        true
    }

    /// Handle a load failure. Irreversible.
    pub fn fail(&mut self) {
        self.load_failed = true;
    }

    /// Resolve what to draw for `entry`
    pub fn view<'a>(&self, entry: &'a CatalogEntry) -> CellView<'a> {
        if self.load_failed() {
            CellView::Failed
        } else {
            CellView::Image {
                source: self.source_kind().resolve(entry),
                scale: self.scale(),
            }
        }
    }
}
