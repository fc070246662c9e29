/// Solid triangle pointing up, drawn on a canvas
use iced::widget::canvas::{self, Path};
use iced::{Color, Point, Rectangle};

use crate::Message;

/// Triangle that fills its canvas: apex at the top center,
/// base along the bottom edge
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub color: Color,
}

impl Triangle {
    /// Corner points for a canvas of the given size (apex, bottom right, bottom left)
    pub fn corners(width: f32, height: f32) -> [Point; 3] {
        [
            Point::new(width / 2.0, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
        ]
    }
}

impl canvas::Program<Message> for Triangle {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let [apex, right, left] = Self::corners(bounds.width, bounds.height);
        let path = Path::new(|builder| {
            builder.move_to(apex);
            builder.line_to(right);
            builder.line_to(left);
            builder.close();
        });

        frame.fill(&path, self.color);

        vec![frame.into_geometry()]
    }
}
