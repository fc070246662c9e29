/// Fixed-size viewport that draws its content at a zoom factor
///
/// The viewport takes `edge` × `edge` in the layout. Its content is laid
/// out at `edge * scale` on each side, centered, and clipped to the viewport,
/// so zooming never pushes neighbouring cells around.
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{tree, Operation, Tree};
use iced::advanced::{mouse, Clipboard, Shell, Widget};
use iced::event::{self, Event};
use iced::{Element, Length, Point, Rectangle, Size};

pub struct Zoom<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    edge: f32,
    scale: f32,
}

impl<'a, Message, Theme, Renderer> Zoom<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        edge: f32,
        scale: f32,
    ) -> Self {
        Self {
            content: content.into(),
            edge,
            scale,
        }
    }
}

/// Side length zoomed content is laid out with
pub fn zoomed_edge(edge: f32, scale: f32) -> f32 {
    edge * scale
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Zoom<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        self.content.as_widget().tag()
    }

    fn state(&self) -> tree::State {
        self.content.as_widget().state()
    }

    fn children(&self) -> Vec<Tree> {
        self.content.as_widget().children()
    }

    fn diff(&self, tree: &mut Tree) {
        self.content.as_widget().diff(tree);
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(self.edge), Length::Fixed(self.edge))
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.resolve(
            Length::Fixed(self.edge),
            Length::Fixed(self.edge),
            Size::ZERO,
        );

        // The content gets its own limits; the viewport's must not clamp it
        let zoomed = zoomed_edge(self.edge, self.scale);
        let content_limits = layout::Limits::new(Size::ZERO, Size::new(zoomed, zoomed));
        let content = self.content.as_widget().layout(tree, renderer, &content_limits);

        let offset = Point::new(
            (size.width - content.size().width) / 2.0,
            (size.height - content.size().height) / 2.0,
        );

        layout::Node::with_children(size, vec![content.move_to(offset)])
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        if let Some(content) = layout.children().next() {
            self.content
                .as_widget()
                .operate(tree, content, renderer, operation);
        }
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        match layout.children().next() {
            Some(content) => self.content.as_widget_mut().on_event(
                tree, event, content, cursor, renderer, clipboard, shell, viewport,
            ),
            None => event::Status::Ignored,
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        match layout.children().next() {
            Some(content) => self
                .content
                .as_widget()
                .mouse_interaction(tree, content, cursor, viewport, renderer),
            None => mouse::Interaction::default(),
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(clip) = bounds.intersection(viewport) else {
            return;
        };
        let Some(content) = layout.children().next() else {
            return;
        };

        renderer.with_layer(clip, |renderer| {
            self.content
                .as_widget()
                .draw(tree, renderer, theme, style, content, cursor, &clip);
        });
    }
}

impl<'a, Message, Theme, Renderer> From<Zoom<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(zoom: Zoom<'a, Message, Theme, Renderer>) -> Self {
        Element::new(zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::{Handle, Image};

    fn layout_of(zoom: Zoom<'_, (), iced::Theme, ()>) -> layout::Node {
        let element: Element<'_, (), iced::Theme, ()> = zoom.into();
        let mut tree = Tree::new(&element);
        let limits = layout::Limits::new(Size::ZERO, Size::new(1000.0, 1000.0));
        element.as_widget().layout(&mut tree, &(), &limits)
    }

    fn image(side: f32) -> Image<Handle> {
        Image::new(Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255]))
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
    }

    #[test]
    fn test_content_is_laid_out_at_scale() {
        let node = layout_of(Zoom::new(image(150.0), 100.0, 1.5));

        assert_eq!(node.size(), Size::new(100.0, 100.0));
        let content = &node.children()[0];
        assert_eq!(content.size(), Size::new(150.0, 150.0));
        assert_eq!(content.bounds().position(), Point::new(-25.0, -25.0));
    }

    #[test]
    fn test_unzoomed_content_fills_viewport() {
        let node = layout_of(Zoom::new(image(80.0), 80.0, 1.0));
        let content = &node.children()[0];
        assert_eq!(content.bounds(), Rectangle::new(Point::ORIGIN, Size::new(80.0, 80.0)));
    }
}
