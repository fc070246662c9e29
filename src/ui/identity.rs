/// Static identity card screen
///
/// A coral triangle above two labelled boxes (name and identity number)
/// on a blue background. Nothing here is interactive.
use iced::font::{self, Font};
use iced::widget::{canvas, column, container, text};
use iced::{color, Alignment, Background, Border, Color, Element, Length};

use super::triangle::Triangle;
use crate::state::config::IdentityConfig;
use crate::Message;

const BACKGROUND: Color = color!(0x0000ff);
const TRIANGLE: Color = color!(0xff6f61); // coral
const NAME_BOX: Color = color!(0x6a4c93);
const NUMBER_BOX: Color = color!(0x0ca678); // emerald
const LABEL: Color = color!(0xfefefe);

const TRIANGLE_WIDTH: f32 = 130.0;
const TRIANGLE_HEIGHT: f32 = 100.0;
const BOX_WIDTH: f32 = 270.0;
const BOX_HEIGHT: f32 = 64.0;
const GAP: f32 = 28.0;

/// Build the identity card screen
pub fn view(identity: &IdentityConfig) -> Element<'_, Message> {
    let triangle = canvas(Triangle { color: TRIANGLE })
        .width(Length::Fixed(TRIANGLE_WIDTH))
        .height(Length::Fixed(TRIANGLE_HEIGHT));

    let content = column![
        triangle,
        label_box(&identity.name, NAME_BOX, 12.0),
        label_box(&identity.number, NUMBER_BOX, 20.0),
    ]
    .spacing(GAP)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_| container::Style {
            background: Some(Background::Color(BACKGROUND)),
            ..container::Style::default()
        })
        .into()
}

/// Fixed-size rounded box with centered bold text
fn label_box(label: &str, color: Color, radius: f32) -> Element<'_, Message> {
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };

    container(text(label).size(16).font(bold).color(LABEL))
        .center_x(Length::Fixed(BOX_WIDTH))
        .center_y(Length::Fixed(BOX_HEIGHT))
        .padding([0, 20])
        .style(move |_| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette() {
        assert_eq!(BACKGROUND, Color::from_rgb(0.0, 0.0, 1.0));
        assert_eq!(TRIANGLE, Color::from_rgb8(0xff, 0x6f, 0x61));
        assert_eq!(NUMBER_BOX, Color::from_rgb8(0x0c, 0xa6, 0x78));
    }
}
