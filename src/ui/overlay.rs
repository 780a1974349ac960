/// Detail overlay: the selected image large, its metadata and two actions,
/// over a dimmed backdrop.
use std::path::Path;

use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, mouse_area, opaque, row, stack, text, Space};
use iced::{ContentFit, Element, Length};

use super::style;
use crate::assets;
use crate::state::data::ImageRecord;
use crate::state::overlay::OverlayEvent;
use crate::Message;

const PANEL_MAX_WIDTH: f32 = 1024.0;
const IMAGE_HEIGHT: f32 = 460.0;

/// Render the overlay. Nothing is rendered unless it is visible with a record.
pub fn view<'a>(
    record: Option<&'a ImageRecord>,
    visible: bool,
    asset_root: &Path,
) -> Option<Element<'a, Message>> {
    let record = record.filter(|_| visible)?;

    let close = button(text("✕").size(18))
        .on_press(Message::Overlay(OverlayEvent::CloseControl))
        .padding([6, 12])
        .style(button::secondary);

    let source = assets::resolve(asset_root, &record.src);
    let picture = stack![
        container(
            image(Handle::from_path(source))
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(IMAGE_HEIGHT),
        )
        .style(style::image_well),
        container(
            container(text(&record.title).size(30))
                .padding(24)
                .width(Length::Fill)
                .style(style::title_band),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom),
        container(close)
            .padding(16)
            .width(Length::Fill)
            .align_x(Horizontal::Right),
    ];

    let about = column![
        text("작품 소개").size(20).color(style::SLATE_800),
        text(&record.description).size(15).color(style::SLATE_600),
        Space::with_height(8.0),
        text(format!("이미지 ID: #{}", record.id)).size(13).color(style::SLATE_500),
        text("지브리 컬렉션").size(13).color(style::SLATE_500),
    ]
    .spacing(10)
    .width(Length::FillPortion(1));

    let actions = column![
        text("이미지 옵션").size(20).color(style::SLATE_800),
        button(container(text("새 탭에서 열기")).center_x(Length::Fill))
            .on_press(Message::OpenInViewer)
            .padding(12)
            .width(Length::Fill)
            .style(button::primary),
        button(container(text("이미지 다운로드")).center_x(Length::Fill))
            .on_press(Message::Download)
            .padding(12)
            .width(Length::Fill)
            .style(button::secondary),
        container(
            column![
                text("💡 감상 팁").size(13),
                text("ESC 키를 누르거나 배경을 클릭하여 갤러리로 돌아갈 수 있습니다.").size(13),
            ]
            .spacing(6),
        )
        .padding(16)
        .width(Length::Fill)
        .style(style::tip),
    ]
    .spacing(12)
    .width(Length::FillPortion(1));

    let panel = container(column![picture, row![about, actions].spacing(32).padding(32)])
        .max_width(PANEL_MAX_WIDTH)
        .style(style::panel);

    // Presses inside the panel are captured here and never reach the backdrop
    let content = mouse_area(panel).on_press(Message::Overlay(OverlayEvent::ContentClick));

    let backdrop = mouse_area(
        container(content)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(style::backdrop),
    )
    .on_press(Message::Overlay(OverlayEvent::BackdropClick));

    Some(backdrop.into())
}

/// Full-window layer that swallows pointer input meant for the page below,
/// including wheel scrolling, while the scroll lock is held
pub fn scroll_lock<'a>() -> Element<'a, Message> {
    opaque(Space::new(Length::Fill, Length::Fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;

    #[test]
    fn test_hidden_or_empty_renders_nothing() {
        let root = Path::new("public");
        let catalog = Catalog::builtin();
        let record = catalog.get(2).unwrap();

        assert!(view(None, true, root).is_none());
        assert!(view(None, false, root).is_none());
        assert!(view(Some(record), false, root).is_none());
    }

    #[test]
    fn test_visible_record_renders() {
        let root = Path::new("public");
        let catalog = Catalog::builtin();
        let record = catalog.get(2).unwrap();

        assert!(view(Some(record), true, root).is_some());
    }
}
