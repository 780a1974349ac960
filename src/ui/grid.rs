use std::collections::HashMap;

use iced::alignment::Vertical;
use iced::widget::image::Handle;
use iced::widget::{column, container, image, mouse_area, stack, text, Space};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use super::style;
use crate::state::data::ImageId;
use crate::state::grid::Card;
use crate::Message;

/// Edge length of a card's picture
const CARD_SIZE: f32 = 320.0;

/// Render the cards, or the empty-state message when there are none
pub fn view<'a>(cards: Vec<Card<'a>>, thumbnails: &'a HashMap<ImageId, Handle>) -> Element<'a, Message> {
    if is_empty_state(&cards) {
        return container(text("표시할 이미지가 없습니다").size(18).color(style::SLATE_500))
            .width(Length::Fill)
            .padding(48)
            .center_x(Length::Fill)
            .into();
    }

    let elements = cards
        .into_iter()
        .map(|card| card_view(card, thumbnails.get(&card.record.id)))
        .collect();

    Wrap::with_elements(elements)
        .spacing(24.0)
        .line_spacing(24.0)
        .into()
}

/// Whether the grid shows the empty-state message instead of cards
pub fn is_empty_state(cards: &[Card<'_>]) -> bool {
    cards.is_empty()
}

fn card_view<'a>(card: Card<'a>, thumbnail: Option<&'a Handle>) -> Element<'a, Message> {
    let record = card.record;

    // The placeholder stays until the load signal has arrived
    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) if card.loaded => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(CARD_SIZE)
            .height(CARD_SIZE)
            .into(),
        _ => container(Space::new(CARD_SIZE, CARD_SIZE))
            .style(style::placeholder)
            .into(),
    };

    let picture: Element<'a, Message> = if card.hovered {
        let caption = container(
            column![
                text(&record.title).size(20),
                text(&record.description).size(14),
            ]
            .spacing(6),
        )
        .padding(20)
        .width(Length::Fill)
        .style(style::caption);

        stack![
            picture,
            container(caption)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
        ]
        .into()
    } else {
        picture
    };

    let body = column![
        text(&record.title).size(18).color(style::SLATE_800),
        text(&record.description).size(14).color(style::SLATE_600),
        text("자세히 보기 →").size(14).color(style::INDIGO_600),
    ]
    .spacing(8)
    .padding(20);

    let frame = container(column![picture, body])
        .width(CARD_SIZE)
        .style(style::card(card.hovered));

    mouse_area(frame)
        .on_enter(Message::CardEntered(record.id))
        .on_exit(Message::CardLeft(record.id))
        .on_press(Message::CardClicked(record.clone()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;
    use crate::state::grid::GridState;

    #[test]
    fn test_empty_catalog_shows_empty_state() {
        let grid = GridState::new();
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(is_empty_state(&grid.cards(catalog.records())));
    }

    #[test]
    fn test_records_show_cards() {
        let grid = GridState::new();
        let catalog = Catalog::builtin();
        let cards = grid.cards(catalog.records());
        assert!(!is_empty_state(&cards));

        let thumbnails = HashMap::new();
        let _element = view(cards, &thumbnails);
    }
}
