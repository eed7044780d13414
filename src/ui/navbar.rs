// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for the page header.
//!
//! On wide windows the section links sit in the header. Below
//! [`COMPACT_LAYOUT_WIDTH`] they move into a menu panel opened by a toggle
//! button. While the panel is open it covers the page and the page does not
//! scroll.

use crate::app::config::COMPACT_LAYOUT_WIDTH;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::header::{self, HeaderState};
use crate::ui::icons;
use crate::ui::sections::SectionId;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, mouse_area, Column, Container, Row, Space, Text},
    Background, Border, Color, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub header: HeaderState,
    pub window_width: f32,
}

impl ViewContext<'_> {
    fn compact(&self) -> bool {
        is_compact(self.window_width)
    }
}

/// Returns whether links collapse behind the menu toggle at this width.
#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < COMPACT_LAYOUT_WIDTH
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    FollowLink(SectionId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(SectionId),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::FollowLink(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let logo = button(
        Text::new("ALOK AS")
            .size(typography::TITLE_MD)
            .color(palette::NAVY_900),
    )
    .on_press(Message::FollowLink(SectionId::Hero))
    .padding(0)
    .style(link_style);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(logo)
        .push(Space::new().width(Length::Fill));

    if ctx.compact() {
        let toggle_icon = if ctx.menu_open {
            icons::cross()
        } else {
            icons::menu()
        };
        row = row.push(
            button(icons::sized(toggle_icon, sizing::ICON_MD).style(icons::tinted(palette::NAVY_900)))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(link_style),
        );
    } else {
        for section in SectionId::NAV {
            row = row.push(build_link(ctx.i18n, section, typography::BODY));
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([0.0, spacing::XL])
        .align_y(Vertical::Center)
        .style(header::style(ctx.header))
        .into()
}

/// Render the open menu panel, or nothing when the menu is closed or the
/// window is wide.
pub fn menu_overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.menu_open || !ctx.compact() {
        return None;
    }

    let links = SectionId::NAV
        .into_iter()
        .fold(Column::new().spacing(spacing::MD), |column, section| {
            column.push(build_link(ctx.i18n, section, typography::TITLE_MD))
        });

    let panel = Container::new(links)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Left)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::WHITE)),
            ..container::Style::default()
        });

    // Clicking the backdrop closes the menu.
    let backdrop = mouse_area(
        Container::new(Column::new().push(Space::new().height(sizing::HEADER_HEIGHT)).push(panel))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::NAVY_900
                })),
                ..container::Style::default()
            }),
    )
    .on_press(Message::CloseMenu);

    Some(backdrop.into())
}

fn build_link<'a>(i18n: &I18n, section: SectionId, size: f32) -> Element<'a, Message> {
    button(Text::new(i18n.tr(section.nav_label_key())).size(size))
        .on_press(Message::FollowLink(section))
        .padding([spacing::XXS, 0.0])
        .style(link_style)
        .into()
}

/// Style function for header links.
fn link_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_600,
        button::Status::Active | button::Status::Disabled => palette::NAVY_900,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn ctx(i18n: &I18n, menu_open: bool, window_width: f32) -> ViewContext<'_> {
        ViewContext {
            i18n,
            menu_open,
            header: HeaderState::default(),
            window_width,
        }
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(&ctx(&i18n, false, 1280.0));
        let _element = view(&ctx(&i18n, true, 600.0));
    }

    #[test]
    fn menu_overlay_only_in_compact_layout() {
        let i18n = I18n::default();
        assert!(menu_overlay(&ctx(&i18n, true, 600.0)).is_some());
        assert!(menu_overlay(&ctx(&i18n, false, 600.0)).is_none());
        assert!(menu_overlay(&ctx(&i18n, true, 1280.0)).is_none());
    }

    #[test]
    fn compact_threshold() {
        assert!(is_compact(899.0));
        assert!(!is_compact(900.0));
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn links_close_menu_and_scroll() {
        let mut menu_open = true;
        let event = update(Message::FollowLink(SectionId::Contact), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::ScrollTo(SectionId::Contact));
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = false;
        assert_eq!(update(Message::CloseMenu, &mut menu_open), Event::None);
        assert!(!menu_open);
    }
}
