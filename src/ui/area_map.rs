// SPDX-License-Identifier: MPL-2.0
//! Service area map.
//!
//! Markers sit at fixed positions over the map panel. Clicking one selects
//! it, highlights it, and reports the area name so the app can log it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, text, tooltip, Column, Container, Stack};
use iced::{Background, Border, Element, Length, Padding, Theme};

/// A marker on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub name: &'static str,
    /// Horizontal position as a fraction of the map width.
    pub x: f32,
    /// Vertical position as a fraction of the map height.
    pub y: f32,
}

/// Areas served, with their approximate map positions.
pub const MARKERS: [Marker; 8] = [
    Marker { name: "Flekkefjord", x: 0.42, y: 0.62 },
    Marker { name: "Kvinesdal", x: 0.58, y: 0.44 },
    Marker { name: "Sirdal", x: 0.50, y: 0.14 },
    Marker { name: "Lyngdal", x: 0.76, y: 0.70 },
    Marker { name: "Farsund", x: 0.72, y: 0.88 },
    Marker { name: "Hægebostad", x: 0.80, y: 0.40 },
    Marker { name: "Lund", x: 0.24, y: 0.50 },
    Marker { name: "Sokndal", x: 0.12, y: 0.70 },
];

const MAP_WIDTH: f32 = 560.0;

#[derive(Debug, Clone)]
pub enum Message {
    Select(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// An area was selected; carries its name.
    Selected(&'static str),
}

#[derive(Debug, Default)]
pub struct AreaMap {
    selected: Option<usize>,
}

impl AreaMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Select(index) => match MARKERS.get(index) {
                Some(marker) => {
                    self.selected = Some(index);
                    Event::Selected(marker.name)
                }
                None => Event::None,
            },
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static str> {
        self.selected.and_then(|i| MARKERS.get(i)).map(|m| m.name)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut layers = Stack::new()
            .width(Length::Fixed(MAP_WIDTH))
            .height(Length::Fixed(sizing::MAP_HEIGHT))
            .push(
                Container::new(text(""))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(map_panel_style),
            );

        for (index, marker) in MARKERS.iter().enumerate() {
            let selected = self.selected == Some(index);
            let size = if selected {
                sizing::MAP_DOT_SELECTED
            } else {
                sizing::MAP_DOT
            };

            let dot = button(Container::new(text("")).width(size).height(size))
                .on_press(Message::Select(index))
                .padding(0)
                .style(move |_theme: &Theme, status: button::Status| dot_style(selected, status));

            let labeled = tooltip(
                dot,
                text(marker.name).size(typography::CAPTION),
                tooltip::Position::Top,
            )
            .style(container::rounded_box);

            layers = layers.push(Container::new(labeled).padding(Padding {
                left: marker.x * MAP_WIDTH - size / 2.0,
                top: marker.y * sizing::MAP_HEIGHT - size / 2.0,
                ..Padding::ZERO
            }));
        }

        let caption = match self.selected() {
            Some(name) => i18n.tr_with_args("area-selected", &[("name", name)]),
            None => i18n.tr("area-hint"),
        };

        Column::new()
            .spacing(spacing::MD)
            .push(layers)
            .push(text(caption).size(typography::BODY).color(palette::GRAY_500))
            .into()
    }
}

fn map_panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_100)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn dot_style(selected: bool, status: button::Status) -> button::Style {
    let color = match (selected, status) {
        (true, _) => palette::ACCENT_500,
        (false, button::Status::Hovered | button::Status::Pressed) => palette::ACCENT_600,
        (false, _) => palette::NAVY_900,
    };
    button::Style {
        background: Some(Background::Color(color)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            width: 2.0,
            color: palette::WHITE,
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
