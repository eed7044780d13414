// SPDX-License-Identifier: MPL-2.0
//! Page body: the sections in scroll order, then the footer.
//!
//! Every section has the fixed height given by [`SectionId::height`], so the
//! reveal tracker and anchor scrolling can work from known bands. Sections
//! that are not yet revealed are covered by a veil in their own background
//! color, which fades out as the reveal progresses.

use crate::i18n::fluent::I18n;
use crate::ui::area_map::{self, AreaMap};
use crate::ui::contact_form::{self, ContactForm};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::reveal::RevealTracker;
use crate::ui::sections::{SectionId, FOOTER_HEIGHT};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Container, Row, Space, Stack, Text};
use iced::{Background, Border, Color, Element, Length, Theme};
use std::time::Instant;

/// Services shown as cards: `(title key, body key)`.
const SERVICE_CARDS: [(&str, &str); 4] = [
    ("services-installation-title", "services-installation-body"),
    ("services-maintenance-title", "services-maintenance-body"),
    ("services-smart-home-title", "services-smart-home-body"),
    ("services-ev-charger-title", "services-ev-charger-body"),
];

const PHONE_NUMBER: &str = "+47 38 32 00 00";
const EMAIL_ADDRESS: &str = "post@alok.no";

#[derive(Debug, Clone)]
pub enum Message {
    /// An in-page link was followed; carries its `href`.
    FollowAnchor(&'static str),
    AreaMap(area_map::Message),
    ContactForm(contact_form::Message),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub reveal: &'a RevealTracker,
    pub area_map: &'a AreaMap,
    pub form: &'a ContactForm,
    pub now: Instant,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    SectionId::ALL
        .into_iter()
        .fold(Column::new().width(Length::Fill), |column, section| {
            column.push(section_view(ctx, section))
        })
        .push(footer(ctx.i18n))
        .into()
}

fn section_view<'a>(ctx: &ViewContext<'a>, section: SectionId) -> Element<'a, Message> {
    let background = background_of(section);
    let content = match section {
        SectionId::Hero => hero(ctx.i18n),
        SectionId::Services => services(ctx.i18n),
        SectionId::About => about(ctx.i18n),
        SectionId::Area => area(ctx),
        SectionId::Contact => contact(ctx),
    };

    let band = Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(section.height()))
    .padding([spacing::XXXL, spacing::XL])
    .align_x(Horizontal::Center)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    });

    let opacity = ctx.reveal.opacity(section, ctx.now);
    if opacity >= 1.0 {
        return band.into();
    }

    let veil = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: 1.0 - opacity,
                ..background
            })),
            ..container::Style::default()
        });

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(section.height()))
        .push(band)
        .push(veil)
        .into()
}

fn background_of(section: SectionId) -> Color {
    match section {
        SectionId::Hero => palette::NAVY_900,
        SectionId::Services | SectionId::Area => palette::GRAY_100,
        SectionId::About | SectionId::Contact => palette::WHITE,
    }
}

fn heading<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    Text::new(i18n.tr(key))
        .size(typography::TITLE_LG)
        .color(palette::NAVY_900)
        .into()
}

fn body<'a>(i18n: &I18n, key: &str) -> Text<'a> {
    Text::new(i18n.tr(key))
        .size(typography::BODY_LG)
        .color(palette::GRAY_900)
}

fn hero<'a>(i18n: &I18n) -> Element<'a, Message> {
    let actions = Row::new()
        .spacing(spacing::MD)
        .push(cta(i18n.tr("hero-cta-contact"), "#kontakt", true))
        .push(cta(i18n.tr("hero-cta-services"), "#tjenester", false));

    Column::new()
        .spacing(spacing::LG)
        .push(Space::new().height(sizing::HEADER_HEIGHT))
        .push(
            Text::new(i18n.tr("hero-title"))
                .size(typography::DISPLAY)
                .color(palette::WHITE),
        )
        .push(
            Text::new(i18n.tr("hero-subtitle"))
                .size(typography::BODY_LG)
                .color(palette::NAVY_100),
        )
        .push(actions)
        .into()
}

fn cta<'a>(label: String, href: &'static str, primary: bool) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_LG))
        .on_press(Message::FollowAnchor(href))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::SM, spacing::LG])
        .style(move |_theme: &Theme, status| cta_style(primary, status))
        .into()
}

fn cta_style(primary: bool, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    let (background, border_color) = match (primary, hovered) {
        (true, false) => (Some(palette::ACCENT_500), palette::ACCENT_500),
        (true, true) => (Some(palette::ACCENT_600), palette::ACCENT_600),
        (false, false) => (None, palette::WHITE),
        (false, true) => (Some(palette::NAVY_700), palette::WHITE),
    };
    button::Style {
        background: background.map(Background::Color),
        text_color: palette::WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}

fn services<'a>(i18n: &I18n) -> Element<'a, Message> {
    let cards = SERVICE_CARDS.iter().fold(
        Row::new().spacing(spacing::LG),
        |row, &(title, text)| {
            let card = Column::new()
                .spacing(spacing::SM)
                .push(
                    Text::new(i18n.tr(title))
                        .size(typography::TITLE_MD)
                        .color(palette::NAVY_900),
                )
                .push(body(i18n, text));
            row.push(
                Container::new(card)
                    .width(Length::FillPortion(1))
                    .padding(spacing::LG)
                    .style(card_style),
            )
        },
    );

    Column::new()
        .spacing(spacing::XL)
        .push(heading(i18n, "services-title"))
        .push(body(i18n, "services-intro"))
        .push(cards)
        .into()
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

fn about<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::LG)
        .push(heading(i18n, "about-title"))
        .push(body(i18n, "about-body"))
        .push(body(i18n, "about-certification"))
        .into()
}

fn area<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::LG)
        .push(heading(ctx.i18n, "area-title"))
        .push(body(ctx.i18n, "area-intro"))
        .push(ctx.area_map.view(ctx.i18n).map(Message::AreaMap))
        .into()
}

fn contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = contact_form::view(&contact_form::ViewContext {
        i18n: ctx.i18n,
        form: ctx.form,
        now: ctx.now,
    })
    .map(Message::ContactForm);

    let phone = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::phone(), sizing::ICON_SM).style(icons::tinted(palette::NAVY_900)))
        .push(Text::new(PHONE_NUMBER).size(typography::BODY_LG));

    let details = Column::new()
        .spacing(spacing::MD)
        .push(body(ctx.i18n, "contact-intro"))
        .push(phone)
        .push(Text::new(EMAIL_ADDRESS).size(typography::BODY_LG));

    Column::new()
        .spacing(spacing::XL)
        .push(heading(ctx.i18n, "contact-title"))
        .push(
            Row::new()
                .spacing(spacing::XXL)
                .push(Container::new(details).width(Length::FillPortion(1)))
                .push(
                    Container::new(form)
                        .width(Length::FillPortion(2))
                        .max_width(sizing::FORM_MAX_WIDTH),
                ),
        )
        .into()
}

fn footer<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new("ALOK AS")
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(
            Text::new(i18n.tr("footer-tagline"))
                .size(typography::BODY)
                .color(palette::NAVY_100),
        )
        .push(
            Text::new(i18n.tr("footer-copyright"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(FOOTER_HEIGHT))
        .padding([spacing::XL, spacing::XL])
        .align_x(Horizontal::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::NAVY_900)),
            ..container::Style::default()
        })
        .into()
}
