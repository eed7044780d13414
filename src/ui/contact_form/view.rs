// SPDX-License-Identifier: MPL-2.0
//! Contact form rendering.

use super::{ContactForm, FieldName, FieldState, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::widgets::animated_spinner::{rotation_at, AnimatedSpinner};
use iced::widget::{button, pick_list, text_input, Column, Container, Id, Row, Text};
use iced::{alignment::Vertical, Background, Border, Element, Length, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// One full spinner turn.
const SPINNER_PERIOD: Duration = Duration::from_millis(1000);

/// Service choices as `(submitted value, i18n key)`.
pub const SERVICES: [(&str, &str); 5] = [
    ("installasjon", "service-option-installation"),
    ("service", "service-option-maintenance"),
    ("smarthus", "service-option-smart-home"),
    ("elbillader", "service-option-ev-charger"),
    ("annet", "service-option-other"),
];

/// Localized entry of the service picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOption {
    pub slug: &'static str,
    pub label: String,
}

impl fmt::Display for ServiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a ContactForm,
    pub now: Instant,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);

    for name in FieldName::ALL {
        let field = ctx.form.field(name);
        let input = match name {
            FieldName::Service => service_picker(ctx.i18n, field),
            _ => text_field(ctx.i18n, field),
        };
        column = column.push(labeled(ctx.i18n, field, input));
    }

    column.push(submit_button(ctx)).into()
}

fn labeled<'a>(
    i18n: &I18n,
    field: &FieldState,
    input: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut label = i18n.tr(field.name.label_key());
    if field.required() {
        label.push_str(" *");
    }

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .color(palette::GRAY_900),
        )
        .push(input);

    if let Some(annotation) = field.annotation {
        column = column.push(
            Text::new(i18n.tr(annotation.message_key()))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    column.into()
}

fn text_field<'a>(i18n: &I18n, field: &FieldState) -> Element<'a, Message> {
    let name = field.name;
    let error = field.error_styled;
    let height = if name == FieldName::Message {
        sizing::TEXTAREA_HEIGHT
    } else {
        sizing::INPUT_HEIGHT
    };

    let input = text_input(&i18n.tr(name.placeholder_key()), &field.value)
        .id(Id::new(name.input_id()))
        .on_input(move |value| Message::FieldChanged(name, value))
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(move |theme: &Theme, status| input_style(theme, status, error));

    Container::new(input)
        .height(Length::Fixed(height))
        .align_y(Vertical::Top)
        .into()
}

fn service_picker<'a>(i18n: &I18n, field: &FieldState) -> Element<'a, Message> {
    let options: Vec<ServiceOption> = SERVICES
        .iter()
        .map(|&(slug, key)| ServiceOption {
            slug,
            label: i18n.tr(key),
        })
        .collect();

    let selected = options
        .iter()
        .find(|opt| opt.slug == field.value)
        .cloned();

    pick_list(options, selected, |opt| Message::ServiceSelected(opt.slug))
        .placeholder(i18n.tr(field.name.placeholder_key()))
        .padding(spacing::SM)
        .width(Length::Fill)
        .into()
}

fn submit_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.form.button();
    let label = Text::new(ctx.i18n.tr(state.label_key())).size(typography::BODY_LG);

    let content: Element<'a, Message> = match state.busy_since() {
        Some(since) => {
            let rotation = rotation_at(ctx.now.saturating_duration_since(since), SPINNER_PERIOD);
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(AnimatedSpinner::new(palette::WHITE, rotation).into_element())
                .push(label)
                .into()
        }
        None => label.into(),
    };

    let mut submit = button(content)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::SM, spacing::XL])
        .style(submit_style);
    if !state.is_disabled() {
        submit = submit.on_press(Message::Submit);
    }
    submit.into()
}

fn input_style(_theme: &Theme, status: text_input::Status, error: bool) -> text_input::Style {
    let border_color = match (error, status) {
        (true, _) => palette::ERROR_500,
        (false, text_input::Status::Focused { .. }) => palette::NAVY_700,
        (false, _) => palette::GRAY_200,
    };

    text_input::Style {
        background: Background::Color(palette::WHITE),
        border: Border {
            color: border_color,
            width: if error { border::WIDTH_MD } else { border::WIDTH_SM },
            radius: radius::SM.into(),
        },
        icon: palette::GRAY_500,
        placeholder: palette::GRAY_400,
        value: palette::GRAY_900,
        selection: palette::NAVY_100,
    }
}

fn submit_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_600,
        button::Status::Active => palette::ACCENT_500,
        button::Status::Disabled => palette::GRAY_400,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
