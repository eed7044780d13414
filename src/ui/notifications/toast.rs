// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the live notification.
//!
//! The toast is a white card anchored to the top-right corner with a colored
//! stripe on its left edge. It slides in from the right while entering and
//! back out while leaving, floating over the page while it moves.

use super::manager::{Instance, Manager, Message, Phase};
use super::notification::Severity;
use super::styles::{self, Stylesheet};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, typography};
use crate::ui::icons;
use iced::widget::{button, container, float, svg, text, tooltip, Container, Row};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme, Vector};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders one toast.
    pub fn view<'a>(instance: &'a Instance, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let sheet = styles::ensure_installed();
        let notification = instance.notification();
        let severity = notification.severity();
        let accent = sheet.accent(severity);
        let alpha = visibility(instance, now);

        let icon = icons::sized(Self::severity_icon(severity), sizing::ICON_MD)
            .style(icons::tinted(fade(accent, alpha)));

        let message = text(notification.message().resolve(i18n))
            .size(typography::BODY)
            .color(fade(palette::GRAY_900, alpha));

        let close_color = sheet.close_color;
        let close_hover = sheet.close_hover_color;
        let close = button(
            icons::sized(icons::cross(), sizing::ICON_SM).style(
                move |_theme: &Theme, status: svg::Status| {
                    let color = match status {
                        svg::Status::Hovered => close_hover,
                        svg::Status::Idle => close_color,
                    };
                    svg::Style {
                        color: Some(fade(color, alpha)),
                    }
                },
            ),
        )
        .on_press(Message::Dismiss(notification.id()))
        .padding(4)
        .style(close_button_style);
        let close = tooltip(
            close,
            text(i18n.tr("notification-close")).size(typography::CAPTION),
            tooltip::Position::Bottom,
        )
        .style(container::rounded_box);

        let content = Row::new()
            .spacing(sheet.gap)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(Container::new(message).width(Length::Fill))
            .push(close);

        let card = Container::new(content)
            .max_width(sheet.max_width - sheet.accent_width)
            .padding(sheet.padding)
            .style(move |_theme: &Theme| card_style(sheet, alpha));

        // The accent shows through the left padding as a stripe.
        Container::new(card)
            .padding(Padding {
                left: sheet.accent_width,
                ..Padding::ZERO
            })
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(fade(accent, alpha))),
                border: Border {
                    radius: sheet.radius.into(),
                    ..Border::default()
                },
                shadow: iced::Shadow {
                    color: fade(sheet.shadow.color, alpha),
                    ..sheet.shadow
                },
                ..container::Style::default()
            })
            .into()
    }

    /// Renders the toast layer: the live toast in the top-right corner, or
    /// nothing.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        now: Instant,
    ) -> Option<Element<'a, Message>> {
        let instance = manager.current()?;
        let sheet = styles::ensure_installed();
        let shift = displacement(sheet, instance, now);

        let toast =
            float(Self::view(instance, i18n, now)).translate(move |_bounds, _viewport| shift);

        Some(
            Container::new(toast)
                .width(Length::Fill)
                .height(Length::Shrink)
                .align_x(alignment::Horizontal::Right)
                .padding(Padding {
                    top: sheet.top,
                    right: sheet.right,
                    bottom: 0.0,
                    left: 0.0,
                })
                .into(),
        )
    }

    fn severity_icon(severity: Severity) -> iced::widget::Svg<'static> {
        match severity {
            Severity::Success => icons::check_circle(),
            Severity::Error => icons::alert_circle(),
        }
    }
}

/// Opacity of the toast at `now`: rises while entering, falls while leaving.
fn visibility(instance: &Instance, now: Instant) -> f32 {
    let progress = instance.transition_progress(now);
    match instance.phase() {
        Phase::Entering => ease_out(progress),
        Phase::Visible => 1.0,
        Phase::Leaving => 1.0 - ease_in(progress),
    }
}

/// Horizontal displacement to the right, in pixels.
fn slide_offset(sheet: &Stylesheet, instance: &Instance, now: Instant) -> f32 {
    (1.0 - visibility(instance, now)) * sheet.slide_distance
}

/// Translation applied to the toast from its resting place. Anything pushed
/// past the window edge is clipped.
fn displacement(sheet: &Stylesheet, instance: &Instance, now: Instant) -> Vector {
    Vector::new(slide_offset(sheet, instance, now), 0.0)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn card_style(sheet: &Stylesheet, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(sheet.background, alpha))),
        border: Border {
            radius: iced::border::Radius::default()
                .top_right(sheet.radius)
                .bottom_right(sheet.radius),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn close_button_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::NOTIFICATION_TRANSITION;
    use crate::ui::notifications::Notification;

    #[test]
    fn card_style_keeps_stylesheet_background() {
        let sheet = styles::ensure_installed();
        let style = card_style(sheet, 1.0);
        assert_eq!(style.background, Some(Background::Color(sheet.background)));
    }

    #[test]
    fn visible_toast_is_opaque_and_in_place() {
        let mut manager = Manager::new();
        let notification = Notification::success("contact-success");
        let id = notification.id();
        manager.notify(notification);
        manager.handle_message(&Message::EnterFinished(id));

        let instance = manager.current().expect("toast shown");
        let now = Instant::now();
        assert!((visibility(instance, now) - 1.0).abs() < f32::EPSILON);
        assert!(slide_offset(styles::ensure_installed(), instance, now).abs() < f32::EPSILON);
    }

    #[test]
    fn leaving_toast_slides_the_full_distance() {
        let mut manager = Manager::new();
        let notification = Notification::success("contact-success");
        let id = notification.id();
        manager.notify(notification);
        manager.handle_message(&Message::Dismiss(id));

        let sheet = styles::ensure_installed();
        let instance = manager.current().expect("toast leaving");
        let done = Instant::now() + NOTIFICATION_TRANSITION;

        let shift = displacement(sheet, instance, done);
        assert!((shift.x - 100.0).abs() < f32::EPSILON);
        assert!((shift.x - sheet.slide_distance).abs() < f32::EPSILON);
        assert!(shift.y.abs() < f32::EPSILON);
    }

    #[test]
    fn entering_toast_starts_off_to_the_right() {
        let mut manager = Manager::new();
        manager.notify(Notification::error("contact-error-generic"));

        let sheet = styles::ensure_installed();
        let instance = manager.current().expect("toast entering");
        let shift = displacement(sheet, instance, Instant::now());
        assert!(shift.x > sheet.right, "shift {} stays inside the margin", shift.x);
    }

    #[test]
    fn easing_hits_endpoints() {
        assert!(ease_out(0.0).abs() < f32::EPSILON);
        assert!((ease_out(1.0) - 1.0).abs() < f32::EPSILON);
        assert!((ease_in(1.0) - 1.0).abs() < f32::EPSILON);
    }
}
