// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler works on the [`App`] state and returns the follow-up task:
//! a scroll operation, a submission, or notification timers.

use super::{App, Message, ScrollPosition, PAGE_SCROLLABLE_ID};
use crate::application::port::SubmissionError;
use crate::diagnostics::UserAction;
use crate::domain::contact::{Outcome, Payload};
use crate::ui::area_map;
use crate::ui::contact_form;
use crate::ui::navbar;
use crate::ui::notifications::{self, NotificationMessage};
use crate::ui::page;
use crate::ui::sections::SectionId;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Task};
use std::time::Instant;

/// Routes one message to its handler.
pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(navbar_message) => handle_navbar_message(app, navbar_message),
        Message::Page(page_message) => handle_page_message(app, page_message),
        Message::Notification(notification_message) => {
            handle_notification_message(app, notification_message)
        }
        Message::Scrolled {
            offset_y,
            viewport_height,
            content_height,
        } => {
            app.scroll = ScrollPosition {
                offset_y,
                viewport_height,
                content_height,
            };
            app.observe_scroll(Instant::now());
            Task::none()
        }
        Message::WheelScrolled => {
            if !app.menu_open {
                app.smooth_scroll.cancel();
            }
            Task::none()
        }
        Message::SubmissionFinished(result) => handle_submission_finished(app, result),
        Message::Tick(now) => handle_tick(app, now),
        Message::WindowResized { width, height } => {
            app.window_width = width;
            app.scroll.viewport_height = height;
            if !navbar::is_compact(width) {
                app.menu_open = false;
            }
            app.observe_scroll(Instant::now());
            Task::none()
        }
        Message::EscapePressed => {
            if app.menu_open {
                handle_navbar_message(app, navbar::Message::CloseMenu)
            } else {
                Task::none()
            }
        }
        Message::TabPressed => {
            let event = app.form.update(contact_form::Message::FocusNext);
            handle_form_event(app, event)
        }
        Message::WindowCloseRequested(id) => handle_close_request(app, id),
    }
}

fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    let handle = app.diagnostics.handle();
    match &message {
        navbar::Message::ToggleMenu => handle.log_action(UserAction::ToggleMenu),
        navbar::Message::CloseMenu => handle.log_action(UserAction::CloseMenu),
        navbar::Message::FollowLink(section) => handle.log_action(UserAction::FollowAnchor {
            target: section.anchor().to_string(),
        }),
    }

    match navbar::update(message, &mut app.menu_open) {
        navbar::Event::None => Task::none(),
        navbar::Event::ScrollTo(section) => start_scroll(app, section),
    }
}

fn handle_page_message(app: &mut App, message: page::Message) -> Task<Message> {
    match message {
        page::Message::FollowAnchor(href) => {
            let now = Instant::now();
            let max_offset = app.scroll.max_offset();
            if let Some(section) =
                app.smooth_scroll
                    .follow_anchor(href, app.scroll.offset_y, max_offset, now)
            {
                app.diagnostics.handle().log_action(UserAction::FollowAnchor {
                    target: section.anchor().to_string(),
                });
            }
            Task::none()
        }
        page::Message::AreaMap(map_message) => {
            if let area_map::Event::Selected(name) = app.area_map.update(map_message) {
                app.diagnostics.handle().log_action(UserAction::SelectArea {
                    name: name.to_string(),
                });
            }
            Task::none()
        }
        page::Message::ContactForm(form_message) => {
            let event = app.form.update(form_message);
            handle_form_event(app, event)
        }
    }
}

fn handle_form_event(app: &mut App, event: contact_form::Event) -> Task<Message> {
    match event {
        contact_form::Event::None => Task::none(),
        contact_form::Event::Submit(payload) => start_submission(app, payload),
        contact_form::Event::Focus(field) => operation::focus(Id::new(field.input_id())),
    }
}

fn start_scroll(app: &mut App, section: SectionId) -> Task<Message> {
    let max_offset = app.scroll.max_offset();
    app.smooth_scroll
        .scroll_to(section, app.scroll.offset_y, max_offset, Instant::now());
    Task::none()
}

fn start_submission(app: &mut App, payload: Payload) -> Task<Message> {
    Task::perform(app.sender.send(payload), Message::SubmissionFinished)
}

fn handle_submission_finished(
    app: &mut App,
    result: Result<Outcome, SubmissionError>,
) -> Task<Message> {
    let handle = app.diagnostics.handle();
    let timers = app
        .form
        .finish_submission(result, &mut app.notifications, Some(&handle));
    notifications::timers_into_task(timers).map(Message::Notification)
}

fn handle_notification_message(app: &mut App, message: NotificationMessage) -> Task<Message> {
    match app.notifications.handle_message(&message) {
        Some(timer) => timer.into_task().map(Message::Notification),
        None => Task::none(),
    }
}

/// Advances the anchor scroll and moves the page scrollable with it.
fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    let Some(offset_y) = app.smooth_scroll.tick(now) else {
        return Task::none();
    };

    app.scroll.offset_y = offset_y;
    app.observe_scroll(now);

    let max_offset = app.scroll.max_offset();
    let relative_y = if max_offset > 0.0 {
        offset_y / max_offset
    } else {
        0.0
    };
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: relative_y,
        },
    )
}

fn handle_close_request(app: &mut App, id: window::Id) -> Task<Message> {
    if app.dump_diagnostics {
        app.diagnostics.process_pending();
        match app.diagnostics.export_json() {
            Ok(report) => println!("{report}"),
            Err(err) => eprintln!("[ERROR] Failed to export diagnostics: {err}"),
        }
    }
    window::close(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::diagnostics::DiagnosticEventKind;
    use crate::ui::contact_form::FieldName;

    fn app() -> App {
        crate::app::test_app(&Config::default())
    }

    fn logged_actions(app: &mut App) -> Vec<UserAction> {
        app.diagnostics.process_pending();
        app.diagnostics
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::UserAction { action, .. } => Some(action.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn nav_link_closes_menu_and_starts_scroll() {
        let mut app = app();
        app.window_width = 600.0;
        let _ = update(&mut app, Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = update(
            &mut app,
            Message::Navbar(navbar::Message::FollowLink(SectionId::Contact)),
        );
        assert!(!app.menu_open);
        assert!(app.smooth_scroll.is_animating());
    }

    #[test]
    fn escape_closes_open_menu() {
        let mut app = app();
        app.menu_open = true;
        let _ = update(&mut app, Message::EscapePressed);
        assert!(!app.menu_open);
        assert!(logged_actions(&mut app).contains(&UserAction::CloseMenu));
    }

    #[test]
    fn escape_without_menu_logs_nothing() {
        let mut app = app();
        let _ = update(&mut app, Message::EscapePressed);
        assert!(!logged_actions(&mut app).contains(&UserAction::CloseMenu));
    }

    #[test]
    fn widening_the_window_closes_the_menu() {
        let mut app = app();
        app.menu_open = true;
        let _ = update(
            &mut app,
            Message::WindowResized {
                width: 1400.0,
                height: 900.0,
            },
        );
        assert!(!app.menu_open);
    }

    #[test]
    fn scrolling_updates_header_and_reveal() {
        let mut app = app();
        let top = SectionId::About.top();
        let _ = update(
            &mut app,
            Message::Scrolled {
                offset_y: top,
                viewport_height: 800.0,
                content_height: crate::ui::sections::page_height(),
            },
        );
        assert!(app.header.is_scrolled());
        assert!(app.reveal.is_revealed(SectionId::About));
    }

    #[test]
    fn unknown_anchor_does_not_scroll() {
        let mut app = app();
        let _ = update(&mut app, Message::Page(page::Message::FollowAnchor("#")));
        assert!(!app.smooth_scroll.is_animating());
    }

    #[test]
    fn area_selection_is_logged() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Page(page::Message::AreaMap(area_map::Message::Select(0))),
        );
        assert!(logged_actions(&mut app).contains(&UserAction::SelectArea {
            name: "Flekkefjord".into()
        }));
    }

    #[test]
    fn tab_in_the_form_advances_focus() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Page(page::Message::ContactForm(
                contact_form::Message::FieldChanged(FieldName::Email, "ola@".into()),
            )),
        );
        let _ = update(&mut app, Message::TabPressed);

        assert_eq!(app.form.focused(), Some(FieldName::Phone));
        assert!(app.form.field(FieldName::Email).error_styled);
    }

    #[test]
    fn finished_submission_restores_form() {
        let mut app = app();
        for (name, value) in [
            (FieldName::Name, "Ola"),
            (FieldName::Email, "ola@example.no"),
            (FieldName::Message, "Hei"),
        ] {
            let _ = update(
                &mut app,
                Message::Page(page::Message::ContactForm(
                    contact_form::Message::FieldChanged(name, value.into()),
                )),
            );
        }
        let _ = update(
            &mut app,
            Message::Page(page::Message::ContactForm(contact_form::Message::Submit)),
        );
        assert!(app.form.is_submitting());

        let _ = update(&mut app, Message::SubmissionFinished(Ok(Outcome::success())));
        assert!(!app.form.is_submitting());
        assert!(app.form.field(FieldName::Name).value.is_empty());
        assert!(app.notifications.current().is_some());
    }
}
