// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML rendering of the board page.

use super::view::{
    ActivitiesList, ActivityCard, BoardView, ParticipantRow, UnregisterTarget,
    LOAD_FAILURE_NOTICE, NO_PARTICIPANTS,
};
use crate::models::MessageBox;
use maud::{html, Markup, DOCTYPE};

const TITLE: &str = "Mergington High School Activities";

/// Render the full board page.
pub fn render_page(view: &BoardView) -> Markup {
    layout(html! {
        section #activities-container {
            h3 { "Available Activities" }
            (activities_list(&view.activities_list))
            form method="post" action="/reload" {
                button type="submit" { "Refresh" }
            }
        }
        section #signup-container {
            h3 { "Sign Up for an Activity" }
            (signup_form(view))
            (message_box(&view.message))
        }
    })
}

/// Render the page asking the user to confirm an unregister.
pub fn render_confirmation(target: &UnregisterTarget) -> Markup {
    layout(html! {
        section #confirm-container {
            p.confirm-prompt { (target.prompt()) }
            (unregister_form(target, Some("yes"), html! { "OK" }))
            (unregister_form(target, Some("no"), html! { "Cancel" }))
        }
    })
}

fn layout(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (TITLE) }
            }
            body {
                header {
                    h1 { "Mergington High School" }
                    h2 { "Extracurricular Activities" }
                }
                main { (content) }
            }
        }
    }
}

fn activities_list(list: &ActivitiesList) -> Markup {
    html! {
        div #activities-list {
            @match list {
                ActivitiesList::Loading => p { "Loading activities..." },
                ActivitiesList::LoadFailed => p { (LOAD_FAILURE_NOTICE) },
                ActivitiesList::Cards(cards) => {
                    @for card in cards {
                        (activity_card(card))
                    }
                },
            }
        }
    }
}

fn activity_card(card: &ActivityCard) -> Markup {
    html! {
        div.activity-card {
            h4 { (card.name) }
            p { (card.description) }
            p { strong { "Schedule:" } " " (card.schedule) }
            p { strong { "Availability:" } " " (card.spots_left) " spots left" }
            div.participants-section {
                h5 { "Participants" }
                @if card.participants.is_empty() {
                    div.participants-list.empty { (NO_PARTICIPANTS) }
                } @else {
                    ul.participants-list {
                        @for row in &card.participants {
                            (participant_row(row))
                        }
                    }
                }
            }
        }
    }
}

fn participant_row(row: &ParticipantRow) -> Markup {
    html! {
        li {
            span { (row.email()) }
            (unregister_form(&row.target, None, html! {
                button.delete-participant
                    type="submit"
                    data-activity=(row.target.data_activity())
                    data-email=(row.target.data_email())
                    title="Unregister" { "\u{1F5D1}" }
            }))
        }
    }
}

/// Form posting an unregister target. Without `confirm` the body is the
/// delete button itself; with it, the body is the label of a submit button.
fn unregister_form(target: &UnregisterTarget, confirm: Option<&str>, body: Markup) -> Markup {
    html! {
        form.unregister-form method="post" action="/unregister" {
            input type="hidden" name="activity" value=(target.data_activity());
            input type="hidden" name="email" value=(target.data_email());
            @if let Some(answer) = confirm {
                input type="hidden" name="confirm" value=(answer);
                button type="submit" { (body) }
            } @else {
                (body)
            }
        }
    }
}

fn signup_form(view: &BoardView) -> Markup {
    html! {
        form #signup-form method="post" action="/signup" {
            div.form-group {
                label for="email" { "Student Email:" }
                input #email type="email" name="email" required
                    placeholder="your-email@mergington.edu" value=(view.form.email);
            }
            div.form-group {
                label for="activity" { "Select Activity:" }
                select #activity name="activity" required {
                    @for option in &view.activity_options {
                        option value=(option.value) selected[option.value == view.form.activity] {
                            (option.label)
                        }
                    }
                }
            }
            button type="submit" { "Sign Up" }
        }
    }
}

fn message_box(message: &MessageBox) -> Markup {
    html! {
        div id="message" class=(message_class(message)) { (message.text) }
    }
}

fn message_class(message: &MessageBox) -> String {
    let mut classes = vec!["message"];
    if let Some(kind) = message.kind {
        classes.push(kind.class());
    }
    if message.hidden {
        classes.push("hidden");
    }
    classes.join(" ")
}
