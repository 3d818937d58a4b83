use super::page::PageBuilder;
use crate::content::{self, SectionId};
use crate::state::{FailureReason, Focus, FormField, RevealKey, State, SubmissionStatus};
use crate::ui::widgets::{spinner, styling};
use crate::utils::text;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

const MESSAGE_ROWS: usize = 4;
const CURSOR: &str = "▏";

/// Render the contact script: the form, its status line and the links.
///
pub fn contact(page: &mut PageBuilder, state: &State) {
    let theme = page.theme;
    let language = page.language;

    page.reveal(RevealKey::header(SectionId::Contact));
    page.push(vec![Span::styled(
        content::CONTACT_TITLE.get(language).to_string(),
        styling::heading_style(theme),
    )]);
    page.push(vec![Span::styled(
        content::CONTACT_COMMENT.get(language).to_string(),
        styling::muted_text_style(theme).add_modifier(Modifier::ITALIC),
    )]);
    page.plain();
    page.blank();

    page.reveal(RevealKey::item(SectionId::Contact, 0));
    form(page, state);
    page.plain();
    page.blank();

    page.reveal(RevealKey::item(SectionId::Contact, 1));
    links(page);
    page.plain();
}

fn field_line(page: &mut PageBuilder, state: &State, field: FormField) {
    let theme = page.theme;
    let language = page.language;
    let (label, placeholder) = match field {
        FormField::Name => (content::CONTACT_NAME_LABEL, content::CONTACT_NAME_PLACEHOLDER),
        FormField::Email => (content::CONTACT_EMAIL_LABEL, content::CONTACT_EMAIL_PLACEHOLDER),
        FormField::Message => (
            content::CONTACT_MESSAGE_LABEL,
            content::CONTACT_MESSAGE_PLACEHOLDER,
        ),
    };
    let focused = state.current_focus() == Focus::Form(field);
    let label_style = if focused {
        styling::active_list_item_style(theme)
    } else {
        styling::accent_style(theme)
    };
    let value = state.get_contact().field(field);
    let label = format!("const {:<10}= ", label.get(language));
    let available = page.width().saturating_sub(label.chars().count() + 3);

    if field == FormField::Message {
        page.push(vec![
            Span::styled(label, label_style),
            Span::styled("`", styling::secondary_text_style(theme)),
        ]);
        let mut rows = if value.is_empty() {
            vec![]
        } else {
            text::wrap(value, page.width().saturating_sub(4))
        };
        let skip = rows.len().saturating_sub(MESSAGE_ROWS);
        rows.drain(..skip);
        for i in 0..MESSAGE_ROWS {
            let mut spans = vec![Span::raw("    ")];
            match rows.get(i) {
                Some(row) => spans.push(Span::styled(
                    row.clone(),
                    Style::default().fg(theme.info.to_color()),
                )),
                None if i == 0 && value.is_empty() => spans.push(Span::styled(
                    placeholder.get(language).to_string(),
                    styling::muted_text_style(theme),
                )),
                None => (),
            }
            let last_row = rows.len().max(1) - 1;
            if focused && i == last_row {
                spans.push(Span::styled(CURSOR, styling::normal_text_style(theme)));
            }
            page.push(spans);
        }
        page.push(vec![Span::styled("`;", styling::secondary_text_style(theme))]);
        return;
    }

    let mut spans = vec![
        Span::styled(label, label_style),
        Span::styled("\"", styling::secondary_text_style(theme)),
    ];
    if value.is_empty() {
        spans.push(Span::styled(
            placeholder.get(language).to_string(),
            styling::muted_text_style(theme),
        ));
    } else {
        // Keep the end of long values in view.
        let count = value.chars().count();
        let shown: String = value.chars().skip(count.saturating_sub(available)).collect();
        spans.push(Span::styled(shown, Style::default().fg(theme.info.to_color())));
    }
    if focused {
        spans.push(Span::styled(CURSOR, styling::normal_text_style(theme)));
    }
    spans.push(Span::styled("\";", styling::secondary_text_style(theme)));
    page.push(spans);
}

fn form(page: &mut PageBuilder, state: &State) {
    let theme = page.theme;
    let language = page.language;

    field_line(page, state, FormField::Name);
    field_line(page, state, FormField::Email);
    field_line(page, state, FormField::Message);
    page.blank();

    let status = state.get_contact().status();
    let button = match status {
        SubmissionStatus::Submitting => format!(
            "[ {} {} ]",
            spinner::frame(state.get_spinner_index()),
            content::CONTACT_SUBMIT_LOADING.get(language)
        ),
        _ => format!("[ ▶ {} ]", content::CONTACT_SUBMIT_IDLE.get(language)),
    };
    let button_style = if state.is_form_input_mode() {
        styling::selected_list_item_style(theme)
    } else {
        styling::active_list_item_style(theme)
    };
    page.push(vec![Span::styled(button, button_style)]);

    let status_line = match status {
        SubmissionStatus::Succeeded => Span::styled(
            format!("✔ {}", content::CONTACT_SUCCESS.get(language)),
            styling::success_style(theme),
        ),
        SubmissionStatus::Failed(FailureReason::Network) => Span::styled(
            format!("✖ {}", content::CONTACT_NETWORK_ERROR.get(language)),
            styling::error_style(theme),
        ),
        SubmissionStatus::Failed(FailureReason::Validation) => Span::styled(
            format!("! {}", content::CONTACT_VALIDATION_ERROR.get(language)),
            styling::warning_style(theme),
        ),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => Span::styled(
            text::truncate(content::CONTACT_FORM_HINT.get(language), page.width()),
            styling::muted_text_style(theme),
        ),
    };
    page.push(vec![status_line]);
}

fn links(page: &mut PageBuilder) {
    let theme = page.theme;
    let language = page.language;
    let info = &content::CONTACT_INFO;

    page.push(vec![Span::styled(
        content::CONTACT_LINKS.get(language).to_string(),
        styling::muted_text_style(theme).add_modifier(Modifier::ITALIC),
    )]);
    let entries = [
        ("status", info.status),
        ("email", info.email),
        ("github", info.github),
        ("linkedin", info.linkedin),
        ("discord", info.discord),
        ("location", info.location),
    ];
    for (key, value) in entries {
        page.push(vec![
            Span::styled(format!("{:<10}", key), styling::accent_style(theme)),
            Span::styled(value.to_string(), styling::normal_text_style(theme)),
        ]);
    }
    page.push(vec![Span::styled(
        content::GITHUB_URL.to_string(),
        styling::muted_text_style(theme).add_modifier(Modifier::UNDERLINED),
    )]);
    page.push(vec![Span::styled(
        content::LINKEDIN_URL.to_string(),
        styling::muted_text_style(theme).add_modifier(Modifier::UNDERLINED),
    )]);
}
