//! Server-side HTML views for the survey pages.
//!
//! Pages are assembled from string templates. Every value that originates in
//! the catalog goes through `escape` before it reaches the markup.

use crate::application::QuestionView;
use crate::domain::survey::{Choice, ResultRecord, RESULT_HEADING};

/// Title of the start page.
pub const START_TITLE: &str = "Pilyeon: In Search of Your Ideal Type";

/// Label of the call-to-action button on the start page.
pub const START_BUTTON: &str = "Start the survey";

/// Shown above the options after a submission without a valid choice.
pub const CHOICE_REQUIRED_NOTICE: &str = "Please choose one of the two options to continue.";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         <main>\n{}</main>\n\
         </body>\n\
         </html>\n",
        escape(title),
        body
    )
}

pub fn start_page() -> String {
    let body = format!(
        "<h1>{}</h1>\n\
         <p><a class=\"button\" href=\"/survey/1\">{}</a></p>\n",
        escape(START_TITLE),
        escape(START_BUTTON)
    );
    layout(START_TITLE, &body)
}

fn option(choice: Choice, label: &str, selected: Option<Choice>) -> String {
    let checked = if selected == Some(choice) { " checked" } else { "" };
    format!(
        "<label><input type=\"radio\" name=\"choice\" value=\"{value}\" required{checked}> \
         {value}. {label}</label>\n",
        value = choice,
        checked = checked,
        label = escape(label)
    )
}

/// Question page; `notice` is set when re-displaying after a rejected answer.
pub fn question_page(view: &QuestionView, notice: Option<&str>) -> String {
    let page = &view.page;
    let question = &page.question;

    let mut body = format!(
        "<p class=\"progress\">{} / {}</p>\n\
         <h1>{}</h1>\n\
         <p>{}</p>\n",
        page.current_page,
        page.total_pages,
        escape(&question.prompt),
        escape(&question.description)
    );

    if let Some(notice) = notice {
        body.push_str(&format!(
            "<p class=\"notice\" role=\"alert\">{}</p>\n",
            escape(notice)
        ));
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"/survey/{}\">\n",
        page.current_page
    ));
    body.push_str(&option(Choice::A, &question.option_a_label, view.selected));
    body.push_str(&option(Choice::B, &question.option_b_label, view.selected));
    body.push_str("<button type=\"submit\">Next</button>\n</form>\n");

    layout(&question.prompt, &body)
}

pub fn result_page(result: &ResultRecord) -> String {
    let body = format!(
        "<h1>{}</h1>\n\
         <h2>{}</h2>\n\
         <p class=\"match\">Your match: <strong>{}</strong></p>\n\
         <p>{}</p>\n\
         <p class=\"counts\">A: {} &middot; B: {}</p>\n\
         <p><a href=\"/survey\">Take the survey again</a></p>\n",
        escape(RESULT_HEADING),
        escape(result.title),
        escape(result.matched_profile),
        escape(result.description),
        result.count_a,
        result.count_b
    );
    layout(RESULT_HEADING, &body)
}

pub fn not_found_page(message: &str) -> String {
    let body = format!(
        "<h1>Page not found</h1>\n\
         <p>{}</p>\n\
         <p><a href=\"/survey\">Back to the start</a></p>\n",
        escape(message)
    );
    layout("Page not found", &body)
}

pub fn bad_request_page(message: &str) -> String {
    let body = format!(
        "<h1>That answer could not be used</h1>\n\
         <p>{}</p>\n\
         <p><a href=\"/survey\">Back to the start</a></p>\n",
        escape(message)
    );
    layout("Bad request", &body)
}

pub fn error_page() -> String {
    layout(
        "Something went wrong",
        "<h1>Something went wrong</h1>\n<p>Please try again in a moment.</p>\n",
    )
}
