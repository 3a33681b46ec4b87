//! src/api/frontend.rs
//!
//! Serves the blog list page with the `BlogForm`, and accepts its
//! url-encoded submissions.

use crate::{
    api::ApiState,
    domain::{Blog, NewBlog},
    error::Error,
    form::{escape_html, BlogForm, Field, SubmitEvent},
};
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::{cell::RefCell, fmt::Write as _};

/// The page's copy of the field values, owned on behalf of the form.
#[derive(Debug, Default)]
struct Draft {
    title: String,
    author: String,
    url: String,
}

impl Draft {
    fn to_new_blog(&self) -> NewBlog {
        NewBlog {
            title: Some(self.title.clone()),
            author: Some(self.author.clone()).filter(|a| !a.trim().is_empty()),
            url: Some(self.url.clone()),
            likes: None,
        }
    }
}

pub async fn index(State(state): State<ApiState>) -> Html<String> {
    let blogs = state.store.list_blogs().await;
    Html(render_page(&blogs, &BlogForm::new("", "", ""), None))
}

pub async fn create(
    State(state): State<ApiState>,
    payload: std::result::Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let draft = match payload {
        Ok(Form(fields)) => replay(fields),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected form submission");
            return rejected(&state, &Draft::default(), &rejection.body_text()).await;
        }
    };

    match state.store.create_blog(draft.to_new_blog()).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(Error::Validation(message)) => rejected(&state, &draft, &message).await,
        Err(e) => e.into_response(),
    }
}

/// Re-renders the page with the submitted values and the error, as a 400.
async fn rejected(state: &ApiState, draft: &Draft, message: &str) -> Response {
    let blogs = state.store.list_blogs().await;
    let form = BlogForm::new(&draft.title, &draft.author, &draft.url);
    let page = render_page(&blogs, &form, Some(message));
    (StatusCode::BAD_REQUEST, Html(page)).into_response()
}

/// Feeds the submitted inputs through a `BlogForm` the way a browser would,
/// then submits it.
fn replay(fields: Vec<(String, String)>) -> Draft {
    let draft = RefCell::new(Draft::default());
    {
        let mut form = BlogForm::new("", "", "")
            .on_title(|v| draft.borrow_mut().title = v)
            .on_author(|v| draft.borrow_mut().author = v)
            .on_url(|v| draft.borrow_mut().url = v)
            .on_submit(|event| event.prevent_default());

        for (name, value) in fields {
            match name.parse::<Field>() {
                Ok(field) => form.change(field, value),
                Err(()) => tracing::debug!(field = %name, "Ignoring unknown form field"),
            }
        }
        form.submit(SubmitEvent::default());
    }
    draft.into_inner()
}

fn render_page(blogs: &[Blog], form: &BlogForm<'_>, error: Option<&str>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>blogs</title></head>\n<body>\n<h2>blogs</h2>\n",
    );
    if let Some(error) = error {
        let _ = writeln!(html, "<div class=\"error\">{}</div>", escape_html(error));
    }
    html.push_str(&form.render());
    for blog in blogs {
        let _ = writeln!(
            html,
            "<div class=\"blog\">{} {}</div>",
            escape_html(&blog.title),
            escape_html(blog.author.as_deref().unwrap_or_default())
        );
    }
    html.push_str("</body>\n</html>\n");
    html
}
