//! src/form.rs
//!
//! The blog entry form. It owns no state: current values are borrowed from
//! the caller, and every change or submission is handed back through
//! caller-supplied callbacks.

use std::{fmt::Write as _, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Url,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Author, Field::Url];

    /// The input's `name` attribute, also used as its label.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Url => "url",
        }
    }
}

impl FromStr for Field {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL.into_iter().find(|f| f.name() == s).ok_or(())
    }
}

/// Passed to the submit handler.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

type Setter<'a> = Box<dyn FnMut(String) + 'a>;
type SubmitHandler<'a> = Box<dyn FnMut(&mut SubmitEvent) + 'a>;

pub struct BlogForm<'a> {
    title: &'a str,
    author: &'a str,
    url: &'a str,
    set_title: Setter<'a>,
    set_author: Setter<'a>,
    set_url: Setter<'a>,
    handle_create: SubmitHandler<'a>,
}

impl<'a> BlogForm<'a> {
    /// A form showing the given values. Until callbacks are attached,
    /// changes and submissions go nowhere.
    pub fn new(title: &'a str, author: &'a str, url: &'a str) -> Self {
        Self {
            title,
            author,
            url,
            set_title: Box::new(|_| {}),
            set_author: Box::new(|_| {}),
            set_url: Box::new(|_| {}),
            handle_create: Box::new(|_| {}),
        }
    }

    pub fn on_title(mut self, f: impl FnMut(String) + 'a) -> Self {
        self.set_title = Box::new(f);
        self
    }

    pub fn on_author(mut self, f: impl FnMut(String) + 'a) -> Self {
        self.set_author = Box::new(f);
        self
    }

    pub fn on_url(mut self, f: impl FnMut(String) + 'a) -> Self {
        self.set_url = Box::new(f);
        self
    }

    pub fn on_submit(mut self, f: impl FnMut(&mut SubmitEvent) + 'a) -> Self {
        self.handle_create = Box::new(f);
        self
    }

    pub fn value(&self, field: Field) -> &'a str {
        match field {
            Field::Title => self.title,
            Field::Author => self.author,
            Field::Url => self.url,
        }
    }

    /// Forwards the raw new text of one input to its setter.
    pub fn change(&mut self, field: Field, text: impl Into<String>) {
        let setter = match field {
            Field::Title => &mut self.set_title,
            Field::Author => &mut self.set_author,
            Field::Url => &mut self.set_url,
        };
        setter(text.into());
    }

    pub fn submit(&mut self, mut event: SubmitEvent) -> SubmitEvent {
        (self.handle_create)(&mut event);
        event
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<form method=\"post\" action=\"/\">\n<h2>create new</h2>\n");
        for field in Field::ALL {
            let name = field.name();
            // Writing into a String cannot fail.
            let _ = write!(
                html,
                "<div>\n{name}: <input type=\"text\" value=\"{}\" name=\"{name}\" />\n</div>\n",
                escape_html(self.value(field))
            );
        }
        html.push_str("<button type=\"submit\">create</button>\n</form>\n");
        html
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
