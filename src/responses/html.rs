use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// An HTML response with an optional status and session cookie.
pub struct Page {
    status: u16,
    markup: Markup,
    set_cookie: Option<String>,
}

impl Page {
    pub fn new(markup: Markup) -> Self {
        Self {
            status: 200,
            markup,
            set_cookie: None,
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn set_cookie(mut self, cookie: Option<String>) -> Self {
        self.set_cookie = cookie;
        self
    }

    pub fn into_response(self) -> ResultResp {
        let mut builder = ResponseBuilder::new()
            .status(self.status)
            .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref());

        if let Some(cookie) = self.set_cookie {
            builder = builder.header("Set-Cookie", cookie);
        }

        builder
            .body(Body::from(self.markup.into_string()))
            .map_err(|_| ServerError::InternalError)
    }
}

pub fn css_response(css: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(css))
        .map_err(|_| ServerError::InternalError)
}
