//! Single blocking HTTP GET.
//!
//! Uses the curl crate (libcurl easy interface). Redirects are followed; no
//! total timeout, no retry and no custom request headers.

mod error;
mod parse;

pub use error::FetchError;

use error::check_status;

/// A successful (2xx) response.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final HTTP status code.
    pub status: u32,
    /// `Content-Type` of the final response, if any.
    pub content_type: Option<String>,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Body decoded to text using the response charset (UTF-8 by default).
    pub fn text(&self) -> String {
        parse::decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Performs one GET for `url` on the current thread.
pub fn get(url: &str) -> Result<FetchedPage, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    check_status(status)?;
    let content_type = easy.content_type()?.map(str::to_string);

    Ok(FetchedPage {
        status,
        content_type,
        body,
    })
}
