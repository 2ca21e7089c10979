//! `ApiResponse` envelope decoding.
//!
//! Every answer has the shape
//!
//! ```xml
//! <ApiResponse Status="OK|ERROR">
//!   <Errors><Error Number="...">message</Error></Errors>
//!   <CommandResponse Type="...">...</CommandResponse>
//! </ApiResponse>
//! ```
//!
//! The root name is checked with a pull parser before handing the body to serde,
//! because quick-xml's deserializer does not verify it.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

const ROOT_ELEMENT: &str = "ApiResponse";

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    #[serde(rename = "@Status", default)]
    status: Option<String>,
    #[serde(rename = "Errors", default)]
    errors: Option<ErrorList>,
    #[serde(rename = "CommandResponse", default = "Option::default")]
    command_response: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorList {
    #[serde(rename = "Error", default)]
    entries: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(rename = "@Number", default)]
    number: Option<String>,
    #[serde(rename = "$text", default)]
    message: Option<String>,
}

/// Decodes a response body and returns its `CommandResponse`.
///
/// A non-empty `Errors` list wins over any payload and becomes
/// [`ClientError::Remote`] built from its first entry.
pub(crate) fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let body = body.trim_start();
    check_root(body)?;

    let envelope: ApiResponse<T> = quick_xml::de::from_str(body).map_err(parse_error)?;

    if let Some(first) = envelope
        .errors
        .and_then(|list| list.entries.into_iter().next())
    {
        let code = first.number.unwrap_or_default();
        let message = first.message.unwrap_or_default().trim().to_string();
        log::debug!("[namecheap] API error: {code} - {message}");
        return Err(ClientError::Remote { code, message });
    }

    envelope.command_response.ok_or_else(|| {
        parse_error(format!(
            "missing CommandResponse element (Status={})",
            envelope.status.as_deref().unwrap_or("<none>")
        ))
    })
}

/// Ensures the first element of `body` is `<ApiResponse>`.
fn check_root(body: &str) -> Result<()> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                let name = e.local_name();
                if name.as_ref() == ROOT_ELEMENT.as_bytes() {
                    return Ok(());
                }
                return Err(parse_error(format!(
                    "expected element type <{ROOT_ELEMENT}> but have <{}>",
                    String::from_utf8_lossy(name.as_ref())
                )));
            }
            Ok(Event::Eof) => return Err(parse_error("empty response body")),
            Ok(_) => {}
            Err(e) => return Err(parse_error(e)),
        }
    }
}

fn parse_error(detail: impl ToString) -> ClientError {
    let detail = detail.to_string();
    log::error!("[namecheap] Failed to parse response: {detail}");
    ClientError::Parse { detail }
}
