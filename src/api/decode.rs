//
//  jenkins-cli
//  api/decode.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response decoding
//!
//! Every response passes through [`check_status`] first; the same success
//! range applies to JSON reads, configuration documents, raw byte fetches
//! and build triggers. The body is then decoded along the path the caller
//! selected with a [`Format`]:
//!
//! - [`Format::Json`] decodes with `serde_json`
//! - [`Format::Xml`] decodes configuration documents with `quick-xml`
//!
//! Build triggers answer with an empty body and a `Location` header pointing
//! at the queue item that will run the build. [`pending_queue_item`] turns such
//! a response into the queue item number to look up.

use serde::de::DeserializeOwned;
use url::Url;

use super::common::{JenkinsError, Result};
use super::queue::QueueItem;
use super::transport::RawResponse;
use super::url_builder::Format;

/// Outcome of a build trigger response.
#[derive(Debug)]
pub enum PendingItem {
    /// The server returned the queue item inline.
    Inline(QueueItem),
    /// The server pointed at a queue item that still has to be fetched.
    Queued(u64),
}

/// Rejects responses outside the 2xx/3xx range, carrying the literal status code.
pub fn check_status(url: &str, response: RawResponse) -> Result<RawResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(JenkinsError::Status {
            status: response.status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Decodes a response body along the path selected by `format`.
pub fn decode<T: DeserializeOwned>(format: Format, url: &str, response: &RawResponse) -> Result<T> {
    match format {
        Format::Json => decode_json(url, response),
        Format::Xml => decode_xml(url, response),
    }
}

pub fn decode_json<T: DeserializeOwned>(url: &str, response: &RawResponse) -> Result<T> {
    serde_json::from_slice(&response.body).map_err(|source| JenkinsError::InvalidJson {
        url: url.to_string(),
        source,
    })
}

pub fn decode_xml<T: DeserializeOwned>(url: &str, response: &RawResponse) -> Result<T> {
    let text = xml_text(url, response)?;
    quick_xml::de::from_str(text).map_err(|e| JenkinsError::InvalidXml {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Returns an XML body as text, without decoding it.
pub fn xml_text<'a>(url: &str, response: &'a RawResponse) -> Result<&'a str> {
    std::str::from_utf8(&response.body).map_err(|e| JenkinsError::InvalidXml {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Resolves the result of a build trigger.
///
/// A non-empty body is decoded as a JSON queue item. An empty body must come
/// with a `Location` header naming the queue item; a missing or unparsable
/// header is an error, never an empty item.
pub fn pending_queue_item(base_url: &str, url: &str, response: &RawResponse) -> Result<PendingItem> {
    if !response.body.iter().all(u8::is_ascii_whitespace) {
        return decode_json(url, response).map(PendingItem::Inline);
    }

    let location = response.location().ok_or_else(|| {
        JenkinsError::Location(format!("response from {url} has no body and no Location header"))
    })?;

    queue_item_number(base_url, location).map(PendingItem::Queued)
}

/// Extracts the queue item number from a `Location` value.
///
/// Relative values are resolved against `base_url`. The non-empty path
/// segments must end in `queue`, `item` and a number, which also holds when
/// the server is mounted under a context path such as `/jenkins`.
///
/// # Example
///
/// ```rust
/// use jenkins_cli::api::decode::queue_item_number;
///
/// let base = "https://ci.example.com";
/// assert_eq!(queue_item_number(base, "https://ci.example.com/queue/item/42/").unwrap(), 42);
/// assert_eq!(queue_item_number(base, "/jenkins/queue/item/7/").unwrap(), 7);
/// assert!(queue_item_number(base, "https://ci.example.com/queue/").is_err());
/// ```
pub fn queue_item_number(base_url: &str, location: &str) -> Result<u64> {
    let base = Url::parse(base_url).map_err(|e| JenkinsError::InvalidUrl(format!("{base_url}: {e}")))?;
    let target = base
        .join(location)
        .map_err(|e| JenkinsError::Location(format!("unparsable Location {location:?}: {e}")))?;

    let segments: Vec<&str> = target
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        [.., "queue", "item", number] => number.parse().map_err(|_| {
            JenkinsError::Location(format!("Location {location:?} has a non-numeric queue item"))
        }),
        _ => Err(JenkinsError::Location(format!(
            "Location {location:?} does not point at a queue item"
        ))),
    }
}
