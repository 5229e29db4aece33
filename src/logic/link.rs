// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Deep link into the messaging service and the adapter that opens it.

use anyhow::{Context, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use url::Url;

use crate::config::{DESTINATION_ID, MESSAGING_HOST};

/// Query parameter carrying the pre-filled message.
const TEXT_PARAM: &str = "text";

/// Same escaping as JavaScript `encodeURIComponent`: spaces become `%20`, not `+`.
/// The apostrophe is escaped as well, since the URL parser rewrites it to
/// `%27` inside a query anyway.
const MESSAGE_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Build `https://<host>/<destination>?text=<encoded message>`.
///
/// The whole message is encoded exactly once here.
pub fn destination_link(message: &str) -> Result<Url> {
    let base = format!("https://{MESSAGING_HOST}/{DESTINATION_ID}");
    let mut url = Url::parse(&base).with_context(|| format!("Invalid messaging URL: {base}"))?;
    let encoded = utf8_percent_encode(message, MESSAGE_COMPONENT);
    url.set_query(Some(&format!("{TEXT_PARAM}={encoded}")));
    Ok(url)
}

/// Decode the pre-filled message back out of a destination link.
///
/// Plain percent-decoding: a literal `+` stays a plus sign.
pub fn message_from_link(url: &Url) -> Option<String> {
    let raw = url.query()?.split('&').find_map(|pair| {
        pair.strip_prefix(TEXT_PARAM)
            .and_then(|rest| rest.strip_prefix('='))
    })?;
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|text| text.into_owned())
}

/// Boundary to the host environment's "open in a new tab/browser" action.
pub trait LinkOpener: Send + Sync {
    fn open_link(&self, url: &Url) -> Result<()>;
}

/// Opens links with the operating system's default handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open_link(&self, url: &Url) -> Result<()> {
        open::that_detached(url.as_str()).with_context(|| format!("Failed to open {url}"))
    }
}
