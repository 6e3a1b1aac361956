//! `hysteria2://` share link.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::RenderContext;

/// Everything except RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// URI scheme recognised by Hysteria 2 clients.
pub const SCHEME: &str = "hysteria2";

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// `hysteria2://auth@host:port?obfs=salamander&obfs-password=..&insecure=1#name`
///
/// The auth secret, obfuscation password and display name are
/// percent-encoded; generated secrets contain `@`, `#` and `&`.
pub fn share_link(ctx: &RenderContext<'_>) -> String {
    format!(
        "{SCHEME}://{auth}@{authority}?obfs=salamander&obfs-password={obfs}&insecure=1#{name}",
        auth = encode(ctx.secrets.auth.expose()),
        authority = ctx.identity.authority(),
        obfs = encode(ctx.secrets.obfs.expose()),
        name = encode(&ctx.client.share_name),
    )
}
