//! Follow-up hints printed to stderr when an API call fails.

use quill_api::ApiError;
use quill_core::ios_eprintln;
use quill_core::iostreams::IOStreams;

fn hint_for(err: &ApiError) -> Option<&'static str> {
    if err.is_unauthorized() {
        Some("check the token: run `quill config set token TOKEN` or set QUILL_TOKEN")
    } else if err.is_not_found() {
        Some("check the repository and issue number; private repositories need a token")
    } else if err.status() == Some(403) {
        Some("the token may lack access to this repository, or the rate limit was hit")
    } else {
        None
    }
}

/// Print a hint for `err` when there is one.
pub(crate) fn explain(ios: &IOStreams, err: &ApiError) {
    if let Some(hint) = hint_for(err) {
        let cs = ios.color_scheme();
        ios_eprintln!(ios, "{} {hint}", cs.warning("!"));
    }
}
