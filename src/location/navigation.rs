//! Navigation targets

use super::{ASSISTANT_PARAM, THREAD_PARAM};
use url::Url;

/// Something that can replace the current page with a new location.
///
/// Navigation is a full reload: everything derived from the old location is
/// discarded and rebuilt from `target`. Callers never wait on the result.
pub trait Navigator {
    /// Navigate to `target`.
    fn navigate(&mut self, target: Url);
}

/// Build the location reached by switching to `agent_id`.
///
/// The selection parameter is set (replacing every existing copy in place of
/// the first), the thread parameter is removed entirely, and every other
/// query pair keeps its value and order. Path and fragment are untouched.
#[must_use]
pub fn agent_switch_target(current: &Url, agent_id: &str) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut assistant_written = false;

    for (name, value) in current.query_pairs() {
        if name == THREAD_PARAM {
            continue;
        }
        if name == ASSISTANT_PARAM {
            if !assistant_written {
                pairs.push((ASSISTANT_PARAM.to_string(), agent_id.to_string()));
                assistant_written = true;
            }
            continue;
        }
        pairs.push((name.into_owned(), value.into_owned()));
    }

    if !assistant_written {
        pairs.push((ASSISTANT_PARAM.to_string(), agent_id.to_string()));
    }

    let mut target = current.clone();
    target.query_pairs_mut().clear().extend_pairs(pairs);
    target
}
