//! HTTP semantics helpers.
//!
//! Generates MCP `ToolAnnotations` for the verb tools based on RFC 9110-style method semantics.

use crate::verb::HttpVerb;
use rmcp::model::ToolAnnotations;

/// Generate MCP tool annotations for a verb tool.
///
/// `openWorldHint` is always `true`: every verb tool talks to an arbitrary external system.
#[must_use]
pub fn annotations_for_verb(verb: HttpVerb) -> ToolAnnotations {
    let open_world_hint = Some(true);

    let (read_only_hint, destructive_hint, idempotent_hint) = match verb {
        HttpVerb::Get => (Some(true), Some(false), Some(true)),
        HttpVerb::Post => (Some(false), Some(false), Some(false)),
        HttpVerb::Put | HttpVerb::Delete => (Some(false), Some(true), Some(true)),
        // PATCH may or may not be idempotent; do not guess.
        HttpVerb::Patch => (Some(false), Some(true), None),
    };

    ToolAnnotations {
        title: None,
        read_only_hint,
        destructive_hint,
        idempotent_hint,
        open_world_hint,
    }
}

#[cfg(test)]
mod tests {
    use super::annotations_for_verb;
    use crate::verb::HttpVerb;

    #[test]
    fn annotations_set_open_world_for_all_verbs() {
        for verb in HttpVerb::ALL {
            let a = annotations_for_verb(verb);
            assert_eq!(a.open_world_hint, Some(true));
        }
    }

    #[test]
    fn annotations_get_is_readonly_and_idempotent() {
        let a = annotations_for_verb(HttpVerb::Get);
        assert_eq!(a.read_only_hint, Some(true));
        assert_eq!(a.destructive_hint, Some(false));
        assert_eq!(a.idempotent_hint, Some(true));
    }

    #[test]
    fn annotations_post_is_not_idempotent() {
        let a = annotations_for_verb(HttpVerb::Post);
        assert_eq!(a.read_only_hint, Some(false));
        assert_eq!(a.idempotent_hint, Some(false));
    }

    #[test]
    fn annotations_patch_leaves_idempotence_unknown() {
        let a = annotations_for_verb(HttpVerb::Patch);
        assert_eq!(a.read_only_hint, Some(false));
        assert_eq!(a.destructive_hint, Some(true));
        assert_eq!(a.idempotent_hint, None);
    }
}
