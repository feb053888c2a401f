// gate/mod.rs - Route access gate
//
// Decides, per inbound navigation request, whether the request continues to
// the page handler or is redirected. The decision depends only on the path
// and on whether a credential token is present; no state survives between
// requests.

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Path prefixes (without the leading slash) that bypass the gate entirely.
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &["api", "_next/static", "_next/image", "favicon.ico"];

/// Outcome of evaluating one request against the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Redirect(String),
}

impl Decision {
    pub fn redirect(target: impl Into<String>) -> Self {
        Decision::Redirect(target.into())
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Decision::Continue)
    }

    /// Redirect target, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Decision::Continue => None,
            Decision::Redirect(target) => Some(target),
        }
    }
}

/// Rule table for the access gate.
///
/// Rules are evaluated in order and the first match wins:
/// 1. root path without a token redirects to the login path
/// 2. login path with a token redirects to the root path
/// 3. everything else continues
///
/// Paths matching one of `excluded_prefixes` are never evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    pub root_path: String,
    pub login_path: String,
    pub excluded_prefixes: Vec<String>,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self {
            root_path: ROOT_PATH.to_string(),
            login_path: LOGIN_PATH.to_string(),
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        }
    }
}

impl AccessGate {
    pub fn new(
        root_path: impl Into<String>,
        login_path: impl Into<String>,
        excluded_prefixes: Vec<String>,
    ) -> Self {
        Self {
            root_path: root_path.into(),
            login_path: login_path.into(),
            excluded_prefixes,
        }
    }

    /// Whether the gate applies to `path` at all.
    ///
    /// Mirrors a negative-lookahead matcher: the remainder after the leading
    /// slash must not start with any excluded prefix. This is a plain string
    /// prefix test, so `/apiary` is excluded along with `/api/posts`.
    pub fn is_gated(&self, path: &str) -> bool {
        let rest = path.strip_prefix('/').unwrap_or(path);
        !self
            .excluded_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && rest.starts_with(prefix.as_str()))
    }

    /// Apply the rule table. Does not consult the exclusion filter.
    pub fn decide(&self, path: &str, token_present: bool) -> Decision {
        if path == self.root_path && !token_present {
            return Decision::redirect(self.login_path.as_str());
        }

        if token_present && path == self.login_path {
            return Decision::redirect(self.root_path.as_str());
        }

        Decision::Continue
    }

    /// Full evaluation: exclusion filter, token presence, then rules.
    ///
    /// Any non-empty token counts as authenticated; its content is not inspected.
    pub fn evaluate(&self, path: &str, token: Option<&str>) -> Decision {
        if !self.is_gated(path) {
            return Decision::Continue;
        }

        self.decide(path, token_present(token))
    }
}

/// A token is present when the cookie exists and carries a non-empty value
pub fn token_present(token: Option<&str>) -> bool {
    token.is_some_and(|value| !value.is_empty())
}

/// Rule table with the default root and login paths
pub fn decide(path: &str, token_present: bool) -> Decision {
    AccessGate::default().decide(path, token_present)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_without_token_redirects_to_login() {
        assert_eq!(decide("/", false), Decision::Redirect("/login".to_string()));

        let gate = AccessGate::default();
        assert_eq!(gate.evaluate("/", None), Decision::redirect("/login"));
    }

    #[test]
    fn login_with_token_redirects_to_root() {
        assert_eq!(decide("/login", true), Decision::redirect("/"));

        let gate = AccessGate::default();
        assert_eq!(gate.evaluate("/login", Some("abc123")), Decision::redirect("/"));
    }

    #[test]
    fn root_with_token_continues() {
        let gate = AccessGate::default();
        assert_eq!(gate.evaluate("/", Some("abc123")), Decision::Continue);
    }

    #[test]
    fn login_without_token_continues() {
        let gate = AccessGate::default();
        assert_eq!(gate.evaluate("/login", None), Decision::Continue);
    }

    #[test]
    fn other_paths_continue_regardless_of_token() {
        let gate = AccessGate::default();
        for path in ["/dashboard", "/copyright", "/editor", "/login/extra", "//"] {
            assert_eq!(gate.evaluate(path, None), Decision::Continue, "path {}", path);
            assert_eq!(gate.evaluate(path, Some("abc123")), Decision::Continue, "path {}", path);
        }
    }

    #[test]
    fn excluded_paths_bypass_gate() {
        let gate = AccessGate::default();
        for path in [
            "/api/posts",
            "/api/x",
            "/_next/static/y",
            "/_next/image/logo.png",
            "/favicon.ico",
        ] {
            assert!(!gate.is_gated(path), "path {} should be excluded", path);
            assert_eq!(gate.evaluate(path, None), Decision::Continue);
            assert_eq!(gate.evaluate(path, Some("abc123")), Decision::Continue);
        }
    }

    #[test]
    fn exclusion_is_a_plain_prefix_match() {
        let gate = AccessGate::default();
        assert!(!gate.is_gated("/apiary"));
        assert!(gate.is_gated("/_next/data/build.json"));
        assert!(gate.is_gated("/"));
        assert!(gate.is_gated("/login"));
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let gate = AccessGate::default();
        assert!(!token_present(Some("")));
        assert_eq!(gate.evaluate("/", Some("")), Decision::redirect("/login"));
        assert_eq!(gate.evaluate("/login", Some("")), Decision::Continue);
    }

    #[test]
    fn token_content_is_not_inspected() {
        let gate = AccessGate::default();
        assert_eq!(gate.evaluate("/login", Some("not-a-jwt")), Decision::redirect("/"));
        assert_eq!(gate.evaluate("/", Some(" ")), Decision::Continue);
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let gate = AccessGate::default();
        let first = gate.evaluate("/", None);
        for _ in 0..10 {
            assert_eq!(gate.evaluate("/", None), first);
        }
    }

    #[test]
    fn custom_paths_drive_the_rules() {
        let gate = AccessGate::new("/admin", "/admin/signin", vec!["assets".to_string()]);
        assert_eq!(gate.evaluate("/admin", None), Decision::redirect("/admin/signin"));
        assert_eq!(gate.evaluate("/admin/signin", Some("t")), Decision::redirect("/admin"));
        assert_eq!(gate.evaluate("/", None), Decision::Continue);
        assert_eq!(gate.evaluate("/assets/app.js", None), Decision::Continue);
    }

    #[test]
    fn free_decide_matches_default_gate() {
        let gate = AccessGate::default();
        for path in ["/", "/login", "/dashboard", "/api/posts"] {
            for present in [false, true] {
                assert_eq!(decide(path, present), gate.decide(path, present), "path {}", path);
            }
        }
    }

    #[test]
    fn decision_accessors() {
        assert!(Decision::Continue.is_continue());
        assert_eq!(Decision::Continue.target(), None);
        assert_eq!(Decision::redirect("/login").target(), Some("/login"));
    }
}
