//! Terminal capability detection

use std::io;

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// stderr, where logs go, is a terminal
    pub is_tty: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub github_actions: bool,
    pub no_color: bool,
}

impl TerminalCapabilities {
    /// ANSI colors in log output
    pub fn color_logs(&self) -> bool {
        self.is_tty && !self.is_ci && !self.no_color
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), io::stderr().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    TerminalCapabilities {
        is_tty,
        supports_unicode: !term_is_dumb && !ascii_locale(&get_env),
        is_ci: is_ci_env(&get_env),
        github_actions: get_env("GITHUB_ACTIONS").is_some(),
        no_color: get_env("NO_COLOR").is_some_and(|v| !v.is_empty()) || term_is_dumb,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

/// `LANG=C` style locales without UTF-8
fn ascii_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    KEYS.iter()
        .find_map(|k| get_env(k).filter(|v| !v.is_empty()))
        .map(|v| {
            let v = v.to_lowercase();
            v == "c" || v == "posix"
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps_with_tty(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), is_tty)
    }

    fn caps(env: &[(&str, &str)]) -> TerminalCapabilities {
        caps_with_tty(env, true)
    }

    #[test]
    fn unicode_by_default() {
        assert!(caps(&[]).supports_unicode);
        assert!(caps(&[("LANG", "en_US.UTF-8")]).supports_unicode);
    }

    #[test]
    fn dumb_term_or_c_locale_is_ascii() {
        assert!(!caps(&[("TERM", "dumb")]).supports_unicode);
        assert!(!caps(&[("LC_ALL", "C")]).supports_unicode);
    }

    #[test]
    fn detect_ci_environment() {
        let c = caps(&[("CI", "true")]);
        assert!(c.is_ci);
        assert!(!c.github_actions);

        let c = caps(&[("GITHUB_ACTIONS", "true")]);
        assert!(c.is_ci && c.github_actions);
    }

    #[test]
    fn log_colors_need_interactive_terminal() {
        assert!(caps(&[]).color_logs());
        assert!(!caps_with_tty(&[], false).color_logs());
        assert!(!caps(&[("CI", "true")]).color_logs());
        assert!(!caps(&[("NO_COLOR", "1")]).color_logs());
        assert!(!caps(&[("TERM", "dumb")]).color_logs());
    }
}
