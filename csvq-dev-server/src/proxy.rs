/// A single forwarding rule: requests whose path starts with `prefix`
/// go to `target` with the prefix stripped.
#[derive(Debug, Clone)]
pub struct ProxyRule {
    pub prefix: String,
    pub target: String,
}

impl ProxyRule {
    pub fn new(prefix: &str, target: &str) -> Self {
        let mut target = target.to_string();
        if target.ends_with('/') {
            target.pop();
        }
        Self {
            prefix: prefix.to_string(),
            target,
        }
    }
}

/// Strips `prefix` off `path`, keeping the leading slash of the rest.
/// `/api/foo` with prefix `/api` becomes `/foo`; `/api` alone becomes
/// `/`. Returns `None` when the path is not under the prefix.
pub fn strip_prefix(path: &str, prefix: &str) -> Option<String> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() {
        return Some("/".to_string());
    }
    if !rest.starts_with('/') {
        // `/apifoo` is not under `/api`.
        return None;
    }
    Some(rest.to_string())
}

/// Upstream URL for a matched request, query string included.
pub fn forward_url(rule: &ProxyRule, stripped_path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{}{}", rule.target, stripped_path)
    } else {
        format!("{}{}?{}", rule.target, stripped_path, query)
    }
}
