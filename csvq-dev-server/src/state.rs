use std::collections::BTreeMap;

use csvq_router::Router;

use crate::proxy::ProxyRule;

#[derive(Clone)]
pub struct ApiState {
    pub router: Router,
    pub proxy_rules: Vec<ProxyRule>,
    pub aliases: BTreeMap<String, String>,
    pub http: reqwest::Client,
}

impl ApiState {
    pub fn new(
        router: Router,
        proxy_rules: Vec<ProxyRule>,
        aliases: BTreeMap<String, String>,
    ) -> Self {
        Self {
            router,
            proxy_rules,
            aliases,
            http: reqwest::Client::new(),
        }
    }
}
