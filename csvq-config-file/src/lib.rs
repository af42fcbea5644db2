use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DevConfigToml {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_open")]
    pub open: bool,
    #[serde(default)]
    pub resolve: ResolveToml,
    #[serde(default = "default_proxy")]
    pub proxy: Vec<ProxyRuleToml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveToml {
    #[serde(default = "default_alias")]
    pub alias: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProxyRuleToml {
    pub prefix: String,
    pub target: String,
}

fn default_port() -> u16 {
    5757
}

fn default_open() -> bool {
    true
}

fn default_alias() -> BTreeMap<String, String> {
    BTreeMap::from([("@".to_string(), "./src".to_string())])
}

fn default_proxy() -> Vec<ProxyRuleToml> {
    vec![ProxyRuleToml {
        prefix: "/api".to_string(),
        target: "http://localhost:5000/api".to_string(),
    }]
}

impl Default for DevConfigToml {
    fn default() -> Self {
        Self {
            port: default_port(),
            open: default_open(),
            resolve: ResolveToml::default(),
            proxy: default_proxy(),
        }
    }
}

impl Default for ResolveToml {
    fn default() -> Self {
        Self {
            alias: default_alias(),
        }
    }
}
