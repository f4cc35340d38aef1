/// The single authoritative scheme+host pair all pages are addressed by.
///
/// Constructed once at startup and never mutated; every other host variant
/// is a redirect target, never served directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalOrigin {
    pub preferred_host: String,
    pub bare_host: String,
}

impl CanonicalOrigin {
    pub fn new(domain: &str) -> Self {
        Self {
            preferred_host: format!("www.{domain}"),
            bare_host: domain.to_string(),
        }
    }

    /// The absolute base URL, without a trailing separator.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.preferred_host)
    }

    /// Hosts allowed during local development (they still get trailing-slash
    /// normalization, but are never rewritten to the canonical host).
    pub fn is_local_host(host: &str) -> bool {
        matches!(host.split(':').next(), Some("localhost") | Some("127.0.0.1"))
    }
}

/// The lead-intake backend resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backend {
    pub url: String,
    pub name: String,
}

impl Backend {
    /// Resolves the CRM backend once, from explicit configuration first and
    /// the local-development flag second.
    pub fn resolve(explicit_url: Option<String>, local: bool) -> Self {
        match explicit_url {
            Some(url) => Self {
                url: url.trim_end_matches('/').to_string(),
                name: "custom".to_string(),
            },
            None if local => Self {
                url: "http://127.0.0.1:8001".to_string(),
                name: "local".to_string(),
            },
            None => Self {
                url: "https://api.pestcontrol99.com".to_string(),
                name: "production".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub origin: CanonicalOrigin,
    pub content_api: String,
    pub backend: Backend,
}

impl SiteConfig {
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            origin: CanonicalOrigin::new("pestcontrol99.com"),
            content_api: "https://blog.pestcontrol99.com/wp-json/wp/v2".to_string(),
            backend: Backend {
                url: "http://127.0.0.1:8001".to_string(),
                name: "memory".to_string(),
            },
        }
    }
}
