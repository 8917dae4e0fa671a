//! Deep-link composition.
//!
//! Builds the `https://wa.me/<recipient>?text=<encoded>` URL from an
//! already-sanitized message body and validates it against the configured
//! allow-list before anyone is allowed to open it.

use crate::error::InquiryError;
use agrolink_core::AppConfig;
use url::Url;

/// Composes and vets outbound inquiry deep links.
#[derive(Debug, Clone)]
pub struct Composer {
    recipient: String,
    allowed_domains: Vec<String>,
}

impl Composer {
    /// Create a composer for a recipient with a host-suffix allow-list.
    /// An empty allow-list permits any host (scheme checks still apply).
    pub fn new(recipient: impl Into<String>, allowed_domains: Vec<String>) -> Self {
        Self {
            recipient: recipient.into(),
            allowed_domains,
        }
    }

    /// Build a composer from the application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.recipient.clone(), config.allowed_domains.clone())
    }

    /// The configured recipient identifier.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Compose the dispatch URL for a message body.
    ///
    /// The body is percent-encoded as the `text` query parameter. The
    /// result is parsed back and checked: scheme must be `http` or `https`,
    /// and with a non-empty allow-list the host must end with one of the
    /// allowed suffixes. Failures return
    /// [`InquiryError::InvalidDispatchTarget`] and the URL never reaches
    /// the dispatch boundary.
    pub fn compose(&self, message: &str) -> Result<Url, InquiryError> {
        let encoded = urlencoding::encode(message);
        let raw = format!("https://wa.me/{}?text={}", self.recipient, encoded);

        let url = Url::parse(&raw).map_err(|_| InquiryError::InvalidDispatchTarget {
            url: raw.clone(),
        })?;
        self.check(&url)?;
        Ok(url)
    }

    fn check(&self, url: &Url) -> Result<(), InquiryError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(rejected(url));
        }
        if !self.allowed_domains.is_empty() {
            let host = url.host_str().ok_or_else(|| rejected(url))?;
            if !self
                .allowed_domains
                .iter()
                .any(|domain| host.ends_with(domain.as_str()))
            {
                return Err(rejected(url));
            }
        }
        Ok(())
    }
}

fn rejected(url: &Url) -> InquiryError {
    InquiryError::InvalidDispatchTarget {
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> Composer {
        Composer::from_config(&AppConfig::default())
    }

    #[test]
    fn composes_deep_link_with_encoded_text() {
        let url = composer().compose("Hello, quote please & thanks").unwrap();
        assert!(url.as_str().starts_with("https://wa.me/917397248359?text="));
        assert!(url.as_str().contains("Hello%2C%20quote%20please%20%26%20thanks"));
    }

    #[test]
    fn multi_line_message_survives_encoding() {
        let url = composer().compose("line one\nline two").unwrap();
        assert!(url.as_str().contains("line%20one%0Aline%20two"));
        // Decoding the text parameter gives the message back.
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn rejects_host_outside_allow_list() {
        let composer = Composer::new("123", vec!["example.com".to_string()]);
        let err = composer.compose("hi").unwrap_err();
        assert!(matches!(err, InquiryError::InvalidDispatchTarget { .. }));
    }

    #[test]
    fn empty_allow_list_permits_the_deep_link_host() {
        let composer = Composer::new("123", Vec::new());
        assert!(composer.compose("hi").is_ok());
    }

    #[test]
    fn suffix_match_accepts_allowed_host() {
        let composer = Composer::new("123", vec!["wa.me".to_string()]);
        assert!(composer.compose("hi").is_ok());
    }

    #[test]
    fn suffix_match_accepts_subdomain_of_allowed_domain() {
        let composer = Composer::new("123", vec!["whatsapp.com".to_string()]);
        let url = Url::parse("https://api.whatsapp.com/send?text=hi").unwrap();
        assert!(composer.check(&url).is_ok());
    }
}
