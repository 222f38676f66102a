use serde::Deserialize;
use thiserror::Error;

use crate::contact;

const EMBEDDED_CONTENT: &str = include_str!("../content/site.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// All copy shown on the page. Built once in `main` and handed down as props.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub service: Service,
    pub about: About,
    pub contact: Contact,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub socials: Socials,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Socials {
    pub instagram: String,
    pub linkedin: String,
    pub youtube: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub section_title: String,
    #[serde(default)]
    pub section_subtitle: String,
    pub title: String,
    pub description: String,
    pub bullets: Vec<String>,
    pub cta_label: String,
    // Falls back to the contact form when unset
    #[serde(default)]
    pub cta_href: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct About {
    pub section_title: String,
    #[serde(default)]
    pub section_subtitle: String,
    pub text: String,
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Highlight {
    pub icon: HighlightIcon,
    pub text: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightIcon {
    ShieldCheck,
    Scale,
    BadgeCheck,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Contact {
    pub section_title: String,
    #[serde(default)]
    pub section_subtitle: String,
    pub form_url: String,
    pub form_label: String,
    pub redirect_note: String,
    pub messaging_phone: String,
    pub greeting: String,
    pub messaging_label: String,
}

impl SiteContent {
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(source)?)
    }

    /// Parses the copy compiled into the binary from `content/site.toml`.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml(EMBEDDED_CONTENT)
    }
}

impl Service {
    pub fn cta_destination<'a>(&'a self, contact: &'a Contact) -> &'a str {
        self.cta_href.as_deref().unwrap_or(&contact.form_url)
    }
}

impl Contact {
    pub fn messaging_link(&self) -> String {
        contact::whatsapp_link(&self.messaging_phone, &self.greeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::embedded().expect("embedded content should parse");
        assert_eq!(content.profile.name, "Andrea Fernández Muñoz");
        assert_eq!(content.service.bullets.len(), 5);
        assert_eq!(content.about.highlights.len(), 3);
        assert_eq!(
            content.about.highlights.iter().map(|h| h.icon).collect::<Vec<_>>(),
            vec![HighlightIcon::ShieldCheck, HighlightIcon::Scale, HighlightIcon::BadgeCheck]
        );
    }

    #[test]
    fn service_cta_defaults_to_form() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.service.cta_destination(&content.contact), content.contact.form_url);

        let mut service = content.service.clone();
        service.cta_href = Some("https://calendly.com/andrea".to_string());
        assert_eq!(service.cta_destination(&content.contact), "https://calendly.com/andrea");
    }

    #[test]
    fn missing_subtitle_is_empty() {
        let source = EMBEDDED_CONTENT.replace(
            "section_subtitle = \"Un único servicio, explicado de forma clara. Si encaja, avanzamos.\"\n",
            "",
        );
        let content = SiteContent::from_toml(&source).unwrap();
        assert!(content.service.section_subtitle.is_empty());
    }

    #[test]
    fn unknown_highlight_icon_is_rejected() {
        let source = EMBEDDED_CONTENT.replace("icon = \"scale\"", "icon = \"rocket\"");
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn messaging_link_uses_contact_phone() {
        let content = SiteContent::embedded().unwrap();
        assert!(content
            .contact
            .messaging_link()
            .starts_with("https://wa.me/34600000000?text="));
    }
}
