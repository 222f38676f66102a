use std::rc::Rc;

use chrono::Datelike;
use log::info;
use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::parallax_background::ParallaxBackground;
use crate::components::section_title::SectionTitle;
use crate::components::social_button::SocialButton;
use crate::config;
use crate::content::{About, Contact, Profile, Service, SiteContent};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    info!("Rendering landing page for {}", content.profile.name);

    html! {
        <div class="landing-page">
            <ParallaxBackground />
            <main class="landing-main">
                { profile_header(&content.profile) }
                { service_section(&content.service, &content.contact) }
                { about_section(&content.about) }
                { contact_section(&content.contact) }
                { footer(&content.profile) }
            </main>
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                    font-family: "Inter", system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                }

                .landing-main {
                    position: relative;
                    z-index: 1;
                    max-width: 36rem;
                    margin: 0 auto;
                    padding: 2.5rem 1rem 3.5rem;
                }

                .profile-header {
                    text-align: center;
                    animation: header-enter 0.4s ease-out both;
                }

                @keyframes header-enter {
                    from {
                        opacity: 0;
                        transform: translateY(10px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .avatar-ring {
                    margin: 0 auto;
                    height: 6rem;
                    width: 6rem;
                    padding: 0.25rem;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.5);
                    box-shadow: 0 0 0 2px oklch(0.63 0.18 49.38 / 0.7);
                }

                .avatar-ring img {
                    height: 100%;
                    width: 100%;
                    border-radius: 9999px;
                    object-fit: cover;
                }

                .profile-header h1 {
                    margin: 1.25rem 0 0;
                    font-size: 1.875rem;
                    font-weight: 600;
                    letter-spacing: -0.025em;
                }

                .profile-role {
                    margin-top: 0.25rem;
                    color: #d4d4d8;
                }

                .profile-headline {
                    margin-top: 1.25rem;
                    color: rgba(228, 228, 231, 0.9);
                    line-height: 1.625;
                }

                .contact-chips,
                .social-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .contact-chips {
                    margin-top: 1.5rem;
                    font-size: 0.75rem;
                    color: #a1a1aa;
                }

                .chip {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                }

                .chip .icon {
                    height: 0.875rem;
                    width: 0.875rem;
                }

                .social-row {
                    margin-top: 1.75rem;
                }

                .social-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    height: 2.5rem;
                    width: 2.5rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    transition: background 0.2s;
                }

                .social-button:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .social-button .icon {
                    height: 1rem;
                    width: 1rem;
                }

                .landing-section {
                    margin-top: 2.5rem;
                }

                .section-title h2 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 600;
                    letter-spacing: -0.025em;
                }

                .section-subtitle {
                    margin-top: 0.5rem;
                    color: #d4d4d8;
                    line-height: 1.625;
                }

                .card {
                    margin-top: 1rem;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                }

                .card-title {
                    margin: 0;
                    font-size: 1.125rem;
                    font-weight: 600;
                }

                .card-description {
                    margin-top: 0.375rem;
                    color: #d4d4d8;
                    font-size: 0.875rem;
                }

                .card-photo {
                    width: 100%;
                    margin-top: 1rem;
                    border-radius: 0.75rem;
                    object-fit: cover;
                }

                .service-bullets {
                    list-style: none;
                    margin: 1.25rem 0 0;
                    padding: 0;
                    font-size: 0.875rem;
                    color: #e4e4e7;
                }

                .service-bullet {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    margin-top: 0.5rem;
                }

                .bullet-dot {
                    flex-shrink: 0;
                    margin-top: 0.375rem;
                    height: 0.375rem;
                    width: 0.375rem;
                    border-radius: 9999px;
                    background: oklch(0.63 0.18 49.38);
                }

                .cta-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    width: 100%;
                    margin-top: 1.25rem;
                    padding: 0.75rem 1rem;
                    border-radius: 1rem;
                    background: oklch(0.63 0.18 49.38);
                    color: #000;
                    font-weight: 600;
                    text-decoration: none;
                }

                .cta-button.secondary {
                    margin-top: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #fff;
                }

                .cta-button .icon {
                    height: 1rem;
                    width: 1rem;
                }

                .about-text {
                    margin: 0;
                    color: #e4e4e7;
                    line-height: 1.625;
                }

                .about-highlights {
                    display: grid;
                    gap: 0.5rem;
                    margin-top: 1.25rem;
                }

                .about-highlight {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 0.875rem;
                    color: #e4e4e7;
                }

                .about-highlight .icon {
                    height: 1rem;
                    width: 1rem;
                    color: oklch(0.63 0.18 49.38);
                }

                .redirect-note {
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    color: #a1a1aa;
                    text-align: center;
                }

                .landing-footer {
                    margin-top: 2.5rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    text-align: center;
                    font-size: 0.75rem;
                    color: #71717a;
                }
                "#}
            </style>
        </div>
    }
}

fn profile_header(profile: &Profile) -> Html {
    html! {
        <section class="profile-header">
            <div class="avatar-ring">
                <img src={config::asset_url(&profile.avatar)} alt={profile.name.clone()} />
            </div>
            <h1>{ &profile.name }</h1>
            <div class="profile-role">{ format!("{}.", profile.role) }</div>
            <p class="profile-headline">{ &profile.headline }</p>

            <div class="contact-chips">
                <a class="chip" href={format!("tel:{}", profile.phone.replace(' ', ""))}>
                    <Icon kind={IconKind::Phone} />
                    { &profile.phone }
                </a>
                <a class="chip" href={format!("mailto:{}", profile.email)}>
                    <Icon kind={IconKind::Mail} />
                    { &profile.email }
                </a>
            </div>

            <div class="social-row">
                <SocialButton href={profile.socials.instagram.clone()} label="Instagram" icon={IconKind::Instagram} />
                <SocialButton href={profile.socials.linkedin.clone()} label="LinkedIn" icon={IconKind::LinkedIn} />
                <SocialButton href={profile.socials.youtube.clone()} label="YouTube" icon={IconKind::YouTube} />
            </div>
        </section>
    }
}

fn optional_photo(photo: &Option<String>, alt: &str) -> Html {
    match photo {
        Some(reference) => html! {
            <img class="card-photo" src={config::asset_url(reference)} alt={alt.to_string()} loading="lazy" />
        },
        None => html! {},
    }
}

fn service_section(service: &Service, contact: &Contact) -> Html {
    html! {
        <section id="servicio" class="landing-section">
            <SectionTitle
                title={service.section_title.clone()}
                subtitle={service.section_subtitle.clone()}
            />
            <div class="card">
                <h3 class="card-title">{ &service.title }</h3>
                <p class="card-description">{ &service.description }</p>
                { optional_photo(&service.photo, &service.title) }
                <ul class="service-bullets">
                    { for service.bullets.iter().map(|bullet| html! {
                        <li class="service-bullet" key={bullet.clone()}>
                            <span class="bullet-dot"></span>
                            <span>{ bullet }</span>
                        </li>
                    }) }
                </ul>
                <a
                    class="cta-button"
                    href={service.cta_destination(contact).to_string()}
                    target="_blank"
                    rel="noreferrer"
                >
                    { &service.cta_label }
                </a>
            </div>
        </section>
    }
}

fn about_section(about: &About) -> Html {
    html! {
        <section id="sobre-mi" class="landing-section">
            <SectionTitle
                title={about.section_title.clone()}
                subtitle={about.section_subtitle.clone()}
            />
            <div class="card">
                { optional_photo(&about.photo, &about.section_title) }
                <p class="about-text">{ &about.text }</p>
                <div class="about-highlights">
                    { for about.highlights.iter().map(|highlight| html! {
                        <div class="about-highlight" key={highlight.text.clone()}>
                            <Icon kind={IconKind::from(highlight.icon)} />
                            <span>{ &highlight.text }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn contact_section(contact: &Contact) -> Html {
    html! {
        <section id="contacto" class="landing-section">
            <SectionTitle
                title={contact.section_title.clone()}
                subtitle={contact.section_subtitle.clone()}
            />
            <div class="card">
                <a class="cta-button" href={contact.form_url.clone()} target="_blank" rel="noreferrer">
                    { &contact.form_label }
                    <Icon kind={IconKind::ArrowRight} />
                </a>
                <a
                    class="cta-button secondary"
                    href={contact.messaging_link()}
                    target="_blank"
                    rel="noreferrer"
                >
                    <Icon kind={IconKind::MessageCircle} />
                    { &contact.messaging_label }
                </a>
                <div class="redirect-note">{ &contact.redirect_note }</div>
            </div>
        </section>
    }
}

fn footer(profile: &Profile) -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="landing-footer">
            { format!("© {} {} · Hecho para GitHub Pages", year, profile.name) }
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(content: SiteContent) -> String {
        ServerRenderer::<Landing>::with_props(move || LandingProps {
            content: Rc::new(content),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn embedded() -> SiteContent {
        SiteContent::embedded().expect("embedded content should parse")
    }

    fn assert_in_order(html: &str, items: &[&str]) {
        let mut cursor = 0;
        for item in items {
            let found = html[cursor..]
                .find(item)
                .unwrap_or_else(|| panic!("{item:?} missing or out of order"));
            cursor += found + item.len();
        }
    }

    #[tokio::test]
    async fn sections_render_in_fixed_order() {
        let html = render(embedded()).await;
        assert_in_order(
            &html,
            &[
                "class=\"parallax-background\"",
                "class=\"profile-header\"",
                "id=\"servicio\"",
                "id=\"sobre-mi\"",
                "id=\"contacto\"",
                "class=\"landing-footer\"",
            ],
        );
    }

    #[tokio::test]
    async fn bullets_render_in_source_order() {
        let content = embedded();
        let html = render(content.clone()).await;
        assert_eq!(
            html.matches("class=\"service-bullet\"").count(),
            content.service.bullets.len()
        );
        let bullets: Vec<&str> = content.service.bullets.iter().map(String::as_str).collect();
        assert_in_order(&html, &bullets);
    }

    #[tokio::test]
    async fn highlights_render_in_source_order() {
        let content = embedded();
        let html = render(content.clone()).await;
        assert_eq!(
            html.matches("class=\"about-highlight\"").count(),
            content.about.highlights.len()
        );
        let labels: Vec<&str> = content.about.highlights.iter().map(|h| h.text.as_str()).collect();
        assert_in_order(&html, &labels);
    }

    #[tokio::test]
    async fn list_lengths_follow_content() {
        let mut content = embedded();
        content.service.bullets.truncate(2);
        content.about.highlights.clear();
        let html = render(content).await;
        assert_eq!(html.matches("class=\"service-bullet\"").count(), 2);
        assert_eq!(html.matches("class=\"about-highlight\"").count(), 0);
    }

    #[tokio::test]
    async fn contact_card_links_form_and_messaging() {
        let content = embedded();
        let html = render(content.clone()).await;
        assert!(html.contains(&format!("href=\"{}\"", content.contact.messaging_link())));
        assert!(html.contains(&content.contact.redirect_note));
    }

    #[tokio::test]
    async fn photos_render_only_when_configured() {
        let mut content = embedded();
        assert!(!render(content.clone()).await.contains("class=\"card-photo\""));

        content.about.photo = Some("about.jpg".to_string());
        let html = render(content).await;
        assert_eq!(html.matches("class=\"card-photo\"").count(), 1);
        assert!(html.contains("/assets/about.jpg"));
    }

    #[tokio::test]
    async fn footer_credits_profile_name() {
        let html = render(embedded()).await;
        let year = chrono::Local::now().year();
        assert!(html.contains(&format!("© {} Andrea Fernández Muñoz", year)));
    }
}
