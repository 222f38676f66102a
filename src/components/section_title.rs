use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: AttrValue,
}

/// Section heading with an optional lead paragraph underneath.
/// An empty subtitle renders no paragraph at all.
#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <h2>{ props.title.clone() }</h2>
            {
                if !props.subtitle.is_empty() {
                    html! { <p class="section-subtitle">{ props.subtitle.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(title: &'static str, subtitle: &'static str) -> String {
        ServerRenderer::<SectionTitle>::with_props(move || SectionTitleProps {
            title: title.into(),
            subtitle: subtitle.into(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn empty_subtitle_is_omitted() {
        let html = render("Servicio", "").await;
        assert!(html.contains("<h2>Servicio</h2>"));
        assert!(!html.contains("section-subtitle"));
        assert!(!html.contains("<p"));
    }

    #[tokio::test]
    async fn subtitle_renders_exactly_its_text() {
        let html = render("Servicio", "Si encaja, avanzamos.").await;
        assert!(html.contains("<p class=\"section-subtitle\">Si encaja, avanzamos.</p>"));
        assert_eq!(html.matches("<p").count(), 1);
    }
}
