use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};

#[derive(Properties, PartialEq)]
pub struct SocialButtonProps {
    #[prop_or(AttrValue::Static("#"))]
    pub href: AttrValue,
    pub label: AttrValue,
    pub icon: IconKind,
}

#[function_component(SocialButton)]
pub fn social_button(props: &SocialButtonProps) -> Html {
    html! {
        <a class="social-button" href={props.href.clone()} aria-label={props.label.clone()}>
            <Icon kind={props.icon} />
        </a>
    }
}
