use yew::prelude::*;

use crate::behavior::CrossFade;

#[derive(Properties, PartialEq)]
pub struct CrossFadeStackProps {
    pub images: &'static [&'static str],
    pub current: usize,
    pub fade: CrossFade,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Overlay content (controls, gradients) drawn above the images.
    #[prop_or_default]
    pub children: Html,
}

/// Absolutely stacked images; only `current` is opaque.
#[function_component(CrossFadeStack)]
pub fn crossfade_stack(props: &CrossFadeStackProps) -> Html {
    html! {
        <div class={classes!("fade-stack", props.class.clone())}>
            { for props.images.iter().enumerate().map(|(i, src)| html! {
                <img
                    key={*src}
                    src={*src}
                    alt={props.alt.clone()}
                    loading="lazy"
                    class="fade-layer"
                    style={props.fade.layer_style(i == props.current)}
                    aria-hidden={(i != props.current).to_string()}
                />
            })}
            { props.children.clone() }
        </div>
    }
}
