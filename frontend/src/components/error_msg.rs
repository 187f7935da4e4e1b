use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct ErrorProps {
    pub message: AttrValue,
}

// inline style, so it still shows when rendered outside the stylesheet
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorProps) -> Html {
    html! {
        <p class="error" style="color: rgb(248 83 20);">{ props.message.clone() }</p>
    }
}
