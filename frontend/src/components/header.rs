use crate::components::imports::*;
use crate::components::{Injected, Presentational};
use web_sys::HtmlSelectElement;

pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = Injected<()>;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Injected {
            theme, dispatch, ..
        } = ctx.props();

        let onchange = {
            let dispatch = dispatch.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                dispatch.emit(Action::change_theme(select.value()));
            })
        };

        let options = Themes::ALL.iter().map(|option| {
            let value = option.as_str();
            html! {
                <option {value} selected={ theme == value }>{ value }</option>
            }
        });

        html! {
            <header class={ theme.to_string() }>
                <label for="theme">{ "Switch theme: " }</label>
                <select name="theme" id="theme" {onchange}>
                    { for options }
                </select>
            </header>
        }
    }
}

impl Presentational for Header {
    type Own = ();

    fn inject(props: Injected<()>) -> Self::Properties {
        props
    }
}
