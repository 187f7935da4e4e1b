use crate::components::imports::*;
use crate::components::{Injected, Presentational};

pub struct Main;

impl Component for Main {
    type Message = ();
    type Properties = Injected<()>;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <main class={ ctx.props().theme.to_string() }>{ "Main" }</main>
        }
    }
}

impl Presentational for Main {
    type Own = ();

    fn inject(props: Injected<()>) -> Self::Properties {
        props
    }
}
