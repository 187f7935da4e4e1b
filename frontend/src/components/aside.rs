use crate::components::imports::*;
use crate::components::{Injected, Presentational};

pub struct Aside;

impl Component for Aside {
    type Message = ();
    type Properties = Injected<()>;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <aside class={ ctx.props().theme.to_string() }>{ "Sidebar" }</aside>
        }
    }
}

impl Presentational for Aside {
    type Own = ();

    fn inject(props: Injected<()>) -> Self::Properties {
        props
    }
}
