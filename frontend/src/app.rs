use crate::components::theme::ThemeStyles;
use crate::components::{Aside, Connect, Header, Main, Provider};

use store::AppStore;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub store: AppStore,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <>
            <ThemeStyles/>
            <Layout store={ props.store.clone() }/>
        </>
    }
}

#[function_component(Layout)]
pub fn layout(props: &AppProps) -> Html {
    html! {
        <Provider store={ props.store.clone() }>
            <Connect<Header>/>
            <Connect<Aside>/>
            <Connect<Main>/>
        </Provider>
    }
}
