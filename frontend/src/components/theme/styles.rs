use super::themes::stylesheet;
use crate::components::imports::*;

#[styled_component]
pub fn ThemeStyles() -> Html {
    let layout = css!(
        "
            body {
                margin: 0;
                font-family: sans-serif;
            }
            header, aside, main {
                padding: 1em;
            }
            aside {
                float: left;
                width: 12em;
            }
        "
    );

    html! {
        <>
            <Global css={ layout }/>
            <Global css={ stylesheet() }/>
        </>
    }
}
