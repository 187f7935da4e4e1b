// Hands the store to every immediate child by setting it on the child's
// props, the children never look it up themselves.

use crate::components::imports::*;
use crate::components::{Aside, Connect, Header, Main, Presentational};

#[derive(Clone, PartialEq, derive_more::From)]
pub enum Connected {
    Header(VChild<Connect<Header>>),
    Aside(VChild<Connect<Aside>>),
    Main(VChild<Connect<Main>>),
}

impl Connected {
    fn with_store(self, store: &AppStore) -> Self {
        match self {
            Self::Header(child) => Self::Header(attach_store(child, store)),
            Self::Aside(child) => Self::Aside(attach_store(child, store)),
            Self::Main(child) => Self::Main(attach_store(child, store)),
        }
    }
}

#[allow(clippy::from_over_into)]
impl Into<Html> for Connected {
    fn into(self) -> Html {
        match self {
            Self::Header(child) => child.into(),
            Self::Aside(child) => child.into(),
            Self::Main(child) => child.into(),
        }
    }
}

fn attach_store<C: Presentational>(
    mut child: VChild<Connect<C>>,
    store: &AppStore,
) -> VChild<Connect<C>> {
    Rc::make_mut(&mut child.props).store = Some(store.clone());
    child
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    pub store: AppStore,
    #[prop_or_default]
    pub children: ChildrenRenderer<Connected>,
}

pub struct Provider;

impl Component for Provider {
    type Message = ();
    type Properties = ProviderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let ProviderProps { store, children } = ctx.props();

        html! {
            <>
                { for children.iter().map(|child| child.with_store(store)) }
            </>
        }
    }
}
