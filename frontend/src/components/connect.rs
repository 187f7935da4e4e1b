// Store connector.
//
// `Connect<C>` mirrors the store state locally and renders `C` with that
// state, a dispatch callback and `C`'s own props. The store itself is never
// forwarded to `C`.

use crate::components::imports::*;
use crate::components::ErrorMessage;

/// Props a connected component receives.
#[derive(Properties, PartialEq, Clone)]
pub struct Injected<P: Clone + PartialEq> {
    pub theme: Theme,
    pub dispatch: Callback<Action>,
    pub own: P,
}

/// A component that can be wrapped by [`Connect`].
pub trait Presentational: BaseComponent {
    /// Props passed through the connector untouched.
    type Own: Clone + PartialEq + Default + 'static;

    fn inject(props: Injected<Self::Own>) -> Self::Properties;
}

#[derive(Properties, PartialEq, Clone)]
pub struct ConnectProps<P: Clone + PartialEq + Default + 'static> {
    /// Set by the [`Provider`](crate::components::Provider).
    #[prop_or_default]
    pub store: Option<AppStore>,
    #[prop_or_default]
    pub props: P,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConnectError {
    #[error("{0} is rendered without a store")]
    MissingStore(String),
}

pub fn display_name<C>() -> String {
    let name = std::any::type_name::<C>();
    let name = name.rsplit("::").next().unwrap_or(name);
    format!("Connect({name})")
}

pub enum Msg {
    StoreChanged,
}

pub struct Connect<C: Presentational> {
    connection: Result<Connection<AppState, Action>, ConnectError>,
    _component: PhantomData<C>,
}

impl<C: Presentational> Connect<C> {
    fn connection(ctx: &Context<Self>) -> Result<Connection<AppState, Action>, ConnectError> {
        match &ctx.props().store {
            Some(store) => Ok(Connection::new(store.clone())),
            None => {
                let e = ConnectError::MissingStore(display_name::<C>());
                tracing::error!("{e}");
                Err(e)
            }
        }
    }

    fn attach(&mut self, ctx: &Context<Self>) {
        if let Ok(connection) = self.connection.as_mut() {
            let on_change = ctx.link().callback(|()| Msg::StoreChanged);
            if connection.attach(move || on_change.emit(())) {
                tracing::debug!("{} subscribed", display_name::<C>());
            }
        }
    }
}

impl<C: Presentational> Component for Connect<C> {
    type Message = Msg;
    type Properties = ConnectProps<C::Own>;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            connection: Self::connection(ctx),
            _component: PhantomData,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let connection = match &self.connection {
            Ok(connection) => connection,
            Err(e) => return html! { <ErrorMessage message={ e.to_string() }/> },
        };

        let AppState { theme } = connection.state().clone();
        let props = C::inject(Injected {
            theme,
            dispatch: Callback::from(connection.dispatcher()),
            own: ctx.props().props.clone(),
        });

        html! { <C ..props /> }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::StoreChanged => {
                if let Ok(connection) = self.connection.as_mut() {
                    let changed = connection.refresh();
                    tracing::debug!(
                        "{} notified, theme {} (changed: {changed})",
                        display_name::<C>(),
                        connection.state().theme,
                    );
                }
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().store != old_props.store {
            // dropping the old connection releases its subscription
            self.connection = Self::connection(ctx);
            self.attach(ctx);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.attach(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Ok(connection) = self.connection.as_mut() {
            if connection.detach() {
                tracing::debug!("{} unsubscribed", display_name::<C>());
            }
        }
    }
}
