pub use std::marker::PhantomData;
pub use std::rc::Rc;

pub use store::{Action, AppState, AppStore, Connection, Theme, Themes};
pub use stylist::yew::{styled_component, Global};
pub use yew::html::ChildrenRenderer;
pub use yew::prelude::*;
pub use yew::virtual_dom::VChild;
