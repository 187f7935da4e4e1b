// Three consumers wired to one store, the way the frontend mounts
// Header, Aside and Main.

use std::cell::RefCell;
use std::rc::Rc;

use store::{app_store, Action, AppStore, Connection, Themes};

type Log = Rc<RefCell<Vec<&'static str>>>;

struct Mounted {
    name: &'static str,
    connection: Rc<RefCell<Connection<store::AppState, Action>>>,
}

impl Mounted {
    fn mount(name: &'static str, store: &AppStore, log: &Log) -> Self {
        let connection = Rc::new(RefCell::new(Connection::new(store.clone())));
        let on_change = {
            let connection = Rc::downgrade(&connection);
            let log = log.clone();
            move || {
                log.borrow_mut().push(name);
                if let Some(connection) = connection.upgrade() {
                    connection.borrow_mut().refresh();
                }
            }
        };
        connection.borrow_mut().attach(on_change);
        Self { name, connection }
    }

    fn class(&self) -> String {
        self.connection.borrow().state().theme.to_string()
    }
}

fn mount_all(store: &AppStore, log: &Log) -> Vec<Mounted> {
    ["header", "aside", "main"]
        .into_iter()
        .map(|name| Mounted::mount(name, store, log))
        .collect()
}

fn select(store: &AppStore, value: &str) {
    store.dispatch(Action::change_theme(value));
}

#[test]
fn initial_render_is_light_everywhere() {
    let store = app_store(None);
    let log = Log::default();
    let mounted = mount_all(&store, &log);

    for component in &mounted {
        assert_eq!(component.class(), "light", "{}", component.name);
    }
}

#[test]
fn selecting_a_theme_rerenders_all_three() {
    let store = app_store(None);
    let log = Log::default();
    let mounted = mount_all(&store, &log);

    select(&store, Themes::Dark.as_str());
    for component in &mounted {
        assert_eq!(component.class(), "dark", "{}", component.name);
    }

    select(&store, Themes::None.as_str());
    for component in &mounted {
        assert_eq!(component.class(), "none", "{}", component.name);
    }
}

#[test]
fn single_dispatch_fans_out_once_in_order() {
    let store = app_store(None);
    let log = Log::default();
    let _mounted = mount_all(&store, &log);

    select(&store, "dark");
    assert_eq!(*log.borrow(), vec!["header", "aside", "main"]);
}

#[test]
fn repeated_selection_is_idempotent() {
    let store = app_store(None);
    select(&store, "light");
    let once = store.state();
    select(&store, "light");
    assert_eq!(store.state(), once);
}

#[test]
fn unmounting_releases_subscriptions() {
    let store = app_store(None);
    let log = Log::default();

    for _ in 0..10 {
        let mounted = mount_all(&store, &log);
        assert_eq!(store.listener_count(), 3);
        drop(mounted);
    }
    assert_eq!(store.listener_count(), 0);

    select(&store, "dark");
    assert!(log.borrow().is_empty());
}
