#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::Arc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::error;

use enisey_domain as domain;
use enisey_web_app as web_app;

use component::{element::Icon, footer::Footer, navbar::Navbar};
use notification::NotificationQueue;
use page::{index::Index, not_found::NotFound};

mod component;
mod notification;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Index {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.6.0/css/all.min.css";

const NOTIFICATION_TIMEOUT_MS: u32 = 5000;
const PANIC_LOG_ENTRIES: usize = 20;

static NOTIFICATIONS: GlobalSignal<NotificationQueue> = Signal::global(NotificationQueue::default);

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(Arc::new(web_app::log::MemoryLog::default()));
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        let entries = web_app::log::entries()
            .iter()
            .take(PANIC_LOG_ENTRIES)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Что-то пошло не так</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        Произошла непредвиденная ошибка, страница не может продолжить работу.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block\">
                                        <p class=\"has-text-weight-bold\">Последние записи журнала</p>
                                        <pre>{entries}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Обновить страницу</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    use_context_provider(web_app::SiteConfig::default);

    rsx! {
        document::Title { "Спортивный зал Енисей" }
        document::Link { rel: "stylesheet", href: BULMA_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
        Notifications {}
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        Navbar {}
        main {
            Outlet::<Route> {}
        }
        Footer {}
    }
}

#[component]
fn Notifications() -> Element {
    let notifications = NOTIFICATIONS.read().notifications().to_vec();

    rsx! {
        div {
            class: "toast-container",
            for notification in notifications {
                div {
                    key: "{notification.id}",
                    class: "notification is-success is-light toast",
                    button {
                        aria_label: "close",
                        class: "delete",
                        onclick: move |_| dismiss(notification.id),
                    }
                    p {
                        class: "has-text-weight-bold",
                        Icon { name: "circle-check", is_small: true }
                        " {notification.acknowledgment.title}"
                    }
                    p { "{notification.acknowledgment.description}" }
                }
            }
        }
    }
}

/// Shows the acknowledgment as a toast that disappears after a timeout.
fn notify(acknowledgment: domain::Acknowledgment) {
    let id = NOTIFICATIONS.write().push(acknowledgment);
    spawn(async move {
        TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
        dismiss(id);
    });
}

fn dismiss(id: u64) {
    NOTIFICATIONS.write().remove(id);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_route_index() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Index {}));
    }

    #[test]
    fn test_route_not_found() {
        assert_eq!(
            "/equipment/1".parse::<Route>().ok(),
            Some(Route::NotFound {
                route: vec!["equipment".to_string(), "1".to_string()]
            })
        );
    }
}
