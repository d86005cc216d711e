use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBars, FaUser, FaXmark},
    Icon,
};

use crate::client::{
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Scroll offset past which scrolling down hides the header.
const HIDE_AFTER_PX: f64 = 100.0;

/// Header slides away while scrolling down past the threshold and returns on any scroll up.
fn header_hidden(last_scroll_y: f64, scroll_y: f64) -> bool {
    scroll_y > last_scroll_y && scroll_y > HIDE_AFTER_PX
}

#[component]
pub fn Header() -> Element {
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();
    let mut menu_open = use_signal(|| false);
    let mut visible = use_signal(|| true);

    #[cfg(feature = "web")]
    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            window.addEventListener('scroll', () => dioxus.send(window.scrollY), { passive: true });
            "#,
        );
        let mut last_scroll_y = 0.0;
        while let Ok(scroll_y) = eval.recv::<f64>().await {
            visible.set(!header_hidden(last_scroll_y, scroll_y));
            last_scroll_y = scroll_y;
        }
    });

    let (logged_in, is_admin, settled) = {
        let state = auth.read();
        (
            state.is_authenticated(),
            state.is_admin(),
            !matches!(&*state, AuthState::Initializing),
        )
    };

    let mut logout = move || {
        auth.logout();
        menu_open.set(false);
        nav.push(Route::Login {});
    };

    let translate = if visible() {
        "translate-y-0"
    } else {
        "-translate-y-full"
    };

    rsx!(header {
        class: "fixed top-0 inset-x-0 z-50 px-4 py-3 transition-transform duration-300 {translate}",
        nav {
            class: "relative max-w-7xl mx-auto px-6 py-3 flex justify-between items-center rounded-full border border-neutral bg-neutral text-neutral-content",
            Link {
                to: Route::Home {},
                class: "text-xl sm:text-2xl font-bold text-primary",
                {SITE_NAME}
            }
            div {
                class: "hidden sm:flex items-center gap-2",
                NavLinks { on_navigate: move |_| menu_open.set(false) }
            }
            div {
                class: "hidden sm:flex items-center gap-2",
                if settled && logged_in {
                    if is_admin {
                        Link { to: Route::Admin {}, class: "btn btn-ghost", "Admin" }
                    }
                    Link { to: Route::MyPage {}, class: "btn btn-ghost", "MyPage" }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| logout(),
                        "Logout"
                    }
                } else if settled {
                    Link { to: Route::Login {}, class: "btn btn-ghost", "Login" }
                }
            }
            button {
                class: "btn btn-ghost btn-square sm:hidden",
                onclick: move |_| menu_open.toggle(),
                if menu_open() {
                    Icon { width: 20, height: 20, icon: FaXmark }
                } else {
                    Icon { width: 20, height: 20, icon: FaBars }
                }
            }
            if menu_open() {
                div {
                    class: "absolute top-full inset-x-4 mt-2 sm:hidden",
                    div {
                        class: "flex flex-col gap-1 rounded-2xl border border-neutral bg-neutral p-3",
                        NavLinks { on_navigate: move |_| menu_open.set(false) }
                        if logged_in {
                            if is_admin {
                                Link {
                                    to: Route::Admin {},
                                    class: "btn btn-ghost justify-start",
                                    onclick: move |_| menu_open.set(false),
                                    "Admin"
                                }
                            }
                            Link {
                                to: Route::MyPage {},
                                class: "btn btn-ghost justify-start gap-2",
                                onclick: move |_| menu_open.set(false),
                                Icon { width: 16, height: 16, icon: FaUser }
                                "MyPage"
                            }
                            button {
                                class: "btn btn-ghost justify-start",
                                onclick: move |_| logout(),
                                "Logout"
                            }
                        } else {
                            Link {
                                to: Route::Login {},
                                class: "btn btn-ghost justify-start",
                                onclick: move |_| menu_open.set(false),
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    })
}

#[component]
fn NavLinks(on_navigate: EventHandler<()>) -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            class: "btn btn-ghost justify-start",
            onclick: move |_| on_navigate.call(()),
            "Home"
        }
        Link {
            to: Route::Business {},
            class: "btn btn-ghost justify-start",
            onclick: move |_| on_navigate.call(()),
            "Business"
        }
        Link {
            to: Route::Personal {},
            class: "btn btn-ghost justify-start",
            onclick: move |_| on_navigate.call(()),
            "Personal"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_only_when_scrolling_down_past_threshold() {
        assert!(!header_hidden(0.0, 80.0));
        assert!(header_hidden(80.0, 150.0));
        assert!(!header_hidden(150.0, 120.0));
        assert!(!header_hidden(300.0, 300.0));
    }
}
