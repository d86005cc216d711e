use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::{auth::AuthContext, submission::LastSubmission},
    router::Route,
};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth = use_context_provider(AuthContext::new);
    use_context_provider(|| Signal::new(LastSubmission::default()));

    // Resolve the stored token into a role once on first load
    #[cfg(feature = "web")]
    {
        use crate::client::{
            api::auth::get_role,
            model::auth::{AuthState, TokenStore},
        };

        let _ = use_resource(move || async move {
            if !TokenStore::has_token() {
                auth.set(AuthState::NotLoggedIn);
                return;
            }

            let result = get_role().await;
            if let Ok(user) = &result {
                TokenStore::save_role(&user.role);
            }
            let state = AuthState::from(result);
            if matches!(state, AuthState::NotLoggedIn) {
                TokenStore::clear();
            }
            auth.set(state);
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: "Submit your project repositories and get them graded by AI"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
