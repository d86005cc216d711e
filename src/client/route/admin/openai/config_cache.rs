use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::{
    super::panel::{Notice, NoticeLine},
    SectionCard,
};

/// How long the outcome of a cache clear stays on screen.
#[cfg(feature = "web")]
const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[component]
pub fn ConfigCacheManager() -> Element {
    let mut should_clear = use_signal(|| false);
    let mut notice = use_signal(|| None::<Notice>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_clear() {
            Some(crate::client::api::openai::clear_config_cache().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            let outcome = match result {
                Ok(()) => Notice::Success("시스템 설정 캐시가 성공적으로 클리어되었습니다.".to_string()),
                Err(err) => {
                    tracing::error!("Failed to clear config cache: {}", err);
                    Notice::Failure("캐시 클리어에 실패했습니다.".to_string())
                }
            };
            notice.set(Some(outcome));
            should_clear.set(false);
        }
    });

    // Restarts whenever a new notice appears, so only the latest one times out
    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        if notice.read().is_some() {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            notice.set(None);
        }
    });

    let clearing = should_clear();

    rsx!(
        SectionCard {
            title: "시스템 설정 관리",
            div {
                h4 { class: "font-semibold", "캐시 관리" }
                p {
                    class: "text-sm opacity-70",
                    "시스템 설정 캐시를 클리어하여 최신 설정을 반영할 수 있습니다. 새로운 설정이 적용되지 않을 때 사용하세요."
                }
            }
            div {
                class: "flex flex-col gap-3",
                button {
                    class: "btn btn-warning btn-sm self-start",
                    disabled: clearing,
                    onclick: move |_| {
                        notice.set(None);
                        should_clear.set(true);
                    },
                    if clearing { "처리 중..." } else { "캐시 클리어" }
                }
                NoticeLine { notice: notice() }
            }
        }
    )
}
