use dioxus::prelude::*;

mod config_cache;
mod model_selector;
mod usage_stats;

use config_cache::ConfigCacheManager;
use model_selector::ModelSelector;
use usage_stats::UsageStats;

#[component]
pub fn OpenAiTab() -> Element {
    rsx!(
        section {
            class: "flex flex-col gap-6",
            h2 { class: "text-2xl font-semibold", "OpenAI 관리" }
            ModelSelector {}
            UsageStats {}
            ConfigCacheManager {}
        }
    )
}

/// Bordered card shared by the OpenAI sections.
#[component]
fn SectionCard(title: &'static str, children: Element) -> Element {
    rsx!(
        div {
            class: "card border border-base-300 bg-base-100",
            div {
                class: "card-body gap-4",
                h3 { class: "card-title", "{title}" }
                {children}
            }
        }
    )
}
