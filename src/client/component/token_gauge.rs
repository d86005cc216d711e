use dioxus::prelude::*;
use std::f64::consts::PI;

use crate::model::{format::group_digits, openai::gauge_fraction};

const RADIUS: f64 = 55.0;

/// `stroke-dasharray` drawing `fraction` of the ring.
fn dash_array(fraction: f64) -> String {
    let circumference = 2.0 * PI * RADIUS;
    let filled = fraction.clamp(0.0, 1.0) * circumference;
    format!("{:.2} {:.2}", filled, circumference)
}

/// Ring chart of tokens used against a display capacity.
#[component]
pub fn TokenGauge(used_tokens: u64, capacity: f64) -> Element {
    let dasharray = dash_array(gauge_fraction(used_tokens, capacity));
    let used = group_digits(used_tokens);

    rsx!(
        div {
            class: "flex flex-col items-center",
            div {
                class: "relative",
                svg {
                    width: "160",
                    height: "160",
                    class: "-rotate-90",
                    circle {
                        cx: "80",
                        cy: "80",
                        r: "{RADIUS}",
                        stroke: "#f3f4f6",
                        stroke_width: "10",
                        fill: "transparent",
                    }
                    circle {
                        cx: "80",
                        cy: "80",
                        r: "{RADIUS}",
                        stroke: "#FF7710",
                        stroke_width: "10",
                        fill: "transparent",
                        stroke_dasharray: "{dasharray}",
                        stroke_linecap: "round",
                        class: "transition-all duration-300",
                    }
                }
                div {
                    class: "absolute inset-0 flex flex-col items-center justify-center",
                    span { class: "text-2xl font-semibold", "{used}" }
                    span { class: "text-sm mt-1 opacity-60", "token" }
                }
            }
            div {
                class: "flex items-center gap-1 mt-4 text-xs opacity-70",
                span { class: "w-3 h-3 rounded-full bg-[#FF7710]" }
                "Used ({used})"
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_array_scales_with_usage() {
        assert_eq!(dash_array(0.0), "0.00 345.58");
        assert_eq!(dash_array(0.5), "172.79 345.58");
        assert_eq!(dash_array(1.0), "345.58 345.58");
    }

    #[test]
    fn dash_array_never_overflows_the_ring() {
        assert_eq!(dash_array(3.0), dash_array(1.0));
        assert_eq!(dash_array(-1.0), dash_array(0.0));
    }
}
