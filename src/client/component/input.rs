use dioxus::prelude::*;

#[component]
fn FieldTitle(title: String, required: bool) -> Element {
    rsx!(
        div {
            class: "label",
            span {
                class: "label-text text-lg font-semibold",
                "{title}"
                if required {
                    span { class: "text-error ml-1", "*" }
                }
            }
        }
    )
}

/// Labelled single line input.
#[component]
pub fn InputBox(
    title: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] required: bool,
    #[props(default)] placeholder: String,
    max_length: Option<usize>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] disabled: bool,
) -> Element {
    rsx!(
        div {
            class: "form-control w-full",
            FieldTitle { title, required }
            input {
                r#type: input_type,
                class: "input input-bordered w-full",
                placeholder: "{placeholder}",
                value: "{value}",
                required,
                disabled,
                maxlength: max_length.map(|max| max.to_string()),
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    )
}

/// Textarea with a `len/max` character counter.
#[component]
pub fn DescriptionInput(
    title: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] required: bool,
    #[props(default)] placeholder: String,
    #[props(default = 1000)] max_length: usize,
) -> Element {
    let count = char_count(&value);

    rsx!(
        div {
            class: "form-control w-full",
            FieldTitle { title, required }
            textarea {
                class: "textarea textarea-bordered w-full min-h-32 resize-none",
                placeholder: "{placeholder}",
                value: "{value}",
                required,
                maxlength: "{max_length}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            div {
                class: "mt-2 text-right text-sm opacity-70",
                "{count}/{max_length}"
            }
        }
    )
}

/// Characters as the browser counts them for `maxlength`, not bytes.
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// Cuts `value` to at most `max` characters.
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_hangul_as_single_characters() {
        assert_eq!(char_count("서비스명"), 4);
        assert_eq!(char_count("SnapCode"), 8);
    }

    #[test]
    fn truncates_on_character_boundaries() {
        assert_eq!(truncate_chars("스냅코드", 2), "스냅");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
