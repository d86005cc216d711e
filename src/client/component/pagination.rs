use dioxus::prelude::*;

use super::Modal;

pub const PER_PAGE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Position of the current page within a client-side list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationData {
    /// Zero based
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl PaginationData {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let mut data = Self {
            page,
            per_page,
            total,
        };
        // Shrinking the list (or growing per_page) may leave the page past the end.
        data.page = data.page.min(data.total_pages() - 1);
        data
    }

    /// Always at least one, so an empty list still shows "1 / 1".
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    /// Index range of the rows on the current page.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.page * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    /// Rows of `items` on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }
}

#[component]
pub fn Pagination(
    page: Signal<usize>,
    per_page: Signal<usize>,
    data: PaginationData,
) -> Element {
    let mut show_page_jump = use_signal(|| false);
    let mut jump_page_input = use_signal(String::new);

    let total_pages = data.total_pages();
    let range = data.range();
    let first_shown = if data.total == 0 { 0 } else { range.start + 1 };

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "페이지당" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{per_page()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<usize>() {
                            per_page.set(value);
                            page.set(0);
                        }
                    },
                    for option_value in PER_PAGE_OPTIONS {
                        option { value: "{option_value}", "{option_value}개" }
                    }
                }
            }
            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "전체 {data.total}개 중 {first_shown}-{range.end}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !data.has_previous(),
                        onclick: move |_| {
                            if data.has_previous() {
                                page.set(data.page - 1);
                            }
                        },
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        onclick: move |_| {
                            jump_page_input.set((data.page + 1).to_string());
                            show_page_jump.set(true);
                        },
                        "{data.page + 1} / {total_pages}"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !data.has_next(),
                        onclick: move |_| {
                            if data.has_next() {
                                page.set(data.page + 1);
                            }
                        },
                        "»"
                    }
                }
            }
        }

        Modal {
            show: show_page_jump,
            title: "페이지 이동".to_string(),
            prevent_close: false,
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Ok(target) = jump_page_input().parse::<usize>() {
                        if (1..=total_pages).contains(&target) {
                            page.set(target - 1);
                            show_page_jump.set(false);
                        }
                    }
                },
                div {
                    class: "form-control w-full flex flex-col gap-3",
                    label {
                        class: "label",
                        span { class: "label-text", "페이지 번호 (1-{total_pages})" }
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        min: "1",
                        max: "{total_pages}",
                        value: "{jump_page_input()}",
                        oninput: move |evt| jump_page_input.set(evt.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_page_jump.set(false),
                        "취소"
                    }
                    button { r#type: "submit", class: "btn btn-primary", "이동" }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_holds_the_remainder() {
        let data = PaginationData::new(2, 10, 25);
        assert_eq!(data.total_pages(), 3);
        assert_eq!(data.range(), 20..25);
        assert!(data.has_previous());
        assert!(!data.has_next());
    }

    #[test]
    fn empty_list_has_a_single_empty_page() {
        let data = PaginationData::new(0, 10, 0);
        assert_eq!(data.total_pages(), 1);
        assert_eq!(data.range(), 0..0);
        assert!(!data.has_next());
    }

    #[test]
    fn page_is_clamped_when_the_list_shrinks() {
        let data = PaginationData::new(5, 20, 30);
        assert_eq!(data.page, 1);
        assert_eq!(data.range(), 20..30);
    }

    #[test]
    fn slices_the_current_page() {
        let rows: Vec<u32> = (1..=7).collect();
        let data = PaginationData::new(1, 3, rows.len());
        assert_eq!(data.slice(&rows), &[4, 5, 6]);
    }
}
