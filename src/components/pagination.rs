//! Pagination Component
//!
//! Page buttons derived from the total match count.

use leptos::prelude::*;

/// Tasks shown per page, fixed by the backend list endpoint.
pub const PAGE_SIZE: u32 = 4;

/// Total pages needed for `item_count` items in pages of `page_size`.
pub fn page_count(item_count: u32, page_size: u32) -> u32 {
    item_count.div_ceil(page_size)
}

/// True once `item_count` spills past a single page.
fn spans_pages(item_count: u32, page_size: u32) -> bool {
    page_count(item_count, page_size) > 1
}

/// Numbered page buttons plus prev/next arrows
#[component]
pub fn Pagination(
    #[prop(into)] item_count: Signal<u32>,
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    let total = move || page_count(item_count.get(), PAGE_SIZE);
    let visible = move || spans_pages(item_count.get(), PAGE_SIZE);

    view! {
        <Show when=visible>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| on_page.run(current_page.get().saturating_sub(1).max(1))
                >
                    "‹"
                </button>
                <For
                    each=move || 1..=total()
                    key=|page| *page
                    children=move |page| {
                        let page_class = move || {
                            if current_page.get() == page { "page-btn active" } else { "page-btn" }
                        };
                        view! {
                            <button class=page_class on:click=move |_| on_page.run(page)>
                                {page}
                            </button>
                        }
                    }
                />
                <button
                    class="page-btn"
                    disabled=move || current_page.get() >= total()
                    on:click=move |_| on_page.run(current_page.get() + 1)
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_items_make_three_pages() {
        assert_eq!(page_count(10, PAGE_SIZE), 3);
    }

    #[test]
    fn test_exact_multiple_has_no_extra_page() {
        assert_eq!(page_count(8, PAGE_SIZE), 2);
    }

    #[test]
    fn test_empty_list_has_no_pages() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
    }

    #[test]
    fn test_single_item_still_gets_a_page() {
        assert_eq!(page_count(1, PAGE_SIZE), 1);
    }

    #[test]
    fn test_pager_stays_hidden_until_second_page() {
        assert!(!spans_pages(0, PAGE_SIZE));
        assert!(!spans_pages(PAGE_SIZE, PAGE_SIZE));
        assert!(spans_pages(PAGE_SIZE + 1, PAGE_SIZE));
    }
}
