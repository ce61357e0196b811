//! Leptos Pagination Utilities
//!
//! Compact page-number windowing plus reusable pagination controls.
//! Long page ranges collapse around the current page with ellipsis markers.

use leptos::prelude::*;

/// One entry of the page bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMarker {
    /// A clickable page number (1-based)
    Page(u32),
    /// Gap between non-adjacent page numbers
    Ellipsis,
}

/// Up to this many pages are listed without collapsing
const MAX_VISIBLE_PAGES: u32 = 5;

/// Build the page bar for `current` out of `total` pages.
///
/// - `total <= 5`: every page
/// - near the start: `1 2 3 4 … last`
/// - near the end: `1 … last-3 last-2 last-1 last`
/// - otherwise: `1 … current-1 current current+1 … last`
pub fn page_markers(current: u32, total: u32) -> Vec<PageMarker> {
    use PageMarker::{Ellipsis, Page};

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Page).collect();
    }

    let mut markers = Vec::with_capacity(7);
    if current <= 3 {
        markers.extend((1..=4).map(Page));
        markers.push(Ellipsis);
        markers.push(Page(total));
    } else if current >= total - 2 {
        markers.push(Page(1));
        markers.push(Ellipsis);
        markers.extend((total - 3..=total).map(Page));
    } else {
        markers.push(Page(1));
        markers.push(Ellipsis);
        markers.extend((current - 1..=current + 1).map(Page));
        markers.push(Ellipsis);
        markers.push(Page(total));
    }
    markers
}

/// First/previous/numbered/next/last page bar.
///
/// `on_change` receives the requested page; the owner decides whether the
/// request is a no-op (same page, out of range).
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    let at_start = move || current.get() <= 1;
    let at_end = move || current.get() >= total.get();

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="page-nav"
                disabled=at_start
                aria-label="Go to first page"
                on:click=move |_| on_change.run(1)
            >
                "«"
            </button>
            <button
                class="page-nav"
                disabled=at_start
                aria-label="Go to previous page"
                on:click=move |_| on_change.run(current.get_untracked().saturating_sub(1))
            >
                "‹"
            </button>

            <div class="page-numbers">
                {move || {
                    let active = current.get();
                    page_markers(active, total.get())
                        .into_iter()
                        .map(|marker| match marker {
                            PageMarker::Page(page) => {
                                let is_active = page == active;
                                let class = if is_active { "page-btn active" } else { "page-btn" };
                                let aria_current = is_active.then_some("page");
                                view! {
                                    <button
                                        class=class
                                        aria-label=format!("Go to page {}", page)
                                        aria-current=aria_current
                                        on:click=move |_| on_change.run(page)
                                    >
                                        {page}
                                    </button>
                                }
                                .into_any()
                            }
                            PageMarker::Ellipsis => {
                                view! { <span class="page-ellipsis">"..."</span> }.into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>

            <button
                class="page-nav"
                disabled=at_end
                aria-label="Go to next page"
                on:click=move |_| on_change.run(current.get_untracked() + 1)
            >
                "›"
            </button>
            <button
                class="page-nav"
                disabled=at_end
                aria-label="Go to last page"
                on:click=move |_| on_change.run(total.get_untracked())
            >
                "»"
            </button>
        </nav>
    }
}

/// Compact "Page [n] of N" selector for narrow screens
#[component]
pub fn PageJump(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="page-jump">
            <span>"Page"</span>
            <select
                prop:value=move || current.get().to_string()
                on:change=move |ev| {
                    if let Ok(page) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(page);
                    }
                }
            >
                {move || (1..=total.get())
                    .map(|page| view! { <option value=page.to_string()>{page}</option> })
                    .collect_view()}
            </select>
            <span>{move || format!("of {}", total.get())}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn test_small_totals_list_every_page() {
        for total in 1..=5 {
            for current in 1..=total {
                let expected: Vec<PageMarker> = (1..=total).map(Page).collect();
                assert_eq!(page_markers(current, total), expected);
            }
        }
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(
            page_markers(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(page_markers(3, 10), page_markers(1, 10));
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(
            page_markers(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(page_markers(8, 10), page_markers(10, 10));
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_markers(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_six_pages_switches_from_start_to_end_window() {
        assert_eq!(
            page_markers(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
        assert_eq!(
            page_markers(4, 6),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn test_zero_pages_is_empty() {
        assert!(page_markers(1, 0).is_empty());
    }
}
