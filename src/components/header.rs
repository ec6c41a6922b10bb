//! Page header: logo mark, wordmark, and navigation links.

use leptos::*;

use crate::config::{APP_NAME, NAV_LINKS};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <nav class="header-nav">
                <div class="brand">
                    <span class="brand-mark">"🛡️"</span>
                    <span class="brand-name">{APP_NAME}</span>
                </div>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href="#" class="nav-link">
                                    {*link}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}
