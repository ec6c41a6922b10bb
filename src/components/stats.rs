//! Static stat cards section.

use leptos::*;

use crate::config::STATS;

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="stats-grid">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat-card">
                                <div class=format!("stat-value {}", stat.color)>
                                    {stat.value}
                                </div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
