//! Static feature cards section.

use leptos::*;

use crate::config::FEATURES;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features">
            <div class="section-header">
                <h2>"Advanced protection technology"</h2>
                <p>
                    "Comprehensive file analysis combining machine learning "
                    "with traditional detection methods"
                </p>
            </div>

            <div class="features-grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-head">
                                    <div class=format!("feature-icon {}", feature.gradient)>
                                        {feature.icon}
                                    </div>
                                    <h3>{feature.title}</h3>
                                </div>
                                <p class="feature-description">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
