use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::METRICS;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="page">
            <div class="section">
                <Reveal>
                    <h1 class="page-title">{ "About Us" }</h1>
                    <p class="page-lede">
                        { "We are a team of data scientists, creatives, and strategists \
                           obsessed with one thing: Growth." }
                    </p>
                </Reveal>

                <div class="about-split">
                    <Reveal>
                        <img
                            src="https://images.unsplash.com/photo-1522071820081-009f0129c71c?q=80&w=2070&auto=format&fit=crop"
                            alt="Team"
                            style="width: 100%; border-radius: 1rem; border: 1px solid rgba(255,255,255,0.1);"
                        />
                    </Reveal>
                    <Reveal delay={0.2}>
                        <h3 style="font-size: 1.875rem; font-weight: 700; color: #fff; margin: 0 0 1.5rem;">
                            { "Not your average agency." }
                        </h3>
                        <p class="card-copy" style="font-size: 1rem; margin-bottom: 1.5rem;">
                            { "Most agencies care about deliverables. We care about outcomes. \
                               Founded in 2020, NovaGrowth was built to bridge the gap between \
                               creative storytelling and hard-core performance analytics." }
                        </p>
                        <p class="card-copy" style="font-size: 1rem;">
                            { "We don't outsource. We don't use interns on key accounts. When \
                               you work with us, you work with senior experts who have scaled \
                               brands from zero to IPO." }
                        </p>
                    </Reveal>
                </div>

                <div class="metric-band">
                    { for METRICS.iter().enumerate().map(|(i, metric)| html! {
                        <Reveal delay={i as f64 * 0.1}>
                            <div style="text-align: center;">
                                <div class="metric-value" style="font-size: 2.5rem;">{ metric.value }</div>
                                <div class="metric-label">{ metric.label }</div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </div>
    }
}
