use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::CASE_STUDIES;

#[function_component(WorkPage)]
pub fn work_page() -> Html {
    html! {
        <div class="page">
            <div class="section">
                <Reveal>
                    <h1 class="page-title">{ "Work" }</h1>
                    <p class="page-lede">
                        { "Results speak louder than slides. Here's how we've helped our \
                           partners dominate their markets." }
                    </p>
                </Reveal>

                <div class="work-grid">
                    { for CASE_STUDIES.iter().enumerate().map(|(i, study)| html! {
                        <Reveal delay={i as f64 * 0.1}>
                            <div class="work-card">
                                <div class="work-card-media">
                                    <img src={study.image} alt={study.client} />
                                    <div class="work-card-tag">{ study.category }</div>
                                </div>
                                <h3 class="card-title" style="font-size: 1.5rem;">{ study.client }</h3>
                                <p class="card-copy" style="font-size: 1.125rem;">
                                    { "Achieved " }
                                    <span style="color: #fff; font-weight: 600;">{ study.stat }</span>
                                    { " within 90 days." }
                                </p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </div>
    }
}
