use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SERVICES;

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <div class="page">
            <div class="section">
                <Reveal>
                    <h1 class="page-title">{ "Our Services" }</h1>
                    <p class="page-lede">
                        { "We don't do \"everything\". We do the four things that actually \
                           drive revenue for modern brands." }
                    </p>
                </Reveal>

                <div style="display: grid; gap: 2rem;">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal delay={i as f64 * 0.1}>
                            <div class="service-row">
                                <div style="flex: 1;">
                                    <h3 class="card-title" style="font-size: 1.5rem;">{ service.title }</h3>
                                    <p class="card-copy" style="font-size: 1.125rem;">{ service.description }</p>
                                </div>
                                <ul class="service-checklist">
                                    <li>{ "✓ Strategy" }</li>
                                    <li>{ "✓ Execution" }</li>
                                    <li>{ "✓ Reporting" }</li>
                                </ul>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </div>
    }
}
