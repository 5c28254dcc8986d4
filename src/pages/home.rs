use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hover_title::HoverTitle;
use crate::components::reveal::Reveal;
use crate::components::sticky_section::StickySection;
use crate::content::{CASE_STUDIES, METRICS, SERVICES, STICKY_PANELS, TESTIMONIALS};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let mounted = use_state_eq(|| false);

    // Kick off the staged hero entrance on first mount.
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    let staged = |delay: f64| {
        format!(
            "transition: opacity 1s ease {delay}s, transform 1s ease {delay}s; \
             opacity: {}; transform: translateY({});",
            if *mounted { 1 } else { 0 },
            if *mounted { "0" } else { "2.5rem" },
        )
    };

    html! {
        <div style="overflow: hidden;">
            // Hero
            <div class="hero">
                <div class="section" style="padding-top: 8rem;">
                    <div style={staged(0.0)}>
                        <div class="hero-badge">{ "🚀 Scaling Brands to $50M+" }</div>
                    </div>
                    <div style={staged(0.1)}>
                        <h1 class="hero-title">
                            { "Growth that " }
                            <span class="gradient-text">{ "prints revenue." }</span>
                        </h1>
                    </div>
                    <div style={staged(0.2)}>
                        <p class="hero-copy">
                            { "We combine data-driven performance marketing with award-winning \
                               creative to scale your business faster than the competition." }
                        </p>
                    </div>
                    <div style={staged(0.3)}>
                        <div class="button-row">
                            <Link<Route> to={Route::Work} classes="btn btn-primary">{ "View Our Work" }</Link<Route>>
                            <Link<Route> to={Route::Services} classes="btn btn-secondary">{ "Our Services" }</Link<Route>>
                        </div>
                    </div>
                    <div style={staged(0.5)}>
                        <div class="metric-row">
                            { for METRICS.iter().take(3).map(|metric| html! {
                                <div>
                                    <div class="metric-value">{ metric.value }</div>
                                    <div class="metric-label">{ metric.label }</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            // Sticky card stack
            <div class="full-screen">
                <HoverTitle text="Scroll Down" />
            </div>
            <div style="position: relative; width: 100%;">
                { for STICKY_PANELS.iter().map(|panel| html! {
                    <StickySection
                        offset={panel.offset}
                        background={panel.background}
                        title_color={panel.title_color}
                        title={panel.title}
                        image={panel.image}
                    >
                        <p>{ panel.copy }</p>
                    </StickySection>
                }) }
            </div>
            <div class="full-screen">
                <p style="font-size: 1.5rem; color: #fff;">{ "End of the journey." }</p>
            </div>

            // Services preview
            <div class="section">
                <Reveal>
                    <div class="section-head">
                        <div>
                            <h2 class="section-title">{ "Our Expertise" }</h2>
                            <p class="section-copy">
                                { "Comprehensive growth solutions designed for the modern digital landscape." }
                            </p>
                        </div>
                        <Link<Route> to={Route::Services} classes="btn btn-secondary">{ "All Services" }</Link<Route>>
                    </div>
                </Reveal>
                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal delay={i as f64 * 0.1}>
                            <div class="card">
                                <h3 class="card-title">{ service.title }</h3>
                                <p class="card-copy">{ service.description }</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            // Selected work
            <div class="section">
                <Reveal>
                    <h2 class="section-title" style="text-align: center; margin-bottom: 4rem;">{ "Recent Wins" }</h2>
                </Reveal>
                { for CASE_STUDIES.iter().enumerate().map(|(i, study)| {
                    let reversed = i % 2 == 1;
                    html! {
                        <div class={classes!("work-row", reversed.then_some("work-row-reversed"))}>
                            <Reveal class="work-image">
                                <img src={study.image} alt={study.client} />
                            </Reveal>
                            <Reveal delay={0.2} class="work-detail">
                                <div class="card-category">{ study.category }</div>
                                <h3 style="font-size: 2.5rem; color: #fff; margin: 0 0 1.5rem;">{ study.client }</h3>
                                <div class="work-stat">{ study.stat }</div>
                                <Link<Route> to={Route::Work} classes="btn btn-secondary">{ "Read Case Study" }</Link<Route>>
                            </Reveal>
                        </div>
                    }
                }) }
            </div>

            // Social proof
            <div class="section testimonial-band">
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                    <Reveal delay={i as f64 * 0.2}>
                        <div class="testimonial">
                            <p class="testimonial-text">{ t.text }</p>
                            <div class="testimonial-author">{ t.author }</div>
                            <div class="testimonial-role">{ t.role }</div>
                        </div>
                    </Reveal>
                }) }
            </div>

            // CTA
            <div class="section" style="text-align: center; padding: 8rem 1.5rem;">
                <Reveal>
                    <h2 class="section-title">{ "Ready to scale?" }</h2>
                    <p class="section-copy" style="margin: 0 auto 2.5rem; max-width: 36rem;">
                        { "Stop guessing with your marketing budget. Let's build a strategy that actually converts." }
                    </p>
                    <Link<Route> to={Route::Contact} classes="btn btn-glow">{ "Get Your Free Audit" }</Link<Route>>
                </Reveal>
            </div>
        </div>
    }
}
