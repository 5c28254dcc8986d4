use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::components::reveal::Reveal;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let submitted = use_state_eq(|| false);

    // No backend: acknowledge locally and clear the notice after a moment.
    let on_submit = {
        let submitted = submitted.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            submitted.set(true);
            let submitted = submitted.clone();
            Timeout::new(4000, move || {
                submitted.set(false);
            })
            .forget();
        })
    };

    html! {
        <div class="page">
            <div class="section contact-split">
                <Reveal>
                    <h1 class="page-title">{ "Let's Talk." }</h1>
                    <p class="page-lede" style="margin-bottom: 3rem;">
                        { "Ready to scale? Fill out the form and our strategists will be in \
                           touch within 24 hours." }
                    </p>

                    <div class="contact-channels">
                        <div class="contact-channel">
                            <div class="contact-channel-title">{ "Email Us" }</div>
                            <div class="contact-channel-value">{ "hello@novagrowth.agency" }</div>
                        </div>
                        <div class="contact-channel">
                            <div class="contact-channel-title">{ "Call Us" }</div>
                            <div class="contact-channel-value">{ "+1 (555) 000-1234" }</div>
                        </div>
                        <div class="contact-channel">
                            <div class="contact-channel-title">{ "Visit Us" }</div>
                            <div class="contact-channel-value">{ "123 Growth Blvd, New York, NY" }</div>
                        </div>
                    </div>
                </Reveal>

                <Reveal delay={0.2}>
                    <form onsubmit={on_submit} class="contact-form">
                        <div class="field-pair">
                            <div class="field">
                                <label>{ "First Name" }</label>
                                <input type="text" placeholder="John" />
                            </div>
                            <div class="field">
                                <label>{ "Last Name" }</label>
                                <input type="text" placeholder="Doe" />
                            </div>
                        </div>
                        <div class="field">
                            <label>{ "Email Address" }</label>
                            <input type="email" placeholder="john@company.com" />
                        </div>
                        <div class="field">
                            <label>{ "Service Interest" }</label>
                            <select>
                                <option>{ "Paid Advertising" }</option>
                                <option>{ "SEO & Content" }</option>
                                <option>{ "Web Experience" }</option>
                                <option>{ "Strategy Audit" }</option>
                            </select>
                        </div>
                        <div class="field">
                            <label>{ "Message" }</label>
                            <textarea rows="4" placeholder="Tell us about your goals..."></textarea>
                        </div>
                        <button type="submit" class="btn btn-glow" style="width: 100%;">
                            { "Send Message" }
                        </button>
                        if *submitted {
                            <p class="form-notice">{ "Thanks! We'll be in touch within 24 hours." }</p>
                        }
                    </form>
                </Reveal>
            </div>
        </div>
    }
}
