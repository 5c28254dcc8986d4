//! Static marketing copy and data tables. Opaque to the animation code.

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct CaseStudy {
    pub client: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub stat: &'static str,
}

pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// One pinned block in the Home page's sticky stack. `offset` values must be
/// non-negative and strictly increasing for the cards to stack correctly.
pub struct StickyPanel {
    pub offset: f64,
    pub background: &'static str,
    pub title_color: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub copy: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Paid Advertising",
        description: "Data-driven campaigns across Meta, Google, and TikTok that scale revenue, not just clicks.",
    },
    Service {
        title: "SEO & Content",
        description: "Dominating search results with technical precision and storytelling that converts visitors.",
    },
    Service {
        title: "Web Experience",
        description: "Award-winning design and development focused on speed, aesthetics, and conversion rate optimization.",
    },
    Service {
        title: "Lifecycle Marketing",
        description: "Email and SMS retention strategies that turn one-time buyers into lifetime advocates.",
    },
];

pub const METRICS: [Metric; 4] = [
    Metric { label: "ROAS Average", value: "+212%" },
    Metric { label: "CAC Reduction", value: "-38%" },
    Metric { label: "Client Revenue", value: "$500M+" },
    Metric { label: "Retention Rate", value: "94%" },
];

pub const CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        client: "Nebula Tech",
        category: "SaaS Growth",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=2426&auto=format&fit=crop",
        stat: "+150% ARR",
    },
    CaseStudy {
        client: "Velvet & Oak",
        category: "E-Commerce",
        image: "https://images.unsplash.com/photo-1600607686527-6fb886090705?q=80&w=2500&auto=format&fit=crop",
        stat: "4.5x ROAS",
    },
    CaseStudy {
        client: "Aura Stream",
        category: "Mobile App",
        image: "https://images.unsplash.com/photo-1551650975-87deedd944c3?q=80&w=1974&auto=format&fit=crop",
        stat: "1M+ Downloads",
    },
];

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        text: "NovaGrowth didn't just run ads; they completely re-engineered our funnel. The results were immediate and undeniable.",
        author: "Elena R., CMO at TechFlow",
        role: "Series B SaaS",
    },
    Testimonial {
        text: "The level of design and technical execution is unmatched. They treat our brand like it's their own.",
        author: "Marcus J., Founder",
        role: "Lifestyle Brand",
    },
];

pub const STICKY_PANELS: [StickyPanel; 5] = [
    StickyPanel {
        offset: 0.0,
        background: "#C3ABFF",
        title_color: "rgb(30, 30, 30)",
        title: "Content Creation",
        image: "/assets/img/1.png",
        copy: "The algorithm's workings are shrouded in complexity, yet the stories it rewards are simple and human.",
    },
    StickyPanel {
        offset: 151.583,
        background: "#FED35B",
        title_color: "rgb(30, 30, 30)",
        title: "SEO",
        image: "/assets/img/2.png",
        copy: "The digital gospel etched into the very code of every page we ship.",
    },
    StickyPanel {
        offset: 303.166,
        background: "#FFFFFF",
        title_color: "rgb(30, 30, 30)",
        title: "Advertisement",
        image: "/assets/img/3.png",
        copy: "The elusive entities, lacking human form, that decide which message reaches which eye.",
    },
    StickyPanel {
        offset: 454.749,
        background: "#FBC1D4",
        title_color: "rgb(30, 30, 30)",
        title: "Brand Strategy",
        image: "/assets/img/5.png",
        copy: "This overlooked realm, a consequence of algorithmic judgments, is where positioning is won.",
    },
    StickyPanel {
        offset: 606.332,
        background: "#1E1E1E",
        title_color: "white",
        title: "Visual Identity",
        image: "/assets/img/4.png",
        copy: "Identity is the one asset the feed cannot commoditize.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::progress::pin_height;

    #[test]
    fn sticky_offsets_are_strictly_increasing() {
        for pair in STICKY_PANELS.windows(2) {
            assert!(pair[0].offset < pair[1].offset);
        }
        assert!(STICKY_PANELS[0].offset >= 0.0);
    }

    #[test]
    fn sticky_panels_pin_at_expected_heights() {
        let heights: Vec<String> = STICKY_PANELS
            .iter()
            .map(|panel| pin_height(panel.offset))
            .collect();
        assert_eq!(
            heights,
            vec![
                "calc(90vh - 0px)",
                "calc(90vh - 151.583px)",
                "calc(90vh - 303.166px)",
                "calc(90vh - 454.749px)",
                "calc(90vh - 606.332px)",
            ]
        );
    }
}
