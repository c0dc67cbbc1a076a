use super::{Bullet, CallToAction, Insight, Metric, Quote, Slide, SlideImage};
use crate::theme::ThemeName;

pub const DECK_TITLE: &str = "Eco Vibe Bottles | Strategic Business Narrative";

const fn bullet(label: &'static str, detail: &'static str) -> Bullet {
    Bullet {
        label,
        detail: Some(detail),
    }
}

const fn insight(headline: &'static str, highlight: &'static str) -> Insight {
    Insight {
        headline,
        highlight,
    }
}

const fn image(src: &'static str, alt: &'static str) -> SlideImage {
    SlideImage { src, alt }
}

pub static SLIDES: [Slide; 12] = [
    Slide {
        id: 1,
        theme: ThemeName::Emerald,
        eyebrow: Some("Investor Narrative · Q3 2024"),
        title: "Eco Vibe Bottles",
        subtitle: Some("Elevating sustainable hydration with self-purifying intelligence"),
        description: Some(
            "Inspired by LARQ's pioneering UV-C innovation, Eco Vibe Bottles merges smart \
             sterilization with adaptive wellness insights for modern movers.",
        ),
        image: image(
            "https://images.unsplash.com/photo-1523661149972-0bedfb978287?auto=format&fit=crop&w=1200&q=80",
            "Stylish smart water bottle with glowing UV light",
        ),
        metric: Some(Metric {
            label: "Vision",
            value: "Hydration that thinks, learns, & sustains.",
        }),
        footer_note: Some("Confidential · Eco Vibe Labs"),
        ..Slide::BLANK
    },
    Slide {
        id: 2,
        theme: ThemeName::Aqua,
        eyebrow: Some("Problem Landscape"),
        title: "Urban Hydration is Broken",
        bullets: &[
            bullet(
                "Contamination Anxiety",
                "72% worry about public water quality; 4 in 5 avoid refilling on-the-go.",
            ),
            bullet(
                "Plastic Persistence",
                "481B single-use bottles sold in 2023; only 30% recycled.",
            ),
            bullet(
                "Wellness Fragmentation",
                "Consumers juggle separate apps for hydration, fitness, and sustainability.",
            ),
        ],
        image: image(
            "https://images.unsplash.com/photo-1508609349937-5ec4ae374ebf?auto=format&fit=crop&w=1200&q=80",
            "Discarded plastic bottles and city skyline",
        ),
        insights: &[
            insight(
                "Eco Conscious Growth",
                "+18% YoY in premium reusable bottle segment.",
            ),
            insight(
                "Digital Wellness Spend",
                "$5.9B projected by 2027 in hydration analytics.",
            ),
        ],
        ..Slide::BLANK
    },
    Slide {
        id: 3,
        theme: ThemeName::Sunrise,
        eyebrow: Some("Inspired by LARQ's Momentum"),
        title: "Proven Appetite for Self-Cleaning Tech",
        bullets: &[
            bullet(
                "Category Validation",
                "LARQ scaled to $40M ARR with UV-C self-cleaning core.",
            ),
            bullet(
                "Premium Positioning",
                "Consumers accept $99-$129 price points for design-led sustainability.",
            ),
            bullet(
                "Community Halo",
                "User advocacy thrives when tech & cause intersect.",
            ),
        ],
        image: image(
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=1200&q=80",
            "Premium self-cleaning bottle in lifestyle setting",
        ),
        quote: Some(Quote {
            text: "We are not here to sell bottles; we are here to change behavior.",
            source: "Justin Wang, Co-founder & CEO, LARQ",
        }),
        ..Slide::BLANK
    },
    Slide {
        id: 4,
        theme: ThemeName::Midnight,
        eyebrow: Some("Product Experience"),
        title: "How Eco Vibe Bottles Work",
        subtitle: Some("A holistic system pairing intelligent hardware with a fluid digital layer"),
        bullets: &[
            bullet(
                "Purify Pulse™",
                "UV-C 280 nm array neutralizes 99.99% of bio-contaminants in 60 seconds.",
            ),
            bullet(
                "FlowSense Lid",
                "Sensors map intake rhythm, syncing with the Eco Vibe iOS/Android app.",
            ),
            bullet(
                "Harmonic Halo",
                "Ambient ring communicates hydration status + UV cycle with kinetic light.",
            ),
        ],
        image: image(
            "https://cdn.pixabay.com/photo/2020/07/02/09/23/water-bottle-5360416_1280.png",
            "3D render of futuristic smart water bottle",
        ),
        footer_note: Some("FDA-compliant UV-C hardware · BPA-free double wall stainless steel"),
        ..Slide::BLANK
    },
    Slide {
        id: 5,
        theme: ThemeName::Forest,
        eyebrow: Some("Audience Intelligence"),
        title: "Tribe of Conscious Explorers",
        description: Some(
            "Early adopters span urban professionals, boutique fitness enthusiasts, and \
             eco-forward travelers seeking tools that reflect their values.",
        ),
        bullets: &[
            bullet(
                "Primary Persona",
                "28-40 y/o hybrid professionals, $95k avg income, digital wellness subscribers.",
            ),
            bullet(
                "Secondary Persona",
                "Premium gym/franchise members tracking biometric health data weekly.",
            ),
            bullet(
                "Tertiary Persona",
                "Eco-travelers & remote workers prioritizing sustainable gear.",
            ),
        ],
        image: image(
            "https://images.pexels.com/photos/4397844/pexels-photo-4397844.jpeg?auto=compress&cs=tinysrgb&w=1200",
            "Diverse group hiking with reusable bottles",
        ),
        insights: &[insight(
            "Retention",
            "Top quartile digital wellness products retain 72% after 6 months.",
        )],
        ..Slide::BLANK
    },
    Slide {
        id: 6,
        theme: ThemeName::Emerald,
        eyebrow: Some("Value Stack"),
        title: "Business Model Architecture",
        bullets: &[
            bullet(
                "Hardware Margin",
                "55% blended gross margin across Classic ($129) and Motion ($159) lines.",
            ),
            bullet(
                "Eco Vibe+ Membership",
                "$7.99/mo unlocking AI hydration coach, refill map, and impact tracker.",
            ),
            bullet(
                "B2B Wellness Pods",
                "Subscription partnerships with co-working & boutique fitness networks.",
            ),
        ],
        image: image(
            "https://images.unsplash.com/photo-1610465299996-31c3b78ace26?auto=format&fit=crop&w=1200&q=80",
            "Modern smart bottle with app dashboard",
        ),
        metric: Some(Metric {
            label: "LTV / CAC Target",
            value: "3.8x in 24 months",
        }),
        ..Slide::BLANK
    },
    Slide {
        id: 7,
        theme: ThemeName::Aqua,
        eyebrow: Some("Go-To-Market Sprints"),
        title: "Layered Launch Strategy",
        bullets: &[
            bullet(
                "Beta Collective",
                "Invite-only drop with 1,000 wellness micro-influencers & LARQ alumni fans.",
            ),
            bullet(
                "Experiential Pop-ups",
                "UV immersion domes at Soho, Venice, Singapore to demo sterilization waves.",
            ),
            bullet(
                "Impact Loop",
                "Gamified refill challenges with NGOs; 1% revenue to ocean cleanup.",
            ),
        ],
        image: image(
            "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?auto=format&fit=crop&w=1200&q=80",
            "Immersive product launch event",
        ),
        insights: &[insight(
            "Influence ROI",
            "Nano creators deliver 30% higher conversion vs. paid social.",
        )],
        ..Slide::BLANK
    },
    Slide {
        id: 8,
        theme: ThemeName::Sunrise,
        eyebrow: Some("3-Year Financial Outlook"),
        title: "Compelling Path to $75M ARR",
        bullets: &[
            bullet(
                "Year 1",
                "$6.5M revenue · 18k units · 24% attach rate to Eco Vibe+.",
            ),
            bullet(
                "Year 2",
                "$24M revenue · 60k units · B2B pods contribute 22%.",
            ),
            bullet(
                "Year 3",
                "$75M revenue · 160k units · Membership ARR surpasses hardware.",
            ),
        ],
        image: image(
            "https://images.unsplash.com/photo-1520607162513-77705c0f0d4a?auto=format&fit=crop&w=1200&q=80",
            "Financial data visualization on digital screen",
        ),
        metric: Some(Metric {
            label: "Gross Margin Target",
            value: "62% by FY26",
        }),
        ..Slide::BLANK
    },
    Slide {
        id: 9,
        theme: ThemeName::Midnight,
        eyebrow: Some("Sustainability Flywheel"),
        title: "Impact Engine in Motion",
        bullets: &[
            bullet(
                "Smart Refills",
                "Track and verify plastic offset; users earn carbon-neutral badges.",
            ),
            bullet(
                "Circular Design",
                "Modular cap & sleeve built for refurbish programs, extending lifespan.",
            ),
            bullet(
                "Eco Ledger",
                "Blockchain-backed impact statements co-signed by NGO partners.",
            ),
        ],
        image: image(
            "https://images.unsplash.com/photo-1523867578866-1a4bb72c9d8d?auto=format&fit=crop&w=1200&q=80",
            "Lush forest with morning light representing sustainability",
        ),
        quote: Some(Quote {
            text: "Every refill triggers data that proves environmental progress.",
            source: "Eco Vibe Impact Lab",
        }),
        ..Slide::BLANK
    },
    Slide {
        id: 10,
        theme: ThemeName::Forest,
        eyebrow: Some("Execution Roadmap"),
        title: "Milestones to Scale",
        bullets: &[
            bullet(
                "Q3 2024",
                "Finalize DFM with LARQ-aligned manufacturing partner; pilot 500 units.",
            ),
            bullet(
                "Q1 2025",
                "Mobile app V1, hydration coach AI, and retail pop-up tour.",
            ),
            bullet(
                "Q4 2025",
                "Series A, APAC expansion, ESG certification, and corporate wellness channel.",
            ),
        ],
        image: image(
            "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&w=1200&q=80",
            "Team planning roadmap in modern workspace",
        ),
        insights: &[insight(
            "Manufacturing Ready",
            "Tier-1 OEM secured with 15% lower MOQs via strategic alliance.",
        )],
        ..Slide::BLANK
    },
    Slide {
        id: 11,
        theme: ThemeName::Emerald,
        eyebrow: Some("Team & Partners"),
        title: "Operators with Purpose",
        bullets: &[
            bullet(
                "CEO · Maya Chen",
                "Ex-LARQ product lead; scaled UV line from concept to $30M revenue.",
            ),
            bullet(
                "CTO · Diego Martins",
                "MIT materials scientist specializing in photonic sterilization arrays.",
            ),
            bullet(
                "Impact Council",
                "Partnerships with Oceanic Global, 1% for the Planet, and Refill My City.",
            ),
        ],
        image: image(
            "https://images.unsplash.com/photo-1545239351-1141bd82e8a6?auto=format&fit=crop&w=1200&q=80",
            "Professional team portrait",
        ),
        metric: Some(Metric {
            label: "Advisory Board",
            value: "Former LARQ ops, Peloton growth, Patagonia sustainability.",
        }),
        ..Slide::BLANK
    },
    Slide {
        id: 12,
        theme: ThemeName::Midnight,
        eyebrow: Some("Investor Call to Action"),
        title: "Join the Hydration Renaissance",
        description: Some(
            "We are raising a $12M Seed+ round to accelerate manufacturing, scale Eco Vibe+, \
             and embed impact transparency into every refill.",
        ),
        bullets: &[
            bullet(
                "Use of Funds",
                "40% manufacturing & inventory, 30% product/engineering, 20% GTM, 10% impact initiatives.",
            ),
            bullet(
                "Timeline",
                "18-month runway; Series A readiness by Q1 2026.",
            ),
            bullet(
                "Return Thesis",
                "Dual flywheel of premium hardware and subscription wellness with measurable ESG alpha.",
            ),
        ],
        image: image(
            "https://images.unsplash.com/photo-1526506118085-60ce8714f8c5?auto=format&fit=crop&w=1200&q=80",
            "Investor meeting overlooking city skyline",
        ),
        cta: Some(CallToAction {
            label: "Schedule Investor Session",
            link: "mailto:invest@ecovibe.com",
        }),
        ..Slide::BLANK
    },
];
