//! Static page content rendered by the section widgets.

/// Hero headline, one word per animated line.
pub const HERO_HEADLINE: [&str; 3] = ["Simplify.", "Streamline.", "Succeed."];

pub const HERO_TAGLINE: &str =
    "Operational consulting that turns complexity into momentum.";

/// A headline statistic shown in the about section.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: [Stat; 4] = [
    Stat {
        value: "95%",
        label: "Client Satisfaction",
    },
    Stat {
        value: "30%",
        label: "Efficiency Increase",
    },
    Stat {
        value: "70+",
        label: "Years Consulting Experience",
    },
    Stat {
        value: "20+",
        label: "Projects Completed",
    },
];

pub const ABOUT_BODY: &str = "We partner with growing businesses to untangle \
operations, modernize systems, and build leadership capacity that lasts.";

/// One service offering card.
pub struct ServiceCard {
    pub title: &'static str,
    pub bullets: [&'static str; 3],
}

pub const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        title: "Operations Optimization",
        bullets: [
            "Process mapping and waste elimination",
            "Workflow automation rollouts",
            "Vendor and supply chain tuning",
        ],
    },
    ServiceCard {
        title: "IT Systems Management",
        bullets: [
            "Infrastructure audits and upgrades",
            "Cloud migration planning",
            "Security and backup hygiene",
        ],
    },
    ServiceCard {
        title: "Fractional Leadership",
        bullets: [
            "Interim COO and CTO engagements",
            "Team structure and hiring plans",
            "Board-ready reporting cadences",
        ],
    },
];

pub const SERVICES_HEADING: &str = "What We Do";

pub const SERVICES_CTA: &str = "Explore all services";

pub const CONTACT_HEADING: &str = "Let's Talk";

pub const CONTACT_BODY: &str =
    "Tell us where your operation hurts and we'll map the fix together.";

pub const CONTACT_CTA: &str = "Book a consultation";
