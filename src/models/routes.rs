/// A statically known page: fixed metadata plus its sitemap hints.
pub struct StaticRoute {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub change_freq: &'static str,
    pub priority: &'static str,
}

pub const STATIC_ROUTES: &[StaticRoute] = &[
    StaticRoute {
        path: "/",
        title: "Pest Control 99 | Professional Pest Control Services",
        description: "Fast, safe and affordable pest control for homes and businesses. \
                      Same-day inspections for termites, cockroaches, rodents, ants and more.",
        keywords: "pest control, termite treatment, cockroach control, rodent removal",
        change_freq: "weekly",
        priority: "1.0",
    },
    StaticRoute {
        path: "/services/",
        title: "Our Services | Pest Control 99",
        description: "Residential and commercial pest control services: termites, bed bugs, \
                      cockroaches, mosquitoes, rodents and general disinfection.",
        keywords: "pest control services, termite control, bed bug treatment",
        change_freq: "monthly",
        priority: "0.9",
    },
    StaticRoute {
        path: "/quote/",
        title: "Get a Free Quote | Pest Control 99",
        description: "Tell us about your pest problem and get a free, no-obligation quote \
                      within one business day.",
        keywords: "pest control quote, free inspection, pest control price",
        change_freq: "monthly",
        priority: "0.8",
    },
    StaticRoute {
        path: "/contact/",
        title: "Contact Us | Pest Control 99",
        description: "Reach the Pest Control 99 team by phone, email or our contact form. \
                      We respond to every inquiry within 24 hours.",
        keywords: "pest control contact, pest control near me",
        change_freq: "yearly",
        priority: "0.5",
    },
    StaticRoute {
        path: "/blog/",
        title: "Pest Control Blog | Pest Control 99",
        description: "Guides and seasonal advice from our technicians on keeping your home \
                      free of termites, ants, rodents and other pests.",
        keywords: "pest control blog, pest prevention tips",
        change_freq: "weekly",
        priority: "0.7",
    },
];

pub fn find_static_route(path: &str) -> Option<&'static StaticRoute> {
    STATIC_ROUTES.iter().find(|route| route.path == path)
}
