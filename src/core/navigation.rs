//! Site map: pages, header links and footer link groups

use derive_more::Display;

/// "The active view changed" token emitted by the router
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationEvent(String);

impl NavigationEvent {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    pub fn page(&self) -> SitePage {
        SitePage::from_path(&self.0)
    }
}

/// Every page the site can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SitePage {
    #[display("Home")]
    Home,
    #[display("Features")]
    Features,
    #[display("How It Works")]
    HowItWorks,
    #[display("About")]
    About,
    #[display("Contact")]
    Contact,
    #[display("Not Found")]
    NotFound,
}

impl SitePage {
    /// Resolve a location path, ignoring query, fragment and trailing slash
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => SitePage::Home,
            "/features" => SitePage::Features,
            "/how-it-works" => SitePage::HowItWorks,
            "/about" => SitePage::About,
            "/contact" => SitePage::Contact,
            _ => SitePage::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            SitePage::Home => "/",
            SitePage::Features => "/features",
            SitePage::HowItWorks => "/how-it-works",
            SitePage::About => "/about",
            SitePage::Contact => "/contact",
            SitePage::NotFound => "/404",
        }
    }

    /// Document title
    pub fn title(&self) -> String {
        match self {
            SitePage::Home => "Mooj-Tech - AI Supply Chain Intelligence".to_string(),
            page => format!("{} - Mooj-Tech", page),
        }
    }

    /// Meta description for search results and link previews
    pub fn description(&self) -> &'static str {
        match self {
            SitePage::Home => {
                "Mooj-Tech uses AI to predict supply chain disruptions and visualize global shipping data in real time."
            }
            SitePage::Features => {
                "Predictive analytics, live shipment tracking, route optimization and risk alerts in one supply chain dashboard."
            }
            SitePage::HowItWorks => {
                "Connect your data, let our models analyze trends, and act on predictive alerts in four steps."
            }
            SitePage::About => {
                "Meet the technologists and logistics experts building a more resilient future for global trade."
            }
            SitePage::Contact => {
                "Request a demo, discuss an enterprise partnership or get support from the Mooj-Tech team."
            }
            SitePage::NotFound => "The page you are looking for does not exist.",
        }
    }

    /// Whether search engines should index the page
    pub fn is_indexable(&self) -> bool {
        *self != SitePage::NotFound
    }
}

/// Entry of the header navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub page: SitePage,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", page: SitePage::Home },
    NavLink { name: "Features", page: SitePage::Features },
    NavLink { name: "How It Works", page: SitePage::HowItWorks },
    NavLink { name: "About", page: SitePage::About },
    NavLink { name: "Contact", page: SitePage::Contact },
];

/// Index into [`NAV_LINKS`] of the link matching `path`, if any
pub fn active_link_index(path: &str) -> Option<usize> {
    let page = SitePage::from_path(path);
    NAV_LINKS.iter().position(|link| link.page == page)
}

/// Footer link; `#` targets are placeholders that go nowhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl FooterLink {
    pub fn is_placeholder(&self) -> bool {
        self.href == "#"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: [FooterLink; 3],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Platform",
        links: [
            FooterLink { name: "Features", href: "/features" },
            FooterLink { name: "How It Works", href: "/how-it-works" },
            FooterLink { name: "Dashboard", href: "#" },
        ],
    },
    FooterColumn {
        title: "Company",
        links: [
            FooterLink { name: "About Us", href: "/about" },
            FooterLink { name: "Careers", href: "#" },
            FooterLink { name: "Partners", href: "#" },
        ],
    },
    FooterColumn {
        title: "Resources",
        links: [
            FooterLink { name: "Blog", href: "#" },
            FooterLink { name: "Support", href: "/contact" },
            FooterLink { name: "API Docs", href: "#" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(SitePage::from_path("/"), SitePage::Home);
        assert_eq!(SitePage::from_path(""), SitePage::Home);
        assert_eq!(SitePage::from_path("/features"), SitePage::Features);
        assert_eq!(SitePage::from_path("/how-it-works/"), SitePage::HowItWorks);
        assert_eq!(SitePage::from_path("/about?ref=footer"), SitePage::About);
        assert_eq!(SitePage::from_path("/contact#form"), SitePage::Contact);
        assert_eq!(SitePage::from_path("/pricing"), SitePage::NotFound);
    }

    #[test]
    fn test_path_roundtrip_for_nav_pages() {
        for link in NAV_LINKS {
            assert_eq!(SitePage::from_path(link.page.path()), link.page);
        }
    }

    #[test]
    fn test_active_link_index() {
        assert_eq!(active_link_index("/"), Some(0));
        assert_eq!(active_link_index("/how-it-works"), Some(2));
        assert_eq!(active_link_index("/contact/"), Some(4));
        assert_eq!(active_link_index("/missing"), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(SitePage::HowItWorks.title(), "How It Works - Mooj-Tech");
        assert!(SitePage::Home.title().starts_with("Mooj-Tech"));
    }

    #[test]
    fn test_only_known_pages_are_indexable() {
        assert!(SitePage::Contact.is_indexable());
        assert!(!SitePage::NotFound.is_indexable());
        for link in NAV_LINKS {
            assert!(!link.page.description().is_empty());
        }
    }

    #[test]
    fn test_footer_placeholders() {
        let placeholders = FOOTER_COLUMNS
            .iter()
            .flat_map(|c| c.links.iter())
            .filter(|l| l.is_placeholder())
            .count();
        assert_eq!(placeholders, 5);
    }
}
