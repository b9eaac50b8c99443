//! Static copy for every page, expressed as section descriptors
//!
//! Pages render these tables; the motion layer only looks at the order and
//! the optional stagger index.

use super::motion::MotionTimings;
use super::reveal::stagger_delay;

/// Icon tint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
}

impl Accent {
    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Blue => "text-accent-blue",
            Accent::Purple => "text-accent-purple",
        }
    }
}

/// One titled block of copy with an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    /// Position in a staggered group, if the block reveals in sequence
    pub delay_index: Option<usize>,
}

impl SectionDescriptor {
    const fn new(title: &'static str, body: &'static str, icon: &'static str, accent: Accent) -> Self {
        Self {
            title,
            body,
            icon,
            accent,
            delay_index: None,
        }
    }

    const fn staggered(mut self, index: usize) -> Self {
        self.delay_index = Some(index);
        self
    }

    /// Reveal delay in ms; unstaggered blocks start immediately
    pub fn reveal_delay(&self, timings: &MotionTimings) -> f64 {
        self.delay_index
            .map(|i| stagger_delay(i, timings))
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Call-to-action card on the contact page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub body: &'static str,
    pub link_label: &'static str,
}

pub const HOME_FEATURES: [SectionDescriptor; 3] = [
    SectionDescriptor::new(
        "Real-Time Visualization",
        "Monitor your entire supply chain on a dynamic global map.",
        "bar-chart",
        Accent::Blue,
    ),
    SectionDescriptor::new(
        "AI Risk Prediction",
        "Our models predict disruptions before they impact your business.",
        "shield-check",
        Accent::Purple,
    ),
    SectionDescriptor::new(
        "Automated Alerts",
        "Receive instant notifications for at-risk shipments and routes.",
        "zap",
        Accent::Blue,
    ),
];

pub const VALUE_POINTS: [SectionDescriptor; 3] = [
    SectionDescriptor::new(
        "",
        "Identify high-risk suppliers and routes before they cause delays.",
        "shield-check",
        Accent::Blue,
    ),
    SectionDescriptor::new(
        "",
        "Optimize inventory levels based on predictive demand and transit times.",
        "bar-chart",
        Accent::Blue,
    ),
    SectionDescriptor::new(
        "",
        "Automate compliance and documentation checks to avoid customs issues.",
        "zap",
        Accent::Blue,
    ),
];

pub const FEATURE_GRID: [SectionDescriptor; 8] = [
    SectionDescriptor::new(
        "Real-time Monitoring",
        "Track shipments, vessels, and assets on a live, interactive global map.",
        "map",
        Accent::Blue,
    )
    .staggered(0),
    SectionDescriptor::new(
        "AI Risk Scoring",
        "Our AI assigns dynamic risk scores to routes, ports, and suppliers.",
        "brain-circuit",
        Accent::Purple,
    )
    .staggered(1),
    SectionDescriptor::new(
        "Predictive Alerts",
        "Get notified of potential disruptions like delays, weather, or congestion.",
        "alert-triangle",
        Accent::Blue,
    )
    .staggered(2),
    SectionDescriptor::new(
        "Historical Analytics",
        "Analyze past performance to identify trends and chronic bottlenecks.",
        "history",
        Accent::Purple,
    )
    .staggered(3),
    SectionDescriptor::new(
        "ERP & Logistics Integrations",
        "Seamlessly connect with your existing TMS, ERP, and data sources.",
        "git-merge",
        Accent::Blue,
    )
    .staggered(4),
    SectionDescriptor::new(
        "Visual Heatmaps",
        "Instantly visualize risk concentrations and performance hotspots.",
        "thermometer",
        Accent::Purple,
    )
    .staggered(5),
    SectionDescriptor::new(
        "Automated Recommendations",
        "Receive AI-driven suggestions for route optimization and carrier selection.",
        "trending-up",
        Accent::Blue,
    )
    .staggered(6),
    SectionDescriptor::new(
        "Custom Dashboards",
        "Build and customize dashboards to track the KPIs that matter most.",
        "bar-chart",
        Accent::Purple,
    )
    .staggered(7),
];

pub const STATS: [Stat; 3] = [
    Stat { value: "45%", label: "Risk Reduction" },
    Stat { value: "30%", label: "Efficiency Boost" },
    Stat { value: "99.8%", label: "Platform Uptime" },
];

/// Steps reveal twice as far apart as the feature grid
pub const STEPS: [SectionDescriptor; 4] = [
    SectionDescriptor::new(
        "Connect Data Sources",
        "Integrate your ERP, TMS, IoT devices, and external data feeds via our secure APIs.",
        "database",
        Accent::Blue,
    )
    .staggered(0),
    SectionDescriptor::new(
        "AI Analyzes Trends",
        "Our proprietary models process historical and real-time data to identify patterns and anomalies.",
        "brain-circuit",
        Accent::Purple,
    )
    .staggered(2),
    SectionDescriptor::new(
        "Dashboard Visualizes Risk",
        "Risks, delays, and opportunities are mapped and charted in an intuitive interface.",
        "layout-dashboard",
        Accent::Blue,
    )
    .staggered(4),
    SectionDescriptor::new(
        "Predictive Alerts & Recommendations",
        "Receive actionable alerts and suggestions to mitigate risks and improve efficiency.",
        "bell-ring",
        Accent::Purple,
    )
    .staggered(6),
];

pub const VALUES: [SectionDescriptor; 3] = [
    SectionDescriptor::new(
        "Innovation",
        "We are relentless in our pursuit of new technologies to solve the industry's toughest challenges.",
        "zap",
        Accent::Blue,
    ),
    SectionDescriptor::new(
        "Reliability",
        "Our platform is built for enterprise-grade performance, ensuring you can depend on our insights.",
        "shield",
        Accent::Purple,
    ),
    SectionDescriptor::new(
        "Transparency",
        "We believe in providing clear, understandable data to empower confident decision-making.",
        "eye",
        Accent::Blue,
    ),
];

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        title: "Demo Requests",
        body: "See our platform in action. We'll tailor a demo to your specific supply chain challenges.",
        link_label: "Schedule a Demo",
    },
    ContactChannel {
        title: "Enterprise Onboarding",
        body: "Ready to transform your operations? Our team will guide you through a seamless integration process.",
        link_label: "Talk to Sales",
    },
    ContactChannel {
        title: "Support & Consultation",
        body: "Get expert help from our logistics and data science professionals.",
        link_label: "Open a Support Ticket",
    },
];

/// Entries of the mock live risk feed on the how-it-works page
pub const RISK_FEED_LENGTH: usize = 5;

pub const DASHBOARD_PREVIEW_URL: &str = "https://i.ibb.co/L6Z4HdT/dashboard-mock.png";

pub const TEAM_PHOTO_URL: &str = "https://images.unsplash.com/photo-1579567761406-4684ee0c75b6?q=80&w=1974&auto=format&fit=crop";
