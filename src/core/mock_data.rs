//! Filler records for testimonials, team members and partner logos
//!
//! Each page seeds its own generator so the server render and the hydrated
//! client produce the same names.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Amara", "Bastian", "Chiara", "Dmitri", "Elena", "Farid", "Grace", "Hiroshi", "Ines",
    "Jonas", "Kavya", "Liam", "Mei", "Nikolai", "Olivia", "Pedro", "Quinn", "Rania", "Soren",
    "Tamsin", "Umar", "Valentina", "Wen", "Yara",
];

const LAST_NAMES: &[&str] = &[
    "Okafor", "Lindqvist", "Moretti", "Volkov", "Haddad", "Tanaka", "Oliveira", "Keller",
    "Nakamura", "Fischer", "Reyes", "Andersen", "Kowalski", "Mensah", "Larsen", "Duarte",
    "Sato", "Brennan", "Castillo", "Novak",
];

const JOB_TITLES: &[&str] = &[
    "Head of Logistics",
    "VP Supply Chain",
    "Operations Director",
    "Chief Data Officer",
    "Procurement Lead",
    "Fleet Manager",
    "Director of Planning",
    "Principal Engineer",
    "Customs Compliance Manager",
    "Head of Product",
];

const COMPANY_PREFIXES: &[&str] = &[
    "Blue", "North", "Apex", "Harbor", "Meridian", "Atlas", "Summit", "Coastal", "Vertex",
    "Pacific", "Granite", "Silverline",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Freight", "Logistics", "Shipping", "Cargo", "Supply Co.", "Maritime", "Distribution",
    "Transport",
];

const QUOTES: &[&str] = &[
    "We saw port congestion coming a full week before our carriers flagged it.",
    "Risk scores finally gave our planners a shared language with procurement.",
    "Our on-time delivery rate climbed within the first quarter of rollout.",
    "The alerts are specific enough that the team acts on them instead of muting them.",
    "Supplier reviews that took days now take an afternoon.",
    "It replaced three dashboards and a spreadsheet nobody trusted.",
];

const PORT_CODES: &[&str] = &[
    "SGP", "LAX", "RTM", "SHA", "HAM", "DXB", "NYC", "BUS", "ANR", "HKG", "YVR", "SAN",
];

/// Seeded generator for a page's filler data
pub fn page_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    pub title: String,
    pub avatar_url: String,
}

/// One line of the mock live risk feed
#[derive(Debug, Clone, PartialEq)]
pub struct RiskUpdate {
    pub route: String,
    /// Risk score out of 10, one decimal
    pub score: f64,
}

impl RiskUpdate {
    /// Text colour class for the score
    pub fn severity_class(&self) -> &'static str {
        if self.score >= 7.5 {
            "text-red-600"
        } else if self.score >= 5.0 {
            "text-yellow-600"
        } else {
            "text-green-600"
        }
    }
}

fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

pub fn company_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, COMPANY_PREFIXES), pick(rng, COMPANY_SUFFIXES))
}

pub fn partner_names<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| company_name(rng)).collect()
}

pub fn testimonials<R: Rng>(rng: &mut R, count: usize) -> Vec<Testimonial> {
    (0..count)
        .map(|_| Testimonial {
            quote: pick(rng, QUOTES).to_string(),
            name: full_name(rng),
            title: pick(rng, JOB_TITLES).to_string(),
            company: company_name(rng),
            avatar_url: format!("https://i.pravatar.cc/150?img={}", rng.gen_range(1..=70)),
        })
        .collect()
}

pub fn team_members<R: Rng>(rng: &mut R, count: usize) -> Vec<TeamMember> {
    (0..count)
        .map(|_| TeamMember {
            name: full_name(rng),
            title: pick(rng, JOB_TITLES).to_string(),
            avatar_url: format!(
                "https://avatars.githubusercontent.com/u/{}",
                rng.gen_range(1_000..10_000_000)
            ),
        })
        .collect()
}

pub fn risk_feed<R: Rng>(rng: &mut R, count: usize) -> Vec<RiskUpdate> {
    (0..count)
        .map(|_| {
            let origin = pick(rng, PORT_CODES);
            let destination = loop {
                let candidate = pick(rng, PORT_CODES);
                if candidate != origin {
                    break candidate;
                }
            };
            let tenths: u32 = rng.gen_range(10..=95);
            RiskUpdate {
                route: format!("{}-{}", origin, destination),
                score: tenths as f64 / 10.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_follow_request() {
        let mut rng = page_rng(7);
        assert_eq!(partner_names(&mut rng, 6).len(), 6);
        assert_eq!(testimonials(&mut rng, 3).len(), 3);
        assert_eq!(team_members(&mut rng, 4).len(), 4);
        assert!(team_members(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_records_have_every_field() {
        let mut rng = page_rng(11);
        for t in testimonials(&mut rng, 5) {
            assert!(!t.quote.is_empty());
            assert_eq!(t.name.split(' ').count(), 2);
            assert!(!t.title.is_empty());
            assert!(!t.company.is_empty());
            assert!(t.avatar_url.starts_with("https://"));
        }
    }

    #[test]
    fn test_risk_feed_routes_and_scores() {
        let feed = risk_feed(&mut page_rng(3), 5);
        assert_eq!(feed.len(), 5);
        for update in feed {
            let (from, to) = update.route.split_once('-').unwrap();
            assert_ne!(from, to);
            assert!((1.0..=9.5).contains(&update.score));
        }
    }

    #[test]
    fn test_severity_bands() {
        let update = |score| RiskUpdate { route: "SGP-LAX".into(), score };
        assert_eq!(update(8.1).severity_class(), "text-red-600");
        assert_eq!(update(6.8).severity_class(), "text-yellow-600");
        assert_eq!(update(2.0).severity_class(), "text-green-600");
    }

    #[test]
    fn test_same_seed_same_records() {
        let a = testimonials(&mut page_rng(42), 3);
        let b = testimonials(&mut page_rng(42), 3);
        assert_eq!(a, b);
    }
}
