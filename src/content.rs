//! Typed page content. Every value the interactive pieces read (bar widths,
//! counter targets, start dates, taglines) is validated here when the page
//! content is built, instead of being parsed out of markup attributes.

use chrono::NaiveDate;
use log::debug;

use crate::animation::ProgressTarget;
use crate::error::Result;
use crate::experience::{ExperienceDisplay, ExperienceEntry};
use crate::tagline::TaglineSequence;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: ProgressTarget,
}

impl Skill {
    pub fn new(name: &'static str, percent: u32) -> Result<Self> {
        Ok(Self {
            name,
            level: ProgressTarget::new(percent)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub target: u64,
    pub suffix: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub join: &'static str,
    pub summary: &'static str,
}

impl Experience {
    /// Rendered slots, or `None` when the start date can't be parsed and the
    /// entry should keep its static text.
    pub fn display(&self, now: NaiveDate) -> Option<ExperienceDisplay> {
        match ExperienceEntry::parse(self.join) {
            Ok(entry) => Some(entry.render(now)),
            Err(error) => {
                debug!("experience entry for {} left as-is: {error}", self.company);
                None
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioContent {
    pub owner: &'static str,
    pub nav: Vec<NavLink>,
    pub taglines: TaglineSequence,
    pub skills: Vec<Skill>,
    pub stats: Vec<Stat>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Card>,
    pub certifications: Vec<Card>,
}

impl PortfolioContent {
    pub fn portfolio() -> Result<Self> {
        Ok(Self {
            owner: "Jordan Avery",
            nav: vec![
                NavLink { label: "About", href: "#about" },
                NavLink { label: "Skills", href: "#skills" },
                NavLink { label: "Experience", href: "#experience" },
                NavLink { label: "Projects", href: "#projects" },
                NavLink { label: "Contact", href: "#contact" },
            ],
            taglines: TaglineSequence::default(),
            skills: vec![
                Skill::new("Python", 92)?,
                Skill::new("SQL", 88)?,
                Skill::new("Machine Learning", 80)?,
                Skill::new("Data Visualization", 85)?,
                Skill::new("ETL Pipelines", 78)?,
            ],
            stats: vec![
                Stat { label: "Projects shipped", target: 24, suffix: "+" },
                Stat { label: "Dashboards built", target: 40, suffix: "+" },
                Stat { label: "Certifications", target: 6, suffix: "" },
                Stat { label: "Cups of coffee", target: 1250, suffix: "" },
            ],
            experiences: vec![
                Experience {
                    role: "Data Analyst",
                    company: "Northwind Analytics",
                    join: "2023-08-14",
                    summary: "Builds forecasting models and self-serve reporting for operations teams.",
                },
                Experience {
                    role: "Data Engineering Intern",
                    company: "Blue Harbor Labs",
                    join: "2022-05",
                    summary: "Moved nightly batch jobs to incremental ETL with data quality checks.",
                },
            ],
            projects: vec![
                Card {
                    title: "Churn Radar",
                    description: "Gradient-boosted churn model with an explainability dashboard.",
                    tags: &["Python", "XGBoost", "Streamlit"],
                },
                Card {
                    title: "Transit Pulse",
                    description: "Real-time ridership visualisation from open transit feeds.",
                    tags: &["SQL", "D3.js", "Airflow"],
                },
                Card {
                    title: "Retail Demand Forecast",
                    description: "Store-level weekly demand forecasting with hierarchical models.",
                    tags: &["Prophet", "pandas", "dbt"],
                },
            ],
            certifications: vec![
                Card {
                    title: "Google Data Analytics",
                    description: "Professional certificate covering the full analysis workflow.",
                    tags: &["Analytics"],
                },
                Card {
                    title: "AWS Cloud Practitioner",
                    description: "Foundational cloud concepts, pricing and core services.",
                    tags: &["Cloud"],
                },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use crate::scroll::fragment_target;

    #[test]
    fn portfolio_content_is_valid() {
        let content = PortfolioContent::portfolio().expect("static content validates");

        assert!(!content.skills.is_empty());
        assert!(content
            .skills
            .iter()
            .all(|skill| skill.level.percent() <= 100));
    }

    #[test]
    fn nav_links_are_same_page_fragments() {
        let content = PortfolioContent::portfolio().expect("static content validates");

        for link in &content.nav {
            assert!(fragment_target(link.href).is_some(), "{} is not a fragment", link.href);
        }
    }

    #[test]
    fn skill_with_invalid_level_is_rejected() {
        assert_eq!(
            Skill::new("Rust", 120),
            Err(ContentError::PercentageOutOfRange { value: 120 })
        );
    }

    #[test]
    fn experience_with_bad_date_keeps_static_text() {
        let experience = Experience {
            role: "Analyst",
            company: "Example Co",
            join: "last spring",
            summary: "",
        };
        let now = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");

        assert_eq!(experience.display(now), None);
    }

    #[test]
    fn experience_accepts_local_date_time_and_year() {
        let now = NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date");

        for join in ["2024-01-01T08:00:00", "2024"] {
            let experience = Experience {
                role: "Analyst",
                company: "Example Co",
                join,
                summary: "",
            };
            let display = experience.display(now).expect("parseable date");

            assert_eq!(display.joined, "Jan 1, 2024");
            assert_eq!(display.total_months, 13);
        }
    }

    #[test]
    fn experience_display_uses_start_date() {
        let experience = Experience {
            role: "Analyst",
            company: "Example Co",
            join: "2024-01",
            summary: "",
        };
        let now = NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date");
        let display = experience.display(now).expect("parseable date");

        assert_eq!(display.duration, "1 year 1 month");
        assert_eq!(display.total_months, 13);
        assert_eq!(display.joined, "Jan 1, 2024");
    }
}
