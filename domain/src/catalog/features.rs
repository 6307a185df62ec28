//! Feature ("gem") catalog per role

use super::role::Role;
use serde::Serialize;

/// A single feature card on a role dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub icon: &'static str,
}

const fn card(title: &'static str, icon: &'static str) -> FeatureCard {
    FeatureCard { title, icon }
}

static STUDENT: [FeatureCard; 9] = [
    card("PPT Maker", "https://cdn-icons-png.flaticon.com/512/888/888879.png"),
    card("Notes Generator", "https://cdn-icons-png.flaticon.com/512/2921/2921222.png"),
    card("Summarizer", "https://cdn-icons-png.flaticon.com/512/2991/2991108.png"),
    card("Story Generation", "https://cdn-icons-png.flaticon.com/512/3145/3145765.png"),
    card("Exam Preparation", "https://cdn-icons-png.flaticon.com/512/3135/3135755.png"),
    card(
        "Previous Year Question Paper",
        "https://cdn-icons-png.flaticon.com/512/3239/3239952.png",
    ),
    card("Timetable Generator", "https://cdn-icons-png.flaticon.com/512/747/747310.png"),
    card("Doubt Solver", "https://cdn-icons-png.flaticon.com/512/4712/4712027.png"),
    card("Diagram Generator", "https://cdn-icons-png.flaticon.com/512/2103/2103633.png"),
];

static TEACHER: [FeatureCard; 8] = [
    card("Lesson Plan Generator", "https://cdn-icons-png.flaticon.com/512/3135/3135789.png"),
    card("Question Paper Generator", "https://cdn-icons-png.flaticon.com/512/2920/2920277.png"),
    card("Answer Key Generator", "https://cdn-icons-png.flaticon.com/512/190/190411.png"),
    card("PPT Maker", "https://cdn-icons-png.flaticon.com/512/888/888879.png"),
    card("Assignment Generator", "https://cdn-icons-png.flaticon.com/512/1828/1828919.png"),
    card(
        "Student Performance Analyzer",
        "https://cdn-icons-png.flaticon.com/512/1828/1828911.png",
    ),
    card("Doubt Clearance", "https://cdn-icons-png.flaticon.com/512/4712/4712027.png"),
    card(
        "Interactive Session For Students",
        "https://cdn-icons-png.flaticon.com/512/3063/3063825.png",
    ),
];

static PUBLIC: [FeatureCard; 5] = [
    card("Biotech Awareness", "https://cdn-icons-png.flaticon.com/512/2784/2784487.png"),
    card("Biotech in Daily Life", "https://cdn-icons-png.flaticon.com/512/2965/2965567.png"),
    card("Health & Medicine Biotech", "https://cdn-icons-png.flaticon.com/512/2966/2966327.png"),
    card("Agriculture Biotech", "https://cdn-icons-png.flaticon.com/512/2909/2909762.png"),
    card("News Simplifier", "https://cdn-icons-png.flaticon.com/512/2965/2965879.png"),
];

/// Static role → feature list mapping
pub struct FeatureCatalog;

impl FeatureCatalog {
    /// Cards shown on a role's dashboard, in display order.
    ///
    /// Labs has no card grid (it opens the lab catalog) and unknown roles
    /// have nothing to show; both yield an empty slice.
    pub fn for_role(role: &Role) -> &'static [FeatureCard] {
        match role {
            Role::Student => &STUDENT,
            Role::Teacher => &TEACHER,
            Role::Public => &PUBLIC,
            Role::Labs | Role::Other(_) => &[],
        }
    }

    /// Look up a card by title (exact match) within a role's dashboard
    pub fn find(role: &Role, title: &str) -> Option<&'static FeatureCard> {
        Self::for_role(role).iter().find(|c| c.title == title)
    }

    /// Resolve a card by 1-based position, the way the shell addresses cards
    pub fn nth(role: &Role, position: usize) -> Option<&'static FeatureCard> {
        position
            .checked_sub(1)
            .and_then(|i| Self::for_role(role).get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(FeatureCatalog::for_role(&Role::Student).len(), 9);
        assert_eq!(FeatureCatalog::for_role(&Role::Teacher).len(), 8);
        assert_eq!(FeatureCatalog::for_role(&Role::Public).len(), 5);
    }

    #[test]
    fn test_labs_and_unknown_are_empty() {
        assert!(FeatureCatalog::for_role(&Role::Labs).is_empty());
        assert!(FeatureCatalog::for_role(&Role::Other("guest".into())).is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let student = FeatureCatalog::for_role(&Role::Student);
        assert_eq!(student[0].title, "PPT Maker");
        assert_eq!(student[8].title, "Diagram Generator");
    }

    #[test]
    fn test_find_and_nth() {
        assert!(FeatureCatalog::find(&Role::Teacher, "PPT Maker").is_some());
        assert!(FeatureCatalog::find(&Role::Public, "PPT Maker").is_none());
        assert_eq!(
            FeatureCatalog::nth(&Role::Public, 5).map(|c| c.title),
            Some("News Simplifier")
        );
        assert!(FeatureCatalog::nth(&Role::Public, 0).is_none());
        assert!(FeatureCatalog::nth(&Role::Public, 6).is_none());
    }
}
