//! Role value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Audience a dashboard is built for (Value Object)
///
/// Unrecognised tags are kept as [`Role::Other`] instead of being rejected;
/// they resolve to an empty feature list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Teacher,
    Public,
    Labs,
    Other(String),
}

impl Role {
    /// The four roles offered on the role picker, in display order
    pub const KNOWN: [Role; 4] = [Role::Student, Role::Teacher, Role::Public, Role::Labs];

    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Public => "public",
            Role::Labs => "labs",
            Role::Other(s) => s,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Public => "Public",
            Role::Labs => "Labs",
            Role::Other(s) => s,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Student => "Notes, Exams, Concept Help",
            Role::Teacher => "Lesson Plans, Question Papers, Analytics",
            Role::Public => "Biotech Awareness, Real Life Applications",
            Role::Labs => "Virtual Labs, Simulations, Experiment Guidance",
            Role::Other(_) => "",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Role::Student => "https://cdn-icons-png.flaticon.com/512/3135/3135755.png",
            Role::Teacher => "https://cdn-icons-png.flaticon.com/512/3135/3135789.png",
            Role::Public => "https://cdn-icons-png.flaticon.com/512/4140/4140048.png",
            Role::Labs => "https://cdn-icons-png.flaticon.com/512/2784/2784487.png",
            Role::Other(_) => "",
        }
    }

    /// Labs opens the lab catalog instead of a feature-card dashboard
    pub fn opens_lab_catalog(&self) -> bool {
        matches!(self, Role::Labs)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Other(_))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Ok(match tag.as_str() {
            "student" => Role::Student,
            "teacher" => Role::Teacher,
            "public" => Role::Public,
            "labs" | "lab" => Role::Labs,
            _ => Role::Other(tag),
        })
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(Role::Other(s)))
    }
}
