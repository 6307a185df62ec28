//! Console rendering of the client state

use biogenie_domain::{
    AppState, LabCatalog, LabDetail, LabTab, LabView, Notice, Role, Screen, Speaker, VideoState,
};
use colored::Colorize;

const TAGLINE: &str = "A personalized biotechnology learning assistant designed for students, \
teachers, and the public. Curriculum aligned and rural friendly.";

/// Renders each screen of [`AppState`] as plain terminal text
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render the active screen, followed by any notice
    pub fn render(state: &AppState) -> String {
        let mut output = match state.screen {
            Screen::Landing => Self::landing(),
            Screen::Login => Self::form(
                "Sign In",
                &["email", "password"],
                "/submit to sign in, /signup for a new account, /forgot to reset your password",
            ),
            Screen::Signup => Self::form(
                "Create Account",
                &["full name", "email", "password"],
                "/submit to create the account, /login if you already have one",
            ),
            Screen::Reset => Self::form(
                "Reset Password",
                &["email"],
                "/submit to receive a reset link, /back to sign in",
            ),
            Screen::UpdatePassword => Self::form(
                "Set New Password",
                &["new password"],
                "/submit to save the new password",
            ),
            Screen::RoleSelect => Self::role_select(),
            Screen::Dashboard => Self::dashboard(state),
            Screen::FeatureDetail => Self::feature_detail(state),
            Screen::LabCatalog => Self::lab_catalog(state),
        };

        if let Some(notice) = &state.notice {
            output.push('\n');
            output.push_str(&Self::notice(notice));
            output.push('\n');
        }

        output
    }

    /// One-line account status for the welcome banner
    pub fn status(state: &AppState) -> String {
        if state.session.is_authenticated() {
            format!("Signed in as {}", state.session.display_name())
        } else {
            "Guest".to_string()
        }
    }

    pub fn notice(notice: &Notice) -> String {
        match notice {
            Notice::Info(text) => format!("{} {}", "i".cyan().bold(), text),
            Notice::Error(text) => format!("{} {}", "!".red().bold(), text.red()),
        }
    }

    fn landing() -> String {
        let mut output = Self::header("BioGenie");
        output.push_str(&format!("\n{}\n\n", TAGLINE));
        output.push_str(&format!(
            "  {}  Continue as Guest\n  {}  Sign In\n  {} Sign Up\n",
            "/guest".green().bold(),
            "/login".cyan(),
            "/signup".cyan()
        ));
        output
    }

    fn form(title: &str, fields: &[&str], hint: &str) -> String {
        let mut output = Self::section_header(title);
        output.push_str(&format!(
            "{} {}\n",
            "Fields:".dimmed(),
            fields.join(", ")
        ));
        output.push_str(&format!("{}\n", hint.dimmed()));
        output
    }

    fn role_select() -> String {
        let mut output = Self::section_header("Choose Your Role");
        for (i, role) in Role::KNOWN.iter().enumerate() {
            output.push_str(&format!(
                "  {} {:<8} {}\n",
                format!("{}.", i + 1).bold(),
                role.title().green().bold(),
                role.description()
            ));
        }
        output.push_str(&format!("\n{}\n", "Type a number or a role name.".dimmed()));
        output
    }

    fn dashboard(state: &AppState) -> String {
        let role = state.role.as_ref().map(Role::as_str).unwrap_or_default();
        let mut output = Self::section_header(&format!("{} DASHBOARD", role.to_uppercase()));

        let cards = state.feature_cards();
        if cards.is_empty() {
            output.push_str(&format!("{}\n", "Nothing here yet.".dimmed()));
            return output;
        }
        for (i, card) in cards.iter().enumerate() {
            output.push_str(&format!(
                "  {:>2}. {}\n",
                i + 1,
                card.title.green()
            ));
        }
        output.push_str(&format!(
            "\n{}\n",
            "Type a number or title to open a tool.".dimmed()
        ));
        output
    }

    fn feature_detail(state: &AppState) -> String {
        let title = state.feature.as_deref().unwrap_or_default();
        let mut output = Self::section_header(title);

        if let Some(transcript) = &state.transcript {
            for entry in transcript.entries() {
                match entry.speaker {
                    Speaker::User => {
                        output.push_str(&format!("{:>60}\n", format!("{} :you", entry.text)))
                    }
                    Speaker::Assistant => output.push_str(&format!(
                        "{} {}\n",
                        "bot:".cyan().bold(),
                        entry.text
                    )),
                }
            }
        }
        output.push_str(&format!(
            "\n{}\n",
            "Type a message, or /back to return.".dimmed()
        ));
        output
    }

    fn lab_catalog(state: &AppState) -> String {
        match state.labs.view() {
            LabView::Classes(classes) => {
                let mut output = Self::header("NCERT Virtual Labs");
                output.push_str(&format!(
                    "\n{}\n\n",
                    "Biotechnology Experiments - Class 9 to 12".dimmed()
                ));
                for (i, class) in classes.iter().enumerate() {
                    output.push_str(&format!(
                        "  {}. {:<28} {}\n",
                        i + 1,
                        class.title.green().bold(),
                        format!("{} Experiments", LabCatalog::experiments(class.id).len())
                            .cyan()
                    ));
                }
                output
            }
            LabView::Experiments {
                class_id,
                class,
                experiments,
            } => {
                let title = class.map(|c| c.title).unwrap_or(class_id);
                let mut output = Self::section_header(title);
                output.push_str(&format!("{} Experiments\n\n", experiments.len()));
                for (i, lab) in experiments.iter().enumerate() {
                    output.push_str(&format!(
                        "  {}. {} {}\n",
                        i + 1,
                        lab.title.green(),
                        format!("[{}]", lab.kind.as_str().to_uppercase()).cyan()
                    ));
                }
                output
            }
            LabView::Detail { lab_id, detail, tab } => {
                Self::lab_detail(lab_id, detail, tab, &state.video)
            }
        }
    }

    fn lab_detail(lab_id: &str, detail: &LabDetail, tab: LabTab, video: &VideoState) -> String {
        let name = if detail.name.is_empty() {
            lab_id
        } else {
            detail.name
        };
        let tabs: Vec<String> = LabTab::ALL
            .iter()
            .map(|t| {
                if *t == tab {
                    format!("[{}]", t.label()).green().bold().to_string()
                } else {
                    t.label().to_string()
                }
            })
            .collect();

        let mut output = String::new();
        output.push_str(&format!("{}\n", tabs.join("  ")));

        match tab {
            LabTab::Theory => {
                output.push_str(&Self::section_header(name));
                output.push_str(&format!("{}\n", detail.theory));
            }
            LabTab::Procedure => {
                output.push_str(&Self::section_header(&format!("{} - Procedure", name)));
                for (i, step) in detail.procedure.iter().enumerate() {
                    output.push_str(&format!("  {}. {}\n", i + 1, step));
                }
            }
            LabTab::Guide => {
                output.push_str(&Self::section_header(&format!("{} - Practical Guide", name)));
                output.push_str(&format!("{}\n", detail.guide));
            }
            LabTab::Viva => {
                output.push_str(&Self::section_header(&format!("{} - Viva Questions", name)));
                for (i, pair) in detail.viva.iter().enumerate() {
                    output.push_str(&format!(
                        "  {} {}\n      {}\n",
                        format!("Q{}:", i + 1).bold(),
                        pair.question,
                        pair.answer.green()
                    ));
                }
            }
            LabTab::Simulation => {
                output.push_str(&Self::section_header(&format!("{} - Simulation", name)));
                output.push_str(&Self::video(video));
            }
        }
        output
    }

    pub fn video(video: &VideoState) -> String {
        match video {
            VideoState::Idle => format!("{}\n", "Video not loaded.".dimmed()),
            VideoState::Loading { object_key } => format!("Loading {}...\n", object_key),
            VideoState::Ready { url, .. } => {
                format!("{} {}\n", "Play:".green().bold(), url)
            }
            VideoState::Unavailable { object_key } => format!(
                "{}\n{}\n{}\n",
                "Video Not Found".red().bold(),
                object_key.dimmed(),
                "/retry to try again".dimmed()
            ),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
