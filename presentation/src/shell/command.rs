//! Shell command parsing
//!
//! Lines starting with `/` are commands. Anything else is the screen's
//! primary input: a role on role-select, a tool on the dashboard, a chat
//! message on a tool screen, and the next drill-down step in the labs.

use biogenie_domain::{
    Action, AppState, FeatureCatalog, LabCatalog, LabTab, LabView, PendingOperation, Role, Screen,
};
use std::str::FromStr;

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Quit,
    Show,
    Back,
    Dismiss,
    Logout,
    Guest,
    Login,
    Signup,
    Forgot,
    /// Fill in and send the form on the current auth screen
    Submit,
    Role(Role),
    Open(String),
    Close,
    Message(String),
    Class(String),
    Lab(String),
    Tab(LabTab),
    /// Resolve the simulation video again
    Retry,
}

fn number(arg: &str) -> Option<usize> {
    arg.parse().ok()
}

fn role(arg: &str) -> Result<Role, String> {
    if arg.is_empty() {
        return Err("Usage: /role <student|teacher|public|labs>".to_string());
    }
    if let Some(n) = number(arg) {
        return n
            .checked_sub(1)
            .and_then(|i| Role::KNOWN.get(i))
            .cloned()
            .ok_or_else(|| format!("No role numbered {}", n));
    }
    Ok(Role::from_str(arg).unwrap_or_else(|never| match never {}))
}

fn feature(state: &AppState, arg: &str) -> Result<String, String> {
    let Some(role) = state.role.as_ref() else {
        return Err("Pick a role first".to_string());
    };
    if arg.is_empty() {
        return Err("Usage: /open <number|title>".to_string());
    }
    let card = match number(arg) {
        Some(n) => FeatureCatalog::nth(role, n),
        None => FeatureCatalog::for_role(role)
            .iter()
            .find(|c| c.title.eq_ignore_ascii_case(arg)),
    };
    card.map(|c| c.title.to_string())
        .ok_or_else(|| format!("No tool '{}' on the {} dashboard", arg, role))
}

fn class(arg: &str) -> Result<String, String> {
    if arg.is_empty() {
        return Err("Usage: /class <number|id>".to_string());
    }
    let classes = LabCatalog::classes();
    match number(arg) {
        Some(n @ 9..=12) => Ok(format!("class-{}", n)),
        Some(n) => n
            .checked_sub(1)
            .and_then(|i| classes.get(i))
            .map(|c| c.id.to_string())
            .ok_or_else(|| format!("No class numbered {}", n)),
        None => Ok(arg.to_string()),
    }
}

fn lab(state: &AppState, arg: &str) -> Result<String, String> {
    if arg.is_empty() {
        return Err("Usage: /lab <number|id>".to_string());
    }
    match number(arg) {
        Some(n) => {
            let class_id = state.labs.class_id().unwrap_or_default();
            n.checked_sub(1)
                .and_then(|i| LabCatalog::experiments(class_id).get(i))
                .map(|e| e.id.to_string())
                .ok_or_else(|| format!("No experiment numbered {}", n))
        }
        None => Ok(arg.to_string()),
    }
}

fn tab(arg: &str) -> Result<LabTab, String> {
    match number(arg) {
        Some(n) => n
            .checked_sub(1)
            .and_then(|i| LabTab::ALL.get(i))
            .copied()
            .ok_or_else(|| format!("No tab numbered {}", n)),
        None => LabTab::from_str(&arg.to_lowercase()).map_err(|e| e.to_string()),
    }
}

impl ShellCommand {
    /// Parse a non-empty, trimmed line in the context of `state`
    pub fn parse(line: &str, state: &AppState) -> Result<Self, String> {
        if let Some(command) = line.strip_prefix('/') {
            let (name, arg) = command
                .split_once(char::is_whitespace)
                .map(|(n, a)| (n, a.trim()))
                .unwrap_or((command, ""));

            return match name {
                "help" | "h" | "?" => Ok(ShellCommand::Help),
                "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
                "show" | "ls" => Ok(ShellCommand::Show),
                "back" | "b" => Ok(ShellCommand::Back),
                "dismiss" => Ok(ShellCommand::Dismiss),
                "logout" => Ok(ShellCommand::Logout),
                "guest" => Ok(ShellCommand::Guest),
                "login" => Ok(ShellCommand::Login),
                "signup" => Ok(ShellCommand::Signup),
                "forgot" => Ok(ShellCommand::Forgot),
                "submit" => Ok(ShellCommand::Submit),
                "role" => role(arg).map(ShellCommand::Role),
                "open" => feature(state, arg).map(ShellCommand::Open),
                "close" => Ok(ShellCommand::Close),
                "class" => class(arg).map(ShellCommand::Class),
                "lab" => lab(state, arg).map(ShellCommand::Lab),
                "tab" => tab(arg).map(ShellCommand::Tab),
                "retry" | "play" => Ok(ShellCommand::Retry),
                _ => Err(format!("Unknown command: /{}", name)),
            };
        }

        match state.screen {
            Screen::RoleSelect => role(line).map(ShellCommand::Role),
            Screen::Dashboard => feature(state, line).map(ShellCommand::Open),
            Screen::FeatureDetail => Ok(ShellCommand::Message(line.to_string())),
            Screen::LabCatalog => match state.labs.view() {
                LabView::Classes(_) => class(line).map(ShellCommand::Class),
                LabView::Experiments { .. } => lab(state, line).map(ShellCommand::Lab),
                LabView::Detail { .. } => tab(line).map(ShellCommand::Tab),
            },
            _ => Err("Type /help to see what you can do here".to_string()),
        }
    }
}

/// Commands available on the current screen, as `(usage, description)`
pub fn help_lines(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let intents = [
        (Action::ContinueAsGuest, "/guest", "Continue as guest"),
        (Action::ShowLogin, "/login", "Open the sign-in form"),
        (Action::ShowSignup, "/signup", "Open the sign-up form"),
        (Action::ShowPasswordReset, "/forgot", "Reset a forgotten password"),
        (
            Action::SelectRole(Role::Student),
            "<n|role>",
            "Choose student, teacher, public or labs",
        ),
        (Action::OpenFeature(String::new()), "<n|title>", "Open a tool"),
        (Action::SendMessage(String::new()), "<message>", "Send a message"),
        (Action::CloseFeature, "/close", "Close this tool"),
        (Action::SelectClass(String::new()), "/class <n|id>", "Choose a class"),
        (Action::OpenLab(String::new()), "/lab <n|id>", "Open an experiment"),
        (
            Action::SelectTab(LabTab::Theory),
            "/tab <n|name>",
            "Theory, procedure, guide, viva or simulation",
        ),
    ];

    let mut lines: Vec<_> = intents
        .into_iter()
        .filter(|(action, _, _)| action.is_exposed_on(state.screen))
        .map(|(_, usage, description)| (usage, description))
        .collect();

    let has_form = [
        PendingOperation::Login,
        PendingOperation::Signup,
        PendingOperation::PasswordReset,
        PendingOperation::PasswordUpdate,
    ]
    .iter()
    .any(|op| op.form_screen() == Some(state.screen));
    if has_form {
        lines.push(("/submit", "Fill in and send this form"));
    }

    if state.screen == Screen::LabCatalog && state.labs.tab() == LabTab::Simulation {
        lines.push(("/retry", "Load the simulation video again"));
    }
    if state.notice.is_some() {
        lines.push(("/dismiss", "Hide the message"));
    }
    if state.session.is_authenticated() {
        lines.push(("/logout", "Sign out"));
    }

    lines.push(("/back", "Go back"));
    lines.push(("/show", "Show this screen again"));
    lines.push(("/help", "Show this help"));
    lines.push(("/quit", "Exit"));
    lines
}
