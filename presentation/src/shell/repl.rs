//! Interactive shell driving the session controller

use super::command::{ShellCommand, help_lines};
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use biogenie_application::{
    AuthService, Dispatch, ObjectStorage, ResolveLabVideoUseCase, SessionController, SessionError,
};
use biogenie_domain::{Action, AppState, LabTab, Screen, video_object_key};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::debug;

enum Flow {
    Continue,
    Exit,
}

/// Line-oriented front end for the client
pub struct Shell<A: AuthService + 'static, S: ObjectStorage + 'static> {
    controller: Arc<SessionController<A>>,
    videos: ResolveLabVideoUseCase<S>,
    config: ReplConfig,
    output: OutputConfig,
    progress: Option<ProgressReporter>,
}

impl<A: AuthService + 'static, S: ObjectStorage + 'static> Shell<A, S> {
    pub fn new(controller: Arc<SessionController<A>>, videos: ResolveLabVideoUseCase<S>) -> Self {
        Self {
            controller,
            videos,
            config: ReplConfig::default(),
            output: OutputConfig::default(),
            progress: Some(ProgressReporter::new()),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.progress = config.show_progress.then(ProgressReporter::new);
        self.config = config;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Run the interactive shell
    pub async fn run(&self) -> RlResult<()> {
        self.output.apply();
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        self.show();

        loop {
            match rl.readline(&self.prompt()) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if let Flow::Exit = self.handle(line, &mut rl).await? {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│     BioGenie - Biotech Learning Assistant   │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::status(&self.controller.state()).dimmed());
        println!("Type /help for the commands on each screen.");
    }

    fn prompt(&self) -> String {
        let state = self.controller.state();
        let who = if state.session.is_authenticated() {
            state.session.display_name().to_string()
        } else {
            "guest".to_string()
        };
        format!("{}@{}> ", who, state.screen)
    }

    fn show(&self) {
        println!("{}", ConsoleFormatter::render(&self.controller.state()));
    }

    fn print_help(&self, state: &AppState) {
        println!();
        println!("{} {}", "Commands on".bold(), state.screen.to_string().cyan());
        for (usage, description) in help_lines(state) {
            println!("  {:<16} - {}", usage, description);
        }
        println!();
    }

    async fn handle(&self, line: &str, rl: &mut DefaultEditor) -> RlResult<Flow> {
        let before = self.controller.state();

        let command = match ShellCommand::parse(line, &before) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.yellow());
                return Ok(Flow::Continue);
            }
        };

        let dispatch = match command {
            ShellCommand::Help => {
                self.print_help(&before);
                return Ok(Flow::Continue);
            }
            ShellCommand::Quit => {
                println!("Bye!");
                return Ok(Flow::Exit);
            }
            ShellCommand::Show => {
                self.show();
                return Ok(Flow::Continue);
            }
            ShellCommand::Submit => self.submit(before.screen, rl).await?,
            command => self.execute(command).await,
        };

        if dispatch == Dispatch::Ignored {
            println!("{}", "Not available here. Type /help for options.".yellow());
        }
        if self.controller.state() != before {
            self.show();
        }
        Ok(Flow::Continue)
    }

    /// Apply a command that needs no further input
    async fn execute(&self, command: ShellCommand) -> Dispatch {
        let c = &self.controller;
        match command {
            ShellCommand::Back => c.navigate_back(),
            ShellCommand::Dismiss => c.dispatch(Action::DismissNotice),
            ShellCommand::Logout => c.logout().await,
            ShellCommand::Guest => c.continue_as_guest(),
            ShellCommand::Login => c.show_login(),
            ShellCommand::Signup => c.show_signup(),
            ShellCommand::Forgot => c.show_password_reset(),
            ShellCommand::Role(role) => c.select_role(role),
            ShellCommand::Open(title) => c.open_feature(title),
            ShellCommand::Close => c.close_feature(),
            ShellCommand::Message(text) => c.send_message(text),
            ShellCommand::Class(id) => c.select_class(id),
            ShellCommand::Lab(id) => c.open_lab(id),
            ShellCommand::Tab(tab) => {
                let dispatch = c.select_tab(tab);
                if dispatch.is_applied() && tab == LabTab::Simulation {
                    self.load_video().await;
                }
                dispatch
            }
            ShellCommand::Retry => self.load_video().await,
            ShellCommand::Help | ShellCommand::Quit | ShellCommand::Show | ShellCommand::Submit => {
                Dispatch::Ignored
            }
        }
    }

    /// Resolve the open lab's simulation video
    async fn load_video(&self) -> Dispatch {
        let state = self.controller.state();
        let Some(lab_id) = state.labs.lab_id().map(str::to_string) else {
            return Dispatch::Ignored;
        };
        if state.screen != Screen::LabCatalog || state.labs.tab() != LabTab::Simulation {
            return Dispatch::Ignored;
        }

        self.controller
            .dispatch(Action::VideoUpdated(ResolveLabVideoUseCase::<S>::loading(&lab_id)));
        if let Some(progress) = &self.progress {
            progress.start(format!("Loading {}...", video_object_key(&lab_id)));
        }

        let video = self.videos.execute(&lab_id).await;

        if let Some(progress) = &self.progress {
            progress.stop();
        }
        self.controller.dispatch(Action::VideoUpdated(video))
    }

    /// Prompt for the fields of the current form and send it
    async fn submit(&self, screen: Screen, rl: &mut DefaultEditor) -> RlResult<Dispatch> {
        let fields = form_fields(screen);
        if fields.is_empty() {
            return Ok(Dispatch::Ignored);
        }

        let mut values = Vec::with_capacity(fields.len());
        for field in fields {
            let value = if field.secret {
                ask_secret(field.prompt)?
            } else {
                ask(rl, field.prompt)?
            };
            let Some(value) = value else {
                return Ok(cancelled());
            };
            values.push(value);
        }

        let c = &self.controller;
        let result = match (screen, values.as_slice()) {
            (Screen::Login, [email, password]) => c.login(email, password).await,
            (Screen::Signup, [name, email, password]) => c.signup(name, email, password).await,
            (Screen::Reset, [email]) => c.request_password_reset(email).await,
            (Screen::UpdatePassword, [password]) => c.complete_password_reset(password).await,
            _ => return Ok(Dispatch::Ignored),
        };

        Ok(outcome(result))
    }
}

/// One input of an auth form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormField {
    prompt: &'static str,
    /// Read without echo
    secret: bool,
}

const fn field(prompt: &'static str) -> FormField {
    FormField {
        prompt,
        secret: false,
    }
}

const fn secret(prompt: &'static str) -> FormField {
    FormField {
        prompt,
        secret: true,
    }
}

static LOGIN_FIELDS: [FormField; 2] = [field("Email: "), secret("Password: ")];
static SIGNUP_FIELDS: [FormField; 3] = [
    field("Full name: "),
    field("Email: "),
    secret("Password: "),
];
static RESET_FIELDS: [FormField; 1] = [field("Email: ")];
static UPDATE_PASSWORD_FIELDS: [FormField; 1] = [secret("New password: ")];

/// Inputs of the form shown on `screen`, in prompt order
fn form_fields(screen: Screen) -> &'static [FormField] {
    match screen {
        Screen::Login => &LOGIN_FIELDS,
        Screen::Signup => &SIGNUP_FIELDS,
        Screen::Reset => &RESET_FIELDS,
        Screen::UpdatePassword => &UPDATE_PASSWORD_FIELDS,
        _ => &[],
    }
}

fn cancelled() -> Dispatch {
    println!("Cancelled");
    Dispatch::Applied
}

// Failures are already on screen as the state's notice.
fn outcome(result: Result<Dispatch, SessionError>) -> Dispatch {
    match result {
        Ok(dispatch) => dispatch,
        Err(e) => {
            debug!("Form submission failed: {}", e);
            Dispatch::Applied
        }
    }
}

/// Read one form field; `None` when the user aborts with Ctrl-C or Ctrl-D
fn ask(rl: &mut DefaultEditor, prompt: &str) -> RlResult<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Read a password with echo turned off; `None` on end of input
fn ask_secret(prompt: &str) -> RlResult<Option<String>> {
    match rpassword::prompt_password(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(ReadlineError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use biogenie_application::{AuthError, AuthSession, BehaviorConfig, SignUpProfile, StorageError};
    use biogenie_domain::{Credentials, NewPassword, Profile, Role, VideoState};

    struct NoAuth;

    #[async_trait]
    impl AuthService for NoAuth {
        async fn current_session(&self) -> Result<Option<AuthSession>, AuthError> {
            Ok(None)
        }
        async fn sign_up(&self, _: &Credentials, _: &SignUpProfile) -> Result<(), AuthError> {
            Ok(())
        }
        async fn sign_in(&self, _: &Credentials) -> Result<(), AuthError> {
            Ok(())
        }
        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }
        async fn request_password_reset(&self, _: &str, _: &str) -> Result<(), AuthError> {
            Ok(())
        }
        async fn update_password(&self, _: &NewPassword) -> Result<(), AuthError> {
            Ok(())
        }
        async fn current_user(&self) -> Result<Option<Profile>, AuthError> {
            Ok(None)
        }
    }

    struct FixedStorage {
        available: bool,
    }

    #[async_trait]
    impl ObjectStorage for FixedStorage {
        fn public_url(&self, bucket: &str, object_key: &str) -> Option<String> {
            self.available
                .then(|| format!("https://cdn/{}/{}", bucket, object_key))
        }

        async fn is_playable(&self, _url: &str) -> Result<bool, StorageError> {
            Ok(self.available)
        }
    }

    fn shell(available: bool) -> Shell<NoAuth, FixedStorage> {
        let controller = Arc::new(SessionController::new(Arc::new(NoAuth)));
        let videos = ResolveLabVideoUseCase::new(
            Arc::new(FixedStorage { available }),
            &BehaviorConfig::default(),
        );
        Shell::new(controller, videos).with_config(ReplConfig {
            show_progress: false,
            history_file: None,
        })
    }

    async fn open_lab(shell: &Shell<NoAuth, FixedStorage>, lab: &str) {
        shell.execute(ShellCommand::Guest).await;
        shell.execute(ShellCommand::Role(Role::Labs)).await;
        shell.execute(ShellCommand::Class("class-12".into())).await;
        shell.execute(ShellCommand::Lab(lab.into())).await;
    }

    #[tokio::test]
    async fn test_simulation_tab_resolves_video() {
        let shell = shell(true);
        open_lab(&shell, "pcr").await;

        let dispatch = shell.execute(ShellCommand::Tab(LabTab::Simulation)).await;

        assert!(dispatch.is_applied());
        assert_eq!(
            shell.controller.state().video,
            VideoState::Ready {
                object_key: "pcr.mp4".into(),
                url: "https://cdn/lab-videos/pcr.mp4".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_missing_video_can_be_retried() {
        let shell = shell(false);
        open_lab(&shell, "gel-electro").await;
        shell.execute(ShellCommand::Tab(LabTab::Simulation)).await;
        assert!(shell.controller.state().video.is_retriable());

        assert!(shell.execute(ShellCommand::Retry).await.is_applied());
        assert!(shell.controller.state().video.is_retriable());
    }

    #[tokio::test]
    async fn test_retry_outside_simulation_is_ignored() {
        let shell = shell(true);
        open_lab(&shell, "pcr").await;
        assert_eq!(shell.execute(ShellCommand::Retry).await, Dispatch::Ignored);
        assert_eq!(shell.controller.state().video, VideoState::Idle);
    }

    #[tokio::test]
    async fn test_intent_on_wrong_screen_is_ignored() {
        let shell = shell(true);
        assert_eq!(
            shell.execute(ShellCommand::Message("hi".into())).await,
            Dispatch::Ignored
        );
        assert_eq!(shell.controller.state(), AppState::default());
    }

    #[test]
    fn test_password_fields_are_not_echoed() {
        for screen in [
            Screen::Login,
            Screen::Signup,
            Screen::Reset,
            Screen::UpdatePassword,
        ] {
            let fields = form_fields(screen);
            assert!(!fields.is_empty(), "{} has no form", screen);
            for f in fields {
                assert_eq!(
                    f.secret,
                    f.prompt.to_lowercase().contains("password"),
                    "{} on {}",
                    f.prompt,
                    screen
                );
            }
        }
        assert_eq!(form_fields(Screen::Login), &[field("Email: "), secret("Password: ")]);
        assert!(form_fields(Screen::Dashboard).is_empty());
    }

    #[test]
    fn test_outcome_hides_errors() {
        let err = SessionError::Auth(AuthError::Rejected("nope".into()));
        assert_eq!(outcome(Err(err)), Dispatch::Applied);
        assert_eq!(outcome(Ok(Dispatch::Ignored)), Dispatch::Ignored);
    }
}
