//! Line-oriented stand-in for the presentation layer.
//!
//! Each input line is one user action; the console prints what the portal
//! decided to show.

use crate::{Portal, PortalError, PortalResult, find_doctor};

use hp_handoff::HandoffStorage;

use std::io::{BufRead, Write};

use log::warn;

const HELP: &str = "\
commands:
  login <patient|doctor|admin> <email>   sign in through the login form
  logout                                 sign out
  go <path>                              navigate to a path
  book <doctor-id>                       preselect a doctor and open booking
  chat <doctor-id>                       open a chat with a doctor
  take <booking|chat>                    consume the doctor handed to a view
  whoami                                 show the signed-in user
  menu                                   show the navigation bar
  help                                   show this text
  quit                                   exit";

/// Which view is consuming a handed-off doctor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeTarget {
    Booking,
    Chat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { role: String, email: String },
    Logout,
    Go { path: String },
    Book { doctor_id: u32 },
    Chat { doctor_id: u32 },
    Take { target: TakeTarget },
    WhoAmI,
    Menu,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> PortalResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let command = match (verb, args.as_slice()) {
            ("login", [role, email]) => Self::Login {
                role: role.to_string(),
                email: email.to_string(),
            },
            ("login", _) => return Err(PortalError::command("usage: login <role> <email>")),
            ("logout", []) => Self::Logout,
            ("go", [path]) => Self::Go {
                path: path.to_string(),
            },
            ("go", _) => return Err(PortalError::command("usage: go <path>")),
            ("book", [id]) => Self::Book {
                doctor_id: Self::doctor_id(id)?,
            },
            ("chat", [id]) => Self::Chat {
                doctor_id: Self::doctor_id(id)?,
            },
            ("take", ["booking"]) => Self::Take {
                target: TakeTarget::Booking,
            },
            ("take", ["chat"]) => Self::Take {
                target: TakeTarget::Chat,
            },
            ("take", _) => return Err(PortalError::command("usage: take <booking|chat>")),
            ("whoami", []) => Self::WhoAmI,
            ("menu", []) => Self::Menu,
            ("help", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            _ => {
                return Err(PortalError::command(format!(
                    "unrecognised command '{line}', try 'help'"
                )));
            }
        };

        Ok(Some(command))
    }

    fn doctor_id(raw: &str) -> PortalResult<u32> {
        raw.parse()
            .map_err(|_| PortalError::command(format!("doctor id must be a number, got '{raw}'")))
    }
}

/// Drives a [`Portal`] from text commands
#[derive(Debug)]
pub struct Console<S: HandoffStorage> {
    portal: Portal<S>,
}

impl<S: HandoffStorage> Console<S> {
    pub fn new(portal: Portal<S>) -> Self {
        Self { portal }
    }

    pub fn portal(&self) -> &Portal<S> {
        &self.portal
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Command failures are printed and the loop continues; only I/O errors
    /// end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> PortalResult<()> {
        for line in input.lines() {
            let line = line?;

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(output, "error: {e}")?;
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }

            match self.execute(command) {
                Ok(text) => writeln!(output, "{text}")?,
                Err(e) => {
                    warn!("Command failed: {e}");
                    writeln!(output, "error: {e}")?;
                }
            }
        }

        output.flush()?;
        Ok(())
    }

    /// Apply one command and describe the outcome.
    pub fn execute(&mut self, command: Command) -> PortalResult<String> {
        let text = match command {
            Command::Login { role, email } => {
                let identity = self.portal.submit_login(&email, &role)?;
                let location = self.portal.location().to_string();
                format!(
                    "signed in as {} ({})\n{}",
                    identity.name(),
                    identity.role().label(),
                    self.portal.navigate(&location)
                )
            }
            Command::Logout => {
                self.portal.submit_logout();
                self.portal.current_view().to_string()
            }
            Command::Go { path } => self.portal.navigate(&path).to_string(),
            Command::Book { doctor_id } => {
                let doctor = find_doctor(doctor_id)?;
                self.portal.book_with(&doctor)?.to_string()
            }
            Command::Chat { doctor_id } => {
                let doctor = find_doctor(doctor_id)?;
                self.portal.chat_with(&doctor)?.to_string()
            }
            Command::Take { target } => {
                let doctor = match target {
                    TakeTarget::Booking => self.portal.take_booking_doctor()?,
                    TakeTarget::Chat => self.portal.take_chat_doctor()?,
                };
                match doctor {
                    Some(d) => format!("{} ({})", d.name, d.specialty),
                    None => "nothing pending".to_string(),
                }
            }
            Command::WhoAmI => match self.portal.current_identity() {
                Some(identity) => format!(
                    "{} <{}> {}",
                    identity.name(),
                    identity.email(),
                    identity.role()
                ),
                None => "not signed in".to_string(),
            },
            Command::Menu => {
                let menu = self.portal.nav_menu();
                let location = self.portal.location();
                menu.items
                    .iter()
                    .chain(menu.profile.iter())
                    .map(|item| {
                        let marker = if item.is_active(location) { "*" } else { " " };
                        format!("{marker} {:<14} {}", item.label, item.path)
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        };

        Ok(text)
    }
}
