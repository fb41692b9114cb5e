// ABOUTME: REPL commands and the permission list they operate on.
// ABOUTME: Parsing and execution are kept apart from the line editor for testing.

use std::path::Path;

use anyhow::{Context, Result, bail};
use permgate::prelude::*;

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(String),
    Add(Vec<String>),
    Clear,
    List,
    Check { area: String, action: String },
    Area(String),
    Areas,
    Backend,
    Hierarchy,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for blank input.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<String> = words.map(str::to_string).collect();

        let command = match (name, args.as_slice()) {
            ("load", [path]) => Command::Load(path.clone()),
            ("add", perms) if !perms.is_empty() => Command::Add(perms.to_vec()),
            ("clear", []) => Command::Clear,
            ("list", []) => Command::List,
            ("check", [area, action]) => Command::Check {
                area: area.clone(),
                action: action.clone(),
            },
            ("area", [area]) => Command::Area(area.clone()),
            ("areas", []) => Command::Areas,
            ("backend", []) => Command::Backend,
            ("hierarchy", []) => Command::Hierarchy,
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            _ => bail!("Unrecognized command: '{}' (try 'help')", line.trim()),
        };
        Ok(Some(command))
    }
}

pub const HELP: &str = "\
Commands:
  load <file>           replace held permissions with a JSON array from <file>
  add <perm>...         append raw permission strings
  clear                 drop all held permissions
  list                  show the normalized held set
  check <area> <action> test a single permission
  area <area>           test for any permission in an area
  areas                 list areas with at least one permission
  backend               show held permissions in backend form
  hierarchy             show every grantable permission
  quit                  exit";

/// The raw permission list held by the REPL.
#[derive(Debug, Default)]
pub struct Session {
    held: Vec<String>,
}

impl Session {
    pub fn new(held: Vec<String>) -> Self {
        Self { held }
    }

    /// Execute a command and return the text to print.
    pub fn execute(&mut self, command: Command) -> Result<String> {
        let output = match command {
            Command::Load(path) => {
                self.held = load_permissions(Path::new(&path))?;
                format!("Loaded {} permissions from {}", self.held.len(), path)
            }
            Command::Add(perms) => {
                let count = perms.len();
                self.held.extend(perms);
                format!("Added {} permissions", count)
            }
            Command::Clear => {
                self.held.clear();
                "Cleared".to_string()
            }
            Command::List => normalize_set(&self.held).join("\n"),
            Command::Check { area, action } => {
                let granted = has_permission(&self.held, &area, &action);
                tracing::info!(%area, %action, granted, "permission check");
                verdict(granted)
            }
            Command::Area(area) => verdict(has_any_for_area(&self.held, &area)),
            Command::Areas => areas_with_any_permission(&self.held).join("\n"),
            Command::Backend => to_backend_form(&self.held).join("\n"),
            Command::Hierarchy => serde_json::to_string_pretty(&permission_hierarchy())?,
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        };
        Ok(output)
    }
}

fn verdict(granted: bool) -> String {
    let word = if granted { "granted" } else { "denied" };
    word.to_string()
}

/// Read a JSON array of raw permission strings.
pub fn load_permissions(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let held: Vec<String> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {} as a JSON string array", path.display()))?;
    tracing::debug!(path = %path.display(), count = held.len(), "loaded permissions");
    Ok(held)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn run(session: &mut Session, line: &str) -> String {
        let command = Command::parse(line).unwrap().unwrap();
        session.execute(command).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(
            Command::parse("check employee read").unwrap(),
            Some(Command::Check {
                area: "employee".to_string(),
                action: "read".to_string()
            })
        );
        assert_eq!(
            Command::parse("add users:read sales:write").unwrap(),
            Some(Command::Add(vec![
                "users:read".to_string(),
                "sales:write".to_string()
            ]))
        );
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_arity() {
        assert!(Command::parse("check users").is_err());
        assert!(Command::parse("add").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }

    #[test]
    fn test_session_queries() {
        let mut session = Session::default();
        run(&mut session, "add employees:read Employees:Read bogus");

        assert_eq!(run(&mut session, "list"), "employees:read");
        assert_eq!(run(&mut session, "check employee read"), "granted");
        assert_eq!(run(&mut session, "check employee write"), "denied");
        assert_eq!(run(&mut session, "area employee"), "denied");
        assert_eq!(run(&mut session, "areas"), "employees");
        assert_eq!(
            run(&mut session, "backend"),
            "PermissionArea.EMPLOYEES:PermissionAction.READ\n\
             PermissionArea.EMPLOYEES:PermissionAction.READ\n\
             PermissionArea.:PermissionAction."
        );

        run(&mut session, "clear");
        assert_eq!(run(&mut session, "list"), "");
        assert_eq!(run(&mut session, "check employees read"), "denied");
    }

    #[test]
    fn test_hierarchy_output_is_json() {
        let mut session = Session::default();
        let output = run(&mut session, "hierarchy");
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 10);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["stores:read", "PermissionArea.USERS:PermissionAction.WRITE"]"#).unwrap();

        let mut session = Session::default();
        let line = format!("load {}", file.path().display());
        assert!(run(&mut session, &line).starts_with("Loaded 2 permissions"));
        assert_eq!(run(&mut session, "check user write"), "granted");
    }

    #[test]
    fn test_load_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"users": "read"}}"#).unwrap();
        assert!(load_permissions(file.path()).is_err());
    }
}
