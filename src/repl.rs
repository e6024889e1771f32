//! Interactive session over one directory's audit results.

use crate::cache::{BatchCache, CacheStatus};
use crate::error::{AuditError, Result};
use crate::report::{self, OutputFormat};
use crate::types::config::AuditSettings;
use crate::types::record::ResultSet;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};

const DEFAULT_TOP: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    List,
    Companies,
    Show(String),
    Top(usize),
    Rescan,
    Export(PathBuf),
    Help,
    Exit,
}

pub fn parse_repl_command(line: &str) -> std::result::Result<ReplCommand, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(ReplCommand::List),
        "companies" => Ok(ReplCommand::Companies),
        "show" if rest.is_empty() => Err("usage: show <company>".to_string()),
        "show" => Ok(ReplCommand::Show(rest.to_string())),
        "top" if rest.is_empty() => Ok(ReplCommand::Top(DEFAULT_TOP)),
        "top" => rest
            .parse::<usize>()
            .map(ReplCommand::Top)
            .map_err(|_| format!("top expects a count, got '{rest}'")),
        "rescan" => Ok(ReplCommand::Rescan),
        "export" if rest.is_empty() => Err("usage: export <file.csv>".to_string()),
        "export" => Ok(ReplCommand::Export(PathBuf::from(rest))),
        "help" | "?" => Ok(ReplCommand::Help),
        "exit" | "quit" => Ok(ReplCommand::Exit),
        other => Err(format!("unknown command '{other}', type 'help'")),
    }
}

/// Holds the result set for a directory between commands.
pub struct Session {
    dir: PathBuf,
    settings: AuditSettings,
    cache: BatchCache,
}

impl Session {
    pub fn new(dir: &Path, settings: AuditSettings) -> Self {
        Self {
            dir: dir.to_path_buf(),
            settings,
            cache: BatchCache::new(),
        }
    }

    fn results(&mut self) -> (&ResultSet, CacheStatus) {
        self.cache.load(&self.dir, &self.settings)
    }

    pub fn execute(&mut self, command: ReplCommand) -> Result<String> {
        match command {
            ReplCommand::List => {
                let (results, _) = self.results();
                if results.is_empty() {
                    return Ok("no documents scored".to_string());
                }
                Ok(results
                    .iter()
                    .map(|record| {
                        format!(
                            "{:<40} risk {:>5.1}  talk {:>5.1}  walk {:>5.1}",
                            record.company_name,
                            record.risk_score,
                            record.talk_score,
                            record.walk_score
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            ReplCommand::Companies => {
                let (results, _) = self.results();
                Ok(results.companies().join("\n"))
            }
            ReplCommand::Show(company) => {
                let (results, _) = self.results();
                let record = results
                    .find(&company)
                    .ok_or(AuditError::CompanyNotFound(company))?;
                Ok(report::md::evidence_section(record))
            }
            ReplCommand::Top(count) => {
                let (results, _) = self.results();
                Ok(results
                    .ranked_by_risk()
                    .into_iter()
                    .take(count)
                    .enumerate()
                    .map(|(rank, record)| {
                        format!(
                            "{}. {} ({:.1})",
                            rank + 1,
                            record.company_name,
                            record.risk_score
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            ReplCommand::Rescan => {
                let (results, status) = self.results();
                let origin = match status {
                    CacheStatus::Hit => "unchanged, cached",
                    CacheStatus::Miss => "recomputed",
                };
                Ok(format!("{} companies ({origin})", results.len()))
            }
            ReplCommand::Export(path) => {
                let (results, _) = self.results();
                let rows = results.len();
                let rendered = report::render(results, OutputFormat::Csv)?;
                std::fs::write(&path, rendered)?;
                Ok(format!("exported {rows} rows to {}", path.display()))
            }
            ReplCommand::Help => Ok(help_text().to_string()),
            ReplCommand::Exit => Ok(String::new()),
        }
    }
}

fn help_text() -> &'static str {
    "commands:\n  list              companies with their scores\n  companies         distinct company names\n  show <company>    forensic evidence for one company\n  top [n]           highest risk companies (default 5)\n  rescan            reload if the directory changed\n  export <file>     write the results as CSV\n  help              this message\n  exit              leave the session"
}

pub fn run_session(dir: &Path, settings: AuditSettings) -> Result<()> {
    let mut session = Session::new(dir, settings);
    let mut editor = DefaultEditor::new().map_err(|e| AuditError::Session(e.to_string()))?;

    println!("greenaudit session for {} - type 'help' for commands", dir.display());
    println!("{}", session.execute(ReplCommand::Rescan)?);

    loop {
        match editor.readline("greenaudit> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => break,
                    Ok(command) => match session.execute(command) {
                        Ok(output) => println!("{output}"),
                        Err(e) => eprintln!("error: {e}"),
                    },
                    Err(message) => eprintln!("{message}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(AuditError::Session(e.to_string())),
        }
    }

    Ok(())
}
