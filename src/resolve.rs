/// Manual resolution of ambiguous files
///
/// Files the solvers left Unknown or disagreed on are handed to a
/// `Resolver`. The console implementation is the only interactive surface
/// of the pipeline; tests swap in a scripted one.
use crate::types::SatStatus;
use std::io::{BufRead, Write};

/// External decision-maker for files the solvers could not settle.
pub trait Resolver {
    /// Return the confirmed status for one problem file.
    fn resolve(&mut self, file_name: &str) -> Result<SatStatus, String>;
}

/// Synchronous stdin/stdout prompt. Accepts exactly `SAT`, `UNSAT`, or `?`
/// and re-prompts on anything else; it never defaults silently.
pub struct ConsoleResolver;

impl ConsoleResolver {
    pub fn new() -> Self {
        ConsoleResolver
    }
}

impl Resolver for ConsoleResolver {
    fn resolve(&mut self, file_name: &str) -> Result<SatStatus, String> {
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("Enter SAT or UNSAT for '{}': ", file_name);
            std::io::stdout().flush().map_err(|e| format!("cannot flush stdout: {}", e))?;
            let line = match lines.next() {
                Some(line) => line.map_err(|e| format!("cannot read stdin: {}", e))?,
                // EOF: nobody is answering, so the run cannot finish.
                None => return Err(format!("stdin closed while resolving '{}'", file_name)),
            };
            match SatStatus::parse(line.trim()) {
                Some(status) => return Ok(status),
                None => println!("Invalid input - type SAT, UNSAT or ?"),
            }
        }
    }
}

/// Scripted resolver for tests: answers from a fixed list, in call order.
#[cfg(test)]
pub struct ScriptedResolver {
    replies: Vec<(String, SatStatus)>,
    next: usize,
}

#[cfg(test)]
impl ScriptedResolver {
    pub fn new(replies: Vec<(&str, SatStatus)>) -> Self {
        ScriptedResolver {
            replies: replies.into_iter().map(|(f, s)| (f.to_string(), s)).collect(),
            next: 0,
        }
    }

    /// True once every scripted reply has been consumed.
    pub fn exhausted(&self) -> bool {
        self.next == self.replies.len()
    }
}

#[cfg(test)]
impl Resolver for ScriptedResolver {
    fn resolve(&mut self, file_name: &str) -> Result<SatStatus, String> {
        let (expected, status) = self
            .replies
            .get(self.next)
            .ok_or_else(|| format!("unexpected resolution request for '{}'", file_name))?;
        assert_eq!(expected, file_name, "resolution requested out of order");
        self.next += 1;
        Ok(*status)
    }
}
