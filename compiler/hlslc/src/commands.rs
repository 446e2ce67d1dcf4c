//! Command handlers for the `hlslc` CLI.
//!
//! Every command builds a one-call document when it needs one, hands it to
//! the session and waits for the answer on the calling thread. Handlers
//! return the text to print; `main` decides where it goes.

use std::time::Duration;

use hlsl_diagnostic::Span;
use hlsl_ide::{CallSite, DocumentSnapshot, Session, SessionConfig};
use hlsl_intrinsics::{Catalog, CatalogError, SharedCatalog};
use hlsl_task::{CancellationToken, Scheduler, SchedulerConfig, SchedulerError, Task, WaitError};
use hlsl_typeck::Argument;
use hlsl_types::{Type, TypeParseError};

/// Prefix marking an argument as an output lvalue, e.g. `out:float`.
pub const OUTPUT_PREFIX: &str = "out:";

const COMMAND_URI: &str = "hlslc:///command-line";

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to build the intrinsic catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("failed to start the scheduler: {0}")]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    Type(#[from] TypeParseError),

    #[error("request did not finish: {0}")]
    Wait(#[from] WaitError),
}

/// Text produced by a command. `failed` selects the exit status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub failed: bool,
}

impl Report {
    fn success(text: String) -> Self {
        Report {
            text,
            failed: false,
        }
    }
}

/// Parse `float3` or `out:float3`.
pub fn parse_argument(text: &str) -> Result<Argument, TypeParseError> {
    match text.strip_prefix(OUTPUT_PREFIX) {
        Some(ty) => Ok(Argument::output(ty.parse::<Type>()?)),
        None => Ok(Argument::input(text.parse::<Type>()?)),
    }
}

/// Owns the session the commands run through.
///
/// Must stay on the thread that created it: waits pump the session's
/// coordinator queue.
pub struct Driver {
    session: Session,
    version: u32,
}

impl Driver {
    pub fn new(
        scheduler_config: &SchedulerConfig,
        session_config: SessionConfig,
    ) -> Result<Self, CommandError> {
        let catalog = SharedCatalog::new(Catalog::intrinsics()?);
        let scheduler = Scheduler::new(scheduler_config)?;
        tracing::debug!(?catalog, workers = scheduler.worker_threads(), "driver ready");
        Ok(Driver {
            session: Session::new(scheduler, catalog, session_config),
            version: 0,
        })
    }

    /// Configuration from the environment. The CLI never debounces.
    pub fn from_env() -> Result<Self, CommandError> {
        Driver::new(
            &SchedulerConfig::from_env(),
            SessionConfig::from_env().with_debounce(Duration::ZERO),
        )
    }

    fn wait<T: Clone + Send + 'static>(&self, task: &Task<T>) -> Result<T, CommandError> {
        Ok(self
            .session
            .scheduler()
            .blocking_wait(task, &CancellationToken::none())?)
    }

    /// Replace the command document with a single call and wait for its
    /// diagnostics.
    fn open_call(
        &mut self,
        name: &str,
        arguments: Vec<Argument>,
    ) -> Result<Vec<hlsl_diagnostic::Diagnostic>, CommandError> {
        self.version += 1;
        let end = u32::try_from(name.len()).unwrap_or(u32::MAX);
        let call = CallSite::new(name, Span::new(0, end), arguments);
        let document = DocumentSnapshot::new(COMMAND_URI, self.version, vec![call]);
        let diagnostics = self.session.document_changed(document);
        self.wait(&diagnostics)
    }

    /// `list [prefix]`: function names with their overload counts.
    pub fn list(&self, prefix: &str) -> Result<Report, CommandError> {
        let items = self.wait(&self.session.completion(prefix, &CancellationToken::none()))?;
        let text = items
            .iter()
            .map(|item| {
                let plural = if item.overloads == 1 { "" } else { "s" };
                format!("{:<36} {} overload{plural}", item.label, item.overloads)
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Report::success(text))
    }

    /// `signatures <name>`: every overload, then the documentation.
    pub fn signatures(&mut self, name: &str) -> Result<Report, CommandError> {
        self.open_call(name, Vec::new())?;
        let help = self.wait(&self.session.signature_help(
            COMMAND_URI,
            0,
            &CancellationToken::none(),
        ))?;
        let Some(help) = help else {
            return Ok(Report {
                text: format!("no intrinsic named `{name}`"),
                failed: true,
            });
        };

        let mut lines: Vec<String> = help
            .signatures
            .iter()
            .map(|signature| signature.label.clone())
            .collect();
        if let Some(first) = help.signatures.first() {
            lines.push(String::new());
            lines.push(first.documentation.clone());
        }
        Ok(Report::success(lines.join("\n")))
    }

    /// `resolve <name> <types...>`: the chosen overload, or the diagnostic
    /// explaining why none was chosen.
    pub fn resolve(&mut self, name: &str, types: &[String]) -> Result<Report, CommandError> {
        let arguments = types
            .iter()
            .map(|text| parse_argument(text))
            .collect::<Result<Vec<_>, _>>()?;

        let diagnostics = self.open_call(name, arguments)?;
        if !diagnostics.is_empty() {
            let text = diagnostics
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            return Ok(Report { text, failed: true });
        }

        let hover = self.wait(&self.session.hover(COMMAND_URI, 0, &CancellationToken::none()))?;
        Ok(Report::success(
            hover.map(|hover| hover.contents).unwrap_or_default(),
        ))
    }

    /// `symbols <query>`: names containing `query`, any case.
    pub fn symbols(&self, query: &str) -> Result<Report, CommandError> {
        let symbols = self.wait(
            &self
                .session
                .workspace_symbols(query, &CancellationToken::none()),
        )?;
        let text = symbols
            .iter()
            .map(|symbol| format!("{:<36} {}", symbol.name, symbol.detail))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Report::success(text))
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.session.shutdown();
    }
}

#[cfg(test)]
mod tests;
