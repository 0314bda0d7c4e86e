use std::error::Error;

/// A trait representing a command runner.
///
/// This trait defines a single method, `run`, which is responsible for
/// executing the logic of a specific command. Implementations handle their
/// own arguments and decide what the user sees for success and failure.
pub trait CmdRunner {
    /// Executes the command's logic.
    async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>>;
}
