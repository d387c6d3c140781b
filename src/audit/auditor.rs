use crate::audit::host::SceneHost;
use crate::audit::issue::{IssueLayout, ProblemDescriptor, ProjectIssue};
use crate::audit::progress::ProgressBar;
use crate::audit::scenes::AuditSummary;
use crate::audit::settings::AuditSettings;
use crate::errors::Result;

/// Common interface of project auditors.
pub trait Auditor {
    /// Problem descriptors this auditor can report.
    fn descriptors(&self) -> Result<Vec<ProblemDescriptor>>;

    /// Column layouts of the issues this auditor emits.
    fn layouts(&self) -> Vec<IssueLayout>;

    fn initialize(&mut self, settings: &AuditSettings);

    fn is_supported(&self) -> bool;

    fn register_descriptor(&mut self, descriptor: ProblemDescriptor) -> Result<()>;

    /// Runs the audit. `on_issue` receives every finding; `on_complete` is
    /// called exactly once when the run ends, cancelled or not.
    fn audit(
        &mut self,
        host: &mut dyn SceneHost,
        on_issue: &mut dyn FnMut(ProjectIssue),
        on_complete: Option<Box<dyn FnOnce() + '_>>,
        progress: Option<&mut dyn ProgressBar>,
    ) -> AuditSummary;
}
