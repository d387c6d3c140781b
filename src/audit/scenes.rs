//! Build-scene statistics auditor.
//!
//! Opens every scene of the build list in turn, collects its asset usage
//! with a fresh [`SceneStatsCollector`], emits one row per scene and merges
//! the collectors into project-wide totals.

use std::path::Path;

use serde::Serialize;

use crate::audit::auditor::Auditor;
use crate::audit::collector::SceneStatsCollector;
use crate::audit::host::{OpenSceneMode, SceneHost, SetupGuard};
use crate::audit::issue::{
    IssueCategory, IssueLayout, ProblemDescriptor, ProjectIssue, PropertyDefinition,
    PropertyFormat, PropertyType,
};
use crate::audit::progress::ProgressBar;
use crate::audit::settings::{AuditSettings, BuildSettings};
use crate::audit::stats::{AssetUsageStats, SceneProperty};
use crate::errors::{AuditError, Result};

/// Descriptor of the per-scene statistics row.
pub const SCENE_STATS: ProblemDescriptor = ProblemDescriptor::new(700_002, "Scene Stats");

const PROGRESS_TITLE: &str = "Analyzing Scenes in Build Settings";
const PROGRESS_MESSAGE: &str = "Collecting statistics";

/// Outcome of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    pub scenes_audited: usize,
    /// Missing files and disabled entries
    pub scenes_skipped: usize,
    /// Scenes the host failed to open or that could not be collected
    pub scenes_failed: usize,
    pub cancelled: bool,
    pub aggregate: AssetUsageStats,
}

/// Runs the completion callback when dropped, so it fires once whether the
/// run returns or unwinds.
struct OnComplete<'a>(Option<Box<dyn FnOnce() + 'a>>);

impl Drop for OnComplete<'_> {
    fn drop(&mut self) {
        if let Some(done) = self.0.take() {
            done();
        }
    }
}

pub struct ScenesAuditor {
    build_settings: BuildSettings,
    settings: AuditSettings,
}

impl ScenesAuditor {
    #[must_use]
    pub fn new(build_settings: BuildSettings) -> Self {
        Self {
            build_settings,
            settings: AuditSettings::default(),
        }
    }

    #[must_use]
    pub fn build_settings(&self) -> &BuildSettings {
        &self.build_settings
    }

    /// Row layout: the scene name, then one integer column per
    /// [`SceneProperty`].
    #[must_use]
    pub fn scene_layout() -> IssueLayout {
        let mut properties = vec![PropertyDefinition {
            ty: PropertyType::Description,
            format: PropertyFormat::String,
            name: "Scene Name",
            long_name: "Scene Name",
        }];
        properties.extend(SceneProperty::ALL.iter().map(|&p| PropertyDefinition {
            ty: PropertyType::Custom(p),
            format: PropertyFormat::Integer,
            name: p.name(),
            long_name: p.long_name(),
        }));

        IssueLayout {
            category: IssueCategory::Scenes,
            properties,
        }
    }

    /// Audits every scene of the build list against `host`.
    ///
    /// The host's open scenes are snapshotted first and restored before this
    /// returns, whatever happens to the individual scenes.
    pub fn run<H: SceneHost + ?Sized>(
        &self,
        host: &mut H,
        on_issue: &mut dyn FnMut(ProjectIssue),
        mut progress: Option<&mut dyn ProgressBar>,
    ) -> AuditSummary {
        let scenes = &self.build_settings.scenes;
        if let Some(p) = progress.as_deref_mut() {
            p.initialize(PROGRESS_TITLE, PROGRESS_MESSAGE, scenes.len());
        }

        let mut summary = AuditSummary::default();
        let mut aggregate = SceneStatsCollector::new();

        {
            let mut host = SetupGuard::new(host);

            for entry in scenes {
                if progress.as_deref().is_some_and(|p| p.is_cancelled()) {
                    log::info!("Scene audit cancelled");
                    summary.cancelled = true;
                    break;
                }

                let path = entry.path.as_path();
                let label = path.to_string_lossy();
                if let Some(p) = progress.as_deref_mut() {
                    p.advance(&label);
                }

                if !entry.enabled && self.settings.skip_disabled_scenes {
                    log::debug!("Skipping disabled scene {label}");
                    summary.scenes_skipped += 1;
                    continue;
                }
                if !host.scene_exists(path) {
                    log::debug!("Skipping missing scene {label}");
                    summary.scenes_skipped += 1;
                    continue;
                }

                match Self::collect_scene(&mut *host, path) {
                    Ok(collector) => {
                        let stats = collector.stats();
                        on_issue(
                            ProjectIssue::new(SCENE_STATS, &label, IssueCategory::Scenes, &label)
                                .with_properties(stats.to_properties()),
                        );
                        aggregate.merge(&collector);
                        summary.scenes_audited += 1;
                    }
                    Err(err) => {
                        log::warn!("Failed to audit scene {label}: {err}");
                        summary.scenes_failed += 1;
                    }
                }
            }
        }

        summary.aggregate = aggregate.stats();
        if self.settings.log_summary {
            let total = &summary.aggregate;
            log::info!("Total GameObjects: {}", total.objects);
            log::info!("Unique Prefabs: {}", total.prefabs);
            log::info!("Unique Materials: {}", total.materials);
            log::info!("Unique Models: {}", total.models);
            log::info!("Unique Shaders: {}", total.shaders);
            log::info!("Unique Textures: {}", total.textures);
        }

        if let Some(p) = progress.as_deref_mut() {
            p.clear();
        }

        summary
    }

    fn collect_scene<H: SceneHost + ?Sized>(
        host: &mut H,
        path: &Path,
    ) -> Result<SceneStatsCollector> {
        let scene = host.open_scene(path, OpenSceneMode::Single)?;
        let mut collector = SceneStatsCollector::new();
        collector.collect(scene)?;
        Ok(collector)
    }
}

impl Auditor for ScenesAuditor {
    fn descriptors(&self) -> Result<Vec<ProblemDescriptor>> {
        Err(AuditError::Unsupported("scene auditor has no problem descriptors"))
    }

    fn layouts(&self) -> Vec<IssueLayout> {
        vec![Self::scene_layout()]
    }

    fn initialize(&mut self, settings: &AuditSettings) {
        self.settings = settings.clone();
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn register_descriptor(&mut self, _descriptor: ProblemDescriptor) -> Result<()> {
        Err(AuditError::Unsupported("scene auditor does not accept descriptors"))
    }

    fn audit(
        &mut self,
        host: &mut dyn SceneHost,
        on_issue: &mut dyn FnMut(ProjectIssue),
        on_complete: Option<Box<dyn FnOnce() + '_>>,
        progress: Option<&mut dyn ProgressBar>,
    ) -> AuditSummary {
        let _complete = OnComplete(on_complete);
        self.run(host, on_issue, progress)
    }
}
