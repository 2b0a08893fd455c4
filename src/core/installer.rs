use crate::config::InstallConfig;
use crate::domain::model::{CopyAction, CopyPlan, InstallSummary, PlanEntry};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::Write;

pub struct Installer<S: Storage> {
    storage: S,
    config: InstallConfig,
}

impl<S: Storage> Installer<S> {
    pub fn new(storage: S, config: InstallConfig) -> Self {
        Self { storage, config }
    }

    /// 在任何寫入之前決定每個檔案的動作
    pub fn plan(&self) -> Result<CopyPlan> {
        let sources = self
            .config
            .rules
            .select(&self.storage, &self.config.source_dir)?;

        let entries = sources
            .into_iter()
            .map(|source| {
                let destination = self.config.target_dir.join(&source.name);
                let action = match (self.storage.exists(&destination), self.config.force) {
                    (false, _) => CopyAction::Copy,
                    (true, true) => CopyAction::Update,
                    (true, false) => CopyAction::Skip,
                };
                PlanEntry {
                    source,
                    destination,
                    action,
                }
            })
            .collect();

        Ok(CopyPlan { entries })
    }

    /// Plans, reports and (unless dry-run) copies. Pre-flight errors leave `out` untouched.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<InstallSummary> {
        let plan = self.plan()?;
        let dry_run = self.config.dry_run;

        tracing::info!(
            "installing {} files into {} (dry_run={}, force={})",
            plan.len(),
            self.config.target_dir.display(),
            dry_run,
            self.config.force
        );

        writeln!(out, "source: {}", self.config.source_dir.display())?;
        writeln!(out, "target: {}", self.config.target_dir.display())?;
        writeln!(out, "mode: {}", if dry_run { "dry-run" } else { "install" })?;

        let summary = self.execute(&plan, out)?;

        // dry-run 的 copied 代表「會被複製」的數量
        writeln!(
            out,
            "\nsummary: copied={}, skipped={}, total={}",
            summary.copied, summary.skipped, summary.total
        )?;
        if summary.needs_force_hint() {
            writeln!(out, "note: rerun with --force to overwrite existing prompts")?;
        }

        tracing::info!(
            "done: copied={} skipped={} total={}",
            summary.copied,
            summary.skipped,
            summary.total
        );
        Ok(summary)
    }

    fn execute<W: Write>(&self, plan: &CopyPlan, out: &mut W) -> Result<InstallSummary> {
        let dry_run = self.config.dry_run;
        let mut summary = InstallSummary {
            total: plan.len(),
            dry_run,
            force: self.config.force,
            ..Default::default()
        };

        let target_dir = &self.config.target_dir;
        if !dry_run && plan.has_writes() && !self.storage.is_dir(target_dir) {
            tracing::debug!("creating {}", target_dir.display());
            self.storage.create_dir_all(target_dir)?;
        }

        for entry in &plan.entries {
            match entry.action {
                CopyAction::Skip => {
                    tracing::debug!("{} exists, skipping", entry.destination.display());
                    writeln!(
                        out,
                        "skip   {} (exists; use --force to overwrite)",
                        entry.source.name
                    )?;
                    summary.skipped += 1;
                }
                action => {
                    writeln!(out, "{:<6} {}", action.label(), entry.source.name)?;
                    if !dry_run {
                        self.storage
                            .copy_file(&entry.source.path, &entry.destination)?;
                    }
                    tracing::debug!(
                        "{} {} -> {}",
                        action,
                        entry.source.path.display(),
                        entry.destination.display()
                    );
                    summary.copied += 1;
                }
            }
        }

        Ok(summary)
    }
}
