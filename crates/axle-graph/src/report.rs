//! Human-readable plan rendering.

use std::fmt;

use crate::plan::MatrixPlan;

impl fmt::Display for MatrixPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Build Matrix Plan ===")?;
        writeln!(f, "Project: {} ({})", self.project, self.target_type)?;
        writeln!(f, "Host:    {}", self.host)?;
        writeln!(f)?;

        writeln!(f, "--- Modules ---")?;
        for module in &self.modules {
            writeln!(f, "  {module}")?;
        }

        writeln!(f)?;
        writeln!(f, "--- Monolithic Jobs ---")?;
        if self.monolithic.is_empty() {
            writeln!(f, "  (nothing to build on this host)")?;
        } else {
            for job in &self.monolithic {
                writeln!(f, "  {}", job.id)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "--- Formal Builds ---")?;
        if self.formal.is_empty() {
            writeln!(f, "  (none)")?;
        } else {
            for entry in &self.formal {
                writeln!(f, "  {entry}")?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Warnings ---")?;
            for issue in &self.warnings {
                writeln!(f, "  {}: {}", issue.severity, issue.message)?;
            }
        }

        Ok(())
    }
}
