use crate::core::{Console, Drill};
use crate::utils::error::Result;
use std::time::Instant;

pub struct DrillRunner {
    drill: Box<dyn Drill>,
}

impl DrillRunner {
    pub fn new(drill: Box<dyn Drill>) -> Self {
        Self { drill }
    }

    pub fn drill_name(&self) -> &'static str {
        self.drill.name()
    }

    pub fn run(&self, console: &mut dyn Console) -> Result<()> {
        let started = Instant::now();
        tracing::info!("🚀 Starting drill: {}", self.drill.name());

        match self.drill.run(console) {
            Ok(()) => {
                tracing::info!("✅ Drill {} finished in {:?}", self.drill.name(), started.elapsed());
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    "❌ Drill {} failed: {} (Category: {:?}, Severity: {:?})",
                    self.drill.name(),
                    e,
                    e.category(),
                    e.severity()
                );
                Err(e)
            }
        }
    }
}
