//! Demo runner

use std::io::Write;

use log::{debug, info};

use crate::{demos::Demo, Result};

#[derive(Debug)]
pub struct Builder {
    demos: Vec<Demo>,
    separate: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            demos: Demo::DEFAULT.to_vec(),
            separate: true,
        }
    }

    /// Demos to run, in order. Defaults to `Demo::DEFAULT`.
    pub fn demos(mut self, demos: Vec<Demo>) -> Self {
        self.demos = demos;
        self
    }

    /// Put a blank line after demos that ask for one (`Demo::trailing_blank_line`). Defaults to true.
    pub fn separate(mut self, separate: bool) -> Self {
        self.separate = separate;
        self
    }

    pub fn build(self) -> Runner {
        Runner {
            demos: self.demos,
            separate: self.separate,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Runner {
    demos: Vec<Demo>,
    separate: bool,
}

impl Runner {
    /**
     * Runs every configured demo against `out`. Stops at the first failure.
     */
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        info!("Running {} demo(s)", self.demos.len());
        let mut previous: Option<Demo> = None;
        for demo in &self.demos {
            if self.separate && previous.is_some_and(|p| p.trailing_blank_line()) {
                writeln!(out)?;
            }
            debug!("Demo {}: {}", demo, demo.description());
            demo.run(out)?;
            previous = Some(*demo);
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for Runner {
    fn default() -> Self {
        let builder = Builder::new();
        builder.build()
    }
}
