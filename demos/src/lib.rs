//! gatelab Gate Demonstrations
//!
//! Builds one- and two-line gate sequences for the textbook single-qubit
//! gates, runs each for a fixed number of shots and prints the measured
//! histogram next to the outcome a noiseless device would give.
//!
//! - **Pauli gates**: X, Y, Z
//! - **Phase gates**: S, T
//! - **Hadamard**: alone, twice, and inside a four-gate sequence
//!
//! ```ignore
//! use gatelab_demos::{Driver, ExampleRunner};
//! use gatelab_adapter_sim::SimulatorBackend;
//!
//! let runner = ExampleRunner::new(Box::new(SimulatorBackend::new()), Driver::Standard);
//! let (counts, circuit) = runner.hadamard().await?;
//! runner.run_all().await?;
//! ```

pub mod catalog;
pub mod error;
pub mod report;
pub mod runner;
pub mod selection;

use std::fmt;

use console::style;

pub use catalog::Demonstration;
pub use error::{DemoError, DemoResult};
pub use report::Report;
pub use runner::{ExampleRunner, SHOTS};
pub use selection::{BackendSelection, connect};

/// Presentation profile: banner, header wording, register layout and
/// measurement style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// Measures qubit 0 into classical bit 0; always local.
    Standard,
    /// Samples the whole register; local simulator or an AWS device.
    Braket {
        /// Running on an AWS device rather than locally.
        cloud: bool,
    },
}

impl Driver {
    /// Where the demonstrations execute.
    pub fn label(self) -> &'static str {
        match self {
            Driver::Braket { cloud: true } => "AWS CLOUD",
            _ => "LOCAL SIMULATOR",
        }
    }

    /// Opening banner text.
    pub fn title(self) -> String {
        match self {
            Driver::Standard => "QUANTUM GATES WITH GATELAB - COMPREHENSIVE EXAMPLES".to_string(),
            Driver::Braket { .. } => format!("QUANTUM GATES WITH AMAZON BRAKET - {}", self.label()),
        }
    }

    /// Width of the `=` rules around the banners.
    pub fn rule_width(self) -> usize {
        match self {
            Driver::Standard => 50,
            Driver::Braket { .. } => 60,
        }
    }

    /// Label in front of the printed histogram.
    pub fn counts_label(self) -> &'static str {
        match self {
            Driver::Standard => "Output",
            Driver::Braket { .. } => "Measurement counts",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Driver::Standard => write!(f, "standard"),
            Driver::Braket { .. } => write!(f, "braket ({})", self.label().to_lowercase()),
        }
    }
}

/// Print an opening banner.
pub fn print_banner(title: &str, width: usize) {
    println!();
    println!("{}", style("=".repeat(width)).cyan());
    println!("{}", style(title).cyan().bold());
    println!("{}", style("=".repeat(width)).cyan());
}

/// Print the completion banner.
pub fn print_completion(width: usize) {
    println!();
    println!("{}", style("=".repeat(width)).cyan());
    println!(
        "{}",
        style("All examples completed successfully!").green().bold()
    );
    println!("{}", style("=".repeat(width)).cyan());
    println!();
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_titles() {
        assert_eq!(
            Driver::Braket { cloud: false }.title(),
            "QUANTUM GATES WITH AMAZON BRAKET - LOCAL SIMULATOR"
        );
        assert_eq!(
            Driver::Braket { cloud: true }.title(),
            "QUANTUM GATES WITH AMAZON BRAKET - AWS CLOUD"
        );
        assert_eq!(Driver::Standard.rule_width(), 50);
        assert_eq!(Driver::Braket { cloud: true }.rule_width(), 60);
    }

    #[test]
    fn test_counts_label() {
        assert_eq!(Driver::Standard.counts_label(), "Output");
        assert_eq!(
            Driver::Braket { cloud: false }.counts_label(),
            "Measurement counts"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Driver::Standard.to_string(), "standard");
        assert_eq!(
            Driver::Braket { cloud: true }.to_string(),
            "braket (aws cloud)"
        );
    }
}
