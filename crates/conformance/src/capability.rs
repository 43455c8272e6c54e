//! Capability list consistency check.
//!
//! Compares the harness's declared test cases (LocalSet) with the engine's
//! declared supported extensions (EngineSet) in both directions. The two
//! directions fail for different reasons and are reported separately:
//! - local tag missing from engine: stale or incomplete capability list
//! - engine tag missing locally: untested capability
//!
//! Mismatches are warnings. They never stop a run.

/// One direction of the check: every tag of the left set must be in the right set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsetCheck {
    /// Tags of the left set absent from the right set, in left-set order.
    pub missing: Vec<String>,
}

impl SubsetCheck {
    fn of(left: &[String], right: &[String]) -> Self {
        let missing = left
            .iter()
            .filter(|tag| !right.contains(tag))
            .cloned()
            .collect();
        SubsetCheck { missing }
    }

    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Outcome of both subset checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityReport {
    /// LocalSet ⊆ EngineSet.
    pub local_in_engine: SubsetCheck,
    /// EngineSet ⊆ LocalSet.
    pub engine_in_local: SubsetCheck,
}

impl CapabilityReport {
    pub fn is_consistent(&self) -> bool {
        self.local_in_engine.passed() && self.engine_in_local.passed()
    }

    /// Console lines for both directions, local-in-engine first.
    pub fn lines(&self) -> [String; 2] {
        let first = if self.local_in_engine.passed() {
            "All extensions in test cases found in engine capability list".to_string()
        } else {
            format!(
                "warning: extension(s) in test cases missing from engine capability list: {}",
                self.local_in_engine.missing.join(", ")
            )
        };
        let second = if self.engine_in_local.passed() {
            "All extensions in engine capability list found in test cases".to_string()
        } else {
            format!(
                "warning: extension(s) in engine capability list missing from test cases: {}",
                self.engine_in_local.missing.join(", ")
            )
        };
        [first, second]
    }
}

/// Check `local` and `engine` for set equality, one direction at a time.
pub fn validate(local: &[String], engine: &[String]) -> CapabilityReport {
    CapabilityReport {
        local_in_engine: SubsetCheck::of(local, engine),
        engine_in_local: SubsetCheck::of(engine, local),
    }
}
