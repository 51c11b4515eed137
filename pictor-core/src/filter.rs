//! Design-tool component filtering.
//!
//! The design file mixes icons with documentation frames, size specimens and
//! half-finished drafts. Only components that follow one of two naming
//! conventions are imported:
//!
//! - stand-alone components named `<2 digits>/<name>` (e.g. `16/chevron-down`)
//! - size variants grouped in a frame whose label names the icon
//!   (component `Size=16` inside frame `Chevron Down`)
//!
//! Everything else is rejected and reported, never treated as an error.

use std::{fmt, sync::LazyLock};

use pictor_ir::RawComponent;
use regex::Regex;

use crate::utils::{contains_digit, slugify};

static SINGLE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/").expect("single-format pattern is valid"));

const VARIANT_PREFIX: &str = "Size=";

/// Why a component was not imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The containing frame label has a digit, which marks a non-icon artifact.
    DigitInFrame,
    /// A stand-alone component without the `<2 digits>/` prefix.
    MalformedName,
    /// A stand-alone component whose name segment contains a digit.
    DigitInName,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::DigitInFrame => write!(f, "frame label contains a digit"),
            RejectReason::MalformedName => write!(f, "name is not <size>/<name>"),
            RejectReason::DigitInName => write!(f, "icon name contains a digit"),
        }
    }
}

/// Outcome of classifying one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    /// The component is an icon; `identifier` is its flat `<size>-<name>` form.
    Accepted { id: String, identifier: String },
    /// The component is skipped; `label` is what the operator sees.
    Rejected { label: String, reason: RejectReason },
}

/// Components split into imported and skipped ones, in input order.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// `(node id, flat identifier)` pairs.
    pub accepted: Vec<(String, String)>,
    /// `(label, reason)` pairs.
    pub rejected: Vec<(String, RejectReason)>,
}

/// Classifies design-tool components by naming convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentFilter;

impl ComponentFilter {
    pub fn new() -> Self {
        Self
    }

    /// Decide whether a single component is an icon.
    pub fn classify(&self, component: &RawComponent) -> FilterDecision {
        match component.frame() {
            Some(frame) if contains_digit(frame) => FilterDecision::Rejected {
                label: frame.to_string(),
                reason: RejectReason::DigitInFrame,
            },
            Some(frame) => FilterDecision::Accepted {
                id: component.id.clone(),
                identifier: format!(
                    "{}-{}",
                    component.name.replace(VARIANT_PREFIX, ""),
                    slugify(frame)
                ),
            },
            None => self.classify_single(component),
        }
    }

    fn classify_single(&self, component: &RawComponent) -> FilterDecision {
        let name = &component.name;
        let rejected = |reason| FilterDecision::Rejected {
            label: name.clone(),
            reason,
        };

        if !SINGLE_FORMAT.is_match(name) {
            return rejected(RejectReason::MalformedName);
        }
        let segment = name.split('/').nth(1).unwrap_or_default();
        if contains_digit(segment) {
            return rejected(RejectReason::DigitInName);
        }

        FilterDecision::Accepted {
            id: component.id.clone(),
            identifier: slugify(name),
        }
    }

    /// Classify every component, reporting each rejection.
    pub fn partition<'a>(
        &self,
        components: impl IntoIterator<Item = &'a RawComponent>,
    ) -> FilterOutcome {
        components
            .into_iter()
            .fold(FilterOutcome::default(), |mut outcome, component| {
                match self.classify(component) {
                    FilterDecision::Accepted { id, identifier } => {
                        outcome.accepted.push((id, identifier));
                    }
                    FilterDecision::Rejected { label, reason } => {
                        tracing::info!(%label, %reason, "discarding component");
                        outcome.rejected.push((label, reason));
                    }
                }
                outcome
            })
    }
}
