use crate::encapsulate::{EncapsulateOptions, EncapsulationPlan, plan_encapsulation};
use crate::error::BatchError;
use crate::naming::DerivedNames;
use fieldfix_syntax::SyntaxTree;
use fieldfix_types::Violation;
use fieldfix_types::fix::FixStatus;
use tracing::{debug, warn};

/// Encapsulate several fields at once.
///
/// Every position is resolved against `tree` before anything is applied. The batch fails as a
/// whole if any target cannot be planned or if two targets resolve to the same declaration.
pub fn encapsulate_all(
    tree: &SyntaxTree,
    positions: &[usize],
    opts: &EncapsulateOptions,
) -> Result<SyntaxTree, BatchError> {
    let mut plans = Vec::with_capacity(positions.len());
    for &position in positions {
        let plan = plan_encapsulation(tree, position, opts)
            .map_err(|source| BatchError::Target { position, source })?;
        plans.push(plan);
    }
    apply_plans(tree, plans)
}

fn apply_plans(
    tree: &SyntaxTree,
    mut plans: Vec<EncapsulationPlan>,
) -> Result<SyntaxTree, BatchError> {
    plans.sort_by(|a, b| a.path.cmp(&b.path));

    // In sorted order a nested or repeated path directly follows its ancestor.
    for pair in plans.windows(2) {
        if pair[1].path.starts_with(&pair[0].path) {
            return Err(BatchError::OverlappingTargets {
                first: pair[0].position,
                second: pair[1].position,
            });
        }
    }

    // Later targets first, so the paths of earlier ones stay valid.
    let mut current = tree.clone();
    for plan in plans.iter().rev() {
        current = current.replace_at(&plan.path, plan.replacement())?;
    }
    Ok(current)
}

/// What happened to one violation in [`fix_violations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationFix {
    pub violation: Violation,
    pub status: FixStatus,
    pub message: Option<String>,
    pub names: Option<DerivedNames>,
}

#[derive(Debug, Clone)]
pub struct FixOutcome {
    /// The rewritten tree, or a clone of the input when nothing was applied.
    pub tree: SyntaxTree,
    /// One entry per input violation, in input order.
    pub fixes: Vec<ViolationFix>,
}

impl FixOutcome {
    pub fn applied(&self) -> usize {
        self.fixes
            .iter()
            .filter(|f| f.status == FixStatus::Applied)
            .count()
    }
}

/// Encapsulate every violation that can be planned.
///
/// Violations whose declaration cannot be rewritten are `skipped`. The rest are applied together;
/// if they overlap, all of them are `failed` and the tree is returned unchanged.
pub fn fix_violations(
    tree: &SyntaxTree,
    violations: &[Violation],
    opts: &EncapsulateOptions,
) -> FixOutcome {
    let mut fixes = Vec::with_capacity(violations.len());
    let mut plans = Vec::new();
    let mut planned = Vec::new();

    for (i, violation) in violations.iter().enumerate() {
        match plan_encapsulation(tree, violation.position(), opts) {
            Ok(plan) => {
                planned.push(i);
                fixes.push(ViolationFix {
                    violation: violation.clone(),
                    status: FixStatus::Applied,
                    message: None,
                    names: Some(plan.names.clone()),
                });
                plans.push(plan);
            }
            Err(err) => {
                debug!(field = %violation.name, error = %err, "skipping violation");
                fixes.push(ViolationFix {
                    violation: violation.clone(),
                    status: FixStatus::Skipped,
                    message: Some(err.to_string()),
                    names: None,
                });
            }
        }
    }

    if plans.is_empty() {
        return FixOutcome {
            tree: tree.clone(),
            fixes,
        };
    }

    match apply_plans(tree, plans) {
        Ok(rewritten) => FixOutcome {
            tree: rewritten,
            fixes,
        },
        Err(err) => {
            warn!(error = %err, "batch rejected; no violations fixed");
            for i in planned {
                fixes[i].status = FixStatus::Failed;
                fixes[i].message = Some(err.to_string());
                fixes[i].names = None;
            }
            FixOutcome {
                tree: tree.clone(),
                fixes,
            }
        }
    }
}
