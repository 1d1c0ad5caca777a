use pos_core::family::{is_non_empty, is_uniform_size};
use pos_core::{Element, ElementSet, ErrorInfo, PosError, SetFamily};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Witness that a candidate bases family breaks the exchange axiom.
///
/// Removing `element` from `from` cannot be repaired by any element of
/// `towards ∖ from` without leaving the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeViolation {
    /// Basis losing `element`.
    pub from: ElementSet,
    /// Basis supplying the replacement candidates.
    pub towards: ElementSet,
    /// Element of `from ∖ towards` with no exchange partner.
    pub element: Element,
}

fn require_member(set: &ElementSet, family: &SetFamily) -> Result<(), PosError> {
    if family.contains(set) {
        return Ok(());
    }
    Err(PosError::Matroid(
        ErrorInfo::new("set-not-in-family", "candidate set is not a member of the family")
            .with_set("set", set)
            .with_family("family", family),
    ))
}

fn unexchangeable_element(
    from: &ElementSet,
    towards: &ElementSet,
    family: &SetFamily,
) -> Option<Element> {
    let partners = towards.difference(from);
    from.difference(towards).into_iter().find(|&a| {
        !partners
            .iter()
            .any(|&b| family.contains(&from.exchange(a, b)))
    })
}

/// Checks the exchange axiom for one ordered pair: every `a ∈ A ∖ B` must
/// have some `b ∈ B ∖ A` with `(A − a) ∪ b` in the family.
///
/// Both sets must be members of `family`.
pub fn has_exchange(a: &ElementSet, b: &ElementSet, family: &SetFamily) -> Result<bool, PosError> {
    require_member(a, family)?;
    require_member(b, family)?;
    Ok(unexchangeable_element(a, b, family).is_none())
}

/// Returns the first ordered pair (in family order) that cannot exchange.
pub fn find_exchange_violation(family: &SetFamily) -> Option<ExchangeViolation> {
    for from in family {
        for towards in family {
            if from == towards {
                continue;
            }
            if let Some(element) = unexchangeable_element(from, towards, family) {
                trace!(?from, ?towards, element, "basis exchange fails");
                return Some(ExchangeViolation {
                    from: from.clone(),
                    towards: towards.clone(),
                    element,
                });
            }
        }
    }
    None
}

/// Returns whether every ordered pair of members exchanges. Families with
/// fewer than two members pass vacuously.
pub fn has_basis_exchange_property(family: &SetFamily) -> bool {
    find_exchange_violation(family).is_none()
}

/// Returns whether `family` is the bases family of a matroid: either empty,
/// or uniform in size and closed under basis exchange.
pub fn is_matroid_bases(family: &SetFamily) -> bool {
    if !is_non_empty(family) {
        return true;
    }
    matches!(is_uniform_size(family), Ok(true)) && has_basis_exchange_property(family)
}
