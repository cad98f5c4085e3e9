//! Cost aggregation.

use crate::equipment::EquipmentItem;

/// Total cost of an equipment list: Σ quantity × unit price.
///
/// Pure and order-independent. Restricting the sum to a user-selected
/// subset is the caller's concern (filter first, then total); the
/// aggregator itself sums whatever it is given.
pub fn total_cost(items: &[EquipmentItem]) -> f64 {
    items.iter().map(EquipmentItem::line_total).sum()
}
