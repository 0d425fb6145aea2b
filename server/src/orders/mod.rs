//! Order Workflow Module
//!
//! Business rules for the order lifecycle, kept out of the HTTP and
//! persistence layers:
//!
//! - **status_priority**: fulfilment-priority ranking for the admin list
//! - **can_transition_to**: forward-only lifecycle graph
//! - **sort_for_fulfilment**: the admin list ordering (pending work first)

use crate::db::models::{Order, OrderStatus};
use std::cmp::Ordering;


/// Fulfilment-priority rank for admin views
///
/// Orders needing action sort first: `New` (1), then `Shipped` (2),
/// then `Delivered` (3).
pub fn status_priority(status: OrderStatus) -> u8 {
    match status {
        OrderStatus::New => 1,
        OrderStatus::Shipped => 2,
        OrderStatus::Delivered => 3,
    }
}

/// Forward-only lifecycle graph: New → Shipped → Delivered
///
/// `Delivered` is terminal. The customer-facing delivery confirmation
/// consults this graph; the admin status endpoint deliberately does not
/// (any valid status value is accepted there, idempotently).
pub fn can_transition_to(from: OrderStatus, to: OrderStatus) -> bool {
    use OrderStatus::*;
    matches!((from, to), (New, Shipped) | (Shipped, Delivered))
}

/// Dual-key comparator for the admin fulfilment view
///
/// Primary key: status priority ascending (pending work first).
/// Secondary key: date descending (newest first within a status).
pub fn compare_for_admin_list(a: &Order, b: &Order) -> Ordering {
    match status_priority(a.status).cmp(&status_priority(b.status)) {
        Ordering::Equal => b.date.cmp(&a.date),
        other => other,
    }
}

/// Sort orders for the admin fulfilment view
pub fn sort_for_fulfilment(orders: &mut [Order]) {
    orders.sort_by(compare_for_admin_list);
}
