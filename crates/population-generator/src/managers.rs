//! Manager assignment pass.
//!
//! Runs once the whole population exists. Every employee gets a manager
//! picked uniformly from all other employees; nothing else is enforced, so
//! the result can contain cycles and unbounded spans of control.

use rand::Rng;
use std::collections::HashMap;
use synth_core::Employee;
use uuid::Uuid;

/// Assign every employee a manager drawn uniformly from the rest of the
/// population.
///
/// With fewer than two employees there is nobody to pick and every
/// `manager_id` is left as `None`.
pub fn assign_managers<R: Rng>(employees: &mut [Employee], rng: &mut R) {
    let count = employees.len();
    if count < 2 {
        for employee in employees.iter_mut() {
            employee.manager_id = None;
        }
        return;
    }

    let ids: Vec<Uuid> = employees.iter().map(|e| e.employee_id).collect();

    for (position, employee) in employees.iter_mut().enumerate() {
        // Draw from the other `count - 1` slots, skipping over our own.
        let mut pick = rng.gen_range(0..count - 1);
        if pick >= position {
            pick += 1;
        }
        employee.manager_id = Some(ids[pick]);
    }
}

/// Number of direct reports per manager id, for summaries.
pub fn direct_report_counts(employees: &[Employee]) -> HashMap<Uuid, usize> {
    let mut counts = HashMap::new();
    for manager in employees.iter().filter_map(|e| e.manager_id) {
        *counts.entry(manager).or_insert(0) += 1;
    }
    counts
}
