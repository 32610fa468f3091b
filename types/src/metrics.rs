//! Derived statistics over a fetched employee collection.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::employee::{DepartmentKey, EmployeeRecord};

/// What to do with records that carry no department.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDepartment {
    /// Group them under [`DepartmentKey::Unassigned`], counted as one department.
    #[default]
    Bucket,
    /// Leave them out of the department set. They still count toward the total.
    Exclude,
}

impl MissingDepartment {
    fn key_for(self, record: &EmployeeRecord) -> Option<DepartmentKey> {
        match (record.department_key(), self) {
            (Some(key), _) => Some(key),
            (None, MissingDepartment::Bucket) => Some(DepartmentKey::Unassigned),
            (None, MissingDepartment::Exclude) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMetrics {
    pub total: usize,
    /// Distinct departments in first-seen order. The order is for display only.
    pub departments: Vec<DepartmentKey>,
}

impl EmployeeMetrics {
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    pub fn department_set(&self) -> HashSet<&DepartmentKey> {
        self.departments.iter().collect()
    }
}

/// Count the records and collect their distinct departments.
///
/// Department labels compare exactly: no trimming, no case folding.
pub fn aggregate(records: &[EmployeeRecord], missing: MissingDepartment) -> EmployeeMetrics {
    let mut seen = HashSet::new();
    let departments = records
        .iter()
        .filter_map(|record| missing.key_for(record))
        .filter(|key| seen.insert(key.clone()))
        .collect();

    EmployeeMetrics {
        total: records.len(),
        departments,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentShare {
    pub department: DepartmentKey,
    pub employees: usize,
}

/// Employees per department, in first-seen order.
pub fn distribution(records: &[EmployeeRecord], missing: MissingDepartment) -> Vec<DepartmentShare> {
    let mut index: HashMap<DepartmentKey, usize> = HashMap::new();
    let mut shares: Vec<DepartmentShare> = Vec::new();

    for key in records.iter().filter_map(|record| missing.key_for(record)) {
        match index.get(&key) {
            Some(&i) => shares[i].employees += 1,
            None => {
                index.insert(key.clone(), shares.len());
                shares.push(DepartmentShare {
                    department: key,
                    employees: 1,
                });
            }
        }
    }

    shares
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn record() -> impl Strategy<Value = EmployeeRecord> {
        prop::option::of("[A-Ca-c ]{0,3}").prop_map(|department| EmployeeRecord {
            department,
            ..Default::default()
        })
    }

    fn policy() -> impl Strategy<Value = MissingDepartment> {
        prop_oneof![Just(MissingDepartment::Bucket), Just(MissingDepartment::Exclude)]
    }

    proptest! {
        /// Nothing is filtered out of the total.
        #[test]
        fn total_is_input_length(records in prop::collection::vec(record(), 0..64), missing in policy()) {
            prop_assert_eq!(aggregate(&records, missing).total, records.len());
        }

        #[test]
        fn departments_never_exceed_total(records in prop::collection::vec(record(), 0..64), missing in policy()) {
            let metrics = aggregate(&records, missing);
            prop_assert!(metrics.department_count() <= metrics.total);
        }

        #[test]
        fn departments_are_distinct(records in prop::collection::vec(record(), 0..64), missing in policy()) {
            let metrics = aggregate(&records, missing);
            prop_assert_eq!(metrics.department_set().len(), metrics.department_count());
        }

        #[test]
        fn aggregate_is_idempotent(records in prop::collection::vec(record(), 0..64), missing in policy()) {
            let a = aggregate(&records, missing);
            let b = aggregate(&records, missing);
            prop_assert_eq!(a.total, b.total);
            prop_assert_eq!(a.department_set(), b.department_set());
        }

        /// With every record bucketed, the shares add back up to the total.
        #[test]
        fn bucketed_shares_sum_to_total(records in prop::collection::vec(record(), 0..64)) {
            let sum: usize = distribution(&records, MissingDepartment::Bucket)
                .iter()
                .map(|s| s.employees)
                .sum();
            prop_assert_eq!(sum, records.len());
        }
    }
}
