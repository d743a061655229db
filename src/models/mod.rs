//! Entity models
//!
//! One module per entity kind. Each defines the stored record, the
//! creation payload, and (where updates exist) the merge-patch payload
//! whose fields are all `Option` — `None` means "not supplied".

pub mod alert;
pub mod budget_history;
pub mod customer;
pub mod employee;
pub mod project;
pub mod project_kpi;
pub mod task;

pub use alert::{Alert, AlertUpdate, NewAlert};
pub use budget_history::{BudgetHistory, NewBudgetHistory};
pub use customer::{Customer, CustomerUpdate, NewCustomer};
pub use employee::{Employee, EmployeePreferences, EmployeeUpdate, NewEmployee};
pub use project::{NewProject, Project, ProjectUpdate};
pub use project_kpi::{KpiSignals, NewProjectKpi, ProjectKpi, ProjectKpiUpdate};
pub use task::{NewTask, Task, TaskUpdate};
