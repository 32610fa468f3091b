mod components;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::{AdminDashboard, HrDashboard};

mod employees;
pub use employees::{AdminEmployees, HrEmployees, Team};

mod departments;
pub use departments::Departments;

mod profile;
pub use profile::Profile;
