mod dashboard;
mod login;
mod milestones;

pub use dashboard::Dashboard;
pub use login::Login;
pub use milestones::Milestones;
