mod dashboard;
pub use dashboard::Dashboard;

mod sources;
pub use sources::Sources;
