mod dashboard;
pub use dashboard::Dashboard;

mod findings;
pub use findings::Findings;

mod prompts;
pub use prompts::Prompts;
