pub mod dashboard;
pub mod export;
pub mod formula;
pub mod notification;
pub mod project;
pub mod season;
pub mod staff;
pub mod task;
