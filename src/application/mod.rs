pub mod view_coordinator;
